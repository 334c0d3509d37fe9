//! Services that feed state to the pages.
//!
//! - [`products`] - the rate-limited, timed-out and sanitized catalog fetch

pub mod products;

pub use products::{FetchError, FetchState, PRODUCTS_API_KEY, ProductsFeed, ProductsHandle};
