//! Product catalog access.
//!
//! [`CatalogClient`] performs the single outbound read against the public
//! catalog API. [`parse_products`] turns the untrusted body into bounded
//! [`Product`] values.

pub mod client;
pub mod model;

pub use client::{
    CatalogClient, CatalogConfig, CatalogSource, DEFAULT_BASE_URL, DEFAULT_PRODUCT_LIMIT,
    DEFAULT_REQUEST_TIMEOUT,
};
pub use model::{Product, ProductId, Rating, parse_products};
