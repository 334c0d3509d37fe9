//! Themed terminal components shared by the pages.
//!
//! Components are plain functions from state to lines of text. They never
//! mutate theme or catalog state.

pub mod common;
pub mod header;
pub mod layout;
pub mod product_card;

pub use common::Painter;
pub use header::render_header;
pub use layout::{grid, render_layout};
pub use product_card::render_product_card;
