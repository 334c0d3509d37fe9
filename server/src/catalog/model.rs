use crate::common::HttpError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub const MAX_TITLE_CHARS: usize = 100;
pub const MAX_DESCRIPTION_CHARS: usize = 500;
pub const MAX_CATEGORY_CHARS: usize = 50;
pub const MAX_RATING: f64 = 5.0;

pub const FALLBACK_TITLE: &str = "Unknown Product";
pub const FALLBACK_DESCRIPTION: &str = "";
pub const FALLBACK_CATEGORY: &str = "uncategorized";

/// Catalog identifier, numeric for the public API but kept as text when the
/// upstream sends a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(u64),
    Text(String),
}

impl Default for ProductId {
    fn default() -> Self {
        ProductId::Number(0)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(id) => write!(f, "{id}"),
            ProductId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: f64,
}

/// A catalog entry after ingress coercion. Every field is within its bounds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub image: String,
    pub rating: Rating,
}

impl Product {
    /// Build a product from an untrusted JSON element.
    ///
    /// Missing or malformed fields never fail: text falls back to fixed
    /// literals and numbers are clamped, with 0 for anything non-numeric.
    pub fn from_raw(raw: &Value) -> Self {
        let rating = raw.get("rating");

        Self {
            id: coerce_id(raw.get("id")),
            title: capped_text(raw.get("title"), MAX_TITLE_CHARS, FALLBACK_TITLE),
            description: capped_text(
                raw.get("description"),
                MAX_DESCRIPTION_CHARS,
                FALLBACK_DESCRIPTION,
            ),
            category: capped_text(raw.get("category"), MAX_CATEGORY_CHARS, FALLBACK_CATEGORY),
            price: number(raw.get("price")).map_or(0.0, |price| price.max(0.0)),
            image: raw
                .get("image")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            rating: Rating {
                rate: number(rating.and_then(|r| r.get("rate")))
                    .map_or(0.0, |rate| rate.clamp(0.0, MAX_RATING)),
                count: number(rating.and_then(|r| r.get("count")))
                    .map_or(0.0, |count| count.max(0.0)),
            },
        }
    }
}

/// Validate the response body shape and coerce every element.
///
/// The body must be a JSON array; anything else is a format error.
pub fn parse_products(body: Value) -> Result<Vec<Product>, HttpError> {
    match body {
        Value::Array(items) => Ok(items.iter().map(Product::from_raw).collect()),
        other => Err(HttpError::InvalidResponse {
            expected: "array of products".to_string(),
            actual: json_kind(&other).to_string(),
        }),
    }
}

fn coerce_id(value: Option<&Value>) -> ProductId {
    match value {
        Some(Value::Number(n)) => n.as_u64().map_or_else(ProductId::default, ProductId::Number),
        Some(Value::String(s)) => ProductId::Text(s.clone()),
        _ => ProductId::default(),
    }
}

fn capped_text(value: Option<&Value>, max_chars: usize, fallback: &str) -> String {
    match value.and_then(Value::as_str) {
        Some(text) if !text.is_empty() => text.chars().take(max_chars).collect(),
        _ => fallback.to_string(),
    }
}

fn number(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_out_of_range_fields_are_clamped() {
        let raw = json!({
            "title": "x".repeat(200),
            "price": -5,
            "rating": { "rate": 9, "count": -1 }
        });

        let product = Product::from_raw(&raw);
        assert_eq!(product.title.chars().count(), 100);
        assert_eq!(product.price, 0.0);
        assert_eq!(product.rating.rate, 5.0);
        assert_eq!(product.rating.count, 0.0);
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let product = Product::from_raw(&json!({}));

        assert_eq!(product.id, ProductId::Number(0));
        assert_eq!(product.title, FALLBACK_TITLE);
        assert_eq!(product.description, "");
        assert_eq!(product.category, FALLBACK_CATEGORY);
        assert_eq!(product.price, 0.0);
        assert_eq!(product.image, "");
        assert_eq!(product.rating, Rating::default());
    }

    #[test]
    fn test_non_numeric_values_become_zero() {
        let product = Product::from_raw(&json!({
            "title": "",
            "price": "19.99",
            "rating": { "rate": "4.5", "count": null }
        }));

        assert_eq!(product.title, FALLBACK_TITLE);
        assert_eq!(product.price, 0.0);
        assert_eq!(product.rating.rate, 0.0);
        assert_eq!(product.rating.count, 0.0);
    }

    #[test]
    fn test_well_formed_product_is_preserved() {
        let raw = json!({
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        });

        let product = Product::from_raw(&raw);
        assert_eq!(product.id, ProductId::Number(1));
        assert_eq!(product.title, "Fjallraven - Foldsack No. 1 Backpack");
        assert_eq!(product.price, 109.95);
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.rating.rate, 3.9);
        assert_eq!(product.rating.count, 120.0);
    }

    #[test]
    fn test_caps_count_characters_not_bytes() {
        let product = Product::from_raw(&json!({ "category": "é".repeat(80) }));
        assert_eq!(product.category.chars().count(), 50);
    }

    #[test]
    fn test_parse_products_requires_array() {
        assert!(matches!(
            parse_products(json!({ "products": [] })),
            Err(HttpError::InvalidResponse { .. })
        ));
        assert_eq!(parse_products(json!([{}, {}])).unwrap().len(), 2);
    }
}
