// ── Product domain type ──

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A catalog product. Produced by the remote service, read-only for the UI.
///
/// The default value (all zero / empty) is what the detail view shows
/// before any payload has been adopted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub stock: i64,
    /// Image URL.
    pub picture: String,
    /// Comma-separated tags, verbatim from the API.
    pub tags: String,
}

impl Product {
    /// Adopt a raw payload as a product.
    ///
    /// Only a JSON object qualifies; `null`, arrays and scalars return
    /// `None`. Fields are read leniently: absent or mistyped fields keep
    /// their defaults, and numeric strings are accepted for numbers.
    pub fn from_payload(payload: &Value) -> Option<Self> {
        let obj = payload.as_object()?;
        Some(Self {
            id: int_field(obj, "id"),
            name: text_field(obj, "name"),
            price: number_field(obj, "price"),
            stock: int_field(obj, "stock"),
            picture: text_field(obj, "picture"),
            tags: text_field(obj, "tags"),
        })
    }

    /// Tags split on commas, trimmed, empties dropped.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

fn int_field(obj: &Map<String, Value>, key: &str) -> i64 {
    match obj.get(key) {
        Some(Value::Number(n)) => n.as_i64().unwrap_or_default(),
        Some(Value::String(s)) => s.trim().parse().unwrap_or_default(),
        _ => 0,
    }
}

fn number_field(obj: &Map<String, Value>, key: &str) -> f64 {
    match obj.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or_default(),
        Some(Value::String(s)) => s.trim().parse().unwrap_or_default(),
        _ => 0.0,
    }
}

fn text_field(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn object_payload_is_adopted() {
        let product = Product::from_payload(&json!({ "id": 7, "name": "X", "price": 10 })).unwrap();
        assert_eq!(
            product,
            Product {
                id: 7,
                name: "X".into(),
                price: 10.0,
                ..Product::default()
            }
        );
    }

    #[test]
    fn array_and_null_payloads_are_rejected() {
        assert!(Product::from_payload(&json!([1, 2, 3])).is_none());
        assert!(Product::from_payload(&Value::Null).is_none());
        assert!(Product::from_payload(&json!("product")).is_none());
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let product =
            Product::from_payload(&json!({ "id": "12", "price": "299.5", "stock": "4" })).unwrap();
        assert_eq!(product.id, 12);
        assert!((product.price - 299.5).abs() < f64::EPSILON);
        assert_eq!(product.stock, 4);
    }

    #[test]
    fn tag_list_skips_blanks() {
        let product = Product {
            tags: "phone, apple,,  ".into(),
            ..Product::default()
        };
        assert_eq!(product.tag_list(), vec!["phone", "apple"]);
    }
}
