use serde::{Deserialize, Deserializer, Serialize};

/// A single sale record, keyed by `product_id`.
///
/// Deserialization is lenient: missing fields take their default and a
/// `null` name becomes the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sale {
    pub product_id: i32,
    #[serde(deserialize_with = "null_as_empty")]
    pub product_name: String,
    pub price: i32,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Sale {
    /// Creates a new sale record.
    pub fn new(product_id: i32, product_name: impl Into<String>, price: i32) -> Self {
        Self {
            product_id,
            product_name: product_name.into(),
            price,
        }
    }
}

/// What an upsert did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The record was appended at `index`.
    Inserted { index: usize },
    /// An existing record at `index` was replaced.
    Replaced { index: usize },
}

impl SaveOutcome {
    /// Position of the saved record in the collection.
    pub fn index(&self) -> usize {
        match self {
            SaveOutcome::Inserted { index } | SaveOutcome::Replaced { index } => *index,
        }
    }

    /// Returns true if an existing record was overwritten.
    pub fn is_replaced(&self) -> bool {
        matches!(self, SaveOutcome::Replaced { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_json_shape() {
        let sale = Sale::new(1, "Widget", 10);
        let json = serde_json::to_value(&sale).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "product_id": 1, "product_name": "Widget", "price": 10 })
        );
    }

    #[test]
    fn test_sale_deserializes_from_snake_case() {
        let sale: Sale =
            serde_json::from_str(r#"{"product_id":7,"product_name":"Gadget","price":-3}"#).unwrap();

        assert_eq!(sale, Sale::new(7, "Gadget", -3));
    }

    #[test]
    fn test_sale_missing_fields_default() {
        let sale: Sale = serde_json::from_str(r#"{"product_id":1}"#).unwrap();
        assert_eq!(sale, Sale::new(1, "", 0));

        let sale: Sale = serde_json::from_str("{}").unwrap();
        assert_eq!(sale, Sale::default());
    }

    #[test]
    fn test_sale_null_name_is_empty() {
        let sale: Sale =
            serde_json::from_str(r#"{"product_id":1,"product_name":null,"price":5}"#).unwrap();
        assert_eq!(sale, Sale::new(1, "", 5));
    }

    #[test]
    fn test_sale_rejects_wrong_type() {
        let result = serde_json::from_str::<Sale>(r#"{"product_id":"one"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_save_outcome_index() {
        assert_eq!(SaveOutcome::Inserted { index: 3 }.index(), 3);
        assert_eq!(SaveOutcome::Replaced { index: 0 }.index(), 0);
        assert!(SaveOutcome::Replaced { index: 0 }.is_replaced());
        assert!(!SaveOutcome::Inserted { index: 0 }.is_replaced());
    }
}
