//! Recovery of the untyped attribute record from the raw product payload
use serde_json::{self, Map, Value};

use models::attributes::schema::STOCK;
use models::Product;

/// Untyped key/value record recovered from a product's serialized payload.
/// Created fresh on every parse call and discarded after use.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedAttributes(Map<String, Value>);

impl ParsedAttributes {
    pub fn has_field(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn f64_field(&self, name: &str) -> Option<f64> {
        self.0.get(name).and_then(Value::as_f64)
    }

    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    pub fn bool_field(&self, name: &str) -> Option<bool> {
        self.0.get(name).and_then(Value::as_bool)
    }

    pub fn uint_field(&self, name: &str) -> Option<u32> {
        self.0.get(name).and_then(Value::as_u64).map(|v| v as u32)
    }

    /// Stock units, if the payload carries the universal stock field
    pub fn stock(&self) -> Option<u32> {
        self.uint_field(STOCK)
    }
}

/// Recovers the untyped attribute record of a product.
///
/// An absent payload yields `None`. A malformed or non-object payload also
/// yields `None` with a diagnostic log; parsing never fails to the caller.
pub fn parse_attributes(product: &Product) -> Option<ParsedAttributes> {
    let raw = match product.attributes {
        Some(ref raw) => raw,
        None => return None,
    };
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Some(ParsedAttributes(map)),
        Ok(_) => {
            warn!("Attribute payload of product {} is not an object", product.id);
            None
        }
        Err(err) => {
            warn!("Malformed attribute payload on product {}: {}", product.id, err);
            None
        }
    }
}
