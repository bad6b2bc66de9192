//! Module containg product model for the catalog batch
use validator::Validate;

use models::validation_rules::*;
use models::{Category, ProductId, ShopId};

/// Catalog product as supplied by the data-loading collaborator.
/// Batches are immutable: the engine never mutates a product, every
/// filtering pass returns a freshly computed list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub shop_id: ShopId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Option<Category>,
    /// Raw serialized attribute payload. Absent for products carrying no
    /// vertical-specific data.
    pub attributes: Option<String>,
}

/// Payload for loading products into a filtering session
#[derive(Serialize, Deserialize, Validate, Clone, Debug)]
pub struct NewProduct {
    pub id: ProductId,
    pub shop_id: ShopId,
    #[validate(custom = "validate_not_empty")]
    pub name: String,
    pub description: String,
    #[validate(custom = "validate_non_negative")]
    pub price: f64,
    pub category: Option<Category>,
    pub attributes: Option<String>,
}

impl From<NewProduct> for Product {
    fn from(payload: NewProduct) -> Self {
        Self {
            id: payload.id,
            shop_id: payload.shop_id,
            name: payload.name,
            description: payload.description,
            price: payload.price,
            category: payload.category,
            attributes: payload.attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn create_new_product(name: &str, price: f64) -> NewProduct {
        NewProduct {
            id: ProductId(1),
            shop_id: ShopId(1),
            name: name.to_string(),
            description: "".to_string(),
            price: price,
            category: None,
            attributes: None,
        }
    }

    #[test]
    fn negative_price_fails_validation() {
        assert!(create_new_product("Triple", -1.0).validate().is_err());
        assert!(create_new_product("Triple", 0.0).validate().is_ok());
        assert!(create_new_product("Triple", 8.5).validate().is_ok());
    }

    #[test]
    fn blank_name_fails_validation() {
        assert!(create_new_product("  ", 5.0).validate().is_err());
    }
}
