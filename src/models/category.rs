//! Module containg category model and category extraction from a batch
use std::collections::HashSet;

use models::{CategoryId, Product, ShopId};

/// Product category owned by a shop. Categories reach the core both
/// embedded on products and listed on the shop; the two agree by identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub shop_id: ShopId,
}

/// Collects the distinct categories present in a product batch, sorted by
/// display name ascending. Products without a category contribute nothing.
pub fn extract_categories(products: &[Product]) -> Vec<Category> {
    let mut seen = HashSet::new();
    let mut categories = vec![];
    for product in products {
        if let Some(ref category) = product.category {
            if seen.insert(category.id) {
                categories.push(category.clone());
            }
        }
    }
    categories.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{ProductId, ShopId};

    fn create_product(id: i32, category: Option<Category>) -> Product {
        Product {
            id: ProductId(id),
            shop_id: ShopId(1),
            name: format!("Product {}", id),
            description: "".to_string(),
            price: 10.0,
            category: category,
            attributes: None,
        }
    }

    fn create_category(id: i32, name: &str) -> Category {
        Category {
            id: CategoryId(id),
            name: name.to_string(),
            shop_id: ShopId(1),
        }
    }

    #[test]
    fn extracts_distinct_categories_sorted_by_name() {
        let products = vec![
            create_product(1, Some(create_category(2, "Tisanes"))),
            create_product(2, Some(create_category(1, "infusions"))),
            create_product(3, Some(create_category(2, "Tisanes"))),
            create_product(4, None),
            create_product(5, Some(create_category(3, "Sachets"))),
        ];
        let categories = extract_categories(&products);
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["infusions", "Sachets", "Tisanes"]);
    }

    #[test]
    fn empty_batch_yields_no_categories() {
        assert!(extract_categories(&[]).is_empty());
    }

    #[test]
    fn extraction_is_deterministic() {
        let products = vec![
            create_product(1, Some(create_category(7, "Ambrées"))),
            create_product(2, Some(create_category(5, "Blondes"))),
        ];
        assert_eq!(extract_categories(&products), extract_categories(&products));
    }
}
