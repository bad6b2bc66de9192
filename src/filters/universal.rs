//! Universal filter passes, applied identically across verticals
use models::attributes::StockStatus;
use models::stock::{stock_level, LOW_STOCK_THRESHOLD};
use models::{CategoryId, Product};

/// Category identity pass. An absent criterion passes everything.
pub fn matches_category(product: &Product, category_id: Option<CategoryId>) -> bool {
    match category_id {
        Some(id) => product
            .category
            .as_ref()
            .map(|category| category.id == id)
            .unwrap_or(false),
        None => true,
    }
}

/// Case-insensitive substring search over name, description and the raw
/// serialized payload. Search is lexical over the stored text, not semantic
/// over typed fields. A blank term passes everything.
pub fn matches_search(product: &Product, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    if product.name.to_lowercase().contains(&term) {
        return true;
    }
    if product.description.to_lowercase().contains(&term) {
        return true;
    }
    product
        .attributes
        .as_ref()
        .map(|raw| raw.to_lowercase().contains(&term))
        .unwrap_or(false)
}

/// Price range pass, independently bounded
pub fn matches_price(product: &Product, min: Option<f64>, max: Option<f64>) -> bool {
    if let Some(min) = min {
        if product.price < min {
            return false;
        }
    }
    if let Some(max) = max {
        if product.price > max {
            return false;
        }
    }
    true
}

/// Stock bucket pass. A product without a stock field matches no bucket:
/// unknown stock stays unknown here, exactly as in the badge.
pub fn matches_stock_status(product: &Product, status: Option<StockStatus>) -> bool {
    let status = match status {
        Some(status) => status,
        None => return true,
    };
    let level = match stock_level(product) {
        Some(level) => level,
        None => return false,
    };
    match status {
        StockStatus::InStock => level > LOW_STOCK_THRESHOLD,
        StockStatus::LowStock => level > 0 && level <= LOW_STOCK_THRESHOLD,
        StockStatus::OutOfStock => level == 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{Category, ProductId, ShopId};

    fn create_product(name: &str, description: &str, price: f64, attributes: Option<String>) -> Product {
        Product {
            id: ProductId(1),
            shop_id: ShopId(1),
            name: name.to_string(),
            description: description.to_string(),
            price: price,
            category: None,
            attributes: attributes,
        }
    }

    fn with_stock(stock: u32) -> Product {
        create_product("Thé vert", "", 8.0, Some(json!({ "stock": stock }).to_string()))
    }

    #[test]
    fn category_pass_requires_identity_match() {
        let mut product = create_product("Stout", "", 5.0, None);
        assert!(matches_category(&product, None));
        assert!(!matches_category(&product, Some(CategoryId(3))));
        product.category = Some(Category {
            id: CategoryId(3),
            name: "Brunes".to_string(),
            shop_id: ShopId(1),
        });
        assert!(matches_category(&product, Some(CategoryId(3))));
        assert!(!matches_category(&product, Some(CategoryId(4))));
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_description() {
        let product = create_product("Thé Vert Sencha", "Un grand classique japonais", 8.0, None);
        assert!(matches_search(&product, "sencha"));
        assert!(matches_search(&product, "JAPONAIS"));
        assert!(!matches_search(&product, "darjeeling"));
    }

    #[test]
    fn search_reaches_the_raw_payload_text() {
        let product = create_product(
            "IPA",
            "",
            4.5,
            Some(r#"{"degre_alcool": 6.5, "type_houblon": "Cascade"}"#.to_string()),
        );
        assert!(matches_search(&product, "cascade"));
        // Lexical over the stored text: field names match too.
        assert!(matches_search(&product, "degre_alcool"));
    }

    #[test]
    fn blank_search_term_passes_everything() {
        let product = create_product("IPA", "", 4.5, None);
        assert!(matches_search(&product, ""));
        assert!(matches_search(&product, "   "));
    }

    #[test]
    fn price_bounds_are_independent() {
        let product = create_product("Crème", "", 24.9, None);
        assert!(matches_price(&product, None, None));
        assert!(matches_price(&product, Some(20.0), None));
        assert!(matches_price(&product, None, Some(30.0)));
        assert!(matches_price(&product, Some(20.0), Some(30.0)));
        assert!(!matches_price(&product, Some(25.0), None));
        assert!(!matches_price(&product, None, Some(20.0)));
    }

    #[test]
    fn stock_buckets_are_disjoint_for_defined_stock() {
        for stock in &[0u32, 1, 5, 10, 11, 25] {
            let product = with_stock(*stock);
            let buckets = [StockStatus::InStock, StockStatus::LowStock, StockStatus::OutOfStock];
            let matching = buckets
                .iter()
                .filter(|bucket| matches_stock_status(&product, Some(**bucket)))
                .count();
            assert_eq!(matching, 1, "stock {} should fall in exactly one bucket", stock);
        }
    }

    #[test]
    fn stock_bucket_boundaries() {
        assert!(matches_stock_status(&with_stock(0), Some(StockStatus::OutOfStock)));
        assert!(matches_stock_status(&with_stock(10), Some(StockStatus::LowStock)));
        assert!(matches_stock_status(&with_stock(11), Some(StockStatus::InStock)));
    }

    #[test]
    fn unknown_stock_matches_no_bucket() {
        let product = create_product("Baume", "", 12.0, Some(json!({ "type_peau": "sèche" }).to_string()));
        for bucket in &[StockStatus::InStock, StockStatus::LowStock, StockStatus::OutOfStock] {
            assert!(!matches_stock_status(&product, Some(*bucket)));
        }
        assert!(matches_stock_status(&product, None));
    }
}
