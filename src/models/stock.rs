//! Stock level facts and the display badge derived from them
use models::attributes::parse_attributes;
use models::Product;

/// Products with fewer units than this are flagged as low stock
pub const LOW_STOCK_THRESHOLD: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeColor {
    Red,
    Orange,
    Green,
    Gray,
}

/// Display badge for a product's stock state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockBadge {
    pub color: BadgeColor,
    pub text: String,
}

/// Stock units of a product, if its payload carries the stock field
pub fn stock_level(product: &Product) -> Option<u32> {
    parse_attributes(product).and_then(|attrs| attrs.stock())
}

/// True iff the payload carries a stock field equal to exactly zero
pub fn is_out_of_stock(product: &Product) -> bool {
    stock_level(product) == Some(0)
}

/// True for any stock strictly under the threshold, zero included.
/// Callers wanting badge precedence must check `is_out_of_stock` first.
pub fn has_low_stock(product: &Product) -> bool {
    match stock_level(product) {
        Some(level) => level < LOW_STOCK_THRESHOLD,
        None => false,
    }
}

/// Stock badge for a product card. Total over all products: out-of-stock,
/// low stock, in stock and unknown are mutually exclusive outcomes.
pub fn stock_badge(product: &Product) -> StockBadge {
    match stock_level(product) {
        Some(0) => StockBadge {
            color: BadgeColor::Red,
            text: "Rupture".to_string(),
        },
        Some(level) if level < LOW_STOCK_THRESHOLD => StockBadge {
            color: BadgeColor::Orange,
            text: format!("Stock faible ({})", level),
        },
        Some(level) => StockBadge {
            color: BadgeColor::Green,
            text: format!("En stock ({})", level),
        },
        None => StockBadge {
            color: BadgeColor::Gray,
            text: "Stock inconnu".to_string(),
        },
    }
}
