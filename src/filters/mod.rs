//! In-memory filter pipeline over a product batch
//!
//! All passes are pure AND-composed predicates; order only matters for
//! cost (cheap structural passes run first) and survivors keep the batch
//! order, so repeated evaluation of the same inputs is stable.

pub mod universal;
pub mod vertical;

pub use self::universal::*;
pub use self::vertical::*;

use models::attributes::{parse_attributes, FilterCriteria, TypedAttributes};
use models::{CategoryId, Product, Vertical};

/// Evaluation path chosen for one filtering request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterStrategy {
    /// Nothing but a category constraint: the cheapest local pass
    CategoryOnly,
    /// Universal constraints only: full local pipeline
    Local,
    /// Vertical constraints or caller-requested authoritative evaluation
    Remote,
}

impl FilterStrategy {
    /// Pure decision from the shape of the request. Any populated
    /// vertical group, or an explicit remote request, delegates to the
    /// authoritative collaborator; otherwise the request stays local.
    pub fn select(search_term: &str, criteria: &FilterCriteria, remote_requested: bool) -> FilterStrategy {
        if remote_requested || criteria.has_vertical_criteria() {
            return FilterStrategy::Remote;
        }
        if search_term.trim().is_empty() && !criteria.has_price_bounds() && criteria.stock_status.is_none() {
            FilterStrategy::CategoryOnly
        } else {
            FilterStrategy::Local
        }
    }
}

/// Applies every pass in fixed order: category, search, price, stock
/// status, vertical predicates. Survivors keep the batch order.
pub fn filter_local(
    products: &[Product],
    vertical: Vertical,
    category_id: Option<CategoryId>,
    search_term: &str,
    criteria: &FilterCriteria,
) -> Vec<Product> {
    products
        .iter()
        .filter(|product| matches_category(product, category_id))
        .filter(|product| matches_search(product, search_term))
        .filter(|product| matches_price(product, criteria.price_min, criteria.price_max))
        .filter(|product| matches_stock_status(product, criteria.stock_status))
        .filter(|product| {
            let parsed = parse_attributes(product);
            let attrs = TypedAttributes::classify(parsed.as_ref());
            matches_vertical(vertical, &attrs, criteria)
        })
        .cloned()
        .collect()
}

/// Narrowest safe pass, the last resort of the fallback chain
pub fn filter_by_category(products: &[Product], category_id: Option<CategoryId>) -> Vec<Product> {
    products
        .iter()
        .filter(|product| matches_category(product, category_id))
        .cloned()
        .collect()
}
