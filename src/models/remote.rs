//! Wire models for the remote authoritative filter collaborator
use models::attributes::FilterCriteria;
use models::{Product, ShopId, Vertical};

/// Request sent to the remote filter: the full criteria set plus the raw
/// search term and the resolved category display name (not its id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteFilterRequest {
    pub shop_id: ShopId,
    pub criteria: FilterCriteria,
    pub search_term: String,
    pub category_name: Option<String>,
}

/// Response of the remote filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteFilterResponse {
    pub products: Vec<Product>,
    pub total: i64,
    pub shop_vertical: Vertical,
    pub shop_name: String,
}
