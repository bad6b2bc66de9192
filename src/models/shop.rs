//! Module containg shop model and the closed set of business verticals
use std::fmt;
use std::str::FromStr;

use models::{Category, CategoryId, ShopId};

/// Business vertical a shop belongs to. The set is closed: every shop
/// carries exactly one of these four tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vertical {
    Brewery,
    TeaShop,
    BeautyShop,
    HerbShop,
}

impl fmt::Display for Vertical {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Vertical::Brewery => write!(f, "brewery"),
            Vertical::TeaShop => write!(f, "tea_shop"),
            Vertical::BeautyShop => write!(f, "beauty_shop"),
            Vertical::HerbShop => write!(f, "herb_shop"),
        }
    }
}

impl FromStr for Vertical {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brewery" => Ok(Vertical::Brewery),
            "tea_shop" => Ok(Vertical::TeaShop),
            "beauty_shop" => Ok(Vertical::BeautyShop),
            "herb_shop" => Ok(Vertical::HerbShop),
            other => Err(format!("Unknown vertical: {}", other)),
        }
    }
}

/// Shop metadata as supplied by the data-loading collaborator.
/// Immutable for the lifetime of a filtering session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub id: ShopId,
    pub name: String,
    pub description: Option<String>,
    pub vertical: Vertical,
    pub categories: Vec<Category>,
}

impl Shop {
    /// Resolves the display name of one of this shop's categories
    pub fn category_name(&self, category_id: CategoryId) -> Option<&str> {
        self.categories
            .iter()
            .find(|category| category.id == category_id)
            .map(|category| category.name.as_str())
    }
}
