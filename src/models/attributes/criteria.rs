//! The sparse filter criteria set: universal bounds plus per-vertical groups
use models::Vertical;

pub const ALCOHOL_BAND_LIGHT_MIN: f64 = 3.0;
pub const ALCOHOL_BAND_MEDIUM_MIN: f64 = 5.0;
pub const ALCOHOL_BAND_STRONG_MIN: f64 = 7.0;
pub const ALCOHOL_BAND_VERY_STRONG_MIN: f64 = 10.0;

/// Named alcohol strength bands for bucket filtering. Bands are half-open
/// on the right except the last, which is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlcoholBand {
    Light,
    Medium,
    Strong,
    VeryStrong,
}

impl AlcoholBand {
    pub fn contains(&self, degree: f64) -> bool {
        match *self {
            AlcoholBand::Light => degree >= ALCOHOL_BAND_LIGHT_MIN && degree < ALCOHOL_BAND_MEDIUM_MIN,
            AlcoholBand::Medium => degree >= ALCOHOL_BAND_MEDIUM_MIN && degree < ALCOHOL_BAND_STRONG_MIN,
            AlcoholBand::Strong => degree >= ALCOHOL_BAND_STRONG_MIN && degree < ALCOHOL_BAND_VERY_STRONG_MIN,
            AlcoholBand::VeryStrong => degree >= ALCOHOL_BAND_VERY_STRONG_MIN,
        }
    }
}

/// Stock bucket a caller can filter on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BreweryCriteria {
    pub degre_alcool_min: Option<f64>,
    pub degre_alcool_max: Option<f64>,
    pub amertume_ibu_min: Option<f64>,
    pub amertume_ibu_max: Option<f64>,
    pub type_houblon: Option<String>,
    pub alcohol_bands: Option<Vec<AlcoholBand>>,
}

impl BreweryCriteria {
    pub fn is_empty(&self) -> bool {
        self.degre_alcool_min.is_none()
            && self.degre_alcool_max.is_none()
            && self.amertume_ibu_min.is_none()
            && self.amertume_ibu_max.is_none()
            && self.type_houblon.is_none()
            && self.alcohol_bands.as_ref().map(Vec::is_empty).unwrap_or(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeaShopCriteria {
    pub origine_plantation: Option<String>,
    pub grade_qualite: Option<String>,
}

impl TeaShopCriteria {
    pub fn is_empty(&self) -> bool {
        self.origine_plantation.is_none() && self.grade_qualite.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeautyShopCriteria {
    pub type_peau: Option<String>,
    pub certification_bio: Option<bool>,
}

impl BeautyShopCriteria {
    pub fn is_empty(&self) -> bool {
        self.type_peau.is_none() && self.certification_bio.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HerbShopCriteria {
    pub usage_traditionnel: Option<String>,
    pub forme_galenique: Option<String>,
}

impl HerbShopCriteria {
    pub fn is_empty(&self) -> bool {
        self.usage_traditionnel.is_none() && self.forme_galenique.is_none()
    }
}

/// Sparse filter request spanning universal bounds and every vertical's
/// specialized group. Constructed per filter action and never mutated in
/// place; a well-behaved caller only populates the group of the active
/// shop's vertical, but foreign groups are tolerated and ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub stock_status: Option<StockStatus>,
    pub brewery: Option<BreweryCriteria>,
    pub tea_shop: Option<TeaShopCriteria>,
    pub beauty_shop: Option<BeautyShopCriteria>,
    pub herb_shop: Option<HerbShopCriteria>,
}

impl FilterCriteria {
    /// True when any vertical group carries at least one constraint,
    /// whichever vertical it belongs to.
    pub fn has_vertical_criteria(&self) -> bool {
        self.brewery.as_ref().map(|g| !g.is_empty()).unwrap_or(false)
            || self.tea_shop.as_ref().map(|g| !g.is_empty()).unwrap_or(false)
            || self.beauty_shop.as_ref().map(|g| !g.is_empty()).unwrap_or(false)
            || self.herb_shop.as_ref().map(|g| !g.is_empty()).unwrap_or(false)
    }

    pub fn has_price_bounds(&self) -> bool {
        self.price_min.is_some() || self.price_max.is_some()
    }

    /// True when the group for the given vertical carries a constraint.
    /// Foreign-vertical groups never count.
    pub fn constrains_vertical(&self, vertical: Vertical) -> bool {
        match vertical {
            Vertical::Brewery => self.brewery.as_ref().map(|g| !g.is_empty()).unwrap_or(false),
            Vertical::TeaShop => self.tea_shop.as_ref().map(|g| !g.is_empty()).unwrap_or(false),
            Vertical::BeautyShop => self.beauty_shop.as_ref().map(|g| !g.is_empty()).unwrap_or(false),
            Vertical::HerbShop => self.herb_shop.as_ref().map(|g| !g.is_empty()).unwrap_or(false),
        }
    }
}
