//! Per-vertical predicate groups over classified attributes
use models::attributes::{
    BeautyShopAttributes, BeautyShopCriteria, BreweryAttributes, BreweryCriteria, FilterCriteria,
    HerbShopAttributes, HerbShopCriteria, TeaShopAttributes, TeaShopCriteria, TypedAttributes,
};
use models::Vertical;

fn within(value: f64, min: Option<f64>, max: Option<f64>) -> bool {
    if let Some(min) = min {
        if value < min {
            return false;
        }
    }
    if let Some(max) = max {
        if value > max {
            return false;
        }
    }
    true
}

fn matches_exact(actual: Option<&str>, expected: Option<&String>) -> bool {
    match expected {
        Some(expected) => actual == Some(expected.as_str()),
        None => true,
    }
}

/// Brewery group: degree and bitterness bounds, exact hop match, and the
/// band-bucket disjunction when bands are supplied instead of bounds.
pub fn matches_brewery(attrs: &BreweryAttributes, criteria: &BreweryCriteria) -> bool {
    if !within(attrs.degre_alcool, criteria.degre_alcool_min, criteria.degre_alcool_max) {
        return false;
    }
    if !within(attrs.amertume_ibu, criteria.amertume_ibu_min, criteria.amertume_ibu_max) {
        return false;
    }
    if !matches_exact(attrs.type_houblon.as_ref().map(String::as_str), criteria.type_houblon.as_ref()) {
        return false;
    }
    if let Some(ref bands) = criteria.alcohol_bands {
        if !bands.is_empty() && !bands.iter().any(|band| band.contains(attrs.degre_alcool)) {
            return false;
        }
    }
    true
}

pub fn matches_tea_shop(attrs: &TeaShopAttributes, criteria: &TeaShopCriteria) -> bool {
    matches_exact(Some(&attrs.origine_plantation), criteria.origine_plantation.as_ref())
        && matches_exact(Some(&attrs.grade_qualite), criteria.grade_qualite.as_ref())
}

pub fn matches_beauty_shop(attrs: &BeautyShopAttributes, criteria: &BeautyShopCriteria) -> bool {
    if !matches_exact(Some(&attrs.type_peau), criteria.type_peau.as_ref()) {
        return false;
    }
    match criteria.certification_bio {
        Some(expected) => attrs.certification_bio == Some(expected),
        None => true,
    }
}

pub fn matches_herb_shop(attrs: &HerbShopAttributes, criteria: &HerbShopCriteria) -> bool {
    matches_exact(Some(&attrs.usage_traditionnel), criteria.usage_traditionnel.as_ref())
        && matches_exact(attrs.forme_galenique.as_ref().map(String::as_str), criteria.forme_galenique.as_ref())
}

/// Applies the predicate group of the shop's vertical. Groups for foreign
/// verticals are never consulted. A product whose attributes failed
/// classification fails any populated group by construction, it is never
/// vacuously matched.
pub fn matches_vertical(vertical: Vertical, attrs: &TypedAttributes, criteria: &FilterCriteria) -> bool {
    if !criteria.constrains_vertical(vertical) {
        return true;
    }
    match vertical {
        Vertical::Brewery => match (attrs, &criteria.brewery) {
            (&TypedAttributes::Brewery(ref a), &Some(ref group)) => matches_brewery(a, group),
            _ => false,
        },
        Vertical::TeaShop => match (attrs, &criteria.tea_shop) {
            (&TypedAttributes::TeaShop(ref a), &Some(ref group)) => matches_tea_shop(a, group),
            _ => false,
        },
        Vertical::BeautyShop => match (attrs, &criteria.beauty_shop) {
            (&TypedAttributes::BeautyShop(ref a), &Some(ref group)) => matches_beauty_shop(a, group),
            _ => false,
        },
        Vertical::HerbShop => match (attrs, &criteria.herb_shop) {
            (&TypedAttributes::HerbShop(ref a), &Some(ref group)) => matches_herb_shop(a, group),
            _ => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::attributes::AlcoholBand;

    fn brewery_attrs() -> BreweryAttributes {
        BreweryAttributes {
            degre_alcool: 6.5,
            amertume_ibu: 45.0,
            type_houblon: Some("Cascade".to_string()),
            volume_cl: None,
            stock: Some(25),
        }
    }

    #[test]
    fn brewery_bounds_are_unbounded_when_missing() {
        let attrs = brewery_attrs();
        let criteria = BreweryCriteria {
            degre_alcool_min: Some(6.0),
            ..Default::default()
        };
        assert!(matches_brewery(&attrs, &criteria));
        let criteria = BreweryCriteria {
            degre_alcool_min: Some(7.0),
            ..Default::default()
        };
        assert!(!matches_brewery(&attrs, &criteria));
    }

    #[test]
    fn brewery_all_populated_criteria_must_hold() {
        let attrs = brewery_attrs();
        let criteria = BreweryCriteria {
            degre_alcool_min: Some(6.0),
            amertume_ibu_max: Some(40.0),
            ..Default::default()
        };
        assert!(!matches_brewery(&attrs, &criteria));
    }

    #[test]
    fn brewery_hop_match_is_exact() {
        let attrs = brewery_attrs();
        let criteria = BreweryCriteria {
            type_houblon: Some("Cascade".to_string()),
            ..Default::default()
        };
        assert!(matches_brewery(&attrs, &criteria));
        let criteria = BreweryCriteria {
            type_houblon: Some("Casca".to_string()),
            ..Default::default()
        };
        assert!(!matches_brewery(&attrs, &criteria));
    }

    #[test]
    fn brewery_band_criteria_are_a_disjunction() {
        let attrs = brewery_attrs();
        let criteria = BreweryCriteria {
            alcohol_bands: Some(vec![AlcoholBand::Light, AlcoholBand::Medium]),
            ..Default::default()
        };
        assert!(matches_brewery(&attrs, &criteria));
        let criteria = BreweryCriteria {
            alcohol_bands: Some(vec![AlcoholBand::Strong, AlcoholBand::VeryStrong]),
            ..Default::default()
        };
        assert!(!matches_brewery(&attrs, &criteria));
    }

    #[test]
    fn tea_shop_matches_are_exact() {
        let attrs = TeaShopAttributes {
            origine_plantation: "Darjeeling".to_string(),
            grade_qualite: "FTGFOP".to_string(),
            temperature_infusion: None,
            stock: Some(4),
        };
        let criteria = TeaShopCriteria {
            origine_plantation: Some("Darjeeling".to_string()),
            grade_qualite: Some("FTGFOP".to_string()),
        };
        assert!(matches_tea_shop(&attrs, &criteria));
        let criteria = TeaShopCriteria {
            origine_plantation: Some("Assam".to_string()),
            grade_qualite: None,
        };
        assert!(!matches_tea_shop(&attrs, &criteria));
    }

    #[test]
    fn beauty_shop_bio_certification_is_an_exact_boolean_match() {
        let attrs = BeautyShopAttributes {
            type_peau: "mixte".to_string(),
            ingredients_actifs: "aloe vera".to_string(),
            certification_bio: Some(true),
            contenance_ml: None,
            stock: Some(3),
        };
        let criteria = BeautyShopCriteria {
            type_peau: None,
            certification_bio: Some(true),
        };
        assert!(matches_beauty_shop(&attrs, &criteria));
        let criteria = BeautyShopCriteria {
            type_peau: None,
            certification_bio: Some(false),
        };
        assert!(!matches_beauty_shop(&attrs, &criteria));
        // An uncertified product never matches an explicit bio criterion.
        let uncertified = BeautyShopAttributes {
            certification_bio: None,
            ..attrs
        };
        let criteria = BeautyShopCriteria {
            type_peau: None,
            certification_bio: Some(false),
        };
        assert!(!matches_beauty_shop(&uncertified, &criteria));
    }

    #[test]
    fn herb_shop_matches_usage_and_form() {
        let attrs = HerbShopAttributes {
            principes_actifs: "flavonoïdes".to_string(),
            usage_traditionnel: "sommeil".to_string(),
            forme_galenique: Some("tisane".to_string()),
            stock: Some(7),
        };
        let criteria = HerbShopCriteria {
            usage_traditionnel: Some("sommeil".to_string()),
            forme_galenique: Some("tisane".to_string()),
        };
        assert!(matches_herb_shop(&attrs, &criteria));
        let criteria = HerbShopCriteria {
            usage_traditionnel: Some("digestion".to_string()),
            forme_galenique: None,
        };
        assert!(!matches_herb_shop(&attrs, &criteria));
    }

    #[test]
    fn unclassified_attributes_fail_any_populated_group() {
        let criteria = FilterCriteria {
            brewery: Some(BreweryCriteria {
                degre_alcool_min: Some(6.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(!matches_vertical(Vertical::Brewery, &TypedAttributes::Unknown, &criteria));
    }

    #[test]
    fn unclassified_attributes_pass_when_no_group_is_populated() {
        let criteria = FilterCriteria::default();
        assert!(matches_vertical(Vertical::Brewery, &TypedAttributes::Unknown, &criteria));
    }

    #[test]
    fn foreign_vertical_groups_are_ignored() {
        // A tea shop session with a populated brewery group: the brewery
        // group is foreign to the shop's vertical and must not filter.
        let criteria = FilterCriteria {
            brewery: Some(BreweryCriteria {
                degre_alcool_min: Some(99.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        let attrs = TypedAttributes::TeaShop(TeaShopAttributes {
            origine_plantation: "Assam".to_string(),
            grade_qualite: "TGFOP".to_string(),
            temperature_infusion: None,
            stock: Some(10),
        });
        assert!(matches_vertical(Vertical::TeaShop, &attrs, &criteria));
    }

    #[test]
    fn cross_vertical_product_fails_the_active_group() {
        // A brewery-classified product inside a tea shop session with tea
        // criteria populated: it cannot satisfy them.
        let criteria = FilterCriteria {
            tea_shop: Some(TeaShopCriteria {
                origine_plantation: Some("Assam".to_string()),
                grade_qualite: None,
            }),
            ..Default::default()
        };
        let attrs = TypedAttributes::Brewery(brewery_attrs());
        assert!(!matches_vertical(Vertical::TeaShop, &attrs, &criteria));
    }
}
