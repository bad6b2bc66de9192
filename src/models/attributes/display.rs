//! Formatted attribute projections for product cards and detail views
use std::fmt;

use models::attributes::{
    BeautyShopAttributes, BreweryAttributes, HerbShopAttributes, TeaShopAttributes, TypedAttributes,
};

/// Display category a formatted attribute is grouped under in detail views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeGroup {
    Characteristics,
    Origin,
    Availability,
}

impl fmt::Display for AttributeGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            AttributeGroup::Characteristics => write!(f, "Caractéristiques"),
            AttributeGroup::Origin => write!(f, "Origine"),
            AttributeGroup::Availability => write!(f, "Disponibilité"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedAttribute {
    pub label: String,
    pub value: String,
    pub group: AttributeGroup,
}

fn attribute(label: &str, value: String, group: AttributeGroup) -> FormattedAttribute {
    FormattedAttribute {
        label: label.to_string(),
        value: value,
        group: group,
    }
}

fn stock_attribute(stock: Option<u32>) -> FormattedAttribute {
    let value = match stock {
        Some(level) => level.to_string(),
        None => "Inconnu".to_string(),
    };
    attribute("Stock", value, AttributeGroup::Availability)
}

/// Short projection for a product card: the salient fields of the vertical,
/// always ending with stock. Unclassified attributes project to nothing.
pub fn key_attributes(attrs: &TypedAttributes) -> Vec<FormattedAttribute> {
    match *attrs {
        TypedAttributes::Brewery(ref a) => {
            let mut out = vec![
                attribute("Alcool", format!("{}°", a.degre_alcool), AttributeGroup::Characteristics),
                attribute("Amertume", format!("{} IBU", a.amertume_ibu), AttributeGroup::Characteristics),
            ];
            if let Some(ref hop) = a.type_houblon {
                out.push(attribute("Houblon", hop.clone(), AttributeGroup::Characteristics));
            }
            out.push(stock_attribute(a.stock));
            out
        }
        TypedAttributes::TeaShop(ref a) => vec![
            attribute("Origine", a.origine_plantation.clone(), AttributeGroup::Origin),
            attribute("Grade", a.grade_qualite.clone(), AttributeGroup::Characteristics),
            stock_attribute(a.stock),
        ],
        TypedAttributes::BeautyShop(ref a) => {
            let mut out = vec![attribute("Type de peau", a.type_peau.clone(), AttributeGroup::Characteristics)];
            if let Some(bio) = a.certification_bio {
                out.push(attribute(
                    "Bio",
                    if bio { "Oui".to_string() } else { "Non".to_string() },
                    AttributeGroup::Characteristics,
                ));
            }
            out.push(stock_attribute(a.stock));
            out
        }
        TypedAttributes::HerbShop(ref a) => {
            let mut out = vec![attribute("Usage", a.usage_traditionnel.clone(), AttributeGroup::Characteristics)];
            if let Some(ref forme) = a.forme_galenique {
                out.push(attribute("Forme", forme.clone(), AttributeGroup::Characteristics));
            }
            out.push(stock_attribute(a.stock));
            out
        }
        TypedAttributes::Unknown => vec![],
    }
}

/// Full formatted list for a detail view, grouped by display category
pub fn all_attributes(attrs: &TypedAttributes) -> Vec<FormattedAttribute> {
    match *attrs {
        TypedAttributes::Brewery(ref a) => all_brewery(a),
        TypedAttributes::TeaShop(ref a) => all_tea_shop(a),
        TypedAttributes::BeautyShop(ref a) => all_beauty_shop(a),
        TypedAttributes::HerbShop(ref a) => all_herb_shop(a),
        TypedAttributes::Unknown => vec![],
    }
}

fn all_brewery(a: &BreweryAttributes) -> Vec<FormattedAttribute> {
    let mut out = vec![
        attribute("Degré d'alcool", format!("{}°", a.degre_alcool), AttributeGroup::Characteristics),
        attribute("Amertume", format!("{} IBU", a.amertume_ibu), AttributeGroup::Characteristics),
    ];
    if let Some(ref hop) = a.type_houblon {
        out.push(attribute("Type de houblon", hop.clone(), AttributeGroup::Characteristics));
    }
    if let Some(volume) = a.volume_cl {
        out.push(attribute("Volume", format!("{} cl", volume), AttributeGroup::Characteristics));
    }
    out.push(stock_attribute(a.stock));
    out
}

fn all_tea_shop(a: &TeaShopAttributes) -> Vec<FormattedAttribute> {
    let mut out = vec![
        attribute("Origine de plantation", a.origine_plantation.clone(), AttributeGroup::Origin),
        attribute("Grade de qualité", a.grade_qualite.clone(), AttributeGroup::Characteristics),
    ];
    if let Some(temperature) = a.temperature_infusion {
        out.push(attribute("Température d'infusion", format!("{} °C", temperature), AttributeGroup::Characteristics));
    }
    out.push(stock_attribute(a.stock));
    out
}

fn all_beauty_shop(a: &BeautyShopAttributes) -> Vec<FormattedAttribute> {
    let mut out = vec![
        attribute("Type de peau", a.type_peau.clone(), AttributeGroup::Characteristics),
        attribute("Ingrédients actifs", a.ingredients_actifs.clone(), AttributeGroup::Characteristics),
    ];
    if let Some(bio) = a.certification_bio {
        out.push(attribute(
            "Certification bio",
            if bio { "Oui".to_string() } else { "Non".to_string() },
            AttributeGroup::Origin,
        ));
    }
    if let Some(contenance) = a.contenance_ml {
        out.push(attribute("Contenance", format!("{} ml", contenance), AttributeGroup::Characteristics));
    }
    out.push(stock_attribute(a.stock));
    out
}

fn all_herb_shop(a: &HerbShopAttributes) -> Vec<FormattedAttribute> {
    let mut out = vec![
        attribute("Principes actifs", a.principes_actifs.clone(), AttributeGroup::Characteristics),
        attribute("Usage traditionnel", a.usage_traditionnel.clone(), AttributeGroup::Characteristics),
    ];
    if let Some(ref forme) = a.forme_galenique {
        out.push(attribute("Forme galénique", forme.clone(), AttributeGroup::Characteristics));
    }
    out.push(stock_attribute(a.stock));
    out
}
