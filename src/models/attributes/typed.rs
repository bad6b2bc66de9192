//! Typed attribute variants and the classification boundary
use models::attributes::schema::*;
use models::attributes::ParsedAttributes;
use models::Vertical;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreweryAttributes {
    pub degre_alcool: f64,
    pub amertume_ibu: f64,
    pub type_houblon: Option<String>,
    pub volume_cl: Option<f64>,
    pub stock: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeaShopAttributes {
    pub origine_plantation: String,
    pub grade_qualite: String,
    pub temperature_infusion: Option<f64>,
    pub stock: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeautyShopAttributes {
    pub type_peau: String,
    pub ingredients_actifs: String,
    pub certification_bio: Option<bool>,
    pub contenance_ml: Option<f64>,
    pub stock: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HerbShopAttributes {
    pub principes_actifs: String,
    pub usage_traditionnel: String,
    pub forme_galenique: Option<String>,
    pub stock: Option<u32>,
}

/// Attribute record with its vertical recovered. Everything downstream of
/// the classification boundary consumes this tagged form, never the raw map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypedAttributes {
    Brewery(BreweryAttributes),
    TeaShop(TeaShopAttributes),
    BeautyShop(BeautyShopAttributes),
    HerbShop(HerbShopAttributes),
    Unknown,
}

impl TypedAttributes {
    /// Recovers the typed variant from an untyped record.
    ///
    /// Walks the schema registry in its fixed order; the first matching
    /// recognizer wins. Records matching no signature classify as
    /// `Unknown`, as do records whose signature fields carry the wrong
    /// primitive type.
    pub fn classify(record: Option<&ParsedAttributes>) -> TypedAttributes {
        let record = match record {
            Some(record) => record,
            None => return TypedAttributes::Unknown,
        };
        for schema in VERTICAL_SCHEMAS.iter() {
            if !schema.recognizes(record) {
                continue;
            }
            return match extract(schema.vertical, record) {
                Some(typed) => typed,
                None => {
                    debug!("Record carries the {} signature but its fields are mistyped", schema.vertical);
                    TypedAttributes::Unknown
                }
            };
        }
        TypedAttributes::Unknown
    }

    /// The vertical this record satisfies, if any
    pub fn vertical(&self) -> Option<Vertical> {
        match *self {
            TypedAttributes::Brewery(_) => Some(Vertical::Brewery),
            TypedAttributes::TeaShop(_) => Some(Vertical::TeaShop),
            TypedAttributes::BeautyShop(_) => Some(Vertical::BeautyShop),
            TypedAttributes::HerbShop(_) => Some(Vertical::HerbShop),
            TypedAttributes::Unknown => None,
        }
    }

    pub fn stock(&self) -> Option<u32> {
        match *self {
            TypedAttributes::Brewery(ref attrs) => attrs.stock,
            TypedAttributes::TeaShop(ref attrs) => attrs.stock,
            TypedAttributes::BeautyShop(ref attrs) => attrs.stock,
            TypedAttributes::HerbShop(ref attrs) => attrs.stock,
            TypedAttributes::Unknown => None,
        }
    }
}

fn extract(vertical: Vertical, record: &ParsedAttributes) -> Option<TypedAttributes> {
    match vertical {
        Vertical::Brewery => Some(TypedAttributes::Brewery(BreweryAttributes {
            degre_alcool: record.f64_field(DEGRE_ALCOOL)?,
            amertume_ibu: record.f64_field(AMERTUME_IBU)?,
            type_houblon: record.str_field(TYPE_HOUBLON).map(String::from),
            volume_cl: record.f64_field(VOLUME_CL),
            stock: record.stock(),
        })),
        Vertical::TeaShop => Some(TypedAttributes::TeaShop(TeaShopAttributes {
            origine_plantation: record.str_field(ORIGINE_PLANTATION).map(String::from)?,
            grade_qualite: record.str_field(GRADE_QUALITE).map(String::from)?,
            temperature_infusion: record.f64_field(TEMPERATURE_INFUSION),
            stock: record.stock(),
        })),
        Vertical::BeautyShop => Some(TypedAttributes::BeautyShop(BeautyShopAttributes {
            type_peau: record.str_field(TYPE_PEAU).map(String::from)?,
            ingredients_actifs: record.str_field(INGREDIENTS_ACTIFS).map(String::from)?,
            certification_bio: record.bool_field(CERTIFICATION_BIO),
            contenance_ml: record.f64_field(CONTENANCE_ML),
            stock: record.stock(),
        })),
        Vertical::HerbShop => Some(TypedAttributes::HerbShop(HerbShopAttributes {
            principes_actifs: record.str_field(PRINCIPES_ACTIFS).map(String::from)?,
            usage_traditionnel: record.str_field(USAGE_TRADITIONNEL).map(String::from)?,
            forme_galenique: record.str_field(FORME_GALENIQUE).map(String::from),
            stock: record.stock(),
        })),
    }
}
