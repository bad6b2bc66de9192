//! Signature registry for the vertical attribute schemas
use models::attributes::ParsedAttributes;
use models::Vertical;

// Payload field names. These are the stored data contract of the catalogs;
// the upstream payload carries no discriminant tag, so the signature pairs
// below are the only classification evidence.
pub static DEGRE_ALCOOL: &'static str = "degre_alcool";
pub static AMERTUME_IBU: &'static str = "amertume_ibu";
pub static TYPE_HOUBLON: &'static str = "type_houblon";
pub static VOLUME_CL: &'static str = "volume_cl";
pub static ORIGINE_PLANTATION: &'static str = "origine_plantation";
pub static GRADE_QUALITE: &'static str = "grade_qualite";
pub static TEMPERATURE_INFUSION: &'static str = "temperature_infusion";
pub static TYPE_PEAU: &'static str = "type_peau";
pub static INGREDIENTS_ACTIFS: &'static str = "ingredients_actifs";
pub static CERTIFICATION_BIO: &'static str = "certification_bio";
pub static CONTENANCE_ML: &'static str = "contenance_ml";
pub static PRINCIPES_ACTIFS: &'static str = "principes_actifs";
pub static USAGE_TRADITIONNEL: &'static str = "usage_traditionnel";
pub static FORME_GALENIQUE: &'static str = "forme_galenique";
pub static STOCK: &'static str = "stock";

/// Shape of one vertical: the pair of payload fields unique enough to
/// recognize it.
#[derive(Debug, Clone, Copy)]
pub struct VerticalSchema {
    pub vertical: Vertical,
    pub signature: [&'static str; 2],
}

impl VerticalSchema {
    /// Presence-based recognizer. Field types are not inspected here;
    /// typed extraction happens at the classification boundary.
    pub fn recognizes(&self, record: &ParsedAttributes) -> bool {
        self.signature.iter().all(|field| record.has_field(field))
    }
}

lazy_static! {
    /// Registry in fixed evaluation order. Classification walks it top to
    /// bottom and the first matching recognizer wins.
    pub static ref VERTICAL_SCHEMAS: Vec<VerticalSchema> = vec![
        VerticalSchema {
            vertical: Vertical::Brewery,
            signature: [DEGRE_ALCOOL, AMERTUME_IBU],
        },
        VerticalSchema {
            vertical: Vertical::TeaShop,
            signature: [ORIGINE_PLANTATION, GRADE_QUALITE],
        },
        VerticalSchema {
            vertical: Vertical::BeautyShop,
            signature: [TYPE_PEAU, INGREDIENTS_ACTIFS],
        },
        VerticalSchema {
            vertical: Vertical::HerbShop,
            signature: [PRINCIPES_ACTIFS, USAGE_TRADITIONNEL],
        },
    ];
}
