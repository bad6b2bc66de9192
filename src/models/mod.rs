//! Models contains all structures that are used in different
//! modules of the app

pub mod attributes;
pub mod category;
pub mod product;
pub mod remote;
pub mod shop;
pub mod stock;
pub mod types;
pub mod validation_rules;

pub use self::attributes::*;
pub use self::category::*;
pub use self::product::*;
pub use self::remote::*;
pub use self::shop::*;
pub use self::stock::*;
pub use self::types::*;
pub use self::validation_rules::*;
