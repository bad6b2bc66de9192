//! Attribute parsing, classification, filter criteria and display projections

pub mod criteria;
pub mod display;
pub mod parsed;
pub mod schema;
pub mod typed;

pub use self::criteria::*;
pub use self::display::*;
pub use self::parsed::*;
pub use self::schema::*;
pub use self::typed::*;
