//! Catalog is the core engine of a multi-vertical retail platform,
//! responsible for typing product attributes and filtering product batches.
//! The layered structure of the app is
//!
//! `Application -> Service -> Filters + RemoteFilters`
//!
//! Each shop belongs to one of a fixed set of verticals (brewery, tea shop,
//! beauty shop, herb shop). Products carry an opaque serialized attribute
//! payload; the engine recovers a typed attribute record from it, classifies
//! the vertical it satisfies, and evaluates universal plus vertical-specific
//! filter predicates over an in-memory batch. Filtering either runs locally
//! or is delegated to an authoritative remote collaborator with a mandatory
//! local fallback, so a filter failure never blanks the product list.

extern crate config as config_crate;
#[macro_use]
extern crate failure;
extern crate futures;
extern crate futures_cpupool;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate reqwest;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate serde_json;
extern crate validator;
#[macro_use]
extern crate validator_derive;

pub mod config;
pub mod filters;
pub mod models;
pub mod remote;
pub mod services;
