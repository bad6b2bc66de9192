//! Remote authoritative filter modules
pub mod error;
pub mod filters;
pub mod types;

pub use self::filters::*;

use std::fmt::Debug;

pub fn log_remote_req<T: Debug>(item: &T) {
    debug!("Sending filter request to remote collaborator {:?}.", item);
}

pub fn log_remote_resp<T: Debug>(item: &T) {
    debug!("Result of remote filtering {:?}.", item)
}
