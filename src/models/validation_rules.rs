use std::borrow::Cow;
use std::collections::HashMap;

use validator::ValidationError;

pub fn validate_non_negative<T: Into<f64>>(val: T) -> Result<(), ValidationError> {
    if val.into() >= 0f64 {
        Ok(())
    } else {
        Err(ValidationError {
            code: Cow::from("value"),
            message: Some(Cow::from("Value must be non negative.")),
            params: HashMap::new(),
        })
    }
}

pub fn validate_not_empty(val: &str) -> Result<(), ValidationError> {
    if val.trim().is_empty() {
        Err(ValidationError {
            code: Cow::from("text"),
            message: Some(Cow::from("Value must not be empty.")),
            params: HashMap::new(),
        })
    } else {
        Ok(())
    }
}
