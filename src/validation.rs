//! Request Validation Module
//!
//! Range checks for habit inputs at the API boundary. The scoring core trusts
//! its input, so anything out of range has to be rejected here.

use validator::{Validate, ValidationErrors};

use crate::error::{AppError, Result};

/// Validate a request, turning field errors into [`AppError::Validation`].
pub fn validate_request<T: Validate>(request: &T) -> Result<()> {
    request
        .validate()
        .map_err(|errors| AppError::Validation(describe(&errors)))
}

/// Human readable summary, one entry per field in name order.
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                match (e.params.get("min"), e.params.get("max")) {
                    (Some(min), Some(max)) => {
                        format!("{} must be between {} and {}", field, min, max)
                    }
                    _ => format!("{} is invalid ({})", field, e.code),
                }
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}
