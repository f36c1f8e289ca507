//! Request-parameter checks

use crate::error::ApiError;
use nw_state::Record;
use nw_validation::{
    duplicate_elements, elements_missing_from_list, find_missing_required_fields,
    MissingFieldPolicy,
};

/// Reject a request whose parameters contain nulls
///
/// # Errors
/// Returns `MissingArguments` listing the null parameters in request order
pub fn ensure_required_params(params: &Record) -> Result<(), ApiError> {
    let missing = find_missing_required_fields(params, MissingFieldPolicy::NullOnly);
    if missing.is_empty() {
        return Ok(());
    }
    tracing::debug!(?missing, "request missing parameters");
    Err(ApiError::MissingArguments(missing))
}

/// Reject values outside `allowed`
///
/// # Errors
/// Returns `UnknownValues` listing the offending values in input order
pub fn ensure_known_values<S: AsRef<str>>(values: &[S], allowed: &[S]) -> Result<(), ApiError> {
    let values: Vec<&str> = values.iter().map(|v| v.as_ref()).collect();
    let allowed: Vec<&str> = allowed.iter().map(|v| v.as_ref()).collect();

    let unknown = elements_missing_from_list(&values, &allowed);
    if unknown.is_empty() {
        return Ok(());
    }
    Err(ApiError::UnknownValues(
        unknown.into_iter().map(str::to_string).collect(),
    ))
}

/// Reject values given more than once
///
/// # Errors
/// Returns `DuplicateValues` listing each repeated value once, in order of
/// first occurrence
pub fn ensure_unique_values<S: AsRef<str>>(values: &[S]) -> Result<(), ApiError> {
    let values: Vec<&str> = values.iter().map(|v| v.as_ref()).collect();

    let repeated = duplicate_elements(&values);
    if repeated.is_empty() {
        return Ok(());
    }
    tracing::debug!(?repeated, "request repeats values");
    Err(ApiError::DuplicateValues(
        repeated.into_iter().map(str::to_string).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn params(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn complete_params_pass() {
        let p = params(json!({"chain_name": "cosmos", "port": 0, "tls": false}));
        assert!(ensure_required_params(&p).is_ok());
    }

    #[test]
    fn null_params_reported_in_order() {
        let p = params(json!({"b": null, "a": 1, "c": null}));
        let err = ensure_required_params(&p).unwrap_err();
        assert_eq!(err, ApiError::MissingArguments(vec!["b".into(), "c".into()]));
        assert_eq!(err.to_string(), "Missing parameter(s): b, c");
    }

    #[test]
    fn known_values() {
        let allowed = ["telegram", "email", "twilio"];
        assert!(ensure_known_values(&["telegram", "email"], &allowed).is_ok());
        let err = ensure_known_values(&["telegram", "fax"], &["telegram", "email"]).unwrap_err();
        assert_eq!(err.to_string(), "Unknown value(s): fax");
    }

    #[test]
    fn repeated_values() {
        assert!(ensure_unique_values(&["telegram", "email"]).is_ok());
        assert!(ensure_unique_values::<&str>(&[]).is_ok());

        let err = ensure_unique_values(&["email", "telegram", "email", "telegram"]).unwrap_err();
        assert_eq!(
            err,
            ApiError::DuplicateValues(vec!["email".into(), "telegram".into()])
        );
        assert_eq!(err.to_string(), "Duplicate value(s): email, telegram");
    }

    #[test]
    fn error_into_response() {
        let response = ApiError::UnknownValues(vec!["x".into()]).into_response::<()>();
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"error": "Unknown value(s): x"})
        );
    }
}
