//! Response envelopes

use serde::{Deserialize, Serialize};

/// Body of every backend response
///
/// Serializes as `{"result": value}` or `{"error": message}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiResponse<T> {
    /// Successful result
    Result(T),

    /// Failure message
    Error(String),
}

impl<T> ApiResponse<T> {
    /// Check if this is a successful result
    #[inline]
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Result(_))
    }

    /// Convert into a standard `Result`
    ///
    /// # Errors
    /// Returns the message of an `Error` response
    #[inline]
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Result(value) => Ok(value),
            Self::Error(message) => Err(message),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for ApiResponse<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Result(value),
            Err(e) => Self::Error(e.to_string()),
        }
    }
}

/// Wrap a value as a successful response
#[inline]
#[must_use]
pub fn result_json<T>(value: T) -> ApiResponse<T> {
    ApiResponse::Result(value)
}

/// Wrap a message as a failed response
#[inline]
#[must_use]
pub fn error_json<T>(message: impl std::fmt::Display) -> ApiResponse<T> {
    ApiResponse::Error(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn result_envelope() {
        let response = result_json(json!({"nodes": 2}));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"result": {"nodes": 2}})
        );
        assert!(response.is_ok());
    }

    #[test]
    fn error_envelope() {
        let response: ApiResponse<()> = error_json("Missing parameter(s): chain");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"error": "Missing parameter(s): chain"})
        );
        assert_eq!(response.into_result(), Err("Missing parameter(s): chain".to_string()));
    }

    #[test]
    fn parses_envelopes() {
        let ok: ApiResponse<bool> = serde_json::from_value(json!({"result": true})).unwrap();
        assert_eq!(ok, ApiResponse::Result(true));
        let err: ApiResponse<bool> = serde_json::from_value(json!({"error": "nope"})).unwrap();
        assert_eq!(err, ApiResponse::Error("nope".into()));
    }

    #[test]
    fn from_std_result() {
        let ok: ApiResponse<u8> = Ok::<u8, String>(1).into();
        assert_eq!(ok, ApiResponse::Result(1));
        let err: ApiResponse<u8> = Err::<u8, &str>("bad").into();
        assert_eq!(err, ApiResponse::Error("bad".into()));
    }
}
