//! Installer Backend Utilities
//!
//! JSON response envelopes and request-parameter checks shared by the
//! installer's backend handlers.
//!
//! - [`result_json`] / [`error_json`]: `{"result": ...}` / `{"error": ...}`
//! - [`ensure_required_params`]: reject requests with null parameters
//! - [`ensure_known_values`]: reject tokens outside an allowed set
//! - [`ensure_unique_values`]: reject repeated tokens
//!
//! # Example
//!
//! ```rust
//! use nw_api::{error_json, result_json, ApiResponse};
//! use serde_json::json;
//!
//! let ok: ApiResponse<u32> = result_json(3);
//! assert_eq!(serde_json::to_value(&ok).unwrap(), json!({"result": 3}));
//!
//! let err: ApiResponse<u32> = error_json("Chain name is not unique.");
//! assert_eq!(
//!     serde_json::to_value(&err).unwrap(),
//!     json!({"error": "Chain name is not unique."})
//! );
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod params;
mod response;

pub use error::ApiError;
pub use params::{ensure_known_values, ensure_required_params, ensure_unique_values};
pub use response::{error_json, result_json, ApiResponse};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
