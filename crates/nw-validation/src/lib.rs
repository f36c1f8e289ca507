//! Installer Name Validation
//!
//! Pure checks run by the installer forms before a record is committed.
//!
//! # Core Concepts
//!
//! - [`is_name_available`]: Scan any number of [`NameSource`]s for a name
//! - [`has_no_forbidden_character`]: Reject `[` and `]`, which break the
//!   bracketed-section config format
//! - [`all_elements_present_in_list`] / [`elements_missing_from_list`]:
//!   Membership of user-supplied tokens in a known set
//! - [`find_missing_required_fields`]: Fields of a record with no value
//! - [`NameValidator`]: Form-level rules (source, channel, chain, user, KMS)
//!
//! # Example
//!
//! ```rust
//! use nw_state::NameSource;
//! use nw_validation::is_name_available;
//! # use nw_state::{EntityId, NamedCollection};
//! # let mut repos = NamedCollection::new("repo_name");
//! # let record = serde_json::json!({"repo_name": "foo"}).as_object().unwrap().clone();
//! # repos.insert(EntityId::from("1"), record).unwrap();
//!
//! let collections: [&dyn NameSource; 1] = [&repos];
//! assert!(!is_name_available("foo", &collections));
//! assert!(is_name_available("baz", &collections));
//! ```
//!
//! [`NameSource`]: nw_state::NameSource

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod characters;
pub mod config;
pub mod error;
pub mod lists;
pub mod missing;
pub mod rules;
pub mod uniqueness;

// Re-exports
pub use characters::{first_forbidden_character, has_no_forbidden_character, FORBIDDEN_CHARACTERS};
pub use config::ValidationConfig;
pub use error::{ConfigError, NameError};
pub use lists::{all_elements_present_in_list, duplicate_elements, elements_missing_from_list};
pub use missing::{find_missing_required_fields, MissingFieldPolicy};
pub use rules::{
    check_chain_name, check_channel_name, check_kms_name, check_source_name, check_user_name,
    NameScope, NameValidator,
};
pub use uniqueness::{find_name_collision, is_name_available, Collision};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
