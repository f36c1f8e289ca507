//! Installer Entity State
//!
//! Normalized `byId`/`allIds` collections for the entities configured in the
//! installer wizard.
//!
//! # Overview
//!
//! - **EntityId**: Opaque identifier of a record
//! - **Record**: Ordered field-name to value mapping
//! - **NamedCollection**: `byId` map plus ordered `allIds`, never orphaned
//! - **InstallerState**: One collection per [`EntityKind`], with cascading removal
//! - **NameSource**: Read-only view consumed by the name validators
//!
//! # Example
//!
//! ```rust
//! use nw_state::{EntityKind, InstallerState};
//! use serde_json::json;
//!
//! let mut state = InstallerState::new();
//! let chain = state
//!     .add_new(EntityKind::Chain, json!({"chain_name": "cosmos"}).as_object().unwrap().clone())
//!     .unwrap();
//!
//! let removal = state.remove(EntityKind::Chain, &chain).unwrap();
//! assert_eq!(removal.len(), 1);
//! ```

#![warn(missing_docs)]

pub mod collection;
pub mod error;
pub mod id;
pub mod kind;
pub mod record;
pub mod state;
pub mod view;

// Re-exports
pub use collection::{CollectionParts, NamedCollection};
pub use error::StateError;
pub use id::EntityId;
pub use kind::EntityKind;
pub use record::{channel_ids_of, name_of, parent_of, Record, CHANNELS_FIELD, PARENT_FIELD};
pub use state::{InstallerState, Removal};
pub use view::{NameSource, ScopedCollection};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with installer state
    pub use crate::{
        EntityId, EntityKind, InstallerState, NameSource, NamedCollection, Record,
        ScopedCollection, StateError,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
