//! # shelf-core
//!
//! Turns a submitted item description into a validated [`MetadataRecord`]
//! and keeps the formatted result in a per-session [`SessionLog`].
//!
//! ```
//! use shelf_core::{RawSubmission, Registry, SessionLog};
//!
//! let mut log = SessionLog::new();
//! let raw = RawSubmission::from_form([
//!     ("title", "Dune"),
//!     ("author", "Herbert"),
//!     ("year", "1965"),
//!     ("size", "2.5"),
//! ]);
//!
//! assert!(Registry::new().submit("digital", &raw, &mut log));
//! assert_eq!(log.entries()[0], "Digital Resource | Dune | Herbert | 1965 | 2.5MB");
//! ```

pub mod config;
pub mod factory;
pub mod item;
pub mod record;
pub mod registry;
pub mod submission;

pub use config::{AppConfig, AppConfigTrait, ConfigError, ConfigSource, Environment};
pub use factory::{ItemFactory, MAX_FILE_SIZE_MB, MIN_FILE_SIZE_MB};
pub use item::{ItemKind, UnknownItemKind};
pub use record::{ItemDetails, MetadataRecord, SUMMARY_SEPARATOR};
pub use registry::{Registry, Rejection, SessionLog};
pub use submission::RawSubmission;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
