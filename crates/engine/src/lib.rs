//! Storage and rules for cash-flow entries.
//!
//! Entries are classified through a strict three-level tree,
//! `Type → Category → Subcategory`, plus a flat `Status`. The [`Engine`]
//! owns the database connection and exposes every read and write; each write
//! runs in its own transaction and entry writes are validated against the
//! tree before anything is persisted.

pub use amount::Amount;
pub use categories::Category;
pub use entries::{Entry, EntryInput};
pub use error::EngineError;
pub use ops::{Engine, EngineBuilder};
pub use subcategories::Subcategory;
pub use validation::{EntryPath, Field, FieldError, ValidationErrors, validate_path};

pub mod amount;
pub mod categories;
pub mod entries;
mod error;
mod ops;
pub mod statuses;
pub mod subcategories;
pub mod validation;
pub mod write_types;

type ResultEngine<T> = Result<T, EngineError>;
