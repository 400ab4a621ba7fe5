//! Core types for the Chirp parameter-conversion library.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the field-name catalog, the [`Value`] scalar/array type with
//! elementwise lifting, the [`Record`] abstraction over the two
//! supported record representations, and the error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod record;
pub mod value;

pub use catalog::Body;
pub use error::{ConversionError, RecordError};
pub use record::{FieldMap, ParamMap, ParamTable, Record};
pub use value::{lift, Value};
