//! Chirp: conversions between compact-binary source parameterizations.
//!
//! Samplers explore a convenient parameter basis (chirp mass and mass
//! ratio, effective spins); downstream consumers need a standard basis
//! (component masses, Cartesian spins, redshift). Chirp applies a fixed
//! registry of named, invertible, field-level conversion rules to a
//! record of named parameter fields, adding whichever standard fields
//! the sampled basis determines.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Chirp sub-crates. For most users, adding `chirp` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use chirp::prelude::*;
//!
//! // A sampler produced chirp mass, mass ratio, and a distance.
//! let record = ParamMap::from_fields([
//!     (catalog::MCHIRP, Value::Scalar(10.0)),
//!     (catalog::Q, Value::Scalar(0.5)),
//!     (catalog::DISTANCE, Value::Scalar(440.0)),
//! ])
//! .unwrap();
//!
//! // Enrich it with the standard base parameters.
//! let record = add_base_parameters(Box::new(record)).unwrap();
//! assert!(record.contains(catalog::MASS1));
//! assert!(record.contains(catalog::MASS2));
//! assert!(record.contains(catalog::REDSHIFT));
//!
//! // Conversions are additive: the sampled fields are untouched.
//! assert_eq!(record.get(catalog::MCHIRP), Some(Value::Scalar(10.0)));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `chirp-core` | Field catalog, values, records, errors |
//! | [`relations`] | `chirp-relations` | Pure mass/spin/coordinate/cosmology relations |
//! | [`transforms`] | `chirp-transforms` | Conversion rules, registry, driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Field catalog, values, records, and errors (`chirp-core`).
pub use chirp_core as types;

/// Pure numeric parameter relations (`chirp-relations`).
pub use chirp_relations as relations;

/// Conversion rules, the fixed registry, and the driver
/// (`chirp-transforms`).
pub use chirp_transforms as transforms;

/// Common imports for typical Chirp usage.
///
/// ```rust
/// use chirp::prelude::*;
/// ```
pub mod prelude {
    // Records and values
    pub use chirp_core::{catalog, Body, FieldMap, ParamMap, ParamTable, Record, Value};

    // Errors
    pub use chirp_core::{ConversionError, RecordError};

    // Rules and driver
    pub use chirp_transforms::{
        add_base_parameters, apply_rules, distance_to_redshift, mass_spin_to_cartesian_spin,
        mchirp_q_to_mass1_mass2, registry, spherical_spin_to_cartesian, Orientation, Rule,
    };
}
