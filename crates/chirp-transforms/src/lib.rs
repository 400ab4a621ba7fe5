//! Conversion rules and driver for compact-binary parameter records.
//!
//! A [`Rule`] is an immutable, stateless value object declaring the
//! fields it consumes and produces, with a forward and (optionally) an
//! inverse transform. The [`driver`](crate::driver) walks the fixed
//! [`registry`] in order and applies every rule whose inputs are
//! already present and whose outputs are not, accumulating new fields
//! onto the record.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod driver;
pub mod rule;
pub mod rules;

pub use driver::{add_base_parameters, apply_rules, registry};
pub use rule::{format_output, Orientation, Rule, TransformContext};
pub use rules::{
    distance_to_redshift, mass_spin_to_cartesian_spin, mchirp_q_to_mass1_mass2,
    spherical_spin_to_cartesian,
};
