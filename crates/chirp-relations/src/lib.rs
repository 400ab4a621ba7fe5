//! Pure numeric relations between compact-binary source parameters.
//!
//! Every function here is a stateless `f64 -> f64` relation named after
//! the physical quantity it computes. The conversion rules in
//! `chirp-transforms` lift these elementwise over record fields; nothing
//! in this crate knows about records or rules.
//!
//! Conventions (fixed here, used everywhere):
//!
//! - `mass1` is the primary (heavier) body; `q = mass2 / mass1 <= 1`.
//! - Angles are in radians; azimuth in `[0, 2*pi)`, polar in `[0, pi]`.
//! - Distances are in Mpc; masses in solar masses.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coordinates;
pub mod cosmology;
pub mod mass;
pub mod spin;
