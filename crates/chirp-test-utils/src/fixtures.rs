//! Sample records for tests and benchmarks.
//!
//! The mapping fixtures are small hand-picked samples in each of the
//! parameterizations the conversion rules consume. [`posterior_table`]
//! builds a deterministic array-mode table: identical seeds produce
//! identical tables.

use chirp_core::{catalog, Body, ParamMap, ParamTable, Value};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::f64::consts::{PI, TAU};

/// A mapping record sampled in chirp mass and mass ratio.
pub fn mchirp_q_map() -> ParamMap {
    ParamMap::from_fields([
        (catalog::MCHIRP, Value::Scalar(10.0)),
        (catalog::Q, Value::Scalar(0.5)),
    ])
    .expect("fixture fields are consistent")
}

/// A mapping record with one body's spin in spherical coordinates.
pub fn spin_map(body: Body) -> ParamMap {
    let [a, az, po] = catalog::spherical_spin_fields(body);
    ParamMap::from_fields([
        (a, Value::Scalar(0.8)),
        (az, Value::Scalar(0.3)),
        (po, Value::Scalar(1.1)),
    ])
    .expect("fixture fields are consistent")
}

/// A mapping record in the masses + effective/asymmetric spin basis.
pub fn effective_spin_map() -> ParamMap {
    ParamMap::from_fields([
        (catalog::MASS1, Value::Scalar(36.0)),
        (catalog::MASS2, Value::Scalar(29.0)),
        (catalog::CHI_EFF, Value::Scalar(0.2)),
        (catalog::CHI_A, Value::Scalar(0.05)),
        (catalog::XI1, Value::Scalar(0.3)),
        (catalog::XI2, Value::Scalar(0.1)),
        (catalog::PHI_A, Value::Scalar(0.4)),
        (catalog::PHI_S, Value::Scalar(1.9)),
    ])
    .expect("fixture fields are consistent")
}

/// A mapping record with only a luminosity distance.
pub fn distance_map() -> ParamMap {
    ParamMap::from_fields([(catalog::DISTANCE, Value::Scalar(440.0))])
        .expect("fixture fields are consistent")
}

/// A deterministic array-mode posterior table.
///
/// Columns: chirp mass, mass ratio, both spherical spin triples, and
/// luminosity distance, so the standard registry can produce the full
/// base-parameter set. Identical `(rows, seed)` yield identical tables.
pub fn posterior_table(rows: usize, seed: u64) -> ParamTable {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut column = |lo: f64, hi: f64| -> Vec<f64> {
        (0..rows).map(|_| rng.random_range(lo..hi)).collect()
    };

    let columns = [
        (catalog::MCHIRP, column(5.0, 40.0)),
        (catalog::Q, column(0.1, 1.0)),
        (catalog::SPIN1_A, column(0.0, 0.99)),
        (catalog::SPIN1_AZIMUTHAL, column(0.0, TAU)),
        (catalog::SPIN1_POLAR, column(0.0, PI)),
        (catalog::SPIN2_A, column(0.0, 0.99)),
        (catalog::SPIN2_AZIMUTHAL, column(0.0, TAU)),
        (catalog::SPIN2_POLAR, column(0.0, PI)),
        (catalog::DISTANCE, column(50.0, 2000.0)),
    ];
    ParamTable::from_columns(columns).expect("fixture columns are consistent")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirp_core::Record;

    #[test]
    fn posterior_table_is_deterministic() {
        let a = posterior_table(16, 42);
        let b = posterior_table(16, 42);
        assert_eq!(a, b);

        let c = posterior_table(16, 43);
        assert_ne!(a, c, "different seeds should differ");
    }

    #[test]
    fn posterior_table_has_requested_rows() {
        let table = posterior_table(7, 1);
        assert_eq!(table.rows(), 7);
        assert_eq!(table.width(), 9);
    }

    #[test]
    fn fixtures_use_canonical_names() {
        for name in mchirp_q_map()
            .field_names()
            .iter()
            .chain(effective_spin_map().field_names().iter())
            .chain(distance_map().field_names().iter())
        {
            assert!(catalog::is_canonical(name), "{name}");
        }
    }
}
