//! Mass parameterizations: component masses, chirp mass, mass ratio.
//!
//! The mass ratio is secondary over primary, `q = mass2 / mass1`, so
//! `q` lies in `(0, 1]` when `mass1` is the heavier body. The
//! `primary_mass`/`secondary_mass` helpers make the inverse relations
//! well-defined even when the caller's `mass1`/`mass2` are unordered.

/// Chirp mass from the component masses:
/// `(m1 * m2)^(3/5) / (m1 + m2)^(1/5)`.
pub fn mchirp_from_mass1_mass2(mass1: f64, mass2: f64) -> f64 {
    (mass1 * mass2).powf(0.6) / (mass1 + mass2).powf(0.2)
}

/// Mass ratio (secondary over primary) from the component masses.
///
/// Orders the masses internally, so the result is always in `(0, 1]`.
pub fn q_from_mass1_mass2(mass1: f64, mass2: f64) -> f64 {
    secondary_mass(mass1, mass2) / primary_mass(mass1, mass2)
}

/// Symmetric mass ratio `m1 * m2 / (m1 + m2)^2`.
pub fn eta_from_mass1_mass2(mass1: f64, mass2: f64) -> f64 {
    let mtotal = mass1 + mass2;
    mass1 * mass2 / (mtotal * mtotal)
}

/// Total mass `m1 + m2`.
pub fn mtotal_from_mass1_mass2(mass1: f64, mass2: f64) -> f64 {
    mass1 + mass2
}

/// The heavier of the two component masses.
pub fn primary_mass(mass1: f64, mass2: f64) -> f64 {
    mass1.max(mass2)
}

/// The lighter of the two component masses.
pub fn secondary_mass(mass1: f64, mass2: f64) -> f64 {
    mass1.min(mass2)
}

/// Primary mass from chirp mass and mass ratio:
/// `mchirp * (1 + q)^(1/5) * q^(-3/5)`.
pub fn mass1_from_mchirp_q(mchirp: f64, q: f64) -> f64 {
    mchirp * (1.0 + q).powf(0.2) * q.powf(-0.6)
}

/// Secondary mass from chirp mass and mass ratio:
/// `mchirp * (1 + q)^(1/5) * q^(2/5)`.
pub fn mass2_from_mchirp_q(mchirp: f64, q: f64) -> f64 {
    mchirp * (1.0 + q).powf(0.2) * q.powf(0.4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn equal_mass_chirp() {
        // Equal masses m: mchirp = (m^2)^(3/5) / (2m)^(1/5) = m / 2^(1/5).
        let m = 30.0;
        let mc = mchirp_from_mass1_mass2(m, m);
        assert!(close(mc, m / 2f64.powf(0.2), 1e-12), "{mc}");
        assert_eq!(q_from_mass1_mass2(m, m), 1.0);
    }

    #[test]
    fn component_masses_from_mchirp_q() {
        let (m1, m2) = (36.0, 29.0);
        let mc = mchirp_from_mass1_mass2(m1, m2);
        let q = q_from_mass1_mass2(m1, m2);
        assert!(close(mass1_from_mchirp_q(mc, q), m1, 1e-12));
        assert!(close(mass2_from_mchirp_q(mc, q), m2, 1e-12));
    }

    #[test]
    fn q_ignores_argument_order() {
        assert_eq!(q_from_mass1_mass2(10.0, 40.0), 0.25);
        assert_eq!(q_from_mass1_mass2(40.0, 10.0), 0.25);
    }

    #[test]
    fn eta_peaks_at_equal_mass() {
        assert!(close(eta_from_mass1_mass2(20.0, 20.0), 0.25, 1e-12));
        assert!(eta_from_mass1_mass2(30.0, 10.0) < 0.25);
    }

    proptest! {
        #[test]
        fn mass_roundtrip(
            m1 in 1.0f64..300.0,
            q in 0.02f64..1.0,
        ) {
            let m2 = m1 * q;
            let mc = mchirp_from_mass1_mass2(m1, m2);
            let q_back = q_from_mass1_mass2(m1, m2);
            prop_assert!(close(q_back, q, 1e-10));
            prop_assert!(close(mass1_from_mchirp_q(mc, q_back), m1, 1e-10));
            prop_assert!(close(mass2_from_mchirp_q(mc, q_back), m2, 1e-10));
        }

        #[test]
        fn mchirp_roundtrip(
            mc in 0.5f64..200.0,
            q in 0.02f64..1.0,
        ) {
            let m1 = mass1_from_mchirp_q(mc, q);
            let m2 = mass2_from_mchirp_q(mc, q);
            prop_assert!(m1 >= m2);
            prop_assert!(close(mchirp_from_mass1_mass2(m1, m2), mc, 1e-10));
        }

        #[test]
        fn primary_never_below_secondary(
            m1 in 1.0f64..300.0,
            m2 in 1.0f64..300.0,
        ) {
            prop_assert!(primary_mass(m1, m2) >= secondary_mass(m1, m2));
            let q = q_from_mass1_mass2(m1, m2);
            prop_assert!(q > 0.0 && q <= 1.0);
        }
    }
}
