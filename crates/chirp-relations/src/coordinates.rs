//! Spherical/Cartesian coordinate transforms for spin vectors.
//!
//! Spherical triples are `(a, azimuthal, polar)`: magnitude, azimuth
//! measured in the x-y plane from the x axis, polar measured from the
//! z axis. The zero vector maps to the all-zero spherical triple.

use std::f64::consts::TAU;

/// Cartesian `(x, y, z)` from a spherical `(a, azimuthal, polar)` triple.
pub fn spherical_to_cartesian(a: f64, azimuthal: f64, polar: f64) -> (f64, f64, f64) {
    let x = a * polar.sin() * azimuthal.cos();
    let y = a * polar.sin() * azimuthal.sin();
    let z = a * polar.cos();
    (x, y, z)
}

/// Spherical `(a, azimuthal, polar)` from a Cartesian `(x, y, z)` triple.
///
/// The azimuth is normalized to `[0, 2*pi)` and the polar angle lies in
/// `[0, pi]`. A zero vector yields `(0, 0, 0)`.
pub fn cartesian_to_spherical(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let a = (x * x + y * y + z * z).sqrt();
    if a == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    let azimuthal = y.atan2(x).rem_euclid(TAU);
    let polar = (z / a).clamp(-1.0, 1.0).acos();
    (a, azimuthal, polar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn poles_map_to_z_axis() {
        let (x, y, z) = spherical_to_cartesian(0.9, 1.234, 0.0);
        assert!(close(x, 0.0, 1e-12) && close(y, 0.0, 1e-12));
        assert!(close(z, 0.9, 1e-12));

        let (_, _, z) = spherical_to_cartesian(0.9, 0.0, PI);
        assert!(close(z, -0.9, 1e-12));
    }

    #[test]
    fn equator_has_no_z() {
        let (x, y, z) = spherical_to_cartesian(1.0, FRAC_PI_2, FRAC_PI_2);
        assert!(close(x, 0.0, 1e-12));
        assert!(close(y, 1.0, 1e-12));
        assert!(close(z, 0.0, 1e-12));
    }

    #[test]
    fn zero_vector_is_fixed_point() {
        assert_eq!(cartesian_to_spherical(0.0, 0.0, 0.0), (0.0, 0.0, 0.0));
    }

    #[test]
    fn azimuth_normalized_to_positive_range() {
        // y < 0 puts atan2 in (-pi, 0); rem_euclid folds it into [0, 2*pi).
        let (_, az, _) = cartesian_to_spherical(1.0, -1.0, 0.0);
        assert!(close(az, 7.0 * PI / 4.0, 1e-12), "{az}");
    }

    proptest! {
        #[test]
        fn spherical_roundtrip(
            a in 1e-3f64..1.0,
            az in 0.0f64..TAU,
            po in 1e-3f64..(PI - 1e-3),
        ) {
            let (x, y, z) = spherical_to_cartesian(a, az, po);
            let (a2, az2, po2) = cartesian_to_spherical(x, y, z);
            prop_assert!(close(a2, a, 1e-10));
            // Azimuth wraps; compare on the circle.
            let daz = (az2 - az).abs().min(TAU - (az2 - az).abs());
            prop_assert!(daz < 1e-9, "az {az} vs {az2}");
            prop_assert!(close(po2, po, 1e-9));
        }

        #[test]
        fn magnitude_is_euclidean_norm(
            x in -1.0f64..1.0,
            y in -1.0f64..1.0,
            z in -1.0f64..1.0,
        ) {
            let (a, _, _) = cartesian_to_spherical(x, y, z);
            prop_assert!(close(a, (x * x + y * y + z * z).sqrt(), 1e-12));
        }
    }
}
