//! Canonical field names for compact-binary source parameters.
//!
//! Records and conversion rules refer to parameters exclusively through
//! these constants. A name is unique within a record; no two fields
//! share a name.

/// Primary (heavier) component mass, in solar masses.
pub const MASS1: &str = "mass1";
/// Secondary (lighter) component mass, in solar masses.
pub const MASS2: &str = "mass2";
/// Chirp mass, in solar masses.
pub const MCHIRP: &str = "mchirp";
/// Mass ratio, secondary over primary (`0 < q <= 1`).
pub const Q: &str = "q";
/// Symmetric mass ratio `mass1 * mass2 / (mass1 + mass2)^2`.
pub const ETA: &str = "eta";
/// Total mass `mass1 + mass2`, in solar masses.
pub const MTOTAL: &str = "mtotal";

/// Dimensionless spin magnitude of the primary.
pub const SPIN1_A: &str = "spin1_a";
/// Azimuthal angle of the primary's spin, in radians.
pub const SPIN1_AZIMUTHAL: &str = "spin1_azimuthal";
/// Polar angle of the primary's spin, in radians.
pub const SPIN1_POLAR: &str = "spin1_polar";
/// Cartesian x component of the primary's spin.
pub const SPIN1X: &str = "spin1x";
/// Cartesian y component of the primary's spin.
pub const SPIN1Y: &str = "spin1y";
/// Cartesian z component of the primary's spin.
pub const SPIN1Z: &str = "spin1z";

/// Dimensionless spin magnitude of the secondary.
pub const SPIN2_A: &str = "spin2_a";
/// Azimuthal angle of the secondary's spin, in radians.
pub const SPIN2_AZIMUTHAL: &str = "spin2_azimuthal";
/// Polar angle of the secondary's spin, in radians.
pub const SPIN2_POLAR: &str = "spin2_polar";
/// Cartesian x component of the secondary's spin.
pub const SPIN2X: &str = "spin2x";
/// Cartesian y component of the secondary's spin.
pub const SPIN2Y: &str = "spin2y";
/// Cartesian z component of the secondary's spin.
pub const SPIN2Z: &str = "spin2z";

/// Effective aligned spin (mass-weighted sum of z components).
pub const CHI_EFF: &str = "chi_eff";
/// Antisymmetric aligned spin (mass-weighted difference of z components).
pub const CHI_A: &str = "chi_a";
/// In-plane spin magnitude of the primary.
pub const XI1: &str = "xi1";
/// Mass-ratio-scaled in-plane spin magnitude of the secondary.
pub const XI2: &str = "xi2";
/// Difference of the spin azimuthal angles, in radians.
pub const PHI_A: &str = "phi_a";
/// Sum of the spin azimuthal angles, in radians.
pub const PHI_S: &str = "phi_s";

/// Luminosity distance, in Mpc.
pub const DISTANCE: &str = "distance";
/// Cosmological redshift.
pub const REDSHIFT: &str = "redshift";

/// Every canonical name, in declaration order.
pub const ALL: &[&str] = &[
    MASS1,
    MASS2,
    MCHIRP,
    Q,
    ETA,
    MTOTAL,
    SPIN1_A,
    SPIN1_AZIMUTHAL,
    SPIN1_POLAR,
    SPIN1X,
    SPIN1Y,
    SPIN1Z,
    SPIN2_A,
    SPIN2_AZIMUTHAL,
    SPIN2_POLAR,
    SPIN2X,
    SPIN2Y,
    SPIN2Z,
    CHI_EFF,
    CHI_A,
    XI1,
    XI2,
    PHI_A,
    PHI_S,
    DISTANCE,
    REDSHIFT,
];

/// Whether `name` is one of the canonical parameter names.
pub fn is_canonical(name: &str) -> bool {
    ALL.contains(&name)
}

/// Selects which component of the binary a per-body field group refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Body {
    /// The heavier component (`spin1_*` fields).
    Primary,
    /// The lighter component (`spin2_*` fields).
    Secondary,
}

impl Body {
    /// Index used in field names for this body (1 or 2).
    pub fn index(self) -> u32 {
        match self {
            Self::Primary => 1,
            Self::Secondary => 2,
        }
    }
}

/// Ordered spherical spin triple for a body: `[a, azimuthal, polar]`.
///
/// The ordering is load-bearing: transforms that consume these names
/// positionally rely on it.
pub fn spherical_spin_fields(body: Body) -> [&'static str; 3] {
    match body {
        Body::Primary => [SPIN1_A, SPIN1_AZIMUTHAL, SPIN1_POLAR],
        Body::Secondary => [SPIN2_A, SPIN2_AZIMUTHAL, SPIN2_POLAR],
    }
}

/// Ordered Cartesian spin triple for a body: `[x, y, z]`.
pub fn cartesian_spin_fields(body: Body) -> [&'static str; 3] {
    match body {
        Body::Primary => [SPIN1X, SPIN1Y, SPIN1Z],
        Body::Secondary => [SPIN2X, SPIN2Y, SPIN2Z],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_names_unique() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a, b, "duplicate catalog name {a}");
            }
        }
    }

    #[test]
    fn canonical_lookup() {
        assert!(is_canonical("mchirp"));
        assert!(is_canonical("spin2_azimuthal"));
        assert!(!is_canonical("parmeters_q"));
        assert!(!is_canonical(""));
    }

    #[test]
    fn body_triples_match_index() {
        for body in [Body::Primary, Body::Secondary] {
            let idx = body.index().to_string();
            for name in spherical_spin_fields(body) {
                assert!(name.starts_with(&format!("spin{idx}")), "{name}");
            }
            for name in cartesian_spin_fields(body) {
                assert!(name.starts_with(&format!("spin{idx}")), "{name}");
            }
        }
    }

    #[test]
    fn body_triples_are_canonical() {
        for body in [Body::Primary, Body::Secondary] {
            for name in spherical_spin_fields(body)
                .into_iter()
                .chain(cartesian_spin_fields(body))
            {
                assert!(is_canonical(name), "{name} missing from ALL");
            }
        }
    }
}
