//! Effective-spin parameterizations and their inverses.
//!
//! Two independent pairs describe the six Cartesian spin components:
//!
//! - **Aligned**: `chi_eff` and `chi_a`, mass-weighted sum and
//!   difference of the z components. Together with the masses they
//!   determine `spin1z` and `spin2z` exactly.
//! - **In-plane**: `xi1`, `xi2` (in-plane magnitudes, the secondary's
//!   scaled by the squared mass ratio) and `phi_a`, `phi_s` (difference
//!   and sum of the azimuthal angles). Together with the masses they
//!   determine the four x/y components exactly.
//!
//! Each inverse below is the exact algebraic inverse of the forward
//! definition in this module.

/// Effective aligned spin `(m1*s1z + m2*s2z) / (m1 + m2)`.
pub fn chi_eff(mass1: f64, mass2: f64, spin1z: f64, spin2z: f64) -> f64 {
    (mass1 * spin1z + mass2 * spin2z) / (mass1 + mass2)
}

/// Antisymmetric aligned spin `(m1*s1z - m2*s2z) / (m1 + m2)`.
pub fn chi_a(mass1: f64, mass2: f64, spin1z: f64, spin2z: f64) -> f64 {
    (mass1 * spin1z - mass2 * spin2z) / (mass1 + mass2)
}

/// Primary z spin from the aligned pair:
/// `(m1 + m2) * (chi_eff + chi_a) / (2 * m1)`.
pub fn spin1z_from_mass1_mass2_chi_eff_chi_a(
    mass1: f64,
    mass2: f64,
    chi_eff: f64,
    chi_a: f64,
) -> f64 {
    (mass1 + mass2) * (chi_eff + chi_a) / (2.0 * mass1)
}

/// Secondary z spin from the aligned pair:
/// `(m1 + m2) * (chi_eff - chi_a) / (2 * m2)`.
pub fn spin2z_from_mass1_mass2_chi_eff_chi_a(
    mass1: f64,
    mass2: f64,
    chi_eff: f64,
    chi_a: f64,
) -> f64 {
    (mass1 + mass2) * (chi_eff - chi_a) / (2.0 * mass2)
}

/// Difference of the spin azimuthal angles, `az1 - az2`.
pub fn phi_a(spin1_azimuthal: f64, spin2_azimuthal: f64) -> f64 {
    spin1_azimuthal - spin2_azimuthal
}

/// Sum of the spin azimuthal angles, `az1 + az2`.
pub fn phi_s(spin1_azimuthal: f64, spin2_azimuthal: f64) -> f64 {
    spin1_azimuthal + spin2_azimuthal
}

/// Primary azimuth from the angle pair, `(phi_s + phi_a) / 2`.
pub fn phi1_from_phi_a_phi_s(phi_a: f64, phi_s: f64) -> f64 {
    0.5 * (phi_s + phi_a)
}

/// Secondary azimuth from the angle pair, `(phi_s - phi_a) / 2`.
pub fn phi2_from_phi_a_phi_s(phi_a: f64, phi_s: f64) -> f64 {
    0.5 * (phi_s - phi_a)
}

/// In-plane spin magnitude of the primary, `sqrt(s1x^2 + s1y^2)`.
pub fn xi1_from_spin1x_spin1y(spin1x: f64, spin1y: f64) -> f64 {
    spin1x.hypot(spin1y)
}

/// Mass-ratio-scaled in-plane spin magnitude of the secondary,
/// `(m2/m1)^2 * sqrt(s2x^2 + s2y^2)`.
pub fn xi2_from_mass1_mass2_spin2x_spin2y(
    mass1: f64,
    mass2: f64,
    spin2x: f64,
    spin2y: f64,
) -> f64 {
    let q = mass2 / mass1;
    q * q * spin2x.hypot(spin2y)
}

/// Primary x spin from the in-plane parameters, `xi1 * cos(phi1)`.
pub fn spin1x_from_xi1_phi_a_phi_s(xi1: f64, phi_a: f64, phi_s: f64) -> f64 {
    xi1 * phi1_from_phi_a_phi_s(phi_a, phi_s).cos()
}

/// Primary y spin from the in-plane parameters, `xi1 * sin(phi1)`.
pub fn spin1y_from_xi1_phi_a_phi_s(xi1: f64, phi_a: f64, phi_s: f64) -> f64 {
    xi1 * phi1_from_phi_a_phi_s(phi_a, phi_s).sin()
}

/// Secondary x spin from the in-plane parameters,
/// `(m1/m2)^2 * xi2 * cos(phi2)`.
pub fn spin2x_from_mass1_mass2_xi2_phi_a_phi_s(
    mass1: f64,
    mass2: f64,
    xi2: f64,
    phi_a: f64,
    phi_s: f64,
) -> f64 {
    let inv_q = mass1 / mass2;
    inv_q * inv_q * xi2 * phi2_from_phi_a_phi_s(phi_a, phi_s).cos()
}

/// Secondary y spin from the in-plane parameters,
/// `(m1/m2)^2 * xi2 * sin(phi2)`.
pub fn spin2y_from_mass1_mass2_xi2_phi_a_phi_s(
    mass1: f64,
    mass2: f64,
    xi2: f64,
    phi_a: f64,
    phi_s: f64,
) -> f64 {
    let inv_q = mass1 / mass2;
    inv_q * inv_q * xi2 * phi2_from_phi_a_phi_s(phi_a, phi_s).sin()
}
