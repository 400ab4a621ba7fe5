//! The concrete conversion rules.
//!
//! Each constructor builds a [`Rule`] wired to the pure relations in
//! `chirp-relations`, lifted elementwise over record fields. The two
//! spherical-spin rules share one pair of transform functions: the
//! functions read the ordered field triples from the
//! [`TransformContext`], so the `Body` parameter only selects which
//! catalog names the rule declares.

use crate::rule::{Rule, TransformContext};
use chirp_core::{catalog, lift, Body, ConversionError, FieldMap, Value};
use chirp_relations::{coordinates, cosmology, mass, spin};
use indexmap::IndexMap;

/// chirp mass + mass ratio → component masses. Invertible.
pub fn mchirp_q_to_mass1_mass2() -> Rule {
    Rule::new(
        "mchirp_q_to_mass1_mass2",
        &[catalog::MCHIRP, catalog::Q],
        &[catalog::MASS1, catalog::MASS2],
        component_masses_from_mchirp_q,
    )
    .with_inverse(mchirp_q_from_component_masses)
}

/// Spherical spin coordinates → Cartesian spin components for one body.
/// Invertible.
pub fn spherical_spin_to_cartesian(body: Body) -> Rule {
    let name = match body {
        Body::Primary => "spherical_spin1_to_cartesian_spin1",
        Body::Secondary => "spherical_spin2_to_cartesian_spin2",
    };
    Rule::new(
        name,
        &catalog::spherical_spin_fields(body),
        &catalog::cartesian_spin_fields(body),
        cartesian_from_spherical_spin,
    )
    .with_inverse(spherical_from_cartesian_spin)
}

/// Masses + effective/asymmetric spin combination → Cartesian spins for
/// both bodies. No inverse.
pub fn mass_spin_to_cartesian_spin() -> Rule {
    Rule::new(
        "mass_spin_to_cartesian_spin",
        &[
            catalog::MASS1,
            catalog::MASS2,
            catalog::CHI_EFF,
            catalog::CHI_A,
            catalog::XI1,
            catalog::XI2,
            catalog::PHI_A,
            catalog::PHI_S,
        ],
        &[
            catalog::SPIN1X,
            catalog::SPIN1Y,
            catalog::SPIN1Z,
            catalog::SPIN2X,
            catalog::SPIN2Y,
            catalog::SPIN2Z,
        ],
        cartesian_spins_from_mass_spin,
    )
}

/// Luminosity distance → cosmological redshift. No inverse.
pub fn distance_to_redshift() -> Rule {
    Rule::new(
        "distance_to_redshift",
        &[catalog::DISTANCE],
        &[catalog::REDSHIFT],
        redshift_from_distance,
    )
}

// ── Transform functions ────────────────────────────────────────────

fn component_masses_from_mchirp_q(
    ctx: &TransformContext<'_>,
) -> Result<FieldMap, ConversionError> {
    let mchirp = ctx.req(catalog::MCHIRP)?;
    let q = ctx.req(catalog::Q)?;
    let mut out = IndexMap::new();
    out.insert(
        catalog::MASS1,
        lift(&[&mchirp, &q], |v| mass::mass1_from_mchirp_q(v[0], v[1]))?,
    );
    out.insert(
        catalog::MASS2,
        lift(&[&mchirp, &q], |v| mass::mass2_from_mchirp_q(v[0], v[1]))?,
    );
    Ok(out)
}

fn mchirp_q_from_component_masses(
    ctx: &TransformContext<'_>,
) -> Result<FieldMap, ConversionError> {
    let mass1 = ctx.req(catalog::MASS1)?;
    let mass2 = ctx.req(catalog::MASS2)?;
    let mut out = IndexMap::new();
    out.insert(
        catalog::MCHIRP,
        lift(&[&mass1, &mass2], |v| {
            mass::mchirp_from_mass1_mass2(v[0], v[1])
        })?,
    );
    out.insert(
        catalog::Q,
        lift(&[&mass1, &mass2], |v| mass::q_from_mass1_mass2(v[0], v[1]))?,
    );
    Ok(out)
}

/// Forward spherical transform, shared by both bodies.
///
/// Consumes the context's current input triple `[a, azimuthal, polar]`
/// and produces its current output triple `[x, y, z]`. The names, not
/// the positions, change between bodies and orientations.
fn cartesian_from_spherical_spin(
    ctx: &TransformContext<'_>,
) -> Result<FieldMap, ConversionError> {
    let a = ctx.req(ctx.inputs()[0])?;
    let azimuthal = ctx.req(ctx.inputs()[1])?;
    let polar = ctx.req(ctx.inputs()[2])?;
    let args: [&Value; 3] = [&a, &azimuthal, &polar];

    let mut out = IndexMap::new();
    out.insert(
        ctx.outputs()[0],
        lift(&args, |v| coordinates::spherical_to_cartesian(v[0], v[1], v[2]).0)?,
    );
    out.insert(
        ctx.outputs()[1],
        lift(&args, |v| coordinates::spherical_to_cartesian(v[0], v[1], v[2]).1)?,
    );
    out.insert(
        ctx.outputs()[2],
        lift(&args, |v| coordinates::spherical_to_cartesian(v[0], v[1], v[2]).2)?,
    );
    Ok(out)
}

/// Inverse spherical transform, shared by both bodies.
fn spherical_from_cartesian_spin(
    ctx: &TransformContext<'_>,
) -> Result<FieldMap, ConversionError> {
    let x = ctx.req(ctx.inputs()[0])?;
    let y = ctx.req(ctx.inputs()[1])?;
    let z = ctx.req(ctx.inputs()[2])?;
    let args: [&Value; 3] = [&x, &y, &z];

    let mut out = IndexMap::new();
    out.insert(
        ctx.outputs()[0],
        lift(&args, |v| coordinates::cartesian_to_spherical(v[0], v[1], v[2]).0)?,
    );
    out.insert(
        ctx.outputs()[1],
        lift(&args, |v| coordinates::cartesian_to_spherical(v[0], v[1], v[2]).1)?,
    );
    out.insert(
        ctx.outputs()[2],
        lift(&args, |v| coordinates::cartesian_to_spherical(v[0], v[1], v[2]).2)?,
    );
    Ok(out)
}

fn cartesian_spins_from_mass_spin(
    ctx: &TransformContext<'_>,
) -> Result<FieldMap, ConversionError> {
    let mass1 = ctx.req(catalog::MASS1)?;
    let mass2 = ctx.req(catalog::MASS2)?;
    let chi_eff = ctx.req(catalog::CHI_EFF)?;
    let chi_a = ctx.req(catalog::CHI_A)?;
    let xi1 = ctx.req(catalog::XI1)?;
    let xi2 = ctx.req(catalog::XI2)?;
    let phi_a = ctx.req(catalog::PHI_A)?;
    let phi_s = ctx.req(catalog::PHI_S)?;

    let mut out = IndexMap::new();
    out.insert(
        catalog::SPIN1X,
        lift(&[&xi1, &phi_a, &phi_s], |v| {
            spin::spin1x_from_xi1_phi_a_phi_s(v[0], v[1], v[2])
        })?,
    );
    out.insert(
        catalog::SPIN1Y,
        lift(&[&xi1, &phi_a, &phi_s], |v| {
            spin::spin1y_from_xi1_phi_a_phi_s(v[0], v[1], v[2])
        })?,
    );
    out.insert(
        catalog::SPIN1Z,
        lift(&[&mass1, &mass2, &chi_eff, &chi_a], |v| {
            spin::spin1z_from_mass1_mass2_chi_eff_chi_a(v[0], v[1], v[2], v[3])
        })?,
    );
    out.insert(
        catalog::SPIN2X,
        lift(&[&mass1, &mass2, &xi2, &phi_a, &phi_s], |v| {
            spin::spin2x_from_mass1_mass2_xi2_phi_a_phi_s(v[0], v[1], v[2], v[3], v[4])
        })?,
    );
    out.insert(
        catalog::SPIN2Y,
        lift(&[&mass1, &mass2, &xi2, &phi_a, &phi_s], |v| {
            spin::spin2y_from_mass1_mass2_xi2_phi_a_phi_s(v[0], v[1], v[2], v[3], v[4])
        })?,
    );
    out.insert(
        catalog::SPIN2Z,
        lift(&[&mass1, &mass2, &chi_eff, &chi_a], |v| {
            spin::spin2z_from_mass1_mass2_chi_eff_chi_a(v[0], v[1], v[2], v[3])
        })?,
    );
    Ok(out)
}

fn redshift_from_distance(ctx: &TransformContext<'_>) -> Result<FieldMap, ConversionError> {
    let distance = ctx.req(catalog::DISTANCE)?;
    let mut out = IndexMap::new();
    out.insert(
        catalog::REDSHIFT,
        lift(&[&distance], |v| cosmology::redshift(v[0]))?,
    );
    Ok(out)
}
