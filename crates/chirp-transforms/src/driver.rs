//! The conversion driver: fixed rule registry and single-pass application.

use crate::rule::Rule;
use crate::rules;
use chirp_core::{Body, ConversionError, Record};
use indexmap::IndexSet;

/// The fixed rule registry, in application order.
///
/// Rules are stateless; a fresh set is constructed per driver
/// invocation. Order determines evaluation order only; it is not a
/// dependency graph, and no topological sort or cycle detection is
/// performed.
pub fn registry() -> Vec<Rule> {
    vec![
        rules::mchirp_q_to_mass1_mass2(),
        rules::spherical_spin_to_cartesian(Body::Primary),
        rules::spherical_spin_to_cartesian(Body::Secondary),
        rules::mass_spin_to_cartesian_spin(),
        rules::distance_to_redshift(),
    ]
}

/// Apply `rules` to `record` in a single forward pass.
///
/// A rule fires iff all of its inputs are present and its outputs are
/// not all present. A rule with only some outputs present still fires;
/// on mapping-mode records the colliding outputs are overwritten.
/// Rules whose inputs never materialize are silently skipped. Field
/// names are re-read after each application, so a rule sees everything
/// earlier rules produced. There is no fixed-point iteration: a rule
/// whose inputs are produced by a *later* rule never fires.
///
/// The first failing rule aborts the pass and its error propagates.
/// No rollback is attempted: enrichment performed by earlier rules is
/// never undone, it is abandoned along with the consumed record.
pub fn apply_rules(
    rules: &[Rule],
    mut record: Box<dyn Record>,
) -> Result<Box<dyn Record>, ConversionError> {
    for rule in rules {
        let current: IndexSet<String> = record.field_names().into_iter().collect();
        let inputs_present = rule.inputs().iter().all(|f| current.contains(*f));
        let outputs_present = rule.outputs().iter().all(|f| current.contains(*f));
        if inputs_present && !outputs_present {
            record = rule.convert(record.as_ref())?;
        }
    }
    Ok(record)
}

/// Enrich a record with the standard base parameters.
///
/// Walks the fixed [`registry`] once, adding component masses,
/// Cartesian spin components, and redshift wherever the sampled
/// parameterization provides the required inputs. Re-running on an
/// already-enriched record is a no-op.
pub fn add_base_parameters(record: Box<dyn Record>) -> Result<Box<dyn Record>, ConversionError> {
    apply_rules(&registry(), record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::TransformContext;
    use chirp_core::{catalog, lift, FieldMap, ParamMap, ParamTable, Value};
    use chirp_relations::{cosmology, mass};
    use indexmap::IndexMap;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * a.abs().max(b.abs()).max(1.0)
    }

    fn names(record: &dyn Record) -> Vec<String> {
        record.field_names()
    }

    #[test]
    fn driver_adds_component_masses() {
        let record = ParamMap::from_fields([
            (catalog::MCHIRP, Value::Scalar(10.0)),
            (catalog::Q, Value::Scalar(0.5)),
        ])
        .unwrap();
        let out = add_base_parameters(Box::new(record)).unwrap();

        let m1 = out.get(catalog::MASS1).unwrap().as_scalar().unwrap();
        let m2 = out.get(catalog::MASS2).unwrap().as_scalar().unwrap();
        assert!(close(m1, mass::mass1_from_mchirp_q(10.0, 0.5), 1e-12));
        assert!(close(m2, mass::mass2_from_mchirp_q(10.0, 0.5), 1e-12));
        // Inputs unchanged and still present.
        assert_eq!(out.get(catalog::MCHIRP), Some(Value::Scalar(10.0)));
        assert_eq!(out.get(catalog::Q), Some(Value::Scalar(0.5)));
    }

    #[test]
    fn driver_is_idempotent() {
        let record =
            ParamMap::from_fields([(catalog::DISTANCE, Value::Scalar(440.0))]).unwrap();
        let once = add_base_parameters(Box::new(record)).unwrap();
        let names_once = names(once.as_ref());
        let z_once = once.get(catalog::REDSHIFT).unwrap();

        let twice = add_base_parameters(once).unwrap();
        assert_eq!(names(twice.as_ref()), names_once);
        assert_eq!(twice.get(catalog::REDSHIFT), Some(z_once));
        assert_eq!(twice.get(catalog::DISTANCE), Some(Value::Scalar(440.0)));
    }

    #[test]
    fn rules_without_inputs_are_silently_skipped() {
        let record =
            ParamMap::from_fields([(catalog::MCHIRP, Value::Scalar(10.0))]).unwrap();
        // q is missing: no rule fires, nothing is added, no error.
        let out = add_base_parameters(Box::new(record)).unwrap();
        assert_eq!(names(out.as_ref()), vec!["mchirp"]);
    }

    #[test]
    fn effective_spin_record_gains_exactly_six_fields() {
        let record = ParamMap::from_fields([
            (catalog::MASS1, Value::Scalar(36.0)),
            (catalog::MASS2, Value::Scalar(29.0)),
            (catalog::CHI_EFF, Value::Scalar(0.2)),
            (catalog::CHI_A, Value::Scalar(0.05)),
            (catalog::XI1, Value::Scalar(0.3)),
            (catalog::XI2, Value::Scalar(0.1)),
            (catalog::PHI_A, Value::Scalar(0.4)),
            (catalog::PHI_S, Value::Scalar(1.9)),
        ])
        .unwrap();
        let out = add_base_parameters(Box::new(record)).unwrap();
        let names = names(out.as_ref());
        assert_eq!(names.len(), 8 + 6);
        for f in ["spin1x", "spin1y", "spin1z", "spin2x", "spin2y", "spin2z"] {
            assert!(names.contains(&f.to_string()), "missing {f}");
        }
    }

    #[test]
    fn chained_rules_fire_in_registry_order() {
        // mchirp/q produce the masses the mass-spin rule needs; both fire
        // in one pass because the mass rule comes first in the registry.
        let record = ParamMap::from_fields([
            (catalog::MCHIRP, Value::Scalar(28.1)),
            (catalog::Q, Value::Scalar(0.8)),
            (catalog::CHI_EFF, Value::Scalar(0.1)),
            (catalog::CHI_A, Value::Scalar(0.02)),
            (catalog::XI1, Value::Scalar(0.2)),
            (catalog::XI2, Value::Scalar(0.05)),
            (catalog::PHI_A, Value::Scalar(1.0)),
            (catalog::PHI_S, Value::Scalar(2.0)),
        ])
        .unwrap();
        let out = add_base_parameters(Box::new(record)).unwrap();
        assert!(out.contains(catalog::MASS1));
        assert!(out.contains(catalog::SPIN2Z));
    }

    #[test]
    fn driver_enriches_table_records() {
        let table = ParamTable::from_columns([
            (catalog::MCHIRP, vec![10.0, 20.0]),
            (catalog::Q, vec![0.5, 1.0]),
            (catalog::DISTANCE, vec![100.0, 800.0]),
        ])
        .unwrap();
        let out = add_base_parameters(Box::new(table)).unwrap();

        let out = out
            .downcast_ref::<ParamTable>()
            .expect("array-mode in, array-mode out");
        assert_eq!(out.rows(), 2);
        let z = out.column(catalog::REDSHIFT).unwrap();
        assert!(close(cosmology::luminosity_distance(z[0]), 100.0, 1e-6));
        let m1 = out.column(catalog::MASS1).unwrap();
        assert!(close(m1[1], mass::mass1_from_mchirp_q(20.0, 1.0), 1e-12));
    }

    // ── ordering limitation ────────────────────────────────────

    fn emit_q(ctx: &TransformContext<'_>) -> Result<FieldMap, ConversionError> {
        let eta = ctx.req(catalog::ETA)?;
        let mut out = IndexMap::new();
        // q from eta on the q <= 1 branch.
        out.insert(
            catalog::Q,
            lift(&[&eta], |v| {
                let eta = v[0];
                let half = 0.5 / eta - 1.0;
                half - (half * half - 1.0).sqrt()
            })?,
        );
        Ok(out)
    }

    fn emit_eta(ctx: &TransformContext<'_>) -> Result<FieldMap, ConversionError> {
        let m1 = ctx.req(catalog::MASS1)?;
        let m2 = ctx.req(catalog::MASS2)?;
        let mut out = IndexMap::new();
        out.insert(
            catalog::ETA,
            lift(&[&m1, &m2], |v| mass::eta_from_mass1_mass2(v[0], v[1]))?,
        );
        Ok(out)
    }

    #[test]
    fn rule_ordered_before_its_producer_never_fires() {
        // B (eta -> q) precedes A (mass1, mass2 -> eta). A single pass
        // produces eta but not q: the driver does not iterate to a fixed
        // point, and this documents that limitation.
        let consumer = Rule::new("q_from_eta", &[catalog::ETA], &[catalog::Q], emit_q);
        let producer = Rule::new(
            "eta_from_masses",
            &[catalog::MASS1, catalog::MASS2],
            &[catalog::ETA],
            emit_eta,
        );
        let record = ParamMap::from_fields([
            (catalog::MASS1, Value::Scalar(30.0)),
            (catalog::MASS2, Value::Scalar(15.0)),
        ])
        .unwrap();

        let out = apply_rules(&[consumer, producer], Box::new(record)).unwrap();
        assert!(out.contains(catalog::ETA));
        assert!(!out.contains(catalog::Q), "single pass must not chain backwards");
    }

    #[test]
    fn failure_mid_pass_propagates_rule_error() {
        fn fail(_ctx: &TransformContext<'_>) -> Result<FieldMap, ConversionError> {
            Err(ConversionError::NotImplemented {
                rule: "always_fails".into(),
            })
        }
        let good = Rule::new(
            "eta_from_masses",
            &[catalog::MASS1, catalog::MASS2],
            &[catalog::ETA],
            emit_eta,
        );
        let bad = Rule::new("always_fails", &[catalog::ETA], &[catalog::Q], fail);
        let record = ParamMap::from_fields([
            (catalog::MASS1, Value::Scalar(30.0)),
            (catalog::MASS2, Value::Scalar(15.0)),
        ])
        .unwrap();

        // The pass aborts at the failing rule; the error carries its name.
        let err = apply_rules(&[good, bad], Box::new(record)).unwrap_err();
        assert_eq!(
            err,
            ConversionError::NotImplemented {
                rule: "always_fails".into()
            }
        );
    }

    #[test]
    fn partial_outputs_present_still_fires() {
        // mass1 present but mass2 missing: outputs not all present, so
        // the mass rule fires and overwrites mass1 on a mapping record.
        let record = ParamMap::from_fields([
            (catalog::MCHIRP, Value::Scalar(10.0)),
            (catalog::Q, Value::Scalar(0.5)),
            (catalog::MASS1, Value::Scalar(999.0)),
        ])
        .unwrap();
        let out = add_base_parameters(Box::new(record)).unwrap();
        let m1 = out.get(catalog::MASS1).unwrap().as_scalar().unwrap();
        assert!(close(m1, mass::mass1_from_mchirp_q(10.0, 0.5), 1e-12));
        assert!(out.contains(catalog::MASS2));
    }
}
