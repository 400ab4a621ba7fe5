//! The [`Rule`] value object and its execution context.
//!
//! Rules are immutable after construction. Inverting a rule is a pure
//! operation returning a new value with the input/output field lists
//! and the transform pair swapped; applying `inverse()` twice restores
//! the original rule.

use chirp_core::{ConversionError, FieldMap, Record};
use smallvec::SmallVec;

/// A canonical field name from the catalog.
pub type FieldName = &'static str;

/// Ordered list of field names; rules never need more than eight.
pub type FieldList = SmallVec<[FieldName; 8]>;

/// A transform: reads fields through the context, returns the computed
/// output fields. Plain `fn` pointers keep rules stateless and give
/// rule values structural equality.
pub type TransformFn = fn(&TransformContext<'_>) -> Result<FieldMap, ConversionError>;

/// Which direction a rule currently runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// The direction the rule was constructed in.
    Forward,
    /// The swapped direction produced by [`Rule::inverse`].
    Inverted,
}

impl Orientation {
    /// The opposite orientation.
    pub fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Inverted,
            Self::Inverted => Self::Forward,
        }
    }
}

/// A named, stateless, invertible field-level conversion.
///
/// Declares the ordered input fields it requires, the ordered output
/// fields it produces, and the transform pair. Constructed in the
/// forward orientation via [`Rule::new`]; [`Rule::inverse`] returns the
/// dual rule without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    name: &'static str,
    inputs: FieldList,
    outputs: FieldList,
    apply: Option<TransformFn>,
    apply_inverse: Option<TransformFn>,
    orientation: Orientation,
}

impl Rule {
    /// A forward-oriented rule with no inverse transform.
    ///
    /// `inputs` and `outputs` must be disjoint; order is meaningful and
    /// is visible to the transform through [`TransformContext`].
    pub fn new(
        name: &'static str,
        inputs: &[FieldName],
        outputs: &[FieldName],
        apply: TransformFn,
    ) -> Self {
        debug_assert!(
            inputs.iter().all(|f| !outputs.contains(f)),
            "rule '{name}': inputs and outputs must be disjoint"
        );
        Self {
            name,
            inputs: FieldList::from_slice(inputs),
            outputs: FieldList::from_slice(outputs),
            apply: Some(apply),
            apply_inverse: None,
            orientation: Orientation::Forward,
        }
    }

    /// Attach the inverse transform.
    pub fn with_inverse(mut self, apply_inverse: TransformFn) -> Self {
        self.apply_inverse = Some(apply_inverse);
        self
    }

    /// Rule name, for error reporting.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fields this rule requires, in transform order. Read-only snapshot.
    pub fn inputs(&self) -> &[FieldName] {
        &self.inputs
    }

    /// Fields this rule produces, in transform order. Read-only snapshot.
    pub fn outputs(&self) -> &[FieldName] {
        &self.outputs
    }

    /// Current direction of this rule.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether the current direction has a transform to run.
    ///
    /// `false` only after [`inverse`](Self::inverse) on a rule that
    /// never supplied an inverse transform.
    pub fn is_implemented(&self) -> bool {
        self.apply.is_some()
    }

    /// The dual rule: inputs⇄outputs, transform pair swapped.
    ///
    /// A pure structural flip; no validity check of the swapped
    /// transform happens here. A missing inverse transform is only
    /// reported when [`convert`](Self::convert) is called. Applying
    /// `inverse` twice yields the original rule.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            name: self.name,
            inputs: self.outputs.clone(),
            outputs: self.inputs.clone(),
            apply: self.apply_inverse,
            apply_inverse: self.apply,
            orientation: self.orientation.flipped(),
        }
    }

    /// Apply the current-direction transform and merge the computed
    /// fields into a new record.
    ///
    /// Existing fields are never modified; the returned record carries
    /// them all plus the rule's outputs.
    pub fn convert(&self, record: &dyn Record) -> Result<Box<dyn Record>, ConversionError> {
        let apply = self.apply.ok_or_else(|| ConversionError::NotImplemented {
            rule: self.name.to_string(),
        })?;
        let ctx = TransformContext {
            rule: self.name,
            inputs: &self.inputs,
            outputs: &self.outputs,
            record,
        };
        let new_fields = apply(&ctx)?;
        format_output(record, new_fields)
    }
}

/// Merge computed fields into the record, according to representation.
///
/// Array-mode records return a new instance with the fields appended;
/// mapping-mode records return the merged mapping. Representations
/// that do not support enrichment fail with
/// [`RecordError::Unsupported`](chirp_core::RecordError::Unsupported).
pub fn format_output(
    old_record: &dyn Record,
    new_fields: FieldMap,
) -> Result<Box<dyn Record>, ConversionError> {
    old_record.with_fields(new_fields).map_err(ConversionError::from)
}

/// What a transform function sees: the record plus the rule's *current*
/// ordered field-name lists.
///
/// Transforms that consume their inputs positionally (the spherical
/// spin rules) read the names from here rather than hardcoding them, so
/// the same function serves both bodies and both orientations.
pub struct TransformContext<'a> {
    rule: &'static str,
    inputs: &'a [FieldName],
    outputs: &'a [FieldName],
    record: &'a dyn Record,
}

impl TransformContext<'_> {
    /// The rule's current ordered input names.
    pub fn inputs(&self) -> &[FieldName] {
        self.inputs
    }

    /// The rule's current ordered output names.
    pub fn outputs(&self) -> &[FieldName] {
        self.outputs
    }

    /// Required field lookup.
    ///
    /// Fails with [`ConversionError::MissingField`] when the record does
    /// not contain `name`. This is the standalone-use failure mode;
    /// under the driver the applicability check makes it unreachable.
    pub fn req(&self, name: &str) -> Result<chirp_core::Value, ConversionError> {
        self.record
            .get(name)
            .ok_or_else(|| ConversionError::MissingField {
                rule: self.rule.to_string(),
                field: name.to_string(),
            })
    }
}
