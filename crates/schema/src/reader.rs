//! Field-by-field extraction from an untyped JSON object.
//!
//! A `FieldReader` checks presence and JSON type only, and never stops at the
//! first problem: every accessor records its violation and hands back a
//! placeholder so the schema can keep reading. Value constraints (lengths,
//! ranges) are declared on the record with `validator` and applied by
//! `finish`, which merges both sources in read order.

use serde_json::{Map, Number, Value};
use validator::{Validate, ValidationError};

use crate::error::{FieldViolation, ValidationErrors, ViolationKind};

/// Name of the pseudo-field used when the input itself is not an object.
pub const ROOT_FIELD: &str = "$";

pub struct FieldReader<'a> {
    object: Option<&'a Map<String, Value>>,
    root: Option<FieldViolation>,
    /// Every field read so far, with its shape violation if it had one.
    read: Vec<(&'static str, Option<ViolationKind>)>,
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn wrong_type(expected: &'static str, found: &Value) -> ViolationKind {
    ViolationKind::WrongType {
        expected,
        found: type_name(found),
    }
}

/// Translate one `validator` failure into our vocabulary.
fn constraint_kind(err: &ValidationError) -> Option<ViolationKind> {
    let param = |name: &str| err.params.get(name).and_then(Value::as_f64);
    match err.code.as_ref() {
        "length" => {
            let min = err
                .params
                .get("min")
                .and_then(Value::as_u64)
                .and_then(|n| usize::try_from(n).ok())
                .unwrap_or_default();
            Some(ViolationKind::TooShort { min })
        }
        "range" => Some(ViolationKind::OutOfRange {
            min: param("min")?,
            max: param("max")?,
        }),
        _ => None,
    }
}

impl<'a> FieldReader<'a> {
    pub fn new(input: &'a Value) -> Self {
        match input {
            Value::Object(map) => Self {
                object: Some(map),
                root: None,
                read: Vec::new(),
            },
            other => Self {
                object: None,
                root: Some(FieldViolation::new(ROOT_FIELD, wrong_type("object", other))),
                read: Vec::new(),
            },
        }
    }

    fn lookup(&self, field: &str) -> Option<&'a Value> {
        self.object.and_then(|map| map.get(field))
    }

    /// Record a read of `field` and return its converted value.
    ///
    /// `required` decides whether absence is a violation; `convert` returns the
    /// shape violation for a present value of the wrong type.
    fn take<T>(
        &mut self,
        field: &'static str,
        required: bool,
        convert: impl FnOnce(&'a Value) -> Result<T, ViolationKind>,
    ) -> Option<T> {
        let (value, violation) = match self.lookup(field) {
            None if required => (None, Some(ViolationKind::Missing)),
            None => (None, None),
            Some(raw) => match convert(raw) {
                Ok(v) => (Some(v), None),
                Err(kind) => (None, Some(kind)),
            },
        };
        self.read.push((field, violation));
        value
    }

    fn text(value: &Value) -> Result<String, ViolationKind> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| wrong_type("string", value))
    }

    fn flag(value: &Value) -> Result<bool, ViolationKind> {
        value.as_bool().ok_or_else(|| wrong_type("boolean", value))
    }

    /// Required string.
    pub fn string(&mut self, field: &'static str) -> String {
        self.take(field, true, Self::text).unwrap_or_default()
    }

    /// Optional string; may be absent, but not `null`.
    pub fn optional_string(&mut self, field: &'static str) -> Option<String> {
        self.take(field, false, Self::text)
    }

    /// Required boolean (`true`/`false` only, no coercion).
    pub fn boolean(&mut self, field: &'static str) -> bool {
        self.take(field, true, Self::flag).unwrap_or_default()
    }

    pub fn optional_boolean(&mut self, field: &'static str) -> Option<bool> {
        self.take(field, false, Self::flag)
    }

    /// Required number, kept exactly as written (integers stay integers).
    pub fn number(&mut self, field: &'static str) -> Number {
        self.take(field, true, |value| match value {
            Value::Number(n) => Ok(n.clone()),
            other => Err(wrong_type("number", other)),
        })
        .unwrap_or_else(|| Number::from(0))
    }

    /// Required integer. Fractional numbers, including `1.0`, are rejected.
    /// Values beyond `i64` saturate and are left to the range constraint.
    pub fn integer(&mut self, field: &'static str) -> i64 {
        self.take(field, true, |value| match value {
            Value::Number(n) if n.is_i64() => Ok(n.as_i64().unwrap_or_default()),
            Value::Number(n) if n.is_u64() => Ok(i64::MAX),
            Value::Number(_) => Err(ViolationKind::NotAnInteger),
            other => Err(wrong_type("integer", other)),
        })
        .unwrap_or_default()
    }

    /// Conclude the read: `Ok(record)` when neither the shape checks nor the
    /// record's declared constraints found anything.
    ///
    /// A field with a shape violation reports only that; its placeholder value
    /// is never judged against constraints.
    pub fn finish<T: Validate>(
        self,
        schema: &'static str,
        record: T,
    ) -> Result<T, ValidationErrors> {
        if let Some(root) = self.root {
            return Err(ValidationErrors::new(schema, vec![root]));
        }

        let constraints = record.validate().err();
        let by_field = constraints
            .as_ref()
            .map(validator::ValidationErrors::field_errors)
            .unwrap_or_default();

        let mut violations = Vec::new();
        for (field, shape) in self.read {
            match shape {
                Some(kind) => violations.push(FieldViolation::new(field, kind)),
                None => {
                    let failed = by_field.get(field).into_iter().flat_map(|errs| errs.iter());
                    violations.extend(
                        failed
                            .filter_map(constraint_kind)
                            .map(|kind| FieldViolation::new(field, kind)),
                    );
                }
            }
        }

        if violations.is_empty() {
            Ok(record)
        } else {
            Err(ValidationErrors::new(schema, violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// A record with no declared constraints.
    #[derive(Debug)]
    struct Unconstrained;

    impl Validate for Unconstrained {
        fn validate(&self) -> Result<(), validator::ValidationErrors> {
            Ok(())
        }
    }

    #[derive(Debug, PartialEq, Validate)]
    struct Row {
        #[validate(length(min = 1))]
        name: String,
        active: bool,
        #[validate(range(min = 1, max = 12))]
        month: i64,
        rate: Number,
    }

    fn kinds(err: &ValidationErrors) -> Vec<(&'static str, ViolationKind)> {
        err.violations()
            .iter()
            .map(|v| (v.field, v.kind.clone()))
            .collect()
    }

    fn read_row(input: &Value) -> Result<Row, ValidationErrors> {
        let mut r = FieldReader::new(input);
        let row = Row {
            name: r.string("name"),
            active: r.boolean("active"),
            month: r.integer("month"),
            rate: r.number("rate"),
        };
        r.finish("test", row)
    }

    #[test]
    fn non_object_root_reports_only_root() {
        let err = read_row(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(
            kinds(&err),
            vec![(ROOT_FIELD, ViolationKind::WrongType { expected: "object", found: "array" })]
        );
    }

    #[test]
    fn collects_shape_and_constraint_violations_in_read_order() {
        let err = read_row(&json!({ "name": "", "active": "yes", "month": 13 })).unwrap_err();
        assert_eq!(
            kinds(&err),
            vec![
                ("name", ViolationKind::TooShort { min: 1 }),
                ("active", ViolationKind::WrongType { expected: "boolean", found: "string" }),
                ("month", ViolationKind::OutOfRange { min: 1.0, max: 12.0 }),
                ("rate", ViolationKind::Missing),
            ]
        );
    }

    #[test]
    fn placeholder_of_a_missing_field_is_not_judged_by_constraints() {
        let err = read_row(&json!({ "active": true, "rate": 1 })).unwrap_err();
        assert_eq!(
            kinds(&err),
            vec![("name", ViolationKind::Missing), ("month", ViolationKind::Missing)]
        );
    }

    #[test]
    fn optional_fields_may_be_absent_but_not_null() {
        let input = json!({ "nickname": null });
        let mut r = FieldReader::new(&input);
        assert_eq!(r.optional_string("id"), None);
        assert_eq!(r.optional_boolean("flag"), None);
        assert_eq!(r.optional_string("nickname"), None);
        let err = r.finish("test", Unconstrained).unwrap_err();
        assert_eq!(
            kinds(&err),
            vec![("nickname", ViolationKind::WrongType { expected: "string", found: "null" })]
        );
    }

    #[test]
    fn fractional_integer_is_rejected() {
        for month in [json!(2.5), json!(4.0)] {
            let err = read_row(&json!({ "name": "n", "active": true, "month": month, "rate": 1 }))
                .unwrap_err();
            assert_eq!(kinds(&err), vec![("month", ViolationKind::NotAnInteger)]);
        }
    }

    #[test]
    fn oversized_integer_is_out_of_range() {
        let err = read_row(&json!({ "name": "n", "active": true, "month": u64::MAX, "rate": 1 }))
            .unwrap_err();
        assert_eq!(kinds(&err), vec![("month", ViolationKind::OutOfRange { min: 1.0, max: 12.0 })]);
    }

    #[test]
    fn min_length_counts_characters_not_bytes() {
        let input = json!({ "name": "€", "active": true, "month": 1, "rate": 1 });
        assert_eq!(read_row(&input).unwrap().name, "€");
    }

    #[test]
    fn numbers_keep_their_written_form() {
        let big = 9_007_199_254_740_993u64;
        let input = json!({ "name": "Acme", "active": true, "month": 4, "rate": big });
        let row = read_row(&input).unwrap();
        assert_eq!(row.rate, Number::from(9_007_199_254_740_993u64));
        assert_eq!(row.month, 4);

        let input = json!({ "name": "Acme", "active": true, "month": 4, "rate": 1.25 });
        assert_eq!(read_row(&input).unwrap().rate.as_f64(), Some(1.25));
    }
}
