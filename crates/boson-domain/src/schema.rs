//! Declarative field tables and the generic routine that checks them.

use serde_json::Value;

use crate::uint::{parse_code, parse_uint, to_decimal_string};
use crate::validation::ValidationError;

/// Shape rule applied to a single entity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Decimal string holding an unsigned 256-bit integer.
    LargeIntegerString,
    /// Any string, including the empty string.
    PlainString,
    /// Native integral number within the safe-integer range.
    NumericCode,
}

impl FieldKind {
    /// Human-readable name of the accepted shape.
    pub fn expected(self) -> &'static str {
        match self {
            FieldKind::LargeIntegerString => "decimal integer string",
            FieldKind::PlainString => "string",
            FieldKind::NumericCode => "number",
        }
    }

    /// Checks a field value against this rule.
    ///
    /// `None` means the field is absent.
    pub fn check(self, field: &'static str, value: Option<&Value>) -> Result<(), ValidationError> {
        let value = value.ok_or(ValidationError::Missing { field })?;
        match (self, value) {
            (FieldKind::LargeIntegerString, Value::String(s)) => parse_uint(field, s).map(|_| ()),
            (FieldKind::PlainString, Value::String(_)) => Ok(()),
            (FieldKind::NumericCode, Value::Number(n)) => parse_code(field, n).map(|_| ()),
            (kind, other) => Err(ValidationError::TypeMismatch {
                field,
                expected: kind.expected(),
                found: json_type(other),
            }),
        }
    }

    /// Whether a field value passes this rule.
    pub fn accepts(self, value: Option<&Value>) -> bool {
        self.check("", value).is_ok()
    }

    /// Normalizes an element read from a wire struct.
    ///
    /// Only large-integer fields are rewritten (to decimal strings); every
    /// other kind passes through exactly as the wire produced it.
    pub fn normalize_wire(self, value: Value) -> Value {
        match self {
            FieldKind::LargeIntegerString => to_decimal_string(value),
            FieldKind::PlainString | FieldKind::NumericCode => value,
        }
    }
}

/// One named field of an entity and its shape rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    /// Keyed-record name of the field (the contract's field name).
    pub name: &'static str,
    /// Shape rule for the field's value.
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Declares a field.
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }

    /// Checks a value for this field.
    pub fn check(&self, value: Option<&Value>) -> Result<(), ValidationError> {
        self.kind.check(self.name, value)
    }
}

/// Checks values against a schema, in schema order, stopping at the first failure.
pub fn check_fields<'a, I>(schema: &[FieldSpec], values: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = Option<&'a Value>>,
{
    schema
        .iter()
        .zip(values)
        .try_for_each(|(spec, value)| spec.check(value))
}

/// Names of every field whose value fails its rule, in schema order.
pub fn invalid_fields<'a, I>(schema: &[FieldSpec], values: I) -> Vec<&'static str>
where
    I: IntoIterator<Item = Option<&'a Value>>,
{
    schema
        .iter()
        .zip(values)
        .filter(|(spec, value)| spec.check(*value).is_err())
        .map(|(spec, _)| spec.name)
        .collect()
}

/// JSON type name of a value, as used in error messages.
pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
