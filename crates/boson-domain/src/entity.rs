//! Conversions and validity roll-up shared by every domain entity.
//!
//! An entity is a value object with a fixed, ordered set of named fields. The
//! order is declared once in [`DomainEntity::FIELDS`] and is the positional
//! order of the contract's struct. Field values are held as raw JSON so that a
//! malformed value survives construction and is only judged on demand.

use serde_json::Value;
use tracing::debug;

use crate::errors::EntityError;
use crate::schema::{self, json_type, FieldSpec};
use crate::validation::ValidationError;

/// Keyed record representation: field name to value.
pub type Record = serde_json::Map<String, Value>;

/// Behaviour shared by all domain entities.
///
/// Implementors only describe their fields; every conversion and check is
/// derived from that description.
pub trait DomainEntity: Sized + Clone {
    /// Entity name as the contract declares it.
    const NAME: &'static str;
    /// Fields in wire order.
    const FIELDS: &'static [FieldSpec];
    /// Field names in construction order, which is the key order of the
    /// canonical string. May differ from the wire order.
    const CANONICAL_ORDER: &'static [&'static str];

    /// Current field values in wire order; `None` marks an absent field.
    fn values(&self) -> Vec<Option<&Value>>;

    /// Builds an entity from wire-ordered values without validation.
    fn from_values(values: Vec<Option<Value>>) -> Self;

    /// Builds an entity from a keyed record.
    ///
    /// Extra keys are ignored and missing keys leave the field absent.
    fn from_object(record: &Record) -> Self {
        Self::from_values(
            Self::FIELDS
                .iter()
                .map(|spec| record.get(spec.name).cloned())
                .collect(),
        )
    }

    /// Builds an entity from wire elements, normalizing large-integer fields
    /// to decimal strings. Callers guarantee the element count.
    fn from_wire<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Self::from_values(
            Self::FIELDS
                .iter()
                .zip(elements)
                .map(|(spec, element)| Some(spec.kind.normalize_wire(element)))
                .collect(),
        )
    }

    /// Builds an entity from a dynamically sized wire sequence.
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::StructArity`] when the sequence length differs
    /// from the declared layout.
    fn from_struct_slice(elements: &[Value]) -> Result<Self, EntityError> {
        let expected = Self::FIELDS.len();
        if elements.len() != expected {
            debug!(
                entity = Self::NAME,
                expected,
                found = elements.len(),
                "rejecting wire struct with wrong arity"
            );
            return Err(EntityError::StructArity {
                entity: Self::NAME,
                expected,
                found: elements.len(),
            });
        }
        Ok(Self::from_wire(elements.iter().cloned()))
    }

    /// Builds an entity from either a keyed object or a wire array.
    fn from_value(value: &Value) -> Result<Self, EntityError> {
        match value {
            Value::Object(record) => Ok(Self::from_object(record)),
            Value::Array(elements) => Self::from_struct_slice(elements),
            other => Err(EntityError::UnexpectedShape {
                entity: Self::NAME,
                found: json_type(other),
            }),
        }
    }

    /// Fresh keyed record holding only the present, declared fields.
    fn to_object(&self) -> Record {
        Self::FIELDS
            .iter()
            .zip(self.values())
            .filter_map(|(spec, value)| value.map(|v| (spec.name.to_string(), v.clone())))
            .collect()
    }

    /// Wire-ordered field values, unnormalized. Absent fields become `null`.
    fn to_struct_values(&self) -> Vec<Value> {
        self.values()
            .into_iter()
            .map(|value| value.cloned().unwrap_or(Value::Null))
            .collect()
    }

    /// Present fields in canonical key order.
    fn canonical_entries(&self) -> Vec<(&'static str, &Value)> {
        let values = self.values();
        Self::CANONICAL_ORDER
            .iter()
            .filter_map(|name| {
                let index = Self::FIELDS.iter().position(|spec| spec.name == *name)?;
                values[index].map(|v| (*name, v))
            })
            .collect()
    }

    /// Canonical string form: compact JSON with keys in [`Self::CANONICAL_ORDER`].
    fn to_canonical_string(&self) -> String {
        let members: Vec<String> = self
            .canonical_entries()
            .into_iter()
            .map(|(name, v)| format!("{}:{}", Value::from(name), v))
            .collect();
        format!("{{{}}}", members.join(","))
    }

    /// Parses the canonical string form.
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::Decode`] for malformed JSON and
    /// [`EntityError::UnexpectedShape`] when the text is not a JSON object.
    fn from_canonical_string(s: &str) -> Result<Self, EntityError> {
        let value: Value = serde_json::from_str(s).map_err(|e| {
            debug!(entity = Self::NAME, error = %e, "canonical string decode failed");
            e
        })?;
        match value {
            Value::Object(record) => Ok(Self::from_object(&record)),
            other => Err(EntityError::UnexpectedShape {
                entity: Self::NAME,
                found: json_type(&other),
            }),
        }
    }

    /// Checks every field, reporting the first failure in wire order.
    fn check(&self) -> Result<(), ValidationError> {
        schema::check_fields(Self::FIELDS, self.values()).map_err(|e| {
            debug!(entity = Self::NAME, error = %e, "entity failed validation");
            e
        })
    }

    /// Names of every field that fails its rule.
    fn invalid_fields(&self) -> Vec<&'static str> {
        schema::invalid_fields(Self::FIELDS, self.values())
    }

    /// Per-field validity, in wire order.
    fn field_validity(&self) -> Vec<(&'static str, bool)> {
        Self::FIELDS
            .iter()
            .zip(self.values())
            .map(|(spec, value)| (spec.name, spec.check(value).is_ok()))
            .collect()
    }

    /// True iff every field passes its rule.
    fn is_valid(&self) -> bool {
        self.check().is_ok()
    }
}

/// Declares a domain entity from its field table.
///
/// Generates the struct, a positional constructor, the fixed-size wire struct
/// type, `from_struct`/`to_struct`, one `<field>_is_valid` predicate per
/// field, the [`DomainEntity`] impl, and `Serialize`/`Display`/`FromStr`
/// over the canonical string form. `canonical [...]` lists the keys in
/// construction order and must name every field exactly once.
macro_rules! domain_entity {
    (
        $(#[$meta:meta])*
        $name:ident, $wire:ident [$len:literal], canonical [$($ckey:literal),+] {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $key:literal => $kind:ident, $valid:ident;
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: Option<::serde_json::Value>,
            )+
        }

        #[doc = concat!("Positional wire layout of [`", stringify!($name), "`].")]
        pub type $wire = [::serde_json::Value; $len];

        const _: () = assert!($len == [$($key),+].len());
        const _: () = assert!($len == [$($ckey),+].len());

        impl $name {
            /// Creates an entity from field values without validation.
            pub fn new($($field: impl Into<::serde_json::Value>),+) -> Self {
                Self {
                    $($field: Some($field.into()),)+
                }
            }

            /// Builds an entity from its wire struct, normalizing large
            /// integers to decimal strings.
            pub fn from_struct(wire: $wire) -> Self {
                <Self as $crate::entity::DomainEntity>::from_wire(wire)
            }

            /// Field values in wire order, without normalization.
            pub fn to_struct(&self) -> $wire {
                [$(self.$field.clone().unwrap_or(::serde_json::Value::Null)),+]
            }

            $(
                #[doc = concat!("Whether `", $key, "` is a valid ", stringify!($kind), ".")]
                pub fn $valid(&self) -> bool {
                    $crate::schema::FieldKind::$kind.accepts(self.$field.as_ref())
                }
            )+
        }

        impl $crate::entity::DomainEntity for $name {
            const NAME: &'static str = stringify!($name);
            const FIELDS: &'static [$crate::schema::FieldSpec] = &[
                $($crate::schema::FieldSpec::new($key, $crate::schema::FieldKind::$kind)),+
            ];
            const CANONICAL_ORDER: &'static [&'static str] = &[$($ckey),+];

            fn values(&self) -> Vec<Option<&::serde_json::Value>> {
                vec![$(self.$field.as_ref()),+]
            }

            fn from_values(values: Vec<Option<::serde_json::Value>>) -> Self {
                let mut values = values.into_iter();
                Self {
                    $($field: values.next().flatten(),)+
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                use ::serde::ser::SerializeMap;

                let entries = $crate::entity::DomainEntity::canonical_entries(self);
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::entity::DomainEntity::to_canonical_string(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::errors::EntityError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::entity::DomainEntity>::from_canonical_string(s)
            }
        }
    };
}

pub(crate) use domain_entity;
