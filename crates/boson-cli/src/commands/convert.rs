//! Conversions between keyed records and wire structs.

use boson_domain::{Dispute, DomainEntity, OfferDurations};
use serde_json::Value;

use crate::{input, EntityKind};

/// Reads a keyed object and prints the wire array.
pub fn to_struct(kind: EntityKind, input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let value = input::read_json(input)?;
    let record = match value {
        Value::Object(record) => record,
        _ => return Err("expected a keyed JSON object".into()),
    };

    let wire = match kind {
        EntityKind::Dispute => Dispute::from_object(&record).to_struct_values(),
        EntityKind::OfferDurations => OfferDurations::from_object(&record).to_struct_values(),
    };

    println!("{}", Value::Array(wire));
    Ok(())
}

/// Reads a wire array and prints the keyed object.
pub fn from_struct(kind: EntityKind, input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let value = input::read_json(input)?;
    let elements = match value {
        Value::Array(elements) => elements,
        _ => return Err("expected a JSON array in wire order".into()),
    };

    let record = match kind {
        EntityKind::Dispute => Dispute::from_struct_slice(&elements)?.to_object(),
        EntityKind::OfferDurations => OfferDurations::from_struct_slice(&elements)?.to_object(),
    };

    println!("{}", Value::Object(record));
    Ok(())
}
