//! Validate command implementation.

use boson_domain::{Dispute, DomainEntity, OfferDurations};
use serde_json::{json, Map, Value};

use crate::{input, output, EntityKind};

pub fn run(
    kind: EntityKind,
    input: Option<String>,
    strict: bool,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let value = input::read_json(input)?;

    let (name, valid) = match kind {
        EntityKind::Dispute => report::<Dispute>(&value, json_output)?,
        EntityKind::OfferDurations => report::<OfferDurations>(&value, json_output)?,
    };

    if strict && !valid {
        return Err(format!("{} is invalid", name).into());
    }
    Ok(())
}

fn report<E: DomainEntity>(
    value: &Value,
    json_output: bool,
) -> Result<(&'static str, bool), Box<dyn std::error::Error>> {
    let entity = E::from_value(value)?;
    let valid = entity.is_valid();
    tracing::debug!(entity = E::NAME, valid, "validated entity");

    if json_output {
        let fields: Map<String, Value> = entity
            .field_validity()
            .into_iter()
            .map(|(name, ok)| (name.to_string(), Value::Bool(ok)))
            .collect();
        let report = json!({
            "entity": E::NAME,
            "valid": valid,
            "fields": fields,
            "invalid_fields": entity.invalid_fields(),
            "record": entity.to_object()
        });
        println!("{}", output::format_json(&report));
    } else {
        output::print_table_header();
        for (spec, field_value) in E::FIELDS.iter().zip(entity.values()) {
            let problem = spec.check(field_value).err().map(|e| e.to_string());
            println!("{}", output::format_field_row(spec.name, field_value, problem));
        }
        println!();
        println!("{}: {}", E::NAME, if valid { "valid" } else { "invalid" });
    }

    Ok((E::NAME, valid))
}
