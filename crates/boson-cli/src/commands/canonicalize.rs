//! Canonicalize command implementation.

use boson_domain::{Dispute, DomainEntity, OfferDurations};

use crate::{input, EntityKind};

pub fn run(kind: EntityKind, input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let value = input::read_json(input)?;

    let canonical = match kind {
        EntityKind::Dispute => Dispute::from_value(&value)?.to_canonical_string(),
        EntityKind::OfferDurations => OfferDurations::from_value(&value)?.to_canonical_string(),
    };

    println!("{}", canonical);
    Ok(())
}
