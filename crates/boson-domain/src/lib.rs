//! Domain entities for Boson Protocol contract structs.
//!
//! Each entity converts between a keyed record (field name to value), the
//! positional wire struct the contract declares, and a canonical string form.
//! Construction never validates; callers check [`DomainEntity::is_valid`]
//! before trusting an entity, e.g. before passing its wire struct to a
//! transaction.
//!
#![deny(missing_docs)]

/// Dispute entity.
pub mod dispute;
/// Shared conversions and the entity declaration macro.
pub mod entity;
/// Errors raised while decoding entities.
pub mod errors;
/// Offer durations entity.
pub mod offer_durations;
/// Static revert-reason table.
pub mod reasons;
/// Field tables and shape rules.
pub mod schema;
/// Large-integer and numeric-code parsing.
pub mod uint;
/// Field validation errors.
pub mod validation;

pub use dispute::{Dispute, DisputeStruct};
pub use entity::{DomainEntity, Record};
pub use errors::EntityError;
pub use offer_durations::{OfferDurations, OfferDurationsStruct};
pub use primitive_types::U256;
pub use reasons::{reasons_table, RevertReason, UnknownReason};
pub use schema::{FieldKind, FieldSpec};
pub use validation::ValidationError;
