//! Dispute raised against an exchange.

use crate::entity::domain_entity;

domain_entity! {
    /// Dispute over an exchange, mirroring the contract's `Dispute` struct.
    ///
    /// Wire order: `[exchangeId, complaint, state]`. `state` stays a native
    /// number while `exchangeId` is a decimal string.
    Dispute, DisputeStruct[3], canonical["exchangeId", "complaint", "state"] {
        /// Exchange identifier as a decimal `uint256` string.
        exchange_id: "exchangeId" => LargeIntegerString, exchange_id_is_valid;
        /// Free-form complaint text.
        complaint: "complaint" => PlainString, complaint_is_valid;
        /// Dispute state code.
        state: "state" => NumericCode, state_is_valid;
    }
}
