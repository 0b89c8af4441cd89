//! Time windows attached to an offer.

use crate::entity::domain_entity;

domain_entity! {
    /// Offer durations in seconds, mirroring the contract's `OfferDurations` struct.
    ///
    /// Wire order: `[fulfillmentPeriod, voucherValid, resolutionPeriod]`. The
    /// canonical string puts `voucherValid` first, matching how existing
    /// stored records were written.
    OfferDurations,
    OfferDurationsStruct[3],
    canonical["voucherValid", "fulfillmentPeriod", "resolutionPeriod"] {
        /// Fulfillment period as a decimal `uint256` string.
        fulfillment_period: "fulfillmentPeriod" => LargeIntegerString, fulfillment_period_is_valid;
        // TODO: range-check voucherValid and resolutionPeriod (currently shape only)
        /// Voucher validity duration as a decimal `uint256` string.
        voucher_valid: "voucherValid" => LargeIntegerString, voucher_valid_is_valid;
        /// Resolution period as a decimal `uint256` string.
        resolution_period: "resolutionPeriod" => LargeIntegerString, resolution_period_is_valid;
    }
}
