use boson_domain::{
    Dispute, DomainEntity, EntityError, OfferDurations, Record, ValidationError, U256,
};
use serde_json::{json, Value};

fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn dispute_with_numeric_state_is_valid() {
    let dispute = Dispute::from_object(&record(json!({
        "exchangeId": "5",
        "complaint": "broken item",
        "state": 1
    })));
    assert!(dispute.is_valid());
}

#[test]
fn dispute_with_string_state_is_invalid() {
    let dispute = Dispute::from_object(&record(json!({
        "exchangeId": "5",
        "complaint": "broken item",
        "state": "1"
    })));
    assert!(!dispute.is_valid());
    assert!(dispute.exchange_id_is_valid());
    assert!(dispute.complaint_is_valid());
    assert!(!dispute.state_is_valid());
}

#[test]
fn offer_durations_from_struct_to_object() {
    let durations = OfferDurations::from_struct([json!("86400"), json!("604800"), json!("1209600")]);
    assert_eq!(
        Value::Object(durations.to_object()),
        json!({
            "fulfillmentPeriod": "86400",
            "voucherValid": "604800",
            "resolutionPeriod": "1209600"
        })
    );
}

#[test]
fn non_numeric_exchange_id_is_invalid() {
    let dispute = Dispute::from_object(&record(json!({
        "exchangeId": "abc",
        "complaint": "x",
        "state": 0
    })));
    assert!(!dispute.exchange_id_is_valid());
}

#[test]
fn from_object_ignores_extra_keys() {
    let dispute = Dispute::from_object(&record(json!({
        "exchangeId": "9",
        "complaint": "c",
        "state": 3,
        "buyerId": "77"
    })));
    assert_eq!(
        Value::Object(dispute.to_object()),
        json!({"exchangeId": "9", "complaint": "c", "state": 3})
    );
}

#[test]
fn explicit_null_differs_from_absent() {
    let with_null = Dispute::from_object(&record(json!({"exchangeId": null})));
    let empty = Dispute::from_object(&Record::new());
    assert_ne!(with_null, empty);
    assert_eq!(with_null.to_string(), r#"{"exchangeId":null}"#);
    assert_eq!(empty.to_string(), "{}");
    assert!(!with_null.is_valid());
    assert!(!empty.is_valid());
}

#[test]
fn canonical_string_matches_serde_output() {
    let dispute = Dispute::new("18446744073709551616", "déjà vu \"quoted\"", 2);
    assert_eq!(dispute.to_string(), serde_json::to_string(&dispute).unwrap());
}

#[test]
fn canonical_string_parses_back() {
    let durations = OfferDurations::new("1", "2", "3");
    let parsed: OfferDurations = durations.to_string().parse().unwrap();
    assert_eq!(parsed, durations);
}

#[test]
fn canonical_string_decode_failures_surface() {
    assert!(matches!(
        Dispute::from_canonical_string("{not json"),
        Err(EntityError::Decode(_))
    ));
    assert!(matches!(
        Dispute::from_canonical_string("[1,2,3]"),
        Err(EntityError::UnexpectedShape { found: "array", .. })
    ));
}

#[test]
fn clone_is_independent() {
    let original = Dispute::new("5", "broken item", 1);
    let mut copy = original.clone();
    assert_eq!(copy, original);
    copy.complaint = Some(json!("changed"));
    assert_eq!(original.complaint, Some(json!("broken item")));
    assert_ne!(copy, original);
}

#[test]
fn struct_slice_with_wrong_arity_fails_fast() {
    let err = OfferDurations::from_struct_slice(&[json!("1"), json!("2")]).unwrap_err();
    assert!(matches!(
        err,
        EntityError::StructArity {
            entity: "OfferDurations",
            expected: 3,
            found: 2
        }
    ));
    assert_eq!(
        err.to_string(),
        "OfferDurations wire struct has 2 elements, expected 3"
    );
}

#[test]
fn from_value_dispatches_on_shape() {
    let keyed = Dispute::from_value(&json!({"exchangeId": "1", "complaint": "", "state": 0})).unwrap();
    let positional = Dispute::from_value(&json!([1, "", 0])).unwrap();
    assert_eq!(keyed, positional);
    assert!(matches!(
        Dispute::from_value(&json!("1")),
        Err(EntityError::UnexpectedShape { found: "string", .. })
    ));
}

#[test]
fn check_names_the_failing_field() {
    let durations = OfferDurations::new("1", "-2", "3");
    assert_eq!(
        durations.check(),
        Err(ValidationError::PatternMismatch {
            field: "voucherValid",
            value: "-2".into()
        })
    );
    assert_eq!(durations.invalid_fields(), vec!["voucherValid"]);
    assert_eq!(
        durations.field_validity(),
        vec![
            ("fulfillmentPeriod", true),
            ("voucherValid", false),
            ("resolutionPeriod", true)
        ]
    );
}

#[test]
fn uint256_bounds_are_enforced() {
    let max = U256::MAX.to_string();
    assert!(Dispute::new(max.as_str(), "c", 0).exchange_id_is_valid());
    let over = format!("{max}0");
    assert!(!Dispute::new(over.as_str(), "c", 0).exchange_id_is_valid());
}

#[test]
fn schema_declares_wire_order() {
    let names: Vec<&str> = OfferDurations::FIELDS.iter().map(|f| f.name).collect();
    assert_eq!(
        names,
        vec!["fulfillmentPeriod", "voucherValid", "resolutionPeriod"]
    );
    assert_eq!(Dispute::NAME, "Dispute");
}

#[test]
fn wire_numbers_beyond_u64_keep_every_digit() {
    let wire: Value =
        serde_json::from_str("[18446744073709551617, 100000000000000000000000, 1]").unwrap();
    let durations = OfferDurations::from_value(&wire).unwrap();
    assert_eq!(
        Value::Object(durations.to_object()),
        json!({
            "fulfillmentPeriod": "18446744073709551617",
            "voucherValid": "100000000000000000000000",
            "resolutionPeriod": "1"
        })
    );
    assert!(durations.is_valid());
}

#[test]
fn offer_durations_canonical_order_differs_from_wire_order() {
    let durations = OfferDurations::from_struct([json!("86400"), json!("604800"), json!("1209600")]);
    assert_eq!(
        durations.to_string(),
        r#"{"voucherValid":"604800","fulfillmentPeriod":"86400","resolutionPeriod":"1209600"}"#
    );
    assert_eq!(durations.to_struct(), [json!("86400"), json!("604800"), json!("1209600")]);
    assert_eq!(durations.to_string().parse::<OfferDurations>().unwrap(), durations);
}

#[test]
fn canonical_order_names_every_field_once() {
    fn assert_permutation<E: DomainEntity>() {
        let mut canonical: Vec<&str> = E::CANONICAL_ORDER.to_vec();
        let mut wire: Vec<&str> = E::FIELDS.iter().map(|f| f.name).collect();
        canonical.sort_unstable();
        wire.sort_unstable();
        assert_eq!(canonical, wire, "{}", E::NAME);
    }
    assert_permutation::<Dispute>();
    assert_permutation::<OfferDurations>();
}
