use boson_domain::{uint::MAX_SAFE_INTEGER, Dispute, DomainEntity, OfferDurations, U256};
use proptest::prelude::*;
use serde_json::{json, Value};

fn decimal() -> impl Strategy<Value = String> {
    "[0-9]{1,60}"
}

fn state() -> impl Strategy<Value = i64> {
    -(MAX_SAFE_INTEGER as i64)..=(MAX_SAFE_INTEGER as i64)
}

fn uint256() -> impl Strategy<Value = U256> {
    any::<[u8; 32]>().prop_map(|bytes| U256::from_big_endian(&bytes))
}

fn as_u256(value: &Value) -> U256 {
    match value {
        Value::String(s) => U256::from_dec_str(s).unwrap(),
        Value::Number(n) => U256::from_dec_str(&n.to_string()).unwrap(),
        other => panic!("not an integer: {other}"),
    }
}

proptest! {
    #[test]
    fn dispute_object_round_trip(id in decimal(), complaint in ".*", code in state()) {
        let record = json!({"exchangeId": id, "complaint": complaint, "state": code});
        let dispute = Dispute::from_value(&record).unwrap();
        prop_assert!(dispute.is_valid());
        prop_assert_eq!(Value::Object(dispute.to_object()), record);
    }

    #[test]
    fn canonical_string_round_trip(a in decimal(), b in decimal(), c in decimal()) {
        let durations = OfferDurations::new(a, b, c);
        let parsed = OfferDurations::from_canonical_string(&durations.to_string()).unwrap();
        prop_assert_eq!(parsed, durations);
    }

    #[test]
    fn wire_round_trip_preserves_numeric_value(a in any::<u64>(), b in decimal(), c in any::<u64>()) {
        let wire = [json!(a), json!(b), json!(c)];
        let back = OfferDurations::from_struct(wire.clone()).to_struct();
        for (sent, received) in wire.iter().zip(back.iter()) {
            prop_assert!(received.is_string());
            prop_assert_eq!(as_u256(sent), as_u256(received));
        }
    }

    #[test]
    fn wire_round_trip_keeps_uint256_numbers_exact(a in uint256(), b in uint256(), c in uint256()) {
        let parsed: Value = serde_json::from_str(&format!("[{}, {}, {}]", a, b, c)).unwrap();
        let durations = OfferDurations::from_value(&parsed).unwrap();
        prop_assert!(durations.is_valid());
        let back = durations.to_struct();
        let (a, b, c) = (a.to_string(), b.to_string(), c.to_string());
        prop_assert_eq!(back[0].as_str(), Some(a.as_str()));
        prop_assert_eq!(back[1].as_str(), Some(b.as_str()));
        prop_assert_eq!(back[2].as_str(), Some(c.as_str()));
    }

    #[test]
    fn one_bad_field_flips_only_its_predicate(id in decimal(), complaint in ".*", code in state(), bad in 0usize..3) {
        let mut dispute = Dispute::new(id, complaint, code);
        match bad {
            0 => dispute.exchange_id = Some(json!(code)),
            1 => dispute.complaint = Some(json!(code)),
            _ => dispute.state = Some(json!(code.to_string())),
        }
        let predicates = [
            dispute.exchange_id_is_valid(),
            dispute.complaint_is_valid(),
            dispute.state_is_valid(),
        ];
        for (i, ok) in predicates.iter().enumerate() {
            prop_assert_eq!(*ok, i != bad);
        }
        prop_assert!(!dispute.is_valid());
        prop_assert_eq!(dispute.is_valid(), predicates.iter().all(|p| *p));
    }

    #[test]
    fn clone_survives_mutation_of_copy(a in decimal(), b in decimal(), c in decimal()) {
        let original = OfferDurations::new(a, b, c);
        let mut copy = original.clone();
        prop_assert_eq!(&copy, &original);
        copy.voucher_valid = None;
        prop_assert!(original.voucher_valid.is_some());
    }
}
