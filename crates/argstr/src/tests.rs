// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Integration tests for the argument-value codec.

use super::*;

#[test]
fn test_full_workflow() {
    // 1. Device describes its arguments
    let rate_info = ArgInfo::new("rate", ArgKind::Float)
        .name("Sample Rate")
        .units("Hz")
        .default_value(1_000_000.0f64)
        .range(ArgRange::new(250_000.0, 20_000_000.0));

    let agc_info = ArgInfo::new("agc", ArgKind::Bool).default_value(false);

    // 2. Caller supplies arguments as markup
    let args: Kwargs = "rate=2400000, agc=on, driver=rtlsdr".parse().unwrap();

    // 3. Validate and decode through the codec
    let rate = args.get_value("rate").unwrap();
    assert!(rate_info.accepts(&rate));
    assert_eq!(rate.to_kind(ArgKind::Float).unwrap(), Scalar::F64(2_400_000.0));

    let agc = args.get_value("agc").unwrap();
    assert_eq!(agc.to_kind(agc_info.kind).unwrap(), Scalar::Bool(true));

    // 4. Text-like arguments pass through untouched
    let driver = args.get_value("driver").unwrap();
    assert_eq!(
        driver.to_kind(ArgKind::String).unwrap(),
        Scalar::String("rtlsdr".to_string())
    );

    // 5. Render back to markup (sorted keys)
    assert_eq!(args.to_string(), "agc=on, driver=rtlsdr, rate=2400000");
}

macro_rules! random_int_round_trip {
    ($test_name:ident, $ty:ty, $gen:path, $decode:ident) => {
        #[test]
        fn $test_name() {
            fastrand::seed(0x5eed);
            for _ in 0..1000 {
                let v: $ty = $gen(..);
                let decoded = ArgValue::from(v).$decode().unwrap();
                assert_eq!(decoded, v);
            }
            assert_eq!(ArgValue::from(<$ty>::MIN).$decode().unwrap(), <$ty>::MIN);
            assert_eq!(ArgValue::from(<$ty>::MAX).$decode().unwrap(), <$ty>::MAX);
        }
    };
}

random_int_round_trip!(test_round_trip_i8, i8, fastrand::i8, to_i8);
random_int_round_trip!(test_round_trip_i16, i16, fastrand::i16, to_i16);
random_int_round_trip!(test_round_trip_i32, i32, fastrand::i32, to_i32);
random_int_round_trip!(test_round_trip_i64, i64, fastrand::i64, to_i64);
random_int_round_trip!(test_round_trip_u8, u8, fastrand::u8, to_u8);
random_int_round_trip!(test_round_trip_u16, u16, fastrand::u16, to_u16);
random_int_round_trip!(test_round_trip_u32, u32, fastrand::u32, to_u32);
random_int_round_trip!(test_round_trip_u64, u64, fastrand::u64, to_u64);

#[test]
fn test_round_trip_random_finite_floats() {
    fastrand::seed(0xf10a7);
    let mut checked = 0;
    while checked < 1000 {
        let v = f64::from_bits(fastrand::u64(..));
        if !v.is_finite() {
            continue;
        }
        let decoded = ArgValue::from(v).to_f64().unwrap();
        assert_eq!(decoded.to_bits(), v.to_bits(), "value: {:e}", v);
        checked += 1;
    }

    let mut checked = 0;
    while checked < 1000 {
        let v = f32::from_bits(fastrand::u32(..));
        if !v.is_finite() {
            continue;
        }
        let decoded = ArgValue::from(v).to_f32().unwrap();
        assert_eq!(decoded.to_bits(), v.to_bits(), "value: {:e}", v);
        checked += 1;
    }
}

#[test]
fn test_widening_decodes() {
    // A narrow source decodes into any wider target of the same sign class.
    let v = ArgValue::from(200u8);
    assert_eq!(v.to_u16().unwrap(), 200);
    assert_eq!(v.to_i64().unwrap(), 200);
    assert_eq!(v.to_f64().unwrap(), 200.0);
}

#[test]
fn test_malformed_text_fails_every_numeric_target() {
    let v = ArgValue::from("abc");
    let numeric_targets = [
        Target::I8,
        Target::I16,
        Target::I32,
        Target::I64,
        Target::U8,
        Target::U16,
        Target::U32,
        Target::U64,
        Target::F32,
        Target::F64,
    ];
    for target in numeric_targets {
        match v.decode(target) {
            Err(ConvertError::Invalid { reason, .. }) => {
                assert_eq!(reason, InvalidReason::Malformed, "target: {}", target)
            }
            other => panic!("expected Invalid for {}, got {:?}", target, other),
        }
    }
    // The string target still succeeds.
    assert_eq!(
        v.decode(Target::String).unwrap(),
        Scalar::String("abc".to_string())
    );
}

#[test]
fn test_unsupported_targets_fail_regardless_of_text() {
    for v in [
        ArgValue::from("x"),
        ArgValue::from(0i32),
        ArgValue::from("2024-01-01T00:00:00Z"),
    ] {
        assert_eq!(
            v.decode(Target::Char).unwrap_err(),
            ConvertError::Unsupported(Target::Char)
        );
        assert_eq!(
            v.decode(Target::Timestamp).unwrap_err(),
            ConvertError::Unsupported(Target::Timestamp)
        );
    }
}

#[test]
fn test_scalar_accessors() {
    assert_eq!(Scalar::I64(7).as_i64(), Some(7));
    assert_eq!(Scalar::I64(7).as_u64(), None);
    assert_eq!(Scalar::Bool(true).as_bool(), Some(true));
    assert_eq!(Scalar::String("x".to_string()).as_str(), Some("x"));
    assert_eq!(Scalar::F64(1.5).as_f64(), Some(1.5));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_transparent_forms() {
    let v = ArgValue::from(42i32);
    assert_eq!(serde_json::to_string(&v).unwrap(), "\"42\"");
    let back: ArgValue = serde_json::from_str("\"42\"").unwrap();
    assert_eq!(back, v);

    let args: Kwargs = "a=1, b=2".parse().unwrap();
    assert_eq!(serde_json::to_string(&args).unwrap(), r#"{"a":"1","b":"2"}"#);
}
