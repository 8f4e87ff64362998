use std::str::FromStr;

use crate::codec::{CodecError, Decimal};

fn dec(text: &str) -> Decimal {
	Decimal::from_str(text).expect("decimal parses")
}

#[test]
fn keeps_scale_as_written() {
	let value = dec("123.4500");
	assert_eq!(value.scale(), 4);
	assert_eq!(value.to_string(), "123.4500");
}

#[test]
fn equality_ignores_trailing_zeros() {
	assert_eq!(dec("1.50"), dec("1.5"));
	assert_eq!(dec("123"), Decimal::from(123_i64));
	assert_eq!(dec("-0.00"), Decimal::zero());
	assert_ne!(dec("1.05"), dec("1.5"));
}

#[test]
fn integer_part_is_unbounded() {
	let text = "123456789012345678901234567890123456789.000000000000000000001";
	let value = dec(text);
	assert_eq!(value.to_string(), text);
	assert!(value > dec("123456789012345678901234567890123456789"));
}

#[test]
fn small_fractions_keep_leading_zeros() {
	assert_eq!(dec("0.005").to_string(), "0.005");
	assert_eq!(dec("-.5").to_string(), "-0.5");
}

#[test]
fn exponent_adjusts_scale() {
	assert_eq!(dec("1.5e3").to_string(), "1500");
	assert_eq!(dec("15E-3").to_string(), "0.015");
	assert_eq!(dec("15E-3").scale(), 3);
}

#[test]
fn ordering_handles_sign_and_width() {
	assert!(dec("-2") < dec("-1.5"));
	assert!(dec("-1") < dec("0"));
	assert!(dec("9.99") < dec("10"));
	assert!(dec("0.1") > dec("0.09"));
}

#[test]
fn rejects_malformed_text() {
	for bad in ["", "-", ".", "1.2.3", "12a", "1e", "1e99999", "0x10"] {
		let err = Decimal::from_str(bad).expect_err("decimal should fail");
		assert!(matches!(err, CodecError::TypeConversion { kind: "decimal", .. }), "{bad}");
	}
}
