#![allow(missing_docs)]

use jsonbind::codec::{Codec, CodecError, ParseOptions, ScalarKind, TypeDescriptor};
use jsonbind_testkit::model::{Customer, Order, Product, Shipment, registry};

fn codec() -> Codec {
	Codec::new(registry())
}

#[test]
fn oversized_int64_is_a_conversion_error() {
	let err = codec()
		.deserialize("999999999999999999999", &ScalarKind::I64.into())
		.expect_err("overflows i64");
	assert!(matches!(err, CodecError::TypeConversion { kind: "i64", .. }));

	let err = codec().deserialize_as::<Shipment>(r#"{"serial":999999999999999999999}"#).expect_err("overflows i64");
	assert!(matches!(err, CodecError::TypeConversion { kind: "i64", .. }));
}

#[test]
fn numeric_text_is_not_a_bool() {
	let err = codec().deserialize_as::<Shipment>(r#"{"fragile":1}"#).expect_err("1 is not a bool");
	assert!(matches!(err, CodecError::TypeConversion { kind: "bool", .. }));
}

#[test]
fn malformed_identifier() {
	let err = codec().deserialize_as::<Product>(r#"{"id":"82311989678c4882a7e52f7d964856ec"}"#).expect_err("no hyphens");
	assert!(matches!(err, CodecError::IdentifierFormat { text } if text == "82311989678c4882a7e52f7d964856ec"));
}

#[test]
fn unknown_enum_member() {
	let err = codec().deserialize_as::<Shipment>(r#"{"status":"LOST"}"#).expect_err("not a member");
	assert!(matches!(err, CodecError::EnumMemberNotFound { enum_name, text } if enum_name == "ShipmentStatus" && text == "LOST"));
}

#[test]
fn binding_errors_carry_nested_path() {
	let text = r#"{"id":"fc5102b7-7d73-45bb-bd8c-e8eb79f4ace6","orders":[{"products":[{"name":"a"},{"count":[1,2]}]}]}"#;
	let err = codec().deserialize_as::<Customer>(text).expect_err("array into map");
	match err {
		CodecError::FieldBinding { field, expected, actual } => {
			assert_eq!(field, "Customer.orders[0].products[1].count");
			assert_eq!(expected, "object");
			assert_eq!(actual, "array");
		}
		other => panic!("unexpected error: {other}"),
	}
}

#[test]
fn null_into_required_identifier() {
	let err = codec().deserialize_as::<Order>(r#"{"id":null}"#).expect_err("id is not optional");
	assert!(matches!(err, CodecError::FieldBinding { field, actual: "null", .. } if field == "Order.id"));
}

#[test]
fn structural_errors() {
	for bad in [r#"{"id":"x}"#, r#"{"a":[1,2}"#, r#"{"a" 1}"#, r#"[1,,2]"#, ""] {
		let err = codec().parse(bad).expect_err("malformed text");
		assert!(matches!(err, CodecError::StructuralParse { .. }), "{bad}: {err}");
	}
}

#[test]
fn depth_budget() {
	let deep = format!("{}{}", "[".repeat(70), "]".repeat(70));
	assert!(matches!(codec().parse(&deep), Err(CodecError::DepthExceeded { max_depth: 64 })));
	assert!(codec().with_parse_options(ParseOptions::lenient()).parse(&deep).is_ok());
}

#[test]
fn unregistered_named_type() {
	let err = codec()
		.deserialize("{}", &TypeDescriptor::named("Invoice"))
		.expect_err("no descriptor");
	assert!(matches!(err, CodecError::MissingSchema { type_name } if type_name == "Invoice"));
}
