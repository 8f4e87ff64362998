use super::{ParseOptions, is_number_literal, parse_document};
use crate::codec::{CodecError, Number, Value};

fn parse(text: &str) -> Value {
	parse_document(text, &ParseOptions::default()).expect("document parses")
}

fn number(text: &str, is_float: bool) -> Value {
	Value::Number(Number {
		text: text.into(),
		is_float,
	})
}

#[test]
fn classifies_leaves() {
	assert_eq!(parse("null"), Value::Null);
	assert_eq!(parse(" true "), Value::Bool(true));
	assert_eq!(parse("\"hako\""), Value::String("hako".into()));
	assert_eq!(parse("-12"), number("-12", false));
	assert_eq!(parse("23.6"), number("23.6", true));
	assert_eq!(parse("1e5"), Value::String("1e5".into()));
	assert_eq!(parse("bare words"), Value::String("bare words".into()));
}

#[test]
fn quoted_literals_stay_strings() {
	assert_eq!(parse("\"null\""), Value::String("null".into()));
	assert_eq!(parse("\"42\""), Value::String("42".into()));
	assert_eq!(parse("\"\""), Value::String("".into()));
}

#[test]
fn number_grammar_is_strict() {
	for good in ["0", "-0", "10", "3.14", "-0.5"] {
		assert!(is_number_literal(good), "{good}");
	}
	for bad in ["", "-", "1.", ".5", "+1", "1.2.3", "1e3", "0x1"] {
		assert!(!is_number_literal(bad), "{bad}");
	}
}

#[test]
fn objects_keep_source_order() {
	let Value::Object(object) = parse(r#"{"b":1,"a":{"z":[3,1,2]}}"#) else {
		panic!("expected object");
	};
	let names: Vec<&str> = object.members.iter().map(|member| member.name.as_ref()).collect();
	assert_eq!(names, vec!["b", "a"]);

	let Some(Value::Object(inner)) = object.get("a") else {
		panic!("expected nested object");
	};
	assert_eq!(
		inner.get("z"),
		Some(&Value::Array(vec![number("3", false), number("1", false), number("2", false)]))
	);
}

#[test]
fn multi_line_documents_parse() {
	let text = "{\"id\":\"a5d1c04a-eee3-43e5-a7ca-9cb6d7c47617\",\n\"products\":[\n{\"name\":\"hako\",\n\"price\":23.6}\n],\n\"createDate\":\"2024-09-22T11:10:46.8566492+03:00\"}";
	let Value::Object(object) = parse(text) else {
		panic!("expected object");
	};
	assert_eq!(object.len(), 3);
	let Some(Value::Array(products)) = object.get("products") else {
		panic!("expected products array");
	};
	assert_eq!(products.len(), 1);
}

#[test]
fn empty_containers_parse() {
	assert_eq!(parse("[]"), Value::Array(Vec::new()));
	assert_eq!(parse("{ }"), Value::Object(Default::default()));
}

#[test]
fn empty_document_fails() {
	let err = parse_document("  ", &ParseOptions::default()).expect_err("empty text should fail");
	assert!(matches!(err, CodecError::StructuralParse { reason: "empty document", .. }));
}

#[test]
fn depth_budget_is_enforced() {
	let opt = ParseOptions {
		max_depth: 2,
		..ParseOptions::default()
	};
	assert!(parse_document("[[1]]", &opt).is_ok());
	let err = parse_document("[[[1]]]", &opt).expect_err("third level should fail");
	assert!(matches!(err, CodecError::DepthExceeded { max_depth: 2 }));
}

#[test]
fn nested_structural_errors_surface() {
	let err = parse_document(r#"{"a":[1,,2]}"#, &ParseOptions::default()).expect_err("empty element should fail");
	assert!(matches!(err, CodecError::StructuralParse { .. }));
}
