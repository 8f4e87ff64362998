use super::{split_elements, split_members};
use crate::codec::CodecError;

const MAX: usize = 1024;

fn keys_and_values(body: &str) -> Vec<(&str, &str)> {
	split_members(body, MAX)
		.expect("members split")
		.into_iter()
		.map(|item| (item.key, item.value))
		.collect()
}

#[test]
fn splits_members_at_depth_zero_only() {
	let body = r#""id":"x", "count":{"a":1,"b":[2,3]}, "tags":["p,q", "r"]"#;
	assert_eq!(
		keys_and_values(body),
		vec![("id", "\"x\""), ("count", r#"{"a":1,"b":[2,3]}"#), ("tags", r#"["p,q", "r"]"#)]
	);
}

#[test]
fn colon_inside_quotes_does_not_split() {
	let body = r#""createDate":"2024-09-22T11:10:46.8566492+03:00""#;
	assert_eq!(keys_and_values(body), vec![("createDate", "\"2024-09-22T11:10:46.8566492+03:00\"")]);
}

#[test]
fn keys_are_trimmed_and_unquoted() {
	let body = "\n \"a\" :\t1 ,\n  b : 2\n";
	assert_eq!(keys_and_values(body), vec![("a", "1"), ("b", "2")]);
}

#[test]
fn elements_split_on_depth_zero_commas() {
	let items = split_elements(r#" {"x":1,"y":2} , [1,[2,3]], "s,t" "#, MAX).expect("elements split");
	let texts: Vec<&str> = items.iter().map(|item| item.text).collect();
	assert_eq!(texts, vec![r#"{"x":1,"y":2}"#, "[1,[2,3]]", "\"s,t\""]);
}

#[test]
fn blank_body_has_no_segments() {
	assert!(split_elements("  \n ", MAX).expect("blank splits").is_empty());
	assert!(split_members("", MAX).expect("empty splits").is_empty());
}

#[test]
fn single_trailing_comma_is_tolerated() {
	let items = split_elements("1,2,", MAX).expect("trailing comma tolerated");
	assert_eq!(items.len(), 2);
	assert_eq!(keys_and_values("\"a\":1,"), vec![("a", "1")]);
}

#[test]
fn empty_inner_segment_fails() {
	let err = split_elements("1,,2", MAX).expect_err("empty element should fail");
	assert!(matches!(err, CodecError::StructuralParse { at: 2, .. }));
}

#[test]
fn unbalanced_brackets_fail() {
	let err = split_elements("[1,2", MAX).expect_err("unclosed bracket should fail");
	assert!(matches!(err, CodecError::StructuralParse { reason: "unclosed bracket", .. }));

	let err = split_members("\"a\":1}", MAX).expect_err("stray closing brace should fail");
	assert!(matches!(err, CodecError::StructuralParse { at: 5, .. }));
}

#[test]
fn unterminated_quote_fails() {
	let err = split_members("\"a\":\"open", MAX).expect_err("open quote should fail");
	assert!(matches!(err, CodecError::StructuralParse { reason: "unterminated string", .. }));
}

#[test]
fn member_without_colon_fails() {
	let err = split_members("\"a\":1,\"b\"", MAX).expect_err("missing colon should fail");
	assert!(matches!(err, CodecError::StructuralParse { reason: "object member without ':'", .. }));
}

#[test]
fn embedded_quote_toggles_state() {
	let items = split_elements(r#""say "hi", ok""#, MAX).expect("known limitation still splits");
	assert_eq!(items.len(), 1);
	assert_eq!(items[0].text, r#""say "hi", ok""#);
}

#[test]
fn segment_budget_is_enforced() {
	let err = split_elements("1,2,3", 2).expect_err("budget should trip");
	assert!(matches!(err, CodecError::StructuralParse { reason: "too many segments", .. }));
}
