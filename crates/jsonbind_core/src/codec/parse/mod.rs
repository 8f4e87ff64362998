use crate::codec::scan::{split_elements, split_members};
use crate::codec::{CodecError, Number, ObjectValue, Result, Value};

/// Runtime limits for text parsing.
#[derive(Debug, Clone)]
pub struct ParseOptions {
	/// Maximum nesting depth of objects and arrays.
	pub max_depth: u32,
	/// Maximum number of members or elements in one object or array.
	pub max_segments: usize,
}

impl Default for ParseOptions {
	fn default() -> Self {
		Self {
			max_depth: 64,
			max_segments: 100_000,
		}
	}
}

impl ParseOptions {
	/// Preset for large trusted documents.
	pub fn lenient() -> Self {
		Self {
			max_depth: 512,
			max_segments: usize::MAX,
		}
	}
}

/// Parse a whole document into a value tree.
pub fn parse_document(text: &str, opt: &ParseOptions) -> Result<Value> {
	if text.trim().is_empty() {
		return Err(CodecError::StructuralParse { at: 0, reason: "empty document" });
	}
	parse_segment(text, opt, 0)
}

/// Classify one segment; checks run in a fixed order and fall back to a bare string.
fn parse_segment(text: &str, opt: &ParseOptions, depth: u32) -> Result<Value> {
	let text = text.trim();

	if text == "null" {
		return Ok(Value::Null);
	}
	if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
		return Ok(Value::String(text[1..text.len() - 1].into()));
	}
	if text == "true" || text == "false" {
		return Ok(Value::Bool(text == "true"));
	}
	if is_number_literal(text) {
		return Ok(Value::Number(Number {
			text: text.into(),
			is_float: text.contains('.'),
		}));
	}
	if text.starts_with('{') && text.ends_with('}') {
		check_depth(depth, opt)?;
		let mut object = ObjectValue::default();
		for member in split_members(&text[1..text.len() - 1], opt.max_segments)? {
			let value = parse_segment(member.value, opt, depth + 1)?;
			object.insert(member.key.into(), value);
		}
		return Ok(Value::Object(object));
	}
	if text.starts_with('[') && text.ends_with(']') {
		check_depth(depth, opt)?;
		let mut items = Vec::new();
		for element in split_elements(&text[1..text.len() - 1], opt.max_segments)? {
			items.push(parse_segment(element.text, opt, depth + 1)?);
		}
		return Ok(Value::Array(items));
	}

	Ok(Value::String(text.into()))
}

fn check_depth(depth: u32, opt: &ParseOptions) -> Result<()> {
	if depth >= opt.max_depth {
		return Err(CodecError::DepthExceeded { max_depth: opt.max_depth });
	}
	Ok(())
}

/// `-?\d+(\.\d+)?`
fn is_number_literal(text: &str) -> bool {
	let digits = text.strip_prefix('-').unwrap_or(text);
	let (int_part, frac_part) = match digits.split_once('.') {
		Some((int_part, frac_part)) => (int_part, Some(frac_part)),
		None => (digits, None),
	};
	let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|byte| byte.is_ascii_digit());
	all_digits(int_part) && frac_part.is_none_or(all_digits)
}

#[cfg(test)]
mod tests;
