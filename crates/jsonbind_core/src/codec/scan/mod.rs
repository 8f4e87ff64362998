use crate::codec::{CodecError, Result};

/// One top-level element of an array body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Segment<'a> {
	/// Trimmed element text.
	pub text: &'a str,
	/// Byte offset of the untrimmed segment start inside the body.
	pub at: usize,
}

/// One top-level `key: value` pair of an object body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MemberSegment<'a> {
	/// Member name with surrounding quotes removed.
	pub key: &'a str,
	/// Trimmed value text.
	pub value: &'a str,
	/// Byte offset of the untrimmed segment start inside the body.
	pub at: usize,
}

/// Raw bounds of a depth-zero segment before trimming.
struct RawSegment {
	start: usize,
	colon: Option<usize>,
	end: usize,
}

/// Split an array body (text between `[` and `]`) into top-level elements.
pub(crate) fn split_elements(body: &str, max_segments: usize) -> Result<Vec<Segment<'_>>> {
	let raw = split_top_level(body, false, max_segments)?;
	let last = raw.len().saturating_sub(1);

	let mut out = Vec::with_capacity(raw.len());
	for (idx, item) in raw.into_iter().enumerate() {
		let text = body[item.start..item.end].trim();
		if text.is_empty() {
			if idx == last {
				break;
			}
			return Err(CodecError::StructuralParse {
				at: item.start,
				reason: "empty array element",
			});
		}
		out.push(Segment { text, at: item.start });
	}
	Ok(out)
}

/// Split an object body (text between `{` and `}`) into top-level members.
pub(crate) fn split_members(body: &str, max_segments: usize) -> Result<Vec<MemberSegment<'_>>> {
	let raw = split_top_level(body, true, max_segments)?;
	let last = raw.len().saturating_sub(1);

	let mut out = Vec::with_capacity(raw.len());
	for (idx, item) in raw.into_iter().enumerate() {
		let Some(colon) = item.colon else {
			if body[item.start..item.end].trim().is_empty() {
				if idx == last {
					break;
				}
				return Err(CodecError::StructuralParse {
					at: item.start,
					reason: "empty object member",
				});
			}
			return Err(CodecError::StructuralParse {
				at: item.start,
				reason: "object member without ':'",
			});
		};

		let key = unquote(body[item.start..colon].trim());
		if key.is_empty() {
			return Err(CodecError::StructuralParse {
				at: item.start,
				reason: "empty member name",
			});
		}
		let value = body[colon + 1..item.end].trim();
		if value.is_empty() {
			return Err(CodecError::StructuralParse {
				at: colon,
				reason: "object member without value",
			});
		}
		out.push(MemberSegment { key, value, at: item.start });
	}
	Ok(out)
}

/// Single pass over `body` tracking quote state and bracket depth.
///
/// Every `"` toggles the quote state; escaped quotes are not recognised.
fn split_top_level(body: &str, split_keys: bool, max_segments: usize) -> Result<Vec<RawSegment>> {
	if body.trim().is_empty() {
		return Ok(Vec::new());
	}

	let bytes = body.as_bytes();
	let mut segments = Vec::new();
	let mut in_quotes = false;
	let mut depth = 0_usize;
	let mut start = 0_usize;
	let mut colon = None;

	for (idx, byte) in bytes.iter().enumerate() {
		if *byte == b'"' {
			in_quotes = !in_quotes;
			continue;
		}
		if in_quotes {
			continue;
		}

		match byte {
			b'{' | b'[' => depth += 1,
			b'}' | b']' => {
				if depth == 0 {
					return Err(CodecError::StructuralParse {
						at: idx,
						reason: "unbalanced closing bracket",
					});
				}
				depth -= 1;
			}
			b':' if split_keys && depth == 0 && colon.is_none() => colon = Some(idx),
			b',' if depth == 0 => {
				segments.push(RawSegment { start, colon, end: idx });
				if segments.len() > max_segments {
					return Err(CodecError::StructuralParse {
						at: idx,
						reason: "too many segments",
					});
				}
				start = idx + 1;
				colon = None;
			}
			_ => {}
		}
	}

	if in_quotes {
		return Err(CodecError::StructuralParse {
			at: bytes.len(),
			reason: "unterminated string",
		});
	}
	if depth != 0 {
		return Err(CodecError::StructuralParse {
			at: bytes.len(),
			reason: "unclosed bracket",
		});
	}

	segments.push(RawSegment {
		start,
		colon,
		end: bytes.len(),
	});
	if segments.len() > max_segments {
		return Err(CodecError::StructuralParse {
			at: bytes.len(),
			reason: "too many segments",
		});
	}

	tracing::trace!(segments = segments.len(), split_keys, "scanned body");
	Ok(segments)
}

fn unquote(text: &str) -> &str {
	if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
		&text[1..text.len() - 1]
	} else {
		text
	}
}

#[cfg(test)]
mod tests;
