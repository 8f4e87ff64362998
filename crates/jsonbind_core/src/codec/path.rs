use std::fmt;

use crate::codec::{CodecError, Result};

/// One parsed operation in a field path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
	/// Select a named object member.
	Field(String),
	/// Select an array element by zero-based index.
	Index(usize),
	/// Select a map entry by its key text (`["key"]`).
	Key(String),
}

/// Parsed field path expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
	/// Ordered sequence of path steps.
	pub steps: Vec<PathStep>,
}

impl FieldPath {
	/// Path rooted at a named type, used as the origin of binding errors.
	pub fn root(type_name: &str) -> Self {
		Self {
			steps: vec![PathStep::Field(type_name.to_owned())],
		}
	}

	/// Return a copy extended by one step.
	pub fn child(&self, step: PathStep) -> Self {
		let mut steps = self.steps.clone();
		steps.push(step);
		Self { steps }
	}

	/// Parse dotted field syntax with optional `[index]` and `["key"]` selectors.
	pub fn parse(input: &str) -> Result<Self> {
		if input.is_empty() {
			return Err(CodecError::InvalidFieldPath { path: input.to_owned() });
		}

		let bytes = input.as_bytes();
		let mut idx = 0_usize;
		let mut steps = Vec::new();

		while idx < bytes.len() {
			let start = idx;
			while idx < bytes.len() {
				let byte = bytes[idx];
				if byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-' {
					idx += 1;
				} else {
					break;
				}
			}

			if idx == start {
				return Err(CodecError::InvalidFieldPath { path: input.to_owned() });
			}

			steps.push(PathStep::Field(input[start..idx].to_owned()));

			while idx < bytes.len() && bytes[idx] == b'[' {
				idx += 1;
				if idx < bytes.len() && bytes[idx] == b'"' {
					idx += 1;
					let k_start = idx;
					while idx < bytes.len() && bytes[idx] != b'"' {
						idx += 1;
					}
					if idx + 1 >= bytes.len() || bytes[idx + 1] != b']' {
						return Err(CodecError::InvalidFieldPath { path: input.to_owned() });
					}
					steps.push(PathStep::Key(input[k_start..idx].to_owned()));
					idx += 2;
					continue;
				}

				let n_start = idx;
				while idx < bytes.len() && bytes[idx].is_ascii_digit() {
					idx += 1;
				}
				if idx == n_start || idx >= bytes.len() || bytes[idx] != b']' {
					return Err(CodecError::InvalidFieldPath { path: input.to_owned() });
				}

				let number = input[n_start..idx]
					.parse::<usize>()
					.map_err(|_| CodecError::InvalidFieldPath { path: input.to_owned() })?;
				steps.push(PathStep::Index(number));
				idx += 1;
			}

			if idx < bytes.len() {
				if bytes[idx] != b'.' {
					return Err(CodecError::InvalidFieldPath { path: input.to_owned() });
				}
				idx += 1;
				if idx >= bytes.len() {
					return Err(CodecError::InvalidFieldPath { path: input.to_owned() });
				}
			}
		}

		Ok(Self { steps })
	}
}

impl fmt::Display for FieldPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (idx, step) in self.steps.iter().enumerate() {
			match step {
				PathStep::Field(name) if idx == 0 => write!(f, "{name}")?,
				PathStep::Field(name) => write!(f, ".{name}")?,
				PathStep::Index(index) => write!(f, "[{index}]")?,
				PathStep::Key(key) => write!(f, "[\"{key}\"]")?,
			}
		}
		Ok(())
	}
}
