use thiserror::Error;

use crate::codec::ScalarKind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors produced while scanning, parsing, binding, and rendering JSON text.
#[derive(Debug, Error)]
pub enum CodecError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Unbalanced nesting, unterminated quote, or malformed top-level segment.
	#[error("structural parse error at byte {at}: {reason}")]
	StructuralParse {
		/// Byte offset inside the body being scanned.
		at: usize,
		/// Short description of what went wrong.
		reason: &'static str,
	},
	/// Nested structure exceeded the configured recursion budget.
	#[error("nesting depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Value kind found in the tree does not match the field's declared shape.
	#[error("field {field}: expected {expected}, got {actual}")]
	FieldBinding {
		/// Path of the field being bound.
		field: String,
		/// Expected logical value kind.
		expected: &'static str,
		/// Actual logical value kind.
		actual: &'static str,
	},
	/// Scalar text could not be parsed as the requested kind.
	#[error("cannot convert {text:?} to {kind}")]
	TypeConversion {
		/// Requested scalar kind label.
		kind: &'static str,
		/// Offending leaf text.
		text: String,
	},
	/// Identifier text is not in canonical hyphenated hex form.
	#[error("malformed identifier {text:?}")]
	IdentifierFormat {
		/// Offending identifier text.
		text: String,
	},
	/// Enumeration text does not name a declared member.
	#[error("enum {enum_name} has no member {text:?}")]
	EnumMemberNotFound {
		/// Enumeration type name.
		enum_name: String,
		/// Offending member text.
		text: String,
	},
	/// Descriptor/data combination the codec cannot handle.
	#[error("unsupported type at {field}: {detail}")]
	UnsupportedType {
		/// Path of the offending field.
		field: String,
		/// Descriptor and runtime kind involved.
		detail: String,
	},
	/// No object descriptor is registered for the requested type.
	#[error("no schema registered for {type_name}")]
	MissingSchema {
		/// Requested type name.
		type_name: String,
	},
	/// Path expression syntax is invalid.
	#[error("invalid field path: {path}")]
	InvalidFieldPath {
		/// Original user-provided path string.
		path: String,
	},
	/// Path expression is well formed but selects no node.
	#[error("path not found: {path}")]
	PathNotFound {
		/// Original user-provided path string.
		path: String,
	},
	/// Descriptor accessor was invoked on an instance of another Rust type.
	#[error("descriptor {descriptor} applied to a different instance type")]
	InstanceMismatch {
		/// Object descriptor name.
		descriptor: String,
	},
}

impl CodecError {
	pub(crate) fn conversion(kind: &ScalarKind, text: &str) -> Self {
		Self::TypeConversion {
			kind: kind.label(),
			text: text.to_owned(),
		}
	}
}
