use std::str::FromStr;

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::codec::{CodecError, Data, Decimal, Result, ScalarKind, Value};

/// Calendar date pattern used for both directions.
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Fixed output pattern for offset date-times: seven fraction digits and a numeric offset.
///
/// Parsing is more lenient than this pattern; see [`parse_datetime`].
pub const DATETIME_FORMAT: &[BorrowedFormatItem<'static>] =
	format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:7][offset_hour sign:mandatory]:[offset_minute]");

/// Convert a leaf node into data of the requested kind.
///
/// `null` coerces to [`Data::Null`] for every kind; arrays and objects fail.
pub fn coerce(leaf: &Value, kind: &ScalarKind) -> Result<Data> {
	match leaf {
		Value::Null => Ok(Data::Null),
		Value::Bool(value) if *kind == ScalarKind::Bool => Ok(Data::Bool(*value)),
		Value::Number(_) if *kind == ScalarKind::Bool => Err(CodecError::conversion(kind, leaf.leaf_text().unwrap_or_default())),
		Value::Array(_) | Value::Object(_) => Err(CodecError::conversion(kind, leaf.kind_label())),
		_ => coerce_text(leaf.leaf_text().unwrap_or_default(), kind),
	}
}

/// Convert raw leaf text into data of the requested kind.
pub fn coerce_text(text: &str, kind: &ScalarKind) -> Result<Data> {
	let fail = || CodecError::conversion(kind, text);
	match kind {
		ScalarKind::I8 => text.parse::<i8>().map(|value| Data::Int(i64::from(value))).map_err(|_| fail()),
		ScalarKind::I16 => text.parse::<i16>().map(|value| Data::Int(i64::from(value))).map_err(|_| fail()),
		ScalarKind::I32 => text.parse::<i32>().map(|value| Data::Int(i64::from(value))).map_err(|_| fail()),
		ScalarKind::I64 => text.parse::<i64>().map(Data::Int).map_err(|_| fail()),
		// Unsigned kinds reject a leading `-`, including "-0".
		ScalarKind::Byte => text.parse::<u8>().map(|value| Data::UInt(u64::from(value))).map_err(|_| fail()),
		ScalarKind::U16 => text.parse::<u16>().map(|value| Data::UInt(u64::from(value))).map_err(|_| fail()),
		ScalarKind::U32 => text.parse::<u32>().map(|value| Data::UInt(u64::from(value))).map_err(|_| fail()),
		ScalarKind::U64 => text.parse::<u64>().map(Data::UInt).map_err(|_| fail()),
		ScalarKind::F32 => {
			if !is_float_literal(text) {
				return Err(fail());
			}
			match text.parse::<f32>() {
				Ok(value) if value.is_finite() => Ok(Data::F32(value)),
				_ => Err(fail()),
			}
		}
		ScalarKind::F64 => {
			if !is_float_literal(text) {
				return Err(fail());
			}
			match text.parse::<f64>() {
				Ok(value) if value.is_finite() => Ok(Data::F64(value)),
				_ => Err(fail()),
			}
		}
		ScalarKind::Bool => match text {
			"true" => Ok(Data::Bool(true)),
			"false" => Ok(Data::Bool(false)),
			_ => Err(fail()),
		},
		ScalarKind::Char => text.chars().next().map(Data::Char).ok_or_else(fail),
		ScalarKind::Str => Ok(Data::Str(text.to_owned())),
		ScalarKind::Identifier => parse_identifier(text).map(Data::Id),
		ScalarKind::Decimal => Decimal::from_str(text).map(Data::Decimal),
		ScalarKind::Date => Date::parse(text, DATE_FORMAT).map(Data::Date).map_err(|_| fail()),
		ScalarKind::DateTime => parse_datetime(text).map(Data::DateTime).ok_or_else(fail),
		ScalarKind::Enum(item) => {
			if item.contains(text) {
				Ok(Data::Enum(text.to_owned()))
			} else {
				Err(CodecError::EnumMemberNotFound {
					enum_name: item.name.clone(),
					text: text.to_owned(),
				})
			}
		}
	}
}

/// Parse the canonical 8-4-4-4-12 hyphenated hex form.
pub fn parse_identifier(text: &str) -> Result<Uuid> {
	let bytes = text.as_bytes();
	let hyphenated = bytes.len() == 36 && [8, 13, 18, 23].iter().all(|idx| bytes[*idx] == b'-');
	if !hyphenated {
		return Err(CodecError::IdentifierFormat { text: text.to_owned() });
	}
	Uuid::parse_str(text).map_err(|_| CodecError::IdentifierFormat { text: text.to_owned() })
}

/// Accept RFC 3339 first, then the wider ISO 8601 offset date-time grammar.
pub fn parse_datetime(text: &str) -> Option<OffsetDateTime> {
	OffsetDateTime::parse(text, &Rfc3339)
		.or_else(|_| OffsetDateTime::parse(text, &Iso8601::DEFAULT))
		.ok()
}

/// Render a date-time with the fixed output pattern.
pub fn format_datetime(value: &OffsetDateTime) -> Result<String> {
	value.format(DATETIME_FORMAT).map_err(|_| CodecError::TypeConversion {
		kind: "datetime",
		text: value.to_string(),
	})
}

/// Render a date as `YYYY-MM-DD`.
pub fn format_date(value: &Date) -> Result<String> {
	value.format(DATE_FORMAT).map_err(|_| CodecError::TypeConversion {
		kind: "date",
		text: value.to_string(),
	})
}

/// Decimal or exponential literal; rejects `inf`/`NaN` spellings.
fn is_float_literal(text: &str) -> bool {
	let body = text.strip_prefix(['-', '+']).unwrap_or(text);
	let (mantissa, exponent) = match body.find(['e', 'E']) {
		Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
		None => (body, None),
	};
	let digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
	let mantissa_ok = match mantissa.split_once('.') {
		Some((int_part, frac_part)) => !(int_part.is_empty() && frac_part.is_empty()) && digits(int_part) && digits(frac_part),
		None => !mantissa.is_empty() && digits(mantissa),
	};
	let exponent_ok = exponent.is_none_or(|exp| {
		let exp = exp.strip_prefix(['-', '+']).unwrap_or(exp);
		!exp.is_empty() && digits(exp)
	});
	mantissa_ok && exponent_ok
}
