use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::codec::{CodecError, Result};

/// Largest exponent magnitude accepted in `1e<exp>` notation.
const MAX_EXPONENT: i64 = 4096;

/// Arbitrary-precision decimal: unbounded unscaled digits plus a fractional scale.
///
/// Equality, ordering and hashing compare the numeric value, so `1.50 == 1.5`
/// while [`Decimal::scale`] and `Display` still report the scale as written.
#[derive(Debug, Clone)]
pub struct Decimal {
	negative: bool,
	/// Unscaled ASCII digits without leading zeros (`"0"` for zero).
	digits: String,
	scale: u32,
}

impl Decimal {
	/// Zero with scale 0.
	pub fn zero() -> Self {
		Self {
			negative: false,
			digits: "0".to_owned(),
			scale: 0,
		}
	}

	/// Number of digits after the decimal point.
	pub fn scale(&self) -> u32 {
		self.scale
	}

	pub fn is_zero(&self) -> bool {
		self.digits == "0"
	}

	pub fn is_negative(&self) -> bool {
		self.negative
	}

	/// Same value with trailing fractional zeros removed.
	pub fn normalized(&self) -> Self {
		let mut digits = self.digits.clone();
		let mut scale = self.scale;
		while scale > 0 && digits.len() > 1 && digits.ends_with('0') {
			digits.pop();
			scale -= 1;
		}
		if digits == "0" {
			scale = 0;
		}
		Self {
			negative: self.negative,
			digits,
			scale,
		}
	}

	fn from_parts(negative: bool, raw_digits: &str, scale: u32) -> Self {
		let trimmed = raw_digits.trim_start_matches('0');
		let digits = if trimmed.is_empty() { "0".to_owned() } else { trimmed.to_owned() };
		let negative = negative && digits != "0";
		Self { negative, digits, scale }
	}

	/// Integer part digits and fractional digits of the magnitude.
	fn split_magnitude(&self) -> (String, String) {
		let scale = self.scale as usize;
		let padded = if self.digits.len() <= scale {
			format!("{}{}", "0".repeat(scale + 1 - self.digits.len()), self.digits)
		} else {
			self.digits.clone()
		};
		let (int_part, frac_part) = padded.split_at(padded.len() - scale);
		(int_part.to_owned(), frac_part.to_owned())
	}

	fn cmp_magnitude(&self, other: &Self) -> Ordering {
		let (a_int, a_frac) = self.normalized().split_magnitude();
		let (b_int, b_frac) = other.normalized().split_magnitude();
		let a_int = a_int.trim_start_matches('0');
		let b_int = b_int.trim_start_matches('0');
		a_int
			.len()
			.cmp(&b_int.len())
			.then_with(|| a_int.cmp(b_int))
			.then_with(|| {
				let width = a_frac.len().max(b_frac.len());
				format!("{a_frac:0<width$}").cmp(&format!("{b_frac:0<width$}"))
			})
	}
}

impl Default for Decimal {
	fn default() -> Self {
		Self::zero()
	}
}

impl FromStr for Decimal {
	type Err = CodecError;

	fn from_str(text: &str) -> Result<Self> {
		let fail = || CodecError::TypeConversion {
			kind: "decimal",
			text: text.to_owned(),
		};

		let (negative, rest) = match text.as_bytes().first() {
			Some(b'-') => (true, &text[1..]),
			Some(b'+') => (false, &text[1..]),
			_ => (false, text),
		};

		let (mantissa, exponent) = match rest.find(['e', 'E']) {
			Some(pos) => {
				let exp_text = &rest[pos + 1..];
				let exp = exp_text.parse::<i64>().map_err(|_| fail())?;
				if exp.abs() > MAX_EXPONENT {
					return Err(fail());
				}
				(&rest[..pos], exp)
			}
			None => (rest, 0),
		};

		let (int_part, frac_part) = match mantissa.split_once('.') {
			Some((int_part, frac_part)) => (int_part, frac_part),
			None => (mantissa, ""),
		};
		if int_part.is_empty() && frac_part.is_empty() {
			return Err(fail());
		}
		if !int_part.bytes().chain(frac_part.bytes()).all(|byte| byte.is_ascii_digit()) {
			return Err(fail());
		}

		let mut digits = format!("{int_part}{frac_part}");
		let mut scale = frac_part.len() as i64 - exponent;
		if scale < 0 {
			digits.push_str(&"0".repeat(scale.unsigned_abs() as usize));
			scale = 0;
		}
		let scale = u32::try_from(scale).map_err(|_| fail())?;

		Ok(Self::from_parts(negative, &digits, scale))
	}
}

impl fmt::Display for Decimal {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.negative {
			f.write_str("-")?;
		}
		if self.scale == 0 {
			return f.write_str(&self.digits);
		}
		let (int_part, frac_part) = self.split_magnitude();
		write!(f, "{int_part}.{frac_part}")
	}
}

impl PartialEq for Decimal {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Decimal {
	fn cmp(&self, other: &Self) -> Ordering {
		match (self.negative, other.negative) {
			(false, true) => Ordering::Greater,
			(true, false) => Ordering::Less,
			(false, false) => self.cmp_magnitude(other),
			(true, true) => other.cmp_magnitude(self),
		}
	}
}

impl Hash for Decimal {
	fn hash<H: Hasher>(&self, state: &mut H) {
		let normalized = self.normalized();
		normalized.negative.hash(state);
		normalized.digits.hash(state);
		normalized.scale.hash(state);
	}
}

impl From<i64> for Decimal {
	fn from(value: i64) -> Self {
		Self::from_parts(value < 0, &value.unsigned_abs().to_string(), 0)
	}
}

impl From<u64> for Decimal {
	fn from(value: u64) -> Self {
		Self::from_parts(false, &value.to_string(), 0)
	}
}

#[cfg(test)]
mod tests;
