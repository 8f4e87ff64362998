use std::fmt::Write;

use jsonbind::codec::Value;

/// Output truncation limits for printed value trees.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of members printed for a single object.
	pub max_members_per_object: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for arrays.
	pub max_array_items: usize,
	/// Maximum recursive print depth for nested arrays/objects.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_members_per_object: 80,
			max_string_len: 200,
			max_array_items: 16,
			max_print_depth: 6,
		}
	}
}

impl PrintOptions {
	/// Preset for a quick overview of large documents.
	pub fn compact() -> Self {
		Self {
			max_members_per_object: 20,
			max_string_len: 60,
			max_array_items: 4,
			max_print_depth: 3,
		}
	}
}

/// Print one value tree.
pub fn print_value(value: &Value, options: PrintOptions) {
	print!("{}", render_tree(value, options));
}

/// Render a value tree as indented lines.
pub fn render_tree(value: &Value, options: PrintOptions) -> String {
	let mut out = String::new();
	write_value(&mut out, value, 0, 0, options);
	out
}

fn write_value(out: &mut String, value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Null => {
			let _ = writeln!(out, "{pad}null");
		}
		Value::Bool(v) => {
			let _ = writeln!(out, "{pad}{v}");
		}
		Value::Number(number) => {
			let kind = if number.is_float { "float" } else { "int" };
			let _ = writeln!(out, "{pad}{} ({kind})", number.text);
		}
		Value::String(v) => {
			let _ = writeln!(out, "{pad}\"{}\"", truncate(v, options.max_string_len));
		}
		Value::Array(items) => {
			if depth >= options.max_print_depth {
				let _ = writeln!(out, "{pad}[... {} items]", items.len());
				return;
			}
			let _ = writeln!(out, "{pad}[");
			for item in items.iter().take(options.max_array_items) {
				write_value(out, item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_array_items {
				let _ = writeln!(out, "{pad}  ... {} more", items.len() - options.max_array_items);
			}
			let _ = writeln!(out, "{pad}]");
		}
		Value::Object(object) => {
			if depth >= options.max_print_depth {
				let _ = writeln!(out, "{pad}{{ ... {} members }}", object.len());
				return;
			}
			let _ = writeln!(out, "{pad}{{");
			for member in object.members.iter().take(options.max_members_per_object) {
				let _ = write!(out, "{pad}  {} = ", member.name);
				if matches!(member.value, Value::Object(_) | Value::Array(_)) {
					out.push('\n');
					write_value(out, &member.value, indent + 4, depth + 1, options);
				} else {
					write_value(out, &member.value, 0, depth + 1, options);
				}
			}
			if object.len() > options.max_members_per_object {
				let _ = writeln!(out, "{pad}  ... {} more members", object.len() - options.max_members_per_object);
			}
			let _ = writeln!(out, "{pad}}}");
		}
	}
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
