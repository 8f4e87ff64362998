use std::path::PathBuf;

use jsonbind::codec::{CodecError, FieldPath, ParseOptions, RenderOptions, Value, parse_document, render_value};

use crate::cmd::print::{PrintOptions, print_value};
use crate::cmd::util::{emit_json, read_input};

#[derive(clap::Args)]
pub struct Args {
	/// Input document, or `-` for stdin.
	pub file: PathBuf,
	#[arg(long = "path")]
	pub path_expr: Option<String>,
	/// Print canonical text instead of the tree.
	#[arg(long)]
	pub render: bool,
	/// Use the line-broken layout with `--render` or `--json`.
	#[arg(long)]
	pub lines: bool,
	#[arg(long)]
	pub json: bool,
	/// Raise parse limits for large trusted documents.
	#[arg(long)]
	pub lenient: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long = "max-array")]
	pub max_array: Option<usize>,
	/// Use tighter print limits.
	#[arg(long)]
	pub brief: bool,
}

/// Parse a document into a value tree and print it.
pub fn run(args: Args) -> jsonbind::codec::Result<()> {
	let Args {
		file,
		path_expr,
		render,
		lines,
		json,
		lenient,
		max_depth,
		max_array,
		brief,
	} = args;

	let text = read_input(&file)?;
	let parse = if lenient { ParseOptions::lenient() } else { ParseOptions::default() };
	let root = parse_document(&text, &parse)?;

	let selected = match &path_expr {
		Some(expr) => {
			let path = FieldPath::parse(expr)?;
			root.select(&path).ok_or_else(|| CodecError::PathNotFound { path: expr.clone() })?
		}
		None => &root,
	};

	let layout = if lines { RenderOptions::lines() } else { RenderOptions::default() };

	if json {
		emit_json(&ParseJson {
			path: file.display().to_string(),
			select: path_expr,
			kind: selected.kind_label(),
			canonical: render_value(selected, &layout),
			value: value_to_json_value(selected),
		});
		return Ok(());
	}

	if render {
		println!("{}", render_value(selected, &layout));
		return Ok(());
	}

	let mut options = if brief { PrintOptions::compact() } else { PrintOptions::default() };
	if let Some(max_depth) = max_depth {
		options.max_print_depth = max_depth;
	}
	if let Some(max_array) = max_array {
		options.max_array_items = max_array;
	}

	println!("path: {}", file.display());
	if let Some(expr) = &path_expr {
		println!("select: {expr}");
	}
	println!("kind: {}", selected.kind_label());
	print_value(selected, options);
	Ok(())
}

fn value_to_json_value(value: &Value) -> serde_json::Value {
	use serde_json::{Map, Value as JsonValue};

	match value {
		Value::Null => JsonValue::Null,
		Value::Bool(v) => serde_json::json!(v),
		Value::Number(number) => match number.text.parse::<serde_json::Number>() {
			Ok(parsed) => JsonValue::Number(parsed),
			Err(_) => serde_json::json!(&*number.text),
		},
		Value::String(v) => serde_json::json!(&**v),
		Value::Array(items) => JsonValue::Array(items.iter().map(value_to_json_value).collect()),
		Value::Object(object) => {
			let members: Map<String, JsonValue> = object
				.members
				.iter()
				.map(|member| (member.name.to_string(), value_to_json_value(&member.value)))
				.collect();
			JsonValue::Object(members)
		}
	}
}

#[derive(serde::Serialize)]
struct ParseJson {
	path: String,
	select: Option<String>,
	kind: &'static str,
	canonical: String,
	value: serde_json::Value,
}
