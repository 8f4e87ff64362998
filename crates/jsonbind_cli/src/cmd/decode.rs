use std::path::PathBuf;

use jsonbind::codec::{Data, TypeDescriptor};

use crate::cmd::util::{ModelType, emit_json, read_input, sample_codec};

#[derive(clap::Args)]
pub struct Args {
	/// Input document, or `-` for stdin.
	pub file: PathBuf,
	#[arg(long = "type", value_enum)]
	pub model: ModelType,
	/// Re-serialize with the line-broken layout.
	#[arg(long)]
	pub lines: bool,
	#[arg(long)]
	pub json: bool,
}

/// Deserialize a document into a sample model type and re-serialize it.
pub fn run(args: Args) -> jsonbind::codec::Result<()> {
	let Args { file, model, lines, json } = args;

	let text = read_input(&file)?;
	let codec = sample_codec(lines);
	let ty = TypeDescriptor::named(model.type_name());
	let data = codec.deserialize(&text, &ty)?;
	let canonical = codec.serialize_data(&data, &ty)?;

	if json {
		emit_json(&DecodeJson {
			path: file.display().to_string(),
			type_name: model.type_name(),
			instance: instance_debug(&data),
			canonical,
		});
		return Ok(());
	}

	println!("path: {}", file.display());
	println!("type: {}", model.type_name());
	println!("{}", instance_debug(&data));
	println!("canonical:");
	println!("{canonical}");
	Ok(())
}

fn instance_debug(data: &Data) -> String {
	match data {
		Data::Object(object) => format!("{:#?}", object.instance()),
		other => format!("{other:#?}"),
	}
}

#[derive(serde::Serialize)]
struct DecodeJson {
	path: String,
	#[serde(rename = "type")]
	type_name: &'static str,
	instance: String,
	canonical: String,
}
