use std::io::Read;
use std::path::Path;

use jsonbind::codec::{Codec, Data, RenderOptions, Result};
use jsonbind_testkit::model;

/// Sample model type selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ModelType {
	Product,
	Order,
	Customer,
	Shipment,
}

impl ModelType {
	/// Registered descriptor name.
	pub fn type_name(self) -> &'static str {
		match self {
			ModelType::Product => "Product",
			ModelType::Order => "Order",
			ModelType::Customer => "Customer",
			ModelType::Shipment => "Shipment",
		}
	}
}

/// Read a whole document from a file path, or stdin for `-`.
pub(crate) fn read_input(path: &Path) -> Result<String> {
	if path.as_os_str() == "-" {
		let mut text = String::new();
		std::io::stdin().read_to_string(&mut text)?;
		tracing::debug!(bytes = text.len(), "read stdin");
		return Ok(text);
	}
	let text = std::fs::read_to_string(path)?;
	tracing::debug!(path = %path.display(), bytes = text.len(), "read file");
	Ok(text)
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to encode json: {err}"),
	}
}

/// Codec over the sample model registry with the requested layout.
pub(crate) fn sample_codec(lines: bool) -> Codec {
	let render = if lines { RenderOptions::lines() } else { RenderOptions::default() };
	Codec::new(model::registry()).with_render_options(render)
}

/// Built-in sample instance for `model`, wrapped as instance data.
pub(crate) fn sample_data(model: ModelType) -> Data {
	match model {
		ModelType::Product => Data::object(model::sample_product()),
		ModelType::Order => Data::object(model::sample_order()),
		ModelType::Customer => Data::object(model::sample_customer()),
		ModelType::Shipment => Data::object(model::sample_shipment()),
	}
}
