use jsonbind::codec::TypeDescriptor;

use crate::cmd::util::{ModelType, sample_codec, sample_data};

#[derive(clap::Args)]
pub struct Args {
	#[arg(long = "type", value_enum)]
	pub model: ModelType,
	/// Use the line-broken layout.
	#[arg(long)]
	pub lines: bool,
}

/// Serialize the built-in sample instance of a model type.
pub fn run(args: Args) -> jsonbind::codec::Result<()> {
	let codec = sample_codec(args.lines);
	let ty = TypeDescriptor::named(args.model.type_name());
	println!("{}", codec.serialize_data(&sample_data(args.model), &ty)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::cmd::test_support::run_jsonbind_ok;

	#[test]
	fn encode_order_matches_fixture_layout() {
		let stdout = run_jsonbind_ok(&["encode", "--type", "order", "--lines"]);
		let expected = jsonbind_testkit::read_fixture("order.json").expect("fixture reads");
		assert_eq!(stdout, format!("{expected}\n"));
	}

	#[test]
	fn encode_shipment_is_strict_json() {
		let stdout = run_jsonbind_ok(&["encode", "--type", "shipment"]);
		let value = jsonbind_testkit::assert_strict_json(stdout.trim_end());
		assert_eq!(value["status"], "IN_TRANSIT");
		assert_eq!(value["next"]["status"], "DELIVERED");
	}
}
