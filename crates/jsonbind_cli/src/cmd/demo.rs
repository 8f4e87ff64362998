use jsonbind::codec::TypeDescriptor;

use crate::cmd::util::{ModelType, sample_codec, sample_data};

const ORDER_JSON: &str = include_str!("../../../../fixtures/order.json");
const PRODUCT_JSON: &str = include_str!("../../../../fixtures/product.json");
const CUSTOMER_JSON: &str = include_str!("../../../../fixtures/customer.json");

/// Serialize the sample model, then deserialize the bundled documents.
pub fn run() -> jsonbind::codec::Result<()> {
	let codec = sample_codec(true);

	for model in [ModelType::Order, ModelType::Product, ModelType::Customer] {
		let ty = TypeDescriptor::named(model.type_name());
		println!("Json for {}:", model.type_name());
		println!("{}", codec.serialize_data(&sample_data(model), &ty)?);
	}

	for (model, text) in [(ModelType::Order, ORDER_JSON), (ModelType::Product, PRODUCT_JSON), (ModelType::Customer, CUSTOMER_JSON)] {
		let data = codec.deserialize(text, &TypeDescriptor::named(model.type_name()))?;
		println!("{}:", model.type_name());
		println!("{data:?}");
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::cmd::test_support::run_jsonbind_ok;

	#[test]
	fn demo_prints_every_section() {
		let stdout = run_jsonbind_ok(&["demo"]);
		for heading in ["Json for Order:", "Json for Product:", "Json for Customer:", "Order:", "Product:", "Customer:"] {
			assert!(stdout.contains(heading), "missing {heading}");
		}
		assert!(stdout.contains("\"createDate\":\"2024-09-22T11:10:46.8566492+03:00\""));
		assert!(stdout.contains("first_name: \"Pasha\""));
	}
}
