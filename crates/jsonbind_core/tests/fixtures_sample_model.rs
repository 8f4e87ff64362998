#![allow(missing_docs)]

use jsonbind::codec::{Codec, RenderOptions};
use jsonbind_testkit::model::{Customer, Order, Product, registry, sample_customer, sample_order, sample_product};
use jsonbind_testkit::read_fixture;

fn codec() -> Codec {
	Codec::new(registry())
}

#[test]
fn product_fixture_binds_every_field() {
	let text = read_fixture("product.json").expect("fixture reads");
	let product = codec().deserialize_as::<Product>(&text).expect("product binds");

	assert_eq!(product, sample_product());
	assert_eq!(product.count[0].0.to_string(), "242c464d-8d47-4b72-aa91-f1732ab22a29");
	assert_eq!(product.count[1].1.to_string(), "435");
}

#[test]
fn product_fixture_rerenders_byte_for_byte() {
	let text = read_fixture("product.json").expect("fixture reads");
	let codec = codec().with_render_options(RenderOptions::lines());
	let product = codec.deserialize_as::<Product>(&text).expect("product binds");

	assert_eq!(codec.serialize(&product).expect("product renders"), text);
}

#[test]
fn order_fixture_binds_nested_products() {
	let text = read_fixture("order.json").expect("fixture reads");
	let order = codec().deserialize_as::<Order>(&text).expect("order binds");

	assert_eq!(order, sample_order());
	assert_eq!(order.products.len(), 1);
	let created = order.create_date.expect("create date present");
	assert_eq!(created.offset().whole_hours(), 3);
	assert_eq!(created.nanosecond(), 856_649_200);
}

#[test]
fn customer_fixture_resolves_named_orders() {
	let text = read_fixture("customer.json").expect("fixture reads");
	let customer = codec().deserialize_as::<Customer>(&text).expect("customer binds");

	assert_eq!(customer, sample_customer());
	assert_eq!(customer.orders[0].products[0].name, "hako");
}

#[test]
fn every_fixture_matches_lines_layout() {
	let codec = codec().with_render_options(RenderOptions::lines());
	assert_eq!(codec.serialize(&sample_order()).expect("renders"), read_fixture("order.json").expect("fixture reads"));
	assert_eq!(codec.serialize(&sample_customer()).expect("renders"), read_fixture("customer.json").expect("fixture reads"));
}

#[test]
fn compact_layout_is_lines_without_newlines() {
	let compact = codec();
	let lines = codec().with_render_options(RenderOptions::lines());
	for text in [
		lines.serialize(&sample_product()).expect("renders"),
		lines.serialize(&sample_order()).expect("renders"),
		lines.serialize(&sample_customer()).expect("renders"),
	] {
		assert!(text.contains('\n'));
		let value = compact.parse(&text).expect("lines output parses");
		assert_eq!(compact.render_value(&value), text.replace('\n', ""));
	}
	assert_eq!(
		compact.serialize(&sample_customer()).expect("renders"),
		lines.serialize(&sample_customer()).expect("renders").replace('\n', "")
	);
}
