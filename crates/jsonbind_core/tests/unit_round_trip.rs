#![allow(missing_docs)]

use jsonbind::codec::{Codec, Data, RenderOptions, ScalarKind, TypeDescriptor};
use jsonbind_testkit::model::{Shipment, ShipmentStatus, registry, sample_shipment};

#[test]
fn shipment_round_trips_every_kind() {
	let codec = Codec::new(registry());
	let shipment = sample_shipment();

	let text = codec.serialize(&shipment).expect("shipment renders");
	let back = codec.deserialize_as::<Shipment>(&text).expect("shipment binds");

	assert_eq!(back, shipment);
	assert_eq!(back.value.scale(), 6);
	assert_eq!(back.created.expect("created").offset().whole_minutes(), -330);
	assert_eq!(back.status, ShipmentStatus::InTransit);
	assert_eq!(back.next.as_deref().map(|next| next.label.as_str()), Some("tail"));
}

#[test]
fn shipment_text_shape() {
	let codec = Codec::new(registry());
	let text = codec.serialize(&sample_shipment()).expect("shipment renders");

	assert!(text.starts_with(r#"{"code":-8,"priority":300,"quantity":-70000,"serial":9007199254740993,"#));
	assert!(text.contains(r#""checksum":18446744073709551615,"ratio":0.25,"weight":1234.5,"fragile":true,"grade":"B","flags":255,"#));
	assert!(text.contains(r#""value":12345678901234567890.000123,"shipped":"2024-02-29","created":"2024-01-02T03:04:05.1234567-05:30","#));
	assert!(text.contains(r#""status":"IN_TRANSIT","tags":["air","fragile"],"dims":[30,20,10],"next":{"code":0,"#));
	assert!(text.ends_with(r#""next":null}}"#));
}

#[test]
fn field_order_is_declaration_order() {
	let codec = Codec::new(registry());
	let first = codec.serialize(&sample_shipment()).expect("renders");
	let second = codec.serialize(&sample_shipment()).expect("renders");
	assert_eq!(first, second);

	let value = codec.parse(&first).expect("parses");
	let jsonbind::codec::Value::Object(object) = value else {
		panic!("expected object");
	};
	let names: Vec<&str> = object.members.iter().take(4).map(|member| member.name.as_ref()).collect();
	assert_eq!(names, ["code", "priority", "quantity", "serial"]);
}

#[test]
fn empty_object_keeps_defaults() {
	let codec = Codec::new(registry());
	assert_eq!(codec.deserialize_as::<Shipment>("{}").expect("binds"), Shipment::default());
}

#[test]
fn collection_order_is_preserved() {
	let codec = Codec::new(registry()).with_render_options(RenderOptions::default());
	let data = codec
		.deserialize("[3,1,2]", &TypeDescriptor::sequence(ScalarKind::I32))
		.expect("binds");
	assert_eq!(data, Data::List(vec![Data::Int(3), Data::Int(1), Data::Int(2)]));
	assert_eq!(codec.serialize_data(&data, &TypeDescriptor::sequence(ScalarKind::I32)).expect("renders"), "[3,1,2]");

	let map = TypeDescriptor::mapping_of(ScalarKind::Str, ScalarKind::I32);
	let data = codec.deserialize(r#"{"b":2,"a":1}"#, &map).expect("binds");
	assert_eq!(codec.serialize_data(&data, &map).expect("renders"), r#"{"b":2,"a":1}"#);
}
