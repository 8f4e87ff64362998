#![allow(missing_docs)]

use std::collections::BTreeSet;
use std::str::FromStr;
use std::sync::Arc;

use jsonbind::codec::{Data, DataMismatch, Decimal, EnumDescriptor, FromData, IntoData, ObjectDescriptor, ScalarKind, SchemaRegistry, TypeDescriptor};
use time::macros::{date, datetime};
use time::{Date, OffsetDateTime};
use uuid::{Uuid, uuid};

/// Catalog item with per-warehouse stock counts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Product {
	pub id: Uuid,
	pub name: String,
	pub price: f64,
	/// Warehouse id to stock count, in insertion order.
	pub count: Vec<(Uuid, Decimal)>,
}

/// Purchase of one or more products.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Order {
	pub id: Uuid,
	pub products: Vec<Product>,
	pub create_date: Option<OffsetDateTime>,
}

/// Person placing orders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Customer {
	pub id: Uuid,
	pub first_name: String,
	pub last_name: String,
	pub date_birth: Option<Date>,
	pub orders: Vec<Order>,
}

/// Delivery state of a [`Shipment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShipmentStatus {
	#[default]
	Pending,
	InTransit,
	Delivered,
}

impl ShipmentStatus {
	/// Member names as they appear in text.
	pub const MEMBERS: [&'static str; 3] = ["PENDING", "IN_TRANSIT", "DELIVERED"];

	pub fn as_str(self) -> &'static str {
		match self {
			ShipmentStatus::Pending => "PENDING",
			ShipmentStatus::InTransit => "IN_TRANSIT",
			ShipmentStatus::Delivered => "DELIVERED",
		}
	}

	fn from_data(data: Data) -> Result<Self, DataMismatch> {
		match data {
			Data::Enum(member) => match member.as_str() {
				"PENDING" => Ok(ShipmentStatus::Pending),
				"IN_TRANSIT" => Ok(ShipmentStatus::InTransit),
				"DELIVERED" => Ok(ShipmentStatus::Delivered),
				_ => Err(DataMismatch::new("enum ShipmentStatus", "unknown member")),
			},
			other => Err(DataMismatch::new("enum ShipmentStatus", other.kind_label())),
		}
	}
}

/// Record touching every scalar kind and descriptor shape, including a
/// self-reference through `next`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shipment {
	pub code: i8,
	pub priority: i16,
	pub quantity: i32,
	pub serial: i64,
	pub port: u16,
	pub batch: u32,
	pub checksum: u64,
	pub ratio: f32,
	pub weight: f64,
	pub fragile: bool,
	pub grade: char,
	pub flags: u8,
	pub label: String,
	pub id: Uuid,
	pub value: Decimal,
	pub shipped: Option<Date>,
	pub created: Option<OffsetDateTime>,
	pub status: ShipmentStatus,
	pub tags: BTreeSet<String>,
	pub dims: Box<[i32]>,
	pub next: Option<Box<Shipment>>,
}

macro_rules! scalar_field {
	($builder:expr, $name:literal, $kind:expr, $ty:ty, $field:ident) => {
		$builder.field(
			$name,
			$kind,
			|item| item.$field.clone().into_data(),
			|item, data| {
				item.$field = <$ty>::from_data(data)?;
				Ok(())
			},
		)
	};
}

/// Descriptor for [`Product`].
pub fn product_descriptor() -> Arc<ObjectDescriptor> {
	let builder = ObjectDescriptor::builder::<Product>("Product");
	let builder = scalar_field!(builder, "id", ScalarKind::Identifier, Uuid, id);
	let builder = scalar_field!(builder, "name", ScalarKind::Str, String, name);
	let builder = scalar_field!(builder, "price", ScalarKind::F64, f64, price);
	builder
		.field(
			"count",
			TypeDescriptor::mapping_of(ScalarKind::Identifier, ScalarKind::Decimal),
			|item| Data::pairs(item.count.clone()),
			|item, data| {
				item.count = data.into_pairs()?;
				Ok(())
			},
		)
		.build()
}

/// Descriptor for [`Order`]; products are described inline.
pub fn order_descriptor() -> Arc<ObjectDescriptor> {
	let builder = ObjectDescriptor::builder::<Order>("Order");
	let builder = scalar_field!(builder, "id", ScalarKind::Identifier, Uuid, id);
	let builder = builder.field(
		"products",
		TypeDescriptor::sequence(&product_descriptor()),
		|item| Data::objects(item.products.clone()),
		|item, data| {
			item.products = data.into_objects()?;
			Ok(())
		},
	);
	scalar_field!(builder, "createDate", ScalarKind::DateTime, Option<OffsetDateTime>, create_date).build()
}

/// Descriptor for [`Customer`]; orders resolve by name through the registry.
pub fn customer_descriptor() -> Arc<ObjectDescriptor> {
	let builder = ObjectDescriptor::builder::<Customer>("Customer");
	let builder = scalar_field!(builder, "id", ScalarKind::Identifier, Uuid, id);
	let builder = scalar_field!(builder, "firstName", ScalarKind::Str, String, first_name);
	let builder = scalar_field!(builder, "lastName", ScalarKind::Str, String, last_name);
	let builder = scalar_field!(builder, "dateBirth", ScalarKind::Date, Option<Date>, date_birth);
	builder
		.field(
			"orders",
			TypeDescriptor::sequence(TypeDescriptor::named("Order")),
			|item| Data::objects(item.orders.clone()),
			|item, data| {
				item.orders = data.into_objects()?;
				Ok(())
			},
		)
		.build()
}

/// Descriptor for [`Shipment`].
pub fn shipment_descriptor() -> Arc<ObjectDescriptor> {
	let status = EnumDescriptor::new("ShipmentStatus", ShipmentStatus::MEMBERS);
	let builder = ObjectDescriptor::builder::<Shipment>("Shipment");
	let builder = scalar_field!(builder, "code", ScalarKind::I8, i8, code);
	let builder = scalar_field!(builder, "priority", ScalarKind::I16, i16, priority);
	let builder = scalar_field!(builder, "quantity", ScalarKind::I32, i32, quantity);
	let builder = scalar_field!(builder, "serial", ScalarKind::I64, i64, serial);
	let builder = scalar_field!(builder, "port", ScalarKind::U16, u16, port);
	let builder = scalar_field!(builder, "batch", ScalarKind::U32, u32, batch);
	let builder = scalar_field!(builder, "checksum", ScalarKind::U64, u64, checksum);
	let builder = scalar_field!(builder, "ratio", ScalarKind::F32, f32, ratio);
	let builder = scalar_field!(builder, "weight", ScalarKind::F64, f64, weight);
	let builder = scalar_field!(builder, "fragile", ScalarKind::Bool, bool, fragile);
	let builder = scalar_field!(builder, "grade", ScalarKind::Char, char, grade);
	let builder = scalar_field!(builder, "flags", ScalarKind::Byte, u8, flags);
	let builder = scalar_field!(builder, "label", ScalarKind::Str, String, label);
	let builder = scalar_field!(builder, "id", ScalarKind::Identifier, Uuid, id);
	let builder = scalar_field!(builder, "value", ScalarKind::Decimal, Decimal, value);
	let builder = scalar_field!(builder, "shipped", ScalarKind::Date, Option<Date>, shipped);
	let builder = scalar_field!(builder, "created", ScalarKind::DateTime, Option<OffsetDateTime>, created);
	builder
		.field(
			"status",
			ScalarKind::Enum(status),
			|item| Data::Enum(item.status.as_str().to_owned()),
			|item, data| {
				item.status = ShipmentStatus::from_data(data)?;
				Ok(())
			},
		)
		.field(
			"tags",
			TypeDescriptor::set_of(ScalarKind::Str),
			|item| item.tags.clone().into_data(),
			|item, data| {
				item.tags = BTreeSet::<String>::from_data(data)?;
				Ok(())
			},
		)
		.field(
			"dims",
			TypeDescriptor::fixed_array(ScalarKind::I32),
			|item| item.dims.clone().into_data(),
			|item, data| {
				item.dims = Box::<[i32]>::from_data(data)?;
				Ok(())
			},
		)
		.field(
			"next",
			TypeDescriptor::named("Shipment"),
			|item| item.next.as_deref().cloned().map_or(Data::Null, Data::object),
			|item, data| {
				item.next = match data {
					Data::Null => None,
					other => Some(Box::new(other.into_object::<Shipment>()?)),
				};
				Ok(())
			},
		)
		.build()
}

/// Registry holding every sample descriptor.
pub fn registry() -> SchemaRegistry {
	let mut registry = SchemaRegistry::new();
	registry
		.register(product_descriptor())
		.register(order_descriptor())
		.register(customer_descriptor())
		.register(shipment_descriptor());
	registry
}

/// Product matching `fixtures/product.json`.
pub fn sample_product() -> Product {
	Product {
		id: uuid!("82311989-678c-4882-a7e5-2f7d964856ec"),
		name: "hako".to_owned(),
		price: 23.6,
		count: vec![
			(uuid!("242c464d-8d47-4b72-aa91-f1732ab22a29"), Decimal::from(123_i64)),
			(uuid!("67a3541c-5b38-4aa5-bc88-66480ea5e60a"), Decimal::from(435_i64)),
		],
	}
}

/// Order matching `fixtures/order.json`.
pub fn sample_order() -> Order {
	Order {
		id: uuid!("a5d1c04a-eee3-43e5-a7ca-9cb6d7c47617"),
		products: vec![Product {
			id: uuid!("989be0a6-a122-4d38-ae80-9d6f8bbc8ebe"),
			name: "hako".to_owned(),
			price: 23.6,
			count: vec![
				(uuid!("5aea2ea3-5ea4-4219-9001-03561c2edb07"), Decimal::from(435_i64)),
				(uuid!("0821b35d-8c1a-4be7-988f-69b52c605427"), Decimal::from(123_i64)),
			],
		}],
		create_date: Some(datetime!(2024-09-22 11:10:46.8566492 +03:00)),
	}
}

/// Customer matching `fixtures/customer.json`.
pub fn sample_customer() -> Customer {
	Customer {
		id: uuid!("fc5102b7-7d73-45bb-bd8c-e8eb79f4ace6"),
		first_name: "Pasha".to_owned(),
		last_name: "Kosovich".to_owned(),
		date_birth: Some(date!(2004 - 07 - 22)),
		orders: vec![Order {
			id: uuid!("14db0c63-b35f-42e4-a206-c9842488db8d"),
			products: vec![Product {
				id: uuid!("47358a5d-e5ab-44c1-babc-b72908b35b6e"),
				name: "hako".to_owned(),
				price: 23.6,
				count: vec![
					(uuid!("526792ed-c6f0-46f8-9d3d-9cdef2db10c9"), Decimal::from(435_i64)),
					(uuid!("16bbc891-5b5d-4665-afdc-bba1d4fee5cc"), Decimal::from(123_i64)),
				],
			}],
			create_date: Some(datetime!(2024-09-22 11:12:49.2995607 +03:00)),
		}],
	}
}

/// Shipment with every field populated and one chained successor.
pub fn sample_shipment() -> Shipment {
	let tail = Shipment {
		grade: 'A',
		label: "tail".to_owned(),
		status: ShipmentStatus::Delivered,
		dims: vec![1].into_boxed_slice(),
		..Shipment::default()
	};
	Shipment {
		code: -8,
		priority: 300,
		quantity: -70_000,
		serial: 9_007_199_254_740_993,
		port: 8080,
		batch: 4_000_000_000,
		checksum: u64::MAX,
		ratio: 0.25,
		weight: 1234.5,
		fragile: true,
		grade: 'B',
		flags: 255,
		label: "crate 7".to_owned(),
		id: uuid!("550e8400-e29b-41d4-a716-446655440000"),
		value: Decimal::from_str("12345678901234567890.000123").unwrap_or_default(),
		shipped: Some(date!(2024 - 02 - 29)),
		created: Some(datetime!(2024-01-02 03:04:05.1234567 -05:30)),
		status: ShipmentStatus::InTransit,
		tags: ["fragile".to_owned(), "air".to_owned()].into_iter().collect(),
		dims: vec![30, 20, 10].into_boxed_slice(),
		next: Some(Box::new(tail)),
	}
}
