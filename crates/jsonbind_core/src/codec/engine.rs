use std::sync::Arc;

use tracing::debug;

use crate::codec::{
	Binder, CodecError, Data, Instance, ObjectDescriptor, ParseOptions, RenderOptions, Renderer, Result, SchemaRegistry, TypeDescriptor, Value, parse_document, render_value,
};

/// Schema registry plus parse and render options, bundled for repeated calls.
#[derive(Default)]
pub struct Codec {
	registry: SchemaRegistry,
	parse: ParseOptions,
	render: RenderOptions,
}

impl Codec {
	/// Codec over `registry` with default options.
	pub fn new(registry: SchemaRegistry) -> Self {
		Self {
			registry,
			..Self::default()
		}
	}

	/// Replace parse options; `max_depth` also bounds binding.
	pub fn with_parse_options(mut self, parse: ParseOptions) -> Self {
		self.parse = parse;
		self
	}

	/// Replace render options.
	pub fn with_render_options(mut self, render: RenderOptions) -> Self {
		self.render = render;
		self
	}

	/// Registered descriptors.
	pub fn registry(&self) -> &SchemaRegistry {
		&self.registry
	}

	/// Mutable registry, for registering more descriptors.
	pub fn registry_mut(&mut self) -> &mut SchemaRegistry {
		&mut self.registry
	}

	/// Active parse options.
	pub fn parse_options(&self) -> &ParseOptions {
		&self.parse
	}

	/// Active render options.
	pub fn render_options(&self) -> &RenderOptions {
		&self.render
	}

	/// Parse text into a value tree without applying any schema.
	pub fn parse(&self, text: &str) -> Result<Value> {
		debug!(bytes = text.len(), "parse");
		parse_document(text, &self.parse)
	}

	/// Serialize an instance using the descriptor registered for its type.
	pub fn serialize<T: Instance>(&self, instance: &T) -> Result<String> {
		let descriptor = self.registry.for_type::<T>()?;
		self.serialize_with(instance, descriptor)
	}

	/// Serialize an erased instance with an explicit descriptor.
	pub fn serialize_with(&self, instance: &dyn Instance, descriptor: &ObjectDescriptor) -> Result<String> {
		debug!(type_name = descriptor.name(), layout = ?self.render.layout, "serialize");
		self.renderer().render_instance(instance, descriptor)
	}

	/// Serialize free-standing data against any descriptor.
	pub fn serialize_data(&self, data: &Data, ty: &TypeDescriptor) -> Result<String> {
		debug!(ty = %ty, "serialize data");
		self.renderer().render(data, ty)
	}

	/// Parse text and bind it against `ty`.
	pub fn deserialize(&self, text: &str, ty: &TypeDescriptor) -> Result<Data> {
		debug!(ty = %ty, bytes = text.len(), "deserialize");
		let tree = parse_document(text, &self.parse)?;
		self.binder().bind(&tree, ty)
	}

	/// Parse text and bind it into `T` using its registered descriptor.
	pub fn deserialize_as<T: Instance>(&self, text: &str) -> Result<T> {
		let descriptor = self.registry.for_type::<T>()?;
		let data = self.deserialize(text, &TypeDescriptor::Object(Arc::clone(descriptor)))?;
		data.into_object::<T>().map_err(|_| CodecError::InstanceMismatch {
			descriptor: descriptor.name().to_owned(),
		})
	}

	/// Render a value tree with this codec's layout.
	pub fn render_value(&self, value: &Value) -> String {
		render_value(value, &self.render)
	}

	fn binder(&self) -> Binder<'_> {
		Binder::new(Some(&self.registry)).with_max_depth(self.parse.max_depth)
	}

	fn renderer(&self) -> Renderer<'_> {
		Renderer::new(Some(&self.registry), self.render)
	}
}

/// Serialize `instance` with `descriptor`, compact layout, no registry.
pub fn serialize(instance: &dyn Instance, descriptor: &ObjectDescriptor) -> Result<String> {
	Renderer::new(None, RenderOptions::default()).render_instance(instance, descriptor)
}

/// Parse and bind `text` against `ty` with default options, no registry.
pub fn deserialize(text: &str, ty: &TypeDescriptor) -> Result<Data> {
	let tree = parse_document(text, &ParseOptions::default())?;
	Binder::new(None).bind(&tree, ty)
}

#[cfg(test)]
mod tests {
	use super::{Codec, deserialize, serialize};
	use crate::codec::{CodecError, Data, FromData, IntoData, ObjectDescriptor, ParseOptions, RenderOptions, ScalarKind, SchemaRegistry, TypeDescriptor};

	#[derive(Debug, Clone, PartialEq, Default)]
	struct Pair {
		left: i64,
		right: Option<String>,
	}

	fn codec() -> Codec {
		let mut registry = SchemaRegistry::new();
		registry.register(
			ObjectDescriptor::builder::<Pair>("Pair")
				.field(
					"left",
					ScalarKind::I64,
					|pair| pair.left.into_data(),
					|pair, data| {
						pair.left = i64::from_data(data)?;
						Ok(())
					},
				)
				.field(
					"right",
					ScalarKind::Str,
					|pair| pair.right.clone().into_data(),
					|pair, data| {
						pair.right = Option::<String>::from_data(data)?;
						Ok(())
					},
				)
				.build(),
		);
		Codec::new(registry)
	}

	#[test]
	fn typed_round_trip() {
		let codec = codec();
		let pair = Pair {
			left: -4,
			right: Some("r".into()),
		};
		let text = codec.serialize(&pair).expect("serializes");
		assert_eq!(text, r#"{"left":-4,"right":"r"}"#);
		assert_eq!(codec.deserialize_as::<Pair>(&text).expect("deserializes"), pair);
	}

	#[test]
	fn unregistered_type_is_missing_schema() {
		let codec = codec();
		let err = codec.serialize(&7_i32).expect_err("i32 has no descriptor");
		assert!(matches!(err, CodecError::MissingSchema { .. }));
	}

	#[test]
	fn options_flow_through() {
		let codec = codec()
			.with_render_options(RenderOptions::lines())
			.with_parse_options(ParseOptions { max_depth: 1, ..ParseOptions::default() });
		let text = codec.serialize(&Pair::default()).expect("serializes");
		assert_eq!(text, "{\"left\":0,\n\"right\":null}");

		let err = codec.parse("[[1]]").expect_err("depth 2 over budget 1");
		assert!(matches!(err, CodecError::DepthExceeded { max_depth: 1 }));
	}

	#[test]
	fn free_functions_work_without_registry() {
		let data = deserialize("[1,2]", &TypeDescriptor::sequence(ScalarKind::U16)).expect("binds");
		assert_eq!(data, Data::List(vec![Data::UInt(1), Data::UInt(2)]));

		let codec = codec();
		let descriptor = codec.registry().resolve("Pair").expect("registered");
		let text = serialize(&Pair::default(), descriptor).expect("serializes");
		assert_eq!(text, r#"{"left":0,"right":null}"#);
	}
}
