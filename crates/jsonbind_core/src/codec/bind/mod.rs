use std::sync::Arc;

use crate::codec::coerce::{coerce, coerce_text};
use crate::codec::{CodecError, Data, FieldPath, Instance, ObjectData, ObjectDescriptor, ObjectValue, PathStep, Result, SchemaRegistry, TypeDescriptor, Value};

/// Default recursion budget for descriptor-driven binding.
pub const DEFAULT_BIND_DEPTH: u32 = 64;

/// Walks a value tree against a type descriptor and produces instance data.
///
/// `Named` descriptors are resolved through the optional registry; without
/// one they fail with [`CodecError::MissingSchema`].
#[derive(Clone, Copy)]
pub struct Binder<'a> {
	registry: Option<&'a SchemaRegistry>,
	max_depth: u32,
}

impl<'a> Binder<'a> {
	/// Create a binder with the default depth budget.
	pub fn new(registry: Option<&'a SchemaRegistry>) -> Self {
		Self {
			registry,
			max_depth: DEFAULT_BIND_DEPTH,
		}
	}

	/// Override the recursion budget.
	pub fn with_max_depth(mut self, max_depth: u32) -> Self {
		self.max_depth = max_depth;
		self
	}

	/// Bind `node` against `ty`; errors carry a path rooted at the type name.
	pub fn bind(&self, node: &Value, ty: &TypeDescriptor) -> Result<Data> {
		let root = match ty {
			TypeDescriptor::Object(descriptor) => FieldPath::root(descriptor.name()),
			TypeDescriptor::Named(name) => FieldPath::root(name),
			_ => FieldPath::root("$"),
		};
		self.bind_at(node, ty, &root, 0)
	}

	/// Bind an object node into a fresh instance of `descriptor`.
	pub fn bind_object(&self, node: &Value, descriptor: &ObjectDescriptor) -> Result<Box<dyn Instance>> {
		self.bind_fields(node, descriptor, &FieldPath::root(descriptor.name()), 0)
	}

	fn bind_at(&self, node: &Value, ty: &TypeDescriptor, path: &FieldPath, depth: u32) -> Result<Data> {
		if matches!(node, Value::Null) {
			return Ok(Data::Null);
		}

		match ty {
			TypeDescriptor::Scalar(kind) => match node {
				Value::Array(_) | Value::Object(_) => Err(mismatch(path, ty, node)),
				_ => coerce(node, kind),
			},
			TypeDescriptor::Sequence(element) => self.bind_items(node, ty, element, path, depth).map(Data::List),
			TypeDescriptor::FixedArray(element) => self.bind_items(node, ty, element, path, depth).map(Data::Array),
			TypeDescriptor::SetOf(element) => {
				let items = self.bind_items(node, ty, element, path, depth)?;
				let mut unique: Vec<Data> = Vec::with_capacity(items.len());
				for item in items {
					if !unique.contains(&item) {
						unique.push(item);
					}
				}
				Ok(Data::Set(unique))
			}
			TypeDescriptor::MappingOf(key, value) => {
				let Value::Object(object) = node else {
					return Err(mismatch(path, ty, node));
				};
				self.bind_map(object, key, value, path, depth)
			}
			TypeDescriptor::Object(descriptor) => self.bind_fields(node, descriptor, path, depth).map(|instance| Data::Object(ObjectData(instance))),
			TypeDescriptor::Named(name) => {
				let descriptor = self.resolve(name)?;
				self.bind_fields(node, &descriptor, path, depth).map(|instance| Data::Object(ObjectData(instance)))
			}
		}
	}

	fn bind_items(&self, node: &Value, ty: &TypeDescriptor, element: &TypeDescriptor, path: &FieldPath, depth: u32) -> Result<Vec<Data>> {
		let Value::Array(items) = node else {
			return Err(mismatch(path, ty, node));
		};
		let depth = self.enter(depth)?;
		items
			.iter()
			.enumerate()
			.map(|(index, item)| {
				let item_path = path.child(PathStep::Index(index));
				// Object elements have no null slot.
				if matches!(item, Value::Null) && matches!(element, TypeDescriptor::Object(_) | TypeDescriptor::Named(_)) {
					return Err(mismatch(&item_path, element, item));
				}
				self.bind_at(item, element, &item_path, depth)
			})
			.collect()
	}

	fn bind_map(&self, object: &ObjectValue, key: &TypeDescriptor, value: &TypeDescriptor, path: &FieldPath, depth: u32) -> Result<Data> {
		let TypeDescriptor::Scalar(key_kind) = key else {
			return Err(CodecError::UnsupportedType {
				field: path.to_string(),
				detail: format!("map key {key} is not a scalar kind"),
			});
		};
		let depth = self.enter(depth)?;

		let mut entries: Vec<(Data, Data)> = Vec::with_capacity(object.len());
		for member in &object.members {
			let entry_path = path.child(PathStep::Key(member.name.to_string()));
			let key_data = coerce_text(&member.name, key_kind)?;
			let value_data = self.bind_at(&member.value, value, &entry_path, depth)?;
			match entries.iter_mut().find(|(existing, _)| *existing == key_data) {
				Some(slot) => slot.1 = value_data,
				None => entries.push((key_data, value_data)),
			}
		}
		Ok(Data::Map(entries))
	}

	fn bind_fields(&self, node: &Value, descriptor: &ObjectDescriptor, path: &FieldPath, depth: u32) -> Result<Box<dyn Instance>> {
		let Value::Object(object) = node else {
			return Err(CodecError::FieldBinding {
				field: path.to_string(),
				expected: "object",
				actual: node.kind_label(),
			});
		};
		let depth = self.enter(depth)?;

		let mut instance = descriptor.construct();
		for field in descriptor.fields() {
			let Some(member) = object.get(field.name()) else {
				continue;
			};
			let field_path = path.child(PathStep::Field(field.name().to_owned()));
			let data = self.bind_at(member, field.ty(), &field_path, depth)?;
			descriptor.write(field, instance.as_mut(), data, &field_path)?;
		}

		for member in &object.members {
			if descriptor.field(&member.name).is_none() {
				tracing::trace!(path = %path, key = %member.name, "ignoring unknown key");
			}
		}

		Ok(instance)
	}

	fn resolve(&self, name: &str) -> Result<Arc<ObjectDescriptor>> {
		match self.registry {
			Some(registry) => registry.resolve(name).map(Arc::clone),
			None => Err(CodecError::MissingSchema { type_name: name.to_owned() }),
		}
	}

	fn enter(&self, depth: u32) -> Result<u32> {
		if depth >= self.max_depth {
			return Err(CodecError::DepthExceeded { max_depth: self.max_depth });
		}
		Ok(depth + 1)
	}
}

fn mismatch(path: &FieldPath, ty: &TypeDescriptor, node: &Value) -> CodecError {
	CodecError::FieldBinding {
		field: path.to_string(),
		expected: ty.expected_kind(),
		actual: node.kind_label(),
	}
}
