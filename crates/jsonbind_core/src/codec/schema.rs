use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::codec::{CodecError, Data, DataMismatch, FieldPath, Instance, Result};

type Getter = Box<dyn Fn(&dyn Any) -> Option<Data> + Send + Sync>;
type Setter = Box<dyn Fn(&mut dyn Any, Data) -> Option<std::result::Result<(), DataMismatch>> + Send + Sync>;
type Constructor = Box<dyn Fn() -> Box<dyn Instance> + Send + Sync>;

/// Leaf kinds the coercion table knows how to read and write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarKind {
	I8,
	I16,
	I32,
	I64,
	U16,
	U32,
	U64,
	F32,
	F64,
	Bool,
	Char,
	/// Unsigned 8-bit integer.
	Byte,
	Str,
	/// 128-bit UUID in canonical hyphenated form.
	Identifier,
	/// Arbitrary-precision decimal.
	Decimal,
	/// `YYYY-MM-DD` calendar date.
	Date,
	/// Date-time with a UTC offset.
	DateTime,
	Enum(Arc<EnumDescriptor>),
}

impl ScalarKind {
	/// Stable lowercase label used in errors and descriptor dumps.
	pub fn label(&self) -> &'static str {
		match self {
			ScalarKind::I8 => "i8",
			ScalarKind::I16 => "i16",
			ScalarKind::I32 => "i32",
			ScalarKind::I64 => "i64",
			ScalarKind::U16 => "u16",
			ScalarKind::U32 => "u32",
			ScalarKind::U64 => "u64",
			ScalarKind::F32 => "f32",
			ScalarKind::F64 => "f64",
			ScalarKind::Bool => "bool",
			ScalarKind::Char => "char",
			ScalarKind::Byte => "byte",
			ScalarKind::Str => "string",
			ScalarKind::Identifier => "identifier",
			ScalarKind::Decimal => "decimal",
			ScalarKind::Date => "date",
			ScalarKind::DateTime => "datetime",
			ScalarKind::Enum(_) => "enum",
		}
	}
}

/// Named enumeration with its declared member names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
	pub name: String,
	pub members: Vec<String>,
}

impl EnumDescriptor {
	pub fn new<I, S>(name: &str, members: I) -> Arc<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Arc::new(Self {
			name: name.to_owned(),
			members: members.into_iter().map(Into::into).collect(),
		})
	}

	/// Case-sensitive member lookup.
	pub fn contains(&self, member: &str) -> bool {
		self.members.iter().any(|item| item == member)
	}
}

/// Shape a binder produces from, or a renderer consumes to, JSON text.
#[derive(Clone)]
pub enum TypeDescriptor {
	Scalar(ScalarKind),
	/// Ordered list; source order preserved.
	Sequence(Box<TypeDescriptor>),
	/// Set semantics; duplicates collapse to the first occurrence.
	SetOf(Box<TypeDescriptor>),
	/// Ordered key/value map.
	MappingOf(Box<TypeDescriptor>, Box<TypeDescriptor>),
	/// Fixed-size array; length taken from the source.
	FixedArray(Box<TypeDescriptor>),
	Object(Arc<ObjectDescriptor>),
	/// Object type resolved by name through a [`SchemaRegistry`].
	Named(String),
}

impl TypeDescriptor {
	pub fn sequence(element: impl Into<TypeDescriptor>) -> Self {
		Self::Sequence(Box::new(element.into()))
	}

	pub fn set_of(element: impl Into<TypeDescriptor>) -> Self {
		Self::SetOf(Box::new(element.into()))
	}

	pub fn mapping_of(key: impl Into<TypeDescriptor>, value: impl Into<TypeDescriptor>) -> Self {
		Self::MappingOf(Box::new(key.into()), Box::new(value.into()))
	}

	pub fn fixed_array(element: impl Into<TypeDescriptor>) -> Self {
		Self::FixedArray(Box::new(element.into()))
	}

	pub fn named(name: &str) -> Self {
		Self::Named(name.to_owned())
	}

	/// Value-tree kind this descriptor expects to bind from.
	pub fn expected_kind(&self) -> &'static str {
		match self {
			TypeDescriptor::Scalar(kind) => kind.label(),
			TypeDescriptor::Sequence(_) | TypeDescriptor::SetOf(_) | TypeDescriptor::FixedArray(_) => "array",
			TypeDescriptor::MappingOf(..) | TypeDescriptor::Object(_) | TypeDescriptor::Named(_) => "object",
		}
	}
}

impl From<ScalarKind> for TypeDescriptor {
	fn from(kind: ScalarKind) -> Self {
		Self::Scalar(kind)
	}
}

impl From<&Arc<ObjectDescriptor>> for TypeDescriptor {
	fn from(descriptor: &Arc<ObjectDescriptor>) -> Self {
		Self::Object(Arc::clone(descriptor))
	}
}

impl fmt::Display for TypeDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TypeDescriptor::Scalar(ScalarKind::Enum(item)) => write!(f, "enum {}", item.name),
			TypeDescriptor::Scalar(kind) => f.write_str(kind.label()),
			TypeDescriptor::Sequence(element) => write!(f, "sequence<{element}>"),
			TypeDescriptor::SetOf(element) => write!(f, "set<{element}>"),
			TypeDescriptor::MappingOf(key, value) => write!(f, "map<{key}, {value}>"),
			TypeDescriptor::FixedArray(element) => write!(f, "array<{element}>"),
			TypeDescriptor::Object(item) => f.write_str(item.name()),
			TypeDescriptor::Named(name) => f.write_str(name),
		}
	}
}

impl fmt::Debug for TypeDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TypeDescriptor({self})")
	}
}

/// One member of a structured type: name, shape, accessor and mutator.
pub struct FieldDescriptor {
	name: String,
	ty: TypeDescriptor,
	get: Getter,
	set: Setter,
}

impl FieldDescriptor {
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn ty(&self) -> &TypeDescriptor {
		&self.ty
	}
}

impl fmt::Debug for FieldDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FieldDescriptor").field("name", &self.name).field("ty", &self.ty).finish()
	}
}

/// Immutable field table and constructor for one structured type.
///
/// Built once through [`ObjectDescriptor::builder`] and shared read-only
/// across every codec call for that type.
pub struct ObjectDescriptor {
	name: String,
	type_id: TypeId,
	fields: Vec<FieldDescriptor>,
	construct: Constructor,
}

impl ObjectDescriptor {
	/// Start a descriptor for `T`, constructed through `T::default()`.
	pub fn builder<T: Instance + Default>(name: &str) -> ObjectBuilder<T> {
		ObjectBuilder {
			name: name.to_owned(),
			fields: Vec::new(),
			_marker: PhantomData,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Fields in declaration order.
	pub fn fields(&self) -> &[FieldDescriptor] {
		&self.fields
	}

	pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
		self.fields.iter().find(|field| field.name == name)
	}

	/// Rust type the accessors were written for.
	pub fn instance_type(&self) -> TypeId {
		self.type_id
	}

	/// Fresh default instance to populate during binding.
	pub fn construct(&self) -> Box<dyn Instance> {
		(self.construct)()
	}

	/// Read one field through its accessor.
	pub fn read(&self, field: &FieldDescriptor, instance: &dyn Instance) -> Result<Data> {
		(field.get)(instance.as_any()).ok_or_else(|| CodecError::InstanceMismatch { descriptor: self.name.clone() })
	}

	/// Write one field through its mutator; `path` locates rejections.
	pub fn write(&self, field: &FieldDescriptor, instance: &mut dyn Instance, data: Data, path: &FieldPath) -> Result<()> {
		let outcome = (field.set)(instance.as_any_mut(), data).ok_or_else(|| CodecError::InstanceMismatch { descriptor: self.name.clone() })?;
		outcome.map_err(|mismatch| CodecError::FieldBinding {
			field: path.to_string(),
			expected: mismatch.expected,
			actual: mismatch.actual,
		})
	}
}

impl fmt::Debug for ObjectDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ObjectDescriptor").field("name", &self.name).field("fields", &self.fields).finish()
	}
}

/// Typed builder that erases accessors into an [`ObjectDescriptor`].
pub struct ObjectBuilder<T> {
	name: String,
	fields: Vec<FieldDescriptor>,
	_marker: PhantomData<fn() -> T>,
}

impl<T: Instance + Default> ObjectBuilder<T> {
	/// Append a field; declaration order is serialization order.
	pub fn field<G, S>(mut self, name: &str, ty: impl Into<TypeDescriptor>, get: G, set: S) -> Self
	where
		G: Fn(&T) -> Data + Send + Sync + 'static,
		S: Fn(&mut T, Data) -> std::result::Result<(), DataMismatch> + Send + Sync + 'static,
	{
		let get: Getter = Box::new(move |instance: &dyn Any| instance.downcast_ref::<T>().map(&get));
		let set: Setter = Box::new(move |instance: &mut dyn Any, data: Data| instance.downcast_mut::<T>().map(|target| set(target, data)));
		self.fields.push(FieldDescriptor {
			name: name.to_owned(),
			ty: ty.into(),
			get,
			set,
		});
		self
	}

	pub fn build(self) -> Arc<ObjectDescriptor> {
		Arc::new(ObjectDescriptor {
			name: self.name,
			type_id: TypeId::of::<T>(),
			fields: self.fields,
			construct: Box::new(|| Box::new(T::default())),
		})
	}
}

/// Object descriptors addressable by type name and by Rust type.
#[derive(Default)]
pub struct SchemaRegistry {
	by_name: HashMap<String, Arc<ObjectDescriptor>>,
	by_type: HashMap<TypeId, Arc<ObjectDescriptor>>,
}

impl SchemaRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a descriptor; a later registration for the same name or type wins.
	pub fn register(&mut self, descriptor: Arc<ObjectDescriptor>) -> &mut Self {
		self.by_type.insert(descriptor.instance_type(), Arc::clone(&descriptor));
		self.by_name.insert(descriptor.name().to_owned(), descriptor);
		self
	}

	pub fn get(&self, name: &str) -> Option<&Arc<ObjectDescriptor>> {
		self.by_name.get(name)
	}

	/// Look up by name, failing with [`CodecError::MissingSchema`].
	pub fn resolve(&self, name: &str) -> Result<&Arc<ObjectDescriptor>> {
		self.get(name).ok_or_else(|| CodecError::MissingSchema { type_name: name.to_owned() })
	}

	/// Look up the descriptor registered for Rust type `T`.
	pub fn for_type<T: Instance>(&self) -> Result<&Arc<ObjectDescriptor>> {
		self.by_type.get(&TypeId::of::<T>()).ok_or_else(|| CodecError::MissingSchema {
			type_name: std::any::type_name::<T>().to_owned(),
		})
	}

	pub fn len(&self) -> usize {
		self.by_name.len()
	}

	pub fn is_empty(&self) -> bool {
		self.by_name.is_empty()
	}

	/// Registered type names in sorted order.
	pub fn names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.by_name.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}
}
