use std::any::Any;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::codec::Decimal;

/// Type-erased structured instance handled through an object descriptor.
///
/// Implemented for every `'static` type that is `Debug + Clone + PartialEq + Send + Sync`.
pub trait Instance: Any + fmt::Debug + Send + Sync {
	fn as_any(&self) -> &dyn Any;
	fn as_any_mut(&mut self) -> &mut dyn Any;
	fn into_any(self: Box<Self>) -> Box<dyn Any>;
	fn clone_instance(&self) -> Box<dyn Instance>;
	fn eq_instance(&self, other: &dyn Instance) -> bool;
}

impl<T> Instance for T
where
	T: Any + fmt::Debug + Clone + PartialEq + Send + Sync,
{
	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}

	fn into_any(self: Box<Self>) -> Box<dyn Any> {
		self
	}

	fn clone_instance(&self) -> Box<dyn Instance> {
		Box::new(self.clone())
	}

	fn eq_instance(&self, other: &dyn Instance) -> bool {
		other.as_any().downcast_ref::<T>().is_some_and(|other| self == other)
	}
}

/// Boxed nested object carried inside [`Data`].
pub struct ObjectData(pub Box<dyn Instance>);

impl ObjectData {
	pub fn instance(&self) -> &dyn Instance {
		self.0.as_ref()
	}
}

impl Clone for ObjectData {
	fn clone(&self) -> Self {
		Self(self.0.clone_instance())
	}
}

impl PartialEq for ObjectData {
	fn eq(&self, other: &Self) -> bool {
		self.0.eq_instance(other.0.as_ref())
	}
}

impl fmt::Debug for ObjectData {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self.0.as_ref(), f)
	}
}

/// Instance-side value exchanged with field accessors and mutators.
#[derive(Debug, Clone, PartialEq)]
pub enum Data {
	Null,
	Bool(bool),
	/// Any signed integer width.
	Int(i64),
	/// Any unsigned integer width, bytes included.
	UInt(u64),
	F32(f32),
	F64(f64),
	Char(char),
	Str(String),
	Id(Uuid),
	Decimal(Decimal),
	Date(Date),
	DateTime(OffsetDateTime),
	/// Enumeration member name.
	Enum(String),
	List(Vec<Data>),
	Set(Vec<Data>),
	Array(Vec<Data>),
	/// Key/value pairs in insertion order.
	Map(Vec<(Data, Data)>),
	Object(ObjectData),
}

/// Rejection reported by a field mutator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataMismatch {
	pub expected: &'static str,
	pub actual: &'static str,
}

impl DataMismatch {
	pub fn new(expected: &'static str, actual: &'static str) -> Self {
		Self { expected, actual }
	}
}

impl Data {
	pub fn kind_label(&self) -> &'static str {
		match self {
			Data::Null => "null",
			Data::Bool(_) => "bool",
			Data::Int(_) => "int",
			Data::UInt(_) => "uint",
			Data::F32(_) => "f32",
			Data::F64(_) => "f64",
			Data::Char(_) => "char",
			Data::Str(_) => "string",
			Data::Id(_) => "identifier",
			Data::Decimal(_) => "decimal",
			Data::Date(_) => "date",
			Data::DateTime(_) => "datetime",
			Data::Enum(_) => "enum",
			Data::List(_) => "list",
			Data::Set(_) => "set",
			Data::Array(_) => "array",
			Data::Map(_) => "map",
			Data::Object(_) => "object",
		}
	}

	/// Wrap a structured instance.
	pub fn object<T: Instance>(value: T) -> Self {
		Data::Object(ObjectData(Box::new(value)))
	}

	/// Unwrap a structured instance of type `T`.
	pub fn into_object<T: Instance>(self) -> Result<T, DataMismatch> {
		match self {
			Data::Object(ObjectData(boxed)) => boxed
				.into_any()
				.downcast::<T>()
				.map(|item| *item)
				.map_err(|_| DataMismatch::new("object", "object of another type")),
			other => Err(DataMismatch::new("object", other.kind_label())),
		}
	}

	/// Ordered list of structured instances.
	pub fn objects<T, I>(items: I) -> Self
	where
		T: Instance,
		I: IntoIterator<Item = T>,
	{
		Data::List(items.into_iter().map(Data::object).collect())
	}

	/// Unwrap a list (or set/array) of structured instances.
	pub fn into_objects<T: Instance>(self) -> Result<Vec<T>, DataMismatch> {
		self.into_items()?.into_iter().map(Data::into_object::<T>).collect()
	}

	/// Key/value pairs in the given order.
	pub fn pairs<K, V, I>(entries: I) -> Self
	where
		K: IntoData,
		V: IntoData,
		I: IntoIterator<Item = (K, V)>,
	{
		Data::Map(entries.into_iter().map(|(key, value)| (key.into_data(), value.into_data())).collect())
	}

	/// Unwrap a map into typed pairs, keeping order.
	pub fn into_pairs<K: FromData, V: FromData>(self) -> Result<Vec<(K, V)>, DataMismatch> {
		match self {
			Data::Map(entries) => entries
				.into_iter()
				.map(|(key, value)| Ok((K::from_data(key)?, V::from_data(value)?)))
				.collect(),
			other => Err(DataMismatch::new("map", other.kind_label())),
		}
	}

	/// Elements of any collection kind.
	pub fn into_items(self) -> Result<Vec<Data>, DataMismatch> {
		match self {
			Data::List(items) | Data::Set(items) | Data::Array(items) => Ok(items),
			other => Err(DataMismatch::new("list", other.kind_label())),
		}
	}
}

/// Conversion from a model field into [`Data`].
pub trait IntoData {
	fn into_data(self) -> Data;
}

/// Conversion from bound [`Data`] back into a model field.
pub trait FromData: Sized {
	fn from_data(data: Data) -> Result<Self, DataMismatch>;
}

impl IntoData for Data {
	fn into_data(self) -> Data {
		self
	}
}

impl FromData for Data {
	fn from_data(data: Data) -> Result<Self, DataMismatch> {
		Ok(data)
	}
}

macro_rules! int_data {
	($($ty:ty => $variant:ident($wide:ty), $label:literal;)*) => {$(
		impl IntoData for $ty {
			fn into_data(self) -> Data {
				Data::$variant(<$wide>::from(self))
			}
		}

		impl FromData for $ty {
			fn from_data(data: Data) -> Result<Self, DataMismatch> {
				match data {
					Data::Int(value) => <$ty>::try_from(value).map_err(|_| DataMismatch::new($label, "out-of-range int")),
					Data::UInt(value) => <$ty>::try_from(value).map_err(|_| DataMismatch::new($label, "out-of-range uint")),
					other => Err(DataMismatch::new($label, other.kind_label())),
				}
			}
		}
	)*};
}

int_data! {
	i8 => Int(i64), "i8";
	i16 => Int(i64), "i16";
	i32 => Int(i64), "i32";
	i64 => Int(i64), "i64";
	u8 => UInt(u64), "byte";
	u16 => UInt(u64), "u16";
	u32 => UInt(u64), "u32";
	u64 => UInt(u64), "u64";
}

macro_rules! simple_data {
	($($ty:ty => $variant:ident, $label:literal;)*) => {$(
		impl IntoData for $ty {
			fn into_data(self) -> Data {
				Data::$variant(self)
			}
		}

		impl FromData for $ty {
			fn from_data(data: Data) -> Result<Self, DataMismatch> {
				match data {
					Data::$variant(value) => Ok(value),
					other => Err(DataMismatch::new($label, other.kind_label())),
				}
			}
		}
	)*};
}

simple_data! {
	bool => Bool, "bool";
	char => Char, "char";
	String => Str, "string";
	Uuid => Id, "identifier";
	Decimal => Decimal, "decimal";
	Date => Date, "date";
	OffsetDateTime => DateTime, "datetime";
}

impl IntoData for f32 {
	fn into_data(self) -> Data {
		Data::F32(self)
	}
}

impl FromData for f32 {
	fn from_data(data: Data) -> Result<Self, DataMismatch> {
		match data {
			Data::F32(value) => Ok(value),
			other => Err(DataMismatch::new("f32", other.kind_label())),
		}
	}
}

impl IntoData for f64 {
	fn into_data(self) -> Data {
		Data::F64(self)
	}
}

impl FromData for f64 {
	fn from_data(data: Data) -> Result<Self, DataMismatch> {
		match data {
			Data::F64(value) => Ok(value),
			Data::F32(value) => Ok(f64::from(value)),
			other => Err(DataMismatch::new("f64", other.kind_label())),
		}
	}
}

impl IntoData for &str {
	fn into_data(self) -> Data {
		Data::Str(self.to_owned())
	}
}

impl<T: IntoData> IntoData for Option<T> {
	fn into_data(self) -> Data {
		match self {
			Some(value) => value.into_data(),
			None => Data::Null,
		}
	}
}

impl<T: FromData> FromData for Option<T> {
	fn from_data(data: Data) -> Result<Self, DataMismatch> {
		match data {
			Data::Null => Ok(None),
			other => T::from_data(other).map(Some),
		}
	}
}

impl<T: IntoData> IntoData for Vec<T> {
	fn into_data(self) -> Data {
		Data::List(self.into_iter().map(IntoData::into_data).collect())
	}
}

impl<T: FromData> FromData for Vec<T> {
	fn from_data(data: Data) -> Result<Self, DataMismatch> {
		data.into_items()?.into_iter().map(T::from_data).collect()
	}
}

impl<T: IntoData> IntoData for Box<[T]> {
	fn into_data(self) -> Data {
		Data::Array(self.into_vec().into_iter().map(IntoData::into_data).collect())
	}
}

impl<T: FromData> FromData for Box<[T]> {
	fn from_data(data: Data) -> Result<Self, DataMismatch> {
		Vec::<T>::from_data(data).map(Vec::into_boxed_slice)
	}
}

impl<T: IntoData> IntoData for BTreeSet<T> {
	fn into_data(self) -> Data {
		Data::Set(self.into_iter().map(IntoData::into_data).collect())
	}
}

impl<T: FromData + Ord> FromData for BTreeSet<T> {
	fn from_data(data: Data) -> Result<Self, DataMismatch> {
		data.into_items()?.into_iter().map(T::from_data).collect()
	}
}

impl<K: IntoData, V: IntoData> IntoData for BTreeMap<K, V> {
	fn into_data(self) -> Data {
		Data::pairs(self)
	}
}

impl<K: FromData + Ord, V: FromData> FromData for BTreeMap<K, V> {
	fn from_data(data: Data) -> Result<Self, DataMismatch> {
		data.into_pairs::<K, V>().map(|pairs| pairs.into_iter().collect())
	}
}
