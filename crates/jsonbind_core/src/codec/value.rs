use crate::codec::{FieldPath, PathStep};

/// Parsed JSON text before any schema is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	Null,
	Bool(bool),
	Number(Number),
	String(Box<str>),
	Array(Vec<Value>),
	Object(ObjectValue),
}

/// Numeric literal kept as source text.
///
/// Integer vs. float is decided purely by the presence of a `.` in the
/// literal, before any target kind is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Number {
	pub text: Box<str>,
	pub is_float: bool,
}

/// Object node with members in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectValue {
	pub members: Vec<Member>,
}

/// One `name: value` pair of an object node.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
	pub name: Box<str>,
	pub value: Value,
}

impl Value {
	/// Short label for the node kind, used in error messages.
	pub fn kind_label(&self) -> &'static str {
		match self {
			Value::Null => "null",
			Value::Bool(_) => "bool",
			Value::Number(_) => "number",
			Value::String(_) => "string",
			Value::Array(_) => "array",
			Value::Object(_) => "object",
		}
	}

	/// Source text of a leaf node; `None` for arrays, objects and null.
	pub fn leaf_text(&self) -> Option<&str> {
		match self {
			Value::Bool(true) => Some("true"),
			Value::Bool(false) => Some("false"),
			Value::Number(number) => Some(&number.text),
			Value::String(text) => Some(text),
			_ => None,
		}
	}

	/// Follow a field path through objects and arrays.
	pub fn select(&self, path: &FieldPath) -> Option<&Value> {
		let mut current = self;
		for step in &path.steps {
			current = match (step, current) {
				(PathStep::Field(name), Value::Object(object)) => object.get(name)?,
				(PathStep::Key(name), Value::Object(object)) => object.get(name)?,
				(PathStep::Index(index), Value::Array(items)) => items.get(*index)?,
				_ => return None,
			};
		}
		Some(current)
	}
}

impl ObjectValue {
	/// Look up a member value by exact name.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.members.iter().find(|member| member.name.as_ref() == name).map(|member| &member.value)
	}

	/// Insert a member, replacing an existing value in place so the first
	/// occurrence keeps its position.
	pub fn insert(&mut self, name: Box<str>, value: Value) {
		if let Some(slot) = self.members.iter_mut().find(|member| member.name == name) {
			slot.value = value;
			return;
		}
		self.members.push(Member { name, value });
	}

	pub fn len(&self) -> usize {
		self.members.len()
	}

	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}
}
