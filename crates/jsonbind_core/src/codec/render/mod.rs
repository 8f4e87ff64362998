use std::sync::Arc;

use crate::codec::coerce::{format_date, format_datetime};
use crate::codec::{CodecError, Data, FieldPath, Instance, ObjectDescriptor, PathStep, Result, ScalarKind, SchemaRegistry, TypeDescriptor, Value};

/// Whitespace layout of rendered text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
	/// No whitespace at all.
	#[default]
	Compact,
	/// Line breaks between object members and around collection and map bodies.
	///
	/// Removing every `\n` yields the [`Layout::Compact`] text.
	Lines,
}

/// Output options for the serializer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
	/// Whitespace layout.
	pub layout: Layout,
}

impl RenderOptions {
	/// Preset producing line-broken output.
	pub fn lines() -> Self {
		Self { layout: Layout::Lines }
	}

	fn member_sep(self) -> &'static str {
		match self.layout {
			Layout::Compact => ",",
			Layout::Lines => ",\n",
		}
	}

	fn edge(self) -> &'static str {
		match self.layout {
			Layout::Compact => "",
			Layout::Lines => "\n",
		}
	}
}

/// Renders instance data back to text following its descriptors.
#[derive(Clone, Copy)]
pub struct Renderer<'a> {
	registry: Option<&'a SchemaRegistry>,
	options: RenderOptions,
}

impl<'a> Renderer<'a> {
	/// `registry` resolves `Named` descriptors; without one they fail.
	pub fn new(registry: Option<&'a SchemaRegistry>, options: RenderOptions) -> Self {
		Self { registry, options }
	}

	/// Render every field of `instance` in declaration order.
	pub fn render_instance(&self, instance: &dyn Instance, descriptor: &ObjectDescriptor) -> Result<String> {
		let mut out = String::new();
		self.write_fields(&mut out, instance, descriptor, &FieldPath::root(descriptor.name()))?;
		Ok(out)
	}

	/// Render free-standing data against `ty`.
	pub fn render(&self, data: &Data, ty: &TypeDescriptor) -> Result<String> {
		let root = match ty {
			TypeDescriptor::Object(descriptor) => FieldPath::root(descriptor.name()),
			TypeDescriptor::Named(name) => FieldPath::root(name),
			_ => FieldPath::root("$"),
		};
		let mut out = String::new();
		self.write_data(&mut out, data, ty, &root)?;
		Ok(out)
	}

	fn write_data(&self, out: &mut String, data: &Data, ty: &TypeDescriptor, path: &FieldPath) -> Result<()> {
		if matches!(data, Data::Null) {
			out.push_str("null");
			return Ok(());
		}

		match ty {
			TypeDescriptor::Scalar(kind) => {
				let text = scalar_text(data, kind, path)?;
				if is_quoted(kind) {
					push_quoted(out, &text);
				} else {
					out.push_str(&text);
				}
			}
			TypeDescriptor::Sequence(element) | TypeDescriptor::SetOf(element) | TypeDescriptor::FixedArray(element) => {
				let (Data::List(items) | Data::Set(items) | Data::Array(items)) = data else {
					return Err(unsupported(path, ty, data));
				};
				out.push('[');
				out.push_str(self.options.edge());
				for (index, item) in items.iter().enumerate() {
					if index > 0 {
						out.push_str(self.options.member_sep());
					}
					self.write_data(out, item, element, &path.child(PathStep::Index(index)))?;
				}
				out.push_str(self.options.edge());
				out.push(']');
			}
			TypeDescriptor::MappingOf(key, value) => {
				let Data::Map(entries) = data else {
					return Err(unsupported(path, ty, data));
				};
				let TypeDescriptor::Scalar(key_kind) = key.as_ref() else {
					return Err(CodecError::UnsupportedType {
						field: path.to_string(),
						detail: format!("map key {key} is not a scalar kind"),
					});
				};
				out.push('{');
				out.push_str(self.options.edge());
				for (index, (entry_key, entry_value)) in entries.iter().enumerate() {
					if index > 0 {
						out.push(',');
					}
					let key_text = scalar_text(entry_key, key_kind, path)?;
					push_quoted(out, &key_text);
					out.push(':');
					self.write_data(out, entry_value, value, &path.child(PathStep::Key(key_text)))?;
				}
				out.push_str(self.options.edge());
				out.push('}');
			}
			TypeDescriptor::Object(descriptor) => self.write_object(out, data, ty, descriptor, path)?,
			TypeDescriptor::Named(name) => {
				let descriptor = self.resolve(name)?;
				self.write_object(out, data, ty, &descriptor, path)?;
			}
		}
		Ok(())
	}

	fn write_object(&self, out: &mut String, data: &Data, ty: &TypeDescriptor, descriptor: &ObjectDescriptor, path: &FieldPath) -> Result<()> {
		let Data::Object(object) = data else {
			return Err(unsupported(path, ty, data));
		};
		self.write_fields(out, object.instance(), descriptor, path)
	}

	fn write_fields(&self, out: &mut String, instance: &dyn Instance, descriptor: &ObjectDescriptor, path: &FieldPath) -> Result<()> {
		out.push('{');
		for (index, field) in descriptor.fields().iter().enumerate() {
			if index > 0 {
				out.push_str(self.options.member_sep());
			}
			let data = descriptor.read(field, instance)?;
			push_quoted(out, field.name());
			out.push(':');
			self.write_data(out, &data, field.ty(), &path.child(PathStep::Field(field.name().to_owned())))?;
		}
		out.push('}');
		Ok(())
	}

	fn resolve(&self, name: &str) -> Result<Arc<ObjectDescriptor>> {
		match self.registry {
			Some(registry) => registry.resolve(name).map(Arc::clone),
			None => Err(CodecError::MissingSchema { type_name: name.to_owned() }),
		}
	}
}

/// Render a parsed value tree; numbers keep their source text.
pub fn render_value(value: &Value, options: &RenderOptions) -> String {
	let mut out = String::new();
	write_value(&mut out, value, *options);
	out
}

fn write_value(out: &mut String, value: &Value, options: RenderOptions) {
	match value {
		Value::Null => out.push_str("null"),
		Value::Bool(flag) => out.push_str(if *flag { "true" } else { "false" }),
		Value::Number(number) => out.push_str(&number.text),
		Value::String(text) => push_quoted(out, text),
		Value::Array(items) => {
			out.push('[');
			out.push_str(options.edge());
			for (index, item) in items.iter().enumerate() {
				if index > 0 {
					out.push_str(options.member_sep());
				}
				write_value(out, item, options);
			}
			out.push_str(options.edge());
			out.push(']');
		}
		Value::Object(object) => {
			out.push('{');
			for (index, member) in object.members.iter().enumerate() {
				if index > 0 {
					out.push_str(options.member_sep());
				}
				push_quoted(out, &member.name);
				out.push(':');
				write_value(out, &member.value, options);
			}
			out.push('}');
		}
	}
}

/// Unquoted text of a scalar, checked against its declared kind.
fn scalar_text(data: &Data, kind: &ScalarKind, path: &FieldPath) -> Result<String> {
	let text = match (kind, data) {
		(ScalarKind::I8 | ScalarKind::I16 | ScalarKind::I32 | ScalarKind::I64, Data::Int(value)) => value.to_string(),
		(ScalarKind::Byte | ScalarKind::U16 | ScalarKind::U32 | ScalarKind::U64, Data::UInt(value)) => value.to_string(),
		(ScalarKind::F32, Data::F32(value)) => float_text(f64::from(*value), format!("{value:?}"))?,
		(ScalarKind::F64, Data::F64(value)) => float_text(*value, format!("{value:?}"))?,
		(ScalarKind::F64, Data::F32(value)) => float_text(f64::from(*value), format!("{value:?}"))?,
		(ScalarKind::Bool, Data::Bool(value)) => value.to_string(),
		(ScalarKind::Char, Data::Char(value)) => value.to_string(),
		(ScalarKind::Str, Data::Str(value)) => value.clone(),
		(ScalarKind::Identifier, Data::Id(value)) => value.hyphenated().to_string(),
		(ScalarKind::Decimal, Data::Decimal(value)) => value.to_string(),
		(ScalarKind::Date, Data::Date(value)) => format_date(value)?,
		(ScalarKind::DateTime, Data::DateTime(value)) => format_datetime(value)?,
		(ScalarKind::Enum(item), Data::Enum(member)) => {
			if !item.contains(member) {
				return Err(CodecError::EnumMemberNotFound {
					enum_name: item.name.clone(),
					text: member.clone(),
				});
			}
			member.clone()
		}
		_ => return Err(unsupported(path, &TypeDescriptor::Scalar(kind.clone()), data)),
	};
	Ok(text)
}

fn float_text(value: f64, text: String) -> Result<String> {
	if !value.is_finite() {
		return Err(CodecError::TypeConversion { kind: "float", text });
	}
	Ok(text)
}

fn is_quoted(kind: &ScalarKind) -> bool {
	matches!(
		kind,
		ScalarKind::Char | ScalarKind::Str | ScalarKind::Identifier | ScalarKind::Date | ScalarKind::DateTime | ScalarKind::Enum(_)
	)
}

fn push_quoted(out: &mut String, text: &str) {
	out.push('"');
	out.push_str(text);
	out.push('"');
}

fn unsupported(path: &FieldPath, ty: &TypeDescriptor, data: &Data) -> CodecError {
	CodecError::UnsupportedType {
		field: path.to_string(),
		detail: format!("{ty} cannot hold {} data", data.kind_label()),
	}
}
