mod bind;
mod coerce;
mod data;
mod decimal;
mod engine;
mod error;
mod parse;
mod path;
mod render;
mod scan;
mod schema;
mod value;

/// Descriptor-driven binding from value trees to instance data.
pub use bind::{Binder, DEFAULT_BIND_DEPTH};
/// Scalar coercion table and date/time text forms.
pub use coerce::{DATE_FORMAT, DATETIME_FORMAT, coerce, coerce_text, format_date, format_datetime, parse_datetime, parse_identifier};
/// Instance-side data exchanged with field accessors.
pub use data::{Data, DataMismatch, FromData, Instance, IntoData, ObjectData};
/// Arbitrary-precision decimal numbers.
pub use decimal::Decimal;
/// High-level codec facade and one-shot entry points.
pub use engine::{Codec, deserialize, serialize};
/// Error and result aliases.
pub use error::{CodecError, Result};
/// Text parsing entry points and options.
pub use parse::{ParseOptions, parse_document};
/// Field path parser types.
pub use path::{FieldPath, PathStep};
/// Serializer layout, options and entry points.
pub use render::{Layout, RenderOptions, Renderer, render_value};
/// Type, field and object descriptors plus the registry.
pub use schema::{EnumDescriptor, FieldDescriptor, ObjectBuilder, ObjectDescriptor, ScalarKind, SchemaRegistry, TypeDescriptor};
/// Parsed value tree types.
pub use value::{Member, Number, ObjectValue, Value};
