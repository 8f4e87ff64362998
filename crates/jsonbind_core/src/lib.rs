//! Schema-driven JSON text codec: parse text into a value tree, bind it onto typed
//! instances through explicit descriptors, and render instances back to text.

/// Value tree, scanner, parser, coercion, binder and serializer.
pub mod codec;
