/// Sample model decode command.
pub mod decode;
/// Bundled sample walkthrough command.
pub mod demo;
/// Sample model encode command.
pub mod encode;
/// Value tree parse and inspect command.
pub mod parse;
/// Value tree printing helpers.
pub mod print;
/// Shared command helpers.
pub mod util;

#[cfg(test)]
mod test_support;
