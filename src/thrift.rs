//! Main module for thrift library functionality
//!
//! - `ast` - the syntax tree, positions, lookups and snapshots
//! - `lexing` - a flat token feed with chained locations
//! - `formats` - JSON, YAML and treeviz renderings
//! - `testing` - factories that build trees from thrift snippets

pub mod ast;
pub mod formats;
pub mod lexing;
pub mod testing;
