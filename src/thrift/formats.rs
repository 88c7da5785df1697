//! Output formats for thrift trees
//!
//! Every format renders an [`AstSnapshot`](crate::thrift::ast::AstSnapshot) rather than
//! walking the tree itself.
//!
//! - `json` - JSON and YAML via serde
//! - `treeviz` - one line per node, for reading a tree at a glance

pub mod json;
pub mod treeviz;

pub use json::{to_json, to_yaml};
pub use treeviz::{to_treeviz, TreevizOptions};
