//! # thrift-ast
//!
//! Error-tolerant syntax tree for Thrift IDL tooling.
//!
//! A grammar engine builds a [`Document`](thrift::ast::Document) bottom-up while it parses a
//! `.thrift` file. Constructs that fail to parse become bad placeholders instead of aborting
//! the build, so editors get a tree for files that are broken mid-edit. Presentation code
//! reads the tree through the [`AstNode`](thrift::ast::AstNode) contract: positions, children
//! in source order, and validity.
//!
//! ## Testing
//!
//! Trees for tests are built with the factories in [testing](thrift::testing), which lay
//! nodes out as real source text and compute every location from it.

pub mod thrift;
