//! javasrc
//!
//! A structured code model and round-trip parser for Java source.
//!
//! ## Architecture
//!
//! The library parses Java source text into a typed code model and renders
//! that model back into canonical source text, or into Rust code that
//! rebuilds it through the builder API:
//!
//! - **parser**: tokenizer, per-construct parsers, dispatcher, and the
//!   fragment combinator
//! - **model**: the construct family (package, import, comments, javadoc,
//!   annotation, type, field, method, class) with validating builders and
//!   both renderings
//! - **bin**: command-line interface for inspecting files
//!
//! ## Flow
//!
//! ```text
//! Java Source → Tokenizer → Dispatcher → Per-construct Parsers
//!                                              ↓
//!                       Fragments → Combinator → CodeType
//! ```
//!
//! There is no compiler front end behind this: no semantic analysis, no type
//! resolution, no bytecode. Parsing is synchronous and shares no state, so
//! independent parses may run concurrently.

pub mod error;
pub mod model;
pub mod parser;

pub use error::{Error, Result};
pub use model::{
    Annotation, BuildError, BuilderWriter, Class, ClassMember, CodeKind, CodeType, Field,
    ImportStatement, Javadoc, Method, MultiLineComment, PackageDeclaration, Parameter,
    SingleLineComment, Type, TypeParameter, Violation, Visibility,
};
pub use parser::{
    parse_annotation, parse_class, parse_field, parse_import_statement, parse_javadoc,
    parse_method, parse_multi_line_comment, parse_package_declaration, parse_single_line_comment,
    parse_type, ParseError,
};
