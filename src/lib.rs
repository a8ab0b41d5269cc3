//! # sparql-client
//!
//! Turns `application/sparql-results+json` responses into typed RDF terms.
//!
//! The transport is left to the caller: hand the body of a successful SPARQL
//! response to [`ResultSet::from_reader`] and read the decoded rows through
//! one of two views:
//!
//! - [`ResultSet::bindings`]: each declared variable mapped to the terms it
//!   was bound to, in row order
//! - [`ResultSet::solutions`]: one [`Solution`] per row
//!
//! Typed literals are coerced to their XSD datatype. Values that do not
//! parse are kept as `xsd:string` literals instead of failing the decode.
//!
//! A [`QueryBank`] extracts named query templates from a tagged text file.
//!
//! ## Example
//!
//! ```rust
//! use sparql_client::{Literal, ResultSet, Term};
//!
//! fn example() -> sparql_client::Result<()> {
//!     let body = br#"{
//!         "head": { "vars": ["name", "age"] },
//!         "results": { "bindings": [ {
//!             "name": { "type": "literal", "value": "Alice" },
//!             "age": { "type": "typed-literal",
//!                      "datatype": "http://www.w3.org/2001/XMLSchema#integer",
//!                      "value": "17" }
//!         } ] }
//!     }"#;
//!
//!     let results = ResultSet::from_reader(&body[..])?;
//!     let solutions = results.solutions();
//!     assert_eq!(solutions[0].get("name"), Some(&Term::string("Alice")));
//!     assert_eq!(solutions[0].get("age"), Some(&Term::Literal(Literal::Integer(17))));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::doc_markdown)]

/// Query bank for tagged query templates
pub mod bank;

/// Error types
pub mod error;

/// RDF term model
pub mod rdf;

/// SPARQL JSON results decoding
pub mod results;

pub use bank::QueryBank;
pub use error::{Error, Result};
pub use rdf::{Literal, Term};
pub use results::{
    Binding, BindingKind, DateFormat, Header, ResolverConfig, ResultSet, Row, Solution, TermResolver, MEDIA_TYPE,
};

/// Crate version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
