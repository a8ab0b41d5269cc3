//! SPARQL JSON results: decoding, term resolution and result views

pub mod config;
pub mod decoder;
pub mod resolver;
pub mod view;

pub use config::{DateFormat, ResolverConfig};
pub use decoder::{Binding, BindingKind, Header, ResultSet, Row, MEDIA_TYPE};
pub use resolver::TermResolver;
pub use view::Solution;
