//! RDF term model produced by the result decoder

pub mod oxigraph_adapter;
pub mod term;
pub mod xsd;

pub use term::{Literal, Term};
