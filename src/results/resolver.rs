//! Term resolution: wire bindings to typed RDF terms.
//!
//! Typed literals are coerced according to their XSD datatype. A value that
//! does not parse as its declared datatype is kept as an `xsd:string`
//! literal holding the original lexical value, and an unrecognized datatype
//! is treated the same way. Endpoints routinely emit loosely typed values,
//! and one bad cell must not cost the caller the whole result set, so none
//! of this is reported as an error. The only failure is a binding whose
//! `type` tag is not one of the four known kinds.

use super::config::ResolverConfig;
use super::decoder::{Binding, BindingKind};
use crate::error::Result;
use crate::rdf::{xsd, Literal, Term};

/// Resolves bindings using a borrowed [`ResolverConfig`]
#[derive(Debug, Clone, Copy)]
pub struct TermResolver<'a> {
    config: &'a ResolverConfig,
}

impl<'a> TermResolver<'a> {
    /// A resolver reading `config`
    pub fn new(config: &'a ResolverConfig) -> Self {
        Self { config }
    }

    /// The config in use
    pub fn config(&self) -> &ResolverConfig {
        self.config
    }

    /// Resolves one binding into a term.
    ///
    /// Fails only with [`Error::UnknownTermKind`](crate::Error::UnknownTermKind).
    /// A language tag wins over a datatype when a binding carries both.
    pub fn resolve(&self, binding: &Binding) -> Result<Term> {
        let term = match binding.kind()? {
            BindingKind::BlankNode => Term::BlankNode(binding.value.clone()),
            BindingKind::Uri => Term::Iri(binding.value.clone()),
            BindingKind::Literal => match (binding.lang(), binding.datatype()) {
                (Some(lang), _) => Term::lang_literal(binding.value.as_str(), lang),
                (None, Some(datatype)) if self.config.literal_datatypes => {
                    Term::Literal(self.coerce(&binding.value, datatype))
                }
                _ => Term::string(binding.value.as_str()),
            },
            BindingKind::TypedLiteral => match binding.lang() {
                Some(lang) => Term::lang_literal(binding.value.as_str(), lang),
                None => Term::Literal(self.coerce(&binding.value, binding.datatype().unwrap_or_default())),
            },
        };
        Ok(term)
    }

    /// Coerces a lexical value to the literal of `datatype`, falling back to
    /// an `xsd:string` literal with the untouched value
    pub fn coerce(&self, value: &str, datatype: &str) -> Literal {
        let coerced = match datatype {
            xsd::STRING => return Literal::String(value.to_string()),
            xsd::INTEGER => value.parse().ok().map(Literal::Integer),
            xsd::FLOAT => value.parse().ok().map(Literal::Float),
            xsd::DOUBLE => value.parse().ok().map(Literal::Double),
            xsd::BOOLEAN => parse_bool(value).map(Literal::Boolean),
            xsd::DATE_TIME => self.config.date_format.parse(value).map(Literal::DateTime),
            other => {
                log::debug!("unrecognized datatype <{}>, keeping {:?} as xsd:string", other, value);
                return Literal::String(value.to_string());
            }
        };

        coerced.unwrap_or_else(|| {
            log::debug!("{:?} is not a valid <{}>, keeping it as xsd:string", value, datatype);
            Literal::String(value.to_string())
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
