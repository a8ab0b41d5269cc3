//! Conversion of decoded terms into oxigraph model terms.
//!
//! Decoding is permissive and never validates IRIs, blank node labels or
//! language tags. oxigraph does, so the conversion is fallible and reports
//! [`Error::InvalidTerm`].

use oxigraph::model::{BlankNode, Literal as OxLiteral, NamedNode, Term as OxTerm};

use super::term::{Literal, Term};
use crate::error::{Error, Result};

impl TryFrom<&Term> for OxTerm {
    type Error = Error;

    fn try_from(term: &Term) -> Result<Self> {
        Ok(match term {
            Term::Iri(iri) => NamedNode::new(iri.as_str())?.into(),
            Term::BlankNode(label) => BlankNode::new(label.as_str())?.into(),
            Term::Literal(Literal::String(value)) => OxLiteral::new_simple_literal(value.as_str()).into(),
            Term::Literal(literal) => OxLiteral::new_typed_literal(
                literal.lexical_form(),
                NamedNode::new_unchecked(literal.datatype()),
            )
            .into(),
            Term::LangLiteral { value, lang } => {
                OxLiteral::new_language_tagged_literal(value.as_str(), lang.as_str())?.into()
            }
        })
    }
}

impl TryFrom<Term> for OxTerm {
    type Error = Error;

    fn try_from(term: Term) -> Result<Self> {
        OxTerm::try_from(&term)
    }
}
