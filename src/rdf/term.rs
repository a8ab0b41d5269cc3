//! Resolved RDF terms.
//!
//! A [`Term`] is what a single cell of a SPARQL result row becomes once its
//! wire representation has been typed. Literals keep their coerced value
//! rather than the raw lexical string, so `"17"^^xsd:integer` is stored as
//! the number 17.

use chrono::{DateTime, FixedOffset};
use std::fmt;

use super::xsd;

/// An RDF term decoded from a SPARQL result binding
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// A named resource. The IRI is not validated.
    Iri(String),
    /// An anonymous resource identified by its local label
    BlankNode(String),
    /// A literal with a datatype
    Literal(Literal),
    /// A literal with a language tag and no datatype of its own
    LangLiteral {
        /// Lexical form
        value: String,
        /// Language tag, e.g. `en`
        lang: String,
    },
}

impl Term {
    /// Builds a language-tagged literal
    pub fn lang_literal(value: impl Into<String>, lang: impl Into<String>) -> Self {
        Term::LangLiteral { value: value.into(), lang: lang.into() }
    }

    /// Builds an `xsd:string` literal
    pub fn string(value: impl Into<String>) -> Self {
        Term::Literal(Literal::String(value.into()))
    }

    /// Whether this is an IRI
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    /// Whether this is a blank node
    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    /// Whether this is a literal, typed or language-tagged
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_) | Term::LangLiteral { .. })
    }

    /// The typed literal, if any. Language-tagged literals return `None`.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    /// The IRI, blank node label or literal lexical form
    pub fn value(&self) -> String {
        match self {
            Term::Iri(iri) => iri.clone(),
            Term::BlankNode(label) => label.clone(),
            Term::Literal(literal) => literal.lexical_form(),
            Term::LangLiteral { value, .. } => value.clone(),
        }
    }

    /// The datatype IRI for literals, `None` for IRIs and blank nodes
    pub fn datatype(&self) -> Option<&'static str> {
        match self {
            Term::Literal(literal) => Some(literal.datatype()),
            Term::LangLiteral { .. } => Some(xsd::RDF_LANG_STRING),
            Term::Iri(_) | Term::BlankNode(_) => None,
        }
    }
}

/// Formats the term in N-Triples syntax
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{}>", iri),
            Term::BlankNode(label) => write!(f, "_:{}", label),
            Term::Literal(literal) => write!(f, "{}", literal),
            Term::LangLiteral { value, lang } => {
                write_quoted(f, value)?;
                write!(f, "@{}", lang)
            }
        }
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term::Literal(literal)
    }
}

/// A typed literal value. The variant determines the datatype.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// `xsd:string`
    String(String),
    /// `xsd:integer`
    Integer(i64),
    /// `xsd:float`
    Float(f64),
    /// `xsd:double`
    Double(f64),
    /// `xsd:boolean`
    Boolean(bool),
    /// `xsd:dateTime`
    DateTime(DateTime<FixedOffset>),
}

impl Literal {
    /// The XSD datatype IRI of this literal
    pub fn datatype(&self) -> &'static str {
        match self {
            Literal::String(_) => xsd::STRING,
            Literal::Integer(_) => xsd::INTEGER,
            Literal::Float(_) => xsd::FLOAT,
            Literal::Double(_) => xsd::DOUBLE,
            Literal::Boolean(_) => xsd::BOOLEAN,
            Literal::DateTime(_) => xsd::DATE_TIME,
        }
    }

    /// Canonical lexical form of the value
    pub fn lexical_form(&self) -> String {
        match self {
            Literal::String(s) => s.clone(),
            Literal::Integer(i) => i.to_string(),
            Literal::Float(v) | Literal::Double(v) => float_lexical(*v),
            Literal::Boolean(b) => b.to_string(),
            Literal::DateTime(dt) => dt.to_rfc3339(),
        }
    }

    /// The string value of an `xsd:string` literal
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) => Some(s),
            _ => None,
        }
    }

    /// The value of an `xsd:integer` literal
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Literal::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// The value of an `xsd:float` or `xsd:double` literal
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Literal::Float(v) | Literal::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// The value of an `xsd:boolean` literal
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Literal::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The value of an `xsd:dateTime` literal
    pub fn as_date_time(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Literal::DateTime(dt) => Some(dt),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_quoted(f, &self.lexical_form())?;
        match self {
            // xsd:string is the implicit datatype of simple literals
            Literal::String(_) => Ok(()),
            _ => write!(f, "^^<{}>", self.datatype()),
        }
    }
}

fn float_lexical(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "INF".to_string()
    } else if v == f64::NEG_INFINITY {
        "-INF".to_string()
    } else {
        v.to_string()
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c => write!(f, "{}", c)?,
        }
    }
    f.write_str("\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_display_ntriples() {
        assert_eq!(Term::Iri("http://example.org/a".into()).to_string(), "<http://example.org/a>");
        assert_eq!(Term::BlankNode("r1".into()).to_string(), "_:r1");
        assert_eq!(Term::string("Alice").to_string(), "\"Alice\"");
        assert_eq!(Term::lang_literal("Bob", "en").to_string(), "\"Bob\"@en");
        assert_eq!(
            Term::Literal(Literal::Integer(17)).to_string(),
            "\"17\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
    }

    #[test]
    fn test_display_escapes_quotes() {
        assert_eq!(Term::string("say \"hi\"\n").to_string(), "\"say \\\"hi\\\"\\n\"");
    }

    #[test]
    fn test_lexical_forms() {
        assert_eq!(Literal::Float(0.2).lexical_form(), "0.2");
        assert_eq!(Literal::Double(f64::INFINITY).lexical_form(), "INF");
        assert_eq!(Literal::Boolean(false).lexical_form(), "false");

        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let dt = offset.with_ymd_and_hms(2014, 7, 21, 4, 0, 40).unwrap();
        assert_eq!(Literal::DateTime(dt).lexical_form(), "2014-07-21T04:00:40+02:00");
    }

    #[test]
    fn test_datatypes() {
        assert_eq!(Term::string("x").datatype(), Some(xsd::STRING));
        assert_eq!(Term::lang_literal("x", "en").datatype(), Some(xsd::RDF_LANG_STRING));
        assert_eq!(Term::Iri("x".into()).datatype(), None);
        assert_eq!(Literal::Boolean(true).datatype(), xsd::BOOLEAN);
    }
}
