//! Decoder for `application/sparql-results+json` documents.
//!
//! Decoding is purely structural. Unknown fields are ignored, every section
//! may be missing, and rows are never checked against the declared
//! variables. Bindings keep their wire fields untouched, including `type`
//! tags this crate does not understand; those only fail once a binding is
//! resolved into a [`Term`](crate::rdf::Term).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Media type of the documents understood by [`ResultSet`]
pub const MEDIA_TYPE: &str = "application/sparql-results+json";

/// One solution as it appears on the wire: variable name to binding.
/// A variable missing from the map is unbound in that solution.
pub type Row = HashMap<String, Binding>;

/// A single cell of a result row, as sent by the endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    /// `uri`, `bnode`, `literal` or `typed-literal`
    #[serde(rename = "type", default)]
    pub kind: String,
    /// IRI, blank node label or literal lexical form
    #[serde(default)]
    pub value: String,
    /// Language tag of a literal
    #[serde(rename = "xml:lang", default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// Datatype IRI of a typed literal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
}

impl Binding {
    /// A binding with the given `type` tag and value
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self { kind: kind.into(), value: value.into(), lang: None, datatype: None }
    }

    /// Sets `xml:lang`
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Sets `datatype`
    pub fn with_datatype(mut self, datatype: impl Into<String>) -> Self {
        self.datatype = Some(datatype.into());
        self
    }

    /// Parses the wire `type` tag
    pub fn kind(&self) -> Result<BindingKind> {
        self.kind.parse()
    }

    /// The language tag, treating an empty tag as absent
    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref().filter(|lang| !lang.is_empty())
    }

    /// The datatype IRI, treating an empty IRI as absent
    pub fn datatype(&self) -> Option<&str> {
        self.datatype.as_deref().filter(|datatype| !datatype.is_empty())
    }
}

/// The four binding kinds of the JSON results format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingKind {
    /// `uri`
    Uri,
    /// `bnode`
    BlankNode,
    /// `literal`
    Literal,
    /// `typed-literal`
    TypedLiteral,
}

impl BindingKind {
    /// The wire `type` tag
    pub fn as_str(&self) -> &'static str {
        match self {
            BindingKind::Uri => "uri",
            BindingKind::BlankNode => "bnode",
            BindingKind::Literal => "literal",
            BindingKind::TypedLiteral => "typed-literal",
        }
    }
}

impl FromStr for BindingKind {
    type Err = Error;

    fn from_str(kind: &str) -> Result<Self> {
        match kind {
            "uri" => Ok(BindingKind::Uri),
            "bnode" => Ok(BindingKind::BlankNode),
            "literal" => Ok(BindingKind::Literal),
            "typed-literal" => Ok(BindingKind::TypedLiteral),
            other => Err(Error::UnknownTermKind(other.to_string())),
        }
    }
}

/// `head` section of a results document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    /// Links to metadata about the results
    pub link: Vec<String>,
    /// Projected variable names, without the leading `?`
    pub vars: Vec<String>,
}

/// `results` section of a results document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Results {
    /// Whether the endpoint flagged the solutions as distinct
    pub distinct: bool,
    /// Whether the endpoint flagged the solutions as ordered
    pub ordered: bool,
    /// Solutions in endpoint order
    pub bindings: Vec<Row>,
}

/// A decoded SPARQL JSON result set. Read-only once decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    head: Header,
    #[serde(default)]
    results: Results,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    boolean: Option<bool>,
}

impl ResultSet {
    /// Decodes a results document from a reader.
    ///
    /// The reader is consumed until the end of the JSON document; wrap
    /// unbuffered sources such as sockets in a `BufReader`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let result_set: ResultSet = serde_json::from_reader(reader)?;
        result_set.log_decoded();
        Ok(result_set)
    }

    /// Decodes a results document held in memory
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let result_set: ResultSet = serde_json::from_slice(bytes)?;
        result_set.log_decoded();
        Ok(result_set)
    }

    /// The `head` section
    pub fn header(&self) -> &Header {
        &self.head
    }

    /// Declared variables, in header order
    pub fn vars(&self) -> &[String] {
        &self.head.vars
    }

    /// `head.link` entries
    pub fn links(&self) -> &[String] {
        &self.head.link
    }

    /// Rows in the order the endpoint sent them
    pub fn rows(&self) -> &[Row] {
        &self.results.bindings
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.results.bindings.len()
    }

    /// Whether there are no rows
    pub fn is_empty(&self) -> bool {
        self.results.bindings.is_empty()
    }

    /// The top-level `boolean` of an ASK response, if present
    pub fn boolean(&self) -> Option<bool> {
        self.boolean
    }

    /// `results.distinct`
    pub fn distinct(&self) -> bool {
        self.results.distinct
    }

    /// `results.ordered`
    pub fn ordered(&self) -> bool {
        self.results.ordered
    }

    fn log_decoded(&self) {
        log::debug!(
            "decoded SPARQL results: {} vars, {} rows, boolean={:?}",
            self.head.vars.len(),
            self.results.bindings.len(),
            self.boolean
        );
    }
}

impl FromStr for ResultSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_slice(s.as_bytes())
    }
}
