//! Query bank: named SPARQL queries kept in a plain text file.
//!
//! Each query is introduced by a tag comment and runs until the next tag:
//!
//! ```text
//! # tag: find-people
//! SELECT ?s WHERE { ?s a <{{.Class}}> }
//! LIMIT {{.Limit}}
//! ```
//!
//! Other `#` lines are dropped, the remaining lines are joined with single
//! spaces, and `{{.Name}}` placeholders are filled in by
//! [`QueryBank::prepare_with`].

use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{Error, Result};

fn tag_regex() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"^#\s*tag:\s+([\w-]+)\s*$").expect("valid tag regex"))
}

fn space_regex() -> &'static Regex {
    static SPACE: OnceLock<Regex> = OnceLock::new();
    SPACE.get_or_init(|| Regex::new(r"\s{2,}").expect("valid whitespace regex"))
}

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\{\{\s*\.(\w+)\s*\}\}").expect("valid placeholder regex"))
}

/// Named queries extracted from a tagged text source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBank {
    queries: HashMap<String, String>,
}

impl QueryBank {
    /// Reads every tagged query from `reader`
    pub fn load<R: BufRead>(reader: R) -> Result<Self> {
        let mut queries = HashMap::new();
        let mut key: Option<String> = None;
        let mut buffer = String::new();

        for line in reader.lines() {
            let line = line?;

            if let Some(captures) = tag_regex().captures(&line) {
                let candidate = captures[1].to_string();
                if let Some(previous) = key.as_ref().filter(|previous| **previous != candidate) {
                    queries.insert(previous.clone(), std::mem::take(&mut buffer));
                }
                key = Some(candidate);
                continue;
            }

            if key.is_some() && !line.starts_with('#') {
                buffer.push_str(&line);
                buffer.push(' ');
            }
        }

        // a trailing tag is only stored once it has a body
        if let Some(key) = key {
            if !buffer.is_empty() {
                queries.insert(key, buffer);
            }
        }

        let queries: HashMap<String, String> = queries
            .into_iter()
            .map(|(key, query)| (key, space_regex().replace_all(&query, " ").into_owned()))
            .collect();
        log::debug!("loaded {} queries into the bank", queries.len());

        Ok(Self { queries })
    }

    /// Reads a query bank file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::load(BufReader::new(file))
    }

    /// The stored query text, placeholders untouched
    pub fn get(&self, key: &str) -> Option<&str> {
        self.queries.get(key).map(String::as_str)
    }

    /// Whether a query is stored under `key`
    pub fn contains(&self, key: &str) -> bool {
        self.queries.contains_key(key)
    }

    /// Number of stored queries
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    /// Whether the bank holds no queries
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// Query names, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.queries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Returns the query stored under `key`, placeholders untouched
    pub fn prepare(&self, key: &str) -> Result<String> {
        self.get(key)
            .map(str::to_string)
            .ok_or_else(|| Error::QueryNotFound(key.to_string()))
    }

    /// Returns the query stored under `key` with every `{{.Field}}`
    /// replaced by the matching field of `params`.
    ///
    /// `params` must serialize to a map or struct. String fields are
    /// inserted as-is, so quoting and escaping are up to the caller.
    pub fn prepare_with<T: Serialize + ?Sized>(&self, key: &str, params: &T) -> Result<String> {
        let query = self.get(key).ok_or_else(|| Error::QueryNotFound(key.to_string()))?;

        let params = match serde_json::to_value(params) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                return Err(Error::Template(format!("parameters must be a struct or map, got {}", other)))
            }
            Err(err) => return Err(Error::Template(err.to_string())),
        };

        let mut prepared = String::with_capacity(query.len());
        let mut last = 0;
        for captures in placeholder_regex().captures_iter(query) {
            let Some(whole) = captures.get(0) else {
                continue;
            };
            let name = &captures[1];
            let value = params
                .get(name)
                .ok_or_else(|| Error::Template(format!("query {} has no value for {{{{.{}}}}}", key, name)))?;

            prepared.push_str(&query[last..whole.start()]);
            match value {
                Value::String(s) => prepared.push_str(s),
                Value::Null => {}
                other => prepared.push_str(&other.to_string()),
            }
            last = whole.end();
        }
        prepared.push_str(&query[last..]);

        Ok(prepared)
    }
}
