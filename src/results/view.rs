//! Read-only projections of a decoded [`ResultSet`].
//!
//! Both views resolve every cell they visit. Unbound variables and cells
//! whose kind is unknown are left out; no placeholder takes their place.

use std::collections::{HashMap, HashSet};

use super::config::ResolverConfig;
use super::decoder::ResultSet;
use crate::rdf::Term;

/// One row of resolved terms, keyed by variable name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solution {
    terms: HashMap<String, Term>,
}

impl Solution {
    /// The term bound to `var`
    pub fn get(&self, var: &str) -> Option<&Term> {
        self.terms.get(var)
    }

    /// Whether `var` is bound
    pub fn contains(&self, var: &str) -> bool {
        self.terms.contains_key(var)
    }

    /// Number of bound variables
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether no variable is bound
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Variable and term pairs, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Term)> {
        self.terms.iter().map(|(var, term)| (var.as_str(), term))
    }

    /// The underlying map
    pub fn into_inner(self) -> HashMap<String, Term> {
        self.terms
    }
}

impl IntoIterator for Solution {
    type Item = (String, Term);
    type IntoIter = std::collections::hash_map::IntoIter<String, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl ResultSet {
    /// Terms bound to each declared variable, in row order, resolved with
    /// the default configuration
    pub fn bindings(&self) -> HashMap<String, Vec<Term>> {
        self.bindings_with(&ResolverConfig::default())
    }

    /// Terms bound to each declared variable, in row order.
    ///
    /// A variable's sequence may be shorter than the number of rows, and a
    /// variable that is never bound has no entry at all.
    pub fn bindings_with(&self, config: &ResolverConfig) -> HashMap<String, Vec<Term>> {
        let resolver = config.resolver();
        let mut seen = HashSet::new();
        let mut bound: HashMap<String, Vec<Term>> = HashMap::new();

        for var in self.vars() {
            if !seen.insert(var.as_str()) {
                continue;
            }
            for (index, row) in self.rows().iter().enumerate() {
                let Some(binding) = row.get(var) else {
                    continue;
                };
                match resolver.resolve(binding) {
                    Ok(term) => bound.entry(var.clone()).or_default().push(term),
                    Err(err) => log::warn!("dropping ?{} in row {}: {}", var, index, err),
                }
            }
        }

        bound
    }

    /// One [`Solution`] per row, resolved with the default configuration
    pub fn solutions(&self) -> Vec<Solution> {
        self.solutions_with(&ResolverConfig::default())
    }

    /// One [`Solution`] per row, in row order. Every bound variable of the
    /// row is resolved, whether or not the header declares it.
    pub fn solutions_with(&self, config: &ResolverConfig) -> Vec<Solution> {
        let resolver = config.resolver();

        self.rows()
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let terms = row
                    .iter()
                    .filter_map(|(var, binding)| match resolver.resolve(binding) {
                        Ok(term) => Some((var.clone(), term)),
                        Err(err) => {
                            log::warn!("dropping ?{} in row {}: {}", var, index, err);
                            None
                        }
                    })
                    .collect();
                Solution { terms }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::Literal;

    const DOC: &str = r#"{
        "head": { "vars": ["x", "name", "age", "x"] },
        "results": { "bindings": [
            { "x": { "type": "bnode", "value": "r1" },
              "name": { "type": "literal", "value": "Alice" },
              "age": { "type": "typed-literal", "datatype": "http://www.w3.org/2001/XMLSchema#integer", "value": "17" } },
            { "x": { "type": "bnode", "value": "r2" },
              "name": { "type": "quoted-triple", "value": "?" } },
            { "x": { "type": "bnode", "value": "r3" },
              "extra": { "type": "uri", "value": "http://example.org/extra" } }
        ] }
    }"#;

    #[test]
    fn test_bindings_skip_unbound_and_unknown() {
        let rs: ResultSet = DOC.parse().unwrap();
        let bindings = rs.bindings();

        assert_eq!(bindings["x"].len(), 3);
        assert_eq!(bindings["name"], vec![Term::string("Alice")]);
        assert_eq!(bindings["age"], vec![Term::Literal(Literal::Integer(17))]);
        assert!(!bindings.contains_key("extra"));
    }

    #[test]
    fn test_bindings_keep_row_order() {
        let rs: ResultSet = DOC.parse().unwrap();
        let labels: Vec<String> = rs.bindings()["x"].iter().map(Term::value).collect();
        assert_eq!(labels, ["r1", "r2", "r3"]);
    }

    #[test]
    fn test_solutions_one_per_row() {
        let rs: ResultSet = DOC.parse().unwrap();
        let solutions = rs.solutions();

        assert_eq!(solutions.len(), 3);
        assert_eq!(solutions[0].len(), 3);
        assert_eq!(solutions[0].get("x"), Some(&Term::BlankNode("r1".into())));

        assert!(!solutions[1].contains("name"));
        assert!(!solutions[1].contains("age"));
        assert_eq!(solutions[1].len(), 1);

        assert_eq!(solutions[2].get("extra"), Some(&Term::Iri("http://example.org/extra".into())));
    }

    #[test]
    fn test_empty_row_gives_empty_solution() {
        let rs: ResultSet = r#"{"head":{"vars":["x"]},"results":{"bindings":[{}]}}"#.parse().unwrap();
        let solutions = rs.solutions();
        assert_eq!(solutions.len(), 1);
        assert!(solutions[0].is_empty());
        assert!(rs.bindings().is_empty());
    }
}
