//! XML Schema datatype IRIs used when typing literals

/// Namespace of the XML Schema datatypes
pub const NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";

/// `xsd:string`
pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
/// `xsd:integer`
pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
/// `xsd:float`
pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
/// `xsd:double`
pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
/// `xsd:boolean`
pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
/// `xsd:dateTime`
pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";

/// Datatype of language-tagged literals
pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
