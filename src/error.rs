/*!
Error types for document loading, XML parsing, XPath text parsing, and evaluation.
*/

use std::path::PathBuf;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The referenced document could not be read from disk.
    #[error("could not read document '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The referenced document was read but is not well-formed XML.
    #[error("document '{path}' is not well-formed XML: {message}")]
    Parse { path: PathBuf, message: String },

    /// The XPath query text could not be parsed into an AST.
    #[error("could not parse XPath expression: {0}")]
    QueryParse(String),

    /// The AST handed to the evaluator violates an internal invariant, e.g. an
    /// `Attribute` step with an empty name.
    #[error("malformed AST: {0}")]
    Eval(String),
}
