//! Errors raised while building or querying a graph.
//!
//! Parsing and validation failures abort the whole request. Outcomes that a
//! caller is expected to display (no path, exhausted palette) are not errors
//! and live in their own result types.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// The vertex or edge list contained no usable tokens.
    #[error("{what} input is empty")]
    EmptyInput { what: &'static str },

    /// An edge or a query referenced a vertex that is not in the vertex set.
    #[error("unknown vertex `{vertex}`")]
    UnknownVertex { vertex: String },

    /// A weight that is required to be finite and non-negative is not.
    #[error("edge {edge} has invalid weight {weight}")]
    InvalidWeight { edge: usize, weight: f64 },

    /// An edge token did not split into exactly `source-target-weight`.
    #[error("malformed edge `{token}`: expected 3 fields, found {fields}")]
    MalformedEdge { token: String, fields: usize },

    #[error("unknown graph mode `{mode}` (expected `directed` or `undirected`)")]
    UnknownMode { mode: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("serialization failed: {reason}")]
    Serialization { reason: String },
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        GraphError::Serialization {
            reason: err.to_string(),
        }
    }
}
