pub mod inputs;
mod operations;
mod proc_errors;

use serde::{Serialize, Deserialize};
use tracing::{debug, warn};

// Re-export errors
pub use proc_errors::{
    QueryError,
    ProcResult,
    err_str,
};
// Re-export the operation registry
pub use operations::{
    OperationChoice,
    GeoOperation,
    Outcome,
    available_operations,
};
pub use inputs::PlaneInput;

/// Query document.
/// A batch of geometry operations, read from a JSON, TOML or YAML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryDocument {
    pub queries: Vec<OperationChoice>,
}
impl QueryDocument {
    /// Load a query document, choosing the format by file extension.
    pub fn from_file(path: &str) -> ProcResult<Self> {
        let document: QueryDocument = crate::io::read_cfg_file(path)?;
        if document.queries.is_empty() {
            return err_str(&format!("Query document {} contains no queries", path));
        }
        Ok(document)
    }

    /// A document holding a single operation.
    pub fn single(op: OperationChoice) -> Self {
        QueryDocument{queries: vec![op]}
    }

    /// Run every operation in order.
    /// A failing operation is recorded in its result; the rest still run.
    pub fn evaluate(&self) -> Report {
        let mut results = Vec::with_capacity(self.queries.len());
        for (idx, op) in self.queries.iter().enumerate() {
            let op_name = op.get_op_name();
            let result = match op.evaluate() {
                Ok(outcome) => {
                    debug!("query {} ({}): {:?}", idx, op_name, outcome);
                    QueryResult{op: op_name.to_string(), outcome: Some(outcome), error: None}
                },
                Err(error) => {
                    warn!("query {} ({}) failed: {}", idx, op_name, error);
                    QueryResult{op: op_name.to_string(), outcome: None, error: Some(error.to_string())}
                },
            };
            results.push(result);
        }
        Report{results}
    }
}

/// Results of a query document, in document order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub results: Vec<QueryResult>,
}
impl Report {
    /// Number of operations that failed.
    pub fn failures(&self) -> usize {
        self.results.iter().filter(|result| result.error.is_some()).count()
    }
}

/// Result of one operation: either an outcome or an error message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    pub op: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
