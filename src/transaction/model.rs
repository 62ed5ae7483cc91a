use serde::{Deserialize, Serialize};

/// A transfer record as submitted by a client. Values are kept as-is:
/// identity and amount-sign checks are outside this node's scope, and
/// duplicate transactions are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: String,
    pub recipient: String,
    pub amount: i64,
}
