use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use std::time::Duration;
use uuid::Uuid;

use crate::ledger::{
    Block, DEFAULT_DIFFICULTY, DEFAULT_PEER_TIMEOUT_SECS, Ledger, ProofOfWork,
};
use crate::peers::NodeRegistry;
use crate::transaction::Transaction;

/// Shared application state. The ledger (chain + pending pool) sits behind a
/// single lock so every mutation goes through one writer at a time; the peer
/// registry has its own lock since it never touches ledger state.
pub struct AppState {
    pub ledger: Mutex<Ledger>,
    pub registry: Mutex<NodeRegistry>,
    pub pow: ProofOfWork,
    pub node_id: String,
    pub peer_timeout: Duration,
}

impl AppState {
    pub fn new(difficulty: usize, peer_timeout: Duration) -> Self {
        Self {
            ledger: Mutex::new(Ledger::new()),
            registry: Mutex::new(NodeRegistry::new()),
            pow: ProofOfWork::new(difficulty),
            node_id: Uuid::new_v4().simple().to_string(),
            peer_timeout,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            DEFAULT_DIFFICULTY,
            Duration::from_secs(DEFAULT_PEER_TIMEOUT_SECS),
        )
    }
}

/* ---------- Transaction API Models ---------- */

/// Fields are optional at the wire level so absence can be answered with the
/// dedicated 400 body instead of a deserialization error.
#[derive(Deserialize)]
pub struct NewTransactionRequest {
    pub sender: Option<String>,
    pub recipient: Option<String>,
    pub amount: Option<i64>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct PendingResponse<'a> {
    pub count: usize,
    pub transactions: &'a [Transaction],
}

/* ---------- Chain API Models ---------- */

#[derive(Serialize)]
pub struct ChainResponse<'a> {
    pub chain: &'a [Block],
    pub length: usize,
}

#[derive(Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub length: usize,
    pub difficulty: usize,
}

/* ---------- Mining API Models ---------- */

#[derive(Serialize)]
pub struct MineResponse<'a> {
    pub message: &'a str,
    pub index: u64,
    pub transactions: &'a [Transaction],
    pub proof: u64,
    pub previous_hash: &'a str,
}

/* ---------- Node API Models ---------- */

#[derive(Deserialize)]
pub struct RegisterNodesRequest {
    pub nodes: Option<Vec<String>>,
}

#[derive(Serialize)]
pub struct RegisterNodesResponse {
    pub message: String,
    pub total_nodes: Vec<String>,
}

#[derive(Serialize)]
pub struct ResolveResponse<'a> {
    pub message: &'a str,
    pub chain: &'a [Block],
}
