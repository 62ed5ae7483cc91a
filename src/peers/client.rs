use std::time::Duration;

use awc::Client;
use awc::error::{JsonPayloadError, SendRequestError};
use awc::http::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::ledger::Block;

/// Failure modes when pulling a chain from one peer. A failing peer is
/// skipped for the round; resolution continues with the remaining peers.
#[derive(Debug, Error)]
pub enum PeerFetchError {
    #[error("request failed: {0}")]
    Request(#[from] SendRequestError),

    #[error("peer answered with status {0}")]
    Status(StatusCode),

    #[error("malformed chain payload: {0}")]
    Payload(#[from] JsonPayloadError),
}

/// Wire shape of a peer's `GET /chain` answer. The `length` field is
/// redundant with the array and is ignored.
#[derive(Debug, Deserialize)]
struct ChainEnvelope {
    chain: Vec<Block>,
}

/// Fetch the full chain from one peer, bounded by `timeout`.
pub async fn fetch_chain(
    client: &Client,
    address: &str,
    timeout: Duration,
) -> Result<Vec<Block>, PeerFetchError> {
    let url = format!("http://{address}/chain");
    let mut response = client.get(url).timeout(timeout).send().await?;

    if !response.status().is_success() {
        return Err(PeerFetchError::Status(response.status()));
    }

    let envelope = response.json::<ChainEnvelope>().await?;
    Ok(envelope.chain)
}
