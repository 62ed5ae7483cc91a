use actix_web::{HttpResponse, Responder, get, web};
use log::info;

use super::models::{AppState, MineResponse};
use crate::ledger::{MINING_REWARD, MINING_SENDER};

/// Mine a new block: run the proof search against the tip, credit the
/// mining reward to this node, and seal the pending pool.
#[get("/mine")]
pub async fn mine(state: web::Data<AppState>) -> impl Responder {
    let mut ledger = state.ledger.lock().expect("mutex poisoned");

    // The search keys off the tip's proof; holding the lock across it keeps
    // the tip from moving until the block is sealed.
    let last_proof = ledger.last_block().proof;
    let proof = state.pow.search(last_proof);

    // Sender "0" marks a minted coin.
    ledger.new_transaction(
        MINING_SENDER.to_string(),
        state.node_id.clone(),
        MINING_REWARD,
    );

    let previous_hash = ledger.last_block().digest();
    let block = ledger.new_block(proof, Some(previous_hash));

    info!(
        "MINER - sealed block #{} (proof={}, txs={})",
        block.index,
        block.proof,
        block.transactions.len()
    );

    HttpResponse::Ok().json(MineResponse {
        message: "New Block Forged",
        index: block.index,
        transactions: &block.transactions,
        proof: block.proof,
        previous_hash: &block.previous_hash,
    })
}
