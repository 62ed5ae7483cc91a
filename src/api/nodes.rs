use actix_web::{HttpResponse, Responder, get, post, web};
use awc::Client;
use log::{info, warn};

use super::models::{AppState, RegisterNodesRequest, RegisterNodesResponse, ResolveResponse};
use crate::ledger::consensus;
use crate::peers::fetch_chain;

/// Register peer nodes for consensus resolution.
#[post("/nodes/register")]
pub async fn register_nodes(
    state: web::Data<AppState>,
    body: web::Json<RegisterNodesRequest>,
) -> impl Responder {
    let nodes = body.into_inner().nodes.unwrap_or_default();
    if nodes.is_empty() {
        return HttpResponse::BadRequest().body("Error: Please supply a valid list of nodes");
    }

    let total_nodes = {
        let mut registry = state.registry.lock().expect("mutex poisoned");
        let mut accepted = 0usize;
        for node in &nodes {
            match registry.register(node) {
                Some(addr) => {
                    accepted += 1;
                    info!("NODES - registered peer {addr}");
                }
                None => warn!("NODES - ignored unusable address {node:?}"),
            }
        }
        if accepted == 0 {
            return HttpResponse::BadRequest()
                .body("Error: Please supply a valid list of nodes");
        }
        registry.addresses()
    };

    HttpResponse::Created().json(RegisterNodesResponse {
        message: "New nodes have been added".to_string(),
        total_nodes,
    })
}

/// Longest-valid-chain consensus against every registered peer.
#[get("/nodes/resolve")]
pub async fn resolve_conflicts(state: web::Data<AppState>) -> impl Responder {
    let peers = {
        let registry = state.registry.lock().expect("mutex poisoned");
        registry.addresses()
    };

    // Fetch outside the ledger lock; a dead peer only costs its timeout and
    // is skipped for this round.
    let client = Client::default();
    let mut candidates = Vec::with_capacity(peers.len());
    for addr in &peers {
        match fetch_chain(&client, addr, state.peer_timeout).await {
            Ok(chain) => candidates.push(chain),
            Err(err) => warn!("RESOLVE - skipping peer {addr}: {err}"),
        }
    }

    let mut ledger = state.ledger.lock().expect("mutex poisoned");
    match consensus::resolve(&ledger.chain, candidates, &state.pow) {
        Some(chain) => {
            info!("RESOLVE - adopted a peer chain of length {}", chain.len());
            ledger.replace_chain(chain);
            HttpResponse::Ok().json(ResolveResponse {
                message: "Chain was replaced",
                chain: &ledger.chain,
            })
        }
        None => {
            info!(
                "RESOLVE - local chain stays authoritative ({} peers polled)",
                peers.len()
            );
            HttpResponse::Ok().json(ResolveResponse {
                message: "Chain is authoritative",
                chain: &ledger.chain,
            })
        }
    }
}
