use actix_web::{HttpResponse, Responder, get, web};

use super::models::{AppState, ChainResponse, ValidateResponse};
use crate::ledger::validation;

/// Get the full chain.
#[get("/chain")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    let resp = ChainResponse {
        chain: &ledger.chain,
        length: ledger.len(),
    };
    HttpResponse::Ok().json(resp)
}

/// Validate the local chain.
#[get("/chain/validate")]
pub async fn validate_chain(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    let resp = ValidateResponse {
        valid: validation::is_valid_chain(&ledger.chain, &state.pow),
        length: ledger.len(),
        difficulty: state.pow.difficulty(),
    };
    HttpResponse::Ok().json(resp)
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test, web};

    use super::{get_chain, validate_chain};
    use crate::api::models::AppState;
    use crate::ledger::GENESIS_PROOF;
    use std::time::Duration;

    #[actix_web::test]
    async fn fresh_chain_has_only_genesis() {
        let state = web::Data::new(AppState::new(1, Duration::from_secs(1)));
        let app =
            test::init_service(App::new().app_data(state.clone()).service(get_chain)).await;

        let req = test::TestRequest::get().uri("/chain").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["length"], 1);
        assert_eq!(body["chain"][0]["index"], 1);
        assert_eq!(body["chain"][0]["proof"], GENESIS_PROOF);
    }

    #[actix_web::test]
    async fn fresh_chain_validates() {
        let state = web::Data::new(AppState::new(1, Duration::from_secs(1)));
        let app =
            test::init_service(App::new().app_data(state.clone()).service(validate_chain)).await;

        let req = test::TestRequest::get().uri("/chain/validate").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["valid"], true);
        assert_eq!(body["length"], 1);
        assert_eq!(body["difficulty"], 1);
    }
}
