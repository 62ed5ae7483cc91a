use actix_web::{HttpResponse, Responder, get, post, web};
use log::{info, warn};

use super::models::{AppState, MessageResponse, NewTransactionRequest, PendingResponse};

/// Submit a transaction into the pending pool.
#[post("/transactions/new")]
pub async fn new_transaction(
    state: web::Data<AppState>,
    body: web::Json<NewTransactionRequest>,
) -> impl Responder {
    let req = body.into_inner();
    let (Some(sender), Some(recipient), Some(amount)) = (req.sender, req.recipient, req.amount)
    else {
        warn!("TX - rejected: missing values");
        return HttpResponse::BadRequest().body("Missing Values");
    };

    let index = {
        let mut ledger = state.ledger.lock().expect("mutex poisoned");
        ledger.new_transaction(sender, recipient, amount)
    };

    info!("TX - accepted into pool, will enter block #{index}");
    HttpResponse::Created().json(MessageResponse {
        message: format!("Transaction will be added to block {index}"),
    })
}

/// List transactions waiting for the next block.
#[get("/transactions/pending")]
pub async fn pending_transactions(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(PendingResponse {
        count: ledger.pending().len(),
        transactions: ledger.pending(),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test, web};
    use serde_json::json;

    use super::{new_transaction, pending_transactions};
    use crate::api::models::AppState;
    use std::time::Duration;

    fn test_state() -> web::Data<AppState> {
        web::Data::new(AppState::new(1, Duration::from_secs(1)))
    }

    #[actix_web::test]
    async fn accepts_a_complete_transaction() {
        let state = test_state();
        let app =
            test::init_service(App::new().app_data(state.clone()).service(new_transaction))
                .await;

        let req = test::TestRequest::post()
            .uri("/transactions/new")
            .set_json(json!({"sender": "0", "recipient": "0", "amount": 1}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Transaction will be added to block 2");

        let ledger = state.ledger.lock().expect("mutex poisoned");
        assert_eq!(ledger.pending().len(), 1);
    }

    #[actix_web::test]
    async fn rejects_missing_amount_without_touching_the_pool() {
        let state = test_state();
        let app =
            test::init_service(App::new().app_data(state.clone()).service(new_transaction))
                .await;

        let req = test::TestRequest::post()
            .uri("/transactions/new")
            .set_json(json!({"sender": "a", "recipient": "b"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = test::read_body(resp).await;
        assert_eq!(body.as_ref(), b"Missing Values");

        let ledger = state.ledger.lock().expect("mutex poisoned");
        assert!(ledger.pending().is_empty());
    }

    #[actix_web::test]
    async fn pending_lists_queued_transactions() {
        let state = test_state();
        state
            .ledger
            .lock()
            .expect("mutex poisoned")
            .new_transaction("a".into(), "b".into(), 3);

        let app = test::init_service(
            App::new().app_data(state.clone()).service(pending_transactions),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/transactions/pending")
            .to_request();
        let body: serde_json::Value =
            test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["transactions"][0]["sender"], "a");
    }
}
