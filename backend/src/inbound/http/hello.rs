//! Root smoke-test route kept for parity with the frontend's expectations.

use actix_web::{get, web};
use serde_json::{json, Value};

/// `GET /` returns a fixed greeting used as a connectivity check.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is reachable")),
    tags = ["meta"],
    operation_id = "hello"
)]
#[get("/")]
pub async fn hello() -> web::Json<Value> {
    web::Json(json!({ "hello": "world" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test as actix_test, App};

    #[actix_web::test]
    async fn root_returns_hello_world() {
        let app = actix_test::init_service(App::new().service(hello)).await;

        let request = actix_test::TestRequest::get().uri("/").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert!(response.status().is_success());

        let bytes = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&bytes).expect("JSON body");
        assert_eq!(value, json!({"hello": "world"}));
    }
}
