//! Asset listing HTTP handler.
//!
//! ```text
//! GET /assets
//! ```

use actix_web::{get, web};

use crate::domain::{Asset, FIXED_ASSETS};

/// List the fixed asset catalogue.
///
/// The response is identical on every call; only an unexpected framework
/// fault can fail this route.
#[utoipa::path(
    get,
    path = "/assets",
    responses(
        (status = 200, description = "Fixed asset catalogue", body = [crate::inbound::http::schemas::AssetSchema]),
        (status = 500, description = "Unexpected fault", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["assets"],
    operation_id = "listAssets"
)]
#[get("/assets")]
pub async fn list_assets() -> web::Json<Vec<Asset>> {
    web::Json(FIXED_ASSETS.to_vec())
}
