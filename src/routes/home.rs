use axum::{Json, Router, routing::get};

use crate::{response::ApiResponse, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home_page))
        .route("/relatorios/vendas", get(sales_report_page))
        .route("/relatorios/compras", get(purchases_report_page))
        .route("/anuncios/favoritos", get(favorites_page))
}

#[utoipa::path(get, path = "/", tag = "paginas")]
pub async fn home_page() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message_only("Página inicial"))
}

// Report pages have no computed content yet.
#[utoipa::path(get, path = "/relatorios/vendas", tag = "paginas")]
pub async fn sales_report_page() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message_only("Relatório de vendas"))
}

#[utoipa::path(get, path = "/relatorios/compras", tag = "paginas")]
pub async fn purchases_report_page() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message_only("Relatório de compras"))
}

#[utoipa::path(get, path = "/anuncios/favoritos", tag = "paginas")]
pub async fn favorites_page() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message_only("Favoritos"))
}
