use axum::{
    Form, Json, Router,
    extract::{Path, State},
    response::Redirect,
    routing::get,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    dto::purchases::{
        CreatePurchaseForm, DeletePurchasePage, EditPurchasePage, PurchasesPage,
        UpdatePurchaseForm,
    },
    error::AppResult,
    flash,
    response::ApiResponse,
    routes::form_redirect,
    services::{listing_service, purchase_service, user_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/anuncios/compra", get(purchases_page).post(create_purchase))
        .route(
            "/compras/editar/{id}",
            get(edit_purchase_page).post(update_purchase),
        )
        .route(
            "/compras/deletar/{id}",
            get(delete_purchase_page).post(delete_purchase),
        )
}

#[utoipa::path(get, path = "/anuncios/compra", tag = "compras")]
pub async fn purchases_page(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Json<ApiResponse<PurchasesPage>>)> {
    let (jar, notice) = flash::take_notice(jar);
    let page = PurchasesPage {
        notice,
        purchases: purchase_service::list_purchases(&state).await?,
        listings: listing_service::list_listings_by_title(&state).await?,
        users: user_service::list_users_by_name(&state).await?,
    };
    Ok((jar, Json(ApiResponse::success("Compras", page))))
}

#[utoipa::path(
    post,
    path = "/anuncios/compra",
    request_body(content = CreatePurchaseForm, content_type = "application/x-www-form-urlencoded"),
    responses((status = 303, description = "Redirect to the purchase list")),
    tag = "compras"
)]
pub async fn create_purchase(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<CreatePurchaseForm>,
) -> AppResult<(CookieJar, Redirect)> {
    let result = purchase_service::create_purchase(&state, form)
        .await
        .map(|_| "Compra realizada com sucesso".to_string());
    form_redirect(jar, result, "/anuncios/compra", "/anuncios/compra")
}

#[utoipa::path(get, path = "/compras/editar/{id}", tag = "compras")]
pub async fn edit_purchase_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Json<ApiResponse<EditPurchasePage>>)> {
    let (jar, notice) = flash::take_notice(jar);
    let page = EditPurchasePage {
        notice,
        purchase: purchase_service::find_purchase(&state, id).await?,
    };
    Ok((jar, Json(ApiResponse::success("Editar compra", page))))
}

#[utoipa::path(
    post,
    path = "/compras/editar/{id}",
    request_body(content = UpdatePurchaseForm, content_type = "application/x-www-form-urlencoded"),
    responses((status = 303, description = "Redirect to the purchase list")),
    tag = "compras"
)]
pub async fn update_purchase(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    jar: CookieJar,
    Form(form): Form<UpdatePurchaseForm>,
) -> AppResult<(CookieJar, Redirect)> {
    let back = format!("/compras/editar/{id}");
    let result = purchase_service::update_purchase(&state, id, form)
        .await
        .map(|_| "Compra atualizada com sucesso".to_string());
    form_redirect(jar, result, "/anuncios/compra", &back)
}

#[utoipa::path(get, path = "/compras/deletar/{id}", tag = "compras")]
pub async fn delete_purchase_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<DeletePurchasePage>>> {
    let purchase = purchase_service::find_purchase(&state, id).await?;
    let page = DeletePurchasePage {
        prompt: "Tem certeza que deseja excluir esta compra?".to_string(),
        purchase,
    };
    Ok(Json(ApiResponse::success("Excluir compra", page)))
}

#[utoipa::path(post, path = "/compras/deletar/{id}", tag = "compras")]
pub async fn delete_purchase(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Redirect)> {
    let result = purchase_service::delete_purchase(&state, id)
        .await
        .map(|_| "Compra removida com sucesso".to_string());
    form_redirect(jar, result, "/anuncios/compra", "/anuncios/compra")
}
