use axum::{
    Form, Json, Router,
    extract::{Path, State},
    response::Redirect,
    routing::get,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    dto::listings::{DeleteListingPage, EditListingPage, ListingForm, ListingsPage},
    error::AppResult,
    flash,
    response::ApiResponse,
    routes::form_redirect,
    services::{category_service, listing_service, user_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cad/anuncios", get(listings_page).post(create_listing))
        .route(
            "/anuncio/editar/{id}",
            get(edit_listing_page).post(update_listing),
        )
        .route(
            "/anuncio/deletar/{id}",
            get(delete_listing_page).post(delete_listing),
        )
}

#[utoipa::path(
    get,
    path = "/cad/anuncios",
    responses(
        (status = 200, description = "Listing list plus category and user options for the form", body = ApiResponse<ListingsPage>)
    ),
    tag = "anuncios"
)]
pub async fn listings_page(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Json<ApiResponse<ListingsPage>>)> {
    let (jar, notice) = flash::take_notice(jar);
    let page = ListingsPage {
        notice,
        listings: listing_service::list_listings(&state).await?,
        categories: category_service::list_categories_by_name(&state).await?,
        users: user_service::list_users_by_name(&state).await?,
    };
    Ok((jar, Json(ApiResponse::success("Cadastro de Anúncios", page))))
}

#[utoipa::path(
    post,
    path = "/cad/anuncios",
    request_body(content = ListingForm, content_type = "application/x-www-form-urlencoded"),
    responses((status = 303, description = "Redirect to the listing list")),
    tag = "anuncios"
)]
pub async fn create_listing(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ListingForm>,
) -> AppResult<(CookieJar, Redirect)> {
    let result = listing_service::create_listing(&state, form)
        .await
        .map(|listing| format!("Anúncio {} cadastrado com sucesso", listing.title));
    form_redirect(jar, result, "/cad/anuncios", "/cad/anuncios")
}

#[utoipa::path(
    get,
    path = "/anuncio/editar/{id}",
    params(("id" = i32, Path, description = "Listing id")),
    responses(
        (status = 200, body = ApiResponse<EditListingPage>),
        (status = 404, description = "Listing not found")
    ),
    tag = "anuncios"
)]
pub async fn edit_listing_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Json<ApiResponse<EditListingPage>>)> {
    let (jar, notice) = flash::take_notice(jar);
    let page = EditListingPage {
        notice,
        listing: listing_service::find_listing(&state, id).await?,
        categories: category_service::list_categories_by_name(&state).await?,
        users: user_service::list_users_by_name(&state).await?,
    };
    Ok((jar, Json(ApiResponse::success("Editar anúncio", page))))
}

#[utoipa::path(
    post,
    path = "/anuncio/editar/{id}",
    params(("id" = i32, Path, description = "Listing id")),
    request_body(content = ListingForm, content_type = "application/x-www-form-urlencoded"),
    responses((status = 303, description = "Redirect to the listing list")),
    tag = "anuncios"
)]
pub async fn update_listing(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    jar: CookieJar,
    Form(form): Form<ListingForm>,
) -> AppResult<(CookieJar, Redirect)> {
    let back = format!("/anuncio/editar/{id}");
    let result = listing_service::update_listing(&state, id, form)
        .await
        .map(|listing| format!("Anúncio {} atualizado com sucesso", listing.title));
    form_redirect(jar, result, "/cad/anuncios", &back)
}

#[utoipa::path(
    get,
    path = "/anuncio/deletar/{id}",
    params(("id" = i32, Path, description = "Listing id")),
    responses(
        (status = 200, body = ApiResponse<DeleteListingPage>),
        (status = 404, description = "Listing not found")
    ),
    tag = "anuncios"
)]
pub async fn delete_listing_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<DeleteListingPage>>> {
    let listing = listing_service::find_listing(&state, id).await?;
    let page = DeleteListingPage {
        prompt: format!(
            "Tem certeza que deseja excluir o anúncio {}? Perguntas e compras associadas também serão excluídas.",
            listing.title
        ),
        listing,
    };
    Ok(Json(ApiResponse::success("Excluir anúncio", page)))
}

#[utoipa::path(
    post,
    path = "/anuncio/deletar/{id}",
    params(("id" = i32, Path, description = "Listing id")),
    responses(
        (status = 303, description = "Redirect to the listing list"),
        (status = 404, description = "Listing not found")
    ),
    tag = "anuncios"
)]
pub async fn delete_listing(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Redirect)> {
    let result = listing_service::delete_listing(&state, id)
        .await
        .map(|listing| format!("Anúncio {} removido com sucesso", listing.title));
    form_redirect(jar, result, "/cad/anuncios", "/cad/anuncios")
}
