use axum::{
    Form, Json, Router,
    extract::{Path, State},
    response::Redirect,
    routing::get,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    dto::categories::{CategoriesPage, CategoryForm, DeleteCategoryPage, EditCategoryPage},
    error::AppResult,
    flash,
    response::ApiResponse,
    routes::form_redirect,
    services::category_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/config/categoria", get(categories_page).post(create_category))
        .route(
            "/categoria/editar/{id}",
            get(edit_category_page).post(update_category),
        )
        .route(
            "/categoria/deletar/{id}",
            get(delete_category_page).post(delete_category),
        )
}

#[utoipa::path(
    get,
    path = "/config/categoria",
    responses(
        (status = 200, description = "Category list and creation form data", body = ApiResponse<CategoriesPage>)
    ),
    tag = "categorias"
)]
pub async fn categories_page(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Json<ApiResponse<CategoriesPage>>)> {
    let (jar, notice) = flash::take_notice(jar);
    let page = CategoriesPage {
        notice,
        categories: category_service::list_categories(&state).await?,
    };
    Ok((
        jar,
        Json(ApiResponse::success("Configuração de Categorias", page)),
    ))
}

#[utoipa::path(
    post,
    path = "/config/categoria",
    request_body(content = CategoryForm, content_type = "application/x-www-form-urlencoded"),
    responses((status = 303, description = "Redirect to the category list")),
    tag = "categorias"
)]
pub async fn create_category(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<CategoryForm>,
) -> AppResult<(CookieJar, Redirect)> {
    let result = category_service::create_category(&state, form)
        .await
        .map(|category| format!("Categoria {} cadastrada com sucesso", category.name));
    form_redirect(jar, result, "/config/categoria", "/config/categoria")
}

#[utoipa::path(
    get,
    path = "/categoria/editar/{id}",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, body = ApiResponse<EditCategoryPage>),
        (status = 404, description = "Category not found")
    ),
    tag = "categorias"
)]
pub async fn edit_category_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Json<ApiResponse<EditCategoryPage>>)> {
    let (jar, notice) = flash::take_notice(jar);
    let page = EditCategoryPage {
        notice,
        category: category_service::find_category(&state, id).await?,
    };
    Ok((jar, Json(ApiResponse::success("Editar categoria", page))))
}

#[utoipa::path(
    post,
    path = "/categoria/editar/{id}",
    params(("id" = i32, Path, description = "Category id")),
    request_body(content = CategoryForm, content_type = "application/x-www-form-urlencoded"),
    responses((status = 303, description = "Redirect to the category list")),
    tag = "categorias"
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    jar: CookieJar,
    Form(form): Form<CategoryForm>,
) -> AppResult<(CookieJar, Redirect)> {
    let back = format!("/categoria/editar/{id}");
    let result = category_service::update_category(&state, id, form)
        .await
        .map(|category| format!("Categoria {} atualizada com sucesso", category.name));
    form_redirect(jar, result, "/config/categoria", &back)
}

#[utoipa::path(
    get,
    path = "/categoria/deletar/{id}",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, body = ApiResponse<DeleteCategoryPage>),
        (status = 404, description = "Category not found")
    ),
    tag = "categorias"
)]
pub async fn delete_category_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<DeleteCategoryPage>>> {
    let category = category_service::find_category(&state, id).await?;
    let page = DeleteCategoryPage {
        prompt: format!(
            "Tem certeza que deseja excluir a categoria {}? Os anúncios serão movidos para a categoria padrão.",
            category.name
        ),
        category,
    };
    Ok(Json(ApiResponse::success("Excluir categoria", page)))
}

#[utoipa::path(
    post,
    path = "/categoria/deletar/{id}",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 303, description = "Redirect to the category list"),
        (status = 404, description = "Category not found")
    ),
    tag = "categorias"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Redirect)> {
    let result = category_service::delete_category(&state, id)
        .await
        .map(|category| format!("Categoria {} removida com sucesso", category.name));
    form_redirect(jar, result, "/config/categoria", "/config/categoria")
}
