use axum::{
    Form, Json, Router,
    extract::{Path, State},
    response::Redirect,
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    dto::users::{DeleteUserPage, EditUserPage, UserForm, UsersPage},
    error::AppResult,
    flash,
    response::ApiResponse,
    routes::form_redirect,
    services::user_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cad/usuario", get(users_page))
        .route("/usuario/criar", post(create_user))
        .route("/usuario/editar/{id}", get(edit_user_page).post(update_user))
        .route(
            "/usuario/deletar/{id}",
            get(delete_user_page).post(delete_user),
        )
}

#[utoipa::path(
    get,
    path = "/cad/usuario",
    responses(
        (status = 200, description = "User list and registration form data", body = ApiResponse<UsersPage>)
    ),
    tag = "usuarios"
)]
pub async fn users_page(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Json<ApiResponse<UsersPage>>)> {
    let (jar, notice) = flash::take_notice(jar);
    let page = UsersPage {
        notice,
        users: user_service::list_users(&state).await?,
    };
    Ok((jar, Json(ApiResponse::success("Cadastro de Usuário", page))))
}

#[utoipa::path(
    post,
    path = "/usuario/criar",
    request_body(content = UserForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to the user list with a notice")
    ),
    tag = "usuarios"
)]
pub async fn create_user(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<UserForm>,
) -> AppResult<(CookieJar, Redirect)> {
    let result = user_service::create_user(&state, form)
        .await
        .map(|user| format!("Usuário {} cadastrado com sucesso", user.name));
    form_redirect(jar, result, "/cad/usuario", "/cad/usuario")
}

#[utoipa::path(
    get,
    path = "/usuario/editar/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, body = ApiResponse<EditUserPage>),
        (status = 404, description = "User not found")
    ),
    tag = "usuarios"
)]
pub async fn edit_user_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Json<ApiResponse<EditUserPage>>)> {
    let (jar, notice) = flash::take_notice(jar);
    let page = EditUserPage {
        notice,
        user: user_service::find_user(&state, id).await?,
    };
    Ok((jar, Json(ApiResponse::success("Editar usuário", page))))
}

#[utoipa::path(
    post,
    path = "/usuario/editar/{id}",
    params(("id" = i32, Path, description = "User id")),
    request_body(content = UserForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to the user list with a notice"),
        (status = 404, description = "User not found")
    ),
    tag = "usuarios"
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    jar: CookieJar,
    Form(form): Form<UserForm>,
) -> AppResult<(CookieJar, Redirect)> {
    let back = format!("/usuario/editar/{id}");
    let result = user_service::update_user(&state, id, form)
        .await
        .map(|user| format!("Usuário {} atualizado com sucesso", user.name));
    form_redirect(jar, result, "/cad/usuario", &back)
}

#[utoipa::path(
    get,
    path = "/usuario/deletar/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, body = ApiResponse<DeleteUserPage>),
        (status = 404, description = "User not found")
    ),
    tag = "usuarios"
)]
pub async fn delete_user_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<DeleteUserPage>>> {
    let user = user_service::find_user(&state, id).await?;
    let page = DeleteUserPage {
        prompt: format!("Tem certeza que deseja excluir o usuário {}?", user.name),
        user,
    };
    Ok(Json(ApiResponse::success("Excluir usuário", page)))
}

#[utoipa::path(
    post,
    path = "/usuario/deletar/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 303, description = "Redirect to the user list with a notice"),
        (status = 404, description = "User not found")
    ),
    tag = "usuarios"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Redirect)> {
    let result = user_service::delete_user(&state, id)
        .await
        .map(|user| format!("Usuário {} removido com sucesso", user.name));
    form_redirect(jar, result, "/cad/usuario", "/cad/usuario")
}
