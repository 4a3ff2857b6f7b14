use axum::{
    Form, Json, Router,
    extract::{Path, State},
    response::Redirect,
    routing::get,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    dto::questions::{
        CreateQuestionForm, DeleteQuestionPage, EditQuestionPage, QuestionsPage, UpdateQuestionForm,
    },
    error::AppResult,
    flash,
    response::ApiResponse,
    routes::form_redirect,
    services::{listing_service, question_service, user_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/anuncios/pergunta", get(questions_page).post(create_question))
        .route(
            "/pergunta/editar/{id}",
            get(edit_question_page).post(update_question),
        )
        .route(
            "/pergunta/deletar/{id}",
            get(delete_question_page).post(delete_question),
        )
}

#[utoipa::path(get, path = "/anuncios/pergunta", tag = "perguntas")]
pub async fn questions_page(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Json<ApiResponse<QuestionsPage>>)> {
    let (jar, notice) = flash::take_notice(jar);
    let page = QuestionsPage {
        notice,
        questions: question_service::list_questions(&state).await?,
        listings: listing_service::list_listings_by_title(&state).await?,
        users: user_service::list_users_by_name(&state).await?,
    };
    Ok((jar, Json(ApiResponse::success("Perguntas", page))))
}

#[utoipa::path(
    post,
    path = "/anuncios/pergunta",
    request_body(content = CreateQuestionForm, content_type = "application/x-www-form-urlencoded"),
    responses((status = 303, description = "Redirect to the question list")),
    tag = "perguntas"
)]
pub async fn create_question(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<CreateQuestionForm>,
) -> AppResult<(CookieJar, Redirect)> {
    let result = question_service::create_question(&state, form)
        .await
        .map(|_| "Pergunta enviada com sucesso".to_string());
    form_redirect(jar, result, "/anuncios/pergunta", "/anuncios/pergunta")
}

#[utoipa::path(get, path = "/pergunta/editar/{id}", tag = "perguntas")]
pub async fn edit_question_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Json<ApiResponse<EditQuestionPage>>)> {
    let (jar, notice) = flash::take_notice(jar);
    let page = EditQuestionPage {
        notice,
        question: question_service::find_question(&state, id).await?,
    };
    Ok((jar, Json(ApiResponse::success("Editar pergunta", page))))
}

#[utoipa::path(
    post,
    path = "/pergunta/editar/{id}",
    request_body(content = UpdateQuestionForm, content_type = "application/x-www-form-urlencoded"),
    responses((status = 303, description = "Redirect to the question list")),
    tag = "perguntas"
)]
pub async fn update_question(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    jar: CookieJar,
    Form(form): Form<UpdateQuestionForm>,
) -> AppResult<(CookieJar, Redirect)> {
    let back = format!("/pergunta/editar/{id}");
    let result = question_service::update_question(&state, id, form)
        .await
        .map(|_| "Pergunta atualizada com sucesso".to_string());
    form_redirect(jar, result, "/anuncios/pergunta", &back)
}

#[utoipa::path(get, path = "/pergunta/deletar/{id}", tag = "perguntas")]
pub async fn delete_question_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<DeleteQuestionPage>>> {
    let question = question_service::find_question(&state, id).await?;
    let page = DeleteQuestionPage {
        prompt: "Tem certeza que deseja excluir esta pergunta?".to_string(),
        question,
    };
    Ok(Json(ApiResponse::success("Excluir pergunta", page)))
}

#[utoipa::path(post, path = "/pergunta/deletar/{id}", tag = "perguntas")]
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Redirect)> {
    let result = question_service::delete_question(&state, id)
        .await
        .map(|_| "Pergunta removida com sucesso".to_string());
    form_redirect(jar, result, "/anuncios/pergunta", "/anuncios/pergunta")
}
