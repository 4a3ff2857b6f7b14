use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::response::ApiResponse;

/// Failure taxonomy of the command layer. Display strings are user-visible
/// notice text and therefore Portuguese, like the rest of the surface.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("campo obrigatório: {0}")]
    MissingField(&'static str),

    #[error("preço inválido: {0}")]
    InvalidPrice(String),

    #[error("quantidade deve ser pelo menos 1")]
    InvalidQuantity,

    #[error("e-mail já cadastrado: {0}")]
    DuplicateEmail(String),

    #[error("categoria já existe: {0}")]
    DuplicateCategory(String),

    #[error("a categoria padrão não pode ser excluída")]
    ProtectedCategory,

    #[error("registro não encontrado")]
    NotFound,

    #[error("referência inválida: {0}")]
    ReferenceNotFound(&'static str),

    #[error("falha ao gravar no banco de dados")]
    Db(#[from] sea_orm::DbErr),

    #[error("erro interno")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorData {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Db(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };

        let message = self.to_string();
        let body = ApiResponse {
            message: message.clone(),
            data: Some(ErrorData { error: message }),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
