use axum::Router;
use axum::response::Redirect;
use axum_extra::extract::cookie::CookieJar;

use crate::{
    error::{AppError, AppResult},
    flash,
    state::AppState,
};

pub mod categories;
pub mod doc;
pub mod health;
pub mod home;
pub mod listings;
pub mod purchases;
pub mod questions;
pub mod users;

// Build the application router without binding state; it will be provided
// at the top level. Paths carry no shared per-resource prefix, so the
// resource routers are merged rather than nested.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(home::router())
        .merge(users::router())
        .merge(categories::router())
        .merge(listings::router())
        .merge(questions::router())
        .merge(purchases::router())
}

/// Redirect carrying a one-shot notice for the next page.
pub(crate) fn redirect_with_notice(
    jar: CookieJar,
    message: &str,
    to: &str,
) -> (CookieJar, Redirect) {
    (flash::set_notice(jar, message), Redirect::to(to))
}

/// Shared outcome handling for form posts. Success redirects to the
/// canonical list page; recoverable failures redirect back to the
/// originating form, both with a notice. A missing record stays a plain
/// 404 rather than a notice.
pub(crate) fn form_redirect(
    jar: CookieJar,
    result: AppResult<String>,
    ok_to: &str,
    back_to: &str,
) -> AppResult<(CookieJar, Redirect)> {
    match result {
        Ok(message) => Ok(redirect_with_notice(jar, &message, ok_to)),
        Err(AppError::NotFound) => Err(AppError::NotFound),
        Err(err) => {
            if let AppError::Db(source) = &err {
                tracing::error!(error = %source, "storage failure, statement rolled back");
            }
            Ok(redirect_with_notice(jar, &err.to_string(), back_to))
        }
    }
}
