use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use chrono::Utc;
use password_hash::rand_core::OsRng;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::{
    dto::users::UserForm,
    entity::users::{ActiveModel, Column, Entity as Users, Model as UserModel},
    error::{AppError, AppResult},
    models::User,
    services::required,
    state::AppState,
};

/// All users, newest first.
pub async fn list_users(state: &AppState) -> AppResult<Vec<User>> {
    let users = Users::find()
        .order_by_desc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(user_from_entity)
        .collect();
    Ok(users)
}

/// Users ordered by name, for selection inputs.
pub async fn list_users_by_name(state: &AppState) -> AppResult<Vec<User>> {
    let users = Users::find()
        .order_by_asc(Column::Name)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(user_from_entity)
        .collect();
    Ok(users)
}

pub async fn create_user(state: &AppState, form: UserForm) -> AppResult<User> {
    let name = required(&form.name, "nome")?;
    let email = required(&form.email, "e-mail")?;
    let password = required(&form.password, "senha")?;

    ensure_email_free(state, &email, None).await?;

    let user = ActiveModel {
        id: NotSet,
        name: Set(name),
        email: Set(email),
        password_hash: Set(hash_password(&password)?),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(user_from_entity(user))
}

pub async fn find_user(state: &AppState, id: i32) -> AppResult<User> {
    let user = Users::find_by_id(id).one(&state.orm).await?;
    match user {
        Some(user) => Ok(user_from_entity(user)),
        None => Err(AppError::NotFound),
    }
}

pub async fn update_user(state: &AppState, id: i32, form: UserForm) -> AppResult<User> {
    let existing = Users::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(user) => user,
        None => return Err(AppError::NotFound),
    };

    let name = required(&form.name, "nome")?;
    let email = required(&form.email, "e-mail")?;
    let password = required(&form.password, "senha")?;

    if email != existing.email {
        ensure_email_free(state, &email, Some(existing.id)).await?;
    }

    let mut active: ActiveModel = existing.into();
    active.name = Set(name);
    active.email = Set(email);
    active.password_hash = Set(hash_password(&password)?);
    let user = active.update(&state.orm).await?;

    Ok(user_from_entity(user))
}

/// The schema cascades the removal to the user's listings, questions and
/// purchases (and through the listings, to their questions and purchases).
pub async fn delete_user(state: &AppState, id: i32) -> AppResult<User> {
    let user = find_user(state, id).await?;
    Users::delete_by_id(id).exec(&state.orm).await?;
    Ok(user)
}

/// Advisory duplicate check; the UNIQUE constraint on users.email is the
/// actual guarantee under concurrent inserts.
async fn ensure_email_free(state: &AppState, email: &str, exclude: Option<i32>) -> AppResult<()> {
    let mut finder = Users::find().filter(Column::Email.eq(email));
    if let Some(id) = exclude {
        finder = finder.filter(Column::Id.ne(id));
    }
    if finder.one(&state.orm).await?.is_some() {
        return Err(AppError::DuplicateEmail(email.to_string()));
    }
    Ok(())
}

fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}

fn user_from_entity(model: UserModel) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
