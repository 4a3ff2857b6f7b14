use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

use crate::{
    dto::questions::{CreateQuestionForm, UpdateQuestionForm},
    entity::{
        listings::Entity as Listings,
        questions::{ActiveModel, Column, Entity as Questions, Model as QuestionModel},
        users::Entity as Users,
    },
    error::{AppError, AppResult},
    models::Question,
    services::{optional, parse_reference, required},
    state::AppState,
};

/// All questions, newest first.
pub async fn list_questions(state: &AppState) -> AppResult<Vec<Question>> {
    let questions = Questions::find()
        .order_by_desc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(question_from_entity)
        .collect();
    Ok(questions)
}

pub async fn create_question(state: &AppState, form: CreateQuestionForm) -> AppResult<Question> {
    let listing_id = parse_reference(&form.listing_id, "anúncio")?;
    let user_id = parse_reference(&form.user_id, "usuário")?;
    let text = required(&form.text, "texto")?;

    if Listings::find_by_id(listing_id)
        .one(&state.orm)
        .await?
        .is_none()
    {
        return Err(AppError::ReferenceNotFound("anúncio"));
    }
    if Users::find_by_id(user_id).one(&state.orm).await?.is_none() {
        return Err(AppError::ReferenceNotFound("usuário"));
    }

    let question = ActiveModel {
        id: NotSet,
        listing_id: Set(listing_id),
        user_id: Set(user_id),
        text: Set(text),
        answer: Set(None),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(question_from_entity(question))
}

pub async fn find_question(state: &AppState, id: i32) -> AppResult<Question> {
    let question = Questions::find_by_id(id).one(&state.orm).await?;
    match question {
        Some(question) => Ok(question_from_entity(question)),
        None => Err(AppError::NotFound),
    }
}

/// Replace the text and record (or clear) the answer.
pub async fn update_question(
    state: &AppState,
    id: i32,
    form: UpdateQuestionForm,
) -> AppResult<Question> {
    let existing = Questions::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(question) => question,
        None => return Err(AppError::NotFound),
    };

    let text = required(&form.text, "texto")?;

    let mut active: ActiveModel = existing.into();
    active.text = Set(text);
    active.answer = Set(optional(&form.answer));
    let question = active.update(&state.orm).await?;

    Ok(question_from_entity(question))
}

/// Questions have no dependents; this is a plain delete.
pub async fn delete_question(state: &AppState, id: i32) -> AppResult<Question> {
    let question = find_question(state, id).await?;
    Questions::delete_by_id(id).exec(&state.orm).await?;
    Ok(question)
}

fn question_from_entity(model: QuestionModel) -> Question {
    Question {
        id: model.id,
        listing_id: model.listing_id,
        user_id: model.user_id,
        text: model.text,
        answer: model.answer,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
