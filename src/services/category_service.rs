use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::{
    dto::categories::CategoryForm,
    entity::{
        categories::{ActiveModel, Column, Entity as Categories, Model as CategoryModel},
        listings::{Column as ListingCol, Entity as Listings},
    },
    error::{AppError, AppResult},
    models::Category,
    services::required,
    state::AppState,
};

/// Name of the fallback category that absorbs listings from deleted
/// categories. It is created on demand and can never be deleted itself.
pub const DEFAULT_CATEGORY: &str = "Sem categoria";

pub async fn list_categories(state: &AppState) -> AppResult<Vec<Category>> {
    let categories = Categories::find()
        .order_by_desc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(category_from_entity)
        .collect();
    Ok(categories)
}

/// Categories ordered by name, for selection inputs.
pub async fn list_categories_by_name(state: &AppState) -> AppResult<Vec<Category>> {
    let categories = Categories::find()
        .order_by_asc(Column::Name)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(category_from_entity)
        .collect();
    Ok(categories)
}

pub async fn create_category(state: &AppState, form: CategoryForm) -> AppResult<Category> {
    let name = required(&form.name, "nome")?;
    ensure_name_free(state, &name, None).await?;

    let category = ActiveModel {
        id: NotSet,
        name: Set(name),
    }
    .insert(&state.orm)
    .await?;

    Ok(category_from_entity(category))
}

pub async fn find_category(state: &AppState, id: i32) -> AppResult<Category> {
    let category = Categories::find_by_id(id).one(&state.orm).await?;
    match category {
        Some(category) => Ok(category_from_entity(category)),
        None => Err(AppError::NotFound),
    }
}

pub async fn update_category(state: &AppState, id: i32, form: CategoryForm) -> AppResult<Category> {
    let existing = Categories::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(category) => category,
        None => return Err(AppError::NotFound),
    };

    let name = required(&form.name, "nome")?;
    if name != existing.name {
        ensure_name_free(state, &name, Some(existing.id)).await?;
    }

    let mut active: ActiveModel = existing.into();
    active.name = Set(name);
    let category = active.update(&state.orm).await?;

    Ok(category_from_entity(category))
}

/// Deleting a category repoints its listings at the default category and
/// removes the row; both steps commit together, so a failure between them
/// cannot leave the catalog half-moved.
pub async fn delete_category(state: &AppState, id: i32) -> AppResult<Category> {
    let category = Categories::find_by_id(id).one(&state.orm).await?;
    let category = match category {
        Some(category) => category,
        None => return Err(AppError::NotFound),
    };
    if category.name == DEFAULT_CATEGORY {
        return Err(AppError::ProtectedCategory);
    }

    let txn = state.orm.begin().await?;
    let fallback_id = ensure_default_category(&txn).await?;
    Listings::update_many()
        .col_expr(ListingCol::CategoryId, Expr::value(fallback_id))
        .filter(ListingCol::CategoryId.eq(category.id))
        .exec(&txn)
        .await?;
    Categories::delete_by_id(category.id).exec(&txn).await?;
    txn.commit().await?;

    Ok(category_from_entity(category))
}

/// Find or create the default category, returning its id.
pub async fn ensure_default_category<C: ConnectionTrait>(conn: &C) -> AppResult<i32> {
    let existing = Categories::find()
        .filter(Column::Name.eq(DEFAULT_CATEGORY))
        .one(conn)
        .await?;
    if let Some(category) = existing {
        return Ok(category.id);
    }

    let created = ActiveModel {
        id: NotSet,
        name: Set(DEFAULT_CATEGORY.to_string()),
    }
    .insert(conn)
    .await?;
    Ok(created.id)
}

/// Advisory duplicate check (case-sensitive); the UNIQUE constraint on
/// categories.name is the actual guarantee under concurrent inserts.
async fn ensure_name_free(state: &AppState, name: &str, exclude: Option<i32>) -> AppResult<()> {
    let mut finder = Categories::find().filter(Column::Name.eq(name));
    if let Some(id) = exclude {
        finder = finder.filter(Column::Id.ne(id));
    }
    if finder.one(&state.orm).await?.is_some() {
        return Err(AppError::DuplicateCategory(name.to_string()));
    }
    Ok(())
}

fn category_from_entity(model: CategoryModel) -> Category {
    Category {
        id: model.id,
        name: model.name,
    }
}
