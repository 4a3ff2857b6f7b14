use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::LockType;
use sea_orm::{
    ActiveModelTrait, EntityTrait, QueryOrder, QuerySelect, Set, TransactionTrait,
};

use crate::{
    dto::purchases::{CreatePurchaseForm, UpdatePurchaseForm},
    entity::{
        listings::Entity as Listings,
        purchases::{ActiveModel, Column, Entity as Purchases, Model as PurchaseModel},
        users::Entity as Users,
    },
    error::{AppError, AppResult},
    models::Purchase,
    services::parse_reference,
    state::AppState,
};

/// All purchases, newest first.
pub async fn list_purchases(state: &AppState) -> AppResult<Vec<Purchase>> {
    let purchases = Purchases::find()
        .order_by_desc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(purchase_from_entity)
        .collect();
    Ok(purchases)
}

pub async fn create_purchase(state: &AppState, form: CreatePurchaseForm) -> AppResult<Purchase> {
    let listing_id = parse_reference(&form.listing_id, "anúncio")?;
    let user_id = parse_reference(&form.user_id, "usuário")?;
    let quantity = default_quantity(&form.quantity)?;

    let txn = state.orm.begin().await?;

    // Lock the listing row so the price read here and the total stored
    // below agree.
    let listing = Listings::find_by_id(listing_id)
        .lock(LockType::Update)
        .one(&txn)
        .await?;
    let listing = match listing {
        Some(listing) => listing,
        None => return Err(AppError::ReferenceNotFound("anúncio")),
    };
    if Users::find_by_id(user_id).one(&txn).await?.is_none() {
        return Err(AppError::ReferenceNotFound("usuário"));
    }

    let purchase = ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        listing_id: Set(listing.id),
        quantity: Set(quantity),
        total_cents: Set(listing.price_cents * i64::from(quantity)),
        created_at: NotSet,
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    Ok(purchase_from_entity(purchase))
}

pub async fn find_purchase(state: &AppState, id: i32) -> AppResult<Purchase> {
    let purchase = Purchases::find_by_id(id).one(&state.orm).await?;
    match purchase {
        Some(purchase) => Ok(purchase_from_entity(purchase)),
        None => Err(AppError::NotFound),
    }
}

/// Change the quantity. The total is recomputed from the listing's current
/// price, not the price recorded when the purchase was made.
pub async fn update_purchase(
    state: &AppState,
    id: i32,
    form: UpdatePurchaseForm,
) -> AppResult<Purchase> {
    let quantity = parse_quantity(&form.quantity)?;

    let txn = state.orm.begin().await?;

    let existing = Purchases::find_by_id(id).one(&txn).await?;
    let existing = match existing {
        Some(purchase) => purchase,
        None => return Err(AppError::NotFound),
    };

    let listing = Listings::find_by_id(existing.listing_id)
        .lock(LockType::Update)
        .one(&txn)
        .await?;
    let listing = match listing {
        Some(listing) => listing,
        None => return Err(AppError::ReferenceNotFound("anúncio")),
    };

    let mut active: ActiveModel = existing.into();
    active.quantity = Set(quantity);
    active.total_cents = Set(listing.price_cents * i64::from(quantity));
    let purchase = active.update(&txn).await?;

    txn.commit().await?;
    Ok(purchase_from_entity(purchase))
}

pub async fn delete_purchase(state: &AppState, id: i32) -> AppResult<Purchase> {
    let purchase = find_purchase(state, id).await?;
    Purchases::delete_by_id(id).exec(&state.orm).await?;
    Ok(purchase)
}

/// Quantity on the create form; blank means 1.
pub fn default_quantity(input: &str) -> AppResult<i32> {
    let raw = input.trim();
    if raw.is_empty() {
        return Ok(1);
    }
    parse_quantity(raw)
}

/// Strict quantity: a whole number of at least 1.
pub fn parse_quantity(input: &str) -> AppResult<i32> {
    let quantity: i32 = input
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidQuantity)?;
    if quantity < 1 {
        return Err(AppError::InvalidQuantity);
    }
    Ok(quantity)
}

fn purchase_from_entity(model: PurchaseModel) -> Purchase {
    Purchase {
        id: model.id,
        user_id: model.user_id,
        listing_id: model.listing_id,
        quantity: model.quantity,
        total_cents: model.total_cents,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
