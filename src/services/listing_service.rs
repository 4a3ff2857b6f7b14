use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

use crate::{
    dto::listings::ListingForm,
    entity::{
        categories::Entity as Categories,
        listings::{ActiveModel, Column, Entity as Listings, Model as ListingModel},
        users::Entity as Users,
    },
    error::{AppError, AppResult},
    models::Listing,
    services::{optional, parse_reference, required},
    state::AppState,
};

/// All listings, newest first.
pub async fn list_listings(state: &AppState) -> AppResult<Vec<Listing>> {
    let listings = Listings::find()
        .order_by_desc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(listing_from_entity)
        .collect();
    Ok(listings)
}

/// Listings ordered by title, for selection inputs.
pub async fn list_listings_by_title(state: &AppState) -> AppResult<Vec<Listing>> {
    let listings = Listings::find()
        .order_by_asc(Column::Title)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(listing_from_entity)
        .collect();
    Ok(listings)
}

pub async fn create_listing(state: &AppState, form: ListingForm) -> AppResult<Listing> {
    let fields = validate_form(state, &form).await?;

    let listing = ActiveModel {
        id: NotSet,
        title: Set(fields.title),
        description: Set(fields.description),
        price_cents: Set(fields.price_cents),
        category_id: Set(fields.category_id),
        user_id: Set(fields.user_id),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(listing_from_entity(listing))
}

pub async fn find_listing(state: &AppState, id: i32) -> AppResult<Listing> {
    let listing = Listings::find_by_id(id).one(&state.orm).await?;
    match listing {
        Some(listing) => Ok(listing_from_entity(listing)),
        None => Err(AppError::NotFound),
    }
}

pub async fn update_listing(state: &AppState, id: i32, form: ListingForm) -> AppResult<Listing> {
    let existing = Listings::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(listing) => listing,
        None => return Err(AppError::NotFound),
    };

    let fields = validate_form(state, &form).await?;

    let mut active: ActiveModel = existing.into();
    active.title = Set(fields.title);
    active.description = Set(fields.description);
    active.price_cents = Set(fields.price_cents);
    active.category_id = Set(fields.category_id);
    active.user_id = Set(fields.user_id);
    let listing = active.update(&state.orm).await?;

    Ok(listing_from_entity(listing))
}

/// The schema cascades the removal to the listing's questions and
/// purchases.
pub async fn delete_listing(state: &AppState, id: i32) -> AppResult<Listing> {
    let listing = find_listing(state, id).await?;
    Listings::delete_by_id(id).exec(&state.orm).await?;
    Ok(listing)
}

/// Parse a price string into cents. A comma decimal separator is treated
/// like a dot, so "99,90" and "99.90" are both 9990.
pub fn parse_price(input: &str) -> AppResult<i64> {
    let raw = input.trim();
    if raw.is_empty() {
        return Err(AppError::MissingField("preço"));
    }

    let invalid = || AppError::InvalidPrice(raw.to_string());
    let normalized = raw.replace(',', ".");
    let (whole, fraction) = match normalized.split_once('.') {
        Some(parts) => parts,
        None => (normalized.as_str(), ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if fraction.len() > 2
        || !whole.chars().all(|c| c.is_ascii_digit())
        || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }

    let units: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid())?
    };
    let mut cents: i64 = if fraction.is_empty() {
        0
    } else {
        fraction.parse().map_err(|_| invalid())?
    };
    if fraction.len() == 1 {
        cents *= 10;
    }

    units
        .checked_mul(100)
        .and_then(|total| total.checked_add(cents))
        .ok_or_else(invalid)
}

struct ValidatedListing {
    title: String,
    description: Option<String>,
    price_cents: i64,
    category_id: i32,
    user_id: i32,
}

/// Field and reference validation shared by create and update. Reference
/// existence is checked here, before the write, not left to the foreign
/// keys.
async fn validate_form(state: &AppState, form: &ListingForm) -> AppResult<ValidatedListing> {
    let title = required(&form.title, "título")?;
    let price_cents = parse_price(&form.price)?;
    let category_id = parse_reference(&form.category_id, "categoria")?;
    let user_id = parse_reference(&form.user_id, "usuário")?;

    if Categories::find_by_id(category_id)
        .one(&state.orm)
        .await?
        .is_none()
    {
        return Err(AppError::ReferenceNotFound("categoria"));
    }
    if Users::find_by_id(user_id).one(&state.orm).await?.is_none() {
        return Err(AppError::ReferenceNotFound("usuário"));
    }

    Ok(ValidatedListing {
        title,
        description: optional(&form.description),
        price_cents,
        category_id,
        user_id,
    })
}

fn listing_from_entity(model: ListingModel) -> Listing {
    Listing {
        id: model.id,
        title: model.title,
        description: model.description,
        price_cents: model.price_cents,
        category_id: model.category_id,
        user_id: model.user_id,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
