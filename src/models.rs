use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// View of a registered user. The password hash never leaves the entity
/// layer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Listing {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    /// Price in cents; "99,90" on the form is 9990 here.
    pub price_cents: i64,
    pub category_id: i32,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Question {
    pub id: i32,
    pub listing_id: i32,
    pub user_id: i32,
    pub text: String,
    pub answer: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Purchase {
    pub id: i32,
    pub user_id: i32,
    pub listing_id: i32,
    pub quantity: i32,
    /// Listing price at purchase time multiplied by quantity. Not re-derived
    /// when the listing price changes later.
    pub total_cents: i64,
    pub created_at: DateTime<Utc>,
}
