use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Category, Listing, User};

/// Create/edit form for a listing. `price` is the raw form string; both
/// "99,90" and "99.90" are accepted.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ListingForm {
    pub title: String,
    pub description: String,
    pub price: String,
    pub category_id: String,
    pub user_id: String,
}

/// Listing overview plus the category and user lists that populate the
/// form's selection inputs.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListingsPage {
    pub notice: Option<String>,
    pub listings: Vec<Listing>,
    pub categories: Vec<Category>,
    pub users: Vec<User>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EditListingPage {
    pub notice: Option<String>,
    pub listing: Listing,
    pub categories: Vec<Category>,
    pub users: Vec<User>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteListingPage {
    pub prompt: String,
    pub listing: Listing,
}
