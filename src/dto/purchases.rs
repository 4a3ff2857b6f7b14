use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Listing, Purchase, User};

/// Purchase form; quantity falls back to 1 when left blank.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreatePurchaseForm {
    pub listing_id: String,
    pub user_id: String,
    pub quantity: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdatePurchaseForm {
    pub quantity: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PurchasesPage {
    pub notice: Option<String>,
    pub purchases: Vec<Purchase>,
    pub listings: Vec<Listing>,
    pub users: Vec<User>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EditPurchasePage {
    pub notice: Option<String>,
    pub purchase: Purchase,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeletePurchasePage {
    pub prompt: String,
    pub purchase: Purchase,
}
