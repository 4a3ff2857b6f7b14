use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Category;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CategoryForm {
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesPage {
    pub notice: Option<String>,
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EditCategoryPage {
    pub notice: Option<String>,
    pub category: Category,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteCategoryPage {
    pub prompt: String,
    pub category: Category,
}
