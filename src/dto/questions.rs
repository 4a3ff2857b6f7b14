use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Listing, Question, User};

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateQuestionForm {
    pub listing_id: String,
    pub user_id: String,
    pub text: String,
}

/// Edit form: the text can be replaced and an answer recorded. A blank
/// answer clears it back to unanswered.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateQuestionForm {
    pub text: String,
    pub answer: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionsPage {
    pub notice: Option<String>,
    pub questions: Vec<Question>,
    pub listings: Vec<Listing>,
    pub users: Vec<User>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EditQuestionPage {
    pub notice: Option<String>,
    pub question: Question,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteQuestionPage {
    pub prompt: String,
    pub question: Question,
}
