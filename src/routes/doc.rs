use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        categories::{CategoriesPage, CategoryForm, DeleteCategoryPage, EditCategoryPage},
        listings::{DeleteListingPage, EditListingPage, ListingForm, ListingsPage},
        purchases::{
            CreatePurchaseForm, DeletePurchasePage, EditPurchasePage, PurchasesPage,
            UpdatePurchaseForm,
        },
        questions::{
            CreateQuestionForm, DeleteQuestionPage, EditQuestionPage, QuestionsPage,
            UpdateQuestionForm,
        },
        users::{DeleteUserPage, EditUserPage, UserForm, UsersPage},
    },
    models::{Category, Listing, Purchase, Question, User},
    response::ApiResponse,
    routes::{categories, health, home, listings, purchases, questions, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        home::home_page,
        home::sales_report_page,
        home::purchases_report_page,
        home::favorites_page,
        users::users_page,
        users::create_user,
        users::edit_user_page,
        users::update_user,
        users::delete_user_page,
        users::delete_user,
        categories::categories_page,
        categories::create_category,
        categories::edit_category_page,
        categories::update_category,
        categories::delete_category_page,
        categories::delete_category,
        listings::listings_page,
        listings::create_listing,
        listings::edit_listing_page,
        listings::update_listing,
        listings::delete_listing_page,
        listings::delete_listing,
        questions::questions_page,
        questions::create_question,
        questions::edit_question_page,
        questions::update_question,
        questions::delete_question_page,
        questions::delete_question,
        purchases::purchases_page,
        purchases::create_purchase,
        purchases::edit_purchase_page,
        purchases::update_purchase,
        purchases::delete_purchase_page,
        purchases::delete_purchase
    ),
    components(
        schemas(
            User,
            Category,
            Listing,
            Question,
            Purchase,
            UserForm,
            UsersPage,
            EditUserPage,
            DeleteUserPage,
            CategoryForm,
            CategoriesPage,
            EditCategoryPage,
            DeleteCategoryPage,
            ListingForm,
            ListingsPage,
            EditListingPage,
            DeleteListingPage,
            CreateQuestionForm,
            UpdateQuestionForm,
            QuestionsPage,
            EditQuestionPage,
            DeleteQuestionPage,
            CreatePurchaseForm,
            UpdatePurchaseForm,
            PurchasesPage,
            EditPurchasePage,
            DeletePurchasePage,
            health::HealthData,
            ApiResponse<UsersPage>,
            ApiResponse<EditUserPage>,
            ApiResponse<DeleteUserPage>,
            ApiResponse<CategoriesPage>,
            ApiResponse<EditCategoryPage>,
            ApiResponse<DeleteCategoryPage>,
            ApiResponse<ListingsPage>,
            ApiResponse<EditListingPage>,
            ApiResponse<DeleteListingPage>,
            ApiResponse<health::HealthData>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "paginas", description = "Static pages"),
        (name = "usuarios", description = "User registration endpoints"),
        (name = "categorias", description = "Category configuration endpoints"),
        (name = "anuncios", description = "Listing registration endpoints"),
        (name = "perguntas", description = "Question endpoints"),
        (name = "compras", description = "Purchase endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
