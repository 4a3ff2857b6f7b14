use axum_classifieds_admin::{
    db::{create_orm_conn, run_migrations},
    dto::{
        categories::CategoryForm,
        listings::ListingForm,
        purchases::{CreatePurchaseForm, UpdatePurchaseForm},
        questions::{CreateQuestionForm, UpdateQuestionForm},
        users::UserForm,
    },
    error::AppError,
    services::{
        category_service::{self, DEFAULT_CATEGORY},
        listing_service, purchase_service, question_service, user_service,
    },
    state::AppState,
};
use sea_orm::{ConnectionTrait, Statement};
use serial_test::serial;

#[tokio::test]
#[serial]
async fn user_registration_stores_fields_verbatim() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };

    let user = user_service::create_user(&state, user_form("João Silva", "joao@example.com")).await?;
    assert_eq!(user.name, "João Silva");
    assert_eq!(user.email, "joao@example.com");

    let listed = user_service::list_users(&state).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, user.id);

    // Same address again is rejected and the list stays unchanged.
    let duplicate = user_service::create_user(&state, user_form("Outro", "joao@example.com")).await;
    assert!(matches!(duplicate, Err(AppError::DuplicateEmail(_))));
    assert_eq!(user_service::list_users(&state).await?.len(), 1);

    Ok(())
}

#[tokio::test]
#[serial]
async fn missing_user_fields_are_reported_by_label() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };

    let no_name = user_service::create_user(&state, user_form("   ", "a@example.com")).await;
    assert!(matches!(no_name, Err(AppError::MissingField("nome"))));

    let no_email = user_service::create_user(&state, user_form("Ana", "")).await;
    assert!(matches!(no_email, Err(AppError::MissingField("e-mail"))));

    Ok(())
}

#[tokio::test]
#[serial]
async fn duplicate_category_name_is_rejected() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };

    category_service::create_category(&state, category_form("Ferramentas")).await?;
    let duplicate = category_service::create_category(&state, category_form("Ferramentas")).await;
    assert!(matches!(duplicate, Err(AppError::DuplicateCategory(_))));
    assert_eq!(category_service::list_categories(&state).await?.len(), 1);

    Ok(())
}

#[tokio::test]
#[serial]
async fn category_delete_moves_listings_to_the_default() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };

    let seller = user_service::create_user(&state, user_form("Maria", "maria@example.com")).await?;
    let toys = category_service::create_category(&state, category_form("Brinquedos")).await?;
    let listing = listing_service::create_listing(
        &state,
        listing_form("Pião de madeira", "15,00", toys.id, seller.id),
    )
    .await?;

    category_service::delete_category(&state, toys.id).await?;

    // The listing survives, reassigned to the automatically created default.
    let moved = listing_service::find_listing(&state, listing.id).await?;
    assert_ne!(moved.category_id, toys.id);
    let fallback = category_service::find_category(&state, moved.category_id).await?;
    assert_eq!(fallback.name, DEFAULT_CATEGORY);

    let gone = category_service::find_category(&state, toys.id).await;
    assert!(matches!(gone, Err(AppError::NotFound)));

    Ok(())
}

#[tokio::test]
#[serial]
async fn default_category_cannot_be_deleted() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };

    let fallback_id = category_service::ensure_default_category(&state.orm).await?;
    let refused = category_service::delete_category(&state, fallback_id).await;
    assert!(matches!(refused, Err(AppError::ProtectedCategory)));

    let still_there = category_service::find_category(&state, fallback_id).await?;
    assert_eq!(still_there.name, DEFAULT_CATEGORY);

    Ok(())
}

#[tokio::test]
#[serial]
async fn deleting_a_user_removes_their_records() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };

    let seller = user_service::create_user(&state, user_form("Carlos", "carlos@example.com")).await?;
    let buyer = user_service::create_user(&state, user_form("Beatriz", "bia@example.com")).await?;
    let category = category_service::create_category(&state, category_form("Música")).await?;
    let listing = listing_service::create_listing(
        &state,
        listing_form("Violão", "300", category.id, seller.id),
    )
    .await?;

    let question = question_service::create_question(
        &state,
        CreateQuestionForm {
            listing_id: listing.id.to_string(),
            user_id: buyer.id.to_string(),
            text: "Acompanha capa?".into(),
        },
    )
    .await?;
    let purchase = purchase_service::create_purchase(
        &state,
        CreatePurchaseForm {
            listing_id: listing.id.to_string(),
            user_id: buyer.id.to_string(),
            quantity: "1".into(),
        },
    )
    .await?;

    user_service::delete_user(&state, seller.id).await?;

    // The seller's listing and everything hanging off it are gone.
    assert!(matches!(
        listing_service::find_listing(&state, listing.id).await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        question_service::find_question(&state, question.id).await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        purchase_service::find_purchase(&state, purchase.id).await,
        Err(AppError::NotFound)
    ));

    // The buyer is untouched.
    let buyer_still = user_service::find_user(&state, buyer.id).await?;
    assert_eq!(buyer_still.email, "bia@example.com");

    Ok(())
}

#[tokio::test]
#[serial]
async fn purchase_total_follows_price_times_quantity() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };

    let (listing, buyer) = seed_listing(&state, "Cafeteira", "10,00").await?;

    let purchase = purchase_service::create_purchase(
        &state,
        CreatePurchaseForm {
            listing_id: listing.id.to_string(),
            user_id: buyer.to_string(),
            quantity: "3".into(),
        },
    )
    .await?;
    assert_eq!(purchase.quantity, 3);
    assert_eq!(purchase.total_cents, 3000);

    let updated = purchase_service::update_purchase(
        &state,
        purchase.id,
        UpdatePurchaseForm { quantity: "5".into() },
    )
    .await?;
    assert_eq!(updated.quantity, 5);
    assert_eq!(updated.total_cents, 5000);

    // Changing the listing price later leaves the recorded total alone.
    let reprice = listing_form("Cafeteira", "99,99", listing.category_id, listing.user_id);
    listing_service::update_listing(&state, listing.id, reprice).await?;
    let after = purchase_service::find_purchase(&state, purchase.id).await?;
    assert_eq!(after.total_cents, 5000);

    Ok(())
}

#[tokio::test]
#[serial]
async fn blank_quantity_defaults_to_a_single_item() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };

    let (listing, buyer) = seed_listing(&state, "Luminária", "45,50").await?;
    let purchase = purchase_service::create_purchase(
        &state,
        CreatePurchaseForm {
            listing_id: listing.id.to_string(),
            user_id: buyer.to_string(),
            quantity: String::new(),
        },
    )
    .await?;
    assert_eq!(purchase.quantity, 1);
    assert_eq!(purchase.total_cents, 4550);

    Ok(())
}

#[tokio::test]
#[serial]
async fn question_validation_and_answer_lifecycle() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };

    let (listing, asker) = seed_listing(&state, "Bicicleta", "800").await?;

    let blank = question_service::create_question(
        &state,
        CreateQuestionForm {
            listing_id: listing.id.to_string(),
            user_id: asker.to_string(),
            text: "   ".into(),
        },
    )
    .await;
    assert!(matches!(blank, Err(AppError::MissingField("texto"))));

    let dangling = question_service::create_question(
        &state,
        CreateQuestionForm {
            listing_id: "9999".into(),
            user_id: asker.to_string(),
            text: "Ainda disponível?".into(),
        },
    )
    .await;
    assert!(matches!(dangling, Err(AppError::ReferenceNotFound(_))));

    let question = question_service::create_question(
        &state,
        CreateQuestionForm {
            listing_id: listing.id.to_string(),
            user_id: asker.to_string(),
            text: "Ainda disponível?".into(),
        },
    )
    .await?;
    assert_eq!(question.answer, None);

    // The text cannot be blanked on edit either.
    let blank_edit = question_service::update_question(
        &state,
        question.id,
        UpdateQuestionForm {
            text: String::new(),
            answer: String::new(),
        },
    )
    .await;
    assert!(matches!(blank_edit, Err(AppError::MissingField("texto"))));

    let answered = question_service::update_question(
        &state,
        question.id,
        UpdateQuestionForm {
            text: "Ainda disponível?".into(),
            answer: "Sim, à pronta entrega".into(),
        },
    )
    .await?;
    assert_eq!(answered.answer.as_deref(), Some("Sim, à pronta entrega"));

    // Blanking the answer returns the question to unanswered.
    let cleared = question_service::update_question(
        &state,
        question.id,
        UpdateQuestionForm {
            text: "Ainda disponível?".into(),
            answer: "  ".into(),
        },
    )
    .await?;
    assert_eq!(cleared.answer, None);

    Ok(())
}

#[tokio::test]
#[serial]
async fn listing_rejects_dangling_references() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };

    let seller = user_service::create_user(&state, user_form("Rita", "rita@example.com")).await?;
    let category = category_service::create_category(&state, category_form("Esportes")).await?;

    let bad_category =
        listing_service::create_listing(&state, listing_form("Bola", "30", 9999, seller.id)).await;
    assert!(matches!(bad_category, Err(AppError::ReferenceNotFound("categoria"))));

    let bad_user =
        listing_service::create_listing(&state, listing_form("Bola", "30", category.id, 9999)).await;
    assert!(matches!(bad_user, Err(AppError::ReferenceNotFound("usuário"))));

    assert!(listing_service::list_listings(&state).await?.is_empty());

    Ok(())
}

// The end-to-end scenario a browser session would produce: register the
// category and the seller, publish a listing priced with a comma decimal,
// then buy two of it.
#[tokio::test]
#[serial]
async fn full_registration_and_purchase_flow() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };

    let books = category_service::create_category(&state, category_form("Livros")).await?;
    let alice = user_service::create_user(&state, user_form("Alice", "alice@example.com")).await?;

    let listing = listing_service::create_listing(
        &state,
        ListingForm {
            title: "Coleção Sherlock Holmes".into(),
            description: "Quatro volumes, pouco uso".into(),
            price: "49,90".into(),
            category_id: books.id.to_string(),
            user_id: alice.id.to_string(),
        },
    )
    .await?;
    assert_eq!(listing.price_cents, 4990);
    assert_eq!(listing.description.as_deref(), Some("Quatro volumes, pouco uso"));

    let purchase = purchase_service::create_purchase(
        &state,
        CreatePurchaseForm {
            listing_id: listing.id.to_string(),
            user_id: alice.id.to_string(),
            quantity: "2".into(),
        },
    )
    .await?;
    assert_eq!(purchase.total_cents, 9980);

    // Buying does not move the listing out of its category.
    let after = listing_service::find_listing(&state, listing.id).await?;
    assert_eq!(after.category_id, books.id);

    assert_eq!(listing_service::list_listings(&state).await?.len(), 1);
    assert_eq!(purchase_service::list_purchases(&state).await?.len(), 1);

    Ok(())
}

async fn setup_state() -> anyhow::Result<Option<AppState>> {
    // Allow skipping when no DB is configured in the environment.
    let database_url =
        match std::env::var("TEST_DATABASE_URL").or_else(|_| std::env::var("DATABASE_URL")) {
            Ok(url) => url,
            Err(_) => {
                eprintln!(
                    "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
                );
                return Ok(None);
            }
        };

    let orm = create_orm_conn(&database_url).await?;
    run_migrations(&orm).await?;

    // Clean tables between runs
    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE purchases, questions, listings, categories, users RESTART IDENTITY CASCADE",
    ))
    .await?;

    Ok(Some(AppState { orm }))
}

fn user_form(name: &str, email: &str) -> UserForm {
    UserForm {
        name: name.into(),
        email: email.into(),
        password: "senha123".into(),
    }
}

fn category_form(name: &str) -> CategoryForm {
    CategoryForm { name: name.into() }
}

fn listing_form(title: &str, price: &str, category_id: i32, user_id: i32) -> ListingForm {
    ListingForm {
        title: title.into(),
        description: String::new(),
        price: price.into(),
        category_id: category_id.to_string(),
        user_id: user_id.to_string(),
    }
}

async fn seed_listing(
    state: &AppState,
    title: &str,
    price: &str,
) -> anyhow::Result<(axum_classifieds_admin::models::Listing, i32)> {
    let seller = user_service::create_user(state, user_form("Vendedor", "vendedor@example.com")).await?;
    let category = category_service::create_category(state, category_form("Diversos")).await?;
    let listing =
        listing_service::create_listing(state, listing_form(title, price, category.id, seller.id))
            .await?;
    Ok((listing, seller.id))
}
