use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, Set,
};

use axum_classifieds_admin::{
    config::AppConfig,
    db::{OrmConn, create_orm_conn, run_migrations},
    entity::{Categories, Listings, Users, categories, listings, users},
    services::category_service,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    run_migrations(&orm).await?;

    category_service::ensure_default_category(&orm).await?;
    let electronics = ensure_category(&orm, "Eletrônicos").await?;
    let books = ensure_category(&orm, "Livros").await?;

    let seller = ensure_user(&orm, "Vendedor Demo", "vendedor@example.com", "senha123").await?;
    ensure_buyer(&orm).await?;

    ensure_listing(&orm, "Notebook usado", "Bateria nova", 250000, electronics, seller).await?;
    ensure_listing(&orm, "Box Senhor dos Anéis", "Capa dura", 9990, books, seller).await?;

    println!("Seed completed");
    Ok(())
}

async fn ensure_category(orm: &OrmConn, name: &str) -> anyhow::Result<i32> {
    let existing = Categories::find()
        .filter(categories::Column::Name.eq(name))
        .one(orm)
        .await?;
    if let Some(category) = existing {
        return Ok(category.id);
    }

    let category = categories::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
    }
    .insert(orm)
    .await?;
    println!("Seeded category {name}");
    Ok(category.id)
}

async fn ensure_buyer(orm: &OrmConn) -> anyhow::Result<i32> {
    ensure_user(orm, "Comprador Demo", "comprador@example.com", "senha123").await
}

async fn ensure_user(orm: &OrmConn, name: &str, email: &str, password: &str) -> anyhow::Result<i32> {
    let existing = Users::find()
        .filter(users::Column::Email.eq(email))
        .one(orm)
        .await?;
    if let Some(user) = existing {
        return Ok(user.id);
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();

    let user = users::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        password_hash: Set(password_hash),
        created_at: NotSet,
    }
    .insert(orm)
    .await?;
    println!("Seeded user {email}");
    Ok(user.id)
}

async fn ensure_listing(
    orm: &OrmConn,
    title: &str,
    description: &str,
    price_cents: i64,
    category_id: i32,
    user_id: i32,
) -> anyhow::Result<()> {
    let existing = Listings::find()
        .filter(listings::Column::Title.eq(title))
        .one(orm)
        .await?;
    if existing.is_some() {
        return Ok(());
    }

    listings::ActiveModel {
        id: NotSet,
        title: Set(title.to_string()),
        description: Set(Some(description.to_string())),
        price_cents: Set(price_cents),
        category_id: Set(category_id),
        user_id: Set(user_id),
        created_at: NotSet,
    }
    .insert(orm)
    .await?;
    println!("Seeded listing {title}");
    Ok(())
}
