use crate::db::connect;
use crate::{gallery_image, section_visibility, service, user, user_credentials};
use sea_orm::{DatabaseConnection, EntityTrait, ActiveModelTrait, Set, QueryFilter, ColumnTrait};
use anyhow::Result;
use migration::MigratorTrait;
use rust_decimal::Decimal;
use uuid::Uuid;
use chrono::Utc;

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect().await?;

    // Run migrations if needed
    migration::Migrator::up(&db, None).await?;

    Ok(db)
}

/// Test user CRUD operations
#[tokio::test]
async fn test_user_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    let user_email = format!("test_{}@example.com", Uuid::new_v4());
    let user_name = format!("Test User {}", Uuid::new_v4());

    let created_user = user::create(&db, &user_email, &user_name).await?;

    assert_eq!(created_user.email, user_email);
    assert_eq!(created_user.name, user_name);

    // Test Read
    let found_user = user::Entity::find_by_id(created_user.id).one(&db).await?;
    assert!(found_user.is_some());
    let found_user = found_user.unwrap();
    assert_eq!(found_user.id, created_user.id);
    assert_eq!(found_user.email, user_email);

    // Test find by email
    let found_by_email = user::Entity::find().filter(user::Column::Email.eq(user_email.clone())).one(&db).await?;
    assert!(found_by_email.is_some());
    assert_eq!(found_by_email.unwrap().id, created_user.id);

    // Test Hard Delete
    user::hard_delete(&db, created_user.id).await?;
    let after_delete = user::Entity::find_by_id(created_user.id).one(&db).await?;
    assert!(after_delete.is_none());

    Ok(())
}

/// Test credentials upsert and cascade delete
#[tokio::test]
async fn test_user_credentials_upsert_and_cascade() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    let email = format!("cred_{}@example.com", Uuid::new_v4());
    let created_user = user::create(&db, &email, "Cred User").await?;

    let first = user_credentials::upsert_password(&db, created_user.id, "hash-one".into(), "argon2").await?;
    assert_eq!(first.password_hash, "hash-one");

    // Second upsert updates in place
    let second = user_credentials::upsert_password(&db, created_user.id, "hash-two".into(), "argon2").await?;
    assert_eq!(second.id, first.id);
    assert_eq!(second.password_hash, "hash-two");

    // Deleting the user cascades to credentials
    user::hard_delete(&db, created_user.id).await?;
    let orphan = user_credentials::Entity::find()
        .filter(user_credentials::Column::UserId.eq(created_user.id))
        .one(&db)
        .await?;
    assert!(orphan.is_none());

    Ok(())
}

/// Test service CRUD with decimal price round-trip
#[tokio::test]
async fn test_service_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    let now = Utc::now().into();
    let price = Decimal::new(3000, 2); // 30.00
    let am = service::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Corte".into()),
        description: Set("Corte simples".into()),
        price: Set(price),
        duration: Set(30),
        image_url: Set(None),
        active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let created = am.insert(&db).await?;

    let found = service::Entity::find_by_id(created.id).one(&db).await?.unwrap();
    assert_eq!(found.price, price);
    assert_eq!(found.duration, 30);
    assert!(found.active);

    // Flip active off
    let mut am: service::ActiveModel = found.into();
    am.active = Set(false);
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(&db).await?;
    assert!(!updated.active);

    service::Entity::delete_by_id(created.id).exec(&db).await?;
    let gone = service::Entity::find_by_id(created.id).one(&db).await?;
    assert!(gone.is_none());

    Ok(())
}

/// Validation helpers reject non-positive values
#[test]
fn test_service_validators() {
    assert!(service::validate_price(Decimal::new(3000, 2)).is_ok());
    assert!(service::validate_price(Decimal::ZERO).is_err());
    assert!(service::validate_price(Decimal::new(-100, 2)).is_err());
    assert!(service::validate_duration(30).is_ok());
    assert!(service::validate_duration(0).is_err());
}

/// Test gallery image CRUD
#[tokio::test]
async fn test_gallery_image_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    let now = Utc::now().into();
    let am = gallery_image::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set("Fade clássico".into()),
        description: Set(None),
        image_url: Set("https://utfs.io/f/abc123".into()),
        featured: Set(false),
        active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let created = am.insert(&db).await?;

    let found = gallery_image::Entity::find_by_id(created.id).one(&db).await?.unwrap();
    assert_eq!(found.image_url, "https://utfs.io/f/abc123");
    assert!(!found.featured);

    gallery_image::Entity::delete_by_id(created.id).exec(&db).await?;
    Ok(())
}

/// Section name is unique at the schema level
#[tokio::test]
async fn test_section_visibility_unique_name() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    let name = format!("section_{}", Uuid::new_v4());
    let now = Utc::now().into();
    let am = section_visibility::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.clone()),
        active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let created = am.insert(&db).await?;

    let dup = section_visibility::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.clone()),
        active: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
    };
    assert!(dup.insert(&db).await.is_err());

    section_visibility::Entity::delete_by_id(created.id).exec(&db).await?;
    Ok(())
}
