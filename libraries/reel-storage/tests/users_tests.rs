//! Integration tests for the users vertical slice
//!
//! Tests account creation with the unique-email rule, profile edits,
//! and credential storage.

mod test_helpers;

use reel_core::types::{UpdateUser, User};
use reel_core::ReelError;
use test_helpers::*;

#[tokio::test]
async fn test_create_and_get_user() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = User::new("alice@example.com", "alice");
    reel_storage::users::create(pool, &user)
        .await
        .expect("Failed to create user");

    let by_id = reel_storage::users::get_by_id(pool, &user.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_id.email, "alice@example.com");
    assert_eq!(by_id.username, "alice");

    let by_email = reel_storage::users::get_by_email(pool, "alice@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id, user.id);
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let first = User::new("bob@example.com", "bob");
    reel_storage::users::create(pool, &first).await.unwrap();

    let second = User::new("bob@example.com", "robert");
    let result = reel_storage::users::create(pool, &second).await;

    assert!(matches!(result, Err(ReelError::Duplicate(_))));
}

#[tokio::test]
async fn test_update_profile_is_partial() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = User::new("carol@example.com", "carol");
    reel_storage::users::create(pool, &user).await.unwrap();

    // Only set the bio; username must survive
    let updated = reel_storage::users::update_profile(
        pool,
        &user.id,
        &UpdateUser {
            bio: Some("Curator of road trip playlists".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.username, "carol");
    assert_eq!(
        updated.bio.as_deref(),
        Some("Curator of road trip playlists")
    );

    // Now change the display name; bio must survive
    let updated = reel_storage::users::update_profile(
        pool,
        &user.id,
        &UpdateUser {
            username: Some("caroline".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.username, "caroline");
    assert!(updated.bio.is_some());
}

#[tokio::test]
async fn test_credentials_round_trip() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(pool, "dave").await;

    assert!(!reel_storage::users::has_credentials(pool, &user_id)
        .await
        .unwrap());

    reel_storage::users::set_password_hash(pool, &user_id, "$2b$12$fakehash")
        .await
        .unwrap();

    assert!(reel_storage::users::has_credentials(pool, &user_id)
        .await
        .unwrap());

    let hash = reel_storage::users::get_password_hash(pool, &user_id)
        .await
        .unwrap();
    assert_eq!(hash.as_deref(), Some("$2b$12$fakehash"));

    // Upsert replaces the hash
    reel_storage::users::set_password_hash(pool, &user_id, "$2b$12$newhash")
        .await
        .unwrap();

    let hash = reel_storage::users::get_password_hash(pool, &user_id)
        .await
        .unwrap();
    assert_eq!(hash.as_deref(), Some("$2b$12$newhash"));
}
