//! Session repository tests: creation, lookup, update, activity touch.

use cinematch_core::category::DEFAULT_CATEGORY;
use cinematch_core::session_code::{CODE_ALPHABET, CODE_LENGTH};
use cinematch_db::models::session::UpdateSession;
use cinematch_db::repositories::SessionRepo;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_assigns_code_and_default_category(pool: PgPool) {
    let session = SessionRepo::create(&pool)
        .await
        .unwrap()
        .expect("fresh database should have free codes");

    assert_eq!(session.session_code.len(), CODE_LENGTH);
    assert!(
        session
            .session_code
            .bytes()
            .all(|b| CODE_ALPHABET.contains(&b)),
        "Code {} contains characters outside the alphabet",
        session.session_code
    );
    assert_eq!(session.category, DEFAULT_CATEGORY);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn created_sessions_get_distinct_codes(pool: PgPool) {
    let a = SessionRepo::create(&pool).await.unwrap().unwrap();
    let b = SessionRepo::create(&pool).await.unwrap().unwrap();
    assert_ne!(a.session_code, b.session_code);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_by_code_returns_the_row(pool: PgPool) {
    let created = SessionRepo::create(&pool).await.unwrap().unwrap();

    let found = SessionRepo::find_by_code(&pool, &created.session_code)
        .await
        .unwrap()
        .expect("session should be found");
    assert_eq!(found.id, created.id);

    let missing = SessionRepo::find_by_code(&pool, "NOPE1234").await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_changes_only_the_category(pool: PgPool) {
    let created = SessionRepo::create(&pool).await.unwrap().unwrap();

    let patch = UpdateSession {
        category: Some("top_rated".to_string()),
    };
    let updated = SessionRepo::update(&pool, &created.session_code, &patch)
        .await
        .unwrap()
        .expect("session should exist");

    assert_eq!(updated.category, "top_rated");
    assert_eq!(updated.session_code, created.session_code);
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_of_unknown_code_returns_none(pool: PgPool) {
    let patch = UpdateSession {
        category: Some("upcoming".to_string()),
    };
    let updated = SessionRepo::update(&pool, "NOPE1234", &patch).await.unwrap();
    assert!(updated.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn touch_refreshes_last_active(pool: PgPool) {
    let created = SessionRepo::create(&pool).await.unwrap().unwrap();

    let touched = SessionRepo::touch_last_active(&pool, &created.session_code)
        .await
        .unwrap();
    assert!(touched);

    let after = SessionRepo::find_by_code(&pool, &created.session_code)
        .await
        .unwrap()
        .unwrap();
    assert!(after.last_active_at >= created.last_active_at);

    let missing = SessionRepo::touch_last_active(&pool, "NOPE1234").await.unwrap();
    assert!(!missing);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn locked_lookup_finds_the_row_inside_a_transaction(pool: PgPool) {
    let created = SessionRepo::create(&pool).await.unwrap().unwrap();

    let mut tx = pool.begin().await.unwrap();
    let locked = SessionRepo::find_by_code_locked(&mut tx, &created.session_code)
        .await
        .unwrap();
    assert_eq!(locked.map(|s| s.id), Some(created.id));

    let missing = SessionRepo::find_by_code_locked(&mut tx, "NOPE1234")
        .await
        .unwrap();
    assert!(missing.is_none());
    tx.commit().await.unwrap();
}
