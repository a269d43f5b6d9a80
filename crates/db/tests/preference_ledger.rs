//! Preference ledger tests: upsert semantics and storage constraints.

use cinematch_db::models::preference::RecordPreference;
use cinematch_db::repositories::{PreferenceRepo, SessionRepo};
use sqlx::PgPool;

fn swipe(code: &str, movie_id: i64, participant_number: i16, liked: bool) -> RecordPreference {
    RecordPreference {
        session_code: code.to_string(),
        movie_id,
        participant_number,
        liked,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn resubmission_overwrites_the_liked_flag(pool: PgPool) {
    let session = SessionRepo::create(&pool).await.unwrap().unwrap();
    let code = &session.session_code;

    let first = PreferenceRepo::upsert(&pool, &swipe(code, 603, 1, true))
        .await
        .unwrap();
    assert!(first.liked);

    let second = PreferenceRepo::upsert(&pool, &swipe(code, 603, 1, false))
        .await
        .unwrap();
    assert!(!second.liked);
    assert_eq!(second.id, first.id, "Re-swipe must hit the same row");

    let (count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM preferences
         WHERE session_code = $1 AND movie_id = 603 AND participant_number = 1",
    )
    .bind(code)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn slots_are_independent(pool: PgPool) {
    let session = SessionRepo::create(&pool).await.unwrap().unwrap();
    let code = &session.session_code;

    PreferenceRepo::upsert(&pool, &swipe(code, 603, 1, true)).await.unwrap();
    PreferenceRepo::upsert(&pool, &swipe(code, 603, 2, false)).await.unwrap();
    PreferenceRepo::upsert(&pool, &swipe(code, 550, 1, true)).await.unwrap();

    assert_eq!(PreferenceRepo::count_likes(&pool, code, 603).await.unwrap(), 1);
    assert_eq!(PreferenceRepo::count_likes(&pool, code, 550).await.unwrap(), 1);
    assert_eq!(PreferenceRepo::count_likes(&pool, code, 11).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_session_violates_the_foreign_key(pool: PgPool) {
    let err = PreferenceRepo::upsert(&pool, &swipe("NOPE1234", 603, 1, true))
        .await
        .expect_err("write against a missing session must fail");

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(
                db_err.code().as_deref(),
                Some("23503"),
                "Expected a foreign key violation, got {db_err}"
            );
        }
        other => panic!("Expected a database error, got {other}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn participant_slots_are_limited_to_two(pool: PgPool) {
    let session = SessionRepo::create(&pool).await.unwrap().unwrap();
    let code = &session.session_code;

    let err = PreferenceRepo::upsert(&pool, &swipe(code, 603, 3, true))
        .await
        .expect_err("slot 3 must be rejected");

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(
                db_err.code().as_deref(),
                Some("23514"),
                "Expected a check violation, got {db_err}"
            );
        }
        other => panic!("Expected a database error, got {other}"),
    }
}
