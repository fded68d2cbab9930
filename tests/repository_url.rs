//! PostgreSQL repository tests.
//!
//! Need a live database: `DATABASE_URL=postgres://... cargo test -- --ignored`

use sqlx::PgPool;
use std::sync::Arc;
use shorturl_service::domain::entities::NewUrlMapping;
use shorturl_service::domain::repositories::UrlRepository;
use shorturl_service::error::AppError;
use shorturl_service::infrastructure::persistence::PgUrlRepository;

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_and_find(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let created = repo
        .insert(NewUrlMapping::new(1, "https://example.com"))
        .await
        .unwrap();
    assert_eq!(created.short_url, 1);
    assert_eq!(created.original_url, "https://example.com");

    let found = repo.find_by_short_url(1).await.unwrap();
    assert_eq!(found.unwrap().original_url, "https://example.com");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_missing_returns_none(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let result = repo.find_by_short_url(999_999).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_count(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    assert_eq!(repo.count().await.unwrap(), 0);

    for id in 1..=3 {
        repo.insert(NewUrlMapping::new(id, format!("https://example.com/{id}")))
            .await
            .unwrap();
    }

    assert_eq!(repo.count().await.unwrap(), 3);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_duplicate_short_url_is_conflict(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    repo.insert(NewUrlMapping::new(1, "https://a.example"))
        .await
        .unwrap();

    let result = repo.insert(NewUrlMapping::new(1, "https://b.example")).await;

    assert!(matches!(result, Err(AppError::Conflict)));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_list_recent(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    for id in 1..=4 {
        repo.insert(NewUrlMapping::new(id, format!("https://example.com/{id}")))
            .await
            .unwrap();
    }

    let recent = repo.list_recent(2).await.unwrap();
    let ids: Vec<i64> = recent.iter().map(|m| m.short_url).collect();

    assert_eq!(ids, vec![4, 3]);
}
