#![allow(dead_code)]

use async_trait::async_trait;
use std::io;
use std::net::IpAddr;
use std::sync::Arc;
use shorturl_service::domain::HostResolver;
use shorturl_service::domain::entities::{NewUrlMapping, UrlMapping};
use shorturl_service::domain::repositories::UrlRepository;
use shorturl_service::error::AppError;
use shorturl_service::infrastructure::persistence::InMemoryUrlRepository;
use shorturl_service::state::AppState;

/// Resolves every host to a documentation address except `*.invalid`.
pub struct FakeResolver;

#[async_trait]
impl HostResolver for FakeResolver {
    async fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        if host.ends_with(".invalid") {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("failed to lookup address information for {host}"),
            ));
        }

        Ok(vec!["192.0.2.1".parse().unwrap()])
    }
}

/// Repository whose every call fails, as if the database were down.
pub struct UnavailableRepository;

#[async_trait]
impl UrlRepository for UnavailableRepository {
    async fn count(&self) -> Result<i64, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn insert(&self, _new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn find_by_short_url(&self, _short_url: i64) -> Result<Option<UrlMapping>, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn list_recent(&self, _limit: i64) -> Result<Vec<UrlMapping>, AppError> {
        Err(AppError::internal("connection refused"))
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryUrlRepository>) {
    let repo = Arc::new(InMemoryUrlRepository::new());
    let state = AppState::new(repo.clone(), Arc::new(FakeResolver));

    (state, repo)
}

pub fn create_unavailable_state() -> AppState {
    AppState::new(Arc::new(UnavailableRepository), Arc::new(FakeResolver))
}

pub async fn create_test_mapping(repo: &InMemoryUrlRepository, short_url: i64, url: &str) {
    repo.insert(NewUrlMapping::new(short_url, url))
        .await
        .unwrap();
}
