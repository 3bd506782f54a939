//! HTTP client for the movie recommendation backend.
//!
//! This crate provides a Rust client for the three public JSON endpoints
//! the backend exposes. It handles:
//! - Building endpoint URLs from an explicit [`ClientConfig`]
//! - Treating any non-success status as a failure without reading the body
//! - Decoding JSON bodies into the `model` types
//!
//! The [`RecommenderApi`] trait is the seam the session core talks to, so
//! tests can swap the network for an in-process fake.

pub mod config;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error};

use model::{GenreId, MoviePage, MovieQuery, Recommendation};

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use reqwest::StatusCode;

/// Path of the genre list endpoint
pub const GENRES_PATH: &str = "generos";
/// Path of the recommendation endpoint
pub const RECOMMEND_PATH: &str = "recomendar";
/// Path of the public movie listing
pub const MOVIES_PATH: &str = "peliculas";
/// Query parameter carrying the chosen genre
pub const GENRE_PARAM: &str = "genero_elegido";

/// Errors that can occur when talking to the backend
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Request to /{endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("/{endpoint} answered with HTTP {status}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },

    #[error("Malformed response from /{endpoint}: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Operations the client side needs from the backend.
///
/// ## Design Note
/// - `Send + Sync` lets one implementation be shared through `Arc<dyn RecommenderApi>`
/// - Every method performs exactly one request and never retries
#[async_trait]
pub trait RecommenderApi: Send + Sync {
    /// `GET /generos`: ordered list of genre identifiers
    async fn fetch_genres(&self) -> Result<Vec<GenreId>, ApiError>;

    /// `GET /recomendar?genero_elegido=...`: one movie for the genre
    async fn fetch_recommendation(&self, genre: &GenreId) -> Result<Recommendation, ApiError>;

    /// `GET /peliculas`: one page of the public movie listing
    async fn list_movies(&self, query: &MovieQuery) -> Result<MoviePage, ApiError>;
}

/// reqwest-backed implementation of [`RecommenderApi`].
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct RecommenderClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl RecommenderClient {
    /// Build a client for the configured backend.
    ///
    /// No request timeout is set: a slow backend keeps the caller waiting
    /// until the request resolves.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("reel-picker/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::ClientBuild)?;

        debug!("Created recommender client for {}", config.base_url());
        Ok(Self { http, config })
    }

    /// Get the configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.config.endpoint(endpoint)?;
        debug!("GET {} {:?}", url, params);

        let response = self
            .http
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|source| {
                error!("Transport error calling /{}: {}", endpoint, source);
                ApiError::Transport { endpoint, source }
            })?;

        let status = response.status();
        if !status.is_success() {
            // Error bodies carry no contract, so they are never read
            return Err(ApiError::Status { endpoint, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })?;

        serde_json::from_slice(&body).map_err(|source| ApiError::Decode { endpoint, source })
    }
}

#[async_trait]
impl RecommenderApi for RecommenderClient {
    async fn fetch_genres(&self) -> Result<Vec<GenreId>, ApiError> {
        let genres: Vec<GenreId> = self.get_json(GENRES_PATH, &[]).await?;
        debug!("Fetched {} genres", genres.len());
        Ok(genres)
    }

    async fn fetch_recommendation(&self, genre: &GenreId) -> Result<Recommendation, ApiError> {
        let params = [(GENRE_PARAM, genre.to_string())];
        let movie: Recommendation = self.get_json(RECOMMEND_PATH, &params).await?;
        debug!("Backend recommended movie {} for genre {}", movie.id, genre);
        Ok(movie)
    }

    async fn list_movies(&self, query: &MovieQuery) -> Result<MoviePage, ApiError> {
        self.get_json(MOVIES_PATH, &query.to_params()).await
    }
}
