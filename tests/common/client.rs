//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per Album API endpoint.
//! When API routes or request formats change, update only this file.

#![allow(dead_code)]

use super::constants::*;
use reqwest::Response;
use serde_json::Value;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ========================================================================
    // Service Endpoints
    // ========================================================================

    /// GET /
    pub async fn get_root(&self) -> Response {
        self.client
            .get(self.url("/"))
            .send()
            .await
            .expect("Root request failed")
    }

    /// GET /health
    pub async fn get_health(&self) -> Response {
        self.client
            .get(self.url("/health"))
            .send()
            .await
            .expect("Health request failed")
    }

    /// GET /stats
    pub async fn get_stats(&self) -> Response {
        self.client
            .get(self.url("/stats"))
            .send()
            .await
            .expect("Stats request failed")
    }

    // ========================================================================
    // Album Endpoints
    // ========================================================================

    /// GET /albums
    pub async fn list_albums(&self) -> Response {
        self.client
            .get(self.url("/albums"))
            .send()
            .await
            .expect("List albums request failed")
    }

    /// GET /albums/{id}
    pub async fn get_album(&self, id: i64) -> Response {
        self.get_album_raw(&id.to_string()).await
    }

    /// GET /albums/{id} with an arbitrary path segment
    pub async fn get_album_raw(&self, id: &str) -> Response {
        self.client
            .get(self.url(&format!("/albums/{}", id)))
            .send()
            .await
            .expect("Get album request failed")
    }

    /// POST /albums
    pub async fn create_album(&self, body: &Value) -> Response {
        self.client
            .post(self.url("/albums"))
            .json(body)
            .send()
            .await
            .expect("Create album request failed")
    }

    /// PUT /albums/{id}
    pub async fn update_album(&self, id: i64, body: &Value) -> Response {
        self.client
            .put(self.url(&format!("/albums/{}", id)))
            .json(body)
            .send()
            .await
            .expect("Update album request failed")
    }

    /// DELETE /albums/{id}
    pub async fn delete_album(&self, id: i64) -> Response {
        self.client
            .delete(self.url(&format!("/albums/{}", id)))
            .send()
            .await
            .expect("Delete album request failed")
    }

    /// GET /albums/search?q=...
    pub async fn search_albums(&self, query: &str) -> Response {
        self.client
            .get(self.url("/albums/search"))
            .query(&[("q", query)])
            .send()
            .await
            .expect("Search request failed")
    }

    /// GET /albums/search without the q parameter
    pub async fn search_albums_without_query(&self) -> Response {
        self.client
            .get(self.url("/albums/search"))
            .send()
            .await
            .expect("Search request failed")
    }
}
