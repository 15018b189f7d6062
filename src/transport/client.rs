use std::time::Duration;

use anyhow::Context;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::config::CLIENT_TIMEOUT;
use crate::domain::{BoardResponse, BoatsResponse, HitRequest, HitResponse, HitsResponse};
use crate::protocol::GameApi;

/// Typed client for an opponent's game server.
///
/// Each call carries the configured timeout and is never retried; any
/// transport failure, non-200 status or undecodable body is an error.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Client for `addr`, which may omit the `http://` scheme.
    pub fn new(addr: &str) -> anyhow::Result<Self> {
        Self::with_timeout(addr, CLIENT_TIMEOUT)
    }

    pub fn with_timeout(addr: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            base_url: normalize_base_url(addr),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let resp = self
            .http
            .get(self.url(path))
            .send()
            .await
            .with_context(|| format!("GET {} failed", path))?;
        if resp.status() != StatusCode::OK {
            return Err(anyhow::anyhow!("Server error on {}: {}", path, resp.status()));
        }
        resp.json::<T>()
            .await
            .with_context(|| format!("Failed to decode {} response", path))
    }

    pub async fn get_board(&self) -> anyhow::Result<BoardResponse> {
        self.get_json("/board").await
    }

    pub async fn get_boats_count(&self) -> anyhow::Result<usize> {
        let boats: BoatsResponse = self.get_json("/boats").await?;
        Ok(boats.remaining_boats)
    }

    pub async fn hit(&self, x: i64, y: i64) -> anyhow::Result<HitResponse> {
        let resp = self
            .http
            .post(self.url("/hit"))
            .json(&HitRequest { x, y })
            .send()
            .await
            .context("POST /hit failed")?;
        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "Server error on /hit: {} - {}",
                status,
                body.trim()
            ));
        }
        resp.json::<HitResponse>()
            .await
            .context("Failed to decode /hit response")
    }

    pub async fn get_hits(&self) -> anyhow::Result<HitsResponse> {
        self.get_json("/hits").await
    }

    /// `true` only when `/boats` answers and reports boats left. A network
    /// failure reads as not alive.
    pub async fn is_alive(&self) -> bool {
        match self.get_boats_count().await {
            Ok(n) => n > 0,
            Err(e) => {
                log::warn!("{} unreachable: {:#}", self.base_url, e);
                false
            }
        }
    }
}

fn normalize_base_url(addr: &str) -> String {
    let addr = addr.trim().trim_end_matches('/');
    if addr.starts_with("http://") || addr.starts_with("https://") {
        addr.to_string()
    } else {
        format!("http://{}", addr)
    }
}

#[async_trait::async_trait]
impl GameApi for Client {
    async fn board(&self) -> anyhow::Result<BoardResponse> {
        self.get_board().await
    }

    async fn remaining_boats(&self) -> anyhow::Result<usize> {
        self.get_boats_count().await
    }

    async fn hit(&self, x: i64, y: i64) -> anyhow::Result<HitResponse> {
        Client::hit(self, x, y).await
    }

    async fn hits(&self) -> anyhow::Result<HitsResponse> {
        self.get_hits().await
    }

    async fn is_alive(&self) -> bool {
        Client::is_alive(self).await
    }
}
