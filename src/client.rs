//! Blocking HTTP client for the cluster's `_cat` and administrative
//! endpoints. Calls are synchronous and deliberately carry no retry or
//! timeout layer: the console is an operator tool, and a hung cluster
//! should look hung.

use anyhow::{Context, Result};
use serde::Serialize;

pub struct EsClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

#[derive(Debug, Serialize)]
struct CreateIndexBody {
    settings: IndexSettings,
}

#[derive(Debug, Serialize)]
struct IndexSettings {
    index: ShardSettings,
}

#[derive(Debug, Serialize)]
struct ShardSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    number_of_shards: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    number_of_replicas: Option<i64>,
}

impl EsClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("escon")
            .build()
            .context("build http client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        what: &str,
    ) -> Result<reqwest::blocking::Response> {
        resp.error_for_status()
            .with_context(|| format!("{what}: cluster rejected the request"))
    }

    /// Raw index table, sizes in plain bytes.
    pub fn cat_indices(&self) -> Result<String> {
        let resp = self
            .client
            .get(self.url("/_cat/indices?bytes=b"))
            .send()
            .context("fetch index table")?;
        self.ensure_ok(resp, "fetch index table")?
            .text()
            .context("read index table")
    }

    /// Raw segment table, sizes in plain bytes.
    pub fn cat_segments(&self) -> Result<String> {
        let resp = self
            .client
            .get(self.url("/_cat/segments?bytes=b"))
            .send()
            .context("fetch segment table")?;
        self.ensure_ok(resp, "fetch segment table")?
            .text()
            .context("read segment table")
    }

    /// One-line cluster health summary with its header row.
    pub fn cat_health(&self) -> Result<String> {
        let resp = self
            .client
            .get(self.url("/_cat/health?v"))
            .send()
            .context("fetch health")?;
        let text = self.ensure_ok(resp, "fetch health")?
            .text()
            .context("read health")?;
        Ok(text.trim_end().to_string())
    }

    /// Creates an index with explicit shard and replica counts.
    pub fn create_index(&self, name: &str, shards: i64, replicas: i64) -> Result<()> {
        let body = CreateIndexBody {
            settings: IndexSettings {
                index: ShardSettings {
                    number_of_shards: Some(shards),
                    number_of_replicas: Some(replicas),
                },
            },
        };
        let resp = self
            .client
            .put(self.url(&format!("/{name}")))
            .json(&body)
            .send()
            .with_context(|| format!("create index {name}"))?;
        self.ensure_ok(resp, "create index")?;
        Ok(())
    }

    pub fn delete_index(&self, name: &str) -> Result<()> {
        let resp = self
            .client
            .delete(self.url(&format!("/{name}")))
            .send()
            .with_context(|| format!("delete index {name}"))?;
        self.ensure_ok(resp, "delete index")?;
        Ok(())
    }

    /// Updates the replica count of an existing index.
    pub fn set_replicas(&self, name: &str, replicas: i64) -> Result<()> {
        let body = IndexSettings {
            index: ShardSettings {
                number_of_shards: None,
                number_of_replicas: Some(replicas),
            },
        };
        let resp = self
            .client
            .put(self.url(&format!("/{name}/_settings")))
            .json(&body)
            .send()
            .with_context(|| format!("set replicas on {name}"))?;
        self.ensure_ok(resp, "set replicas")?;
        Ok(())
    }

    /// Kicks off a background merge down to `max_segments` segments per
    /// shard. Returns as soon as the cluster accepts the request.
    pub fn optimize_index(&self, name: &str, max_segments: i64) -> Result<()> {
        let path = format!(
            "/{name}/_optimize?max_num_segments={max_segments}&wait_for_completion=false"
        );
        let resp = self
            .client
            .post(self.url(&path))
            .send()
            .with_context(|| format!("optimize {name}"))?;
        self.ensure_ok(resp, "optimize index")?;
        Ok(())
    }
}
