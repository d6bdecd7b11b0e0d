//! Remote record store over a PostgREST-style HTTP API.
//!
//! Each collection is a table reached at `{base_url}/rest/v1/{table}` and
//! authenticated with an API key. Loads fetch the whole table; saves are
//! delete-all-then-insert-all (there is no per-record reconciliation), and
//! the finances singleton is upserted in place under its fixed row id.
//!
//! A delete that succeeds followed by an insert that fails leaves the remote
//! table empty until the next successful save; the in-memory state remains
//! authoritative either way.

use super::RecordStore;
use super::wire::{FinancesRecord, FundRecord, TodoRecord, VendorRecord};
use crate::config::RemoteConfig;
use crate::entities::{Finances, Fund, Todo, Vendor};
use crate::errors::Result;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the hosted record store.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RemoteStore {
    /// Builds a client from the remote configuration.
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", &self.api_key))
    }

    async fn fetch_all<T>(&self, table: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let response = self
            .authed(self.client.get(self.table_url(table)))
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?
            .error_for_status()?;
        let rows: Vec<T> = response.json().await?;
        debug!("Fetched {} rows from {table}", rows.len());
        Ok(rows)
    }

    /// Clears the table, then inserts the new rows.
    async fn replace_all<T>(&self, table: &str, rows: &[T]) -> Result<()>
    where
        T: Serialize,
    {
        // `id=neq.0` matches every row; ids are epoch-millisecond based and
        // never zero.
        self.authed(self.client.delete(self.table_url(table)))
            .query(&[("id", "neq.0")])
            .send()
            .await?
            .error_for_status()?;

        if !rows.is_empty() {
            self.authed(self.client.post(self.table_url(table)))
                .header("Prefer", "return=minimal")
                .json(rows)
                .send()
                .await?
                .error_for_status()?;
        }
        debug!("Saved {} rows to {table}", rows.len());
        Ok(())
    }
}

impl RecordStore for RemoteStore {
    async fn load_vendors(&self) -> Result<Option<Vec<Vendor>>> {
        let rows: Vec<VendorRecord> = self.fetch_all("vendors").await?;
        Ok(Some(rows.into_iter().map(Vendor::from).collect()))
    }

    async fn save_vendors(&self, vendors: &[Vendor]) -> Result<()> {
        let rows: Vec<VendorRecord> = vendors.iter().map(VendorRecord::from).collect();
        self.replace_all("vendors", &rows).await
    }

    async fn load_funds(&self) -> Result<Option<Vec<Fund>>> {
        let rows: Vec<FundRecord> = self.fetch_all("funds").await?;
        Ok(Some(rows.into_iter().map(Fund::from).collect()))
    }

    async fn save_funds(&self, funds: &[Fund]) -> Result<()> {
        let rows: Vec<FundRecord> = funds.iter().map(FundRecord::from).collect();
        self.replace_all("funds", &rows).await
    }

    async fn load_todos(&self) -> Result<Option<Vec<Todo>>> {
        let rows: Vec<TodoRecord> = self.fetch_all("wedding_todos").await?;
        Ok(Some(rows.into_iter().map(Todo::from).collect()))
    }

    async fn save_todos(&self, todos: &[Todo]) -> Result<()> {
        let rows: Vec<TodoRecord> = todos.iter().map(TodoRecord::from).collect();
        self.replace_all("wedding_todos", &rows).await
    }

    async fn load_finances(&self) -> Result<Option<Finances>> {
        // The singleton table holds at most one row; an empty table means
        // the singleton is absent, not zeroed.
        let rows: Vec<FinancesRecord> = self.fetch_all("finances").await?;
        Ok(rows.into_iter().next().map(Finances::from))
    }

    async fn save_finances(&self, finances: &Finances) -> Result<()> {
        let row = FinancesRecord::from(finances);
        self.authed(self.client.post(self.table_url("finances")))
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&[row])
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
