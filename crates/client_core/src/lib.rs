//! Record transport for the trees registry.
//!
//! Wraps the four REST operations of the collection endpoint (`GET/POST
//! /trees`, `PUT/DELETE /trees/{id}`) behind [`RegistryTransport`] and
//! translates HTTP outcomes into [`MutationOutcome`] / [`TransportError`].
//! No operation retries; every failure is terminal for that attempt.

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::TreeId,
    protocol::{TreeFields, TreeRecord},
};
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{operation} request could not reach the registry: {source}")]
    Unreachable {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{operation} response could not be decoded: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("list request returned status {status}")]
    ListStatus { status: u16 },
}

impl TransportError {
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Unreachable { operation, .. } | Self::Decode { operation, .. } => operation,
            Self::ListStatus { .. } => "list",
        }
    }
}

/// Result of a write operation. Any 2xx is `Completed`; everything else is
/// `Rejected` with the raw status, with no further distinction by code.
/// Response bodies of write operations are never consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Completed,
    Rejected { status: u16 },
}

#[async_trait]
pub trait RegistryTransport: Send + Sync {
    /// Full record sequence in server order; the client never re-sorts.
    async fn list_trees(&self) -> Result<Vec<TreeRecord>, TransportError>;

    async fn create_tree(&self, fields: &TreeFields) -> Result<MutationOutcome, TransportError>;

    async fn update_tree(
        &self,
        fields: &TreeFields,
        id: &TreeId,
    ) -> Result<MutationOutcome, TransportError>;

    async fn delete_tree(&self, id: &TreeId) -> Result<MutationOutcome, TransportError>;

    /// List with silent degradation: a transport failure is logged and yields
    /// an empty sequence, keeping refresh non-blocking when the registry is
    /// unreachable.
    async fn list_trees_or_empty(&self) -> Vec<TreeRecord> {
        match self.list_trees().await {
            Ok(records) => records,
            Err(err) => {
                error!("registry list failed, rendering empty list: {err}");
                Vec::new()
            }
        }
    }
}

/// Reqwest-backed transport against a fixed base address.
pub struct HttpRegistryClient {
    http: Client,
    base_url: String,
}

impl HttpRegistryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/trees", self.base_url)
    }

    fn record_url(&self, id: &TreeId) -> String {
        format!("{}/trees/{}", self.base_url, id.as_str())
    }

    fn outcome(operation: &'static str, response: &reqwest::Response) -> MutationOutcome {
        let status = response.status();
        if status.is_success() {
            debug!(operation, status = status.as_u16(), "registry mutation completed");
            MutationOutcome::Completed
        } else {
            debug!(operation, status = status.as_u16(), "registry mutation rejected");
            MutationOutcome::Rejected {
                status: status.as_u16(),
            }
        }
    }
}

#[async_trait]
impl RegistryTransport for HttpRegistryClient {
    async fn list_trees(&self) -> Result<Vec<TreeRecord>, TransportError> {
        let response = self
            .http
            .get(self.collection_url())
            .send()
            .await
            .map_err(|source| TransportError::Unreachable {
                operation: "list",
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::ListStatus {
                status: status.as_u16(),
            });
        }

        let records: Vec<TreeRecord> =
            response
                .json()
                .await
                .map_err(|source| TransportError::Decode {
                    operation: "list",
                    source,
                })?;
        debug!(count = records.len(), "registry list loaded");
        Ok(records)
    }

    async fn create_tree(&self, fields: &TreeFields) -> Result<MutationOutcome, TransportError> {
        let response = self
            .http
            .post(self.collection_url())
            .json(fields)
            .send()
            .await
            .map_err(|source| TransportError::Unreachable {
                operation: "create",
                source,
            })?;
        Ok(Self::outcome("create", &response))
    }

    async fn update_tree(
        &self,
        fields: &TreeFields,
        id: &TreeId,
    ) -> Result<MutationOutcome, TransportError> {
        let response = self
            .http
            .put(self.record_url(id))
            .json(fields)
            .send()
            .await
            .map_err(|source| TransportError::Unreachable {
                operation: "update",
                source,
            })?;
        Ok(Self::outcome("update", &response))
    }

    async fn delete_tree(&self, id: &TreeId) -> Result<MutationOutcome, TransportError> {
        let response = self
            .http
            .delete(self.record_url(id))
            .send()
            .await
            .map_err(|source| TransportError::Unreachable {
                operation: "delete",
                source,
            })?;
        Ok(Self::outcome("delete", &response))
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
