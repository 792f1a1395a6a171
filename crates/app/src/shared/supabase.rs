//! HTTP façade over the hosted backend (Supabase / PostgREST).
//!
//! Thin by design: four operations per table, no retries, no caching, no
//! error transformation. A failed call surfaces the backend's own error
//! body; translating it into a user-facing sentence is the caller's job
//! via `contracts::shared::errors::friendly_message`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use contracts::shared::errors::{friendly_message, BackendError};

use crate::shared::config::SupabaseConfig;

/// Ordering direction for `list`, rendered as PostgREST `order=col.asc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// Render the PostgREST `order` query value, e.g. `data.desc`.
pub fn order_param(column: &str, direction: Direction) -> String {
    format!("{}.{}", column, direction.as_str())
}

#[derive(Debug, thiserror::Error)]
pub enum SupabaseError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend error: {0}")]
    Backend(BackendError),
}

impl SupabaseError {
    /// The single user-facing sentence for this failure.
    pub fn friendly(&self) -> String {
        match self {
            // Transport failures are the network class of the taxonomy.
            SupabaseError::Transport(_) => {
                "Sem conexão com a internet. Verifique sua conexão e tente novamente.".to_string()
            }
            SupabaseError::Backend(error) => friendly_message(error),
        }
    }
}

pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SupabaseClient {
    pub fn new(config: &SupabaseConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.anon_key.clone(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", &self.api_key))
    }

    /// Select all rows of a table, optionally ordered.
    pub async fn list<T: DeserializeOwned>(
        &self,
        table: &str,
        order: Option<(&str, Direction)>,
    ) -> Result<Vec<T>, SupabaseError> {
        let mut request = self
            .http
            .get(self.table_url(table))
            .query(&[("select", "*")]);
        if let Some((column, direction)) = order {
            request = request.query(&[("order", order_param(column, direction))]);
        }

        let response = self.authorize(request).send().await?;
        Self::read_json(response).await
    }

    /// Insert one row and return the created row as reported by the
    /// backend (`Prefer: return=representation`).
    pub async fn insert<P: Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        payload: &P,
    ) -> Result<T, SupabaseError> {
        let request = self
            .http
            .post(self.table_url(table))
            .header("Prefer", "return=representation")
            .json(&[payload]);

        let response = self.authorize(request).send().await?;
        let mut rows: Vec<T> = Self::read_json(response).await?;
        rows.pop().ok_or_else(|| {
            SupabaseError::Backend(BackendError {
                message: Some("resposta vazia do backend após inserção".to_string()),
                ..Default::default()
            })
        })
    }

    /// Partial update of the row with the given id.
    pub async fn update<P: Serialize>(
        &self,
        table: &str,
        id: i64,
        payload: &P,
    ) -> Result<(), SupabaseError> {
        let request = self
            .http
            .patch(self.table_url(table))
            .query(&[("id", format!("eq.{}", id))])
            .json(payload);

        let response = self.authorize(request).send().await?;
        Self::read_ok(response).await
    }

    /// Delete the row with the given id.
    pub async fn delete(&self, table: &str, id: i64) -> Result<(), SupabaseError> {
        let request = self
            .http
            .delete(self.table_url(table))
            .query(&[("id", format!("eq.{}", id))]);

        let response = self.authorize(request).send().await?;
        Self::read_ok(response).await
    }

    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, SupabaseError> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::backend_error(status, response).await);
        }
        Ok(response.json::<T>().await?)
    }

    async fn read_ok(response: reqwest::Response) -> Result<(), SupabaseError> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::backend_error(status, response).await);
        }
        Ok(())
    }

    async fn backend_error(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> SupabaseError {
        let body = response.text().await.unwrap_or_default();
        tracing::error!(%status, %body, "backend request failed");

        let error = serde_json::from_str::<BackendError>(&body).unwrap_or_else(|_| BackendError {
            message: Some(if body.is_empty() {
                format!("HTTP {}", status)
            } else {
                body.clone()
            }),
            ..Default::default()
        });
        SupabaseError::Backend(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::SupabaseConfig;

    fn config() -> SupabaseConfig {
        SupabaseConfig {
            url: "https://test.supabase.co/".into(),
            anon_key: "key".into(),
        }
    }

    #[test]
    fn test_order_param() {
        assert_eq!(order_param("data", Direction::Desc), "data.desc");
        assert_eq!(order_param("mes_ano", Direction::Asc), "mes_ano.asc");
    }

    #[test]
    fn test_table_url_strips_trailing_slash() {
        let client = SupabaseClient::new(&config());
        assert_eq!(
            client.table_url("lancamentos"),
            "https://test.supabase.co/rest/v1/lancamentos"
        );
    }

    #[test]
    fn test_backend_error_classification_flows_through_friendly() {
        let backend = SupabaseError::Backend(BackendError {
            code: Some("PGRST301".into()),
            message: Some("jwt expired".into()),
            ..Default::default()
        });
        assert!(backend.friendly().contains("autenticação"));
    }
}
