//! Client for the Databricks SQL statement execution API.
//!
//! Each statement is one `POST /api/2.0/sql/statements/` that waits for the
//! result inline. Statements still running when the wait timeout expires are
//! canceled server-side and reported as failures.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use dpctl_config::Environment;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::{Error, Row, Warehouse};

const STATEMENTS_PATH: &str = "/api/2.0/sql/statements/";

/// Longest wait the API accepts for an inline result.
const WAIT_TIMEOUT: &str = "50s";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

/// A connection to one SQL warehouse.
pub struct StatementClient {
    http: reqwest::Client,
    url: String,
    warehouse_id: String,
    token: Secret<String>,
}

impl StatementClient {
    /// Build a client for the environment's warehouse.
    ///
    /// Fails without any I/O if the endpoint does not name a warehouse.
    pub fn new(environment: &Environment, token: Secret<String>) -> Result<Self, Error> {
        let warehouse_id = environment.warehouse_id()?.to_string();
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            url: format!("{}{STATEMENTS_PATH}", environment.base_url()),
            warehouse_id,
            token,
        })
    }

    /// Run a statement and return its rows.
    pub async fn execute(&self, sql: &str) -> Result<Vec<Row>, Error> {
        let request = ExecuteStatement {
            statement: sql,
            warehouse_id: &self.warehouse_id,
            wait_timeout: WAIT_TIMEOUT,
            on_wait_timeout: "CANCEL",
            disposition: "INLINE",
            format: "JSON_ARRAY",
        };

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(self.token.expose_secret())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::Api { status, body });
        }

        let response = serde_json::from_str::<StatementResponse>(&body)
            .map_err(|e| Error::Decode(e.to_string()))?;
        response.into_rows()
    }
}

impl Warehouse for StatementClient {
    fn execute<'a>(
        &'a self,
        sql: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Row>, Error>> + Send + 'a>> {
        Box::pin(StatementClient::execute(self, sql))
    }
}

#[derive(Debug, Serialize)]
struct ExecuteStatement<'a> {
    statement: &'a str,
    warehouse_id: &'a str,
    wait_timeout: &'a str,
    on_wait_timeout: &'a str,
    disposition: &'a str,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
struct StatementResponse {
    #[serde(default)]
    statement_id: Option<String>,

    status: StatementStatus,

    #[serde(default)]
    result: Option<ResultData>,
}

#[derive(Debug, Deserialize)]
struct StatementStatus {
    state: String,

    #[serde(default)]
    error: Option<ServiceError>,
}

#[derive(Debug, Deserialize)]
struct ServiceError {
    #[serde(default)]
    error_code: Option<String>,

    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResultData {
    #[serde(default)]
    data_array: Option<Vec<Row>>,
}

impl StatementResponse {
    fn into_rows(self) -> Result<Vec<Row>, Error> {
        if self.status.state != "SUCCEEDED" {
            let message = match self.status.error {
                Some(ServiceError {
                    message: Some(message),
                    ..
                }) => message,
                Some(ServiceError {
                    error_code: Some(code),
                    ..
                }) => code,
                _ => format!(
                    "statement {} did not succeed",
                    self.statement_id.as_deref().unwrap_or("<unknown>")
                ),
            };
            return Err(Error::Statement {
                state: self.status.state,
                message,
            });
        }

        Ok(self
            .result
            .and_then(|result| result.data_array)
            .unwrap_or_default())
    }
}
