use anyhow::Result;
use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, CONTENT_TYPE, AUTHORIZATION},
    Method,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;
use shared_models::AppError;

use crate::query::TableQuery;

pub struct SupabaseClient {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.supabase_url.clone(),
            anon_key: config.supabase_anon_key.clone(),
        }
    }

    fn get_headers(&self, auth_token: Option<&str>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        let invalid_key = |_| AppError::Configuration("anon key is not a valid header value".into());

        headers.insert("apikey", HeaderValue::from_str(&self.anon_key).map_err(invalid_key)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        // Without a user session the gateway expects the anon key as bearer.
        let token = auth_token.unwrap_or(&self.anon_key);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).map_err(invalid_key)?,
        );

        Ok(headers)
    }

    pub async fn request<T>(&self, method: Method, path: &str,
                            auth_token: Option<&str>, body: Option<Value>)
                            -> Result<T>
    where T: DeserializeOwned {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making request to {}", url);

        let headers = self.get_headers(auth_token)?;

        let mut req = self.client.request(method, &url)
            .headers(headers);

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            error!("API error ({}): {}", status, text);
            let mut message = error_message(&text);
            if message.trim().is_empty() {
                message = status.canonical_reason().unwrap_or("no response body").to_string();
            }
            return Err(AppError::from_status(status.as_u16(), message).into());
        }

        // Void functions answer 204 or an empty 200.
        let payload = if text.trim().is_empty() { "null" } else { text.as_str() };
        let data = serde_json::from_str::<T>(payload)?;
        Ok(data)
    }

    /// Starts a read against `/rest/v1/<table>`.
    pub fn from(&self, table: &str) -> TableQuery<'_> {
        TableQuery::new(self, table)
    }

    /// Calls a server-side function with keyword arguments.
    pub async fn rpc<T>(&self, function: &str, params: Value) -> Result<T>
    where T: DeserializeOwned {
        let path = format!("/rest/v1/rpc/{}", function);
        self.request(Method::POST, &path, None, Some(params)).await
    }
}

/// Pulls the human-readable message out of a PostgREST error body,
/// falling back to the raw text.
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map
            .get("message")
            .or_else(|| map.get("msg"))
            .or_else(|| map.get("error"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| body.to_string()),
        _ => body.to_string(),
    }
}
