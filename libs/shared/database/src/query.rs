use anyhow::Result;
use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::supabase::SupabaseClient;

/// Read query against a single table, rendered as a PostgREST path.
pub struct TableQuery<'a> {
    client: &'a SupabaseClient,
    table: String,
    columns: String,
    filters: Vec<(String, String)>,
    order: Option<String>,
    limit: Option<usize>,
}

impl<'a> TableQuery<'a> {
    pub(crate) fn new(client: &'a SupabaseClient, table: &str) -> Self {
        Self {
            client,
            table: table.to_string(),
            columns: "*".to_string(),
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.columns = columns
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect::<Vec<_>>()
            .join(",");
        self
    }

    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters.push((column.to_string(), format!("eq.{}", value)));
        self
    }

    /// Disjunctive filter, e.g. `sender_id.eq.X,receiver_id.eq.X`.
    pub fn or(mut self, expression: &str) -> Self {
        self.filters.push(("or".to_string(), format!("({})", expression)));
        self
    }

    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        let direction = if ascending { "asc" } else { "desc" };
        self.order = Some(format!("{}.{}", column, direction));
        self
    }

    pub fn limit(mut self, count: usize) -> Self {
        self.limit = Some(count);
        self
    }

    pub fn to_path(&self) -> String {
        let mut params = vec![format!("select={}", urlencoding::encode(&self.columns))];

        for (key, value) in &self.filters {
            params.push(format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)));
        }
        if let Some(order) = &self.order {
            params.push(format!("order={}", urlencoding::encode(order)));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={}", limit));
        }

        format!("/rest/v1/{}?{}", self.table, params.join("&"))
    }

    pub async fn execute<T>(self) -> Result<Vec<T>>
    where T: DeserializeOwned {
        let path = self.to_path();
        let rows: Option<Vec<T>> = self.client.request(Method::GET, &path, None, None).await?;
        Ok(rows.unwrap_or_default())
    }
}
