use anyhow::Result;
use serde_json::{json, Value};
use tracing::debug;

use shared_config::AppConfig;
use shared_database::SupabaseClient;

use crate::models::{MessageParticipants, Page};

pub struct MessagingService {
    supabase: SupabaseClient,
}

impl MessagingService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    pub fn supabase(&self) -> &SupabaseClient {
        &self.supabase
    }

    pub async fn list_messages(&self, columns: &str, limit: usize) -> Result<Vec<Value>> {
        debug!("Listing up to {} messages", limit);

        self.supabase
            .from("messages")
            .select(columns)
            .limit(limit)
            .execute()
            .await
    }

    /// Every message the user sent or received, newest first.
    pub async fn list_user_messages(&self, user_id: &str) -> Result<Vec<Value>> {
        debug!("Fetching messages for user: {}", user_id);

        self.supabase
            .from("messages")
            .or(&format!("sender_id.eq.{0},receiver_id.eq.{0}", user_id))
            .order("created_at", false)
            .execute()
            .await
    }

    pub async fn recent_conversations(&self, user_id: &str) -> Result<Vec<Value>> {
        debug!("Fetching recent conversations for user: {}", user_id);

        let rows: Option<Vec<Value>> = self.supabase
            .rpc("get_recent_conversations", json!({ "p_user_id": user_id }))
            .await?;

        Ok(rows.unwrap_or_default())
    }

    /// Messages exchanged between two users. Without a page the function's
    /// own defaults apply.
    pub async fn conversation_messages(
        &self,
        user1_id: &str,
        user2_id: &str,
        page: Option<Page>,
    ) -> Result<Vec<Value>> {
        debug!("Fetching conversation between {} and {}", user1_id, user2_id);

        let mut params = json!({
            "p_user1_id": user1_id,
            "p_user2_id": user2_id
        });
        if let Some(page) = page {
            params["p_limit"] = json!(page.limit);
            params["p_offset"] = json!(page.offset);
        }

        let rows: Option<Vec<Value>> = self.supabase
            .rpc("get_conversation_messages", params)
            .await?;

        Ok(rows.unwrap_or_default())
    }
}

/// Reads sender/receiver pairs out of raw message rows, skipping rows
/// that lack either column.
pub fn participants_of(rows: &[Value]) -> Vec<MessageParticipants> {
    rows.iter()
        .filter_map(|row| serde_json::from_value(row.clone()).ok())
        .collect()
}
