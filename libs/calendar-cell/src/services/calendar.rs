use anyhow::Result;
use serde_json::{json, Value};
use tracing::debug;

use shared_config::AppConfig;
use shared_database::SupabaseClient;

use crate::models::CalendarQuery;

pub struct CalendarService {
    supabase: SupabaseClient,
}

impl CalendarService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    pub fn supabase(&self) -> &SupabaseClient {
        &self.supabase
    }

    pub async fn get_user_calendar_data(&self, query: &CalendarQuery) -> Result<Value> {
        debug!(
            "Fetching calendar for {} from {} to {}",
            query.user_id, query.start_date, query.end_date
        );

        self.supabase
            .rpc(
                "get_user_calendar_data",
                json!({
                    "p_user_id": query.user_id,
                    "p_start_date": query.start_date_param(),
                    "p_end_date": query.end_date_param()
                }),
            )
            .await
    }
}
