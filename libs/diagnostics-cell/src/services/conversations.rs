use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use messaging_cell::{conversation_partners, participants_of, MessagingService};
use shared_config::AppConfig;
use shared_models::Profile;

use crate::models::{pretty, CheckReport};
use crate::services::DiagnosticSuite;

const SAMPLE_LIMIT: usize = 10;

/// Message and profile reads, the recent-conversations RPC and a manual
/// partner derivation for the first profile found.
pub struct ConversationsSuite {
    messaging: MessagingService,
}

impl ConversationsSuite {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            messaging: MessagingService::new(config),
        }
    }

    async fn check_messages(&self, report: &mut CheckReport) -> Option<Vec<Value>> {
        report.section("1. Checking messages table...");

        match self.messaging.list_messages("*", SAMPLE_LIMIT).await {
            Ok(messages) => {
                report.pass(&format!("Found {} messages in database", messages.len()));
                if let Some(first) = messages.first() {
                    report.note(&format!("Sample message: {}", pretty(first)));
                }
                Some(messages)
            }
            Err(e) => {
                report.fail("Error accessing messages table", e);
                None
            }
        }
    }

    async fn check_profiles(&self, report: &mut CheckReport) -> Option<Vec<Profile>> {
        report.section("2. Checking profiles table...");

        let rows = self.messaging
            .supabase()
            .from("profiles")
            .select("user_id, full_name, role")
            .limit(SAMPLE_LIMIT)
            .execute::<Profile>()
            .await;

        match rows {
            Ok(profiles) => {
                report.pass(&format!("Found {} profiles in database", profiles.len()));
                if !profiles.is_empty() {
                    let sample = &profiles[..profiles.len().min(3)];
                    report.note(&format!("Sample profiles: {}", pretty(sample)));
                }
                Some(profiles)
            }
            Err(e) => {
                report.fail("Error accessing profiles table", e);
                None
            }
        }
    }

    async fn check_recent_conversations(&self, report: &mut CheckReport, profiles: Option<&[Profile]>) {
        report.section("3. Testing get_recent_conversations function...");

        let Some(user) = profiles.and_then(|p| p.first()) else {
            report.skip("get_recent_conversations", "no users found");
            return;
        };
        report.note(&format!("Testing with user ID: {}", user.user_id));

        match self.messaging.recent_conversations(&user.user_id).await {
            Ok(conversations) => {
                report.pass(&format!("Found {} conversations for user", conversations.len()));
                if let Some(first) = conversations.first() {
                    report.note(&format!("Sample conversation: {}", pretty(first)));
                }
            }
            Err(e) => report.fail("Error calling get_recent_conversations", e),
        }
    }

    async fn check_manual_partners(
        &self,
        report: &mut CheckReport,
        messages: Option<&[Value]>,
        profiles: Option<&[Profile]>,
    ) {
        report.section("4. Manual conversation query...");

        let has_messages = messages.is_some_and(|m| !m.is_empty());
        let user = profiles.and_then(|p| p.first());
        let Some(user) = user.filter(|_| has_messages) else {
            report.skip("Manual conversation query", "no messages or users found");
            return;
        };
        report.note(&format!("Testing manual query for user ID: {}", user.user_id));

        match self.messaging.list_user_messages(&user.user_id).await {
            Ok(rows) => {
                report.pass(&format!("Found {} messages for user", rows.len()));
                if rows.is_empty() {
                    return;
                }

                let participants = participants_of(&rows);
                debug!("{} of {} rows carry both participant ids", participants.len(), rows.len());

                let partners = conversation_partners(&user.user_id, &participants);
                report.pass(&format!("Found {} conversation partners", partners.len()));
                report.note(&format!("Conversation partners: {:?}", partners));
            }
            Err(e) => report.fail("Error with manual message query", e),
        }
    }
}

#[async_trait]
impl DiagnosticSuite for ConversationsSuite {
    fn name(&self) -> &'static str {
        "conversations"
    }

    fn title(&self) -> &'static str {
        "Testing conversations and messages"
    }

    async fn run(&self, report: &mut CheckReport) -> Result<()> {
        let messages = self.check_messages(report).await;
        let profiles = self.check_profiles(report).await;

        self.check_recent_conversations(report, profiles.as_deref()).await;
        self.check_manual_partners(report, messages.as_deref(), profiles.as_deref()).await;

        Ok(())
    }
}
