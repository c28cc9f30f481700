use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use messaging_cell::{participants_of, MessagingService, Page};
use shared_config::AppConfig;
use shared_models::{DoctorSummary, Profile};

use crate::models::CheckReport;
use crate::services::DiagnosticSuite;

const SAMPLE_LIMIT: usize = 5;

/// Checks that the tables and functions the doctor messaging screens rely on
/// are readable with the anon key.
pub struct MessagingAccessSuite {
    messaging: MessagingService,
}

impl MessagingAccessSuite {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            messaging: MessagingService::new(config),
        }
    }

    async fn check_doctors(&self, report: &mut CheckReport) {
        report.section("1. Testing doctors table access...");

        let doctors = self.messaging
            .supabase()
            .from("doctors")
            .select("user_id, specialization")
            .limit(SAMPLE_LIMIT)
            .execute::<DoctorSummary>()
            .await;

        match doctors {
            Ok(doctors) => report.pass(&format!(
                "Successfully accessed doctors table. Found {} doctors",
                doctors.len()
            )),
            Err(e) => report.fail("Error accessing doctors table", e),
        }
    }

    async fn check_doctor_profiles(&self, report: &mut CheckReport) -> Option<Vec<Profile>> {
        report.section("2. Testing profiles table access...");

        let profiles = self.messaging
            .supabase()
            .from("profiles")
            .select("user_id, full_name, role")
            .eq("role", "doctor")
            .limit(SAMPLE_LIMIT)
            .execute::<Profile>()
            .await;

        match profiles {
            Ok(profiles) => {
                report.pass(&format!(
                    "Successfully accessed profiles table. Found {} doctor profiles",
                    profiles.len()
                ));
                Some(profiles)
            }
            Err(e) => {
                report.fail("Error accessing profiles table", e);
                None
            }
        }
    }

    async fn check_messages(&self, report: &mut CheckReport) -> Option<Vec<Value>> {
        report.section("3. Testing messages table access...");

        match self.messaging
            .list_messages("id, sender_id, receiver_id, message_text", SAMPLE_LIMIT)
            .await
        {
            Ok(messages) => {
                report.pass(&format!(
                    "Successfully accessed messages table. Found {} messages",
                    messages.len()
                ));
                Some(messages)
            }
            Err(e) => {
                report.fail("Error accessing messages table", e);
                None
            }
        }
    }

    async fn check_recent_conversations(&self, report: &mut CheckReport, profiles: Option<&[Profile]>) {
        report.section("4. Testing get_recent_conversations function...");

        let Some(user) = profiles.and_then(|p| p.first()) else {
            report.skip("get_recent_conversations", "no users found");
            return;
        };

        match self.messaging.recent_conversations(&user.user_id).await {
            Ok(conversations) => report.pass(&format!(
                "Successfully called get_recent_conversations. Found {} conversations",
                conversations.len()
            )),
            Err(e) => report.fail("Error calling get_recent_conversations", e),
        }
    }

    async fn check_conversation_messages(&self, report: &mut CheckReport, messages: Option<&[Value]>) {
        report.section("5. Testing get_conversation_messages function...");

        let participants = messages.map(participants_of).unwrap_or_default();
        let Some(first) = participants.first() else {
            report.skip("get_conversation_messages", "no messages found");
            return;
        };

        match self.messaging
            .conversation_messages(&first.sender_id, &first.receiver_id, Some(Page::default()))
            .await
        {
            Ok(rows) => report.pass(&format!(
                "Successfully called get_conversation_messages. Found {} messages",
                rows.len()
            )),
            Err(e) => report.fail("Error calling get_conversation_messages", e),
        }
    }
}

#[async_trait]
impl DiagnosticSuite for MessagingAccessSuite {
    fn name(&self) -> &'static str {
        "messaging-access"
    }

    fn title(&self) -> &'static str {
        "Testing messaging functions"
    }

    async fn run(&self, report: &mut CheckReport) -> Result<()> {
        self.check_doctors(report).await;
        let profiles = self.check_doctor_profiles(report).await;
        let messages = self.check_messages(report).await;

        self.check_recent_conversations(report, profiles.as_deref()).await;
        self.check_conversation_messages(report, messages.as_deref()).await;

        Ok(())
    }
}
