use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

use calendar_cell::{CalendarQuery, CalendarService};
use shared_config::AppConfig;
use shared_models::Profile;

use crate::models::{pretty, row_count, CheckReport};
use crate::services::DiagnosticSuite;

#[derive(Debug, Clone)]
pub struct CalendarOptions {
    /// User to fetch the calendar for; the first profile is used when unset.
    pub user_id: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

pub struct CalendarSuite {
    calendar: CalendarService,
    options: CalendarOptions,
}

impl CalendarSuite {
    pub fn new(config: &AppConfig, options: CalendarOptions) -> Self {
        Self {
            calendar: CalendarService::new(config),
            options,
        }
    }

    async fn first_profile_id(&self) -> Result<Option<String>> {
        let profiles = self.calendar
            .supabase()
            .from("profiles")
            .select("user_id, full_name, role")
            .limit(1)
            .execute::<Profile>()
            .await?;
        Ok(profiles.into_iter().next().map(|p| p.user_id))
    }

    async fn resolve_user(&self, report: &mut CheckReport) -> Option<String> {
        if let Some(user_id) = &self.options.user_id {
            return Some(user_id.clone());
        }

        debug!("No user id given, looking up the first profile");
        match self.first_profile_id().await {
            Ok(Some(user_id)) => Some(user_id),
            Ok(None) => {
                report.skip("get_user_calendar_data", "no users found");
                None
            }
            Err(e) => {
                report.fail("Profile lookup error", e);
                None
            }
        }
    }
}

#[async_trait]
impl DiagnosticSuite for CalendarSuite {
    fn name(&self) -> &'static str {
        "calendar"
    }

    fn title(&self) -> &'static str {
        "Testing calendar function"
    }

    async fn run(&self, report: &mut CheckReport) -> Result<()> {
        let Some(user_id) = self.resolve_user(report).await else {
            return Ok(());
        };

        let query = match CalendarQuery::new(&user_id, self.options.start_date, self.options.end_date) {
            Ok(query) => query,
            Err(e) => {
                report.fail("Invalid calendar query", e);
                return Ok(());
            }
        };
        report.note(&format!(
            "Fetching calendar for {} from {} to {}",
            query.user_id,
            query.start_date_param(),
            query.end_date_param()
        ));

        match self.calendar.get_user_calendar_data(&query).await {
            Ok(data) => {
                report.pass(&format!("Database function returned {} rows", row_count(&data)));
                report.note(&format!("Database function result: {}", pretty(&data)));
            }
            Err(e) => report.fail("Database function error", e),
        }

        Ok(())
    }
}
