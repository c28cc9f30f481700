use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

use calendar_cell::{month_bounds, CalendarError, CalendarQuery};
use diagnostics_cell::{
    CalendarOptions, CalendarSuite, ConversationsSuite, DiagnosticSuite, MessagingAccessSuite,
    MessagingSchemaSuite, CheckReport,
};
use shared_config::AppConfig;

pub const EXIT_OK: u8 = 0;
pub const EXIT_FAILED_CHECKS: u8 = 1;
pub const EXIT_CONFIG: u8 = 2;

/// Smoke checks for the clinic messaging and calendar backend.
#[derive(Debug, Parser)]
#[command(name = "clinic-smoke", version, about)]
pub struct Cli {
    /// Suites to run, in order. Defaults to all of them.
    #[arg(value_enum)]
    pub suites: Vec<SuiteKind>,

    /// User for the calendar check; the first profile is used when omitted
    #[arg(long)]
    pub user_id: Option<String>,

    /// First day of the calendar range (YYYY-MM-DD), defaults to the start of this month
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Last day of the calendar range (YYYY-MM-DD), defaults to the end of this month
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    /// Exit 0 even when checks fail
    #[arg(long)]
    pub allow_failures: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SuiteKind {
    All,
    Calendar,
    Conversations,
    MessagingAccess,
    MessagingSchema,
}

const ALL_SUITES: [SuiteKind; 4] = [
    SuiteKind::Calendar,
    SuiteKind::Conversations,
    SuiteKind::MessagingAccess,
    SuiteKind::MessagingSchema,
];

impl Cli {
    /// Requested suites with `all` expanded and duplicates dropped.
    pub fn selected(&self) -> Vec<SuiteKind> {
        if self.suites.is_empty() || self.suites.contains(&SuiteKind::All) {
            return ALL_SUITES.to_vec();
        }

        let mut selected = Vec::new();
        for kind in &self.suites {
            if !selected.contains(kind) {
                selected.push(*kind);
            }
        }
        selected
    }

    pub fn calendar_options(&self, today: NaiveDate) -> Result<CalendarOptions, CalendarError> {
        let (month_start, month_end) = month_bounds(today)?;
        let start_date = self.start_date.unwrap_or(month_start);
        let end_date = self.end_date.unwrap_or(month_end);

        if let Some(user_id) = &self.user_id {
            CalendarQuery::new(user_id, start_date, end_date)?;
        } else if start_date > end_date {
            return Err(CalendarError::InvalidRange { start_date, end_date });
        }

        Ok(CalendarOptions {
            user_id: self.user_id.clone(),
            start_date,
            end_date,
        })
    }

    pub fn build_suites(
        &self,
        config: &AppConfig,
        today: NaiveDate,
    ) -> Result<Vec<Box<dyn DiagnosticSuite>>, CalendarError> {
        let mut suites: Vec<Box<dyn DiagnosticSuite>> = Vec::new();

        for kind in self.selected() {
            match kind {
                SuiteKind::Calendar => {
                    suites.push(Box::new(CalendarSuite::new(config, self.calendar_options(today)?)))
                }
                SuiteKind::Conversations => suites.push(Box::new(ConversationsSuite::new(config))),
                SuiteKind::MessagingAccess => suites.push(Box::new(MessagingAccessSuite::new(config))),
                SuiteKind::MessagingSchema => suites.push(Box::new(MessagingSchemaSuite::new(config))),
                SuiteKind::All => {}
            }
        }

        Ok(suites)
    }

    pub fn exit_status(&self, report: &CheckReport) -> u8 {
        if report.has_failures() && !self.allow_failures {
            EXIT_FAILED_CHECKS
        } else {
            EXIT_OK
        }
    }
}
