// =====================================================================================
// DIAGNOSTICS CELL - BACKEND SMOKE CHECKS
// =====================================================================================
//
// Sequential smoke checks against the hosted database:
// - Table reads for messages, profiles, doctors, patients and health submissions
// - Conversation and calendar RPCs
// - Conversation partner derivation from raw messages
//
// =====================================================================================

pub mod models;
pub mod services;

pub use models::{row_count, CheckRecord, CheckStatus, CheckReport};

pub use services::{
    run_suites, CalendarOptions, CalendarSuite, ConversationsSuite, DiagnosticSuite,
    MessagingAccessSuite, MessagingSchemaSuite,
};
