use chrono::{Duration, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_config::AppConfig;

/// Address nothing listens on, for exercising connection failures.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

pub struct TestConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_anon_key: "test-anon-key".to_string(),
        }
    }
}

impl TestConfig {
    pub fn with_url(url: &str) -> Self {
        Self {
            supabase_url: url.to_string(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            supabase_url: self.supabase_url.clone(),
            supabase_anon_key: self.supabase_anon_key.clone(),
        }
    }
}

pub struct TestUser {
    pub id: String,
    pub full_name: String,
    pub role: String,
}

impl TestUser {
    pub fn new(full_name: &str, role: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            full_name: full_name.to_string(),
            role: role.to_string(),
        }
    }

    pub fn doctor(full_name: &str) -> Self {
        Self::new(full_name, "doctor")
    }

    pub fn patient(full_name: &str) -> Self {
        Self::new(full_name, "patient")
    }

    pub fn profile_row(&self) -> Value {
        MockSupabaseResponses::profile_response(&self.id, &self.full_name, &self.role)
    }
}

pub struct MockSupabaseResponses;

impl MockSupabaseResponses {
    pub fn profile_response(user_id: &str, full_name: &str, role: &str) -> Value {
        json!({
            "user_id": user_id,
            "full_name": full_name,
            "role": role
        })
    }

    pub fn doctor_response(user_id: &str) -> Value {
        json!({
            "user_id": user_id,
            "specialization": "General Practice"
        })
    }

    /// A `messages` row; `age_minutes` pushes `created_at` into the past.
    pub fn message_response(sender_id: &str, receiver_id: &str, age_minutes: i64) -> Value {
        json!({
            "id": Uuid::new_v4(),
            "sender_id": sender_id,
            "receiver_id": receiver_id,
            "message_text": "Your results are ready",
            "is_read": false,
            "created_at": (Utc::now() - Duration::minutes(age_minutes)).to_rfc3339()
        })
    }

    pub fn conversation_response(partner_id: &str, partner_name: &str) -> Value {
        json!({
            "other_user_id": partner_id,
            "other_user_name": partner_name,
            "last_message": "See you tomorrow",
            "last_message_time": Utc::now().to_rfc3339(),
            "unread_count": 1
        })
    }

    pub fn patient_response() -> Value {
        json!({
            "id": Uuid::new_v4(),
            "first_name": "Siobhan",
            "last_name": "Walsh",
            "created_at": "2024-01-01T00:00:00Z"
        })
    }

    pub fn health_submission_response(patient_id: &str) -> Value {
        json!({
            "id": Uuid::new_v4(),
            "patient_id": patient_id,
            "status": "pending",
            "created_at": "2024-01-01T00:00:00Z"
        })
    }

    pub fn calendar_response(user_id: &str) -> Value {
        json!({
            "user_id": user_id,
            "appointments": [
                { "date": "2025-07-14", "start_time": "10:00", "status": "scheduled" }
            ],
            "availability": []
        })
    }

    /// Error body in the shape PostgREST returns.
    pub fn error_response(message: &str, code: &str) -> Value {
        json!({
            "code": code,
            "details": null,
            "hint": null,
            "message": message
        })
    }
}
