use serde::{Deserialize, Serialize};

/// Row of the `profiles` table, limited to the columns the suites select.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    pub full_name: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorSummary {
    pub user_id: String,
    pub specialization: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_ignores_extra_columns() {
        let profile: Profile = serde_json::from_value(json!({
            "user_id": "d5cfacac-cb98-46f0-bde0-41d8f6a2424c",
            "full_name": "Dr. Aoife Byrne",
            "role": "doctor",
            "avatar_url": null
        }))
        .unwrap();

        assert_eq!(profile.role.as_deref(), Some("doctor"));
        assert_eq!(profile.full_name.as_deref(), Some("Dr. Aoife Byrne"));
    }

    #[test]
    fn test_profile_without_role() {
        let profile: Profile = serde_json::from_value(json!({
            "user_id": "a7b85492-b672-43ad-989a-1acef574a942",
            "full_name": null
        }))
        .unwrap();

        assert!(profile.role.is_none());
    }
}
