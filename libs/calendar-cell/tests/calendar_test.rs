use assert_matches::assert_matches;
use chrono::NaiveDate;
use serde_json::json;
use wiremock::{MockServer, Mock, ResponseTemplate};
use wiremock::matchers::{body_json, method, path};

use calendar_cell::{CalendarQuery, CalendarService};
use shared_models::AppError;
use shared_utils::test_utils::{MockSupabaseResponses, TestConfig, TestUser};

fn july(user_id: &str) -> CalendarQuery {
    CalendarQuery::month_of(user_id, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()).unwrap()
}

#[tokio::test]
async fn test_calendar_rpc_arguments() {
    let mock_server = MockServer::start().await;
    let doctor = TestUser::doctor("Dr. Aoife Byrne");

    Mock::given(method("POST"))
        .and(path("/rest/v1/rpc/get_user_calendar_data"))
        .and(body_json(json!({
            "p_user_id": doctor.id,
            "p_start_date": "2025-07-01",
            "p_end_date": "2025-07-31"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            MockSupabaseResponses::calendar_response(&doctor.id),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = CalendarService::new(&TestConfig::with_url(&mock_server.uri()).to_app_config());
    let data = service.get_user_calendar_data(&july(&doctor.id)).await.unwrap();

    assert_eq!(data["appointments"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_calendar_invalid_uuid_is_bad_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/rpc/get_user_calendar_data"))
        .respond_with(ResponseTemplate::new(400).set_body_json(
            MockSupabaseResponses::error_response(
                "invalid input syntax for type uuid: \"test-user-id\"",
                "22P02",
            ),
        ))
        .mount(&mock_server)
        .await;

    let service = CalendarService::new(&TestConfig::with_url(&mock_server.uri()).to_app_config());
    let err = service
        .get_user_calendar_data(&july("test-user-id"))
        .await
        .unwrap_err();

    assert_matches!(
        err.downcast_ref::<AppError>(),
        Some(AppError::BadRequest(msg)) if msg.contains("invalid input syntax")
    );
}

#[tokio::test]
async fn test_profile_lookup_shares_service_client() {
    let mock_server = MockServer::start().await;
    let doctor = TestUser::doctor("Dr. Aoife Byrne");

    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([doctor.profile_row()])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = CalendarService::new(&TestConfig::with_url(&mock_server.uri()).to_app_config());
    let rows = service
        .supabase()
        .from("profiles")
        .limit(1)
        .execute::<serde_json::Value>()
        .await
        .unwrap();

    assert_eq!(rows[0]["user_id"], doctor.id.as_str());
}
