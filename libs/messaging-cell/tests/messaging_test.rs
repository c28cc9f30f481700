use serde_json::{json, Value};
use wiremock::{MockServer, Mock, ResponseTemplate};
use wiremock::matchers::{body_json, method, path, query_param};

use messaging_cell::{conversation_partners, participants_of, MessagingService, Page};
use shared_utils::test_utils::{MockSupabaseResponses, TestConfig, TestUser};

fn service_for(mock_server: &MockServer) -> MessagingService {
    MessagingService::new(&TestConfig::with_url(&mock_server.uri()).to_app_config())
}

#[tokio::test]
async fn test_user_messages_yield_partners() {
    let mock_server = MockServer::start().await;
    let patient = TestUser::patient("Siobhan Walsh");
    let doctor = TestUser::doctor("Dr. Aoife Byrne");
    let nurse = TestUser::new("Ciara Nolan", "nurse");

    Mock::given(method("GET"))
        .and(path("/rest/v1/messages"))
        .and(query_param("order", "created_at.desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockSupabaseResponses::message_response(&patient.id, &doctor.id, 1),
            MockSupabaseResponses::message_response(&nurse.id, &patient.id, 5),
            MockSupabaseResponses::message_response(&doctor.id, &patient.id, 10),
        ])))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let rows = service.list_user_messages(&patient.id).await.unwrap();

    assert_eq!(rows.len(), 3);

    let partners = conversation_partners(&patient.id, &participants_of(&rows));
    assert_eq!(partners, vec![doctor.id.clone(), nurse.id.clone()]);
}

#[tokio::test]
async fn test_list_messages_selects_columns() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/messages"))
        .and(query_param("select", "id,sender_id,receiver_id,message_text"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let rows = service
        .list_messages("id, sender_id, receiver_id, message_text", 5)
        .await
        .unwrap();

    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_conversation_messages_with_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/rpc/get_conversation_messages"))
        .and(body_json(json!({
            "p_user1_id": "A",
            "p_user2_id": "B",
            "p_limit": 10,
            "p_offset": 0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockSupabaseResponses::message_response("A", "B", 0)
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let rows = service
        .conversation_messages("A", "B", Some(Page::default()))
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn test_conversation_messages_without_page_omits_paging() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/rpc/get_conversation_messages"))
        .and(body_json(json!({ "p_user1_id": "A", "p_user2_id": "B" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let rows = service.conversation_messages("A", "B", None).await.unwrap();

    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_recent_conversations_null_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/rpc/get_recent_conversations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Null))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let rows = service.recent_conversations("A").await.unwrap();

    assert!(rows.is_empty());
}
