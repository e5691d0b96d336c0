use helpdesk::core::exchange::{CONNECT_ERROR_ANSWER, SERVER_ERROR_ANSWER};
use helpdesk::core::state::QueryController;
use helpdesk::oneshot::{self, OneShot};
use helpdesk::service::{AnswerService, HttpAnswerService, ServiceError};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn service_for(server: &MockServer) -> HttpAnswerService {
    HttpAnswerService::new(&format!("{}/ask", server.uri())).unwrap()
}

/// Endpoint on a port nothing listens on anymore.
///
/// MockServer instances are pooled and keep listening after drop, so a
/// plain listener is bound and released instead.
async fn dead_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/ask")
}

// ============================================================================
// HttpAnswerService
// ============================================================================

#[tokio::test]
async fn test_ask_posts_question_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "question": "How can I reset my password?" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "answer": "Visit Settings > Security." })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let answer = service_for(&server)
        .ask("How can I reset my password?")
        .await
        .unwrap();

    assert_eq!(answer, "Visit Settings > Security.");
}

#[tokio::test]
async fn test_ask_non_success_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({ "detail": "System not properly initialized" })),
        )
        .mount(&server)
        .await;

    let result = service_for(&server).ask("vpn?").await;

    match result {
        Err(ServiceError::Rejected { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("System not properly initialized"));
        }
        other => panic!("Expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_ask_malformed_success_body_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy login</html>"))
        .mount(&server)
        .await;

    let result = service_for(&server).ask("vpn?").await;
    assert!(matches!(result, Err(ServiceError::Transport(_))));
}

#[tokio::test]
async fn test_ask_connection_refused_is_transport_error() {
    let service = HttpAnswerService::new(&dead_endpoint().await).unwrap();
    let result = service.ask("vpn?").await;
    assert!(matches!(result, Err(ServiceError::Transport(_))));
}

#[tokio::test]
async fn test_probe_reads_status_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "Smart Helpdesk Bot API is running" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let message = service_for(&server).probe().await.unwrap();
    assert_eq!(message, "Smart Helpdesk Bot API is running");
}

#[tokio::test]
async fn test_probe_down_service() {
    let service = HttpAnswerService::new(&dead_endpoint().await).unwrap();
    assert!(matches!(service.probe().await, Err(ServiceError::Transport(_))));
}

// ============================================================================
// QueryController against a real HTTP service
// ============================================================================

#[tokio::test]
async fn test_controller_success_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "answer": "Visit Settings > Security." })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let mut controller = QueryController::new();
    controller.update_question("How can I reset my password?");

    assert!(controller.submit(&service).await);
    assert_eq!(controller.answer(), "Visit Settings > Security.");
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn test_controller_sends_question_untrimmed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .and(body_json(json!({ "question": "  printer jammed\n" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let mut controller = QueryController::new();
    controller.update_question("  printer jammed\n");
    controller.submit(&service).await;

    assert_eq!(controller.answer(), "ok");
}

#[tokio::test]
async fn test_controller_server_rejection_path() {
    let server = MockServer::start().await;

    // Any non-success status gets the same message, body or not
    for status in [400u16, 404, 422, 500, 503] {
        server.reset().await;
        Mock::given(method("POST"))
            .and(path("/ask"))
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount(&server)
            .await;

        let service = service_for(&server);
        let mut controller = QueryController::new();
        controller.update_question("Why is my email slow?");
        controller.submit(&service).await;

        assert_eq!(controller.answer(), SERVER_ERROR_ANSWER, "status {status}");
        assert_eq!(controller.question(), "Why is my email slow?");
        assert!(!controller.is_busy());
    }
}

#[tokio::test]
async fn test_controller_transport_failure_path() {
    let service = HttpAnswerService::new(&dead_endpoint().await).unwrap();
    let mut controller = QueryController::new();
    controller.update_question("Where is the VPN client?");

    assert!(controller.submit(&service).await);
    assert_eq!(controller.answer(), CONNECT_ERROR_ANSWER);
    assert_eq!(controller.question(), "Where is the VPN client?");
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn test_controller_blank_question_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": "unused" })))
        .expect(0)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let mut controller = QueryController::new();
    controller.update_question("   ");

    assert!(!controller.submit(&service).await);
    assert_eq!(controller.answer(), "");
    assert_eq!(controller.question(), "   ");
}

// ============================================================================
// One-shot mode
// ============================================================================

#[tokio::test]
async fn test_oneshot_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({ "answer": "Based on our documentation:\n\nDownload the VPN client." }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let result = oneshot::ask(&service_for(&server), "vpn").await;
    assert_eq!(
        result,
        OneShot::Answered("Based on our documentation:\n\nDownload the VPN client.".to_string())
    );
    assert_eq!(result.exit_code(), 0);
}

#[tokio::test]
async fn test_oneshot_down_service() {
    let service = HttpAnswerService::new(&dead_endpoint().await).unwrap();
    let result = oneshot::ask(&service, "vpn").await;
    assert_eq!(result, OneShot::Failed(CONNECT_ERROR_ANSWER.to_string()));
    assert_eq!(result.exit_code(), 1);
}
