use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use ai_chat_news::{
    ApiClient, AppError, ChatAction, Message, NewsAction, Provider, RequestStatus, StoreHandle,
    Timeframe, Usecase,
};
use ai_chat_news::api::ChatPayload;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::{Value, json};
use tokio::{net::TcpListener, sync::Notify};

#[derive(Clone, Default)]
struct MockServer {
    chat_requests: Arc<Mutex<Vec<Value>>>,
    news_fails: Arc<AtomicBool>,
    // "slow" chat messages signal `arrived` and then wait on `release`
    arrived: Arc<Notify>,
    release: Arc<Notify>,
}

async fn handle_chat(State(server): State<MockServer>, Json(body): Json<Value>) -> Response {
    server.chat_requests.lock().unwrap().push(body.clone());
    let message = body["message"].as_str().unwrap_or_default().to_string();

    if message == "fail" {
        return (StatusCode::INTERNAL_SERVER_ERROR, "model offline").into_response();
    }
    if message.starts_with("slow") {
        server.arrived.notify_one();
        server.release.notified().await;
    }

    Json(json!({ "content": format!("re: {message}"), "from_cache": false })).into_response()
}

async fn handle_news(State(server): State<MockServer>, Json(body): Json<Value>) -> Response {
    if server.news_fails.load(Ordering::SeqCst) {
        return (StatusCode::SERVICE_UNAVAILABLE, "search quota exceeded").into_response();
    }
    let timeframe = body["timeframe"].as_str().unwrap_or_default();
    Json(json!({
        "summary": format!("Summary for {timeframe}"),
        "saved_file": "AINews/weekly_summary.md",
    }))
    .into_response()
}

async fn spawn_server() -> (String, MockServer) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let server = MockServer::default();
    let app = Router::new()
        .route("/api/chat", post(handle_chat))
        .route("/api/news/summary", post(handle_news))
        .with_state(server.clone());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}/api"), server)
}

async fn spawn_store() -> (StoreHandle, MockServer) {
    let (base, server) = spawn_server().await;
    (StoreHandle::new(ApiClient::new(&base)), server)
}

#[tokio::test]
async fn send_message_appends_user_then_assistant() {
    let (store, server) = spawn_store().await;

    let status = store.send_message("hi").await;
    assert!(matches!(status, RequestStatus::Succeeded(ref reply) if reply.content == "re: hi"));

    let state = store.snapshot();
    assert_eq!(
        state.chat.messages(),
        &[Message::user("hi"), Message::assistant("re: hi")]
    );
    assert!(!state.chat.loading());
    assert_eq!(state.chat.error(), None);

    let requests = server.chat_requests.lock().unwrap().clone();
    assert_eq!(
        requests,
        vec![json!({
            "provider": "Groq",
            "model": "llama3-8b-8192",
            "usecase": "Basic Chatbot",
            "message": "hi",
        })]
    );
}

#[tokio::test]
async fn send_uses_current_selection() {
    let (store, server) = spawn_store().await;
    store.dispatch(ChatAction::SetProvider(Provider::Ollama));
    store.dispatch(ChatAction::SetModel("mistral:7b".into()));
    store.dispatch(ChatAction::SetUsecase(Usecase::ChatbotWithWeb));

    store.send_message("latest llm news?").await;

    let requests = server.chat_requests.lock().unwrap().clone();
    assert_eq!(requests[0]["provider"], "Ollama");
    assert_eq!(requests[0]["model"], "mistral:7b");
    assert_eq!(requests[0]["usecase"], "Chatbot With Web");
}

#[tokio::test]
async fn user_message_is_visible_while_pending() {
    let (store, server) = spawn_store().await;

    let pending = tokio::spawn({
        let store = store.clone();
        async move { store.send_message("slow hi").await }
    });
    server.arrived.notified().await;

    let state = store.snapshot();
    assert_eq!(state.chat.messages(), &[Message::user("slow hi")]);
    assert!(state.chat.loading());

    server.release.notify_one();
    pending.await.expect("send task");
    assert!(!store.select(|s| s.chat.loading()));
    assert_eq!(
        store.select(|s| s.chat.messages().last().cloned()),
        Some(Message::assistant("re: slow hi"))
    );
}

#[tokio::test]
async fn failed_send_keeps_user_message() {
    let (store, _server) = spawn_store().await;

    let status = store.send_message("fail").await;
    assert_eq!(status, RequestStatus::Failed("model offline".to_string()));

    let state = store.snapshot();
    assert!(!state.chat.loading());
    assert_eq!(state.chat.error(), Some("model offline"));
    assert_eq!(state.chat.messages(), &[Message::user("fail")]);
}

#[tokio::test]
async fn unreachable_server_is_recorded_as_error() {
    let store = StoreHandle::new(ApiClient::new("http://127.0.0.1:1/api"));

    let status = store.send_message("hi").await;
    assert!(matches!(status, RequestStatus::Failed(ref message) if !message.is_empty()));

    let state = store.snapshot();
    assert!(!state.chat.loading());
    assert!(state.chat.error().is_some());
    assert_eq!(state.chat.messages(), &[Message::user("hi")]);
}

#[tokio::test]
async fn news_failure_keeps_last_summary() {
    let (store, server) = spawn_store().await;
    store.dispatch(NewsAction::SetTimeframe(Timeframe::LastWeek));

    store.fetch_news().await;
    let state = store.snapshot();
    assert_eq!(state.news.summary.as_deref(), Some("Summary for last week"));
    assert_eq!(state.news.saved_file.as_deref(), Some("AINews/weekly_summary.md"));
    assert!(!state.news.from_cache);
    assert!(!state.news.loading());

    server.news_fails.store(true, Ordering::SeqCst);
    let status = store.fetch_news().await;
    assert_eq!(
        status,
        RequestStatus::Failed("search quota exceeded".to_string())
    );

    let state = store.snapshot();
    assert_eq!(state.news.summary.as_deref(), Some("Summary for last week"));
    assert_eq!(state.news.error(), Some("search quota exceeded"));
    assert!(!state.news.loading());
}

#[tokio::test]
async fn overlapping_sends_settle_in_completion_order() {
    let (store, server) = spawn_store().await;

    let slow = tokio::spawn({
        let store = store.clone();
        async move { store.send_message("slow one").await }
    });
    server.arrived.notified().await;

    store.send_message("fast one").await;

    // The slow request is still outstanding, yet the fast settlement already
    // cleared the loading flag.
    let state = store.snapshot();
    assert!(!state.chat.loading());
    assert_eq!(
        state.chat.messages(),
        &[
            Message::user("slow one"),
            Message::user("fast one"),
            Message::assistant("re: fast one"),
        ]
    );

    server.release.notify_one();
    slow.await.expect("slow task");

    let state = store.snapshot();
    assert!(!state.chat.loading());
    assert_eq!(
        state.chat.messages(),
        &[
            Message::user("slow one"),
            Message::user("fast one"),
            Message::assistant("re: fast one"),
            Message::assistant("re: slow one"),
        ]
    );
}

#[tokio::test]
async fn client_surfaces_status_and_body() {
    let (base, _server) = spawn_server().await;
    let client = ApiClient::new(&base);
    let payload = ChatPayload {
        provider: Provider::Groq,
        model: "llama3-8b-8192".into(),
        usecase: Usecase::BasicChatbot,
        message: "fail".into(),
    };

    let err = client.chat(&payload).await.unwrap_err();
    match &err {
        AppError::StatusError { status, body } => {
            assert_eq!(*status, 500);
            assert_eq!(body, "model offline");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.to_string(), "model offline");
}
