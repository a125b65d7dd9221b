// tests/integration_tests.rs
use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use async_trait::async_trait;
use coding_party::api::handlers::SESSION_COOKIE;
use coding_party::api::{AppState, configure_routes};
use coding_party::assets::configure_assets;
use coding_party::backend::DataService;
use coding_party::config::{AppConfig, FileConfig};
use coding_party::errors::Result;
use coding_party::fetch::SystemClock;
use coding_party::form::FILL_ALL_FIELDS;
use coding_party::models::{Envelope, SubmissionPayload};
use coding_party::submission::SUBMITTING;
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

const BOUNDARY: &str = "----partyboundary";

struct FakeBackend {
    gets: AtomicUsize,
    posts: Mutex<Vec<Value>>,
    top_students: Envelope,
    post_reply: Envelope,
}

impl FakeBackend {
    fn new(top_students: Value, post_reply: Value) -> Arc<Self> {
        Arc::new(Self {
            gets: AtomicUsize::new(0),
            posts: Mutex::new(Vec::new()),
            top_students: Envelope::from_value(top_students),
            post_reply: Envelope::from_value(post_reply),
        })
    }

    fn healthy() -> Arc<Self> {
        Self::new(
            json!({"status": "success", "data": [
                {"student": "Kim", "count": 3},
                {"student": "Lee", "count": 3},
                {"student": "Park", "count": 1}
            ]}),
            json!({"status": "success", "message": "Thanks for taking part!"}),
        )
    }
}

#[async_trait]
impl DataService for FakeBackend {
    async fn get(&self, action: &str) -> Result<Envelope> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        Ok(match action {
            "top_students" => self.top_students.clone(),
            "class_ranking" => Envelope::from_value(json!({
                "status": "success",
                "data": [["class", "count"], ["1-1", "5"], ["2-3", "9"]]
            })),
            other => Envelope::from_value(json!({"status": "error", "message": format!("unknown action {}", other)})),
        })
    }

    async fn post(&self, payload: &SubmissionPayload) -> Result<Envelope> {
        self.posts
            .lock()
            .unwrap()
            .push(serde_json::to_value(payload).unwrap());
        Ok(self.post_reply.clone())
    }
}

fn state_with(backend: Arc<FakeBackend>, env: &[(&str, &str)]) -> AppState {
    let config = AppConfig::resolve(FileConfig::default(), |key| {
        if key == "PARTY_API_URL" {
            return Some("https://backend.test/exec".to_string());
        }
        env.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    })
    .unwrap();
    AppState::with_service(config, backend, Arc::new(SystemClock))
}

fn state_for(backend: Arc<FakeBackend>) -> AppState {
    state_with(backend, &[])
}

macro_rules! app {
    (state: $state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(configure_routes)
                .configure(configure_assets),
        )
        .await
    };
    ($backend:expr) => {
        app!(state: state_for($backend))
    };
}

fn session_cookie(resp: &ServiceResponse) -> Cookie<'static> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.into_owned())
        .expect("session cookie")
}

async fn body_text(resp: ServiceResponse) -> String {
    String::from_utf8(test::read_body(resp).await.to_vec()).unwrap()
}

fn multipart(fields: &[(&str, &str)], file: Option<(&str, &str, &[u8])>) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, mime, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"attachment\"; filename=\"{file_name}\"\r\nContent-Type: {mime}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}

fn complete_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("grade", "3"),
        ("class_value", "2"),
        ("num", "17"),
        ("name", "Kim"),
        ("mission", "체셔의 퀴즈"),
    ]
}

#[actix_web::test]
async fn test_page_renders_rankings_and_chart() {
    let backend = FakeBackend::healthy();
    let app = app!(backend.clone());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;

    assert_eq!(html.matches("data-rank=").count(), 3);
    let kim = html.find("Kim").unwrap();
    let lee = html.find("Lee").unwrap();
    let park = html.find("Park").unwrap();
    assert!(kim < lee && lee < park);
    assert!(html.contains("class-chart"));
    assert!(html.contains("mission-form"));
}

#[actix_web::test]
async fn test_same_session_reads_from_cache() {
    let backend = FakeBackend::healthy();
    let app = app!(backend.clone());

    let first = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let cookie = session_cookie(&first);
    assert_eq!(backend.gets.load(Ordering::SeqCst), 2);

    let req = test::TestRequest::get().uri("/").cookie(cookie).to_request();
    let second = test::call_service(&app, req).await;
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(backend.gets.load(Ordering::SeqCst), 2);

    test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(backend.gets.load(Ordering::SeqCst), 4);
}

#[actix_web::test]
async fn test_broken_rankings_do_not_break_the_page() {
    let backend = FakeBackend::new(
        json!({"status": "failure", "message": "sheet missing"}),
        json!({"status": "success", "message": "ok"}),
    );
    let app = app!(backend);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;

    assert!(html.contains("Could not load the rankings: sheet missing"));
    assert!(html.contains("class-chart"));
    assert!(html.contains("mission-form"));
}

#[actix_web::test]
async fn test_empty_leaderboard_shows_empty_state() {
    let backend = FakeBackend::new(
        json!({"status": "success", "data": []}),
        json!({"status": "success", "message": "ok"}),
    );
    let app = app!(backend);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let html = body_text(resp).await;

    assert!(html.contains("Nobody has taken part yet"));
    assert_eq!(html.matches("data-rank=").count(), 0);
}

#[actix_web::test]
async fn test_incomplete_form_is_not_submitted() {
    let backend = FakeBackend::healthy();
    let app = app!(backend.clone());

    let mut fields = complete_fields();
    fields.retain(|(name, _)| *name != "name");
    let (content_type, body) = multipart(&fields, Some(("proof.png", "image/png", &b"\x89PNG"[..])));

    let req = test::TestRequest::post()
        .uri("/submit")
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(body)
        .to_request();
    let html = body_text(test::call_service(&app, req).await).await;

    assert!(backend.posts.lock().unwrap().is_empty());
    assert_eq!(html.matches(FILL_ALL_FIELDS).count(), 1);
    assert!(html.contains(r#"<option value="17" selected>17</option>"#));
}

#[actix_web::test]
async fn test_missing_attachment_is_not_submitted() {
    let backend = FakeBackend::healthy();
    let app = app!(backend.clone());

    let (content_type, body) = multipart(&complete_fields(), None);
    let req = test::TestRequest::post()
        .uri("/submit")
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(body)
        .to_request();
    let html = body_text(test::call_service(&app, req).await).await;

    assert!(backend.posts.lock().unwrap().is_empty());
    assert!(html.contains(FILL_ALL_FIELDS));
}

#[actix_web::test]
async fn test_successful_submission_resets_form_and_refreshes_data() {
    let backend = FakeBackend::healthy();
    let app = app!(backend.clone());

    let first = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let cookie = session_cookie(&first);
    assert_eq!(backend.gets.load(Ordering::SeqCst), 2);

    let (content_type, body) = multipart(&complete_fields(), Some(("proof.png", "image/png", &b"hello"[..])));
    let req = test::TestRequest::post()
        .uri("/submit")
        .cookie(cookie)
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(body)
        .to_request();
    let html = body_text(test::call_service(&app, req).await).await;

    assert!(html.contains("✅ Thanks for taking part!"));
    assert!(!html.contains(&format!(">{}<", SUBMITTING)));
    assert_eq!(backend.gets.load(Ordering::SeqCst), 4);
    assert!(!html.contains(r#"value="Kim""#));

    let posts = backend.posts.lock().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["grade"], json!(3));
    assert_eq!(posts[0]["mission"], json!("체셔의 퀴즈"));
    assert_eq!(posts[0]["fileDataUrl"], json!("data:image/png;base64,aGVsbG8="));
}

#[actix_web::test]
async fn test_refused_submission_keeps_form() {
    let backend = FakeBackend::new(
        json!({"status": "success", "data": []}),
        json!({"status": "error", "message": "already submitted"}),
    );
    let app = app!(backend.clone());

    let (content_type, body) = multipart(&complete_fields(), Some(("proof.jpg", "image/jpeg", &b"\xff\xd8"[..])));
    let req = test::TestRequest::post()
        .uri("/submit")
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(body)
        .to_request();
    let html = body_text(test::call_service(&app, req).await).await;

    assert!(html.contains("❌ Submission failed: already submitted"));
    assert!(html.contains(r#"value="Kim""#));
}

#[actix_web::test]
async fn test_oversized_upload_keeps_typed_fields() {
    let backend = FakeBackend::healthy();
    let app = app!(state: state_with(backend.clone(), &[("PARTY_MAX_UPLOAD_BYTES", "300")]));

    let image = vec![0u8; 1000];
    let (content_type, body) = multipart(&complete_fields(), Some(("proof.png", "image/png", &image[..])));
    let req = test::TestRequest::post()
        .uri("/submit")
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(body)
        .to_request();
    let html = body_text(test::call_service(&app, req).await).await;

    assert!(backend.posts.lock().unwrap().is_empty());
    assert!(html.contains("The upload is larger than 300 bytes."));
    assert!(html.contains(r#"value="Kim""#));
    assert!(html.contains(r#"<option value="17" selected>17</option>"#));
}

#[actix_web::test]
async fn test_unknown_session_cookie_is_replaced() {
    let app = app!(FakeBackend::healthy());
    let forged = "0b7e2c55-8a8f-4e61-9b3c-2f4a6d1e9c10";

    let req = test::TestRequest::get()
        .uri("/")
        .cookie(Cookie::new(SESSION_COOKIE, forged))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_ne!(session_cookie(&resp).value(), forged);
}

#[actix_web::test]
async fn test_class_options_endpoint() {
    let app = app!(FakeBackend::healthy());

    let req = test::TestRequest::get()
        .uri("/api/v1/class-options?grade=1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["max_class"], json!(6));
    assert_eq!(body["options"].as_array().unwrap().len(), 6);

    let req = test::TestRequest::get().uri("/api/v1/class-options").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["max_class"], json!(10));
}

#[actix_web::test]
async fn test_health_and_assets() {
    let app = app!(FakeBackend::healthy());

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], json!("healthy"));

    let req = test::TestRequest::get().uri("/static/app.js").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/static/missing.js").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
