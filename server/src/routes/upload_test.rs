use axum::Router;
use axum::routing::post;
use reqwest::multipart::{Form, Part};

use super::*;
use crate::config::UploadConfig;
use crate::routes::api_routes;
use crate::upload::UploadClient;

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Worker that answers every upload with `status` and `body`, echoing the
/// `client` field into the key on success.
async fn spawn_worker(status: StatusCode) -> String {
    let app = Router::new().route(
        "/upload",
        post(move |mut multipart: Multipart| async move {
            let mut client = String::new();
            while let Ok(Some(field)) = multipart.next_field().await {
                if field.name() == Some("client") {
                    client = field.text().await.unwrap_or_default();
                }
            }
            let body = json!({ "key": format!("{client}/img"), "url": format!("https://cdn.example/{client}/img") });
            (status, body.to_string())
        }),
    );
    serve(app).await
}

async fn spawn_app(worker: String) -> String {
    let uploads =
        UploadClient::new(&UploadConfig { endpoint: worker, client: "dashboard".to_owned(), timeout_secs: 5 }).unwrap();
    serve(api_routes(AppState::new(uploads))).await
}

fn image_part() -> Part {
    Part::bytes(vec![1, 2, 3]).file_name("photo.jpg").mime_str("image/jpeg").unwrap()
}

async fn post_form(app: &str, form: Form) -> (StatusCode, serde_json::Value) {
    let resp = reqwest::Client::new().post(format!("{app}/api/upload")).multipart(form).send().await.unwrap();
    let status = StatusCode::from_u16(resp.status().as_u16()).unwrap();
    let body = resp.json::<serde_json::Value>().await.unwrap();
    (status, body)
}

#[tokio::test]
async fn relays_upload_and_returns_key_and_url() {
    let app = spawn_app(spawn_worker(StatusCode::OK).await).await;
    let form = Form::new().part("image", image_part()).text("client", "mobile");
    let (status, body) = post_form(&app, form).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "key": "mobile/img", "url": "https://cdn.example/mobile/img" }));
}

#[tokio::test]
async fn missing_client_uses_configured_default() {
    let app = spawn_app(spawn_worker(StatusCode::OK).await).await;
    let (status, body) = post_form(&app, Form::new().part("image", image_part())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["key"], "dashboard/img");
}

#[tokio::test]
async fn worker_failure_is_generic_bad_gateway() {
    let app = spawn_app(spawn_worker(StatusCode::INTERNAL_SERVER_ERROR).await).await;
    let form = Form::new().part("image", image_part()).text("client", "mobile");
    let (status, body) = post_form(&app, form).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, json!({ "error": "upload failed" }));
    assert!(body.get("key").is_none());
    assert!(body.get("url").is_none());
}

#[tokio::test]
async fn missing_image_is_bad_request() {
    let app = spawn_app(spawn_worker(StatusCode::OK).await).await;
    let (status, body) = post_form(&app, Form::new().text("client", "mobile")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "missing image" }));
}

#[tokio::test]
async fn empty_image_is_bad_request() {
    let app = spawn_app(spawn_worker(StatusCode::OK).await).await;
    let form = Form::new().part("image", Part::bytes(Vec::new()).file_name("empty.png"));
    let (status, body) = post_form(&app, form).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "empty image" }));
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = spawn_app(spawn_worker(StatusCode::OK).await).await;
    let resp = reqwest::get(format!("{app}/healthz")).await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
}
