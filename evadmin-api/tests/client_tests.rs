use evadmin_api::endpoints::Endpoint;
use evadmin_api::{
    Client, Draft, FieldValue, PendingUpload, RecordId, Request, RequestError, ResourceClient,
    ResourceKind,
};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serves exactly one HTTP exchange and hands back the raw request text.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];

        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
            if request_complete(&raw) {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        String::from_utf8_lossy(&raw).into_owned()
    });

    (format!("http://{addr}/api"), handle)
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text[..header_end]
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    raw.len() >= header_end + 4 + content_length
}

fn client(base_url: &str) -> Client {
    Client::new(base_url, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_list_records() {
    let (base_url, server) =
        serve_once("200 OK", r#"[{"id":1,"title":"HQ"},{"id":2,"title":"Annex"}]"#).await;

    let records = client(&base_url).list(ResourceKind::Locations).await.unwrap();
    let request = server.await.unwrap();

    assert!(request.starts_with("GET /api/locations/ HTTP/1.1"));
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].id(), "2");
    assert_eq!(records[1].field("title"), Some(&FieldValue::Text("Annex".into())));
}

#[tokio::test]
async fn test_create_sends_json_without_uploads() {
    let (base_url, server) = serve_once("201 Created", r#"{"id":9,"title":"Launch"}"#).await;

    let draft = Draft::new()
        .with_field("title", "Launch")
        .with_field("reminder", true);
    let record = client(&base_url)
        .create(ResourceKind::Events, &draft)
        .await
        .unwrap();
    let request = server.await.unwrap();

    assert!(request.starts_with("POST /api/events/ HTTP/1.1"));
    assert!(request.to_ascii_lowercase().contains("content-type: application/json"));
    assert!(request.contains(r#""title":"Launch""#));
    assert!(request.contains(r#""reminder":true"#));
    assert_eq!(record.id(), &RecordId::from(9));
}

#[tokio::test]
async fn test_update_with_upload_sends_multipart() {
    let dir = std::env::temp_dir().join(format!("evadmin-upload-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let photo = dir.join("portrait.png");
    std::fs::write(&photo, b"not really a png").unwrap();

    let (base_url, server) = serve_once("200 OK", r#"{"id":7,"full_name":"Ada"}"#).await;

    let draft = Draft::new()
        .with_field("full_name", "Ada")
        .with_field("photo", PendingUpload::new(&photo));
    let record = client(&base_url)
        .update(ResourceKind::Contacts, &RecordId::from(7), &draft)
        .await
        .unwrap();
    let request = server.await.unwrap();

    assert!(request.starts_with("PUT /api/contacts/7/ HTTP/1.1"));
    assert!(request.to_ascii_lowercase().contains("content-type: multipart/form-data"));
    assert!(request.contains(r#"name="full_name""#));
    assert!(request.contains(r#"filename="portrait.png""#));
    assert!(request.contains("image/png"));
    assert!(request.contains("not really a png"));
    assert_eq!(record.id(), "7");

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_delete_ignores_body() {
    let (base_url, server) = serve_once("200 OK", "").await;

    client(&base_url)
        .delete(ResourceKind::Events, &RecordId::from(3))
        .await
        .unwrap();
    let request = server.await.unwrap();

    assert!(request.starts_with("DELETE /api/events/3/ HTTP/1.1"));
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let (base_url, server) = serve_once("500 Internal Server Error", r#"{"detail":"boom"}"#).await;

    let err = client(&base_url)
        .list(ResourceKind::Events)
        .await
        .unwrap_err();
    server.await.unwrap();

    assert!(matches!(err, RequestError::Status { .. }));
    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
}

#[tokio::test]
async fn test_missing_attachment_is_reported() {
    let draft = Draft::new().with_field("photo", PendingUpload::new("/definitely/not/here.jpg"));

    // Fails before any connection is attempted.
    let err = client("http://127.0.0.1:9/api")
        .create(ResourceKind::Contacts, &draft)
        .await
        .unwrap_err();

    assert!(matches!(err, RequestError::Attachment { .. }));
}

#[test]
fn test_repositories_build_resource_paths() {
    assert_eq!(Request::events().kind(), ResourceKind::Events);
    assert_eq!(Request::locations().kind(), ResourceKind::Locations);
    assert_eq!(Request::contacts().kind(), ResourceKind::Contacts);

    assert_eq!(Request::events().list().endpoint(), "/events/");
    assert_eq!(
        Request::contacts()
            .update(RecordId::from(3), Draft::new())
            .endpoint(),
        "/contacts/3/"
    );
    assert_eq!(
        Request::locations().delete(RecordId::from("a1")).endpoint(),
        "/locations/a1/"
    );
}
