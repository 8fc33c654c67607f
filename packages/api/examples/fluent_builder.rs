//! Fluent builder usage against a local echo server

use std::net::SocketAddr;

use axum::Router;
use axum::body::Bytes;
use axum::http::HeaderMap;
use axum::routing::post;
use courier::{ClientExt, HttpClient};
use http_body_util::BodyExt;

async fn echo(headers: HeaderMap, body: Bytes) -> String {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");
    format!("content-type: {content_type}\n{}", String::from_utf8_lossy(&body))
}

async fn start_server() -> Result<SocketAddr, Box<dyn std::error::Error>> {
    let app = Router::new().route("/echo", post(echo));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, app).await {
            eprintln!("server stopped: {err}");
        }
    });
    Ok(addr)
}

async fn print_response(label: &str, response: courier::HttpResponse) -> Result<(), Box<dyn std::error::Error>> {
    let status = response.status();
    let body = response.into_body().collect().await?.to_bytes();
    println!("== {label} ({status})\n{}\n", String::from_utf8_lossy(&body));
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let addr = start_server().await?;
    let url = format!("http://{addr}/echo");
    let client = HttpClient::builder().user_agent("courier-example/0.1").build()?;

    // JSON body with bearer auth
    let response = client
        .post(&url)?
        .debug()
        .bearer_auth("example-token")?
        .json(&serde_json::json!({"message": "hello", "data": ["a", "b"]}))?
        .timeout_millis(5_000)?
        .send()
        .await?;
    print_response("json", response).await?;

    // URL-encoded form
    let response = client
        .post(&url)?
        .encoded_form([("user", "ada lovelace"), ("lang", "en")])
        .send()
        .await?;
    print_response("urlencoded form", response).await?;

    // Multipart form with basic auth
    let response = client
        .post(&url)?
        .basic_auth("ada", "secret")?
        .form_field("name", "Ada")?
        .form_field("role", "analyst")?
        .send()
        .await?;
    print_response("multipart form", response).await?;

    let stats = client.stats();
    println!("sent {} requests, {} succeeded", stats.requests_total, stats.requests_successful);
    Ok(())
}
