//! Demo consumer: assembles one hardcoded JSON response and prints its wire
//! form to stdout.
//!
//! # Design
//! A thin stand-in for a transport layer, exercising only the public
//! accessor contract: status line from `protocol_version`/`status_code`/
//! `reason_phrase`, header lines from `headers()` iteration (stored casing,
//! multi-values joined with `,`), body via `contents()`. `Content-Length` is
//! computed here at the boundary; the core never computes it.

use chrono::Utc;
use http_message::{BodyStream, HeaderMap, Message, Response};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // RFC 7231 IMF-fixdate.
    let now = Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string();

    let body = serde_json::json!({
        "to": "Pillr",
        "subject": "Hello Pillr",
        "message": "Here is my submission.",
        "from": "Sami Sayegh",
        "timeSent": now,
    })
    .to_string();

    let mut headers = HeaderMap::new();
    headers.set("Date", now.clone());
    headers.set("Server", "http-message-demo");
    headers.set("Last-Modified", now);
    headers.set("Content-Length", body.len().to_string());
    headers.set("Content-Type", "application/json");

    let response = Response::new("1.1", 200, "OK", headers, BodyStream::from_string(body))?;
    tracing::debug!(
        status = response.status_code(),
        headers = response.headers().len(),
        "response assembled"
    );

    println!(
        "HTTP/{} {} {}",
        response.protocol_version(),
        response.status_code(),
        response.reason_phrase()
    );
    for (name, values) in response.headers().iter() {
        println!("{name}: {}", values.join(","));
    }
    println!();
    print!("{}", response.body().contents()?);

    Ok(())
}
