//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::{
        StatusCode,
        header::{CONTENT_LENGTH, CONTENT_TYPE},
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

/// The number of characters of a body that are logged at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Form fields whose values never appear in the logs.
const REDACTED_FIELDS: [&str; 1] = ["password"];

/// The largest request body the middleware reads into memory for logging.
///
/// Larger bodies are rejected with `413 Payload Too Large`. Multipart uploads
/// are never read by the middleware, their size limit is set per route.
pub const LOG_REQUEST_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] characters, it is
/// truncated and the full body is logged at the `debug` level. Password
/// fields in forms are redacted and file uploads are summarised by their
/// `Content-Length` and passed through unread.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();

    let content_type = parts
        .headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if content_type.starts_with("multipart/form-data") {
        let length = parts
            .headers
            .get(CONTENT_LENGTH)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("an unknown number of");
        log_body(
            "Received request",
            &format!("{parts:#?}"),
            &format!("<{length} bytes of multipart data>"),
        );

        let request = Request::from_parts(parts, body);
        return log_response(next.run(request).await).await;
    }

    let body = match axum::body::to_bytes(body, LOG_REQUEST_BODY_LIMIT).await {
        Ok(body) => body,
        Err(error) => {
            tracing::error!("Could not read request body: {error}");
            return StatusCode::PAYLOAD_TOO_LARGE.into_response();
        }
    };

    let display_text = if content_type.starts_with("application/x-www-form-urlencoded") {
        redact_form(&String::from_utf8_lossy(&body))
    } else {
        String::from_utf8_lossy(&body).into_owned()
    };
    log_body("Received request", &format!("{parts:#?}"), &display_text);

    let request = Request::from_parts(parts, Body::from(body));
    log_response(next.run(request).await).await
}

async fn log_response(response: Response) -> Response {
    let (parts, body) = response.into_parts();
    let body: Bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(body) => body,
        Err(error) => {
            tracing::error!("Could not read response body: {error}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    log_body(
        "Sending response",
        &format!("{parts:#?}"),
        &String::from_utf8_lossy(&body),
    );

    Response::from_parts(parts, Body::from(body))
}

/// Replace the values of [REDACTED_FIELDS] in a URL encoded form.
fn redact_form(form_text: &str) -> String {
    form_text
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((name, value)) if REDACTED_FIELDS.contains(&name) && !value.is_empty() => {
                format!("{name}=********")
            }
            _ => pair.to_owned(),
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn truncate(text: &str, max_chars: usize) -> Option<&str> {
    text.char_indices()
        .nth(max_chars)
        .map(|(byte_index, _)| &text[..byte_index])
}

fn log_body(message: &str, headers: &str, body: &str) {
    match truncate(body, LOG_BODY_LENGTH_LIMIT) {
        Some(truncated) => {
            tracing::info!("{message}: {headers}\nbody: {truncated}...");
            tracing::debug!("Full body: {body:?}");
        }
        None => tracing::info!("{message}: {headers}\nbody: {body:?}"),
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, http::StatusCode, middleware, routing::post};
    use axum_extra::extract::Form;
    use axum_test::TestServer;
    use serde::Deserialize;

    use super::{
        LOG_BODY_LENGTH_LIMIT, LOG_REQUEST_BODY_LIMIT, logging_middleware, redact_form, truncate,
    };

    #[test]
    fn redacts_password() {
        assert_eq!(
            redact_form("username=yeti&password=hunter2&email=a%40b.c"),
            "username=yeti&password=********&email=a%40b.c"
        );
    }

    #[test]
    fn leaves_empty_password_and_other_fields() {
        assert_eq!(
            redact_form("password=&old_password=x"),
            "password=&old_password=x"
        );
    }

    #[test]
    fn truncates_on_character_boundaries() {
        let text = "₹".repeat(LOG_BODY_LENGTH_LIMIT + 1);

        let truncated = truncate(&text, LOG_BODY_LENGTH_LIMIT).unwrap();

        assert_eq!(truncated.chars().count(), LOG_BODY_LENGTH_LIMIT);
        assert_eq!(truncate("short", LOG_BODY_LENGTH_LIMIT), None);
    }

    #[derive(Deserialize)]
    struct EchoForm {
        username: String,
        password: String,
    }

    #[tokio::test]
    async fn passes_request_body_through_unchanged() {
        let app = Router::new()
            .route(
                "/echo",
                post(|Form(form): Form<EchoForm>| async move {
                    format!("{}:{}", form.username, form.password)
                }),
            )
            .layer(middleware::from_fn(logging_middleware));
        let server = TestServer::new(app).expect("Could not create test server");

        let response = server
            .post("/echo")
            .form(&[("username", "yeti"), ("password", "hunter2")])
            .await;

        response.assert_status_ok();
        response.assert_text("yeti:hunter2");
    }

    #[tokio::test]
    async fn rejects_request_body_over_limit() {
        let app = Router::new()
            .route(
                "/echo",
                post(|body: String| async move { body.len().to_string() }),
            )
            .layer(middleware::from_fn(logging_middleware));
        let server = TestServer::new(app).expect("Could not create test server");

        let response = server
            .post("/echo")
            .text("a".repeat(LOG_REQUEST_BODY_LIMIT + 1))
            .await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    }
}
