use crate::config::Config;
use actix_web::{HttpResponse, Responder, web};
use awc::Client;
use serde_json::{Value, json};
use tracing::error;

/// Assistant proxy
///
/// Forwards the JSON body to the configured upstream with the server-held
/// bearer credential injected; the upstream's status and body come back
/// verbatim. Unrelated to the attendance core.
#[utoipa::path(
    post,
    path = "/api/v1/assistant",
    request_body = Object,
    responses(
        (status = 200, description = "Upstream response, passed through"),
        (status = 500, description = "Upstream not configured or unreachable", body = Object, example = json!({
            "error": "Proxy failed"
        }))
    ),
    tag = "Assistant"
)]
pub async fn proxy(config: web::Data<Config>, body: web::Json<Value>) -> impl Responder {
    let (Some(upstream), Some(api_key)) = (
        config.assistant_upstream_url.as_deref(),
        config.assistant_api_key.as_deref(),
    ) else {
        return HttpResponse::InternalServerError()
            .json(json!({ "error": "Server missing assistant upstream configuration" }));
    };

    let mut response = match Client::default()
        .post(upstream)
        .insert_header(("Authorization", format!("Bearer {api_key}")))
        .send_json(&*body)
        .await
    {
        Ok(response) => response,
        Err(e) => {
            error!(error = %e, "Assistant proxy request failed");
            return HttpResponse::InternalServerError().json(json!({ "error": "Proxy failed" }));
        }
    };

    match response.body().await {
        Ok(bytes) => HttpResponse::build(response.status())
            .content_type("application/json")
            .body(bytes),
        Err(e) => {
            error!(error = %e, "Failed to read assistant upstream body");
            HttpResponse::InternalServerError().json(json!({ "error": "Proxy failed" }))
        }
    }
}
