use super::types::{ApiError, GenerateRequest, GenerateResponse};
use crate::ai::mime::detect_image_mime;
use crate::models::Style;
use crate::pipeline::HaikuPipeline;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, Json};
use base64::Engine as _;
use serde_json::{json, Value};
use std::sync::Arc;

const INDEX_TEMPLATE: &str = include_str!("../../assets/index.html");

pub type SharedPipeline = Arc<HaikuPipeline>;

pub async fn health_check() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

pub async fn index() -> Html<String> {
    Html(render_index())
}

fn render_index() -> String {
    let options: String = Style::ALL
        .iter()
        .map(|style| {
            let selected = if *style == Style::default() {
                " selected"
            } else {
                ""
            };
            format!(
                "<option value=\"{0}\"{1}>{0}</option>",
                style.label(),
                selected
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ");
    INDEX_TEMPLATE.replace("{{style_options}}", &options)
}

pub async fn generate(
    State(pipeline): State<SharedPipeline>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<ApiError>)> {
    if req.prompt.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::new("prompt must not be empty")),
        ));
    }

    match pipeline.run(&req.prompt, req.style).await {
        Ok(generation) => {
            let mime = detect_image_mime(&generation.image);
            let encoded = base64::engine::general_purpose::STANDARD.encode(&generation.image);
            Ok(Json(GenerateResponse {
                haiku: generation.haiku,
                image: format!("data:{};base64,{}", mime, encoded),
            }))
        }
        Err(e) => Err((
            StatusCode::BAD_GATEWAY,
            Json(ApiError {
                error: e.to_string(),
                stage: Some(e.stage().to_string()),
                haiku: e.haiku().map(str::to_string),
            }),
        )),
    }
}
