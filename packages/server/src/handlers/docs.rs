//! Interactive documentation: the Swagger UI page and the raw document.
//!
//! | Route | Response |
//! |-------|----------|
//! | `GET /` | redirect to `/api-docs` |
//! | `GET /api-docs` | Swagger UI HTML |
//! | `GET /api-docs/openapi.json` | the OpenAPI document as JSON |
//! | `GET /api-docs/openapi.yaml` | the same document as YAML |

use axum::{
    extract::State,
    http::header::CONTENT_TYPE,
    response::{Html, IntoResponse, Redirect},
    Json,
};
use hubspec_api::{document, DocOptions};
use serde_json::Value;

use super::AppState;

/// Stylesheet the page loads Swagger UI's theme from.
pub const SWAGGER_CSS_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/swagger-ui/4.1.0/swagger-ui.min.css";

const SWAGGER_BUNDLE_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/swagger-ui/4.1.0/swagger-ui-bundle.min.js";

/// Lays the path and description of each operation summary out on one
/// wrapping row.
pub const CUSTOM_CSS: &str = ".swagger-ui .opblock .opblock-summary-path-description-wrapper { \
align-items: center; display: flex; flex-wrap: wrap; gap: 0 10px; padding: 0 10px; width: 100%; }";

/// The document in both served encodings.
#[derive(Debug, Clone)]
pub struct ApiDocs {
    pub json: Value,
    pub yaml: String,
}

impl ApiDocs {
    pub fn build(options: &DocOptions) -> Result<Self, serde_yaml::Error> {
        let json = document(options);
        let yaml = serde_yaml::to_string(&json)?;
        Ok(Self { json, yaml })
    }
}

/// `GET /`
pub async fn root() -> Redirect {
    Redirect::temporary("/api-docs")
}

/// `GET /api-docs`
pub async fn swagger_ui() -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8" />
    <title>Farcaster Hub REST API</title>
    <link rel="stylesheet" type="text/css" href="{SWAGGER_CSS_URL}" />
    <style>{CUSTOM_CSS}</style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="{SWAGGER_BUNDLE_URL}"></script>
    <script>
        window.onload = function () {{
            window.ui = SwaggerUIBundle({{
                url: '/api-docs/openapi.json',
                dom_id: '#swagger-ui',
                presets: [SwaggerUIBundle.presets.apis],
            }});
        }};
    </script>
</body>
</html>
"#
    ))
}

/// `GET /api-docs/openapi.json`
pub async fn openapi_json(State(state): State<AppState>) -> Json<Value> {
    Json(state.docs.json.clone())
}

/// `GET /api-docs/openapi.yaml`
pub async fn openapi_yaml(State(state): State<AppState>) -> impl IntoResponse {
    ([(CONTENT_TYPE, "application/yaml")], state.docs.yaml.clone())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::{config::ServerConfig, router::build_router, storage::memory::MemoryStorage};

    use super::*;

    fn docs_only() -> axum::Router {
        let config = ServerConfig {
            servers: vec!["https://hub.example".into()],
            ..ServerConfig::default()
        };
        let docs = Arc::new(ApiDocs::build(&config.doc_options()).unwrap());
        build_router(Arc::new(MemoryStorage::new()), config, docs)
    }

    async fn fetch(uri: &str) -> (StatusCode, String) {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let resp = docs_only().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn root_redirects_to_docs() {
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let resp = docs_only().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(resp.headers()["location"], "/api-docs");
    }

    #[tokio::test]
    async fn page_loads_pinned_swagger_ui() {
        let (status, html) = fetch("/api-docs").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(SWAGGER_CSS_URL));
        assert!(html.contains("opblock-summary-path-description-wrapper"));
        assert!(html.contains("/api-docs/openapi.json"));
    }

    #[tokio::test]
    async fn json_document_uses_configured_servers() {
        let (status, body) = fetch("/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        let doc: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(doc["openapi"], "3.0.1");
        assert_eq!(doc["servers"][0]["url"], "https://hub.example");
    }

    #[tokio::test]
    async fn yaml_matches_json() {
        let (_, json) = fetch("/api-docs/openapi.json").await;
        let (status, yaml) = fetch("/api-docs/openapi.yaml").await;
        assert_eq!(status, StatusCode::OK);
        let from_yaml: Value = serde_yaml::from_str(&yaml).unwrap();
        let from_json: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(from_yaml, from_json);
    }

    #[tokio::test]
    async fn mock_routes_absent_unless_enabled() {
        let (status, _) = fetch("/v1/info?dbstats=false").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
