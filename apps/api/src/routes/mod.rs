pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;
    Router::new()
        .route("/api/health", get(health::health_handler))
        .route(
            "/api/analyze-resume",
            post(handlers::handle_analyze_resume),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use bytes::Bytes;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::errors::AppError;
    use crate::extraction::TextExtractor;

    /// Extractor stub that ignores the payload and returns fixed text.
    struct FixedTextExtractor(&'static str);

    #[async_trait]
    impl TextExtractor for FixedTextExtractor {
        async fn extract(&self, _data: Bytes) -> Result<String, AppError> {
            Ok(self.0.to_string())
        }
    }

    fn test_config() -> Config {
        Config {
            port: 0,
            client_url: "http://localhost:3000".to_string(),
            max_upload_bytes: 5 * 1024 * 1024,
            rust_log: "info".to_string(),
        }
    }

    fn test_app(extractor: Arc<dyn TextExtractor>) -> Router {
        build_router(AppState {
            config: test_config(),
            extractor,
        })
    }

    fn multipart_request(
        field_name: &str,
        file_name: &str,
        content_type: &str,
        payload: &[u8],
    ) -> Request<Body> {
        let boundary = "test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; \
                 name=\"{field_name}\"; filename=\"{file_name}\"\r\n\
                 Content-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(payload);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/analyze-resume")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn response_json(response: axum::response::Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint_reports_ok() {
        let app = test_app(Arc::new(FixedTextExtractor("")));
        let request = Request::builder()
            .method("GET")
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["status"], "OK");
    }

    #[tokio::test]
    async fn test_analyze_resume_returns_report_envelope() {
        let app = test_app(Arc::new(FixedTextExtractor(
            "email summary experience education skills projects python",
        )));
        let payload = b"%PDF-1.4 fake";
        let response = app
            .oneshot(multipart_request(
                "resume",
                "resume.pdf",
                "application/pdf",
                payload,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["fileName"], "resume.pdf");
        assert_eq!(json["fileSize"], payload.len());
        assert_eq!(json["analysis"]["overallScore"], 77);
        assert_eq!(
            json["analysis"]["industryFit"],
            "Technology/Software Development"
        );
        for key in [
            "contact",
            "summary",
            "experience",
            "education",
            "skills",
            "projects",
        ] {
            assert!(
                json["analysis"]["sections"][key]["score"].is_u64(),
                "section {key} missing from response"
            );
        }
    }

    #[tokio::test]
    async fn test_rejects_non_pdf_upload() {
        let app = test_app(Arc::new(FixedTextExtractor("some text")));
        let response = app
            .oneshot(multipart_request(
                "resume",
                "resume.txt",
                "text/plain",
                b"plain text resume",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_rejects_missing_resume_field() {
        let app = test_app(Arc::new(FixedTextExtractor("some text")));
        let response = app
            .oneshot(multipart_request(
                "attachment",
                "resume.pdf",
                "application/pdf",
                b"%PDF-1.4 fake",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_rejects_empty_extracted_text() {
        let app = test_app(Arc::new(FixedTextExtractor("   \n\t ")));
        let response = app
            .oneshot(multipart_request(
                "resume",
                "resume.pdf",
                "application/pdf",
                b"%PDF-1.4 fake",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "EXTRACTION_ERROR");
    }

    #[tokio::test]
    async fn test_oversized_upload_is_rejected() {
        let mut config = test_config();
        config.max_upload_bytes = 256;
        let app = build_router(AppState {
            config,
            extractor: Arc::new(FixedTextExtractor("some text")),
        });

        let payload = vec![0u8; 1024];
        let response = app
            .oneshot(multipart_request(
                "resume",
                "resume.pdf",
                "application/pdf",
                &payload,
            ))
            .await
            .unwrap();
        assert!(
            response.status().is_client_error(),
            "expected a client error, got {}",
            response.status()
        );
    }
}
