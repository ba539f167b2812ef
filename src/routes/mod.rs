//! API 라우트 설정 모듈
//!
//! OAuth 프로바이더 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(registry))
//!     .app_data(web::Data::new(sso_config))
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::{get, web, HttpResponse};
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_oauth_routes(cfg);
}

/// OAuth 프로바이더 라우트를 설정합니다
///
/// # Routes
///
/// - `GET /api/v1/oauth/providers`
/// - `POST /api/v1/oauth/{service}/user`
/// - `POST /api/v1/oauth/{service}/same-user`
/// - `POST /api/v1/oauth/{service}/id-token`
/// - `GET /api/v1/oauth/{service}/settings`
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/oauth/google/user \
///   -H "Content-Type: application/json" \
///   -d '{"sub":"110169484474386276334","email":"jane@example.com","name":"Jane Doe"}'
/// ```
fn configure_oauth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/oauth")
            .service(handlers::oauth::list_providers)
            .service(handlers::oauth::user_from_json)
            .service(handlers::oauth::is_same_user)
            .service(handlers::oauth::user_from_id_token)
            .service(handlers::oauth::sso_settings),
    );
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "google_oauth_provider",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;
    use crate::config::{GoogleOAuthConfig, SsoConfig};
    use crate::core::ProviderRegistry;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert!(chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
    }

    #[actix_web::test]
    async fn test_oauth_routes_are_mounted() {
        let config = SsoConfig {
            google_settings: GoogleOAuthConfig::sso_settings_from(|_| None).unwrap(),
        };
        let registry = ProviderRegistry::from_config(&config);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(registry))
                .app_data(web::Data::new(config))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/oauth/providers").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["providers"], serde_json::json!([]));
    }
}
