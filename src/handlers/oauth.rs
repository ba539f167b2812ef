//! # OAuth Provider HTTP Handlers
//!
//! 레지스트리에 등록된 프로바이더를 서비스 이름으로 찾아 호출하는 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/providers` | 등록된 서비스 목록 |
//! | `POST` | `/{service}/user` | 프로바이더 응답 원문 → 정규화된 사용자 |
//! | `POST` | `/{service}/same-user` | 저장된 사용자와 OAuth 사용자 비교 |
//! | `POST` | `/{service}/id-token` | ID 토큰 → 사용자 (미지원 시 `null`) |
//! | `GET` | `/{service}/settings` | SSO 설정 (시크릿 제외) |
//!
//! 등록되지 않은 서비스는 404, 디코딩/검증 실패는 400으로 응답합니다.

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::config::SsoConfig;
use crate::core::ProviderRegistry;
use crate::domain::dto::{IdTokenRequest, IdTokenResponse, ProvidersResponse, SameUserRequest, SameUserResponse};
use crate::errors::AppError;

/// 요청 처리 실패를 기록합니다. 클라이언트 입력 문제는 warn, 그 외는 error로 남깁니다.
fn log_failure(service: &str, err: &AppError) {
    log::log!(failure_level(err), "OAuth 요청 처리 실패 - service: {}, 에러: {}", service, err);
}

fn failure_level(err: &AppError) -> log::Level {
    if err.is_client_error() {
        log::Level::Warn
    } else {
        log::Level::Error
    }
}

#[get("/providers")]
pub async fn list_providers(registry: web::Data<ProviderRegistry>) -> HttpResponse {
    HttpResponse::Ok().json(ProvidersResponse {
        providers: registry.services(),
    })
}

/// 프로바이더의 사용자 정보 응답 본문을 그대로 받아 정규화된 사용자로 변환합니다.
///
/// 본문은 JSON 추출기를 거치지 않고 바이트로 받아 프로바이더에게 넘깁니다.
/// 응답 형태 해석은 프로바이더 설정에 따라 달라지기 때문입니다.
#[post("/{service}/user")]
pub async fn user_from_json(
    registry: web::Data<ProviderRegistry>,
    service: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let user = registry
        .get(&service)
        .and_then(|provider| provider.user_from_json(&mut body.as_ref(), None))
        .inspect_err(|e| log_failure(&service, e))?;

    log::info!("OAuth 사용자 매핑 성공 - service: {}, username: {}", service, user.username);

    Ok(HttpResponse::Ok().json(user))
}

#[post("/{service}/same-user")]
pub async fn is_same_user(
    registry: web::Data<ProviderRegistry>,
    service: web::Path<String>,
    payload: web::Json<SameUserRequest>,
) -> Result<HttpResponse, AppError> {
    let provider = registry.get(&service)?;
    let same_user = provider.is_same_user(&payload.db_user, &payload.oauth_user);

    Ok(HttpResponse::Ok().json(SameUserResponse { same_user }))
}

#[post("/{service}/id-token")]
pub async fn user_from_id_token(
    registry: web::Data<ProviderRegistry>,
    service: web::Path<String>,
    payload: web::Json<IdTokenRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let provider = registry.get(&service)?;
    let user = provider.user_from_id_token(&payload.id_token)?;

    if user.is_none() {
        log::debug!("ID 토큰 조회 미지원 - service: {}", service);
    }

    Ok(HttpResponse::Ok().json(IdTokenResponse { user }))
}

#[get("/{service}/settings")]
pub async fn sso_settings(
    registry: web::Data<ProviderRegistry>,
    config: web::Data<SsoConfig>,
    service: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let provider = registry.get(&service).inspect_err(|e| log_failure(&service, e))?;
    let settings = provider
        .sso_settings(&config, &service)
        .inspect_err(|e| log_failure(&service, e))?;

    Ok(HttpResponse::Ok().json(settings))
}
