//! SSO 설정 관리 모듈
//!
//! Google OAuth 2.0 / OpenID Connect SSO 설정을 환경변수에서 로드하고 검증합니다.
//!
//! # Environment Variables
//!
//! | 변수 | 기본값 | 설명 |
//! |------|--------|------|
//! | `GOOGLE_ENABLE` | `false` | Google SSO 활성화 여부 |
//! | `GOOGLE_CLIENT_ID` | (없음) | OAuth 클라이언트 ID, 활성화 시 필수 |
//! | `GOOGLE_CLIENT_SECRET` | (없음) | OAuth 클라이언트 시크릿, 활성화 시 필수 |
//! | `GOOGLE_SCOPE` | `profile email` | 요청 스코프 |
//! | `GOOGLE_AUTH_ENDPOINT` | `https://accounts.google.com/o/oauth2/v2/auth` | 인증 엔드포인트 |
//! | `GOOGLE_TOKEN_ENDPOINT` | `https://oauth2.googleapis.com/token` | 토큰 엔드포인트 |
//! | `GOOGLE_USER_API_ENDPOINT` | 프로필 형태별 기본값 | 사용자 정보 엔드포인트 |
//! | `GOOGLE_DISCOVERY_ENDPOINT` | (없음) | OIDC discovery 문서 |
//! | `GOOGLE_BUTTON_TEXT` | `Google` | 로그인 버튼 문구 |
//! | `GOOGLE_BUTTON_COLOR` | `#4285F4` | 로그인 버튼 색상 |
//! | `GOOGLE_PROFILE_SHAPE` | `oidc` | `userinfo` / `people` / `oidc` |
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::config::{GoogleOAuthConfig, SsoConfig};
//!
//! let config = SsoConfig::from_env()?;
//! if config.google_settings.enable {
//!     println!("Google SSO scope: {}", config.google_settings.scope);
//! }
//! ```

use std::env;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::domain::models::oauth::google_oauth_model::ProfileShape;
use crate::errors::{AppError, AppResult};

/// 외부 인증 서비스 식별자
///
/// 사용자 레코드의 `auth_service` 태그와 프로바이더 레지스트리의 키로 사용됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthService {
    /// 이메일/비밀번호 로컬 인증
    Email,

    /// GitLab OAuth
    Gitlab,

    /// Google OAuth 2.0 / OpenID Connect
    Google,

    /// Microsoft Office 365
    Office365,

    /// 범용 OpenID Connect
    OpenId,

    /// LDAP 디렉터리
    Ldap,

    /// SAML 2.0
    Saml,
}

impl AuthService {
    /// 문자열에서 AuthService로 변환합니다 (대소문자 무관).
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "email" => Ok(AuthService::Email),
            "gitlab" => Ok(AuthService::Gitlab),
            "google" => Ok(AuthService::Google),
            "office365" => Ok(AuthService::Office365),
            "openid" => Ok(AuthService::OpenId),
            "ldap" => Ok(AuthService::Ldap),
            "saml" => Ok(AuthService::Saml),
            _ => Err(format!("Unsupported auth service: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthService::Email => "email",
            AuthService::Gitlab => "gitlab",
            AuthService::Google => "google",
            AuthService::Office365 => "office365",
            AuthService::OpenId => "openid",
            AuthService::Ldap => "ldap",
            AuthService::Saml => "saml",
        }
    }
}

/// 단일 SSO 프로바이더 설정
///
/// 활성화된 경우 클라이언트 ID/시크릿이 필수이며, 모든 엔드포인트는 URL 형식이어야 합니다.
/// 시크릿은 직렬화되지 않으므로 HTTP 응답이나 로그에 노출되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_enabled_credentials"))]
pub struct SsoSettings {
    pub enable: bool,

    pub id: String,

    #[serde(skip_serializing, default)]
    pub secret: String,

    pub scope: String,

    #[validate(url(message = "auth endpoint must be a valid URL"))]
    pub auth_endpoint: String,

    #[validate(url(message = "token endpoint must be a valid URL"))]
    pub token_endpoint: String,

    #[validate(url(message = "user API endpoint must be a valid URL"))]
    pub user_api_endpoint: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "discovery endpoint must be a valid URL"))]
    pub discovery_endpoint: Option<String>,

    pub button_text: String,

    pub button_color: String,

    /// 사용자 정보 응답의 형태 (어떤 Google API를 사용하는지)
    pub profile_shape: ProfileShape,
}

fn validate_enabled_credentials(settings: &SsoSettings) -> Result<(), ValidationError> {
    if settings.enable && (settings.id.trim().is_empty() || settings.secret.trim().is_empty()) {
        return Err(ValidationError::new("missing_credentials")
            .with_message("client id and secret are required when SSO is enabled".into()));
    }
    Ok(())
}

/// Google SSO 설정 로더
///
/// 환경변수에서 [`SsoSettings`]를 구성합니다. 테스트에서는
/// [`GoogleOAuthConfig::sso_settings_from`]에 조회 클로저를 주입하여
/// 프로세스 환경을 건드리지 않고 검증할 수 있습니다.
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    pub const AUTH_ENDPOINT: &'static str = "https://accounts.google.com/o/oauth2/v2/auth";
    pub const TOKEN_ENDPOINT: &'static str = "https://oauth2.googleapis.com/token";
    pub const DEFAULT_SCOPE: &'static str = "profile email";
    pub const DEFAULT_BUTTON_TEXT: &'static str = "Google";
    pub const DEFAULT_BUTTON_COLOR: &'static str = "#4285F4";

    /// 프로세스 환경변수에서 Google SSO 설정을 로드합니다.
    pub fn sso_settings() -> AppResult<SsoSettings> {
        Self::sso_settings_from(|key| env::var(key).ok())
    }

    /// 주어진 조회 함수로 Google SSO 설정을 구성하고 검증합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 값 형식 오류 또는 검증 실패
    pub fn sso_settings_from<F>(lookup: F) -> AppResult<SsoSettings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let enable = match get("GOOGLE_ENABLE") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| AppError::ConfigError(format!("GOOGLE_ENABLE 파싱 실패: {}", raw)))?,
            None => false,
        };

        let profile_shape = match get("GOOGLE_PROFILE_SHAPE") {
            Some(raw) => ProfileShape::from_str(&raw).map_err(AppError::ConfigError)?,
            None => ProfileShape::default(),
        };

        let settings = SsoSettings {
            enable,
            id: get("GOOGLE_CLIENT_ID").unwrap_or_default(),
            secret: get("GOOGLE_CLIENT_SECRET").unwrap_or_default(),
            scope: get("GOOGLE_SCOPE").unwrap_or_else(|| Self::DEFAULT_SCOPE.to_string()),
            auth_endpoint: get("GOOGLE_AUTH_ENDPOINT")
                .unwrap_or_else(|| Self::AUTH_ENDPOINT.to_string()),
            token_endpoint: get("GOOGLE_TOKEN_ENDPOINT")
                .unwrap_or_else(|| Self::TOKEN_ENDPOINT.to_string()),
            user_api_endpoint: get("GOOGLE_USER_API_ENDPOINT")
                .unwrap_or_else(|| profile_shape.default_user_api_endpoint().to_string()),
            discovery_endpoint: get("GOOGLE_DISCOVERY_ENDPOINT"),
            button_text: get("GOOGLE_BUTTON_TEXT")
                .unwrap_or_else(|| Self::DEFAULT_BUTTON_TEXT.to_string()),
            button_color: get("GOOGLE_BUTTON_COLOR")
                .unwrap_or_else(|| Self::DEFAULT_BUTTON_COLOR.to_string()),
            profile_shape,
        };

        settings
            .validate()
            .map_err(|e| AppError::ConfigError(format!("Google SSO 설정 검증 실패: {}", e)))?;

        log::debug!(
            "Google SSO 설정 로드됨 - enable: {}, shape: {}, user_api: {}",
            settings.enable,
            settings.profile_shape.as_str(),
            settings.user_api_endpoint
        );

        Ok(settings)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// 프로세스 전역 SSO 설정 객체
///
/// 프로바이더의 `sso_settings` 조회가 읽어가는 설정 섹션들을 보관합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SsoConfig {
    pub google_settings: SsoSettings,
}

impl SsoConfig {
    /// 환경변수에서 전체 SSO 설정을 로드합니다.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            google_settings: GoogleOAuthConfig::sso_settings()?,
        })
    }
}
