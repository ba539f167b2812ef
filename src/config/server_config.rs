//! 실행 환경 및 HTTP 서버 설정 관리 모듈
//!
//! 실행 환경 구분과 HTTP 바인딩 주소 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경변수에서 현재 실행 환경을 판별합니다.
    ///
    /// 값이 없거나 알 수 없는 값이면 `Production`으로 간주합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// `RUST_LOG`가 지정되지 않았을 때 사용할 기본 로그 필터
    ///
    /// 개발/테스트 환경에서는 매핑 과정을 추적할 수 있도록 크레이트 로그를 debug로 올립니다.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development | Environment::Test => {
                "info,google_oauth_provider=debug,actix_web=debug"
            }
            Environment::Staging | Environment::Production => "info",
        }
    }
}

/// HTTP 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}
