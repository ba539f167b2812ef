//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! Google 프로필 매핑과 프로바이더 레지스트리를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! fn validate(email: &str) -> Result<(), AppError> {
//!     if email.is_empty() {
//!         return Err(AppError::ValidationError("user e-mail should not be empty".to_string()));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## 보안 주의사항
//!
//! 에러 메시지에는 프로바이더 응답 원문을 절대 포함하지 않습니다.
//! 디코딩 에러는 [`AppError::from_json_error`]를 통해 에러 분류와 위치만 기록합니다.

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 프로필 매핑 파이프라인(디코딩 → 검증 → 변환)과 레지스트리 조회,
/// 설정 로딩 과정에서 발생할 수 있는 에러를 포괄합니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// JSON 디코딩 에러 (400 Bad Request)
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// 프로필 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 등록되지 않은 프로바이더 등 리소스 없음 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 설정 값 누락 또는 형식 오류 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// `serde_json` 에러를 응답 본문 노출 없이 `DecodeError`로 변환합니다.
    ///
    /// serde 에러 메시지는 입력 값 일부를 포함할 수 있으므로
    /// 에러 분류와 줄/열 위치만 남깁니다.
    pub fn from_json_error(err: &serde_json::Error) -> Self {
        AppError::DecodeError(format!(
            "{:?} error at line {} column {}",
            err.classify(),
            err.line(),
            err.column()
        ))
    }

    /// 클라이언트 요청 문제로 인한 에러인지 확인합니다.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::DecodeError(_) | AppError::ValidationError(_) | AppError::NotFound(_)
        )
    }
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::DecodeError(_) => StatusCode::BAD_REQUEST,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
