//! 설정 모듈
//!
//! 환경변수 기반 설정을 제공합니다. `.env` 파일은 바이너리 시작 시
//! `dotenv`로 로드되며, 이 모듈은 로드된 값을 타입 안전한 설정으로 변환합니다.
//!
//! - [`auth_config`] - 인증 서비스 식별자와 Google SSO 설정
//! - [`server_config`] - 실행 환경과 HTTP 바인딩 설정

pub mod server_config;
pub mod auth_config;

pub use server_config::*;
pub use auth_config::*;
