//! 도메인 계층
//!
//! - [`entities`] - 정규화된 사용자 레코드
//! - [`models`] - 프로바이더 응답 모델 (Google userinfo / People / OIDC)
//! - [`dto`] - HTTP 호스트 요청/응답 DTO

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
