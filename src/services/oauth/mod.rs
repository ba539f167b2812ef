//! OAuth 프로바이더 서비스 모듈
//! 
//! 외부 OAuth 2.0 / OIDC 프로바이더의 사용자 정보를 내부 사용자 레코드로
//! 변환하는 프로바이더 계약과 그 구현체들을 제공합니다.
//!
//! # Features
//!
//! - 프로바이더 계약 [`OAuthProvider`] (JSON → User, SSO 설정 조회, 동일 사용자 비교, ID 토큰)
//! - Google 프로바이더 [`GoogleProvider`] (userinfo / People / OIDC 형태 지원)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::oauth::{GoogleProvider, OAuthProvider};
//! use crate::domain::models::oauth::google_oauth_model::ProfileShape;
//! 
//! let provider = GoogleProvider::new(ProfileShape::Oidc);
//! let user = provider.user_from_json(&mut response_body.as_slice(), None)?;
//! ```

pub mod oauth_provider;
pub mod google_provider;

pub use oauth_provider::*;
pub use google_provider::*;
