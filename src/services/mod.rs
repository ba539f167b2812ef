//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 외부 OAuth 프로바이더의 사용자 정보 응답을 정규화된 사용자 레코드로
//! 변환하는 프로바이더 구현을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::oauth::{GoogleProvider, OAuthProvider};
//!
//! let provider = GoogleProvider::new(ProfileShape::Oidc);
//! let user = provider.user_from_json(&mut body.as_ref(), None)?;
//! ```

pub mod oauth;
