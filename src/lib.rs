//! Google OAuth 프로바이더 서비스
//!
//! Google 사용자 정보 응답(레거시 userinfo, People API, OpenID Connect)을
//! 디코딩하고 검증하여 정규화된 사용자 레코드로 변환합니다.
//!
//! # Features
//!
//! - **프로필 매핑**: 세 가지 응답 형태를 설정으로 선택, 하나의 `User` 형태로 정규화
//! - **검증**: 식별자와 이메일이 없는 프로필은 거부
//! - **프로바이더 레지스트리**: 서비스 이름으로 프로바이더를 조회, 시작 시점에 명시적으로 구성
//! - **HTTP 호스트**: 레지스트리를 감싸는 actix-web 엔드포인트
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ProviderRegistry │ ← 서비스 이름 → 프로바이더
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ GoogleProvider  │ ← 디코딩 → 검증 → 변환
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use google_oauth_provider::core::ProviderRegistry;
//! use google_oauth_provider::domain::models::oauth::google_oauth_model::ProfileShape;
//! use google_oauth_provider::services::oauth::GoogleProvider;
//!
//! let registry = ProviderRegistry::new()
//!     .with_provider("google", Arc::new(GoogleProvider::new(ProfileShape::Oidc)));
//!
//! let user = registry.get("google")?.user_from_json(&mut body.as_slice(), None)?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
