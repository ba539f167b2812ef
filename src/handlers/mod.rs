//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   ProviderRegistry - 서비스 이름 → 프로바이더       ← Core
//! ├─────────────────────────────────────────────┤
//!   OAuthProvider - 프로필 디코딩/검증/변환           ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Profile Models / User                       ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 전역 상태에 접근하지 않습니다. 레지스트리와 SSO 설정은
//! 시작 시점에 구성되어 `web::Data`로 주입됩니다.
//!
//! ## 모듈 구성
//!
//! - **`oauth`**: 프로바이더 조회, 사용자 매핑, 동일 사용자 비교, ID 토큰, SSO 설정

pub mod oauth;
