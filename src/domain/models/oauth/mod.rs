//! # OAuth Domain Models Module
//!
//! OAuth 2.0 / OpenID Connect 프로바이더가 돌려주는 사용자 정보 모델을 정의합니다.
//! 프로바이더마다 하위 모듈을 두며, 각 모듈은 응답 디코딩과 정규화 규칙을 함께 가집니다.
//!
//! ```text
//! oauth/
//! ├── mod.rs                      ← 이 파일 (모듈 진입점)
//! └── google_oauth_model/         ← Google OAuth 통합
//!     ├── profile.rs              ← 공통 인터페이스와 형태 디스패치
//!     ├── google_user.rs          ← 레거시 userinfo
//!     ├── google_person.rs        ← People API
//!     └── google_claims.rs        ← OIDC 클레임
//! ```

pub mod google_oauth_model;
