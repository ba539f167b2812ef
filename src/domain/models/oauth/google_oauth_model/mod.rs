//! # Google OAuth 2.0 Domain Models
//!
//! Google 사용자 정보 응답을 디코딩하고 정규화된 사용자 레코드로 변환하는
//! 도메인 모델들을 정의하는 모듈입니다.
//!
//! ## 주요 구성 요소
//!
//! - **`profile`**: 공통 인터페이스 [`ProfileRecord`], 형태 태그 [`ProfileShape`],
//!   형태별 디스패치 [`GoogleProfile`]
//! - **`google_user`**: 레거시 OAuth2 userinfo 응답 (`GoogleUserInfo`)
//! - **`google_person`**: People API 응답 (`GooglePerson`)
//! - **`google_claims`**: OpenID Connect 클레임 (`GoogleIdClaims`)
//!
//! ## 매핑 파이프라인
//!
//! ```text
//! JSON 바이트 스트림
//!        │  GoogleProfile::decode(shape, reader)     → DecodeError
//!        ▼
//! ProfileRecord (형태별 구조체)
//!        │  validate()                                → ValidationError
//!        ▼
//! to_user()
//!        ▼
//! User { username, first_name, last_name, email(소문자), auth_data, auth_service }
//! ```
//!
//! ## 형태별 필드 매핑
//!
//! | User 필드 | userinfo | people | oidc |
//! |-----------|----------|--------|------|
//! | `auth_data` | `sub`/`id` (숫자) | `resourceName` - `people/` | `sub` |
//! | `username` | `username` → `login` → 이메일 | `nicknames[]` → 이메일 | 이메일 로컬 파트 |
//! | `first_name`/`last_name` | `name` 분리 | `givenName`/`familyName` 또는 `displayName` 분리 | `given_name`/`family_name` 또는 `name` 분리 |
//! | `email` | `email` | 대표 `emailAddresses[]` | `email` |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::models::oauth::google_oauth_model::{GoogleProfile, ProfileRecord, ProfileShape};
//!
//! let profile = GoogleProfile::decode(ProfileShape::Oidc, response_body.as_slice())?;
//! profile.validate()?;
//! let user = profile.to_user();
//! ```

pub mod profile;
pub mod google_user;
pub mod google_person;
pub mod google_claims;

pub use profile::{GoogleProfile, ProfileRecord, ProfileShape};
pub use google_user::GoogleUserInfo;
pub use google_person::GooglePerson;
pub use google_claims::GoogleIdClaims;
