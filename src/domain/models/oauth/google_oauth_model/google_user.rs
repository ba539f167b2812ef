//! # Google OAuth 사용자 정보 모델 (레거시 userinfo)
//!
//! `https://www.googleapis.com/oauth2/v2/userinfo` 형태의 응답을 처리합니다.
//! 식별자가 숫자로 내려오는 초기 응답 형식이며, `sub`와 `id` 키를 모두 받습니다.
//!
//! ```json
//! {
//!   "sub": 110169484474386276334,
//!   "username": "jdoe",
//!   "email": "Jane.Doe@gmail.com",
//!   "name": "Jane Doe",
//!   "picture": "https://lh3.googleusercontent.com/a/photo.jpg"
//! }
//! ```
//!
//! 숫자 식별자는 `u64` 범위까지만 표현할 수 있습니다. 21자리 Google ID를 그대로
//! 받아야 한다면 문자열로 전달하거나 OIDC/People 형태를 사용해야 합니다.

use std::fmt;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use crate::config::AuthService;
use crate::domain::entities::users::user::User;
use crate::errors::{AppError, AppResult};
use crate::utils::string_utils::{
    clean_username, deserialize_null_default, deserialize_optional_string, email_local_part,
    is_valid_string, split_full_name, validate_required_string,
};
use super::profile::ProfileRecord;

/// 레거시 OAuth2 userinfo 응답 구조체
///
/// 누락된 키는 빈 문자열 / 0으로 채워지며, 필수 여부는 [`ProfileRecord::validate`]에서 판단합니다.
#[derive(Debug, Default, Deserialize)]
pub struct GoogleUserInfo {
    /// Google 계정 고유 숫자 ID
    #[serde(rename = "sub", alias = "id", default, deserialize_with = "deserialize_numeric_id")]
    pub id: u64,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub username: String,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub login: String,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub email: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub picture: Option<String>,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name: String,
}

impl GoogleUserInfo {
    /// 사용자명 후보: `username` → `login` → 이메일 로컬 파트
    fn username_candidate(&self) -> &str {
        [self.username.as_str(), self.login.as_str()]
            .into_iter()
            .find(|candidate| is_valid_string(candidate))
            .unwrap_or_else(|| email_local_part(&self.email))
    }
}

impl ProfileRecord for GoogleUserInfo {
    fn validate(&self) -> AppResult<()> {
        if self.id == 0 {
            return Err(AppError::ValidationError("user id can't be 0".to_string()));
        }

        validate_required_string(&self.email, "user e-mail")?;

        Ok(())
    }

    fn auth_data(&self) -> String {
        self.id.to_string()
    }

    fn to_user(&self) -> User {
        let (first_name, last_name) = split_full_name(&self.name);

        User::new_oauth(
            clean_username(self.username_candidate()),
            first_name,
            last_name,
            &self.email,
            AuthService::Google,
            self.auth_data(),
            self.picture.clone(),
        )
    }
}

/// 숫자 또는 숫자 문자열로 전달된 식별자를 `u64`로 읽습니다.
///
/// 빈 문자열과 `null`은 0(미설정)으로 취급합니다.
fn deserialize_numeric_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct NumericIdVisitor;

    impl<'de> Visitor<'de> for NumericIdVisitor {
        type Value = u64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a non-negative integer id or a string of digits")
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<u64, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<u64, E> {
            u64::try_from(value).map_err(|_| E::custom("id must not be negative"))
        }

        fn visit_f64<E: de::Error>(self, _value: f64) -> Result<u64, E> {
            Err(E::custom("id is not an integer within u64 range"))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<u64, E> {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Ok(0);
            }
            trimmed
                .parse::<u64>()
                .map_err(|_| E::custom("id must be a string of decimal digits"))
        }

        fn visit_unit<E: de::Error>(self) -> Result<u64, E> {
            Ok(0)
        }

        fn visit_none<E: de::Error>(self) -> Result<u64, E> {
            Ok(0)
        }
    }

    deserializer.deserialize_any(NumericIdVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GoogleUserInfo {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_deserialize_full_profile() {
        let user = parse(
            r#"{
                "sub": 1234567890,
                "username": "jdoe",
                "login": "jane",
                "email": "Jane.Doe@Example.com",
                "picture": "https://example.com/jane.png",
                "name": "Jane Doe"
            }"#,
        );

        assert_eq!(user.id, 1234567890);
        assert_eq!(user.username, "jdoe");
        assert_eq!(user.login, "jane");
        assert_eq!(user.picture.as_deref(), Some("https://example.com/jane.png"));
    }

    #[test]
    fn test_deserialize_id_variants() {
        assert_eq!(parse(r#"{"id": 42}"#).id, 42);
        assert_eq!(parse(r#"{"sub": "42"}"#).id, 42);
        assert_eq!(parse(r#"{"sub": ""}"#).id, 0);
        assert_eq!(parse(r#"{"sub": null}"#).id, 0);
        assert_eq!(parse(r#"{}"#).id, 0);
    }

    #[test]
    fn test_deserialize_rejects_bad_ids() {
        assert!(serde_json::from_str::<GoogleUserInfo>(r#"{"sub": -5}"#).is_err());
        assert!(serde_json::from_str::<GoogleUserInfo>(r#"{"sub": "12ab"}"#).is_err());
        assert!(serde_json::from_str::<GoogleUserInfo>(r#"{"sub": 1.5}"#).is_err());
    }

    #[test]
    fn test_validate_requires_id_and_email() {
        let missing_id = parse(r#"{"email": "a@b.com"}"#);
        match missing_id.validate() {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, "user id can't be 0"),
            other => panic!("Expected ValidationError, got {:?}", other),
        }

        let missing_email = parse(r#"{"sub": 7, "email": "  "}"#);
        assert!(matches!(missing_email.validate(), Err(AppError::ValidationError(_))));

        let valid = parse(r#"{"sub": 7, "email": "a@b.com"}"#);
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn test_to_user_maps_fields() {
        let user = parse(
            r#"{"sub": 99, "username": "JDoe", "email": "Jane.Doe@Example.COM", "name": "Jane Q Doe"}"#,
        )
        .to_user();

        assert_eq!(user.username, "jdoe");
        assert_eq!(user.first_name, "Jane");
        assert_eq!(user.last_name, "Q Doe");
        assert_eq!(user.email, "jane.doe@example.com");
        assert_eq!(user.auth_data.as_deref(), Some("99"));
        assert_eq!(user.auth_service, AuthService::Google);
    }

    #[test]
    fn test_username_falls_back_to_login_then_email() {
        let from_login = parse(r#"{"sub": 1, "login": "janel", "email": "x@y.com"}"#).to_user();
        assert_eq!(from_login.username, "janel");

        let from_email = parse(r#"{"sub": 1, "email": "jane.doe@y.com"}"#).to_user();
        assert_eq!(from_email.username, "jane.doe");
    }

    #[test]
    fn test_single_token_name_is_first_name() {
        let user = parse(r#"{"sub": 1, "email": "p@y.com", "name": "Prince"}"#).to_user();
        assert_eq!(user.first_name, "Prince");
        assert_eq!(user.last_name, "");
    }
}
