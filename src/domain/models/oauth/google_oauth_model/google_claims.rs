//! # Google OpenID Connect 클레임 모델
//!
//! `https://openidconnect.googleapis.com/v1/userinfo` 응답(OIDC 표준 클레임)을 처리합니다.
//! `sub`는 문자열이므로 21자리 Google ID도 손실 없이 보존됩니다.

use serde::Deserialize;
use crate::config::AuthService;
use crate::domain::entities::users::user::User;
use crate::errors::{AppError, AppResult};
use crate::utils::string_utils::{
    clean_username, deserialize_null_default, deserialize_optional_string, email_local_part,
    is_valid_string, split_full_name, validate_required_string,
};
use super::profile::ProfileRecord;

/// OIDC 표준 클레임 구조체
#[derive(Debug, Default, Deserialize)]
pub struct GoogleIdClaims {
    /// Subject - Google 계정 고유 ID
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub sub: String,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub email: String,

    #[serde(default)]
    pub email_verified: Option<bool>,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name: String,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub given_name: String,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub family_name: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub picture: Option<String>,
}

impl ProfileRecord for GoogleIdClaims {
    fn validate(&self) -> AppResult<()> {
        if !is_valid_string(&self.sub) {
            return Err(AppError::ValidationError("user id can't be empty".to_string()));
        }

        validate_required_string(&self.email, "user e-mail")?;

        if self.email_verified == Some(false) {
            return Err(AppError::ValidationError("user e-mail is not verified".to_string()));
        }

        Ok(())
    }

    fn auth_data(&self) -> String {
        self.sub.trim().to_string()
    }

    fn to_user(&self) -> User {
        let (first_name, last_name) =
            if is_valid_string(&self.given_name) || is_valid_string(&self.family_name) {
                (self.given_name.trim().to_string(), self.family_name.trim().to_string())
            } else {
                split_full_name(&self.name)
            };

        User::new_oauth(
            clean_username(email_local_part(self.email.trim())),
            first_name,
            last_name,
            &self.email,
            AuthService::Google,
            self.auth_data(),
            self.picture.clone(),
        )
    }
}
