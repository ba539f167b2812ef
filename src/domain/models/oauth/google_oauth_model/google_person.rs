//! # Google People API 사용자 모델
//!
//! `https://people.googleapis.com/v1/people/me` 응답을 처리합니다.
//! 이름, 이메일, 닉네임, 사진이 모두 배열로 내려오며 각 항목의 `metadata.primary`로
//! 대표 값을 고릅니다.
//!
//! ```json
//! {
//!   "resourceName": "people/110169484474386276334",
//!   "names": [{ "displayName": "Jane Doe", "givenName": "Jane", "familyName": "Doe",
//!               "metadata": { "primary": true } }],
//!   "emailAddresses": [{ "value": "jane@example.com",
//!                        "metadata": { "primary": true, "verified": true } }],
//!   "nicknames": [{ "value": "jdoe" }],
//!   "photos": [{ "url": "https://lh3.googleusercontent.com/a/photo.jpg" }]
//! }
//! ```

use serde::Deserialize;
use crate::config::AuthService;
use crate::domain::entities::users::user::User;
use crate::errors::{AppError, AppResult};
use crate::utils::string_utils::{
    clean_optional_string, clean_username, deserialize_null_default, email_local_part,
    is_valid_string, split_full_name,
};
use super::profile::ProfileRecord;

const RESOURCE_NAME_PREFIX: &str = "people/";

/// People API 필드 공통 메타데이터
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMetadata {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub primary: bool,

    /// 이메일에만 존재. `Some(false)`인 이메일은 사용하지 않습니다.
    #[serde(default)]
    pub verified: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub display_name: String,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub given_name: String,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub family_name: String,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub metadata: FieldMetadata,
}

#[derive(Debug, Default, Deserialize)]
pub struct PersonEmail {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub value: String,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub metadata: FieldMetadata,
}

#[derive(Debug, Default, Deserialize)]
pub struct PersonNickname {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub value: String,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub metadata: FieldMetadata,
}

#[derive(Debug, Default, Deserialize)]
pub struct PersonPhoto {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub url: String,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub metadata: FieldMetadata,
}

/// People API `people/me` 응답 구조체
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GooglePerson {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub resource_name: String,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub names: Vec<PersonName>,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub email_addresses: Vec<PersonEmail>,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub nicknames: Vec<PersonNickname>,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub photos: Vec<PersonPhoto>,
}

/// 조건을 만족하는 항목 중 primary를 우선으로, 없으면 첫 항목을 고릅니다.
fn pick_primary<'a, T>(
    items: &'a [T],
    metadata: impl Fn(&T) -> &FieldMetadata,
    usable: impl Fn(&T) -> bool,
) -> Option<&'a T> {
    items
        .iter()
        .filter(|item| usable(item))
        .find(|item| metadata(item).primary)
        .or_else(|| items.iter().find(|item| usable(item)))
}

impl GooglePerson {
    /// 사용 가능한 대표 이메일 (검증 실패로 표시된 주소 제외)
    pub fn primary_email(&self) -> Option<&str> {
        pick_primary(
            &self.email_addresses,
            |email| &email.metadata,
            |email| is_valid_string(&email.value) && email.metadata.verified != Some(false),
        )
        .map(|email| email.value.trim())
    }

    pub fn primary_name(&self) -> Option<&PersonName> {
        pick_primary(
            &self.names,
            |name| &name.metadata,
            |name| {
                is_valid_string(&name.display_name)
                    || is_valid_string(&name.given_name)
                    || is_valid_string(&name.family_name)
            },
        )
    }

    pub fn primary_nickname(&self) -> Option<&str> {
        pick_primary(&self.nicknames, |nick| &nick.metadata, |nick| is_valid_string(&nick.value))
            .map(|nick| nick.value.trim())
    }

    pub fn primary_photo(&self) -> Option<String> {
        pick_primary(&self.photos, |photo| &photo.metadata, |photo| is_valid_string(&photo.url))
            .and_then(|photo| clean_optional_string(Some(photo.url.clone())))
    }

    /// (이름, 성). 명시적인 given/family 값이 없으면 displayName을 분리합니다.
    fn name_parts(&self) -> (String, String) {
        match self.primary_name() {
            Some(name) if is_valid_string(&name.given_name) || is_valid_string(&name.family_name) => {
                (name.given_name.trim().to_string(), name.family_name.trim().to_string())
            }
            Some(name) => split_full_name(&name.display_name),
            None => (String::new(), String::new()),
        }
    }
}

impl ProfileRecord for GooglePerson {
    fn validate(&self) -> AppResult<()> {
        if self.auth_data().is_empty() {
            return Err(AppError::ValidationError("user id can't be empty".to_string()));
        }

        if self.primary_email().is_none() {
            return Err(AppError::ValidationError(
                "user e-mail should not be empty".to_string(),
            ));
        }

        Ok(())
    }

    fn auth_data(&self) -> String {
        let resource_name = self.resource_name.trim();
        resource_name
            .strip_prefix(RESOURCE_NAME_PREFIX)
            .unwrap_or(resource_name)
            .to_string()
    }

    fn to_user(&self) -> User {
        let email = self.primary_email().unwrap_or_default();
        let username = self
            .primary_nickname()
            .unwrap_or_else(|| email_local_part(email));
        let (first_name, last_name) = self.name_parts();

        User::new_oauth(
            clean_username(username),
            first_name,
            last_name,
            email,
            AuthService::Google,
            self.auth_data(),
            self.primary_photo(),
        )
    }
}
