//! # Google 프로필 레코드 공통 인터페이스
//!
//! 세 가지 Google API 응답 형태를 하나의 인터페이스로 다룹니다.
//!
//! | 형태 | 엔드포인트 | 식별자 |
//! |------|-----------|--------|
//! | [`ProfileShape::UserInfo`] | `oauth2/v2/userinfo` (레거시) | 숫자 `sub`/`id` |
//! | [`ProfileShape::People`] | People API `people/me` | `resourceName` |
//! | [`ProfileShape::Oidc`] | OpenID Connect userinfo | 문자열 `sub` |
//!
//! 어떤 형태를 사용할지는 설정(`GOOGLE_PROFILE_SHAPE`)으로 결정되며,
//! [`GoogleProfile::decode`]가 형태에 맞는 레코드로 디코딩합니다.

use std::io::Read;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;
use crate::errors::{AppError, AppResult};
use super::google_claims::GoogleIdClaims;
use super::google_person::GooglePerson;
use super::google_user::GoogleUserInfo;

/// Google 사용자 정보 응답 형태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileShape {
    /// 레거시 OAuth2 userinfo (숫자 ID)
    UserInfo,

    /// People API v1
    People,

    /// OpenID Connect 표준 클레임
    #[default]
    Oidc,
}

impl ProfileShape {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "userinfo" => Ok(ProfileShape::UserInfo),
            "people" => Ok(ProfileShape::People),
            "oidc" => Ok(ProfileShape::Oidc),
            _ => Err(format!("Unsupported Google profile shape: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileShape::UserInfo => "userinfo",
            ProfileShape::People => "people",
            ProfileShape::Oidc => "oidc",
        }
    }

    /// 형태별 기본 사용자 정보 엔드포인트
    pub fn default_user_api_endpoint(&self) -> &'static str {
        match self {
            ProfileShape::UserInfo => "https://www.googleapis.com/oauth2/v2/userinfo",
            ProfileShape::People => {
                "https://people.googleapis.com/v1/people/me?personFields=names,emailAddresses,nicknames,photos,metadata"
            }
            ProfileShape::Oidc => "https://openidconnect.googleapis.com/v1/userinfo",
        }
    }
}

/// 프로바이더별 프로필 레코드가 구현하는 인터페이스
///
/// 디코딩된 레코드는 요청 하나 동안만 존재하며, 검증 후 [`User`]로 변환된 뒤 버려집니다.
pub trait ProfileRecord {
    /// 필수 필드(주체 식별자, 사용 가능한 이메일)를 검증합니다.
    ///
    /// 에러 메시지에는 응답 원문을 포함하지 않습니다.
    fn validate(&self) -> AppResult<()>;

    /// 원격 계정을 로컬 계정과 연결하는 영속 식별자
    fn auth_data(&self) -> String;

    /// 정규화된 사용자 레코드로 변환합니다. `validate` 통과 후 호출해야 합니다.
    fn to_user(&self) -> User;
}

/// 설정된 형태로 디코딩된 Google 프로필
#[derive(Debug)]
pub enum GoogleProfile {
    UserInfo(GoogleUserInfo),
    People(GooglePerson),
    Oidc(GoogleIdClaims),
}

impl GoogleProfile {
    /// JSON 스트림을 주어진 형태의 프로필 레코드로 디코딩합니다.
    ///
    /// 첫 번째 JSON 값만 디코딩하며 뒤따르는 데이터는 무시합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DecodeError` - JSON 형식 오류 또는 필드 타입 불일치
    pub fn decode<R: Read>(shape: ProfileShape, reader: R) -> AppResult<Self> {
        let profile = match shape {
            ProfileShape::UserInfo => GoogleProfile::UserInfo(decode_json(reader)?),
            ProfileShape::People => GoogleProfile::People(decode_json(reader)?),
            ProfileShape::Oidc => GoogleProfile::Oidc(decode_json(reader)?),
        };
        Ok(profile)
    }

    pub fn shape(&self) -> ProfileShape {
        match self {
            GoogleProfile::UserInfo(_) => ProfileShape::UserInfo,
            GoogleProfile::People(_) => ProfileShape::People,
            GoogleProfile::Oidc(_) => ProfileShape::Oidc,
        }
    }

    fn record(&self) -> &dyn ProfileRecord {
        match self {
            GoogleProfile::UserInfo(record) => record,
            GoogleProfile::People(record) => record,
            GoogleProfile::Oidc(record) => record,
        }
    }
}

impl ProfileRecord for GoogleProfile {
    fn validate(&self) -> AppResult<()> {
        self.record().validate()
    }

    fn auth_data(&self) -> String {
        self.record().auth_data()
    }

    fn to_user(&self) -> User {
        self.record().to_user()
    }
}

/// 스트림의 첫 번째 JSON 값만 읽습니다. 그 뒤의 데이터는 읽지 않고 남겨 둡니다.
fn decode_json<T, R>(reader: R) -> AppResult<T>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut deserializer = serde_json::Deserializer::from_reader(reader);
    T::deserialize(&mut deserializer).map_err(|e| AppError::from_json_error(&e))
}
