//! Google OAuth 프로바이더
//!
//! Google 사용자 정보 응답을 정규화된 [`User`]로 변환합니다.
//! 응답 형태(userinfo / People / OIDC)는 생성 시점에 설정으로 고정됩니다.

use std::io::Read;
use crate::config::{AuthService, SsoConfig, SsoSettings};
use crate::domain::entities::users::user::User;
use crate::domain::models::oauth::google_oauth_model::{GoogleProfile, ProfileRecord, ProfileShape};
use crate::errors::AppResult;
use super::oauth_provider::OAuthProvider;

/// Google 프로필 매퍼
#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleProvider {
    shape: ProfileShape,
}

impl GoogleProvider {
    pub fn new(shape: ProfileShape) -> Self {
        Self { shape }
    }

    /// SSO 설정에 지정된 응답 형태로 프로바이더를 생성합니다.
    pub fn from_settings(settings: &SsoSettings) -> Self {
        Self::new(settings.profile_shape)
    }

    pub fn shape(&self) -> ProfileShape {
        self.shape
    }

    /// 응답을 디코딩하고 필수 필드를 검증합니다.
    fn decode_valid_profile(&self, data: &mut dyn Read) -> AppResult<GoogleProfile> {
        let profile = GoogleProfile::decode(self.shape, data).inspect_err(|e| {
            log::warn!("Google 프로필 디코딩 실패 - shape: {}, 에러: {}", self.shape.as_str(), e);
        })?;

        profile.validate().inspect_err(|e| {
            log::warn!("Google 프로필 검증 실패 - shape: {}, 에러: {}", self.shape.as_str(), e);
        })?;

        Ok(profile)
    }
}

impl OAuthProvider for GoogleProvider {
    fn name(&self) -> &str {
        AuthService::Google.as_str()
    }

    fn user_from_json(&self, data: &mut dyn Read, _token_user: Option<&User>) -> AppResult<User> {
        let profile = self.decode_valid_profile(data)?;
        let user = profile.to_user();

        log::debug!(
            "Google 사용자 매핑 완료 - shape: {}, auth_data: {}, username: {}",
            self.shape.as_str(),
            user.auth_data().unwrap_or_default(),
            user.username
        );

        Ok(user)
    }

    fn sso_settings<'a>(&self, config: &'a SsoConfig, _service: &str) -> AppResult<&'a SsoSettings> {
        Ok(&config.google_settings)
    }

    fn user_from_id_token(&self, _id_token: &str) -> AppResult<Option<User>> {
        Ok(None)
    }

    fn is_same_user(&self, db_user: &User, oauth_user: &User) -> bool {
        db_user.has_same_auth_data(oauth_user)
    }
}
