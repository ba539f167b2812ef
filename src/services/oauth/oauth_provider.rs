//! OAuth 프로바이더 계약
//!
//! 호스트의 프로바이더 레지스트리([`crate::core::registry::ProviderRegistry`])는
//! 서비스 이름별로 이 trait의 구현체를 보관하고 요청을 디스패치합니다.

use std::io::Read;
use crate::config::{SsoConfig, SsoSettings};
use crate::domain::entities::users::user::User;
use crate::errors::AppResult;

/// 외부 인증 프로바이더가 구현해야 하는 계약
///
/// 모든 메서드는 동기적으로 동작하며 호출 간 공유 가변 상태가 없으므로
/// 구현체는 `Arc`로 감싸 동시 호출에 그대로 사용할 수 있습니다.
pub trait OAuthProvider: Send + Sync {
    /// 프로바이더 이름 (로그 및 레지스트리 키)
    fn name(&self) -> &str;

    /// 프로바이더 사용자 정보 JSON을 정규화된 사용자로 변환합니다.
    ///
    /// 디코딩 → 검증 → 변환 순서로 처리하며, 부분 성공은 없습니다.
    /// `token_user`는 토큰에서 이미 얻은 사용자 정보가 있을 때 전달되며
    /// 필요 없는 프로바이더는 무시합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DecodeError` - JSON 형식 오류
    /// * `AppError::ValidationError` - 주체 식별자 또는 이메일 누락
    fn user_from_json(&self, data: &mut dyn Read, token_user: Option<&User>) -> AppResult<User>;

    /// 프로세스 전역 설정에서 이 프로바이더의 SSO 설정 섹션을 읽습니다.
    fn sso_settings<'a>(&self, config: &'a SsoConfig, service: &str) -> AppResult<&'a SsoSettings>;

    /// ID 토큰에서 사용자를 얻습니다. 지원하지 않으면 `Ok(None)`을 반환합니다.
    fn user_from_id_token(&self, id_token: &str) -> AppResult<Option<User>>;

    /// 저장된 사용자와 OAuth 사용자가 같은 원격 계정인지 확인합니다.
    fn is_same_user(&self, db_user: &User, oauth_user: &User) -> bool;
}
