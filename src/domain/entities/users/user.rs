//! User Entity Implementation
//!
//! 외부 OAuth 프로바이더 프로필에서 만들어지는 정규화된 사용자 레코드입니다.
//! 영속화는 호출자 책임이며, 이 엔티티는 매핑 결과를 전달하는 역할만 합니다.

use serde::{Deserialize, Serialize};
use crate::config::AuthService;

/// 정규화된 사용자 레코드
///
/// `auth_data`는 원격 계정을 로컬 계정과 연결하는 유일한 조인 키이며,
/// 동일한 원격 계정이라면 로그인할 때마다 같은 값이어야 합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// 항상 소문자
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_data: Option<String>,
    pub auth_service: AuthService,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

impl User {
    /// OAuth 프로필에서 사용자를 생성합니다. 이메일은 공백 제거 후 소문자로 저장됩니다.
    pub fn new_oauth(
        username: String,
        first_name: String,
        last_name: String,
        email: &str,
        auth_service: AuthService,
        auth_data: String,
        profile_image_url: Option<String>,
    ) -> Self {
        Self {
            username,
            first_name,
            last_name,
            email: email.trim().to_lowercase(),
            auth_data: Some(auth_data),
            auth_service,
            profile_image_url,
        }
    }

    pub fn auth_data(&self) -> Option<&str> {
        self.auth_data.as_deref()
    }

    /// 두 레코드가 같은 원격 계정을 가리키는지 확인합니다.
    ///
    /// 양쪽 모두 `auth_data`가 있고 문자열 값이 같을 때만 `true`입니다.
    pub fn has_same_auth_data(&self, other: &User) -> bool {
        match (self.auth_data(), other.auth_data()) {
            (Some(mine), Some(theirs)) => !mine.is_empty() && mine == theirs,
            _ => false,
        }
    }
}
