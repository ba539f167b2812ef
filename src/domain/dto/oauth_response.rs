//! OAuth 프로바이더 응답 DTO

use serde::Serialize;
use crate::domain::entities::users::user::User;

/// 등록된 프로바이더 목록 응답
#[derive(Debug, Serialize)]
pub struct ProvidersResponse {
    pub providers: Vec<String>,
}

/// 동일 사용자 비교 응답
#[derive(Debug, Serialize)]
pub struct SameUserResponse {
    pub same_user: bool,
}

/// ID 토큰 조회 응답. 프로바이더가 지원하지 않으면 `user`는 `null`입니다.
#[derive(Debug, Serialize)]
pub struct IdTokenResponse {
    pub user: Option<User>,
}
