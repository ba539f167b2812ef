//! OAuth 프로바이더 요청 DTO

use serde::Deserialize;
use validator::Validate;
use crate::domain::entities::users::user::User;

/// 동일 사용자 비교 요청
///
/// 저장된 사용자와 방금 OAuth로 받은 사용자를 함께 전달합니다.
#[derive(Debug, Deserialize)]
pub struct SameUserRequest {
    pub db_user: User,
    pub oauth_user: User,
}

/// ID 토큰으로 사용자 조회 요청
#[derive(Debug, Deserialize, Validate)]
pub struct IdTokenRequest {
    #[validate(length(min = 1, message = "id_token은(는) 필수입니다"))]
    pub id_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthService;

    #[test]
    fn test_id_token_request_validation() {
        let empty: IdTokenRequest = serde_json::from_str(r#"{"id_token": ""}"#).unwrap();
        assert!(empty.validate().is_err());

        let present: IdTokenRequest = serde_json::from_str(r#"{"id_token": "eyJhbGciOi"}"#).unwrap();
        assert!(present.validate().is_ok());
    }

    #[test]
    fn test_same_user_request_deserialization() {
        let request: SameUserRequest = serde_json::from_str(
            r#"{
                "db_user": {"username": "a", "first_name": "", "last_name": "", "email": "a@b.com",
                            "auth_data": "1", "auth_service": "google"},
                "oauth_user": {"username": "b", "first_name": "", "last_name": "", "email": "b@b.com",
                               "auth_service": "google"}
            }"#,
        )
        .unwrap();

        assert_eq!(request.db_user.auth_data.as_deref(), Some("1"));
        assert_eq!(request.oauth_user.auth_data, None);
    }

    #[test]
    fn test_same_user_request_accepts_other_service_tags() {
        let request: SameUserRequest = serde_json::from_str(
            r#"{
                "db_user": {"username": "a", "first_name": "", "last_name": "", "email": "a@b.com",
                            "auth_data": "1", "auth_service": "gitlab"},
                "oauth_user": {"username": "a", "first_name": "", "last_name": "", "email": "a@b.com",
                               "auth_data": "1", "auth_service": "google"}
            }"#,
        )
        .unwrap();

        assert_eq!(request.db_user.auth_service, AuthService::Gitlab);
        assert_eq!(request.oauth_user.auth_service, AuthService::Google);
    }
}
