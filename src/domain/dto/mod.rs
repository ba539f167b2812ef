//! HTTP 호스트용 DTO 모듈
//!
//! 프로바이더 디스패치 엔드포인트의 요청/응답 본문을 정의합니다.

pub mod oauth_request;
pub mod oauth_response;

pub use oauth_request::*;
pub use oauth_response::*;
