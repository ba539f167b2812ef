//! 도메인 엔티티 모듈
//!
//! 프로바이더 매핑의 결과로 호출자에게 넘겨지는 엔티티들을 정의합니다.

pub mod users;

pub use users::*;
