//! 도메인 모델 모듈
//!
//! 외부 프로바이더 응답처럼 영속화되지 않는 모델들을 정의합니다.

pub mod oauth;

pub use oauth::*;
