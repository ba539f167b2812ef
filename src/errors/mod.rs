//! 에러 모듈
//!
//! 프로바이더 매핑, 설정, HTTP 계층에서 공통으로 사용하는 에러 타입을 제공합니다.

pub mod errors;

pub use errors::*;
