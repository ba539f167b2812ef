//! 애플리케이션 핵심 구성 요소
//!
//! 시작 시점에 구성되어 핸들러로 주입되는 OAuth 프로바이더 레지스트리를 제공합니다.

pub mod registry;

pub use registry::*;
