//! 공통 유틸리티 함수 모듈
//! 
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//! 문자열 처리, 터미널 출력 등의 기능을 포함합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 사용자명 정리, 이름 분리 유틸리티
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{clean_username, split_full_name};
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! let username = clean_username("Jane Doe");      // "jane-doe"
//! let (first, last) = split_full_name("Jane Q Doe"); // ("Jane", "Q Doe")
//!
//! print_boxed_title("Provider Registry Ready");
//! ```

pub mod string_utils;
pub mod display_terminal;
