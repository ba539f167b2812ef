//! 문자열 처리 유틸리티
//!
//! 프로필 매핑에 필요한 문자열 검증, 정리, 변환 함수들을 제공합니다.
//! 사용자명 정규화(`clean_username`)와 전체 이름 분리(`split_full_name`)가
//! 이 모듈의 핵심 기능입니다.

use serde::Deserialize;
use uuid::Uuid;
use crate::errors::AppError;

/// 사용자명 최소 길이
pub const USERNAME_MIN_LENGTH: usize = 1;

/// 사용자명 최대 길이
pub const USERNAME_MAX_LENGTH: usize = 64;

/// 시스템 경로와 충돌하여 사용자명으로 쓸 수 없는 이름들
pub const RESERVED_USERNAMES: &[&str] = &[
    "admin",
    "api",
    "channel",
    "claim",
    "error",
    "files",
    "help",
    "landing",
    "login",
    "mfa",
    "oauth",
    "plugin",
    "post",
    "signup",
    "boards",
    "playbooks",
];

/// 필수 문자열 필드를 검증하고 앞뒤 공백을 제거한 값을 반환합니다.
///
/// # Errors
///
/// * `AppError::ValidationError` - 값이 비어 있거나 공백뿐인 경우
///
/// # Examples
///
/// ```rust,ignore
/// let email = validate_required_string("  jane@example.com ", "email")?;
/// assert_eq!(email, "jane@example.com");
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{} should not be empty", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열을 정리합니다. 공백뿐인 값은 `None`이 됩니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 문자열이 공백이 아닌 내용을 가지고 있는지 확인합니다.
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// serde 역직렬화 시 빈 문자열과 `null`을 `None`으로 정리합니다.
///
/// 필드가 아예 없는 경우를 위해 `#[serde(default)]`와 함께 사용해야 합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// serde 역직렬화 시 `null`을 타입의 기본값(빈 문자열, 빈 배열 등)으로 읽습니다.
///
/// 필수 여부는 디코딩이 아니라 검증 단계에서 판단하므로, 값이 `null`이어도
/// 디코딩 에러가 아닌 빈 값으로 취급합니다. `#[serde(default)]`와 함께 사용합니다.
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// 전체 이름을 (이름, 성)으로 분리합니다.
///
/// 공백 기준 토큰이 둘이면 각각 이름/성, 셋 이상이면 첫 토큰이 이름이고
/// 나머지를 공백 하나로 이어 붙여 성으로 사용합니다.
/// 토큰이 하나 이하면 전체 문자열(앞뒤 공백 제거)이 이름이 되고 성은 비어 있습니다.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(split_full_name("Jane Doe"), ("Jane".into(), "Doe".into()));
/// assert_eq!(split_full_name("Jane Q Doe"), ("Jane".into(), "Q Doe".into()));
/// assert_eq!(split_full_name("Prince"), ("Prince".into(), String::new()));
/// ```
pub fn split_full_name(name: &str) -> (String, String) {
    let tokens: Vec<&str> = name.split_whitespace().collect();

    match tokens.as_slice() {
        [first, rest @ ..] if !rest.is_empty() => (first.to_string(), rest.join(" ")),
        _ => (name.trim().to_string(), String::new()),
    }
}

/// 이메일 주소의 로컬 파트(`@` 앞부분)를 반환합니다.
pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or_default()
}

fn is_valid_username_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '-' | '_')
}

/// 사용자명이 유효한지 확인합니다.
///
/// 길이 1-64자, 소문자 알파벳으로 시작, `[a-z0-9._-]` 문자만 포함,
/// 예약어가 아닐 것.
pub fn is_valid_username(username: &str) -> bool {
    let length = username.chars().count();
    if !(USERNAME_MIN_LENGTH..=USERNAME_MAX_LENGTH).contains(&length) {
        return false;
    }

    let starts_with_letter = username
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_lowercase());

    starts_with_letter
        && username.chars().all(is_valid_username_char)
        && !RESERVED_USERNAMES.contains(&username)
}

/// 프로바이더가 넘겨준 사용자명 후보를 내부 사용자명 규칙에 맞게 정리합니다.
///
/// 1. 공백을 `-`로 바꾸고 소문자로 변환
/// 2. 예약어는 빈 문자열로 대체
/// 3. 허용되지 않는 문자는 `-`로 대체
/// 4. 앞뒤 `-` 제거
/// 5. 그래도 유효하지 않으면 `a` + UUID 형태의 새 사용자명 생성
pub fn clean_username(username: &str) -> String {
    let mut normalized = username.replace(' ', "-").to_lowercase();

    if RESERVED_USERNAMES.contains(&normalized.as_str()) {
        normalized.clear();
    }

    let replaced: String = normalized
        .trim()
        .chars()
        .map(|c| if is_valid_username_char(c) { c } else { '-' })
        .collect();

    let cleaned = replaced.trim_matches('-');

    if is_valid_username(cleaned) {
        return cleaned.to_string();
    }

    let generated = format!("a{}", Uuid::new_v4().simple());
    log::warn!(
        "유효하지 않은 사용자명 대신 새 사용자명을 생성합니다 - 생성된 사용자명: {}",
        generated
    );
    generated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        // 성공 케이스
        assert_eq!(validate_required_string("Hello", "name").unwrap(), "Hello");
        assert_eq!(validate_required_string("  World  ", "name").unwrap(), "World");

        // 실패 케이스
        assert!(validate_required_string("", "name").is_err());
        assert!(validate_required_string("   ", "name").is_err());
        assert!(validate_required_string("\t\n", "name").is_err());
    }

    #[test]
    fn test_validate_required_string_message_names_field() {
        match validate_required_string("", "user e-mail") {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, "user e-mail should not be empty"),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_is_valid_string() {
        assert!(is_valid_string("Hello"));
        assert!(is_valid_string("  World  "));
        assert!(!is_valid_string(""));
        assert!(!is_valid_string("   "));
        assert!(!is_valid_string("\t\n"));
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            picture: Option<String>,
        }

        let json = r#"{"picture": "  https://example.com/a.png  "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.picture, Some("https://example.com/a.png".to_string()));

        let json = r#"{"picture": ""}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.picture, None);

        let json = r#"{"picture": null}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.picture, None);

        // 필드가 없는 경우 - default 적용
        let result: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(result.picture, None);
    }

    #[test]
    fn test_deserialize_null_default() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_null_default")]
            name: String,
            #[serde(default, deserialize_with = "deserialize_null_default")]
            tags: Vec<String>,
        }

        let result: TestStruct = serde_json::from_str(r#"{"name": null, "tags": null}"#).unwrap();
        assert_eq!(result.name, "");
        assert!(result.tags.is_empty());

        let result: TestStruct = serde_json::from_str(r#"{"name": " Jane ", "tags": ["a"]}"#).unwrap();
        assert_eq!(result.name, " Jane ");
        assert_eq!(result.tags, vec!["a".to_string()]);

        let result: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(result.name, "");

        // 타입 불일치는 여전히 에러
        assert!(serde_json::from_str::<TestStruct>(r#"{"name": 5}"#).is_err());
    }

    #[test]
    fn test_split_full_name() {
        assert_eq!(split_full_name("Jane Doe"), ("Jane".to_string(), "Doe".to_string()));
        assert_eq!(split_full_name("Jane Q Doe"), ("Jane".to_string(), "Q Doe".to_string()));
        assert_eq!(split_full_name("Prince"), ("Prince".to_string(), String::new()));
        assert_eq!(split_full_name(""), (String::new(), String::new()));
    }

    #[test]
    fn test_split_full_name_collapses_extra_whitespace() {
        assert_eq!(split_full_name("  Jane   Doe "), ("Jane".to_string(), "Doe".to_string()));
        assert_eq!(
            split_full_name("Maria  de la  Cruz"),
            ("Maria".to_string(), "de la Cruz".to_string())
        );
        assert_eq!(split_full_name("  Cher  "), ("Cher".to_string(), String::new()));
    }

    #[test]
    fn test_split_full_name_with_korean() {
        assert_eq!(split_full_name("길동 홍"), ("길동".to_string(), "홍".to_string()));
        assert_eq!(split_full_name("홍길동"), ("홍길동".to_string(), String::new()));
    }

    #[test]
    fn test_email_local_part() {
        assert_eq!(email_local_part("jane.doe@example.com"), "jane.doe");
        assert_eq!(email_local_part("no-at-sign"), "no-at-sign");
        assert_eq!(email_local_part(""), "");
    }

    #[test]
    fn test_is_valid_username() {
        assert!(is_valid_username("jane"));
        assert!(is_valid_username("jane.doe_1-x"));
        assert!(!is_valid_username(""));
        assert!(!is_valid_username("1jane"));
        assert!(!is_valid_username("Jane"));
        assert!(!is_valid_username("jane doe"));
        assert!(!is_valid_username("admin"));
        assert!(!is_valid_username(&"a".repeat(USERNAME_MAX_LENGTH + 1)));
        assert!(is_valid_username(&"a".repeat(USERNAME_MAX_LENGTH)));
    }

    #[test]
    fn test_clean_username_keeps_valid_names() {
        assert_eq!(clean_username("jdoe"), "jdoe");
        assert_eq!(clean_username("JDoe"), "jdoe");
        assert_eq!(clean_username("Jane Doe"), "jane-doe");
    }

    #[test]
    fn test_clean_username_replaces_invalid_chars() {
        assert_eq!(clean_username("jane+doe!"), "jane-doe");
        assert_eq!(clean_username("--jane--"), "jane");
        assert_eq!(clean_username("jané"), "jan");
    }

    #[test]
    fn test_clean_username_generates_for_reserved_or_empty() {
        for raw in ["admin", "", "   ", "!!!", "123", "홍길동"] {
            let cleaned = clean_username(raw);
            assert!(cleaned.starts_with('a'), "raw: {:?}, cleaned: {}", raw, cleaned);
            assert_eq!(cleaned.len(), 33, "raw: {:?}, cleaned: {}", raw, cleaned);
            assert!(is_valid_username(&cleaned));
        }
    }

    #[test]
    fn test_clean_username_generated_names_are_unique() {
        assert_ne!(clean_username("admin"), clean_username("admin"));
    }
}
