//! # OAuth Provider Registry
//!
//! 서비스 이름으로 OAuth 프로바이더를 찾는 레지스트리입니다.
//!
//! 프로세스 전역 상태나 초기화 순서에 의존하지 않고, 시작 시점에 한 번 구성한 뒤
//! `web::Data`로 핸들러에 주입합니다. 구성이 끝난 레지스트리는 읽기 전용이므로
//! 별도의 잠금 없이 여러 워커에서 공유됩니다.
//!
//! ```rust,ignore
//! let registry = ProviderRegistry::new()
//!     .with_provider("google", Arc::new(GoogleProvider::new(ProfileShape::Oidc)));
//!
//! let provider = registry.get("google")?;
//! let user = provider.user_from_json(&mut body.as_ref(), None)?;
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use crate::config::{AuthService, SsoConfig};
use crate::errors::{AppError, AppResult};
use crate::services::oauth::{GoogleProvider, OAuthProvider};

/// 서비스 이름 → 프로바이더 매핑
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn OAuthProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 설정에서 활성화된 프로바이더만 등록한 레지스트리를 구성합니다.
    pub fn from_config(config: &SsoConfig) -> Self {
        let mut registry = Self::new();

        if config.google_settings.enable {
            registry.register(
                AuthService::Google.as_str(),
                Arc::new(GoogleProvider::from_settings(&config.google_settings)),
            );
        } else {
            log::info!("Google SSO 비활성화 - 프로바이더를 등록하지 않습니다");
        }

        registry
    }

    /// 프로바이더를 등록합니다. 같은 이름이 이미 있으면 교체합니다.
    pub fn register(&mut self, service: &str, provider: Arc<dyn OAuthProvider>) {
        let key = service.trim().to_lowercase();

        if self.providers.insert(key.clone(), provider).is_some() {
            log::warn!("OAuth 프로바이더 교체됨 - service: {}", key);
        } else {
            log::info!("OAuth 프로바이더 등록됨 - service: {}", key);
        }
    }

    pub fn with_provider(mut self, service: &str, provider: Arc<dyn OAuthProvider>) -> Self {
        self.register(service, provider);
        self
    }

    /// 서비스 이름으로 프로바이더를 조회합니다. 이름은 대소문자를 구분하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 등록되지 않은 서비스
    pub fn get(&self, service: &str) -> AppResult<Arc<dyn OAuthProvider>> {
        self.providers
            .get(&service.trim().to_lowercase())
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("OAuth provider '{}' is not registered", service)))
    }

    /// 등록된 서비스 이름 (정렬됨)
    pub fn services(&self) -> Vec<String> {
        let mut services: Vec<String> = self.providers.keys().cloned().collect();
        services.sort();
        services
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("services", &self.services())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GoogleOAuthConfig;
    use crate::domain::models::oauth::google_oauth_model::ProfileShape;

    fn config_with(pairs: &'static [(&'static str, &'static str)]) -> SsoConfig {
        let lookup = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        };
        SsoConfig {
            google_settings: GoogleOAuthConfig::sso_settings_from(lookup).unwrap(),
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = ProviderRegistry::new();

        assert!(registry.is_empty());
        assert!(registry.services().is_empty());
        assert!(matches!(registry.get("google"), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_register_and_get() {
        let registry = ProviderRegistry::new()
            .with_provider("google", Arc::new(GoogleProvider::new(ProfileShape::People)));

        let provider = registry.get("google").unwrap();
        assert_eq!(provider.name(), "google");
        assert!(registry.get("Google").is_ok());
        assert!(registry.get(" GOOGLE ").is_ok());
        assert!(matches!(registry.get("gitlab"), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_register_replaces_existing_entry() {
        let mut registry = ProviderRegistry::new();
        registry.register("google", Arc::new(GoogleProvider::new(ProfileShape::UserInfo)));
        registry.register("google", Arc::new(GoogleProvider::new(ProfileShape::Oidc)));

        assert_eq!(registry.len(), 1);

        // 교체된 프로바이더는 OIDC 형태(문자열 sub)를 받아야 함
        let user = registry
            .get("google")
            .unwrap()
            .user_from_json(&mut &br#"{"sub": "abc", "email": "a@b.com"}"#[..], None)
            .unwrap();
        assert_eq!(user.auth_data(), Some("abc"));
    }

    #[test]
    fn test_services_are_sorted() {
        let registry = ProviderRegistry::new()
            .with_provider("openid", Arc::new(GoogleProvider::default()))
            .with_provider("google", Arc::new(GoogleProvider::default()));

        assert_eq!(registry.services(), vec!["google".to_string(), "openid".to_string()]);
    }

    #[test]
    fn test_from_config_registers_enabled_google() {
        let registry = ProviderRegistry::from_config(&config_with(&[
            ("GOOGLE_ENABLE", "true"),
            ("GOOGLE_CLIENT_ID", "client-id"),
            ("GOOGLE_CLIENT_SECRET", "client-secret"),
            ("GOOGLE_PROFILE_SHAPE", "people"),
        ]));

        assert_eq!(registry.services(), vec!["google".to_string()]);
    }

    #[test]
    fn test_from_config_skips_disabled_google() {
        let registry = ProviderRegistry::from_config(&config_with(&[("GOOGLE_ENABLE", "false")]));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_debug_lists_services_only() {
        let registry = ProviderRegistry::new().with_provider("google", Arc::new(GoogleProvider::default()));
        assert_eq!(format!("{:?}", registry), r#"ProviderRegistry { services: ["google"] }"#);
    }
}
