//! Google OAuth 프로바이더 서비스 메인 애플리케이션
//!
//! 환경 설정을 로드하고 프로바이더 레지스트리를 구성한 뒤
//! Actix-web 기반 HTTP 서버를 구동합니다.

use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use google_oauth_provider::config::{Environment, ServerConfig, SsoConfig};
use google_oauth_provider::core::ProviderRegistry;
use google_oauth_provider::errors::{AppResult, ErrorContext};
use google_oauth_provider::routes::configure_all_routes;
use google_oauth_provider::utils::display_terminal::print_registry_summary;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 Google OAuth 프로바이더 서비스 시작중...");

    run().await.map_err(|e| {
        error!("서비스 실행 실패: {}", e);
        std::io::Error::other(e.to_string())
    })
}

/// 설정 로드, 레지스트리 구성, HTTP 서버 실행
async fn run() -> AppResult<()> {
    let sso_config = SsoConfig::from_env()?;
    let registry = ProviderRegistry::from_config(&sso_config);

    print_registry_summary(&registry.services());

    if registry.is_empty() {
        info!("등록된 OAuth 프로바이더가 없습니다. GOOGLE_ENABLE 설정을 확인하세요");
    } else {
        info!("✅ OAuth 프로바이더 {}개 등록 완료", registry.len());
    }

    start_http_server(registry, sso_config).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 레지스트리와 SSO 설정은 `web::Data`로 한 번만 감싸 모든 워커가 공유합니다.
///
/// # Errors
///
/// * `AppError::InternalError` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(registry: ProviderRegistry, sso_config: SsoConfig) -> AppResult<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Providers: http://{}/api/v1/oauth/providers", bind_address);

    let registry = web::Data::new(registry);
    let sso_config = web::Data::new(sso_config);

    HttpServer::new(move || {
        App::new()
            .app_data(registry.clone())
            .app_data(sso_config.clone())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)
        .with_context(|| format!("{} 바인딩 실패", bind_address))?
        .run()
        .await
        .context("HTTP 서버 실행 오류")
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 결과는 표준 에러로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    eprintln!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => eprintln!(".env.prod 파일 로드 됨"),
            Err(e) => eprintln!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => eprintln!(".env.dev 파일 로드 됨"),
            Err(e) => eprintln!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            eprintln!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 `ENVIRONMENT`에 따른 기본 필터를 사용합니다.
///
/// ```bash
/// ENVIRONMENT=development cargo run
/// RUST_LOG=google_oauth_provider::services=debug cargo run
/// ```
fn init_logging() {
    let filter = Environment::current().default_log_filter();
    env_logger::init_from_env(Env::default().default_filter_or(filter));
}
