//! 터미널 출력 포맷팅 유틸리티
//! 
//! 애플리케이션 시작 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 등록된 프로바이더 목록, 최종 요약을 시각적으로 표현합니다.

/// 박스 형태의 제목을 출력합니다.
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);  // ^49로 49칸 중앙 정렬
    println!("╚{}╝", border);
}

/// 하위 작업 항목을 트리 형태로 출력합니다.
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 프로바이더 레지스트리 구성 결과를 요약 출력합니다.
pub fn print_registry_summary(services: &[String]) {
    println!();
    print_boxed_title("🔐 OAUTH PROVIDER REGISTRY READY");
    for service in services {
        print_sub_task(service, "✓ Registered");
    }
    println!("   🚀 Total Providers: {}", services.len());
    println!();
}
