//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 부트스트랩 과정(설정 로드, MongoDB 연결, 인덱스 생성, 바인딩)을
//! 터미널에 단계별로 표시합니다. 로그 레벨과 무관하게 항상 표준 출력으로 나갑니다.

/// 박스 내부 콘텐츠 너비
const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싼 제목을 만듭니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║              TaxiHub Driver Service              ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn format_boxed_title(title: &str) -> String {
    let border = "═".repeat(BOX_WIDTH);
    format!(
        "╔{border}╗\n║{title:^width$}║\n╚{border}╝",
        border = border,
        title = title,
        width = BOX_WIDTH
    )
}

pub fn print_boxed_title(title: &str) {
    println!("{}", format_boxed_title(title));
}

/// 부트스트랩 단계 시작 (`→ [2/4] Connecting to MongoDB`)
pub fn print_step_start(step: u8, total: u8, description: &str) {
    println!("→ [{}/{}] {}", step, total, description);
}

/// 단계 하위 항목 (`   ├─ database: taxihub`)
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 서버 시작 직전 요약
///
/// 바인딩 주소와 주요 엔드포인트를 한 번에 보여 줍니다.
pub fn print_startup_summary(bind_address: &str, environment: &str, database_name: &str) {
    println!();
    print_boxed_title("🚕 TaxiHub Driver Service READY");
    for (name, value) in startup_lines(bind_address, environment, database_name) {
        println!("   {}: {}", name, value);
    }
    println!();
}

fn startup_lines(
    bind_address: &str,
    environment: &str,
    database_name: &str,
) -> Vec<(&'static str, String)> {
    vec![
        ("🌐 Listening", format!("http://{}", bind_address)),
        ("🏷️  Environment", environment.to_string()),
        ("🗄️  Database", database_name.to_string()),
        ("📍 Health", format!("http://{}/health", bind_address)),
        ("📍 Drivers API", format!("http://{}/api/v1/drivers", bind_address)),
    ]
}
