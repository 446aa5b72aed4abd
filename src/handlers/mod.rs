//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청을 추출하고 서비스를 호출한 뒤 응답 DTO로 직렬화하는 일만 합니다.
//! 검증과 비즈니스 규칙은 서비스 계층에 있습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (배차 앱, 운영 도구)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                          ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   DriverService                               ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   DriverRepository (MongoDB / 인메모리)       ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 의존성 전달
//!
//! 서비스는 `web::Data<DriverService>`로 주입됩니다. 테스트에서는 인메모리 리포지토리로
//! 만든 서비스를 같은 방식으로 넣어 실제 라우팅을 그대로 검증합니다.
//!
//! ```rust,ignore
//! let service = DriverService::new(Arc::new(InMemoryDriverRepository::new()));
//! let app = App::new()
//!     .app_data(web::Data::new(service))
//!     .configure(configure_driver_routes);
//! ```
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! `AppError`의 `ResponseError` 구현이 상태 코드와 본문을 결정합니다.

pub mod drivers;
