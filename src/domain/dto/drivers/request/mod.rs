//! # 드라이버 요청 DTO 모듈
//!
//! 클라이언트가 보낸 JSON/쿼리를 검증된 도메인 값(`NewDriver`, `DriverPatch`, `Location`)이나
//! 순서 있는 필드 위반 목록으로 바꿉니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 (`serde`, 실패 시 400)
//! 2. **필드 검증**: `validator` derive 속성으로 선언된 길이/범위/형식 규칙
//! 3. **변환**: 번호판 공백 제거, 택시 종류 파싱, 위치 값 객체 생성

pub mod create_driver;
pub mod update_driver;
pub mod update_location;
pub mod queries;
mod rules;

pub use create_driver::CreateDriverRequest;
pub use update_driver::UpdateDriverRequest;
pub use update_location::UpdateLocationRequest;
pub use queries::{ListDriversQuery, NearbyQuery, DEFAULT_PAGE_SIZE};
