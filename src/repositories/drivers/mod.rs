//! # 드라이버 영속성 포트
//!
//! 서비스 계층이 의존하는 저장소 추상화(`DriverRepository`)와 구현체들입니다.
//!
//! - [`driver_repo::MongoDriverRepository`] - MongoDB (`drivers` 컬렉션, `2dsphere` 인덱스)
//! - [`memory_repo::InMemoryDriverRepository`] - 테스트용 인메모리 구현 (`testutils` 기능)
//!
//! 두 구현은 같은 계약을 따릅니다:
//!
//! - 형식이 잘못된 ID는 `InvalidId`이며 `NotFound`와 섞이지 않습니다.
//! - 번호판 중복은 `ConflictError`로, 다른 저장소 오류(`DatabaseError`)와 구분됩니다.
//! - 목록은 `created_at` 내림차순, 같으면 `_id` 내림차순입니다.
//! - 근처 검색은 거리 오름차순이며 최대 [`NEARBY_RESULT_LIMIT`]건입니다.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppError;
use crate::domain::entities::drivers::{Driver, DriverWithDistance, TaxiType};

pub mod driver_repo;
#[cfg(any(test, feature = "testutils"))]
pub mod memory_repo;

pub use driver_repo::MongoDriverRepository;
#[cfg(any(test, feature = "testutils"))]
pub use memory_repo::InMemoryDriverRepository;

/// 근처 검색 결과 최대 건수
pub const NEARBY_RESULT_LIMIT: usize = 50;

/// 드라이버 저장소 추상화
///
/// 서비스는 생성자로 `Arc<dyn DriverRepository>`를 주입받습니다.
///
/// ```rust,ignore
/// let repository: Arc<dyn DriverRepository> = Arc::new(MongoDriverRepository::new(&database));
/// let service = DriverService::new(repository);
/// ```
#[async_trait]
pub trait DriverRepository: Send + Sync {
    /// 새 드라이버를 저장하고 ID(24자리 16진수)를 반환합니다.
    async fn create(&self, driver: &Driver) -> Result<String, AppError>;

    /// 변경 가능한 모든 필드를 덮어씁니다. 일치하는 문서가 없으면 `NotFound`.
    async fn update(&self, id: &str, driver: &Driver) -> Result<(), AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Driver, AppError>;

    /// 정규화된 번호판으로 조회합니다.
    async fn find_by_plate(&self, plate: &str) -> Result<Driver, AppError>;

    /// 요청한 페이지와 전체 건수를 반환합니다. `page`는 1부터 시작합니다.
    async fn find_all(&self, page: u64, page_size: u64) -> Result<(Vec<Driver>, u64), AppError>;

    /// 반경(km) 안의 드라이버를 가까운 순으로 반환합니다.
    async fn find_nearby(
        &self,
        lat: f64,
        lon: f64,
        radius_km: f64,
        taxi_type: Option<TaxiType>,
    ) -> Result<Vec<DriverWithDistance>, AppError>;

    /// 삭제된 문서가 없으면 `NotFound`.
    async fn delete(&self, id: &str) -> Result<(), AppError>;

    /// 필요한 인덱스를 생성합니다. 이미 있으면 아무 일도 하지 않습니다.
    async fn ensure_indexes(&self) -> Result<(), AppError>;
}

/// 문자열 ID를 ObjectId로 파싱합니다.
pub(crate) fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::InvalidId(format!("유효하지 않은 ID 형식입니다: {}", id)))
}

/// 건너뛸 문서 수: `(page - 1) * page_size`
///
/// 건너뛸 수가 전체 건수 이상이면 `None`입니다. 이 경우 조회 없이 빈 페이지를 돌려줍니다.
/// 반환값은 항상 `total`보다 작으므로 MongoDB `skip`(i64)에 그대로 들어갑니다.
pub(crate) fn page_offset(page: u64, page_size: u64, total: u64) -> Option<u64> {
    let offset = page.saturating_sub(1).saturating_mul(page_size);
    (offset < total).then_some(offset)
}

pub(crate) fn driver_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("드라이버를 찾을 수 없습니다: id={}", id))
}

pub(crate) fn plate_not_found(plate: &str) -> AppError {
    AppError::NotFound(format!("드라이버를 찾을 수 없습니다: plate={}", plate))
}

pub(crate) fn plate_conflict(plate: &str) -> AppError {
    AppError::ConflictError(format!("이미 등록된 번호판입니다: {}", plate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id() {
        assert!(parse_object_id("65f1c0d2a4b3e1f2c3d4e5f6").is_ok());
        assert!(matches!(parse_object_id("abc"), Err(AppError::InvalidId(_))));
        assert!(matches!(
            parse_object_id("zzzzzzzzzzzzzzzzzzzzzzzz"),
            Err(AppError::InvalidId(_))
        ));
    }

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1, 20, 100), Some(0));
        assert_eq!(page_offset(3, 20, 100), Some(40));
        assert_eq!(page_offset(6, 20, 100), None);
        assert_eq!(page_offset(1, 20, 0), None);
        assert_eq!(page_offset(i64::MAX as u64, 100, 5), None);
        assert_eq!(page_offset(u64::MAX, 100, u64::MAX), None);
    }
}
