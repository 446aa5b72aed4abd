//! # 드라이버 디렉터리 서비스 구현
//!
//! 드라이버 프로필의 등록, 조회, 부분 수정, 위치 갱신, 삭제, 목록, 근처 검색을 담당합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! Handler ─▶ DriverService ─▶ Request DTO 검증 ─▶ DriverRepository ─▶ 결과 정리
//! ```
//!
//! ## 규칙
//!
//! - 검증 실패는 위반된 모든 필드를 담은 `ValidationError`로 즉시 반환합니다.
//! - 페이지 번호는 1 이상, 페이지 크기는 1-100으로 보정하며 거부하지 않습니다.
//! - 근처 검색 반경은 5km, 결과는 최대 50건이며 가까운 순입니다.
//! - 재시도하지 않습니다. 기한(deadline)은 호출자가 future를 버리는 방식으로 적용합니다.

use std::sync::Arc;

use log::{debug, info};

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::dto::drivers::request::{
    CreateDriverRequest, UpdateDriverRequest, UpdateLocationRequest,
};
use crate::domain::dto::validation::FieldViolation;
use crate::domain::entities::drivers::{
    Driver, DriverWithDistance, Location, PaginatedDrivers, TaxiType,
};
use crate::repositories::drivers::{DriverRepository, NEARBY_RESULT_LIMIT};
use crate::utils::string_utils::normalize_plate;

/// 근처 검색 반경 (km)
pub const NEARBY_RADIUS_KM: f64 = 5.0;

/// 한 페이지 최대 건수
pub const MAX_PAGE_SIZE: i64 = 100;

/// 드라이버 디렉터리 서비스
///
/// 저장소는 생성자로 주입받습니다. 서비스는 커넥션을 만들거나 닫지 않습니다.
///
/// ```rust,ignore
/// let repository: Arc<dyn DriverRepository> = Arc::new(MongoDriverRepository::new(&database));
/// let service = DriverService::new(repository);
///
/// let id = service.create_driver(request).await?;
/// let driver = service.get_driver_by_id(&id).await?;
/// ```
#[derive(Clone)]
pub struct DriverService {
    repository: Arc<dyn DriverRepository>,
}

impl DriverService {
    pub fn new(repository: Arc<dyn DriverRepository>) -> Self {
        Self { repository }
    }

    /// 새 드라이버 등록
    ///
    /// # 반환값
    ///
    /// * `Ok(String)` - 할당된 ID (24자리 16진수)
    /// * `Err(AppError::ValidationError)` - 필드 검증 실패
    /// * `Err(AppError::ConflictError)` - 이미 등록된 번호판
    pub async fn create_driver(&self, request: CreateDriverRequest) -> AppResult<String> {
        let driver = Driver::new(request.into_new_driver()?);

        let id = self
            .repository
            .create(&driver)
            .await
            .with_context(|| format!("create_driver plate={}", driver.plate))?;

        info!("🚕 드라이버 등록: id={}, plate={}", id, driver.plate);
        Ok(id)
    }

    /// ID로 드라이버 조회
    ///
    /// 형식이 잘못된 ID는 `InvalidId`, 없는 드라이버는 `NotFound`입니다.
    pub async fn get_driver_by_id(&self, id: &str) -> AppResult<Driver> {
        debug!("드라이버 조회: id={}", id);
        self.repository
            .find_by_id(id)
            .await
            .with_context(|| format!("get_driver_by_id id={}", id))
    }

    /// 번호판으로 드라이버 조회
    ///
    /// 공백을 제거한 뒤 조회합니다. 비어 있으면 `plate` 필드의 `required` 위반입니다.
    pub async fn get_driver_by_plate(&self, plate: &str) -> AppResult<Driver> {
        let plate = normalize_plate(plate);
        if plate.is_empty() {
            return Err(AppError::validation(FieldViolation::required("plate")));
        }

        debug!("드라이버 조회: plate={}", plate);
        self.repository
            .find_by_plate(&plate)
            .await
            .with_context(|| format!("get_driver_by_plate plate={}", plate))
    }

    /// 드라이버 목록 (최근 등록 순)
    ///
    /// 페이지 인자는 보정만 하고 거부하지 않습니다.
    /// 마지막 페이지를 넘어선 요청은 빈 페이지를 돌려줍니다.
    pub async fn list_drivers(&self, page: i64, page_size: i64) -> AppResult<PaginatedDrivers> {
        let (page, page_size) = normalize_pagination(page, page_size);

        let (drivers, total_count) = self
            .repository
            .find_all(page, page_size)
            .await
            .with_context(|| format!("list_drivers page={} page_size={}", page, page_size))?;

        debug!(
            "드라이버 목록: page={}, page_size={}, total={}",
            page, page_size, total_count
        );
        Ok(PaginatedDrivers::new(drivers, page, page_size, total_count))
    }

    /// 부분 수정
    ///
    /// 요청에 있는 필드만 바꾸고, 위치는 `lat`/`lon`이 모두 있을 때만 교체합니다.
    /// 수정 시각은 항상 이전 값보다 커집니다.
    pub async fn update_driver(
        &self,
        id: &str,
        request: UpdateDriverRequest,
    ) -> AppResult<Driver> {
        let patch = request.into_patch()?;
        if patch.is_empty() {
            debug!("변경할 필드 없음, 수정 시각만 갱신: id={}", id);
        }

        let context = || format!("update_driver id={}", id);
        let mut driver = self.repository.find_by_id(id).await.with_context(context)?;
        driver.apply_patch(patch);

        self.repository
            .update(id, &driver)
            .await
            .with_context(context)?;

        info!("✏️ 드라이버 수정: id={}", id);
        Ok(driver)
    }

    /// 위치 갱신
    pub async fn update_driver_location(
        &self,
        id: &str,
        request: UpdateLocationRequest,
    ) -> AppResult<()> {
        let location = request.into_location()?;

        let context = || format!("update_driver_location id={}", id);
        let mut driver = self.repository.find_by_id(id).await.with_context(context)?;
        driver.relocate(location);

        self.repository
            .update(id, &driver)
            .await
            .with_context(context)?;

        info!(
            "📍 드라이버 위치 갱신: id={}, lat={}, lon={}",
            id, location.lat, location.lon
        );
        Ok(())
    }

    /// 삭제
    ///
    /// 존재를 먼저 확인하므로 잘못된 ID와 없는 ID가 구분됩니다.
    pub async fn delete_driver(&self, id: &str) -> AppResult<()> {
        let context = || format!("delete_driver id={}", id);
        self.repository.find_by_id(id).await.with_context(context)?;
        self.repository.delete(id).await.with_context(context)?;

        info!("🗑️ 드라이버 삭제: id={}", id);
        Ok(())
    }

    /// 근처 드라이버 검색
    ///
    /// # 인자
    ///
    /// * `lat`, `lon` - 검색 지점 (범위를 벗어나면 `InvalidLocation`)
    /// * `taxi_type` - 택시 종류 필터. `None`이나 빈 문자열이면 필터 없음,
    ///   그 외 허용 목록에 없는 값은 `InvalidTaxiType`
    ///
    /// 반경 [`NEARBY_RADIUS_KM`] 안의 드라이버를 가까운 순으로 최대 50건 반환합니다.
    pub async fn find_nearby_drivers(
        &self,
        lat: f64,
        lon: f64,
        taxi_type: Option<&str>,
    ) -> AppResult<Vec<DriverWithDistance>> {
        let center = Location::new(lat, lon).map_err(AppError::InvalidLocation)?;

        let taxi_type = match taxi_type {
            Some(value) if !value.is_empty() => {
                Some(value.parse::<TaxiType>().map_err(AppError::InvalidTaxiType)?)
            }
            _ => None,
        };

        let mut found = self
            .repository
            .find_nearby(center.lat, center.lon, NEARBY_RADIUS_KM, taxi_type)
            .await
            .with_context(|| format!("find_nearby_drivers lat={} lon={}", lat, lon))?;

        found.retain(|f| f.distance_km <= NEARBY_RADIUS_KM);
        found.sort_by(|a, b| {
            a.distance_km
                .total_cmp(&b.distance_km)
                .then_with(|| a.driver.id.cmp(&b.driver.id))
        });
        found.truncate(NEARBY_RESULT_LIMIT);

        debug!(
            "근처 드라이버 검색: lat={}, lon={}, taxi_type={:?}, found={}",
            lat,
            lon,
            taxi_type,
            found.len()
        );
        Ok(found)
    }
}

/// `page >= 1`, `1 <= page_size <= 100`
fn normalize_pagination(page: i64, page_size: i64) -> (u64, u64) {
    let page = page.max(1) as u64;
    let page_size = page_size.clamp(1, MAX_PAGE_SIZE) as u64;
    (page, page_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::drivers::InMemoryDriverRepository;

    fn service() -> (DriverService, InMemoryDriverRepository) {
        let repository = InMemoryDriverRepository::new();
        (DriverService::new(Arc::new(repository.clone())), repository)
    }

    fn create_request(plate: &str, lat: f64, lon: f64) -> CreateDriverRequest {
        CreateDriverRequest {
            first_name: Some("Ahmet".to_string()),
            last_name: Some("Yilmaz".to_string()),
            plate: Some(plate.to_string()),
            taxi_type: Some("sari".to_string()),
            car_brand: Some("Fiat".to_string()),
            car_model: Some("Egea".to_string()),
            lat: Some(lat),
            lon: Some(lon),
        }
    }

    #[actix_web::test]
    async fn test_create_then_get_returns_input() {
        let (service, _) = service();

        let id = service
            .create_driver(create_request("34 ABC 123", 41.0, 29.0))
            .await
            .unwrap();
        let driver = service.get_driver_by_id(&id).await.unwrap();

        assert_eq!(driver.id_string(), id);
        assert_eq!(driver.first_name, "Ahmet");
        assert_eq!(driver.last_name, "Yilmaz");
        assert_eq!(driver.plate, "34ABC123");
        assert_eq!(driver.taxi_type, TaxiType::Sari);
        assert_eq!(driver.car_brand, "Fiat");
        assert_eq!(driver.car_model, "Egea");
        assert_eq!(driver.location, Location { lat: 41.0, lon: 29.0 });
        assert_eq!(driver.created_at, driver.updated_at);
    }

    #[actix_web::test]
    async fn test_create_invalid_request_stores_nothing() {
        let (service, repository) = service();

        let result = service
            .create_driver(CreateDriverRequest::default())
            .await;

        match result {
            Err(AppError::ValidationError(violations)) => assert_eq!(violations.len(), 8),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(repository.is_empty());
    }

    #[actix_web::test]
    async fn test_duplicate_plate_is_conflict_and_not_counted() {
        let (service, _) = service();

        service
            .create_driver(create_request("34ABC123", 41.0, 29.0))
            .await
            .unwrap();
        let second = service
            .create_driver(create_request("34 ABC 123", 40.0, 30.0))
            .await;

        assert!(matches!(second, Err(AppError::ConflictError(_))));

        let page = service.list_drivers(1, 20).await.unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.drivers.len(), 1);
    }

    #[actix_web::test]
    async fn test_get_by_id_distinguishes_invalid_and_missing() {
        let (service, _) = service();

        assert!(matches!(
            service.get_driver_by_id("not-an-id").await,
            Err(AppError::InvalidId(_))
        ));
        assert!(matches!(
            service.get_driver_by_id("65f1c0d2a4b3e1f2c3d4e5f6").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_get_by_plate_normalizes_whitespace() {
        let (service, _) = service();
        let id = service
            .create_driver(create_request("34ABC123", 41.0, 29.0))
            .await
            .unwrap();

        let driver = service.get_driver_by_plate(" 34 ABC 123 ").await.unwrap();
        assert_eq!(driver.id_string(), id);

        assert!(matches!(
            service.get_driver_by_plate("06XYZ456").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_get_by_empty_plate_is_required_violation() {
        let (service, _) = service();

        match service.get_driver_by_plate("   ").await {
            Err(AppError::ValidationError(violations)) => {
                assert_eq!(violations, vec![FieldViolation::required("plate")]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_partial_update_leaves_absent_fields_unchanged() {
        let (service, _) = service();
        let id = service
            .create_driver(create_request("34ABC123", 41.0, 29.0))
            .await
            .unwrap();
        let before = service.get_driver_by_id(&id).await.unwrap();

        let updated = service
            .update_driver(
                &id,
                UpdateDriverRequest {
                    taxi_type: Some("turkuaz".to_string()),
                    ..UpdateDriverRequest::default()
                },
            )
            .await
            .unwrap();
        let stored = service.get_driver_by_id(&id).await.unwrap();

        assert_eq!(stored, updated);
        assert_eq!(stored.taxi_type, TaxiType::Turkuaz);
        assert_eq!(stored.plate, before.plate);
        assert_eq!(stored.first_name, before.first_name);
        assert_eq!(stored.last_name, before.last_name);
        assert_eq!(stored.car_brand, before.car_brand);
        assert_eq!(stored.car_model, before.car_model);
        assert_eq!(stored.location, before.location);
        assert_eq!(stored.created_at, before.created_at);
        assert!(stored.updated_at > before.updated_at);
    }

    #[actix_web::test]
    async fn test_update_location_needs_both_coordinates() {
        let (service, _) = service();
        let id = service
            .create_driver(create_request("34ABC123", 41.0, 29.0))
            .await
            .unwrap();

        let only_lat = service
            .update_driver(
                &id,
                UpdateDriverRequest {
                    lat: Some(40.0),
                    ..UpdateDriverRequest::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(only_lat.location, Location { lat: 41.0, lon: 29.0 });

        let both = service
            .update_driver(
                &id,
                UpdateDriverRequest {
                    lat: Some(40.0),
                    lon: Some(30.0),
                    ..UpdateDriverRequest::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(both.location, Location { lat: 40.0, lon: 30.0 });
    }

    #[actix_web::test]
    async fn test_update_errors() {
        let (service, _) = service();

        assert!(matches!(
            service
                .update_driver("bad", UpdateDriverRequest::default())
                .await,
            Err(AppError::InvalidId(_))
        ));
        assert!(matches!(
            service
                .update_driver("65f1c0d2a4b3e1f2c3d4e5f6", UpdateDriverRequest::default())
                .await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_update_driver_location() {
        let (service, _) = service();
        let id = service
            .create_driver(create_request("34ABC123", 41.0, 29.0))
            .await
            .unwrap();
        let before = service.get_driver_by_id(&id).await.unwrap();

        service
            .update_driver_location(
                &id,
                UpdateLocationRequest {
                    lat: Some(41.05),
                    lon: Some(29.05),
                },
            )
            .await
            .unwrap();

        let after = service.get_driver_by_id(&id).await.unwrap();
        assert_eq!(after.location, Location { lat: 41.05, lon: 29.05 });
        assert!(after.updated_at > before.updated_at);

        assert!(matches!(
            service
                .update_driver_location(&id, UpdateLocationRequest::default())
                .await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_delete_driver() {
        let (service, repository) = service();
        let id = service
            .create_driver(create_request("34ABC123", 41.0, 29.0))
            .await
            .unwrap();

        service.delete_driver(&id).await.unwrap();
        assert!(repository.is_empty());

        assert!(matches!(
            service.delete_driver(&id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_driver("xyz").await,
            Err(AppError::InvalidId(_))
        ));
    }

    #[actix_web::test]
    async fn test_pagination_is_clamped() {
        let (service, _) = service();
        for i in 0..105 {
            service
                .create_driver(create_request(&format!("34AB{}", i), 41.0, 29.0))
                .await
                .unwrap();
        }

        let huge = service.list_drivers(1, 100_000).await.unwrap();
        assert_eq!(huge.page_size, 100);
        assert_eq!(huge.drivers.len(), 100);
        assert_eq!(huge.total_count, 105);
        assert_eq!(huge.total_pages, 2);

        let clamped = service.list_drivers(-3, 0).await.unwrap();
        assert_eq!(clamped.page, 1);
        assert_eq!(clamped.page_size, 1);
        assert_eq!(clamped.total_pages, 105);

        let beyond = service.list_drivers(50, 20).await.unwrap();
        assert!(beyond.drivers.is_empty());
        assert_eq!(beyond.total_pages, 6);
    }

    #[actix_web::test]
    async fn test_total_pages_matches_ceiling_for_many_sizes() {
        let (service, _) = service();
        for i in 0..23 {
            service
                .create_driver(create_request(&format!("06XY{}", i), 41.0, 29.0))
                .await
                .unwrap();
        }

        for page_size in 1..=30 {
            let page = service.list_drivers(1, page_size).await.unwrap();
            let size = page_size as u64;
            assert_eq!(page.total_pages, (23 + size - 1) / size);
        }
    }

    #[actix_web::test]
    async fn test_list_newest_first() {
        let (service, _) = service();
        let first = service
            .create_driver(create_request("34ABC123", 41.0, 29.0))
            .await
            .unwrap();
        let second = service
            .create_driver(create_request("06XYZ456", 41.0, 29.0))
            .await
            .unwrap();

        let page = service.list_drivers(1, 20).await.unwrap();
        let ids: Vec<String> = page.drivers.iter().map(Driver::id_string).collect();
        assert_eq!(ids, vec![second, first]);
    }

    #[actix_web::test]
    async fn test_nearby_istanbul_scenario() {
        let (service, _) = service();
        let a = service
            .create_driver(create_request("34ABC123", 41.0, 29.0))
            .await
            .unwrap();
        let b = service
            .create_driver(create_request("06XYZ456", 41.001, 29.001))
            .await
            .unwrap();

        let found = service.find_nearby_drivers(41.0, 29.0, Some("")).await.unwrap();
        let ids: Vec<String> = found.iter().map(|f| f.driver.id_string()).collect();

        assert_eq!(ids, vec![a, b]);
        assert_eq!(found[0].distance_km, 0.0);
        assert_eq!(found[0].display_distance_km(), 0.0);
        assert!(found[1].distance_km > 0.0 && found[1].distance_km < 5.0);
    }

    #[actix_web::test]
    async fn test_nearby_excludes_far_drivers() {
        let (service, _) = service();
        service
            .create_driver(create_request("34ABC123", 41.0, 29.0))
            .await
            .unwrap();
        // 위도 0.05도 ≈ 5.57km
        service
            .create_driver(create_request("35FAR1", 41.05, 29.0))
            .await
            .unwrap();

        let found = service.find_nearby_drivers(41.0, 29.0, None).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].driver.plate, "34ABC123");
    }

    #[actix_web::test]
    async fn test_nearby_filters_by_taxi_type() {
        let (service, _) = service();
        service
            .create_driver(create_request("34ABC123", 41.0, 29.0))
            .await
            .unwrap();
        service
            .create_driver(CreateDriverRequest {
                taxi_type: Some("siyah".to_string()),
                ..create_request("06XYZ456", 41.001, 29.001)
            })
            .await
            .unwrap();

        let found = service
            .find_nearby_drivers(41.0, 29.0, Some("siyah"))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].driver.plate, "06XYZ456");
    }

    #[actix_web::test]
    async fn test_nearby_rejects_bad_input() {
        let (service, _) = service();

        assert!(matches!(
            service.find_nearby_drivers(41.0, 29.0, Some("gold")).await,
            Err(AppError::InvalidTaxiType(_))
        ));
        assert!(matches!(
            service.find_nearby_drivers(200.0, 29.0, None).await,
            Err(AppError::InvalidLocation(_))
        ));
        assert!(matches!(
            service.find_nearby_drivers(41.0, 181.0, None).await,
            Err(AppError::InvalidLocation(_))
        ));
    }

    #[actix_web::test]
    async fn test_storage_failure_surfaces_as_database_error() {
        let (service, repository) = service();
        repository.inject_failure("connection refused");

        assert!(matches!(
            service.list_drivers(1, 20).await,
            Err(AppError::DatabaseError(_))
        ));
    }

    #[actix_web::test]
    async fn test_storage_failure_names_operation_and_id() {
        let (service, repository) = service();
        repository.inject_failure("connection refused");

        let id = "65f1c0d2a4b3e1f2c3d4e5f6";
        let Err(error) = service.delete_driver(id).await else {
            panic!("expected storage failure");
        };
        assert!(matches!(error, AppError::DatabaseError(_)));
        let message = error.to_string();
        assert!(message.contains("delete_driver"), "{}", message);
        assert!(message.contains(id), "{}", message);
        assert!(message.contains("connection refused"), "{}", message);

        let Err(error) = service.list_drivers(1, 10).await else {
            panic!("expected storage failure");
        };
        assert!(error.to_string().contains("list_drivers page=1 page_size=10"));

        let Err(error) = service.find_nearby_drivers(41.0, 29.0, None).await else {
            panic!("expected storage failure");
        };
        assert!(error.to_string().contains("find_nearby_drivers"));
    }

    #[actix_web::test]
    async fn test_client_errors_keep_their_message() {
        let (service, _) = service();

        let Err(AppError::NotFound(message)) =
            service.delete_driver("65f1c0d2a4b3e1f2c3d4e5f6").await
        else {
            panic!("expected not found");
        };
        assert!(!message.contains("delete_driver"));
    }

    #[actix_web::test]
    async fn test_extreme_page_is_empty_not_error() {
        let (service, _) = service();
        service
            .create_driver(create_request("34ABC123", 41.0, 29.0))
            .await
            .unwrap();

        let page = service.list_drivers(i64::MAX, 100).await.unwrap();
        assert!(page.drivers.is_empty());
        assert_eq!(page.page, i64::MAX as u64);
        assert_eq!(page.total_count, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_normalize_pagination() {
        assert_eq!(normalize_pagination(0, 0), (1, 1));
        assert_eq!(normalize_pagination(-5, -5), (1, 1));
        assert_eq!(normalize_pagination(2, 20), (2, 20));
        assert_eq!(normalize_pagination(1, 100_000), (1, 100));
    }
}
