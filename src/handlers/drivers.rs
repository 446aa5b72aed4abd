//! # Driver HTTP Handlers
//!
//! `/api/v1/drivers` 아래의 드라이버 API 핸들러입니다.
//!
//! | Method | Path | 성공 응답 |
//! |--------|------|-----------|
//! | POST | `/api/v1/drivers` | 201 `{ "id": ... }` |
//! | GET | `/api/v1/drivers?page=&pageSize=` | 200 목록 |
//! | GET | `/api/v1/drivers/nearby?lat=&lon=&taxiType=` | 200 `{ drivers, location }` |
//! | GET | `/api/v1/drivers/plate/{plate}` | 200 드라이버 |
//! | GET | `/api/v1/drivers/{id}` | 200 드라이버 |
//! | PUT | `/api/v1/drivers/{id}` | 200 수정된 드라이버 |
//! | PUT | `/api/v1/drivers/{id}/location` | 200 `{ "message": ... }` |
//! | DELETE | `/api/v1/drivers/{id}` | 204 |
//!
//! 모든 서비스 호출은 `REQUEST_TIMEOUT_SECS` 기한 안에서 실행됩니다.
//! 기한이 지나면 진행 중인 future(MongoDB 호출 포함)를 버리고 500을 반환합니다.

use std::future::Future;

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::config::RequestConfig;
use crate::core::errors::AppError;
use crate::domain::dto::drivers::request::{
    CreateDriverRequest, ListDriversQuery, NearbyQuery, UpdateDriverRequest,
    UpdateLocationRequest,
};
use crate::domain::dto::drivers::response::{
    CreateDriverResponse, DriverResponse, DriverWithDistanceResponse, ListDriversResponse,
    LocationResponse, MessageResponse, NearbyDriversResponse,
};
use crate::services::drivers::DriverService;

/// 서비스 호출에 요청 기한을 적용합니다.
async fn with_deadline<T, F>(operation: &str, future: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    let timeout = RequestConfig::timeout();

    actix_web::rt::time::timeout(timeout, future)
        .await
        .map_err(|_| {
            AppError::InternalError(format!(
                "{} 처리 시간 초과 ({}초)",
                operation,
                timeout.as_secs()
            ))
        })?
}

/// 드라이버 등록 핸들러
///
/// # 요청 본문
///
/// ```json
/// {
///   "first_name": "Ahmet",
///   "last_name": "Yilmaz",
///   "plate": "34 ABC 123",
///   "taxi_type": "sari",
///   "car_brand": "Fiat",
///   "car_model": "Egea",
///   "lat": 41.0082,
///   "lon": 28.9784
/// }
/// ```
///
/// # 응답
///
/// - `201 Created` `{ "id": "65f1c0d2a4b3e1f2c3d4e5f6" }`
/// - `400 Bad Request` 위반 필드 목록(`details`)
/// - `409 Conflict` 이미 등록된 번호판
#[post("")]
pub async fn create_driver(
    service: web::Data<DriverService>,
    payload: web::Json<CreateDriverRequest>,
) -> Result<HttpResponse, AppError> {
    let id = with_deadline("create_driver", service.create_driver(payload.into_inner())).await?;

    Ok(HttpResponse::Created().json(CreateDriverResponse { id }))
}

/// 드라이버 목록 핸들러
///
/// `page` 기본값 1, `pageSize` 기본값 20. 범위를 벗어난 값은 보정됩니다.
#[get("")]
pub async fn list_drivers(
    service: web::Data<DriverService>,
    query: web::Query<ListDriversQuery>,
) -> Result<HttpResponse, AppError> {
    let page = with_deadline(
        "list_drivers",
        service.list_drivers(query.page(), query.page_size()),
    )
    .await?;

    Ok(HttpResponse::Ok().json(ListDriversResponse::from(page)))
}

/// 근처 드라이버 검색 핸들러
///
/// 반경 5km 안의 드라이버를 가까운 순으로 최대 50명 반환합니다.
///
/// ```json
/// {
///   "drivers": [
///     { "id": "...", "plate": "34ABC123", "taxi_type": "sari", "distance_km": 0.0, ... }
///   ],
///   "location": { "lat": 41.0, "lon": 29.0 }
/// }
/// ```
#[get("/nearby")]
pub async fn find_nearby_drivers(
    service: web::Data<DriverService>,
    query: web::Query<NearbyQuery>,
) -> Result<HttpResponse, AppError> {
    let NearbyQuery { lat, lon, taxi_type } = query.into_inner();

    let found = with_deadline(
        "find_nearby_drivers",
        service.find_nearby_drivers(lat, lon, taxi_type.as_deref()),
    )
    .await?;

    Ok(HttpResponse::Ok().json(NearbyDriversResponse {
        drivers: found
            .into_iter()
            .map(DriverWithDistanceResponse::from)
            .collect(),
        location: LocationResponse { lat, lon },
    }))
}

/// 번호판으로 드라이버 조회 핸들러
#[get("/plate/{plate}")]
pub async fn get_driver_by_plate(
    service: web::Data<DriverService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let plate = path.into_inner();
    let driver = with_deadline("get_driver_by_plate", service.get_driver_by_plate(&plate)).await?;

    Ok(HttpResponse::Ok().json(DriverResponse::from(driver)))
}

/// ID로 드라이버 조회 핸들러
///
/// - `400 Bad Request` ObjectId 형식이 아닌 ID
/// - `404 Not Found` 없는 드라이버
#[get("/{id}")]
pub async fn get_driver(
    service: web::Data<DriverService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let driver = with_deadline("get_driver_by_id", service.get_driver_by_id(&id)).await?;

    Ok(HttpResponse::Ok().json(DriverResponse::from(driver)))
}

/// 드라이버 부분 수정 핸들러
///
/// 보낸 필드만 바뀝니다. 번호판은 바꿀 수 없습니다.
#[put("/{id}")]
pub async fn update_driver(
    service: web::Data<DriverService>,
    path: web::Path<String>,
    payload: web::Json<UpdateDriverRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let driver = with_deadline(
        "update_driver",
        service.update_driver(&id, payload.into_inner()),
    )
    .await?;

    Ok(HttpResponse::Ok().json(DriverResponse::from(driver)))
}

/// 드라이버 위치 갱신 핸들러
#[put("/{id}/location")]
pub async fn update_driver_location(
    service: web::Data<DriverService>,
    path: web::Path<String>,
    payload: web::Json<UpdateLocationRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    with_deadline(
        "update_driver_location",
        service.update_driver_location(&id, payload.into_inner()),
    )
    .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Location updated successfully")))
}

/// 드라이버 삭제 핸들러
#[delete("/{id}")]
pub async fn delete_driver(
    service: web::Data<DriverService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    with_deadline("delete_driver", service.delete_driver(&id)).await?;

    Ok(HttpResponse::NoContent().finish())
}
