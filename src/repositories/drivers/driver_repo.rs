//! # MongoDB 드라이버 리포지토리
//!
//! `drivers` 컬렉션에 대한 데이터 액세스를 담당합니다.
//!
//! ## 저장 형식
//!
//! 위치는 `2dsphere` 인덱스를 쓰기 위해 GeoJSON Point로 저장합니다.
//! 좌표 순서는 GeoJSON 규약대로 `[lon, lat]`입니다.
//!
//! ```json
//! {
//!   "_id": ObjectId("65f1c0d2a4b3e1f2c3d4e5f6"),
//!   "first_name": "Ahmet",
//!   "last_name": "Yilmaz",
//!   "plate": "34ABC123",
//!   "taxi_type": "sari",
//!   "car_brand": "Fiat",
//!   "car_model": "Egea",
//!   "location": { "type": "Point", "coordinates": [29.0, 41.0] },
//!   "created_at": ISODate("2024-03-13T10:00:00.123Z"),
//!   "updated_at": ISODate("2024-03-13T10:00:00.123Z")
//! }
//! ```
//!
//! ## 인덱스
//!
//! | 이름 | 키 | 옵션 |
//! |------|-----|------|
//! | `plate_unique` | `plate: 1` | unique |
//! | `location_2dsphere` | `location: "2dsphere"` | |
//! | `created_at_desc` | `created_at: -1` | |
//! | `taxi_type` | `taxi_type: 1` | |

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::bson::{self, doc, oid::ObjectId, Document};
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};
use serde::{Deserialize, Serialize};

use super::{
    driver_not_found, page_offset, parse_object_id, plate_conflict, plate_not_found,
    DriverRepository, NEARBY_RESULT_LIMIT,
};
use crate::core::errors::AppError;
use crate::db::Database;
use crate::domain::entities::drivers::{Driver, DriverWithDistance, Location, TaxiType};
use crate::utils::geo::{km_to_meters, meters_to_km};

/// 컬렉션 이름
pub const COLLECTION_NAME: &str = "drivers";

/// 유니크 인덱스 위반 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// `$geoNear`가 거리(m)를 기록하는 필드
const DISTANCE_FIELD: &str = "distance";

/// GeoJSON Point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "type")]
    pub kind: String,
    /// `[lon, lat]`
    pub coordinates: [f64; 2],
}

impl From<Location> for GeoPoint {
    fn from(location: Location) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: [location.lon, location.lat],
        }
    }
}

impl From<&GeoPoint> for Location {
    fn from(point: &GeoPoint) -> Self {
        Location {
            lat: point.coordinates[1],
            lon: point.coordinates[0],
        }
    }
}

/// `drivers` 컬렉션 문서
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub first_name: String,
    pub last_name: String,
    pub plate: String,
    pub taxi_type: TaxiType,
    pub car_brand: String,
    pub car_model: String,
    pub location: GeoPoint,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl From<&Driver> for DriverDocument {
    fn from(driver: &Driver) -> Self {
        Self {
            id: driver.id,
            first_name: driver.first_name.clone(),
            last_name: driver.last_name.clone(),
            plate: driver.plate.clone(),
            taxi_type: driver.taxi_type,
            car_brand: driver.car_brand.clone(),
            car_model: driver.car_model.clone(),
            location: driver.location.into(),
            created_at: bson::DateTime::from_millis(driver.created_at.timestamp_millis()),
            updated_at: bson::DateTime::from_millis(driver.updated_at.timestamp_millis()),
        }
    }
}

impl TryFrom<DriverDocument> for Driver {
    type Error = AppError;

    fn try_from(document: DriverDocument) -> Result<Self, Self::Error> {
        let location = Location::from(&document.location);

        Ok(Driver {
            id: document.id,
            first_name: document.first_name,
            last_name: document.last_name,
            plate: document.plate,
            taxi_type: document.taxi_type,
            car_brand: document.car_brand,
            car_model: document.car_model,
            location,
            created_at: to_chrono(document.created_at)?,
            updated_at: to_chrono(document.updated_at)?,
        })
    }
}

fn to_chrono(value: bson::DateTime) -> Result<chrono::DateTime<chrono::Utc>, AppError> {
    chrono::DateTime::from_timestamp_millis(value.timestamp_millis()).ok_or_else(|| {
        AppError::DatabaseError(format!("표현할 수 없는 시각 값입니다: {}", value))
    })
}

/// 유니크 인덱스 위반(E11000)인지 확인합니다.
fn is_duplicate_key_error(error: &MongoError) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

/// 쓰기 에러 변환: 번호판 중복은 `ConflictError`, 나머지는 `DatabaseError`
fn write_error(error: MongoError, plate: &str) -> AppError {
    if is_duplicate_key_error(&error) {
        plate_conflict(plate)
    } else {
        database_error(error)
    }
}

fn database_error(error: MongoError) -> AppError {
    AppError::DatabaseError(error.to_string())
}

/// MongoDB 드라이버 리포지토리
///
/// 내부의 `Collection`은 커넥션 풀을 공유하는 가벼운 핸들이므로
/// 리포지토리 자체도 복제해서 여러 워커에 나눠 줄 수 있습니다.
#[derive(Clone)]
pub struct MongoDriverRepository {
    collection: Collection<DriverDocument>,
}

impl MongoDriverRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection::<DriverDocument>(COLLECTION_NAME),
        }
    }

    /// `$geoNear` 결과 문서를 거리 포함 드라이버로 변환합니다.
    fn nearby_from_document(mut document: Document) -> Result<DriverWithDistance, AppError> {
        let distance_m = document
            .remove(DISTANCE_FIELD)
            .and_then(|value| value.as_f64())
            .ok_or_else(|| {
                AppError::DatabaseError("$geoNear 결과에 distance 필드가 없습니다".to_string())
            })?;

        let driver_document: DriverDocument = bson::from_document(document)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(DriverWithDistance {
            driver: Driver::try_from(driver_document)?,
            distance_km: meters_to_km(distance_m),
        })
    }
}

#[async_trait]
impl DriverRepository for MongoDriverRepository {
    async fn create(&self, driver: &Driver) -> Result<String, AppError> {
        self.collection
            .insert_one(DriverDocument::from(driver))
            .await
            .map_err(|e| write_error(e, &driver.plate))?;

        Ok(driver.id.to_hex())
    }

    async fn update(&self, id: &str, driver: &Driver) -> Result<(), AppError> {
        let object_id = parse_object_id(id)?;
        let DriverDocument {
            first_name,
            last_name,
            plate,
            taxi_type,
            car_brand,
            car_model,
            location,
            updated_at,
            ..
        } = DriverDocument::from(driver);

        let location =
            bson::to_bson(&location).map_err(|e| AppError::InternalError(e.to_string()))?;

        // 생성 시각(created_at)은 절대 덮어쓰지 않습니다.
        let result = self
            .collection
            .update_one(
                doc! { "_id": object_id },
                doc! {
                    "$set": {
                        "first_name": first_name,
                        "last_name": last_name,
                        "plate": plate,
                        "taxi_type": taxi_type.as_str(),
                        "car_brand": car_brand,
                        "car_model": car_model,
                        "location": location,
                        "updated_at": updated_at,
                    }
                },
            )
            .await
            .map_err(|e| write_error(e, &driver.plate))?;

        if result.matched_count == 0 {
            return Err(driver_not_found(id));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Driver, AppError> {
        let object_id = parse_object_id(id)?;

        debug!("드라이버 조회: id={}", id);

        let document = self
            .collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(database_error)?
            .ok_or_else(|| driver_not_found(id))?;

        Driver::try_from(document)
    }

    async fn find_by_plate(&self, plate: &str) -> Result<Driver, AppError> {
        let document = self
            .collection
            .find_one(doc! { "plate": plate })
            .await
            .map_err(database_error)?
            .ok_or_else(|| plate_not_found(plate))?;

        Driver::try_from(document)
    }

    async fn find_all(&self, page: u64, page_size: u64) -> Result<(Vec<Driver>, u64), AppError> {
        let total = self
            .collection
            .count_documents(doc! {})
            .await
            .map_err(database_error)?;

        let limit = i64::try_from(page_size)
            .map_err(|_| AppError::InternalError(format!("잘못된 페이지 크기: {}", page_size)))?;

        let Some(offset) = page_offset(page, page_size, total) else {
            return Ok((Vec::new(), total));
        };

        let documents: Vec<DriverDocument> = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1, "_id": -1 })
            .skip(offset)
            .limit(limit)
            .await
            .map_err(database_error)?
            .try_collect()
            .await
            .map_err(database_error)?;

        let drivers = documents
            .into_iter()
            .map(Driver::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((drivers, total))
    }

    async fn find_nearby(
        &self,
        lat: f64,
        lon: f64,
        radius_km: f64,
        taxi_type: Option<TaxiType>,
    ) -> Result<Vec<DriverWithDistance>, AppError> {
        let mut geo_near = doc! {
            "near": { "type": "Point", "coordinates": [lon, lat] },
            "distanceField": DISTANCE_FIELD,
            "maxDistance": km_to_meters(radius_km),
            "spherical": true,
        };

        if let Some(taxi_type) = taxi_type {
            geo_near.insert("query", doc! { "taxi_type": taxi_type.as_str() });
        }

        let pipeline = vec![
            doc! { "$geoNear": geo_near },
            doc! { "$limit": NEARBY_RESULT_LIMIT as i64 },
        ];

        let mut cursor = self
            .collection
            .aggregate(pipeline)
            .await
            .map_err(database_error)?;

        let mut found = Vec::new();
        while let Some(document) = cursor.try_next().await.map_err(database_error)? {
            found.push(Self::nearby_from_document(document)?);
        }

        Ok(found)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let object_id = parse_object_id(id)?;

        let result = self
            .collection
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(database_error)?;

        if result.deleted_count == 0 {
            return Err(driver_not_found(id));
        }

        Ok(())
    }

    async fn ensure_indexes(&self) -> Result<(), AppError> {
        // 번호판 유니크 인덱스
        let plate_index = IndexModel::builder()
            .keys(doc! { "plate": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("plate_unique".to_string())
                    .build(),
            )
            .build();

        // 근처 검색용 구면 인덱스
        let location_index = IndexModel::builder()
            .keys(doc! { "location": "2dsphere" })
            .options(
                IndexOptions::builder()
                    .name("location_2dsphere".to_string())
                    .build(),
            )
            .build();

        // 목록 정렬용 생성일 인덱스
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        let taxi_type_index = IndexModel::builder()
            .keys(doc! { "taxi_type": 1 })
            .options(IndexOptions::builder().name("taxi_type".to_string()).build())
            .build();

        self.collection
            .create_indexes([plate_index, location_index, created_at_index, taxi_type_index])
            .await
            .map_err(database_error)?;

        Ok(())
    }
}
