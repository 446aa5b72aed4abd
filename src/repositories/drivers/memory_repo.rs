//! # 인메모리 드라이버 리포지토리
//!
//! 테스트와 로컬 실험용 구현입니다. MongoDB 구현과 같은 계약을 따르며,
//! 근처 검색은 전체를 훑으면서 대원 거리를 직접 계산하고 정렬합니다.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::{
    driver_not_found, page_offset, parse_object_id, plate_conflict, plate_not_found,
    DriverRepository, NEARBY_RESULT_LIMIT,
};
use crate::core::errors::AppError;
use crate::domain::entities::drivers::{Driver, DriverWithDistance, Location, TaxiType};
use crate::utils::geo::haversine_km;

#[derive(Default)]
struct State {
    drivers: HashMap<ObjectId, Driver>,
    /// 설정되어 있으면 모든 연산이 이 메시지로 `DatabaseError`를 반환합니다.
    failure: Option<String>,
}

/// 인메모리 드라이버 저장소
///
/// 복제본은 같은 저장 공간을 공유합니다.
#[derive(Clone, Default)]
pub struct InMemoryDriverRepository {
    state: Arc<Mutex<State>>,
}

impl InMemoryDriverRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 이후 모든 연산이 저장소 장애처럼 실패하도록 만듭니다.
    pub fn inject_failure(&self, message: &str) {
        if let Ok(mut state) = self.state.lock() {
            state.failure = Some(message.to_string());
        }
    }

    /// 저장된 드라이버 수
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.state.lock().map(|state| state.drivers.len()).unwrap_or(0)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, AppError> {
        let state = self
            .state
            .lock()
            .map_err(|e| AppError::InternalError(format!("저장소 잠금 실패: {}", e)))?;

        if let Some(message) = &state.failure {
            return Err(AppError::DatabaseError(message.clone()));
        }

        Ok(state)
    }
}

#[async_trait]
impl DriverRepository for InMemoryDriverRepository {
    async fn create(&self, driver: &Driver) -> Result<String, AppError> {
        let mut state = self.lock()?;

        if state.drivers.values().any(|d| d.plate == driver.plate) {
            return Err(plate_conflict(&driver.plate));
        }

        state.drivers.insert(driver.id, driver.clone());
        Ok(driver.id.to_hex())
    }

    async fn update(&self, id: &str, driver: &Driver) -> Result<(), AppError> {
        let object_id = parse_object_id(id)?;
        let mut state = self.lock()?;

        if state
            .drivers
            .values()
            .any(|d| d.id != object_id && d.plate == driver.plate)
        {
            return Err(plate_conflict(&driver.plate));
        }

        let stored = state
            .drivers
            .get_mut(&object_id)
            .ok_or_else(|| driver_not_found(id))?;

        let created_at = stored.created_at;
        *stored = Driver {
            id: object_id,
            created_at,
            ..driver.clone()
        };

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Driver, AppError> {
        let object_id = parse_object_id(id)?;
        let state = self.lock()?;

        state
            .drivers
            .get(&object_id)
            .cloned()
            .ok_or_else(|| driver_not_found(id))
    }

    async fn find_by_plate(&self, plate: &str) -> Result<Driver, AppError> {
        let state = self.lock()?;

        state
            .drivers
            .values()
            .find(|d| d.plate == plate)
            .cloned()
            .ok_or_else(|| plate_not_found(plate))
    }

    async fn find_all(&self, page: u64, page_size: u64) -> Result<(Vec<Driver>, u64), AppError> {
        let state = self.lock()?;

        let mut drivers: Vec<Driver> = state.drivers.values().cloned().collect();
        drivers.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let total = drivers.len() as u64;
        let Some(offset) = page_offset(page, page_size, total) else {
            return Ok((Vec::new(), total));
        };
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(page_size).unwrap_or(usize::MAX);

        let page = drivers.into_iter().skip(skip).take(take).collect();
        Ok((page, total))
    }

    async fn find_nearby(
        &self,
        lat: f64,
        lon: f64,
        radius_km: f64,
        taxi_type: Option<TaxiType>,
    ) -> Result<Vec<DriverWithDistance>, AppError> {
        let state = self.lock()?;
        let center = Location { lat, lon };

        let mut found: Vec<DriverWithDistance> = state
            .drivers
            .values()
            .filter(|d| taxi_type.is_none_or(|t| d.taxi_type == t))
            .map(|d| DriverWithDistance {
                driver: d.clone(),
                distance_km: haversine_km(&center, &d.location),
            })
            .filter(|found| found.distance_km <= radius_km)
            .collect();

        // 같은 거리면 ID 순으로 고정
        found.sort_by(|a, b| {
            a.distance_km
                .total_cmp(&b.distance_km)
                .then(a.driver.id.cmp(&b.driver.id))
        });
        found.truncate(NEARBY_RESULT_LIMIT);

        Ok(found)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let object_id = parse_object_id(id)?;
        let mut state = self.lock()?;

        state
            .drivers
            .remove(&object_id)
            .map(|_| ())
            .ok_or_else(|| driver_not_found(id))
    }

    async fn ensure_indexes(&self) -> Result<(), AppError> {
        self.lock().map(|_| ())
    }
}
