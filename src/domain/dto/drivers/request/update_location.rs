//! 드라이버 위치 갱신 요청 DTO

use serde::Deserialize;
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::validation::OrderedValidate;
use crate::domain::entities::drivers::Location;

/// 위치 갱신 요청
///
/// 두 좌표 모두 필수이며, 위치는 통째로 교체됩니다.
///
/// ```json
/// { "lat": 41.0151, "lon": 28.9795 }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateLocationRequest {
    #[validate(required, range(min = -90.0, max = 90.0))]
    pub lat: Option<f64>,

    #[validate(required, range(min = -180.0, max = 180.0))]
    pub lon: Option<f64>,
}

impl OrderedValidate for UpdateLocationRequest {
    const FIELD_ORDER: &'static [&'static str] = &["lat", "lon"];
}

impl UpdateLocationRequest {
    pub fn into_location(self) -> Result<Location, AppError> {
        self.validate_ordered()?;

        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Location::new(lat, lon).map_err(AppError::InvalidLocation),
            _ => Err(AppError::InternalError(
                "검증을 통과한 위치 요청에 좌표가 없습니다".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_location() {
        let request = UpdateLocationRequest {
            lat: Some(41.0151),
            lon: Some(28.9795),
        };
        assert_eq!(
            request.into_location().unwrap(),
            Location { lat: 41.0151, lon: 28.9795 }
        );
    }

    #[test]
    fn test_both_coordinates_required() {
        match UpdateLocationRequest::default().into_location() {
            Err(AppError::ValidationError(violations)) => {
                let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
                assert_eq!(fields, vec!["lat", "lon"]);
                assert!(violations.iter().all(|v| v.rule == "required"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range() {
        let request = UpdateLocationRequest {
            lat: Some(90.5),
            lon: Some(0.0),
        };
        assert!(matches!(
            request.into_location(),
            Err(AppError::ValidationError(_))
        ));
    }
}
