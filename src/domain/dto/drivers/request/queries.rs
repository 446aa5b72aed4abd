//! 목록/근처 검색 쿼리 파라미터
//!
//! 쿼리 문자열 이름은 기존 API와 같은 camelCase(`pageSize`, `taxiType`)를 씁니다.

use serde::Deserialize;

/// 목록 조회 기본 페이지 크기
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// `GET /api/v1/drivers?page=&pageSize=`
///
/// 범위 보정은 서비스가 담당합니다. 여기서는 기본값만 채웁니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListDriversQuery {
    pub page: Option<i64>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<i64>,
}

impl ListDriversQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }

    pub fn page_size(&self) -> i64 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

/// `GET /api/v1/drivers/nearby?lat=&lon=&taxiType=`
#[derive(Debug, Clone, Deserialize)]
pub struct NearbyQuery {
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "taxiType")]
    pub taxi_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_defaults() {
        let query = ListDriversQuery::default();
        assert_eq!(query.page(), 1);
        assert_eq!(query.page_size(), 20);
    }

    #[test]
    fn test_list_query_camel_case() {
        let query: ListDriversQuery = serde_json::from_str(r#"{"page": 3, "pageSize": 50}"#).unwrap();
        assert_eq!(query.page(), 3);
        assert_eq!(query.page_size(), 50);
    }

    #[test]
    fn test_nearby_query_taxi_type_is_optional() {
        let query: NearbyQuery = serde_json::from_str(r#"{"lat": 41.0, "lon": 29.0}"#).unwrap();
        assert_eq!(query.taxi_type, None);

        let query: NearbyQuery =
            serde_json::from_str(r#"{"lat": 41.0, "lon": 29.0, "taxiType": "siyah"}"#).unwrap();
        assert_eq!(query.taxi_type.as_deref(), Some("siyah"));
    }
}
