//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결 풀 설정과 상태 확인(ping) 기능을 제공합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::DatabaseConfig;
//! use crate::db::Database;
//!
//! let database = Database::new(&DatabaseConfig::from_env()).await?;
//! let repository = MongoDriverRepository::new(&database);
//! ```

use log::info;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use crate::config::DatabaseConfig;
use crate::core::errors::AppError;

/// MongoDB 데이터베이스 연결 래퍼
///
/// `Client`는 내부적으로 커넥션 풀을 가진 `Clone + Send + Sync` 핸들입니다.
/// 부트스트랩에서 한 번 만들고 리포지토리와 헬스 체크에 복제해서 넘깁니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// URI를 파싱하고 풀 옵션을 적용한 뒤 클라이언트를 만들고,
    /// ping으로 연결 상태를 검증한 후 인스턴스를 반환합니다.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB URI 파싱 실패: {}", e)))?;

        // 애플리케이션 이름 설정 (서버 측 로그와 모니터링에서 식별용)
        client_options.app_name = Some("taxihub_driver_service".to_string());
        client_options.max_pool_size = Some(config.max_pool_size);
        client_options.min_pool_size = Some(config.min_pool_size);
        client_options.max_idle_time = Some(config.max_idle_time);

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let database = Self {
            client,
            database_name: config.database_name.clone(),
        };

        database.ping().await?;

        info!("✅ MongoDB 연결 성공: {}", database.database_name);

        Ok(database)
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 타입이 지정된 컬렉션 핸들
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.get_database().collection::<T>(name)
    }

    /// 연결 상태 확인 (`{ ping: 1 }`)
    pub async fn ping(&self) -> Result<(), AppError> {
        self.get_database()
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB ping 실패: {}", e)))?;
        Ok(())
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
