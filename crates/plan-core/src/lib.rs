//! # Plan Core
//!
//! 核心資料模型與類型定義

pub mod material;
pub mod product;
pub mod record;
pub mod suggestion;

// Re-export 主要類型
pub use material::Material;
pub use product::{Product, Requirement};
pub use record::{RawMaterialRecord, RawMaterialRef, RawProductRecord, RawRequirementRecord};
pub use suggestion::{MaterialConsumption, ProductionSuggestion};

/// 計劃引擎錯誤類型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("記錄缺少識別碼: {0}")]
    MissingId(String),

    #[error("欄位 {field} 無法解析為數值: {value}")]
    InvalidNumeric { field: String, value: String },

    #[error("欄位 {field} 不可為負數: {value}")]
    NegativeNumeric { field: String, value: String },

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
