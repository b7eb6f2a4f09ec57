//! # Plan Calculation Engine
//!
//! 生產分配計算引擎

pub mod allocator;
pub mod normalizer;

// Re-export 主要類型
pub use allocator::GreedyAllocator;
pub use normalizer::RecipeNormalizer;

use plan_core::{Material, PlanError, Product, ProductionSuggestion};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 分配結果（每次計算重新產生，不落地保存）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationResult {
    /// 生產建議（依單價遞減排序，同價保持輸入順序）
    pub suggestions: Vec<ProductionSuggestion>,

    /// 總產值
    pub total_value: Decimal,

    /// 警告信息（被排除產品的診斷，不屬於對外報表欄位）
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<AllocationWarning>,
}

impl AllocationResult {
    /// 創建空的分配結果
    pub fn empty() -> Self {
        Self {
            suggestions: Vec::new(),
            total_value: Decimal::ZERO,
            warnings: Vec::new(),
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: AllocationWarning) {
        self.warnings.push(warning);
    }

    /// 建議生產的總單位數
    pub fn total_units(&self) -> u64 {
        self.suggestions.iter().map(|s| s.quantity_to_build).sum()
    }

    /// 檢查是否沒有任何建議
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}

/// 分配警告
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationWarning {
    pub product_id: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl AllocationWarning {
    pub fn new(product_id: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            product_id,
            message,
            severity,
        }
    }

    pub fn info(product_id: String, message: String) -> Self {
        Self::new(product_id, message, WarningSeverity::Info)
    }

    pub fn warning(product_id: String, message: String) -> Self {
        Self::new(product_id, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningSeverity {
    Info,
    Warning,
}

/// 正規化結果
#[derive(Debug, Clone)]
pub struct NormalizeResult {
    /// 正規化後的產品（保持輸入順序）
    pub products: Vec<Product>,

    /// 正規化後的物料（保持輸入順序）
    pub materials: Vec<Material>,

    /// 被拒絕的記錄（逐筆排除，不中斷整批）
    pub rejected: Vec<RejectedRecord>,
}

impl NormalizeResult {
    /// 創建空的正規化結果
    pub fn empty() -> Self {
        Self {
            products: Vec::new(),
            materials: Vec::new(),
            rejected: Vec::new(),
        }
    }

    /// 檢查是否有被拒絕的記錄
    pub fn has_rejections(&self) -> bool {
        !self.rejected.is_empty()
    }
}

/// 被拒絕的記錄（具名指出問題記錄與原因）
#[derive(Debug, Clone)]
pub struct RejectedRecord {
    /// 記錄種類
    pub kind: RecordKind,

    /// 記錄標籤（名稱或ID，盡可能指認原始記錄）
    pub label: String,

    /// 拒絕原因
    pub reason: PlanError,
}

/// 記錄種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Product,
    Material,
    Requirement,
}
