//! # ProdPlan
//!
//! 生產計劃引擎：原物料庫存與產品配方推導貪婪生產分配建議
//!
//! 單一管線由兩個純函數組成：
//! [`RecipeNormalizer::normalize`]（異質原始記錄轉標準形狀）與
//! [`GreedyAllocator::allocate`]（標準形狀產出生產建議）。
//! 引擎本身不做任何 I/O，持久化與傳輸由外圍系統負責。

// Re-export 主要類型
pub use plan_calc::{
    AllocationResult, AllocationWarning, GreedyAllocator, NormalizeResult, RecipeNormalizer,
    RecordKind, RejectedRecord, WarningSeverity,
};
pub use plan_core::{
    Material, MaterialConsumption, PlanError, Product, ProductionSuggestion, RawMaterialRecord,
    RawMaterialRef, RawProductRecord, RawRequirementRecord, Requirement,
};
