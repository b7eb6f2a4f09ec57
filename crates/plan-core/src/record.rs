//! 原始輸入記錄
//!
//! 上游資料來源的欄位命名並不一致：配方列表可能叫 `materials` 或
//! `composition`，用量可能叫 `quantityRequired` 或 `quantity`，物料引用
//! 可能是扁平的 `rawMaterialId` 或內嵌的 `rawMaterial.id`，數值欄位可能
//! 是數字或字串。本模組原樣保留這些形狀，統一轉換交給正規化器。

use serde::Deserialize;
use serde_json::Value;

/// 原始產品記錄
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawProductRecord {
    /// 識別碼（缺少時整筆記錄不可用）
    pub id: Option<Value>,

    /// 名稱
    pub name: Option<String>,

    /// 編碼
    pub code: Option<String>,

    /// 單價（數字或字串）
    pub value: Option<Value>,

    /// 配方列表（接受 `materials` 或 `composition`）
    #[serde(alias = "composition")]
    pub materials: Option<Vec<RawRequirementRecord>>,
}

/// 原始配方需求記錄
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRequirementRecord {
    /// 物料ID（扁平形式）
    #[serde(rename = "rawMaterialId", alias = "materialId")]
    pub raw_material_id: Option<Value>,

    /// 物料引用（內嵌形式 `rawMaterial.id`）
    #[serde(rename = "rawMaterial")]
    pub raw_material: Option<RawMaterialRef>,

    /// 每單位用量（接受 `quantityRequired` 或 `quantity`）
    #[serde(rename = "quantityRequired", alias = "quantity")]
    pub quantity_required: Option<Value>,
}

impl RawRequirementRecord {
    /// 取得物料引用（扁平欄位優先，其次內嵌物件）
    pub fn material_ref(&self) -> Option<&Value> {
        self.raw_material_id
            .as_ref()
            .or_else(|| self.raw_material.as_ref().and_then(|m| m.id.as_ref()))
    }
}

/// 內嵌物料引用
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawMaterialRef {
    /// 物料ID
    pub id: Option<Value>,
}

/// 原始物料記錄
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawMaterialRecord {
    /// 識別碼（缺少時整筆記錄不可用）
    pub id: Option<Value>,

    /// 名稱
    pub name: Option<String>,

    /// 編碼
    pub code: Option<String>,

    /// 庫存數量（數字或字串）
    #[serde(rename = "stockQuantity", alias = "stock_quantity")]
    pub stock_quantity: Option<Value>,

    /// 是否啟用（缺省視為啟用）
    pub active: Option<bool>,
}
