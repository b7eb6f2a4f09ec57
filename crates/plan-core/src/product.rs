//! 產品與配方模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 配方需求：生產一單位產品所需的單一物料用量
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Requirement {
    /// 物料ID（弱引用，物料可能不存在或已停用）
    pub material_id: String,

    /// 每單位用量（0 表示不構成產量限制）
    pub quantity_per_unit: Decimal,
}

impl Requirement {
    /// 創建新的配方需求
    pub fn new(material_id: String, quantity_per_unit: Decimal) -> Self {
        Self {
            material_id,
            quantity_per_unit,
        }
    }

    /// 檢查是否構成產量限制（零用量需求不限制產量）
    pub fn is_binding(&self) -> bool {
        self.quantity_per_unit > Decimal::ZERO
    }
}

/// 產品（含配方）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// 產品ID
    pub id: String,

    /// 產品名稱
    pub name: String,

    /// 產品編碼
    pub code: Option<String>,

    /// 單價
    pub unit_price: Decimal,

    /// 配方（物料需求列表，保持定義順序）
    pub requirements: Vec<Requirement>,
}

impl Product {
    /// 創建新的產品（空配方）
    pub fn new(id: String, name: String, unit_price: Decimal) -> Self {
        Self {
            id,
            name,
            code: None,
            unit_price,
            requirements: Vec::new(),
        }
    }

    /// 建構器模式：設置產品編碼
    pub fn with_code(mut self, code: String) -> Self {
        self.code = Some(code);
        self
    }

    /// 建構器模式：添加配方需求
    pub fn with_requirement(mut self, material_id: String, quantity_per_unit: Decimal) -> Self {
        self.requirements
            .push(Requirement::new(material_id, quantity_per_unit));
        self
    }

    /// 檢查是否有配方（空配方產品不參與生產建議）
    pub fn has_recipe(&self) -> bool {
        !self.requirements.is_empty()
    }
}
