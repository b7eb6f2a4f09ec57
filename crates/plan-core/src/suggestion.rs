//! 生產建議模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 單一物料的消耗明細
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialConsumption {
    /// 物料ID
    pub material_id: String,

    /// 物料名稱（物料不存在時回落為ID）
    pub material_name: String,

    /// 消耗數量
    pub quantity_consumed: Decimal,
}

impl MaterialConsumption {
    /// 創建新的消耗明細
    pub fn new(material_id: String, material_name: String, quantity_consumed: Decimal) -> Self {
        Self {
            material_id,
            material_name,
            quantity_consumed,
        }
    }
}

/// 生產建議（分配結果中的單一項目）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionSuggestion {
    /// 產品ID
    pub product_id: String,

    /// 產品名稱
    pub product_name: String,

    /// 單價
    pub unit_price: Decimal,

    /// 建議生產數量（恆為正）
    pub quantity_to_build: u64,

    /// 小計（單價 × 數量）
    pub subtotal: Decimal,

    /// 物料消耗明細
    pub materials_consumed: Vec<MaterialConsumption>,
}

impl ProductionSuggestion {
    /// 創建新的生產建議（小計由單價與數量推得）
    pub fn new(
        product_id: String,
        product_name: String,
        unit_price: Decimal,
        quantity_to_build: u64,
    ) -> Self {
        let subtotal = unit_price * Decimal::from(quantity_to_build);
        Self {
            product_id,
            product_name,
            unit_price,
            quantity_to_build,
            subtotal,
            materials_consumed: Vec::new(),
        }
    }

    /// 建構器模式：設置物料消耗明細
    pub fn with_materials_consumed(mut self, materials_consumed: Vec<MaterialConsumption>) -> Self {
        self.materials_consumed = materials_consumed;
        self
    }
}
