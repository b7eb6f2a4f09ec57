//! 物料模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 原物料庫存項目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    /// 物料ID
    pub id: String,

    /// 物料名稱
    pub name: String,

    /// 物料編碼
    pub code: Option<String>,

    /// 現有庫存
    pub stock_quantity: Decimal,

    /// 是否啟用（停用物料視同無庫存）
    pub active: bool,
}

impl Material {
    /// 創建新的物料記錄
    pub fn new(id: String, name: String, stock_quantity: Decimal) -> Self {
        Self {
            id,
            name,
            code: None,
            stock_quantity,
            active: true,
        }
    }

    /// 建構器模式：設置物料編碼
    pub fn with_code(mut self, code: String) -> Self {
        self.code = Some(code);
        self
    }

    /// 建構器模式：設置為停用狀態
    pub fn as_inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// 可分配庫存（停用物料視同 0）
    pub fn available_stock(&self) -> Decimal {
        if self.active {
            self.stock_quantity
        } else {
            Decimal::ZERO
        }
    }

    /// 檢查是否有可分配庫存
    pub fn has_stock(&self) -> bool {
        self.available_stock() > Decimal::ZERO
    }
}
