//! 貪婪生產分配

use std::collections::HashMap;

use plan_core::{Material, MaterialConsumption, Product, ProductionSuggestion};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::{AllocationResult, AllocationWarning};

/// 貪婪分配器
///
/// 依單價遞減順序逐一分配庫存：高價產品先取滿，後續產品只能
/// 使用剩餘庫存。策略已知非全域最優（不回溯，不做線性規劃），
/// 以維持既有行為為準。
pub struct GreedyAllocator;

impl GreedyAllocator {
    /// 執行生產分配
    ///
    /// 純函數：庫存工作副本只存在於本次呼叫，輸入不被修改，
    /// 相同輸入必得相同輸出（含順序）。
    pub fn allocate(products: &[Product], materials: &[Material]) -> AllocationResult {
        tracing::info!(
            "開始生產分配：產品 {} 筆，物料 {} 筆",
            products.len(),
            materials.len()
        );

        let start_time = std::time::Instant::now();

        // Step 1: 建立庫存工作副本（停用物料視同 0）
        let mut remaining = Self::create_stock_map(materials);
        let material_names: HashMap<&str, &str> = materials
            .iter()
            .map(|m| (m.id.as_str(), m.name.as_str()))
            .collect();

        // Step 2: 排除空配方產品（不是生產候選，也不產生警告）
        let mut candidates: Vec<&Product> = products.iter().filter(|p| p.has_recipe()).collect();

        // Step 3: 依單價遞減排序（穩定排序，同價保持輸入順序）
        candidates.sort_by(|a, b| b.unit_price.cmp(&a.unit_price));

        let mut result = AllocationResult::empty();

        // Step 4: 依序分配，逐筆扣減庫存
        for product in candidates {
            match Self::max_producible(product, &remaining) {
                Some(0) => {
                    tracing::debug!("產品 {} 庫存不足，跳過", product.id);
                    result.add_warning(AllocationWarning::warning(
                        product.id.clone(),
                        "庫存不足，無法生產".to_string(),
                    ));
                }
                Some(quantity) => {
                    let suggestion =
                        Self::build_suggestion(product, quantity, &mut remaining, &material_names);
                    result.total_value += suggestion.subtotal;
                    result.suggestions.push(suggestion);
                }
                None => {
                    tracing::debug!("產品 {} 配方無限制性需求，跳過", product.id);
                    result.add_warning(AllocationWarning::info(
                        product.id.clone(),
                        "配方沒有任何限制性需求".to_string(),
                    ));
                }
            }
        }

        tracing::info!(
            "生產分配完成：建議 {} 筆，總產值 {}，耗時 {:?}",
            result.suggestions.len(),
            result.total_value,
            start_time.elapsed()
        );

        result
    }

    /// 建立庫存工作副本：物料ID → 剩餘數量
    fn create_stock_map(materials: &[Material]) -> HashMap<String, Decimal> {
        materials
            .iter()
            .map(|m| (m.id.clone(), m.available_stock()))
            .collect()
    }

    /// 計算最大可生產數量
    ///
    /// 每個限制性需求貢獻 floor(剩餘庫存 ÷ 每單位用量)，取最小值。
    /// 缺失物料視同零庫存。回傳 None 表示配方沒有任何限制性需求
    /// （全為零用量），該產品不可生產。
    fn max_producible(product: &Product, remaining: &HashMap<String, Decimal>) -> Option<u64> {
        let mut max_quantity: Option<u64> = None;

        for requirement in &product.requirements {
            if !requirement.is_binding() {
                continue;
            }

            let available = remaining
                .get(&requirement.material_id)
                .copied()
                .unwrap_or(Decimal::ZERO);

            // 超出 u64 範圍視為不受此物料限制
            let producible = (available / requirement.quantity_per_unit)
                .floor()
                .to_u64()
                .unwrap_or(u64::MAX);

            max_quantity = Some(match max_quantity {
                Some(current) => current.min(producible),
                None => producible,
            });
        }

        max_quantity
    }

    /// 產生建議並扣減庫存工作副本
    fn build_suggestion(
        product: &Product,
        quantity: u64,
        remaining: &mut HashMap<String, Decimal>,
        material_names: &HashMap<&str, &str>,
    ) -> ProductionSuggestion {
        let quantity_decimal = Decimal::from(quantity);
        let mut consumed = Vec::with_capacity(product.requirements.len());

        for requirement in &product.requirements {
            let quantity_consumed = requirement.quantity_per_unit * quantity_decimal;

            if let Some(stock) = remaining.get_mut(&requirement.material_id) {
                *stock -= quantity_consumed;
            }

            let material_name = material_names
                .get(requirement.material_id.as_str())
                .map(|name| (*name).to_string())
                .unwrap_or_else(|| requirement.material_id.clone());

            consumed.push(MaterialConsumption::new(
                requirement.material_id.clone(),
                material_name,
                quantity_consumed,
            ));
        }

        ProductionSuggestion::new(
            product.id.clone(),
            product.name.clone(),
            product.unit_price,
            quantity,
        )
        .with_materials_consumed(consumed)
    }
}
