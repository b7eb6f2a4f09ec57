//! 烘焙坊生產計劃完整範例
//!
//! 展示從異質原始記錄到生產建議的完整分配流程

use plan_calc::{GreedyAllocator, RecipeNormalizer};
use plan_core::{RawMaterialRecord, RawProductRecord};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("===== Bakery Production Plan Example =====\n");

    // 步驟 1: 原始物料記錄（數值可能以字串到達）
    println!("[1] Raw Material Records");
    let raw_materials: Vec<RawMaterialRecord> = serde_json::from_value(json!([
        { "id": 1, "name": "Farinha", "code": "RM-001", "stockQuantity": 100 },
        { "id": 2, "name": "Ovo", "code": "RM-002", "stockQuantity": "5" },
        { "id": 3, "name": "Fermento", "code": "RM-003", "stockQuantity": 50, "active": false }
    ]))?;
    println!("    Farinha: 100 | Ovo: 5 | Fermento: 50 (inactive)\n");

    // 步驟 2: 原始產品記錄（兩種配方欄位形狀混用）
    println!("[2] Raw Product Records");
    let raw_products: Vec<RawProductRecord> = serde_json::from_value(json!([
        {
            "id": 10,
            "name": "Bolo Premium",
            "value": 50.0,
            "composition": [
                { "rawMaterialId": 1, "quantityRequired": 40 },
                { "rawMaterialId": 2, "quantityRequired": 2 }
            ]
        },
        {
            "id": 11,
            "name": "Pão Simples",
            "value": "5.00",
            "materials": [
                { "rawMaterialId": 1, "quantity": 10 }
            ]
        },
        {
            "id": 12,
            "name": "Pão de Fermento",
            "value": 8,
            "materials": [
                { "rawMaterialId": 3, "quantity": 1 }
            ]
        }
    ]))?;
    println!("    Bolo Premium ($50): 40 Farinha + 2 Ovo");
    println!("    Pão Simples ($5): 10 Farinha");
    println!("    Pão de Fermento ($8): 1 Fermento\n");

    // 步驟 3: 正規化
    println!("[3] Normalize");
    let normalized = RecipeNormalizer::normalize(&raw_products, &raw_materials);
    println!(
        "    Products: {} | Materials: {} | Rejected: {}\n",
        normalized.products.len(),
        normalized.materials.len(),
        normalized.rejected.len()
    );

    // 步驟 4: 執行分配
    println!("[4] Allocate");
    let result = GreedyAllocator::allocate(&normalized.products, &normalized.materials);
    println!("    Suggestions: {}\n", result.suggestions.len());

    // 步驟 5: 顯示生產計劃（順序即優先順序）
    println!("[5] Production Plan");
    for (index, suggestion) in result.suggestions.iter().enumerate() {
        println!(
            "    #{} {} x{} @ {} = {}",
            index + 1,
            suggestion.product_name,
            suggestion.quantity_to_build,
            suggestion.unit_price,
            suggestion.subtotal
        );
        for consumption in &suggestion.materials_consumed {
            println!(
                "        - {}: {}",
                consumption.material_name, consumption.quantity_consumed
            );
        }
    }

    println!();
    println!("    Total Units: {}", result.total_units());
    println!("    Total Value: {}", result.total_value);

    if !result.warnings.is_empty() {
        println!("\n    Warnings:");
        for warning in &result.warnings {
            println!("      - [{}] {}", warning.product_id, warning.message);
        }
    }

    println!("\n===== Production Plan Complete =====\n");

    Ok(())
}
