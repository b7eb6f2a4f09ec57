//! 配方正規化

use plan_core::{Material, PlanError, Product, RawMaterialRecord, RawProductRecord};
use rust_decimal::Decimal;
use serde_json::Value;

use crate::{NormalizeResult, RecordKind, RejectedRecord};

/// 配方正規化器
///
/// 將欄位命名異質的原始記錄轉換為唯一的標準形狀。純函數，
/// 不檢查配方引用的物料是否存在（缺失物料由分配器視為零庫存）。
pub struct RecipeNormalizer;

impl RecipeNormalizer {
    /// 正規化原始產品與物料記錄
    ///
    /// 缺少識別碼或數值無法解析的記錄逐筆排除，其餘照常轉換；
    /// 輸入順序保持不變，不做任何排序。
    pub fn normalize(
        raw_products: &[RawProductRecord],
        raw_materials: &[RawMaterialRecord],
    ) -> NormalizeResult {
        let mut result = NormalizeResult::empty();

        for raw in raw_materials {
            match Self::normalize_material(raw) {
                Ok(material) => result.materials.push(material),
                Err(reason) => result.rejected.push(RejectedRecord {
                    kind: RecordKind::Material,
                    label: Self::record_label(raw.id.as_ref(), raw.name.as_deref()),
                    reason,
                }),
            }
        }

        for raw in raw_products {
            match Self::normalize_product(raw, &mut result.rejected) {
                Ok(product) => result.products.push(product),
                Err(reason) => result.rejected.push(RejectedRecord {
                    kind: RecordKind::Product,
                    label: Self::record_label(raw.id.as_ref(), raw.name.as_deref()),
                    reason,
                }),
            }
        }

        tracing::debug!(
            "正規化完成：產品 {} 筆，物料 {} 筆，拒絕 {} 筆",
            result.products.len(),
            result.materials.len(),
            result.rejected.len()
        );

        result
    }

    /// 正規化單筆物料記錄
    fn normalize_material(raw: &RawMaterialRecord) -> plan_core::Result<Material> {
        let id = Self::coerce_id("id", raw.id.as_ref())?;
        let stock_quantity =
            Self::coerce_non_negative("stockQuantity", raw.stock_quantity.as_ref())?;

        let mut material = Material::new(id, raw.name.clone().unwrap_or_default(), stock_quantity);
        if let Some(code) = &raw.code {
            material = material.with_code(code.clone());
        }
        if raw.active == Some(false) {
            material = material.as_inactive();
        }

        Ok(material)
    }

    /// 正規化單筆產品記錄
    ///
    /// 配方列內不可用的需求逐列排除（整筆產品仍保留）。
    fn normalize_product(
        raw: &RawProductRecord,
        rejected: &mut Vec<RejectedRecord>,
    ) -> plan_core::Result<Product> {
        let id = Self::coerce_id("id", raw.id.as_ref())?;
        let unit_price = Self::coerce_non_negative("value", raw.value.as_ref())?;

        let mut product = Product::new(id, raw.name.clone().unwrap_or_default(), unit_price);
        if let Some(code) = &raw.code {
            product = product.with_code(code.clone());
        }

        for row in raw.materials.as_deref().unwrap_or_default() {
            let row_label = Self::record_label(raw.id.as_ref(), raw.name.as_deref());

            let material_id = match Self::coerce_id("rawMaterialId", row.material_ref()) {
                Ok(material_id) => material_id,
                Err(reason) => {
                    rejected.push(RejectedRecord {
                        kind: RecordKind::Requirement,
                        label: row_label,
                        reason,
                    });
                    continue;
                }
            };

            let quantity_per_unit =
                match Self::coerce_non_negative("quantityRequired", row.quantity_required.as_ref())
                {
                    Ok(quantity_per_unit) => quantity_per_unit,
                    Err(reason) => {
                        rejected.push(RejectedRecord {
                            kind: RecordKind::Requirement,
                            label: row_label,
                            reason,
                        });
                        continue;
                    }
                };

            product = product.with_requirement(material_id, quantity_per_unit);
        }

        Ok(product)
    }

    /// 識別碼轉換：接受字串或數字形式
    fn coerce_id(field: &str, value: Option<&Value>) -> plan_core::Result<String> {
        match value {
            Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
            Some(Value::Number(n)) => Ok(n.to_string()),
            _ => Err(PlanError::MissingId(field.to_string())),
        }
    }

    /// 數值轉換：缺省視為 0，負數整筆拒絕
    fn coerce_non_negative(field: &str, value: Option<&Value>) -> plan_core::Result<Decimal> {
        let parsed = match value {
            None | Some(Value::Null) => Decimal::ZERO,
            Some(v) => Self::coerce_decimal(field, v)?,
        };

        if parsed < Decimal::ZERO {
            return Err(PlanError::NegativeNumeric {
                field: field.to_string(),
                value: parsed.to_string(),
            });
        }

        Ok(parsed)
    }

    /// 寬鬆數值轉換（JSON 數字或數字字串 → Decimal）
    fn coerce_decimal(field: &str, value: &Value) -> plan_core::Result<Decimal> {
        let invalid = || PlanError::InvalidNumeric {
            field: field.to_string(),
            value: value.to_string(),
        };

        match value {
            Value::Number(n) => n.to_string().parse::<Decimal>().map_err(|_| invalid()),
            Value::String(s) => s.trim().parse::<Decimal>().map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }

    /// 盡可能指認原始記錄（名稱優先，其次識別碼）
    fn record_label(id: Option<&Value>, name: Option<&str>) -> String {
        if let Some(name) = name {
            if !name.is_empty() {
                return name.to_string();
            }
        }

        match id {
            Some(Value::String(s)) => s.clone(),
            Some(v) => v.to_string(),
            None => "<unidentified>".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn products(json: Value) -> Vec<RawProductRecord> {
        serde_json::from_value(json).unwrap()
    }

    fn materials(json: Value) -> Vec<RawMaterialRecord> {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_normalize_both_field_conventions() {
        // 兩筆產品各用一種配方欄位命名，結果形狀一致
        let raw_products = products(json!([
            {
                "id": 10,
                "name": "Bolo Premium",
                "value": 50.0,
                "composition": [{ "rawMaterialId": 1, "quantityRequired": 40 }]
            },
            {
                "id": 11,
                "name": "Pão Simples",
                "value": "5.00",
                "materials": [{ "rawMaterialId": 1, "quantity": 10 }]
            }
        ]));
        let raw_materials = materials(json!([
            { "id": 1, "name": "Farinha", "stockQuantity": 100 }
        ]));

        let result = RecipeNormalizer::normalize(&raw_products, &raw_materials);

        assert!(!result.has_rejections());
        assert_eq!(result.products.len(), 2);
        assert_eq!(result.materials.len(), 1);

        assert_eq!(result.products[0].requirements[0].material_id, "1");
        assert_eq!(
            result.products[0].requirements[0].quantity_per_unit,
            Decimal::from(40)
        );
        assert_eq!(result.products[1].unit_price, Decimal::from(5));
        assert_eq!(
            result.products[1].requirements[0].quantity_per_unit,
            Decimal::from(10)
        );
    }

    #[test]
    fn test_missing_id_rejects_single_record() {
        // 缺識別碼只排除該筆，其餘照常轉換
        let raw_materials = materials(json!([
            { "id": 1, "name": "Farinha", "stockQuantity": 100 },
            { "name": "Sem Id", "stockQuantity": 10 },
            { "id": 2, "name": "Ovo", "stockQuantity": 5 }
        ]));

        let result = RecipeNormalizer::normalize(&[], &raw_materials);

        assert_eq!(result.materials.len(), 2);
        assert_eq!(result.rejected.len(), 1);
        assert_eq!(result.rejected[0].kind, RecordKind::Material);
        assert_eq!(result.rejected[0].label, "Sem Id");
        assert_eq!(
            result.rejected[0].reason,
            PlanError::MissingId("id".to_string())
        );
    }

    #[test]
    fn test_requirement_row_without_material_reference_dropped() {
        // 配方列缺物料引用時逐列排除，產品本身保留
        let raw_products = products(json!([
            {
                "id": 10,
                "name": "Bolo",
                "value": 50,
                "materials": [
                    { "quantityRequired": 40 },
                    { "rawMaterialId": 2, "quantityRequired": 2 }
                ]
            }
        ]));

        let result = RecipeNormalizer::normalize(&raw_products, &[]);

        assert_eq!(result.products.len(), 1);
        assert_eq!(result.products[0].requirements.len(), 1);
        assert_eq!(result.products[0].requirements[0].material_id, "2");
        assert_eq!(result.rejected.len(), 1);
        assert_eq!(result.rejected[0].kind, RecordKind::Requirement);
    }

    #[test]
    fn test_nested_material_reference_resolved() {
        let raw_products = products(json!([
            {
                "id": 10,
                "name": "Bolo",
                "value": 50,
                "composition": [
                    { "rawMaterial": { "id": 7, "name": "Farinha" }, "quantityRequired": 40 }
                ]
            }
        ]));

        let result = RecipeNormalizer::normalize(&raw_products, &[]);

        assert_eq!(result.products[0].requirements[0].material_id, "7");
    }

    #[test]
    fn test_inactive_material_flag() {
        let raw_materials = materials(json!([
            { "id": 3, "name": "Fermento", "stockQuantity": 2, "active": false }
        ]));

        let result = RecipeNormalizer::normalize(&[], &raw_materials);

        assert!(!result.materials[0].active);
        assert_eq!(result.materials[0].available_stock(), Decimal::ZERO);
    }

    #[test]
    fn test_input_order_preserved() {
        // 正規化不排序，排序是分配器的職責
        let raw_products = products(json!([
            { "id": "B", "name": "Barato", "value": 1, "materials": [] },
            { "id": "A", "name": "Caro", "value": 100, "materials": [] }
        ]));

        let result = RecipeNormalizer::normalize(&raw_products, &[]);

        assert_eq!(result.products[0].id, "B");
        assert_eq!(result.products[1].id, "A");
    }

    #[rstest]
    #[case::integer(json!(12), Decimal::from(12))]
    #[case::float(json!(12.5), Decimal::new(125, 1))]
    #[case::string(json!("12.5"), Decimal::new(125, 1))]
    #[case::padded_string(json!(" 7 "), Decimal::from(7))]
    fn test_coerce_decimal_accepts(#[case] value: Value, #[case] expected: Decimal) {
        let parsed = RecipeNormalizer::coerce_decimal("value", &value).unwrap();
        assert_eq!(parsed, expected);
    }

    #[rstest]
    #[case::boolean(json!(true))]
    #[case::word(json!("abc"))]
    #[case::array(json!([1]))]
    #[case::object(json!({ "amount": 1 }))]
    fn test_coerce_decimal_rejects(#[case] value: Value) {
        let result = RecipeNormalizer::coerce_decimal("value", &value);
        assert!(matches!(result, Err(PlanError::InvalidNumeric { .. })));
    }

    #[test]
    fn test_negative_stock_rejects_record() {
        let raw_materials = materials(json!([
            { "id": 1, "name": "Farinha", "stockQuantity": -5 }
        ]));

        let result = RecipeNormalizer::normalize(&[], &raw_materials);

        assert!(result.materials.is_empty());
        assert!(matches!(
            result.rejected[0].reason,
            PlanError::NegativeNumeric { .. }
        ));
    }

    #[test]
    fn test_non_coercible_price_rejects_record() {
        let raw_products = products(json!([
            { "id": 10, "name": "Bolo", "value": "cinquenta", "materials": [] }
        ]));

        let result = RecipeNormalizer::normalize(&raw_products, &[]);

        assert!(result.products.is_empty());
        assert_eq!(result.rejected[0].kind, RecordKind::Product);
    }

    #[test]
    fn test_missing_numerics_default_to_zero() {
        let raw_materials = materials(json!([{ "id": 1, "name": "Farinha" }]));
        let raw_products = products(json!([{ "id": 10, "name": "Bolo" }]));

        let result = RecipeNormalizer::normalize(&raw_products, &raw_materials);

        assert_eq!(result.materials[0].stock_quantity, Decimal::ZERO);
        assert_eq!(result.products[0].unit_price, Decimal::ZERO);
        assert!(result.products[0].requirements.is_empty());
    }

    #[test]
    fn test_numeric_id_coerced_to_string() {
        let raw_materials = materials(json!([
            { "id": 42, "name": "Farinha", "stockQuantity": 100 }
        ]));

        let result = RecipeNormalizer::normalize(&[], &raw_materials);

        assert_eq!(result.materials[0].id, "42");
    }
}
