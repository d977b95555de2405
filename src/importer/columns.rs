// ==========================================
// 零售进货预测 - 输入列名
// ==========================================

pub const SKU_ID: &str = "SKU ID";
pub const FIN_YEAR: &str = "Fin Year";
pub const WEEK: &str = "Week";
pub const ACTUAL_SALES_UNITS: &str = "Actual Sales Units";
pub const ACTUAL_EOW_STOCK_UNITS: &str = "Actual EOW Stock Units";
pub const ACTUAL_SALES_MARGIN: &str = "Actual Sales Margin %";
pub const ACTUAL_INTAKE_UNITS: &str = "Actual Intake Units";
pub const EXPECTED_INTAKE_UNITS: &str = "Expected Intake Units";
pub const ACTUAL_CURRENT_STOCK_UNITS: &str = "Actual Current Stock Units";

// 描述列（缺失时默认为空）
pub const PRODUCT_ID: &str = "Product ID";
pub const CURRENT_RSP: &str = "Current RSP (incl VAT)";
pub const IMAGE_URL: &str = "Image 1 URL";
pub const PRODUCT_URL: &str = "product_url";
pub const BRAND: &str = "Brand";
pub const DEPARTMENT: &str = "Department";
pub const CATEGORY_LEVEL_1: &str = "Category Level 1";
pub const CATEGORY_LEVEL_2: &str = "Category Level 2";
pub const PRODUCT: &str = "Product";
pub const SIZE: &str = "Size";

/// 必需列（缺一即整批失败），顺序即报错顺序
pub const REQUIRED_COLUMNS: [&str; 9] = [
    FIN_YEAR,
    WEEK,
    SKU_ID,
    ACTUAL_SALES_UNITS,
    ACTUAL_EOW_STOCK_UNITS,
    ACTUAL_SALES_MARGIN,
    ACTUAL_INTAKE_UNITS,
    EXPECTED_INTAKE_UNITS,
    ACTUAL_CURRENT_STOCK_UNITS,
];
