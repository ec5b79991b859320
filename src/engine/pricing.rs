// ==========================================
// 备件库存管理系统 - 定价规则
// ==========================================
// 职责: 由成本价与毛利率派生售价
// 红线: 手工录入、行内编辑、批量导入三条写入路径
//       必须共用此函数，售价永不接受外部直接输入
// ==========================================

/// 售价 = 成本价 + 成本价 × 毛利率 / 100
///
/// 不做四舍五入；货币格式化属于展示层。
/// margin 允许为负（折价销售）。
pub fn sell_price(harga_modal: f64, margin_pct: f64) -> f64 {
    harga_modal + harga_modal * (margin_pct / 100.0)
}
