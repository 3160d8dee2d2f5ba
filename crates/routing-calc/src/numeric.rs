//! 數值輔助函式

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 無條件進位的除法
///
/// 不足一個週期仍佔用完整週期；divisor 不可為零
pub fn ceil_div(qty: Decimal, divisor: Decimal) -> Decimal {
    (qty / divisor).ceil()
}

/// 取列表中的最大工時；空列表回傳零
pub fn max_duration(durations: &[Decimal]) -> Decimal {
    durations.iter().copied().max().unwrap_or(Decimal::ZERO)
}

/// Decimal 轉整數秒（捨去小數）
pub fn to_secs(value: Decimal) -> i64 {
    value.trunc().to_i64().unwrap_or(0)
}
