//! # Routing Calculation Engine
//!
//! 途程工時計算引擎：群組模板指派與週期工時計算

pub mod accessor;
pub mod assign;
pub mod cycle;
pub mod numeric;
pub mod repository;

// Re-export 主要類型
pub use accessor::{DefaultWorkCenterAccessor, WorkCenterAccessor};
pub use assign::WorkCenterGroupAssigner;
pub use cycle::CycleDurationCalculator;
pub use repository::{InMemoryProcessLineRepository, ProcessLineRepository};

use rust_decimal::Decimal;

/// 週期工時計算結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleDuration {
    /// 生產週期數
    pub nb_cycles: Decimal,

    /// 機器總工時（秒），含啟動/收尾/整備固定負擔
    pub machine_duration: i64,

    /// 人工總工時（秒）
    pub human_duration: i64,

    /// 計劃時長（秒），由瓶頸資源決定
    pub planned_duration: i64,
}
