//! 工作中心屬性存取

use routing_core::{Result, RoutingError, WorkCenter, WorkCenterGroup};
use rust_decimal::Decimal;

/// 工作中心屬性存取介面
///
/// 工時與產能皆為已載入實體上的純讀取，不涉及 I/O；
/// 主要工作中心的選擇策略由實作者決定。
pub trait WorkCenterAccessor {
    /// 解析群組中的主要工作中心
    fn primary_work_center<'a>(&self, group: &'a WorkCenterGroup) -> Result<&'a WorkCenter>;

    /// 每週期機器時間（秒）
    fn machine_duration_per_cycle(&self, work_center: &WorkCenter) -> i64;

    /// 每週期人工時間（秒）
    fn human_duration_per_cycle(&self, work_center: &WorkCenter) -> i64;

    /// 每週期最小產能
    fn min_capacity_per_cycle(&self, work_center: &WorkCenter) -> Decimal;

    /// 每週期最大產能
    fn max_capacity_per_cycle(&self, work_center: &WorkCenter) -> Decimal;
}

/// 預設存取實作
///
/// 主要工作中心取 sequence 最小的成員
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultWorkCenterAccessor;

impl WorkCenterAccessor for DefaultWorkCenterAccessor {
    fn primary_work_center<'a>(&self, group: &'a WorkCenterGroup) -> Result<&'a WorkCenter> {
        group
            .work_centers
            .iter()
            .min_by_key(|wc| wc.sequence)
            .ok_or_else(|| RoutingError::EmptyWorkCenterGroup(group.name.clone()))
    }

    fn machine_duration_per_cycle(&self, work_center: &WorkCenter) -> i64 {
        work_center.duration_per_cycle
    }

    fn human_duration_per_cycle(&self, work_center: &WorkCenter) -> i64 {
        work_center.human_duration_per_cycle
    }

    fn min_capacity_per_cycle(&self, work_center: &WorkCenter) -> Decimal {
        work_center.min_capacity_per_cycle
    }

    fn max_capacity_per_cycle(&self, work_center: &WorkCenter) -> Decimal {
        work_center.max_capacity_per_cycle
    }
}
