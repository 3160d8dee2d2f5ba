//! 工作中心群組指派

use routing_core::{ProcessLine, Result, WorkCenterGroup};

use crate::{ProcessLineRepository, WorkCenterAccessor};

/// 工作中心群組指派器
///
/// 把群組模板實例化為獨立群組掛上工序，
/// 並以主要工作中心的屬性重新推導工時與產能欄位。
pub struct WorkCenterGroupAssigner<A: WorkCenterAccessor> {
    accessor: A,
}

impl<A: WorkCenterAccessor> WorkCenterGroupAssigner<A> {
    /// 創建新的指派器
    pub fn new(accessor: A) -> Self {
        Self { accessor }
    }

    /// 指派群組模板至製程工序
    ///
    /// 不修改傳入的工序；完整更新後才保存一次，
    /// 途中任何錯誤都不會留下部分狀態。
    pub fn assign<R: ProcessLineRepository>(
        &self,
        repo: &mut R,
        line: &ProcessLine,
        template: &WorkCenterGroup,
    ) -> Result<ProcessLine> {
        tracing::debug!("指派工作中心群組 {} 至工序 {}", template.name, line.name);

        let group = WorkCenterGroup::instantiate_from_template(template);
        let work_center = self.accessor.primary_work_center(&group)?.clone();

        tracing::debug!("工序 {} 主要工作中心: {}", line.name, work_center.name);

        let mut updated = line.clone();
        updated.duration_per_cycle = Some(self.accessor.machine_duration_per_cycle(&work_center));
        updated.human_duration = Some(self.accessor.human_duration_per_cycle(&work_center));
        updated.min_capacity_per_cycle = self.accessor.min_capacity_per_cycle(&work_center);
        updated.max_capacity_per_cycle = self.accessor.max_capacity_per_cycle(&work_center);
        updated.work_center = Some(work_center);
        updated.work_center_group = Some(group);

        repo.save(&updated)
    }
}
