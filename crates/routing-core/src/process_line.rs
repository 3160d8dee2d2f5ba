//! 製程工序模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{WorkCenter, WorkCenterGroup};

/// 製程工序（途程中的一個步驟）
///
/// 工時與產能欄位在指派工作中心群組後，
/// 一律以主要工作中心的屬性重新推導。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessLine {
    /// 工序ID
    pub id: Uuid,

    /// 工序名稱
    pub name: String,

    /// 所屬製程代碼
    pub process_code: Option<String>,

    /// 排序優先級
    pub priority: i32,

    /// 指派的工作中心
    pub work_center: Option<WorkCenter>,

    /// 指派的工作中心群組（非模板）
    pub work_center_group: Option<WorkCenterGroup>,

    /// 每週期機器時間（秒），未設置視為 0
    pub duration_per_cycle: Option<i64>,

    /// 每週期人工時間（秒），未設置視為 0
    pub human_duration: Option<i64>,

    /// 每週期最小產能
    pub min_capacity_per_cycle: Decimal,

    /// 每週期最大產能（零表示不設限）
    pub max_capacity_per_cycle: Decimal,
}

impl ProcessLine {
    /// 創建新的工序
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            process_code: None,
            priority: 10,
            work_center: None,
            work_center_group: None,
            duration_per_cycle: None,
            human_duration: None,
            min_capacity_per_cycle: Decimal::ZERO,
            max_capacity_per_cycle: Decimal::ZERO,
        }
    }

    /// 建構器模式：設置所屬製程代碼
    pub fn with_process_code(mut self, process_code: String) -> Self {
        self.process_code = Some(process_code);
        self
    }

    /// 建構器模式：設置排序優先級
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// 建構器模式：指派工作中心
    pub fn with_work_center(mut self, work_center: WorkCenter) -> Self {
        self.work_center = Some(work_center);
        self
    }

    /// 建構器模式：設置每週期機器時間
    pub fn with_duration_per_cycle(mut self, seconds: i64) -> Self {
        self.duration_per_cycle = Some(seconds);
        self
    }

    /// 建構器模式：設置每週期人工時間
    pub fn with_human_duration(mut self, seconds: i64) -> Self {
        self.human_duration = Some(seconds);
        self
    }

    /// 建構器模式：設置每週期最小產能
    pub fn with_min_capacity_per_cycle(mut self, qty: Decimal) -> Self {
        self.min_capacity_per_cycle = qty;
        self
    }

    /// 建構器模式：設置每週期最大產能
    pub fn with_max_capacity_per_cycle(mut self, qty: Decimal) -> Self {
        self.max_capacity_per_cycle = qty;
        self
    }
}
