//! 工作中心模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Machine;

/// 工作中心類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkCenterKind {
    /// 人工站
    Human,
    /// 機器
    Machine,
    /// 人機混合
    Both,
}

impl WorkCenterKind {
    /// 檢查是否包含機器
    pub fn is_machine_capable(&self) -> bool {
        matches!(self, WorkCenterKind::Machine | WorkCenterKind::Both)
    }

    /// 檢查是否包含人工
    pub fn is_human_capable(&self) -> bool {
        matches!(self, WorkCenterKind::Human | WorkCenterKind::Both)
    }
}

/// 工作中心
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkCenter {
    /// 工作中心ID
    pub id: Uuid,

    /// 工作中心代碼
    pub code: String,

    /// 工作中心名稱
    pub name: String,

    /// 工作中心類型
    pub kind: WorkCenterKind,

    /// 群組內排序（主要工作中心取最小值）
    pub sequence: i32,

    /// 關聯機台（機器類在計算時必須存在）
    pub machine: Option<Machine>,

    /// 啟動時間（秒）
    pub starting_duration: i64,

    /// 收尾時間（秒）
    pub ending_duration: i64,

    /// 每週期整備時間（秒）
    pub setup_duration: i64,

    /// 每週期機器時間（秒）
    pub duration_per_cycle: i64,

    /// 每週期人工時間（秒）
    pub human_duration_per_cycle: i64,

    /// 每週期最小產能
    pub min_capacity_per_cycle: Decimal,

    /// 每週期最大產能（零表示不設限）
    pub max_capacity_per_cycle: Decimal,
}

impl WorkCenter {
    /// 創建新的工作中心
    pub fn new(code: String, name: String, kind: WorkCenterKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            code,
            name,
            kind,
            sequence: 0,
            machine: None,
            starting_duration: 0,
            ending_duration: 0,
            setup_duration: 0,
            duration_per_cycle: 0,
            human_duration_per_cycle: 0,
            min_capacity_per_cycle: Decimal::ZERO,
            max_capacity_per_cycle: Decimal::ZERO,
        }
    }

    /// 建構器模式：設置群組內排序
    pub fn with_sequence(mut self, sequence: i32) -> Self {
        self.sequence = sequence;
        self
    }

    /// 建構器模式：關聯機台
    pub fn with_machine(mut self, machine: Machine) -> Self {
        self.machine = Some(machine);
        self
    }

    /// 建構器模式：設置啟動/收尾/整備時間
    pub fn with_overhead_durations(mut self, starting: i64, ending: i64, setup: i64) -> Self {
        self.starting_duration = starting;
        self.ending_duration = ending;
        self.setup_duration = setup;
        self
    }

    /// 建構器模式：設置每週期機器時間
    pub fn with_duration_per_cycle(mut self, seconds: i64) -> Self {
        self.duration_per_cycle = seconds;
        self
    }

    /// 建構器模式：設置每週期人工時間
    pub fn with_human_duration_per_cycle(mut self, seconds: i64) -> Self {
        self.human_duration_per_cycle = seconds;
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
