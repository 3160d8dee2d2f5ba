//! 作業單模型

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 作業單狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationOrderStatus {
    /// 草稿
    Draft,
    /// 已取消
    Canceled,
    /// 已排程
    Planned,
    /// 進行中
    InProgress,
    /// 暫停
    StandBy,
    /// 已完成
    Finished,
}

/// 作業單（工序的一次排定執行）
///
/// 由外部排程器建立與保存；計算器只把機器/人工工時拆分寫回。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationOrder {
    /// 作業單ID
    pub id: Uuid,

    /// 作業單名稱
    pub name: String,

    /// 排序優先級
    pub priority: i32,

    /// 狀態
    pub status: OperationOrderStatus,

    /// 計劃開始時間
    pub planned_start_date: Option<NaiveDateTime>,

    /// 計劃機器工時（秒）
    pub planned_machine_duration: i64,

    /// 計劃人工工時（秒）
    pub planned_human_duration: i64,
}

impl OperationOrder {
    /// 創建新的作業單
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            priority: 10,
            status: OperationOrderStatus::Draft,
            planned_start_date: None,
            planned_machine_duration: 0,
            planned_human_duration: 0,
        }
    }

    /// 建構器模式：設置排序優先級
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// 建構器模式：設置狀態
    pub fn with_status(mut self, status: OperationOrderStatus) -> Self {
        self.status = status;
        self
    }

    /// 建構器模式：設置計劃開始時間
    pub fn with_planned_start_date(mut self, start: NaiveDateTime) -> Self {
        self.planned_start_date = Some(start);
        self
    }

    /// 寫入計劃工時拆分（機器與人工）
    pub fn set_planned_durations(&mut self, machine_duration: i64, human_duration: i64) {
        self.planned_machine_duration = machine_duration;
        self.planned_human_duration = human_duration;
    }

    /// 計劃總時長（秒）：取機器與人工的較大者
    pub fn planned_total_duration(&self) -> i64 {
        self.planned_machine_duration.max(self.planned_human_duration)
    }

    /// 由計劃開始時間推導計劃結束時間
    pub fn planned_end_date(&self) -> Option<NaiveDateTime> {
        self.planned_start_date
            .map(|start| start + Duration::seconds(self.planned_total_duration()))
    }
}
