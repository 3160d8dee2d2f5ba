//! # Routing Core
//!
//! 途程核心資料模型與類型定義

pub mod machine;
pub mod operation_order;
pub mod process_line;
pub mod work_center;
pub mod work_center_group;

// Re-export 主要類型
pub use machine::Machine;
pub use operation_order::{OperationOrder, OperationOrderStatus};
pub use process_line::ProcessLine;
pub use work_center::{WorkCenter, WorkCenterKind};
pub use work_center_group::WorkCenterGroup;

/// 途程計算錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    #[error("製程 {process_code} 的工序 {line_name} 未指派工作中心")]
    MissingWorkCenter {
        process_code: String,
        line_name: String,
    },

    #[error("工作中心 {0} 為機器類型但未關聯機台")]
    MissingMachine(String),

    #[error("工作中心群組 {0} 沒有任何工作中心")]
    EmptyWorkCenterGroup(String),

    #[error("持久化錯誤: {0}")]
    Persistence(String),
}

impl RoutingError {
    /// 穩定的錯誤代碼，供外部訊息渲染器查表使用
    pub fn code(&self) -> &'static str {
        match self {
            RoutingError::MissingWorkCenter { .. } => "ROUTING_MISSING_WORK_CENTER",
            RoutingError::MissingMachine(_) => "ROUTING_MISSING_MACHINE",
            RoutingError::EmptyWorkCenterGroup(_) => "ROUTING_EMPTY_WORK_CENTER_GROUP",
            RoutingError::Persistence(_) => "ROUTING_PERSISTENCE",
        }
    }
}

pub type Result<T> = std::result::Result<T, RoutingError>;
