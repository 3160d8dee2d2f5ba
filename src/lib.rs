//! # Routing
//!
//! 製造途程工時計算引擎：
//! 工作中心群組模板指派與週期工時計算

// Re-export 主要類型
pub use routing_calc::{
    CycleDuration, CycleDurationCalculator, DefaultWorkCenterAccessor,
    InMemoryProcessLineRepository, ProcessLineRepository, WorkCenterAccessor,
    WorkCenterGroupAssigner,
};
pub use routing_core::{
    Machine, OperationOrder, OperationOrderStatus, ProcessLine, Result, RoutingError, WorkCenter,
    WorkCenterGroup, WorkCenterKind,
};
