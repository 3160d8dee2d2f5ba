//! 機台模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 機台
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Machine {
    /// 機台ID
    pub id: Uuid,

    /// 機台代碼
    pub code: String,

    /// 機台名稱
    pub name: String,
}

impl Machine {
    /// 創建新的機台
    pub fn new(code: String, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            code,
            name,
        }
    }
}
