//! 製程工序儲存介面

use std::collections::HashMap;

use routing_core::{ProcessLine, Result, RoutingError};
use uuid::Uuid;

/// 製程工序儲存介面
///
/// save 為冪等 upsert；失敗時不得留下部分寫入
pub trait ProcessLineRepository {
    /// 保存工序，回傳已保存的內容
    fn save(&mut self, line: &ProcessLine) -> Result<ProcessLine>;
}

/// 記憶體儲存實作
///
/// 每筆記錄以 JSON 快照保存，與呼叫端不共享任何狀態
#[derive(Debug, Default)]
pub struct InMemoryProcessLineRepository {
    records: HashMap<Uuid, String>,
}

impl InMemoryProcessLineRepository {
    /// 創建空的儲存庫
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// 依ID讀回工序
    pub fn find(&self, id: Uuid) -> Option<ProcessLine> {
        self.records
            .get(&id)
            .and_then(|snapshot| serde_json::from_str(snapshot).ok())
    }

    /// 記錄筆數
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// 檢查是否為空
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ProcessLineRepository for InMemoryProcessLineRepository {
    fn save(&mut self, line: &ProcessLine) -> Result<ProcessLine> {
        let snapshot = serde_json::to_string(line)
            .map_err(|err| RoutingError::Persistence(err.to_string()))?;
        self.records.insert(line.id, snapshot);
        Ok(line.clone())
    }
}
