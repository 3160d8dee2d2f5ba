//! 工作中心群組模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::WorkCenter;

/// 工作中心群組
///
/// 可重複使用的工作中心集合。模板只供複製，
/// 掛在工序上的群組一律是模板實例化出來的獨立副本。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkCenterGroup {
    /// 群組ID
    pub id: Uuid,

    /// 群組代碼
    pub code: String,

    /// 群組名稱
    pub name: String,

    /// 是否為模板
    pub template: bool,

    /// 來源模板ID（由模板實例化時設置，之後不再變動）
    pub template_origin: Option<Uuid>,

    /// 成員工作中心（依ID去重）
    pub work_centers: Vec<WorkCenter>,
}

impl WorkCenterGroup {
    /// 創建新的群組
    pub fn new(code: String, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            code,
            name,
            template: false,
            template_origin: None,
            work_centers: Vec::new(),
        }
    }

    /// 創建新的群組模板
    pub fn new_template(code: String, name: String) -> Self {
        let mut group = Self::new(code, name);
        group.template = true;
        group
    }

    /// 建構器模式：添加工作中心
    pub fn with_work_center(mut self, work_center: WorkCenter) -> Self {
        self.add_work_center(work_center);
        self
    }

    /// 添加工作中心；同ID成員不重複加入
    pub fn add_work_center(&mut self, work_center: WorkCenter) {
        if !self.contains(work_center.id) {
            self.work_centers.push(work_center);
        }
    }

    /// 由模板實例化獨立群組
    ///
    /// 逐欄位複製，產生與模板無共享狀態的副本；
    /// 副本的模板旗標為 false，並保留指向來源模板的回溯連結。
    pub fn instantiate_from_template(template: &WorkCenterGroup) -> WorkCenterGroup {
        WorkCenterGroup {
            id: Uuid::new_v4(),
            code: template.code.clone(),
            name: template.name.clone(),
            template: false,
            template_origin: Some(template.id),
            work_centers: template.work_centers.clone(),
        }
    }

    /// 檢查是否包含指定工作中心
    pub fn contains(&self, work_center_id: Uuid) -> bool {
        self.work_centers.iter().any(|wc| wc.id == work_center_id)
    }

    /// 檢查是否為模板
    pub fn is_template(&self) -> bool {
        self.template
    }

    /// 成員數量
    pub fn len(&self) -> usize {
        self.work_centers.len()
    }

    /// 檢查是否為空群組
    pub fn is_empty(&self) -> bool {
        self.work_centers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WorkCenterKind;

    fn sample_template() -> WorkCenterGroup {
        WorkCenterGroup::new_template("GRP-T1".to_string(), "沖壓線模板".to_string())
            .with_work_center(WorkCenter::new(
                "WC-01".to_string(),
                "沖壓".to_string(),
                WorkCenterKind::Machine,
            ))
            .with_work_center(WorkCenter::new(
                "WC-02".to_string(),
                "組裝".to_string(),
                WorkCenterKind::Human,
            ))
    }

    #[test]
    fn test_instantiate_from_template() {
        let template = sample_template();
        let copy = WorkCenterGroup::instantiate_from_template(&template);

        assert!(!copy.is_template());
        assert_eq!(copy.template_origin, Some(template.id));
        assert_ne!(copy.id, template.id);

        // 成員逐一相同
        assert_eq!(copy.len(), template.len());
        for wc in &template.work_centers {
            assert!(copy.contains(wc.id));
        }
    }

    #[test]
    fn test_instantiated_copy_is_independent() {
        let template = sample_template();
        let mut copy = WorkCenterGroup::instantiate_from_template(&template);

        copy.add_work_center(WorkCenter::new(
            "WC-03".to_string(),
            "包裝".to_string(),
            WorkCenterKind::Human,
        ));
        copy.work_centers[0].name = "沖壓（改）".to_string();

        // 修改副本不影響模板
        assert_eq!(template.len(), 2);
        assert_eq!(template.work_centers[0].name, "沖壓");
    }

    #[test]
    fn test_add_work_center_deduplicates() {
        let mut group = WorkCenterGroup::new("GRP-01".to_string(), "沖壓線".to_string());
        let wc = WorkCenter::new(
            "WC-01".to_string(),
            "沖壓".to_string(),
            WorkCenterKind::Machine,
        );

        group.add_work_center(wc.clone());
        group.add_work_center(wc);

        assert_eq!(group.len(), 1);
    }
}
