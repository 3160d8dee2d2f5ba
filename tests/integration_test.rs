//! 集成測試

use routing_calc::{
    CycleDurationCalculator, DefaultWorkCenterAccessor, InMemoryProcessLineRepository,
    WorkCenterGroupAssigner,
};
use routing_core::*;
use rust_decimal::Decimal;

/// 建立沖壓線模板：機器工作中心（主要）加人工工作中心
fn press_line_template() -> WorkCenterGroup {
    WorkCenterGroup::new_template("GRP-T1".to_string(), "沖壓線模板".to_string())
        .with_work_center(
            WorkCenter::new(
                "WC-PRESS".to_string(),
                "沖壓".to_string(),
                WorkCenterKind::Machine,
            )
            .with_sequence(10)
            .with_machine(Machine::new("PRESS-01".to_string(), "沖壓機".to_string()))
            .with_overhead_durations(10, 5, 2)
            .with_duration_per_cycle(50)
            .with_min_capacity_per_cycle(Decimal::from(1)),
        )
        .with_work_center(
            WorkCenter::new(
                "WC-ASM".to_string(),
                "組裝".to_string(),
                WorkCenterKind::Human,
            )
            .with_sequence(20)
            .with_human_duration_per_cycle(60),
        )
}

#[test]
fn test_assign_then_compute_full_flow() {
    // 場景：先指派模板，數量確定後再計算工時

    // 1. 指派模板至工序
    let template = press_line_template();
    let line = ProcessLine::new("沖壓".to_string()).with_process_code("PROC-001".to_string());
    let mut repo = InMemoryProcessLineRepository::new();

    let assigner = WorkCenterGroupAssigner::new(DefaultWorkCenterAccessor);
    let updated = assigner.assign(&mut repo, &line, &template).unwrap();

    // 2. 驗證指派後置條件
    let group = updated.work_center_group.as_ref().unwrap();
    assert!(!group.is_template());
    assert_eq!(group.template_origin, Some(template.id));
    assert_eq!(group.len(), template.len());
    for wc in &template.work_centers {
        assert!(group.contains(wc.id));
    }

    // 工時與產能欄位來自 sequence 最小的主要工作中心
    let work_center = updated.work_center.as_ref().unwrap();
    assert_eq!(work_center.code, "WC-PRESS");
    assert_eq!(updated.duration_per_cycle, Some(50));
    assert_eq!(updated.human_duration, Some(0));
    assert_eq!(updated.min_capacity_per_cycle, Decimal::from(1));
    assert_eq!(updated.max_capacity_per_cycle, Decimal::ZERO);

    // 已保存的內容與回傳一致
    let stored = repo.find(updated.id).unwrap();
    assert_eq!(stored.duration_per_cycle, Some(50));

    // 3. 計算工時：產能不設限，5 件即 5 個週期
    //    固定負擔 10 + 5 + 4 × 2 = 23，機器工時 23 + 5 × 50 = 273
    let mut order = OperationOrder::new("OP-001".to_string());
    let planned = CycleDurationCalculator::compute_entire_cycle_duration(
        Some(&mut order),
        &updated,
        Decimal::from(5),
    )
    .unwrap();

    assert_eq!(planned, 273);
    assert_eq!(order.planned_machine_duration, 273);
    assert_eq!(order.planned_human_duration, 0);
}

#[test]
fn test_human_only_line_writes_split_to_order() {
    // 數量 10、每週期最多 3 件：4 個週期 × 60 秒人工
    let work_center = WorkCenter::new(
        "WC-ASM".to_string(),
        "組裝".to_string(),
        WorkCenterKind::Human,
    );
    let line = ProcessLine::new("組裝".to_string())
        .with_work_center(work_center)
        .with_human_duration(60)
        .with_max_capacity_per_cycle(Decimal::from(3));

    let mut order = OperationOrder::new("OP-002".to_string());
    let planned = CycleDurationCalculator::compute_entire_cycle_duration(
        Some(&mut order),
        &line,
        Decimal::from(10),
    )
    .unwrap();

    assert_eq!(planned, 240);
    assert_eq!(order.planned_machine_duration, 0);
    assert_eq!(order.planned_human_duration, 240);
}

#[test]
fn test_compute_without_order_has_no_side_effect() {
    let work_center = WorkCenter::new(
        "WC-ASM".to_string(),
        "組裝".to_string(),
        WorkCenterKind::Human,
    );
    let line = ProcessLine::new("組裝".to_string())
        .with_work_center(work_center)
        .with_human_duration(60)
        .with_max_capacity_per_cycle(Decimal::from(3));

    let planned =
        CycleDurationCalculator::compute_entire_cycle_duration(None, &line, Decimal::from(10))
            .unwrap();

    assert_eq!(planned, 240);
}

#[test]
fn test_missing_work_center_error() {
    let line = ProcessLine::new("裁切".to_string()).with_process_code("PROC-001".to_string());

    let err = CycleDurationCalculator::compute_entire_cycle_duration(None, &line, Decimal::from(5))
        .unwrap_err();

    assert_eq!(err.code(), "ROUTING_MISSING_WORK_CENTER");
    let message = err.to_string();
    assert!(message.contains("PROC-001"));
    assert!(message.contains("裁切"));
}

#[test]
fn test_machine_capable_without_machine_error() {
    // 機器類工作中心但沒有關聯機台：配置錯誤
    let work_center = WorkCenter::new(
        "WC-PRESS".to_string(),
        "沖壓".to_string(),
        WorkCenterKind::Both,
    )
    .with_duration_per_cycle(50);
    let line = ProcessLine::new("沖壓".to_string())
        .with_work_center(work_center)
        .with_duration_per_cycle(50);

    let err = CycleDurationCalculator::compute_entire_cycle_duration(None, &line, Decimal::from(5))
        .unwrap_err();

    assert_eq!(err.code(), "ROUTING_MISSING_MACHINE");
    assert!(err.to_string().contains("沖壓"));
}
