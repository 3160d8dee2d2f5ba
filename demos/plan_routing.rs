//! 途程工時計算完整範例
//!
//! 展示從群組模板指派到作業單工時計算的完整流程

use chrono::NaiveDate;
use routing_calc::{
    CycleDurationCalculator, DefaultWorkCenterAccessor, InMemoryProcessLineRepository,
    WorkCenterGroupAssigner,
};
use routing_core::*;
use rust_decimal::Decimal;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("===== Routing Duration Example =====\n");

    // 步驟 1: 建立工作中心
    println!("[1] Create Work Centers");
    let press = WorkCenter::new(
        "WC-PRESS".to_string(),
        "沖壓".to_string(),
        WorkCenterKind::Machine,
    )
    .with_sequence(10)
    .with_machine(Machine::new("PRESS-01".to_string(), "沖壓機".to_string()))
    .with_overhead_durations(10, 5, 2)
    .with_duration_per_cycle(50)
    .with_min_capacity_per_cycle(Decimal::from(1))
    .with_max_capacity_per_cycle(Decimal::from(3));

    let assembly = WorkCenter::new(
        "WC-ASM".to_string(),
        "組裝".to_string(),
        WorkCenterKind::Human,
    )
    .with_sequence(20)
    .with_human_duration_per_cycle(60);

    println!("    WC-PRESS: machine, 50 s/cycle, capacity 3/cycle");
    println!("    WC-ASM:   human, 60 s/cycle\n");

    // 步驟 2: 建立群組模板
    println!("[2] Create Work Center Group Template");
    let template = WorkCenterGroup::new_template("GRP-T1".to_string(), "沖壓線模板".to_string())
        .with_work_center(press)
        .with_work_center(assembly);
    println!("    GRP-T1: {} work centers\n", template.len());

    // 步驟 3: 指派模板至工序
    println!("[3] Assign Template To Process Line");
    let line = ProcessLine::new("沖壓".to_string()).with_process_code("PROC-001".to_string());
    let mut repo = InMemoryProcessLineRepository::new();

    let assigner = WorkCenterGroupAssigner::new(DefaultWorkCenterAccessor);
    let line = assigner.assign(&mut repo, &line, &template)?;

    let work_center = line.work_center.as_ref().expect("primary work center");
    println!("    Primary Work Center: {}", work_center.code);
    println!(
        "    Duration/Cycle: {} s | Max Capacity/Cycle: {}\n",
        line.duration_per_cycle.unwrap_or(0),
        line.max_capacity_per_cycle
    );

    // 步驟 4: 建立作業單
    println!("[4] Create Operation Order");
    let start = NaiveDate::from_ymd_opt(2026, 9, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    let mut order = OperationOrder::new("OP-001".to_string())
        .with_status(OperationOrderStatus::Planned)
        .with_planned_start_date(start);
    println!("    OP-001 planned start: {}\n", start);

    // 步驟 5: 計算工時（數量 10，每週期最多 3 件）
    println!("[5] Compute Cycle Duration (qty 10)");
    let planned = CycleDurationCalculator::compute_entire_cycle_duration(
        Some(&mut order),
        &line,
        Decimal::from(10),
    )?;

    println!("    Planned Duration: {} s", planned);
    println!(
        "    Machine: {} s | Human: {} s",
        order.planned_machine_duration, order.planned_human_duration
    );
    if let Some(end) = order.planned_end_date() {
        println!("    Planned End: {}", end);
    }

    println!("\n===== Routing Duration Complete =====");

    Ok(())
}
