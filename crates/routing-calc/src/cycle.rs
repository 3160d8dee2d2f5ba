//! 週期工時計算

use routing_core::{OperationOrder, ProcessLine, Result, RoutingError, WorkCenter};
use rust_decimal::Decimal;

use crate::numeric;
use crate::CycleDuration;

/// 週期工時計算器
///
/// 依每週期最大產能換算週期數，加上機器類工作中心的固定負擔，
/// 再由機器/人工的瓶頸資源決定計劃時長。
pub struct CycleDurationCalculator;

impl CycleDurationCalculator {
    /// 計算整批生產的計劃時長（秒）
    ///
    /// 若提供作業單，無論瓶頸落在哪一側，
    /// 機器與人工總工時都會一併寫回作業單。
    pub fn compute_entire_cycle_duration(
        operation_order: Option<&mut OperationOrder>,
        line: &ProcessLine,
        qty: Decimal,
    ) -> Result<i64> {
        let result = Self::compute(line, qty)?;

        if let Some(order) = operation_order {
            order.set_planned_durations(result.machine_duration, result.human_duration);
        }

        Ok(result.planned_duration)
    }

    /// 計算週期數與機器/人工工時拆分
    pub fn compute(line: &ProcessLine, qty: Decimal) -> Result<CycleDuration> {
        let work_center =
            line.work_center
                .as_ref()
                .ok_or_else(|| RoutingError::MissingWorkCenter {
                    process_code: line
                        .process_code
                        .clone()
                        .unwrap_or_else(|| "-".to_string()),
                    line_name: line.name.clone(),
                })?;

        let nb_cycles = Self::cycle_count(line, qty);
        let overhead = Self::fixed_overhead(work_center, nb_cycles)?;

        let machine_per_cycle = Decimal::from(line.duration_per_cycle.unwrap_or(0));
        let human_per_cycle = Decimal::from(line.human_duration.unwrap_or(0));
        let max_per_cycle = numeric::max_duration(&[machine_per_cycle, human_per_cycle]);

        let machine_duration = overhead + numeric::to_secs(nb_cycles * machine_per_cycle);
        let human_duration = numeric::to_secs(nb_cycles * human_per_cycle);

        // 瓶頸資源決定計劃時長；每週期工時相同時機器優先
        let planned_duration = if machine_per_cycle == max_per_cycle {
            machine_duration
        } else {
            human_duration
        };

        tracing::debug!(
            "工序 {} 數量 {}: 週期數 {}, 機器 {} 秒, 人工 {} 秒, 計劃時長 {} 秒",
            line.name,
            qty,
            nb_cycles,
            machine_duration,
            human_duration,
            planned_duration
        );

        Ok(CycleDuration {
            nb_cycles,
            machine_duration,
            human_duration,
            planned_duration,
        })
    }

    /// 週期數
    ///
    /// 最大產能為零視為不設限，每單位一個週期；
    /// 否則依產能無條件進位。
    fn cycle_count(line: &ProcessLine, qty: Decimal) -> Decimal {
        let max_capacity = line.max_capacity_per_cycle;
        if max_capacity.is_zero() {
            qty
        } else {
            numeric::ceil_div(qty, max_capacity)
        }
    }

    /// 機器類工作中心的固定負擔：啟動 + 收尾 + (週期數 - 1) × 整備
    ///
    /// 機器類但未關聯機台屬配置錯誤，在任何工時計算前就失敗；
    /// 純人工工作中心沒有固定負擔。
    fn fixed_overhead(work_center: &WorkCenter, nb_cycles: Decimal) -> Result<i64> {
        if !work_center.kind.is_machine_capable() {
            return Ok(0);
        }

        if work_center.machine.is_none() {
            return Err(RoutingError::MissingMachine(work_center.name.clone()));
        }

        let setup_total = (nb_cycles - Decimal::ONE) * Decimal::from(work_center.setup_duration);

        Ok(work_center.starting_duration
            + work_center.ending_duration
            + numeric::to_secs(setup_total))
    }
}
