//! Compute heuristics: stopped-instance hygiene and Reserved Instance
//! coverage.

use crate::inventory::{str_field, Inventory, ResourceRecord};
use crate::rules::{Category, Domain, Draft, Heuristic, Level, RuleMetadata};

/// Assumed on-demand spend per running instance per month (USD), used for
/// the Reserved Instance ballpark.
const ON_DEMAND_MONTHLY_USD: f64 = 30.0;
/// Assumed Reserved Instance discount rate for the ballpark estimate.
const RI_DISCOUNT_RATE: f64 = 0.4;
/// Running-instance count above which RI coverage is worth reviewing.
const RI_REVIEW_THRESHOLD: usize = 5;

/// Instance state, whichever way the collector spelled it: a bare string
/// or a nested `{"name": ...}` object.
fn instance_state(record: &ResourceRecord) -> Option<String> {
    if let Some(state) = str_field(record, "state") {
        return Some(state.to_lowercase());
    }
    record
        .get("state")
        .and_then(|s| s.get("name").or_else(|| s.get("Name")))
        .and_then(|v| v.as_str())
        .map(|s| s.to_lowercase())
}

fn count_in_state(inventory: &Inventory, state: &str) -> usize {
    inventory
        .records("ec2_instances")
        .iter()
        .filter(|r| instance_state(r).as_deref() == Some(state))
        .count()
}

/// ADVISOR-008: stopped instances still holding billable resources.
pub struct StoppedInstanceHeuristic;

impl Heuristic for StoppedInstanceHeuristic {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            id: "ADVISOR-008".into(),
            name: "중지된 EC2 인스턴스 정리".into(),
            description: "중지 상태로 남아 있는 EC2 인스턴스를 탐지".into(),
            domain: Domain::Compute,
            category: Category::CostImpact,
            default_impact: Level::Medium,
            default_effort: Level::Low,
        }
    }

    fn run(&self, inventory: &Inventory) -> Vec<Draft> {
        let count = count_in_state(inventory, "stopped");
        if count == 0 {
            return vec![];
        }
        vec![Draft {
            title: "중지된 EC2 인스턴스 정리".into(),
            description: format!(
                "{count}개의 EC2 인스턴스가 중지 상태입니다. 중지 중에도 EBS 볼륨과 \
                 Elastic IP 비용은 계속 발생하므로, 장기 미사용 인스턴스는 AMI로 \
                 백업 후 종료하세요."
            ),
            category: Category::CostImpact,
            impact: Level::Medium,
            effort: Level::Low,
            quantitative_benefit: None,
        }]
    }
}

/// ADVISOR-009: sustained on-demand usage with no Reserved Instances.
pub struct ReservedInstanceHeuristic;

impl Heuristic for ReservedInstanceHeuristic {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            id: "ADVISOR-009".into(),
            name: "Reserved Instance 구매 검토".into(),
            description: "RI 없이 상시 운영 중인 온디맨드 인스턴스 집합을 탐지".into(),
            domain: Domain::Compute,
            category: Category::CostImpact,
            default_impact: Level::Medium,
            default_effort: Level::Medium,
        }
    }

    fn run(&self, inventory: &Inventory) -> Vec<Draft> {
        let running = count_in_state(inventory, "running");
        let reserved = inventory.count("reserved_instances");
        if running <= RI_REVIEW_THRESHOLD || reserved > 0 {
            return vec![];
        }
        let monthly = running as f64 * ON_DEMAND_MONTHLY_USD * RI_DISCOUNT_RATE;
        vec![Draft {
            title: "Reserved Instance 구매 검토".into(),
            description: format!(
                "{running}개의 인스턴스가 Reserved Instance 없이 온디맨드로 상시 운영 \
                 중입니다. 1년 약정만으로도 상당한 할인을 받을 수 있습니다."
            ),
            category: Category::CostImpact,
            impact: Level::Medium,
            effort: Level::Medium,
            quantitative_benefit: Some(format!(
                "월 약 ${monthly:.0} 절감 가능 (약정에 따라 최대 75% 할인)"
            )),
        }]
    }
}
