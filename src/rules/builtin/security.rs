//! Security heuristics: IAM console access without MFA, threat-detection
//! coverage.

use crate::inventory::{bool_field, Inventory, ResourceRecord};
use crate::rules::{Category, Domain, Draft, Heuristic, Level, RuleMetadata};

/// Whether a credential-report style IAM user record has MFA. Both the
/// credential-report field (`mfa_active`) and the flattened API field
/// (`mfa_enabled`) are accepted.
fn has_mfa(user: &ResourceRecord) -> bool {
    bool_field(user, "mfa_active") || bool_field(user, "mfa_enabled")
}

/// ADVISOR-010: console users without MFA.
pub struct MfaHeuristic;

impl Heuristic for MfaHeuristic {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            id: "ADVISOR-010".into(),
            name: "MFA 필수 설정".into(),
            description: "콘솔 로그인이 가능하지만 MFA가 없는 IAM 사용자를 탐지".into(),
            domain: Domain::Security,
            category: Category::SecurityRisk,
            default_impact: Level::High,
            default_effort: Level::Low,
        }
    }

    fn run(&self, inventory: &Inventory) -> Vec<Draft> {
        let count = inventory
            .records("iam_users")
            .iter()
            .filter(|u| bool_field(u, "password_enabled") && !has_mfa(u))
            .count();
        if count == 0 {
            return vec![];
        }
        vec![Draft {
            title: "MFA 필수 설정".into(),
            description: format!(
                "{count}명의 IAM 사용자가 콘솔 로그인이 가능하지만 MFA가 설정되어 있지 \
                 않습니다. 모든 콘솔 사용자에게 MFA를 의무화하세요."
            ),
            category: Category::SecurityRisk,
            impact: Level::High,
            effort: Level::Low,
            quantitative_benefit: None,
        }]
    }
}

/// ADVISOR-011: no GuardDuty detectors in a collected detector inventory.
pub struct GuardDutyHeuristic;

impl Heuristic for GuardDutyHeuristic {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            id: "ADVISOR-011".into(),
            name: "GuardDuty 활성화".into(),
            description: "GuardDuty 탐지기가 하나도 없는 계정을 탐지".into(),
            domain: Domain::Security,
            category: Category::SecurityRisk,
            default_impact: Level::High,
            default_effort: Level::Low,
        }
    }

    fn run(&self, inventory: &Inventory) -> Vec<Draft> {
        if !inventory.was_collected("guardduty_detectors")
            || inventory.count("guardduty_detectors") > 0
        {
            return vec![];
        }
        vec![Draft {
            title: "GuardDuty 활성화".into(),
            description: "GuardDuty 탐지기가 구성되어 있지 않습니다. 계정 수준의 위협 \
                          탐지를 위해 전체 리전에서 GuardDuty를 활성화하세요."
                .into(),
            category: Category::SecurityRisk,
            impact: Level::High,
            effort: Level::Low,
            quantitative_benefit: None,
        }]
    }
}
