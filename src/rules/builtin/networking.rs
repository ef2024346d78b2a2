//! Networking heuristics: security-group exposure, flow logs, and
//! network-related cost hygiene (Elastic IP, NAT, VPC endpoints).

use crate::inventory::{blank_field, num_field, str_field, Inventory, ResourceRecord};
use crate::rules::{Category, Domain, Draft, Heuristic, Level, RuleMetadata};

const OPEN_CIDR: &str = "0.0.0.0/0";
const SSH_PORT: i64 = 22;
const RDP_PORT: i64 = 3389;

/// Monthly charge for one idle Elastic IP.
const EIP_MONTHLY_USD: f64 = 3.65;
/// Monthly charge for one NAT gateway, excluding data processing.
const NAT_MONTHLY_USD: i64 = 45;
/// NAT gateways above this count are consolidation candidates.
const NAT_BASELINE: usize = 2;

/// An ingress rule open to the whole internet.
struct OpenIngress {
    from_port: Option<i64>,
}

fn rule_cidr(record: &ResourceRecord) -> Option<&str> {
    str_field(record, "cidr_ipv4").or_else(|| str_field(record, "cidr_ip"))
}

/// Collect world-open ingress rules from both collector shapes: the flat
/// `security_groups_ingress` collection and rules nested under
/// `security_groups[].ip_permissions[].ip_ranges[]`.
fn open_ingress_rules(inventory: &Inventory) -> Vec<OpenIngress> {
    let mut open = Vec::new();

    for record in inventory.records("security_groups_ingress") {
        if rule_cidr(record) == Some(OPEN_CIDR) {
            open.push(OpenIngress {
                from_port: num_field(record, "from_port").map(|p| p as i64),
            });
        }
    }

    for group in inventory.records("security_groups") {
        let Some(permissions) = group.get("ip_permissions").and_then(|v| v.as_array()) else {
            continue;
        };
        for perm in permissions.iter().filter(|p| p.is_object()) {
            let Some(ranges) = perm.get("ip_ranges").and_then(|v| v.as_array()) else {
                continue;
            };
            let world_open = ranges
                .iter()
                .filter(|r| r.is_object())
                .any(|r| rule_cidr(r) == Some(OPEN_CIDR));
            if world_open {
                open.push(OpenIngress {
                    from_port: num_field(perm, "from_port").map(|p| p as i64),
                });
            }
        }
    }

    open
}

/// ADVISOR-001: SSH open to the internet.
pub struct OpenSshHeuristic;

impl Heuristic for OpenSshHeuristic {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            id: "ADVISOR-001".into(),
            name: "SSH 접근 제한".into(),
            description: "0.0.0.0/0에 개방된 SSH(22) 인그레스 규칙을 탐지".into(),
            domain: Domain::Networking,
            category: Category::SecurityRisk,
            default_impact: Level::High,
            default_effort: Level::Low,
        }
    }

    fn run(&self, inventory: &Inventory) -> Vec<Draft> {
        let count = open_ingress_rules(inventory)
            .iter()
            .filter(|r| r.from_port == Some(SSH_PORT))
            .count();
        if count == 0 {
            return vec![];
        }
        vec![Draft {
            title: "SSH 접근 제한".into(),
            description: format!(
                "{count}개의 보안 그룹 규칙이 SSH(22) 포트를 전체 인터넷(0.0.0.0/0)에 \
                 개방하고 있습니다. 허용 IP 대역을 관리망으로 제한하세요."
            ),
            category: Category::SecurityRisk,
            impact: Level::High,
            effort: Level::Low,
            quantitative_benefit: None,
        }]
    }
}

/// ADVISOR-002: RDP open to the internet.
pub struct OpenRdpHeuristic;

impl Heuristic for OpenRdpHeuristic {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            id: "ADVISOR-002".into(),
            name: "RDP 접근 제한".into(),
            description: "0.0.0.0/0에 개방된 RDP(3389) 인그레스 규칙을 탐지".into(),
            domain: Domain::Networking,
            category: Category::SecurityRisk,
            default_impact: Level::High,
            default_effort: Level::Low,
        }
    }

    fn run(&self, inventory: &Inventory) -> Vec<Draft> {
        let count = open_ingress_rules(inventory)
            .iter()
            .filter(|r| r.from_port == Some(RDP_PORT))
            .count();
        if count == 0 {
            return vec![];
        }
        vec![Draft {
            title: "RDP 접근 제한".into(),
            description: format!(
                "{count}개의 보안 그룹 규칙이 RDP(3389) 포트를 전체 인터넷(0.0.0.0/0)에 \
                 개방하고 있습니다. 허용 IP 대역을 관리망으로 제한하세요."
            ),
            category: Category::SecurityRisk,
            impact: Level::High,
            effort: Level::Low,
            quantitative_benefit: None,
        }]
    }
}

/// ADVISOR-003: world-open rules beyond SSH/RDP.
pub struct OpenPortSprawlHeuristic;

impl Heuristic for OpenPortSprawlHeuristic {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            id: "ADVISOR-003".into(),
            name: "보안 그룹 규칙 최소화".into(),
            description: "SSH/RDP 외 포트의 전체 개방 인그레스 규칙을 탐지".into(),
            domain: Domain::Networking,
            category: Category::SecurityRisk,
            default_impact: Level::Medium,
            default_effort: Level::Medium,
        }
    }

    fn run(&self, inventory: &Inventory) -> Vec<Draft> {
        let count = open_ingress_rules(inventory)
            .iter()
            .filter(|r| r.from_port != Some(SSH_PORT) && r.from_port != Some(RDP_PORT))
            .count();
        if count == 0 {
            return vec![];
        }
        vec![Draft {
            title: "보안 그룹 규칙 최소화".into(),
            description: format!(
                "SSH/RDP 외 {count}개의 인그레스 규칙이 0.0.0.0/0에 개방되어 있습니다. \
                 실제 사용 중인 포트와 출발지만 남기고 정리하세요."
            ),
            category: Category::SecurityRisk,
            impact: Level::Medium,
            effort: Level::Medium,
            quantitative_benefit: None,
        }]
    }
}

/// ADVISOR-004: VPCs without flow logs.
pub struct FlowLogsHeuristic;

impl Heuristic for FlowLogsHeuristic {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            id: "ADVISOR-004".into(),
            name: "VPC Flow Logs 활성화".into(),
            description: "Flow Log가 하나도 구성되지 않은 VPC 환경을 탐지".into(),
            domain: Domain::Networking,
            category: Category::SecurityRisk,
            default_impact: Level::Medium,
            default_effort: Level::Low,
        }
    }

    fn run(&self, inventory: &Inventory) -> Vec<Draft> {
        let vpc_count = inventory.count("vpcs");
        if vpc_count == 0 || inventory.count("flow_logs") > 0 {
            return vec![];
        }
        vec![Draft {
            title: "VPC Flow Logs 활성화".into(),
            description: format!(
                "{vpc_count}개의 VPC에 Flow Log가 구성되어 있지 않습니다. 네트워크 \
                 트래픽 감사와 이상 징후 분석을 위해 Flow Log를 활성화하세요."
            ),
            category: Category::SecurityRisk,
            impact: Level::Medium,
            effort: Level::Low,
            quantitative_benefit: None,
        }]
    }
}

/// ADVISOR-005: Elastic IPs without an association.
pub struct UnusedEipHeuristic;

impl Heuristic for UnusedEipHeuristic {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            id: "ADVISOR-005".into(),
            name: "미사용 Elastic IP 정리".into(),
            description: "어떤 리소스에도 연결되지 않은 Elastic IP를 탐지".into(),
            domain: Domain::Networking,
            category: Category::CostImpact,
            default_impact: Level::Medium,
            default_effort: Level::Low,
        }
    }

    fn run(&self, inventory: &Inventory) -> Vec<Draft> {
        let count = inventory
            .records("elastic_ips")
            .iter()
            .filter(|r| blank_field(r, "association_id"))
            .count();
        if count == 0 {
            return vec![];
        }
        let monthly = count as f64 * EIP_MONTHLY_USD;
        vec![Draft {
            title: "미사용 Elastic IP 정리".into(),
            description: format!(
                "{count}개의 Elastic IP가 어떤 리소스에도 연결되지 않은 채 과금되고 \
                 있습니다. 사용하지 않는 주소는 릴리스하세요."
            ),
            category: Category::CostImpact,
            impact: Level::Medium,
            effort: Level::Low,
            quantitative_benefit: Some(format!("월 ${monthly:.2} 절감 가능")),
        }]
    }
}

/// ADVISOR-006: more NAT gateways than the consolidation baseline.
pub struct NatGatewayHeuristic;

impl Heuristic for NatGatewayHeuristic {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            id: "ADVISOR-006".into(),
            name: "NAT Gateway 최적화".into(),
            description: "통합 여지가 있는 다수의 NAT Gateway를 탐지".into(),
            domain: Domain::Networking,
            category: Category::CostImpact,
            default_impact: Level::Medium,
            default_effort: Level::Medium,
        }
    }

    fn run(&self, inventory: &Inventory) -> Vec<Draft> {
        let count = inventory.count("nat_gateways");
        if count <= NAT_BASELINE {
            return vec![];
        }
        let monthly = (count - NAT_BASELINE) as i64 * NAT_MONTHLY_USD;
        vec![Draft {
            title: "NAT Gateway 최적화".into(),
            description: format!(
                "{count}개의 NAT Gateway가 운영 중입니다. 가용 영역 구성을 검토해 \
                 중복 게이트웨이를 통합하세요."
            ),
            category: Category::CostImpact,
            impact: Level::Medium,
            effort: Level::Medium,
            quantitative_benefit: Some(format!("월 ${monthly} 절감 가능")),
        }]
    }
}

/// ADVISOR-007: no VPC endpoints despite a collected endpoint inventory.
pub struct VpcEndpointHeuristic;

impl Heuristic for VpcEndpointHeuristic {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            id: "ADVISOR-007".into(),
            name: "VPC 엔드포인트 구성".into(),
            description: "VPC 엔드포인트가 전혀 구성되지 않은 환경을 탐지".into(),
            domain: Domain::Networking,
            category: Category::CostImpact,
            default_impact: Level::Medium,
            default_effort: Level::Medium,
        }
    }

    fn run(&self, inventory: &Inventory) -> Vec<Draft> {
        if !inventory.was_collected("vpc_endpoints") || inventory.count("vpc_endpoints") > 0 {
            return vec![];
        }
        vec![Draft {
            title: "VPC 엔드포인트 구성".into(),
            description: "VPC 엔드포인트가 구성되어 있지 않습니다. S3/DynamoDB 등 \
                          내부 트래픽을 엔드포인트로 전환하면 NAT 처리 비용을 줄일 수 \
                          있습니다."
                .into(),
            category: Category::CostImpact,
            impact: Level::Medium,
            effort: Level::Medium,
            quantitative_benefit: None,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn inventory(snapshot: serde_json::Value) -> Inventory {
        Inventory::from_json(&snapshot)
    }

    #[test]
    fn flags_world_open_ssh_from_flat_collection() {
        let inv = inventory(json!({
            "security_groups": [],
            "security_groups_ingress": [
                {"cidr_ipv4": "0.0.0.0/0", "from_port": 22}
            ]
        }));
        let drafts = OpenSshHeuristic.run(&inv);
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].title, "SSH 접근 제한");
        assert!(drafts[0].description.contains("1개"));
    }

    #[test]
    fn flags_ssh_from_nested_ip_permissions() {
        let inv = inventory(json!({
            "security_groups": [{
                "group_id": "sg-1",
                "ip_permissions": [{
                    "from_port": 22,
                    "to_port": 22,
                    "ip_ranges": [{"cidr_ip": "0.0.0.0/0"}]
                }]
            }]
        }));
        assert_eq!(OpenSshHeuristic.run(&inv).len(), 1);
    }

    #[test]
    fn restricted_cidr_does_not_flag() {
        let inv = inventory(json!({
            "security_groups_ingress": [
                {"cidr_ipv4": "10.0.0.0/8", "from_port": 22}
            ]
        }));
        assert!(OpenSshHeuristic.run(&inv).is_empty());
    }

    #[test]
    fn rdp_and_sprawl_are_separate_rules() {
        let inv = inventory(json!({
            "security_groups_ingress": [
                {"cidr_ipv4": "0.0.0.0/0", "from_port": 3389},
                {"cidr_ipv4": "0.0.0.0/0", "from_port": 8080}
            ]
        }));
        assert_eq!(OpenRdpHeuristic.run(&inv).len(), 1);
        let sprawl = OpenPortSprawlHeuristic.run(&inv);
        assert_eq!(sprawl.len(), 1);
        assert!(sprawl[0].description.contains("1개"));
        assert!(OpenSshHeuristic.run(&inv).is_empty());
    }

    #[test]
    fn flow_logs_needed_only_when_vpcs_exist() {
        let with_vpcs = inventory(json!({"vpcs": [{"vpc_id": "vpc-1"}], "flow_logs": []}));
        assert_eq!(FlowLogsHeuristic.run(&with_vpcs).len(), 1);

        let covered = inventory(json!({
            "vpcs": [{"vpc_id": "vpc-1"}],
            "flow_logs": [{"flow_log_id": "fl-1"}]
        }));
        assert!(FlowLogsHeuristic.run(&covered).is_empty());

        let no_vpcs = inventory(json!({"vpcs": [], "flow_logs": []}));
        assert!(FlowLogsHeuristic.run(&no_vpcs).is_empty());
    }

    #[test]
    fn unassociated_eips_priced_per_address() {
        let inv = inventory(json!({
            "elastic_ips": [
                {"allocation_id": "eipalloc-1"},
                {"allocation_id": "eipalloc-2", "association_id": null},
                {"allocation_id": "eipalloc-3", "association_id": ""},
                {"allocation_id": "eipalloc-4", "association_id": "eipassoc-1"}
            ]
        }));
        let drafts = UnusedEipHeuristic.run(&inv);
        assert_eq!(drafts.len(), 1);
        assert!(drafts[0].description.contains("3개"));
        assert_eq!(
            drafts[0].quantitative_benefit.as_deref(),
            Some("월 $10.95 절감 가능")
        );
    }

    #[test]
    fn nat_savings_counted_above_baseline() {
        let inv = inventory(json!({
            "nat_gateways": [
                {"nat_gateway_id": "nat-1"},
                {"nat_gateway_id": "nat-2"},
                {"nat_gateway_id": "nat-3"},
                {"nat_gateway_id": "nat-4"}
            ]
        }));
        let drafts = NatGatewayHeuristic.run(&inv);
        assert_eq!(drafts.len(), 1);
        assert_eq!(
            drafts[0].quantitative_benefit.as_deref(),
            Some("월 $90 절감 가능")
        );

        let two = inventory(json!({
            "nat_gateways": [{"nat_gateway_id": "nat-1"}, {"nat_gateway_id": "nat-2"}]
        }));
        assert!(NatGatewayHeuristic.run(&two).is_empty());
    }

    #[test]
    fn endpoint_rule_requires_collected_inventory() {
        let collected_empty = inventory(json!({"vpc_endpoints": []}));
        assert_eq!(VpcEndpointHeuristic.run(&collected_empty).len(), 1);

        let not_collected = inventory(json!({}));
        assert!(VpcEndpointHeuristic.run(&not_collected).is_empty());

        let present = inventory(json!({"vpc_endpoints": [{"vpc_endpoint_id": "vpce-1"}]}));
        assert!(VpcEndpointHeuristic.run(&present).is_empty());
    }

    #[test]
    fn empty_snapshot_yields_nothing_for_every_rule() {
        let inv = inventory(json!({}));
        assert!(OpenSshHeuristic.run(&inv).is_empty());
        assert!(OpenRdpHeuristic.run(&inv).is_empty());
        assert!(OpenPortSprawlHeuristic.run(&inv).is_empty());
        assert!(FlowLogsHeuristic.run(&inv).is_empty());
        assert!(UnusedEipHeuristic.run(&inv).is_empty());
        assert!(NatGatewayHeuristic.run(&inv).is_empty());
        assert!(VpcEndpointHeuristic.run(&inv).is_empty());
    }
}
