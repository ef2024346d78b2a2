mod compute;
mod networking;
mod security;

use super::Heuristic;

/// Returns all built-in heuristics, in domain order.
pub fn all_heuristics() -> Vec<Box<dyn Heuristic>> {
    vec![
        Box::new(networking::OpenSshHeuristic),
        Box::new(networking::OpenRdpHeuristic),
        Box::new(networking::OpenPortSprawlHeuristic),
        Box::new(networking::FlowLogsHeuristic),
        Box::new(networking::UnusedEipHeuristic),
        Box::new(networking::NatGatewayHeuristic),
        Box::new(networking::VpcEndpointHeuristic),
        Box::new(compute::StoppedInstanceHeuristic),
        Box::new(compute::ReservedInstanceHeuristic),
        Box::new(security::MfaHeuristic),
        Box::new(security::GuardDutyHeuristic),
    ]
}
