//! Dependencies injected into the Order actor at `run()` time.

use crate::assignment::AssignmentPolicy;
use crate::clients::AgentClient;

/// Everything the order hooks need beyond the order itself.
pub struct OrderContext {
    pub agents: AgentClient,
    pub policy: AssignmentPolicy,
}

impl OrderContext {
    pub fn new(agents: AgentClient, policy: AssignmentPolicy) -> Self {
        Self { agents, policy }
    }
}
