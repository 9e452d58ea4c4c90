//! Fluent builder for constructing a [`Sim`].

use sy_agent::{Agent, default_agents};
use sy_core::SimConfig;
use sy_events::{EventQueue, ScheduledEvent};
use sy_state::{PoolConfig, ResourcePool, ShipyardState, SupplyChainTable, WorkOrderTable};
use tracing::info;

use crate::{RunState, Sim, SimError, SimResult, StopHandle};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`WorkOrderTable`] and [`SupplyChainTable`] — usually from sy-data
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                          |
/// |---------------------|--------------------------------------------------|
/// | `.config(c)`        | `SimConfig::default()` (step 1, default policy)  |
/// | `.time_step(n)`     | 1                                                |
/// | `.pool(p)`          | `ResourcePool::from_config(&PoolConfig::default())` |
/// | `.agent(a)`         | coordinator, then allocator                      |
/// | `.event(e)`         | empty queue                                      |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(work_orders, supply_chain)
///     .time_step(5)
///     .pool_config(&PoolConfig { cranes: 1, agvs: 2, forklifts: 2 })
///     .build()?;
/// sim.run_steps(10, &mut NoopObserver);
/// ```
pub struct SimBuilder {
    config:       SimConfig,
    work_orders:  WorkOrderTable,
    supply_chain: SupplyChainTable,
    pool:         Option<ResourcePool>,
    agents:       Option<Vec<Box<dyn Agent>>>,
    events:       Vec<ScheduledEvent>,
}

impl SimBuilder {
    pub fn new(work_orders: WorkOrderTable, supply_chain: SupplyChainTable) -> Self {
        Self {
            config: SimConfig::default(),
            work_orders,
            supply_chain,
            pool:   None,
            agents: None,
            events: Vec::new(),
        }
    }

    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    pub fn time_step(mut self, time_step: u64) -> Self {
        self.config.time_step = time_step;
        self
    }

    pub fn pool(mut self, pool: ResourcePool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn pool_config(self, config: &PoolConfig) -> Self {
        self.pool(ResourcePool::from_config(config))
    }

    /// Register an agent.  The first call replaces the default line-up;
    /// agents run in the order they are added.
    pub fn agent(mut self, agent: impl Agent) -> Self {
        self.agents.get_or_insert_with(Vec::new).push(Box::new(agent));
        self
    }

    /// Replace the agent line-up.
    pub fn agents(mut self, agents: Vec<Box<dyn Agent>>) -> Self {
        self.agents = Some(agents);
        self
    }

    /// Queue an event before the first step.
    pub fn event(mut self, event: ScheduledEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Validate inputs, align the pool with loaded assignments, queue the
    /// initial events, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let agents = match self.agents {
            Some(a) if a.is_empty() => {
                return Err(SimError::Config("at least one agent is required".into()));
            }
            Some(a) => a,
            None    => default_agents(&self.config.policy),
        };

        let pool = self
            .pool
            .unwrap_or_else(|| ResourcePool::from_config(&PoolConfig::default()));
        let mut state = ShipyardState::new(self.work_orders, self.supply_chain, pool);
        let cleared = state.reconcile_assignments();

        let mut events = EventQueue::with_policy(&self.config.policy);
        for event in self.events {
            events.enqueue(event)?;
        }

        info!(
            work_orders = state.work_orders.len(),
            supply_chain = state.supply_chain.len(),
            units = state.resources.len(),
            agents = agents.len(),
            events = events.len(),
            cleared_assignments = cleared,
            time_step = self.config.time_step,
            "simulation initialized"
        );

        Ok(Sim {
            clock:     self.config.make_clock(),
            config:    self.config,
            state,
            events,
            agents,
            run_state: RunState::Idle,
            stop:      StopHandle::new(),
        })
    }
}
