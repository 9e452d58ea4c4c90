//! `sy-sim` — step loop orchestrator for the shipyard digital twin.
//!
//! # Step loop
//!
//! ```text
//! step():
//!   ① Agents  — Agent::act for each registered agent, in order
//!               (default: WorkOrderCoordinator, then ResourceAllocator).
//!   ② Events  — drain events with trigger <= current_time and apply them:
//!                 supply_chain_delay          → update/insert supply-chain row
//!                 shipyard_equipment_failure  → unit out of service
//!                 shipyard_equipment_repair   → unit back in the pool
//!                 anything else               → one warning, discarded
//!   ③ Clock   — current_time += time_step
//! ```
//!
//! `start()` repeats `step()` until stopped; `SharedSim` does the same on a
//! background thread while other threads read snapshots.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sy_data::{load_supply_chain_or_log, load_work_orders_or_log};
//! use sy_sim::{NoopObserver, Sim};
//!
//! let orders = load_work_orders_or_log(Path::new("shipyard.csv")).ok_or(...)?;
//! let supply = load_supply_chain_or_log(Path::new("supply_chain.csv")).ok_or(...)?;
//! let mut sim = Sim::new(orders, supply, 1)?;
//! sim.run_steps(10, &mut NoopObserver);
//! println!("{:?}", sim.snapshot().status_counts());
//! ```

pub mod builder;
pub mod control;
pub mod effects;
pub mod error;
pub mod observer;
pub mod shared;
pub mod sim;


pub use builder::SimBuilder;
pub use control::{RunState, StopHandle};
pub use effects::{EventOutcome, apply_event};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use shared::SharedSim;
pub use sim::{Sim, StepReport};
