//! `sy-data` — dataset loading and generation.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                       |
//! |------------|----------------------------------------------------------------|
//! | [`loader`] | `load_work_orders_csv`, `load_supply_chain_csv`, `load_pool_csv`, reader variants, `*_or_log` wrappers |
//! | [`writer`] | `write_work_orders`, `write_supply_chain` (same format the loader reads) |
//! | [`synth`]  | `SynthConfig`, `generate` — seeded synthetic datasets          |
//! | [`error`]  | `DataError`, `DataResult<T>`                                   |
//!
//! # Failure contract
//!
//! The `load_*` functions return a typed [`DataError`].  The `*_or_log`
//! wrappers log the cause with `tracing::error!` and return `None`, so a
//! driver can treat "missing, empty, or corrupt dataset" as a single failure
//! marker and decide whether to abort.

pub mod error;
pub mod loader;
pub mod synth;
pub mod writer;


pub use error::{DataError, DataResult};
pub use loader::{
    load_pool_csv, load_pool_reader, load_supply_chain_csv, load_supply_chain_or_log,
    load_supply_chain_reader, load_work_orders_csv, load_work_orders_or_log,
    load_work_orders_reader,
};
pub use synth::{SynthConfig, generate};
pub use writer::{write_supply_chain, write_work_orders};
