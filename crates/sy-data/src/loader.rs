//! CSV dataset loaders.
//!
//! # Work orders
//!
//! ```csv
//! work_order_id,task_status,linked_shipyard_event,crane_id,agv_id,forklift_id,required_resources,prerequisite_tasks,tasks_done,pending_issues
//! 1,Pending,event1,,,,crane:1;agv:2,,false,false
//! 2,In Progress,,crane1,,,,1,true,false
//! ```
//!
//! Only the header names matter; columns may appear in any order, unknown
//! columns are ignored, and every column except `work_order_id` may be
//! absent.  A file without a `work_order_id` header fails with
//! [`DataError::MissingColumn`]; a blank `work_order_id` cell yields an
//! unidentified row (kept, but skipped by every agent).
//!
//! List cells accept `;`- or `,`-separated items, optionally wrapped in
//! `[...]` or `{...}` with quoted items, so both `crane:1;agv:2` and
//! `{'crane': 1, 'agv': 2}` parse.
//!
//! # Supply chain
//!
//! ```csv
//! event_id,linked_shipyard_event,delay_reason
//! sc1,event1,Supply Delay
//! ```
//!
//! A blank `event_id` is replaced by `row<N>` (data row number, from 1).
//!
//! # Resource pool
//!
//! ```csv
//! resource_id,kind
//! crane1,crane
//! agv1,agv
//! ```
//!
//! Both columns are required.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{error, info};

use sy_core::{ResourceKind, ResourceUnitId, SupplyEventId, WorkOrderId, WorkOrderStatus};
use sy_state::{ResourcePool, SupplyChainEvent, SupplyChainTable, WorkOrder, WorkOrderTable};

use crate::{DataError, DataResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct WorkOrderRecord {
    #[serde(default)]
    work_order_id:         Option<String>,
    #[serde(default, alias = "status")]
    task_status:           Option<String>,
    #[serde(default, alias = "linked_event")]
    linked_shipyard_event: Option<String>,
    #[serde(default)]
    crane_id:              Option<String>,
    #[serde(default)]
    agv_id:                Option<String>,
    #[serde(default)]
    forklift_id:           Option<String>,
    #[serde(default)]
    required_resources:    Option<String>,
    #[serde(default)]
    prerequisite_tasks:    Option<String>,
    #[serde(default)]
    tasks_done:            Option<String>,
    #[serde(default)]
    pending_issues:        Option<String>,
}

#[derive(Deserialize)]
struct SupplyChainRecord {
    #[serde(default, alias = "supply_chain_event_id", alias = "id")]
    event_id:              Option<String>,
    #[serde(default)]
    linked_shipyard_event: Option<String>,
    #[serde(default)]
    delay_reason:          Option<String>,
}

#[derive(Deserialize)]
struct PoolRecord {
    resource_id: String,
    kind:        String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a work-order table from a CSV file.
pub fn load_work_orders_csv(path: &Path) -> DataResult<WorkOrderTable> {
    load_work_orders_reader(std::fs::File::open(path)?)
}

/// Like [`load_work_orders_csv`] but accepts any `Read` source.
pub fn load_work_orders_reader<R: Read>(reader: R) -> DataResult<WorkOrderTable> {
    let mut table = WorkOrderTable::new();
    for_each_record(reader, &["work_order_id"], |row, rec: WorkOrderRecord| {
        table.push(work_order_from_record(row, rec)?)?;
        Ok(())
    })?;
    Ok(table)
}

/// Load a supply-chain table from a CSV file.
pub fn load_supply_chain_csv(path: &Path) -> DataResult<SupplyChainTable> {
    load_supply_chain_reader(std::fs::File::open(path)?)
}

pub fn load_supply_chain_reader<R: Read>(reader: R) -> DataResult<SupplyChainTable> {
    let mut table = SupplyChainTable::new();
    for_each_record(reader, &[], |row, rec: SupplyChainRecord| {
        let id = rec
            .event_id
            .as_deref()
            .and_then(SupplyEventId::parse)
            .or_else(|| SupplyEventId::parse(&format!("row{row}")))
            .ok_or_else(|| DataError::parse(row, "unusable event id"))?;
        let mut event = SupplyChainEvent::new(id);
        event.linked_shipyard_event = non_blank(rec.linked_shipyard_event);
        event.delay_reason = non_blank(rec.delay_reason);
        table.push(event)?;
        Ok(())
    })?;
    Ok(table)
}

/// Load a resource pool from a CSV file of `resource_id,kind` rows.
pub fn load_pool_csv(path: &Path) -> DataResult<ResourcePool> {
    load_pool_reader(std::fs::File::open(path)?)
}

pub fn load_pool_reader<R: Read>(reader: R) -> DataResult<ResourcePool> {
    let mut pool = ResourcePool::new();
    for_each_record(reader, &["resource_id", "kind"], |row, rec: PoolRecord| {
        let id = ResourceUnitId::parse(&rec.resource_id)
            .ok_or_else(|| DataError::parse(row, "blank resource_id"))?;
        let kind: ResourceKind = rec
            .kind
            .parse()
            .map_err(|e: sy_core::TwinError| DataError::parse(row, e.to_string()))?;
        pool.add_unit(id, kind)?;
        Ok(())
    })?;
    Ok(pool)
}

/// Load work orders, logging and swallowing any failure.
pub fn load_work_orders_or_log(path: &Path) -> Option<WorkOrderTable> {
    or_log(path, load_work_orders_csv(path))
}

/// Load supply-chain events, logging and swallowing any failure.
pub fn load_supply_chain_or_log(path: &Path) -> Option<SupplyChainTable> {
    or_log(path, load_supply_chain_csv(path))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn or_log<T>(path: &Path, result: DataResult<T>) -> Option<T> {
    let path = path.display();
    match result {
        Ok(table) => {
            info!(%path, "dataset loaded");
            Some(table)
        }
        Err(DataError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            error!(%path, "dataset file not found");
            None
        }
        Err(DataError::Empty) => {
            error!(%path, "dataset file is empty");
            None
        }
        Err(e) => {
            error!(%path, "failed to load dataset: {e}");
            None
        }
    }
}

/// Drive a CSV reader, deserializing each row into `T` and handing it to `f`
/// with its 1-based data row number.  Every name in `required` must appear
/// in the header row.
fn for_each_record<R, T, F>(reader: R, required: &[&str], mut f: F) -> DataResult<()>
where
    R: Read,
    T: for<'de> Deserialize<'de>,
    F: FnMut(u64, T) -> DataResult<()>,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.is_empty() || headers.iter().all(str::is_empty) {
        return Err(DataError::Empty);
    }
    if let Some(missing) = required.iter().find(|&&name| !headers.iter().any(|h| h == name)) {
        return Err(DataError::MissingColumn(missing.to_string()));
    }

    for (i, result) in csv_reader.records().enumerate() {
        let row = i as u64 + 1;
        let record = result?;
        let parsed: T = record
            .deserialize(Some(&headers))
            .map_err(|e| DataError::parse(row, e.to_string()))?;
        f(row, parsed)?;
    }
    Ok(())
}

fn work_order_from_record(row: u64, rec: WorkOrderRecord) -> DataResult<WorkOrder> {
    let mut order = match rec.work_order_id.as_deref().and_then(WorkOrderId::parse) {
        Some(id) => WorkOrder::new(id),
        None     => WorkOrder::unidentified(),
    };

    if let Some(status) = non_blank(rec.task_status) {
        order.status = status
            .parse::<WorkOrderStatus>()
            .map_err(|e| DataError::parse(row, e.to_string()))?;
    }
    order.linked_event = non_blank(rec.linked_shipyard_event);
    order.crane_id = rec.crane_id.as_deref().and_then(ResourceUnitId::parse);
    order.agv_id = rec.agv_id.as_deref().and_then(ResourceUnitId::parse);
    order.forklift_id = rec.forklift_id.as_deref().and_then(ResourceUnitId::parse);

    if let Some(cell) = rec.required_resources.as_deref() {
        for item in split_list(cell) {
            let (kind, qty) = item
                .split_once(':')
                .ok_or_else(|| DataError::parse(row, format!("expected kind:qty, got {item:?}")))?;
            let kind: ResourceKind = unquote(kind)
                .parse()
                .map_err(|e: sy_core::TwinError| DataError::parse(row, e.to_string()))?;
            let qty: u32 = unquote(qty)
                .parse()
                .map_err(|_| DataError::parse(row, format!("invalid quantity in {item:?}")))?;
            order.required_resources.insert(kind, qty);
        }
    }

    if let Some(cell) = rec.prerequisite_tasks.as_deref() {
        order.prerequisite_tasks = split_list(cell)
            .filter_map(|item| WorkOrderId::parse(unquote(item)))
            .collect();
    }

    order.tasks_done = parse_flag(row, "tasks_done", rec.tasks_done.as_deref())?;
    order.pending_issues = parse_flag(row, "pending_issues", rec.pending_issues.as_deref())?;
    Ok(order)
}

fn non_blank(cell: Option<String>) -> Option<String> {
    cell.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

/// Split a list cell into trimmed, non-empty items.
fn split_list(cell: &str) -> impl Iterator<Item = &str> {
    let inner = cell
        .trim()
        .trim_start_matches(['[', '{', '('])
        .trim_end_matches([']', '}', ')']);
    inner
        .split([';', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn unquote(s: &str) -> &str {
    s.trim().trim_matches(['\'', '"']).trim()
}

fn parse_flag(row: u64, column: &str, cell: Option<&str>) -> DataResult<bool> {
    let Some(cell) = cell else {
        return Ok(false);
    };
    match cell.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "f" | "0" | "no" | "n" => Ok(false),
        "true" | "t" | "1" | "yes" | "y"      => Ok(true),
        other => Err(DataError::parse(row, format!("invalid {column} value {other:?}"))),
    }
}
