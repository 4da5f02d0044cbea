//! CLI entry point for batch OpenSCENARIO → CommonRoad conversion (C12/C13).
//!
//! Mirrors `BatchConversion/BatchConverter.py`'s driver script. Doubles as
//! its own worker: invoked with the hidden `--worker-task <path>` flag it
//! converts a single file in-process and prints one `BatchEntryStatus` JSON
//! line to stdout, which is exactly the entry point `batch::run_batch`
//! spawns as a fresh OS process per task (§5).

use clap::Parser;
use std::path::PathBuf;
use xosc2cr::batch::{discover_files, run_batch, BatchEntryStatus, ResultStore};
use xosc2cr::commonroad::opendrive::StubOpendriveConverter;
use xosc2cr::config::BatchParams;
use xosc2cr::convert::run_conversion;
use xosc2cr::sim::bridge::EsminiLibrary;

/// `run_batch` spawns `worker_binary --worker-task <path>` with no further
/// arguments, so the storage directory a worker writes into travels via
/// this environment variable instead, inherited from the parent process
/// like the rest of the child's environment.
const STORAGE_DIR_ENV_VAR: &str = "XOSC2CR_WORKER_STORAGE_DIR";

#[derive(Parser)]
#[command(name = "xosc2cr-batch")]
#[command(about = "Convert a directory of OpenSCENARIO scenarios to CommonRoad scenarios")]
struct Args {
    /// TOML file with `BatchParams`; CLI flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    root_dir: Option<PathBuf>,

    #[arg(long)]
    pattern: Option<String>,

    #[arg(long)]
    recursive: Option<bool>,

    #[arg(long)]
    storage_dir: Option<PathBuf>,

    #[arg(long)]
    num_workers: Option<usize>,

    /// Hidden re-entry point: convert a single file and report the result
    /// as one JSON line on stdout, then exit. Not meant to be typed by a
    /// person; `run_batch` invokes the batch binary itself with this flag.
    #[arg(long, hide = true)]
    worker_task: Option<PathBuf>,
}

fn main() -> std::process::ExitCode {
    pretty_env_logger::init();
    let args = Args::parse();

    if let Some(task) = args.worker_task.clone() {
        run_worker_task(&task);
        return std::process::ExitCode::SUCCESS;
    }

    run_driver(args)
}

/// Convert one file and print its `BatchEntryStatus` as a single JSON line.
/// Always exits 0: a conversion failure is a normal `Failed` outcome, not a
/// process error, and is reported on stdout rather than via the exit code.
fn run_worker_task(path: &PathBuf) {
    let storage_dir = std::env::var(STORAGE_DIR_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./xosc2cr_out"));
    let params = BatchParams::default().converter;
    let store = ResultStore::new(storage_dir);
    let status = convert_one(path, &params, &store);
    println!(
        "{}",
        serde_json::to_string(&status).unwrap_or_else(|e| {
            format!(r#"{{"status":"errored","message":"failed to serialize result: {e}","traceback":""}}"#)
        })
    );
}

fn convert_one(
    path: &std::path::Path,
    params: &xosc2cr::config::ConverterParams,
    store: &ResultStore,
) -> BatchEntryStatus {
    let basename = path.file_stem().and_then(|s| s.to_str()).unwrap_or("scenario").to_string();

    let mut dylib = match EsminiLibrary::load() {
        Ok(dylib) => dylib,
        Err(e) => {
            return BatchEntryStatus::Errored {
                message: format!("failed to load simulator library: {e}"),
                traceback: String::new(),
            }
        }
    };
    let converter = StubOpendriveConverter::new();

    let outcome = match run_conversion(path, params, &mut dylib, &converter, &[]) {
        Ok(outcome) => outcome,
        Err(e) => return BatchEntryStatus::Failed { reason: e.to_string() },
    };

    let handle = match store.persist_scenario(&basename, &outcome.scenario, std::slice::from_ref(&outcome.planning_problem)) {
        Ok(handle) => handle,
        Err(e) => {
            return BatchEntryStatus::Errored {
                message: format!("failed to persist converted scenario: {e}"),
                traceback: String::new(),
            }
        }
    };

    let record = serde_json::json!({
        "source_path": path,
        "scenario_path": handle.scenario_path,
        "ego_obstacle_id": outcome.statistics.ego_obstacle_id,
        "simulation_time": outcome.statistics.simulation_time,
        "wall_clock_duration_secs": outcome.statistics.wall_clock_duration.as_secs_f64(),
        "lanelet_count_before_trim": outcome.statistics.lanelet_count_before_trim,
        "lanelet_count_after_trim": outcome.statistics.lanelet_count_after_trim,
        "xodr_error": outcome.xodr_error.map(|e| e.to_string()),
        "catalog_resolution_error": outcome.catalog_resolution_error,
    });

    match store.persist_result_record(&basename, &record) {
        Ok(result_record_path) => BatchEntryStatus::Succeeded { result_record_path },
        Err(e) => BatchEntryStatus::Errored {
            message: format!("failed to persist result record: {e}"),
            traceback: String::new(),
        },
    }
}

fn run_driver(args: Args) -> std::process::ExitCode {
    let mut params = match &args.config {
        Some(path) => match load_batch_params(path) {
            Ok(params) => params,
            Err(e) => {
                log::error!("failed to load {}: {e}", path.display());
                return std::process::ExitCode::from(2);
            }
        },
        None => BatchParams::default(),
    };

    if let Some(root_dir) = args.root_dir {
        params.root_dir = root_dir;
    }
    if let Some(pattern) = args.pattern {
        params.file_pattern = pattern;
    }
    if let Some(recursive) = args.recursive {
        params.recursive = recursive;
    }
    if let Some(storage_dir) = args.storage_dir {
        params.storage_dir = storage_dir;
    }
    if let Some(num_workers) = args.num_workers {
        params.num_workers = num_workers;
    }

    let pattern = match regex::Regex::new(&params.file_pattern) {
        Ok(pattern) => pattern,
        Err(e) => {
            log::error!("invalid file pattern {:?}: {e}", params.file_pattern);
            return std::process::ExitCode::from(2);
        }
    };

    let files = match discover_files(&params.root_dir, &pattern, params.recursive) {
        Ok(files) => files,
        Err(e) => {
            log::error!("failed to discover files under {}: {e}", params.root_dir.display());
            return std::process::ExitCode::from(2);
        }
    };
    log::info!("discovered {} scenario file(s) under {}", files.len(), params.root_dir.display());

    let worker_binary = match std::env::current_exe() {
        Ok(path) => path,
        Err(e) => {
            log::error!("failed to resolve own executable path: {e}");
            return std::process::ExitCode::from(3);
        }
    };

    std::env::set_var(STORAGE_DIR_ENV_VAR, &params.storage_dir);
    let entries = run_batch(&worker_binary, &files, params.num_workers, params.task_timeout);

    let store = ResultStore::new(params.storage_dir.clone());
    let mut succeeded = 0usize;
    let mut failed = 0usize;
    let mut errored = 0usize;
    for entry in entries.values() {
        match &entry.status {
            BatchEntryStatus::Succeeded { .. } => succeeded += 1,
            BatchEntryStatus::Failed { .. } => failed += 1,
            BatchEntryStatus::Errored { message, .. } => {
                errored += 1;
                log::warn!("{}: {message}", entry.source_path.display());
            }
            BatchEntryStatus::Pending | BatchEntryStatus::Running => {
                errored += 1;
                log::warn!("{}: left in an unfinished state", entry.source_path.display());
            }
        }
    }

    let statistics = serde_json::json!({
        "total": entries.len(),
        "succeeded": succeeded,
        "failed": failed,
        "errored": errored,
        "entries": entries.values().collect::<Vec<_>>(),
    });
    if let Err(e) = store.persist_statistics(&statistics) {
        log::error!("failed to persist aggregate statistics: {e}");
        return std::process::ExitCode::from(4);
    }

    log::info!("batch complete: {succeeded} succeeded, {failed} failed, {errored} errored");
    std::process::ExitCode::SUCCESS
}

fn load_batch_params(path: &std::path::Path) -> xosc2cr::Result<BatchParams> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| xosc2cr::Error::file_read_error(&path.to_string_lossy(), &e.to_string()))?;
    toml::from_str(&text).map_err(|e| xosc2cr::Error::parse_error(&path.to_string_lossy(), &e.to_string()))
}
