//! File discovery and worker-process dispatch for batch runs (C12).
//!
//! Grounded on `BatchConversion/BatchConverter.py`'s `discover_files`/
//! `run_batch_conversion`, reworked from Python's `multiprocessing` onto
//! `std::process::Command`: each task is a fresh OS process, re-invoking
//! the batch binary itself with a hidden `--worker-task <path>` entry
//! point, so no shared mutable state crosses the task boundary (§5).

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

/// Outcome of one file's conversion task, as reported by the worker
/// process on its stdout (one JSON line) or synthesised by the driver on
/// timeout/spawn failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchEntryStatus {
    Pending,
    Running,
    /// A normal, successful conversion; `result_record_path` points at the
    /// `Res_<basename><n>.json` file the worker persisted.
    Succeeded { result_record_path: PathBuf },
    /// A normal, expected non-conversion (§7 conversion failures).
    Failed { reason: String },
    /// An unexpected worker-side error: a bug to investigate, not a
    /// normal outcome.
    Errored { message: String, traceback: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEntry {
    pub source_path: PathBuf,
    pub status: BatchEntryStatus,
}

/// Enumerate files under `root` whose name matches `pattern`, sorted and
/// deduplicated. `recursive` controls whether subdirectories are visited.
pub fn discover_files(root: &Path, pattern: &Regex, recursive: bool) -> std::io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    walk(root, root, pattern, recursive, &mut found)?;
    found.sort();
    found.dedup();
    Ok(found)
}

fn walk(root: &Path, dir: &Path, pattern: &Regex, recursive: bool, found: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            if recursive || path.parent() == Some(root) {
                walk(root, &path, pattern, recursive, found)?;
            }
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if pattern.is_match(name) {
            found.push(path);
        }
    }
    Ok(())
}

struct RunningTask {
    source_path: PathBuf,
    child: Child,
    started_at: Instant,
}

/// Dispatch `files` to a worker pool of up to `num_workers` (or
/// `std::thread::available_parallelism()` if 0) subprocesses, each
/// `worker_binary --worker-task <path>`. A task exceeding `timeout` is
/// killed (SIGKILL-equivalent `Child::kill`) and marked `Errored("Timed
/// out")`; this driver escalates immediately since `std::process::Child`
/// offers no soft-terminate signal portably, unlike the half-timeout grace
/// period the analyzer sub-process watchdog uses.
pub fn run_batch(
    worker_binary: &Path,
    files: &[PathBuf],
    num_workers: usize,
    timeout: Duration,
) -> BTreeMap<PathBuf, BatchEntry> {
    let num_workers = if num_workers == 0 {
        std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
    } else {
        num_workers
    };

    let mut entries: BTreeMap<PathBuf, BatchEntry> = files
        .iter()
        .map(|path| {
            (
                path.clone(),
                BatchEntry {
                    source_path: path.clone(),
                    status: BatchEntryStatus::Pending,
                },
            )
        })
        .collect();

    let mut pending: Vec<PathBuf> = files.to_vec();
    let mut running: Vec<RunningTask> = Vec::new();

    loop {
        while running.len() < num_workers && !pending.is_empty() {
            let path = pending.remove(0);
            match spawn_worker(worker_binary, &path) {
                Ok(child) => {
                    entries.get_mut(&path).unwrap().status = BatchEntryStatus::Running;
                    running.push(RunningTask {
                        source_path: path,
                        child,
                        started_at: Instant::now(),
                    });
                }
                Err(e) => {
                    entries.get_mut(&path).unwrap().status = BatchEntryStatus::Errored {
                        message: format!("failed to spawn worker: {e}"),
                        traceback: String::new(),
                    };
                }
            }
        }

        if running.is_empty() {
            break;
        }

        running.retain_mut(|task| {
            match task.child.try_wait() {
                Ok(Some(exit_status)) => {
                    let status = collect_worker_result(&mut task.child, exit_status.success());
                    entries.get_mut(&task.source_path).unwrap().status = status;
                    false
                }
                Ok(None) => {
                    if task.started_at.elapsed() >= timeout {
                        let _ = task.child.kill();
                        let _ = task.child.wait();
                        entries.get_mut(&task.source_path).unwrap().status = BatchEntryStatus::Errored {
                            message: "Timed out".to_string(),
                            traceback: String::new(),
                        };
                        false
                    } else {
                        true
                    }
                }
                Err(e) => {
                    entries.get_mut(&task.source_path).unwrap().status = BatchEntryStatus::Errored {
                        message: format!("failed to poll worker: {e}"),
                        traceback: String::new(),
                    };
                    false
                }
            }
        });

        std::thread::sleep(Duration::from_millis(20));
    }

    entries
}

fn spawn_worker(worker_binary: &Path, source_path: &Path) -> std::io::Result<Child> {
    Command::new(worker_binary)
        .arg("--worker-task")
        .arg(source_path)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
}

fn collect_worker_result(child: &mut Child, exit_success: bool) -> BatchEntryStatus {
    use std::io::Read;

    let mut stdout = String::new();
    if let Some(mut out) = child.stdout.take() {
        let _ = out.read_to_string(&mut stdout);
    }

    if !exit_success {
        let mut stderr = String::new();
        if let Some(mut err) = child.stderr.take() {
            let _ = err.read_to_string(&mut stderr);
        }
        return BatchEntryStatus::Errored {
            message: "worker process exited non-zero".to_string(),
            traceback: stderr,
        };
    }

    match stdout.lines().next().map(serde_json::from_str::<BatchEntryStatus>) {
        Some(Ok(status)) => status,
        Some(Err(e)) => BatchEntryStatus::Errored {
            message: format!("could not parse worker result: {e}"),
            traceback: stdout,
        },
        None => BatchEntryStatus::Errored {
            message: "worker produced no result line".to_string(),
            traceback: String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discover_files_matches_pattern_recursively() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.xosc"), "").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub/b.xosc"), "").unwrap();
        std::fs::write(dir.path().join("c.txt"), "").unwrap();

        let pattern = Regex::new(r".*\.xosc$").unwrap();
        let files = discover_files(dir.path(), &pattern, true).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn discover_files_non_recursive_skips_subdirectories() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.xosc"), "").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub/b.xosc"), "").unwrap();

        let pattern = Regex::new(r".*\.xosc$").unwrap();
        let files = discover_files(dir.path(), &pattern, false).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn spawning_a_nonexistent_worker_is_reported_as_errored() {
        let mut entries = run_batch(
            Path::new("/no/such/worker-binary"),
            &[PathBuf::from("scenario.xosc")],
            1,
            Duration::from_secs(5),
        );
        let entry = entries.remove(&PathBuf::from("scenario.xosc")).unwrap();
        assert!(matches!(entry.status, BatchEntryStatus::Errored { .. }));
    }
}
