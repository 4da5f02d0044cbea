//! CLI entry point for single-file OpenSCENARIO → CommonRoad conversion.
//!
//! Mirrors `command_line_interface.py`'s `import`/`merge` modes and
//! interactive overwrite confirmation, styled on `tools/xosc_validate.rs`'s
//! clap-derive CLI.

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use xosc2cr::commonroad::opendrive::StubOpendriveConverter;
use xosc2cr::commonroad::{read_from_file, write_to_file, ObstacleIdGenerator};
use xosc2cr::config::ConverterParams;
use xosc2cr::convert::run_conversion;
use xosc2cr::sim::bridge::EsminiLibrary;

#[derive(Parser)]
#[command(name = "xosc2cr")]
#[command(about = "Convert an OpenSCENARIO scenario to a CommonRoad scenario")]
struct Args {
    #[command(subcommand)]
    mode: Mode,

    /// Never prompt before overwriting an existing target file.
    #[arg(long, global = true)]
    non_interactive: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Convert SOURCE into TARGET.
    Import {
        source: PathBuf,
        target: PathBuf,
        #[arg(short = 'd', long = "opendrive")]
        opendrive: Option<PathBuf>,
    },
    /// Convert SOURCE into TARGET, then merge in one or more existing
    /// CommonRoad files' lanelets and obstacles.
    Merge {
        source: PathBuf,
        target: PathBuf,
        #[arg(short = 'd', long = "opendrive")]
        opendrive: Option<PathBuf>,
        #[arg(long = "cr-files", required = true, num_args = 1..)]
        cr_files: Vec<PathBuf>,
    },
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let args = Args::parse();
    run(args)
}

fn run(args: Args) -> ExitCode {
    let (source, target, opendrive, cr_files) = match &args.mode {
        Mode::Import { source, target, opendrive } => (source, target, opendrive.clone(), Vec::new()),
        Mode::Merge {
            source,
            target,
            opendrive,
            cr_files,
        } => (source, target, opendrive.clone(), cr_files.clone()),
    };

    if !source.exists() {
        log::error!("Source filepath {} does not exist", source.display());
        return ExitCode::from(2);
    }
    if let Some(path) = &opendrive {
        if !path.exists() {
            log::error!("Opendrive filepath {} does not exist", path.display());
            return ExitCode::from(2);
        }
    }
    if target.exists() && args.non_interactive {
        log::error!("Target filepath {} already exists", target.display());
        return ExitCode::from(6);
    }

    let mut params = ConverterParams::default();
    params.xodr_path_override = opendrive;

    let mut dylib = match EsminiLibrary::load() {
        Ok(dylib) => dylib,
        Err(e) => {
            log::error!("failed to load simulator library: {e}");
            return ExitCode::from(3);
        }
    };
    let converter = StubOpendriveConverter::new();

    let outcome = match run_conversion(source, &params, &mut dylib, &converter, &[]) {
        Ok(outcome) => outcome,
        Err(e) => {
            log::error!("conversion failed: {e}");
            return ExitCode::from(4);
        }
    };

    let mut scenario = outcome.scenario;
    let mut id_generator = ObstacleIdGenerator::new();
    for id in scenario.obstacles.iter().map(|o| o.obstacle_id) {
        id_generator.advance_past(id);
    }

    for cr_file in &cr_files {
        match read_from_file(cr_file) {
            Ok((other, _)) => scenario.merge_scenario(&other, &mut id_generator),
            Err(e) => {
                log::error!("failed to read {} for merge: {e}", cr_file.display());
                return ExitCode::from(5);
            }
        }
    }

    if target.exists() && !confirm_overwrite(target) {
        return ExitCode::SUCCESS;
    }

    log::info!(
        "ego={} obstacles={} lanelets={}",
        outcome.statistics.ego_obstacle_id,
        scenario.obstacles.len(),
        scenario.lanelet_network.lanelets.len()
    );

    if let Err(e) = write_to_file(&scenario, std::slice::from_ref(&outcome.planning_problem), target) {
        log::error!("failed to write {}: {e}", target.display());
        return ExitCode::from(7);
    }

    ExitCode::SUCCESS
}

fn confirm_overwrite(target: &Path) -> bool {
    print!("Target {} already exists. Overwrite? (y/yes): ", target.display());
    let _ = std::io::stdout().flush();
    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return false;
    }
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
