//! Binding to the native simulator shared library (C1), behind a trait seam
//! so tests drive a deterministic in-process stub instead of real dynamic
//! loading.

use crate::config::{EsminiParams, ViewerMode};
use crate::sim::monitor::StoryboardMonitor;
use crate::sim::raw_state::{ActorSeries, ObjectKind, RawState};
use crate::sim::resample::StateBuffer;
use std::collections::HashMap;
use std::ffi::{c_char, c_int, CStr, CString, OsStr};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

/// Why a simulation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndingCause {
    SimulatorQuit,
    MaxTimeReached,
    EndDetected,
    Failure,
}

/// Outcome of driving one scenario through the simulator.
#[derive(Debug, Clone)]
pub struct SimResult {
    pub actors: ActorSeries,
    pub sim_time: f64,
    pub ending_cause: EndingCause,
}

/// A single storyboard callback observation, as delivered by the simulator.
#[derive(Debug, Clone)]
pub struct StoryboardEvent {
    pub name: String,
    pub level: i32,
    pub state: i32,
}

/// Abstraction over the simulator's binary ABI (§4.2). Implemented once for
/// the real `libloading`-backed library, and once for an in-process
/// deterministic stub used by tests.
pub trait SimDylib {
    fn init(&mut self, scenario_path: &Path, viewer_mode: ViewerMode, threaded: bool) -> crate::Result<()>;
    fn set_seed(&mut self, seed: u32);
    fn log_to_console(&mut self, enabled: bool);
    fn log_to_file_path(&mut self, path: &str);
    fn step(&mut self) -> crate::Result<()>;
    fn step_dt(&mut self, dt: f32) -> crate::Result<()>;
    fn get_sim_time(&self) -> f32;
    fn get_quit_flag(&self) -> i32;
    fn get_num_objects(&self) -> i32;
    fn get_id(&self, index: i32) -> i32;
    fn get_name(&self, id: i32) -> String;
    fn get_object_state(&self, id: i32) -> Option<RawState>;
    /// Drain storyboard callback events observed since the last call.
    fn drain_storyboard_events(&mut self) -> Vec<StoryboardEvent>;
    fn close(&mut self);
}

/// Resolve the simulator's shared-library filename for the current
/// platform, matching the naming convention in §6 "Environment".
pub fn platform_library_name() -> &'static OsStr {
    #[cfg(target_os = "linux")]
    {
        OsStr::new("libesmini.so")
    }
    #[cfg(target_os = "macos")]
    {
        OsStr::new("libesmini.dylib")
    }
    #[cfg(target_os = "windows")]
    {
        OsStr::new("esmini.dll")
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        OsStr::new("libesmini.so")
    }
}

/// Native ABI symbol table resolved once at load time.
struct EsminiSymbols {
    library: libloading::Library,
}

/// Out-param layout matching esmini's `SE_ScenarioObjectState` (§4.2
/// `get_object_state`): fixed-width C types, angles/lengths as `f32` the
/// way the native ABI reports them.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
struct CObjectState {
    id: c_int,
    model_id: c_int,
    control: c_int,
    timestamp: f32,
    x: f32,
    y: f32,
    z: f32,
    h: f32,
    p: f32,
    r: f32,
    road_id: c_int,
    junction_id: c_int,
    s: f32,
    t: f32,
    lane_id: c_int,
    lane_offset: f32,
    speed: f32,
    center_offset_x: f32,
    center_offset_y: f32,
    center_offset_z: f32,
    width: f32,
    length: f32,
    height: f32,
    object_type: c_int,
    object_category: c_int,
    wheel_angle: f32,
    wheel_rot: f32,
}

/// The storyboard callback's C signature (§4.2, §9 "stable trampoline").
type StoryboardCallbackFn = unsafe extern "C" fn(name: *const c_char, level: c_int, state: c_int);

/// Events observed by `storyboard_trampoline` since the last drain. The
/// native ABI has one global registration point, so this is process-wide;
/// `SIMULATION_LOCK` already guarantees only one simulation drives it at a
/// time.
static STORYBOARD_EVENTS: OnceLock<Mutex<Vec<StoryboardEvent>>> = OnceLock::new();

fn storyboard_event_queue() -> &'static Mutex<Vec<StoryboardEvent>> {
    STORYBOARD_EVENTS.get_or_init(|| Mutex::new(Vec::new()))
}

unsafe extern "C" fn storyboard_trampoline(name: *const c_char, level: c_int, state: c_int) {
    let name = if name.is_null() {
        String::new()
    } else {
        CStr::from_ptr(name).to_string_lossy().into_owned()
    };
    if let Ok(mut events) = storyboard_event_queue().lock() {
        events.push(StoryboardEvent { name, level, state });
    }
}

fn object_kind_from_c(value: c_int) -> ObjectKind {
    match value {
        1 => ObjectKind::Vehicle,
        2 => ObjectKind::Pedestrian,
        3 => ObjectKind::Misc,
        4 => ObjectKind::Other,
        _ => ObjectKind::None,
    }
}

/// `libloading`-backed implementation of `SimDylib`. Symbols are resolved
/// from `library` on each call rather than cached, since a `libloading::
/// Symbol` borrows from its `Library` and this struct is otherwise free to
/// move; the lookup cost is negligible next to one simulation tick.
pub struct EsminiLibrary {
    symbols: EsminiSymbols,
}

impl EsminiLibrary {
    pub fn load() -> crate::Result<Self> {
        let name = platform_library_name();
        let library = unsafe { libloading::Library::new(name) }.map_err(|e| {
            crate::Error::file_not_found(&format!("{}: {}", name.to_string_lossy(), e))
        })?;
        Ok(Self {
            symbols: EsminiSymbols { library },
        })
    }

    fn symbol<T>(&self, name: &[u8]) -> crate::Result<libloading::Symbol<'_, T>> {
        unsafe {
            self.symbols.library.get::<T>(name).map_err(|e| {
                crate::Error::invalid_xml(&format!(
                    "missing esmini symbol {}: {}",
                    String::from_utf8_lossy(name),
                    e
                ))
            })
        }
    }
}

impl SimDylib for EsminiLibrary {
    fn init(&mut self, scenario_path: &Path, viewer_mode: ViewerMode, threaded: bool) -> crate::Result<()> {
        let c_path = CString::new(scenario_path.to_string_lossy().as_bytes())
            .map_err(|e| crate::Error::invalid_xml(&e.to_string()))?;
        let viewer_flag: c_int = match viewer_mode {
            ViewerMode::Headless => 0,
            ViewerMode::Viewer => 1,
            ViewerMode::OffscreenCapture => 2,
        };
        let status = unsafe {
            let init_fn: libloading::Symbol<
                unsafe extern "C" fn(*const c_char, c_int, c_int) -> c_int,
            > = self.symbol(b"SE_Init\0")?;
            init_fn(c_path.as_ptr(), viewer_flag, threaded as c_int)
        };
        if status != 0 {
            return Err(crate::Error::invalid_xml("SE_Init returned a non-zero status"));
        }
        unsafe {
            let register_fn: libloading::Symbol<
                unsafe extern "C" fn(StoryboardCallbackFn) -> c_int,
            > = self.symbol(b"SE_RegisterStoryBoardElementStateChangeCallback\0")?;
            register_fn(storyboard_trampoline);
        }
        if let Ok(mut events) = storyboard_event_queue().lock() {
            events.clear();
        }
        Ok(())
    }

    fn set_seed(&mut self, seed: u32) {
        if let Ok(set_seed_fn) =
            self.symbol::<unsafe extern "C" fn(c_int)>(b"SE_SetSeed\0")
        {
            unsafe { set_seed_fn(seed as c_int) };
        }
    }

    fn log_to_console(&mut self, enabled: bool) {
        if let Ok(log_fn) = self.symbol::<unsafe extern "C" fn(c_int)>(b"SE_LogToConsole\0") {
            unsafe { log_fn(enabled as c_int) };
        }
    }

    fn log_to_file_path(&mut self, path: &str) {
        let Ok(c_path) = CString::new(path) else { return };
        if let Ok(log_fn) =
            self.symbol::<unsafe extern "C" fn(*const c_char)>(b"SE_SetLogFilePath\0")
        {
            unsafe { log_fn(c_path.as_ptr()) };
        }
    }

    fn step(&mut self) -> crate::Result<()> {
        let step_fn: libloading::Symbol<unsafe extern "C" fn() -> c_int> = self.symbol(b"SE_Step\0")?;
        let status = unsafe { step_fn() };
        if status != 0 {
            return Err(crate::Error::invalid_xml("SE_Step returned a non-zero status"));
        }
        Ok(())
    }

    fn step_dt(&mut self, dt: f32) -> crate::Result<()> {
        let step_fn: libloading::Symbol<unsafe extern "C" fn(f32) -> c_int> =
            self.symbol(b"SE_StepDT\0")?;
        let status = unsafe { step_fn(dt) };
        if status != 0 {
            return Err(crate::Error::invalid_xml("SE_StepDT returned a non-zero status"));
        }
        Ok(())
    }

    fn get_sim_time(&self) -> f32 {
        match self.symbol::<unsafe extern "C" fn() -> f32>(b"SE_GetSimulationTime\0") {
            Ok(get_time_fn) => unsafe { get_time_fn() },
            Err(_) => 0.0,
        }
    }

    fn get_quit_flag(&self) -> i32 {
        match self.symbol::<unsafe extern "C" fn() -> c_int>(b"SE_GetQuitFlag\0") {
            Ok(get_quit_fn) => unsafe { get_quit_fn() },
            Err(_) => 0,
        }
    }

    fn get_num_objects(&self) -> i32 {
        match self.symbol::<unsafe extern "C" fn() -> c_int>(b"SE_GetNumberOfObjects\0") {
            Ok(get_num_fn) => unsafe { get_num_fn() },
            Err(_) => 0,
        }
    }

    fn get_id(&self, index: i32) -> i32 {
        match self.symbol::<unsafe extern "C" fn(c_int) -> c_int>(b"SE_GetId\0") {
            Ok(get_id_fn) => unsafe { get_id_fn(index) },
            Err(_) => -1,
        }
    }

    fn get_name(&self, id: i32) -> String {
        let Ok(get_name_fn) =
            self.symbol::<unsafe extern "C" fn(c_int) -> *const c_char>(b"SE_GetObjectName\0")
        else {
            return String::new();
        };
        let ptr = unsafe { get_name_fn(id) };
        if ptr.is_null() {
            return String::new();
        }
        unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
    }

    fn get_object_state(&self, id: i32) -> Option<RawState> {
        let get_state_fn = self
            .symbol::<unsafe extern "C" fn(c_int, *mut CObjectState) -> c_int>(b"SE_GetObjectState\0")
            .ok()?;
        let mut raw = CObjectState::default();
        let status = unsafe { get_state_fn(id, &mut raw as *mut CObjectState) };
        if status != 0 {
            return None;
        }
        Some(RawState {
            timestamp: raw.timestamp as f64,
            id: raw.id,
            model_id: raw.model_id,
            object_type: object_kind_from_c(raw.object_type),
            object_category: raw.object_category,
            x: raw.x as f64,
            y: raw.y as f64,
            z: raw.z as f64,
            h: raw.h as f64,
            p: raw.p as f64,
            r: raw.r as f64,
            speed: raw.speed as f64,
            center_offset_x: raw.center_offset_x as f64,
            center_offset_y: raw.center_offset_y as f64,
            center_offset_z: raw.center_offset_z as f64,
            road_id: raw.road_id,
            junction_id: raw.junction_id,
            s: raw.s as f64,
            t: raw.t as f64,
            lane_id: raw.lane_id,
            lane_offset: raw.lane_offset as f64,
            length: raw.length as f64,
            width: raw.width as f64,
            height: raw.height as f64,
            wheel_angle: Some(raw.wheel_angle as f64),
            wheel_rotation: Some(raw.wheel_rot as f64),
        })
    }

    fn drain_storyboard_events(&mut self) -> Vec<StoryboardEvent> {
        match storyboard_event_queue().lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    fn close(&mut self) {
        if let Ok(close_fn) = self.symbol::<unsafe extern "C" fn() -> c_int>(b"SE_Close\0") {
            unsafe { close_fn() };
        }
    }
}

/// Process-wide lock serialising simulation runs: the native simulator has
/// global state, so at most one `simulate_scenario` call may be in flight
/// in this process at a time.
static SIMULATION_LOCK: Mutex<()> = Mutex::new(());

/// Drive `dylib` through one full scenario run: init, step loop, close.
/// The loop is single-threaded and strictly sequential (§5); the process
/// lock is held for the entire call.
pub fn simulate_scenario(
    dylib: &mut dyn SimDylib,
    scenario_path: &Path,
    params: &EsminiParams,
) -> SimResult {
    let _guard = SIMULATION_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    if let Err(_) = dylib.init(scenario_path, params.viewer_mode, params.threaded) {
        return SimResult {
            actors: HashMap::new(),
            sim_time: 0.0,
            ending_cause: EndingCause::Failure,
        };
    }
    dylib.set_seed(params.random_seed);
    dylib.log_to_console(params.log_to_console);
    if !params.log_to_file_path.is_empty() {
        dylib.log_to_file_path(&params.log_to_file_path);
    }

    let mut monitor = StoryboardMonitor::new(params.ignored_level);
    let mut buffers: HashMap<String, StateBuffer> = HashMap::new();
    let mut complete_since: Option<f64> = None;
    let mut ending_cause = EndingCause::MaxTimeReached;

    loop {
        if let Err(_) = dylib.step_dt(params.dt_sim as f32) {
            ending_cause = EndingCause::Failure;
            break;
        }

        let sim_time = dylib.get_sim_time() as f64;

        for event in dylib.drain_storyboard_events() {
            monitor.on_callback(&event.name, event.level, event.state);
        }

        let num_objects = dylib.get_num_objects();
        for index in 0..num_objects {
            let id = dylib.get_id(index);
            let name = dylib.get_name(id);
            if let Some(state) = dylib.get_object_state(id) {
                buffers
                    .entry(name)
                    .or_insert_with(StateBuffer::new)
                    .push(state, params.dt_sim);
            }
        }

        if dylib.get_quit_flag() != 0 {
            ending_cause = EndingCause::SimulatorQuit;
            break;
        }
        if sim_time >= params.max_time {
            ending_cause = EndingCause::MaxTimeReached;
            break;
        }
        if monitor.all_complete() {
            match (complete_since, params.grace_time) {
                (None, _) => complete_since = Some(sim_time),
                (Some(_), None) => {
                    ending_cause = EndingCause::EndDetected;
                    break;
                }
                (Some(first), Some(grace)) if sim_time - first >= grace => {
                    ending_cause = EndingCause::EndDetected;
                    break;
                }
                _ => {}
            }
        } else {
            complete_since = None;
        }
    }

    let sim_time = dylib.get_sim_time() as f64;
    dylib.close();

    let actors = buffers
        .into_iter()
        .map(|(name, buffer)| (name, buffer.series))
        .collect();

    SimResult {
        actors,
        sim_time,
        ending_cause,
    }
}
