//! Simulation controller: tick cadence, pause, and delay management.
//!
//! The controller owns the engine and the runtime state that is not part of
//! the life rule: the inter-tick delay, the paused flag, accumulated
//! simulation time, and display colors it relays to the renderer without
//! interpreting them. It drives the engine one generation per unpaused tick
//! and pushes a report to an injected observer.

use crate::base::{Grid, Rgb};
use crate::simulation::{Configuration, GridEngine, InvalidConfig, TimingConfig};
use std::thread;
use std::time::{Duration, Instant};

/// Default cell color before the presentation layer sets one.
const DEFAULT_CELL_COLOR: Rgb = Rgb::new(0, 200, 0);
/// Default background color.
const DEFAULT_BACKGROUND: Rgb = Rgb::new(0, 0, 0);

/// A command the presentation layer feeds back into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Flip the paused flag.
    TogglePause,
    /// Decrease the delay by one step, saturating at the minimum.
    SpeedUp,
    /// Increase the delay by one step, saturating at the maximum.
    SlowDown,
    /// Change the base color live cells are rendered with.
    SetCellColor(Rgb),
    /// Change the background color.
    SetBackground(Rgb),
    /// Stop scheduling further ticks.
    Quit,
}

/// Snapshot of simulation state pushed to the observer once per tick.
#[derive(Debug, Clone, Copy)]
pub struct TickReport<'a> {
    /// Read-only view of the latest grid
    pub grid: &'a Grid,
    /// Age cap, for mapping ages to color intensity
    pub max_age: u8,
    /// Generations completed so far
    pub generation: u64,
    /// Live-cell count of the latest grid
    pub population: usize,
    /// Simulation time in seconds, accumulated only while unpaused
    pub simulation_secs: f64,
    /// Current inter-tick delay in milliseconds
    pub delay_ms: u64,
    /// Whether the simulation is paused
    pub paused: bool,
    /// Base color for live cells (pass-through display preference)
    pub cell_color: Rgb,
    /// Background color (pass-through display preference)
    pub background: Rgb,
}

/// Owns the engine and schedules its generation updates.
#[derive(Debug)]
pub struct SimulationController {
    engine: GridEngine,
    timing: TimingConfig,
    delay_ms: u64,
    paused: bool,
    simulation_time: Duration,
    /// Instant of the last unpaused tick; `None` while paused or before the
    /// first tick, so paused intervals never count toward simulation time.
    last_advance: Option<Instant>,
    cell_color: Rgb,
    background: Rgb,
}

impl SimulationController {
    /// Build a controller and its engine from a validated configuration.
    pub fn new(config: &Configuration) -> Result<Self, InvalidConfig> {
        config.timing.validate()?;
        let engine = GridEngine::new(&config.grid)?;
        Ok(Self::assemble(engine, config.timing.clone()))
    }

    /// Build a controller around an existing engine.
    ///
    /// Useful when the starting grid was seeded explicitly via
    /// [`GridEngine::from_grid`].
    pub fn with_engine(engine: GridEngine, timing: TimingConfig) -> Result<Self, InvalidConfig> {
        timing.validate()?;
        Ok(Self::assemble(engine, timing))
    }

    fn assemble(engine: GridEngine, timing: TimingConfig) -> Self {
        let delay_ms = timing.initial_delay_ms;
        Self {
            engine,
            timing,
            delay_ms,
            paused: false,
            simulation_time: Duration::ZERO,
            last_advance: None,
            cell_color: DEFAULT_CELL_COLOR,
            background: DEFAULT_BACKGROUND,
        }
    }

    /// The engine this controller drives.
    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }

    /// Current inter-tick delay in milliseconds.
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Whether ticks currently advance the simulation.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Seconds of unpaused simulation time accumulated so far.
    pub fn simulation_secs(&self) -> f64 {
        self.simulation_time.as_secs_f64()
    }

    /// Flip the paused flag. Pausing freezes the grid and the simulation
    /// clock; nothing else changes.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        if self.paused {
            self.last_advance = None;
        }
    }

    /// Decrease the delay by one step, saturating at the configured minimum.
    pub fn speed_up(&mut self) {
        self.delay_ms = self
            .delay_ms
            .saturating_sub(self.timing.delay_step_ms)
            .clamp(self.timing.min_delay_ms, self.timing.max_delay_ms);
    }

    /// Increase the delay by one step, saturating at the configured maximum.
    pub fn slow_down(&mut self) {
        self.delay_ms = self
            .delay_ms
            .saturating_add(self.timing.delay_step_ms)
            .clamp(self.timing.min_delay_ms, self.timing.max_delay_ms);
    }

    /// Store the base color live cells should be rendered with.
    pub fn set_cell_color(&mut self, color: Rgb) {
        self.cell_color = color;
    }

    /// Store the background color.
    pub fn set_background(&mut self, color: Rgb) {
        self.background = color;
    }

    /// Apply one command. Returns `false` for [`Command::Quit`], signalling
    /// that no further ticks should be scheduled.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::TogglePause => self.toggle_pause(),
            Command::SpeedUp => self.speed_up(),
            Command::SlowDown => self.slow_down(),
            Command::SetCellColor(color) => self.set_cell_color(color),
            Command::SetBackground(color) => self.set_background(color),
            Command::Quit => return false,
        }
        true
    }

    /// Perform one tick and report the resulting state.
    ///
    /// When unpaused this advances the engine one generation and adds the
    /// wall-clock interval since the previous unpaused tick to the
    /// simulation clock. When paused the grid and clock are left untouched.
    /// A report is produced either way.
    pub fn tick(&mut self) -> TickReport<'_> {
        if !self.paused {
            let now = Instant::now();
            if let Some(previous) = self.last_advance {
                self.simulation_time += now - previous;
            }
            self.last_advance = Some(now);
            self.engine.step();
        }
        self.report()
    }

    /// The report [`tick`](Self::tick) would produce, without ticking.
    pub fn report(&self) -> TickReport<'_> {
        TickReport {
            grid: self.engine.grid(),
            max_age: self.engine.max_age(),
            generation: self.engine.generation(),
            population: self.engine.population(),
            simulation_secs: self.simulation_time.as_secs_f64(),
            delay_ms: self.delay_ms,
            paused: self.paused,
            cell_color: self.cell_color,
            background: self.background,
        }
    }

    /// Run the scheduling loop until the observer requests a stop.
    ///
    /// Each cycle ticks once, hands the report to the observer, applies the
    /// commands it returns, and then sleeps the *current* delay. The delay is
    /// read fresh every cycle, so a speed command takes effect on the
    /// following tick rather than retroactively. Ticks run to completion;
    /// only one is ever in flight.
    pub fn run<F>(&mut self, mut observer: F)
    where
        F: FnMut(TickReport<'_>) -> Vec<Command>,
    {
        loop {
            let commands = observer(self.tick());
            for command in commands {
                if !self.apply(command) {
                    return;
                }
            }
            thread::sleep(Duration::from_millis(self.delay_ms));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Grid;
    use crate::simulation::GridConfig;

    fn timing() -> TimingConfig {
        TimingConfig::new(100, 10, 1000, 30)
    }

    fn controller() -> SimulationController {
        let config = Configuration::new(GridConfig::new(20, 20, 0.3, 10).with_seed(42), timing());
        SimulationController::new(&config).unwrap()
    }

    #[test]
    fn test_new_starts_unpaused_at_initial_delay() {
        let controller = controller();
        assert!(!controller.is_paused());
        assert_eq!(controller.delay_ms(), 100);
        assert_eq!(controller.simulation_secs(), 0.0);
        assert_eq!(controller.engine().generation(), 0);
    }

    #[test]
    fn test_new_rejects_invalid_timing() {
        let config = Configuration::new(
            GridConfig::new(20, 20, 0.3, 10),
            TimingConfig::new(100, 500, 50, 10),
        );
        assert!(SimulationController::new(&config).is_err());
    }

    #[test]
    fn test_tick_advances_generation() {
        let mut controller = controller();
        controller.tick();
        controller.tick();
        assert_eq!(controller.engine().generation(), 2);
    }

    #[test]
    fn test_tick_report_contents() {
        let mut controller = controller();
        controller.set_cell_color(Rgb::new(200, 0, 50));
        controller.set_background(Rgb::new(1, 2, 3));

        let report = controller.tick();
        assert_eq!(report.generation, 1);
        assert_eq!(report.max_age, 10);
        assert_eq!(report.population, report.grid.population());
        assert_eq!(report.delay_ms, 100);
        assert!(!report.paused);
        assert_eq!(report.cell_color, Rgb::new(200, 0, 50));
        assert_eq!(report.background, Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_paused_tick_freezes_grid_and_clock() {
        let mut controller = controller();
        controller.tick();
        let generation = controller.engine().generation();
        let grid_before = controller.engine().grid().clone();
        let secs_before = controller.simulation_secs();

        controller.toggle_pause();
        for _ in 0..5 {
            let report = controller.tick();
            assert!(report.paused);
            assert_eq!(report.generation, generation);
            assert_eq!(report.simulation_secs, secs_before);
        }
        assert_eq!(controller.engine().grid(), &grid_before);

        controller.toggle_pause();
        controller.tick();
        assert_eq!(controller.engine().generation(), generation + 1);
    }

    #[test]
    fn test_simulation_time_is_monotone_while_running() {
        let mut controller = controller();
        let mut previous = controller.simulation_secs();
        for _ in 0..3 {
            controller.tick();
            let now = controller.simulation_secs();
            assert!(now >= previous);
            previous = now;
        }
    }

    #[test]
    fn test_speed_up_saturates_at_min_delay() {
        let mut controller = controller();
        for _ in 0..100 {
            controller.speed_up();
            assert!(controller.delay_ms() >= 10);
        }
        assert_eq!(controller.delay_ms(), 10);
    }

    #[test]
    fn test_slow_down_saturates_at_max_delay() {
        let mut controller = controller();
        for _ in 0..100 {
            controller.slow_down();
            assert!(controller.delay_ms() <= 1000);
        }
        assert_eq!(controller.delay_ms(), 1000);
    }

    #[test]
    fn test_apply_commands() {
        let mut controller = controller();

        assert!(controller.apply(Command::TogglePause));
        assert!(controller.is_paused());

        assert!(controller.apply(Command::SpeedUp));
        assert_eq!(controller.delay_ms(), 70);
        assert!(controller.apply(Command::SlowDown));
        assert_eq!(controller.delay_ms(), 100);

        assert!(controller.apply(Command::SetCellColor(Rgb::new(9, 9, 9))));
        assert_eq!(controller.report().cell_color, Rgb::new(9, 9, 9));

        assert!(!controller.apply(Command::Quit));
    }

    #[test]
    fn test_with_engine_uses_given_grid() {
        let grid = Grid::from_rows(&[vec![0, 1, 0], vec![0, 1, 0], vec![0, 1, 0]]);
        let engine = GridEngine::from_grid(grid, 10).unwrap();
        let controller = SimulationController::with_engine(engine, timing()).unwrap();
        assert_eq!(controller.report().population, 3);
    }

    #[test]
    fn test_run_stops_on_quit() {
        let mut controller = controller();
        let mut ticks = 0;
        controller.run(|_report| {
            ticks += 1;
            if ticks >= 3 {
                vec![Command::Quit]
            } else {
                vec![Command::SpeedUp]
            }
        });
        assert_eq!(ticks, 3);
        assert_eq!(controller.engine().generation(), 3);
        // Both speed commands applied before quitting.
        assert_eq!(controller.delay_ms(), 40);
    }
}
