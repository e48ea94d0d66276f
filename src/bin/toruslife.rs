//! Terminal front end for the toruslife engine.
//!
//! Presentation layer only: it feeds the controller a configuration, renders
//! each tick report with crossterm, and translates key presses into
//! controller commands. Space toggles pause, `+`/`-` adjust speed, `q` or
//! Escape quits.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use toruslife::prelude::*;

/// Conway's Game of Life on a toroidal grid with aging cells.
///
/// Cell color intensity grows with age: newborn cells are dim, cells at the
/// age cap show the full base color.
#[derive(Parser, Debug)]
#[command(name = "toruslife", version, about)]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = 100)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 40)]
    height: usize,

    /// Probability that a cell starts alive
    #[arg(short = 'p', long, default_value_t = 0.1)]
    probability: f64,

    /// Age at which a cell reaches full color intensity
    #[arg(long, default_value_t = 10)]
    max_age: u8,

    /// Initial delay between generations in milliseconds
    #[arg(long, default_value_t = 100)]
    delay: u64,

    /// Minimum delay reachable with `+`
    #[arg(long, default_value_t = 10)]
    min_delay: u64,

    /// Maximum delay reachable with `-`
    #[arg(long, default_value_t = 1000)]
    max_delay: u64,

    /// Delay change per speed command, in milliseconds
    #[arg(long, default_value_t = 10)]
    delay_step: u64,

    /// RNG seed for a reproducible initial grid
    #[arg(long)]
    seed: Option<u64>,

    /// Base color for live cells, as `R,G,B`
    #[arg(long, value_parser = parse_rgb, default_value = "0,200,0")]
    cell_color: Rgb,

    /// Background color, as `R,G,B`
    #[arg(long, value_parser = parse_rgb, default_value = "0,0,0")]
    background: Rgb,

    /// Load the configuration from a JSON file (flags other than --seed are
    /// then ignored)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the resolved configuration to a JSON file and exit
    #[arg(long)]
    write_config: Option<PathBuf>,
}

fn parse_rgb(text: &str) -> Result<Rgb, String> {
    let channels: Vec<&str> = text.split(',').collect();
    if channels.len() != 3 {
        return Err(format!("expected R,G,B with three channels, got '{text}'"));
    }
    let parse = |part: &str| {
        part.trim()
            .parse::<u8>()
            .map_err(|e| format!("invalid channel '{part}': {e}"))
    };
    Ok(Rgb::new(parse(channels[0])?, parse(channels[1])?, parse(channels[2])?))
}

fn resolve_configuration(cli: &Cli) -> Result<Configuration> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?
        }
        None => Configuration::new(
            GridConfig::new(cli.width, cli.height, cli.probability, cli.max_age),
            TimingConfig::new(cli.delay, cli.min_delay, cli.max_delay, cli.delay_step),
        ),
    };

    // Seed overrides the config file, matching a fresh-run override.
    if let Some(seed) = cli.seed {
        config.grid.seed = Some(seed);
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_configuration(&cli)?;

    if let Some(path) = &cli.write_config {
        let json = serde_json::to_string_pretty(&config)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        println!("Wrote configuration to {}", path.display());
        return Ok(());
    }

    let mut controller = SimulationController::new(&config)?;
    controller.set_cell_color(cli.cell_color);
    controller.set_background(cli.background);

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let result = render_loop(&mut controller, &mut stdout);

    execute!(stdout, ResetColor, Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn render_loop(controller: &mut SimulationController, stdout: &mut io::Stdout) -> Result<()> {
    let mut failure: Option<anyhow::Error> = None;

    controller.run(|report| {
        if let Err(err) = draw(stdout, &report) {
            failure = Some(err.into());
            return vec![Command::Quit];
        }
        match poll_commands() {
            Ok(commands) => commands,
            Err(err) => {
                failure = Some(err);
                vec![Command::Quit]
            }
        }
    });

    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Render one tick report, clipped to the visible terminal area.
fn draw(stdout: &mut io::Stdout, report: &TickReport<'_>) -> io::Result<()> {
    let (term_cols, term_rows) = terminal::size()?;
    let visible_rows = report.grid.height().min(term_rows.saturating_sub(1) as usize);
    let visible_cols = report.grid.width().min(term_cols as usize);

    let background = terminal_color(report.background);
    queue!(stdout, MoveTo(0, 0), SetBackgroundColor(background))?;

    for row in report.grid.rows().take(visible_rows) {
        for &age in &row[..visible_cols] {
            if age > 0 {
                let shade = report.cell_color.shaded(age, report.max_age);
                queue!(stdout, SetForegroundColor(terminal_color(shade)), Print('█'))?;
            } else {
                queue!(stdout, Print(' '))?;
            }
        }
        queue!(stdout, Clear(ClearType::UntilNewLine), Print("\r\n"))?;
    }

    let mut status = format!(
        " gen {}  pop {}  t {:.1}s  delay {}ms  {}  [space] pause  [+/-] speed  [q] quit",
        report.generation,
        report.population,
        report.simulation_secs,
        report.delay_ms,
        if report.paused { "paused " } else { "running" },
    );
    // Clip to the terminal width so the status never wraps and shifts the frame.
    status.truncate(term_cols as usize);
    queue!(stdout, Print(status), Clear(ClearType::UntilNewLine))?;
    stdout.flush()
}

fn terminal_color(color: Rgb) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Drain pending key events without blocking and map them to commands.
fn poll_commands() -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char(' ') => commands.push(Command::TogglePause),
                KeyCode::Char('+') | KeyCode::Char('=') => commands.push(Command::SpeedUp),
                KeyCode::Char('-') => commands.push(Command::SlowDown),
                KeyCode::Char('q') | KeyCode::Esc => commands.push(Command::Quit),
                _ => {}
            }
        }
    }
    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb() {
        assert_eq!(parse_rgb("0,200,0").unwrap(), Rgb::new(0, 200, 0));
        assert_eq!(parse_rgb(" 12, 34 ,56 ").unwrap(), Rgb::new(12, 34, 56));
        assert!(parse_rgb("0,200").is_err());
        assert!(parse_rgb("0,200,300").is_err());
        assert!(parse_rgb("red").is_err());
    }
}
