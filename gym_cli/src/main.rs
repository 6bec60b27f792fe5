use clap::{Parser, Subcommand};
use gym_core::rounding::{format_number, round_input};
use gym_core::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gymlog")]
#[command(about = "Four-week strength progression planner and log", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Reps added per week for weight exercises (this run only)
    #[arg(long, global = true, allow_negative_numbers = true)]
    reps_per_week: Option<i32>,

    /// Seconds added per week for timed exercises (this run only)
    #[arg(long, global = true, allow_negative_numbers = true)]
    seconds_per_week: Option<i32>,

    /// Report that the system prefers a dark theme
    #[arg(long, global = true)]
    system_dark: bool,

    /// Report a small screen (enables compact output in auto mode)
    #[arg(long, global = true)]
    small_screen: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the four-week table (default)
    Show,

    /// Set the start value (kg or seconds) for an exercise
    Start {
        /// Exercise id (e.g. bench, plank)
        id: String,

        /// Start value, stored as entered
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Round weights to the configured step before storing
        #[arg(long)]
        round: bool,
    },

    /// Log the actual result for a week
    Log {
        /// Exercise id (e.g. bench, plank)
        id: String,

        /// Week number
        #[arg(value_parser = clap::value_parser!(u8).range(1..=4))]
        week: u8,

        /// Logged value, stored as entered
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Round weights to the configured step before storing
        #[arg(long)]
        round: bool,
    },

    /// Clear every start value and logged result
    Reset,

    /// Export the table as CSV
    Export {
        /// Output path (`-` for stdout); defaults to the data directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or change display preferences
    Prefs {
        /// light, dark or system
        #[arg(long)]
        theme: Option<Theme>,

        /// auto, on or off
        #[arg(long)]
        compact: Option<CompactMode>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    gym_core::logging::init_with_level("warn");

    let cli = Cli::parse();

    let config = Config::load()?;
    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| config.data.data_dir.clone());

    let catalog = config.catalog();
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }

    let mut settings = config.progression_settings();
    if let Some(reps) = cli.reps_per_week {
        settings.reps_per_week = reps;
    }
    if let Some(seconds) = cli.seconds_per_week {
        settings.seconds_per_week = seconds;
    }

    let signals = DisplaySignals {
        system_prefers_dark: cli.system_dark,
        small_screen: cli.small_screen,
    };

    let mut store = FileStore::new(data_dir.join("store"));
    let mut state = AppState::load(&store, catalog, settings);

    match cli.command {
        Some(Commands::Show) | None => cmd_show(&state, &signals),
        Some(Commands::Start { id, value, round }) => {
            let value = maybe_round(&state, &id, value, round, config.progression.weight_step);
            state.set_start(&id, value.clone())?;
            state.persist(&mut store)?;
            println!("✓ Start for {} set to {:?}", display_name(&state, &id), value);
            Ok(())
        }
        Some(Commands::Log {
            id,
            week,
            value,
            round,
        }) => {
            let value = maybe_round(&state, &id, value, round, config.progression.weight_step);
            state.set_actual(&id, usize::from(week - 1), value.clone())?;
            state.persist(&mut store)?;
            println!(
                "✓ Week {} for {} logged as {:?}",
                week,
                display_name(&state, &id),
                value
            );
            Ok(())
        }
        Some(Commands::Reset) => {
            state.reset_all();
            state.persist(&mut store)?;
            println!("✓ All values cleared");
            Ok(())
        }
        Some(Commands::Export { output }) => {
            let output = output.unwrap_or_else(|| data_dir.join(&config.export.file_name));
            cmd_export(&state, &output)
        }
        Some(Commands::Prefs { theme, compact }) => {
            let changed = theme.is_some() || compact.is_some();
            if let Some(theme) = theme {
                state.theme = theme;
            }
            if let Some(compact) = compact {
                state.compact = compact;
            }
            if changed {
                state.persist(&mut store)?;
            }
            display_prefs(&state, &signals);
            Ok(())
        }
    }
}

/// Apply the weight rounder when asked; timed exercises are left alone
fn maybe_round(state: &AppState, id: &str, value: String, round: bool, step: f64) -> String {
    if !round {
        return value;
    }
    match state.catalog.get(id).map(|e| e.unit) {
        Some(Unit::Kg) => match round_input(&value, step) {
            Some(rounded) => format_number(rounded),
            None => {
                tracing::warn!("Cannot round {:?}; storing it as entered", value);
                value
            }
        },
        _ => {
            tracing::debug!("Rounding only applies to weight exercises; ignoring for {}", id);
            value
        }
    }
}

fn display_name(state: &AppState, id: &str) -> String {
    state
        .catalog
        .get(id)
        .map(|e| e.name.clone())
        .unwrap_or_else(|| id.to_string())
}

fn cmd_export(state: &AppState, output: &Path) -> Result<()> {
    let csv = state.export_csv()?;

    if output == Path::new("-") {
        let mut stdout = io::stdout().lock();
        stdout.write_all(csv.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    write_export(output, &csv)?;
    println!("✓ Exported {} rows", state.catalog.exercises.len());
    println!("  CSV: {} ({})", output.display(), EXPORT_MIME);
    Ok(())
}

fn cmd_show(state: &AppState, signals: &DisplaySignals) -> Result<()> {
    let compact = state.is_compact(signals);
    let rows = state.rows();

    if !compact {
        println!();
        println!("  Överkroppsprogram – 4 veckors progression");
        println!(
            "  Öka {} reps/vecka (håll vikten konstant), plankan +{} sek/vecka",
            state.settings.reps_per_week, state.settings.seconds_per_week
        );
        println!();
    }

    let name_width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Övning".chars().count());
    let (start_width, cell_width) = if compact { (6, 5) } else { (10, 9) };

    let mut header = format!(
        "{:<name_width$}  {:<11}  {:<start_width$}",
        "Övning", "Set×Reps", "Start"
    );
    for week in 1..=WEEKS {
        if compact {
            header.push_str(&format!(
                "  {:<cell_width$}  {:<cell_width$}",
                format!("M{}", week),
                format!("U{}", week)
            ));
        } else {
            header.push_str(&format!(
                "  {:<cell_width$}  {:<cell_width$}",
                format!("Mål v{}", week),
                format!("Utfört v{}", week)
            ));
        }
    }
    println!("{}", header.trim_end());
    println!("{}", "─".repeat(header.trim_end().chars().count()));

    for row in &rows {
        let start = if row.start.is_empty() {
            "–".to_string()
        } else if compact {
            row.start.clone()
        } else {
            format!("{} {}", row.start, row.unit)
        };

        let mut line = format!(
            "{:<name_width$}  {:<11}  {:<start_width$}",
            row.name, row.scheme, start
        );
        for (target, actual) in row.targets.iter().zip(&row.actuals) {
            let target = match target {
                Some(t) if compact => t.to_string(),
                Some(t) => format!("{} {}", t, row.unit.target_label()),
                None => "–".to_string(),
            };
            let actual = if actual.is_empty() { "·" } else { actual.as_str() };
            line.push_str(&format!("  {:<cell_width$}  {:<cell_width$}", target, actual));
        }
        println!("{}", line.trim_end());
    }

    if !compact {
        println!();
    }
    Ok(())
}

fn display_prefs(state: &AppState, signals: &DisplaySignals) {
    println!("Theme:   {} (dark: {})", state.theme, yes_no(state.is_dark(signals)));
    println!(
        "Compact: {} (active: {})",
        state.compact,
        yes_no(state.is_compact(signals))
    );
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
