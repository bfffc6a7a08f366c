//! AlgoVis-RS - Headless Runner
//!
//! Generates a random sequence, runs the selected sorting or searching
//! engine and plays the trace back in the terminal at the configured speed.

use std::path::PathBuf;

use algovis_rs::{
    config::{config_path, VisualizerConfig},
    frontend::{render_bars, status_line, TerminalStyle},
    search_trace, sort_trace, Event, PlaybackKind, PlaybackOutcome, SearchAlgorithm,
    SequenceGenerator, SortAlgorithm, Trace, Visualizer,
};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "algovis-rs", version, about = "Sorting & searching visualizer")]
struct Cli {
    /// Config file to read instead of the one in the app data directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Animate a sort of a random sequence
    Sort {
        /// Engine name, e.g. `quickSort` or `quick`
        #[arg(short, long)]
        algorithm: Option<String>,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Animate a search of a random sequence
    Search {
        /// Value to look for
        #[arg(short, long, allow_negative_numbers = true)]
        target: String,

        /// Engine name, e.g. `binarySearch` or `binary`
        #[arg(short, long)]
        algorithm: Option<String>,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Print the event trace of an engine without animating it
    Trace {
        #[command(subcommand)]
        kind: TraceCommand,
    },

    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the app data directory
        #[arg(long)]
        save: bool,
    },
}

#[derive(Subcommand)]
enum TraceCommand {
    Sort {
        #[arg(short, long)]
        algorithm: Option<String>,

        #[command(flatten)]
        input: InputArgs,
    },
    Search {
        #[arg(short, long, allow_negative_numbers = true)]
        target: String,

        #[arg(short, long)]
        algorithm: Option<String>,

        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Number of bars (10-100)
    #[arg(long)]
    size: Option<usize>,

    /// Animation speed (1-100, higher is faster)
    #[arg(long)]
    speed: Option<u32>,

    /// Seed for a reproducible sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Draw every frame as a bar chart
    #[arg(long)]
    render: bool,

    /// Use theme colors when rendering
    #[arg(long, requires = "render")]
    color: bool,
}

#[derive(Args)]
struct InputArgs {
    /// Explicit sequence, comma separated
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Number of random values when no sequence is given
    #[arg(long)]
    size: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    /// Print the trace as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,algovis_rs=debug")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::Sort { algorithm, run } => {
            let mut config = config;
            config.sort_algorithm = resolve_sort(algorithm.as_deref(), config.sort_algorithm);
            animate(config, PlaybackKind::Sort, run)
        }
        Command::Search {
            target,
            algorithm,
            run,
        } => {
            let mut config = config;
            config.search_algorithm =
                resolve_search(algorithm.as_deref(), config.search_algorithm);
            config.search_value = target;
            config.search_target()?;
            animate(config, PlaybackKind::Search, run)
        }
        Command::Trace { kind } => print_trace(&config, kind),
        Command::Config { save } => {
            print!("{}", toml::to_string_pretty(&config)?);
            if save {
                config.save()?;
                if let Some(path) = config_path() {
                    eprintln!("Saved to {}", path.display());
                }
            }
            Ok(())
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<VisualizerConfig> {
    match path {
        Some(path) => VisualizerConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(VisualizerConfig::load_or_default()),
    }
}

/// Engine named on the command line, unknown names fall back to bubble sort
fn resolve_sort(name: Option<&str>, configured: SortAlgorithm) -> SortAlgorithm {
    name.map_or(configured, SortAlgorithm::from_selector)
}

/// Engine named on the command line, unknown names fall back to linear search
fn resolve_search(name: Option<&str>, configured: SearchAlgorithm) -> SearchAlgorithm {
    name.map_or(configured, SearchAlgorithm::from_selector)
}

fn generator(config: &VisualizerConfig, seed: Option<u64>) -> Result<SequenceGenerator> {
    let generator = match seed {
        Some(seed) => SequenceGenerator::with_seed(config.value_range, seed)?,
        None => SequenceGenerator::new(config.value_range)?,
    };
    Ok(generator)
}

fn animate(mut config: VisualizerConfig, kind: PlaybackKind, run: RunArgs) -> Result<()> {
    if let Some(size) = run.size {
        config.array_size = size;
    }
    if let Some(speed) = run.speed {
        config.speed = speed;
    }

    let generator = generator(&config, run.seed)?;
    let visualizer = Visualizer::with_generator(config, generator)?;
    let style = run.render.then(|| TerminalStyle {
        color: run.color,
        theme: visualizer.config().theme,
        ..Default::default()
    });

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to build tokio runtime")?;

    runtime.block_on(async move {
        println!("Input:  {:?}", visualizer.sequence());

        let observer = style.map(|style| {
            let mut frames = visualizer.subscribe();
            let max_value = visualizer.config().value_range.max;
            tokio::spawn(async move {
                while frames.changed().await.is_ok() {
                    let state = frames.borrow_and_update().clone();
                    print!("\x1b[2J\x1b[H");
                    print!("{}", render_bars(&state, max_value, style));
                    println!("{}", status_line(&state));
                }
            })
        });

        let outcome = match kind {
            PlaybackKind::Sort => visualizer.start_sort().await,
            PlaybackKind::Search => visualizer.start_search().await,
        };
        let sequence = visualizer.sequence();
        let config = visualizer.config().clone();

        // Closing the channel ends the observer loop
        drop(visualizer);
        if let Some(observer) = observer {
            observer.await.context("Render task failed")?;
        }

        report(&config, kind, &sequence, &outcome);
        Ok(())
    })
}

fn report(
    config: &VisualizerConfig,
    kind: PlaybackKind,
    sequence: &[i64],
    outcome: &PlaybackOutcome,
) {
    let report = match outcome {
        PlaybackOutcome::Completed(report) => report,
        PlaybackOutcome::Ignored(reason) => {
            println!("Playback ignored: {:?}", reason);
            return;
        }
    };

    println!("Output: {:?}", sequence);
    match kind {
        PlaybackKind::Sort => println!("{}", config.sort_algorithm),
        PlaybackKind::Search => {
            let target = config.search_value.trim();
            match report.found {
                Some(index) => println!(
                    "{}: {} found at index {}",
                    config.search_algorithm, target, index
                ),
                None => println!("{}: {} not found", config.search_algorithm, target),
            }
        }
    }
    println!("{} frames in {:?}", report.frames, report.elapsed);
}

fn trace_input(config: &VisualizerConfig, input: &InputArgs) -> Result<Vec<i64>> {
    if !input.values.is_empty() {
        return Ok(input.values.clone());
    }
    let size = algovis_rs::config::validate_array_size(input.size.unwrap_or(config.array_size))?;
    Ok(generator(config, input.seed)?.generate(size))
}

fn print_trace(config: &VisualizerConfig, kind: TraceCommand) -> Result<()> {
    let (trace, json) = match kind {
        TraceCommand::Sort { algorithm, input } => {
            let algorithm = resolve_sort(algorithm.as_deref(), config.sort_algorithm);
            let sequence = trace_input(config, &input)?;
            (sort_trace::<i64>(&sequence, algorithm), input.json)
        }
        TraceCommand::Search {
            target,
            algorithm,
            input,
        } => {
            let algorithm = resolve_search(algorithm.as_deref(), config.search_algorithm);
            let target = algovis_rs::config::parse_search_target(&target)?;
            let mut sequence = trace_input(config, &input)?;
            if algorithm.requires_sorted_input() {
                sequence.sort_unstable();
            }
            (search_trace(&sequence, algorithm, &target), input.json)
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&trace)?);
    } else {
        print_events(&trace);
    }
    Ok(())
}

fn print_events(trace: &Trace) {
    println!(
        "{}: {} events ({} compares, {} swaps)",
        trace.source(),
        trace.len(),
        trace.compare_count(),
        trace.swap_count()
    );
    for (step, event) in trace.iter().enumerate() {
        match event {
            Event::Compare { indices, .. } => println!("{:>5}  compare {:?}", step, indices.to_vec()),
            Event::Swap { indices, snapshot } => {
                println!("{:>5}  swap    {:?} -> {:?}", step, indices.to_vec(), snapshot)
            }
            Event::Found { index } => println!("{:>5}  found   {}", step, index),
        }
    }
    if let Some(snapshot) = trace.final_snapshot() {
        println!("Result: {:?}", snapshot);
    }
}
