//! # windowcast
//!
//! Command-line interface for sliding-window regression sweeps.

mod plot;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use bench_harness::{bench_print, footer, header, section, timed, ScopedTimer};
use clap::{Args, Parser, Subcommand};
use data_facade::{key_range, load_observations, CsvConfig, Observation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use window_facade::windowing::verify_agreement;
use window_facade::{Evaluator, SweepConfig, SweepPoint, WindowStrategy};

use plot::{write_error_charts, PlotConfig};

type CliResult<T> = std::result::Result<T, String>;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "windowcast=info,window_core=info,data_core=info,bench_harness=info";

#[derive(Parser)]
#[command(name = "windowcast")]
#[command(about = "Sliding-window regression sweeps", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate every window length in a range and chart the errors
    Sweep(SweepArgs),

    /// Evaluate a single window length
    Evaluate {
        #[command(flatten)]
        data: DataArgs,

        /// Window length
        #[arg(short = 'k', long)]
        interval: usize,

        /// Last key of the training partition
        #[arg(long, default_value_t = window_facade::config::DEFAULT_CUTOFF)]
        cutoff: i64,

        /// Fit on raw features
        #[arg(long)]
        no_normalize: bool,
    },

    /// Time the windowing strategies on a synthetic token series
    Bench {
        /// Number of tokens
        #[arg(short = 'n', long, default_value = "100000")]
        length: usize,

        /// Window length
        #[arg(short = 'k', long, default_value = "6")]
        interval: usize,

        /// Timed iterations per strategy
        #[arg(long, default_value = "10")]
        iterations: u32,
    },
}

/// Input file selection shared by the evaluation commands.
#[derive(Args, Debug, Clone)]
struct DataArgs {
    /// Input CSV file
    #[arg(short, long, default_value = data_facade::config::DEFAULT_PATH)]
    input: PathBuf,

    /// Header of the partition key column
    #[arg(long, default_value = data_facade::config::DEFAULT_KEY_COLUMN)]
    key_column: String,

    /// Header of the value column
    #[arg(long, default_value = data_facade::config::DEFAULT_VALUE_COLUMN)]
    value_column: String,
}

impl DataArgs {
    fn csv_config(&self) -> CsvConfig {
        CsvConfig::new(&self.input, &self.key_column, &self.value_column)
    }
}

#[derive(Args, Debug, Clone)]
struct SweepArgs {
    #[command(flatten)]
    data: DataArgs,

    /// JSON file with sweep settings; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Last key of the training partition
    #[arg(long)]
    cutoff: Option<i64>,

    /// First window length
    #[arg(long)]
    min_interval: Option<usize>,

    /// Last window length (inclusive)
    #[arg(long)]
    max_interval: Option<usize>,

    /// Evaluate window lengths in parallel
    #[arg(long)]
    parallel: bool,

    /// Fit on raw features
    #[arg(long)]
    no_normalize: bool,

    /// Directory for the error charts
    #[arg(short, long, default_value = plot::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Chart width in pixels
    #[arg(long, default_value_t = plot::DEFAULT_WIDTH)]
    chart_width: u32,

    /// Chart height in pixels
    #[arg(long, default_value_t = plot::DEFAULT_HEIGHT)]
    chart_height: u32,

    /// Skip chart output
    #[arg(long)]
    no_plot: bool,

    /// Also write the sweep points as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

/// Read a sweep configuration from a JSON file.
fn load_sweep_config(path: &Path) -> CliResult<SweepConfig> {
    let file = File::open(path).map_err(|e| format!("Failed to open config: {}", e))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Failed to parse config {:?}: {}", path, e))
}

/// Config file (or defaults) with command-line overrides applied.
fn resolve_sweep_config(args: &SweepArgs) -> CliResult<SweepConfig> {
    let mut config = match &args.config {
        Some(path) => load_sweep_config(path)?,
        None => SweepConfig::default(),
    };

    if let Some(cutoff) = args.cutoff {
        config.cutoff = cutoff;
    }
    if let Some(min) = args.min_interval {
        config.min_interval = min;
    }
    if let Some(max) = args.max_interval {
        config.max_interval = max;
    }
    if args.parallel {
        config.parallel = true;
    }
    if args.no_normalize {
        config.normalize = false;
    }

    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn plot_config(args: &SweepArgs) -> PlotConfig {
    PlotConfig {
        output_dir: args.output_dir.clone(),
        width: args.chart_width,
        height: args.chart_height,
    }
}

fn load_series(data: &DataArgs) -> CliResult<Vec<Observation>> {
    let _timer = ScopedTimer::new("load series");
    let observations = load_observations(&data.csv_config()).map_err(|e| e.to_string())?;
    if let Some((first, last)) = key_range(&observations) {
        println!(
            "Loaded {} rows from {:?} (keys {}..={})",
            observations.len(),
            data.input.file_name().unwrap_or_default(),
            first,
            last
        );
    }
    Ok(observations)
}

/// Report lines for one interval, ending with its elapsed time.
fn format_point(point: &SweepPoint) -> String {
    format!(
        "interval: {}\naverage_error: {}\nmax_error : {}\ninterval {} took {:.6} seconds",
        point.interval, point.report.average, point.report.max, point.interval, point.elapsed_secs
    )
}

fn print_point(point: &SweepPoint) {
    println!("{}", format_point(point));
}

/// Write sweep points as pretty JSON.
fn write_points_json(points: &[SweepPoint], path: &Path) -> CliResult<()> {
    let file = File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
    serde_json::to_writer_pretty(BufWriter::new(file), points)
        .map_err(|e| format!("Failed to write JSON: {}", e))?;
    println!("Sweep points written to {:?}", path);
    Ok(())
}

/// Run sweep command
fn run_sweep(args: SweepArgs) -> CliResult<()> {
    let config = resolve_sweep_config(&args)?;
    let series = load_series(&args.data)?;

    let evaluator = Evaluator::linear(config.normalize);
    let run = timed("sweep", || evaluator.sweep(&series, &config));
    println!("{}", run.summary());
    let points = run.into_value().map_err(|e| e.to_string())?;

    for point in &points {
        print_point(point);
    }

    if let Some(path) = &args.json {
        write_points_json(&points, path)?;
    }

    if !args.no_plot {
        for path in write_error_charts(&points, config.cutoff, &plot_config(&args))? {
            println!("Chart written to {:?}", path);
        }
    }

    Ok(())
}

/// Run evaluate command
fn run_evaluate(data: DataArgs, interval: usize, cutoff: i64, no_normalize: bool) -> CliResult<()> {
    let series = load_series(&data)?;

    let evaluator = Evaluator::linear(!no_normalize);
    let run = timed(format!("interval {}", interval), || {
        evaluator.run(&series, cutoff, interval)
    });
    let elapsed = run.elapsed;
    let report = run.into_value().map_err(|e| e.to_string())?;

    print_point(&SweepPoint::new(interval, report).with_elapsed(elapsed));
    Ok(())
}

/// Run bench command
fn run_bench(length: usize, interval: usize, iterations: u32) -> CliResult<()> {
    let tokens: Vec<String> = (0..length).map(|i| format!("t{}", i)).collect();

    let reference = verify_agreement(&tokens, interval).map_err(|e| e.to_string())?;

    header("Windowing Strategies");
    section(&format!(
        "{} tokens, interval {}, {} pairs",
        length,
        interval,
        reference.len()
    ));

    let results: Vec<_> = WindowStrategy::ALL
        .iter()
        .map(|strategy| {
            bench_print(strategy.name(), iterations, || strategy.build(&tokens, interval))
        })
        .collect();

    if let Some(baseline) = results.iter().find(|r| r.name == WindowStrategy::Slice.name()) {
        section("Relative to slice");
        for result in &results {
            println!("{:30} {:>6.2}x", result.name, result.relative_to(baseline));
        }
    }

    footer();
    Ok(())
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sweep(args) => run_sweep(args),

        Commands::Evaluate {
            data,
            interval,
            cutoff,
            no_normalize,
        } => run_evaluate(data, interval, cutoff, no_normalize),

        Commands::Bench {
            length,
            interval,
            iterations,
        } => run_bench(length, interval, iterations),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use window_facade::ErrorReport;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sweep_args(extra: &[&str]) -> SweepArgs {
        let mut argv = vec!["windowcast", "sweep"];
        argv.extend_from_slice(extra);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Sweep(args) => args,
            _ => panic!("expected sweep"),
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_sweep_defaults() {
        let args = sweep_args(&[]);
        assert_eq!(args.data.input, PathBuf::from("kion10y.csv"));
        assert_eq!(args.data.key_column, "年");
        assert_eq!(args.data.value_column, "気温");
        assert_eq!(args.output_dir, PathBuf::from("output_image"));

        let config = resolve_sweep_config(&args).unwrap();
        assert_eq!(config, SweepConfig::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"cutoff": 2010, "max_interval": 5, "parallel": true}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let args = sweep_args(&["--config", &path, "--max-interval", "8", "--no-normalize"]);
        let config = resolve_sweep_config(&args).unwrap();

        assert_eq!(config.cutoff, 2010);
        assert_eq!(config.min_interval, 1);
        assert_eq!(config.max_interval, 8);
        assert!(config.parallel);
        assert!(!config.normalize);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let args = sweep_args(&["--min-interval", "9", "--max-interval", "3"]);
        assert!(resolve_sweep_config(&args).is_err());
    }

    #[test]
    fn test_bad_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();
        assert!(load_sweep_config(file.path()).is_err());
    }

    #[test]
    fn test_sweep_writes_json_and_charts() {
        let mut csv = NamedTempFile::new().unwrap();
        writeln!(csv, "year,temp").unwrap();
        for day in 0..120 {
            let year = 2014 + day / 60;
            let temp = 15.0 + 5.0 * (day as f64 * 0.2).sin();
            writeln!(csv, "{},{}", year, temp).unwrap();
        }
        let out = tempfile::tempdir().unwrap();
        let json_path = out.path().join("points.json");
        let csv_path = csv.path().to_str().unwrap().to_string();
        let out_dir = out.path().join("charts");

        let args = sweep_args(&[
            "--input",
            &csv_path,
            "--key-column",
            "year",
            "--value-column",
            "temp",
            "--cutoff",
            "2014",
            "--max-interval",
            "4",
            "--output-dir",
            out_dir.to_str().unwrap(),
            "--json",
            json_path.to_str().unwrap(),
        ]);
        run_sweep(args).unwrap();

        let points: Vec<SweepPoint> =
            serde_json::from_reader(File::open(&json_path).unwrap()).unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[3].interval, 4);
        assert!(points.iter().all(|p| p.elapsed_secs > 0.0));
        assert!(out_dir.join("AverageError2014.png").exists());
        assert!(out_dir.join("MaxError2014.png").exists());
    }

    #[test]
    fn test_point_report_includes_elapsed_time() {
        let point = SweepPoint::new(3, ErrorReport::new(0.5, 1.25))
            .with_elapsed(std::time::Duration::from_millis(20));
        let lines: Vec<String> = format_point(&point).lines().map(String::from).collect();

        assert_eq!(
            lines,
            vec![
                "interval: 3",
                "average_error: 0.5",
                "max_error : 1.25",
                "interval 3 took 0.020000 seconds",
            ]
        );
    }

    #[test]
    fn test_chart_size_flags() {
        let defaults = plot_config(&sweep_args(&[]));
        assert_eq!(defaults, PlotConfig::default());

        let args = sweep_args(&["--chart-width", "640", "--chart-height", "480", "-o", "charts"]);
        let config = plot_config(&args);
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 480);
        assert_eq!(config.output_dir, PathBuf::from("charts"));
    }

    #[test]
    fn test_bench_rejects_zero_interval() {
        assert!(run_bench(100, 0, 1).is_err());
    }
}
