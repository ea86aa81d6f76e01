// File: crates/engagement-cli/src/main.rs
// Summary: Loads the three engagement CSVs and renders box, bar and line charts to SVG/PNG (and a page).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::page::render_page;
use chart_core::{coerce_numeric, load_csv, ChartKind, ChartsConfig, CoercionPolicy, RenderOptions};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Png,
    All,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Which {
    Box,
    Bar,
    Line,
    All,
}

impl Which {
    fn kinds(self) -> Vec<ChartKind> {
        match self {
            Which::Box => vec![ChartKind::Box],
            Which::Bar => vec![ChartKind::Bar],
            Which::Line => vec![ChartKind::Line],
            Which::All => ChartKind::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "engagement-charts", version, about = "Render social media engagement charts from CSV files")]
struct Cli {
    /// Directory holding socialMedia.csv, socialMediaAvg.csv and socialMediaTime.csv.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    #[arg(long, value_enum, default_value_t = Which::All)]
    chart: Which,

    /// TOML file overriding chart settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fail on the first value that is not a number instead of plotting NaN.
    #[arg(long)]
    strict: bool,

    /// Also write index.html with one mount element per chart.
    #[arg(long)]
    page: bool,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose >= 2)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(?cli, "starting");
    run(&cli)?;
    Ok(())
}

/// Render the selected charts; returns every file written, in order.
fn run(cli: &Cli) -> Result<Vec<PathBuf>> {
    let config = match &cli.config {
        Some(path) => ChartsConfig::load(path).with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => ChartsConfig::default(),
    };
    let policy = if cli.strict { CoercionPolicy::Strict } else { CoercionPolicy::Lenient };
    let opts = RenderOptions::default();

    let mut written = Vec::new();
    let mut svgs = Vec::new();
    for kind in cli.chart.kinds() {
        let input = cli.data_dir.join(kind.input(&config));
        let mut records = load_csv(&input).with_context(|| format!("failed to load CSV '{}'", input.display()))?;
        let failures = coerce_numeric(&mut records, &kind.numeric_fields(&config), policy)
            .with_context(|| format!("non-numeric value in '{}'", input.display()))?;
        info!(input = %input.display(), rows = records.len(), failures, "loaded");

        let scene = kind.scene(&records, &config).with_context(|| format!("failed to build {:?} chart", kind))?;
        let mount = kind.mount(&config);

        if matches!(cli.format, Format::Png | Format::All) {
            let out = out_path(&cli.out_dir, mount, "png");
            scene.render_to_png(&opts, &out)?;
            info!("Wrote {}", out.display());
            written.push(out);
        }
        if matches!(cli.format, Format::Svg | Format::All) || cli.page {
            let bytes = scene.render_to_svg_bytes(&opts)?;
            if matches!(cli.format, Format::Svg | Format::All) {
                let out = out_path(&cli.out_dir, mount, "svg");
                std::fs::create_dir_all(&cli.out_dir)?;
                std::fs::write(&out, &bytes).with_context(|| format!("writing {}", out.display()))?;
                info!("Wrote {}", out.display());
                written.push(out);
            }
            svgs.push((mount.to_string(), String::from_utf8_lossy(&bytes).into_owned()));
        }
    }

    if cli.page {
        let charts: Vec<(&str, &str)> = svgs.iter().map(|(m, s)| (m.as_str(), s.as_str())).collect();
        let html = render_page("Social Media Engagement", &charts);
        let out = cli.out_dir.join("index.html");
        std::fs::create_dir_all(&cli.out_dir)?;
        std::fs::write(&out, html).with_context(|| format!("writing {}", out.display()))?;
        info!("Wrote {}", out.display());
        written.push(out);
    }
    Ok(written)
}

/// target/out/<mount>.<ext>
fn out_path(dir: &Path, mount: &str, ext: &str) -> PathBuf {
    dir.join(format!("{mount}.{ext}"))
}
