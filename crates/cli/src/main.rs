use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use newton_subdiv::lattice::DEFAULT_UNIT;
use newton_subdiv::{subdivide, SubdivCfg};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;
mod script;

use script::ScriptFlags;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Lattice subdivisions from line drawings")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Polymake,
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// Ipe drawing (.ipe/.xml) or plain `x y` polyline file
    #[arg(long)]
    input: PathBuf,
    /// Raw coordinate distance between adjacent lattice points
    #[arg(long, default_value_t = DEFAULT_UNIT)]
    unit: i64,
    #[arg(long, value_enum, default_value_t = Format::Polymake)]
    format: Format,
    /// Append a regularity check (polymake output only)
    #[arg(long)]
    check_regular: bool,
    /// Append a unimodularity check (polymake output only)
    #[arg(long)]
    check_unimodular: bool,
    /// Append a visualization request (polymake output only)
    #[arg(long)]
    visualize: bool,
    /// Write here (plus a provenance sidecar) instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Action {
    /// Subdivide a drawing and render the result
    Run(RunArgs),
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run(args) => run(&args),
        Action::Report => report(),
    }
}

fn run(args: &RunArgs) -> Result<()> {
    tracing::info!(
        input = %args.input.display(),
        unit = args.unit,
        format = ?args.format,
        "run"
    );
    let rendered = render(args)?;
    match &args.out {
        Some(out) => write_output(out, &rendered, args),
        None => {
            print!("{rendered}");
            Ok(())
        }
    }
}

/// Read, subdivide and render; no side effects beyond reading the input.
fn render(args: &RunArgs) -> Result<String> {
    let polylines = input::read_polylines(&args.input)?;
    let sub = subdivide(&polylines, SubdivCfg { unit: args.unit })
        .with_context(|| format!("subdividing {}", args.input.display()))?;
    tracing::info!(
        polylines = polylines.len(),
        points = sub.points.len(),
        cells = sub.maximal_cells.len(),
        "subdivided"
    );
    if sub.is_empty() {
        tracing::warn!("no usable segments in input");
    }
    match args.format {
        Format::Json => script::render_json(&sub),
        Format::Polymake => script::render_polymake(
            &sub,
            ScriptFlags {
                check_regular: args.check_regular,
                check_unimodular: args.check_unimodular,
                visualize: args.visualize,
            },
        ),
    }
}

fn write_output(out: &Path, rendered: &str, args: &RunArgs) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, rendered).with_context(|| format!("writing {}", out.display()))?;
    let payload = provenance::Payload::new(serde_json::json!({
        "input": args.input.to_string_lossy(),
        "unit": args.unit,
        "format": format!("{:?}", args.format).to_lowercase(),
        "check_regular": args.check_regular,
        "check_unimodular": args.check_unimodular,
        "visualize": args.visualize,
    }))
    .with_summary(serde_json::json!({ "bytes": rendered.len() }));
    let prov = provenance::write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "written");
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::document(&[], &provenance::Payload::new(serde_json::json!({})));
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
