use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use flexmetrics::{
    GRAPHICS_UNDEFINED, LayoutMetrics, LayoutSession, MetricsDiff, NodeId, PassReport, Point,
    Size, TreeSpec,
};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "flexmetrics", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out a tree once and print every node's metrics as JSON.
    Snapshot(SnapshotArgs),
    /// Lay out a tree, restyle it from a second file, and report changed and affected nodes.
    Diff(DiffArgs),
}

#[derive(Args, Debug)]
struct Viewport {
    /// Available width; omit for max-content.
    #[arg(long)]
    width: Option<f64>,

    /// Available height; omit for max-content.
    #[arg(long)]
    height: Option<f64>,
}

impl Viewport {
    fn size(&self) -> Size {
        Size::new(
            self.width.unwrap_or(GRAPHICS_UNDEFINED),
            self.height.unwrap_or(GRAPHICS_UNDEFINED),
        )
    }
}

#[derive(Parser, Debug)]
struct SnapshotArgs {
    /// Input tree JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    viewport: Viewport,
}

#[derive(Parser, Debug)]
struct DiffArgs {
    /// Tree JSON for the first pass.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Tree JSON with the same node names, applied before the second pass.
    #[arg(long)]
    against: PathBuf,

    #[command(flatten)]
    viewport: Viewport,
}

#[derive(Serialize)]
struct NodeOut<'a> {
    name: &'a str,
    absolute_origin: Point,
    metrics: LayoutMetrics,
}

#[derive(Serialize)]
struct ChangeOut<'a> {
    name: &'a str,
    dirty: bool,
    diff: MetricsDiff,
    affected: Vec<&'a str>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Snapshot(args) => cmd_snapshot(args),
        Command::Diff(args) => cmd_diff(args),
    }
}

fn read_tree_json(path: &Path) -> anyhow::Result<TreeSpec> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("open tree '{}'", path.display()))?;
    let tree = TreeSpec::from_json(&s).with_context(|| format!("parse tree '{}'", path.display()))?;
    Ok(tree)
}

fn node_name(session: &LayoutSession, node: NodeId) -> &str {
    session.name_of(node).unwrap_or("<unnamed>")
}

fn cmd_snapshot(args: SnapshotArgs) -> anyhow::Result<()> {
    let tree = read_tree_json(&args.in_path)?;
    let mut session = LayoutSession::new();
    tree.build(&mut session)?;
    let report = session.run_pass(args.viewport.size())?;

    let out: Vec<NodeOut<'_>> = report
        .nodes
        .iter()
        .map(|r| NodeOut {
            name: node_name(&session, r.node),
            absolute_origin: r.absolute_origin,
            metrics: r.metrics,
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_diff(args: DiffArgs) -> anyhow::Result<()> {
    let before = read_tree_json(&args.in_path)?;
    let after = read_tree_json(&args.against)?;

    let mut session = LayoutSession::new();
    before.build(&mut session)?;
    session.run_pass(args.viewport.size())?;

    after
        .apply_styles(&mut session)
        .with_context(|| format!("apply '{}'", args.against.display()))?;
    let report = session.run_pass(args.viewport.size())?;

    println!("{}", serde_json::to_string_pretty(&changes(&session, &report))?);
    Ok(())
}

fn changes<'a>(session: &'a LayoutSession, report: &PassReport) -> Vec<ChangeOut<'a>> {
    report
        .nodes
        .iter()
        .filter(|r| r.changed() || !r.affected.is_empty())
        .map(|r| ChangeOut {
            name: node_name(session, r.node),
            dirty: r.dirty,
            diff: r.diff.unwrap_or_default(),
            affected: r.affected.iter().map(|&n| node_name(session, n)).collect(),
        })
        .collect()
}
