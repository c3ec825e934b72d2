use super::cli::{Cli, OutputFormat};
use super::config::AppConfig;
use super::output::{write_graph, write_toml};
use crate::components::lane_graph::LaneGraph;
use crate::domain::graph_layout::build_render_plan;
use crate::domain::models::RenderPlan;
use crate::domain::palette::LanePalette;
use crate::domain::source::CommitSource;
use crate::theme::Theme;
use anyhow::{Context, Result};
use std::io::{IsTerminal, Write};
use tracing::{debug, info};

pub async fn build_plan(source: &dyn CommitSource, lanes: &LanePalette) -> Result<RenderPlan> {
    let commits = source
        .load_commits()
        .await
        .with_context(|| format!("Failed to load commits from {}", source.describe()))?;
    info!(source = %source.describe(), commits = commits.len(), "assigning lanes");

    let plan = build_render_plan(&commits, lanes);
    debug!(max_lane = plan.max_lane, rows = plan.rows.len(), "layout ready");
    Ok(plan)
}

pub fn emit<W: Write>(
    plan: &RenderPlan,
    theme: &Theme,
    lane_width: u16,
    format: OutputFormat,
    ansi: bool,
    out: &mut W,
) -> Result<()> {
    let graph = LaneGraph::new(plan, theme).lane_width(lane_width);
    match format {
        OutputFormat::Graph => write_graph(&graph, out, ansi)?,
        OutputFormat::Plain => write_graph(&graph, out, false)?,
        OutputFormat::Toml => write_toml(plan, out)?,
    }
    out.flush()?;
    Ok(())
}

pub async fn run(cli: Cli) -> Result<()> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    let theme = config.theme()?;

    let source = cli.source();
    let plan = build_plan(source.as_ref(), &theme.lanes).await?;

    let stdout = std::io::stdout();
    let ansi = stdout.is_terminal();
    emit(
        &plan,
        &theme,
        config.lane_width,
        cli.format,
        ansi,
        &mut stdout.lock(),
    )
}
