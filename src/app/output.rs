use crate::components::lane_graph::LaneGraph;
use crate::domain::models::RenderPlan;
use anyhow::{Context, Result};
use crossterm::{
    queue,
    style::{Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use ratatui::style::{Color, Modifier};
use std::io::Write;

fn to_term_color(c: Color) -> TermColor {
    match c {
        Color::Reset => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Indexed(i) => TermColor::AnsiValue(i),
    }
}

/// Writes the drawing line by line, with terminal colors when `ansi` is set.
pub fn write_graph<W: Write>(graph: &LaneGraph<'_>, out: &mut W, ansi: bool) -> Result<()> {
    let plan = graph.plan;
    for row in &plan.rows {
        for line in graph.row_lines(row) {
            if ansi {
                for span in &line.spans {
                    let style = span.style;
                    if let Some(fg) = style.fg {
                        queue!(out, SetForegroundColor(to_term_color(fg)))?;
                    }
                    if style.add_modifier.contains(Modifier::BOLD) {
                        queue!(out, SetAttribute(Attribute::Bold))?;
                    }
                    if style.add_modifier.contains(Modifier::DIM) {
                        queue!(out, SetAttribute(Attribute::Dim))?;
                    }
                    queue!(
                        out,
                        Print(&span.content),
                        SetAttribute(Attribute::Reset),
                        ResetColor
                    )?;
                }
                writeln!(out)?;
            } else {
                let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
                writeln!(out, "{}", text.trim_end())?;
            }
        }
    }
    Ok(())
}

pub fn write_toml<W: Write>(plan: &RenderPlan, out: &mut W) -> Result<()> {
    let text = toml::to_string(plan).context("Failed to serialize lane layout")?;
    out.write_all(text.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::graph_layout::build_render_plan;
    use crate::domain::models::{CommitRecord, LineType};
    use crate::theme::Theme;

    fn plan(theme: &Theme) -> RenderPlan {
        let commits = vec![
            CommitRecord::new("c2", &["c1", "f1"]),
            CommitRecord::new("f1", &["c1"]),
            CommitRecord::new("c1", &[]),
        ];
        build_render_plan(&commits, &theme.lanes)
    }

    #[test]
    fn test_plain_output() {
        let theme = Theme::default();
        let plan = plan(&theme);
        let mut out = Vec::new();
        write_graph(&LaneGraph::new(&plan, &theme), &mut out, false).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "◆    c2 (no subject)\n├─╮\n│ ●  f1 (no subject)\n├─╯\n○    c1 (no subject)\n\n"
        );
    }

    #[test]
    fn test_ansi_output_carries_lane_colors() {
        let theme = Theme::default();
        let plan = plan(&theme);
        let mut out = Vec::new();
        write_graph(&LaneGraph::new(&plan, &theme), &mut out, true).unwrap();

        let text = String::from_utf8(out).unwrap();
        let (r, g, b) = theme.lanes.color_for(1).to_rgb();
        assert!(text.contains(&format!("\x1b[38;2;{r};{g};{b}m")));
        assert!(text.contains("◆"));
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn test_toml_output() {
        let theme = Theme::default();
        let plan = plan(&theme);
        let mut out = Vec::new();
        write_toml(&plan, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("max_lane = 1"));
        assert!(text.contains("type = \"fork-right\""));
        assert!(text.contains("type = \"merge-left\""));

        let parsed: RenderPlan = toml::from_str(&text).unwrap();
        assert_eq!(parsed, plan);
        assert_eq!(parsed.rows[1].lane_data.lines[1].line_type, LineType::MergeLeft);
    }
}
