use crate::domain::models::{GraphRow, LaneColor, RenderPlan};
use crate::theme::{glyphs, terminal_color, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

pub const DEFAULT_LANE_WIDTH: u16 = 2;

/// Draws a `RenderPlan` as two terminal lines per commit: the node line and
/// the connector line leading to the next row.
pub struct LaneGraph<'a> {
    pub plan: &'a RenderPlan,
    pub theme: &'a Theme,
    pub lane_width: u16,
}

impl<'a> LaneGraph<'a> {
    pub fn new(plan: &'a RenderPlan, theme: &'a Theme) -> Self {
        Self {
            plan,
            theme,
            lane_width: DEFAULT_LANE_WIDTH,
        }
    }

    #[must_use]
    pub fn lane_width(mut self, width: u16) -> Self {
        self.lane_width = width.max(1);
        self
    }

    fn step(&self) -> usize {
        usize::from(self.lane_width.max(1))
    }

    /// Columns taken by the lanes, before the commit details.
    pub fn graph_width(&self) -> usize {
        (self.plan.max_lane + 1) * self.step()
    }

    pub fn height(&self) -> usize {
        self.plan.rows.len() * 2
    }

    fn column(&self, lane: usize) -> usize {
        lane * self.step()
    }

    fn line_style(color: &LaneColor) -> Style {
        Style::default().fg(terminal_color(color))
    }

    pub fn row_lines(&self, row: &'a GraphRow) -> Vec<Line<'a>> {
        vec![self.node_line(row), self.connector_line(row)]
    }

    fn node_line(&self, row: &'a GraphRow) -> Line<'a> {
        let mut cells = Cells::new(self.graph_width());
        for line in row.pass_through() {
            cells.put(
                self.column(line.from_lane),
                glyphs::VERTICAL,
                Self::line_style(&line.color),
            );
        }

        let symbol = if row.commit.is_merge() {
            glyphs::NODE_MERGE
        } else if row.commit.is_root() {
            glyphs::NODE_ROOT
        } else {
            glyphs::NODE
        };
        cells.put(
            self.column(row.lane_data.lane),
            symbol,
            self.theme
                .graph_node
                .fg(terminal_color(&row.lane_data.color)),
        );

        let mut spans = cells.into_spans();
        spans.push(Span::raw(" "));
        spans.push(Span::styled(row.commit.hash.short(), self.theme.commit_id));
        spans.push(Span::raw(" "));
        if row.commit.subject.is_empty() {
            spans.push(Span::styled("(no subject)", self.theme.subject_empty));
        } else {
            spans.push(Span::styled(
                row.commit.subject.as_str(),
                self.theme.subject,
            ));
        }
        Line::from(spans)
    }

    fn connector_line(&self, row: &GraphRow) -> Line<'a> {
        let width = self.graph_width();
        let step = self.step();
        let lane = row.lane_data.lane;
        let mut cells = Cells::new(width);

        // Lanes that carry on below this row. A fork back into the commit's
        // own freed lane keeps that lane going without bending.
        let mut down = vec![false; self.plan.max_lane + 1];
        for line in row
            .lane_data
            .lines
            .iter()
            .filter(|l| l.line_type.is_straight() || l.from_lane == l.to_lane)
        {
            if let Some(d) = down.get_mut(line.from_lane) {
                *d = true;
            }
            cells.put(
                self.column(line.from_lane),
                glyphs::VERTICAL,
                Self::line_style(&line.color),
            );
        }
        let continues = |l: usize| down.get(l).copied().unwrap_or(false);

        let bends: Vec<_> = row
            .lane_data
            .lines
            .iter()
            .filter(|l| !l.line_type.is_straight() && l.from_lane != l.to_lane)
            .collect();

        // Horizontal runs first, corners on top of them
        let mut spanned = vec![false; width];
        for line in &bends {
            let lo = self.column(line.from_lane.min(line.to_lane));
            let hi = self.column(line.from_lane.max(line.to_lane));
            for col in lo + 1..hi {
                if let Some(s) = spanned.get_mut(col) {
                    *s = true;
                }
                let symbol = if col % step == 0 && continues(col / step) {
                    glyphs::CROSS
                } else {
                    glyphs::HORIZONTAL
                };
                cells.put(col, symbol, Self::line_style(&line.color));
            }
        }

        let (mut has_left, mut has_right) = (false, false);
        for line in &bends {
            let col = self.column(line.to_lane);
            let rightwards = line.to_lane > line.from_lane;
            let crossed = spanned.get(col).copied().unwrap_or(false);
            let symbol = match (crossed, continues(line.to_lane), rightwards) {
                (true, true, _) => glyphs::CROSS,
                (true, false, _) => glyphs::TEE_DOWN,
                (false, true, true) => glyphs::TEE_LEFT,
                (false, true, false) => glyphs::TEE_RIGHT,
                (false, false, true) => glyphs::CORNER_LEFT_DOWN,
                (false, false, false) => glyphs::CORNER_RIGHT_DOWN,
            };
            cells.put(col, symbol, Self::line_style(&line.color));
            if rightwards {
                has_right = true;
            } else {
                has_left = true;
            }
        }

        // The node sits above, so the junction always connects upwards
        let junction = match (has_left, has_right, continues(lane)) {
            (true, true, true) => Some(glyphs::CROSS),
            (true, true, false) => Some(glyphs::TEE_UP),
            (true, false, true) => Some(glyphs::TEE_LEFT),
            (false, true, true) => Some(glyphs::TEE_RIGHT),
            (true, false, false) => Some(glyphs::CORNER_UP_LEFT),
            (false, true, false) => Some(glyphs::CORNER_UP_RIGHT),
            (false, false, _) => None,
        };
        if let Some(symbol) = junction {
            cells.put(
                self.column(lane),
                symbol,
                Self::line_style(&row.lane_data.color),
            );
        }

        Line::from(cells.into_spans())
    }
}

struct Cells(Vec<(&'static str, Style)>);

impl Cells {
    fn new(width: usize) -> Self {
        Self(vec![(" ", Style::default()); width])
    }

    fn put(&mut self, col: usize, symbol: &'static str, style: Style) {
        if let Some(cell) = self.0.get_mut(col) {
            *cell = (symbol, style);
        }
    }

    fn into_spans<'a>(self) -> Vec<Span<'a>> {
        self.0
            .into_iter()
            .map(|(symbol, style)| Span::styled(symbol, style))
            .collect()
    }
}

impl Widget for LaneGraph<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let plan = self.plan;
        let mut y = area.y;
        for row in &plan.rows {
            for line in self.row_lines(row) {
                if y >= area.bottom() {
                    return;
                }
                buf.set_line(area.x, y, &line, area.width);
                y += 1;
            }
        }
    }
}
