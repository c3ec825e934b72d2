use crate::domain::models::{
    CommitId, CommitRecord, GraphRow, LaneData, LineDef, LineType, RenderPlan,
};
use crate::domain::palette::LanePalette;
use tracing::{debug, trace};

/// Lanes in flight at the current row.
///
/// A slot is either free or holds the commit its lane expects to meet next
/// while walking back through history. Slots are never removed during a pass,
/// only freed, so lane indices stay stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaneTrack {
    slots: Vec<Option<CommitId>>,
}

impl LaneTrack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn find_slot_by_hash(&self, hash: &CommitId) -> Option<usize> {
        self.slots.iter().position(|s| s.as_ref() == Some(hash))
    }

    pub fn find_lowest_free_slot(&self) -> Option<usize> {
        self.slots.iter().position(|s| s.is_none())
    }

    pub fn ensure_capacity(&mut self, len: usize) {
        if self.slots.len() < len {
            self.slots.resize(len, None);
        }
    }

    /// Lowest free slot, or a freshly appended one when every slot is taken.
    /// The returned slot is still free.
    pub fn allocate(&mut self) -> usize {
        match self.find_lowest_free_slot() {
            Some(idx) => idx,
            None => {
                let idx = self.slots.len();
                self.ensure_capacity(idx + 1);
                idx
            }
        }
    }

    pub fn expect(&mut self, lane: usize, hash: CommitId) {
        self.ensure_capacity(lane + 1);
        self.slots[lane] = Some(hash);
    }

    pub fn free(&mut self, lane: usize) {
        if let Some(slot) = self.slots.get_mut(lane) {
            *slot = None;
        }
    }

    #[cfg(test)]
    pub fn expected(&self, lane: usize) -> Option<&CommitId> {
        self.slots.get(lane).and_then(|s| s.as_ref())
    }

    /// Indices of non-free slots, ascending.
    pub fn occupied(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|_| idx))
    }
}

/// Assigns a lane, a color and the connector lines to every commit.
///
/// `commits` must be ordered children before parents. The pass is a pure fold
/// over the input: the same commits and palette always give the same rows.
pub fn assign_lanes(commits: &[CommitRecord], palette: &LanePalette) -> Vec<GraphRow> {
    let mut track = LaneTrack::new();
    let mut rows = Vec::with_capacity(commits.len());

    for commit in commits {
        // 1. Resolve the commit's own lane
        let lane = match track.find_slot_by_hash(&commit.hash) {
            Some(idx) => idx,
            None => {
                // Branch tip: nothing processed so far points at this commit
                let idx = track.allocate();
                trace!(commit = %commit.hash, lane = idx, "branch tip");
                idx
            }
        };
        track.free(lane);
        let color = palette.color_for(lane);

        // 2. Every other lane in flight passes straight through this row
        let mut lines: Vec<LineDef> = track
            .occupied()
            .filter(|&idx| idx != lane)
            .map(|idx| LineDef::straight(idx, palette.color_for(idx)))
            .collect();

        // 3. Wire parents
        if let Some((first, rest)) = commit.parent_hashes.split_first() {
            match track.find_slot_by_hash(first) {
                Some(other) if other != lane => {
                    // First parent already has a line elsewhere; this lane ends here
                    lines.push(LineDef {
                        from_lane: lane,
                        to_lane: other,
                        color: color.clone(),
                        line_type: LineType::merge(lane, other),
                    });
                    track.free(lane);
                }
                _ => {
                    track.expect(lane, first.clone());
                    lines.push(LineDef::straight(lane, color.clone()));
                }
            }

            for parent in rest {
                match track.find_slot_by_hash(parent) {
                    Some(target) => lines.push(LineDef {
                        from_lane: lane,
                        to_lane: target,
                        color: color.clone(),
                        line_type: LineType::merge(lane, target),
                    }),
                    None => {
                        let target = track.allocate();
                        track.expect(target, parent.clone());
                        trace!(commit = %commit.hash, parent = %parent, lane = target, "fork");
                        lines.push(LineDef {
                            from_lane: lane,
                            to_lane: target,
                            color: palette.color_for(target),
                            line_type: LineType::fork(lane, target),
                        });
                    }
                }
            }
        }

        rows.push(GraphRow {
            commit: commit.clone(),
            lane_data: LaneData { lane, color, lines },
        });
    }

    debug!(
        rows = rows.len(),
        lanes = track.len(),
        dangling = track.occupied().count(),
        "lane assignment finished"
    );
    rows
}

/// Highest lane index referenced by any row, its own lane or a line endpoint.
pub fn get_max_lane(rows: &[GraphRow]) -> usize {
    rows.iter()
        .flat_map(|row| {
            std::iter::once(row.lane_data.lane).chain(
                row.lane_data
                    .lines
                    .iter()
                    .flat_map(|line| [line.from_lane, line.to_lane]),
            )
        })
        .max()
        .unwrap_or(0)
}

pub fn build_render_plan(commits: &[CommitRecord], palette: &LanePalette) -> RenderPlan {
    let rows = assign_lanes(commits, palette);
    RenderPlan {
        max_lane: get_max_lane(&rows),
        rows,
    }
}
