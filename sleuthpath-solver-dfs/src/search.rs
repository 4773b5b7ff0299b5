//! Exhaustive backtracking over time-feasible walks.
//!
//! The search runs on dense indices into a [`DistanceTable`]. Every node of
//! the search tree is a walk prefix; its accumulated value is offered as a
//! candidate before any child is explored, so stopping early is always an
//! option. Children are tried in table order, and a candidate replaces the
//! incumbent only when strictly better, which makes the first walk found
//! the winner among equals.
//!
//! The tree is walked with an explicit frame stack rather than recursion,
//! so generous budgets cannot exhaust the call stack.

use sleuthpath_core::{DistanceTable, Minutes, Score, SolveError};

/// Inputs to a single search, borrowed for its duration.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchInstance<'a> {
    pub(crate) table: &'a DistanceTable,
    /// Value of each location, aligned with the table rows.
    pub(crate) values: &'a [Score],
    pub(crate) origin: usize,
    pub(crate) budget: Minutes,
    pub(crate) max_expansions: Option<u64>,
}

/// Best walk found together with search statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchOutcome {
    pub(crate) score: Score,
    pub(crate) path: Vec<usize>,
    pub(crate) minutes: Minutes,
    pub(crate) nodes_expanded: u64,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    at: usize,
    minutes: Minutes,
    value: Score,
    /// Next table column to try as a move.
    next: usize,
    /// Whether entering `at` credited it, so backtracking must uncredit it.
    credited_here: bool,
}

struct Incumbent {
    score: Score,
    path: Vec<usize>,
    minutes: Minutes,
}

impl SearchInstance<'_> {
    /// Run the search to completion.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::SearchLimitExceeded`] when more nodes than
    /// `max_expansions` would be expanded.
    pub(crate) fn run(&self) -> Result<SearchOutcome, SolveError> {
        let n = self.table.len();
        let mut credited = vec![false; n];
        if let Some(flag) = credited.get_mut(self.origin) {
            *flag = true;
        }

        let root = Frame {
            at: self.origin,
            minutes: 0,
            value: self.value_of(self.origin),
            next: 0,
            credited_here: false,
        };
        let mut path = vec![self.origin];
        let mut best = Incumbent {
            score: root.value,
            path: path.clone(),
            minutes: 0,
        };
        let mut stack = vec![root];
        let mut nodes_expanded: u64 = 1;
        self.check_limit(nodes_expanded)?;

        while let Some(frame) = stack.last_mut() {
            let Some((target, minutes)) = self.next_move(frame, &credited) else {
                let done = *frame;
                stack.pop();
                path.pop();
                if done.credited_here
                    && let Some(flag) = credited.get_mut(done.at)
                {
                    *flag = false;
                }
                continue;
            };
            frame.next = target.saturating_add(1);

            let already = credited.get(target).copied().unwrap_or(true);
            let gain = if already { 0 } else { self.value_of(target) };
            let child = Frame {
                at: target,
                minutes,
                value: frame.value.saturating_add(gain),
                next: 0,
                credited_here: !already,
            };
            if let Some(flag) = credited.get_mut(target) {
                *flag = true;
            }
            path.push(target);

            nodes_expanded = nodes_expanded.saturating_add(1);
            self.check_limit(nodes_expanded)?;
            if child.value > best.score {
                best = Incumbent {
                    score: child.value,
                    path: path.clone(),
                    minutes,
                };
            }
            stack.push(child);
        }

        Ok(SearchOutcome {
            score: best.score,
            path: best.path,
            minutes: best.minutes,
            nodes_expanded,
        })
    }

    /// First feasible move from `frame` at or after `frame.next`.
    ///
    /// Moves to self, moves over budget and free moves into an already
    /// credited location are skipped. Skipping the latter keeps the tree
    /// finite when the table holds zero-minute hops. It loses nothing
    /// because every [`DistanceTable`] obeys the triangle inequality: a
    /// location zero minutes away is exactly as far from every other
    /// location as `frame.at` is.
    fn next_move(&self, frame: &Frame, credited: &[bool]) -> Option<(usize, Minutes)> {
        let row = self.table.row(frame.at)?;
        row.iter()
            .enumerate()
            .skip(frame.next)
            .find_map(|(target, &cost)| {
                if target == frame.at {
                    return None;
                }
                let minutes = frame.minutes.checked_add(cost)?;
                if minutes > self.budget {
                    return None;
                }
                if cost == 0 && credited.get(target).copied().unwrap_or(false) {
                    return None;
                }
                Some((target, minutes))
            })
    }

    fn value_of(&self, idx: usize) -> Score {
        self.values.get(idx).copied().unwrap_or_default()
    }

    fn check_limit(&self, nodes_expanded: u64) -> Result<(), SolveError> {
        match self.max_expansions {
            Some(limit) if nodes_expanded > limit => {
                log::debug!("search limit of {limit} expansions reached");
                Err(SolveError::SearchLimitExceeded { limit })
            }
            _ => Ok(()),
        }
    }
}
