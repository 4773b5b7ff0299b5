//! Suspect scoring.
//!
//! Evidence weights from any set of clues are summed per suspect. Rankings
//! sort by descending total and keep suspects with equal totals in the order
//! they were first encountered.

use std::collections::HashMap;

use crate::{Clue, Score};

/// Aggregated evidence against one suspect.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuspectScore {
    /// Suspect name.
    pub suspect: String,
    /// Summed evidence weight.
    pub score: Score,
}

/// Rank suspects by the evidence in `clues`.
///
/// # Examples
/// ```
/// use sleuthpath_core::{Clue, Evidence, rank};
///
/// # fn main() -> Result<(), sleuthpath_core::ClueError> {
/// let clues = [
///     Clue::new("K1", "Hall", "Glove", vec![Evidence::new("Plum", 2)])?,
///     Clue::new("K2", "Study", "Letter", vec![Evidence::new("Green", 5)])?,
/// ];
/// let ranking = rank(&clues);
/// assert_eq!(ranking[0].suspect, "Green");
/// assert_eq!(ranking[1].score, 2);
/// # Ok(())
/// # }
/// ```
pub fn rank<'a, I>(clues: I) -> Vec<SuspectScore>
where
    I: IntoIterator<Item = &'a Clue>,
{
    let mut scores = totals(clues);
    // Stable sort: ties stay in first-encountered order.
    scores.sort_by(|lhs, rhs| rhs.score.cmp(&lhs.score));
    scores
}

/// Suspect with the highest total in `clues`; the first one found wins ties.
///
/// Returns `None` when `clues` is empty.
pub fn leading_suspect<'a, I>(clues: I) -> Option<SuspectScore>
where
    I: IntoIterator<Item = &'a Clue>,
{
    rank(clues).into_iter().next()
}

fn totals<'a, I>(clues: I) -> Vec<SuspectScore>
where
    I: IntoIterator<Item = &'a Clue>,
{
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut scores: Vec<SuspectScore> = Vec::new();
    for clue in clues {
        for entry in &clue.evidence {
            let weight = Score::from(entry.weight);
            if let Some(existing) = positions
                .get(entry.suspect.as_str())
                .and_then(|&pos| scores.get_mut(pos))
            {
                existing.score = existing.score.saturating_add(weight);
            } else {
                positions.insert(entry.suspect.as_str(), scores.len());
                scores.push(SuspectScore {
                    suspect: entry.suspect.clone(),
                    score: weight,
                });
            }
        }
    }
    scores
}
