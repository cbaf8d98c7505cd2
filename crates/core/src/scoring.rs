//! Scoring module - line-clear rewards
//!
//! Classic per-lock table: the only source of score increments is
//! `Board::clear_full_rows` reporting rows at lock time. Multi-line clears
//! pay super-linearly, so a quadruple beats four singles.

use crate::types::LINE_SCORES;

/// Points for clearing `rows` lines with a single lock (0-4).
///
/// Out-of-table counts score nothing; a single piece cannot complete more
/// than four rows.
pub fn line_clear_score(rows: usize) -> u32 {
    LINE_SCORES.get(rows).copied().unwrap_or(0)
}
