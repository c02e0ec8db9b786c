//! Resolve rectangles by id.
//!
//! Ids are unique after a load, but lookups still check for more than one
//! match so a hand-built collection cannot silently pick the wrong operand.

use thiserror::Error;

use crate::geometry::Rectangle;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("ID: {0} was not found among the rectangles")]
    NotFound(i64),
    #[error("ID: {id} matches {count} rectangles")]
    Ambiguous { id: i64, count: usize },
}

/// The one rectangle carrying `id`.
pub fn find_by_id(rectangles: &[Rectangle], id: i64) -> Result<&Rectangle, LookupError> {
    let mut matches = rectangles.iter().filter(|r| r.id() == id);
    match (matches.next(), matches.next()) {
        (Some(found), None) => Ok(found),
        (None, _) => Err(LookupError::NotFound(id)),
        (Some(_), Some(_)) => Err(LookupError::Ambiguous {
            id,
            count: 2 + matches.count(),
        }),
    }
}

/// Resolve both operands of a pairwise query before anything runs on them.
pub fn select_pair(
    rectangles: &[Rectangle],
    first: i64,
    second: i64,
) -> Result<(&Rectangle, &Rectangle), LookupError> {
    Ok((find_by_id(rectangles, first)?, find_by_id(rectangles, second)?))
}

// ============================================================================
// TESTS
// ============================================================================
