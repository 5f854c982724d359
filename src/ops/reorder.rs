/// Error type for reorder operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReorderError {
    #[error("position {index} is out of range (collection has {len} items)")]
    OutOfRange { index: usize, len: usize },
}

/// Relocate the element at `from` so it sits at `to` in the result, shifting
/// the others while preserving their relative order.
///
/// Indices address the full unfiltered collection; callers working from a
/// filtered view must translate first. The input is never mutated, and
/// `from == to` returns an identical copy. Out-of-range indices are rejected
/// rather than silently corrupting the order.
pub fn reorder<T: Clone>(items: &[T], from: usize, to: usize) -> Result<Vec<T>, ReorderError> {
    let len = items.len();
    if from >= len {
        return Err(ReorderError::OutOfRange { index: from, len });
    }
    if to >= len {
        return Err(ReorderError::OutOfRange { index: to, len });
    }

    let mut result = items.to_vec();
    if from != to {
        let moved = result.remove(from);
        result.insert(to, moved);
    }
    Ok(result)
}
