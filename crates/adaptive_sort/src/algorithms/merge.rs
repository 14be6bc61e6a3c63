use crate::order::Comparator;

/// Stable merge of two sorted buffers into a fresh one.
///
/// Ties are taken from `left`. Elements are moved, never cloned.
pub fn merge<T, C>(left: Vec<T>, right: Vec<T>, cmp: &mut C) -> Result<Vec<T>, C::Error>
where
    C: Comparator<T>,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        if cmp.is_less_or_equal(l, r)? {
            merged.extend(left.next());
        } else {
            merged.extend(right.next());
        }
    }

    merged.extend(left);
    merged.extend(right);
    Ok(merged)
}
