//! Chronological ordering of history records
//!
//! Top-down merge sort with an explicit merge step. Equal keys keep their
//! arrival order (the left run wins ties), so the sort is stable.

use shared::OrderRecord;

/// Records ascending by `order_time`; ties keep file order
pub fn sort_chronologically(records: Vec<OrderRecord>) -> Vec<OrderRecord> {
    merge_sort_by_key(records, |r| r.order_time)
}

/// Stable merge sort by key
pub fn merge_sort_by_key<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    sort_run(items, &key)
}

fn sort_run<T, K, F>(mut items: Vec<T>, key: &F) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    if items.len() <= 1 {
        return items;
    }

    let (left, right) = (0, items.len() - 1);
    let mid = left + (right - left) / 2;

    // items[..=mid] stays in `items`
    let upper = items.split_off(mid + 1);
    let lower = sort_run(items, key);
    let upper = sort_run(upper, key);
    merge(lower, upper, key)
}

fn merge<T, K, F>(lower: Vec<T>, upper: Vec<T>, key: &F) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut merged = Vec::with_capacity(lower.len() + upper.len());
    let mut lower = lower.into_iter().peekable();
    let mut upper = upper.into_iter().peekable();

    loop {
        let take_lower = match (lower.peek(), upper.peek()) {
            (Some(l), Some(u)) => key(l) <= key(u),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_lower { lower.next() } else { upper.next() };
        merged.extend(next);
    }

    merged
}
