//! Hand-written comparison sorts used by the quick-sort and merge-sort listings.

use std::cmp::Ordering;

/// In-place partition-exchange sort with a Lomuto partition.
///
/// Only the smaller side of each partition is sorted recursively; the larger
/// side is handled by the loop, which keeps the stack depth logarithmic even
/// when the input is already sorted.
pub fn quick_sort<T, F>(items: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quick_sort_range(items, &mut cmp);
}

fn quick_sort_range<T, F>(mut items: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while items.len() > 1 {
        let pivot = partition(items, cmp);

        let (left, rest) = std::mem::take(&mut items).split_at_mut(pivot);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quick_sort_range(left, cmp);
            items = right;
        } else {
            quick_sort_range(right, cmp);
            items = left;
        }
    }
}

/// Pivot is the last element; everything `<=` pivot moves to the left.
/// Returns the pivot's final index.
fn partition<T, F>(items: &mut [T], cmp: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let high = items.len() - 1;
    let mut store = 0;

    for j in 0..high {
        if cmp(&items[j], &items[high]) != Ordering::Greater {
            items.swap(store, j);
            store += 1;
        }
    }
    items.swap(store, high);
    store
}

/// Top-down merge sort. Stable: on equal keys the element from the left run
/// is written first.
pub fn merge_sort<T, F>(items: &mut [T], mut cmp: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort_range(items, &mut cmp);
}

fn merge_sort_range<T, F>(items: &mut [T], cmp: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() < 2 {
        return;
    }

    let mid = items.len() / 2;
    merge_sort_range(&mut items[..mid], cmp);
    merge_sort_range(&mut items[mid..], cmp);
    merge(items, mid, cmp);
}

fn merge<T, F>(items: &mut [T], mid: usize, cmp: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let left = items[..mid].to_vec();
    let right = items[mid..].to_vec();

    let (mut i, mut j) = (0, 0);
    for slot in items.iter_mut() {
        let take_left = j >= right.len()
            || (i < left.len() && cmp(&left[i], &right[j]) != Ordering::Greater);

        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}
