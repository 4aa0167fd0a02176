//! Splitting item lists into fixed-size batches.
//!
//! Crystallize mutations are usually sent a few items at a time; these
//! helpers do the slicing.
//!
//! # Example
//!
//! ```rust
//! use std::num::NonZeroUsize;
//!
//! use crystallize_onboard::batch::chunk;
//!
//! let size = NonZeroUsize::new(2).unwrap();
//! assert_eq!(chunk(&[1, 2, 3, 4, 5], size), vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```

use std::num::NonZeroUsize;

/// Splits `items` into consecutive batches of at most `size` items.
///
/// Only the last batch may be shorter. Empty input yields no batches.
#[must_use]
pub fn chunk<T: Clone>(items: &[T], size: NonZeroUsize) -> Vec<Vec<T>> {
    items.chunks(size.get()).map(<[T]>::to_vec).collect()
}

/// Like [`chunk`], but moves the items instead of cloning them.
#[must_use]
pub fn chunk_owned<T>(items: Vec<T>, size: NonZeroUsize) -> Vec<Vec<T>> {
    let size = size.get();
    let mut batches = Vec::with_capacity(items.len().div_ceil(size));
    let mut iter = items.into_iter().peekable();
    while iter.peek().is_some() {
        batches.push(iter.by_ref().take(size).collect());
    }
    batches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_chunk_splits_with_short_tail() {
        assert_eq!(
            chunk(&[1, 2, 3, 4, 5], size(2)),
            vec![vec![1, 2], vec![3, 4], vec![5]]
        );
    }

    #[test]
    fn test_chunk_empty_input_yields_no_batches() {
        let empty: [u8; 0] = [];
        assert!(chunk(&empty, size(3)).is_empty());
        assert!(chunk_owned(Vec::<u8>::new(), size(3)).is_empty());
    }

    #[test]
    fn test_chunk_size_larger_than_input() {
        assert_eq!(chunk(&["a", "b"], size(10)), vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_chunk_preserves_order_and_bounds() {
        for len in 0..=12 {
            let items: Vec<usize> = (0..len).collect();
            for n in 1..=6 {
                let batches = chunk(&items, size(n));

                assert_eq!(batches.len(), len.div_ceil(n));
                assert!(batches.iter().all(|batch| !batch.is_empty() && batch.len() <= n));
                if let Some((_, head)) = batches.split_last() {
                    assert!(head.iter().all(|batch| batch.len() == n));
                }
                assert_eq!(batches.concat(), items);
            }
        }
    }

    #[test]
    fn test_chunk_owned_matches_chunk() {
        for len in 0..=9 {
            let items: Vec<String> = (0..len).map(|i| format!("item-{i}")).collect();
            for n in 1..=4 {
                assert_eq!(chunk_owned(items.clone(), size(n)), chunk(&items, size(n)));
            }
        }
    }
}
