//! Conditional parallel iteration.
//!
//! Uses rayon when the `parallel` feature is enabled and the configuration
//! allows it for the given collection size. Output order always matches
//! input order.

use bondrisk_core::RiskConfig;

/// Maps a function over items, conditionally using parallel iteration.
///
/// Uses parallel iteration when:
/// - The `parallel` feature is enabled
/// - `config.parallel` is true
/// - The collection size reaches `config.parallel_threshold`
///
/// The closure receives the item's position so callers can report row numbers.
#[allow(unused_variables)]
pub fn maybe_parallel_map<T, U, F>(items: &[T], config: &RiskConfig, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(usize, &T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items
                .par_iter()
                .enumerate()
                .map(|(i, item)| f(i, item))
                .collect();
        }
    }

    items.iter().enumerate().map(|(i, item)| f(i, item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_preserves_order() {
        let items: Vec<i32> = (1..=5).collect();
        let result = maybe_parallel_map(&items, &RiskConfig::sequential(), |i, x| (i, x * 2));
        assert_eq!(result, vec![(0, 2), (1, 4), (2, 6), (3, 8), (4, 10)]);
    }

    #[test]
    fn test_parallel_preserves_order() {
        let items: Vec<usize> = (0..5_000).collect();
        let config = RiskConfig::new().with_threshold(10);
        let result = maybe_parallel_map(&items, &config, |i, x| i + x);
        let expected: Vec<usize> = (0..5_000).map(|x| x * 2).collect();
        assert_eq!(result, expected);
    }
}
