//! Parallel utilities with feature-gated implementations
//!
//! Uses rayon when the `rayon` feature is enabled, with sequential
//! fallbacks otherwise. Results keep input order either way.

/// Parallel map over a slice
#[cfg(feature = "rayon")]
pub fn parallel_map<T, U, F>(data: &[T], f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    use rayon::prelude::*;
    data.par_iter().map(f).collect()
}

/// Sequential map (fallback when parallel is not available)
#[cfg(not(feature = "rayon"))]
pub fn parallel_map<T, U, F>(data: &[T], f: F) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    data.iter().map(f).collect()
}
