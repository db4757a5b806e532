//! Chunking of candidate collections for parallel dispatch.

/// Split `items` into near-equal contiguous chunks for `workers`
/// execution units.
///
/// Chunk size is `ceil(len / min(workers, len))`, so no chunk is empty
/// and at most `workers` chunks are produced; the last chunk may be
/// short. Concatenating the chunks in order reproduces `items` exactly.
/// `workers == 0` or an empty slice yields no chunks.
pub fn partition<T>(items: &[T], workers: usize) -> Vec<&[T]> {
    if workers == 0 || items.is_empty() {
        return Vec::new();
    }
    let buckets = workers.min(items.len());
    let chunk_size = items.len().div_ceil(buckets);
    items.chunks(chunk_size).collect()
}
