//! Work distribution for the parallel XOR phase.
//!
//! The byte range `[0, len)` is split into one contiguous chunk per worker.
//! The absence of gaps and overlaps is what makes the XOR phase race-free
//! without locking: each worker gets exclusive ownership of its output
//! sub-slice, so any change here that could produce overlapping ranges is a
//! correctness bug, not a tuning knob.

/// A contiguous sub-range of the buffers assigned to exactly one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub offset: usize,
    pub len: usize,
}

/// Split `len` bytes into `workers` chunks covering `[0, len)` exactly once.
///
/// The first `len % workers` chunks are one byte longer than the rest, so
/// chunk sizes never differ by more than 1. Deterministic for a fixed
/// `(len, workers)`. `len == 0` or `workers > len` simply yields zero-length
/// chunks; those workers become no-ops.
pub fn split_even(len: usize, workers: usize) -> Vec<Chunk> {
    assert!(workers >= 1, "worker count must be at least 1");

    let base = len / workers;
    let remainder = len % workers;

    let mut chunks = Vec::with_capacity(workers);
    let mut offset = 0;
    for i in 0..workers {
        let chunk_len = base + usize::from(i < remainder);
        chunks.push(Chunk { offset, len: chunk_len });
        offset += chunk_len;
    }
    debug_assert_eq!(offset, len);
    chunks
}
