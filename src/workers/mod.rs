//! Parallel XOR application over disjoint chunks of the output buffer.
//!
//! The pool runs one scoped thread per chunk. Every worker owns an exclusive
//! mutable sub-slice of the output (carved out with `split_at_mut`) and
//! shared read-only views of the input and keystream for the same range, so
//! the phase needs no locks. Workers rendezvous with the orchestrator at a
//! single-use barrier with `workers + 1` parties; once the orchestrator
//! clears the barrier, every output byte has been written.

use std::sync::Barrier;
use std::thread;

use crossbeam_channel::bounded;

use crate::error::CipherError;
use crate::partition;

/// Arrives at the barrier when dropped. Workers hold one of these while
/// XORing their chunk, so a worker that unwinds mid-chunk still releases
/// the rendezvous instead of stranding the orchestrator; the failure then
/// surfaces through the join.
struct BarrierArrival<'a>(&'a Barrier);

impl Drop for BarrierArrival<'_> {
    fn drop(&mut self) {
        self.0.wait();
    }
}

/// XOR `input` against the low byte of each `keystream` element, spreading
/// the work over `num_workers` threads. Returns the freshly written output
/// buffer.
///
/// The chunk decomposition never changes the result: any worker count yields
/// bit-identical output for the same `(input, keystream)`.
///
/// Workers do not start until the orchestrator releases the start gate,
/// which only happens after every spawn has succeeded. If a spawn fails
/// partway through, the gate is dropped instead; already-spawned workers see
/// the closed channel and exit without touching the barrier, the scope joins
/// them, and no output is produced.
pub fn apply_keystream(
    input: &[u8],
    keystream: &[u32],
    num_workers: usize,
) -> Result<Vec<u8>, CipherError> {
    assert_eq!(input.len(), keystream.len(), "keystream must match input length");
    assert!(num_workers >= 1, "worker count must be at least 1");

    let mut output = Vec::new();
    output.try_reserve_exact(input.len())?;
    output.resize(input.len(), 0);

    let chunks = partition::split_even(input.len(), num_workers);
    let barrier = Barrier::new(num_workers + 1);
    let (start_tx, start_rx) = bounded::<()>(num_workers);

    thread::scope(|s| -> Result<(), CipherError> {
        let mut handles = Vec::with_capacity(num_workers);
        let mut rest = output.as_mut_slice();

        for chunk in &chunks {
            let (result_part, tail) = rest.split_at_mut(chunk.len);
            rest = tail;
            let text_part = &input[chunk.offset..chunk.offset + chunk.len];
            let pad_part = &keystream[chunk.offset..chunk.offset + chunk.len];

            let barrier = &barrier;
            let start_rx = start_rx.clone();
            let spawned = thread::Builder::new()
                .name(format!("xor-worker-{}", handles.len()))
                .spawn_scoped(s, move || {
                    // A closed gate means the pool was torn down before launch.
                    if start_rx.recv().is_err() {
                        return;
                    }
                    let _arrival = BarrierArrival(barrier);
                    for ((dst, &src), &pad) in
                        result_part.iter_mut().zip(text_part).zip(pad_part)
                    {
                        *dst = src ^ (pad & 0xFF) as u8;
                    }
                });

            match spawned {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    drop(start_tx);
                    return Err(CipherError::Concurrency(format!(
                        "failed to spawn worker thread {}: {}",
                        handles.len(),
                        e
                    )));
                }
            }
        }

        // All spawns succeeded; release every worker at once. The original
        // receiver is still alive in this scope, so the sends cannot fail.
        for _ in 0..handles.len() {
            let _ = start_tx.send(());
        }

        // Block until every worker has finished writing its chunk.
        barrier.wait();

        // The barrier already certifies that every worker arrived; joining
        // reclaims the thread resources and surfaces any worker that
        // arrived by unwinding rather than finishing its chunk.
        for handle in handles {
            if handle.join().is_err() {
                return Err(CipherError::Concurrency("worker thread panicked".into()));
            }
        }
        Ok(())
    })?;

    Ok(output)
}
