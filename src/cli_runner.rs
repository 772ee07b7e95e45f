//! Reusable CLI runner so the `xorpad` binary stays a thin exit-code shim
//! around the library.
//!
//! The run is strictly two-phase: the keystream is generated to completion
//! on this thread, then the XOR pass fans out across the worker pool. All
//! buffers are released by drop on every exit path, success or failure; the
//! output file is only created after the parallel phase has finished, so a
//! failed run never leaves a partial output behind.

use crate::cli;
use crate::error::CipherError;
use crate::fsx;
use crate::keystream::{self, KeystreamParams};
use crate::workers;

/// Public entry for running CLI logic.
pub fn run_cli_app() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::run()?;

    // The clap range parser already rejects a zero modulus; keep a hard stop
    // for callers that construct `Args` directly.
    if args.modulus == 0 {
        return Err(CipherError::Argument("modulus (-m) must be non-zero".into()).into());
    }
    let params = KeystreamParams {
        seed: args.seed,
        multiplier: args.multiplier,
        increment: args.increment,
        modulus: args.modulus,
    };

    let input = fsx::load(&args.input)?;

    let num_workers = worker_count(args.threads);
    println!("Using {} worker threads", num_workers);

    // Sequential phase: every element depends on the previous one, and the
    // whole pad must exist before any worker starts.
    let pad = keystream::generate(&params, input.len())?;

    let result = workers::apply_keystream(input.as_bytes(), &pad, num_workers)?;

    fsx::write(&args.output, &result)?;
    println!("Operation completed successfully");
    Ok(())
}

/// Resolve the worker count: explicit `--threads` wins, otherwise one worker
/// per detected logical core, clamped to at least 1.
fn worker_count(threads: usize) -> usize {
    if threads > 0 {
        return threads;
    }
    let cores = num_cpus::get();
    if cores == 0 {
        eprintln!("Warning: Using single core mode");
        return 1;
    }
    cores
}
