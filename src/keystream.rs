//! Linear congruential keystream generation.
//!
//! The generator is intentionally sequential: every element depends on the
//! previous one, so there is no skip-ahead. The orchestrator runs it to
//! completion before any XOR worker is spawned.

use crate::error::CipherError;

/// Parameters of the linear congruential generator, parsed once at startup.
///
/// Invariant: `modulus != 0`. The CLI value parser rejects a zero modulus
/// before a `KeystreamParams` can be constructed from user input, and
/// [`generate`] rejects it again for callers that build params directly.
#[derive(Debug, Clone, Copy)]
pub struct KeystreamParams {
    pub seed: u32,
    pub multiplier: u32,
    pub increment: u32,
    pub modulus: u32,
}

/// Generate the keystream `S` of length `len`:
/// `S[0] = seed`, `S[i] = (a * S[i-1] + c) mod m`.
///
/// The multiply-add wraps in 32 bits before the modulus is applied, matching
/// native unsigned arithmetic. Only the low byte of each element is consumed
/// by the XOR pass, but the full 32-bit sequence is kept so the recurrence
/// stays exact.
///
/// A zero modulus is rejected up front; the recurrence would otherwise
/// divide by zero.
pub fn generate(params: &KeystreamParams, len: usize) -> Result<Vec<u32>, CipherError> {
    if params.modulus == 0 {
        return Err(CipherError::Argument("modulus must be non-zero".into()));
    }

    let mut sequence = Vec::new();
    sequence.try_reserve_exact(len)?;

    let mut x = params.seed;
    for _ in 0..len {
        sequence.push(x);
        x = x
            .wrapping_mul(params.multiplier)
            .wrapping_add(params.increment)
            % params.modulus;
    }
    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(seed: u32, multiplier: u32, increment: u32, modulus: u32) -> KeystreamParams {
        KeystreamParams { seed, multiplier, increment, modulus }
    }

    #[test]
    fn known_sequence() {
        // S[1] = (3*5 + 7) % 11 = 0, S[2] = 7, S[3] = 6
        let ks = generate(&params(5, 3, 7, 11), 4).unwrap();
        assert_eq!(ks, vec![5, 0, 7, 6]);
    }

    #[test]
    fn seed_is_emitted_verbatim() {
        // The first element is the raw seed, even when it exceeds the modulus.
        let ks = generate(&params(100, 1, 0, 7), 2).unwrap();
        assert_eq!(ks[0], 100);
        assert_eq!(ks[1], 100 % 7);
    }

    #[test]
    fn deterministic_across_runs() {
        let p = params(0xDEAD_BEEF, 1_103_515_245, 12_345, 0x7FFF_FFFF);
        let a = generate(&p, 4096).unwrap();
        let b = generate(&p, 4096).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn multiply_add_wraps_before_modulus() {
        // a * seed overflows u32; wrapping keeps the recurrence defined.
        let ks = generate(&params(u32::MAX, u32::MAX, 1, 1000), 2).unwrap();
        let expected = u32::MAX.wrapping_mul(u32::MAX).wrapping_add(1) % 1000;
        assert_eq!(ks[1], expected);
    }

    #[test]
    fn zero_modulus_is_rejected() {
        let err = generate(&params(5, 3, 7, 0), 4).unwrap_err();
        assert!(matches!(err, CipherError::Argument(_)));
    }

    #[test]
    fn zero_length() {
        let ks = generate(&params(5, 3, 7, 11), 0).unwrap();
        assert!(ks.is_empty());
    }
}
