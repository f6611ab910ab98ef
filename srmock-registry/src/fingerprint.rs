//! Content fingerprinting for schema deduplication.
//!
//! The store compares schemas only through this digest; the payload itself
//! stays opaque.

use std::sync::OnceLock;

/// CRC-64-AVRO empty value, also the initial register state.
const EMPTY: u64 = 0xc15d_213a_a4d7_a795;

static TABLE: OnceLock<[u64; 256]> = OnceLock::new();

fn table() -> &'static [u64; 256] {
    TABLE.get_or_init(|| {
        let mut table = [0u64; 256];
        for (i, slot) in table.iter_mut().enumerate() {
            let mut fp = i as u64;
            for _ in 0..8 {
                fp = (fp >> 1) ^ (EMPTY & (fp & 1).wrapping_neg());
            }
            *slot = fp;
        }
        table
    })
}

/// Computes the CRC-64-AVRO Rabin fingerprint of `bytes`.
///
/// This is the fingerprint registry clients use for schema deduplication, so
/// the ids the store assigns line up with what a real registry hands out for
/// identical content.
pub fn rabin(bytes: &[u8]) -> u64 {
    let table = table();
    let mut fp = EMPTY;
    for &b in bytes {
        fp = (fp >> 1) ^ table[((fp ^ u64::from(b)) & 0xff) as usize];
    }
    fp
}
