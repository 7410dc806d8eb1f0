//! Key schedule generation from the (P, Q, S) parameter triple.
//!
//! Derives N independent 64-bit keys from a mutable seed S and two fixed
//! parameters P and Q. Each key is produced in three steps: a scramble of
//! the current seed with P yields an embryo key, the embryo is expanded
//! with Q into the final key, and the seed is then mutated with Q for the
//! next iteration.
//!
//! All arithmetic is wrapping 64-bit unsigned; there are no failure modes.

/// Scrambles the seed with parameter P to produce the embryo key.
///
/// Mixes via XOR with shifted copies of P interleaved with fixed
/// rotations (ror 13, rol 7, ror 23).
fn scramble(seed: u64, p: u64) -> u64 {
    let mut r = seed;
    r ^= p << 17;
    r = r.rotate_right(13);
    r ^= p >> 5;
    r ^= p << 29;
    r = r.rotate_left(7);
    r ^= p >> 11;
    r ^= p << 19;
    r = r.rotate_right(23);
    r ^= p >> 3;
    r
}

/// Expands an embryo key with parameter Q into a final key.
///
/// The multiplication uses `q | 1` so the multiplier is always odd,
/// keeping the step invertible mod 2^64. The final `| 1` forces the
/// key's least significant bit to 1.
fn generate(embryo: u64, q: u64) -> u64 {
    let mut k = embryo;
    k ^= q;
    k = k.rotate_left(19);
    k = k.wrapping_add(q);
    k ^= q << 31;
    k = k.rotate_right(11);
    k = k.wrapping_mul(q | 1);
    k | 1
}

/// Mutates the seed with parameter Q for the next key derivation.
///
/// A result of exactly zero is replaced with `q ^ u64::MAX` so the seed
/// never degenerates into a fixed point that stalls further mutation.
fn mutate(seed: u64, q: u64) -> u64 {
    let mut r = seed;
    r ^= q << 17;
    r = r.rotate_left(13);
    r = r.wrapping_add(q);
    r ^= q >> 7;
    r = r.rotate_right(19);
    r = r.wrapping_mul(q | 1);
    if r == 0 {
        r = q ^ u64::MAX;
    }
    r
}

/// Generates `n` 64-bit keys from the parameter triple (P, Q, S).
///
/// The output order is the generation order: `keys[i]` is bound to
/// transform slot `i`. The function is pure — identical inputs always
/// produce identical key sequences.
///
/// # Parameters
/// - `p`: First master parameter.
/// - `q`: Second master parameter.
/// - `s`: Initial seed, consumed and re-mutated per key.
/// - `n`: Number of keys to generate.
///
/// # Returns
/// A `Vec<u64>` of `n` keys, each with its least significant bit set.
///
/// # Examples
///
/// ```
/// use quadmix::generate_keys;
///
/// let keys = generate_keys(104729, 1299709, 982451653, 4);
/// assert_eq!(keys.len(), 4);
/// assert!(keys.iter().all(|k| k & 1 == 1));
/// ```
pub fn generate_keys(p: u64, q: u64, s: u64, n: usize) -> Vec<u64> {
    let mut keys = Vec::with_capacity(n);
    let mut seed = s;
    for _ in 0..n {
        let embryo = scramble(seed, p);
        keys.push(generate(embryo, q));
        seed = mutate(seed, q);
    }
    keys
}
