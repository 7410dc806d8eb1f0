//! Order selection: maps a 4-bit control word to a transform application
//! order.
//!
//! The control word carries two fields. Scaled by the transform count, the
//! full 4-bit value picks which transform is applied first; bits 2-3 pick
//! the arrangement pattern for the remaining transforms. The resulting
//! order is always a permutation of the slot indices, and decoding
//! traverses it in reverse.

use rand::Rng;

/// A 4-bit control word selecting the transform application order for a
/// session.
///
/// The word is shared across all blocks of one session; it is not secret
/// per se but must be consistent between the encoding and decoding sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlWord(u8);

impl ControlWord {
    /// Creates a control word from the low 4 bits of `bits`.
    ///
    /// Higher bits are masked off, so any `u8` is accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadmix::ControlWord;
    ///
    /// assert_eq!(ControlWord::new(0b1011).bits(), 0b1011);
    /// assert_eq!(ControlWord::new(0xFF).bits(), 0x0F);
    /// ```
    pub fn new(bits: u8) -> Self {
        ControlWord(bits & 0x0F)
    }

    /// Draws a uniformly random control word for a new session.
    pub fn random() -> Self {
        ControlWord(rand::thread_rng().gen_range(0..16))
    }

    /// Returns the 4-bit value (0..16).
    pub fn bits(&self) -> u8 {
        self.0
    }
}

/// Selects the transform application order for a control word and
/// transform count.
///
/// The first slot is `(bits * n) >> 4`, an integer scaling of the full
/// 4-bit value over the slot range (for `n = 4` this reduces to the high
/// two bits). The remaining slots, taken in ascending index order, are
/// arranged by bits 2-3:
///
/// - pattern 0: kept ascending,
/// - pattern 1: reversed,
/// - pattern 2: rotated left by one position,
/// - pattern 3: rotated right by one position.
///
/// The rotate patterns generalize the reference design's fixed
/// assignments (exact at `n = 4`) to arbitrary counts.
///
/// # Parameters
/// - `control`: The 4-bit control word.
/// - `n`: Number of transform slots (must be at least 1).
///
/// # Returns
/// A permutation of `0..n`: every index appears exactly once.
///
/// # Examples
///
/// ```
/// use quadmix::{select_order, ControlWord};
///
/// assert_eq!(select_order(ControlWord::new(0b1011), 4), vec![2, 1, 3, 0]);
/// assert_eq!(select_order(ControlWord::new(0), 4), vec![0, 1, 2, 3]);
/// ```
pub fn select_order(control: ControlWord, n: usize) -> Vec<usize> {
    let bits = control.bits() as usize;
    let first = (bits * n) >> 4;

    let mut remaining: Vec<usize> = (0..n).filter(|&i| i != first).collect();

    let pattern = (bits >> 2) & 0x3;
    match pattern {
        1 => remaining.reverse(),
        2 => {
            if remaining.len() >= 2 {
                remaining.rotate_left(1);
            }
        }
        3 => {
            if remaining.len() >= 2 {
                remaining.rotate_right(1);
            }
        }
        _ => {}
    }

    let mut order = Vec::with_capacity(n);
    order.push(first);
    order.extend(remaining);
    order
}
