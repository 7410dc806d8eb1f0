//! Transform library: four reversible 64-bit bit-mixing transforms.
//!
//! Each transform is a stateless pure function pair {encode, decode}
//! operating on a 64-bit value under a 64-bit key. Encoding produces the
//! transformed value plus a small sequence of side parameters (rotation
//! counts, derived masks) that the matching decode call needs to undo the
//! mixing. The side parameters are not secret, but in general they are
//! not re-derivable from the key alone and must travel with the block.
//!
//! Every transform composes only invertible steps — XOR (self-inverse),
//! rotation (inverse is the opposite rotation by the same amount), and
//! wrapping addition or multiplication by an odd factor — so each pair is
//! an exact bijection: `decode(encode(x, k)) == x` for all x and k.

use crate::error::QuadMixError;

/// Side parameters produced by one encode call and consumed by the
/// matching decode call.
///
/// Modeled as a variable-length sequence because the kinds differ in
/// arity: [`KeyedRotation`](Transform::KeyedRotation),
/// [`HalfSwapMask`](Transform::HalfSwapMask) and
/// [`SplitAddMix`](Transform::SplitAddMix) produce one value,
/// [`DualRotation`](Transform::DualRotation) produces two.
pub type SideParams = Vec<u64>;

/// A reversible 64-bit bit-mixing transform.
///
/// The four kinds form a closed set dispatched by match; instances are
/// plain values and carry no state of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Key-dependent rotation (1..=63 positions) followed by XOR with the key.
    KeyedRotation,
    /// XOR with the key, fixed rotation by 17, XOR with the half-swapped key.
    HalfSwapMask,
    /// Mixes the low and high 32-bit key halves via XOR, rotation by 13,
    /// and wrapping addition.
    SplitAddMix,
    /// Two key-dependent rotations (1..=31 each) interleaved with XORs of
    /// shifted key copies.
    DualRotation,
}

impl Transform {
    /// Encodes a 64-bit value under the given key.
    ///
    /// # Parameters
    /// - `value`: The 64-bit value to transform.
    /// - `key`: The 64-bit key bound to this transform's slot.
    ///
    /// # Returns
    /// The transformed value and the side parameters required to decode it.
    pub fn encode(&self, value: u64, key: u64) -> (u64, SideParams) {
        match self {
            Transform::KeyedRotation => {
                let rotations = (key % 63 + 1) as u32;
                let temp = value.rotate_left(rotations);
                (temp ^ key, vec![rotations as u64])
            }
            Transform::HalfSwapMask => {
                let mask = key.rotate_left(32);
                let mut temp = value ^ key;
                temp = temp.rotate_left(17);
                temp ^= mask;
                (temp, vec![mask])
            }
            Transform::SplitAddMix => {
                let low = key & 0xFFFF_FFFF;
                let high = key >> 32;
                let mut temp = value ^ low;
                temp = temp.rotate_left(13);
                temp = temp.wrapping_add(high);
                temp ^= low << 16;
                (temp, vec![high])
            }
            Transform::DualRotation => {
                let rot1 = (key % 31 + 1) as u32;
                let rot2 = ((key >> 8) % 31 + 1) as u32;
                let mut temp = value ^ key;
                temp = temp.rotate_left(rot1);
                temp ^= key >> 16;
                temp = temp.rotate_right(rot2);
                temp ^= key << 16;
                (temp, vec![rot1 as u64, rot2 as u64])
            }
        }
    }

    /// Decodes a previously encoded value, mirroring the encode steps in
    /// reverse.
    ///
    /// # Parameters
    /// - `value`: The transformed value.
    /// - `key`: The same key used during encoding.
    /// - `side`: The side parameters produced by the matching encode call.
    ///
    /// # Returns
    /// The original value.
    ///
    /// # Errors
    /// Returns [`QuadMixError::SideParamArity`] if `side` does not contain
    /// exactly [`side_param_count`](Self::side_param_count) values.
    pub fn decode(&self, value: u64, key: u64, side: &[u64]) -> Result<u64, QuadMixError> {
        if side.len() != self.side_param_count() {
            return Err(QuadMixError::SideParamArity);
        }
        let original = match self {
            Transform::KeyedRotation => {
                let rotations = side[0] as u32;
                let temp = value ^ key;
                temp.rotate_right(rotations)
            }
            Transform::HalfSwapMask => {
                let mask = side[0];
                let mut temp = value ^ mask;
                temp = temp.rotate_right(17);
                temp ^ key
            }
            Transform::SplitAddMix => {
                let low = key & 0xFFFF_FFFF;
                let high = side[0];
                let mut temp = value ^ (low << 16);
                temp = temp.wrapping_sub(high);
                temp = temp.rotate_right(13);
                temp ^ low
            }
            Transform::DualRotation => {
                let rot1 = side[0] as u32;
                let rot2 = side[1] as u32;
                let mut temp = value ^ (key << 16);
                temp = temp.rotate_left(rot2);
                temp ^= key >> 16;
                temp = temp.rotate_right(rot1);
                temp ^ key
            }
        };
        Ok(original)
    }

    /// Returns the number of side parameters this kind produces.
    pub fn side_param_count(&self) -> usize {
        match self {
            Transform::KeyedRotation | Transform::HalfSwapMask | Transform::SplitAddMix => 1,
            Transform::DualRotation => 2,
        }
    }

    /// Returns the transform kind for a catalog slot index.
    ///
    /// Slots cycle through the four kinds round-robin.
    pub fn for_slot(index: usize) -> Transform {
        match index % 4 {
            0 => Transform::KeyedRotation,
            1 => Transform::HalfSwapMask,
            2 => Transform::SplitAddMix,
            _ => Transform::DualRotation,
        }
    }
}

/// Builds a catalog of `n` transform instances, cycling through the four
/// kinds round-robin when `n` exceeds 4.
///
/// # Parameters
/// - `n`: Number of transform slots (minimum 1).
///
/// # Returns
/// A `Vec<Transform>` of length `n` where `catalog[i]` is the kind for
/// slot `i`.
///
/// # Errors
/// Returns [`QuadMixError::InvalidTransformCount`] if `n == 0`.
///
/// # Examples
///
/// ```
/// use quadmix::{build_catalog, Transform};
///
/// let catalog = build_catalog(6).unwrap();
/// assert_eq!(catalog[0], Transform::KeyedRotation);
/// assert_eq!(catalog[4], Transform::KeyedRotation);
/// assert_eq!(catalog[5], Transform::HalfSwapMask);
/// ```
pub fn build_catalog(n: usize) -> Result<Vec<Transform>, QuadMixError> {
    if n == 0 {
        return Err(QuadMixError::InvalidTransformCount);
    }
    Ok((0..n).map(Transform::for_slot).collect())
}
