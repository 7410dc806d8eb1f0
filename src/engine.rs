//! Block cipher orchestration: applies the selected transforms, in order,
//! to 64-bit blocks, and undoes them in reverse order.
//!
//! The orchestrator composes the three leaves: the key schedule, the
//! transform catalog, and the order selector. Encoding walks the
//! application order forward, threading the working value through each
//! transform and recording that transform's side parameters at the
//! transform's own slot index (not at the application position). Decoding
//! walks the same order in reverse.
//!
//! Everything here is pure: for fixed keys, catalog, order, and side
//! parameters both directions are deterministic functions of the block.
//! Blocks of a message are independent of each other (no chaining).

use crate::error::QuadMixError;
use crate::key_schedule::generate_keys;
use crate::order::{select_order, ControlWord};
use crate::transform::{build_catalog, SideParams, Transform};
use crate::utils::converter;

/// Result of encoding one 64-bit block.
///
/// Bundles everything needed to decode the block later: the final value,
/// the application order used, and the side parameters collected during
/// encoding, indexed by transform slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBlock {
    /// The transformed 64-bit value.
    pub value: u64,
    /// The permutation of transform indices applied, in forward order.
    pub order: Vec<usize>,
    /// Side parameters per transform slot (`side_params[i]` belongs to
    /// transform `i`, regardless of where `i` appeared in the order).
    pub side_params: Vec<SideParams>,
}

/// Checks that `order` is a valid permutation of `0..n`.
fn validate_order(order: &[usize], n: usize) -> Result<(), QuadMixError> {
    if order.len() != n {
        return Err(QuadMixError::InvalidOrder);
    }
    let mut seen = vec![false; n];
    for &id in order {
        if id >= n || seen[id] {
            return Err(QuadMixError::InvalidOrder);
        }
        seen[id] = true;
    }
    Ok(())
}

/// Encodes a single 64-bit block.
///
/// Applies each transform in the order selected by `control`, replacing
/// the working value at every step and storing that step's side
/// parameters at the transform's slot index.
///
/// # Parameters
/// - `block`: The 64-bit block to encode.
/// - `keys`: Key schedule, index-aligned with `transforms`.
/// - `transforms`: The transform catalog.
/// - `control`: The session control word selecting the application order.
///
/// # Returns
/// An [`EncodedBlock`] with the final value, order, and side parameters.
///
/// # Errors
/// - [`QuadMixError::InvalidTransformCount`] if the catalog is empty.
/// - [`QuadMixError::KeyCountMismatch`] if `keys` and `transforms` differ
///   in length.
///
/// # Examples
///
/// ```
/// use quadmix::{build_catalog, decode_block, encode_block, generate_keys, ControlWord};
///
/// let keys = generate_keys(104729, 1299709, 982451653, 4);
/// let catalog = build_catalog(4).unwrap();
///
/// let encoded = encode_block(42, &keys, &catalog, ControlWord::new(0b0110)).unwrap();
/// let decoded = decode_block(
///     encoded.value,
///     &keys,
///     &catalog,
///     &encoded.order,
///     &encoded.side_params,
/// )
/// .unwrap();
/// assert_eq!(decoded, 42);
/// ```
pub fn encode_block(
    block: u64,
    keys: &[u64],
    transforms: &[Transform],
    control: ControlWord,
) -> Result<EncodedBlock, QuadMixError> {
    if transforms.is_empty() {
        return Err(QuadMixError::InvalidTransformCount);
    }
    if keys.len() != transforms.len() {
        return Err(QuadMixError::KeyCountMismatch);
    }

    let order = select_order(control, transforms.len());
    let mut side_params = vec![SideParams::new(); transforms.len()];
    let mut value = block;
    for &id in &order {
        let (next, side) = transforms[id].encode(value, keys[id]);
        value = next;
        side_params[id] = side;
    }

    Ok(EncodedBlock {
        value,
        order,
        side_params,
    })
}

/// Decodes a single 64-bit block by applying the transform inverses in
/// reverse order traversal.
///
/// The configuration is validated eagerly before any arithmetic: lengths
/// must agree, `order` must be a permutation of the transform indices,
/// and every side-parameter sequence must have the arity its transform
/// kind requires.
///
/// # Parameters
/// - `value`: The final value produced by [`encode_block`].
/// - `keys`: The same key schedule used for encoding.
/// - `transforms`: The same transform catalog used for encoding.
/// - `order`: The application order recorded during encoding.
/// - `side_params`: Side parameters per transform slot.
///
/// # Returns
/// The original 64-bit block.
///
/// # Errors
/// - [`QuadMixError::InvalidTransformCount`] if the catalog is empty.
/// - [`QuadMixError::KeyCountMismatch`] if `keys` and `transforms` differ
///   in length.
/// - [`QuadMixError::InvalidOrder`] if `order` is not a permutation of
///   the transform indices.
/// - [`QuadMixError::SideParamArity`] if a side-parameter sequence is
///   missing or has the wrong length.
pub fn decode_block(
    value: u64,
    keys: &[u64],
    transforms: &[Transform],
    order: &[usize],
    side_params: &[SideParams],
) -> Result<u64, QuadMixError> {
    if transforms.is_empty() {
        return Err(QuadMixError::InvalidTransformCount);
    }
    if keys.len() != transforms.len() {
        return Err(QuadMixError::KeyCountMismatch);
    }
    validate_order(order, transforms.len())?;
    if side_params.len() != transforms.len() {
        return Err(QuadMixError::SideParamArity);
    }
    for (id, transform) in transforms.iter().enumerate() {
        if side_params[id].len() != transform.side_param_count() {
            return Err(QuadMixError::SideParamArity);
        }
    }

    let mut working = value;
    for &id in order.iter().rev() {
        working = transforms[id].decode(working, keys[id], &side_params[id])?;
    }
    Ok(working)
}

/// Selectable-order block transformation engine for one session.
///
/// Holds the session-scoped state — key schedule, transform catalog, and
/// application order — all derived once at construction and read-only
/// afterwards. Block operations are pure, so one engine can serve
/// concurrent encoding of independent blocks through a shared reference.
///
/// # Examples
///
/// ```
/// use quadmix::{ControlWord, QuadMix};
///
/// let engine = QuadMix::new(104729, 1299709, 982451653, 6, ControlWord::new(0b0101)).unwrap();
/// let encoded = engine.encode_block(0x1122334455667788);
/// assert_eq!(engine.decode_block(&encoded).unwrap(), 0x1122334455667788);
/// ```
pub struct QuadMix {
    keys: Vec<u64>,
    transforms: Vec<Transform>,
    control: ControlWord,
    order: Vec<usize>,
}

impl QuadMix {
    /// Creates an engine for one session from the master parameter triple.
    ///
    /// Derives `n` keys from (P, Q, S), builds the transform catalog, and
    /// fixes the application order from the control word. The control
    /// word is session-scoped: every block of the session uses the same
    /// order.
    ///
    /// # Parameters
    /// - `p`: First master parameter.
    /// - `q`: Second master parameter.
    /// - `s`: Key schedule seed.
    /// - `n`: Number of transform slots (minimum 1).
    /// - `control`: The 4-bit control word for this session.
    ///
    /// # Errors
    /// Returns [`QuadMixError::InvalidTransformCount`] if `n == 0`.
    pub fn new(
        p: u64,
        q: u64,
        s: u64,
        n: usize,
        control: ControlWord,
    ) -> Result<Self, QuadMixError> {
        let transforms = build_catalog(n)?;
        let keys = generate_keys(p, q, s, n);
        let order = select_order(control, n);
        Ok(QuadMix {
            keys,
            transforms,
            control,
            order,
        })
    }

    /// Encodes one 64-bit block with the session order and keys.
    ///
    /// Infallible: the configuration was validated at construction.
    pub fn encode_block(&self, block: u64) -> EncodedBlock {
        let mut side_params = vec![SideParams::new(); self.transforms.len()];
        let mut value = block;
        for &id in &self.order {
            let (next, side) = self.transforms[id].encode(value, self.keys[id]);
            value = next;
            side_params[id] = side;
        }
        EncodedBlock {
            value,
            order: self.order.clone(),
            side_params,
        }
    }

    /// Decodes one block previously produced by
    /// [`encode_block`](Self::encode_block).
    ///
    /// The order and side parameters are taken from the encoded block
    /// itself, so blocks persisted and reloaded later remain decodable.
    ///
    /// # Errors
    /// Returns [`QuadMixError::InvalidOrder`] or
    /// [`QuadMixError::SideParamArity`] if the encoded block's recorded
    /// order or side parameters do not match this session's catalog.
    pub fn decode_block(&self, block: &EncodedBlock) -> Result<u64, QuadMixError> {
        decode_block(
            block.value,
            &self.keys,
            &self.transforms,
            &block.order,
            &block.side_params,
        )
    }

    /// Encodes an arbitrary byte message, one 64-bit block at a time.
    ///
    /// The message is segmented most-significant-byte-first into 64-bit
    /// blocks with zero padding of the final partial block. Blocks are
    /// independent: no chaining between them.
    pub fn encode_message(&self, message: &[u8]) -> Vec<EncodedBlock> {
        converter::message_to_blocks(message)
            .into_iter()
            .map(|block| self.encode_block(block))
            .collect()
    }

    /// Decodes a sequence of encoded blocks back into the original
    /// message bytes.
    ///
    /// Trailing zero bytes introduced by block padding are trimmed from
    /// the reassembled message.
    ///
    /// # Errors
    /// Propagates the first block-level validation failure.
    pub fn decode_message(&self, blocks: &[EncodedBlock]) -> Result<Vec<u8>, QuadMixError> {
        let mut decoded = Vec::with_capacity(blocks.len());
        for block in blocks {
            decoded.push(self.decode_block(block)?);
        }
        Ok(converter::blocks_to_message(&decoded))
    }

    /// Returns the session key schedule.
    pub fn keys(&self) -> &[u64] {
        &self.keys
    }

    /// Returns the session application order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Returns the session control word.
    pub fn control_word(&self) -> ControlWord {
        self.control
    }

    /// Returns the number of transform slots.
    pub fn num_transforms(&self) -> usize {
        self.transforms.len()
    }
}

impl Drop for QuadMix {
    /// Clears the key schedule on drop.
    fn drop(&mut self) {
        for key in self.keys.iter_mut() {
            *key = 0;
        }
    }
}
