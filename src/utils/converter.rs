//! Message to 64-bit block segmentation.
//!
//! Packs arbitrary byte messages into 64-bit blocks using big-endian
//! (most-significant-byte-first) ordering, zero-padding the final partial
//! block. Reassembly unpacks big-endian and trims the trailing zero bytes
//! the padding introduced.

/// Splits a byte message into 64-bit blocks.
///
/// Each group of up to 8 bytes becomes one block with the first byte in
/// the most significant position. The final partial block, if any, is
/// padded with zero bytes on the right.
///
/// # Parameters
/// - `message`: The message bytes (any length, including empty).
///
/// # Returns
/// A `Vec<u64>` of `ceil(message.len() / 8)` blocks.
///
/// # Examples
///
/// ```
/// use quadmix::utils::converter::message_to_blocks;
///
/// let blocks = message_to_blocks(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09]);
/// assert_eq!(blocks, vec![0x0102030405060708, 0x0900000000000000]);
/// ```
pub fn message_to_blocks(message: &[u8]) -> Vec<u64> {
    message
        .chunks(8)
        .map(|chunk| {
            let mut value: u64 = 0;
            for &byte in chunk {
                value = (value << 8) | byte as u64;
            }
            // Pad the final partial block with zero bytes on the right
            value << (8 * (8 - chunk.len()))
        })
        .collect()
}

/// Joins 64-bit blocks back into a byte message.
///
/// Each block is unpacked most-significant-byte-first; trailing zero
/// bytes of the reassembled message are trimmed to undo block padding.
/// Messages that themselves end in zero bytes are therefore not
/// representable — a limitation inherited from the reference design.
///
/// # Parameters
/// - `blocks`: The decoded 64-bit blocks.
///
/// # Returns
/// The reassembled message bytes.
pub fn blocks_to_message(blocks: &[u64]) -> Vec<u8> {
    let mut message = Vec::with_capacity(blocks.len() * 8);
    for &block in blocks {
        message.extend_from_slice(&block.to_be_bytes());
    }
    while message.last() == Some(&0) {
        message.pop();
    }
    message
}
