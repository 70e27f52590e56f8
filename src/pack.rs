//! Bit-packing for blob files.
//!
//! Pixels are packed eight to a byte, least significant bit first: bit `j`
//! of byte `k` holds pixel `8 * k + j`. The final byte is zero-padded.

pub fn pack_bits<I>(bits: I) -> Vec<u8>
where
    I: IntoIterator<Item = bool>,
{
    let mut bytes = Vec::new();
    for (i, bit) in bits.into_iter().enumerate() {
        if i % 8 == 0 {
            bytes.push(0);
        }
        if bit {
            // the push above guarantees a last byte
            if let Some(byte) = bytes.last_mut() {
                *byte |= 1 << (i % 8);
            }
        }
    }
    bytes
}

/// Number of bytes `bit_count` packed bits occupy.
pub fn packed_len(bit_count: usize) -> usize {
    bit_count.div_ceil(8)
}

/// Reads `count` bits starting at `bit_offset`. Returns `None` if the range
/// runs past the end of `bytes`.
pub fn unpack_bits(bytes: &[u8], bit_offset: usize, count: usize) -> Option<Vec<bool>> {
    let end = bit_offset.checked_add(count)?;
    if end > bytes.len() * 8 {
        return None;
    }

    Some(
        (bit_offset..end)
            .map(|i| bytes[i / 8] & (1 << (i % 8)) != 0)
            .collect(),
    )
}
