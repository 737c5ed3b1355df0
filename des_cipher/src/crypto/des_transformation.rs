use crate::crypto::bit_block::BitBlock;
use crate::crypto::des_tables::{E, P, S_BOXES};
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::errors::CipherError;

pub const HALF_BLOCK_BITS: usize = 32;

const SBOX_CHUNK_BITS: usize = 6;

/// The Feistel round function f(R, K): expansion, key mixing, S-box
/// substitution, round permutation.
pub struct DesTransformation;

impl EncryptionTransformation for DesTransformation {
    fn transform(
        &self,
        input_block: &BitBlock,
        round_key: &BitBlock,
    ) -> Result<BitBlock, CipherError> {
        input_block.expect_width(HALF_BLOCK_BITS)?;

        let expanded = input_block.permute(&E)?;
        let mixed = expanded.xor(round_key)?;

        let mut nibbles = [0u8; 8];
        for (box_index, nibble) in nibbles.iter_mut().enumerate() {
            let base = box_index * SBOX_CHUNK_BITS;
            // Outer two bits pick the row, inner four the column.
            let row = (mixed.bit(base) << 1) | mixed.bit(base + 5);
            let mut col = 0u8;
            for offset in 1..5 {
                col = (col << 1) | mixed.bit(base + offset);
            }
            *nibble = S_BOXES[box_index][row as usize][col as usize];
        }

        BitBlock::from_nibbles(&nibbles).permute(&P)
    }
}
