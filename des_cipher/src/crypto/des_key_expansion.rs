use crate::crypto::bit_block::BitBlock;
use crate::crypto::des_tables::{PC1, PC2, SHIFT_SCHEDULE};
use crate::crypto::errors::CipherError;
use crate::crypto::key_expansion::KeyExpansion;

pub const KEY_BITS: usize = 64;
pub const ROUND_KEY_BITS: usize = 48;
pub const NUM_ROUND_KEYS: usize = 16;

const HALF_KEY_BITS: usize = 28;

/// Derives the sixteen 48-bit round keys of DES, in encryption order
/// K1..K16. Decryption walks the same list backwards.
pub struct DesKeyExpansion;

impl KeyExpansion for DesKeyExpansion {
    fn generate_round_keys(&self, key: &BitBlock) -> Result<Vec<BitBlock>, CipherError> {
        key.expect_width(KEY_BITS)?;

        // PC-1 keeps 56 of the 64 key bits; the parity bits never survive it.
        let permuted = key.permute(&PC1)?;
        let (mut c, mut d) = permuted.split_at(HALF_KEY_BITS);

        let mut round_keys = Vec::with_capacity(NUM_ROUND_KEYS);
        for &shift in SHIFT_SCHEDULE.iter() {
            c = c.rotate_left(shift);
            d = d.rotate_left(shift);
            round_keys.push(c.concat(&d).permute(&PC2)?);
        }

        Ok(round_keys)
    }
}
