use crate::crypto::bit_block::BitBlock;
use crate::crypto::errors::CipherError;

pub trait KeyExpansion {
    fn generate_round_keys(&self, key: &BitBlock) -> Result<Vec<BitBlock>, CipherError>;
}
