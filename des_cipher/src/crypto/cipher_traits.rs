use crate::crypto::bit_block::BitBlock;
use crate::crypto::errors::CipherError;

pub trait CipherAlgorithm {
    fn encrypt(&self, block: &BitBlock) -> Result<BitBlock, CipherError>;
    fn decrypt(&self, block: &BitBlock) -> Result<BitBlock, CipherError>;
}

pub trait SymmetricCipher: CipherAlgorithm {
    fn set_key(&mut self, key: &BitBlock) -> Result<(), CipherError>;
}
