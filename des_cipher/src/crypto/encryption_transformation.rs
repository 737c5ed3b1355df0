use crate::crypto::bit_block::BitBlock;
use crate::crypto::errors::CipherError;

pub trait EncryptionTransformation {
    fn transform(
        &self,
        input_block: &BitBlock,
        round_key: &BitBlock,
    ) -> Result<BitBlock, CipherError>;
}
