use crate::crypto::bit_block::BitBlock;
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::errors::CipherError;
use crate::crypto::trace::TraceObserver;
use std::sync::Arc;

/// The round engine shared by encryption and decryption: both run the same
/// loop, decryption just consumes the round keys in reverse. After the last
/// round the halves are emitted as R||L, undoing that round's implicit swap;
/// this is what makes the structure self-inverse.
pub struct FeistelNetwork {
    num_rounds: usize,
    transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    tracer: Option<Arc<dyn TraceObserver + Send + Sync>>,
}

impl FeistelNetwork {
    pub fn new(
        num_rounds: usize,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        Self {
            num_rounds,
            transformation,
            tracer: None,
        }
    }

    pub fn with_tracer(
        num_rounds: usize,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
        tracer: Arc<dyn TraceObserver + Send + Sync>,
    ) -> Self {
        Self {
            num_rounds,
            transformation,
            tracer: Some(tracer),
        }
    }

    pub fn encrypt_with_round_keys(
        &self,
        block: &BitBlock,
        round_keys: &[BitBlock],
    ) -> Result<BitBlock, CipherError> {
        assert_eq!(round_keys.len(), self.num_rounds);
        self.run(block, round_keys.iter())
    }

    pub fn decrypt_with_round_keys(
        &self,
        block: &BitBlock,
        round_keys: &[BitBlock],
    ) -> Result<BitBlock, CipherError> {
        assert_eq!(round_keys.len(), self.num_rounds);
        self.run(block, round_keys.iter().rev())
    }

    fn run<'k>(
        &self,
        block: &BitBlock,
        round_keys: impl Iterator<Item = &'k BitBlock>,
    ) -> Result<BitBlock, CipherError> {
        let (mut left, mut right) = block.split_at(block.len() / 2);

        for (round, key) in round_keys.enumerate() {
            let f_out = self.transformation.transform(&right, key)?;
            let new_right = left.xor(&f_out)?;
            left = right;
            right = new_right;
            if let Some(tracer) = &self.tracer {
                tracer.on_round(round + 1, &left, &right);
            }
        }

        Ok(right.concat(&left))
    }
}
