use crate::crypto::bit_block::BitBlock;
use crate::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use crate::crypto::des_key_expansion::DesKeyExpansion;
use crate::crypto::des_tables::{FP, IP};
use crate::crypto::des_transformation::DesTransformation;
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::errors::CipherError;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::trace::TraceObserver;
use std::sync::Arc;

pub const BLOCK_BITS: usize = 64;
pub const NUM_ROUNDS: usize = 16;

/// The block-cipher driver: initial permutation, 16 Feistel rounds, final
/// permutation. `set_key` derives the round keys once; the keyed cipher is
/// then read-only and safe to share across threads.
pub struct DES {
    feistel_network: FeistelNetwork,
    key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
    round_keys: Vec<BitBlock>,
    tracer: Option<Arc<dyn TraceObserver + Send + Sync>>,
}

impl DES {
    pub fn new(
        key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        DES {
            feistel_network: FeistelNetwork::new(NUM_ROUNDS, transformation),
            key_expansion,
            round_keys: Vec::new(),
            tracer: None,
        }
    }

    pub fn with_tracer(
        key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
        tracer: Arc<dyn TraceObserver + Send + Sync>,
    ) -> Self {
        DES {
            feistel_network: FeistelNetwork::with_tracer(
                NUM_ROUNDS,
                transformation,
                tracer.clone(),
            ),
            key_expansion,
            round_keys: Vec::new(),
            tracer: Some(tracer),
        }
    }

    pub fn set_key(&mut self, key: &BitBlock) -> Result<(), CipherError> {
        let round_keys = self.key_expansion.generate_round_keys(key)?;
        if let Some(tracer) = &self.tracer {
            for (index, round_key) in round_keys.iter().enumerate() {
                tracer.on_round_key(index + 1, round_key);
            }
        }
        self.round_keys = round_keys;
        Ok(())
    }

    pub fn encrypt(&self, block: &BitBlock) -> Result<BitBlock, CipherError> {
        block.expect_width(BLOCK_BITS)?;
        assert!(
            !self.round_keys.is_empty(),
            "set_key must be called before encrypt"
        );
        let permuted = self.apply_initial_permutation(block)?;
        let result = self
            .feistel_network
            .encrypt_with_round_keys(&permuted, &self.round_keys)?;
        self.apply_final_permutation(&result)
    }

    pub fn decrypt(&self, block: &BitBlock) -> Result<BitBlock, CipherError> {
        block.expect_width(BLOCK_BITS)?;
        assert!(
            !self.round_keys.is_empty(),
            "set_key must be called before decrypt"
        );
        let permuted = self.apply_initial_permutation(block)?;
        let result = self
            .feistel_network
            .decrypt_with_round_keys(&permuted, &self.round_keys)?;
        self.apply_final_permutation(&result)
    }

    fn apply_initial_permutation(&self, block: &BitBlock) -> Result<BitBlock, CipherError> {
        let permuted = block.permute(&IP)?;
        if let Some(tracer) = &self.tracer {
            tracer.on_initial_permutation(&permuted);
        }
        Ok(permuted)
    }

    fn apply_final_permutation(&self, block: &BitBlock) -> Result<BitBlock, CipherError> {
        let output = block.permute(&FP)?;
        if let Some(tracer) = &self.tracer {
            tracer.on_final_permutation(&output);
        }
        Ok(output)
    }
}

impl Default for DES {
    fn default() -> Self {
        DES::new(Arc::new(DesKeyExpansion), Arc::new(DesTransformation))
    }
}

impl CipherAlgorithm for DES {
    fn encrypt(&self, block: &BitBlock) -> Result<BitBlock, CipherError> {
        DES::encrypt(self, block)
    }

    fn decrypt(&self, block: &BitBlock) -> Result<BitBlock, CipherError> {
        DES::decrypt(self, block)
    }
}

impl SymmetricCipher for DES {
    fn set_key(&mut self, key: &BitBlock) -> Result<(), CipherError> {
        DES::set_key(self, key)
    }
}

/// One-shot encryption: derives the key schedule, processes one block.
pub fn encrypt_block(plaintext: &BitBlock, key: &BitBlock) -> Result<BitBlock, CipherError> {
    let mut des = DES::default();
    des.set_key(key)?;
    des.encrypt(plaintext)
}

/// One-shot decryption counterpart of [`encrypt_block`].
pub fn decrypt_block(ciphertext: &BitBlock, key: &BitBlock) -> Result<BitBlock, CipherError> {
    let mut des = DES::default();
    des.set_key(key)?;
    des.decrypt(ciphertext)
}
