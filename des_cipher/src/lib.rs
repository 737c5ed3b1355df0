//! Single-block DES primitive: 64-bit blocks, 64-bit keys (56 effective),
//! 16 Feistel rounds. Chaining modes and padding are deliberately absent,
//! and DES itself is long obsolete as a security boundary.

pub mod crypto;

pub use crypto::bit_block::BitBlock;
pub use crypto::des::{DES, decrypt_block, encrypt_block};
pub use crypto::errors::CipherError;
