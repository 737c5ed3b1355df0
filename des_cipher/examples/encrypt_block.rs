use des_cipher::BitBlock;
use des_cipher::crypto::des::DES;
use des_cipher::crypto::des_key_expansion::DesKeyExpansion;
use des_cipher::crypto::des_transformation::DesTransformation;
use des_cipher::crypto::trace::LogTracer;
use std::sync::Arc;

// Run with RUST_LOG=trace to watch the round keys and per-round L/R state.
fn main() -> Result<(), des_cipher::CipherError> {
    env_logger::init();

    let plaintext = BitBlock::from_ascii("TestDES!");
    let key = BitBlock::from_ascii("MySecret");

    let mut des = DES::with_tracer(
        Arc::new(DesKeyExpansion),
        Arc::new(DesTransformation),
        Arc::new(LogTracer),
    );
    des.set_key(&key)?;

    let ciphertext = des.encrypt(&plaintext)?;
    println!("plaintext : {}", plaintext.to_hex());
    println!("key       : {}", key.to_hex());
    println!("ciphertext: {}", ciphertext.to_hex());

    let recovered = des.decrypt(&ciphertext)?;
    assert_eq!(recovered, plaintext);
    println!("round-trip OK");

    Ok(())
}
