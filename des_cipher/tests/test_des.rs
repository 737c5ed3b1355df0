#[cfg(test)]
mod tests {
    use des_cipher::BitBlock;
    use des_cipher::CipherError;
    use des_cipher::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
    use des_cipher::crypto::des::{DES, decrypt_block, encrypt_block};
    use des_cipher::crypto::des_key_expansion::DesKeyExpansion;
    use des_cipher::crypto::des_transformation::DesTransformation;
    use des_cipher::crypto::trace::TraceObserver;
    use rand::Rng;
    use rayon::prelude::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn keyed_des(key_hex: &str) -> DES {
        let mut des = DES::default();
        des.set_key(&BitBlock::from_hex(key_hex).unwrap()).unwrap();
        des
    }

    fn random_block(rng: &mut impl Rng) -> BitBlock {
        BitBlock::from_bytes(&rng.random::<u64>().to_be_bytes())
    }

    fn hamming(a: &BitBlock, b: &BitBlock) -> usize {
        let diff = a.xor(b).unwrap();
        (0..diff.len()).filter(|&index| diff.bit(index) == 1).count()
    }

    fn flip_bit(block: &BitBlock, index: usize) -> BitBlock {
        let mask: String = (0..block.len())
            .map(|position| if position == index { '1' } else { '0' })
            .collect();
        block.xor(&BitBlock::from_bit_str(&mask).unwrap()).unwrap()
    }

    #[test]
    fn test_des_known_answer_vector() {
        let key = BitBlock::from_bytes(&hex_literal::hex!("13 34 57 79 9B BC DF F1"));
        let plaintext = BitBlock::from_bytes(&hex_literal::hex!("01 23 45 67 89 AB CD EF"));

        let mut des = DES::default();
        des.set_key(&key).unwrap();

        let ciphertext = des.encrypt(&plaintext).unwrap();
        assert_eq!(ciphertext.to_hex(), "85E813540F0AB405");

        let decrypted = des.decrypt(&ciphertext).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_des_fips81_vector() {
        // "Now is t" under key 0123456789ABCDEF
        let des = keyed_des("0123456789ABCDEF");
        let plaintext = BitBlock::from_ascii("Now is t");
        assert_eq!(des.encrypt(&plaintext).unwrap().to_hex(), "3FA40E8A984D4815");
    }

    #[test]
    fn test_all_zero_inputs_still_encrypt() {
        let des = keyed_des("0000000000000000");
        let zero = BitBlock::from_hex("0000000000000000").unwrap();
        let ciphertext = des.encrypt(&zero).unwrap();
        assert_eq!(ciphertext.to_hex(), "8CA64DE9C1B123A7");
        assert_eq!(des.decrypt(&ciphertext).unwrap(), zero);
    }

    #[test]
    fn test_random_roundtrips() {
        let mut rng = rand::rng();
        for _ in 0..50 {
            let key = random_block(&mut rng);
            let plaintext = random_block(&mut rng);
            let mut des = DES::default();
            des.set_key(&key).unwrap();
            let ciphertext = des.encrypt(&plaintext).unwrap();
            assert_eq!(des.decrypt(&ciphertext).unwrap(), plaintext);
        }
    }

    #[test]
    fn test_one_shot_entry_points() {
        let key = BitBlock::from_hex("133457799BBCDFF1").unwrap();
        let plaintext = BitBlock::from_hex("0123456789ABCDEF").unwrap();

        let ciphertext = encrypt_block(&plaintext, &key).unwrap();
        assert_eq!(ciphertext.to_hex(), "85E813540F0AB405");
        assert_eq!(decrypt_block(&ciphertext, &key).unwrap(), plaintext);
    }

    #[test]
    fn test_trait_object_surface() {
        let mut des = DES::default();
        SymmetricCipher::set_key(&mut des, &BitBlock::from_hex("133457799BBCDFF1").unwrap())
            .unwrap();
        let cipher: &dyn CipherAlgorithm = &des;

        let plaintext = BitBlock::from_hex("0123456789ABCDEF").unwrap();
        let ciphertext = cipher.encrypt(&plaintext).unwrap();
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn test_plaintext_avalanche() {
        let mut rng = rand::rng();
        let mut des = DES::default();
        des.set_key(&random_block(&mut rng)).unwrap();

        let plaintext = random_block(&mut rng);
        let base = des.encrypt(&plaintext).unwrap();

        let mut total = 0;
        for index in 0..64 {
            let flipped = des.encrypt(&flip_bit(&plaintext, index)).unwrap();
            total += hamming(&base, &flipped);
        }
        let mean = total as f64 / 64.0;
        assert!((24.0..40.0).contains(&mean), "mean flip count {mean}");
    }

    #[test]
    fn test_key_avalanche() {
        let mut rng = rand::rng();
        let key = random_block(&mut rng);
        let plaintext = random_block(&mut rng);

        let mut des = DES::default();
        des.set_key(&key).unwrap();
        let base = des.encrypt(&plaintext).unwrap();

        // parity positions are discarded by PC-1 and cannot influence output
        let effective: Vec<usize> = (0..64).filter(|index| index % 8 != 7).collect();
        let mut total = 0;
        for &index in &effective {
            let mut variant = DES::default();
            variant.set_key(&flip_bit(&key, index)).unwrap();
            total += hamming(&base, &variant.encrypt(&plaintext).unwrap());
        }
        let mean = total as f64 / effective.len() as f64;
        assert!((24.0..40.0).contains(&mean), "mean flip count {mean}");
    }

    #[test]
    fn test_parity_bits_do_not_affect_the_ciphertext() {
        let key = BitBlock::from_hex("133457799BBCDFF1").unwrap();
        let plaintext = BitBlock::from_hex("0123456789ABCDEF").unwrap();
        let base = encrypt_block(&plaintext, &key).unwrap();

        for parity in [7usize, 15, 23, 31, 39, 47, 55, 63] {
            let variant = encrypt_block(&plaintext, &flip_bit(&key, parity)).unwrap();
            assert_eq!(variant, base);
        }
    }

    #[test]
    fn test_rejects_wrong_block_width() {
        let des = keyed_des("133457799BBCDFF1");
        let narrow = BitBlock::from_hex("01234567").unwrap();
        assert_eq!(
            des.encrypt(&narrow).unwrap_err(),
            CipherError::InvalidLength {
                expected: 64,
                actual: 32
            }
        );
        assert_eq!(
            des.decrypt(&narrow).unwrap_err(),
            CipherError::InvalidLength {
                expected: 64,
                actual: 32
            }
        );
    }

    #[test]
    fn test_rejects_wrong_key_width() {
        let mut des = DES::default();
        let err = des
            .set_key(&BitBlock::from_hex("133457799BBCDFF111").unwrap())
            .unwrap_err();
        assert_eq!(
            err,
            CipherError::InvalidLength {
                expected: 64,
                actual: 72
            }
        );
    }

    #[test]
    fn test_shared_cipher_across_threads() {
        let mut rng = rand::rng();
        let des = keyed_des("133457799BBCDFF1");
        let blocks: Vec<BitBlock> = (0..256).map(|_| random_block(&mut rng)).collect();

        let serial: Vec<BitBlock> = blocks
            .iter()
            .map(|block| des.encrypt(block).unwrap())
            .collect();
        let parallel: Vec<BitBlock> = blocks
            .par_iter()
            .map(|block| des.encrypt(block).unwrap())
            .collect();

        assert_eq!(serial, parallel);
    }

    #[derive(Default)]
    struct CountingObserver {
        round_keys: AtomicUsize,
        initial: AtomicUsize,
        rounds: AtomicUsize,
        finals: AtomicUsize,
    }

    impl TraceObserver for CountingObserver {
        fn on_round_key(&self, _round: usize, _key: &BitBlock) {
            self.round_keys.fetch_add(1, Ordering::Relaxed);
        }
        fn on_initial_permutation(&self, _block: &BitBlock) {
            self.initial.fetch_add(1, Ordering::Relaxed);
        }
        fn on_round(&self, _round: usize, _left: &BitBlock, _right: &BitBlock) {
            self.rounds.fetch_add(1, Ordering::Relaxed);
        }
        fn on_final_permutation(&self, _block: &BitBlock) {
            self.finals.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn test_trace_observer_sees_every_stage() {
        let observer = Arc::new(CountingObserver::default());
        let mut des = DES::with_tracer(
            Arc::new(DesKeyExpansion),
            Arc::new(DesTransformation),
            observer.clone(),
        );

        des.set_key(&BitBlock::from_hex("133457799BBCDFF1").unwrap())
            .unwrap();
        assert_eq!(observer.round_keys.load(Ordering::Relaxed), 16);

        let plaintext = BitBlock::from_hex("0123456789ABCDEF").unwrap();
        let ciphertext = des.encrypt(&plaintext).unwrap();
        assert_eq!(observer.initial.load(Ordering::Relaxed), 1);
        assert_eq!(observer.rounds.load(Ordering::Relaxed), 16);
        assert_eq!(observer.finals.load(Ordering::Relaxed), 1);

        des.decrypt(&ciphertext).unwrap();
        assert_eq!(observer.rounds.load(Ordering::Relaxed), 32);
    }
}
