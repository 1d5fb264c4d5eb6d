//! Tests for seed parsing and the deterministic samplers

#[cfg(test)]
mod tests {
    use constellation::TokenError;
    use constellation::algorithm::sampler::{
        SEED_BYTES, SampleLog, SampleUse, Sampler, ScriptedSampler, Seed, SeededSampler,
    };

    const HASH: &str = "7f3a9c0e1b2d4f6a8c0e2b4d6f8a1c3e5b7d9f0a2c4e6b8d0f1a3c5e7b9d2f4a";

    // Tests hash parsing round-trips through Display in lowercase
    // Verified by formatting bytes as uppercase
    #[test]
    fn test_seed_parse_and_display() {
        let seed: Seed = HASH.parse().expect("valid hash");
        assert_eq!(seed.to_string(), HASH);
        assert_eq!(seed.as_bytes().first(), Some(&0x7f));
        assert_eq!(seed.as_bytes().last(), Some(&0x4a));

        let upper: Seed = HASH.to_uppercase().parse().expect("uppercase hash");
        assert_eq!(upper, seed);

        let prefixed: Seed = format!("0x{HASH}").parse().expect("prefixed hash");
        assert_eq!(prefixed, seed);
    }

    // Tests malformed hashes are rejected before any sampling
    // Verified by skipping the length check
    #[test]
    fn test_seed_rejects_malformed_hashes() {
        let malformed = vec![
            String::new(),
            "abc".to_string(),
            HASH.chars().take(63).collect::<String>(),
            format!("{HASH}0"),
            HASH.replace('7', "g"),
        ];
        for bad in &malformed {
            let result = bad.parse::<Seed>();
            assert!(
                matches!(result, Err(TokenError::InvalidSeed { .. })),
                "hash {bad:?} should be rejected"
            );
        }
    }

    // Tests random seeds differ between calls
    // Verified by returning a fixed seed
    #[test]
    fn test_random_seeds_differ() {
        let a = Seed::random();
        let b = Seed::random();
        assert_ne!(a, b);
        assert_eq!(a.to_string().len(), SEED_BYTES * 2);
    }

    // Tests the same seed yields the same sequence and purposes do not affect values
    // Verified by mixing the purpose into the generator
    #[test]
    fn test_seeded_sampler_is_deterministic() {
        let seed: Seed = HASH.parse().expect("valid hash");
        let mut first = SeededSampler::new(&seed);
        let mut second = SeededSampler::new(&seed);

        for _ in 0..100 {
            let a = first.sample(SampleUse::StarX);
            let b = second.sample(SampleUse::Algorithm);
            assert_eq!(a.to_bits(), b.to_bits());
            assert!((0.0..1.0).contains(&a));
        }
        assert_eq!(first.draws(), 100);
    }

    // Tests different seeds produce different sequences
    // Verified by ignoring the seed bytes
    #[test]
    fn test_seeded_sampler_depends_on_seed() {
        let mut a = SeededSampler::new(&Seed::from_bytes([1; SEED_BYTES]));
        let mut b = SeededSampler::new(&Seed::from_bytes([2; SEED_BYTES]));

        let left: Vec<f64> = (0..8).map(|_| a.sample(SampleUse::Sky)).collect();
        let right: Vec<f64> = (0..8).map(|_| b.sample(SampleUse::Sky)).collect();
        assert_ne!(left, right);
    }

    // Tests scripted samplers cycle through their values
    // Verified by clamping at the last value instead of cycling
    #[test]
    fn test_scripted_sampler_cycles() {
        let mut sampler = ScriptedSampler::new(vec![0.1, 0.2, 0.3]).expect("valid script");
        let drawn: Vec<f64> = (0..7).map(|_| sampler.sample(SampleUse::Sky)).collect();
        assert_eq!(drawn, vec![0.1, 0.2, 0.3, 0.1, 0.2, 0.3, 0.1]);

        let mut constant = ScriptedSampler::constant(0.95).expect("valid constant");
        assert!((0..5).all(|_| constant.sample(SampleUse::StarSize) == 0.95));
    }

    // Tests scripts outside [0, 1) or empty scripts are refused
    // Verified by removing the range check
    #[test]
    fn test_scripted_sampler_rejects_invalid_scripts() {
        assert!(ScriptedSampler::new(Vec::new()).is_err());
        assert!(ScriptedSampler::new(vec![0.5, 1.0]).is_err());
        assert!(ScriptedSampler::new(vec![-0.1]).is_err());
        assert!(ScriptedSampler::new(vec![f64::NAN]).is_err());
        assert!(ScriptedSampler::constant(0.0).is_ok());
    }

    // Tests the sample log records purposes and values without altering them
    // Verified by recording the purpose before drawing
    #[test]
    fn test_sample_log_records_draws() {
        let inner = ScriptedSampler::new(vec![0.25, 0.75]).expect("valid script");
        let mut log = SampleLog::new(inner);

        assert_eq!(log.sample(SampleUse::Sky), 0.25);
        assert_eq!(log.sample(SampleUse::StarCount), 0.75);
        assert_eq!(log.sample(SampleUse::StarX), 0.25);

        assert_eq!(
            log.plan(),
            vec![SampleUse::Sky, SampleUse::StarCount, SampleUse::StarX]
        );
        assert_eq!(log.draws().len(), 3);

        let mut inner = log.into_inner();
        assert_eq!(inner.sample(SampleUse::StarY), 0.75);
    }

    fn draw_once<S: Sampler>(mut sampler: S) -> f64 {
        sampler.sample(SampleUse::Sky)
    }

    // Tests a mutable reference can stand in for the sampler it points to
    // Verified by resetting the cursor on reborrow
    #[test]
    fn test_sampler_through_mutable_reference() {
        let mut sampler = ScriptedSampler::new(vec![0.1, 0.2]).expect("valid script");
        assert_eq!(draw_once(&mut sampler), 0.1);
        assert_eq!(sampler.sample(SampleUse::Sky), 0.2);
    }
}
