//! End-to-end tests for toy Kyber

use edukyber::prelude::*;
use edukyber_tests::TrialConfig;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

fn round_trip(rng: &mut ChaChaRng, bit: u8) -> bool {
    let mut session = KyberSession::new(KyberConfig::default(), rng);
    session.generate_keys();
    session.encrypt(bit).is_ok() && session.decrypt().map(|b| b.as_u8()) == Ok(bit)
}

#[test]
fn bit_one_decrypts_correctly() {
    let report = TrialConfig::default().run(|rng| round_trip(rng, 1));
    assert!(report.passed(), "success rate {:.3}", report.success_rate());
}

#[test]
fn bit_zero_decrypts_correctly() {
    let report = TrialConfig::default()
        .with_base_seed(1 << 32)
        .run(|rng| round_trip(rng, 0));
    assert!(report.passed(), "success rate {:.3}", report.success_rate());
}

#[test]
fn many_encryptions_under_one_key() {
    let mut session = KyberSession::new(KyberConfig::default(), ChaChaRng::seed_from_u64(77));
    session.generate_keys();

    let report = TrialConfig::default().run(|rng| {
        let bit = (rand::RngCore::next_u32(rng) & 1) as u8;
        session.encrypt(bit).is_ok() && session.decrypt().map(|b| b.as_u8()) == Ok(bit)
    });
    assert!(report.passed(), "success rate {:.3}", report.success_rate());
}

#[test]
fn encryptions_are_independent() {
    let mut rng = ChaChaRng::seed_from_u64(9);
    let (pk, sk) = Kyber512::keypair(&mut rng).unwrap();

    let a = Kyber512::encrypt(&mut rng, &pk, Bit::One).unwrap();
    let b = Kyber512::encrypt(&mut rng, &pk, Bit::One).unwrap();
    assert_ne!(a.u, b.u);
    assert_ne!(a.v, b.v);
    assert_eq!(Kyber512::decrypt(&sk, &a).unwrap(), Bit::One);
    assert_eq!(Kyber512::decrypt(&sk, &b).unwrap(), Bit::One);
}

#[test]
fn wrong_key_decrypts_to_a_coin_flip() {
    let report = TrialConfig::default()
        .with_trials(500)
        .with_min_success_rate(0.0)
        .run(|rng| {
            let (pk, _) = Kyber512::keypair(rng).unwrap();
            let (_, other_sk) = Kyber512::keypair(rng).unwrap();
            let ct = Kyber512::encrypt(rng, &pk, Bit::One).unwrap();
            Kyber512::decrypt(&other_sk, &ct).unwrap() == Bit::One
        });

    // The decode band holds 1666 of 3329 residues
    let p_value = report.binomial_p_value(1666.0 / 3329.0);
    assert!(
        p_value > 1e-6,
        "{} of {} decoded to 1 (p = {p_value:e})",
        report.successes,
        report.trials
    );
}

#[test]
fn presets_decrypt_correctly() {
    fn check<S: BitEncryption>() {
        let report = TrialConfig::default().with_trials(100).run(|rng| {
            let (pk, sk) = match S::keypair(rng) {
                Ok(keys) => keys,
                Err(_) => return false,
            };
            [Bit::Zero, Bit::One].into_iter().all(|bit| {
                S::encrypt(rng, &pk, bit)
                    .and_then(|ct| S::decrypt(&sk, &ct))
                    .map_or(false, |b| b == bit)
            })
        });
        assert!(report.passed(), "{}: {:.3}", S::name(), report.success_rate());
    }

    check::<Kyber512>();
    check::<Kyber768>();
    check::<Kyber1024>();
}

#[test]
fn every_supported_configuration_round_trips() {
    for k in [2, 3, 4] {
        for eta in [2, 3] {
            let config = KyberConfig::new(k, eta).unwrap();
            let rng = ChaChaRng::seed_from_u64(k as u64 * 10 + eta as u64);
            let mut session = KyberSession::new(config, rng);
            session.generate_keys();
            for bit in [0u8, 1] {
                session.encrypt(bit).unwrap();
                let margin = session.noise_margin().unwrap();
                assert!(margin.within_bound(), "{config}: noise {}", margin.coefficient);
                assert_eq!(session.decrypt().unwrap().as_u8(), bit);
            }
        }
    }
}

#[test]
fn unsupported_configurations_are_rejected() {
    assert!(matches!(KyberConfig::new(5, 2), Err(Error::InvalidParameter { .. })));
    assert!(matches!(KyberConfig::new(2, 1), Err(Error::InvalidParameter { .. })));
}

#[test]
fn protocol_order_is_enforced() {
    let mut session = KyberSession::new(KyberConfig::default(), ChaChaRng::seed_from_u64(3));
    assert!(session.encrypt(0).unwrap_err().is_precondition());
    assert!(session.decrypt().unwrap_err().is_precondition());

    session.generate_keys();
    assert!(matches!(session.encrypt(7), Err(Error::InvalidInput { .. })));
    session.encrypt(1).unwrap();
    session.decrypt().unwrap();
    assert!(session.decrypt().unwrap_err().is_precondition());
}
