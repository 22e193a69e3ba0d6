//! Classroom walkthrough: one Kyber round with every intermediate value shown.
//!
//! Run with `cargo run --example walkthrough [seed]`.

use edukyber::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

fn preview(label: &str, poly: &Poly) {
    let stats = poly.centered_statistics();
    println!(
        "  {:<10} {}  |mean| {:.2}, std {:.2}, range [{}, {}]{}",
        label,
        poly,
        stats.mean.abs(),
        stats.std_dev,
        stats.min,
        stats.max,
        if stats.looks_like_noise() { "  (small noise)" } else { "" }
    );
}

fn main() -> Result<()> {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2024u64);

    let config = KyberConfig::default();
    let mut session = KyberSession::new(config, ChaChaRng::seed_from_u64(seed));
    println!("{config}, seed {seed}\n");

    println!("KeyGen");
    let pk = session.generate_keys().clone();
    preview("A[0][0]", pk.a.get(0, 0));
    preview("t[0]", &pk.t[0]);
    if let Some(sk) = session.secret_key() {
        preview("s[0]", &sk.s[0]);
    }

    for bit in [1u8, 0] {
        println!("\nEncrypt m = {bit}");
        let ct = session.encrypt(bit)?.clone();
        preview("u[0]", &ct.u[0]);
        preview("v", &ct.v);

        let margin = session.noise_margin()?;
        println!(
            "  noise at m'[0]: {} (bound {}, headroom {})",
            margin.coefficient,
            margin.bound,
            margin.headroom()
        );

        println!("Decrypt");
        let recovered = session.decrypt()?;
        if let Some(decryption) = session.last_decryption() {
            let trace = decryption.trace;
            println!(
                "  m'[0] = {} in [{}, {}]? -> {}",
                trace.coefficient, trace.lower, trace.upper, recovered
            );
        }
    }

    println!("\nJournal");
    for event in session.events() {
        println!(
            "  #{:<3} {:<8} {:<14} {:?}: {}",
            event.sequence,
            event.operation.as_str(),
            event.step,
            event.kind,
            event.message
        );
    }

    Ok(())
}
