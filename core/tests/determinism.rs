//! Same seed, same config: the written table must be byte-identical.
//! Any divergence means the draw order or a draw source changed.

use casegen_core::{
    config::GeneratorConfig,
    generator::generate_dataset,
    writer::write_csv,
};

fn render(config: &GeneratorConfig) -> Vec<u8> {
    let cases = generate_dataset(config).expect("generation");
    let mut buf = Vec::new();
    write_csv(&cases, &mut buf).expect("write to buffer");
    buf
}

fn config(num_cases: usize, seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        num_cases,
        seed,
        ..GeneratorConfig::default_test()
    }
}

#[test]
fn same_seed_produces_identical_bytes() {
    let _ = env_logger::builder().is_test(true).try_init();

    let a = render(&config(20_000, 42));
    let b = render(&config(20_000, 42));

    assert_eq!(a.len(), b.len(), "Output lengths differ: {} vs {}", a.len(), b.len());
    let text_a = String::from_utf8(a).unwrap();
    let text_b = String::from_utf8(b).unwrap();
    for (i, (la, lb)) in text_a.lines().zip(text_b.lines()).enumerate() {
        assert_eq!(la, lb, "Output diverged at line {i}:\n  A: {la}\n  B: {lb}");
    }
}

#[test]
fn different_seeds_produce_different_tables() {
    let a = render(&config(100, 42));
    let b = render(&config(100, 99));
    assert_ne!(a, b, "Different seeds produced identical tables; seed is not being used");
}

#[test]
fn five_case_run_is_reproducible() {
    let cfg = GeneratorConfig::default_test();
    assert_eq!(cfg.num_cases, 5);
    assert_eq!(cfg.seed, 42);

    let first = generate_dataset(&cfg).unwrap();
    let second = generate_dataset(&cfg).unwrap();
    assert_eq!(first.len(), 5);
    assert_eq!(first, second);
}

#[test]
fn prefix_of_longer_run_matches_shorter_run() {
    // Cases are drawn sequentially from one stream, so a shorter run is
    // a prefix of a longer one with the same seed.
    let short = generate_dataset(&config(5, 42)).unwrap();
    let long = generate_dataset(&config(500, 42)).unwrap();
    assert_eq!(&long[..5], &short[..]);
}
