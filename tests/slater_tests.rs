use approx::assert_relative_eq;
use rstest::rstest;
use slater_rs::configuration::{ConfigurationError, GroundStateTable};
use slater_rs::{analyze, expand, SlaterCalculator, SlaterError};

#[rstest]
#[case(1, "1s1", 13.60)]
#[case(2, "1s2", 78.608)]
#[case(3, "1s2 2s1", 13.6 * 2.0 * 2.7 * 2.7 + 13.6 * 0.65 * 0.65)]
#[case(3, "[He] 2s1", 204.034)]
#[case(6, "[He] 2s2 2p2", 1027.378)]
#[case(26, "[Ar] 3d6 4s2", 33963.4157)]
fn test_known_totals(#[case] z: u32, #[case] config: &str, #[case] expected: f64) {
    let result = SlaterCalculator::new().calculate(z, config).unwrap();
    assert_relative_eq!(result.total_energy, expected, epsilon = 0.01);
}

#[test]
fn test_lithium_breakdown() {
    let result = SlaterCalculator::new().calculate(3, "1s2 2s1").unwrap();
    assert_eq!(result.labels(), vec!["1s", "2s2p"]);
    assert_relative_eq!(result.effective_charges[0], 2.70, epsilon = 0.01);
    assert_relative_eq!(result.effective_charges[1], 1.30, epsilon = 0.01);
    assert_relative_eq!(result.energies[1], 5.746, epsilon = 0.01);
    assert_relative_eq!(
        result.total_energy,
        result.energies.iter().sum::<f64>(),
        epsilon = 1e-12
    );
}

#[test]
fn test_missing_inner_shell() {
    let result = SlaterCalculator::new().calculate(1, "2s1").unwrap();
    assert_eq!(result.screening.size(), 1);
    assert_relative_eq!(result.effective_charges[0], 1.0);
    assert_relative_eq!(result.total_energy, 13.6 / 4.0, epsilon = 1e-12);
}

#[rstest]
#[case("8p1", SlaterError::UnsupportedShell(8))]
#[case("1s3", SlaterError::Configuration(ConfigurationError::OverfullOrbital { n: 1, l: 0, electrons: 3 }))]
#[case("1p1", SlaterError::Configuration(ConfigurationError::ImpossibleOrbital { n: 1, l: 1 }))]
#[case("", SlaterError::Configuration(ConfigurationError::EmptyConfiguration))]
#[case("2x 3y", SlaterError::Configuration(ConfigurationError::EmptyConfiguration))]
fn test_failures(#[case] config: &str, #[case] expected: SlaterError) {
    assert_eq!(SlaterCalculator::new().calculate(1, config), Err(expected));
}

#[test]
fn test_unstable_anion() {
    // ten electrons around a proton
    let err = SlaterCalculator::new()
        .calculate(1, "1s2 2s2 2p6")
        .unwrap_err();
    assert!(matches!(err, SlaterError::UnstableAnion { group: 1, .. }));
}

#[test]
fn test_merge_equivalence() {
    let calculator = SlaterCalculator::new();
    assert_eq!(
        calculator.calculate(2, "1s1 1s1").unwrap(),
        calculator.calculate(2, "1s2").unwrap()
    );
}

#[test]
fn test_expansion_matches_explicit() {
    let shorthand = expand("[He] 2s2 2p2", &GroundStateTable).unwrap();
    let core = expand("[He]", &GroundStateTable).unwrap();
    assert_eq!(core, "1s2");
    assert_eq!(shorthand, format!("{} 2s2 2p2", core));
}

#[test]
fn test_order_independence() {
    let calculator = SlaterCalculator::new();
    let reference = calculator
        .calculate(26, "1s2 2s2 2p6 3s2 3p6 3d6 4s2")
        .unwrap();
    for permutation in [
        "4s2 3d6 3p6 3s2 2p6 2s2 1s2",
        "3d6 1s2 4s2 2p6 3s2 2s2 3p6",
        "3d3 1s2 2s2 2p6 3s2 3p6 4s2 3d3",
    ] {
        let result = calculator.calculate(26, permutation).unwrap();
        assert_eq!(result.configuration, reference.configuration);
        assert_eq!(result.total_energy, reference.total_energy);
    }
}

#[test]
fn test_render_and_reanalyze() {
    let calculator = SlaterCalculator::new();
    for (z, config) in [(11, "[Ne] 3s1"), (29, "[Ar] 3d10 4s1"), (82, "[Xe] 4f14 5d10 6s2 6p2")] {
        let first = calculator.calculate(z, config).unwrap();
        let rendered = first.configuration.to_string();
        assert!(!rendered.contains('['));
        let second = calculator.calculate(z, &rendered).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_deterministic() {
    let calculator = SlaterCalculator::new();
    let a = calculator.calculate(54, "[Kr] 4d10 5s2 5p6").unwrap();
    let b = calculator.calculate(54, "[Kr] 4d10 5s2 5p6").unwrap();
    assert_eq!(a.total_energy.to_bits(), b.total_energy.to_bits());
}

#[test]
fn test_heavy_element_ground_states() {
    let calculator = SlaterCalculator::new();
    // shells up to n = 6 are supported
    for z in 1..=86 {
        let atom = slater_rs::Atom::new(z).unwrap();
        let config = calculator.ground_state(&atom).unwrap();
        let result = calculator.calculate(z, &config);
        assert!(result.is_ok(), "Z={} failed: {:?}", z, result);
    }
    // n = 7 is not
    let francium = slater_rs::Atom::new(87).unwrap();
    let config = calculator.ground_state(&francium).unwrap();
    assert_eq!(
        calculator.calculate(87, &config),
        Err(SlaterError::UnsupportedShell(7))
    );
}

#[test]
fn test_analyze_only() {
    let config = analyze("1s2 2s2 2p6 3s2 3p6 3d10 4s2 4p6 4d10 4f14").unwrap();
    assert_eq!(
        config.labels(),
        vec!["1s", "2s2p", "3s3p", "3d", "4s4p", "4d", "4f"]
    );
    assert_eq!(config.electron_count(), 60);
}
