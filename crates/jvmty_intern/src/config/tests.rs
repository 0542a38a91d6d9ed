use super::*;
use pretty_assertions::assert_eq;

#[test]
fn default_config_enables_concurrent_interning() {
    let config = InternConfig::default();
    assert!(config.enabled);
    assert_eq!(config.strategy, InternStrategy::Concurrent);
    assert_eq!(config.sweep_interval, DEFAULT_SWEEP_INTERVAL);
    assert_eq!(config.sweep_threshold, DEFAULT_SWEEP_THRESHOLD);
}

#[test]
fn strategy_names_round_trip() {
    for strategy in [InternStrategy::Concurrent, InternStrategy::Locked] {
        assert_eq!(InternStrategy::from_name(strategy.name()), Some(strategy));
    }
    assert_eq!(
        InternStrategy::from_name("  LOCKED "),
        Some(InternStrategy::Locked)
    );
    assert_eq!(InternStrategy::from_name("weak"), None);
}

#[test]
fn only_concurrent_strategy_sweeps() {
    assert!(InternStrategy::Concurrent.uses_sweeper());
    assert!(!InternStrategy::Locked.uses_sweeper());
}

#[test]
fn builders_override_fields() {
    let config = InternConfig::default()
        .with_enabled(false)
        .with_strategy(InternStrategy::Locked)
        .with_sweep_interval(Duration::from_millis(5))
        .with_sweep_threshold(3);

    assert_eq!(
        config,
        InternConfig {
            enabled: false,
            strategy: InternStrategy::Locked,
            sweep_interval: Duration::from_millis(5),
            sweep_threshold: 3,
        }
    );
}
