use adaptive_rps::config::MAX_SUPPORTED_DEPTH;
use adaptive_rps::{
    MovePicker, OutcomePolicy, PickerConfig, PickerError, Reinforcement, ResultType,
};

#[test]
fn test_config_builder_methods() {
    // Test that all builder methods correctly set their respective values
    let config = PickerConfig::default()
        .with_base_weight(10)
        .with_depth_weight(7)
        .with_mode_weight(5)
        .with_max_depth(2)
        .with_history_length(4)
        .with_reinforcement(ResultType::Draw, Reinforcement::Reward);

    assert_eq!(config.base_weight, 10);
    assert_eq!(config.depth_weight, 7);
    assert_eq!(config.mode_weight, 5);
    assert_eq!(config.max_depth, 2);
    assert_eq!(config.history_length, 4);
    assert_eq!(
        config.outcome_policy.get(ResultType::Draw),
        Reinforcement::Reward
    );
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_default_values() {
    let config = PickerConfig::default();

    assert_eq!(config.base_weight, 24);
    assert_eq!(config.depth_weight, 54);
    assert_eq!(config.mode_weight, 54);
    assert_eq!(config.max_depth, 3);
    assert_eq!(config.history_length, 3);
    assert_eq!(config.outcome_policy, OutcomePolicy::default());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_rejects_invalid_values() {
    let zero_base = PickerConfig::default().with_base_weight(0);
    assert!(matches!(
        zero_base.validate(),
        Err(PickerError::InvalidConfiguration(_))
    ));

    let zero_mode = PickerConfig::default().with_mode_weight(0);
    assert!(zero_mode.validate().is_err());

    let too_deep = PickerConfig::default().with_max_depth(MAX_SUPPORTED_DEPTH + 1);
    assert!(too_deep.validate().is_err());

    let overflow = PickerConfig::default().with_base_weight(u32::MAX / 2);
    assert!(overflow.validate().is_err());
}

#[test]
fn test_picker_refuses_invalid_config() {
    let config = PickerConfig::default().with_depth_weight(0);
    assert!(matches!(
        MovePicker::seeded(config, 0),
        Err(PickerError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_config_rejects_history_shorter_than_depth() {
    let short = PickerConfig::default().with_max_depth(3).with_history_length(2);
    assert!(matches!(
        short.validate(),
        Err(PickerError::InvalidConfiguration(_))
    ));

    // zero falls back to the default length of 3
    let fallback = PickerConfig::default().with_max_depth(3).with_history_length(0);
    assert!(fallback.validate().is_ok());

    let deeper = PickerConfig::default().with_max_depth(4).with_history_length(4);
    assert!(deeper.validate().is_ok());
}
