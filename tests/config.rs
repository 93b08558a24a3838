mod tests {
    use myrtio_effect_cycler::config::{
        DEFAULT_FAULT_THRESHOLD, DEFAULT_IDLE_DELAY, DEFAULT_STATUS_HOLD,
    };
    use myrtio_effect_cycler::{
        ButtonId, ButtonMap, ConfigError, Duration, SchedulerConfig, SchedulerError,
    };

    #[test]
    fn test_defaults() {
        let config = SchedulerConfig::default();

        assert_eq!(config.pixel_count, 30);
        assert_eq!(config.brightness_u8(), 77);
        assert_eq!(config.step_delay, Duration::from_millis(50));
        assert_eq!(config.button_map, ButtonMap::default());
        assert_eq!(config.idle_delay, DEFAULT_IDLE_DELAY);
        assert_eq!(config.status_hold, DEFAULT_STATUS_HOLD);
        assert_eq!(config.fault_threshold, DEFAULT_FAULT_THRESHOLD);
        assert_eq!(config.validate(30), Ok(()));
    }

    #[test]
    fn test_brightness_u8() {
        let at = |brightness| SchedulerConfig {
            brightness,
            ..SchedulerConfig::default()
        };

        assert_eq!(at(0.0).brightness_u8(), 0);
        assert_eq!(at(0.5).brightness_u8(), 128);
        assert_eq!(at(1.0).brightness_u8(), 255);
    }

    #[test]
    fn test_step_delay_from_seconds() {
        let config = SchedulerConfig::default()
            .with_step_delay_secs(0.05)
            .unwrap();
        assert_eq!(config.step_delay, Duration::from_millis(50));

        let config = SchedulerConfig::default().with_step_delay_secs(0.0).unwrap();
        assert_eq!(config.step_delay, Duration::from_ticks(0));
    }

    #[test]
    fn test_step_delay_rejects_invalid() {
        assert_eq!(
            SchedulerConfig::default().with_step_delay_secs(-0.1),
            Err(ConfigError::StepDelay(-0.1))
        );
        assert!(matches!(
            SchedulerConfig::default().with_step_delay_secs(f32::INFINITY),
            Err(ConfigError::StepDelay(_))
        ));
        assert!(
            SchedulerConfig::default()
                .with_step_delay_secs(f32::NAN)
                .is_err()
        );
    }

    #[test]
    fn test_validate_pixel_count() {
        let config = SchedulerConfig {
            pixel_count: 0,
            ..SchedulerConfig::default()
        };
        assert_eq!(
            config.validate(30),
            Err(ConfigError::PixelCount {
                requested: 0,
                max: 30
            })
        );

        let config = SchedulerConfig {
            pixel_count: 31,
            ..SchedulerConfig::default()
        };
        assert!(config.validate(30).is_err());
        assert!(config.validate(64).is_ok());
    }

    #[test]
    fn test_validate_brightness() {
        for brightness in [-0.01, 1.5, f32::NAN] {
            let config = SchedulerConfig {
                brightness,
                ..SchedulerConfig::default()
            };
            assert!(matches!(
                config.validate(30),
                Err(ConfigError::Brightness(_))
            ));
        }
    }

    #[test]
    fn test_validate_duplicate_button() {
        let config = SchedulerConfig {
            button_map: ButtonMap::new([
                ButtonId::Advance,
                ButtonId::Advance,
                ButtonId::Disable,
                ButtonId::Enable,
            ]),
            ..SchedulerConfig::default()
        };
        assert_eq!(
            config.validate(30),
            Err(ConfigError::DuplicateButton(ButtonId::Advance))
        );
    }

    #[test]
    fn test_error_display() {
        let err = SchedulerError::from(ConfigError::PixelCount {
            requested: 0,
            max: 30,
        });
        assert_eq!(
            err.to_string(),
            "invalid configuration: pixel count 0 outside of 1..=30"
        );
        assert_eq!(
            SchedulerError::EmptyLibrary.to_string(),
            "effect library is empty"
        );
        assert_eq!(
            ConfigError::DuplicateButton(ButtonId::TogglePause).to_string(),
            "button toggle_pause is mapped to several keys"
        );

        let source = core::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("pixel count 0 outside of 1..=30")
        );
    }
}
