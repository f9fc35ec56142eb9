//! Unit tests for bank-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CustomerId, WindowId};

    #[test]
    fn window_number_is_one_based() {
        assert_eq!(WindowId(0).number(), 1);
        assert_eq!(WindowId::from_number(3), Some(WindowId(2)));
        assert_eq!(WindowId::from_number(0), None);
    }

    #[test]
    fn ordering() {
        assert!(WindowId(0) < WindowId(1));
        assert!(CustomerId(100) > CustomerId(99));
    }

    #[test]
    fn display() {
        assert_eq!(WindowId(1).to_string(), "window 2");
        assert_eq!(CustomerId(7).to_string(), "#7");
    }
}

#[cfg(test)]
mod time {
    use crate::{BankClock, Minute};

    #[test]
    fn minute_arithmetic() {
        let t = Minute(10);
        assert_eq!(t + 5, Minute(15));
        assert_eq!(Minute(u32::MAX - 1) + 5, Minute(u32::MAX));
        assert_eq!(Minute(3).saturating_since(Minute(10)), 0);
    }

    #[test]
    fn clock_face_from_eight_o_clock() {
        let clock = BankClock::default();
        assert_eq!(clock.opening().to_string(), "8:00");
        assert_eq!(clock.clock_time(Minute(65)).to_string(), "9:05");
        // Default closing offset lands on half past six.
        assert_eq!(clock.clock_time(Minute(630)).to_string(), "18:30");
    }

    #[test]
    fn custom_opening_hour() {
        let clock = BankClock::new(9);
        let t = clock.clock_time(Minute(125));
        assert_eq!((t.hour, t.minute), (11, 5));
    }
}

#[cfg(test)]
mod config {
    use crate::{BankConfig, Minute, ServiceMode};
    use crate::config::{DEFAULT_CLOSING_TIME, MAX_WINDOWS};

    #[test]
    fn defaults_are_valid() {
        let cfg = BankConfig::with_windows(3);
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.closing_time, DEFAULT_CLOSING_TIME);
        assert_eq!(cfg.service_mode, ServiceMode::Sequential);
    }

    #[test]
    fn window_count_bounds() {
        assert!(BankConfig::with_windows(0).validate().is_err());
        assert!(BankConfig::with_windows(MAX_WINDOWS).validate().is_ok());
        assert!(BankConfig::with_windows(MAX_WINDOWS + 1).validate().is_err());
    }

    #[test]
    fn degenerate_draw_bounds_rejected() {
        let cfg = BankConfig { max_service_duration: 0, ..BankConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = BankConfig { queue_capacity: 1, ..BankConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn closing_must_fall_within_the_day() {
        let cfg = BankConfig { closing_time: Minute(u32::MAX - 2), ..BankConfig::default() };
        assert!(cfg.validate().is_err());

        // 8:00 + 960 minutes is exactly midnight.
        let cfg = BankConfig { closing_time: Minute(960), ..BankConfig::default() };
        assert!(cfg.validate().is_ok());
        let cfg = BankConfig { closing_time: Minute(961), ..BankConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn service_mode_parses_case_insensitively() {
        assert_eq!("Overlapping".parse::<ServiceMode>().unwrap(), ServiceMode::Overlapping);
        assert_eq!(" sequential ".parse::<ServiceMode>().unwrap(), ServiceMode::Sequential);
        assert!("parallel".parse::<ServiceMode>().is_err());
        assert_eq!(ServiceMode::Overlapping.to_string(), "overlapping");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.minutes_up_to(40), r2.minutes_up_to(40));
        }
    }

    #[test]
    fn minutes_stay_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.minutes_up_to(10);
            assert!((1..=10).contains(&v));
        }
        assert_eq!(rng.minutes_up_to(0), 1);
    }
}
