//! Tests for the console dialogue.

#[cfg(test)]
mod parse_tests {
    use bank_core::WindowId;

    use crate::console::{Query, parse_query, parse_window_count};

    #[test]
    fn window_count_range() {
        assert_eq!(parse_window_count("1"), Some(1));
        assert_eq!(parse_window_count(" 10\n"), Some(10));
        assert_eq!(parse_window_count("0"), None);
        assert_eq!(parse_window_count("11"), None);
        assert_eq!(parse_window_count("-3"), None);
        assert_eq!(parse_window_count("three"), None);
        assert_eq!(parse_window_count(""), None);
    }

    #[test]
    fn query_values() {
        assert_eq!(parse_query("0\n", 3), Some(Query::Exit));
        assert_eq!(parse_query("1", 3), Some(Query::Window(WindowId(0))));
        assert_eq!(parse_query("3", 3), Some(Query::Window(WindowId(2))));
        assert_eq!(parse_query("4", 3), None);
        assert_eq!(parse_query("x", 3), None);
    }
}

#[cfg(test)]
mod dialogue_tests {
    use std::io::Cursor;

    use bank_core::WindowId;

    use crate::console::{prompt_window_count, query_loop};

    #[test]
    fn prompt_retries_until_valid() {
        let mut input = Cursor::new("abc\n0\n12\n4\n");
        let mut out = Vec::new();
        let n = prompt_window_count(&mut input, &mut out).unwrap();
        assert_eq!(n, Some(4));

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Please enter a whole number").count(), 3);
    }

    #[test]
    fn prompt_stops_at_end_of_input() {
        let mut input = Cursor::new("nope\n");
        let mut out = Vec::new();
        assert_eq!(prompt_window_count(&mut input, &mut out).unwrap(), None);
    }

    #[test]
    fn query_loop_renders_valid_windows_until_zero() {
        let mut input = Cursor::new("2\n9\n1\n0\n3\n");
        let mut out = Vec::new();
        let mut seen = Vec::new();
        query_loop(&mut input, &mut out, 2, |w| {
            seen.push(w);
            Ok(format!("report for {w}"))
        })
        .unwrap();

        assert_eq!(seen, [WindowId(1), WindowId(0)]);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("report for window 2"));
        assert!(text.contains("Invalid window \"9\""));
    }

    #[test]
    fn query_loop_ends_cleanly_on_eof() {
        let mut input = Cursor::new("1\n");
        let mut out = Vec::new();
        let mut calls = 0;
        query_loop(&mut input, &mut out, 1, |_| {
            calls += 1;
            Ok(String::new())
        })
        .unwrap();
        assert_eq!(calls, 1);
    }

    #[test]
    fn render_errors_propagate() {
        let mut input = Cursor::new("1\n");
        let mut out = Vec::new();
        let result = query_loop(&mut input, &mut out, 1, |_| anyhow::bail!("boom"));
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod config_file_tests {
    use bank_core::{BankConfig, ServiceMode};

    use crate::parse_config;

    #[test]
    fn missing_fields_are_reported_as_unset() {
        let file = parse_config(r#"{ "service_mode": "overlapping" }"#).unwrap();
        assert!(!file.has_window_count);
        assert!(!file.has_seed);
        assert_eq!(file.config.service_mode, ServiceMode::Overlapping);
        assert_eq!(file.config.window_count, BankConfig::default().window_count);
    }

    #[test]
    fn present_fields_are_taken_from_the_file() {
        let file = parse_config(r#"{ "window_count": 4, "seed": 9, "closing_time": 300 }"#).unwrap();
        assert!(file.has_window_count && file.has_seed);
        assert_eq!(file.config.window_count, 4);
        assert_eq!(file.config.seed, 9);
        assert_eq!(file.config.closing_time.0, 300);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_config("{ window_count: 4 }").is_err());
        assert!(parse_config(r#"{ "service_mode": "parallel" }"#).is_err());
    }
}
