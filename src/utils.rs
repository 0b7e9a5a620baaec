//! Utils

use std::time::Duration;

use clap::Parser;
use humanize_duration::{Truncate, prelude::DurationExt};

/// Arguments for the solve example
#[derive(Debug, Parser)]
pub struct ExampleArgs {
    /// Number of items ordered
    #[clap(short, long, allow_negative_numbers = true, default_value_t = 12_001)]
    pub quantity: i64,

    /// Available pack sizes, comma separated
    #[clap(
        short,
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = [250, 500, 1000, 2000, 5000]
    )]
    pub pack_sizes: Vec<i64>,

    /// Scenario set to run instead of a single order
    #[clap(short, long)]
    pub fixture: Option<String>,
}

/// Human-readable solve time.
pub fn format_solve_duration(duration: Duration) -> String {
    if duration < Duration::from_millis(1) {
        return "< 1ms".to_string();
    }

    format!("{}", duration.human(Truncate::Nano))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_comma_separated_pack_sizes() -> TestResult {
        let args = ExampleArgs::try_parse_from(["solve", "-q", "501", "-p", "250,500"])?;

        assert_eq!(args.quantity, 501, "quantity");
        assert_eq!(args.pack_sizes, vec![250, 500], "pack sizes");
        assert!(args.fixture.is_none(), "no fixture");

        Ok(())
    }

    #[test]
    fn defaults_to_standard_pack_sizes() -> TestResult {
        let args = ExampleArgs::try_parse_from(["solve"])?;

        assert_eq!(
            args.pack_sizes,
            vec![250, 500, 1000, 2000, 5000],
            "default pack sizes"
        );

        Ok(())
    }

    #[test]
    fn accepts_negative_values() -> TestResult {
        let args = ExampleArgs::try_parse_from(["solve", "-q", "-5", "-p", "-250"])?;

        assert_eq!(args.quantity, -5, "negative quantity");
        assert_eq!(args.pack_sizes, vec![-250], "negative size reaches validation");

        Ok(())
    }

    #[test]
    fn sub_millisecond_durations_are_bucketed() {
        assert_eq!(
            format_solve_duration(Duration::from_micros(10)),
            "< 1ms",
            "too fast to report"
        );
    }
}
