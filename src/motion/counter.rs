//! Stat counter interpolation and display formatting.
//!
//! A counter runs 100 equal steps over two seconds from zero to the target
//! parsed out of the element's initial text. Intermediate values floor the
//! linear interpolation; the final step lands exactly on the target.

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterFormat {
    /// `98%`-style figures.
    Percent,
    /// Four-digit years render bare.
    Year,
    /// Everything else is an open-ended count: `150+`.
    Count,
}

impl CounterFormat {
    pub fn render(&self, value: u32) -> String {
        match self {
            Self::Percent => format!("{value}%"),
            Self::Year => value.to_string(),
            Self::Count => format!("{value}+"),
        }
    }
}

/// Extracts the animation target and display format from a stat element's
/// original text. Unparseable text falls back to the default target.
pub fn parse_target(text: &str) -> (u32, CounterFormat) {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    let target = digits.parse().unwrap_or(config::COUNTER_DEFAULT_TARGET);
    let format = if text.contains('%') {
        CounterFormat::Percent
    } else if has_year_token(text) {
        CounterFormat::Year
    } else {
        CounterFormat::Count
    };
    (target, format)
}

/// A year is a standalone 4-digit token starting with "20".
fn has_year_token(text: &str) -> bool {
    text.split(|c: char| !c.is_ascii_digit())
        .any(|token| token.len() == 4 && token.starts_with("20"))
}

#[derive(Debug, Clone)]
pub struct Counter {
    target: u32,
    step: u32,
}

impl Counter {
    pub fn new(target: u32) -> Self {
        Self { target, step: 0 }
    }

    /// Milliseconds between ticks.
    pub fn step_interval_ms() -> u32 {
        config::COUNTER_DURATION_MS / config::COUNTER_STEPS
    }

    /// Advances one step and returns the value to display.
    pub fn tick(&mut self) -> u32 {
        self.step = (self.step + 1).min(config::COUNTER_STEPS);
        if self.step >= config::COUNTER_STEPS {
            self.target
        } else {
            (u64::from(self.target) * u64::from(self.step) / u64::from(config::COUNTER_STEPS))
                as u32
        }
    }

    pub fn done(&self) -> bool {
        self.step >= config::COUNTER_STEPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_counts_percentages_and_years() {
        assert_eq!(parse_target("150+"), (150, CounterFormat::Count));
        assert_eq!(parse_target("98%"), (98, CounterFormat::Percent));
        assert_eq!(parse_target("2015"), (2015, CounterFormat::Year));
        assert_eq!(parse_target("since 2015"), (2015, CounterFormat::Year));
    }

    #[test]
    fn counts_containing_two_zero_are_not_years() {
        assert_eq!(parse_target("120"), (120, CounterFormat::Count));
        assert_eq!(parse_target("205+"), (205, CounterFormat::Count));
    }

    #[test]
    fn unparseable_text_falls_back_to_the_default_target() {
        assert_eq!(parse_target("—"), (100, CounterFormat::Count));
        assert_eq!(parse_target(""), (100, CounterFormat::Count));
    }

    #[test]
    fn full_run_lands_exactly_on_the_target() {
        let mut counter = Counter::new(150);
        let mut last = 0;
        for _ in 0..100 {
            last = counter.tick();
        }
        assert_eq!(last, 150);
        assert!(counter.done());
        // Extra ticks stay pinned.
        assert_eq!(counter.tick(), 150);
    }

    #[test]
    fn intermediate_values_floor_and_never_overshoot() {
        let mut counter = Counter::new(150);
        assert_eq!(counter.tick(), 1); // floor(1.5)
        let mut previous = 1;
        while !counter.done() {
            let value = counter.tick();
            assert!(value >= previous);
            assert!(value <= 150);
            previous = value;
        }
    }

    #[test]
    fn formats_match_their_sources() {
        assert_eq!(CounterFormat::Count.render(150), "150+");
        assert_eq!(CounterFormat::Percent.render(98), "98%");
        assert_eq!(CounterFormat::Year.render(2015), "2015");
    }

    #[test]
    fn tick_cadence_divides_the_duration_evenly() {
        assert_eq!(Counter::step_interval_ms(), 20);
    }
}
