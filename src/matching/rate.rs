use once_cell::sync::Lazy;
use regex::Regex;

use crate::matching::weights::{Weights, DEFAULT_WEIGHTS};
use crate::HourlyRates;

// Unit and currency markers stripped before number extraction. Alternation
// order matters: "/hour" must win over the bare "hour".
static RE_RATE_UNITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/hour|/hr|per hour|per hr|hour|hr|s\$").unwrap());

// Range separator (dash, en-dash, tilde, or "to") adjacent to a number.
static RE_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*[-–~]|to\s*(\d+(?:\.\d+)?)").unwrap());

static RE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?").unwrap());

/// Extract a representative hourly rate from free text such as "$45/hr",
/// "S$40-60/hour" or "50 to 70". Ranges yield the arithmetic mean of their
/// first two numbers. `None` means the string carries no numeric rate at
/// all ("To be discussed") — callers must treat that as rate unknown, never
/// as zero dollars.
pub fn parse_rate(rate: &str) -> Option<f64> {
    let lowered = rate.to_lowercase();
    let cleaned = RE_RATE_UNITS.replace_all(&lowered, "");
    let cleaned = cleaned.replace('$', "");
    let cleaned = cleaned.trim();

    if RE_RANGE.is_match(cleaned) {
        let numbers: Vec<f64> = RE_NUMBER
            .find_iter(cleaned)
            .filter_map(|m| m.as_str().parse().ok())
            .collect();
        if numbers.len() >= 2 {
            return Some((numbers[0] + numbers[1]) / 2.0);
        }
    }

    RE_NUMBER
        .find(cleaned)
        .and_then(|m| m.as_str().parse().ok())
}

/// How a job's advertised rate sits against a tutor's declared band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateCompatibility {
    /// Inside the declared [min, max] band.
    Perfect,
    /// Inside the band widened by 20% on each side.
    Close,
    /// Inside the band widened by 40% on each side.
    Partial,
    /// Outside even the widest tolerance band.
    Mismatch,
    /// The job rate has no numeric content.
    Unknown,
}

impl RateCompatibility {
    pub fn points(self, weights: &Weights) -> u32 {
        match self {
            RateCompatibility::Perfect => weights.rate,
            RateCompatibility::Close => weights.rate / 2,
            RateCompatibility::Partial => weights.rate / 4,
            RateCompatibility::Mismatch | RateCompatibility::Unknown => 0,
        }
    }
}

/// Tiered comparison of a job rate string against a tutor's band. The
/// tolerance bands widen from the tutor's declared endpoints, so a tutor
/// with a wide band tolerates a wider absolute dollar gap.
pub fn evaluate_rate(job_rate: &str, rates: &HourlyRates) -> RateCompatibility {
    let Some(value) = parse_rate(job_rate) else {
        return RateCompatibility::Unknown;
    };

    if value >= rates.min && value <= rates.max {
        RateCompatibility::Perfect
    } else if value >= rates.min * 0.8 && value <= rates.max * 1.2 {
        RateCompatibility::Close
    } else if value >= rates.min * 0.6 && value <= rates.max * 1.4 {
        RateCompatibility::Partial
    } else {
        RateCompatibility::Mismatch
    }
}

/// Spec'd integer contract: 20 perfect, 10 close, 5 partial, 0 otherwise.
pub fn rate_compatibility_score(job_rate: &str, rates: &HourlyRates) -> u32 {
    evaluate_rate(job_rate, rates).points(&DEFAULT_WEIGHTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(min: f64, max: f64) -> HourlyRates {
        HourlyRates { min, max }
    }

    #[test]
    fn parses_single_values_in_mixed_notations() {
        assert_eq!(parse_rate("$45/hr"), Some(45.0));
        assert_eq!(parse_rate("S$50/hour"), Some(50.0));
        assert_eq!(parse_rate("60 per hour"), Some(60.0));
        assert_eq!(parse_rate("35.50/hr"), Some(35.5));
    }

    #[test]
    fn parses_ranges_as_their_mean() {
        assert_eq!(parse_rate("$40-60/hr"), Some(50.0));
        assert_eq!(parse_rate("S$40 - 60 per hour"), Some(50.0));
        assert_eq!(parse_rate("40 to 60"), Some(50.0));
        assert_eq!(parse_rate("$45~55/hr"), Some(50.0));
        assert_eq!(parse_rate("$40–60/hr"), Some(50.0));
    }

    #[test]
    fn no_digits_yields_none() {
        assert_eq!(parse_rate("To be discussed"), None);
        assert_eq!(parse_rate("negotiable"), None);
        assert_eq!(parse_rate(""), None);
    }

    #[test]
    fn dangling_range_separator_falls_back_to_first_number() {
        assert_eq!(parse_rate("$40-/hr"), Some(40.0));
    }

    #[test]
    fn perfect_within_declared_band() {
        assert_eq!(evaluate_rate("$45/hr", &band(40.0, 50.0)), RateCompatibility::Perfect);
        assert_eq!(evaluate_rate("$40/hr", &band(40.0, 50.0)), RateCompatibility::Perfect);
        assert_eq!(evaluate_rate("$50/hr", &band(40.0, 50.0)), RateCompatibility::Perfect);
    }

    #[test]
    fn close_within_twenty_percent_tolerance() {
        // [32, 60] for a 40-50 band.
        assert_eq!(evaluate_rate("$55/hr", &band(40.0, 50.0)), RateCompatibility::Close);
        assert_eq!(evaluate_rate("$33/hr", &band(40.0, 50.0)), RateCompatibility::Close);
    }

    #[test]
    fn partial_within_forty_percent_tolerance() {
        // [24, 70] for a 40-50 band.
        assert_eq!(evaluate_rate("$65/hr", &band(40.0, 50.0)), RateCompatibility::Partial);
        assert_eq!(evaluate_rate("$25/hr", &band(40.0, 50.0)), RateCompatibility::Partial);
    }

    #[test]
    fn mismatch_outside_all_bands() {
        assert_eq!(evaluate_rate("$100/hr", &band(40.0, 50.0)), RateCompatibility::Mismatch);
        assert_eq!(evaluate_rate("$10/hr", &band(40.0, 50.0)), RateCompatibility::Mismatch);
    }

    #[test]
    fn unknown_rate_scores_zero_not_zero_dollars() {
        assert_eq!(
            evaluate_rate("To be discussed", &band(40.0, 50.0)),
            RateCompatibility::Unknown
        );
        assert_eq!(rate_compatibility_score("To be discussed", &band(40.0, 50.0)), 0);
        // Parsed zero dollars is a mismatch, not unknown.
        assert_eq!(evaluate_rate("$0/hr", &band(40.0, 50.0)), RateCompatibility::Mismatch);
    }

    #[test]
    fn integer_contract_tiers() {
        let rates = band(40.0, 50.0);
        assert_eq!(rate_compatibility_score("$45/hr", &rates), 20);
        assert_eq!(rate_compatibility_score("$55/hr", &rates), 10);
        assert_eq!(rate_compatibility_score("$65/hr", &rates), 5);
        assert_eq!(rate_compatibility_score("$100/hr", &rates), 0);
    }
}
