use crate::model::Observation;

pub const DEGREE: char = '\u{b0}';

/// Short link appended to full summaries.
pub const DEFAULT_LINK: &str = "http://bit.ly/AluLc";

/// Full summary, or `None` unless all three readings are present.
pub fn format_summary(
    high: Option<&Observation>,
    low: Option<&Observation>,
    current: Option<&Observation>,
    link: &str,
) -> Option<String> {
    let (high, low, current) = (high?, low?, current?);
    Some(format!(
        "Most recent high ({}): {}{DEGREE}C; Most recent low ({}): {}{DEGREE}C; Current ({}): {}{DEGREE}C {link}",
        high.time, high.value, low.time, low.value, current.time, current.value,
    ))
}

pub fn format_high(high: &Observation) -> String {
    format!("Most recent high ({}): {}{DEGREE}C", high.time, high.value)
}

pub fn format_low(low: &Observation) -> String {
    format!("Most recent low ({}): {}{DEGREE}C", low.time, low.value)
}
