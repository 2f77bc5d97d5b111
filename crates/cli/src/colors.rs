use aqi_core::aqi::Severity;
use crossterm::style::Color;

/// Trait for converting severity tiers to terminal colors
pub trait AsTermColor {
    fn as_crossterm_color(&self) -> Option<Color>;
}

impl AsTermColor for Severity {
    fn as_crossterm_color(&self) -> Option<Color> {
        match self {
            Severity::Good => Some(Color::Green),
            Severity::Moderate => Some(Color::Yellow),
            Severity::UnhealthySensitive => Some(Color::DarkYellow),
            Severity::Unhealthy => Some(Color::Red),
            Severity::VeryUnhealthy => Some(Color::Magenta),
            Severity::Hazardous => Some(Color::DarkRed),
            Severity::NoInfo => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_reading_tier_has_a_color() {
        let tiers = [
            Severity::Good,
            Severity::Moderate,
            Severity::UnhealthySensitive,
            Severity::Unhealthy,
            Severity::VeryUnhealthy,
            Severity::Hazardous,
        ];

        for tier in tiers {
            assert!(tier.as_crossterm_color().is_some(), "{tier} has no color");
        }
        assert!(Severity::NoInfo.as_crossterm_color().is_none());
    }
}
