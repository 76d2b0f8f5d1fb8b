//! Score cell styling

/// How a table colours its score column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreStyle {
    /// Green above zero, red below, grey at zero (attendants)
    Signed,
    /// Same colour regardless of sign (clients)
    Uniform,
}

/// Visual class of a single score cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTone {
    Positive,
    Negative,
    Neutral,
    Plain,
}

impl ScoreStyle {
    pub fn tone(&self, score: i64) -> ScoreTone {
        match self {
            ScoreStyle::Uniform => ScoreTone::Plain,
            ScoreStyle::Signed => match score.signum() {
                1 => ScoreTone::Positive,
                -1 => ScoreTone::Negative,
                _ => ScoreTone::Neutral,
            },
        }
    }
}

impl ScoreTone {
    /// Tailwind class used by the web dashboard
    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreTone::Positive => "text-green-600",
            ScoreTone::Negative => "text-red-600",
            ScoreTone::Neutral => "text-gray-600",
            ScoreTone::Plain => "text-gray-700",
        }
    }

    /// ANSI SGR colour code for terminal output
    pub fn ansi_code(&self) -> Option<&'static str> {
        match self {
            ScoreTone::Positive => Some("32"),
            ScoreTone::Negative => Some("31"),
            ScoreTone::Neutral => Some("90"),
            ScoreTone::Plain => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_tones() {
        let style = ScoreStyle::Signed;
        assert_eq!(style.tone(9), ScoreTone::Positive);
        assert_eq!(style.tone(1), ScoreTone::Positive);
        assert_eq!(style.tone(-8), ScoreTone::Negative);
        assert_eq!(style.tone(0), ScoreTone::Neutral);
        assert_eq!(style.tone(i64::MIN), ScoreTone::Negative);
    }

    #[test]
    fn test_uniform_ignores_sign() {
        let style = ScoreStyle::Uniform;
        for score in [-25, 0, 20] {
            assert_eq!(style.tone(score), ScoreTone::Plain);
        }
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(ScoreTone::Positive.css_class(), "text-green-600");
        assert_eq!(ScoreTone::Negative.css_class(), "text-red-600");
        assert_eq!(ScoreTone::Neutral.css_class(), "text-gray-600");
    }
}
