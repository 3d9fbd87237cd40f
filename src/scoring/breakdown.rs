use crate::Score;

/// The four weighted terms behind a candidate's score.
///
/// Its `Display` is the short rationale shown next to a suggestion.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Breakdown {
    pub frequency: Score,
    pub double: Score,
    pub blocking: Score,
    pub flexibility: Score,
}

impl Breakdown {
    pub fn total(&self) -> Score {
        self.frequency + self.double + self.blocking + self.flexibility
    }
}

impl std::fmt::Display for Breakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut reasons = Vec::new();
        if self.frequency != 0.0 {
            reasons.push(format!("shares numbers with the hand ({:+.1})", self.frequency));
        }
        if self.double > 0.0 {
            reasons.push(format!("sheds a double while it is easy ({:+.1})", self.double));
        }
        if self.double < 0.0 {
            reasons.push(format!("spends a double worth holding ({:+.1})", self.double));
        }
        if self.blocking != 0.0 {
            reasons.push(format!("presses numbers rarely seen ({:+.1})", self.blocking));
        }
        if self.flexibility != 0.0 {
            reasons.push(format!("strands the rest of the hand ({:+.1})", self.flexibility));
        }
        match reasons.is_empty() {
            true => write!(f, "no strong reason either way"),
            false => write!(f, "{}", reasons.join("; ")),
        }
    }
}
