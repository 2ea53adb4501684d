use std::fmt;

use crate::BreachClassification;

/// A human readable breach notification addressed to a recipient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub recipient: String,
    pub body: &'static str,
}

impl EmailMessage {
    pub fn new(recipient: &str, classification: BreachClassification) -> Self {
        Self {
            recipient: recipient.to_string(),
            body: Self::body_for(classification),
        }
    }

    pub const fn body_for(classification: BreachClassification) -> &'static str {
        match classification {
            BreachClassification::Normal => "Hi, the temperature is normal",
            BreachClassification::TooLow => "Hi, the temperature is too low",
            BreachClassification::TooHigh => "Hi, the temperature is too high",
        }
    }
}

impl fmt::Display for EmailMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "To: {}\n{}", self.recipient, self.body)
    }
}

#[test]
fn test_bodies_are_distinct() {
    let bodies: Vec<_> = BreachClassification::ALL.iter().map(|&c| EmailMessage::body_for(c)).collect();
    assert_eq!(bodies[0], "Hi, the temperature is normal");
    assert_eq!(bodies[1], "Hi, the temperature is too low");
    assert_eq!(bodies[2], "Hi, the temperature is too high");
}

#[test]
fn test_display() {
    let message = EmailMessage::new("a.b@c.com", BreachClassification::TooHigh);
    assert_eq!(message.to_string(), "To: a.b@c.com\nHi, the temperature is too high");
}
