use std::str::FromStr;

use crate::message::{ControllerFrame, EmailMessage};
use crate::{classify, AlertError, BatteryDescriptor, BreachClassification, Notifier};

/// Which sink receives a breach classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationTarget {
    Controller = 0,
    Email = 1,
}

impl TryFrom<u8> for NotificationTarget {
    type Error = AlertError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(NotificationTarget::Controller),
            1 => Ok(NotificationTarget::Email),
            _ => Err(AlertError::InvalidTarget(code)),
        }
    }
}

impl FromStr for NotificationTarget {
    type Err = AlertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "controller" => Ok(NotificationTarget::Controller),
            "email" => Ok(NotificationTarget::Email),
            _ => Err(AlertError::InvalidTargetName(s.to_string())),
        }
    }
}

/// Delivery settings for the alert sinks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertConfig {
    /// Address that email notifications are sent to
    pub recipient: String,
}

impl AlertConfig {
    pub const DEFAULT_RECIPIENT: &'static str = "a.b@c.com";
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            recipient: Self::DEFAULT_RECIPIENT.to_string(),
        }
    }
}

/// Hand a classification to the sink selected by `target`. Exactly one sink call is made.
pub async fn dispatch<N: Notifier>(
    notifier: &mut N,
    config: &AlertConfig,
    target: NotificationTarget,
    classification: BreachClassification,
) -> Result<(), AlertError> {
    match target {
        NotificationTarget::Controller => {
            let frame = ControllerFrame::new(classification);
            notifier.send_to_controller(&frame).await
        }
        NotificationTarget::Email => {
            let message = EmailMessage::new(&config.recipient, classification);
            notifier.send_to_email(&message).await
        }
    }
}

/// Dispatch from untyped codes. Both codes are validated before any sink is called.
pub async fn dispatch_code<N: Notifier>(
    notifier: &mut N,
    config: &AlertConfig,
    target_code: u8,
    classification_code: u8,
) -> Result<(), AlertError> {
    let target = NotificationTarget::try_from(target_code).inspect_err(|err| {
        tracing::warn!("dropping alert: {err}");
    })?;
    let classification = BreachClassification::try_from(classification_code).inspect_err(|err| {
        tracing::warn!("dropping alert: {err}");
    })?;
    dispatch(notifier, config, target, classification).await
}

/// Classify a reading for the given battery and send the result to `target`.
///
/// Returns the classification that was dispatched. Nothing is sent if the reading is invalid.
pub async fn check_and_alert<N: Notifier>(
    notifier: &mut N,
    config: &AlertConfig,
    target: NotificationTarget,
    battery: &BatteryDescriptor,
    temperature_c: f64,
) -> Result<BreachClassification, AlertError> {
    let classification = classify(battery.cooling_category, temperature_c)?;
    tracing::info!(
        brand = battery.brand(),
        temperature_c,
        ?classification,
        ?target,
        "dispatching temperature alert"
    );
    dispatch(notifier, config, target, classification).await?;
    Ok(classification)
}

#[cfg(test)]
#[derive(Default)]
struct Recorder {
    frames: Vec<ControllerFrame>,
    emails: Vec<EmailMessage>,
}

#[cfg(test)]
impl Notifier for Recorder {
    async fn send_to_controller(&mut self, frame: &ControllerFrame) -> Result<(), AlertError> {
        self.frames.push(*frame);
        Ok(())
    }

    async fn send_to_email(&mut self, message: &EmailMessage) -> Result<(), AlertError> {
        self.emails.push(message.clone());
        Ok(())
    }
}

#[tokio::test]
async fn test_dispatch_to_controller() {
    let mut recorder = Recorder::default();
    for classification in BreachClassification::ALL {
        dispatch(&mut recorder, &AlertConfig::default(), NotificationTarget::Controller, classification)
            .await
            .unwrap();
    }
    assert!(recorder.emails.is_empty());
    assert_eq!(recorder.frames.len(), 3);
    for (frame, classification) in recorder.frames.iter().zip(BreachClassification::ALL) {
        let bytes = frame.to_bytes();
        assert_eq!(&bytes[0..2], &[0xfe_u8, 0xed][..]);
        assert_eq!(bytes[2], classification.code());
    }
}

#[tokio::test]
async fn test_dispatch_to_email() {
    let mut recorder = Recorder::default();
    let config = AlertConfig { recipient: "ops@example.com".to_string() };
    dispatch(&mut recorder, &config, NotificationTarget::Email, BreachClassification::TooLow)
        .await
        .unwrap();
    assert!(recorder.frames.is_empty());
    assert_eq!(
        recorder.emails,
        vec![EmailMessage {
            recipient: "ops@example.com".to_string(),
            body: "Hi, the temperature is too low",
        }]
    );
}

#[tokio::test]
async fn test_dispatch_code_invalid_target() {
    let mut recorder = Recorder::default();
    let result = dispatch_code(&mut recorder, &AlertConfig::default(), 2, 0).await;
    assert!(matches!(result, Err(AlertError::InvalidTarget(2))));
    assert!(recorder.frames.is_empty());
    assert!(recorder.emails.is_empty());
}

#[tokio::test]
async fn test_dispatch_code_invalid_classification() {
    let mut recorder = Recorder::default();
    let result = dispatch_code(&mut recorder, &AlertConfig::default(), 1, 3).await;
    assert!(matches!(result, Err(AlertError::InvalidClassification(3))));
    assert!(recorder.emails.is_empty());

    let result = dispatch_code(&mut recorder, &AlertConfig::default(), 0, 200).await;
    assert!(matches!(result, Err(AlertError::InvalidClassification(200))));
    assert!(recorder.frames.is_empty());
}

#[tokio::test]
async fn test_dispatch_code_valid() {
    let mut recorder = Recorder::default();
    dispatch_code(&mut recorder, &AlertConfig::default(), 0, 2).await.unwrap();
    assert_eq!(recorder.frames, vec![ControllerFrame::new(BreachClassification::TooHigh)]);
}

#[tokio::test]
async fn test_check_and_alert_nan_sends_nothing() {
    let mut recorder = Recorder::default();
    let battery = BatteryDescriptor::new(crate::CoolingCategory::Passive, "SampleBrand");
    let result = check_and_alert(
        &mut recorder,
        &AlertConfig::default(),
        NotificationTarget::Controller,
        &battery,
        f64::NAN,
    )
    .await;
    assert!(matches!(result, Err(AlertError::InvalidReading(_))));
    assert!(recorder.frames.is_empty());
}

#[test]
fn test_target_parsing() {
    assert_eq!(NotificationTarget::try_from(0).unwrap(), NotificationTarget::Controller);
    assert_eq!(NotificationTarget::try_from(1).unwrap(), NotificationTarget::Email);
    assert_eq!("Email".parse::<NotificationTarget>().unwrap(), NotificationTarget::Email);
    assert!(matches!(
        "pager".parse::<NotificationTarget>(),
        Err(AlertError::InvalidTargetName(_))
    ));
}
