use battalert::message::{ControllerFrame, EmailMessage, ParseFrameResult};
use battalert::{
    check_and_alert, AlertConfig, AlertError, BatteryDescriptor, BreachClassification,
    ConsoleNotifier, CoolingCategory, NotificationTarget, Notifier,
};

#[derive(Default)]
struct Recorder {
    frames: Vec<Vec<u8>>,
    emails: Vec<EmailMessage>,
}

impl Notifier for Recorder {
    async fn send_to_controller(&mut self, frame: &ControllerFrame) -> Result<(), AlertError> {
        self.frames.push(frame.to_bytes().to_vec());
        Ok(())
    }

    async fn send_to_email(&mut self, message: &EmailMessage) -> Result<(), AlertError> {
        self.emails.push(message.clone());
        Ok(())
    }
}

#[tokio::test]
async fn test_high_active_too_hot_by_email() {
    let mut recorder = Recorder::default();
    let battery = BatteryDescriptor::new(CoolingCategory::HighActive, "SampleBrand");

    let classification = check_and_alert(
        &mut recorder,
        &AlertConfig::default(),
        NotificationTarget::Email,
        &battery,
        50.0,
    )
    .await
    .unwrap();

    assert_eq!(classification, BreachClassification::TooHigh);
    assert!(recorder.frames.is_empty());
    assert_eq!(recorder.emails.len(), 1);
    assert_eq!(recorder.emails[0].recipient, "a.b@c.com");
    assert_eq!(recorder.emails[0].body, "Hi, the temperature is too high");
}

#[tokio::test]
async fn test_controller_frame_round_trips_through_wire() {
    let mut recorder = Recorder::default();
    let battery = BatteryDescriptor::from_json(r#"{"cooling_category": 0, "brand": "Acme"}"#).unwrap();

    check_and_alert(
        &mut recorder,
        &AlertConfig::default(),
        NotificationTarget::Controller,
        &battery,
        -3.0,
    )
    .await
    .unwrap();

    assert_eq!(recorder.frames, vec![hex::decode("feed019ca0").unwrap()]);
    assert_eq!(
        ControllerFrame::parse(&recorder.frames[0]),
        ParseFrameResult::Ok(ControllerFrame::new(BreachClassification::TooLow))
    );
}

#[tokio::test]
async fn test_console_output_matches_sample_run() {
    let mut notifier = ConsoleNotifier::new(Vec::<u8>::new());
    let battery = BatteryDescriptor::new(CoolingCategory::HighActive, "SampleBrand");
    let config = AlertConfig::default();

    check_and_alert(&mut notifier, &config, NotificationTarget::Email, &battery, 50.0)
        .await
        .unwrap();
    check_and_alert(&mut notifier, &config, NotificationTarget::Controller, &battery, 45.0)
        .await
        .unwrap();

    let output = String::from_utf8(notifier.into_inner()).unwrap();
    assert_eq!(
        output,
        "To: a.b@c.com\nHi, the temperature is too high\nHeader: feed, Breach Type: 0\n"
    );
}
