//! The boundary between the alert pipeline and the systems that deliver notifications.

use std::future::Future;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::message::{ControllerFrame, EmailMessage};
use crate::AlertError;

/// A sink for breach notifications.
///
/// Implementations own the transport (serial link, SMTP relay, console, test recorder).
pub trait Notifier {
    /// Transmit a frame to the controller
    fn send_to_controller(
        &mut self,
        frame: &ControllerFrame,
    ) -> impl Future<Output = Result<(), AlertError>>;

    /// Deliver an email message to its recipient
    fn send_to_email(
        &mut self,
        message: &EmailMessage,
    ) -> impl Future<Output = Result<(), AlertError>>;
}

/// Writes every notification in its printable form to an async writer, e.g. stdout.
pub struct ConsoleNotifier<W> {
    writer: W,
}

impl<W: AsyncWrite + Unpin> ConsoleNotifier<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    async fn write_line(&mut self, line: &str) -> Result<(), AlertError> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }
}

impl ConsoleNotifier<tokio::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

impl<W: AsyncWrite + Unpin> Notifier for ConsoleNotifier<W> {
    async fn send_to_controller(&mut self, frame: &ControllerFrame) -> Result<(), AlertError> {
        let h = hex::encode(frame.to_bytes());
        tracing::debug!(classification = ?frame.classification(), "CONTROLLER: TX: 0x{h}");
        self.write_line(&frame.to_string()).await
    }

    async fn send_to_email(&mut self, message: &EmailMessage) -> Result<(), AlertError> {
        tracing::debug!(recipient = %message.recipient, "EMAIL: TX");
        self.write_line(&message.to_string()).await
    }
}

#[cfg(test)]
use crate::{AlertConfig, BatteryDescriptor, BreachClassification, CoolingCategory, NotificationTarget};

#[cfg(test)]
struct BrokenWriter;

#[cfg(test)]
impl AsyncWrite for BrokenWriter {
    fn poll_write(
        self: std::pin::Pin<&mut Self>,
        _cx: &mut std::task::Context<'_>,
        _buf: &[u8],
    ) -> std::task::Poll<std::io::Result<usize>> {
        std::task::Poll::Ready(Err(std::io::Error::other("link down")))
    }

    fn poll_flush(
        self: std::pin::Pin<&mut Self>,
        _cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<std::io::Result<()>> {
        std::task::Poll::Ready(Ok(()))
    }

    fn poll_shutdown(
        self: std::pin::Pin<&mut Self>,
        _cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<std::io::Result<()>> {
        std::task::Poll::Ready(Ok(()))
    }
}

#[tokio::test]
async fn test_console_controller_output() {
    let mut notifier = ConsoleNotifier::new(Vec::<u8>::new());
    let frame = ControllerFrame::new(BreachClassification::TooHigh);
    notifier.send_to_controller(&frame).await.unwrap();
    let output = String::from_utf8(notifier.into_inner()).unwrap();
    assert_eq!(output, "Header: feed, Breach Type: 2\n");
}

#[tokio::test]
async fn test_console_email_output() {
    let mut notifier = ConsoleNotifier::new(Vec::<u8>::new());
    let message = EmailMessage::new("ops@example.com", BreachClassification::TooLow);
    notifier.send_to_email(&message).await.unwrap();
    let output = String::from_utf8(notifier.into_inner()).unwrap();
    assert_eq!(output, "To: ops@example.com\nHi, the temperature is too low\n");
}

#[tokio::test]
async fn test_sink_failure_is_reported() {
    let mut notifier = ConsoleNotifier::new(BrokenWriter);
    let message = EmailMessage::new("a.b@c.com", BreachClassification::TooHigh);
    let result = notifier.send_to_email(&message).await;
    assert!(matches!(result, Err(AlertError::Sink(ref err)) if err.to_string() == "link down"));

    let result = notifier.send_to_controller(&ControllerFrame::new(BreachClassification::Normal)).await;
    assert!(matches!(result, Err(AlertError::Sink(_))));
}

#[tokio::test]
async fn test_check_and_alert_reports_sink_failure() {
    let mut notifier = ConsoleNotifier::new(BrokenWriter);
    let battery = BatteryDescriptor::new(CoolingCategory::Passive, "SampleBrand");
    let result = crate::check_and_alert(
        &mut notifier,
        &AlertConfig::default(),
        NotificationTarget::Email,
        &battery,
        50.0,
    )
    .await;
    assert!(matches!(result, Err(AlertError::Sink(_))));
}
