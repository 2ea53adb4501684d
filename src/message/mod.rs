//! Messages handed to the notification sinks

pub mod controller_frame;
pub mod email_message;

pub use controller_frame::{ControllerFrame, ParseFrameResult};
pub use email_message::EmailMessage;
