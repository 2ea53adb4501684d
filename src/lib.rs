//! Monitor battery temperature against cooling-type limits and route breach alerts.
//!
//! Each battery has a cooling category (passive, high active or medium active) with a fixed
//! inclusive safe range in degrees Celsius. A reading is classified as normal, too low or
//! too high and the result is handed to a notification sink:
//!
//! - Controller: a 5 byte frame, `0xfeed` header, classification code, MODBUS CRC
//! - Email: one of three fixed message bodies addressed to a configured recipient
//!
//! # Example
//!
//! ```rust
//! # #[tokio::main]
//! # pub async fn main(){
//!     use battalert::{AlertConfig, BatteryDescriptor, ConsoleNotifier, CoolingCategory, NotificationTarget};
//!
//!     let battery = BatteryDescriptor::new(CoolingCategory::HighActive, "SampleBrand");
//!     let mut notifier = ConsoleNotifier::stdout();
//!     let classification = battalert::check_and_alert(
//!         &mut notifier,
//!         &AlertConfig::default(),
//!         NotificationTarget::Email,
//!         &battery,
//!         50.0,
//!     ).await.unwrap();
//!     assert_eq!(classification, battalert::BreachClassification::TooHigh);
//! # }
//! ```

mod alert;
mod battery_descriptor;
mod breach;
mod cooling;
mod error;
pub mod message;
mod notifier;

pub use alert::{check_and_alert, dispatch, dispatch_code, AlertConfig, NotificationTarget};
pub use battery_descriptor::{BatteryDescriptor, MAX_BRAND_LEN};
pub use breach::{classify, classify_code, infer, BreachClassification};
pub use cooling::{lookup, lookup_code, CoolingCategory, TemperatureRange};
pub use error::AlertError;
pub use notifier::{ConsoleNotifier, Notifier};
