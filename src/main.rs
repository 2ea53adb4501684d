use anyhow::Context;
use battalert::{
    AlertConfig, BatteryDescriptor, ConsoleNotifier, CoolingCategory, NotificationTarget,
};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Classify a battery temperature reading and send the result to a notification sink
#[derive(Parser)]
#[command(name = "battalert")]
#[command(version)]
struct Cli {
    /// Cooling category: passive, high-active or medium-active
    #[arg(long, default_value = "high-active")]
    cooling: CoolingCategory,

    /// Battery brand, informational only
    #[arg(long, default_value = "SampleBrand")]
    brand: String,

    /// Battery descriptor as JSON, e.g. '{"cooling_category": 1, "brand": "Acme"}'.
    /// Overrides --cooling and --brand.
    #[arg(long)]
    descriptor: Option<String>,

    /// Temperature reading in degrees Celsius
    #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
    temperature: f64,

    /// Notification target: controller or email
    #[arg(long, default_value = "email")]
    target: NotificationTarget,

    /// Recipient address for email notifications
    #[arg(long, default_value = AlertConfig::DEFAULT_RECIPIENT)]
    recipient: String,
}

/// The battery under test. A `--descriptor` document takes precedence over `--cooling` and `--brand`.
fn battery_descriptor(cli: &Cli) -> anyhow::Result<BatteryDescriptor> {
    match &cli.descriptor {
        Some(json) => BatteryDescriptor::from_json(json).context("Invalid battery descriptor"),
        None => Ok(BatteryDescriptor::new(cli.cooling, &cli.brand)),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "battalert=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let battery = battery_descriptor(&cli)?;
    let config = AlertConfig { recipient: cli.recipient };
    let mut notifier = ConsoleNotifier::stdout();

    battalert::check_and_alert(&mut notifier, &config, cli.target, &battery, cli.temperature)
        .await?;

    Ok(())
}

#[test]
fn test_battery_descriptor_defaults() {
    let cli = Cli::try_parse_from(["battalert"]).unwrap();
    let battery = battery_descriptor(&cli).unwrap();
    assert_eq!(battery, BatteryDescriptor::new(CoolingCategory::HighActive, "SampleBrand"));
    assert_eq!(cli.target, NotificationTarget::Email);
    assert_eq!(cli.temperature, 50.0);
}

#[test]
fn test_battery_descriptor_from_flags() {
    let cli = Cli::try_parse_from(["battalert", "--cooling", "passive", "--brand", "Acme"]).unwrap();
    let battery = battery_descriptor(&cli).unwrap();
    assert_eq!(battery, BatteryDescriptor::new(CoolingCategory::Passive, "Acme"));
}

#[test]
fn test_battery_descriptor_json_overrides_flags() {
    let cli = Cli::try_parse_from([
        "battalert",
        "--cooling",
        "passive",
        "--descriptor",
        r#"{"cooling_category": 2, "brand": "Acme"}"#,
    ])
    .unwrap();
    let battery = battery_descriptor(&cli).unwrap();
    assert_eq!(battery, BatteryDescriptor::new(CoolingCategory::MediumActive, "Acme"));
}

#[test]
fn test_battery_descriptor_invalid_json_category() {
    let cli = Cli::try_parse_from([
        "battalert",
        "--descriptor",
        r#"{"cooling_category": 5, "brand": "Acme"}"#,
    ])
    .unwrap();
    let err = battery_descriptor(&cli).unwrap_err();
    assert_eq!(err.to_string(), "Invalid battery descriptor");
    assert!(format!("{err:#}").contains("Invalid cooling category code: 5"), "{err:#}");
}
