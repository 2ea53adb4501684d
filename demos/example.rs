use battalert::{AlertConfig, BatteryDescriptor, ConsoleNotifier, CoolingCategory, NotificationTarget};

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let battery = BatteryDescriptor::new(CoolingCategory::HighActive, "SampleBrand");
    let config = AlertConfig::default();
    let mut notifier = ConsoleNotifier::stdout();

    for temperature in [-5.0, 20.0, 45.0, 50.0] {
        for target in [NotificationTarget::Controller, NotificationTarget::Email] {
            let classification =
                battalert::check_and_alert(&mut notifier, &config, target, &battery, temperature).await?;
            println!("{temperature}C -> {classification:?}");
        }
    }
    Ok(())
}
