use linmap::{init_logging, open_session, report, AppConfig};

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = AppConfig::load()?;
    let session = open_session(&config)?;
    tracing::info!(
        polygon = session.polygon().name(),
        matrix = session.matrix().name(),
        "session ready"
    );

    let report = report(&session, &config.plot_limits());
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
