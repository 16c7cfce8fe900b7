mod logger;
mod service_a;

use tracing_subscriber::EnvFilter;
use wirebox::Container;

use crate::logger::Logger;
use crate::service_a::ServiceA;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    // Picks up every #[derive(Singleton)] in the binary; nothing is
    // constructed until first resolution.
    let mut container = Container::with_registered();

    let service = container.construct::<ServiceA>()?;
    service.run();

    let logger = container.resolve_as::<Logger>("Logger")?;
    for message in logger.messages() {
        println!("{message}");
    }

    Ok(())
}
