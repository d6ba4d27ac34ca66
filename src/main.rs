use clap::Parser;
use itunes_lookup::lookup;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Numeric store id (e.g. 557285579) or bundle identifier (e.g. com.skout.SKOUT)
    app_id: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    if let Some(bundle_id) = lookup::resolve(&args.app_id) {
        println!("{}", bundle_id);
    }
}
