use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() {

    // 1. Parse commandline arguments
    let cli_args = cadgeo::args::parse_cli_args();

    // 2. Set up logging on stderr, keeping stdout for results
    let level = match cli_args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Could not set up logging: {}", err);
    }

    // 3. Run the subcommand
    if let Err(err) = cadgeo::run(cli_args) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
