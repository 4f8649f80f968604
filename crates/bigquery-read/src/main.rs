use clap::{error::ErrorKind, Parser};
use std::io::Write;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

fn main() {
    let cli = match bigquery_read::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // Usage errors exit with status 1, rather than clap's default of 2.
            _ = err.print();
            std::process::exit(1);
        }
    };

    // Required in order for libraries to use `rustls` for TLS.
    // See: https://docs.rs/rustls/latest/rustls/crypto/struct.CryptoProvider.html
    rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .expect("failed to install default crypto provider");

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into()) // Otherwise it's ERROR.
        .from_env_lossy();

    tracing_subscriber::fmt::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Reads are sequential, and don't benefit from more than one thread.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to start runtime");

    let mut out = std::io::BufWriter::new(std::io::stdout().lock());
    let result = runtime.block_on(cli.run(&mut out));

    // Rows printed before a failure are still written.
    _ = out.flush();

    if let Err(err) = result {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}
