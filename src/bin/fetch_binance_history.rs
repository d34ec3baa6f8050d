use backtest_data_fetcher::config::Settings;
use backtest_data_fetcher::services::pipeline_service;
use backtest_data_fetcher::utils::init_tracing;
use clap::Parser;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "fetch-binance-history")]
#[command(about = "Fetch historical data from Binance API")]
struct Args {
    /// Number of days to fetch
    #[arg(long, default_value_t = 30)]
    days: u32,

    /// Crypto symbols to fetch
    #[arg(long, num_args = 1.., default_values = ["BTC"])]
    symbols: Vec<String>,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    init_tracing();

    let args = Args::parse();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    info!("Writing output to {}", settings.output_dir.display());
    pipeline_service::run_binance(&settings, &args.symbols, args.days).await;
}
