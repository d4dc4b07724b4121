use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use dotenv::dotenv;
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use arbcalc::config::{self, Config};
use arbcalc::monitoring::{format_currency, render_summary, EvaluationLogger, EvaluationRecord};
use arbcalc::{
    evaluate, DirectInput, EvaluationResult, FuturesInput, P2pInput, StrategyInput, StrategyKind, TriangularInput,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a direct (cross-exchange) arbitrage
    Direct(DirectArgs),
    /// Evaluate a triangular arbitrage loop
    Triangular(TriangularArgs),
    /// Evaluate a spot/futures basis trade
    Futures(FuturesArgs),
    /// Evaluate a peer-to-peer arbitrage
    #[command(name = "p2p")]
    P2p(P2pArgs),
    /// Evaluate a strategy input read from a JSON file
    File {
        path: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the default input for a strategy as JSON
    Defaults {
        /// direct, triangular, futures or p2p
        strategy: String,
    },
    /// Show recorded evaluations
    History {
        /// Only show the most recent N records
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[derive(Args, Default)]
struct OutputArgs {
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
    /// Append the evaluation to the history file
    #[arg(long)]
    record: bool,
}

#[derive(Args)]
struct DirectArgs {
    #[arg(long)]
    buy_price: Option<f64>,
    #[arg(long)]
    sell_price: Option<f64>,
    #[arg(long)]
    amount: Option<f64>,
    #[arg(long)]
    buy_fee_pct: Option<f64>,
    #[arg(long)]
    sell_fee_pct: Option<f64>,
    #[arg(long)]
    include_network_fees: Option<bool>,
    #[arg(long)]
    network_fee: Option<f64>,
    #[command(flatten)]
    output: OutputArgs,
}

impl DirectArgs {
    fn input(&self) -> StrategyInput {
        let d = DirectInput::default();
        StrategyInput::Direct(DirectInput {
            buy_price: self.buy_price.unwrap_or(d.buy_price),
            sell_price: self.sell_price.unwrap_or(d.sell_price),
            amount: self.amount.unwrap_or(d.amount),
            buy_exchange_fee_pct: self.buy_fee_pct.unwrap_or(d.buy_exchange_fee_pct),
            sell_exchange_fee_pct: self.sell_fee_pct.unwrap_or(d.sell_exchange_fee_pct),
            include_network_fees: self.include_network_fees.unwrap_or(d.include_network_fees),
            network_fee_flat: self.network_fee.unwrap_or(d.network_fee_flat),
        })
    }
}

#[derive(Args)]
struct TriangularArgs {
    #[arg(long)]
    start_amount: Option<f64>,
    #[arg(long)]
    first_rate: Option<f64>,
    #[arg(long)]
    second_rate: Option<f64>,
    #[arg(long)]
    third_rate: Option<f64>,
    #[arg(long)]
    fee_pct: Option<f64>,
    #[arg(long)]
    include_slippage: Option<bool>,
    #[arg(long)]
    slippage_pct: Option<f64>,
    #[command(flatten)]
    output: OutputArgs,
}

impl TriangularArgs {
    fn input(&self) -> StrategyInput {
        let d = TriangularInput::default();
        StrategyInput::Triangular(TriangularInput {
            start_amount: self.start_amount.unwrap_or(d.start_amount),
            first_pair_rate: self.first_rate.unwrap_or(d.first_pair_rate),
            second_pair_rate: self.second_rate.unwrap_or(d.second_pair_rate),
            third_pair_rate: self.third_rate.unwrap_or(d.third_pair_rate),
            exchange_fee_pct: self.fee_pct.unwrap_or(d.exchange_fee_pct),
            include_slippage: self.include_slippage.unwrap_or(d.include_slippage),
            slippage_pct: self.slippage_pct.unwrap_or(d.slippage_pct),
        })
    }
}

#[derive(Args)]
struct FuturesArgs {
    #[arg(long)]
    spot_price: Option<f64>,
    #[arg(long)]
    futures_price: Option<f64>,
    #[arg(long)]
    amount: Option<f64>,
    #[arg(long)]
    days: Option<u32>,
    #[arg(long)]
    funding_rate_pct: Option<f64>,
    #[arg(long)]
    spot_fee_pct: Option<f64>,
    #[arg(long)]
    futures_fee_pct: Option<f64>,
    #[command(flatten)]
    output: OutputArgs,
}

impl FuturesArgs {
    fn input(&self) -> StrategyInput {
        let d = FuturesInput::default();
        StrategyInput::Futures(FuturesInput {
            spot_price: self.spot_price.unwrap_or(d.spot_price),
            futures_price: self.futures_price.unwrap_or(d.futures_price),
            amount: self.amount.unwrap_or(d.amount),
            days_to_expiration: self.days.unwrap_or(d.days_to_expiration),
            funding_rate_pct_per_day: self.funding_rate_pct.unwrap_or(d.funding_rate_pct_per_day),
            spot_exchange_fee_pct: self.spot_fee_pct.unwrap_or(d.spot_exchange_fee_pct),
            futures_exchange_fee_pct: self.futures_fee_pct.unwrap_or(d.futures_exchange_fee_pct),
        })
    }
}

#[derive(Args)]
struct P2pArgs {
    #[arg(long)]
    buy_rate: Option<f64>,
    #[arg(long)]
    sell_rate: Option<f64>,
    #[arg(long)]
    amount: Option<f64>,
    #[arg(long)]
    payment_fee_pct: Option<f64>,
    #[arg(long)]
    withdrawal_fee: Option<f64>,
    #[arg(long)]
    minutes: Option<f64>,
    #[command(flatten)]
    output: OutputArgs,
}

impl P2pArgs {
    fn input(&self) -> StrategyInput {
        let d = P2pInput::default();
        StrategyInput::P2p(P2pInput {
            buy_rate: self.buy_rate.unwrap_or(d.buy_rate),
            sell_rate: self.sell_rate.unwrap_or(d.sell_rate),
            amount: self.amount.unwrap_or(d.amount),
            payment_processing_fee_pct: self.payment_fee_pct.unwrap_or(d.payment_processing_fee_pct),
            withdrawal_fee_flat: self.withdrawal_fee.unwrap_or(d.withdrawal_fee_flat),
            estimated_time_to_complete_minutes: self
                .minutes
                .unwrap_or(d.estimated_time_to_complete_minutes),
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_config().context("loading configuration failed")?;

    let level = if cli.verbose || config.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    match cli.command {
        Some(Commands::Direct(args)) => run_evaluation(args.input(), &args.output, &config).await?,
        Some(Commands::Triangular(args)) => run_evaluation(args.input(), &args.output, &config).await?,
        Some(Commands::Futures(args)) => run_evaluation(args.input(), &args.output, &config).await?,
        Some(Commands::P2p(args)) => run_evaluation(args.input(), &args.output, &config).await?,
        Some(Commands::File { path, output }) => {
            let content = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("reading {}", path.display()))?;
            let input: StrategyInput = serde_json::from_str(&content)
                .with_context(|| format!("parsing strategy input from {}", path.display()))?;
            run_evaluation(input, &output, &config).await?;
        }
        Some(Commands::Defaults { strategy }) => {
            let kind: StrategyKind = strategy.parse()?;
            let input = StrategyInput::default_for(kind);
            println!("{}", serde_json::to_string_pretty(&input)?);
        }
        Some(Commands::History { limit }) => show_history(&config, limit).await?,
        None => {
            info!(
                "No command specified, evaluating default {} inputs. Use --help for available commands.",
                config.default_strategy
            );
            let input = StrategyInput::default_for(config.default_strategy);
            run_evaluation(input, &OutputArgs::default(), &config).await?;
        }
    }

    Ok(())
}

async fn run_evaluation(input: StrategyInput, output: &OutputArgs, config: &Config) -> Result<()> {
    let kind = input.kind();
    let result = evaluate(kind, &input)
        .with_context(|| format!("{} arbitrage input rejected", kind))?;

    if output.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render_summary(&result));
    }

    if output.record {
        record_evaluation(config, input, result)
            .await
            .context("recording evaluation failed")?;
    } else if config.record_evaluations {
        // Recording switched on from the environment never fails the command.
        if let Err(e) = record_evaluation(config, input, result).await {
            warn!("Failed to record evaluation: {:#}", e);
        }
    }

    Ok(())
}

async fn record_evaluation(
    config: &Config,
    input: StrategyInput,
    result: EvaluationResult,
) -> Result<()> {
    let logger = EvaluationLogger::new(&config.log_dir)
        .with_context(|| format!("opening log directory {}", config.log_dir.display()))?;
    logger.log_evaluation(&EvaluationRecord::new(input, result)).await?;
    info!("Evaluation recorded to {}", logger.path().display());
    Ok(())
}

async fn show_history(config: &Config, limit: Option<usize>) -> Result<()> {
    let logger = EvaluationLogger::open(&config.log_dir);
    let history = logger
        .history()
        .await
        .with_context(|| format!("reading {}", logger.path().display()))?;

    let skip = limit.map_or(0, |n| history.len().saturating_sub(n));
    if history.is_empty() {
        info!("No evaluations recorded in {}", logger.path().display());
    }

    for record in history.iter().skip(skip) {
        println!(
            "{}  {:<10} net {:>12} ({:>7.2}%)  risk {}",
            record.timestamp.format("%Y-%m-%d %H:%M:%S"),
            record.result.strategy,
            format_currency(record.result.net_profit),
            record.result.profit_percentage,
            record.result.risk_tier,
        );
    }

    Ok(())
}
