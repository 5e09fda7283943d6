// ==========================================
// 运输费率系统 - 命令行入口
// ==========================================
// 流程: 日志 → 配置（文件 + 环境变量 + 命令行）→ 导入费率表 → 执行命令
// 红线: 导入失败直接退出,不以空表继续
// ==========================================

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use transport_rates::config::{config_keys, ConfigManager};
use transport_rates::{logging, AppState, RateQuote};

/// 运输商费率表最低报价查询
#[derive(Parser, Debug)]
#[command(name = "transport-rates", version, about = "运输商费率表最低报价查询")]
struct Cli {
    /// 配置文件路径（默认 <config_dir>/transport-rates/config.json）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 费率表文件（覆盖配置与环境变量）
    #[arg(long)]
    workbook: Option<PathBuf>,

    /// 工作表名（覆盖配置与环境变量）
    #[arg(long)]
    sheet: Option<String>,

    /// 日志以 JSON 输出
    #[arg(long)]
    json_log: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 查询最便宜的运输商
    Query {
        /// 重量档（如 "Upto 50 Kg"）
        #[arg(long)]
        weight: String,

        /// 目的地
        #[arg(long)]
        location: String,

        /// 返回条数（默认取配置 top_n）
        #[arg(long)]
        top: Option<usize>,

        /// 以 JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 列出全部重量档
    Weights,

    /// 列出全部地点
    Locations,

    /// 列出全部运输商
    Transporters,

    /// 输出导入报告（JSON）
    Summary,
}

fn load_config(cli: &Cli) -> anyhow::Result<ConfigManager> {
    let config = match &cli.config {
        Some(path) => ConfigManager::load(path)?,
        None => ConfigManager::load_default()?,
    };
    let mut config = config.with_env_overrides();

    if let Some(workbook) = &cli.workbook {
        config.set(config_keys::WORKBOOK_PATH, workbook.to_string_lossy().to_string());
    }
    if let Some(sheet) = &cli.sheet {
        config.set(config_keys::SHEET_NAME, sheet.clone());
    }

    tracing::debug!(snapshot = %config.get_config_snapshot()?, "生效配置");
    Ok(config)
}

fn print_quotes(weight: &str, location: &str, quotes: &[RateQuote]) {
    if quotes.is_empty() {
        println!("未找到 {} / {} 的运输商报价", weight, location);
        return;
    }

    println!("最便宜的 {} 个报价", quotes.len());
    println!("{:<4} {:<32} {:<20} {:>12}", "#", "Transporter", "Weight", "Rate");
    for (idx, quote) in quotes.iter().enumerate() {
        println!(
            "{:<4} {:<32} {:<20} {:>12}",
            idx + 1,
            quote.transporter,
            quote.weight_label,
            quote.rate
        );
    }
}

fn print_lines(values: &[String]) {
    for value in values {
        println!("{}", value);
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.json_log {
        logging::init_json("info");
    } else {
        logging::init();
    }

    tracing::info!("{} v{}", transport_rates::APP_NAME, transport_rates::VERSION);

    let config = load_config(&cli)?;
    let state = AppState::new(&config).context("费率表加载失败")?;
    let api = state.rate_api.as_ref();

    match &cli.command {
        Command::Query {
            weight,
            location,
            top,
            json,
        } => {
            let quotes = match top {
                Some(n) => api.recommend_top(weight, location, *n),
                None => api.recommend(weight, location),
            };
            if *json {
                println!("{}", serde_json::to_string_pretty(&quotes)?);
            } else {
                print_quotes(weight, location, &quotes);
            }
        }
        Command::Weights => print_lines(&api.weight_options()),
        Command::Locations => print_lines(&api.location_options()),
        Command::Transporters => print_lines(&api.transporter_options()),
        Command::Summary => {
            println!("{}", serde_json::to_string_pretty(&api.import_report())?);
        }
    }

    Ok(())
}
