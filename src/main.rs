// ==========================================
// 零售进货预测 - 命令行入口
// ==========================================
// 用法:
//   intake-forecast <sales.csv|xlsx> <params.json> [output.csv] [--by-product] [--json-log]
// 未指定 output.csv 时结果写到 stdout，日志写 stderr
// ==========================================

use anyhow::{bail, Context, Result};
use intake_forecast::api::ForecastApi;
use intake_forecast::config::ForecastParameters;
use intake_forecast::{exporter, logging, DqLevel};
use std::path::PathBuf;

struct CliArgs {
    sales_path: PathBuf,
    params_path: PathBuf,
    output_path: Option<PathBuf>,
    by_product: bool,
    json_log: bool,
}

fn parse_args() -> Result<CliArgs> {
    let mut positional = Vec::new();
    let mut by_product = false;
    let mut json_log = false;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--by-product" => by_product = true,
            "--json-log" => json_log = true,
            flag if flag.starts_with("--") => bail!("未知参数: {}", flag),
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    let mut positional = positional.into_iter();
    let (Some(sales_path), Some(params_path)) = (positional.next(), positional.next()) else {
        bail!("用法: intake-forecast <sales.csv|xlsx> <params.json> [output.csv] [--by-product] [--json-log]");
    };
    let output_path = positional.next();
    if positional.next().is_some() {
        bail!("多余的位置参数");
    }

    Ok(CliArgs {
        sales_path,
        params_path,
        output_path,
        by_product,
        json_log,
    })
}

fn main() -> Result<()> {
    let args = parse_args()?;

    if args.json_log {
        logging::init_json();
    } else {
        logging::init();
    }

    tracing::info!("{} v{}", intake_forecast::APP_NAME, intake_forecast::VERSION);

    let params = ForecastParameters::from_json_file(&args.params_path)
        .with_context(|| format!("读取预测参数失败: {}", args.params_path.display()))?;

    let api = ForecastApi::default();
    let report = api
        .forecast_file(&args.sales_path, &params)
        .with_context(|| format!("预测失败: {}", args.sales_path.display()))?;

    for violation in report.violations.iter().filter(|v| v.level == DqLevel::Error) {
        tracing::warn!(
            row = ?violation.row_number,
            field = %violation.field,
            "{}",
            violation.message
        );
    }
    tracing::info!(
        skus = report.rows.len(),
        errors = report.dq_summary.errors,
        warnings = report.dq_summary.warnings,
        "数据质量汇总"
    );

    match &args.output_path {
        Some(path) => api
            .export_report(&report, path, args.by_product)
            .with_context(|| format!("写出结果失败: {}", path.display()))?,
        None => {
            let stdout = std::io::stdout().lock();
            if args.by_product {
                exporter::write_rollup_to_writer(stdout, &report.product_rollup)?;
            } else {
                exporter::write_forecast_to_writer(stdout, &report.rows)?;
            }
        }
    }

    Ok(())
}
