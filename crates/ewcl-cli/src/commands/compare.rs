use super::to_pretty_json;
use crate::cli::CompareArgs;
use crate::error::Result;
use crate::utils::input::read_predictions;
use ewcl::core::io::reference::load_reference_csv;
use ewcl::engine::config::ThresholdConfig;
use ewcl::workflows::compare::compare;
use tracing::info;

pub fn run(args: CompareArgs, config: &ThresholdConfig) -> Result<()> {
    let reference = load_reference_csv(&args.reference, args.metric.into())?;
    let prediction: Vec<f64> = read_predictions(&args.prediction)?.values().collect();
    info!(
        "Comparing {} reference values with {} predicted values.",
        reference.len(),
        prediction.len()
    );

    let report = compare(reference.values(), &prediction, &config.qualitative)?;
    println!("{}", to_pretty_json(&report)?);
    println!(
        "Correlation: {} (r = {:.3}), error: {} (RMSE = {:.3}) over {} positions.",
        report.correlation, report.pearson_r, report.error, report.rmse, report.length
    );
    Ok(())
}
