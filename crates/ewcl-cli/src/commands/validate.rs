use super::{load_registry, to_pretty_json};
use crate::cli::{ReferenceArgs, ValidateArgs};
use crate::error::Result;
use crate::utils::input::{parse_structure_id, read_predictions};
use ewcl::core::io::reference::{ReferenceLoadError, ReferenceMetric};
use ewcl::core::models::ids::StructureId;
use ewcl::core::models::series::ReferenceSeries;
use ewcl::core::reference::source::{CsvReferenceDirectory, ReferenceSource};
use ewcl::engine::config::ThresholdConfig;
use ewcl::workflows::validate::validate;
use tracing::info;

/// Reads every series with a fixed metric, ignoring the one the registry records.
pub(crate) struct FixedMetricSource<S> {
    inner: S,
    metric: ReferenceMetric,
}

impl<S: ReferenceSource> ReferenceSource for FixedMetricSource<S> {
    fn series(
        &self,
        id: &StructureId,
        _metric: ReferenceMetric,
    ) -> std::result::Result<Option<ReferenceSeries>, ReferenceLoadError> {
        self.inner.series(id, self.metric)
    }
}

/// The CSV directory named on the command line, honouring `--metric` when given.
pub(crate) fn reference_source(args: &ReferenceArgs) -> Box<dyn ReferenceSource> {
    let directory = CsvReferenceDirectory::new(&args.reference_dir);
    match args.metric {
        Some(metric) => {
            info!("Reading reference values as {:?} for every structure.", metric);
            Box::new(FixedMetricSource {
                inner: directory,
                metric: metric.into(),
            })
        }
        None => Box::new(directory),
    }
}

pub fn run(args: ValidateArgs, config: &ThresholdConfig) -> Result<()> {
    let id = parse_structure_id(&args.id)?;
    let registry = load_registry(args.reference.catalogue.as_deref())?;
    let predictions = read_predictions(&args.predictions)?;
    let source = reference_source(&args.reference);

    let result = validate(&id, &predictions, &registry, source.as_ref(), &config.validation)?;
    println!("{}", to_pretty_json(&result)?);
    Ok(())
}
