use crate::core::io::reference::{ReferenceLoadError, ReferenceMetric, load_reference_csv};
use crate::core::models::ids::StructureId;
use crate::core::models::series::ReferenceSeries;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Supplies published per-residue series by structure identifier.
///
/// `Ok(None)` means the source holds no data for the identifier; errors are
/// reserved for data that exists but cannot be read.
pub trait ReferenceSource: Send + Sync {
    fn series(
        &self,
        id: &StructureId,
        metric: ReferenceMetric,
    ) -> Result<Option<ReferenceSeries>, ReferenceLoadError>;
}

/// Reads `<id>_disorder.csv` files (lowercase id) from a directory.
#[derive(Debug, Clone)]
pub struct CsvReferenceDirectory {
    root: PathBuf,
}

impl CsvReferenceDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, id: &StructureId) -> PathBuf {
        self.root.join(format!("{}_disorder.csv", id.to_lowercase()))
    }
}

impl ReferenceSource for CsvReferenceDirectory {
    fn series(
        &self,
        id: &StructureId,
        metric: ReferenceMetric,
    ) -> Result<Option<ReferenceSeries>, ReferenceLoadError> {
        let path = self.path_for(id);
        if !path.is_file() {
            debug!("No reference file for {} at {:?}", id, path);
            return Ok(None);
        }
        load_reference_csv(&path, metric).map(Some)
    }
}

/// Series held in memory, already expressed as disorder values.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReferenceSource {
    series: HashMap<StructureId, ReferenceSeries>,
}

impl InMemoryReferenceSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: StructureId, series: ReferenceSeries) -> Option<ReferenceSeries> {
        self.series.insert(id, series)
    }

    pub fn with(mut self, id: StructureId, series: ReferenceSeries) -> Self {
        self.insert(id, series);
        self
    }
}

impl ReferenceSource for InMemoryReferenceSource {
    fn series(
        &self,
        id: &StructureId,
        _metric: ReferenceMetric,
    ) -> Result<Option<ReferenceSeries>, ReferenceLoadError> {
        Ok(self.series.get(id).cloned())
    }
}
