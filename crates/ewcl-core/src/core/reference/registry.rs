use crate::core::io::reference::ReferenceMetric;
use crate::core::models::ids::StructureId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RegistryEntry {
    pub id: StructureId,
    pub protein: String,
    pub publication: String,
    pub metric: String,
    pub description: String,
    #[serde(default)]
    pub reference_url: Option<String>,
    #[serde(default)]
    pub disprot_id: Option<String>,
    /// How the published values are stored in the reference file.
    #[serde(default)]
    pub series_metric: ReferenceMetric,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogueFile {
    #[serde(rename = "entry", default)]
    entries: Vec<RegistryEntry>,
}

/// Read-only catalogue of structures with published per-residue references.
#[derive(Debug, Clone, Default)]
pub struct ReferenceRegistry {
    entries: Vec<RegistryEntry>,
    index: HashMap<StructureId, usize>,
}

static BUILTIN: LazyLock<ReferenceRegistry> = LazyLock::new(|| {
    let entries = vec![
        RegistryEntry {
            id: StructureId::from_static("1XQ8"),
            protein: "Alpha-Synuclein".to_string(),
            publication: "Tang et al. 2003".to_string(),
            metric: "S² order parameter".to_string(),
            description: "NMR-derived order parameters mapped to disorder (1 - S²)".to_string(),
            reference_url: Some("https://doi.org/10.1021/bi0262726".to_string()),
            disprot_id: None,
            series_metric: ReferenceMetric::OrderParameter,
        },
        RegistryEntry {
            id: StructureId::from_static("2K4X"),
            protein: "p53 tail".to_string(),
            publication: "Lowry et al. 2008".to_string(),
            metric: "RMSF per-residue".to_string(),
            description: "MD-derived flexibility measurements".to_string(),
            reference_url: Some("https://doi.org/10.1021/bi702312z".to_string()),
            disprot_id: None,
            series_metric: ReferenceMetric::Disorder,
        },
        RegistryEntry {
            id: StructureId::from_static("5J7Y"),
            protein: "Ubiquitin".to_string(),
            publication: "Lin et al. 2017".to_string(),
            metric: "S² order parameter".to_string(),
            description: "NMR relaxation data for human ubiquitin".to_string(),
            reference_url: Some("https://doi.org/10.1038/nature17991".to_string()),
            disprot_id: None,
            series_metric: ReferenceMetric::OrderParameter,
        },
    ];
    let index = entries
        .iter()
        .enumerate()
        .map(|(i, e)| (e.id.clone(), i))
        .collect();
    ReferenceRegistry { entries, index }
});

/// The catalogue compiled into the library, initialized on first use.
pub fn builtin_registry() -> &'static ReferenceRegistry {
    &BUILTIN
}

impl ReferenceRegistry {
    pub fn from_entries(entries: Vec<RegistryEntry>) -> Result<Self, RegistryLoadError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if index.insert(entry.id.clone(), i).is_some() {
                return Err(RegistryLoadError::DuplicateEntry(entry.id.clone()));
            }
        }
        Ok(Self { entries, index })
    }

    pub fn load(path: &Path) -> Result<Self, RegistryLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| RegistryLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let file: CatalogueFile =
            toml::from_str(&content).map_err(|e| RegistryLoadError::Toml {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
        Self::from_entries(file.entries)
    }

    pub fn lookup(&self, id: &StructureId) -> Option<&RegistryEntry> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    pub fn is_known(&self, id: &StructureId) -> bool {
        self.index.contains_key(id)
    }

    /// Entries in catalogue order.
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum RegistryLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Structure '{0}' is listed more than once")]
    DuplicateEntry(StructureId),
}
