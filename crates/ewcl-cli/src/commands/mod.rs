pub mod batch;
pub mod classify;
pub mod compare;
pub mod predict;
pub mod registry;
pub mod sequence;
pub mod validate;

use crate::error::{CliError, Result};
use ewcl::core::reference::registry::{ReferenceRegistry, builtin_registry};
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// The built-in catalogue, or the one in `catalogue` when given.
pub(crate) fn load_registry(catalogue: Option<&Path>) -> Result<Cow<'static, ReferenceRegistry>> {
    match catalogue {
        Some(path) => {
            info!("Loading reference catalogue from {:?}", path);
            let registry = ReferenceRegistry::load(path)?;
            Ok(Cow::Owned(registry))
        }
        None => Ok(Cow::Borrowed(builtin_registry())),
    }
}

pub(crate) fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| CliError::Other(e.into()))
}
