//! Raw form controls and their conversion into a write payload.

use serde::{Deserialize, Serialize};

use crate::{ActiveFlag, Catalogue, CatalogueDraft, CoreError};

/// Values of the create/edit form controls, exactly as submitted.
///
/// Every control is text; blank controls become absent draft fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueForm {
    #[serde(default)]
    pub catalogue_id: String,
    #[serde(default)]
    pub catalogue_name: String,
    #[serde(default)]
    pub catalogue_version: String,
    #[serde(default)]
    pub is_cat_active: String,
    #[serde(default)]
    pub catalogue_start: String,
    #[serde(default)]
    pub catalogue_end: String,
}

impl CatalogueForm {
    /// Prefilled controls for the edit view.
    pub fn from_record(record: &Catalogue) -> Self {
        Self {
            catalogue_id: record.catalogue_id.to_string(),
            catalogue_name: record.catalogue_name.clone(),
            catalogue_version: record.catalogue_version.clone(),
            is_cat_active: ActiveFlag::from(record.is_cat_active).as_str().to_owned(),
            catalogue_start: record.catalogue_start.map(|d| d.to_string()).unwrap_or_default(),
            catalogue_end: record.catalogue_end.map(|d| d.to_string()).unwrap_or_default(),
        }
    }

    /// Build the write payload.
    ///
    /// Only the control types are enforced here (numeric id, `1`/`0` flag);
    /// everything else is left for the backend to judge.
    pub fn to_draft(&self) -> crate::Result<CatalogueDraft> {
        let catalogue_id = match non_blank(&self.catalogue_id) {
            Some(raw) => Some(raw.parse().map_err(|_| {
                CoreError::InvalidInput(format!("Catalogue ID must be a number, got '{raw}'"))
            })?),
            None => None,
        };
        let is_cat_active = non_blank(&self.is_cat_active).map(str::parse).transpose()?;

        Ok(CatalogueDraft {
            catalogue_id,
            catalogue_name: non_blank(&self.catalogue_name).map(str::to_owned),
            catalogue_version: non_blank(&self.catalogue_version).map(str::to_owned),
            is_cat_active,
            catalogue_start: non_blank(&self.catalogue_start).map(str::to_owned),
            catalogue_end: non_blank(&self.catalogue_end).map(str::to_owned),
        })
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
