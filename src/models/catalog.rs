use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Catalog id of the fallback entry used whenever a switch references a
/// model the catalog does not know.
pub const GENERIC_UNKNOWN_ID: &str = "generic_unknown";

/// Immutable catalog entry describing a physical switch model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchModelSpec {
    pub id: String,
    pub name: String,
    pub manufacturer: String,
    pub rated_lifespan_presses: u64,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse switch catalog: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("catalog entry '{id}' has a zero rated lifespan")]
    ZeroLifespan { id: String },
    #[error("catalog is missing the '{GENERIC_UNKNOWN_ID}' sentinel entry")]
    MissingSentinel,
}

/// Static switch-model catalog, loaded once at process start and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchCatalog {
    models: Vec<SwitchModelSpec>,
}

impl SwitchCatalog {
    /// Built-in catalog covering the common keypad microswitches plus the
    /// generic/unknown sentinel.
    pub fn builtin() -> Self {
        Self {
            models: vec![
                SwitchModelSpec {
                    id: "omron_d2mv_01_1c3".to_string(),
                    name: "D2MV-01-1C3 (50g)".to_string(),
                    manufacturer: "Omron".to_string(),
                    rated_lifespan_presses: 10_000_000,
                },
                SwitchModelSpec {
                    id: "omron_d2mv_01_1c2".to_string(),
                    name: "D2MV-01-1C2 (25g)".to_string(),
                    manufacturer: "Omron".to_string(),
                    rated_lifespan_presses: 10_000_000,
                },
                SwitchModelSpec {
                    id: "omron_v_10_1a4".to_string(),
                    name: "V-10-1A4 (100g)".to_string(),
                    manufacturer: "Omron".to_string(),
                    rated_lifespan_presses: 50_000_000,
                },
                SwitchModelSpec {
                    id: GENERIC_UNKNOWN_ID.to_string(),
                    name: "Generic / Unknown".to_string(),
                    manufacturer: "Generic".to_string(),
                    rated_lifespan_presses: 1_000_000,
                },
            ],
        }
    }

    /// Load a user-supplied catalog from TOML (`[[models]]` tables).
    /// Every entry must have a positive rated lifespan and the sentinel
    /// entry must be present.
    pub fn from_toml(input: &str) -> Result<Self, CatalogError> {
        let catalog: SwitchCatalog = toml::from_str(input)?;
        if let Some(bad) = catalog.models.iter().find(|m| m.rated_lifespan_presses == 0) {
            return Err(CatalogError::ZeroLifespan { id: bad.id.clone() });
        }
        if catalog.get(GENERIC_UNKNOWN_ID).is_none() {
            return Err(CatalogError::MissingSentinel);
        }
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&SwitchModelSpec> {
        self.models.iter().find(|m| m.id == id)
    }

    /// Resolve a model id, falling back to the generic/unknown sentinel for
    /// ids the catalog does not know.
    pub fn resolve(&self, id: &str) -> &SwitchModelSpec {
        self.get(id).unwrap_or_else(|| self.sentinel())
    }

    pub fn sentinel(&self) -> &SwitchModelSpec {
        self.get(GENERIC_UNKNOWN_ID)
            .expect("catalog invariant: sentinel entry always present")
    }

    pub fn models(&self) -> &[SwitchModelSpec] {
        &self.models
    }
}

impl Default for SwitchCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
