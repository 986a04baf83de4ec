//! Tool catalog.
//!
//! The catalog is loaded once at startup, either from the bundled
//! `catalog/tools.yml` or from a user-supplied YAML/JSON file, and is never
//! mutated afterwards. Catalog order is display order.

use crate::error::{DevkitError, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BUNDLED_CATALOG: &str = include_str!("../catalog/tools.yml");

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Tool {
    /// Check whether this tool carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Immutable, ordered collection of tools with unique ids.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tools: Vec<Tool>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(tools: Vec<Tool>) -> Result<Self> {
        let mut seen = HashSet::new();
        for tool in &tools {
            if !seen.insert(tool.id.as_str()) {
                return Err(DevkitError::DuplicateToolId(tool.id.clone()));
            }
        }
        Ok(Self { tools })
    }

    /// The catalog compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_yaml(BUNDLED_CATALOG)
    }

    /// Parse a YAML list of tools.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let tools: Vec<Tool> = serde_yaml::from_str(content)?;
        Self::new(tools)
    }

    /// Parse a JSON array of tools.
    pub fn from_json(content: &str) -> Result<Self> {
        let tools: Vec<Tool> = serde_json::from_str(content)?;
        Self::new(tools)
    }

    /// Load a catalog file. `.json` parses as JSON, anything else as YAML.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| DevkitError::Catalog(format!("failed to read {}: {}", path.display(), e)))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let catalog = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_yaml(&content)?
        };

        info!("Loaded {} tools from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Load from `path` when given, otherwise the bundled catalog.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => {
                let catalog = Self::bundled()?;
                info!("Using bundled catalog ({} tools)", catalog.len());
                Ok(catalog)
            }
        }
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Look up a tool by id.
    pub fn get(&self, id: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.id == id)
    }

    /// Look up a tool by id, failing with `ToolNotFound`.
    pub fn require(&self, id: &str) -> Result<&Tool> {
        self.get(id).ok_or_else(|| DevkitError::ToolNotFound(id.to_string()))
    }
}
