//! Course offerings configuration stored as human-edited TOML.
//!
//! The configuration is declarative seed data: which courses the catalog
//! offers at startup. Enrollments are runtime state and are never read from
//! or written to disk.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::catalog::Catalog;
use crate::core::types::Course;

/// Course offerings (TOML).
///
/// This file is intended to be edited by humans and must remain stable and
/// automatable. A missing file loads as the empty default.
///
/// ```toml
/// [[course]]
/// course_id = "SCALA01"
/// title = "Functional Programming in Scala"
/// instructor = "M. Odersky"
/// category = "Programming"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Courses to preload, in file order.
    pub course: Vec<Course>,
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for course in &self.course {
            if course.course_id.trim().is_empty() {
                return Err(anyhow!("course_id must be non-empty"));
            }
            if !seen.insert(course.course_id.as_str()) {
                return Err(anyhow!("duplicate course_id '{}'", course.course_id));
            }
        }
        Ok(())
    }

    /// Build a catalog preloaded with the configured courses, in file order.
    pub fn build_catalog(&self) -> Catalog {
        let mut catalog = Catalog::new();
        for course in &self.course {
            catalog.add_course(course.clone());
        }
        catalog
    }
}

/// Load offerings from a TOML file.
///
/// If the file is missing, returns `CatalogConfig::default()`.
pub fn load_config(path: &Path) -> Result<CatalogConfig> {
    if !path.exists() {
        let cfg = CatalogConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    debug!(path = %path.display(), "loading catalog config");
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: CatalogConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    debug!(courses = cfg.course.len(), "catalog config loaded");
    Ok(cfg)
}

/// Atomically write offerings to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &CatalogConfig) -> Result<()> {
    cfg.validate()?;
    debug!(path = %path.display(), courses = cfg.course.len(), "writing catalog config");
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
