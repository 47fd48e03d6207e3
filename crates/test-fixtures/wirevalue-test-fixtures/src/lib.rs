//! Shared JSON documents for the workspace tests, indexed by
//! `fixtures/manifest.json`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Manifest {
    values: BTreeMap<String, String>,
    records: BTreeMap<String, RecordEntry>,
}

/// Either a bare path, or a path plus whether decoding should populate every
/// field of the target record.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordEntry {
    Path(String),
    Detailed {
        path: String,
        #[serde(default)]
        complete: Option<bool>,
    },
}

fn manifest() -> Result<&'static Manifest> {
    static MANIFEST: OnceCell<Manifest> = OnceCell::new();
    MANIFEST.get_or_try_init(|| {
        serde_json::from_str(include_str!("../../../../fixtures/manifest.json"))
            .context("fixtures/manifest.json is malformed")
    })
}

fn read(rel: &str) -> Result<String> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../../fixtures")
        .join(rel);
    fs::read_to_string(&path).with_context(|| format!("reading fixture {}", path.display()))
}

/// A free-form document for text codec tests.
#[derive(Debug, Clone)]
pub struct ValueFixture {
    pub name: String,
    pub text: String,
}

impl ValueFixture {
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.text).with_context(|| format!("decoding fixture {}", self.name))
    }
}

/// A serialized record.
#[derive(Debug, Clone)]
pub struct RecordFixture {
    pub name: String,
    pub text: String,
    /// `Some(true)` when the document names every field of its record with an
    /// acceptable kind, `Some(false)` when it deliberately does not, `None`
    /// when the manifest makes no claim.
    pub complete: Option<bool>,
}

impl RecordFixture {
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.text).with_context(|| format!("decoding fixture {}", self.name))
    }
}

pub fn value_fixture(name: &str) -> Result<ValueFixture> {
    let rel = manifest()?
        .values
        .get(name)
        .ok_or_else(|| anyhow!("no value fixture named '{name}'"))?;
    Ok(ValueFixture {
        name: name.to_string(),
        text: read(rel)?,
    })
}

/// Every value fixture, ordered by name.
pub fn value_fixtures() -> Result<Vec<ValueFixture>> {
    manifest()?
        .values
        .keys()
        .map(|name| value_fixture(name))
        .collect()
}

pub fn record_fixture(name: &str) -> Result<RecordFixture> {
    let entry = manifest()?
        .records
        .get(name)
        .ok_or_else(|| anyhow!("no record fixture named '{name}'"))?;
    let (rel, complete) = match entry {
        RecordEntry::Path(path) => (path, None),
        RecordEntry::Detailed { path, complete } => (path, *complete),
    };
    Ok(RecordFixture {
        name: name.to_string(),
        text: read(rel)?,
        complete,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_manifest_entry_resolves() {
        let values = value_fixtures().expect("value fixtures");
        let names: Vec<&str> = values.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["mixed-kinds", "nested-depth", "wide-object"]);
        for name in manifest().expect("manifest").records.keys() {
            let fixture = record_fixture(name).expect("record fixture");
            assert!(!fixture.text.trim().is_empty(), "{name} is empty");
        }
    }

    #[test]
    fn record_completeness_comes_from_the_manifest() {
        let complete = |name: &str| record_fixture(name).expect("record fixture").complete;
        assert_eq!(complete("telemetry-full"), Some(true));
        assert_eq!(complete("telemetry-partial"), Some(false));
        assert_eq!(complete("telemetry-legacy"), None);
    }

    #[test]
    fn unknown_names_are_errors() {
        assert!(value_fixture("missing").is_err());
        assert!(record_fixture("missing").is_err());
    }
}
