//! Field-level outcomes of a best-effort `from_value` call.

use std::fmt;

use thiserror::Error;
use wirevalue_core::ValueKind;

use crate::config::{MarshalConfig, MissingFieldPolicy};
use crate::kind::FieldKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IssueKind {
    #[error("missing")]
    Missing,
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: FieldKind,
        found: ValueKind,
    },
    #[error("unknown enum index {0}")]
    UnknownVariant(i64),
    #[error("nesting deeper than the configured limit")]
    DepthExceeded,
    #[error("expected an object at the top level, found {0}")]
    NotAnObject(ValueKind),
    #[error("descriptor for record {0} is unavailable")]
    InvalidDescriptor(&'static str),
}

/// One field that could not be populated, addressed by its path from the
/// record root (`child.flag`, `tags[2]`, `limits.high`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {kind}")]
pub struct FieldIssue {
    pub path: String,
    pub kind: IssueKind,
}

/// Accumulated issues. An empty report means every declared field was present
/// and written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarshalReport {
    pub issues: Vec<FieldIssue>,
}

impl MarshalReport {
    pub fn is_complete(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldIssue> {
        self.issues.iter()
    }

    /// Issues other than missing keys.
    pub fn failures(&self) -> impl Iterator<Item = &FieldIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.kind != IssueKind::Missing)
    }

    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.issues
            .iter()
            .filter(|issue| issue.kind == IssueKind::Missing)
            .map(|issue| issue.path.as_str())
    }

    pub fn issue_at(&self, path: &str) -> Option<&IssueKind> {
        self.issues
            .iter()
            .find(|issue| issue.path == path)
            .map(|issue| &issue.kind)
    }
}

impl fmt::Display for MarshalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return f.write_str("complete");
        }
        let parts: Vec<String> = self.issues.iter().map(ToString::to_string).collect();
        f.write_str(&parts.join("; "))
    }
}

#[derive(Debug, Clone)]
enum Segment {
    Field(String),
    Index(usize),
}

/// Walk state threaded through a `from_value` call: the current field path
/// and the issues gathered so far.
#[derive(Debug)]
pub struct MarshalContext<'a> {
    config: &'a MarshalConfig,
    path: Vec<Segment>,
    issues: Vec<FieldIssue>,
}

impl<'a> MarshalContext<'a> {
    pub fn new(config: &'a MarshalConfig) -> Self {
        Self {
            config,
            path: Vec::new(),
            issues: Vec::new(),
        }
    }

    pub fn config(&self) -> &MarshalConfig {
        self.config
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Run `f` with `name` appended to the current path.
    pub fn in_field<T>(&mut self, name: &str, f: impl FnOnce(&mut Self) -> T) -> T {
        self.path.push(Segment::Field(name.to_string()));
        let out = f(self);
        self.path.pop();
        out
    }

    /// Run `f` with an array index appended to the current path.
    pub fn in_index<T>(&mut self, index: usize, f: impl FnOnce(&mut Self) -> T) -> T {
        self.path.push(Segment::Index(index));
        let out = f(self);
        self.path.pop();
        out
    }

    pub fn record(&mut self, kind: IssueKind) {
        let path = self.path_string();
        log::debug!("marshal issue at '{path}': {kind}");
        self.issues.push(FieldIssue { path, kind });
    }

    pub fn mismatch(&mut self, expected: FieldKind, found: ValueKind) {
        self.record(IssueKind::TypeMismatch { expected, found });
    }

    /// Record an absent key for `name`, unless the policy ignores them.
    pub fn missing(&mut self, name: &str) {
        if self.config.missing_fields == MissingFieldPolicy::Report {
            self.in_field(name, |ctx| ctx.record(IssueKind::Missing));
        }
    }

    pub fn into_report(self) -> MarshalReport {
        MarshalReport {
            issues: self.issues,
        }
    }

    fn path_string(&self) -> String {
        let mut out = String::new();
        for seg in &self.path {
            match seg {
                Segment::Field(name) => {
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(name);
                }
                Segment::Index(i) => {
                    out.push('[');
                    out.push_str(&i.to_string());
                    out.push(']');
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_join_fields_and_indices() {
        let cfg = MarshalConfig::default();
        let mut ctx = MarshalContext::new(&cfg);
        ctx.in_field("history", |ctx| {
            ctx.in_index(1, |ctx| {
                ctx.in_field("flag", |ctx| {
                    ctx.mismatch(FieldKind::Boolean, ValueKind::String)
                })
            })
        });
        ctx.record(IssueKind::NotAnObject(ValueKind::Array));
        let report = ctx.into_report();
        assert_eq!(report.issues[0].path, "history[1].flag");
        assert_eq!(report.issues[1].path, "");
        assert_eq!(
            report.issues[0].to_string(),
            "history[1].flag: type mismatch: expected boolean, found string"
        );
    }

    #[test]
    fn ignored_missing_fields_leave_no_trace() {
        let cfg = MarshalConfig::ignoring_missing();
        let mut ctx = MarshalContext::new(&cfg);
        ctx.missing("count");
        assert!(ctx.into_report().is_complete());
    }

    #[test]
    fn report_splits_missing_from_failures() {
        let cfg = MarshalConfig::default();
        let mut ctx = MarshalContext::new(&cfg);
        ctx.missing("count");
        ctx.in_field("mode", |ctx| ctx.record(IssueKind::UnknownVariant(9)));
        let report = ctx.into_report();
        assert!(!report.is_complete());
        assert_eq!(report.missing().collect::<Vec<_>>(), ["count"]);
        assert_eq!(report.failures().count(), 1);
        assert_eq!(report.issue_at("mode"), Some(&IssueKind::UnknownVariant(9)));
    }

    #[test]
    fn depth_tracks_nesting() {
        let cfg = MarshalConfig::default();
        let mut ctx = MarshalContext::new(&cfg);
        let inner = ctx.in_field("a", |ctx| ctx.in_index(0, |ctx| ctx.depth()));
        assert_eq!(inner, 2);
        assert_eq!(ctx.depth(), 0);
    }
}
