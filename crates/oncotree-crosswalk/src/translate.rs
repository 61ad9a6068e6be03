//! Applying resolution to every record of an input file.

use oncotree_records::Record;

use crate::ambiguity::{resolve, CommonAncestorPolicy, Resolution, ResolutionMode};
use crate::candidates::Crosswalk;
use crate::error::{CrosswalkError, Result};

/// Code values meaning "not applicable"; passed through untouched.
pub const NOT_APPLICABLE_CODES: [&str; 3] = ["", "NA", "N/A"];

/// Column holding the codes in cBioPortal-style clinical files.
pub const DEFAULT_CODE_COLUMN: &str = "ONCOTREE_CODE";

/// Whether `code` is a not-applicable sentinel (case-sensitive).
pub fn is_not_applicable(code: &str) -> bool {
    NOT_APPLICABLE_CODES.contains(&code)
}

/// Settings for one translation run.
#[derive(Debug, Clone)]
pub struct TranslationOptions {
    /// Column whose value is rewritten.
    pub code_column: String,
    /// Let the common-ancestor policy settle ambiguous candidates.
    pub auto_mapping: bool,
}

impl Default for TranslationOptions {
    fn default() -> Self {
        Self {
            code_column: DEFAULT_CODE_COLUMN.to_string(),
            auto_mapping: false,
        }
    }
}

/// What happened to one record's code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Sentinel or missing value, copied through.
    NotApplicable,
    /// Resolved to the same code.
    Unchanged,
    /// Resolved to a different single code.
    Remapped,
    /// Chosen among several candidates by the automatic policy.
    AutoResolved,
    /// Replaced by a "Choose from" placeholder.
    Ambiguous,
    /// Replaced by a "needs to be manually mapped" placeholder.
    ManualMapping,
    /// Not in the source version; left unchanged.
    SourceCodeNotFound,
}

/// Per-outcome record counts for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationSummary {
    pub not_applicable: usize,
    pub unchanged: usize,
    pub remapped: usize,
    pub auto_resolved: usize,
    pub ambiguous: usize,
    pub manual_mapping: usize,
    pub source_code_not_found: usize,
}

impl TranslationSummary {
    fn record(&mut self, outcome: Outcome) {
        let slot = match outcome {
            Outcome::NotApplicable => &mut self.not_applicable,
            Outcome::Unchanged => &mut self.unchanged,
            Outcome::Remapped => &mut self.remapped,
            Outcome::AutoResolved => &mut self.auto_resolved,
            Outcome::Ambiguous => &mut self.ambiguous,
            Outcome::ManualMapping => &mut self.manual_mapping,
            Outcome::SourceCodeNotFound => &mut self.source_code_not_found,
        };
        *slot += 1;
    }

    /// Records processed.
    pub fn total(&self) -> usize {
        self.not_applicable
            + self.unchanged
            + self.remapped
            + self.auto_resolved
            + self.ambiguous
            + self.manual_mapping
            + self.source_code_not_found
    }

    /// Records whose output needs a human to look at it.
    pub fn needs_review(&self) -> usize {
        self.ambiguous + self.manual_mapping + self.source_code_not_found
    }
}

impl std::fmt::Display for TranslationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} records: {} unchanged, {} remapped, {} auto-resolved, {} ambiguous, \
             {} need manual mapping, {} not in source version, {} not applicable",
            self.total(),
            self.unchanged,
            self.remapped,
            self.auto_resolved,
            self.ambiguous,
            self.manual_mapping,
            self.source_code_not_found,
            self.not_applicable,
        )
    }
}

/// Rewrite the code column of every record in place.
///
/// A code missing from the source version is logged and left as is; the
/// run continues. Conflicting history in the target aborts the run.
pub fn translate(
    records: &mut [Record],
    crosswalk: &Crosswalk<'_>,
    options: &TranslationOptions,
) -> Result<TranslationSummary> {
    let policy = CommonAncestorPolicy::new(crosswalk.target());
    let mode = if options.auto_mapping {
        ResolutionMode::Auto(&policy)
    } else {
        ResolutionMode::Manual
    };

    let mut summary = TranslationSummary::default();
    for (row, record) in records.iter_mut().enumerate() {
        let outcome = translate_record(record, crosswalk, &options.code_column, mode, row)?;
        summary.record(outcome);
    }

    tracing::info!(
        source = crosswalk.source().version(),
        target = crosswalk.target().version(),
        direction = %crosswalk.direction(),
        "{summary}"
    );
    Ok(summary)
}

fn translate_record(
    record: &mut Record,
    crosswalk: &Crosswalk<'_>,
    column: &str,
    mode: ResolutionMode<'_>,
    row: usize,
) -> Result<Outcome> {
    let Some(code) = record.get(column).map(str::to_string) else {
        return Ok(Outcome::NotApplicable);
    };
    if is_not_applicable(&code) {
        return Ok(Outcome::NotApplicable);
    }

    let candidates = match crosswalk.candidates(&code) {
        Ok(candidates) => candidates,
        Err(err @ CrosswalkError::SourceCodeNotFound { .. }) => {
            tracing::error!(row, "{err}. Please verify source version.");
            return Ok(Outcome::SourceCodeNotFound);
        }
        Err(err) => return Err(err),
    };

    let resolution = resolve(&code, candidates, mode);
    let outcome = match &resolution {
        Resolution::Mapped(mapped) if *mapped == code => Outcome::Unchanged,
        Resolution::Mapped(_) => Outcome::Remapped,
        Resolution::AutoResolved { .. } => Outcome::AutoResolved,
        Resolution::Ambiguous { .. } => Outcome::Ambiguous,
        Resolution::ManualMappingRequired { .. } => Outcome::ManualMapping,
    };
    tracing::debug!(row, code = %code, output = %resolution, ?outcome, "translated code");
    record.set(column, resolution.output());
    Ok(outcome)
}
