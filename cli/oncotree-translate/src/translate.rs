//! The translation run: load versions, read records, translate, write.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use oncotree_client::{load_run_data, HttpProvider, LocalProvider, TaxonomyProvider};
use oncotree_crosswalk::{translate, Crosswalk, TranslationOptions, TranslationSummary, DEFAULT_CODE_COLUMN};
use oncotree_records::{read_records, write_records, ReadOptions};

use crate::config::TranslatorConfig;

/// Inputs for one run, already merged from flags and environment.
#[derive(Debug, Clone)]
pub struct TranslateRequest {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub source_version: String,
    pub target_version: String,
    pub auto_mapping: bool,
    pub code_column: Option<String>,
    pub api_url: Option<String>,
    pub offline_dir: Option<PathBuf>,
}

/// Run a translation end to end.
///
/// Any unknown version, provider failure, or conflicting history aborts
/// before the output file is written.
pub fn run(request: &TranslateRequest, config: &TranslatorConfig) -> Result<TranslationSummary> {
    if !request.input_file.is_file() {
        bail!(
            "input file ({}) can not be found",
            request.input_file.display()
        );
    }

    let code_column = request
        .code_column
        .clone()
        .or_else(|| config.records.code_column.clone())
        .unwrap_or_else(|| DEFAULT_CODE_COLUMN.to_string());

    let mut read_options = ReadOptions::default().require_column(code_column.as_str());
    if let Some(prefix) = &config.records.comment_prefix {
        read_options = read_options.with_comment_prefix(prefix.as_str());
    }
    let mut file = read_records(&request.input_file, &read_options)
        .with_context(|| format!("reading {}", request.input_file.display()))?;

    let provider = build_provider(request, config)?;
    let data = load_run_data(
        provider.as_ref(),
        &request.source_version,
        &request.target_version,
    )
    .context("loading oncotree versions")?;

    let crosswalk = Crosswalk::from_catalog(&data.source, &data.target, &data.catalog)?;
    let options = TranslationOptions {
        code_column,
        auto_mapping: request.auto_mapping,
    };
    let summary = translate(&mut file.records, &crosswalk, &options)?;

    write_records(&request.output_file, &file.header, &file.records)
        .with_context(|| format!("writing {}", request.output_file.display()))?;
    Ok(summary)
}

fn build_provider(
    request: &TranslateRequest,
    config: &TranslatorConfig,
) -> Result<Box<dyn TaxonomyProvider>> {
    if let Some(dir) = &request.offline_dir {
        tracing::info!(dir = %dir.display(), "reading oncotree data from local directory");
        return Ok(Box::new(LocalProvider::new(dir.clone())));
    }
    let base_url = request.api_url.as_deref().unwrap_or_else(|| config.base_url());
    tracing::info!(base_url, "using oncotree API");
    let provider = HttpProvider::new(base_url, config.timeout())
        .context("creating HTTP client")?;
    Ok(Box::new(provider))
}
