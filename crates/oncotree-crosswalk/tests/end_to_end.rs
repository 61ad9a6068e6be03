//! End-to-end translation: provider data on disk, input file in, output file out.

use std::path::Path;

use oncotree_client::wire::{WireNode, WireVersion};
use oncotree_client::{load_run_data, LocalProvider};
use oncotree_core::TranslationDirection;
use oncotree_crosswalk::{translate, Crosswalk, TranslationOptions, DEFAULT_CODE_COLUMN};
use oncotree_records::{read_records, write_records, ReadOptions};

fn version(id: &str, date: &str) -> WireVersion {
    WireVersion {
        api_identifier: id.to_string(),
        release_date: date.to_string(),
        description: None,
        visible: Some(true),
    }
}

fn node(code: &str, parent: &str) -> WireNode {
    WireNode {
        code: code.to_string(),
        parent: Some(parent.to_string()),
        history: Some(Vec::new()),
        precursors: Some(Vec::new()),
        revocations: Some(Vec::new()),
        name: None,
        main_type: None,
        tissue: None,
        level: None,
    }
}

/// Two versions: 2016 with PNET and ALL, 2017 where PNET became LNET and
/// ALL was revoked in favour of BLL and TLL.
fn provider(root: &Path) -> LocalProvider {
    let provider = LocalProvider::new(root.to_path_buf());
    provider
        .store_versions(&[version("2016", "2016-12-08"), version("2017", "2017-06-21")])
        .unwrap();
    provider
        .store_snapshot(
            "2016",
            &[
                node("TISSUE", ""),
                node("PNET", "TISSUE"),
                node("ALL", "TISSUE"),
                node("BRCA", "TISSUE"),
            ],
        )
        .unwrap();
    provider
        .store_snapshot(
            "2017",
            &[
                node("TISSUE", ""),
                WireNode {
                    precursors: Some(vec!["PNET".into()]),
                    ..node("LNET", "TISSUE")
                },
                node("LNM", "TISSUE"),
                WireNode {
                    revocations: Some(vec!["ALL".into()]),
                    ..node("BLL", "LNM")
                },
                WireNode {
                    revocations: Some(vec!["ALL".into()]),
                    ..node("TLL", "LNM")
                },
                node("BRCA", "TISSUE"),
            ],
        )
        .unwrap();
    provider
}

fn input_file(dir: &Path, codes: &[&str]) -> std::path::PathBuf {
    let mut text = String::from("#Sample Identifier\tOncotree Code\n#STRING\tSTRING\nSAMPLE_ID\tONCOTREE_CODE\n");
    for (i, code) in codes.iter().enumerate() {
        text.push_str(&format!("S-{i}\t{code}\n"));
    }
    let path = dir.join("data_clinical_sample.txt");
    std::fs::write(&path, text).unwrap();
    path
}

fn run(
    dir: &Path,
    source: &str,
    target: &str,
    codes: &[&str],
    options: &TranslationOptions,
) -> Vec<String> {
    let provider = provider(&dir.join("oncotree"));
    let input = input_file(dir, codes);
    let output = dir.join("out.txt");

    let data = load_run_data(&provider, source, target).unwrap();
    let walk = Crosswalk::from_catalog(&data.source, &data.target, &data.catalog).unwrap();

    let read = ReadOptions::default().require_column(DEFAULT_CODE_COLUMN);
    let mut file = read_records(&input, &read).unwrap();
    translate(&mut file.records, &walk, options).unwrap();
    write_records(&output, &file.header, &file.records).unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("SAMPLE_ID\tONCOTREE_CODE"));
    lines
        .map(|l| l.split('\t').nth(1).unwrap_or("").to_string())
        .collect()
}

#[test]
fn backward_precursor_translation() {
    let dir = tempfile::tempdir().unwrap();
    let codes = run(
        dir.path(),
        "2017",
        "2016",
        &["LNET", "BRCA", "NA"],
        &TranslationOptions::default(),
    );
    assert_eq!(codes, ["PNET", "BRCA", "NA"]);
}

#[test]
fn forward_unknown_code_passes_through() {
    let dir = tempfile::tempdir().unwrap();
    let codes = run(
        dir.path(),
        "2016",
        "2017",
        &["PNET", "NOT_A_CODE", "BRCA"],
        &TranslationOptions::default(),
    );
    assert_eq!(codes, ["LNET", "NOT_A_CODE", "BRCA"]);
}

#[test]
fn forward_split_is_surfaced_or_auto_resolved() {
    let dir = tempfile::tempdir().unwrap();
    let codes = run(
        dir.path(),
        "2016",
        "2017",
        &["ALL"],
        &TranslationOptions::default(),
    );
    assert_eq!(codes, ["Choose from: BLL, TLL"]);

    let dir = tempfile::tempdir().unwrap();
    let auto = TranslationOptions {
        auto_mapping: true,
        ..TranslationOptions::default()
    };
    let codes = run(dir.path(), "2016", "2017", &["ALL"], &auto);
    assert_eq!(codes, ["LNM"]);
}

#[test]
fn direction_follows_release_dates() {
    let dir = tempfile::tempdir().unwrap();
    let provider = provider(dir.path());
    let data = load_run_data(&provider, "2017", "2016").unwrap();
    let walk = Crosswalk::from_catalog(&data.source, &data.target, &data.catalog).unwrap();
    assert_eq!(walk.direction(), TranslationDirection::Backward);

    let data = load_run_data(&provider, "2016", "2017").unwrap();
    let walk = Crosswalk::from_catalog(&data.source, &data.target, &data.catalog).unwrap();
    assert_eq!(walk.direction(), TranslationDirection::Forward);
}
