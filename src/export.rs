//! Export files offered after a successful generation

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use log::info;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::ProductAttributes;

/// Constant `template` value in the JSON record
pub const TEMPLATE_LABEL: &str = "AI Generated";
/// Characters shown by [`code_preview`]
pub const CODE_PREVIEW_CHARS: usize = 1000;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const HTML_SUFFIX: &str = "_상세페이지.html";
const JSON_SUFFIX: &str = "_info.json";
const FALLBACK_STEM: &str = "product";

/// JSON summary of one generation
#[derive(Debug, Clone, Serialize)]
pub struct ProjectInfo<'a> {
    pub generated_at: String,
    pub product_info: &'a ProductAttributes,
    pub template: &'static str,
}

impl<'a> ProjectInfo<'a> {
    pub fn new(product_info: &'a ProductAttributes, generated_at: NaiveDateTime) -> Self {
        Self {
            generated_at: generated_at.format(TIMESTAMP_FORMAT).to_string(),
            product_info,
            template: TEMPLATE_LABEL,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize project info")
    }
}

/// Where [`write_exports`] put the files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub html: PathBuf,
    pub json: PathBuf,
}

/// File-name-safe version of a product name
pub fn export_file_stem(product_name: &str) -> String {
    let replaced: String = product_name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let stem = replaced.trim().trim_matches('.');
    if stem.chars().all(|c| c == '_' || c.is_whitespace()) {
        FALLBACK_STEM.to_string()
    } else {
        stem.to_string()
    }
}

pub fn html_file_name(product_name: &str) -> String {
    format!("{}{}", export_file_stem(product_name), HTML_SUFFIX)
}

pub fn json_file_name(product_name: &str) -> String {
    format!("{}{}", export_file_stem(product_name), JSON_SUFFIX)
}

/// Write the rendered page and its JSON record into `dir`, creating it if needed
pub fn write_exports(
    dir: &Path,
    attributes: &ProductAttributes,
    html: &str,
    generated_at: NaiveDateTime,
) -> Result<ExportPaths> {
    // Nothing is written unless the JSON record serializes
    let json = ProjectInfo::new(attributes, generated_at).to_json()?;

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let json_path = dir.join(json_file_name(attributes.product_name()));
    fs::write(&json_path, json)
        .with_context(|| format!("Failed to write project info: {}", json_path.display()))?;
    info!("wrote {}", json_path.display());

    let html_path = dir.join(html_file_name(attributes.product_name()));
    fs::write(&html_path, html)
        .with_context(|| format!("Failed to write page: {}", html_path.display()))?;
    info!("wrote {}", html_path.display());

    Ok(ExportPaths {
        html: html_path,
        json: json_path,
    })
}

/// Leading part of the page source, for a quick look in the terminal
pub fn code_preview(html: &str) -> String {
    match html.char_indices().nth(CODE_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &html[..cut]),
        None => html.to_string(),
    }
}
