//! CONL product files
//!
//! A product file holds the full-form fields so a page can be regenerated
//! without retyping them. CONL is a post-modern configuration language similar
//! to YAML but simpler.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::types::FormInput;

/// Trait for types that can be written as CONL
pub trait ToConl {
    fn to_conl(&self) -> String;
}

/// Quote a value if CONL would otherwise misread it
fn escape_value(s: &str) -> String {
    // Leading/trailing spaces, comment or key separators, quotes and line breaks need the quoted form
    let needs_quotes = s.is_empty()
        || s.starts_with(char::is_whitespace)
        || s.ends_with(char::is_whitespace)
        || s.starts_with('"')
        || s.contains(|c: char| matches!(c, '\n' | '\r' | '\t' | ';' | '='));

    if needs_quotes {
        let mut quoted = String::with_capacity(s.len() + 2);
        quoted.push('"');
        for c in s.chars() {
            match c {
                '\\' => quoted.push_str("\\\\"),
                '"' => quoted.push_str("\\\""),
                '\n' => quoted.push_str("\\n"),
                '\r' => quoted.push_str("\\r"),
                '\t' => quoted.push_str("\\t"),
                c => quoted.push(c),
            }
        }
        quoted.push('"');
        quoted
    } else {
        s.to_string()
    }
}

/// Whether `s` reads back unchanged from an indented `"""` block.
///
/// The block's indent is taken from its first line, and leading or trailing line
/// breaks are not part of the value, so indented lines and values that begin or
/// end with a newline need the quoted form instead.
fn fits_multiline_block(s: &str) -> bool {
    s.contains('\n')
        && !s.starts_with('\n')
        && !s.ends_with('\n')
        && !s.contains(|c: char| c == '\r' || c == '\t')
        && s.lines().all(|line| !line.starts_with(' '))
}

/// Multiline value as an indented `"""` block
fn format_multiline(s: &str) -> String {
    let mut block = String::from("\"\"\"");
    for line in s.lines() {
        block.push('\n');
        if !line.is_empty() {
            block.push_str("  ");
            block.push_str(line);
        }
    }
    block
}

fn push_text(lines: &mut Vec<String>, key: &str, value: Option<&str>) {
    match value {
        Some(v) if fits_multiline_block(v) => lines.push(format!("{} = {}", key, format_multiline(v))),
        Some(v) => lines.push(format!("{} = {}", key, escape_value(v))),
        None => {}
    }
}

impl ToConl for FormInput {
    fn to_conl(&self) -> String {
        let mut lines = vec!["; detail-page product file".to_string()];

        push_text(&mut lines, "product_name", self.product_name.as_deref());
        push_text(&mut lines, "category", self.category.as_deref());
        if let Some(price) = self.price {
            lines.push(format!("price = {}", price));
        }
        push_text(&mut lines, "description", self.description.as_deref());
        push_text(&mut lines, "target_market", self.target_market.as_deref());
        push_text(&mut lines, "special_requirements", self.special_requirements.as_deref());
        push_text(&mut lines, "brand_color", self.brand_color.as_deref());

        lines.join("\n") + "\n"
    }
}

/// Read full-form fields from a CONL product file
pub fn read_product_file(path: &Path) -> Result<FormInput> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read product file: {}", path.display()))?;
    let form: FormInput = serde_conl::from_str(&content)
        .with_context(|| format!("Failed to parse product file: {}", path.display()))?;
    Ok(form)
}

/// Write full-form fields as a CONL product file
pub fn write_product_file(path: &Path, form: &FormInput) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, form.to_conl())
        .with_context(|| format!("Failed to write product file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::example_form;

    #[test]
    fn test_escape_value() {
        assert_eq!(escape_value("무선 이어폰"), "무선 이어폰");
        assert_eq!(escape_value("#2C3E50"), "#2C3E50");
        assert_eq!(escape_value(" leading"), "\" leading\"");
        assert_eq!(escape_value("a;b"), "\"a;b\"");
        assert_eq!(escape_value("x=y"), "\"x=y\"");
        assert_eq!(escape_value(""), "\"\"");
        assert_eq!(escape_value("  들여쓴 줄\n보통 줄"), "\"  들여쓴 줄\\n보통 줄\"");
    }

    #[test]
    fn test_form_to_conl() {
        let conl = example_form().to_conl();
        assert!(conl.starts_with("; detail-page product file\n"));
        assert!(conl.contains("product_name = 경영컨설팅은 끝났다\n"));
        assert!(conl.contains("category = 경영경제서적\n"));
        assert!(conl.contains("price = 20000\n"));
        assert!(conl.contains("brand_color = #2C3E50\n"));
    }

    #[test]
    fn test_unset_fields_are_skipped() {
        let form = FormInput {
            product_name: Some("이름".to_string()),
            ..Default::default()
        };
        assert_eq!(form.to_conl(), "; detail-page product file\nproduct_name = 이름\n");
    }

    #[test]
    fn test_multiline_description() {
        let form = FormInput {
            description: Some("첫 줄\n둘째 줄".to_string()),
            ..Default::default()
        };
        assert!(form.to_conl().contains("description = \"\"\"\n  첫 줄\n  둘째 줄\n"));
    }

    #[test]
    fn test_product_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("product.conl");

        write_product_file(&path, &example_form()).unwrap();
        let form = read_product_file(&path).unwrap();
        assert_eq!(form, example_form());
    }

    #[test]
    fn test_indented_and_trailing_newline_values_are_quoted() {
        let form = FormInput {
            description: Some("  들여쓴 줄\n보통 줄".to_string()),
            target_market: Some("a\nb\n".to_string()),
            ..Default::default()
        };
        let conl = form.to_conl();
        assert!(conl.contains("description = \"  들여쓴 줄\\n보통 줄\"\n"));
        assert!(conl.contains("target_market = \"a\\nb\\n\"\n"));
        assert!(!conl.contains("\"\"\""));
    }

    #[test]
    fn test_multiline_values_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("product.conl");
        let form = FormInput {
            product_name: Some("이름".to_string()),
            description: Some("  들여쓴 줄\n보통 줄".to_string()),
            target_market: Some("a\nb\n".to_string()),
            special_requirements: Some("첫 줄\n\n셋째 줄".to_string()),
            ..Default::default()
        };

        write_product_file(&path, &form).unwrap();
        assert_eq!(read_product_file(&path).unwrap(), form);
    }
}
