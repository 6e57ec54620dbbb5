//! Product attribute types shared by the resolver, renderer and exporter

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ResolveError;

/// Product category (selects the page theme and drives keyword pricing)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Category {
    #[serde(rename = "전자제품")]
    Electronics,
    #[serde(rename = "패션")]
    Fashion,
    #[serde(rename = "뷰티")]
    Beauty,
    #[serde(rename = "경영경제서적")]
    BusinessBooks,
    #[serde(rename = "식품")]
    Food,
    #[default]
    #[serde(rename = "기타")]
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Electronics,
        Category::Fashion,
        Category::Beauty,
        Category::BusinessBooks,
        Category::Food,
        Category::Other,
    ];

    /// Korean display label, as shown in the category picker and the JSON export
    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "전자제품",
            Category::Fashion => "패션",
            Category::Beauty => "뷰티",
            Category::BusinessBooks => "경영경제서적",
            Category::Food => "식품",
            Category::Other => "기타",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::Beauty => "Beauty",
            Category::BusinessBooks => "BusinessBooks",
            Category::Food => "Food",
            Category::Other => "Other",
        }
    }

    /// Parse a Korean label or an English name. Anything unrecognized is `Other`.
    pub fn from_label(s: &str) -> Self {
        let s = s.trim();
        if let Some(category) = Self::ALL.iter().find(|c| c.label() == s) {
            return *category;
        }

        // "business-books", "Business Books", "business_books" all fold to the same key
        let folded: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match folded.as_str() {
            "electronics" => Category::Electronics,
            "fashion" => Category::Fashion,
            "beauty" => Category::Beauty,
            "businessbooks" | "books" => Category::BusinessBooks,
            "food" => Category::Food,
            _ => Category::Other,
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Category::from_label(&s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validated hex RGB brand color (`#RGB` or `#RRGGBB`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct BrandColor(String);

impl BrandColor {
    pub fn parse(value: &str) -> Result<Self, ResolveError> {
        let trimmed = value.trim();
        let valid = trimmed
            .strip_prefix('#')
            .map(|hex| (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()))
            .unwrap_or(false);

        if valid {
            Ok(BrandColor(trimmed.to_string()))
        } else {
            Err(ResolveError::InvalidBrandColor(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<BrandColor> for String {
    fn from(color: BrandColor) -> Self {
        color.0
    }
}

impl fmt::Display for BrandColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical, fully-defaulted product record. The only input to rendering.
///
/// Built by [`crate::resolve::resolve_attributes`]; fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductAttributes {
    product_name: String,
    category: Category,
    price: u64,
    description: String,
    target_market: String,
    special_requirements: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    brand_color: Option<BrandColor>,
}

impl ProductAttributes {
    pub(crate) fn from_parts(
        product_name: String,
        category: Category,
        price: u64,
        description: String,
        target_market: String,
        special_requirements: String,
        brand_color: Option<BrandColor>,
    ) -> Self {
        Self {
            product_name,
            category,
            price,
            description,
            target_market,
            special_requirements,
            brand_color,
        }
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Price in whole won
    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn target_market(&self) -> &str {
        &self.target_market
    }

    /// Design notes; rendered into the third feature card
    pub fn special_requirements(&self) -> &str {
        &self.special_requirements
    }

    pub fn brand_color(&self) -> Option<&BrandColor> {
        self.brand_color.as_ref()
    }
}

/// Raw full-form input, exactly as typed (or read from a product file)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormInput {
    pub product_name: Option<String>,
    pub category: Option<String>,
    pub price: Option<u64>,
    pub description: Option<String>,
    pub target_market: Option<String>,
    pub special_requirements: Option<String>,
    pub brand_color: Option<String>,
}

impl FormInput {
    /// Fields set in `overrides` replace the ones in `self`
    pub fn overlay(self, overrides: FormInput) -> FormInput {
        FormInput {
            product_name: overrides.product_name.or(self.product_name),
            category: overrides.category.or(self.category),
            price: overrides.price.or(self.price),
            description: overrides.description.or(self.description),
            target_market: overrides.target_market.or(self.target_market),
            special_requirements: overrides.special_requirements.or(self.special_requirements),
            brand_color: overrides.brand_color.or(self.brand_color),
        }
    }
}

/// How the attributes for one generation request are obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Every field given explicitly; no inference
    Form(FormInput),
    /// A single keyword; category, price and copy are inferred
    Keyword(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_label() {
        assert_eq!(Category::from_label("전자제품"), Category::Electronics);
        assert_eq!(Category::from_label(" 경영경제서적 "), Category::BusinessBooks);
        assert_eq!(Category::from_label("business-books"), Category::BusinessBooks);
        assert_eq!(Category::from_label("Food"), Category::Food);
        assert_eq!(Category::from_label("gadgets"), Category::Other);
        assert_eq!(Category::from_label(""), Category::Other);
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&Category::Beauty).unwrap();
        assert_eq!(json, "\"뷰티\"");
        let parsed: Category = serde_json::from_str("\"unknown\"").unwrap();
        assert_eq!(parsed, Category::Other);
    }

    #[test]
    fn test_brand_color_parse() {
        assert_eq!(BrandColor::parse("#2C3E50").unwrap().as_str(), "#2C3E50");
        assert_eq!(BrandColor::parse(" #fff ").unwrap().as_str(), "#fff");
        assert!(BrandColor::parse("2C3E50").is_err());
        assert!(BrandColor::parse("#2C3E5").is_err());
        assert!(BrandColor::parse("#GGGGGG").is_err());
        assert_eq!(
            BrandColor::parse("red;}"),
            Err(ResolveError::InvalidBrandColor("red;}".to_string()))
        );
    }

    #[test]
    fn test_brand_color_serializes_as_string() {
        let color = BrandColor::parse("#2C3E50").unwrap();
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#2C3E50\"");
    }

    #[test]
    fn test_form_input_overlay() {
        let base = FormInput {
            product_name: Some("기본".to_string()),
            price: Some(1000),
            ..Default::default()
        };
        let overrides = FormInput {
            price: Some(2000),
            ..Default::default()
        };
        let merged = base.overlay(overrides);
        assert_eq!(merged.product_name.as_deref(), Some("기본"));
        assert_eq!(merged.price, Some(2000));
    }
}
