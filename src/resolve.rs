//! Turns raw form input or a single keyword into a complete `ProductAttributes`

use log::debug;

use crate::error::ResolveError;
use crate::types::{BrandColor, Category, FormInput, InputMode, ProductAttributes};

// Fallback copy for empty optional fields
pub const DEFAULT_DESCRIPTION: &str = "혁신적인 제품으로 당신의 일상을 바꿔보세요";
pub const DEFAULT_TARGET_MARKET: &str = "품질을 중시하는 스마트한 소비자";
pub const DEFAULT_SPECIAL_REQUIREMENTS: &str = "세련되고 모던한 디자인";

// Copy synthesized for keyword input
const KEYWORD_DESCRIPTION_PREFIX: &str = "최고의 품질과 디자인을 자랑하는";
const KEYWORD_TARGET_MARKET: &str = "품질을 중시하는 스마트 컨슈머";
const KEYWORD_SPECIAL_REQUIREMENTS: &str = "트렌디하고 세련된 디자인";

/// Base price when no keyword rule matches
pub const FALLBACK_PRICE: u64 = 99_000;

/// One keyword group: any term found in the keyword selects the category and base price
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub terms: &'static [&'static str],
    pub category: Category,
    pub base_price: u64,
}

impl KeywordRule {
    /// `keyword` must already be lowercased
    pub fn matches(&self, keyword: &str) -> bool {
        self.terms.iter().any(|term| keyword.contains(term))
    }
}

/// Checked in order, first match wins
pub static KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        terms: &["이어폰", "헤드폰", "earphone", "headphone"],
        category: Category::Electronics,
        base_price: 199_000,
    },
    KeywordRule {
        terms: &["옷", "패션", "clothes", "fashion"],
        category: Category::Fashion,
        base_price: 89_000,
    },
    KeywordRule {
        terms: &["화장품", "스킨", "cosmetic", "skincare"],
        category: Category::Beauty,
        base_price: 59_000,
    },
    KeywordRule {
        terms: &["책", "도서", "book"],
        category: Category::BusinessBooks,
        base_price: 20_000,
    },
];

/// Terms that raise the inferred price by half
pub static PREMIUM_MARKERS: &[&str] = &["프리미엄", "럭셔리", "premium", "luxury"];

/// Infer category and price from a keyword
pub fn classify_keyword(keyword: &str) -> (Category, u64) {
    let lowered = keyword.to_lowercase();

    let (category, base_price) = KEYWORD_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| (rule.category, rule.base_price))
        .unwrap_or((Category::Other, FALLBACK_PRICE));

    let premium = PREMIUM_MARKERS.iter().any(|marker| lowered.contains(marker));
    // x1.5, truncated
    let price = if premium { base_price * 3 / 2 } else { base_price };

    debug!(
        "classified keyword '{}' as {} at {} (premium: {})",
        keyword,
        category.name(),
        price,
        premium
    );
    (category, price)
}

/// Resolve one generation request into a complete attributes record
pub fn resolve_attributes(mode: InputMode) -> Result<ProductAttributes, ResolveError> {
    match mode {
        InputMode::Form(form) => resolve_form(&form),
        InputMode::Keyword(keyword) => resolve_keyword(&keyword),
    }
}

/// Full-form input: pass-through plus defaulting, no inference
pub fn resolve_form(form: &FormInput) -> Result<ProductAttributes, ResolveError> {
    let product_name = non_blank(form.product_name.as_deref())
        .ok_or_else(|| ResolveError::missing("product_name"))?;

    let category = form
        .category
        .as_deref()
        .map(Category::from_label)
        .unwrap_or_default();

    let brand_color = match non_blank(form.brand_color.as_deref()) {
        Some(color) => Some(BrandColor::parse(color)?),
        None => None,
    };

    Ok(ProductAttributes::from_parts(
        product_name.to_string(),
        category,
        form.price.unwrap_or(0),
        text_or(form.description.as_deref(), DEFAULT_DESCRIPTION),
        text_or(form.target_market.as_deref(), DEFAULT_TARGET_MARKET),
        text_or(form.special_requirements.as_deref(), DEFAULT_SPECIAL_REQUIREMENTS),
        brand_color,
    ))
}

/// Quick mode: everything but the name is inferred from the keyword
pub fn resolve_keyword(keyword: &str) -> Result<ProductAttributes, ResolveError> {
    let keyword = non_blank(Some(keyword)).ok_or_else(|| ResolveError::missing("keyword"))?;
    let (category, price) = classify_keyword(keyword);

    Ok(ProductAttributes::from_parts(
        keyword.to_string(),
        category,
        price,
        format!("{} {}", KEYWORD_DESCRIPTION_PREFIX, keyword),
        KEYWORD_TARGET_MARKET.to_string(),
        KEYWORD_SPECIAL_REQUIREMENTS.to_string(),
        None,
    ))
}

/// Keyword used when the example toggle is on in quick mode
pub fn example_keyword() -> &'static str {
    "AI 스마트 스피커 Pro"
}

/// Fixed record used when the example toggle is on in full-form mode
pub fn example_form() -> FormInput {
    FormInput {
        product_name: Some("경영컨설팅은 끝났다".to_string()),
        category: Some(Category::BusinessBooks.label().to_string()),
        price: Some(20_000),
        description: Some(
            "기존의 방식을 고집하면 안된다. 새로운 시대 AI를 잘 활용하여 생산성과 능률을 올려서 위기를 기회로 만들자"
                .to_string(),
        ),
        target_market: Some("예비창업자, 초기 중소상공인 사업자, 컨설턴트".to_string()),
        special_requirements: Some("세련되고 미니멀하게, 도시적이고 진취적".to_string()),
        brand_color: Some("#2C3E50".to_string()),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn text_or(value: Option<&str>, fallback: &str) -> String {
    non_blank(value).unwrap_or(fallback).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword(k: &str) -> ProductAttributes {
        resolve_attributes(InputMode::Keyword(k.to_string())).unwrap()
    }

    #[test]
    fn test_premium_earphones() {
        let attrs = keyword("프리미엄 무선 이어폰");
        assert_eq!(attrs.category(), Category::Electronics);
        assert_eq!(attrs.price(), 298_500);
        assert_eq!(attrs.product_name(), "프리미엄 무선 이어폰");
    }

    #[test]
    fn test_keyword_scenarios() {
        let attrs = keyword("편안한 스킨케어 크림");
        assert_eq!((attrs.category(), attrs.price()), (Category::Beauty, 59_000));

        let attrs = keyword("경영 전략 도서");
        assert_eq!((attrs.category(), attrs.price()), (Category::BusinessBooks, 20_000));

        let attrs = keyword("알 수 없는 제품");
        assert_eq!((attrs.category(), attrs.price()), (Category::Other, 99_000));
    }

    #[test]
    fn test_keyword_copy() {
        let attrs = keyword("  가을 패션 코트 ");
        assert_eq!(attrs.product_name(), "가을 패션 코트");
        assert_eq!(attrs.description(), "최고의 품질과 디자인을 자랑하는 가을 패션 코트");
        assert_eq!(attrs.target_market(), KEYWORD_TARGET_MARKET);
        assert_eq!(attrs.special_requirements(), KEYWORD_SPECIAL_REQUIREMENTS);
        assert!(attrs.brand_color().is_none());
    }

    #[test]
    fn test_rule_order_first_match_wins() {
        // Matches both the electronics and the book group; electronics is listed first
        assert_eq!(classify_keyword("헤드폰 사용 설명 도서").0, Category::Electronics);
        // Fashion before beauty
        assert_eq!(classify_keyword("패션 화장품 세트").0, Category::Fashion);
    }

    #[test]
    fn test_premium_marker_applies_to_fallback() {
        assert_eq!(classify_keyword("럭셔리 캔들"), (Category::Other, 148_500));
        assert_eq!(classify_keyword("Luxury Headphone"), (Category::Electronics, 298_500));
    }

    #[test]
    fn test_empty_keyword_is_rejected() {
        assert_eq!(
            resolve_attributes(InputMode::Keyword("   ".to_string())),
            Err(ResolveError::MissingRequiredField { field: "keyword" })
        );
    }

    #[test]
    fn test_form_missing_name() {
        let form = FormInput {
            product_name: Some(String::new()),
            price: Some(1000),
            ..Default::default()
        };
        assert_eq!(
            resolve_attributes(InputMode::Form(form)),
            Err(ResolveError::MissingRequiredField { field: "product_name" })
        );
        assert!(resolve_form(&FormInput::default()).is_err());
    }

    #[test]
    fn test_form_defaults() {
        let form = FormInput {
            product_name: Some("수제 잼".to_string()),
            category: Some("식품".to_string()),
            description: Some("  ".to_string()),
            ..Default::default()
        };
        let attrs = resolve_form(&form).unwrap();
        assert_eq!(attrs.category(), Category::Food);
        assert_eq!(attrs.price(), 0);
        assert_eq!(attrs.description(), DEFAULT_DESCRIPTION);
        assert_eq!(attrs.target_market(), DEFAULT_TARGET_MARKET);
        assert_eq!(attrs.special_requirements(), DEFAULT_SPECIAL_REQUIREMENTS);
        assert!(attrs.brand_color().is_none());
    }

    #[test]
    fn test_form_unknown_category_falls_back() {
        let form = FormInput {
            product_name: Some("무언가".to_string()),
            category: Some("가전".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_form(&form).unwrap().category(), Category::Other);
    }

    #[test]
    fn test_form_invalid_brand_color() {
        let form = FormInput {
            product_name: Some("무언가".to_string()),
            brand_color: Some("blue".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resolve_form(&form),
            Err(ResolveError::InvalidBrandColor("blue".to_string()))
        );
    }

    #[test]
    fn test_form_resolution_is_idempotent() {
        let first = resolve_attributes(InputMode::Form(example_form())).unwrap();
        let second = resolve_attributes(InputMode::Form(example_form())).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.category(), Category::BusinessBooks);
        assert_eq!(first.brand_color().map(|c| c.as_str()), Some("#2C3E50"));
    }

    #[test]
    fn test_example_keyword_has_no_rule() {
        assert_eq!(classify_keyword(example_keyword()), (Category::Other, FALLBACK_PRICE));
    }
}
