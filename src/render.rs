//! HTML page rendering

use log::debug;

use crate::theme::theme_for;
use crate::types::ProductAttributes;

const CURRENCY_SYMBOL: &str = "₩";

/// Escape text for element content and double-quoted attribute values
pub fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// 1234567 -> "1,234,567"
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Price with currency prefix, e.g. "₩199,000"
pub fn format_price(price: u64) -> String {
    format!("{}{}", CURRENCY_SYMBOL, group_thousands(price))
}

/// `:root` block carrying the page colors
fn theme_variables(primary: &str, secondary: &str) -> String {
    format!(
        r#"
        :root {{
            --primary-color: {};
            --secondary-color: {};
            --text-dark: #2C3E50;
            --text-light: #7F8C8D;
            --bg-light: #F8F9FA;
        }}
"#,
        primary, secondary
    )
}

/// Layout rules shared by every theme
fn css_styles() -> &'static str {
    r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: 'Pretendard', -apple-system, BlinkMacSystemFont, sans-serif;
            color: var(--text-dark);
            line-height: 1.6;
        }

        .container {
            max-width: 1200px;
            margin: 0 auto;
            padding: 0 20px;
        }

        /* Hero */
        .hero {
            background: linear-gradient(135deg, var(--primary-color) 0%, var(--secondary-color) 100%);
            color: white;
            padding: 100px 0;
            text-align: center;
        }

        .hero h1 {
            font-size: 3em;
            margin-bottom: 20px;
            font-weight: 700;
        }

        .hero .price {
            font-size: 2.5em;
            font-weight: bold;
            margin: 20px 0;
        }

        .hero .description {
            font-size: 1.3em;
            margin-bottom: 40px;
            opacity: 0.9;
        }

        .cta-button {
            display: inline-block;
            background: white;
            color: var(--primary-color);
            padding: 15px 40px;
            border-radius: 5px;
            text-decoration: none;
            font-weight: 600;
            transition: transform 0.3s, box-shadow 0.3s;
        }

        .cta-button:hover {
            transform: translateY(-2px);
            box-shadow: 0 10px 20px rgba(0, 0, 0, 0.2);
        }

        /* Features */
        .features {
            padding: 80px 0;
            background: white;
        }

        .section-title {
            text-align: center;
            font-size: 2.5em;
            margin-bottom: 20px;
            color: var(--primary-color);
        }

        .features-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
            gap: 40px;
            margin-top: 60px;
        }

        .feature-card {
            text-align: center;
            padding: 40px;
            border-radius: 10px;
            box-shadow: 0 5px 20px rgba(0, 0, 0, 0.1);
            transition: transform 0.3s;
        }

        .feature-card:hover {
            transform: translateY(-5px);
        }

        .feature-icon {
            font-size: 3em;
            margin-bottom: 20px;
            color: var(--primary-color);
        }

        .feature-card h3 {
            font-size: 1.5em;
            margin-bottom: 15px;
            color: var(--text-dark);
        }

        /* Target audience */
        .target {
            padding: 80px 0;
            background: var(--bg-light);
            text-align: center;
        }

        .target-content {
            max-width: 800px;
            margin: 0 auto;
        }

        .target h2 {
            font-size: 2.5em;
            margin-bottom: 30px;
            color: var(--primary-color);
        }

        .target p {
            font-size: 1.2em;
            color: var(--text-light);
            margin-bottom: 40px;
        }

        /* Closing call to action */
        .cta-section {
            background: var(--primary-color);
            color: white;
            padding: 80px 0;
            text-align: center;
        }

        .cta-section h2 {
            font-size: 2.5em;
            margin-bottom: 20px;
        }

        .cta-section p {
            font-size: 1.2em;
            margin-bottom: 40px;
        }

        @media (max-width: 768px) {
            .hero h1 {
                font-size: 2em;
            }

            .features-grid {
                grid-template-columns: 1fr;
            }
        }
"#
}

/// Render a complete, self-contained HTML5 page for one product.
///
/// The brand color, when present, replaces the theme's primary color only; the
/// secondary color always comes from the category theme. Output depends on
/// nothing but `attributes`.
pub fn render_page(attributes: &ProductAttributes) -> String {
    let theme = theme_for(attributes.category());
    let primary = attributes
        .brand_color()
        .map(|c| c.as_str())
        .unwrap_or(theme.primary_color);

    debug!(
        "rendering '{}' with {} theme (primary {}, secondary {})",
        attributes.product_name(),
        theme.style_label,
        primary,
        theme.secondary_color
    );

    let name = html_escape(attributes.product_name());
    let description = html_escape(attributes.description());

    format!(
        r##"<!DOCTYPE html>
<html lang="ko">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{name} - 상세페이지</title>
    <meta name="description" content="{description}">
    <style>{variables}{styles}    </style>
</head>
<body data-style="{style}">
    <section class="hero">
        <div class="container">
            <h1>{name}</h1>
            <p class="price">{price}</p>
            <p class="description">{description}</p>
            <a href="#" class="cta-button">지금 구매하기</a>
        </div>
    </section>

    <section class="features">
        <div class="container">
            <h2 class="section-title">주요 특징</h2>
            <div class="features-grid">
                <div class="feature-card">
                    <div class="feature-icon">✨</div>
                    <h3>뛰어난 품질</h3>
                    <p>엄선된 소재와 정교한 기술로 제작되어 오래도록 사용할 수 있습니다</p>
                </div>
                <div class="feature-card">
                    <div class="feature-icon">🚀</div>
                    <h3>혁신적 기능</h3>
                    <p>시장을 선도하는 최신 기술이 적용되어 편리한 사용 경험을 제공합니다</p>
                </div>
                <div class="feature-card">
                    <div class="feature-icon">💎</div>
                    <h3>프리미엄 디자인</h3>
                    <p>{design}으로 어디서나 돋보입니다</p>
                </div>
            </div>
        </div>
    </section>

    <section class="target">
        <div class="container">
            <div class="target-content">
                <h2>이런 분들께 추천합니다</h2>
                <p>{target}</p>
                <a href="#" class="cta-button">자세히 알아보기</a>
            </div>
        </div>
    </section>

    <section class="cta-section">
        <div class="container">
            <h2>지금 바로 시작하세요</h2>
            <p>특별 할인 혜택을 놓치지 마세요</p>
            <a href="#" class="cta-button">구매하기</a>
        </div>
    </section>
</body>
</html>
"##,
        name = name,
        description = description,
        variables = theme_variables(primary, theme.secondary_color),
        styles = css_styles(),
        style = theme.style_label,
        price = format_price(attributes.price()),
        design = html_escape(attributes.special_requirements()),
        target = html_escape(attributes.target_market()),
    )
}
