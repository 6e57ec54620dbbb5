//! Category theme table

use crate::types::Category;

/// Color pair and style label used to paint a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary_color: &'static str,
    pub secondary_color: &'static str,
    pub style_label: &'static str,
}

const OTHER_THEME: Theme = Theme {
    primary_color: "#9C27B0",
    secondary_color: "#7B1FA2",
    style_label: "creative",
};

static THEMES: [(Category, Theme); 6] = [
    (
        Category::Electronics,
        Theme {
            primary_color: "#2196F3",
            secondary_color: "#1976D2",
            style_label: "modern",
        },
    ),
    (
        Category::Fashion,
        Theme {
            primary_color: "#E91E63",
            secondary_color: "#C2185B",
            style_label: "elegant",
        },
    ),
    (
        Category::Beauty,
        Theme {
            primary_color: "#FF6B6B",
            secondary_color: "#FFA07A",
            style_label: "soft",
        },
    ),
    (
        Category::BusinessBooks,
        Theme {
            primary_color: "#2C3E50",
            secondary_color: "#3498DB",
            style_label: "professional",
        },
    ),
    (
        Category::Food,
        Theme {
            primary_color: "#4CAF50",
            secondary_color: "#388E3C",
            style_label: "fresh",
        },
    ),
    (Category::Other, OTHER_THEME),
];

/// Theme for a category. Never fails: anything missing from the table gets the `Other` theme.
pub fn theme_for(category: Category) -> &'static Theme {
    THEMES
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, theme)| theme)
        .unwrap_or(&OTHER_THEME)
}

/// All table entries in display order
pub fn themes() -> impl Iterator<Item = (Category, &'static Theme)> {
    THEMES.iter().map(|(category, theme)| (*category, theme))
}
