use smol_str::SmolStr;

/// The fixed design system, expressed as data so the stylesheet generator
/// has one source of truth for both color modes.
#[derive(Debug, Clone)]
pub struct Theme {
    pub light: ColorScheme,
    pub dark: ColorScheme,
    pub fonts: FontScheme,
    pub spacing: SpacingScheme,
}

#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub base: SmolStr,
    pub surface: SmolStr,
    pub text: SmolStr,
    pub muted: SmolStr,
    pub border: SmolStr,
    pub link: SmolStr,
    pub accent: SmolStr,
    pub code_bg: SmolStr,
}

#[derive(Debug, Clone)]
pub struct FontScheme {
    pub body: SmolStr,
    pub heading: SmolStr,
    pub monospace: SmolStr,
}

#[derive(Debug, Clone)]
pub struct SpacingScheme {
    pub base_font_size: SmolStr,
    pub line_height: SmolStr,
    pub content_width: SmolStr,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            light: ColorScheme::light(),
            dark: ColorScheme::dark(),
            fonts: FontScheme::default(),
            spacing: SpacingScheme::default(),
        }
    }
}

impl ColorScheme {
    pub fn light() -> Self {
        Self {
            base: SmolStr::new("#ffffff"),
            surface: SmolStr::new("#f6f5f2"),
            text: SmolStr::new("#1f1f1f"),
            muted: SmolStr::new("#6f6e69"),
            border: SmolStr::new("#e4e2dc"),
            link: SmolStr::new("#1d6fa5"),
            accent: SmolStr::new("#d97757"),
            code_bg: SmolStr::new("#f2f1ec"),
        }
    }

    pub fn dark() -> Self {
        Self {
            base: SmolStr::new("#191919"),
            surface: SmolStr::new("#232323"),
            text: SmolStr::new("#e8e6e1"),
            muted: SmolStr::new("#9c9a93"),
            border: SmolStr::new("#343434"),
            link: SmolStr::new("#6fb3dd"),
            accent: SmolStr::new("#e08b6d"),
            code_bg: SmolStr::new("#262626"),
        }
    }
}

impl Default for FontScheme {
    fn default() -> Self {
        Self {
            body: SmolStr::new(
                "system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
            ),
            heading: SmolStr::new(
                "system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
            ),
            monospace: SmolStr::new(
                "'SF Mono', 'Cascadia Code', 'Roboto Mono', Consolas, monospace",
            ),
        }
    }
}

impl Default for SpacingScheme {
    fn default() -> Self {
        Self {
            base_font_size: SmolStr::new("16px"),
            line_height: SmolStr::new("1.6"),
            content_width: SmolStr::new("46rem"),
        }
    }
}
