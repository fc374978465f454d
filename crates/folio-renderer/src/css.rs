//! Stylesheet generation for the fixed design system.
//!
//! One big template over [`Theme`], emitted inline into every document.
//! Dark mode applies either from the OS preference or from the explicit
//! `data-theme` attribute the theme toggle sets.

use crate::theme::{ColorScheme, Theme};

fn color_variables(colors: &ColorScheme) -> String {
    format!(
        "    --color-base: {};\n    --color-surface: {};\n    --color-text: {};\n    --color-muted: {};\n    --color-border: {};\n    --color-link: {};\n    --color-accent: {};\n    --color-code-bg: {};",
        colors.base,
        colors.surface,
        colors.text,
        colors.muted,
        colors.border,
        colors.link,
        colors.accent,
        colors.code_bg,
    )
}

pub fn generate_base_css(theme: &Theme) -> String {
    let light = color_variables(&theme.light);
    let dark = color_variables(&theme.dark);
    let fonts = &theme.fonts;
    let spacing = &theme.spacing;

    format!(
        r#"/* reset */
*, *::before, *::after {{
    box-sizing: border-box;
    margin: 0;
    padding: 0;
}}

/* variables - light mode (default) */
:root {{
{light}
    --font-body: {body};
    --font-heading: {heading};
    --font-mono: {mono};
    --spacing-base: {base_font};
    --spacing-line-height: {line_height};
    --content-width: {content_width};
}}

:root[data-theme="dark"] {{
{dark}
}}

@media (prefers-color-scheme: dark) {{
    :root:not([data-theme="light"]) {{
{dark}
    }}
}}

/* base */
html {{
    font-size: var(--spacing-base);
    line-height: var(--spacing-line-height);
}}

body {{
    font-family: var(--font-body);
    color: var(--color-text);
    background-color: var(--color-base);
    word-wrap: break-word;
    overflow-wrap: break-word;
}}

a {{
    color: var(--color-link);
    text-decoration: none;
}}

a:hover {{
    text-decoration: underline;
}}

img {{
    max-width: 100%;
}}

/* page body */
.page-content {{
    max-width: var(--content-width);
    margin: 0 auto;
    padding: 0 2rem 4rem;
}}

h1, h2, h3 {{
    font-family: var(--font-heading);
    line-height: 1.25;
    margin-top: 2rem;
    margin-bottom: 0.75rem;
}}

h1 {{ font-size: 2.25rem; }}
h2 {{ font-size: 1.5rem; }}
h3 {{ font-size: 1.2rem; }}

p {{
    margin-bottom: 1rem;
}}

hr {{
    border: none;
    border-top: 1px solid var(--color-border);
    margin: 2rem 0;
}}

ul, ol {{
    margin: 0 0 1rem 1.5rem;
}}

li {{
    margin-bottom: 0.35rem;
}}

code {{
    font-family: var(--font-mono);
    font-size: 0.875em;
    background: var(--color-code-bg);
    border-radius: 4px;
    padding: 0.15em 0.35em;
}}

/* block cover + icon */
.block-cover {{
    display: block;
    width: 100%;
    border-radius: 8px;
    object-fit: cover;
    margin-bottom: 1.5rem;
}}

.block-icon {{
    font-size: 3rem;
    line-height: 1;
    margin-bottom: 1rem;
}}

.block-icon-image {{
    width: 3.5rem;
    height: 3.5rem;
    border-radius: 50%;
    object-fit: cover;
}}

/* callout */
.callout {{
    display: flex;
    gap: 0.75rem;
    background: var(--color-surface);
    border: 1px solid var(--color-border);
    border-radius: 8px;
    padding: 1rem 1.25rem;
    margin-bottom: 1rem;
}}

.callout-icon {{
    font-size: 1.25rem;
    line-height: 1.4;
}}

.callout-content > :last-child {{
    margin-bottom: 0;
}}

/* quote */
blockquote {{
    border-left: 3px solid var(--color-border);
    padding-left: 1rem;
    margin: 0 0 1rem;
    color: var(--color-muted);
}}

blockquote cite {{
    display: block;
    margin-top: 0.5rem;
    font-style: normal;
    font-size: 0.875rem;
}}

/* columns */
.columns {{
    display: flex;
    gap: 2rem;
    margin-bottom: 1rem;
}}

.columns .column {{
    flex: 1 1 0;
    min-width: 0;
}}

.three-columns {{
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
    margin-bottom: 1rem;
}}

@media (max-width: 640px) {{
    .columns {{
        flex-direction: column;
    }}
    .three-columns {{
        grid-template-columns: 1fr;
    }}
}}

/* toggles */
.toggle {{
    border: 1px solid var(--color-border);
    border-radius: 8px;
    padding: 0.6rem 1rem;
    margin-bottom: 0.75rem;
}}

.toggle summary {{
    cursor: pointer;
    font-weight: 600;
}}

.toggle-content {{
    padding-top: 0.75rem;
}}

.numbered-toggle summary {{
    list-style: none;
    display: flex;
    align-items: center;
    gap: 0.6rem;
}}

.numbered-toggle summary::-webkit-details-marker {{
    display: none;
}}

.toggle-number {{
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 1.6rem;
    height: 1.6rem;
    border-radius: 50%;
    background: var(--color-accent);
    color: var(--color-base);
    font-size: 0.8rem;
    font-weight: 700;
}}

/* buttons + links */
.button {{
    display: inline-block;
    border-radius: 6px;
    padding: 0.5rem 1.1rem;
    font-weight: 600;
    font-size: 0.9rem;
}}

.button:hover {{
    text-decoration: none;
    filter: brightness(1.05);
}}

.button-primary {{
    background: var(--color-accent);
    color: #ffffff;
}}

.button-secondary {{
    background: var(--color-surface);
    color: var(--color-text);
    border: 1px solid var(--color-border);
}}

.button-outline {{
    background: transparent;
    color: var(--color-accent);
    border: 1px solid var(--color-accent);
}}

.block-link {{
    margin-bottom: 1rem;
    font-weight: 500;
}}

.text-link {{
    text-decoration: underline;
    text-decoration-color: var(--color-border);
    text-underline-offset: 2px;
}}

/* code blocks */
.code-block {{
    background: var(--color-code-bg);
    border: 1px solid var(--color-border);
    border-radius: 8px;
    padding: 1rem;
    overflow-x: auto;
    margin-bottom: 1rem;
}}

.code-block code {{
    background: none;
    padding: 0;
    font-size: 0.875rem;
}}

/* images */
.block-image {{
    margin-bottom: 1rem;
}}

.block-image img {{
    border-radius: 8px;
}}

.block-image figcaption {{
    margin-top: 0.4rem;
    font-size: 0.875rem;
    color: var(--color-muted);
}}

/* gallery */
.gallery {{
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr));
    gap: 1rem;
    margin-bottom: 1rem;
}}

.gallery-card {{
    border: 1px solid var(--color-border);
    border-radius: 8px;
    overflow: hidden;
    background: var(--color-surface);
}}

.gallery-card-clickable {{
    cursor: pointer;
}}

.gallery-card-clickable:hover {{
    border-color: var(--color-muted);
}}

.gallery-card-cover {{
    width: 100%;
    height: 8rem;
    object-fit: cover;
    display: block;
}}

.gallery-card-body {{
    padding: 0.75rem 1rem 1rem;
}}

.gallery-card-title {{
    font-weight: 600;
    margin-bottom: 0.25rem;
}}

.gallery-card-subtitle {{
    font-size: 0.8rem;
    color: var(--color-muted);
    margin-bottom: 0.4rem;
}}

.gallery-card-description {{
    font-size: 0.875rem;
    color: var(--color-muted);
}}

/* toc */
.toc {{
    background: var(--color-surface);
    border: 1px solid var(--color-border);
    border-radius: 8px;
    padding: 1rem 1.25rem;
    margin-bottom: 1.5rem;
}}

.toc-title {{
    font-weight: 600;
    margin-bottom: 0.5rem;
}}

.toc nav a {{
    display: block;
    padding: 0.15rem 0;
    color: var(--color-muted);
}}

.toc nav a:hover {{
    color: var(--color-link);
}}

/* misc */
.centered {{
    text-align: center;
}}

.back-link {{
    display: block;
    max-width: var(--content-width);
    margin: 0 auto 3rem;
    padding: 0 2rem;
    color: var(--color-muted);
}}

/* post pages */
.post-meta {{
    color: var(--color-muted);
    font-size: 0.875rem;
    margin-bottom: 2rem;
}}

.post-content pre {{
    background: var(--color-code-bg);
    border: 1px solid var(--color-border);
    border-radius: 8px;
    padding: 1rem;
    overflow-x: auto;
    margin-bottom: 1rem;
}}

.post-content pre code {{
    background: none;
    padding: 0;
}}

/* blog index */
.post-list {{
    display: flex;
    flex-direction: column;
    gap: 1rem;
}}

.post-card {{
    display: flex;
    gap: 1rem;
    border: 1px solid var(--color-border);
    border-radius: 8px;
    overflow: hidden;
    background: var(--color-surface);
    color: var(--color-text);
}}

.post-card:hover {{
    border-color: var(--color-muted);
    text-decoration: none;
}}

.post-card-cover {{
    width: 9rem;
    object-fit: cover;
}}

.post-card-body {{
    padding: 0.9rem 1.1rem;
}}

.post-card-title {{
    font-weight: 600;
    margin-bottom: 0.3rem;
}}

.post-card-excerpt {{
    font-size: 0.9rem;
    color: var(--color-muted);
    margin-bottom: 0.4rem;
}}

.post-card-date {{
    font-size: 0.8rem;
    color: var(--color-muted);
}}
"#,
        light = light,
        dark = dark,
        body = fonts.body,
        heading = fonts.heading,
        mono = fonts.monospace,
        base_font = spacing.base_font_size,
        line_height = spacing.line_height,
        content_width = spacing.content_width,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_carries_both_modes() {
        let css = generate_base_css(&Theme::default());
        assert!(css.contains(":root[data-theme=\"dark\"]"));
        assert!(css.contains("prefers-color-scheme: dark"));
        assert!(css.contains("--color-accent"));
    }
}
