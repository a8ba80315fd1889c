//! CSS for the landing page.
//!
//! Warm orange content cards on a cream background, framed by a green header
//! and footer. Tab controls are links, so the stylesheet is the only thing
//! that distinguishes the active one.
//!
//! ```rust
//! use page_leptos::styles::PAGE_CSS;
//!
//! let themed = format!("{}\n.site-header {{ background: #14532d; }}", PAGE_CSS);
//! assert!(themed.contains(".tab-trigger.active"));
//! ```

/// Complete stylesheet, inlined into the document head.
pub const PAGE_CSS: &str = r#"
:root {
    --bg-cream: #fff7ed;
    --brand-green: #15803d;
    --orange-50: #fff7ed;
    --orange-100: #ffedd5;
    --orange-200: #fed7aa;
    --orange-600: #ea580c;
    --orange-700: #c2410c;
    --orange-800: #9a3412;
    --orange-900: #7c2d12;
    --container-max: 1120px;
    --radius: 8px;
    --font-sans: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    background: var(--bg-cream);
    color: var(--orange-900);
    line-height: 1.6;
}

.page {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 16px;
}

/* Header */
.site-header {
    background: var(--brand-green);
    color: #fff;
    padding: 16px 0;
}

.header-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.site-title {
    margin: 0;
    font-size: 1.5rem;
    font-weight: 700;
}

.site-nav ul {
    display: flex;
    gap: 16px;
    list-style: none;
    margin: 0;
    padding: 0;
}

.nav-link {
    color: #fff;
    text-decoration: none;
}

.nav-link:hover {
    text-decoration: underline;
}

.menu-button {
    display: none;
    background: transparent;
    color: #fff;
    border: 1px solid rgba(255, 255, 255, 0.6);
    border-radius: var(--radius);
    padding: 6px;
}

/* Main column */
.page-main {
    flex: 1;
    margin-top: 32px;
    width: 100%;
}

.hero {
    text-align: center;
    margin-bottom: 48px;
}

.hero-title {
    font-size: 1.875rem;
    color: var(--orange-800);
    margin: 0 0 16px;
}

.hero-tagline {
    font-size: 1.25rem;
    color: var(--orange-700);
    margin: 0;
}

/* Tabs */
.tabs {
    margin-bottom: 48px;
}

.tab-bar {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    background: var(--orange-100);
    border-radius: var(--radius);
    padding: 4px;
    gap: 4px;
}

.tab-trigger {
    text-align: center;
    padding: 8px 12px;
    border-radius: 6px;
    color: var(--orange-800);
    text-decoration: none;
    font-weight: 500;
}

.tab-trigger.active {
    background: #fff;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.08);
}

.tab-content {
    display: none;
    margin-top: 8px;
}

.tab-content.active {
    display: block;
}

/* Cards */
.card {
    background: #fff;
    border: 1px solid var(--orange-200);
    border-radius: var(--radius);
    overflow: hidden;
}

.card-header {
    background: var(--orange-100);
    padding: 16px 24px;
}

.card-title {
    margin: 0;
    color: var(--orange-800);
    font-size: 1.25rem;
}

.card-body {
    padding: 24px;
}

/* Content blocks */
.block-heading {
    display: flex;
    align-items: center;
    gap: 8px;
    margin-bottom: 16px;
}

.block-heading h3 {
    margin: 0;
    font-size: 1.125rem;
    color: var(--orange-700);
}

.block-paragraph {
    margin: 0 0 16px;
}

.block-list {
    list-style: disc inside;
    margin: 0 0 16px;
    padding: 0;
}

.highlight-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 16px;
    margin-bottom: 16px;
}

.highlight {
    display: flex;
    align-items: flex-start;
    gap: 8px;
}

.highlight h4 {
    margin: 0;
    color: var(--orange-700);
}

.highlight p {
    margin: 0;
}

.icon {
    display: inline-flex;
    flex-shrink: 0;
}

.icon[data-icon="alert-triangle"] { color: #ef4444; }
.icon[data-icon="bar-chart"],
.icon[data-icon="cloud-rain"] { color: #3b82f6; }
.icon[data-icon="thermometer"] { color: #ef4444; }
.icon[data-icon="trending-up"],
.icon[data-icon="sprout"] { color: #22c55e; }
.icon[data-icon="wind"] { color: #6b7280; }

.cta-button {
    margin-top: 16px;
    background: var(--orange-600);
    color: #fff;
    border: none;
    border-radius: var(--radius);
    padding: 10px 16px;
    font-weight: 500;
    cursor: pointer;
}

.cta-button:hover {
    background: var(--orange-700);
}

/* Feature summary */
.features {
    margin-bottom: 48px;
}

.section-title {
    font-size: 1.5rem;
    color: var(--orange-800);
    margin: 0 0 16px;
}

.features-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 24px;
}

/* Footer */
.site-footer {
    background: var(--brand-green);
    color: #fff;
    padding: 16px 0;
    margin-top: 48px;
    text-align: center;
}

@media (max-width: 768px) {
    .site-nav { display: none; }
    .menu-button { display: inline-flex; }
    .highlight-grid,
    .features-grid { grid-template-columns: 1fr; }
}
"#;

/// Content-Security-Policy for the rendered page: inline styles and data
/// images only, no scripts.
pub const CSP: &str = "default-src 'none'; style-src 'unsafe-inline'; img-src 'self' data:;";
