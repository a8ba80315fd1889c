//! Subcommand handlers.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use page_leptos::components::tab_page_href;
use page_leptos::types::{Category, ContentBlock};
use tracing::info;

use super::args::{Args, Command};
use crate::catalog::ContentCatalog;
use crate::composer::PageComposer;
use crate::config::PortalConfig;
use crate::host::TracingHost;

/// Run a parsed command line.
pub fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => PortalConfig::load_from_path(path),
        None => PortalConfig::load(&std::env::current_dir().context("current directory")?),
    };

    let custom = config
        .custom_catalog()
        .context("loading configured content catalog")?;
    let catalog = match &custom {
        Some(catalog) => catalog,
        None => ContentCatalog::builtin(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Tabs => list_tabs(catalog, &mut out),
        Command::Show { key, json } => {
            let category = catalog.get(&key)?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(category)?)?;
                Ok(())
            } else {
                write_category(category, &mut out)
            }
        }
        Command::Render { tab, out: path } => {
            let composer = composer_for(catalog, &config, tab.as_deref())?;
            let html = composer.render_html();
            match path {
                Some(path) => write_page(&path, &html),
                None => {
                    out.write_all(html.as_bytes())?;
                    Ok(())
                }
            }
        }
        Command::Site { out_dir } => write_site(catalog, &config, &out_dir),
        Command::Triggers { tab } => {
            let composer = composer_for(catalog, &config, tab.as_deref())?;
            for trigger in composer.triggers() {
                writeln!(out, "{}", trigger)?;
            }
            Ok(())
        }
        Command::Fire { trigger, tab } => {
            let composer = composer_for(catalog, &config, tab.as_deref())?.with_host(TracingHost);
            composer.fire(&trigger)?;
            writeln!(out, "fired {}", trigger)?;
            Ok(())
        }
    }
}

fn composer_for<'c>(
    catalog: &'c ContentCatalog,
    config: &PortalConfig,
    tab: Option<&str>,
) -> Result<PageComposer<'c>> {
    let mut composer = PageComposer::new(catalog, config.site.clone());
    if let Some(key) = tab {
        composer.select(key)?;
    }
    Ok(composer)
}

fn list_tabs(catalog: &ContentCatalog, out: &mut impl Write) -> Result<()> {
    let first = catalog.first();
    for category in catalog.list() {
        let marker = if category.key == first.key { "*" } else { " " };
        writeln!(out, "{} {:<12} {}", marker, category.key, category.label)?;
    }
    Ok(())
}

fn write_category(category: &Category, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{} [{}]", category.title, category.key)?;
    for block in &category.content {
        match block {
            ContentBlock::Heading { text, .. } => writeln!(out, "\n## {}", text)?,
            ContentBlock::Paragraph { text } => writeln!(out, "\n{}", text)?,
            ContentBlock::BulletList { items } => {
                writeln!(out)?;
                for item in items {
                    writeln!(out, "  - {}", item)?;
                }
            }
            ContentBlock::Highlights { items } => {
                writeln!(out)?;
                for item in items {
                    writeln!(out, "  * {}: {}", item.title, item.text)?;
                }
            }
            ContentBlock::CallToAction {
                label,
                trigger,
                target,
            } => match target {
                Some(target) => writeln!(out, "\n[{}] ({}) -> {}", label, trigger, target)?,
                None => writeln!(out, "\n[{}] ({})", label, trigger)?,
            },
        }
    }
    Ok(())
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), bytes = html.len(), "page written");
    Ok(())
}

fn write_site(catalog: &ContentCatalog, config: &PortalConfig, out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let mut composer = PageComposer::new(catalog, config.site.clone());
    write_page(&out_dir.join("index.html"), &composer.render_html())?;

    for key in catalog.keys() {
        composer.select(key)?;
        write_page(&out_dir.join(tab_page_href(key)), &composer.render_html())?;
    }
    Ok(())
}
