//! Static site generation.
//!
//! Writes every demo page as `<output>/<slug>/index.html` together with the
//! stylesheet, robots.txt and an index page redirecting to the first page.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::{
    config::Config,
    handlers::assets::{ROBOTS_TXT, STYLES_CSS},
    pages::{render_document, render_redirect, LinkMode, PageRequest, PAGES},
};

/// Generate the static site into `output_dir`, replacing its contents.
pub fn generate(output_dir: &Path, config: &Config) -> Result<()> {
    tracing::info!(output = %output_dir.display(), "Generating static site");

    if output_dir.exists() {
        fs::remove_dir_all(output_dir).with_context(|| {
            format!("failed to clean output directory {}", output_dir.display())
        })?;
    }

    let assets_dir = output_dir.join("assets");
    fs::create_dir_all(&assets_dir)
        .with_context(|| format!("failed to create {}", assets_dir.display()))?;

    write_file(&assets_dir.join("styles.css"), STYLES_CSS)?;
    write_file(&output_dir.join("robots.txt"), ROBOTS_TXT)?;

    for page in PAGES {
        tracing::info!(page = page.label, "Generating page");

        let content = page.render(&PageRequest { config, page: None })?;
        let html = render_document(page, content, LinkMode::Static)?;

        let page_dir = output_dir.join(page.slug());
        fs::create_dir_all(&page_dir)
            .with_context(|| format!("failed to create page directory {}", page_dir.display()))?;

        write_file(&page_dir.join("index.html"), &html)?;
    }

    let first = PAGES.first().context("no demo pages registered")?;
    let index = render_redirect(&format!("{}/", first.slug()))?;
    write_file(&output_dir.join("index.html"), &index)?;

    tracing::info!(pages = PAGES.len(), "Static site generated");

    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "Generated");
    Ok(())
}
