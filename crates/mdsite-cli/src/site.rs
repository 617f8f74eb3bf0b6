use anyhow::{Context, Result};
use mdsite_config::Config;
use mdsite_engine::{generate_page, io};
use relative_path::RelativePathBuf;
use std::fs;
use std::path::Path;

/// Builds the whole site described by `config`.
///
/// The output directory is replaced with the static assets first, then every
/// markdown file under the content directory is rendered through the template
/// to the matching `.html` path. Stops at the first page that fails.
///
/// Returns the generated pages, relative to the output directory.
pub fn build(config: &Config) -> Result<Vec<RelativePathBuf>> {
    prepare_output(&config.static_dir, &config.output_dir)?;

    let template = fs::read_to_string(&config.template_path)
        .with_context(|| format!("reading template {}", config.template_path.display()))?;

    let sources = io::scan_markdown_files(&config.content_dir)
        .with_context(|| format!("scanning {}", config.content_dir.display()))?;

    let mut pages = Vec::with_capacity(sources.len());
    for source in sources {
        let page = generate_one(config, &template, &source)?;
        pages.push(page);
    }
    Ok(pages)
}

fn prepare_output(static_dir: &Path, output_dir: &Path) -> Result<()> {
    if static_dir.is_dir() {
        return io::copy_static(static_dir, output_dir).with_context(|| {
            format!(
                "copying {} to {}",
                static_dir.display(),
                output_dir.display()
            )
        });
    }

    log::warn!(
        "Static directory {} not found, starting from an empty output",
        static_dir.display()
    );
    if output_dir.exists() {
        fs::remove_dir_all(output_dir)
            .with_context(|| format!("removing {}", output_dir.display()))?;
    }
    fs::create_dir_all(output_dir).with_context(|| format!("creating {}", output_dir.display()))
}

fn generate_one(
    config: &Config,
    template: &str,
    source: &RelativePathBuf,
) -> Result<RelativePathBuf> {
    let markdown = io::read_file(source, &config.content_dir)
        .with_context(|| format!("reading {source}"))?;
    let html = generate_page(&markdown, template, &config.basepath)
        .with_context(|| format!("generating page from {source}"))?;

    let page = io::page_path(source);
    io::write_file(&page, &config.output_dir, &html)
        .with_context(|| format!("writing {page}"))?;

    log::info!(
        "Generated {} -> {}",
        source.to_path(&config.content_dir).display(),
        page.to_path(&config.output_dir).display()
    );
    Ok(page)
}
