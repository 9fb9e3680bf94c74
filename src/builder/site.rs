//! Static site generation.
//!
//! A build renders every markdown document under the docs root to
//! `{destination}{route}/index.html`, copies every other file through
//! verbatim, and emits the shared stylesheet, a `404.html`, a root
//! redirect, and a JSON manifest of the generated pages.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::Utc;
use log::{debug, error, info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::builder::sources::{collect_sources, posix_string};
use crate::config::SiteConfig;
use crate::docs::page::not_found_page;
use crate::docs::slug::{route_for_doc, route_slug};
use crate::docs::{self, DocStore};
use crate::layout;
use crate::markdown::links::DOCS_BASE;
use crate::utils::error::{BoxResult, DocshelfError};
use crate::utils::fs as site_fs;

/// Counters reported after a build.
#[derive(Debug, Default)]
pub struct BuildStats {
    pub pages: usize,
    pub assets: usize,
    pub duration: Duration,
}

#[derive(Debug, Serialize)]
struct Manifest {
    generated: String,
    pages: Vec<ManifestEntry>,
}

/// One generated page, as recorded in `manifest.json`.
#[derive(Debug, Serialize)]
struct ManifestEntry {
    route: String,
    title: String,
    lead: String,
    reading_minutes: usize,
}

struct PageJob {
    relative: String,
    route: String,
}

/// Build the whole site into the configured destination directory.
///
/// The destination is wiped first, so a build never leaves stale output
/// behind. Page failures are logged individually and surface as one
/// error after everything else has been attempted.
pub fn build_site(config: &SiteConfig, project_dir: &Path) -> BoxResult<BuildStats> {
    let started = Instant::now();

    let docs_root = config.docs_root(project_dir);
    if !site_fs::is_directory(&docs_root) {
        return Err(DocshelfError::Build(format!(
            "docs directory {} does not exist",
            docs_root.display()
        ))
        .into());
    }
    let destination = config.destination_dir(project_dir);

    info!("Building docs from {}", docs_root.display());
    info!("Output will be generated in {}", destination.display());

    site_fs::remove_directory(&destination)?;
    site_fs::create_directory(&destination)?;

    let sources = collect_sources(&docs_root, &config.exclude)?;
    let store = DocStore::new(docs_root.clone());
    let jobs = page_jobs(&sources.markdown);

    info!("Rendering {} pages...", jobs.len());
    let outcomes: Vec<BoxResult<ManifestEntry>> = jobs
        .par_iter()
        .map(|job| build_page(job, &store, config, &destination))
        .collect();

    let mut entries = Vec::with_capacity(outcomes.len());
    let mut failed = 0usize;
    for (job, outcome) in jobs.iter().zip(outcomes) {
        match outcome {
            Ok(entry) => entries.push(entry),
            Err(err) => {
                error!("Failed to build {}: {}", job.relative, err);
                failed += 1;
            }
        }
    }

    info!("Copying {} static files...", sources.assets.len());
    let asset_failures: usize = sources
        .assets
        .par_iter()
        .map(|relative| {
            let from = docs_root.join(relative);
            let to = destination.join("docs").join(relative);
            match site_fs::copy_file(&from, &to) {
                Ok(_) => 0usize,
                Err(err) => {
                    error!("Failed to copy {}: {}", posix_string(relative), err);
                    1
                }
            }
        })
        .sum();

    let not_found = not_found_page(config, &[]);
    site_fs::write_file(
        destination.join("404.html"),
        &layout::render_page(&not_found, config),
    )?;
    site_fs::write_file(destination.join("assets/docshelf.css"), layout::STYLESHEET)?;
    site_fs::write_file(destination.join("index.html"), &root_redirect_html())?;

    entries.sort_by(|a, b| a.route.cmp(&b.route));
    let manifest = Manifest {
        generated: Utc::now().to_rfc3339(),
        pages: entries,
    };
    site_fs::write_file(
        destination.join("manifest.json"),
        &serde_json::to_string_pretty(&manifest)?,
    )?;

    let errors = failed + asset_failures;
    if errors > 0 {
        return Err(DocshelfError::Build(format!("{} errors during build", errors)).into());
    }

    let stats = BuildStats {
        pages: jobs.len(),
        assets: sources.assets.len(),
        duration: started.elapsed(),
    };
    info!("Site built in {:.2?}", stats.duration);
    info!("Pages: {}, static files: {}", stats.pages, stats.assets);
    Ok(stats)
}

/// Map every markdown source to its route, rendering each route once.
/// `api.md` and `api/README.md` both claim `/docs/api`; the resolver
/// decides which content wins, exactly as it would when serving.
fn page_jobs(markdown: &[PathBuf]) -> Vec<PageJob> {
    let mut seen: HashMap<String, String> = HashMap::new();
    let mut jobs = Vec::new();

    for relative in markdown {
        let relative_str = posix_string(relative);
        let route = route_for_doc(&relative_str);
        match seen.get(&route) {
            Some(existing) => {
                warn!(
                    "{} and {} both map to {}; rendering that route once",
                    existing, relative_str, route
                );
            }
            None => {
                seen.insert(route.clone(), relative_str.clone());
                jobs.push(PageJob {
                    relative: relative_str,
                    route,
                });
            }
        }
    }

    jobs
}

fn build_page(
    job: &PageJob,
    store: &DocStore,
    config: &SiteConfig,
    destination: &Path,
) -> BoxResult<ManifestEntry> {
    let slug = route_slug(&job.route);
    let page = docs::assemble(store, config, &slug)?;
    let html = layout::render_page(&page, config);
    site_fs::write_file(output_path(destination, &job.route), &html)?;
    debug!("Rendered {} -> {}", job.relative, job.route);

    let title = page
        .breadcrumbs
        .last()
        .map(|crumb| crumb.label.clone())
        .unwrap_or_else(|| config.title.clone());
    Ok(ManifestEntry {
        route: job.route.clone(),
        title,
        lead: page.lead,
        reading_minutes: page.reading_minutes,
    })
}

fn output_path(destination: &Path, route: &str) -> PathBuf {
    destination
        .join(route.trim_start_matches('/'))
        .join("index.html")
}

fn root_redirect_html() -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\" />\n\
         <meta http-equiv=\"refresh\" content=\"0; url={0}/\" />\n<title>Redirecting</title>\n\
         </head>\n<body>\n<p>Continue to <a href=\"{0}\">the documentation</a>.</p>\n</body>\n</html>\n",
        DOCS_BASE
    )
}
