//! Orchestration of the parse → render pipeline.
//!
//! `ChangelogService` owns the configuration, the parser (with its cache)
//! and the renderer, and exposes the generate/stats/preview-content
//! operations. It never exits the process or writes to the terminal; all
//! failures surface as typed errors for the caller to report.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::{ChangelogConfig, PackageMetadata};
use crate::error::{ChangelogError, Result};
use crate::html::{HtmlRenderer, RenderOptions};
use crate::parser::ReleaseParser;
use crate::template::builtin_template;
use crate::types::Release;

const DEFAULT_TITLE: &str = "Changelog";
const DEFAULT_DESCRIPTION: &str = "Find all the new features, improvements and bug fixes here.";

/// Summary of one generate run
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub total_releases: usize,
    pub source: PathBuf,
    pub output: PathBuf,
    pub duration: Duration,
}

/// Aggregate statistics over a parsed changelog
#[derive(Debug, Clone, Serialize)]
pub struct ChangelogStats {
    pub total_releases: usize,
    pub latest_version: Option<String>,
    pub first_version: Option<String>,
    /// Entry count per section name, in first-seen order
    pub section_counts: IndexMap<String, usize>,
}

pub struct ChangelogService {
    config: ChangelogConfig,
    parser: ReleaseParser,
    renderer: HtmlRenderer,
    metadata: PackageMetadata,
}

impl ChangelogService {
    #[must_use]
    pub fn new(config: ChangelogConfig) -> Self {
        let metadata = PackageMetadata::discover(Path::new("."));
        Self::with_metadata(config, metadata)
    }

    #[must_use]
    pub fn with_metadata(config: ChangelogConfig, metadata: PackageMetadata) -> Self {
        Self {
            config,
            parser: ReleaseParser::new(),
            renderer: HtmlRenderer::new(),
            metadata,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ChangelogConfig {
        &self.config
    }

    /// Read the configured input, parse it, render HTML and write the
    /// configured output.
    ///
    /// # Errors
    /// Returns read, parse or template errors; a missing input file is a
    /// `Read` error carrying the underlying cause.
    pub fn generate(&mut self) -> Result<GenerateReport> {
        let start = Instant::now();

        let markdown = self.read_input()?;
        let releases = self.parser.parse(&markdown)?;
        let html = self.render_releases(&releases)?;

        if let Some(parent) = self.config.output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.config.output, &html)?;

        Ok(GenerateReport {
            total_releases: releases.len(),
            source: self.config.input.clone(),
            output: self.config.output.clone(),
            duration: start.elapsed(),
        })
    }

    /// Parse the configured input without writing anything.
    ///
    /// # Errors
    /// Returns read or parse errors.
    pub fn stats(&mut self) -> Result<ChangelogStats> {
        let markdown = self.read_input()?;
        let releases = self.parser.parse(&markdown)?;

        let mut section_counts: IndexMap<String, usize> = IndexMap::new();
        for release in &releases {
            for (section, items) in &release.sections {
                *section_counts.entry(section.clone()).or_default() += items.len();
            }
        }

        Ok(ChangelogStats {
            total_releases: releases.len(),
            latest_version: releases.first().map(|r| r.version.clone()),
            first_version: releases.last().map(|r| r.version.clone()),
            section_counts,
        })
    }

    /// Render the given markdown to a full HTML document. Preview entry
    /// point: the caller supplies content it read (or watched) itself.
    ///
    /// # Errors
    /// Returns parse or template errors.
    pub fn render_html(&mut self, markdown: &str) -> Result<String> {
        let releases = self.parser.parse(markdown)?;
        self.render_releases(&releases)
    }

    /// Parse the configured input into releases.
    ///
    /// # Errors
    /// Returns read or parse errors.
    pub fn parse_input(&mut self) -> Result<Vec<Release>> {
        let markdown = self.read_input()?;
        self.parser.parse(&markdown)
    }

    /// Drop the content-keyed parse cache
    pub fn clear_cache(&mut self) {
        self.parser.clear_cache();
    }

    fn read_input(&self) -> Result<String> {
        fs::read_to_string(&self.config.input).map_err(|err| {
            ChangelogError::Read(err)
                .with_context(format!("reading {}", self.config.input.display()))
        })
    }

    fn render_releases(&self, releases: &[Release]) -> Result<String> {
        let template = builtin_template(&self.config.template)?;
        self.renderer.render(releases, template, &self.render_options())
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            title: self
                .config
                .title
                .clone()
                .or_else(|| self.metadata.name.clone())
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            author: self
                .config
                .author
                .clone()
                .or_else(|| self.metadata.author.clone())
                .unwrap_or_default(),
            description: self
                .config
                .description
                .clone()
                .or_else(|| self.metadata.description.clone())
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            install_command: self.config.install_command.clone(),
        }
    }
}
