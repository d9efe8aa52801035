//! Markdown changelog parsing and HTML rendering.
//!
//! The pipeline is a chain of small pieces: the [`tokenizer`] splits raw
//! markdown into typed line tokens, the [`parser`] groups them into
//! [`Release`] records, and the [`html`] renderer projects those releases
//! into an HTML fragment spliced into a template between fixed markers.
//! [`description`] and [`tags`] derive summaries and category badges along
//! the way, and [`ChangelogService`] wires the whole thing together for
//! file-to-file generation, statistics and live preview content.

pub mod cache;
pub mod config;
pub mod description;
pub mod error;
pub mod html;
pub mod install;
pub mod parser;
pub mod service;
pub mod tags;
pub mod template;
pub mod tokenizer;
pub mod types;
pub mod version;

mod utils;

pub use cache::ParseCache;
pub use config::{ChangelogConfig, PackageMetadata};
pub use error::{ChangelogError, Result};
pub use html::{HtmlRenderer, RenderOptions};
pub use install::{InstallCommandSpec, ResolvedInstall};
pub use parser::ReleaseParser;
pub use service::{ChangelogService, ChangelogStats, GenerateReport};
pub use template::{MarkerTemplate, TemplateEngine, TemplateVars, END_MARKER, START_MARKER};
pub use tokenizer::{tokenize, Token, TokenKind};
pub use types::{ChangeItem, Release, Sections};
