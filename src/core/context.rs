use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::{
    config::{CONFIG_FILE_NAME, Config, load_config},
    document::{Document, LayoutNode, SceneNode, load_document},
};

use super::{
    analyze::{Analysis, analyze_with_diagnostics},
    collect::PostOrder,
    variables::{VariableTable, build_variable_table},
};

/// Inputs for one audit run. `None` fields fall back to the config file.
#[derive(Debug, Clone, Default)]
pub struct AuditOptions {
    /// Directory to search for the config file and resolve relative paths from.
    pub root: PathBuf,
    pub document: Option<PathBuf>,
    pub page: Option<String>,
    pub verbose: bool,
}

impl AuditOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }
}

/// Everything one audit run needs, loaded up front.
///
/// Configuration priority (highest to lowest):
/// 1. CLI arguments / tool parameters
/// 2. `.spacingauditrc.json`
/// 3. Built-in defaults
pub struct AuditContext {
    /// Merged configuration.
    pub config: Config,

    /// Whether `config` came from a file.
    pub config_from_file: bool,

    /// Directory relative paths are resolved against.
    pub root_dir: PathBuf,

    /// Absolute or root-relative path of the loaded snapshot.
    pub document_path: PathBuf,

    pub document: Document,

    pub verbose: bool,
}

/// Result of auditing one page.
pub struct AuditOutcome {
    /// Name of the audited page, `None` if the document has no pages.
    pub page_name: Option<String>,
    pub analysis: Analysis,
    /// Number of variables known to the resolver.
    pub variable_count: usize,
}

impl AuditContext {
    pub fn new(options: AuditOptions) -> Result<Self> {
        let AuditOptions {
            root,
            document,
            page,
            verbose,
        } = options;

        let config_result = load_config(&root)?;

        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;

        if let Some(document) = document {
            config.document = document.to_string_lossy().to_string();
        }
        if page.is_some() {
            config.page = page;
        }

        let document_path = resolve_path(&root, &config.document);
        let document = load_document(&document_path)?;

        Ok(Self {
            config,
            config_from_file: config_result.from_file,
            root_dir: root,
            document_path,
            document,
            verbose,
        })
    }

    /// Page selected by the config/options, or the document's current page.
    pub fn page(&self) -> Result<Option<&LayoutNode>> {
        match self.config.page.as_deref() {
            Some(selector) => self
                .document
                .select_page(Some(selector))
                .map(Some)
                .with_context(|| format!("Page not found in document: \"{}\"", selector)),
            None => Ok(self.document.select_page(None)),
        }
    }

    pub fn variable_table(&self) -> VariableTable {
        build_variable_table(&self.document)
    }

    /// Resolve variables, flatten the page and count spacing usages.
    pub fn run(&self) -> Result<AuditOutcome> {
        let table = self.variable_table();
        let page = self.page()?;

        let analysis = match page {
            Some(page) => analyze_with_diagnostics(PostOrder::new(page), &table),
            None => Analysis::default(),
        };

        Ok(AuditOutcome {
            page_name: page.map(|page| page.name().to_string()),
            analysis,
            variable_count: table.len(),
        })
    }

    /// Where the CSV export goes, resolved against the root directory.
    pub fn output_path(&self, output: Option<&Path>) -> PathBuf {
        match output {
            Some(path) => self.root_dir.join(path),
            None => resolve_path(&self.root_dir, &self.config.output),
        }
    }
}

fn resolve_path(root: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    let relative = path.strip_prefix(".").unwrap_or(path);
    root.join(relative)
}
