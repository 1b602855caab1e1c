use crate::analyzers::{analyze_tree, CSharpParser};
use crate::config::{Config, ParseFailurePolicy};
use crate::core::{LocReport, SyntaxTree};
use crate::errors::{Error, Result};
use crate::io::{OutputWriter, TextWriter};
use crate::metrics::LocAggregator;
use crate::workspace::{SourceDocument, Workspace};
use anyhow::Context;
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{debug, info, info_span, warn};

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub config: Config,
}

/// Run the analysis and print the report to stdout.
///
/// Nothing is printed unless the whole report was computed.
pub fn handle_analyze(config: AnalyzeConfig) -> anyhow::Result<()> {
    let report = analyze_path(&config.path, &config.config)
        .with_context(|| format!("Failed to analyze {}", config.path.display()))?;

    let stdout = std::io::stdout();
    let mut writer = TextWriter::new(stdout.lock());
    writer.write_report(&report)?;
    Ok(())
}

/// Load, parse, count and aggregate everything under `path`.
pub fn analyze_path(path: &std::path::Path, config: &Config) -> Result<LocReport> {
    let workspace = {
        let _span = info_span!("loading").entered();
        Workspace::open(path, config)?
    };

    let mut aggregator = LocAggregator::new(config.method_key);
    for project in workspace.projects() {
        let _span = info_span!("project", name = %project.name).entered();
        let trees = parse_documents(&project.documents, config)?;
        for tree in &trees {
            aggregator.add_classes(analyze_tree(tree, &project.path));
        }
        debug!(documents = trees.len(), "Project analyzed");
    }

    let report = aggregator.finish();
    info!(
        classes = report.classes.len(),
        methods = report.total_methods(),
        "Analysis complete"
    );
    Ok(report)
}

/// Parse every document, keeping input order whether or not rayon is used.
fn parse_documents(documents: &[SourceDocument], config: &Config) -> Result<Vec<SyntaxTree>> {
    let parsed: Vec<Result<SyntaxTree>> = if config.parallel {
        documents
            .par_iter()
            .map_init(CSharpParser::new, |parser, document| match parser {
                Ok(parser) => parser.parse(&document.text, &document.path),
                Err(e) => Err(Error::parse(&document.path, e.to_string())),
            })
            .collect()
    } else {
        let mut parser = CSharpParser::new()?;
        documents
            .iter()
            .map(|document| parser.parse(&document.text, &document.path))
            .collect()
    };

    let mut trees = Vec::with_capacity(parsed.len());
    for result in parsed {
        match result {
            Ok(tree) => trees.push(tree),
            Err(e @ Error::Parse { .. }) if config.parse_failure == ParseFailurePolicy::Skip => {
                warn!(error = %e, "Skipping document that failed to parse");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(trees)
}
