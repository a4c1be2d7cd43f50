use crate::config::{DocsConfig, RouteConfig};
use crate::error::DocsError;
use crate::folder::DocsFolder;
use crate::models::{ComponentDoc, GenerationMetadata, GenerationReport, RouteReport};
use crate::naming::{camel_case_dash, component_name, md_file_name, NameMode};
use crate::resolver::{is_file, PathResolver};
use crate::scanner::ExportScanner;
use crate::stub::write_stub;
use crate::toc::{toc_section, TableOfContents};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

/// Runs the docs pipeline for every configured route
pub struct DocsGenerator {
    config: DocsConfig,
    folder: DocsFolder,
    scanner: ExportScanner,
    resolver: PathResolver,
}

impl DocsGenerator {
    pub fn new(config: DocsConfig) -> Result<Self, DocsError> {
        config.validate()?;
        Ok(Self {
            folder: DocsFolder::new(config.docs_root.clone()),
            scanner: ExportScanner::new(config.excluded_module.clone()),
            resolver: PathResolver::new(config.extension.clone()),
            config,
        })
    }

    pub fn config(&self) -> &DocsConfig {
        &self.config
    }

    /// Regenerate every route, then the table of contents
    pub fn generate(&self) -> Result<GenerationReport, DocsError> {
        let start = Instant::now();
        let mut toc = TableOfContents::new();
        let mut routes = Vec::with_capacity(self.config.routes.len());

        for route in &self.config.routes {
            let (report, section) = self.generate_route(route)?;
            toc.push_section(section);
            routes.push(report);
        }

        if !self.config.dry_run {
            let toc_path = &self.config.toc_path;
            fs::write(toc_path, toc.render()).map_err(|e| DocsError::io(toc_path, e))?;
            tracing::info!(file = %toc_path.display(), "wrote table of contents");
        }

        let stats = GenerationReport::calculate_stats(&routes, self.config.dry_run);
        let metadata = GenerationMetadata {
            duration_ms: start.elapsed().as_millis() as u64,
            dry_run: self.config.dry_run,
            ..Default::default()
        };

        Ok(GenerationReport {
            docs_root: self.config.docs_root.clone(),
            toc_path: self.config.toc_path.clone(),
            routes,
            stats,
            metadata,
        })
    }

    /// Table of contents for the current sources, without touching the docs tree
    pub fn render_toc(&self) -> Result<String, DocsError> {
        let mut toc = TableOfContents::new();
        for route in &self.config.routes {
            let resolved = self.resolve_route(route)?.1;
            toc.push_section(toc_section(&resolved, &route.route, &route.title));
        }
        Ok(toc.render())
    }

    /// clear -> scan -> resolve -> write stubs, returning the route's TOC section
    fn generate_route(&self, route: &RouteConfig) -> Result<(RouteReport, Vec<String>), DocsError> {
        tracing::info!(route = %route.route, "generating docs");

        let folder = if self.config.dry_run {
            self.folder.path(&route.route)
        } else {
            self.folder.clear(&route.route)?.0
        };

        let (exports, resolved) = self.resolve_route(route)?;

        let unresolved: Vec<PathBuf> = resolved.iter().filter(|p| !is_file(p)).cloned().collect();
        for path in &unresolved {
            tracing::warn!(route = %route.route, path = %path.display(), "unresolved export");
        }

        let mut grouped: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
        let mut skipped = Vec::new();
        for path in &resolved {
            match component_name(path) {
                Some(name) => grouped.entry(name).or_default().push(path.clone()),
                None => {
                    tracing::warn!(
                        route = %route.route,
                        path = %path.display(),
                        "no components/ segment, skipping"
                    );
                    skipped.push(path.clone());
                }
            }
        }

        let docs: Vec<ComponentDoc> = grouped
            .into_iter()
            .map(|(name, sources)| ComponentDoc {
                title: camel_case_dash(&name),
                name: format!("{}.md", name),
                sources,
            })
            .collect();

        if !self.config.dry_run {
            let in_docs_tree = NameMode::Absolute(&self.config.docs_root);
            for doc in &docs {
                let Some(target) = md_file_name(&doc.sources[0], &route.route, in_docs_tree) else {
                    continue;
                };
                write_stub(doc, &target, &route.base_path)?;
            }
        }

        let section = toc_section(&resolved, &route.route, &route.title);

        let report = RouteReport {
            route: route.route.clone(),
            title: route.title.clone(),
            folder,
            exports,
            docs,
            unresolved,
            skipped,
        };

        Ok((report, section))
    }

    /// Export count and resolved files for a route
    fn resolve_route(&self, route: &RouteConfig) -> Result<(usize, Vec<PathBuf>), DocsError> {
        let mut modules = Vec::new();
        for index in &route.index_files {
            modules.extend(self.scanner.scan(index)?);
        }
        let resolved = self.resolver.resolve_all(&modules, &route.base_path);
        Ok((modules.len(), resolved))
    }
}
