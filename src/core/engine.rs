use crate::core::sweeper::{classify, enumerate, promote, purge};
use crate::core::{DocStore, SweepReport};
use crate::utils::error::Result;
use std::path::Path;

pub struct SweepEngine<S: DocStore> {
    store: S,
}

impl<S: DocStore> SweepEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Runs one full sweep. Only a failed enumeration is an `Err`; per-file
    /// delete and rename failures end up in the report.
    pub fn run(&self, root: &Path) -> Result<SweepReport> {
        tracing::info!("Sweeping docs under {}", root.display());

        let files = enumerate(root)?;
        let mut report = SweepReport {
            found: files.len(),
            ..SweepReport::default()
        };

        let classification = classify(files);
        tracing::info!(
            "Found {} localized and {} canonical mdx files",
            classification.localized.len(),
            classification.canonical.len()
        );
        tracing::info!("Localized files: {:?}", classification.localized);

        // 所有刪除都嘗試過後才開始重新命名
        purge(&self.store, &classification.canonical, &mut report);
        promote(&self.store, &classification.localized, &mut report);

        if report.is_clean() {
            tracing::info!(
                "Docs cleanup finished: {} deleted, {} renamed",
                report.deleted.len(),
                report.renamed.len()
            );
        } else {
            tracing::warn!(
                "Docs cleanup finished with {} failures: {} deleted, {} renamed",
                report.failures.len(),
                report.deleted.len(),
                report.renamed.len()
            );
        }

        Ok(report)
    }
}
