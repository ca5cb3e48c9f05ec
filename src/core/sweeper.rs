use crate::core::{Classification, DocStore, FileFailure, FileOp, SweepReport};
use crate::domain::model::{DOC_EXTENSION, LOCALIZED_MARKER};
use crate::utils::error::{Result, SweepError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 遞迴列出 root 底下所有一般檔案的絕對路徑
///
/// Symlinks are followed. Any unreadable entry or link loop aborts the walk.
pub fn enumerate(root: &Path) -> Result<Vec<PathBuf>> {
    let root = if root.is_absolute() {
        root.to_path_buf()
    } else {
        std::env::current_dir()?.join(root)
    };

    let metadata = std::fs::metadata(&root).map_err(SweepError::IoError)?;
    if !metadata.is_dir() {
        return Err(SweepError::NotADirectory { root });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(&root).follow_links(true) {
        let entry = entry.map_err(|source| SweepError::TraversalError {
            root: root.clone(),
            source,
        })?;

        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    tracing::debug!("Enumerated {} files under {}", files.len(), root.display());
    Ok(files)
}

/// 依檔名分出中文版與非中文版的 mdx 檔案
pub fn classify<I>(paths: I) -> Classification
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut classification = Classification::default();

    for path in paths {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(DOC_EXTENSION) {
            continue;
        }

        if name.contains(LOCALIZED_MARKER) {
            classification.localized.push(path);
        } else {
            classification.canonical.push(path);
        }
    }

    classification
}

/// `guide-zh.mdx` -> `guide.mdx`, in the same directory.
pub fn promoted_path(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    if !name.contains(LOCALIZED_MARKER) {
        return None;
    }
    Some(path.with_file_name(name.replacen(LOCALIZED_MARKER, DOC_EXTENSION, 1)))
}

/// 刪除非中文版本的 mdx 檔案；單檔失敗只記錄，不中斷
pub fn purge<S: DocStore>(store: &S, canonical: &[PathBuf], report: &mut SweepReport) {
    for path in canonical {
        match store.remove_file(path) {
            Ok(()) => {
                tracing::info!("Deleted file: {}", path.display());
                report.deleted.push(path.clone());
            }
            Err(e) => {
                tracing::error!("Failed to delete {}: {}", path.display(), e);
                report.failures.push(FileFailure {
                    path: path.clone(),
                    op: FileOp::Delete,
                    message: e.to_string(),
                });
            }
        }
    }
}

/// 將中文版本重新命名為正式檔名；單檔失敗只記錄，不中斷
///
/// `classify` only yields marked names; an unmarked path from a direct
/// caller is recorded as a rename failure and skipped.
pub fn promote<S: DocStore>(store: &S, localized: &[PathBuf], report: &mut SweepReport) {
    for path in localized {
        let Some(target) = promoted_path(path) else {
            tracing::error!("Failed to rename {}: no localized marker in name", path.display());
            report.failures.push(FileFailure {
                path: path.clone(),
                op: FileOp::Rename,
                message: "no localized marker in file name".to_string(),
            });
            continue;
        };

        match store.rename(path, &target) {
            Ok(()) => {
                tracing::info!("Renamed file: {} -> {}", path.display(), target.display());
                report.renamed.push((path.clone(), target));
            }
            Err(e) => {
                tracing::error!("Failed to rename {}: {}", path.display(), e);
                report.failures.push(FileFailure {
                    path: path.clone(),
                    op: FileOp::Rename,
                    message: e.to_string(),
                });
            }
        }
    }
}
