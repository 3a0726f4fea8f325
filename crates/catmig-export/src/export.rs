//! Export orchestration: map, serialize, write the artifact.

use std::path::{Path, PathBuf};

use catmig_scraper::SourceProduct;

use crate::csv_writer::write_csv;
use crate::error::ExportError;
use crate::mapper::{map_products, MappedCatalog};

/// Name of the CSV artifact written into the output directory.
pub const OUTPUT_FILENAME: &str = "shopline_to_shopify_products.csv";

/// Mapped catalog and its serialized CSV, not yet written anywhere.
#[derive(Debug)]
pub struct PreparedExport {
    pub catalog: MappedCatalog,
    pub csv: Vec<u8>,
}

/// Outcome of a completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub fetched_products: usize,
    pub exported_products: usize,
    pub skipped_variants: usize,
    pub skipped_untitled: usize,
    /// Data rows written, header excluded.
    pub rows_written: usize,
    /// `None` for a dry run.
    pub path: Option<PathBuf>,
}

impl ExportSummary {
    fn new(fetched_products: usize, catalog: &MappedCatalog, path: Option<PathBuf>) -> Self {
        Self {
            fetched_products,
            exported_products: catalog.exported_products,
            skipped_variants: catalog.skipped_variants.len(),
            skipped_untitled: catalog.skipped_untitled,
            rows_written: catalog.rows.len(),
            path,
        }
    }
}

/// Maps and serializes `products` without touching the filesystem.
///
/// # Errors
///
/// - [`ExportError::EmptyResult`] if `products` is empty.
/// - [`ExportError::Csv`] if serialization fails.
pub fn prepare_export(products: &[SourceProduct]) -> Result<PreparedExport, ExportError> {
    if products.is_empty() {
        return Err(ExportError::EmptyResult);
    }
    let catalog = map_products(products);
    let csv = write_csv(&catalog.rows)?;
    Ok(PreparedExport { catalog, csv })
}

/// Maps `products` and serializes them without writing a file.
///
/// # Errors
///
/// Same as [`prepare_export`].
pub fn dry_run_catalog(products: &[SourceProduct]) -> Result<ExportSummary, ExportError> {
    let prepared = prepare_export(products)?;
    Ok(ExportSummary::new(products.len(), &prepared.catalog, None))
}

/// Maps `products`, serializes them and writes [`OUTPUT_FILENAME`] into
/// `out_dir`, creating the directory if needed.
///
/// Nothing is written when `products` is empty. A catalog in which every
/// product was skipped still produces a header-only file.
///
/// # Errors
///
/// - [`ExportError::EmptyResult`] if `products` is empty.
/// - [`ExportError::Csv`] if serialization fails.
/// - [`ExportError::Io`] if the directory or file cannot be written.
pub fn export_catalog(
    products: &[SourceProduct],
    out_dir: &Path,
) -> Result<ExportSummary, ExportError> {
    let prepared = prepare_export(products)?;

    std::fs::create_dir_all(out_dir).map_err(|e| ExportError::Io {
        path: out_dir.to_path_buf(),
        source: e,
    })?;
    let path = out_dir.join(OUTPUT_FILENAME);
    std::fs::write(&path, &prepared.csv).map_err(|e| ExportError::Io {
        path: path.clone(),
        source: e,
    })?;

    tracing::info!(
        path = %path.display(),
        rows = prepared.catalog.rows.len(),
        "wrote CSV export"
    );

    Ok(ExportSummary::new(
        products.len(),
        &prepared.catalog,
        Some(path),
    ))
}
