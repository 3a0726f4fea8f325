pub mod columns;
pub mod csv_writer;
pub mod error;
pub mod export;
pub mod mapper;
pub mod price;
pub mod slug;

pub use columns::{Column, ExportRow, COLUMN_COUNT};
pub use csv_writer::write_csv;
pub use error::ExportError;
pub use export::{
    dry_run_catalog, export_catalog, prepare_export, ExportSummary, PreparedExport, OUTPUT_FILENAME,
};
pub use mapper::{map_product, map_products, MappedCatalog, MappedProduct};
pub use price::{resolve_prices, PricePair};
pub use slug::slugify;
