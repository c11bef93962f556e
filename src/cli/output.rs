pub use folio_core::format::OutputFormat;
