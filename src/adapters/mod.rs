// Adapters layer: concrete record sources.

pub mod inline;

pub use inline::InlineSource;
