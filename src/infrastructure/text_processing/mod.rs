mod pdf_extractor;

pub use pdf_extractor::PdfTextExtractor;
