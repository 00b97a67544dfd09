pub mod pdf;
pub mod scanner;

pub use pdf::{PdfTextExtractor, TextExtractor};
pub use scanner::Scanner;
