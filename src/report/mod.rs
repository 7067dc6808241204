pub mod assembler;
pub mod writer;

pub use assembler::{ArticleRow, Report, ReportAssembler, SummaryRow};
pub use writer::{read_report, ReportWriter};
