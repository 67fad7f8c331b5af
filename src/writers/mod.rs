pub mod chart_writer;
pub mod report_writer;

pub use chart_writer::ChartWriter;
pub use report_writer::ReportWriter;
