pub mod output;

pub use output::{render_report, OutputWriter, TextWriter};
