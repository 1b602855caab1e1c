use crate::core::LocReport;
use std::io::Write;

pub trait OutputWriter {
    fn write_report(&mut self, report: &LocReport) -> anyhow::Result<()>;
}

/// Plain text report:
///
/// ```text
/// ClassName:TotalLOC
/// - MethodName:LOC
/// ```
pub struct TextWriter<W: Write> {
    writer: W,
}

impl<W: Write> TextWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputWriter for TextWriter<W> {
    fn write_report(&mut self, report: &LocReport) -> anyhow::Result<()> {
        for class in &report.classes {
            writeln!(self.writer, "{}:{}", report.class_label(class), class.total())?;
            for method in &class.methods {
                writeln!(self.writer, "- {}:{}", class.method_label(method), method.loc)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Render `report` as the text written to stdout
pub fn render_report(report: &LocReport) -> anyhow::Result<String> {
    let mut writer = TextWriter::new(Vec::new());
    writer.write_report(report)?;
    Ok(String::from_utf8(writer.into_inner())?)
}
