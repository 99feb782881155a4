use crate::renderers::table::TableBuilder;
use crate::types::ProbeReport;

/// Turns a finished report into text
pub trait ReportRenderer {
    fn render(&self, report: &ProbeReport) -> String;
}

/// Fixed-width terminal table, header first, rows in report order
#[derive(Debug, Clone, Default)]
pub struct TableRenderer;

impl TableRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ReportRenderer for TableRenderer {
    fn render(&self, report: &ProbeReport) -> String {
        let mut builder = TableBuilder::new();
        builder.headers(report.header());

        for outcome in &report.rows {
            builder.row(outcome.to_row());
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProbeOutcome;

    #[test]
    fn test_header_precedes_rows() {
        let report = ProbeReport::new(vec![
            ProbeOutcome::new("example.com", "200", "OK"),
            ProbeOutcome::new("expired.example", "tls_cert", "x509: unknown authority"),
        ]);

        let table = TableRenderer::new().render(&report);
        let header_at = table.find("Description").unwrap();
        let row_at = table.find("example.com").unwrap();

        assert!(header_at < row_at);
        assert!(table.contains("x509: unknown authority"));
    }

    #[test]
    fn test_every_row_is_rendered() {
        let rows: Vec<_> = (0..10)
            .map(|i| ProbeOutcome::new(format!("host{i}.example"), "404", "Not Found"))
            .collect();
        let table = TableRenderer::new().render(&ProbeReport::new(rows));

        for i in 0..10 {
            assert!(table.contains(&format!("host{i}.example")));
        }
    }
}
