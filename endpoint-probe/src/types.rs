/// Fixed header of every rendered report
pub const HEADER_ROW: [&str; 3] = ["Site", "Status code", "Description"];

/// Status line of a completed probe; the body is never retained
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    /// Final URL after the client's redirect policy was applied
    pub url: String,
}

impl ProbeResponse {
    /// Create a new probe response
    pub fn new<S: Into<String>>(status: u16, url: S) -> Self {
        Self {
            status,
            url: url.into(),
        }
    }
}

/// Classified result of probing a single URL
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProbeOutcome {
    /// Host label shown in the `Site` column
    pub host: String,
    /// Taxonomy token, see [`crate::classification::OutcomeKind`]
    pub kind: String,
    /// Short human-readable amplifier of `kind`
    pub detail: String,
}

impl ProbeOutcome {
    pub fn new<H, K, D>(host: H, kind: K, detail: D) -> Self
    where
        H: Into<String>,
        K: Into<String>,
        D: Into<String>,
    {
        Self {
            host: host.into(),
            kind: kind.into(),
            detail: detail.into(),
        }
    }

    /// The outcome as a `Site | Status code | Description` row
    pub fn to_row(&self) -> [String; 3] {
        [self.host.clone(), self.kind.clone(), self.detail.clone()]
    }
}

/// Header plus one row per probed URL, in completion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeReport {
    pub rows: Vec<ProbeOutcome>,
}

impl ProbeReport {
    pub fn new(rows: Vec<ProbeOutcome>) -> Self {
        Self { rows }
    }

    pub fn header(&self) -> [&'static str; 3] {
        HEADER_ROW
    }

    /// Number of rendered rows including the header
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }

    /// Rows sorted for order-insensitive comparisons
    pub fn sorted_rows(&self) -> Vec<ProbeOutcome> {
        let mut rows = self.rows.clone();
        rows.sort();
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_row_count_includes_header() {
        let report = ProbeReport::new(vec![
            ProbeOutcome::new("a.example", "200", "OK"),
            ProbeOutcome::new("b.example", "404", "Not Found"),
        ]);

        assert_eq!(report.row_count(), 3);
        assert_eq!(ProbeReport::default().row_count(), 1);
    }

    #[test]
    fn test_sorted_rows_is_order_insensitive() {
        let a = ProbeReport::new(vec![
            ProbeOutcome::new("b.example", "200", "OK"),
            ProbeOutcome::new("a.example", "200", "OK"),
        ]);
        let b = ProbeReport::new(vec![
            ProbeOutcome::new("a.example", "200", "OK"),
            ProbeOutcome::new("b.example", "200", "OK"),
        ]);

        assert_eq!(a.sorted_rows(), b.sorted_rows());
    }
}
