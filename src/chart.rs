/// Text bar chart of a position distribution.
///
/// One row per reachable site, right-most position first, with bars
/// scaled so the most likely site spans the full width:
///
/// ```text
///   Hadamard walk, t=3
///   Position n
///        3 │█████              0.125000
///        1 │█████████████████████████ 0.625000
///   ...
///          └──────────────────────────
///            Probability
/// ```
use crate::analytic::Distribution;

pub const DEFAULT_WIDTH: usize = 50;

pub struct BarChart {
    pub title: String,
    pub position_label: String,
    pub probability_label: String,
    /// Characters in the longest bar
    pub width: usize,
}

impl BarChart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            position_label: "Position n".to_string(),
            probability_label: "Probability".to_string(),
            width: DEFAULT_WIDTH,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    pub fn render(&self, dist: &Distribution) -> String {
        let mut out = String::new();
        out.push_str(&format!("  {}\n", self.title));
        out.push_str(&format!("  {}\n", self.position_label));

        let max_p = dist
            .reachable()
            .map(|(_, p)| p)
            .fold(0.0, f64::max)
            .max(f64::MIN_POSITIVE);

        for (n, p) in dist.reachable() {
            let bar_len = ((p / max_p) * self.width as f64).round() as usize;
            let bar_len = bar_len.min(self.width);
            let bar = "█".repeat(bar_len);
            let pad = " ".repeat(self.width - bar_len);
            out.push_str(&format!("  {n:>6} │{bar}{pad} {p:.6}\n"));
        }

        out.push_str(&format!("  {:>6} └{}\n", "", "─".repeat(self.width)));
        out.push_str(&format!("  {:>6}  {}\n", "", self.probability_label));
        out
    }
}
