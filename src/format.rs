//! Display helpers shared by the pages.

use chrono::NaiveDate;

/// `2024-01-15` -> `1/15/2024`
pub fn short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Share of `value` in `total` as a whole percentage, clamped to 0..=100.
pub fn percent(value: f64, total: f64) -> u8 {
    if total <= 0.0 || !value.is_finite() {
        return 0;
    }
    (value / total * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Inline style for a progress bar fill
pub fn bar_width(pct: u8) -> String {
    format!("width: {}%", pct.min(100))
}

/// Split tags into the ones shown on a card and how many were left out.
pub fn visible_tags(tags: &[String], limit: usize) -> (&[String], usize) {
    let shown = &tags[..tags.len().min(limit)];
    (shown, tags.len() - shown.len())
}

/// `1200` -> `1,200`
pub fn thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(short_date(date), "1/5/2024");
    }

    #[test]
    fn test_percent_clamps() {
        assert_eq!(percent(2.4, 10.0), 24);
        assert_eq!(percent(156.0, 200.0), 78);
        assert_eq!(percent(250.0, 200.0), 100);
        assert_eq!(percent(1.0, 0.0), 0);
    }

    #[test]
    fn test_visible_tags() {
        let tags: Vec<String> = ["logo", "ai-generated", "brand"].iter().map(|s| s.to_string()).collect();
        let (shown, hidden) = visible_tags(&tags, 2);
        assert_eq!(shown.len(), 2);
        assert_eq!(hidden, 1);
        let (shown, hidden) = visible_tags(&tags, 5);
        assert_eq!(shown.len(), 3);
        assert_eq!(hidden, 0);
    }

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(7), "7");
        assert_eq!(thousands(1200), "1,200");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }
}
