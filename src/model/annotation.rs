//! Annotation (blame) data model

use chrono::DateTime;

/// Blame information for a single source line.
///
/// `author_time == 0` marks an uncommitted (working-copy) line; such lines
/// never carry a color bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// 0-based source line index
    pub line_index: usize,
    /// Author name (empty for placeholder annotations)
    pub author: String,
    /// Author email, without the surrounding angle brackets
    pub author_mail: Option<String>,
    /// Author timestamp (epoch seconds; 0 = uncommitted)
    pub author_time: i64,
    /// Age bucket in `[1, N]`, assigned by the gradient mapper
    pub color_bucket: Option<u8>,
}

impl Annotation {
    /// Create an annotation without a bucket (assigned later by the gradient).
    pub fn new(
        line_index: usize,
        author: String,
        author_mail: Option<String>,
        author_time: i64,
    ) -> Self {
        Self {
            line_index,
            author,
            author_mail,
            author_time,
            color_bucket: None,
        }
    }

    /// A placeholder for a header block the blame report left incomplete.
    ///
    /// Keeps the annotation list aligned 1:1 with the source lines.
    pub fn placeholder(line_index: usize) -> Self {
        Self::new(line_index, String::new(), None, 0)
    }

    /// Whether this line belongs to a real commit.
    pub fn is_committed(&self) -> bool {
        self.author_time > 0
    }

    /// Date for display (`yy/mm/dd`, UTC). Empty for uncommitted lines.
    pub fn date_label(&self) -> String {
        if self.author_time <= 0 {
            return String::new();
        }
        DateTime::from_timestamp(self.author_time, 0)
            .map(|dt| dt.format("%y/%m/%d").to_string())
            .unwrap_or_default()
    }

    /// Get truncated author name (with mail if present) for display
    pub fn short_author(&self, max_len: usize) -> String {
        let name = match &self.author_mail {
            Some(mail) => format!("{} <{}>", self.author, mail),
            None => self.author.clone(),
        };
        if name.chars().count() <= max_len {
            name
        } else {
            name.chars().take(max_len.saturating_sub(1)).collect::<String>() + "…"
        }
    }

    /// Build the fixed-width sidebar cell for this line.
    ///
    /// Layout: left-aligned author (mail included when present), right-aligned
    /// `yy/mm/dd` date. Uncommitted lines show the author sentinel alone.
    pub fn display_label(&self, width: usize) -> String {
        let date = self.date_label();
        if date.is_empty() {
            let author = self.short_author(width);
            return format!("{:<width$}", author, width = width);
        }

        let date_width = date.chars().count();
        let author_budget = width.saturating_sub(date_width + 1);
        let author = self.short_author(author_budget);
        format!("{:<budget$} {}", author, date, budget = author_budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_label() {
        // 2021-03-14 00:00:00 UTC
        let line = Annotation::new(0, "alice".to_string(), None, 1_615_680_000);
        assert_eq!(line.date_label(), "21/03/14");
    }

    #[test]
    fn test_date_label_uncommitted() {
        let line = Annotation::new(0, "Not Committed Yet".to_string(), None, 0);
        assert_eq!(line.date_label(), "");
        assert!(!line.is_committed());
    }

    #[test]
    fn test_short_author() {
        let line = Annotation::new(0, "alexandra.smith".to_string(), None, 100);
        assert_eq!(line.short_author(8), "alexand…");
        assert_eq!(line.short_author(20), "alexandra.smith");
    }

    #[test]
    fn test_short_author_includes_mail() {
        let line = Annotation::new(
            0,
            "alice".to_string(),
            Some("alice@example.com".to_string()),
            100,
        );
        assert_eq!(line.short_author(40), "alice <alice@example.com>");
    }

    #[test]
    fn test_display_label_width() {
        let line = Annotation::new(0, "alice".to_string(), None, 1_615_680_000);
        let label = line.display_label(30);
        assert_eq!(label.chars().count(), 30);
        assert!(label.starts_with("alice"));
        assert!(label.ends_with("21/03/14"));
    }

    #[test]
    fn test_display_label_uncommitted_has_no_date() {
        let line = Annotation::new(3, "Not Committed Yet".to_string(), None, 0);
        let label = line.display_label(30);
        assert_eq!(label.chars().count(), 30);
        assert!(!label.contains('/'));
    }

    #[test]
    fn test_placeholder() {
        let line = Annotation::placeholder(7);
        assert_eq!(line.line_index, 7);
        assert_eq!(line.author, "");
        assert_eq!(line.author_time, 0);
        assert_eq!(line.color_bucket, None);
    }
}
