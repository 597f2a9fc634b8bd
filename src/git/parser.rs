//! Blame report parser (`git blame --line-porcelain`)
//!
//! Parses the per-line porcelain header format into one [`Annotation`] per
//! source line. The parser never fails: malformed header blocks degrade to
//! placeholder annotations so the output always stays aligned 1:1 with the
//! annotated file's lines.

use regex::Regex;
use std::sync::LazyLock;

use super::constants::special;
use crate::model::Annotation;

/// Regex for the porcelain header-block introducer
/// Format: `<sha> <original-line> <final-line>[ <group-size>]`
/// Example: `72f262132c9d5288dcbd2af603a9e481e8958b9e 1 1 3`
static BLAME_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9a-f]{40}) (\d+) (\d+)( \d+)?$").expect("Invalid blame header regex")
});

/// Transient accumulator for one porcelain header block
#[derive(Debug, Default)]
struct HeaderBlock {
    /// Block introduced by the all-zero sha (working-copy line)
    uncommitted: bool,
    author: Option<String>,
    author_mail: Option<String>,
    author_time: Option<i64>,
}

impl HeaderBlock {
    /// Both mandatory fields seen; the block can be emitted.
    fn is_ready(&self) -> bool {
        self.author.is_some() && self.author_time.is_some()
    }

    fn into_annotation(self, line_index: usize) -> Annotation {
        // The wall-clock time git reports for uncommitted lines is discarded:
        // author_time == 0 is the single uncommitted signal downstream.
        let author_time = if self.uncommitted {
            0
        } else {
            self.author_time.unwrap_or(0)
        };
        let author_mail = if self.uncommitted {
            None
        } else {
            self.author_mail
        };
        Annotation::new(
            line_index,
            self.author.unwrap_or_default(),
            author_mail,
            author_time,
        )
    }
}

/// Parser for git blame output
pub struct Parser;

impl Parser {
    /// Parse a full `git blame --line-porcelain` report into annotations.
    ///
    /// One annotation is produced per header block, in report order. A block
    /// abandoned without both `author` and `author-time` (truncated output,
    /// foreign porcelain dialects) yields [`Annotation::placeholder`] rather
    /// than disappearing, so later lines keep their positions.
    pub fn parse_blame(output: &str) -> Vec<Annotation> {
        let mut annotations: Vec<Annotation> = Vec::new();
        let mut current: Option<HeaderBlock> = None;

        for line in output.lines() {
            if let Some(caps) = BLAME_HEADER_REGEX.captures(line) {
                // A fresh introducer while a block is still pending means the
                // previous block never completed.
                if current.take().is_some() {
                    annotations.push(Annotation::placeholder(annotations.len()));
                }
                let sha = caps.get(1).map_or("", |m| m.as_str());
                current = Some(HeaderBlock {
                    uncommitted: sha == special::UNCOMMITTED_SHA,
                    ..HeaderBlock::default()
                });
                continue;
            }

            let Some(block) = current.as_mut() else {
                continue;
            };

            // TAB-prefixed lines carry the source content; the sidebar does
            // not need it.
            if line.starts_with('\t') {
                continue;
            }

            if let Some(author) = line.strip_prefix("author ") {
                block.author = Some(author.trim().to_string());
            } else if let Some(mail) = line.strip_prefix("author-mail ") {
                block.author_mail = Some(
                    mail.trim()
                        .trim_start_matches('<')
                        .trim_end_matches('>')
                        .to_string(),
                );
            } else if let Some(time) = line.strip_prefix("author-time ") {
                block.author_time = time.trim().parse().ok();
            }

            if current.as_ref().is_some_and(HeaderBlock::is_ready)
                && let Some(block) = current.take()
            {
                annotations.push(block.into_annotation(annotations.len()));
            }
        }

        // Truncated final block
        if current.is_some() {
            annotations.push(Annotation::placeholder(annotations.len()));
        }

        annotations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build one well-formed porcelain block
    fn block(sha: &str, line: usize, author: &str, mail: &str, time: i64, content: &str) -> String {
        format!(
            "{sha} {line} {line} 1\n\
             author {author}\n\
             author-mail <{mail}>\n\
             author-time {time}\n\
             author-tz +0000\n\
             committer {author}\n\
             committer-mail <{mail}>\n\
             committer-time {time}\n\
             committer-tz +0000\n\
             summary test commit\n\
             filename demo.txt\n\
             \t{content}\n"
        )
    }

    const SHA_A: &str = "1111111111111111111111111111111111111111";
    const SHA_B: &str = "2222222222222222222222222222222222222222";

    #[test]
    fn test_parse_well_formed_report() {
        let report = format!(
            "{}{}{}",
            block(SHA_A, 1, "alice", "alice@example.com", 100, "fn main() {"),
            block(SHA_B, 2, "bob", "bob@example.com", 200, "    let x = 1;"),
            block(SHA_A, 3, "alice", "alice@example.com", 100, "}"),
        );

        let annotations = Parser::parse_blame(&report);
        assert_eq!(annotations.len(), 3);

        assert_eq!(annotations[0].line_index, 0);
        assert_eq!(annotations[0].author, "alice");
        assert_eq!(
            annotations[0].author_mail.as_deref(),
            Some("alice@example.com")
        );
        assert_eq!(annotations[0].author_time, 100);

        assert_eq!(annotations[1].line_index, 1);
        assert_eq!(annotations[1].author, "bob");
        assert_eq!(annotations[1].author_time, 200);

        assert_eq!(annotations[2].line_index, 2);
        assert_eq!(annotations[2].author, "alice");
    }

    #[test]
    fn test_parse_uncommitted_line() {
        // git reports uncommitted lines under the null sha with a wall-clock
        // author-time; the parser must zero it out.
        let report = format!(
            "{}{}",
            block(SHA_A, 1, "alice", "alice@example.com", 100, "committed"),
            block(
                special::UNCOMMITTED_SHA,
                2,
                "Not Committed Yet",
                "not.committed.yet",
                1_700_000_000,
                "local edit"
            ),
        );

        let annotations = Parser::parse_blame(&report);
        assert_eq!(annotations.len(), 2);
        assert_eq!(annotations[1].author, "Not Committed Yet");
        assert_eq!(annotations[1].author_time, 0);
        assert_eq!(annotations[1].author_mail, None);
        assert!(!annotations[1].is_committed());
    }

    #[test]
    fn test_incomplete_block_mid_stream_emits_placeholder() {
        // Block for line 2 lacks author-time; it must not vanish, or every
        // later annotation would shift up by one line.
        let report = format!(
            "{}{SHA_B} 2 2\nauthor bob\n\tno time for this one\n{}",
            block(SHA_A, 1, "alice", "alice@example.com", 100, "first"),
            block(SHA_A, 3, "alice", "alice@example.com", 100, "third"),
        );

        let annotations = Parser::parse_blame(&report);
        assert_eq!(annotations.len(), 3);
        assert_eq!(annotations[1], Annotation::placeholder(1));
        assert_eq!(annotations[2].author, "alice");
        assert_eq!(annotations[2].line_index, 2);
    }

    #[test]
    fn test_truncated_final_block_emits_placeholder() {
        let report = format!(
            "{}{SHA_B} 2 2\nauthor bob\n",
            block(SHA_A, 1, "alice", "alice@example.com", 100, "first"),
        );

        let annotations = Parser::parse_blame(&report);
        assert_eq!(annotations.len(), 2);
        assert_eq!(annotations[1], Annotation::placeholder(1));
    }

    #[test]
    fn test_block_without_mail() {
        let report = format!(
            "{SHA_A} 1 1 1\nauthor alice\nauthor-time 100\nauthor-tz +0000\n\tcontent\n"
        );

        let annotations = Parser::parse_blame(&report);
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].author_mail, None);
        assert_eq!(annotations[0].author_time, 100);
    }

    #[test]
    fn test_empty_input() {
        assert!(Parser::parse_blame("").is_empty());
    }

    #[test]
    fn test_stray_metadata_without_introducer_is_ignored() {
        let report = "author ghost\nauthor-time 42\n\tcontent\n";
        assert!(Parser::parse_blame(report).is_empty());
    }

    #[test]
    fn test_tab_content_never_parsed_as_metadata() {
        // Source lines that themselves look like porcelain keys must not
        // leak into the accumulator.
        let report = format!(
            "{SHA_A} 1 1 1\nauthor alice\n\tauthor-time 999\nauthor-time 100\n"
        );

        let annotations = Parser::parse_blame(&report);
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].author_time, 100);
    }

    #[test]
    fn test_order_preserved() {
        let mut report = String::new();
        for i in 0..20 {
            report.push_str(&block(
                SHA_A,
                i + 1,
                &format!("author{}", i),
                "a@example.com",
                100 + i as i64,
                "line",
            ));
        }

        let annotations = Parser::parse_blame(&report);
        assert_eq!(annotations.len(), 20);
        for (i, annotation) in annotations.iter().enumerate() {
            assert_eq!(annotation.line_index, i);
            assert_eq!(annotation.author, format!("author{}", i));
        }
    }
}
