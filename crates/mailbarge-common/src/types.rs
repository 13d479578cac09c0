//! Common types used across mailbarge

use serde::{Deserialize, Serialize};

/// A single parsed email message.
///
/// The serde field names are the wire names used both in bulk submission
/// payloads and in the `_source` list on the search side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecord {
    pub message_id: String,
    pub date: String,
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
    pub folder: String,
}

impl EmailRecord {
    /// A record without a `Message-ID` header must never enter a batch.
    pub fn is_valid(&self) -> bool {
        !self.message_id.is_empty()
    }

    /// Normalize the body in place: collapse all whitespace runs, including
    /// newlines, into single spaces and trim the ends.
    pub fn normalize_body(&mut self) {
        self.body = normalize_whitespace(&self.body);
    }
}

/// Collapse every run of whitespace to a single space and trim the ends.
/// Idempotent: normalizing an already-normalized string is a no-op.
pub fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_newlines_and_runs() {
        assert_eq!(normalize_whitespace("Hello\n\n  World \n"), "Hello World");
        assert_eq!(normalize_whitespace("a\tb\r\nc"), "a b c");
        assert_eq!(normalize_whitespace("   "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_whitespace("Hello\n\n  World \n");
        assert_eq!(normalize_whitespace(&once), once);
    }

    #[test]
    fn test_record_validity() {
        let mut record = EmailRecord::default();
        assert!(!record.is_valid());

        record.message_id = "<1234.JavaMail.evans@thyme>".to_string();
        assert!(record.is_valid());
    }

    #[test]
    fn test_record_wire_field_names() {
        let record = EmailRecord {
            message_id: "<id>".to_string(),
            date: "Mon, 14 May 2001 16:39:00 -0700".to_string(),
            from: "a@example.com".to_string(),
            to: "b@example.com".to_string(),
            subject: "Hi".to_string(),
            body: "Hello World".to_string(),
            folder: "lay-k/inbox".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["message_id"], "<id>");
        assert_eq!(json["from"], "a@example.com");
        assert_eq!(json["folder"], "lay-k/inbox");
    }
}
