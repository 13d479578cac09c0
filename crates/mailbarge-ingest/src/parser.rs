//! Raw message parsing
//!
//! Messages are RFC822-style: a block of header lines, a blank-line
//! separator, then free-form body text. Only five headers are of interest;
//! everything else in the header block is ignored.

use mailbarge_common::EmailRecord;

/// Recognized header prefixes and the record fields they populate.
///
/// A later occurrence of the same header overwrites an earlier one
/// (last-writer-wins).
const HEADER_FIELDS: &[(&str, fn(&mut EmailRecord, &str))] = &[
    ("Message-ID:", |r, v| r.message_id = v.to_string()),
    ("Date:", |r, v| r.date = v.to_string()),
    ("From:", |r, v| r.from = v.to_string()),
    ("To:", |r, v| r.to = v.to_string()),
    ("Subject:", |r, v| r.subject = v.to_string()),
];

/// Parse raw message content into an [`EmailRecord`].
///
/// Two-mode scan: header lines are matched against the recognized prefixes
/// until the first blank line, which switches to body mode permanently.
/// Body lines, blank ones included, are kept verbatim with their line
/// terminator.
///
/// Always returns a record. It may be invalid (no `Message-ID` header seen);
/// validity is the caller's concern, not the parser's.
pub fn parse_email(content: &str) -> EmailRecord {
    let mut record = EmailRecord::default();
    let mut in_body = false;

    for line in content.split('\n') {
        if in_body {
            record.body.push_str(line);
            record.body.push('\n');
        } else if line.is_empty() {
            in_body = true;
        } else {
            for (prefix, set_field) in HEADER_FIELDS {
                if let Some(rest) = line.strip_prefix(prefix) {
                    set_field(&mut record, rest.trim());
                    break;
                }
            }
        }
    }

    record
}
