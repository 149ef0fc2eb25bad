//! Entry classification.
//!
//! Turns [`RawContent`] into a typed [`ClipboardEntry`]. Classification is
//! total: every input produces a variant, including empty text and image
//! bytes no decoder would accept.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::clipboard::{ClipboardEntry, EntryPayload, RawContent};

/// Absolute URL pattern, anchored at both ends.
///
/// The anchors are load-bearing: a match must span the entire input, so a
/// URL embedded in a sentence classifies as plain text rather than a link.
static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)([-a-zA-Z0-9]+\.)+[a-zA-Z0-9]+([-a-zA-Z0-9@:%_\+.~#?&/=]*)$")
        .expect("URL regex is valid")
});

/// Classify raw clipboard content into a typed history entry.
///
/// Decision order:
/// 1. Text whose entirety is a well-formed absolute URL → [`EntryPayload::Link`]
/// 2. Any other text → [`EntryPayload::Text`]
/// 3. Binary payloads → [`EntryPayload::Image`], unconditionally
///
/// The entry carries a fresh id and first-seen timestamp; when the same
/// fingerprint already exists in the history, the store discards both on
/// promotion.
pub fn classify(raw: RawContent) -> ClipboardEntry {
    let payload = match raw {
        RawContent::Text { text } => {
            let trimmed = text.trim();
            if URL_REGEX.is_match(trimmed) {
                EntryPayload::Link {
                    url: trimmed.to_string(),
                }
            } else {
                EntryPayload::Text { text }
            }
        }
        RawContent::ImageBytes { bytes } => EntryPayload::Image { bytes },
    };
    ClipboardEntry::new(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::EntryKind;

    #[test]
    fn test_full_url_classifies_as_link() {
        let entry = classify(RawContent::text("https://example.com"));
        assert_eq!(entry.kind(), EntryKind::Link);

        let entry = classify(RawContent::text("https://example.com/search?q=rust&lang=en"));
        assert_eq!(entry.kind(), EntryKind::Link);

        let entry = classify(RawContent::text("http://sub.example.co.uk/path#frag"));
        assert_eq!(entry.kind(), EntryKind::Link);
    }

    #[test]
    fn test_url_inside_prose_classifies_as_text() {
        let entry = classify(RawContent::text("check https://example.com now"));
        assert_eq!(entry.kind(), EntryKind::Text);
    }

    #[test]
    fn test_trailing_prose_after_url_classifies_as_text() {
        let entry = classify(RawContent::text("https://example.com is down"));
        assert_eq!(entry.kind(), EntryKind::Text);
    }

    #[test]
    fn test_non_http_scheme_classifies_as_text() {
        let entry = classify(RawContent::text("ftp://example.com/file"));
        assert_eq!(entry.kind(), EntryKind::Text);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored_for_links() {
        let entry = classify(RawContent::text("  https://example.com  "));
        assert_eq!(entry.kind(), EntryKind::Link);
        // The link payload and fingerprint hold the trimmed URL.
        assert_eq!(entry.fingerprint.as_str(), "https://example.com");
    }

    #[test]
    fn test_plain_and_empty_text() {
        let entry = classify(RawContent::text("plain words, no markup"));
        assert_eq!(entry.kind(), EntryKind::Text);

        let entry = classify(RawContent::text(""));
        assert_eq!(entry.kind(), EntryKind::Text);
    }

    #[test]
    fn test_image_bytes_always_classify_as_image() {
        let entry = classify(RawContent::image(vec![0xFF, 0xD8, 0xFF, 0xE0]));
        assert_eq!(entry.kind(), EntryKind::Image);

        // Bytes no decoder would accept still produce an Image entry;
        // rendering a placeholder is the presentation layer's job.
        let entry = classify(RawContent::image(vec![0x00]));
        assert_eq!(entry.kind(), EntryKind::Image);

        let entry = classify(RawContent::image(Vec::new()));
        assert_eq!(entry.kind(), EntryKind::Image);
    }

    #[test]
    fn test_fingerprint_matches_payload() {
        let text_entry = classify(RawContent::text("hello"));
        assert_eq!(text_entry.fingerprint.as_str(), "hello");

        let image_entry = classify(RawContent::image(vec![1, 2, 3]));
        assert_eq!(
            image_entry.fingerprint,
            crate::clipboard::Fingerprint::of_bytes(&[1, 2, 3])
        );
    }

    #[test]
    fn test_fresh_ids_per_classification() {
        let a = classify(RawContent::text("same"));
        let b = classify(RawContent::text("same"));
        assert_ne!(a.id, b.id, "ids are assigned at classify time");
        assert_eq!(a.fingerprint, b.fingerprint);
    }
}
