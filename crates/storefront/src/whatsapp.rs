//! WhatsApp deep links.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use spaza_core::RecipientHandle;

/// Characters left bare in the `text` parameter.
///
/// This matches JavaScript's `encodeURIComponent`: everything except
/// alphanumerics and `- _ . ! ~ * ' ( )` is percent-encoded, so asterisk
/// bolding survives while newlines become `%0A`.
const MESSAGE_TEXT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build the `wa.me` link that opens a chat to `recipient` with `message`
/// pre-filled.
///
/// Fire-and-forget: the caller opens the URL and nothing is awaited.
#[must_use]
pub fn order_link(recipient: &RecipientHandle, message: &str) -> Url {
    let text = utf8_percent_encode(message, MESSAGE_TEXT);
    let raw = format!("https://wa.me/{}?text={text}", recipient.as_str());
    // The handle is digits-only and the text is percent-encoded ASCII, so
    // the string is a valid URL by construction.
    Url::parse(&raw).expect("wa.me link is valid by construction")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use spaza_core::RecipientHandle;

    fn recipient() -> RecipientHandle {
        RecipientHandle::parse("27795430029").unwrap()
    }

    #[test]
    fn test_link_targets_recipient() {
        let link = order_link(&recipient(), "hello");
        assert_eq!(link.as_str(), "https://wa.me/27795430029?text=hello");
    }

    #[test]
    fn test_newlines_and_spaces_are_percent_encoded() {
        let link = order_link(&recipient(), "line one\nline two");
        assert_eq!(
            link.as_str(),
            "https://wa.me/27795430029?text=line%20one%0Aline%20two"
        );
    }

    #[test]
    fn test_bold_markers_survive_encoding() {
        let link = order_link(&recipient(), "*Total: R50.00*");
        assert!(link.as_str().ends_with("text=*Total%3A%20R50.00*"));
    }

    #[test]
    fn test_plus_is_encoded() {
        let link = order_link(&recipient(), "Yes (+R50.00)");
        assert!(link.as_str().contains("(%2BR50.00)"));
    }
}
