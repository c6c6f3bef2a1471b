//! Incremental echo generation.
//!
//! The response to a message is the literal text `"Your message is: "`
//! followed by the message, delivered as a sequence of growing prefixes:
//! one element per character of the rendered text, each one character
//! longer than the last, ending with the full text.

/// Literal prepended to every echoed message.
pub const RESPONSE_PREFIX: &str = "Your message is: ";

/// Render the full response text for a message.
pub fn render_response(message: &str) -> String {
    format!("{RESPONSE_PREFIX}{message}")
}

/// Lazy sequence of growing prefixes of the rendered response.
///
/// The i-th element is the first `i + 1` characters of
/// `render_response(message)`. The sequence always has at least the
/// characters of [`RESPONSE_PREFIX`], even for an empty message. Each
/// call produces an independent sequence; dropping it part-way through
/// needs no cleanup.
pub fn prefix_sequence(message: &str) -> Prefixes {
    Prefixes {
        full: render_response(message),
        boundary: 0,
    }
}

/// Forward-only iterator over growing character prefixes of a string.
///
/// Prefixes are cut on char boundaries, so multibyte input is never
/// split mid-character.
#[derive(Debug, Clone)]
pub struct Prefixes {
    full: String,
    boundary: usize,
}

impl Prefixes {
    /// The full text the sequence converges to.
    pub fn full_text(&self) -> &str {
        &self.full
    }
}

impl Iterator for Prefixes {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let next_char = self.full[self.boundary..].chars().next()?;
        self.boundary += next_char.len_utf8();
        Some(self.full[..self.boundary].to_string())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.full[self.boundary..].chars().count();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Prefixes {}
