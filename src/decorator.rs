//! Decorator: stacking text transformations around a publisher.
//!
//! Each decorator owns exactly one inner publisher and always asks it first,
//! so the innermost transform is applied first.

pub mod demo {
    use super::{HtmlDecorator, ShiftDecorator, SimplePublisher, TextPublisher};
    use crate::narrate::Narrator;

    pub const MESSAGE: &str = "Hello";

    pub fn run(out: &dyn Narrator) {
        let simple = SimplePublisher;
        out.say("1. As is:");
        out.say(&simple.publish(MESSAGE));

        out.say("");
        out.say("2. With HTML decoration:");
        let html_version = HtmlDecorator::new(simple);
        out.say(&html_version.publish(MESSAGE));

        out.say("");
        out.say("3. HTML, then shifted (layered):");
        let shifted_html = ShiftDecorator::new(html_version);
        out.say(&shifted_html.publish(MESSAGE));
    }
}

pub trait TextPublisher {
    fn publish(&self, text: &str) -> String;
}

impl<P: TextPublisher + ?Sized> TextPublisher for Box<P> {
    fn publish(&self, text: &str) -> String {
        (**self).publish(text)
    }
}

/// Returns its input unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimplePublisher;

impl TextPublisher for SimplePublisher {
    fn publish(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Shared shape of every decorator. Publishing always asks the inner
/// publisher first, then hands its output to `transform`, which by default
/// returns it unchanged.
pub trait PublisherDecorator {
    fn inner(&self) -> &dyn TextPublisher;

    fn transform(&self, inner_output: String) -> String {
        inner_output
    }
}

// =============================================================================
// Concrete decorators
// =============================================================================

pub struct HtmlDecorator {
    wrapped: Box<dyn TextPublisher>,
}

impl HtmlDecorator {
    pub fn new(wrapped: impl TextPublisher + 'static) -> Self {
        HtmlDecorator {
            wrapped: Box::new(wrapped),
        }
    }
}

impl PublisherDecorator for HtmlDecorator {
    fn inner(&self) -> &dyn TextPublisher {
        self.wrapped.as_ref()
    }

    fn transform(&self, inner_output: String) -> String {
        format!("<html><body>{}</body></html>", inner_output)
    }
}

/// Toy "encryption": shifts every character by one code point. Not
/// cryptography.
pub struct ShiftDecorator {
    wrapped: Box<dyn TextPublisher>,
}

impl ShiftDecorator {
    pub fn new(wrapped: impl TextPublisher + 'static) -> Self {
        ShiftDecorator {
            wrapped: Box::new(wrapped),
        }
    }
}

impl PublisherDecorator for ShiftDecorator {
    fn inner(&self) -> &dyn TextPublisher {
        self.wrapped.as_ref()
    }

    fn transform(&self, inner_output: String) -> String {
        shift_text(&inner_output, 1)
    }
}

/// Forwards unchanged. Only useful as padding in a chain.
pub struct PassThroughDecorator {
    wrapped: Box<dyn TextPublisher>,
}

impl PassThroughDecorator {
    pub fn new(wrapped: impl TextPublisher + 'static) -> Self {
        PassThroughDecorator {
            wrapped: Box::new(wrapped),
        }
    }
}

impl PublisherDecorator for PassThroughDecorator {
    fn inner(&self) -> &dyn TextPublisher {
        self.wrapped.as_ref()
    }
}

// Any decorator is itself a publisher, so chains nest without limit.
macro_rules! publisher_for_decorator {
    ($($ty:ty),+) => {
        $(impl TextPublisher for $ty {
            fn publish(&self, text: &str) -> String {
                let inner_output = self.inner().publish(text);
                self.transform(inner_output)
            }
        })+
    };
}

publisher_for_decorator!(HtmlDecorator, ShiftDecorator, PassThroughDecorator);

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_LEN: u32 = 0x800;
/// Number of Unicode scalar values.
const SCALAR_COUNT: i64 = 0x11_0000 - SURROGATE_LEN as i64;

/// Shifts each char by `delta` scalar values. The surrogate gap is stepped
/// over and the range wraps (U+10FFFF + 1 is U+0000), so `shift_text(s, -d)`
/// always undoes `shift_text(s, d)`.
pub fn shift_text(text: &str, delta: i32) -> String {
    text.chars().map(|c| shift_char(c, delta)).collect()
}

fn shift_char(c: char, delta: i32) -> char {
    let code = u32::from(c);
    let index = if code < SURROGATE_START {
        code
    } else {
        code - SURROGATE_LEN
    };

    let shifted = (i64::from(index) + i64::from(delta)).rem_euclid(SCALAR_COUNT) as u32;
    let code = if shifted < SURROGATE_START {
        shifted
    } else {
        shifted + SURROGATE_LEN
    };

    char::from_u32(code).unwrap_or(c)
}

pub fn unshift_text(text: &str) -> String {
    shift_text(text, -1)
}

// =============================================================================
// Chain builder
// =============================================================================

/// `PublisherChain::new(SimplePublisher).html().shift().build()` wraps html
/// first, shift second.
pub struct PublisherChain {
    current: Box<dyn TextPublisher>,
}

impl PublisherChain {
    pub fn new(base: impl TextPublisher + 'static) -> Self {
        PublisherChain {
            current: Box::new(base),
        }
    }

    pub fn html(self) -> Self {
        PublisherChain {
            current: Box::new(HtmlDecorator::new(self.current)),
        }
    }

    pub fn shift(self) -> Self {
        PublisherChain {
            current: Box::new(ShiftDecorator::new(self.current)),
        }
    }

    pub fn build(self) -> Box<dyn TextPublisher> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const HTML_HELLO: &str = "<html><body>Hello</body></html>";

    #[test]
    fn test_base_publishes_unchanged() {
        assert_eq!(SimplePublisher.publish(demo::MESSAGE), "Hello");
    }

    #[test]
    fn test_html_wraps() {
        let html = HtmlDecorator::new(SimplePublisher);
        assert_eq!(html.publish(demo::MESSAGE), HTML_HELLO);
    }

    #[test]
    fn test_shift_over_html() {
        let shifted = ShiftDecorator::new(HtmlDecorator::new(SimplePublisher));
        let result = shifted.publish(demo::MESSAGE);

        assert_eq!(result, "=iunm?=cpez?Ifmmp=0cpez?=0iunm?");
        assert_eq!(unshift_text(&result), HTML_HELLO);
    }

    #[test]
    fn test_order_is_innermost_first() {
        let html_outside = HtmlDecorator::new(ShiftDecorator::new(SimplePublisher));
        assert_eq!(
            html_outside.publish(demo::MESSAGE),
            "<html><body>Ifmmp</body></html>"
        );
    }

    #[test]
    fn test_pass_through_uses_default_forwarding() {
        let padded = PassThroughDecorator::new(HtmlDecorator::new(SimplePublisher));
        assert_eq!(padded.publish(demo::MESSAGE), HTML_HELLO);
    }

    #[test]
    fn test_chain_builder_matches_manual_nesting() {
        let chain = PublisherChain::new(SimplePublisher).html().shift().build();
        let manual = ShiftDecorator::new(HtmlDecorator::new(SimplePublisher));
        assert_eq!(chain.publish(demo::MESSAGE), manual.publish(demo::MESSAGE));
    }

    #[test]
    fn test_deep_chain() {
        let mut chain = PublisherChain::new(SimplePublisher);
        for _ in 0..5 {
            chain = chain.shift();
        }
        assert_eq!(chain.build().publish("a"), "f");
    }

    #[test]
    fn test_shift_steps_over_surrogates() {
        assert_eq!(shift_text("\u{D7FF}", 1), "\u{E000}");
        assert_eq!(unshift_text("\u{E000}"), "\u{D7FF}");
        assert_eq!(unshift_text(&shift_text("\u{D7FF}", 1)), "\u{D7FF}");
    }

    #[test]
    fn test_shift_wraps_at_range_ends() {
        assert_eq!(shift_text("\u{10FFFF}", 1), "\0");
        assert_eq!(unshift_text("\0"), "\u{10FFFF}");
        assert_eq!(unshift_text(&shift_text("\u{10FFFF}", 1)), "\u{10FFFF}");
    }

    proptest! {
        #[test]
        fn prop_unshift_reverses_shift(chars in prop::collection::vec(any::<char>(), 0..64)) {
            let s: String = chars.into_iter().collect();
            prop_assert_eq!(unshift_text(&shift_text(&s, 1)), s);
        }

        #[test]
        fn prop_edge_chars_round_trip(
            c in prop_oneof![Just('\0'), Just('\u{D7FF}'), Just('\u{E000}'), Just('\u{10FFFF}')],
            delta in -3i32..=3,
        ) {
            let s = c.to_string();
            prop_assert_eq!(shift_text(&shift_text(&s, delta), -delta), s);
        }

        #[test]
        fn prop_publish_is_idempotent(s in ".{0,32}") {
            let publisher = ShiftDecorator::new(HtmlDecorator::new(SimplePublisher));
            prop_assert_eq!(publisher.publish(&s), publisher.publish(&s));
        }
    }
}
