//! Cursors over remaining input and scoped span tracking.
//!
//! - [`CharStream`] walks characters while lexing.
//! - [`TokenStream`] walks tokens while parsing.
//!
//! Both implement [`Cursor`], which is all [`SpanScope`] needs to stamp a span on the token or node being built.

mod chars;
mod tokens;

pub use chars::{CharStream, Next};
pub use tokens::{TokenPattern, TokenStream};

use crate::ast::{HasSpan, Location, Span};

/// Position reporting shared by the character and token cursors.
pub trait Cursor {
    /// Where the next unit begins.
    fn start_location(&self) -> Location;
    /// Where the last consumed unit ended.
    fn end_location(&self) -> Location;
}

/// Owns a token or node while its parse routine populates it.
///
/// The start location is captured on [`SpanScope::enter`]. The only way to get the value back out is
/// [`SpanScope::finish`], which captures the end location and assigns the span, so an early (degraded) return
/// cannot skip it. A scope dropped without `finish` discards the value together with the failed parse.
pub struct SpanScope<'c, C: Cursor, T: HasSpan> {
    cursor: &'c mut C,
    node: T,
    start: Location,
}

impl<'c, C: Cursor, T: HasSpan> SpanScope<'c, C, T> {
    pub fn enter(cursor: &'c mut C, node: T) -> Self {
        let start = cursor.start_location();
        Self { cursor, node, start }
    }

    pub fn start(&self) -> Location {
        self.start
    }

    /// Split borrow of the cursor and the value under construction.
    pub fn parts(&mut self) -> (&mut C, &mut T) {
        (&mut *self.cursor, &mut self.node)
    }

    /// Span from the entry location to the cursor's current end.
    ///
    /// Clamped so that `end >= start` even when nothing was consumed.
    pub fn current_span(&self) -> Span {
        Span::new(self.start, self.cursor.end_location().max(self.start))
    }

    pub fn finish(mut self) -> T {
        let span = self.current_span();
        self.node.set_span(span);
        self.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ConstantExpr;

    struct Fixed(Location, Location);

    impl Cursor for Fixed {
        fn start_location(&self) -> Location {
            self.0
        }

        fn end_location(&self) -> Location {
            self.1
        }
    }

    #[test]
    fn test_finish_assigns_entry_and_exit_locations() {
        let mut cursor = Fixed(Location::new(1, 2), Location::new(1, 2));
        let mut scope = SpanScope::enter(&mut cursor, ConstantExpr::default());
        let (cursor, _) = scope.parts();
        cursor.1 = Location::new(1, 7);
        let node = scope.finish();
        assert_eq!(node.span, Span::new(Location::new(1, 2), Location::new(1, 7)));
    }

    #[test]
    fn test_end_is_clamped_to_start() {
        let mut cursor = Fixed(Location::new(3, 0), Location::new(2, 9));
        let node = SpanScope::enter(&mut cursor, ConstantExpr::default()).finish();
        assert_eq!(node.span, Span::point(Location::new(3, 0)));
    }
}
