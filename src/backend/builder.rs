//! Per-backend text accumulator.

use tessera_core::LanguageDefinition;

use super::config::RenderConfig;
use super::errors::RenderError;
use super::Backend;

/// Anything that can be appended to a [`CodeBuilder`]: literal text, tokens, nodes, or an ordered tuple of those.
///
/// The members of a tuple are written back to back, left to right.
pub trait Fragment {
    fn emit(&self, c: &mut CodeBuilder<'_>) -> Result<(), RenderError>;
}

/// Accumulates the rendering of one tree for one backend.
///
/// Output is append-only in visit order; [`CodeBuilder::finish`] hands back the text once.
pub struct CodeBuilder<'l> {
    backend: Backend,
    lang: &'l LanguageDefinition,
    config: RenderConfig,
    output: String,
}

impl<'l> CodeBuilder<'l> {
    pub fn new(backend: Backend, lang: &'l LanguageDefinition, config: RenderConfig) -> Self {
        Self {
            backend,
            lang,
            config,
            output: String::new(),
        }
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// The language definition supplying canonical spellings and marks.
    pub fn lang(&self) -> &'l LanguageDefinition {
        self.lang
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Append a fragment (or tuple of fragments).
    pub fn write<F: Fragment + ?Sized>(&mut self, fragment: &F) -> Result<(), RenderError> {
        fragment.emit(self)
    }

    /// Append raw text.
    pub fn push_str(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// Append the configured line separator.
    pub fn newline(&mut self) {
        self.output.push_str(&self.config.newline);
    }

    /// Append `items` separated by `separator`.
    pub fn write_join<F: Fragment>(&mut self, items: &[F], separator: &str) -> Result<(), RenderError> {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.push_str(separator);
            }
            self.write(item)?;
        }
        Ok(())
    }

    /// Append `items` one per line (no trailing separator).
    pub fn write_lines<F: Fragment>(&mut self, items: &[F]) -> Result<(), RenderError> {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.newline();
            }
            self.write(item)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Get the rendered output
    pub fn finish(self) -> String {
        self.output
    }
}

impl Fragment for str {
    fn emit(&self, c: &mut CodeBuilder<'_>) -> Result<(), RenderError> {
        c.push_str(self);
        Ok(())
    }
}

impl Fragment for String {
    fn emit(&self, c: &mut CodeBuilder<'_>) -> Result<(), RenderError> {
        c.push_str(self);
        Ok(())
    }
}

impl Fragment for char {
    fn emit(&self, c: &mut CodeBuilder<'_>) -> Result<(), RenderError> {
        let mut buf = [0u8; 4];
        c.push_str(self.encode_utf8(&mut buf));
        Ok(())
    }
}

impl<T: Fragment + ?Sized> Fragment for &T {
    fn emit(&self, c: &mut CodeBuilder<'_>) -> Result<(), RenderError> {
        (**self).emit(c)
    }
}

impl<A: Fragment, B: Fragment> Fragment for (A, B) {
    fn emit(&self, c: &mut CodeBuilder<'_>) -> Result<(), RenderError> {
        self.0.emit(c)?;
        self.1.emit(c)
    }
}

impl<A: Fragment, B: Fragment, C: Fragment> Fragment for (A, B, C) {
    fn emit(&self, c: &mut CodeBuilder<'_>) -> Result<(), RenderError> {
        self.0.emit(c)?;
        self.1.emit(c)?;
        self.2.emit(c)
    }
}
