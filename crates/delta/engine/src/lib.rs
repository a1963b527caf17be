//! Viewport delta engine.
//!
//! Coordinates the delta subsystem: owns the validated breakpoint table
//! and a style sink, recomputes the delta on each viewport-change
//! notification, and publishes it as the `--delta` custom property
//! (custom properties per <https://www.w3.org/TR/css-variables-1/>).
//!
//! The engine never registers host listeners itself; the host forwards
//! resize notifications by calling [`DeltaEngine::handle_resize`] (or
//! [`DeltaEngine::refresh`] with a [`ViewportSource`]). Everything runs
//! single-threaded and synchronously, and the published property is
//! overwritten wholesale on every recompute.

#![forbid(unsafe_code)]

use anyhow::{Context as _, Result, bail};
use delta_compute::compute;
use log::debug;

mod sink;

pub use delta_compute::{DeltaResult, Viewport, ViewportError};
pub use delta_config::{Breakpoint, ConfigError, ConfigTable, Orientation};
pub use sink::{MemoryStyleSink, StyleSink, ViewportSource};

/// Name of the published custom property.
pub const DELTA_PROPERTY: &str = "--delta";

/// Engine coordinating delta recomputation and publication.
///
/// Composes a plain [`ConfigTable`] value with a [`StyleSink`]; there is
/// no subtype relationship between configuration and engine. Either a
/// fully valid table is built at construction or no engine exists.
pub struct DeltaEngine<S: StyleSink> {
    table: ConfigTable,
    sink: S,
    debug: bool,
    destroyed: bool,
}

impl<S: StyleSink> DeltaEngine<S> {
    /// Build an engine from breakpoint specifiers.
    ///
    /// # Errors
    /// Returns the underlying [`ConfigError`] (with context) if the
    /// specifier list fails validation.
    pub fn new<I: AsRef<str>>(specifiers: &[I], sink: S, debug: bool) -> Result<Self> {
        let table = ConfigTable::parse(specifiers).context("invalid breakpoint config")?;
        Ok(Self {
            table,
            sink,
            debug,
            destroyed: false,
        })
    }

    /// Build an engine with the compiled-in default breakpoints
    /// (`portrait@360x540`, `landscape@960x540`).
    #[inline]
    pub fn with_default_config(sink: S, debug: bool) -> Self {
        Self {
            table: ConfigTable::default(),
            sink,
            debug,
            destroyed: false,
        }
    }

    /// Recompute the delta for the given viewport and publish its decimal
    /// string form as [`DELTA_PROPERTY`] on the sink.
    ///
    /// # Errors
    /// Returns an error if the viewport dimensions are invalid or the
    /// engine has been destroyed.
    pub fn handle_resize(&mut self, viewport: Viewport) -> Result<DeltaResult> {
        if self.destroyed {
            bail!("delta engine has been destroyed");
        }
        let result = compute(viewport, &self.table)?;
        self.sink
            .set_property(DELTA_PROPERTY, &result.delta.to_string());
        if self.debug {
            debug!(target: "delta_engine",
                "delta={} orientation={} breakpoint={}",
                result.delta, result.orientation, result.breakpoint);
        }
        Ok(result)
    }

    /// Read the current viewport from a source and recompute.
    ///
    /// # Errors
    /// Same failure modes as [`Self::handle_resize`].
    #[inline]
    pub fn refresh<V: ViewportSource>(&mut self, source: &V) -> Result<DeltaResult> {
        self.handle_resize(source.viewport())
    }

    /// Tear the engine down: remove the published property from the sink.
    /// Idempotent; a second call is a no-op.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.sink.remove_property(DELTA_PROPERTY);
        self.destroyed = true;
    }

    /// The validated breakpoint table.
    #[inline]
    pub fn table(&self) -> &ConfigTable {
        &self.table
    }

    /// The style surface the delta is published to.
    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }
}
