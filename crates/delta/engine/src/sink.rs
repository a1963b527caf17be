//! Host-environment seams: where viewport dimensions come from and where
//! the computed delta goes.

use delta_compute::Viewport;
use std::collections::HashMap;

/// Supplies the host viewport dimensions at the moment of computation.
///
/// Hosts wrap whatever they have (a window handle, a terminal size, a
/// fixed test resolution) behind this seam so recomputation never reaches
/// for ambient global state.
pub trait ViewportSource {
    fn viewport(&self) -> Viewport;
}

/// A plain `Viewport` is its own source, always reporting the same
/// dimensions. Useful for tests and headless hosts.
impl ViewportSource for Viewport {
    #[inline]
    fn viewport(&self) -> Viewport {
        *self
    }
}

/// Style surface the delta custom property is published to.
///
/// The browser-backed implementation maps these onto the document root's
/// `setProperty`/`removeProperty`; both are last-write-wins and must not
/// fail. Removing a property that was never set is a no-op.
pub trait StyleSink {
    fn set_property(&mut self, name: &str, value: &str);
    fn remove_property(&mut self, name: &str);
}

/// In-memory sink holding custom properties as a name → value map, for
/// tests and hosts without a real style surface.
#[derive(Clone, Debug, Default)]
pub struct MemoryStyleSink {
    properties: HashMap<String, String>,
}

impl MemoryStyleSink {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a property, if set.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl StyleSink for MemoryStyleSink {
    #[inline]
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_owned(), value.to_owned());
    }

    #[inline]
    fn remove_property(&mut self, name: &str) {
        self.properties.remove(name);
    }
}
