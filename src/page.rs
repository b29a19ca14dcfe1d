use std::collections::HashMap;

use crate::target::{DisplayTarget, TargetLookup};

/// An image element whose `src` the carousel rewrites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Banner {
    src: Option<String>,
}

impl Banner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Banner already showing `src` before any tick lands.
    pub fn with_src(src: impl Into<String>) -> Self {
        Self { src: Some(src.into()) }
    }

    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }
}

impl DisplayTarget for Banner {
    fn set_image(&mut self, location: &str) {
        // Skip the allocation when the same location is re-applied
        if self.src.as_deref() != Some(location) {
            self.src = Some(location.to_string());
        }
    }
}

/// In-memory document of banner elements keyed by id.
#[derive(Debug, Default)]
pub struct Page {
    elements: HashMap<String, Banner>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or replaces) the element under `id`, returning the previous one.
    pub fn insert(&mut self, id: impl Into<String>, banner: Banner) -> Option<Banner> {
        self.elements.insert(id.into(), banner)
    }

    /// Detaches the element under `id`. The returned banner keeps its `src`.
    pub fn remove(&mut self, id: &str) -> Option<Banner> {
        self.elements.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&Banner> {
        self.elements.get(id)
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl TargetLookup for Page {
    fn find_target(&mut self, id: &str) -> Option<&mut dyn DisplayTarget> {
        self.elements
            .get_mut(id)
            .map(|banner| banner as &mut dyn DisplayTarget)
    }
}
