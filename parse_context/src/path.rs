//! Structural breadcrumbs for diagnostics (`$.a[0].'b.c'`).
//!
//! The tracker is a stack of rendered segments seeded with the root `$`. Rendering joins the
//! segments in stack order and is memoized: every mutation bumps a generation counter and
//! [`PathTracker::current_path`] only rebuilds when the cached generation is stale.

/// Characters that force a field name to be quoted.
pub const PATH_SPECIAL_CHARS: &[char] = &['$', '*', '.', '[', ']'];

pub const ROOT_SEGMENT: &str = "$";

/// Quotes `name` with `'` if it contains any of [`PATH_SPECIAL_CHARS`].
pub fn normalize_segment(name: &str) -> String {
    if name.contains(PATH_SPECIAL_CHARS) {
        format!("'{name}'")
    } else {
        name.to_string()
    }
}

fn field_segment(name: &str) -> String {
    format!(".{}", normalize_segment(name))
}

fn index_segment(idx: usize) -> String {
    format!("[{idx}]")
}

#[derive(Debug, Clone)]
pub struct PathTracker {
    segments: Vec<String>,
    generation: u64,
    cache: String,
    cached_generation: Option<u64>,
    rebuilds: u64,
}

impl Default for PathTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PathTracker {
    pub fn new() -> Self {
        PathTracker {
            segments: vec![ROOT_SEGMENT.to_string()],
            generation: 0,
            cache: String::new(),
            cached_generation: None,
            rebuilds: 0,
        }
    }

    fn touch(&mut self) {
        self.generation += 1;
    }

    pub fn push_field(&mut self, name: &str) {
        let segment = field_segment(name);
        tracing::trace!(%segment, "push path segment");
        self.segments.push(segment);
        self.touch();
    }

    pub fn push_index(&mut self, idx: usize) {
        let segment = index_segment(idx);
        tracing::trace!(%segment, "push path segment");
        self.segments.push(segment);
        self.touch();
    }

    /// Removes the innermost segment. The root is never removed; returns `false` then.
    pub fn pop(&mut self) -> bool {
        if self.segments.len() <= 1 {
            return false;
        }
        if let Some(segment) = self.segments.pop() {
            tracing::trace!(%segment, "pop path segment");
        }
        self.touch();
        true
    }

    pub fn current_path(&mut self) -> &str {
        if self.cached_generation != Some(self.generation) {
            self.cache = self.segments.concat();
            self.cached_generation = Some(self.generation);
            self.rebuilds += 1;
        }
        &self.cache
    }

    /// The path a `push_field(name)` would produce, without pushing.
    pub fn peek_child_path(&mut self, name: &str) -> String {
        let child = field_segment(name);
        let mut path = self.current_path().to_string();
        path.push_str(&child);
        path
    }

    /// The path a `push_index(idx)` would produce, without pushing.
    pub fn peek_index_path(&mut self, idx: usize) -> String {
        let mut path = self.current_path().to_string();
        path.push_str(&index_segment(idx));
        path
    }

    /// Number of pushed segments, not counting the root.
    pub fn depth(&self) -> usize {
        self.segments.len() - 1
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// How many times the rendered path has been rebuilt.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }
}
