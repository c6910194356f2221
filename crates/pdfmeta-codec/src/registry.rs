use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::error::{CodecError, CodecResult};
use crate::json::JsonCodec;
use crate::traits::DocumentCodec;

/// Extension-to-codec registry.
///
/// Operations resolve the codec for a path through this map instead of
/// branching on extension strings, so a registered format works everywhere
/// at once. Extensions are matched case-sensitively, without the leading
/// dot.
#[derive(Clone)]
pub struct FormatRegistry {
    codecs: HashMap<String, Arc<dyn DocumentCodec>>,
}

impl FormatRegistry {
    /// Registry with no formats. Useful for embedding custom codec sets.
    pub fn empty() -> Self {
        Self {
            codecs: HashMap::new(),
        }
    }

    /// Registry with the built-in formats: currently JSON only.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(JsonCodec));
        registry
    }

    /// Register a codec under its own format name, replacing any previous
    /// codec for that extension.
    pub fn register(&mut self, codec: Arc<dyn DocumentCodec>) {
        self.codecs.insert(codec.format().to_owned(), codec);
    }

    /// Whether a codec is registered for the given extension.
    pub fn is_registered(&self, extension: &str) -> bool {
        self.codecs.contains_key(extension)
    }

    /// Registered format names, sorted.
    pub fn formats(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.codecs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// The extension of a path as this registry matches it, if any.
    pub fn extension_of(path: &Path) -> Option<&str> {
        path.extension().and_then(|e| e.to_str())
    }

    /// Resolve the codec for a path by its extension.
    ///
    /// Fails with [`CodecError::UnsupportedFormat`] when the path has no
    /// extension or no codec is registered for it.
    pub fn resolve(&self, path: &Path) -> CodecResult<Arc<dyn DocumentCodec>> {
        let extension = Self::extension_of(path).unwrap_or("");
        self.codecs
            .get(extension)
            .cloned()
            .ok_or_else(|| CodecError::UnsupportedFormat {
                path: path.display().to_string(),
                extension: extension.to_owned(),
            })
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("formats", &self.formats())
            .finish()
    }
}
