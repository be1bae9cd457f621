use crate::error::CfResult;
use crate::scorer::{loader, LanguageModel};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Identifies a language model by the text it was trained on and its width.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub width: usize,
    pub digest: String,
}

impl CacheKey {
    pub fn new(cleaned_text: &str, width: usize) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(cleaned_text.as_bytes());
        Self {
            width,
            digest: hex::encode(hasher.finalize()),
        }
    }

    pub fn file_name(&self) -> String {
        let short = &self.digest[..self.digest.len().min(16)];
        format!("{}-grams-{}.tsv", self.width, short)
    }
}

/// Storage backend for computed language models.
pub trait ModelStore {
    fn load(&self, key: &CacheKey) -> CfResult<Option<LanguageModel>>;
    fn save(&mut self, key: &CacheKey, model: &LanguageModel) -> CfResult<()>;
}

/// One TSV file per key inside a directory.
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, key: &CacheKey) -> PathBuf {
        self.root.join(key.file_name())
    }
}

impl ModelStore for DirStore {
    fn load(&self, key: &CacheKey) -> CfResult<Option<LanguageModel>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        loader::load_from_file(&path).map(Some)
    }

    fn save(&mut self, key: &CacheKey, model: &LanguageModel) -> CfResult<()> {
        fs::create_dir_all(&self.root)?;
        let path = self.path_for(key);
        loader::save_to_file(model, &path)?;
        debug!(path = %path.display(), "cached language model");
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryStore {
    models: HashMap<CacheKey, LanguageModel>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl ModelStore for MemoryStore {
    fn load(&self, key: &CacheKey) -> CfResult<Option<LanguageModel>> {
        Ok(self.models.get(key).cloned())
    }

    fn save(&mut self, key: &CacheKey, model: &LanguageModel) -> CfResult<()> {
        let mut stored = model.clone();
        stored.clear_memoized();
        self.models.insert(key.clone(), stored);
        Ok(())
    }
}

/// Returns the cached model for (`cleaned_text`, `width`), building and
/// storing it on a miss.
pub fn load_or_build<S: ModelStore>(
    store: &mut S,
    cleaned_text: &str,
    width: usize,
) -> CfResult<LanguageModel> {
    let key = CacheKey::new(cleaned_text, width);
    if let Some(model) = store.load(&key)? {
        info!(width, ngrams = model.len(), "language model cache hit");
        return Ok(model);
    }

    info!(width, "building {}-gram language model", width);
    let model = LanguageModel::build(cleaned_text, width)?;
    store.save(&key, &model)?;
    Ok(model)
}
