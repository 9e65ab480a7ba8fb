//! Offline asset bucket.
//!
//! Static files are pre-cached once at startup into a versioned bucket and
//! looked up cache-first afterwards; a miss falls back to the source the bucket
//! was installed from. Bumping [`CACHE_NAME`] is the only invalidation.

use std::{borrow::Cow, collections::HashMap, sync::OnceLock};

use rust_embed::RustEmbed;

/// Version identifier of the bucket.
pub const CACHE_NAME: &str = "quad-core-cogitator-v1";

/// Everything the window needs to render with no network.
pub const FILES_TO_CACHE: &[&str] = &["main.css", "favicon.svg"];

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

/// Where assets come from when the bucket misses.
pub trait AssetSource {
    fn fetch(&self, path: &str) -> Option<Cow<'static, [u8]>>;
}

pub struct Embedded;

impl AssetSource for Embedded {
    fn fetch(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        EmbeddedAssets::get(&canonical_asset_path(path)).map(|file| file.data)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("asset {0} is missing from the bundle")]
    Missing(String),
    #[error("asset {0} is not valid UTF-8")]
    NotUtf8(String),
}

pub struct AssetCache<S> {
    name: &'static str,
    entries: HashMap<String, Cow<'static, [u8]>>,
    source: S,
}

impl<S: AssetSource> AssetCache<S> {
    /// Pre-caches every file in `files`; any missing file aborts the install.
    pub fn install(name: &'static str, files: &[&str], source: S) -> Result<Self, AssetError> {
        let mut entries = HashMap::with_capacity(files.len());
        for file in files {
            let key = canonical_asset_path(file);
            let data = source
                .fetch(&key)
                .ok_or_else(|| AssetError::Missing(key.clone()))?;
            entries.insert(key, data);
        }
        tracing::info!(bucket = name, files = entries.len(), "pre-cached offline assets");
        Ok(Self {
            name,
            entries,
            source,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(&canonical_asset_path(path))
    }

    /// Cache first, then the source.
    pub fn get(&self, path: &str) -> Result<Cow<'static, [u8]>, AssetError> {
        let key = canonical_asset_path(path);
        if let Some(hit) = self.entries.get(&key) {
            return Ok(hit.clone());
        }
        self.source.fetch(&key).ok_or(AssetError::Missing(key))
    }

    pub fn text(&self, path: &str) -> Result<String, AssetError> {
        let data = self.get(path)?;
        String::from_utf8(data.into_owned()).map_err(|_| AssetError::NotUtf8(path.to_string()))
    }

    pub fn data_uri(&self, path: &str) -> Result<String, AssetError> {
        let data = self.get(path)?;
        Ok(format!(
            "data:{};base64,{}",
            guess_mime(path),
            encode_base64(data.as_ref())
        ))
    }
}

static BUCKET: OnceLock<AssetCache<Embedded>> = OnceLock::new();
static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

/// Installs the embedded bucket. Called once before the window opens.
pub fn install() -> Result<&'static AssetCache<Embedded>, AssetError> {
    if let Some(bucket) = BUCKET.get() {
        return Ok(bucket);
    }
    let bucket = AssetCache::install(CACHE_NAME, FILES_TO_CACHE, Embedded)?;
    let css = bucket.text("main.css")?;
    let favicon = bucket.data_uri("favicon.svg")?;
    MAIN_CSS.get_or_init(|| css);
    FAVICON_DATA_URI.get_or_init(|| favicon);
    Ok(BUCKET.get_or_init(|| bucket))
}

/// Contents of `assets/main.css`; empty until [`install`] has run.
pub fn main_css() -> &'static str {
    MAIN_CSS.get().map(String::as_str).unwrap_or_default()
}

pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI.get().map(String::as_str).unwrap_or_default()
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if let Some(rest) = trimmed.strip_prefix("assets/") {
        rest.to_string()
    } else {
        trimmed.to_string()
    }
}

fn guess_mime(path: &str) -> &'static str {
    if path.ends_with(".css") {
        "text/css"
    } else if path.ends_with(".svg") {
        "image/svg+xml"
    } else if path.ends_with(".ico") {
        "image/x-icon"
    } else if path.ends_with(".png") {
        "image/png"
    } else {
        "application/octet-stream"
    }
}

fn encode_base64(input: &[u8]) -> String {
    const TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut output = String::with_capacity((input.len() + 2) / 3 * 4);

    for chunk in input.chunks(3) {
        let b0 = chunk[0];
        let b1 = *chunk.get(1).unwrap_or(&0);
        let b2 = *chunk.get(2).unwrap_or(&0);

        output.push(TABLE[(b0 >> 2) as usize] as char);
        output.push(TABLE[(((b0 & 0b11) << 4) | (b1 >> 4)) as usize] as char);

        if chunk.len() > 1 {
            output.push(TABLE[(((b1 & 0b1111) << 2) | (b2 >> 6)) as usize] as char);
        } else {
            output.push('=');
        }

        if chunk.len() > 2 {
            output.push(TABLE[(b2 & 0b0011_1111) as usize] as char);
        } else {
            output.push('=');
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    /// Serves a fixed set of files and counts how often it is hit.
    struct CountingSource {
        files: HashMap<&'static str, &'static [u8]>,
        hits: Cell<usize>,
    }

    impl CountingSource {
        fn new(files: &[(&'static str, &'static [u8])]) -> Self {
            Self {
                files: files.iter().copied().collect(),
                hits: Cell::new(0),
            }
        }
    }

    impl AssetSource for &CountingSource {
        fn fetch(&self, path: &str) -> Option<Cow<'static, [u8]>> {
            self.hits.set(self.hits.get() + 1);
            self.files.get(path).map(|data| Cow::Borrowed(*data))
        }
    }

    #[test]
    fn cached_files_do_not_touch_the_source() {
        let source = CountingSource::new(&[
            ("main.css", "body{}".as_bytes()),
            ("extra.txt", "hi".as_bytes()),
        ]);
        let bucket = AssetCache::install("test-v1", &["main.css"], &source).unwrap();
        assert_eq!(source.hits.get(), 1);

        assert_eq!(bucket.text("/assets/main.css").unwrap(), "body{}");
        assert_eq!(source.hits.get(), 1);

        assert_eq!(bucket.text("extra.txt").unwrap(), "hi");
        assert_eq!(source.hits.get(), 2);
        assert!(!bucket.contains("extra.txt"));
    }

    #[test]
    fn install_fails_fast_on_missing_file() {
        let source = CountingSource::new(&[("main.css", "body{}".as_bytes())]);
        let result = AssetCache::install("test-v1", &["main.css", "favicon.svg"], &source);
        assert!(matches!(result, Err(AssetError::Missing(path)) if path == "favicon.svg"));
    }

    #[test]
    fn unknown_paths_are_reported() {
        let source = CountingSource::new(&[]);
        let bucket = AssetCache::install("test-v1", &[], &source).unwrap();
        assert!(matches!(bucket.get("nope.js"), Err(AssetError::Missing(_))));
    }

    #[test]
    fn non_utf8_text_is_rejected() {
        const BLOB: &[u8] = &[0xff, 0xfe];
        let source = CountingSource::new(&[("blob.bin", BLOB)]);
        let bucket = AssetCache::install("test-v1", &["blob.bin"], &source).unwrap();
        assert!(matches!(bucket.text("blob.bin"), Err(AssetError::NotUtf8(_))));
    }

    #[test]
    fn data_uris_are_base64_encoded() {
        let source = CountingSource::new(&[("icon.svg", "Man".as_bytes())]);
        let bucket = AssetCache::install("test-v1", &["icon.svg"], &source).unwrap();
        assert_eq!(bucket.data_uri("icon.svg").unwrap(), "data:image/svg+xml;base64,TWFu");
        assert_eq!(encode_base64(b"Ma"), "TWE=");
        assert_eq!(encode_base64(b"M"), "TQ==");
    }

    #[test]
    fn embedded_bucket_holds_every_precached_file() {
        let bucket = install().unwrap();
        assert_eq!(bucket.name(), CACHE_NAME);
        for file in FILES_TO_CACHE {
            assert!(bucket.contains(file));
        }
        assert!(!main_css().is_empty());
        assert!(favicon_data_uri().starts_with("data:image/svg+xml;base64,"));
    }
}
