use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, info, instrument};

pub const DEFAULT_CONFIG: &str = "folio.toml";

// folio configuration
//
// every field has a default, so an empty (or missing) file describes a working
// local preview; command line flags are applied on top of whatever is read here
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct FolioConfig {
    pub http: HttpConfig,
    pub site: SiteConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    // ip and port for the preview server
    pub socket: String,

    // location of the built wasm app, i.e. the dioxus output directory
    pub doc_root: PathBuf,
}

impl Default for HttpConfig {
    fn default() -> Self {
        HttpConfig {
            socket: "127.0.0.1:8080".to_owned(),
            doc_root: PathBuf::from("target/dx/webapp/release/web/public"),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    // absolute url the bundle is published under, used for the sitemap
    pub base_url: String,

    pub title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            base_url: "https://omarahsan.dev".to_owned(),
            title: content::SITE_NAME.to_owned(),
        }
    }
}

impl SiteConfig {
    // base_url without a trailing slash, so paths can be appended directly
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
struct TomlConfigFile {
    config: FolioConfig,
}

pub fn parse_config(doc: &str) -> anyhow::Result<FolioConfig> {
    let data: TomlConfigFile = toml::from_str(doc).context("failed to parse config file")?;
    Ok(data.config)
}

// an explicitly named file must exist; the default one is optional
#[instrument(level=Level::DEBUG)]
pub async fn read_config(filename: Option<&Path>) -> anyhow::Result<Arc<FolioConfig>> {
    let (path, required) = match filename {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG), false),
    };

    if !required && !tokio::fs::try_exists(&path).await.unwrap_or(false) {
        info!("no {DEFAULT_CONFIG} found, using defaults");
        return Ok(Arc::new(FolioConfig::default()));
    }

    debug!("reading config file");

    let doc = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("failed to read config file {}", path.display()))?;

    let config = parse_config(&doc)?;

    debug!("successfully parsed config file");
    Ok(Arc::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(parse_config("").unwrap(), FolioConfig::default());
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let config = parse_config(
            r#"
            [config.http]
            socket = "[::1]:9000"

            [config.site]
            base_url = "https://example.org/"
            "#,
        )
        .unwrap();

        assert_eq!(config.http.socket, "[::1]:9000");
        assert_eq!(config.http.doc_root, HttpConfig::default().doc_root);
        assert_eq!(config.site.title, content::SITE_NAME);
        assert_eq!(config.site.url_for("/blog"), "https://example.org/blog");
    }

    #[test]
    fn test_bad_document_is_an_error() {
        assert!(parse_config("[config.http]\nsocket = 8080\n").is_err());
    }

    #[tokio::test]
    async fn test_read_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");

        tokio::fs::write(&path, "[config.http]\ndoc_root = \"/srv/www\"\n")
            .await
            .unwrap();

        let config = read_config(Some(&path)).await.unwrap();
        assert_eq!(config.http.doc_root, PathBuf::from("/srv/www"));
    }

    #[tokio::test]
    async fn test_named_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");

        assert!(read_config(Some(&missing)).await.is_err());
    }
}
