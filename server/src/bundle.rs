use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{Level, debug, info, instrument};
use walkdir::WalkDir;

use crate::{config::SiteConfig, http::svc::SHELL_FILE};
use common::route::Page;
use content::blog_posts;

pub const NOT_FOUND_FILE: &str = "404.html";
pub const SITEMAP_FILE: &str = "sitemap.xml";
pub const ROBOTS_FILE: &str = "robots.txt";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BundleReport {
    pub files_copied: usize,
    pub sitemap_urls: usize,
}

// one sitemap entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SitemapUrl {
    pub loc: String,
    pub lastmod: Option<&'static str>,
}

// every public page, fixed pages first and then one entry per post
pub fn sitemap_urls(site: &SiteConfig) -> Vec<SitemapUrl> {
    let fixed = Page::static_pages().into_iter().map(|page| SitemapUrl {
        loc: site.url_for(&page.path()),
        lastmod: None,
    });

    let posts = blog_posts().iter().map(|post| SitemapUrl {
        loc: site.url_for(
            &Page::BlogPost {
                slug: post.slug.to_owned(),
            }
            .path(),
        ),
        lastmod: Some(post.date),
    });

    fixed.chain(posts).collect()
}

pub fn render_sitemap(urls: &[SitemapUrl]) -> String {
    let mut xml = String::from(concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
        "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n"
    ));

    for url in urls {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", xml_escape(&url.loc)));
        if let Some(lastmod) = url.lastmod {
            xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

// assemble the publishable site
//
// the dioxus output directory is copied verbatim, then the files a static host
// needs for a single page app are added next to it
#[instrument(level = Level::DEBUG, skip(site))]
pub async fn build_bundle(dist: &Path, out: &Path, site: &SiteConfig) -> anyhow::Result<BundleReport> {
    let shell = dist.join(SHELL_FILE);
    if !shell.is_file() {
        return Err(anyhow::Error::msg(format!(
            "{} has no {SHELL_FILE}; build the webapp first",
            dist.display()
        )));
    }

    let dist = tokio::fs::canonicalize(dist)
        .await
        .with_context(|| format!("failed to resolve {}", dist.display()))?;

    tokio::fs::create_dir_all(out)
        .await
        .with_context(|| format!("failed to create {}", out.display()))?;

    let out = tokio::fs::canonicalize(out).await?;

    if out.starts_with(&dist) {
        return Err(anyhow::Error::msg(
            "the output directory must not be inside the dist directory",
        ));
    }

    let mut report = BundleReport::default();

    for entry in WalkDir::new(&dist).min_depth(1) {
        let entry = entry?;
        let target = out.join(relative(&dist, entry.path())?);

        if entry.file_type().is_dir() {
            tokio::fs::create_dir_all(&target).await?;
        } else {
            debug!(src = ?entry.path(), "copying");
            tokio::fs::copy(entry.path(), &target)
                .await
                .with_context(|| format!("failed to copy {}", entry.path().display()))?;
            report.files_copied += 1;
        }
    }

    // static hosts serve 404.html for unknown paths, which lets the app route them
    tokio::fs::copy(&shell, out.join(NOT_FOUND_FILE)).await?;

    let urls = sitemap_urls(site);
    report.sitemap_urls = urls.len();

    tokio::fs::write(out.join(SITEMAP_FILE), render_sitemap(&urls)).await?;
    tokio::fs::write(
        out.join(ROBOTS_FILE),
        format!(
            "User-agent: *\nAllow: /\nSitemap: {}\n",
            site.url_for(&format!("/{SITEMAP_FILE}"))
        ),
    )
    .await?;

    info!(
        files = report.files_copied,
        urls = report.sitemap_urls,
        "bundle written to {}",
        out.display()
    );

    Ok(report)
}

fn relative(base: &Path, path: &Path) -> anyhow::Result<PathBuf> {
    path.strip_prefix(base)
        .map(Path::to_path_buf)
        .with_context(|| format!("{} is outside {}", path.display(), base.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SHELL_FILE), "<html></html>").unwrap();
        std::fs::create_dir_all(dir.path().join("wasm")).unwrap();
        std::fs::write(dir.path().join("wasm/webapp_bg.wasm"), [0u8, 97, 115, 109]).unwrap();
        dir
    }

    fn site() -> SiteConfig {
        SiteConfig {
            base_url: "https://example.org/".to_owned(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_sitemap_lists_pages_and_posts() {
        let urls = sitemap_urls(&site());

        assert_eq!(urls.len(), 5 + blog_posts().len());
        assert_eq!(urls[0].loc, "https://example.org/");
        assert!(urls.iter().any(|u| {
            u.loc == "https://example.org/blog/building-scalable-react-applications"
                && u.lastmod == Some("2024-01-15")
        }));
    }

    #[test]
    fn test_sitemap_escapes_locations() {
        let xml = render_sitemap(&[SitemapUrl {
            loc: "https://example.org/?a=1&b=2".to_owned(),
            lastmod: None,
        }]);

        assert!(xml.contains("<loc>https://example.org/?a=1&amp;b=2</loc>"));
        assert!(!xml.contains("<lastmod>"));
    }

    #[tokio::test]
    async fn test_build_bundle() {
        let dist = dist();
        let out = tempfile::tempdir().unwrap();

        let report = build_bundle(dist.path(), out.path(), &site()).await.unwrap();

        assert_eq!(report.files_copied, 2);
        assert!(out.path().join("wasm/webapp_bg.wasm").is_file());
        assert_eq!(
            std::fs::read_to_string(out.path().join(NOT_FOUND_FILE)).unwrap(),
            "<html></html>"
        );

        let sitemap = std::fs::read_to_string(out.path().join(SITEMAP_FILE)).unwrap();
        assert_eq!(sitemap.matches("<url>").count(), report.sitemap_urls);

        let robots = std::fs::read_to_string(out.path().join(ROBOTS_FILE)).unwrap();
        assert!(robots.contains("Sitemap: https://example.org/sitemap.xml"));
    }

    #[tokio::test]
    async fn test_missing_shell_is_an_error() {
        let dist = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();

        assert!(build_bundle(dist.path(), out.path(), &site()).await.is_err());
    }

    #[tokio::test]
    async fn test_output_inside_dist_is_rejected() {
        let dist = dist();
        let out = dist.path().join("public");

        assert!(build_bundle(dist.path(), &out, &site()).await.is_err());
    }
}
