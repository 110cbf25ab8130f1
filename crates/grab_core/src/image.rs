use url::Url;

const REWRITE_SUFFIX: &str = "gifv";
const REWRITE_REPLACEMENT: &str = "mp4";
const PROFILE_BASE: &str = "https://www.reddit.com/user";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Author {
    pub name: String,
    pub link: String,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let link = format!("{PROFILE_BASE}/{name}/");
        Self { name, link }
    }
}

/// A feed entry believed to reference a directly downloadable image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Image {
    pub id: String,
    /// Stable dedup key derived from the link's final path segment.
    pub image_id: String,
    pub link: String,
    /// Set once the worker has rewritten `link` for download.
    pub rewritten_link: Option<String>,
    pub feed: String,
    pub author: Author,
    pub title: String,
    pub post_link: String,
    pub source: String,
}

impl Image {
    /// Link the worker should fetch: the rewritten link when present.
    pub fn download_link(&self) -> &str {
        self.rewritten_link.as_deref().unwrap_or(&self.link)
    }

    /// Applies the download rewrite to `link`, recording the result.
    pub fn apply_rewrite(&mut self) {
        self.rewritten_link = rewrite_link(&self.link);
    }

    /// File name the image is stored under.
    pub fn file_name(&self) -> String {
        final_path_segment(self.download_link())
    }
}

/// Last segment of the URL path, without query or fragment.
///
/// Links that do not parse as absolute URLs fall back to the text after the
/// last `/`.
pub fn final_path_segment(link: &str) -> String {
    match Url::parse(link) {
        Ok(url) => url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default()
            .to_string(),
        Err(_) => link.rsplit('/').next().unwrap_or_default().to_string(),
    }
}

/// Text of the final path segment before its first `.`.
pub fn image_id_from_link(link: &str) -> String {
    let segment = final_path_segment(link);
    segment.split('.').next().unwrap_or_default().to_string()
}

/// True when the final path segment carries an extension, which rules out
/// galleries and album pages.
pub fn has_direct_extension(link: &str) -> bool {
    final_path_segment(link).contains('.')
}

/// Candidate filter applied to every listing entry.
pub fn is_image_candidate(domain: Option<&str>, post_hint: Option<&str>, link: &str) -> bool {
    let hosted_image = domain.is_some_and(|d| d.contains("imgur"))
        || post_hint.is_some_and(|hint| hint.contains("image"));
    hosted_image && has_direct_extension(link)
}

/// Replaces a trailing `gifv` with `mp4`; `None` when the link is left as is.
pub fn rewrite_link(link: &str) -> Option<String> {
    link.strip_suffix(REWRITE_SUFFIX)
        .map(|stem| format!("{stem}{REWRITE_REPLACEMENT}"))
}
