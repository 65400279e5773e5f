//! Tracker URLs and anchor tags.

use crate::version::UrlScheme;

pub const CLOSE_TAG: &str = "</a>";

/// Append the trailing `/` every tracker path is joined onto.
pub fn normalize_base_url(base_url: &str) -> String {
    let mut url = base_url.trim().to_string();
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

pub fn issue_url(base_url: &str, number: &str, version_number: Option<&str>) -> String {
    format!(
        "{}{}{}",
        base_url,
        UrlScheme::for_version(version_number).issue_path(),
        number.trim()
    )
}

pub fn project_url(base_url: &str, project: &str) -> String {
    format!("{}projects/{}", base_url, project.trim())
}

pub fn open_tag(url: &str) -> String {
    format!("<a href='{}'>", url)
}
