use reqwest::Url;

/// Builds the proxied URL for a recommendation thumbnail.
///
/// Images are fetched through `GET <base>/api/image?url=<encoded>` so the service
/// handles the cross-origin download. Returns `None` for an empty image URL or an
/// unusable base URL.
pub fn image_proxy_url(base_url: &str, image_url: &str) -> Option<String> {
    if image_url.trim().is_empty() {
        return None;
    }

    let base = base_url.trim_end_matches('/');
    let mut url = Url::parse(&format!("{}/api/image", base)).ok()?;
    url.query_pairs_mut().append_pair("url", image_url);
    Some(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_original_url_as_query_value() {
        let url = image_proxy_url(
            "http://127.0.0.1:8000",
            "https://cdn.example.com/cover.jpg?size=250&x=1",
        )
        .unwrap();
        assert_eq!(
            url,
            "http://127.0.0.1:8000/api/image?url=https%3A%2F%2Fcdn.example.com%2Fcover.jpg%3Fsize%3D250%26x%3D1"
        );
    }

    #[test]
    fn empty_image_has_no_proxy_url() {
        assert_eq!(image_proxy_url("http://127.0.0.1:8000", ""), None);
    }
}
