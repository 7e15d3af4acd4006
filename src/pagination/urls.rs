/// Build a URL from a path and query parameters, skipping empty values
pub fn build_query_url(path: &str, params: &[(&str, String)]) -> String {
    let query: Vec<String> = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect();

    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query.join("&"))
    }
}

/// Build paginated URL with &page= or ?page= based on existing params
pub fn build_paginated_url_with_params(base_url: &str, page: usize) -> String {
    if is_first_page(page) {
        base_url.to_string()
    } else {
        let separator = determine_separator(base_url);
        format!("{}{}page={}", base_url, separator, page)
    }
}

fn is_first_page(page: usize) -> bool {
    page == 1
}

fn determine_separator(url: &str) -> char {
    if url.contains('?') { '&' } else { '?' }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_url_encodes_and_skips_empty() {
        let url = build_query_url(
            "/",
            &[
                ("season", "6".to_string()),
                ("q", "Tom & Jerry".to_string()),
                ("sort", String::new()),
            ],
        );

        assert_eq!(url, "/?season=6&q=Tom%20%26%20Jerry");
        assert_eq!(build_query_url("/", &[]), "/");
    }

    #[test]
    fn test_page_param_separator() {
        assert_eq!(build_paginated_url_with_params("/", 1), "/");
        assert_eq!(build_paginated_url_with_params("/", 2), "/?page=2");
        assert_eq!(build_paginated_url_with_params("/?season=3", 4), "/?season=3&page=4");
    }
}
