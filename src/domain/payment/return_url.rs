//! Cleanup of the checkout return URL.

use url::Url;

use super::session_ref::SESSION_QUERY_PARAM;

/// Returns `url` without any `session_id` query parameter.
///
/// Remaining parameters keep their order and the fragment is preserved.
/// When nothing is left the query string is removed entirely, so a reload of
/// the returned URL can never trigger a second verification.
pub fn strip_session_param(url: &Url) -> Url {
    let remaining: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != SESSION_QUERY_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut cleaned = url.clone();
    if remaining.is_empty() {
        cleaned.set_query(None);
    } else {
        cleaned
            .query_pairs_mut()
            .clear()
            .extend_pairs(remaining.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(s: &str) -> String {
        strip_session_param(&Url::parse(s).unwrap()).to_string()
    }

    #[test]
    fn removes_only_parameter() {
        assert_eq!(
            strip("https://app.example.com/creator/jane?session_id=cs_1"),
            "https://app.example.com/creator/jane"
        );
    }

    #[test]
    fn keeps_other_parameters_in_order() {
        assert_eq!(
            strip("https://app.example.com/?tab=tips&session_id=cs_1&ref=home"),
            "https://app.example.com/?tab=tips&ref=home"
        );
    }

    #[test]
    fn removes_repeated_parameter() {
        assert_eq!(
            strip("https://app.example.com/?session_id=a&session_id=b"),
            "https://app.example.com/"
        );
    }

    #[test]
    fn preserves_fragment() {
        assert_eq!(
            strip("https://app.example.com/?session_id=cs_1#supporters"),
            "https://app.example.com/#supporters"
        );
    }

    #[test]
    fn url_without_session_is_unchanged() {
        assert_eq!(
            strip("https://app.example.com/?tab=tips"),
            "https://app.example.com/?tab=tips"
        );
    }
}
