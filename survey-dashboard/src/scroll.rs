/// Selector to scroll to when a click lands on an in-page anchor link.
pub fn anchor_target<'a>(tag_name: &str, href: Option<&'a str>) -> Option<&'a str> {
    if !tag_name.eq_ignore_ascii_case("a") {
        return None;
    }
    href.filter(|h| h.starts_with('#') && h.len() > 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_fragment_links_scroll() {
        assert_eq!(anchor_target("A", Some("#charts")), Some("#charts"));
        assert_eq!(anchor_target("A", Some("/report")), None);
        assert_eq!(anchor_target("A", Some("#")), None);
        assert_eq!(anchor_target("A", None), None);
        assert_eq!(anchor_target("BUTTON", Some("#charts")), None);
    }
}
