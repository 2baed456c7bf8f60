use super::*;

#[test]
fn category_filter_treats_all_as_no_filter() {
    assert_eq!(category_filter("all"), None);
    assert_eq!(category_filter(""), None);
}

#[test]
fn category_filter_passes_named_category() {
    assert_eq!(category_filter("Technology"), Some("Technology"));
}
