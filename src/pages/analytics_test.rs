use super::*;

fn campaigns() -> Vec<Campaign> {
    ["a", "b", "c"]
        .into_iter()
        .map(|id| Campaign { id: id.to_owned(), ..Campaign::default() })
        .collect()
}

#[test]
fn resolve_selection_defaults_to_first() {
    let rows = campaigns();
    assert_eq!(resolve_selection(&rows, None).map(|c| c.id.as_str()), Some("a"));
}

#[test]
fn resolve_selection_uses_chosen_id() {
    let rows = campaigns();
    assert_eq!(resolve_selection(&rows, Some("c")).map(|c| c.id.as_str()), Some("c"));
}

#[test]
fn resolve_selection_falls_back_when_chosen_id_is_gone() {
    let rows = campaigns();
    assert_eq!(resolve_selection(&rows, Some("zzz")).map(|c| c.id.as_str()), Some("a"));
}

#[test]
fn resolve_selection_empty_list_selects_nothing() {
    assert!(resolve_selection(&[], None).is_none());
}
