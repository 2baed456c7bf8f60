use super::*;

#[test]
fn push_assigns_unique_ids() {
    let mut toasts = Toasts::default();
    let a = toasts.push(ToastKind::Success, "Saved");
    let b = toasts.push(ToastKind::Success, "Saved");
    assert_ne!(a, b);
    assert_eq!(toasts.items.len(), 2);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut toasts = Toasts::default();
    let keep = toasts.push(ToastKind::Info, "one");
    let gone = toasts.push(ToastKind::Error, "two");
    assert!(toasts.dismiss(&gone));
    assert!(!toasts.dismiss(&gone));
    assert_eq!(toasts.items.len(), 1);
    assert_eq!(toasts.items[0].id, keep);
}

#[test]
fn count_filters_by_kind() {
    let mut toasts = Toasts::default();
    toasts.push(ToastKind::Error, "a");
    toasts.push(ToastKind::Success, "b");
    toasts.push(ToastKind::Error, "c");
    assert_eq!(toasts.count(ToastKind::Error), 2);
    assert_eq!(toasts.count(ToastKind::Info), 0);
}

#[test]
fn notify_pushes_into_signal() {
    let owner = Owner::new();
    owner.with(|| {
        let toasts = RwSignal::new(Toasts::default());
        notify(toasts, ToastKind::Success, "Logged in successfully!");
        let items = toasts.get_untracked().items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].message, "Logged in successfully!");
    });
}

#[test]
fn kind_css_classes_differ() {
    assert_ne!(ToastKind::Success.css_class(), ToastKind::Error.css_class());
}
