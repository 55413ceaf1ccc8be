use crate::path::{PathTracker, normalize_segment};

#[test]
fn test_root_only() {
    let mut path = PathTracker::new();
    assert_eq!(path.current_path(), "$");
    assert_eq!(path.depth(), 0);
}

#[test]
fn test_push_and_pop_round_trip() {
    let mut path = PathTracker::new();
    path.push_field("a");
    path.push_index(0);
    assert_eq!(path.current_path(), "$.a[0]");

    assert!(path.pop());
    assert!(path.pop());
    assert_eq!(path.current_path(), "$");
}

#[test]
fn test_pop_never_removes_root() {
    let mut path = PathTracker::new();
    assert!(!path.pop());
    assert!(!path.pop());
    assert_eq!(path.segments(), &["$".to_string()]);
    assert_eq!(path.current_path(), "$");
}

#[test]
fn test_special_characters_are_quoted() {
    let mut path = PathTracker::new();
    path.push_field("a.b");
    assert_eq!(path.current_path(), "$.'a.b'");

    for name in ["$ref", "a*", "x[1]", "]", "a.b.c"] {
        assert_eq!(normalize_segment(name), format!("'{name}'"));
    }
    for name in ["plain", "with space", "dash-ed", "quote's", ""] {
        assert_eq!(normalize_segment(name), name);
    }
}

#[test]
fn test_repeated_names_are_not_collapsed() {
    let mut path = PathTracker::new();
    path.push_field("items");
    path.push_field("items");
    path.push_index(1);
    path.push_index(1);
    assert_eq!(path.current_path(), "$.items.items[1][1]");
    assert_eq!(path.depth(), 4);
}

#[test]
fn test_peek_does_not_mutate() {
    let mut path = PathTracker::new();
    path.push_field("spec");
    assert_eq!(path.peek_child_path("x"), "$.spec.x");
    assert_eq!(path.peek_child_path("a.b"), "$.spec.'a.b'");
    assert_eq!(path.peek_index_path(3), "$.spec[3]");
    assert_eq!(path.current_path(), "$.spec");
    assert_eq!(path.depth(), 1);

    path.push_field("y");
    assert_eq!(path.current_path(), "$.spec.y");
    path.pop();
    path.pop();
    assert_eq!(path.current_path(), "$");
}

#[test]
fn test_cache_rebuilds_only_after_mutation() {
    let mut path = PathTracker::new();
    path.push_field("a");

    let first = path.current_path().to_string();
    let rebuilds = path.rebuild_count();
    let second = path.current_path().to_string();
    assert_eq!(first, second);
    assert_eq!(path.rebuild_count(), rebuilds);

    // Peeking reads the cache but does not invalidate it.
    path.peek_child_path("b");
    path.peek_index_path(0);
    assert_eq!(path.rebuild_count(), rebuilds);

    path.push_index(2);
    assert_eq!(path.current_path(), "$.a[2]");
    assert_eq!(path.rebuild_count(), rebuilds + 1);

    // A rejected pop on the root leaves the cache valid.
    path.pop();
    path.pop();
    path.current_path();
    let rebuilds = path.rebuild_count();
    path.pop();
    path.current_path();
    assert_eq!(path.rebuild_count(), rebuilds);
}

#[test]
fn test_index_segments_render_decimal() {
    let mut path = PathTracker::new();
    path.push_index(0);
    path.push_index(42);
    path.push_index(usize::MAX);
    assert_eq!(
        path.current_path(),
        format!("$[0][42][{}]", usize::MAX)
    );
}
