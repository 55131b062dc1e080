use super::*;

#[test]
fn toggle_id_adds_when_absent() {
    let (list, saved) = toggle_id(vec!["j-1".to_owned()], "j-2");
    assert!(saved);
    assert_eq!(list, vec!["j-1".to_owned(), "j-2".to_owned()]);
}

#[test]
fn toggle_id_removes_when_present() {
    let (list, saved) = toggle_id(vec!["j-1".to_owned(), "j-2".to_owned()], "j-1");
    assert!(!saved);
    assert_eq!(list, vec!["j-2".to_owned()]);
}

#[test]
fn toggle_id_twice_round_trips() {
    let (list, saved) = toggle_id(vec![], "j-9");
    assert!(saved);
    let (list, saved) = toggle_id(list, "j-9");
    assert!(!saved);
    assert!(list.is_empty());
}
