use super::*;

fn message(text: &str, sender: Sender) -> Message {
    Message { text: text.to_owned(), sender, time: "08:15 AM".to_owned() }
}

// =============================================================
// Line breaks
// =============================================================

#[test]
fn text_lines_maps_newlines_to_breaks() {
    assert_eq!(text_lines("a\nb\n\nc"), vec!["a", "b", "", "c"]);
}

#[test]
fn text_lines_single_line_unchanged() {
    assert_eq!(text_lines("<b>plain</b> *text*"), vec!["<b>plain</b> *text*"]);
}

#[test]
fn project_copies_sender_and_time() {
    let node = RenderedMessage::project(7, &message("hi\nthere", Sender::Bot));
    assert_eq!(node.key, 7);
    assert_eq!(node.sender, Sender::Bot);
    assert_eq!(node.lines, vec!["hi", "there"]);
    assert_eq!(node.time, "08:15 AM");
}

// =============================================================
// SignalView
// =============================================================

#[test]
fn signal_view_starts_closed_with_unread_badge() {
    let view = SignalView::new();
    assert!(!view.open.get_untracked());
    assert!(view.unread.get_untracked());
    assert!(!view.typing.get_untracked());
    assert!(view.messages.get_untracked().is_empty());
}

#[test]
fn render_all_is_idempotent() {
    let view = SignalView::new();
    let log = vec![message("one", Sender::User), message("two", Sender::Bot)];
    view.render_all(&log);
    view.render_all(&log);
    let nodes = view.messages.get_untracked();
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].lines, vec!["one"]);
    assert_eq!(nodes[1].lines, vec!["two"]);
}

#[test]
fn render_one_appends_without_touching_existing_nodes() {
    let view = SignalView::new();
    view.render_all(&[message("one", Sender::User)]);
    let before = view.messages.get_untracked()[0].clone();
    view.render_one(&message("two", Sender::Bot));
    let nodes = view.messages.get_untracked();
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0], before);
}

#[test]
fn keys_stay_unique_after_clear() {
    let view = SignalView::new();
    view.render_one(&message("one", Sender::User));
    let first_key = view.messages.get_untracked()[0].key;
    view.clear_list();
    assert!(view.messages.get_untracked().is_empty());
    view.render_one(&message("welcome", Sender::Bot));
    assert_ne!(view.messages.get_untracked()[0].key, first_key);
}

#[test]
fn scroll_requests_increment() {
    let view = SignalView::new();
    view.scroll_to_bottom();
    view.scroll_to_bottom();
    assert_eq!(view.scroll_requests.get_untracked(), 2);
}

#[test]
fn opening_clears_unread_badge_and_closing_keeps_it_cleared() {
    let view = SignalView::new();
    view.set_open(true);
    assert!(view.open.get_untracked());
    assert!(!view.unread.get_untracked());
    view.set_open(false);
    assert!(!view.open.get_untracked());
    assert!(!view.unread.get_untracked());
}

#[test]
fn clear_input_empties_draft() {
    let view = SignalView::new();
    view.input.set("draft".to_owned());
    view.clear_input();
    assert_eq!(view.input.get_untracked(), "");
}
