use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    backend::TestBackend,
    layout::{Margin, Position, Rect},
    style::Color,
    Terminal,
};
use std::collections::HashSet;
use std::sync::Arc;
use triboard_core::{AppConfig, BoardError, BoardResult};
use triboard_domain::{BoardSnapshot, CardId, ColumnId, Point};
use triboard_persistence::{BoardRepository, JsonFileKvStore, KeyValueStore, MemoryKvStore};
use triboard_tui::events::Event;
use triboard_tui::layout::wrapped_cursor;
use triboard_tui::{ui, App, Hit, ModalIntent, ModalLayout};

const KEY: &str = "trelloBoardState";
const WIDTH: u16 = 90;
const HEIGHT: u16 = 30;

async fn app_with(store: Arc<dyn KeyValueStore>) -> App {
    let mut app = App::load(BoardRepository::new(store, KEY), AppConfig::default()).await;
    app.resize(Rect::new(0, 0, WIDTH, HEIGHT));
    app
}

/// Store seeded with `{"column1":["A","B"],"column2":["C"],"column3":[]}`.
fn seeded_store() -> Arc<MemoryKvStore> {
    Arc::new(MemoryKvStore::with_entry(
        KEY,
        r#"{"column1":["A","B"],"column2":["C"],"column3":[]}"#,
    ))
}

async fn stored(store: &MemoryKvStore) -> Option<BoardSnapshot> {
    let text = store.get(KEY).await.unwrap()?;
    Some(BoardSnapshot::from_json(&text).unwrap())
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

async fn click(app: &mut App, x: u16, y: u16) {
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), x, y))
        .await;
    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), x, y))
        .await;
}

async fn drag(app: &mut App, from: (u16, u16), to: (u16, u16)) {
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), from.0, from.1))
        .await;
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), to.0, to.1))
        .await;
    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), to.0, to.1))
        .await;
}

async fn press(app: &mut App, code: KeyCode) {
    app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        .await;
}

async fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c)).await;
    }
}

fn draw(app: &mut App) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|frame| ui::render(app, frame)).unwrap();
    terminal
}

fn texts(app: &App, column: ColumnId) -> Vec<&str> {
    app.board.texts(column)
}

// Column 1 cards: A at rows 2..=4, B at rows 6..=8. Column 2: C at rows 2..=4.

#[tokio::test]
async fn test_drag_onto_upper_half_inserts_before() {
    let store = seeded_store();
    let mut app = app_with(store.clone()).await;

    drag(&mut app, (5, 3), (40, 2)).await;

    assert_eq!(texts(&app, ColumnId::Column1), vec!["B"]);
    assert_eq!(texts(&app, ColumnId::Column2), vec!["A", "C"]);
    assert!(!app.drag.is_active());

    let snapshot = stored(&store).await.unwrap();
    assert_eq!(snapshot.column1, vec!["B"]);
    assert_eq!(snapshot.column2, vec!["A", "C"]);
    assert!(snapshot.column3.is_empty());
}

#[tokio::test]
async fn test_drag_below_every_card_appends() {
    let store = seeded_store();
    let mut app = app_with(store.clone()).await;

    drag(&mut app, (5, 7), (40, 20)).await;

    assert_eq!(texts(&app, ColumnId::Column1), vec!["A"]);
    assert_eq!(texts(&app, ColumnId::Column2), vec!["C", "B"]);
}

#[tokio::test]
async fn test_drag_down_within_column() {
    let store = seeded_store();
    let mut app = app_with(store.clone()).await;

    drag(&mut app, (5, 3), (5, 20)).await;

    assert_eq!(texts(&app, ColumnId::Column1), vec!["B", "A"]);
}

#[tokio::test]
async fn test_drag_into_empty_column() {
    let store = seeded_store();
    let mut app = app_with(store.clone()).await;

    drag(&mut app, (5, 7), (70, 5)).await;

    assert_eq!(texts(&app, ColumnId::Column3), vec!["B"]);
    assert_eq!(stored(&store).await.unwrap().column3, vec!["B"]);
}

#[tokio::test]
async fn test_release_outside_columns_changes_nothing() {
    let store = Arc::new(MemoryKvStore::new());
    let mut app = app_with(store.clone()).await;
    app.board.push(ColumnId::Column1, "A");
    app.relayout();

    drag(&mut app, (5, 3), (40, HEIGHT - 1)).await;

    assert_eq!(texts(&app, ColumnId::Column1), vec!["A"]);
    assert!(!app.drag.is_active());
    assert!(stored(&store).await.is_none());
}

#[tokio::test]
async fn test_escape_and_focus_loss_cancel_a_drag() {
    let store = seeded_store();
    let mut app = app_with(store.clone()).await;

    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 3))
        .await;
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 40, 2))
        .await;
    assert!(app.drag.is_active());
    press(&mut app, KeyCode::Esc).await;
    assert!(!app.drag.is_active());
    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 40, 2))
        .await;

    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 3))
        .await;
    assert!(app.drag.is_active());
    app.handle_event(Event::FocusLost).await;
    assert!(!app.drag.is_active());

    assert_eq!(texts(&app, ColumnId::Column1), vec!["A", "B"]);
    assert_eq!(texts(&app, ColumnId::Column2), vec!["C"]);
}

#[tokio::test]
async fn test_drag_shows_ghost_indicator_and_target() {
    let mut app = app_with(seeded_store()).await;
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 3))
        .await;
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 55, 2))
        .await;

    let target = app.drag.drop_target().copied().unwrap();
    assert_eq!(target.column, ColumnId::Column2);
    assert_eq!(target.index, 0);

    let terminal = draw(&mut app);
    let buffer = terminal.backend().buffer();
    // ghost keeps the grab offset (3, 1) from the pointer
    assert_eq!(buffer[(52, 1)].symbol(), "┌");
    assert_eq!(buffer[(35, 1)].symbol(), "─");
    assert_eq!(buffer[(30, 0)].fg, Color::Green);
}

#[tokio::test]
async fn test_delete_button_removes_card() {
    let store = seeded_store();
    let mut app = app_with(store.clone()).await;

    let delete = app.layout.card(app.board.get(ColumnId::Column1)[0].id).unwrap().delete_button();
    click(&mut app, delete.x, delete.y).await;

    assert_eq!(texts(&app, ColumnId::Column1), vec!["B"]);
    assert_eq!(stored(&store).await.unwrap().column1, vec!["B"]);
}

#[tokio::test]
async fn test_add_card_through_modal() {
    let store = seeded_store();
    let mut app = app_with(store.clone()).await;

    let add = app.layout.column(ColumnId::Column1).unwrap().add_button;
    click(&mut app, add.x + 2, add.y).await;
    assert_eq!(
        app.modal.as_ref().map(|m| m.intent),
        Some(ModalIntent::AddTo(ColumnId::Column1))
    );

    type_text(&mut app, "  New task ").await;
    press(&mut app, KeyCode::Enter).await;

    assert!(app.modal.is_none());
    assert_eq!(texts(&app, ColumnId::Column1), vec!["A", "B", "New task"]);
    assert_eq!(
        stored(&store).await.unwrap().column1,
        vec!["A", "B", "New task"]
    );
}

#[tokio::test]
async fn test_blank_submission_keeps_modal_open() {
    let store = Arc::new(MemoryKvStore::new());
    let mut app = app_with(store.clone()).await;

    press(&mut app, KeyCode::Char('2')).await;
    type_text(&mut app, "   ").await;
    press(&mut app, KeyCode::Enter).await;

    let modal = app.modal.as_ref().unwrap();
    assert!(modal.is_flashing(std::time::Instant::now()));
    assert!(app.board.is_empty());
    assert!(stored(&store).await.is_none());

    let terminal = draw(&mut app);
    let text_area = ModalLayout::compute(Rect::new(0, 0, WIDTH, HEIGHT)).text_area;
    assert_eq!(
        terminal.backend().buffer()[(text_area.x, text_area.y)].fg,
        Color::Red
    );

    press(&mut app, KeyCode::Esc).await;
    assert!(app.modal.is_none());
    assert!(app.board.is_empty());
}

#[tokio::test]
async fn test_edit_card_through_modal() {
    let store = seeded_store();
    let mut app = app_with(store.clone()).await;

    let edit = app.layout.card(app.board.get(ColumnId::Column1)[0].id).unwrap().edit_button();
    click(&mut app, edit.x, edit.y).await;
    assert_eq!(app.modal.as_ref().unwrap().input.as_str(), "A");

    press(&mut app, KeyCode::Backspace).await;
    type_text(&mut app, "Z").await;
    press(&mut app, KeyCode::Enter).await;

    assert_eq!(texts(&app, ColumnId::Column1), vec!["Z", "B"]);
    assert_eq!(stored(&store).await.unwrap().column1, vec!["Z", "B"]);
}

#[tokio::test]
async fn test_edit_to_whitespace_leaves_card_unchanged() {
    let mut app = app_with(seeded_store()).await;

    let edit = app.layout.card(app.board.get(ColumnId::Column2)[0].id).unwrap().edit_button();
    click(&mut app, edit.x, edit.y).await;
    press(&mut app, KeyCode::Backspace).await;
    type_text(&mut app, "  ").await;
    press(&mut app, KeyCode::Enter).await;

    assert!(app.modal.is_some());
    assert_eq!(texts(&app, ColumnId::Column2), vec!["C"]);
}

#[tokio::test]
async fn test_modal_cancel_paths() {
    let mut app = app_with(seeded_store()).await;
    let layout = ModalLayout::compute(Rect::new(0, 0, WIDTH, HEIGHT));

    for (x, y) in [
        (layout.cancel.x + 1, layout.cancel.y),
        (layout.close.x, layout.close.y),
        (0, 0),
    ] {
        press(&mut app, KeyCode::Char('1')).await;
        type_text(&mut app, "draft").await;
        assert!(app.modal.is_some());

        click(&mut app, x, y).await;
        assert!(app.modal.is_none(), "click at ({x}, {y})");
    }
    assert_eq!(texts(&app, ColumnId::Column1), vec!["A", "B"]);
}

#[tokio::test]
async fn test_save_button_submits() {
    let mut app = app_with(seeded_store()).await;
    let layout = ModalLayout::compute(Rect::new(0, 0, WIDTH, HEIGHT));

    press(&mut app, KeyCode::Char('3')).await;
    type_text(&mut app, "Ship it").await;
    click(&mut app, layout.save.x + 2, layout.save.y).await;

    assert!(app.modal.is_none());
    assert_eq!(texts(&app, ColumnId::Column3), vec!["Ship it"]);
}

/// Number of cards drawn in each column, counted by their delete affordance.
fn drawn_cards(app: &mut App) -> [usize; 3] {
    let terminal = draw(app);
    let buffer = terminal.backend().buffer();
    let mut counts = [0; 3];
    for column in ColumnId::ALL {
        let area = app.layout.column(column).unwrap().area;
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if buffer[(x, y)].symbol() == "✖" {
                    counts[column.index()] += 1;
                }
            }
        }
    }
    counts
}

fn assert_rendered_matches(app: &mut App, step: &str) {
    let drawn = drawn_cards(app);
    for column in ColumnId::ALL {
        let layout = app.layout.column(column).unwrap();
        assert_eq!(
            drawn[column.index()],
            layout.visible_cards().count(),
            "{step}: {column}"
        );
        assert_eq!(
            drawn[column.index()] + layout.hidden_above() + layout.hidden_below(),
            app.board.len(column),
            "{step}: {column}"
        );
    }
}

async fn add_card(app: &mut App, column: char, text: &str) {
    press(app, KeyCode::Char(column)).await;
    type_text(app, text).await;
    press(app, KeyCode::Enter).await;
}

async fn scroll(app: &mut App, kind: MouseEventKind, x: u16, times: usize) {
    for _ in 0..times {
        app.handle_event(mouse(kind, x, 10)).await;
    }
}

/// Ids of the cards of `column` seen while wheeling from the top to the bottom.
async fn cards_seen_by_scrolling(app: &mut App, column: ColumnId) -> HashSet<CardId> {
    let x = app.layout.column(column).unwrap().list.x + 2;
    let len = app.board.len(column);
    scroll(app, MouseEventKind::ScrollUp, x, len).await;
    let mut seen = HashSet::new();
    for _ in 0..=len {
        let layout = app.layout.column(column).unwrap();
        seen.extend(layout.visible_cards().map(|c| c.id));
        if layout.hidden_below() == 0 {
            break;
        }
        scroll(app, MouseEventKind::ScrollDown, x, 1).await;
    }
    seen
}

/// Store with `X` in column1 and ten cards in column2.
fn full_column_store() -> Arc<MemoryKvStore> {
    let column2: Vec<String> = (0..10).map(|i| format!(r#""card {i}""#)).collect();
    let value = format!(
        r#"{{"column1":["X"],"column2":[{}],"column3":[]}}"#,
        column2.join(",")
    );
    Arc::new(MemoryKvStore::with_entry(KEY, &value))
}

#[tokio::test]
async fn test_rendered_cards_match_board() {
    let mut app = app_with(seeded_store()).await;
    assert_eq!(drawn_cards(&mut app), [2, 1, 0]);
}

#[tokio::test]
async fn test_rendered_cards_follow_edits() {
    let store = Arc::new(MemoryKvStore::new());
    let mut app = app_with(store.clone()).await;
    assert_rendered_matches(&mut app, "empty");

    add_card(&mut app, '1', "first").await;
    add_card(&mut app, '1', "second").await;
    add_card(&mut app, '2', "other").await;
    assert_rendered_matches(&mut app, "three adds");
    assert_eq!(drawn_cards(&mut app), [2, 1, 0]);

    press(&mut app, KeyCode::Char('1')).await;
    type_text(&mut app, "line one").await;
    app.handle_event(Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT)))
        .await;
    type_text(&mut app, "line two").await;
    press(&mut app, KeyCode::Enter).await;
    assert_eq!(texts(&app, ColumnId::Column1)[2], "line one\nline two");
    assert_rendered_matches(&mut app, "multi-line add");

    for i in 0..6 {
        add_card(&mut app, '1', &format!("task {i}")).await;
        assert_rendered_matches(&mut app, &format!("overflow add {i}"));
    }
    assert_eq!(app.board.len(ColumnId::Column1), 9);
    assert!(app.layout.column(ColumnId::Column1).unwrap().hidden_below() > 0);

    let first = app.board.get(ColumnId::Column1)[0].id;
    let delete = app.layout.card(first).unwrap().delete_button();
    click(&mut app, delete.x, delete.y).await;
    assert_eq!(app.board.len(ColumnId::Column1), 8);
    assert_rendered_matches(&mut app, "delete");

    let second = app.board.get(ColumnId::Column1)[0].id;
    let edit = app.layout.card(second).unwrap().edit_button();
    click(&mut app, edit.x, edit.y).await;
    for _ in 0.."second".len() {
        press(&mut app, KeyCode::Backspace).await;
    }
    type_text(&mut app, "a much longer card text that wraps onto several lines").await;
    press(&mut app, KeyCode::Enter).await;
    assert!(app.layout.card(second).unwrap().lines.len() > 1);
    assert_rendered_matches(&mut app, "edit to long text");

    let snapshot = stored(&store).await.unwrap();
    assert_eq!(snapshot.column1.len(), app.board.len(ColumnId::Column1));
    assert_eq!(snapshot.column2.len(), 1);

    let all: HashSet<CardId> = app.board.get(ColumnId::Column1).iter().map(|c| c.id).collect();
    assert_eq!(cards_seen_by_scrolling(&mut app, ColumnId::Column1).await, all);
    assert_rendered_matches(&mut app, "scrolled to bottom");
}

#[tokio::test]
async fn test_drop_below_full_column_appends() {
    let store = full_column_store();
    let mut app = app_with(store.clone()).await;
    assert_eq!(app.layout.column(ColumnId::Column2).unwrap().hidden_below(), 4);

    // release on the bottom border of column 2
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 3))
        .await;
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 40, 28))
        .await;
    let target = app.drag.drop_target().copied().unwrap();
    assert_eq!(target.column, ColumnId::Column2);
    assert_eq!(target.index, 10);

    let terminal = draw(&mut app);
    let add_row = app.layout.column(ColumnId::Column2).unwrap().add_button.y;
    assert_eq!(terminal.backend().buffer()[(35, add_row)].symbol(), "─");

    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 40, 28))
        .await;

    let column2 = texts(&app, ColumnId::Column2);
    assert_eq!(column2.len(), 11);
    assert_eq!(column2.last(), Some(&"X"));
    assert_eq!(stored(&store).await.unwrap().column2.last().map(String::as_str), Some("X"));
}

#[tokio::test]
async fn test_wheel_scroll_reaches_last_card() {
    let store = full_column_store();
    let mut app = app_with(store.clone()).await;
    let last = app.board.get(ColumnId::Column2)[9].id;
    assert!(!app.layout.card(last).unwrap().visible);

    let terminal = draw(&mut app);
    let column = app.layout.column(ColumnId::Column2).unwrap().area;
    let bottom_border: String = (column.left()..column.right())
        .map(|x| terminal.backend().buffer()[(x, column.bottom() - 1)].symbol().to_string())
        .collect();
    assert!(bottom_border.contains("▼ 4"), "{bottom_border}");

    scroll(&mut app, MouseEventKind::ScrollDown, 40, 10).await;
    assert_eq!(app.scroll, [0, 4, 0]);
    let card = app.layout.card(last).unwrap().clone();
    assert!(card.visible);
    assert_eq!(
        app.layout.hit(Point::new(card.area.x + 2, card.area.y + 1)),
        Some(Hit::Card {
            id: last,
            column: ColumnId::Column2,
            index: 9
        })
    );

    click(&mut app, card.delete_button().x, card.delete_button().y).await;
    assert_eq!(texts(&app, ColumnId::Column2).last(), Some(&"card 8"));
    assert_eq!(stored(&store).await.unwrap().column2.len(), 9);

    scroll(&mut app, MouseEventKind::ScrollUp, 40, 10).await;
    assert_eq!(app.scroll, [0, 0, 0]);

    press(&mut app, KeyCode::Char('3')).await;
    scroll(&mut app, MouseEventKind::ScrollDown, 40, 2).await;
    assert_eq!(app.scroll, [0, 0, 0]);
}

#[tokio::test]
async fn test_drag_at_list_edges_scrolls_column() {
    let store = full_column_store();
    let mut app = app_with(store.clone()).await;

    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 3))
        .await;
    // between the last drawn card and the add trigger
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 40, 26))
        .await;
    assert_eq!(app.scroll[1], 1);
    for _ in 0..6 {
        app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 40, 26))
            .await;
    }
    assert_eq!(app.scroll[1], 4);
    assert_eq!(app.layout.column(ColumnId::Column2).unwrap().hidden_below(), 0);

    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 40, 1))
        .await;
    assert_eq!(app.scroll[1], 3);

    // upper half of "card 3", now the top card
    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 40, 2))
        .await;
    assert_eq!(
        texts(&app, ColumnId::Column2)[..5],
        ["card 0", "card 1", "card 2", "X", "card 3"]
    );
    assert!(texts(&app, ColumnId::Column1).is_empty());
}

#[tokio::test]
async fn test_modal_text_wraps_with_cursor() {
    let mut app = app_with(seeded_store()).await;
    let inner = ModalLayout::compute(Rect::new(0, 0, WIDTH, HEIGHT))
        .text_area
        .inner(Margin::new(1, 1));
    let text = vec!["word"; usize::from(inner.width) / 5 + 2].join(" ");

    press(&mut app, KeyCode::Char('1')).await;
    type_text(&mut app, &text).await;
    let mut terminal = draw(&mut app);

    let (row, col) = wrapped_cursor(&text, text.len(), inner.width);
    assert_eq!(row, 1);
    assert_eq!(
        terminal.get_cursor_position().unwrap(),
        Position::new(inner.x + col as u16, inner.y + 1)
    );
    assert_eq!(terminal.backend().buffer()[(inner.x, inner.y + 1)].symbol(), "w");
}

#[tokio::test]
async fn test_render_is_idempotent() {
    let mut app = app_with(seeded_store()).await;
    let first = draw(&mut app).backend().buffer().clone();
    let second = draw(&mut app).backend().buffer().clone();
    assert_eq!(first, second);
}

struct FailingStore;

#[async_trait::async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> BoardResult<Option<String>> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &str) -> BoardResult<()> {
        Err(BoardError::Storage("quota exceeded".to_string()))
    }

    async fn remove(&self, _key: &str) -> BoardResult<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_failed_save_keeps_change_and_reports() {
    let mut app = app_with(Arc::new(FailingStore)).await;

    press(&mut app, KeyCode::Char('1')).await;
    type_text(&mut app, "Unsaved").await;
    press(&mut app, KeyCode::Enter).await;

    assert_eq!(texts(&app, ColumnId::Column1), vec!["Unsaved"]);
    assert!(app.status.as_deref().unwrap().contains("quota exceeded"));
}

#[tokio::test]
async fn test_board_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut app = app_with(Arc::new(JsonFileKvStore::new(&path))).await;
    press(&mut app, KeyCode::Char('1')).await;
    type_text(&mut app, "Hello").await;
    press(&mut app, KeyCode::Enter).await;
    press(&mut app, KeyCode::Char('3')).await;
    type_text(&mut app, "World").await;
    press(&mut app, KeyCode::Enter).await;

    let reopened = app_with(Arc::new(JsonFileKvStore::new(&path))).await;
    assert_eq!(texts(&reopened, ColumnId::Column1), vec!["Hello"]);
    assert_eq!(texts(&reopened, ColumnId::Column3), vec!["World"]);
}

#[tokio::test]
async fn test_quit_keys() {
    let mut app = app_with(seeded_store()).await;
    press(&mut app, KeyCode::Char('q')).await;
    assert!(app.should_quit);
}
