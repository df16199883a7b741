//! Screen geometry of the board, derived from the board state alone.
//!
//! The same [`BoardLayout`] drives drawing, click hit-testing and drop
//! target resolution, so what is hit is always what was drawn.

use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};
use ratatui::text::Span;
use std::ops::Range;
use triboard_domain::{
    BoardState, CardBounds, CardId, ColumnId, ColumnScroll, DropZones, Point,
};

/// Cells taken by the ` ✎ ✖ ` affordances on the right of each card.
const AFFORDANCE_WIDTH: u16 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    pub id: CardId,
    pub column: ColumnId,
    pub index: usize,
    /// Bordered card box on screen. Empty when the card is scrolled out of view.
    pub area: Rect,
    pub lines: Vec<String>,
    pub visible: bool,
}

impl CardLayout {
    pub fn edit_button(&self) -> Rect {
        Rect::new(self.area.right().saturating_sub(5), self.area.y + 1, 1, 1)
    }

    pub fn delete_button(&self) -> Rect {
        Rect::new(self.area.right().saturating_sub(3), self.area.y + 1, 1, 1)
    }

    pub fn text_area(&self) -> Rect {
        let inner = self.area.inner(Margin::new(1, 1));
        Rect {
            width: inner.width.saturating_sub(AFFORDANCE_WIDTH),
            ..inner
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    pub id: ColumnId,
    /// Whole column including its border; the drop zone.
    pub area: Rect,
    /// Inside of the border, where cards are stacked.
    pub list: Rect,
    pub add_button: Rect,
    /// Index of the first card drawn at the top of the list.
    pub first: usize,
    pub cards: Vec<CardLayout>,
}

impl ColumnLayout {
    pub fn visible_cards(&self) -> impl Iterator<Item = &CardLayout> {
        self.cards.iter().filter(|c| c.visible)
    }

    pub fn card(&self, id: CardId) -> Option<&CardLayout> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn hidden_above(&self) -> usize {
        self.first
    }

    pub fn hidden_below(&self) -> usize {
        self.cards_below().count()
    }

    fn cards_below(&self) -> impl Iterator<Item = &CardLayout> {
        self.cards
            .iter()
            .skip(self.first)
            .skip_while(|c| c.visible)
    }

    /// Row just under the last drawn card, or the top of the list.
    fn stack_bottom(&self) -> u16 {
        self.visible_cards()
            .last()
            .map(|c| c.area.bottom())
            .unwrap_or(self.list.y)
    }
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    EditCard(CardId),
    DeleteCard(CardId),
    Card {
        id: CardId,
        column: ColumnId,
        index: usize,
    },
    AddCard(ColumnId),
    Column(ColumnId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardLayout {
    pub area: Rect,
    pub status: Rect,
    pub columns: Vec<ColumnLayout>,
}

impl BoardLayout {
    /// Lays out the board with each column scrolled to the requested first
    /// card. Offsets past the point where the remaining cards all fit are
    /// pulled back; [`BoardLayout::scroll_offsets`] reports what was used.
    pub fn compute(area: Rect, board: &BoardState, scroll: [usize; 3]) -> Self {
        let [board_area, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        let column_areas: [Rect; 3] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(board_area);

        let columns = ColumnId::ALL
            .iter()
            .zip(column_areas)
            .map(|(&column, column_area)| {
                layout_column(column, column_area, board, scroll[column.index()])
            })
            .collect();

        Self {
            area,
            status,
            columns,
        }
    }

    pub fn column(&self, id: ColumnId) -> Option<&ColumnLayout> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn card(&self, id: CardId) -> Option<&CardLayout> {
        self.columns.iter().find_map(|c| c.card(id))
    }

    pub fn scroll_offsets(&self) -> [usize; 3] {
        let mut offsets = [0; 3];
        for column in &self.columns {
            offsets[column.id.index()] = column.first;
        }
        offsets
    }

    pub fn hit(&self, point: Point) -> Option<Hit> {
        let position = Position::new(point.x, point.y);
        let column = self.columns.iter().find(|c| c.area.contains(position))?;

        for card in column.visible_cards() {
            if card.delete_button().contains(position) {
                return Some(Hit::DeleteCard(card.id));
            }
            if card.edit_button().contains(position) {
                return Some(Hit::EditCard(card.id));
            }
            if card.area.contains(position) {
                return Some(Hit::Card {
                    id: card.id,
                    column: card.column,
                    index: card.index,
                });
            }
        }
        if column.add_button.contains(position) {
            return Some(Hit::AddCard(column.id));
        }
        Some(Hit::Column(column.id))
    }

    /// Row of the drop indicator: the gap above the target card, or below the
    /// last drawn card. A drop at the end of a column with cards hidden below
    /// is shown on the add trigger row.
    pub fn indicator_row(&self, column: ColumnId, before: Option<CardId>) -> Option<u16> {
        let layout = self.column(column)?;
        let row = match before.and_then(|id| layout.card(id)) {
            Some(card) if card.visible => card.area.y.saturating_sub(1),
            Some(card) if card.index < layout.first => layout.list.y,
            Some(_) => layout.stack_bottom(),
            None if layout.hidden_below() > 0 => layout.add_button.y,
            None => layout.stack_bottom(),
        };
        (row >= layout.list.y && row <= layout.add_button.y.max(layout.list.y)).then_some(row)
    }

    /// Scroll step for a drag held at the edge of a column's list: up when
    /// the pointer is on the top edge with cards hidden above, down when it
    /// sits between the last drawn card and the add trigger with cards
    /// hidden below.
    pub fn edge_scroll(&self, point: Point) -> Option<(ColumnId, isize)> {
        let position = Position::new(point.x, point.y);
        let column = self.columns.iter().find(|c| c.area.contains(position))?;
        if column.list.is_empty() {
            return None;
        }

        if point.y <= column.list.y && column.hidden_above() > 0 {
            return Some((column.id, -1));
        }
        let add_row = column.add_button.y;
        let zone_top = column.stack_bottom().min(add_row.saturating_sub(1));
        if column.hidden_below() > 0 && point.y >= zone_top && point.y < add_row {
            return Some((column.id, 1));
        }
        None
    }
}

impl DropZones for BoardLayout {
    fn column_at(&self, point: Point) -> Option<ColumnId> {
        let position = Position::new(point.x, point.y);
        self.columns
            .iter()
            .find(|c| c.area.contains(position))
            .map(|c| c.id)
    }

    fn card_bounds(&self, column: ColumnId) -> Vec<CardBounds> {
        self.column(column)
            .map(|layout| {
                layout
                    .visible_cards()
                    .map(|c| CardBounds {
                        id: c.id,
                        top: c.area.y,
                        height: c.area.height,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn scroll(&self, column: ColumnId) -> ColumnScroll {
        let Some(layout) = self.column(column) else {
            return ColumnScroll::default();
        };
        ColumnScroll {
            above: layout.cards[..layout.first].iter().map(|c| c.id).collect(),
            below: layout.cards_below().map(|c| c.id).collect(),
            tail_top: (!layout.list.is_empty()).then_some(layout.add_button.y),
        }
    }
}

/// Cards are stacked with a one-row gap above each, which is where the drop
/// indicator is drawn. Stacking starts at card `first`; cards before it and
/// from the first one that does not fit are hidden. The add trigger follows
/// the last card, or sticks to the bottom row when cards are hidden below.
fn layout_column(column: ColumnId, area: Rect, board: &BoardState, first: usize) -> ColumnLayout {
    let list = area.inner(Margin::new(1, 1));
    let card_width = list.width.saturating_sub(2);
    let text_width = card_width.saturating_sub(2 + AFFORDANCE_WIDTH);
    let last_row = list.bottom().saturating_sub(1);

    let measured: Vec<(Vec<String>, u16)> = board
        .get(column)
        .iter()
        .map(|card| {
            let lines = wrap_text(&card.text, text_width);
            let height = (lines.len() as u16).saturating_add(2);
            (lines, height)
        })
        .collect();
    let first = if list.is_empty() {
        0
    } else {
        first.min(max_first(&measured, last_row - list.y))
    };

    let mut y = list.y.saturating_add(1);
    let mut stacking = !list.is_empty();
    let mut hidden_below = false;
    let cards = board
        .get(column)
        .iter()
        .zip(measured)
        .enumerate()
        .map(|(index, (card, (lines, height)))| {
            let mut layout = CardLayout {
                id: card.id,
                column,
                index,
                area: Rect::default(),
                lines,
                visible: false,
            };
            if index < first || !stacking {
                hidden_below |= index >= first;
                return layout;
            }
            let bottom = y.saturating_add(height);
            if bottom <= last_row {
                layout.area = Rect::new(list.x + 1, y, card_width, height);
                layout.visible = true;
                y = bottom.saturating_add(1);
            } else if index == first && last_row.saturating_sub(y) >= 3 {
                // Taller than the whole list; show its top part.
                layout.area = Rect::new(list.x + 1, y, card_width, last_row - y);
                layout.visible = true;
                y = last_row;
                stacking = false;
            } else {
                stacking = false;
                hidden_below = true;
            }
            layout
        })
        .collect();

    let add_row = if hidden_below { last_row } else { y.min(last_row) };
    let add_button = if list.is_empty() {
        Rect::default()
    } else {
        Rect::new(list.x + 1, add_row, card_width, 1)
    };

    ColumnLayout {
        id: column,
        area,
        list,
        add_button,
        first,
        cards,
    }
}

/// Smallest first index from which every remaining card fits in `rows`,
/// each card taking its height plus the gap above it.
fn max_first(measured: &[(Vec<String>, u16)], rows: u16) -> usize {
    let mut first = measured.len().saturating_sub(1);
    let mut used = 0usize;
    for (index, (_, height)) in measured.iter().enumerate().rev() {
        used += usize::from(*height) + 1;
        if used > usize::from(rows) {
            break;
        }
        first = index;
    }
    first
}

fn text_width(s: &str) -> usize {
    Span::raw(s).width()
}

fn char_width(c: char) -> usize {
    let mut buf = [0u8; 4];
    text_width(c.encode_utf8(&mut buf))
}

/// Greedy word wrap on display width; words wider than the line are split.
/// Explicit newlines are kept, and the result always has at least one line.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    wrap_ranges(text, width)
        .into_iter()
        .map(|range| text[range].to_string())
        .collect()
}

/// Byte ranges of the lines [`wrap_text`] produces. The space a line is
/// broken at belongs to neither line.
pub fn wrap_ranges(text: &str, width: u16) -> Vec<Range<usize>> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut offset = 0;
    for raw in text.split('\n') {
        wrap_line(raw, offset, width, &mut lines);
        offset += raw.len() + 1;
    }
    lines
}

fn wrap_line(raw: &str, offset: usize, width: usize, out: &mut Vec<Range<usize>>) {
    let mut start = offset;
    let mut end = offset;
    let mut line_width = 0;
    let mut word_start = offset;
    for word in raw.split(' ') {
        let word_end = word_start + word.len();
        // 0 for the first word of a line, else the separating space
        let gap = word_start - end;
        let word_width = text_width(word);
        if line_width + gap + word_width <= width {
            end = word_end;
            line_width += gap + word_width;
        } else {
            if end > start {
                out.push(start..end);
            }
            start = word_start;
            end = word_start;
            line_width = 0;
            for (i, c) in word.char_indices() {
                let w = char_width(c);
                if line_width + w > width && end > start {
                    out.push(start..end);
                    start = end;
                    line_width = 0;
                }
                end = word_start + i + c.len_utf8();
                line_width += w;
            }
        }
        word_start = word_end + 1;
    }
    out.push(start..end);
}

/// Wrapped row and display column of the byte `cursor` in `text`.
pub fn wrapped_cursor(text: &str, cursor: usize, width: u16) -> (usize, usize) {
    let lines = wrap_ranges(text, width);
    let row = lines
        .iter()
        .rposition(|line| line.start <= cursor)
        .unwrap_or(0);
    let col = lines
        .get(row)
        .and_then(|line| text.get(line.start..cursor.min(line.end)))
        .map(text_width)
        .unwrap_or(0);
    (row, col)
}
