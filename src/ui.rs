//! Terminal UI rendering.
//!
//! Left: the friend sidebar (rows, add-friend form, toggle button).
//! Right: the split-bill panel for the selected friend.
//! Bottom line: keymap legend or notification.
//!
//! Everything here draws from a `RenderState` snapshot and never touches the
//! model.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::forms::{AddFriendField, Payer, SplitBillField};
use crate::friend::{format_amount, BalanceStatus};
use crate::render::{AddFriendView, FriendView, RenderState, SplitBillView};
use crate::tea::{Focus, Notification, NotificationLevel};

const COLOR_TEXT_DIMMED: Color = Color::Gray;
const COLOR_TEXT_MUTED: Color = Color::DarkGray;
const COLOR_OWE: Color = Color::Red;
const COLOR_OWED: Color = Color::Green;
const COLOR_ACCENT: Color = Color::Yellow;

const SIDEBAR_PERCENT: u16 = 45;
const ROW_HEIGHT: usize = 3;
const LABEL_WIDTH: usize = 26;

/// Keybindings shown for the focused panel.
fn keybindings_for_focus(state: &RenderState) -> Vec<Vec<(&'static str, &'static str)>> {
    match state.focus {
        Focus::List => {
            let mut panel = vec![("a", "add friend")];
            if state.split_bill.is_some() || state.add_friend.is_some() {
                panel.push(("Tab", "form"));
            }
            vec![
                vec![("j/k", "move"), ("Enter", "select")],
                panel,
                vec![("q", "quit")],
            ]
        }
        Focus::AddFriend => vec![vec![
            ("Tab", "field"),
            ("S-Tab", "list"),
            ("Enter", "add"),
            ("Esc", "close"),
        ]],
        Focus::SplitBill => vec![vec![
            ("Tab", "field"),
            ("S-Tab", "list"),
            ("←/→", "payer"),
            ("Enter", "split"),
            ("Esc", "close"),
        ]],
    }
}

/// Entry point for all drawing.
pub fn draw(frame: &mut Frame, state: &RenderState) {
    let area = frame.area();
    let [body, status] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
    let [sidebar, main] = Layout::horizontal([
        Constraint::Percentage(SIDEBAR_PERCENT),
        Constraint::Fill(1),
    ])
    .areas(body);

    render_sidebar(frame, state, sidebar);
    render_main(frame, state, main);

    match state.notification {
        Some(ref notification) => render_notification(frame, notification, status),
        None => frame.render_widget(Paragraph::new(render_keymap_line(state)), status),
    }
}

fn panel_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_TEXT_MUTED)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {title} "))
}

fn render_sidebar(frame: &mut Frame, state: &RenderState, area: Rect) {
    let form_height = if state.add_friend.is_some() { 4 } else { 0 };
    let [list_area, form_area, button_area] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(form_height),
        Constraint::Length(1),
    ])
    .areas(area);

    let block = panel_block("Friends", state.focus == Focus::List);
    let inner = block.inner(list_area);
    frame.render_widget(block, list_area);
    render_friend_list(frame, state, inner);

    if let Some(ref form) = state.add_friend {
        render_add_friend_form(frame, form, state.focus == Focus::AddFriend, form_area);
    }

    let button = Line::from(vec![
        Span::styled("[", Style::default().fg(COLOR_TEXT_MUTED)),
        Span::styled(
            state.add_friend_button_label(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("]", Style::default().fg(COLOR_TEXT_MUTED)),
        Span::styled("  a", Style::default().fg(COLOR_TEXT_MUTED)),
    ]);
    frame.render_widget(Paragraph::new(button), button_area);
}

/// Friend rows, scrolled so the cursor row stays visible.
fn render_friend_list(frame: &mut Frame, state: &RenderState, area: Rect) {
    if state.friends.is_empty() {
        let msg = Line::from(Span::styled(
            "No friends yet. Press 'a' to add one.",
            Style::default().fg(COLOR_TEXT_DIMMED),
        ));
        frame.render_widget(Paragraph::new(msg), area);
        return;
    }

    let visible_rows = (area.height as usize / ROW_HEIGHT).max(1);
    let start = (state.cursor + 1).saturating_sub(visible_rows);

    let lines: Vec<Line> = state
        .friends
        .iter()
        .enumerate()
        .skip(start)
        .take(visible_rows)
        .flat_map(|(idx, friend)| {
            let is_cursor = idx == state.cursor && state.focus == Focus::List;
            render_friend_row(friend, is_cursor, area.width)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn status_color(status: &BalanceStatus) -> Option<Color> {
    match status {
        BalanceStatus::YouOwe(_) => Some(COLOR_OWE),
        BalanceStatus::OwesYou(_) => Some(COLOR_OWED),
        BalanceStatus::Even => None,
    }
}

/// Three lines per friend: name + button, avatar URL, balance status.
fn render_friend_row(friend: &FriendView, is_cursor: bool, width: u16) -> [Line<'static>; 3] {
    let marker = if is_cursor { "▸ " } else { "  " };
    let button = format!("[{}]", friend.button_label());
    let name_width = (width as usize)
        .saturating_sub(marker.chars().count() + button.len() + 1)
        .max(1);

    let mut name_style = Style::default().add_modifier(Modifier::BOLD);
    if friend.is_selected {
        name_style = name_style.add_modifier(Modifier::REVERSED);
    }
    let button_style = if friend.is_selected {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_TEXT_DIMMED)
    };

    let name = format!("{:<width$}", truncate(&friend.name, name_width), width = name_width);
    let head = Line::from(vec![
        Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
        Span::styled(name, name_style),
        Span::raw(" "),
        Span::styled(button, button_style),
    ]);

    let status_style = match status_color(&friend.status) {
        Some(color) => Style::default().fg(color),
        None => Style::default(),
    };
    let image = Line::from(vec![
        Span::raw("  "),
        Span::styled(
            truncate(&friend.image, (width as usize).saturating_sub(2)),
            Style::default().fg(COLOR_TEXT_MUTED),
        ),
    ]);

    let status = Line::from(vec![
        Span::raw("  "),
        Span::styled(
            truncate(&friend.status_text, (width as usize).saturating_sub(2)),
            status_style,
        ),
    ]);

    [head, image, status]
}

fn render_add_friend_form(frame: &mut Frame, form: &AddFriendView, focused: bool, area: Rect) {
    let block = panel_block("Add friend", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        input_line(
            AddFriendField::Name.label(),
            &form.name,
            focused && form.field == AddFriendField::Name,
        ),
        input_line(
            AddFriendField::Image.label(),
            &form.image,
            focused && form.field == AddFriendField::Image,
        ),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_main(frame: &mut Frame, state: &RenderState, area: Rect) {
    let Some(ref split) = state.split_bill else {
        let hint = Line::from(Span::styled(
            "Select a friend to split a bill.",
            Style::default().fg(COLOR_TEXT_MUTED),
        ));
        frame.render_widget(Paragraph::new(hint), area);
        return;
    };

    let focused = state.focus == Focus::SplitBill;
    let block = panel_block(&format!("Split bill with {}", split.friend_name), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(
        Paragraph::new(split_bill_lines(split, focused, &state.currency)),
        inner,
    );
}

fn split_bill_lines(split: &SplitBillView, focused: bool, currency: &str) -> Vec<Line<'static>> {
    let active = |field: SplitBillField| focused && split.field == field;
    let friend_share = if split.bill.is_empty() {
        String::new()
    } else {
        format!("{}{}", format_amount(split.paid_by_friend), currency)
    };
    let payer = match split.payer {
        Payer::User => "You".to_string(),
        Payer::Friend => split.friend_name.clone(),
    };

    vec![
        input_line(SplitBillField::Bill.label(), &split.bill, active(SplitBillField::Bill)),
        input_line(
            SplitBillField::UserExpense.label(),
            &split.paid_by_user,
            active(SplitBillField::UserExpense),
        ),
        Line::from(vec![
            Span::styled(
                pad_label(&format!("{}'s expense", split.friend_name)),
                Style::default().fg(COLOR_TEXT_DIMMED),
            ),
            Span::styled(friend_share, Style::default().fg(COLOR_TEXT_MUTED)),
        ]),
        choice_line(SplitBillField::Payer.label(), &payer, active(SplitBillField::Payer)),
        Line::default(),
        Line::from(Span::styled(
            "[Split bill]  Enter",
            Style::default().fg(COLOR_TEXT_MUTED),
        )),
    ]
}

fn pad_label(label: &str) -> String {
    format!("{:<width$}", truncate(label, LABEL_WIDTH - 1), width = LABEL_WIDTH)
}

fn input_line(label: &str, value: &str, active: bool) -> Line<'static> {
    let label_style = if active {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_TEXT_DIMMED)
    };
    let mut spans = vec![
        Span::styled(pad_label(label), label_style),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ];
    if active {
        spans.push(Span::styled(
            "_",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    Line::from(spans)
}

fn choice_line(label: &str, value: &str, active: bool) -> Line<'static> {
    let (label_style, value_style) = if active {
        (
            Style::default().fg(COLOR_ACCENT),
            Style::default().add_modifier(Modifier::REVERSED),
        )
    } else {
        (Style::default().fg(COLOR_TEXT_DIMMED), Style::default())
    };
    Line::from(vec![
        Span::styled(pad_label(label), label_style),
        Span::styled(format!("‹ {} ›", value), value_style),
    ])
}

/// Bottom line: dim "?" when collapsed, "? │ keys…" when expanded.
fn render_keymap_line(state: &RenderState) -> Line<'static> {
    let key_style = Style::default().fg(COLOR_TEXT_DIMMED);
    let desc_style = Style::default().fg(COLOR_TEXT_MUTED);
    let sep_style = Style::default().fg(COLOR_TEXT_MUTED);

    // Form panels always show their keys; they have no '?' binding.
    let expanded = state.show_keymap || state.focus != Focus::List;
    let help_style = if expanded {
        Style::default()
    } else {
        Style::default().fg(COLOR_TEXT_MUTED)
    };

    let mut spans: Vec<Span> = vec![Span::styled("?", help_style)];
    if !expanded {
        return Line::from(spans);
    }

    for group in keybindings_for_focus(state) {
        if group.is_empty() {
            continue;
        }
        spans.push(Span::styled(" │ ", sep_style));
        for (idx, (key, desc)) in group.into_iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" • ", sep_style));
            }
            spans.push(Span::styled(key, key_style));
            spans.push(Span::styled(format!(" {}", desc), desc_style));
        }
    }

    Line::from(spans)
}

fn render_notification(frame: &mut Frame, notification: &Notification, area: Rect) {
    frame.render_widget(Clear, area);

    let line = match notification.level {
        NotificationLevel::Error => Line::from(vec![
            Span::styled(
                "Error: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                notification.message.clone(),
                Style::default().fg(Color::Red),
            ),
        ]),
        NotificationLevel::Info => Line::from(Span::styled(
            notification.message.clone(),
            Style::default().fg(Color::Green),
        )),
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn truncate(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 1).collect();
        format!("{}~", truncated)
    }
}
