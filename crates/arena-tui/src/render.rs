//! View layer.
//!
//! Pure over [`AppState`]: draws the header tabs, the active screen, the
//! status line, and any modal dialog. All row values come pre-derived from
//! [`crate::rows`].

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs};

use arena_core::format::format_amount;

use crate::rows;
use crate::state::{AppState, Screen, StatusKind};

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Draws one frame.
pub fn draw(frame: &mut Frame<'_>, app: &AppState) {
    let [header, body, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_header(frame, app, header);
    match app.screen {
        Screen::Home => draw_home(frame, app, body),
        Screen::Tournaments => draw_tournaments(frame, app, body),
        Screen::MyTournaments => draw_my_tournaments(frame, app, body),
        Screen::Wallet => draw_wallet(frame, app, body),
        Screen::Notifications => draw_notifications(frame, app, body),
        Screen::Leaderboard => draw_leaderboard(frame, app, body),
        Screen::Profile => draw_profile(frame, app, body),
    }
    draw_status(frame, app, status);

    if let Some(room) = &app.tournaments.room {
        draw_room_dialog(frame, room);
    }
    if let Some(prompt) = &app.tournaments.join {
        draw_join_dialog(frame, prompt, app.spinner_frame);
    }
}

fn draw_header(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
    let titles: Vec<Line<'_>> = Screen::all()
        .iter()
        .enumerate()
        .map(|(i, s)| Line::from(format!(" {} {} ", i + 1, s.title())))
        .collect();
    let selected = Screen::all()
        .iter()
        .position(|s| *s == app.screen)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, area);
}

fn draw_status(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
    let line = if app.active_screen_loading() {
        let glyph = SPINNER[app.spinner_frame % SPINNER.len()];
        Line::from(Span::styled(
            format!("{glyph} loading…"),
            Style::default().fg(Color::DarkGray),
        ))
    } else if let Some((kind, message)) = &app.status.message {
        let color = match kind {
            StatusKind::Info => Color::Green,
            StatusKind::Error => Color::Red,
        };
        Line::from(Span::styled(message.clone(), Style::default().fg(color)))
    } else {
        Line::from(Span::styled(
            "q quit · r refresh · ↑↓ select · ⏎ action · 1-7 screens",
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn list_block(title: &str) -> Block<'_> {
    Block::default().borders(Borders::ALL).title(title)
}

fn draw_home(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
    let [summary, recent] =
        Layout::vertical([Constraint::Length(7), Constraint::Min(1)]).areas(area);

    let home = &app.home;
    let name = home
        .user
        .as_ref()
        .map(|u| u.display_name().to_string())
        .or_else(|| app.username.clone())
        .unwrap_or_else(|| "—".to_string());
    let referral = home
        .user
        .as_ref()
        .and_then(|u| u.referral_code.clone())
        .unwrap_or_else(|| "—".to_string());
    let balance = home
        .balance
        .map_or_else(|| "—".to_string(), |b| format!("{}{}", rows::CURRENCY, format_amount(b)));
    let winnings = home
        .total_winnings
        .map_or_else(|| "—".to_string(), |w| format!("{}{}", rows::CURRENCY, format_amount(w)));
    let joined = home
        .joined_count
        .map_or_else(|| "—".to_string(), |c| c.to_string());

    let lines = vec![
        Line::from(vec![
            Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("   referral: "),
            Span::styled(referral, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(format!("Balance: {balance}")),
        Line::from(format!("Joined matches: {joined}")),
        Line::from(format!("Total winnings: {winnings}")),
        Line::from(Span::styled(
            home.banners
                .iter()
                .filter_map(|b| b.title.clone())
                .collect::<Vec<_>>()
                .join("  ·  "),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(list_block("Dashboard")),
        summary,
    );

    let items: Vec<ListItem<'_>> = home.recent.iter().map(tournament_item).collect();
    let list = List::new(items).block(list_block("Recent Tournaments"));
    frame.render_widget(list, recent);
}

fn tournament_item(t: &arena_types::Tournament) -> ListItem<'static> {
    let cells = rows::tournament_cells(t);
    let control = rows::join_control(t);
    let status_color = rows::tournament_status_color(t.status_kind());
    let control_style = if control.enabled {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    ListItem::new(Line::from(vec![
        Span::styled(format!("{:<24}", cells[0]), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("{:<22}", cells[1])),
        Span::styled(format!("{:<11}", cells[2]), Style::default().fg(status_color)),
        Span::raw(format!("{:<16}", cells[3])),
        Span::raw(format!("{:<17}", cells[4])),
        Span::raw(format!("{:<14}", cells[5])),
        Span::styled(format!("[{}]", control.label), control_style),
    ]))
}

fn draw_selectable_list(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    items: Vec<ListItem<'static>>,
    selected: usize,
) {
    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(selected));
    }
    let list = List::new(items)
        .block(list_block(title))
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 60)))
        .highlight_symbol("▸ ");
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_tournaments(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
    let items: Vec<ListItem<'_>> = app
        .tournaments
        .items
        .iter()
        .map(tournament_item)
        .collect();
    if items.is_empty() && !app.tournaments.loading {
        frame.render_widget(
            Paragraph::new("No tournaments available. Press r to refresh.")
                .block(list_block("Tournaments")),
            area,
        );
        return;
    }
    draw_selectable_list(frame, area, "Tournaments", items, app.tournaments.selected);
}

fn draw_my_tournaments(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
    let items: Vec<ListItem<'_>> = app
        .my_tournaments
        .items
        .iter()
        .map(tournament_item)
        .collect();
    draw_selectable_list(
        frame,
        area,
        "My Matches",
        items,
        app.my_tournaments.selected,
    );
}

fn draw_wallet(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
    let [balance_area, tx_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(area);

    let balance = app
        .wallet
        .balance
        .map_or_else(|| "—".to_string(), |b| format!("{}{}", rows::CURRENCY, format_amount(b)));
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("Balance: {balance}"),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .block(list_block("Wallet")),
        balance_area,
    );

    let items: Vec<ListItem<'_>> = app
        .wallet
        .transactions
        .iter()
        .map(|tx| {
            let [description, date] = rows::transaction_cells(tx);
            let (amount, amount_color) = rows::transaction_amount(tx);
            let (status, status_color) = rows::transaction_status(tx);
            ListItem::new(Line::from(vec![
                Span::raw(format!("{description:<32}")),
                Span::styled(format!("{amount:>14}"), Style::default().fg(amount_color)),
                Span::styled(format!("  {status:<10}"), Style::default().fg(status_color)),
                Span::styled(date, Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();
    draw_selectable_list(frame, tx_area, "Transactions", items, app.wallet.selected);
}

fn draw_notifications(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
    let items: Vec<ListItem<'_>> = app
        .notifications
        .items
        .iter()
        .map(|n| {
            let [title, body, date] = rows::notification_cells(n);
            let base = if rows::notification_dimmed(n) {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", rows::notification_icon(n)), base),
                Span::styled(format!("{title:<28}"), base.add_modifier(Modifier::BOLD)),
                Span::styled(format!("{body:<40}"), base),
                Span::styled(date, base.fg(Color::DarkGray)),
            ]))
        })
        .collect();
    draw_selectable_list(
        frame,
        area,
        "Notifications",
        items,
        app.notifications.selected,
    );
}

fn draw_leaderboard(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
    let items: Vec<ListItem<'_>> = app
        .leaderboard
        .items
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("#{:<4}", entry.rank),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("{:<20}", entry.username),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{:<20}", entry.ign.clone().unwrap_or_default())),
                Span::raw(format!(
                    "{}{:<14}",
                    rows::CURRENCY,
                    format_amount(entry.total_winnings)
                )),
                Span::styled(
                    format!("{} wins", entry.tournaments_won),
                    Style::default().fg(Color::Green),
                ),
            ]))
        })
        .collect();
    draw_selectable_list(frame, area, "Leaderboard", items, app.leaderboard.selected);
}

fn draw_profile(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
    if let Some(form) = &app.profile.form {
        let fields = [
            ("Full name", &form.full_name),
            ("In-game name", &form.ign),
            ("Phone", &form.phone),
            ("New avatar (path)", &form.avatar_path),
        ];
        let mut lines: Vec<Line<'_>> = fields
            .iter()
            .enumerate()
            .map(|(i, (label, value))| {
                let marker = if i == form.field { "▸ " } else { "  " };
                let style = if i == form.field {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(format!("{marker}{label}: {value}"), style))
            })
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            if form.saving {
                "SAVING…"
            } else {
                "⏎ save · tab next field · esc cancel"
            },
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(
            Paragraph::new(lines).block(list_block("Edit Profile")),
            area,
        );
        return;
    }

    let lines = match &app.profile.user {
        Some(user) => vec![
            Line::from(Span::styled(
                user.display_name().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("Username: {}", user.username)),
            Line::from(format!(
                "Email: {}",
                user.email.clone().unwrap_or_default()
            )),
            Line::from(format!(
                "Phone: {}",
                user.phone.clone().unwrap_or_default()
            )),
            Line::from(format!("IGN: {}", user.ign.clone().unwrap_or_default())),
            Line::from(format!(
                "Referral code: {}",
                user.referral_code.clone().unwrap_or_default()
            )),
            Line::from(format!(
                "Balance: {}{}",
                rows::CURRENCY,
                format_amount(user.wallet_balance())
            )),
            Line::default(),
            Line::from(Span::styled(
                "e edit profile",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        None => vec![Line::from("Loading profile…")],
    };
    frame.render_widget(Paragraph::new(lines).block(list_block("Profile")), area);
}

// ============================================================================
// Dialogs
// ============================================================================

fn dialog_area(frame: &Frame<'_>, width: u16, height: u16) -> Rect {
    let area = frame.area();
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

fn draw_join_dialog(frame: &mut Frame<'_>, prompt: &crate::state::JoinPrompt, spinner: usize) {
    let area = dialog_area(frame, 46, 6);
    frame.render_widget(Clear, area);
    let footer = if prompt.busy {
        format!("{} joining…", SPINNER[spinner % SPINNER.len()])
    } else {
        "⏎ join · esc cancel".to_string()
    };
    let lines = vec![
        Line::from(prompt.title.clone()),
        Line::from(vec![
            Span::raw("In-game name: "),
            Span::styled(
                format!("{}_", prompt.ign),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::default(),
        Line::from(Span::styled(footer, Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(list_block("Join Tournament")),
        area,
    );
}

fn draw_room_dialog(frame: &mut Frame<'_>, room: &crate::state::RoomInfo) {
    let area = dialog_area(frame, 40, 5);
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from(format!("Room ID: {}", room.room_id)),
        Line::from(format!(
            "Password: {}",
            room.room_password.clone().unwrap_or_else(|| "No password".to_string())
        )),
        Line::from(Span::styled(
            "esc close",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(list_block("Room Details")),
        area,
    );
}
