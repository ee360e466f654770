//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects. Fetch results replace the owning
//! screen's collection on success and leave prior data in place on failure;
//! results apply in arrival order, so when two refreshes race the last
//! response to arrive wins.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use arena_core::flows::ProfileEdit;

use crate::effects::{FetchKind, UiEffect};
use crate::events::{FetchEvent, MutationEvent, UiEvent};
use crate::rows::join_control;
use crate::state::{AppState, JoinPrompt, ProfileForm, RoomInfo, Screen};

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, &term_event),
        UiEvent::Fetch(fetch) => {
            handle_fetch_event(app, fetch);
            vec![]
        }
        UiEvent::Mutation(mutation) => handle_mutation_event(app, mutation),
    }
}

/// Fetch effect for a screen activation or refresh.
fn fetch_for(screen: Screen) -> FetchKind {
    match screen {
        Screen::Home => FetchKind::Home,
        Screen::Tournaments => FetchKind::Tournaments,
        Screen::MyTournaments => FetchKind::MyTournaments,
        Screen::Wallet => FetchKind::Wallet,
        Screen::Notifications => FetchKind::Notifications,
        Screen::Leaderboard => FetchKind::Leaderboard,
        Screen::Profile => FetchKind::Profile,
    }
}

/// Marks a screen's slice as loading when its fetch is emitted.
fn mark_loading(app: &mut AppState, screen: Screen) {
    match screen {
        Screen::Home => app.home.loading = true,
        Screen::Tournaments => app.tournaments.loading = true,
        Screen::MyTournaments => app.my_tournaments.loading = true,
        Screen::Wallet => app.wallet.loading = true,
        Screen::Notifications => app.notifications.loading = true,
        Screen::Leaderboard => app.leaderboard.loading = true,
        Screen::Profile => app.profile.loading = true,
    }
}

/// Switches screens and re-fetches the target's data.
pub fn activate(app: &mut AppState, screen: Screen) -> Vec<UiEffect> {
    app.screen = screen;
    app.status.clear();
    mark_loading(app, screen);
    vec![UiEffect::Fetch(fetch_for(screen))]
}

// ============================================================================
// Terminal input
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: &Event) -> Vec<UiEffect> {
    let Event::Key(key) = event else {
        return vec![];
    };
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    // Ctrl+C always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return vec![UiEffect::Quit];
    }

    // Modal join prompt swallows input while open.
    if app.tournaments.join.is_some() {
        return handle_join_prompt_key(app, key);
    }
    if app.tournaments.room.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            app.tournaments.room = None;
        }
        return vec![];
    }
    // Profile form swallows input while editing.
    if app.profile.form.is_some() {
        return handle_profile_form_key(app, key);
    }

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            vec![UiEffect::Quit]
        }
        KeyCode::Char(c @ '1'..='7') => {
            let index = (c as usize) - ('1' as usize);
            activate(app, Screen::all()[index])
        }
        KeyCode::Tab => {
            let all = Screen::all();
            let current = all.iter().position(|s| *s == app.screen).unwrap_or(0);
            activate(app, all[(current + 1) % all.len()])
        }
        KeyCode::Char('r') => {
            app.status.clear();
            mark_loading(app, app.screen);
            vec![UiEffect::Fetch(fetch_for(app.screen))]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            move_selection(app, 1);
            vec![]
        }
        KeyCode::Up | KeyCode::Char('k') => {
            move_selection(app, -1);
            vec![]
        }
        KeyCode::Char('e') if app.screen == Screen::Profile => {
            if let Some(user) = &app.profile.user {
                app.profile.form = Some(ProfileForm::from_user(user));
            }
            vec![]
        }
        KeyCode::Enter => handle_enter(app),
        _ => vec![],
    }
}

fn move_selection(app: &mut AppState, delta: isize) {
    let (selected, len) = match app.screen {
        Screen::Tournaments => (
            &mut app.tournaments.selected,
            app.tournaments.items.len(),
        ),
        Screen::MyTournaments => (
            &mut app.my_tournaments.selected,
            app.my_tournaments.items.len(),
        ),
        Screen::Wallet => (&mut app.wallet.selected, app.wallet.transactions.len()),
        Screen::Notifications => (
            &mut app.notifications.selected,
            app.notifications.items.len(),
        ),
        Screen::Leaderboard => (&mut app.leaderboard.selected, app.leaderboard.items.len()),
        _ => return,
    };
    if len == 0 {
        *selected = 0;
        return;
    }
    let next = selected.saturating_add_signed(delta);
    *selected = next.min(len - 1);
}

fn handle_enter(app: &mut AppState) -> Vec<UiEffect> {
    match app.screen {
        Screen::Tournaments => {
            let Some(tournament) = app.tournaments.selected_tournament() else {
                return vec![];
            };
            let room = tournament.has_room().then(|| RoomInfo {
                room_id: tournament.room_id.clone().unwrap_or_default(),
                room_password: tournament.room_password.clone(),
            });
            let control = join_control(tournament);
            let is_full = tournament.is_full();
            let (id, title) = (tournament.id.clone(), tournament.title.clone());

            // Room details take precedence once an organizer assigned one.
            if let Some(room) = room {
                app.tournaments.room = Some(room);
                return vec![];
            }
            if !control.enabled {
                if is_full {
                    app.status.error("Tournament is full");
                }
                return vec![];
            }
            app.tournaments.join = Some(JoinPrompt {
                tournament_id: id,
                title,
                ign: String::new(),
                busy: false,
            });
            vec![]
        }
        Screen::Notifications => {
            let Some(notification) = app.notifications.selected_notification() else {
                return vec![];
            };
            // Unread rows issue exactly one mark-as-read request; the flag
            // flips only when it succeeds.
            if notification.read || app.notifications.marking.is_some() {
                return vec![];
            }
            let id = notification.id.clone();
            app.notifications.marking = Some(id.clone());
            vec![UiEffect::MarkNotificationRead { id }]
        }
        _ => vec![],
    }
}

fn handle_join_prompt_key(app: &mut AppState, key: &KeyEvent) -> Vec<UiEffect> {
    let Some(prompt) = app.tournaments.join.as_mut() else {
        return vec![];
    };
    if prompt.busy {
        // Control disabled while the request is outstanding.
        return vec![];
    }
    match key.code {
        KeyCode::Esc => {
            app.tournaments.join = None;
            vec![]
        }
        KeyCode::Backspace => {
            prompt.ign.pop();
            vec![]
        }
        KeyCode::Char(c) => {
            prompt.ign.push(c);
            vec![]
        }
        KeyCode::Enter => {
            if prompt.ign.trim().is_empty() {
                app.status.error("Please enter your in-game name");
                return vec![];
            }
            let Some(tournament) = app
                .tournaments
                .items
                .iter()
                .find(|t| t.id == prompt.tournament_id)
                .cloned()
            else {
                app.tournaments.join = None;
                return vec![];
            };
            let ign = prompt.ign.clone();
            prompt.busy = true;
            vec![UiEffect::Join {
                tournament: Box::new(tournament),
                ign,
            }]
        }
        _ => vec![],
    }
}

fn handle_profile_form_key(app: &mut AppState, key: &KeyEvent) -> Vec<UiEffect> {
    let Some(form) = app.profile.form.as_mut() else {
        return vec![];
    };
    if form.saving {
        return vec![];
    }
    match key.code {
        KeyCode::Esc => {
            app.profile.form = None;
            vec![]
        }
        KeyCode::Tab | KeyCode::Down => {
            form.field = (form.field + 1) % ProfileForm::FIELDS;
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.field = (form.field + ProfileForm::FIELDS - 1) % ProfileForm::FIELDS;
            vec![]
        }
        KeyCode::Backspace => {
            form.active_field_mut().pop();
            vec![]
        }
        KeyCode::Char(c) => {
            form.active_field_mut().push(c);
            vec![]
        }
        KeyCode::Enter => {
            let edit = ProfileEdit {
                full_name: form.full_name.clone(),
                ign: Some(form.ign.clone()),
                phone: Some(form.phone.clone()),
                current_avatar_url: app
                    .profile
                    .user
                    .as_ref()
                    .and_then(|u| u.avatar_url.clone()),
                new_avatar: {
                    let trimmed = form.avatar_path.trim();
                    (!trimmed.is_empty()).then(|| trimmed.into())
                },
            };
            form.saving = true;
            vec![UiEffect::SaveProfile(Box::new(edit))]
        }
        _ => vec![],
    }
}

// ============================================================================
// Fetch results
// ============================================================================

/// Applies a fetch result to its owning slice.
///
/// Errors surface on the status line only when the owning screen is still
/// active; a screen the user left keeps its prior data quietly.
fn handle_fetch_event(app: &mut AppState, event: FetchEvent) {
    match event {
        FetchEvent::HomeProfile(result) => match result {
            Ok(user) => app.home.user = Some(*user),
            Err(e) => surface_error(app, Screen::Home, &e.message),
        },
        FetchEvent::HomeBalance(result) => match result {
            Ok(balance) => app.home.balance = Some(balance),
            Err(e) => surface_error(app, Screen::Home, &e.message),
        },
        FetchEvent::HomeJoinedCount(result) => {
            if let Ok(count) = result {
                app.home.joined_count = Some(count);
            }
        }
        FetchEvent::HomeWinnings(result) => {
            if let Ok(total) = result {
                app.home.total_winnings = Some(total);
            }
        }
        FetchEvent::HomeBanners(result) => {
            if let Ok(banners) = result {
                app.home.banners = banners;
            }
        }
        FetchEvent::HomeRecent(result) => {
            app.home.loading = false;
            match result {
                Ok(tournaments) => app.home.recent = tournaments,
                Err(e) => surface_error(app, Screen::Home, &e.message),
            }
        }
        FetchEvent::Tournaments(result) => {
            app.tournaments.loading = false;
            match result {
                Ok(items) => {
                    app.tournaments.items = items;
                    clamp(&mut app.tournaments.selected, app.tournaments.items.len());
                }
                Err(e) => surface_error(app, Screen::Tournaments, &e.message),
            }
        }
        FetchEvent::MyTournaments(result) => {
            app.my_tournaments.loading = false;
            match result {
                Ok(items) => {
                    app.my_tournaments.items = items;
                    clamp(
                        &mut app.my_tournaments.selected,
                        app.my_tournaments.items.len(),
                    );
                }
                Err(e) => surface_error(app, Screen::MyTournaments, &e.message),
            }
        }
        FetchEvent::WalletBalance(result) => match result {
            Ok(balance) => app.wallet.balance = Some(balance),
            Err(e) => surface_error(app, Screen::Wallet, &e.message),
        },
        FetchEvent::Transactions(result) => {
            app.wallet.loading = false;
            match result {
                Ok(transactions) => {
                    app.wallet.transactions = transactions;
                    clamp(&mut app.wallet.selected, app.wallet.transactions.len());
                }
                Err(e) => surface_error(app, Screen::Wallet, &e.message),
            }
        }
        FetchEvent::Notifications(result) => {
            app.notifications.loading = false;
            match result {
                Ok(items) => {
                    app.notifications.items = items;
                    clamp(
                        &mut app.notifications.selected,
                        app.notifications.items.len(),
                    );
                }
                Err(e) => surface_error(app, Screen::Notifications, &e.message),
            }
        }
        FetchEvent::Leaderboard(result) => {
            app.leaderboard.loading = false;
            match result {
                Ok(items) => {
                    app.leaderboard.items = items;
                    clamp(&mut app.leaderboard.selected, app.leaderboard.items.len());
                }
                Err(e) => surface_error(app, Screen::Leaderboard, &e.message),
            }
        }
        FetchEvent::Profile(result) => {
            app.profile.loading = false;
            match result {
                Ok(user) => app.profile.user = Some(*user),
                Err(e) => surface_error(app, Screen::Profile, &e.message),
            }
        }
    }
}

fn clamp(selected: &mut usize, len: usize) {
    if len == 0 {
        *selected = 0;
    } else {
        *selected = (*selected).min(len - 1);
    }
}

fn surface_error(app: &mut AppState, owner: Screen, message: &str) {
    if app.screen == owner {
        app.status.error(message);
    } else {
        tracing::debug!(screen = owner.title(), "fetch failed off-screen: {message}");
    }
}

// ============================================================================
// Mutation results
// ============================================================================

fn handle_mutation_event(app: &mut AppState, event: MutationEvent) -> Vec<UiEffect> {
    match event {
        MutationEvent::JoinCompleted(result) => match result {
            Ok(message) => {
                app.tournaments.join = None;
                if message.is_empty() {
                    app.status.info("Successfully joined tournament!");
                } else {
                    app.status.info(message);
                }
                // Refresh in place so the participant count is current.
                mark_loading(app, Screen::Tournaments);
                vec![UiEffect::Fetch(FetchKind::Tournaments)]
            }
            Err(e) => {
                // Restore the control; keep the prompt so the input survives.
                if let Some(prompt) = app.tournaments.join.as_mut() {
                    prompt.busy = false;
                }
                app.status.error(e.user_message());
                vec![]
            }
        },
        MutationEvent::NotificationMarked { id, result } => {
            app.notifications.marking = None;
            if result.is_ok()
                && let Some(notification) =
                    app.notifications.items.iter_mut().find(|n| n.id == id)
            {
                notification.read = true;
            }
            // Failures leave the flag and appearance unchanged.
            vec![]
        }
        MutationEvent::ProfileSaved(result) => match result {
            Ok(user) => {
                app.profile.user = Some(*user);
                app.profile.form = None;
                app.status.info("Profile updated successfully!");
                vec![]
            }
            Err(e) => {
                if let Some(form) = app.profile.form.as_mut() {
                    form.saving = false;
                }
                app.status.error(e.user_message());
                vec![]
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use arena_core::api::ApiError;
    use arena_core::config::Config;
    use arena_types::{Notification, Tournament};

    use crate::state::StatusKind;

    use super::*;

    fn app() -> AppState {
        AppState::new(Config::default(), Some("kiran".to_string()))
    }

    fn tournaments(ids: &[&str]) -> Vec<Tournament> {
        ids.iter()
            .map(|id| {
                serde_json::from_value(serde_json::json!({
                    "id": id,
                    "title": format!("Cup {id}"),
                    "game": "Free Fire",
                    "mode": "Squad",
                    "status": "Open",
                    "participants_count": 1,
                    "max_participants": 4,
                }))
                .unwrap()
            })
            .collect()
    }

    fn notification(id: &str, read: bool) -> Notification {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": "Match starting",
            "type": "tournament",
            "read": read,
        }))
        .unwrap()
    }

    fn press(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    /// Successful fetch replaces the backing collection wholesale.
    #[test]
    fn test_fetch_success_replaces_collection() {
        let mut app = app();
        app.tournaments.items = tournaments(&["1", "2"]);

        update(
            &mut app,
            UiEvent::Fetch(FetchEvent::Tournaments(Ok(tournaments(&["9"])))),
        );
        assert_eq!(app.tournaments.items.len(), 1);
        assert_eq!(app.tournaments.items[0].id, "9");
        assert!(!app.tournaments.loading);
    }

    /// success=false failure retains prior data and surfaces the message.
    #[test]
    fn test_fetch_failure_retains_prior_data() {
        let mut app = app();
        app.screen = Screen::Tournaments;
        app.tournaments.items = tournaments(&["1", "2"]);
        app.tournaments.loading = true;

        update(
            &mut app,
            UiEvent::Fetch(FetchEvent::Tournaments(Err(ApiError::api("server busy")))),
        );
        assert_eq!(app.tournaments.items.len(), 2);
        assert!(!app.tournaments.loading);
        assert_eq!(
            app.status.message,
            Some((StatusKind::Error, "server busy".to_string()))
        );
    }

    /// Results apply in arrival order: the last response wins.
    #[test]
    fn test_concurrent_refresh_last_response_wins() {
        let mut app = app();
        update(
            &mut app,
            UiEvent::Fetch(FetchEvent::Tournaments(Ok(tournaments(&["1"])))),
        );
        update(
            &mut app,
            UiEvent::Fetch(FetchEvent::Tournaments(Ok(tournaments(&["2", "3"])))),
        );
        assert_eq!(app.tournaments.items.len(), 2);
        assert_eq!(app.tournaments.items[0].id, "2");
    }

    /// Errors for a screen the user left do not touch the active screen.
    #[test]
    fn test_offscreen_failure_is_silent() {
        let mut app = app();
        app.screen = Screen::Wallet;

        update(
            &mut app,
            UiEvent::Fetch(FetchEvent::Tournaments(Err(ApiError::api("boom")))),
        );
        assert!(app.status.message.is_none());
    }

    /// Enter on an unread notification issues exactly one mark-as-read.
    #[test]
    fn test_unread_notification_click_issues_one_request() {
        let mut app = app();
        app.screen = Screen::Notifications;
        app.notifications.items = vec![notification("n1", false)];

        let effects = update(&mut app, press(KeyCode::Enter));
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::MarkNotificationRead { id }] if id.as_str() == "n1"
        ));

        // A second click while the request is outstanding does nothing.
        let effects = update(&mut app, press(KeyCode::Enter));
        assert!(effects.is_empty());
    }

    /// The read flag flips only when the request succeeds.
    #[test]
    fn test_notification_flag_flips_only_on_success() {
        let mut app = app();
        app.screen = Screen::Notifications;
        app.notifications.items = vec![notification("n1", false)];
        app.notifications.marking = Some("n1".to_string());

        update(
            &mut app,
            UiEvent::Mutation(MutationEvent::NotificationMarked {
                id: "n1".to_string(),
                result: Err(ApiError::api("nope")),
            }),
        );
        assert!(!app.notifications.items[0].read);
        assert!(app.notifications.marking.is_none());

        app.notifications.marking = Some("n1".to_string());
        update(
            &mut app,
            UiEvent::Mutation(MutationEvent::NotificationMarked {
                id: "n1".to_string(),
                result: Ok(()),
            }),
        );
        assert!(app.notifications.items[0].read);
    }

    /// Enter on a read notification issues no request.
    #[test]
    fn test_read_notification_click_is_inert() {
        let mut app = app();
        app.screen = Screen::Notifications;
        app.notifications.items = vec![notification("n1", true)];

        let effects = update(&mut app, press(KeyCode::Enter));
        assert!(effects.is_empty());
    }

    /// Enter on a full tournament shows the "full" message and issues no
    /// request.
    #[test]
    fn test_enter_on_full_tournament_blocks_locally() {
        let mut app = app();
        app.screen = Screen::Tournaments;
        let mut items = tournaments(&["1"]);
        items[0].participants_count = 4;
        app.tournaments.items = items;

        let effects = update(&mut app, press(KeyCode::Enter));
        assert!(effects.is_empty());
        assert!(app.tournaments.join.is_none());
        assert_eq!(
            app.status.message,
            Some((StatusKind::Error, "Tournament is full".to_string()))
        );
    }

    /// Join prompt: Enter with an IGN emits the join effect and disables
    /// the control; the prompt survives a failure with input intact.
    #[test]
    fn test_join_prompt_flow() {
        let mut app = app();
        app.screen = Screen::Tournaments;
        app.tournaments.items = tournaments(&["1"]);

        // Open the prompt and type an IGN.
        update(&mut app, press(KeyCode::Enter));
        assert!(app.tournaments.join.is_some());
        for c in "Night".chars() {
            update(&mut app, press(KeyCode::Char(c)));
        }
        let effects = update(&mut app, press(KeyCode::Enter));
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::Join { ign, .. }] if ign.as_str() == "Night"
        ));
        assert!(app.tournaments.join.as_ref().unwrap().busy);

        // While busy, input is swallowed.
        assert!(update(&mut app, press(KeyCode::Char('x'))).is_empty());

        // Failure restores the control and keeps the typed IGN.
        update(
            &mut app,
            UiEvent::Mutation(MutationEvent::JoinCompleted(Err(
                arena_core::flows::FlowError::Api(ApiError::api("Insufficient balance")),
            ))),
        );
        let prompt = app.tournaments.join.as_ref().unwrap();
        assert!(!prompt.busy);
        assert_eq!(prompt.ign, "Night");
        assert_eq!(
            app.status.message,
            Some((StatusKind::Error, "Insufficient balance".to_string()))
        );
    }

    /// Join success closes the prompt and refreshes the list in place.
    #[test]
    fn test_join_success_refreshes() {
        let mut app = app();
        app.tournaments.join = Some(JoinPrompt {
            tournament_id: "1".to_string(),
            title: "Cup 1".to_string(),
            ign: "Night".to_string(),
            busy: true,
        });

        let effects = update(
            &mut app,
            UiEvent::Mutation(MutationEvent::JoinCompleted(Ok(String::new()))),
        );
        assert!(app.tournaments.join.is_none());
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::Fetch(FetchKind::Tournaments)]
        ));
        assert_eq!(
            app.status.message,
            Some((
                StatusKind::Info,
                "Successfully joined tournament!".to_string()
            ))
        );
    }

    /// Screen switching emits the target's fetch (activate contract).
    #[test]
    fn test_screen_switch_activates_fetch() {
        let mut app = app();
        let effects = update(&mut app, press(KeyCode::Char('4')));
        assert_eq!(app.screen, Screen::Wallet);
        assert!(app.wallet.loading);
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::Fetch(FetchKind::Wallet)]
        ));
    }
}
