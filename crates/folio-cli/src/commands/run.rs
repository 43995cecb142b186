use std::io::{self, Stdout};
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{info, warn};

use folio_core::{
    contact::{create_relay, ContactMessage, ContactRelay},
    content::{Portfolio, Section},
    AppConfig,
};
use folio_tui::{
    app::{App, Mode},
    event::{AppEvent, ContactResult, EventHandler},
    input::{handle_key_event, Action},
    keymap::Keymap,
    load_theme,
    transition::OffsetAnimator,
    ui,
};

/// Raw mode and the alternate screen, released on every exit path
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, SetTitle("Folio")) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

pub async fn run(config: Arc<AppConfig>, portfolio: Portfolio) -> Result<()> {
    let keymap = Keymap::from_config(&config.keymap);
    let theme = load_theme(&config.ui.theme);

    let relay = if config.contact.is_configured() {
        match create_relay(&config.contact) {
            Ok(relay) => Some(relay),
            Err(e) => {
                warn!("Contact relay unavailable: {}", e);
                None
            }
        }
    } else {
        None
    };

    let mut guard = TerminalGuard::new()?;
    let size = guard.terminal.size()?;

    let mut app = App::new(config.clone(), theme, portfolio, size.width);
    info!("Started at {} columns ({}px)", size.width, app.viewport_width_px());

    let animation_tick = OffsetAnimator::new(config.ui.transition.clone()).tick_duration();
    let event_handler = EventHandler::new(config.ui.tick_rate_ms, animation_tick);

    // Relay sends report back here so the loop never awaits the network
    let (contact_tx, mut contact_rx) = mpsc::unbounded_channel::<ContactResult>();

    let mut needs_fast_update = false;

    loop {
        while let Ok(result) = contact_rx.try_recv() {
            handle_contact_result(&mut app, result);
        }

        app.update_animations();

        guard.terminal.draw(|frame| ui::draw(frame, &app, &keymap))?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app, &keymap);
                    handle_action(&mut app, action, relay.as_ref(), &contact_tx);
                }
                AppEvent::Resize(columns, _) => app.resize(columns),
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_animation_frame();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_action(
    app: &mut App,
    action: Action,
    relay: Option<&Arc<dyn ContactRelay>>,
    contact_tx: &mpsc::UnboundedSender<ContactResult>,
) {
    // Any key other than the first 'g' cancels a pending sequence
    if action != Action::PendingG {
        app.pending_key = None;
    }

    match action {
        Action::Quit => app.should_quit = true,
        Action::NextSection => app.next_section(),
        Action::PrevSection => app.prev_section(),
        Action::CarouselNext => app.carousel_next(),
        Action::CarouselPrev => app.carousel_prev(),
        Action::JumpToFirst => app.carousel_first(),
        Action::JumpToLast => app.carousel_last(),
        Action::PendingG => app.pending_key = Some('g'),
        Action::GoToIndicator(index) => app.carousel_go_to(index),
        Action::OpenLink => app.open_current_link(),
        Action::OpenContact => app.select_section(Section::Contact),
        Action::ShowHelp => app.mode = Mode::Help,
        Action::ExitMode => app.exit_mode(),
        Action::NextField => app.contact.next_field(),
        Action::PrevField => app.contact.prev_field(),
        Action::InputChar(c) => app.contact.input_char(c),
        Action::Backspace => app.contact.backspace(),
        Action::Submit => {
            if app.contact.is_sending() {
                return;
            }
            if let Some(message) = app.contact.submit() {
                match relay {
                    Some(relay) => spawn_contact_send(relay.clone(), message, contact_tx.clone()),
                    None => app
                        .contact
                        .finish(Err("contact relay is not configured".to_string())),
                }
            }
        }
        Action::None => {}
    }
}

fn spawn_contact_send(
    relay: Arc<dyn ContactRelay>,
    message: ContactMessage,
    tx: mpsc::UnboundedSender<ContactResult>,
) {
    tokio::spawn(async move {
        let result = match relay.send(&message).await {
            Ok(()) => ContactResult::Sent,
            Err(e) => ContactResult::Failed {
                error: e.to_string(),
            },
        };
        let _ = tx.send(result);
    });
}

fn handle_contact_result(app: &mut App, result: ContactResult) {
    match result {
        ContactResult::Sent => {
            app.contact.finish(Ok(()));
            app.set_status("Message sent");
        }
        ContactResult::Failed { error } => {
            app.set_status(format!("Send failed: {}", error));
            app.contact.finish(Err(error));
        }
    }
}
