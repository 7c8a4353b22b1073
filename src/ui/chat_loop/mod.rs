//! Main chat event loop.
//!
//! Terminal events are read on a dedicated thread and forwarded over a
//! channel; the loop waits on that channel, the reply channel, and a redraw
//! tick that drives the typing indicator.

mod keybindings;
mod lifecycle;

use std::{error::Error, sync::Arc, thread, time::Duration};

use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use self::keybindings::{action_for_key, action_for_mouse};
use self::lifecycle::{restore_terminal, setup_terminal, ChatTerminal};
use crate::api::client::ModelClient;
use crate::core::app::{apply_actions, App, AppAction, AppActionContext, AppCommand, AppInitConfig};
use crate::core::reply::{ReplyMessage, ReplyService};
use crate::ui::layout::ChatAreas;
use crate::ui::renderer::ui;
use crate::ui::theme::Theme;

const EVENT_POLL: Duration = Duration::from_millis(50);
const REDRAW_TICK: Duration = Duration::from_millis(120);

#[derive(Debug)]
pub enum UiEvent {
    Crossterm(Event),
}

/// What the chat session needs beyond the terminal itself.
pub struct ChatOptions {
    pub client: Arc<dyn ModelClient>,
    pub model: String,
    pub system_instruction: String,
}

pub async fn run_chat(options: ChatOptions) -> Result<(), Box<dyn Error>> {
    let mut app = App::new(AppInitConfig {
        client: options.client,
        model: options.model,
        system_instruction: options.system_instruction,
        theme: Theme::dark_default(),
    });

    let mut terminal = setup_terminal()?;
    info!(model = %app.session.model, "chat session started");

    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore even when the loop failed; the loop error wins if both fail.
    let restored = restore_terminal(&mut terminal);
    result?;
    restored?;

    info!(messages = app.transcript.len(), "chat session ended");
    Ok(())
}

async fn run_event_loop(terminal: &mut ChatTerminal, app: &mut App) -> Result<(), Box<dyn Error>> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    spawn_event_reader(event_tx);

    let (reply_service, mut reply_rx) = ReplyService::new();
    let mut tick = tokio::time::interval(REDRAW_TICK);

    terminal.draw(|f| ui(f, app))?;

    loop {
        let mut redraw = false;
        let size = terminal.size()?;
        let ctx = AppActionContext {
            term_width: size.width,
            term_height: size.height,
        };

        tokio::select! {
            maybe_event = event_rx.recv() => {
                let Some(event) = maybe_event else {
                    debug!("terminal event reader stopped");
                    break;
                };
                let actions = actions_for_event(event, ctx);
                redraw = true;
                let commands = apply_actions(app, actions, ctx);
                execute_commands(&reply_service, commands);
            }
            Some(reply) = reply_rx.recv() => {
                let ReplyMessage { request_id, text } = reply;
                apply_actions(app, [AppAction::ReplyReceived { request_id, text }], ctx);
                redraw = true;
            }
            _ = tick.tick() => {
                redraw = app.is_loading();
            }
        }

        if app.ui.exit_requested {
            break;
        }
        if redraw {
            terminal.draw(|f| ui(f, app))?;
        }
    }

    Ok(())
}

fn actions_for_event(event: UiEvent, ctx: AppActionContext) -> Vec<AppAction> {
    let UiEvent::Crossterm(event) = event;
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            let (_, page_height) = ChatAreas::transcript_size(ctx.term_width, ctx.term_height);
            action_for_key(&key, page_height).into_iter().collect()
        }
        Event::Mouse(mouse) => action_for_mouse(&mouse).into_iter().collect(),
        Event::Paste(text) => vec![AppAction::InsertText { text }],
        _ => Vec::new(),
    }
}

fn execute_commands(reply_service: &ReplyService, commands: Vec<AppCommand>) {
    for command in commands {
        match command {
            AppCommand::RequestReply(params) => {
                debug!(request_id = params.request_id, "dispatching reply request");
                reply_service.spawn_reply(params);
            }
        }
    }
}

/// Blocking crossterm reads live on their own thread so the async loop never
/// stalls on input.
fn spawn_event_reader(tx: mpsc::UnboundedSender<UiEvent>) {
    thread::spawn(move || loop {
        if tx.is_closed() {
            break;
        }
        match event::poll(EVENT_POLL) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.send(UiEvent::Crossterm(ev)).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    warn!(error = %err, "failed to read terminal event");
                    break;
                }
            },
            Ok(false) => {}
            Err(err) => {
                warn!(error = %err, "failed to poll terminal events");
                break;
            }
        }
    });
}
