use super::App;
use crate::core::reply::ReplyParams;

pub enum AppAction {
    SubmitInput,
    ReplyReceived { request_id: u64, text: String },
    ClearChat,
    InsertChar { ch: char },
    InsertText { text: String },
    Backspace,
    ClearInput,
    ScrollUp { lines: u16 },
    ScrollDown { lines: u16 },
    ScrollToTop,
    ScrollToBottom,
    Quit,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AppActionContext {
    pub term_width: u16,
    pub term_height: u16,
}

/// Side effects the event loop must carry out after an action.
#[derive(Debug)]
pub enum AppCommand {
    RequestReply(ReplyParams),
}

pub fn apply_actions(
    app: &mut App,
    actions: impl IntoIterator<Item = AppAction>,
    ctx: AppActionContext,
) -> Vec<AppCommand> {
    actions
        .into_iter()
        .filter_map(|action| apply_action(app, action, ctx))
        .collect()
}

pub fn apply_action(app: &mut App, action: AppAction, ctx: AppActionContext) -> Option<AppCommand> {
    match action {
        AppAction::SubmitInput => app
            .conversation()
            .submit_input()
            .map(AppCommand::RequestReply),
        AppAction::ReplyReceived { request_id, text } => {
            app.conversation().receive_reply(request_id, text);
            None
        }
        AppAction::ClearChat => {
            app.conversation().clear();
            None
        }
        AppAction::InsertChar { ch } => {
            app.ui.insert_char(ch);
            None
        }
        AppAction::InsertText { text } => {
            app.ui.insert_text(&text);
            None
        }
        AppAction::Backspace => {
            app.ui.backspace();
            None
        }
        AppAction::ClearInput => {
            app.ui.clear_input();
            None
        }
        AppAction::ScrollUp { lines } => {
            app.scroll_up(lines, ctx);
            None
        }
        AppAction::ScrollDown { lines } => {
            app.scroll_down(lines, ctx);
            None
        }
        AppAction::ScrollToTop => {
            app.scroll_to_top(ctx);
            None
        }
        AppAction::ScrollToBottom => {
            app.scroll_to_bottom();
            None
        }
        AppAction::Quit => {
            app.ui.exit_requested = true;
            None
        }
    }
}
