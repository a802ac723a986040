//! App actor - message loop processing key presses and network responses

use crossterm::event::KeyEvent;
use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::ui_events::key_to_ui_event;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        users_url: impl Into<String>,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(users_url),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop. Returning drops `render_tx`, which tells
    /// the UI loop to exit.
    pub async fn run(
        mut self,
        mut key_rx: mpsc::UnboundedReceiver<KeyEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Mount: kick off the single load
        if let Some(cmd) = self.state.start_fetch() {
            let _ = self.network_tx.send(cmd);
        }
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(key) = key_rx.recv() => {
                    if self.handle_key(key) {
                        if let Some(cmd) = self.state.cancel_fetch() {
                            let _ = self.network_tx.send(cmd);
                        }
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Map a key against the live dialog/help state, returns true on quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key_to_ui_event(key, self.state.editing.is_some(), self.state.show_help) {
            Some(event) => self.handle_ui_event(event),
            None => false,
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::SelectNext => self.state.select_next(),
            UiEvent::SelectPrev => self.state.select_prev(),
            UiEvent::SelectFirst => self.state.select_first(),
            UiEvent::SelectLast => self.state.select_last(),

            UiEvent::EditSelected => self.state.edit_selected(),
            UiEvent::DeleteSelected => self.state.delete_selected(),
            UiEvent::Dialog(input) => self.state.dialog_input(input),

            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            UiEvent::Quit => return true,
        }

        false
    }
}
