//! Password generator panel - interaction state machine.
//!
//! Holds the slider length, the class toggles, the current password and its
//! strength label, plus the transient "copied" feedback. Every edit
//! regenerates the password and recomputes its strength.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::charset::{CharacterClass, CharacterClassSelection};
use crate::classifier::classify;
use crate::clipboard::{ClipboardError, ClipboardWriter};
use crate::config::PanelConfig;
use crate::generator::{generate, GenerateError};
use crate::types::StrengthLabel;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Idle,
    EditingLength,
    EditingClasses,
    Copied,
}

/// Issued by a successful copy; expires after `feedback`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyTicket {
    pub generation: u64,
    pub feedback: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    CopyExpired { generation: u64 },
}

pub struct Panel {
    config: PanelConfig,
    length: usize,
    selection: CharacterClassSelection,
    password: SecretString,
    strength: StrengthLabel,
    state: PanelState,
    // Bumped on every copy and every regeneration; older tickets are stale.
    copy_generation: u64,
    #[cfg(feature = "async")]
    copy_timer: Option<CancellationToken>,
}

impl Default for Panel {
    fn default() -> Self {
        Self::new(PanelConfig::default())
    }
}

impl Panel {
    /// Creates a panel and generates its first password.
    ///
    /// An empty selection in `config` leaves the panel in `EditingClasses`
    /// with an empty password, as after toggling the last class off.
    pub fn new(config: PanelConfig) -> Self {
        let mut panel = Self {
            length: config.clamp_length(config.default_length),
            selection: config.selection,
            config,
            password: SecretString::new("".into()),
            strength: StrengthLabel::TooShort,
            state: PanelState::Idle,
            copy_generation: 0,
            #[cfg(feature = "async")]
            copy_timer: None,
        };
        if panel.selection.is_empty() {
            panel.state = PanelState::EditingClasses;
        } else {
            // Cannot fail: the selection is not empty.
            let _ = panel.regenerate(PanelState::Idle);
        }
        panel
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn selection(&self) -> &CharacterClassSelection {
        &self.selection
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }

    pub fn strength(&self) -> StrengthLabel {
        self.strength
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Whether the copy button shows its "copied" mark.
    pub fn is_copied(&self) -> bool {
        self.state == PanelState::Copied
    }

    /// Moves the length slider. `length` is clamped to the configured bounds.
    pub fn set_length(&mut self, length: usize) -> Result<(), PanelError> {
        self.length = self.config.clamp_length(length);
        self.regenerate(PanelState::EditingLength)
    }

    /// Flips one class checkbox.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidSelection`] when the last class was
    /// turned off. The password is cleared and the panel stays in
    /// `EditingClasses` until a class is enabled again.
    pub fn toggle_class(&mut self, class: CharacterClass) -> Result<(), PanelError> {
        self.selection.toggle(class);
        self.regenerate(PanelState::EditingClasses)
    }

    /// Regenerates with the current length and classes.
    pub fn refresh(&mut self) -> Result<(), PanelError> {
        let editing = match self.state {
            PanelState::EditingClasses => PanelState::EditingClasses,
            _ => PanelState::Idle,
        };
        self.regenerate(editing)
    }

    /// Writes the current password to `clipboard` and enters `Copied`.
    ///
    /// On failure the error is returned and the state is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidSelection`] without touching the
    /// clipboard while no class is selected.
    pub fn copy<C: ClipboardWriter + ?Sized>(
        &mut self,
        clipboard: &mut C,
    ) -> Result<CopyTicket, PanelError> {
        if self.selection.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::warn!("Copy rejected: no character class selected");
            return Err(GenerateError::InvalidSelection.into());
        }

        if let Err(e) = clipboard.write_text(self.password.expose_secret()) {
            #[cfg(feature = "tracing")]
            tracing::error!("Copy to clipboard FAILED: {}", e);
            return Err(e.into());
        }

        self.copy_generation += 1;
        self.transition(PanelState::Copied);

        Ok(CopyTicket {
            generation: self.copy_generation,
            feedback: self.config.copied_feedback,
        })
    }

    /// Ends the copy feedback of `generation`.
    ///
    /// Returns `false` and does nothing if a newer copy or a regeneration
    /// happened since the ticket was issued.
    pub fn expire_copy(&mut self, generation: u64) -> bool {
        if self.state != PanelState::Copied || generation != self.copy_generation {
            #[cfg(feature = "tracing")]
            tracing::trace!("Ignoring stale copy expiry {}", generation);
            return false;
        }

        #[cfg(feature = "async")]
        {
            self.copy_timer = None;
        }
        // Password is unchanged, so this yields the same label.
        self.strength = classify(&self.password);
        self.transition(PanelState::Idle);
        true
    }

    /// Applies an event produced by the copy feedback timer.
    pub fn handle(&mut self, event: PanelEvent) -> bool {
        match event {
            PanelEvent::CopyExpired { generation } => self.expire_copy(generation),
        }
    }

    /// Copies and starts the feedback timer on the current tokio runtime.
    ///
    /// A running timer from an earlier copy is cancelled. The expiry is sent
    /// on `tx` and must be fed back through [`Panel::handle`].
    #[cfg(feature = "async")]
    pub fn copy_with_feedback<C: ClipboardWriter + ?Sized>(
        &mut self,
        clipboard: &mut C,
        tx: mpsc::Sender<PanelEvent>,
    ) -> Result<tokio::task::JoinHandle<()>, PanelError> {
        let ticket = self.copy(clipboard)?;

        let token = CancellationToken::new();
        if let Some(previous) = self.copy_timer.replace(token.clone()) {
            previous.cancel();
        }

        Ok(tokio::spawn(copy_feedback_tx(ticket, token, tx)))
    }

    fn regenerate(&mut self, editing: PanelState) -> Result<(), PanelError> {
        self.transition(editing);
        self.copy_generation += 1;
        #[cfg(feature = "async")]
        {
            if let Some(timer) = self.copy_timer.take() {
                timer.cancel();
            }
        }

        match generate(self.length, &self.selection) {
            Ok(password) => {
                self.password = password;
                self.strength = classify(&self.password);
                self.transition(PanelState::Idle);
                Ok(())
            }
            Err(e) => {
                self.password = SecretString::new("".into());
                self.strength = classify(&self.password);
                self.transition(PanelState::EditingClasses);
                Err(e.into())
            }
        }
    }

    fn transition(&mut self, next: PanelState) {
        #[cfg(feature = "tracing")]
        {
            if self.state != next {
                tracing::debug!("Panel state {:?} -> {:?}", self.state, next);
            }
        }
        self.state = next;
    }
}

/// Waits out the copy feedback window, then reports the expiry on `tx`.
///
/// Returns without sending if `token` is cancelled first.
#[cfg(feature = "async")]
pub async fn copy_feedback_tx(
    ticket: CopyTicket,
    token: CancellationToken,
    tx: mpsc::Sender<PanelEvent>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::trace!("Copy feedback {} cancelled", ticket.generation);
            return;
        }
        _ = tokio::time::sleep(ticket.feedback) => {}
    }

    let event = PanelEvent::CopyExpired {
        generation: ticket.generation,
    };
    if let Err(_e) = tx.send(event).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send copy expiry: {}", _e);
    }
}
