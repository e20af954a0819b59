//! Password generator panel library
//!
//! This library provides the logic behind a password generator panel:
//! uniform generation from selectable character classes, a four-level
//! strength classifier and the panel state machine with copy feedback.
//!
//! # Features
//!
//! - `async` (default): Enables the copy feedback timer with cancellation support
//! - `clipboard` (default): Enables the system clipboard writer
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_GEN_LENGTH`: Initial password length (default: `8`, bounds `5..=30`)
//! - `PWD_GEN_COPIED_MS`: Copy feedback duration in milliseconds (default: `1000`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_generator::{classify, generate, CharacterClassSelection, MemoryClipboard, Panel};
//! use secrecy::ExposeSecret;
//!
//! let password = generate(16, &CharacterClassSelection::all()).expect("Selection is not empty");
//! println!("Strength: {}", classify(&password));
//!
//! let mut panel = Panel::default();
//! panel.set_length(12).expect("Selection is not empty");
//! let mut clipboard = MemoryClipboard::new();
//! let ticket = panel.copy(&mut clipboard).expect("Memory clipboard never fails");
//! assert_eq!(
//!     clipboard.contents().map(|c| c.expose_secret().to_string()),
//!     Some(panel.password().expose_secret().to_string())
//! );
//! panel.expire_copy(ticket.generation);
//! ```

// Internal modules
mod charset;
mod classifier;
mod clipboard;
mod config;
mod generator;
mod panel;
mod sections;
mod types;

// Public API
pub use charset::{
    CharacterClass, CharacterClassSelection, Composition, LOWERCASE, NUMBERS, SPECIAL_CHARS,
    UPPERCASE,
};
pub use classifier::classify;
pub use clipboard::{ClipboardError, ClipboardWriter, MemoryClipboard};
pub use config::{ConfigError, PanelConfig};
pub use generator::{generate, generate_with, GenerateError};
pub use panel::{CopyTicket, Panel, PanelError, PanelEvent, PanelState};
pub use sections::MIN_LENGTH;
pub use types::{Indicator, StrengthLabel};

#[cfg(feature = "clipboard")]
pub use clipboard::SystemClipboard;

#[cfg(feature = "async")]
pub use panel::copy_feedback_tx;
