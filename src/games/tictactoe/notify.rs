//! Result announcements.
//!
//! The game engine never talks to a screen. When a round ends it hands a
//! message to a [`Notifier`] and lets the front-end decide how to show it.

use tracing::{info, instrument};

/// Receives announcements (win or draw) from a running game.
pub trait Notifier {
    /// Delivers a message to whoever is watching the game.
    fn notify(&mut self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, message: &str) {
        (**self).notify(message);
    }
}

/// Collects every announcement in order.
impl Notifier for Vec<String> {
    fn notify(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Writes announcements to the tracing log at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    #[instrument(skip(self))]
    fn notify(&mut self, message: &str) {
        info!(message, "Announcement");
    }
}
