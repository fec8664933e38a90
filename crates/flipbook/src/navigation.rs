//! Keyboard and button intents, and how they reach the book widget.

use serde::Serialize;

use crate::audio::{AudioResource, FlipSound};
use crate::renderer::BookWidget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Next,
    Previous,
    Close,
}

impl Intent {
    /// Map a `KeyboardEvent.key` value to an intent.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(Intent::Next),
            "ArrowLeft" => Some(Intent::Previous),
            "Escape" => Some(Intent::Close),
            _ => None,
        }
    }
}

/// What the host has to do after an intent was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Flipped,
    CloseRequested,
}

/// Forward a flip intent to the widget and play the flip sound.
///
/// The page index is not touched here: it only changes when the widget
/// reports a page change, so it can never run ahead of the animation.
/// Boundary checks are left to the widget, which drops out-of-range flips.
pub fn dispatch<W, A>(intent: Intent, widget: &mut W, sound: &FlipSound<A>) -> Outcome
where
    W: BookWidget + ?Sized,
    A: AudioResource,
{
    match intent {
        Intent::Next => {
            widget.flip_next();
            sound.play();
            Outcome::Flipped
        }
        Intent::Previous => {
            widget.flip_prev();
            sound.play();
            Outcome::Flipped
        }
        Intent::Close => Outcome::CloseRequested,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Intent::from_key("ArrowRight"), Some(Intent::Next));
        assert_eq!(Intent::from_key("ArrowLeft"), Some(Intent::Previous));
        assert_eq!(Intent::from_key("Escape"), Some(Intent::Close));
        assert_eq!(Intent::from_key("ArrowUp"), None);
        assert_eq!(Intent::from_key("a"), None);
    }
}
