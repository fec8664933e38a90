//! Page-flip sound. Purely cosmetic: failures are logged and dropped.

use std::cell::Cell;

use log::debug;

use crate::error::ViewerError;

pub const FLIP_SOUND_URL: &str = "/page-flip.mp3";
pub const FLIP_VOLUME: f64 = 0.4;

/// A preloaded sound that can hand out independent playable copies.
pub trait AudioResource {
    type Instance;

    fn clone_instance(&self) -> Result<Self::Instance, ViewerError>;

    fn start(&self, instance: &Self::Instance, volume: f64) -> Result<(), ViewerError>;
}

/// Plays a fresh copy of the flip sound per request so rapid flips overlap
/// instead of restarting one shared element.
pub struct FlipSound<A: AudioResource> {
    resource: Option<A>,
    failures: Cell<u32>,
}

impl<A: AudioResource> FlipSound<A> {
    pub fn new(resource: A) -> Self {
        Self {
            resource: Some(resource),
            failures: Cell::new(0),
        }
    }

    /// A sound that never plays, for hosts where preloading failed.
    pub fn silent() -> Self {
        Self {
            resource: None,
            failures: Cell::new(0),
        }
    }

    pub fn play(&self) {
        let Some(resource) = &self.resource else {
            return;
        };
        let result = resource
            .clone_instance()
            .and_then(|instance| resource.start(&instance, FLIP_VOLUME));
        if let Err(e) = result {
            self.failures.set(self.failures.get() + 1);
            debug!("flip sound skipped: {e}");
        }
    }

    /// Number of swallowed playback failures.
    pub fn failures(&self) -> u32 {
        self.failures.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeClip {
        clones: Cell<u32>,
        started: RefCell<Vec<(u32, f64)>>,
        blocked: bool,
    }

    impl AudioResource for FakeClip {
        type Instance = u32;

        fn clone_instance(&self) -> Result<u32, ViewerError> {
            self.clones.set(self.clones.get() + 1);
            Ok(self.clones.get())
        }

        fn start(&self, instance: &u32, volume: f64) -> Result<(), ViewerError> {
            if self.blocked {
                return Err(ViewerError::Audio("autoplay blocked".into()));
            }
            self.started.borrow_mut().push((*instance, volume));
            Ok(())
        }
    }

    #[test]
    fn test_each_play_uses_a_new_instance() {
        let sound = FlipSound::new(FakeClip::default());
        sound.play();
        sound.play();
        sound.play();
        let clip = sound.resource.as_ref().unwrap();
        assert_eq!(clip.clones.get(), 3);
        assert_eq!(
            *clip.started.borrow(),
            vec![(1, FLIP_VOLUME), (2, FLIP_VOLUME), (3, FLIP_VOLUME)]
        );
    }

    #[test]
    fn test_blocked_playback_is_swallowed() {
        let sound = FlipSound::new(FakeClip {
            blocked: true,
            ..Default::default()
        });
        sound.play();
        sound.play();
        assert_eq!(sound.failures(), 2);
    }

    #[test]
    fn test_silent_never_plays() {
        let sound: FlipSound<FakeClip> = FlipSound::silent();
        sound.play();
        assert_eq!(sound.failures(), 0);
    }
}
