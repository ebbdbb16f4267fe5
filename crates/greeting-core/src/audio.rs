/// Autoplay outcome tracking for the background track.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Playback {
    #[default]
    Pending,
    Playing,
    /// The platform refused autoplay; waiting for a user gesture.
    Blocked,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AudioGate {
    playback: Playback,
}

impl AudioGate {
    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn autoplay_started(&mut self) {
        self.playback = Playback::Playing;
    }

    pub fn autoplay_rejected(&mut self) {
        if self.playback != Playback::Playing {
            self.playback = Playback::Blocked;
        }
    }

    /// Result of the unmute button. A failed attempt leaves the prompt up.
    pub fn unmute_result(&mut self, ok: bool) {
        if ok {
            self.playback = Playback::Playing;
        }
    }

    #[inline]
    pub fn needs_unmute_prompt(&self) -> bool {
        self.playback == Playback::Blocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_prompts_until_unmuted() {
        let mut gate = AudioGate::default();
        assert!(!gate.needs_unmute_prompt());
        gate.autoplay_rejected();
        assert!(gate.needs_unmute_prompt());
        gate.unmute_result(false);
        assert!(gate.needs_unmute_prompt());
        gate.unmute_result(true);
        assert!(!gate.needs_unmute_prompt());
        assert_eq!(gate.playback(), Playback::Playing);
    }

    #[test]
    fn late_rejection_does_not_override_playing() {
        let mut gate = AudioGate::default();
        gate.autoplay_started();
        gate.autoplay_rejected();
        assert_eq!(gate.playback(), Playback::Playing);
    }
}
