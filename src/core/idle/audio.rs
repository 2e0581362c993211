//=========================================================================
// Audio Cues
//=========================================================================

/// Sound effects the session core asks the host to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Chime announcing the idle media sequence.
    IdleMediaChime,
}

/// Host-provided audio player.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Discards every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Records cues in order of play.
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    played: Vec<SoundCue>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> &[SoundCue] {
        &self.played
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, cue: SoundCue) {
        self.played.push(cue);
    }
}
