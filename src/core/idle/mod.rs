//=========================================================================
// Idle Monitor
//=========================================================================
//
// Per-tick watchdog that injects events after input inactivity.
//
// Timeline (no input after the last activity at t = 0):
//
//   0 ───── 10 000 ── 17 500 ── 25 000 ── 30 000 ── 32 500 ─►
//               anim      anim      anim   idle media   anim ...
//
// Rule 1  now > animation baseline + 10 000
//         → IdleAnimation, baseline := now − 2 500
// Rule 2  now > scene baseline + 30 000
//         → PlayIdleMedia + chime, scene baseline unset until the next
//           qualifying input
//
// Both rules are gated on Scene = Main, a subscene other than Pause,
// LevelSelection or About, and both baselines being set.
//
//=========================================================================

//=== Module Declarations =================================================

mod audio;
mod clock;
mod selector;

//=== Public API ==========================================================

pub use audio::{AudioSink, NullAudio, RecordingAudio, SoundCue};
pub use clock::{Clock, ManualClock, SystemClock};
pub use selector::{IdleAnimationSelector, RandomIdleSelector};

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::events::GameEvent;
use crate::core::scene::{Scene, Subscene};

//=== IdleConfig ==========================================================

/// Inactivity thresholds in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleConfig {
    /// Inactivity before an idle animation.
    pub animation_after_ms: u64,
    /// How far back the animation baseline is moved after one fires.
    pub animation_rebase_ms: u64,
    /// Inactivity before the idle media scene.
    pub idle_media_after_ms: u64,
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self {
            animation_after_ms: 10_000,
            animation_rebase_ms: 2_500,
            idle_media_after_ms: 30_000,
        }
    }
}

//=== IdleOutput ==========================================================

/// What one tick produced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IdleOutput {
    /// Events to dispatch, in order.
    pub events: Vec<GameEvent>,
    pub cue: Option<SoundCue>,
}

impl IdleOutput {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.cue.is_none()
    }
}

//=== IdleMonitor =========================================================

#[derive(Debug, Clone)]
pub struct IdleMonitor {
    config: IdleConfig,
    last_key_press: Option<u64>,
    animation_baseline: Option<u64>,
    scene_baseline: Option<u64>,
}

impl IdleMonitor {
    /// Starts disarmed: nothing fires before the first recorded activity.
    pub fn new(config: IdleConfig) -> Self {
        Self {
            config,
            last_key_press: None,
            animation_baseline: None,
            scene_baseline: None,
        }
    }

    pub fn config(&self) -> &IdleConfig {
        &self.config
    }

    pub fn last_key_press(&self) -> Option<u64> {
        self.last_key_press
    }

    pub fn animation_baseline(&self) -> Option<u64> {
        self.animation_baseline
    }

    pub fn scene_baseline(&self) -> Option<u64> {
        self.scene_baseline
    }

    /// Re-arms every timer at `now_ms`.
    pub fn record_activity(&mut self, now_ms: u64) {
        self.last_key_press = Some(now_ms);
        self.animation_baseline = Some(now_ms);
        self.scene_baseline = Some(now_ms);
    }

    /// Unsets the idle-scene baseline whenever the scene is not `Main`.
    pub fn observe_scene(&mut self, scene: Scene) {
        if scene != Scene::Main && self.scene_baseline.take().is_some() {
            debug!(target: "idle", "Idle media disarmed by scene {:?}", scene);
        }
    }

    /// Applies both rules once.
    pub fn tick(
        &mut self,
        now_ms: u64,
        scene: Scene,
        subscene: Subscene,
        selector: &mut dyn IdleAnimationSelector,
    ) -> IdleOutput {
        let mut output = IdleOutput::default();

        if scene != Scene::Main || !matches!(subscene, Subscene::Normal) {
            return output;
        }
        let (Some(animation_baseline), Some(scene_baseline)) =
            (self.animation_baseline, self.scene_baseline)
        else {
            return output;
        };

        if now_ms > animation_baseline + self.config.animation_after_ms {
            let animation = selector.select();
            debug!(target: "idle", "Idle animation {:?} at {}ms", animation, now_ms);
            output.events.push(GameEvent::IdleAnimation { animation });
            self.animation_baseline = Some(now_ms.saturating_sub(self.config.animation_rebase_ms));
        }

        if now_ms > scene_baseline + self.config.idle_media_after_ms {
            debug!(target: "idle", "Idle media triggered at {}ms", now_ms);
            self.scene_baseline = None;
            output.events.push(GameEvent::PlayIdleMedia);
            output.cue = Some(SoundCue::IdleMediaChime);
        }

        output
    }
}

impl Default for IdleMonitor {
    fn default() -> Self {
        Self::new(IdleConfig::default())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::managers::LainAnimation;

    struct Fixed;

    impl IdleAnimationSelector for Fixed {
        fn select(&mut self) -> LainAnimation {
            LainAnimation::Yawn
        }
    }

    fn armed_at(now: u64) -> IdleMonitor {
        let mut monitor = IdleMonitor::default();
        monitor.record_activity(now);
        monitor
    }

    #[test]
    fn disarmed_monitor_never_fires() {
        let mut monitor = IdleMonitor::default();
        let out = monitor.tick(1_000_000, Scene::Main, Subscene::Normal, &mut Fixed);
        assert!(out.is_empty());
    }

    #[test]
    fn animation_fires_strictly_after_threshold() {
        let mut monitor = armed_at(0);

        assert!(monitor.tick(10_000, Scene::Main, Subscene::Normal, &mut Fixed).is_empty());

        let out = monitor.tick(10_001, Scene::Main, Subscene::Normal, &mut Fixed);
        assert_eq!(
            out.events,
            vec![GameEvent::IdleAnimation {
                animation: LainAnimation::Yawn
            }]
        );
        assert_eq!(monitor.animation_baseline(), Some(7_501));
    }

    #[test]
    fn idle_media_is_one_shot_until_activity() {
        let mut monitor = armed_at(0);

        let out = monitor.tick(30_001, Scene::Main, Subscene::Normal, &mut Fixed);
        assert!(out.events.contains(&GameEvent::PlayIdleMedia));
        assert_eq!(out.cue, Some(SoundCue::IdleMediaChime));
        assert_eq!(monitor.scene_baseline(), None);

        let later = monitor.tick(90_000, Scene::Main, Subscene::Normal, &mut Fixed);
        assert!(!later.events.contains(&GameEvent::PlayIdleMedia));

        monitor.record_activity(90_000);
        let rearmed = monitor.tick(120_001, Scene::Main, Subscene::Normal, &mut Fixed);
        assert!(rearmed.events.contains(&GameEvent::PlayIdleMedia));
    }

    #[test]
    fn gated_by_scene_and_subscene() {
        let mut monitor = armed_at(0);

        for (scene, subscene) in [
            (Scene::Media, Subscene::Normal),
            (Scene::Main, Subscene::Pause),
            (Scene::Main, Subscene::LevelSelection),
            (Scene::Main, Subscene::About),
        ] {
            assert!(monitor.tick(50_000, scene, subscene, &mut Fixed).is_empty());
        }
    }

    #[test]
    fn leaving_main_disarms_idle_media_only() {
        let mut monitor = armed_at(0);

        monitor.observe_scene(Scene::Main);
        assert_eq!(monitor.scene_baseline(), Some(0));

        monitor.observe_scene(Scene::Sskn);
        assert_eq!(monitor.scene_baseline(), None);
        assert_eq!(monitor.animation_baseline(), Some(0));
    }
}
