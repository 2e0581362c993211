//=========================================================================
// HUD Manager
//=========================================================================
//
// Owns the HUD element anchored to the focused node.
//
// Every focus change is two-phase: the HUD hides at once and reappears on
// the new anchor when the cursor (or the whole site) has finished moving.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Manager, Reaction};
use crate::core::events::GameEvent;
use crate::core::site::HudId;

//=== Delays ==============================================================

/// Reveal delay after the cursor moves within the matrix.
pub const HUD_FOCUS_DELAY_MS: u64 = 500;

/// Reveal delay after the site moves (level change or rotation).
pub const HUD_SITE_MOVE_DELAY_MS: u64 = 3904;

//=== HudMutation =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudMutation {
    Hide,
    /// Shows the HUD anchored to the given slot.
    Reveal(HudId),
}

//=== HudManager ==========================================================

/// HUD state slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudManager {
    active: HudId,
    visible: bool,
}

impl HudManager {
    pub fn new(active: HudId) -> Self {
        Self {
            active,
            visible: true,
        }
    }

    pub fn active(&self) -> HudId {
        self.active
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Manager for HudManager {
    type Mutation = HudMutation;

    fn name(&self) -> &'static str {
        "hud"
    }

    fn react(&self, event: &GameEvent) -> Reaction<HudMutation> {
        match event {
            GameEvent::ChangeNode { hud, .. } => {
                Reaction::now(HudMutation::Hide).then_after(HUD_FOCUS_DELAY_MS, HudMutation::Reveal(*hud))
            }
            GameEvent::SiteUp { hud, .. }
            | GameEvent::SiteDown { hud, .. }
            | GameEvent::SiteLeft { hud, .. }
            | GameEvent::SiteRight { hud, .. }
            | GameEvent::SelectLevelUp { hud, .. }
            | GameEvent::SelectLevelDown { hud, .. } => Reaction::now(HudMutation::Hide)
                .then_after(HUD_SITE_MOVE_DELAY_MS, HudMutation::Reveal(*hud)),
            GameEvent::PauseChangeSelect { hud, .. } => Reaction::now(HudMutation::Reveal(*hud)),
            _ => Reaction::Ignored,
        }
    }

    fn apply(&mut self, mutation: HudMutation) {
        match mutation {
            HudMutation::Hide => self.visible = false,
            HudMutation::Reveal(hud) => {
                self.active = hud;
                self.visible = true;
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
