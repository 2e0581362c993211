//=========================================================================
// Site Manager
//=========================================================================
//
// Owns the active site, the stored cursor of both sites and the site
// transform the presentation layer animates towards.
//
// Two-phase moves:
//   event ─► cursor stored now ─► transform follows once the move
//                                 animation has played
//
//=========================================================================

//=== External Dependencies ===============================================

use std::f32::consts::FRAC_PI_2;

//=== Internal Dependencies ===============================================

use super::{Manager, Reaction};
use crate::core::events::GameEvent;
use crate::core::site::{CursorLocation, SiteKind};
use crate::persistence::GameState;

//=== Delays ==============================================================

/// Level change (up/down or level selection jump).
pub const VERTICAL_MOVE_DELAY_MS: u64 = 1300;

/// Segment rotation (left/right).
pub const HORIZONTAL_MOVE_DELAY_MS: u64 = 1100;

//=== SiteTransform =======================================================

/// Orientation and height of the site model.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SiteTransform {
    /// Tilt; raised while the pause menu is open.
    pub rot_x: f32,
    pub rot_y: f32,
    pub pos_y: f32,
}

impl SiteTransform {
    fn for_location(location: &CursorLocation) -> Self {
        Self {
            rot_x: 0.0,
            rot_y: location.rot_y(),
            pos_y: location.pos_y(),
        }
    }
}

//=== SiteMutation ========================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SiteMutation {
    /// Stores a cursor in its site's slot.
    SetLocation(CursorLocation),
    SetPosY(f32),
    SetRotY(f32),
    SetRotX(f32),
    SetIntroAnim(bool),
    /// Activates the other site and jumps to its stored transform.
    ChangeSite { site: SiteKind, rot_y: f32, pos_y: f32 },
    /// Back to a new game's sites.
    Reset,
}

//=== SiteManager =========================================================

/// Site state slice.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteManager {
    site: SiteKind,
    a_location: CursorLocation,
    b_location: CursorLocation,
    transform: SiteTransform,
    intro_anim: bool,
}

impl SiteManager {
    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            site: state.site,
            a_location: state.a_location,
            b_location: state.b_location,
            transform: SiteTransform::for_location(state.current_location()),
            intro_anim: true,
        }
    }

    pub fn site(&self) -> SiteKind {
        self.site
    }

    /// Stored cursor of a site.
    pub fn location(&self, site: SiteKind) -> &CursorLocation {
        match site {
            SiteKind::A => &self.a_location,
            SiteKind::B => &self.b_location,
        }
    }

    /// Cursor of the active site.
    pub fn active_location(&self) -> &CursorLocation {
        self.location(self.site)
    }

    pub fn transform(&self) -> SiteTransform {
        self.transform
    }

    /// Whether the site intro animation should play on next display.
    pub fn intro_anim(&self) -> bool {
        self.intro_anim
    }

    fn location_mut(&mut self, site: SiteKind) -> &mut CursorLocation {
        match site {
            SiteKind::A => &mut self.a_location,
            SiteKind::B => &mut self.b_location,
        }
    }
}

impl Manager for SiteManager {
    type Mutation = SiteMutation;

    fn name(&self) -> &'static str {
        "site"
    }

    fn react(&self, event: &GameEvent) -> Reaction<SiteMutation> {
        use SiteMutation::*;

        match event {
            GameEvent::ChangeNode { location, .. } => Reaction::now(SetLocation(*location)),

            GameEvent::SiteUp { location, pos_y, .. }
            | GameEvent::SiteDown { location, pos_y, .. }
            | GameEvent::SelectLevelUp { location, pos_y, .. }
            | GameEvent::SelectLevelDown { location, pos_y, .. } => {
                Reaction::now(SetLocation(*location))
                    .then_after(VERTICAL_MOVE_DELAY_MS, SetPosY(*pos_y))
            }

            GameEvent::SiteLeft { location, rot_y, .. }
            | GameEvent::SiteRight { location, rot_y, .. } => {
                Reaction::now(SetLocation(*location))
                    .then_after(HORIZONTAL_MOVE_DELAY_MS, SetRotY(*rot_y))
            }

            GameEvent::PauseGame => Reaction::now(SetRotX(FRAC_PI_2)),
            GameEvent::PauseExitSelect | GameEvent::PauseLoadSelect => {
                Reaction::now(SetRotX(0.0))
            }
            GameEvent::PauseChangeSelect {
                new_site,
                rot_y,
                pos_y,
                ..
            } => Reaction::now(ChangeSite {
                site: *new_site,
                rot_y: *rot_y,
                pos_y: *pos_y,
            }),

            GameEvent::ThrowNodeMedia { .. }
            | GameEvent::ThrowNodeSskn { .. }
            | GameEvent::ThrowNodeGate { .. }
            | GameEvent::ThrowNodePolytan { .. } => Reaction::now(SetIntroAnim(false)),

            GameEvent::StartNewGame => Reaction::now(Reset),

            _ => Reaction::Ignored,
        }
    }

    fn apply(&mut self, mutation: SiteMutation) {
        match mutation {
            SiteMutation::SetLocation(location) => {
                *self.location_mut(location.site_kind) = location;
            }
            SiteMutation::SetPosY(pos_y) => self.transform.pos_y = pos_y,
            SiteMutation::SetRotY(rot_y) => self.transform.rot_y = rot_y,
            SiteMutation::SetRotX(rot_x) => self.transform.rot_x = rot_x,
            SiteMutation::SetIntroAnim(flag) => self.intro_anim = flag,
            SiteMutation::ChangeSite { site, rot_y, pos_y } => {
                self.site = site;
                self.intro_anim = true;
                self.transform = SiteTransform {
                    rot_x: 0.0,
                    rot_y,
                    pos_y,
                };
            }
            SiteMutation::Reset => *self = Self::from_game_state(&GameState::default()),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
