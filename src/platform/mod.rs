//=========================================================================
// Platform Subsystem
//
// Bridges winit window events with the session's control thread.
//
// Architecture:
// ```text
//  Window Thread:                   Control Thread:
//  ┌──────────────────────────┐    ┌──────────────────────┐
//  │  host ApplicationHandler │    │  EventCollector      │
//  │   ↓ window_event()       │    │   ↓                  │
//  │  KeyForwarder            │    │  Session::pump       │
//  │   ├─ process_key_event   │    │   ↓                  │
//  │   └─ InputBuffer         │    │  KeyMap → Router     │
//  │   ↓ RedrawRequested      │    │   ↓                  │
//  │  Channel ────────────────┼───►│  Dispatcher          │
//  └──────────────────────────┘    └──────────────────────┘
//                    PlatformEvent
// ```
//
// The host owns the window and event loop; the forwarder only translates
// and batches. RedrawRequested is the frame boundary, and empty frames
// are not sent.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::Sender;
use log::{info, trace, warn};
use winit::event::WindowEvent;

//=== Internal Imports ====================================================

use crate::core::platform_bridge::PlatformEvent;
use input_buffer::InputBuffer;
use input_processor::process_key_event;

//=== KeyForwarder ========================================================

/// Forwards a window's keyboard input to the control thread.
///
/// Call [`KeyForwarder::handle_window_event`] from the host's
/// `ApplicationHandler::window_event`.
pub struct KeyForwarder {
    buffer: InputBuffer,
    event_sender: Sender<PlatformEvent>,
}

impl KeyForwarder {
    pub fn new(event_sender: Sender<PlatformEvent>) -> Self {
        info!(target: "platform", "Key forwarder initialized");
        Self {
            buffer: InputBuffer::new(),
            event_sender,
        }
    }

    /// Handles one window event. Returns `true` when the host should exit
    /// its event loop.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                true
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match process_key_event(key_event) {
                    Some(input) => self.buffer.push(input),
                    None => trace!(target: "platform::input", "Unmapped key ignored"),
                }
                false
            }

            WindowEvent::RedrawRequested => {
                self.flush();
                false
            }

            _ => false,
        }
    }

    /// Sends everything buffered since the last flush.
    ///
    /// A disconnected channel drops the batch with a warning so the window
    /// can still close normally.
    pub fn flush(&mut self) {
        let Some(events) = self.buffer.drain() else {
            return;
        };
        let count = events.len();

        trace!(target: "platform::input", "Flushing {} key events", count);

        if self.event_sender.send(PlatformEvent::Inputs(events)).is_err() {
            warn!(
                target: "platform::input",
                "Channel disconnected, dropping {} key events",
                count
            );
        }
    }

    /// Number of events waiting for the next flush.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
