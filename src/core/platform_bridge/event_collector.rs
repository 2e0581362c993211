//=========================================================================
// Event Collector
//=========================================================================
//
// Control-side end of the platform channel. Flattens every key batch that
// arrived since the last frame into one ordered input list.
//
// Flow:
//   Receiver<PlatformEvent>
//     ├─ Inputs(batch) ─► pending keys (capped per frame)
//     ├─ WindowClosed  ─► TickControl::Exit
//     └─ Disconnected  ─► TickControl::Exit
//
// Keys that arrived before a close are still handed out, so the last
// frame's input is not lost. Batches beyond the per-frame cap stay in the
// channel for the next frame.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, TryRecvError};
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::InputEvent;

//=== Limits ==============================================================

/// Key events accepted per frame before the rest wait for the next one.
pub const MAX_INPUTS_PER_FRAME: usize = 64;

//=== TickControl =========================================================

/// Whether the host should keep driving the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

#[derive(Debug)]
pub struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    inputs: Vec<InputEvent>,
    idle_sleep: Option<Duration>,
    saturated_frames: u64,
}

impl EventCollector {
    /// Never sleeps; suited to hosts driving it from a render loop.
    pub fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            inputs: Vec::with_capacity(MAX_INPUTS_PER_FRAME),
            idle_sleep: None,
            saturated_frames: 0,
        }
    }

    /// Sleeps for `idle_sleep` after a frame in which nothing arrived.
    pub fn with_idle_sleep(mut self, idle_sleep: Duration) -> Self {
        self.idle_sleep = Some(idle_sleep);
        self
    }

    /// Replaces the pending inputs with whatever arrived since last frame.
    pub fn collect_frame(&mut self) -> TickControl {
        self.inputs.clear();
        let mut received_any = false;

        while self.inputs.len() < MAX_INPUTS_PER_FRAME {
            let event = match self.receiver.try_recv() {
                Ok(event) => event,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    debug!(target: "platform", "Platform channel disconnected");
                    return TickControl::Exit;
                }
            };
            received_any = true;

            match event {
                PlatformEvent::Inputs(batch) => self.inputs.extend(batch),
                PlatformEvent::WindowClosed => return TickControl::Exit,
            }
        }

        if self.inputs.len() >= MAX_INPUTS_PER_FRAME {
            self.saturated_frames += 1;
            warn!(
                target: "platform",
                "Input backlog: {} key events this frame, rest deferred",
                self.inputs.len()
            );
        }

        if !received_any {
            if let Some(idle_sleep) = self.idle_sleep {
                thread::sleep(idle_sleep);
            }
        }

        TickControl::Continue
    }

    /// Inputs of the current frame, in arrival order.
    pub fn inputs(&self) -> &[InputEvent] {
        &self.inputs
    }

    pub fn take_inputs(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.inputs)
    }

    /// Frames that hit the per-frame input cap so far.
    pub fn saturated_frames(&self) -> u64 {
        self.saturated_frames
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crossbeam_channel::unbounded;

    fn press(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key }
    }

    #[test]
    fn empty_channel_yields_no_inputs() {
        let (_tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert!(collector.inputs().is_empty());
    }

    #[test]
    fn batches_are_flattened_in_order() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Inputs(vec![press(KeyCode::KeyX)])).unwrap();
        tx.send(PlatformEvent::Inputs(vec![
            press(KeyCode::ArrowUp),
            InputEvent::KeyUp { key: KeyCode::ArrowUp },
        ]))
        .unwrap();

        collector.collect_frame();

        assert_eq!(
            collector.inputs(),
            &[
                press(KeyCode::KeyX),
                press(KeyCode::ArrowUp),
                InputEvent::KeyUp { key: KeyCode::ArrowUp },
            ]
        );
    }

    #[test]
    fn close_keeps_inputs_received_before_it() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Inputs(vec![press(KeyCode::KeyV)])).unwrap();
        tx.send(PlatformEvent::WindowClosed).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Exit);
        assert_eq!(collector.take_inputs(), vec![press(KeyCode::KeyV)]);
    }

    #[test]
    fn disconnect_means_exit() {
        let (tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        drop(tx);

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn overflow_waits_for_next_frame() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx).with_idle_sleep(Duration::from_millis(1));

        for _ in 0..MAX_INPUTS_PER_FRAME {
            tx.send(PlatformEvent::Inputs(vec![press(KeyCode::KeyZ)])).unwrap();
        }
        tx.send(PlatformEvent::Inputs(vec![press(KeyCode::KeyC)])).unwrap();

        collector.collect_frame();
        assert_eq!(collector.inputs().len(), MAX_INPUTS_PER_FRAME);
        assert_eq!(collector.saturated_frames(), 1);

        collector.collect_frame();
        assert_eq!(collector.inputs(), &[press(KeyCode::KeyC)]);
    }

    #[test]
    fn next_frame_replaces_previous_inputs() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Inputs(vec![press(KeyCode::Space)])).unwrap();
        collector.collect_frame();
        assert_eq!(collector.inputs().len(), 1);

        tx.send(PlatformEvent::Inputs(vec![])).unwrap();
        collector.collect_frame();
        assert!(collector.inputs().is_empty());
    }
}
