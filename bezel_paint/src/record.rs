// Copyright 2026 the Bezel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Affine;

use crate::{ClipShape, DrawOp, LayerOp, PaintOp, PaintSink, StateOp};

/// Snapshot of the paint state inside a [`Recorder`].
#[derive(Clone, Debug, PartialEq)]
pub struct StateSnapshot {
    /// Current transform.
    pub transform: Affine,
    /// Number of active layers on the layer stack.
    pub layer_stack_depth: u32,
    /// Clip of the innermost layer, if it has one.
    pub clip: Option<ClipShape>,
    /// Transform that was current when the innermost layer was pushed.
    pub clip_transform: Option<Affine>,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            layer_stack_depth: 0,
            clip: None,
            clip_transform: None,
        }
    }
}

/// Event recorded by a [`Recorder`].
#[derive(Clone, Debug)]
pub enum Event {
    /// State operation and the resulting state snapshot.
    State {
        /// State operation that was applied.
        op: StateOp,
        /// Snapshot after applying the state operation.
        state: StateSnapshot,
    },
    /// Draw operation and the state snapshot used for drawing.
    Draw {
        /// Draw operation that was applied.
        op: DrawOp,
        /// Snapshot at the time of drawing.
        state: StateSnapshot,
    },
}

/// Paint sink that records operations along with the state they ran under.
///
/// It does not rasterize anything. It is meant for tests and debugging that
/// want to assert on emitted ops and on the transform and clip in effect
/// when each one was applied.
#[derive(Default, Debug)]
pub struct Recorder {
    events: Vec<Event>,
    ops: Vec<PaintOp>,
    state: StateSnapshot,
    layer_stack: Vec<(LayerOp, Affine)>,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a slice of recorded events.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns a slice of raw paint operations.
    #[must_use]
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Current paint state.
    #[must_use]
    pub fn current_state(&self) -> &StateSnapshot {
        &self.state
    }

    /// Returns the draw events together with the state they ran under.
    pub fn draws(&self) -> impl Iterator<Item = (&DrawOp, &StateSnapshot)> + '_ {
        self.events.iter().filter_map(|event| match event {
            Event::Draw { op, state } => Some((op, state)),
            Event::State { .. } => None,
        })
    }

    /// Clears all recorded events and ops and resets the state.
    pub fn clear(&mut self) {
        self.events.clear();
        self.ops.clear();
        self.layer_stack.clear();
        self.state = StateSnapshot::default();
    }

    fn sync_layer_top(&mut self) {
        let (clip, transform) = match self.layer_stack.last() {
            Some((layer, transform)) => (layer.clip.clone(), Some(*transform)),
            None => (None, None),
        };
        self.state.clip = clip;
        self.state.clip_transform = transform;
        self.state.layer_stack_depth = u32::try_from(self.layer_stack.len()).unwrap_or(u32::MAX);
    }
}

impl PaintSink for Recorder {
    fn state(&mut self, op: StateOp) {
        match &op {
            StateOp::SetTransform(transform) => self.state.transform = *transform,
            StateOp::PushLayer(layer) => {
                self.layer_stack.push((layer.clone(), self.state.transform));
                self.sync_layer_top();
            }
            StateOp::PopLayer => {
                if self.layer_stack.pop().is_none() {
                    log::warn!("Recorder: PopLayer without a matching PushLayer");
                }
                self.sync_layer_top();
            }
        }
        self.ops.push(PaintOp::State(op.clone()));
        self.events.push(Event::State {
            op,
            state: self.state.clone(),
        });
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(PaintOp::Draw(op.clone()));
        self.events.push(Event::Draw {
            op,
            state: self.state.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Rect, Size};

    use super::Recorder;
    use crate::{ClipShape, ContentId, DrawOp, LayerOp, PaintSink, StateOp};

    #[test]
    fn records_state_at_draw_time() {
        let mut rec = Recorder::new();
        let clip = ClipShape::Rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        rec.state(StateOp::SetTransform(Affine::translate((5.0, 5.0))));
        rec.state(StateOp::PushLayer(LayerOp {
            clip: Some(clip.clone()),
        }));
        rec.state(StateOp::SetTransform(Affine::scale(2.0)));
        rec.draw(DrawOp::DrawContent {
            content: ContentId(1),
            size: Size::new(5.0, 5.0),
        });
        rec.state(StateOp::PopLayer);

        let draws: alloc::vec::Vec<_> = rec.draws().collect();
        assert_eq!(draws.len(), 1);
        let (_, state) = draws[0];
        assert_eq!(state.transform, Affine::scale(2.0));
        assert_eq!(state.layer_stack_depth, 1);
        assert_eq!(state.clip, Some(clip));
        assert_eq!(state.clip_transform, Some(Affine::translate((5.0, 5.0))));

        assert_eq!(rec.current_state().layer_stack_depth, 0);
        assert_eq!(rec.current_state().clip, None);
        assert_eq!(rec.ops().len(), 5);
        assert_eq!(rec.events().len(), 5);
    }

    #[test]
    fn clear_resets_everything() {
        let mut rec = Recorder::new();
        rec.state(StateOp::PushLayer(LayerOp { clip: None }));
        rec.clear();
        assert!(rec.events().is_empty());
        assert!(rec.ops().is_empty());
        assert_eq!(rec.current_state().layer_stack_depth, 0);
        // Unbalanced pops are tolerated.
        rec.state(StateOp::PopLayer);
        assert_eq!(rec.current_state().layer_stack_depth, 0);
    }
}
