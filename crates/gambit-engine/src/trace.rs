// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use gambit_model::event::StepEvent;

/// Accumulates step events in occurrence order.
///
/// The recorder is append‑only; replay fidelity depends on events
/// arriving exactly in the order the search makes its decisions. Once
/// a final summary event is recorded no further events may follow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceRecorder {
    events: Vec<StepEvent>,
}

impl TraceRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one event.
    pub fn record(&mut self, event: StepEvent) {
        debug_assert!(
            self.events.last().is_none_or(|last| !last.is_final),
            "called `TraceRecorder::record` after a final event was recorded"
        );

        self.events.push(event);
    }

    /// Returns the recorded events in order.
    #[inline]
    pub fn events(&self) -> &[StepEvent] {
        &self.events
    }

    /// Consumes the recorder, yielding the event sequence.
    #[inline]
    pub fn into_events(self) -> Vec<StepEvent> {
        self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gambit_model::event::StepStatus;
    use gambit_model::position::Position;

    fn trying_event(row: usize, col: usize) -> StepEvent {
        StepEvent::at(
            vec![vec![0, 0], vec![0, 0]],
            Position::new(row, col),
            StepStatus::Trying,
            format!("Trying to place queen at ({row}, {col})"),
        )
    }

    #[test]
    fn test_events_keep_occurrence_order() {
        let mut recorder = TraceRecorder::new();
        recorder.record(trying_event(0, 0));
        recorder.record(trying_event(0, 1));
        recorder.record(trying_event(1, 0));

        let cells: Vec<(i32, i32)> = recorder.events().iter().map(|e| (e.row, e.col)).collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0)]);
    }

    #[test]
    fn test_into_events_preserves_sequence() {
        let mut recorder = TraceRecorder::new();
        recorder.record(trying_event(0, 0));
        recorder.record(StepEvent::summary(
            vec![vec![0, 0], vec![0, 0]],
            StepStatus::Backtrack,
            String::from("No solution possible from this starting position"),
        ));

        let events = recorder.into_events();
        assert_eq!(events.len(), 2);
        assert!(events[1].is_final);
        assert!(!events[0].is_final);
    }

    #[test]
    #[should_panic(expected = "after a final event")]
    #[cfg(debug_assertions)]
    fn test_recording_after_final_event_panics_in_debug() {
        let mut recorder = TraceRecorder::new();
        recorder.record(StepEvent::summary(
            vec![vec![0]],
            StepStatus::Success,
            String::from("Solution found with 1 queens!"),
        ));
        recorder.record(trying_event(0, 0));
    }
}
