//! # Mock I/O Implementations for Testing
//!
//! Provides mock implementations of EventStream and RenderStream traits
//! for testing without terminal dependencies.
//!
//! The event stream replays a script of events and pauses. A pause makes
//! `poll()` report "nothing ready" and, when a [`TestClock`] is attached,
//! advances that clock by the time the caller was willing to wait. This lets
//! auto-scroll timing be tested deterministically and instantly.

use super::{EventStream, RenderStream, TerminalSize};
use crate::pager::clock::TestClock;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// One entry in a scripted input sequence
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptStep {
    /// An event that becomes readable immediately
    Event(Event),
    /// Keyboard silence for the given duration
    Pause(Duration),
}

/// Mock event stream for testing
///
/// Provides pre-programmed events that can be consumed by tests. Once the
/// script runs out the stream reports end-of-input.
pub struct MockEventStream {
    steps: VecDeque<ScriptStep>,
    clock: Option<Arc<TestClock>>,
}

impl MockEventStream {
    /// Create a new mock event stream with pre-programmed events
    pub fn new(events: Vec<Event>) -> Self {
        Self::from_steps(events.into_iter().map(ScriptStep::Event).collect())
    }

    /// Create a mock event stream from a mixed script of events and pauses
    pub fn from_steps(steps: Vec<ScriptStep>) -> Self {
        Self {
            steps: steps.into(),
            clock: None,
        }
    }

    /// Create an empty mock event stream
    pub fn empty() -> Self {
        Self::from_steps(Vec::new())
    }

    /// Advance this clock while pausing
    pub fn with_clock(mut self, clock: Arc<TestClock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Add an event to the stream
    pub fn push_event(&mut self, event: Event) {
        self.steps.push_back(ScriptStep::Event(event));
    }

    /// Add a plain key press to the stream
    pub fn push_key(&mut self, code: KeyCode) {
        self.push_event(key_press(code));
    }

    /// Add a period of keyboard silence to the stream
    pub fn push_pause(&mut self, duration: Duration) {
        self.steps.push_back(ScriptStep::Pause(duration));
    }

    pub fn pending_count(&self) -> usize {
        self.steps.len()
    }
}

/// Build a key press event with no modifiers
pub fn key_press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

impl EventStream for MockEventStream {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        let (waited, pause_over) = match self.steps.front_mut() {
            Some(ScriptStep::Event(_)) => return Ok(true),
            Some(ScriptStep::Pause(remaining)) => {
                let waited = (*remaining).min(timeout);
                *remaining -= waited;
                (waited, remaining.is_zero())
            }
            None => return Ok(false),
        };

        if pause_over {
            self.steps.pop_front();
        }
        if let Some(clock) = &self.clock {
            clock.advance(waited);
        }
        Ok(false)
    }

    fn read(&mut self) -> Result<Event> {
        match self.steps.pop_front() {
            Some(ScriptStep::Event(event)) => Ok(event),
            Some(step @ ScriptStep::Pause(_)) => {
                self.steps.push_front(step);
                Err(anyhow::anyhow!("No events available: input is paused"))
            }
            None => Err(anyhow::anyhow!("No events available")),
        }
    }

    fn is_exhausted(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Default for MockEventStream {
    fn default() -> Self {
        Self::empty()
    }
}

/// Recorded render command for verification
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    GetSize,
    EnableRawMode,
    DisableRawMode,
    Write(Vec<u8>),
    Flush,
}

#[derive(Debug, Default)]
struct MockRenderState {
    commands: Vec<RenderCommand>,
    buffer: Vec<u8>,
    raw_mode: bool,
}

/// Mock render stream for testing
///
/// Records all rendering commands for verification in tests. Clones share
/// the same recording, so a test can keep a handle after giving the stream
/// away to a session.
#[derive(Debug, Clone)]
pub struct MockRenderStream {
    state: Arc<Mutex<MockRenderState>>,
    terminal_size: TerminalSize,
}

impl MockRenderStream {
    /// Create a new mock render stream
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    /// Create a mock render stream with specific terminal size
    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockRenderState::default())),
            terminal_size: size,
        }
    }

    /// Get recorded commands for verification
    pub fn get_commands(&self) -> Vec<RenderCommand> {
        self.lock().commands.clone()
    }

    /// Clear recorded commands and output
    pub fn clear(&self) {
        let mut state = self.lock();
        state.commands.clear();
        state.buffer.clear();
    }

    /// Check if a specific command was recorded
    pub fn has_command(&self, command: &RenderCommand) -> bool {
        self.lock().commands.contains(command)
    }

    /// Count how often a command was recorded
    pub fn count_command(&self, command: &RenderCommand) -> usize {
        self.lock().commands.iter().filter(|c| *c == command).count()
    }

    /// Get everything written so far as a string
    pub fn get_buffer_string(&self) -> String {
        String::from_utf8_lossy(&self.lock().buffer).to_string()
    }

    pub fn is_raw_mode(&self) -> bool {
        self.lock().raw_mode
    }

    fn lock(&self) -> MutexGuard<'_, MockRenderState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, command: RenderCommand) {
        self.lock().commands.push(command);
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut state = self.lock();
        state.buffer.extend_from_slice(buf);
        state.commands.push(RenderCommand::Write(buf.to_vec()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.record(RenderCommand::Flush);
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn get_size(&self) -> Result<TerminalSize> {
        self.record(RenderCommand::GetSize);
        Ok(self.terminal_size)
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        let mut state = self.lock();
        state.commands.push(RenderCommand::EnableRawMode);
        state.raw_mode = true;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        let mut state = self.lock();
        state.commands.push(RenderCommand::DisableRawMode);
        state.raw_mode = false;
        Ok(())
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_event_stream_should_provide_events() {
        let mut stream = MockEventStream::new(vec![
            key_press(KeyCode::Char('a')),
            key_press(KeyCode::Char('b')),
        ]);

        assert!(stream.poll(Duration::from_millis(0)).unwrap());
        match stream.read().unwrap() {
            Event::Key(key) => assert_eq!(key.code, KeyCode::Char('a')),
            other => panic!("Expected key event, got {other:?}"),
        }

        assert!(stream.poll(Duration::from_millis(0)).unwrap());
        stream.read().unwrap();

        assert!(!stream.poll(Duration::from_millis(0)).unwrap());
        assert!(stream.is_exhausted());
    }

    #[test]
    fn pause_advances_clock_by_waited_time() {
        let clock = TestClock::shared();
        let mut stream = MockEventStream::from_steps(vec![
            ScriptStep::Pause(Duration::from_millis(250)),
            ScriptStep::Event(key_press(KeyCode::Char('q'))),
        ])
        .with_clock(clock.clone());

        assert!(!stream.poll(Duration::from_millis(100)).unwrap());
        assert_eq!(clock.elapsed(), Duration::from_millis(100));
        assert!(!stream.poll(Duration::from_millis(100)).unwrap());
        assert!(!stream.poll(Duration::from_millis(100)).unwrap());
        assert_eq!(clock.elapsed(), Duration::from_millis(250));

        assert!(stream.poll(Duration::from_millis(100)).unwrap());
        assert!(!stream.is_exhausted());
    }

    #[test]
    fn read_during_pause_is_an_error() {
        let mut stream = MockEventStream::empty();
        stream.push_pause(Duration::from_millis(10));

        assert!(stream.read().is_err());
        assert_eq!(stream.pending_count(), 1);
    }

    #[test]
    fn mock_render_stream_should_record_commands() {
        let mut stream = MockRenderStream::new();
        let handle = stream.clone();

        stream.enable_raw_mode().unwrap();
        stream.write_all(b"Hello").unwrap();
        stream.flush().unwrap();
        stream.disable_raw_mode().unwrap();

        assert_eq!(
            handle.get_commands(),
            vec![
                RenderCommand::EnableRawMode,
                RenderCommand::Write(b"Hello".to_vec()),
                RenderCommand::Flush,
                RenderCommand::DisableRawMode,
            ]
        );
        assert_eq!(handle.get_buffer_string(), "Hello");
        assert!(!handle.is_raw_mode());
    }

    #[test]
    fn mock_render_stream_reports_size() {
        let stream = MockRenderStream::with_size((120, 40));
        assert_eq!(stream.get_size().unwrap(), (120, 40));
        assert!(stream.has_command(&RenderCommand::GetSize));
    }
}
