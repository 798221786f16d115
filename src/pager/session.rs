//! # Paging Session
//!
//! The top-level state machine. It prints the first page, then waits on two
//! event sources from one place: keystrokes (through [`read_command`]) and
//! the auto-scroll deadline (through [`Ticker`]). Each keyboard wait is
//! bounded by the time left until the next tick and by the poll interval, so
//! ticks and interrupt requests are noticed promptly without ever cutting
//! into a page or a line that is being printed.
//!
//! ```text
//!   Initial ──print first page──▶ AwaitingCommand ──Quit / interrupt──▶ Terminated
//!                                   │  ▲
//!                     command/tick  └──┘
//! ```

use super::clock::{SharedClock, SystemClock};
use super::command::{read_command, Command};
use super::document::Document;
use super::engine::PaginationEngine;
use super::geometry::ScreenGeometry;
use super::scroll::ScrollDelay;
use super::ticker::Ticker;
use crate::config::PagerConfig;
use crate::io::{EventStream, RenderStream};
use crate::signals::InterruptFlag;
use anyhow::Result;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Initial,
    AwaitingCommand,
    Terminated,
}

/// How a session ended. Both are clean exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionExit {
    Quit,
    Interrupted,
}

pub struct PagerSession<ES: EventStream, RS: RenderStream> {
    engine: PaginationEngine,
    events: ES,
    render: RS,
    ticker: Ticker,
    delay: ScrollDelay,
    clock: SharedClock,
    interrupt: InterruptFlag,
    poll_interval: Duration,
    state: SessionState,
    raw_mode_active: bool,
}

impl<ES: EventStream, RS: RenderStream> PagerSession<ES, RS> {
    /// Create a session over a loaded document.
    ///
    /// The window size is measured once here and fixed for the session.
    pub fn new(document: Document, events: ES, render: RS, config: PagerConfig) -> Result<Self> {
        let geometry = ScreenGeometry::from_terminal_size(render.get_size()?);
        tracing::debug!(
            "Screen is {}x{}, page length {}",
            geometry.cols(),
            geometry.rows(),
            geometry.page_length()
        );

        Ok(Self {
            engine: PaginationEngine::new(document, geometry),
            events,
            render,
            ticker: Ticker::new(),
            delay: ScrollDelay::from_config(&config),
            clock: SystemClock::shared(),
            interrupt: InterruptFlag::new(),
            poll_interval: config.poll_interval.max(Duration::from_millis(1)),
            state: SessionState::Initial,
            raw_mode_active: false,
        })
    }

    /// Use a different time source for tick deadlines
    pub fn with_clock(mut self, clock: SharedClock) -> Self {
        self.clock = clock;
        self
    }

    /// Share an interrupt flag with a signal watcher
    pub fn with_interrupt_flag(mut self, flag: InterruptFlag) -> Self {
        self.interrupt = flag;
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn engine(&self) -> &PaginationEngine {
        &self.engine
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn delay(&self) -> ScrollDelay {
        self.delay
    }

    pub fn is_auto_scrolling(&self) -> bool {
        self.ticker.is_armed()
    }

    pub fn render_stream(&self) -> &RS {
        &self.render
    }

    /// Run the session to completion.
    ///
    /// Raw mode is entered once before the first page and restored exactly
    /// once afterwards, whether the loop ended by Quit, by interrupt or with
    /// an error.
    pub fn run(&mut self) -> Result<SessionExit> {
        self.render.enable_raw_mode()?;
        self.raw_mode_active = true;
        tracing::info!("Session started, {} bytes to page", self.engine.document().len());

        let outcome = self.drive();
        let restored = self.restore_terminal();

        let exit = outcome?;
        restored?;
        tracing::info!("Session ended: {:?}", exit);
        Ok(exit)
    }

    /// Print the first page and enter the command loop
    pub fn start(&mut self) -> Result<()> {
        if self.state == SessionState::Initial {
            self.engine.print_page(&mut self.render)?;
            self.state = SessionState::AwaitingCommand;
        }
        Ok(())
    }

    fn drive(&mut self) -> Result<SessionExit> {
        if self.interrupt.is_raised() {
            return self.terminate(SessionExit::Interrupted);
        }
        self.start()?;

        loop {
            if self.interrupt.is_raised() {
                return self.terminate(SessionExit::Interrupted);
            }

            let timeout = self.next_wait();
            if let Some(command) = read_command(&mut self.events, timeout)? {
                if let Some(exit) = self.dispatch(command)? {
                    return Ok(exit);
                }
            }

            self.handle_tick()?;
        }
    }

    /// How long the next keyboard wait may block
    fn next_wait(&self) -> Duration {
        match self.ticker.time_until_due(self.clock.now()) {
            Some(until_tick) => until_tick.min(self.poll_interval),
            None => self.poll_interval,
        }
    }

    /// Apply one command. Returns the exit reason when the command ends the session.
    pub fn dispatch(&mut self, command: Command) -> Result<Option<SessionExit>> {
        tracing::debug!("Dispatching {:?}", command);
        self.engine.erase_prompt(&mut self.render)?;

        match command {
            Command::Quit => return self.terminate(SessionExit::Quit).map(Some),
            Command::NextPage => {
                self.ticker.disarm();
                if self.engine.is_exhausted() {
                    tracing::debug!("Next page requested after end of document, ignoring");
                } else {
                    self.engine.print_page(&mut self.render)?;
                }
            }
            Command::ToggleScroll => {
                if self.ticker.is_armed() {
                    self.ticker.disarm();
                } else {
                    self.ticker.arm(self.delay.as_duration(), self.clock.now());
                }
            }
            Command::Faster => {
                let millis = self.delay.faster();
                tracing::debug!("Scroll delay now {} ms", millis);
                self.ticker.rearm(self.delay.as_duration(), self.clock.now());
            }
            Command::Slower => {
                let millis = self.delay.slower();
                tracing::debug!("Scroll delay now {} ms", millis);
                self.ticker.rearm(self.delay.as_duration(), self.clock.now());
            }
        }

        self.engine.show_prompt(&mut self.render)?;
        Ok(None)
    }

    /// Print one auto-scroll line if a tick is due.
    ///
    /// A tick that finds the document exhausted prints nothing and disarms
    /// the ticker, so the `done!` prompt is left alone.
    pub fn handle_tick(&mut self) -> Result<bool> {
        if !self.ticker.fire_if_due(self.clock.now()) {
            return Ok(false);
        }

        if self.engine.is_exhausted() {
            tracing::debug!("Tick after end of document, stopping auto-scroll");
            self.ticker.disarm();
            self.engine.show_prompt(&mut self.render)?;
            return Ok(false);
        }

        Ok(self.engine.print_one_line(&mut self.render)?)
    }

    fn terminate(&mut self, exit: SessionExit) -> Result<SessionExit> {
        self.ticker.disarm();
        self.engine.erase_prompt(&mut self.render)?;
        self.state = SessionState::Terminated;
        Ok(exit)
    }

    fn restore_terminal(&mut self) -> Result<()> {
        if !self.raw_mode_active {
            return Ok(());
        }
        self.raw_mode_active = false;
        self.render.flush()?;
        self.render.disable_raw_mode()
    }
}

impl<ES: EventStream, RS: RenderStream> Drop for PagerSession<ES, RS> {
    fn drop(&mut self) {
        if self.raw_mode_active {
            let _ = self.render.disable_raw_mode();
        }
    }
}
