//! The read-eval-print loop behind the main menu.

use crate::cli::commands;
use crate::cli::console::Console;
use crate::cli::menu::{MenuChoice, print_menu};
use crate::db::Executor;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

pub struct Dispatcher<'a, R, W> {
    exec: &'a mut dyn Executor,
    console: Console<R, W>,
    state: LoopState,
}

impl<'a, R: BufRead, W: Write> Dispatcher<'a, R, W> {
    pub fn new(exec: &'a mut dyn Executor, console: Console<R, W>) -> Self {
        Self {
            exec,
            console,
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Loop until the operator exits or the input closes.
    pub fn run(&mut self) -> AppResult<()> {
        while self.step()? == LoopState::Running {}
        Ok(())
    }

    /// One iteration: menu, selection, handler.
    pub fn step(&mut self) -> AppResult<LoopState> {
        if self.state == LoopState::Terminated {
            return Ok(self.state);
        }

        print_menu(self.console.out())?;

        let Some(selection) = self.console.read_choice()? else {
            debug!("input closed at selection prompt");
            self.state = LoopState::Terminated;
            return Ok(self.state);
        };

        match MenuChoice::from_selection(selection) {
            Some(MenuChoice::Exit) => self.state = LoopState::Terminated,
            Some(choice) => self.invoke(choice)?,
            None => writeln!(self.console.out(), "Unrecognized choice!")?,
        }

        Ok(self.state)
    }

    fn invoke(&mut self, choice: MenuChoice) -> AppResult<()> {
        debug!(?choice, "dispatch");

        match commands::handle(choice, &mut *self.exec, &mut self.console) {
            Ok(()) => {}
            // rejected forms are dropped without inserting anything
            Err(AppError::InvalidInput { field, reason }) => {
                debug!(field, %reason, "form rejected");
            }
            Err(AppError::InputClosed) => {
                debug!("input closed inside a form");
                self.state = LoopState::Terminated;
            }
            Err(AppError::Io(e)) => return Err(AppError::Io(e)),
            Err(e) => {
                warn!(?choice, error = %e, "handler failed");
                messages::error(&e);
            }
        }

        Ok(())
    }
}
