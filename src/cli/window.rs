//! Interactive terminal window around a [`ConversionForm`]

use super::ui;
use crate::core::{ConversionForm, Currency};
use anyhow::{Context, Result, bail};
use console::{Key, Term};
use std::io;
use tracing::debug;

// The window never resizes with the terminal
const FIELD_WIDTH: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct FormWindow {
    form: ConversionForm,
    focus: Currency,
    status: Option<String>,
}

impl FormWindow {
    pub fn new(form: ConversionForm) -> Self {
        FormWindow {
            form,
            focus: Currency::Ron,
            status: None,
        }
    }

    pub fn form(&self) -> &ConversionForm {
        &self.form
    }

    pub fn focus(&self) -> Currency {
        self.focus
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Applies one key press to the form.
    pub fn handle_key(&mut self, key: Key) -> Flow {
        match key {
            Key::Escape => return Flow::Quit,
            Key::Enter => {
                self.status = match self.form.convert(self.focus) {
                    Ok(()) => None,
                    Err(e) => {
                        debug!(error = %e, "Conversion aborted");
                        Some(e.to_string())
                    }
                };
            }
            Key::Backspace => {
                self.form.clear();
                self.status = None;
            }
            Key::ArrowDown | Key::Tab => self.move_focus(1),
            Key::ArrowUp | Key::BackTab => self.move_focus(Currency::ALL.len() - 1),
            Key::Char(ch) if is_amount_char(ch) => {
                self.status = self.form.input(self.focus, ch).err().map(|e| e.to_string());
            }
            _ => {}
        }
        Flow::Continue
    }

    fn move_focus(&mut self, step: usize) {
        let next = (self.focus.index() + step) % Currency::ALL.len();
        self.focus = Currency::ALL[next];
    }

    /// Lines of the window, top to bottom.
    pub fn render(&self) -> Vec<String> {
        let mut lines = vec![
            ui::style_text("Currency Converter", ui::StyleType::Title),
            ui::style_text(
                &format!(
                    "BNR rates of {}",
                    self.form.rates().fetched_at().format("%Y-%m-%d %H:%M UTC")
                ),
                ui::StyleType::Subtle,
            ),
            String::new(),
        ];

        for (currency, field) in self.form.fields() {
            let focused = currency == self.focus;
            let marker = if focused { ">" } else { " " };
            let label = if focused {
                ui::style_text(currency.code(), ui::StyleType::Focused)
            } else {
                ui::style_text(currency.code(), ui::StyleType::Label)
            };
            let value = fit(field.text(), FIELD_WIDTH);
            let value = if field.is_locked() {
                ui::style_text(&value, ui::StyleType::Value)
            } else {
                value
            };
            let lock = if field.is_locked() {
                ui::style_text(" locked", ui::StyleType::Subtle)
            } else {
                String::new()
            };
            lines.push(format!("{marker} {label} [{value}]{lock}"));
        }

        lines.push(String::new());
        lines.push(match &self.status {
            Some(msg) => ui::style_text(msg, ui::StyleType::Error),
            None => String::new(),
        });
        lines.push(ui::style_text(
            "Enter convert | Backspace clear | Up/Down move | Esc quit",
            ui::StyleType::Subtle,
        ));
        lines
    }

    /// Runs the key loop until the window is closed.
    pub fn run(mut self, term: &Term) -> Result<()> {
        ensure_terminal(term)?;

        term.hide_cursor()?;
        let result = self.event_loop(term);
        let restored = term.show_cursor().and_then(|()| term.clear_screen());
        keep_loop_error(result, restored)
    }

    fn event_loop(&mut self, term: &Term) -> Result<()> {
        loop {
            term.clear_screen()?;
            for line in self.render() {
                term.write_line(&line)?;
            }
            let key = term.read_key()?;
            if self.handle_key(key) == Flow::Quit {
                debug!("Window closed");
                return Ok(());
            }
        }
    }
}

/// Fails unless `term` is attached to an interactive terminal.
pub fn ensure_terminal(term: &Term) -> Result<()> {
    require_terminal(term.is_term())
}

fn require_terminal(is_term: bool) -> Result<()> {
    if !is_term {
        bail!("The converter window needs an interactive terminal");
    }
    Ok(())
}

fn keep_loop_error(result: Result<()>, restored: io::Result<()>) -> Result<()> {
    match result {
        Err(e) => {
            if let Err(restore_err) = restored {
                debug!(error = %restore_err, "Failed to restore terminal");
            }
            Err(e)
        }
        Ok(()) => restored.context("Failed to restore terminal"),
    }
}

fn is_amount_char(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E')
}

/// Pads or cuts `text` to exactly `width` characters, keeping the tail
/// visible while typing.
fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        text.chars().skip(len - width).collect()
    } else {
        format!("{text:<width$}")
    }
}
