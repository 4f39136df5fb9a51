// Chain of Responsibility: click handlers that defer to a successor.

use std::io::{self, Write};

use crate::error::Result;

/// A link in the click-handling chain. Returns `true` once some handler has
/// claimed the event.
pub trait ClickHandler {
    fn handle_click(&self, out: &mut dyn Write) -> io::Result<bool>;
}

/// Terminal handler. It reports the click but never claims it.
pub struct ButtonClickHandler;

impl ClickHandler for ButtonClickHandler {
    fn handle_click(&self, out: &mut dyn Write) -> io::Result<bool> {
        writeln!(out, "Button Clicked")?;
        Ok(false)
    }
}

#[derive(Default)]
pub struct DialogClickHandler {
    next_handler: Option<Box<dyn ClickHandler>>,
}

impl DialogClickHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_next_handler(&mut self, handler: Box<dyn ClickHandler>) {
        self.next_handler = Some(handler);
    }
}

impl ClickHandler for DialogClickHandler {
    fn handle_click(&self, out: &mut dyn Write) -> io::Result<bool> {
        writeln!(out, "Dialog Clicked")?;
        forward(self.next_handler.as_deref(), out)
    }
}

#[derive(Default)]
pub struct ActivityClickHandler {
    next_handler: Option<Box<dyn ClickHandler>>,
}

impl ActivityClickHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_next_handler(&mut self, handler: Box<dyn ClickHandler>) {
        self.next_handler = Some(handler);
    }
}

impl ClickHandler for ActivityClickHandler {
    fn handle_click(&self, out: &mut dyn Write) -> io::Result<bool> {
        writeln!(out, "Activity Clicked")?;
        forward(self.next_handler.as_deref(), out)
    }
}

/// Hand the event to the successor; no successor means nobody claimed it.
fn forward(next: Option<&dyn ClickHandler>, out: &mut dyn Write) -> io::Result<bool> {
    match next {
        Some(handler) => handler.handle_click(out),
        None => {
            tracing::trace!("end of chain reached, click unclaimed");
            Ok(false)
        }
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let button_handler = ButtonClickHandler;
    let mut dialog_handler = DialogClickHandler::new();
    let activity_handler = ActivityClickHandler::new();

    dialog_handler.set_next_handler(Box::new(activity_handler));

    // The chain above is wired, but the click starts at the button handler,
    // which has no successor.
    let click_handled = button_handler.handle_click(out)?;

    if !click_handled {
        writeln!(out, "Click event not handled by any handler.")?;
    }
    Ok(())
}
