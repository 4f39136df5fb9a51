// Mediator: UI controls talk to each other only through a mediator.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::{Rc, Weak};

use crate::error::Result;

/// Concrete identity of a control, used by the mediator's dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Button,
    TextView,
}

pub trait UiControlMediator {
    fn notify(&self, sender: &dyn UiControl, event: &str, out: &mut dyn Write) -> io::Result<()>;
}

/// Colleague role.
pub trait UiControl {
    fn set_mediator(&mut self, mediator: &Rc<dyn UiControlMediator>);
    fn kind(&self) -> ControlKind;
}

#[derive(Default)]
pub struct UiComponentMediator {
    button: RefCell<Option<Rc<Button>>>,
    text_view: RefCell<Option<Rc<TextView>>>,
}

impl UiComponentMediator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_button(&self, button: Rc<Button>) {
        *self.button.borrow_mut() = Some(button);
    }

    pub fn set_text_view(&self, text_view: Rc<TextView>) {
        *self.text_view.borrow_mut() = Some(text_view);
    }

    pub fn button(&self) -> Option<Rc<Button>> {
        self.button.borrow().clone()
    }
}

impl UiControlMediator for UiComponentMediator {
    fn notify(&self, sender: &dyn UiControl, event: &str, out: &mut dyn Write) -> io::Result<()> {
        tracing::debug!(sender = ?sender.kind(), event, "mediator notified");
        match sender.kind() {
            ControlKind::Button => {
                writeln!(out, "Button clicked, updating TextView")?;
                let text_view = self.text_view.borrow().clone();
                match text_view {
                    Some(text_view) => text_view.display_text("Button clicked!", out)?,
                    None => tracing::warn!("no text view registered with the mediator"),
                }
            }
            // Other controls raise no follow-up calls.
            ControlKind::TextView => {}
        }
        Ok(())
    }
}

pub struct Button {
    mediator: Weak<dyn UiControlMediator>,
}

impl Button {
    pub fn new() -> Self {
        Self {
            mediator: Weak::<UiComponentMediator>::new(),
        }
    }

    pub fn click(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Button clicked, notifying mediator")?;
        match self.mediator.upgrade() {
            Some(mediator) => mediator.notify(self, "click", out),
            None => {
                tracing::warn!("button clicked without a mediator");
                Ok(())
            }
        }
    }
}

impl Default for Button {
    fn default() -> Self {
        Self::new()
    }
}

impl UiControl for Button {
    fn set_mediator(&mut self, mediator: &Rc<dyn UiControlMediator>) {
        self.mediator = Rc::downgrade(mediator);
    }

    fn kind(&self) -> ControlKind {
        ControlKind::Button
    }
}

pub struct TextView {
    mediator: Weak<dyn UiControlMediator>,
    text: RefCell<Option<String>>,
}

impl TextView {
    pub fn new() -> Self {
        Self {
            mediator: Weak::<UiComponentMediator>::new(),
            text: RefCell::new(None),
        }
    }

    pub fn display_text(&self, text: &str, out: &mut dyn Write) -> io::Result<()> {
        *self.text.borrow_mut() = Some(text.to_string());
        writeln!(out, "TextView: {text}")
    }

    /// The text most recently displayed, if any.
    pub fn text(&self) -> Option<String> {
        self.text.borrow().clone()
    }

    pub fn has_mediator(&self) -> bool {
        self.mediator.strong_count() > 0
    }
}

impl Default for TextView {
    fn default() -> Self {
        Self::new()
    }
}

impl UiControl for TextView {
    fn set_mediator(&mut self, mediator: &Rc<dyn UiControlMediator>) {
        self.mediator = Rc::downgrade(mediator);
    }

    fn kind(&self) -> ControlKind {
        ControlKind::TextView
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mediator = Rc::new(UiComponentMediator::new());
    let shared: Rc<dyn UiControlMediator> = mediator.clone();

    let mut button = Button::new();
    let mut text_view = TextView::new();

    button.set_mediator(&shared);
    text_view.set_mediator(&shared);

    let button = Rc::new(button);
    mediator.set_button(Rc::clone(&button));
    mediator.set_text_view(Rc::new(text_view));

    // Simulate a button click
    button.click(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wired() -> (Rc<UiComponentMediator>, Rc<Button>, Rc<TextView>) {
        let mediator = Rc::new(UiComponentMediator::new());
        let shared: Rc<dyn UiControlMediator> = mediator.clone();

        let mut button = Button::new();
        button.set_mediator(&shared);
        let mut text_view = TextView::new();
        text_view.set_mediator(&shared);

        let button = Rc::new(button);
        let text_view = Rc::new(text_view);
        mediator.set_button(button.clone());
        mediator.set_text_view(text_view.clone());
        (mediator, button, text_view)
    }

    #[test]
    fn test_button_click_updates_text_view() {
        let (_mediator, button, text_view) = wired();
        let mut out = Vec::new();

        button.click(&mut out).unwrap();

        assert_eq!(text_view.text().as_deref(), Some("Button clicked!"));
        assert!(text_view.has_mediator());
    }

    #[test]
    fn test_text_view_sender_is_ignored() {
        let (mediator, _button, text_view) = wired();
        let mut out = Vec::new();

        mediator.notify(&*text_view, "click", &mut out).unwrap();

        assert!(out.is_empty());
        assert_eq!(text_view.text(), None);
    }

    #[test]
    fn test_click_without_mediator_only_reports() {
        let button = Button::new();
        let mut out = Vec::new();
        button.click(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Button clicked, notifying mediator\n");
    }

    #[test]
    fn test_mediator_keeps_its_button() {
        let (mediator, button, _text_view) = wired();
        assert!(Rc::ptr_eq(&mediator.button().unwrap(), &button));
    }

    #[test]
    fn test_run_transcript() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Button clicked, notifying mediator\n\
             Button clicked, updating TextView\n\
             TextView: Button clicked!\n"
        );
    }
}
