// Decorator: stack bold and color layers over a plain text view.

use std::io::Write;

use crate::error::Result;

pub trait TextView {
    fn draw(&self) -> String;
}

pub struct SimpleTextView;

impl TextView for SimpleTextView {
    fn draw(&self) -> String {
        "Simple Text".to_string()
    }
}

pub struct ColoredTextViewDecorator {
    decorated: Box<dyn TextView>,
    color: String,
}

impl ColoredTextViewDecorator {
    pub fn new(decorated: Box<dyn TextView>, color: impl Into<String>) -> Self {
        Self {
            decorated,
            color: color.into(),
        }
    }
}

impl TextView for ColoredTextViewDecorator {
    fn draw(&self) -> String {
        format!("Colored ({}) {}", self.color, self.decorated.draw())
    }
}

pub struct BoldTextViewDecorator {
    decorated: Box<dyn TextView>,
}

impl BoldTextViewDecorator {
    pub fn new(decorated: Box<dyn TextView>) -> Self {
        Self { decorated }
    }
}

impl TextView for BoldTextViewDecorator {
    fn draw(&self) -> String {
        format!("Bold {}", self.decorated.draw())
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let simple_text_view = SimpleTextView;

    let colored_bold_text_view =
        ColoredTextViewDecorator::new(Box::new(BoldTextViewDecorator::new(Box::new(SimpleTextView))), "#FFFFF");

    writeln!(out, "Simple Text View: {}", simple_text_view.draw())?;
    writeln!(out, "Colored Bold Text View: {}", colored_bold_text_view.draw())?;
    Ok(())
}
