// Visitor: view elements double-dispatch into a visitor.

use std::io::{self, Write};

use crate::error::Result;

pub trait ViewElement {
    fn accept(&self, visitor: &mut dyn Visitor, out: &mut dyn Write) -> io::Result<()>;
}

/// One operation per concrete element kind.
pub trait Visitor {
    fn visit_button(&mut self, button: &Button, out: &mut dyn Write) -> io::Result<()>;
    fn visit_text_view(&mut self, text_view: &TextView, out: &mut dyn Write) -> io::Result<()>;
}

pub struct Button;

impl ViewElement for Button {
    fn accept(&self, visitor: &mut dyn Visitor, out: &mut dyn Write) -> io::Result<()> {
        visitor.visit_button(self, out)
    }
}

pub struct TextView;

impl ViewElement for TextView {
    fn accept(&self, visitor: &mut dyn Visitor, out: &mut dyn Write) -> io::Result<()> {
        visitor.visit_text_view(self, out)
    }
}

#[derive(Debug, Default)]
pub struct HighlightVisitor {
    highlighted: Vec<&'static str>,
}

impl HighlightVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Element kinds highlighted so far, in visit order.
    pub fn highlighted(&self) -> &[&'static str] {
        &self.highlighted
    }
}

impl Visitor for HighlightVisitor {
    fn visit_button(&mut self, _button: &Button, out: &mut dyn Write) -> io::Result<()> {
        self.highlighted.push("Button");
        writeln!(out, "Highlighting Button")
    }

    fn visit_text_view(&mut self, _text_view: &TextView, out: &mut dyn Write) -> io::Result<()> {
        self.highlighted.push("TextView");
        writeln!(out, "Highlighting TextView")
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let elements: Vec<Box<dyn ViewElement>> = vec![Box::new(Button), Box::new(TextView)];
    let mut highlight_visitor = HighlightVisitor::new();

    for element in &elements {
        element.accept(&mut highlight_visitor, out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts visits without printing anything.
    #[derive(Default)]
    struct CountingVisitor {
        buttons: usize,
        text_views: usize,
    }

    impl Visitor for CountingVisitor {
        fn visit_button(&mut self, _: &Button, _: &mut dyn Write) -> io::Result<()> {
            self.buttons += 1;
            Ok(())
        }

        fn visit_text_view(&mut self, _: &TextView, _: &mut dyn Write) -> io::Result<()> {
            self.text_views += 1;
            Ok(())
        }
    }

    #[test]
    fn test_dispatch_follows_element_kind() {
        let elements: Vec<Box<dyn ViewElement>> =
            vec![Box::new(TextView), Box::new(Button), Box::new(TextView)];
        let mut visitor = CountingVisitor::default();
        let mut out = Vec::new();

        for element in &elements {
            element.accept(&mut visitor, &mut out).unwrap();
        }

        assert_eq!(visitor.buttons, 1);
        assert_eq!(visitor.text_views, 2);
        assert!(out.is_empty());
    }

    #[test]
    fn test_highlight_records_visit_order() {
        let mut visitor = HighlightVisitor::new();
        let mut out = Vec::new();
        TextView.accept(&mut visitor, &mut out).unwrap();
        Button.accept(&mut visitor, &mut out).unwrap();
        assert_eq!(visitor.highlighted(), &["TextView", "Button"]);
    }

    #[test]
    fn test_run_transcript() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Highlighting Button\nHighlighting TextView\n"
        );
    }
}
