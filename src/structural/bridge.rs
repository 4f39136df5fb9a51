// Bridge: shapes (abstraction) draw through colors (implementor).

use std::io::Write;

use crate::error::Result;

/// Implementor.
pub trait Color {
    fn fill_color(&self) -> String;
}

pub struct RedColor;

impl Color for RedColor {
    fn fill_color(&self) -> String {
        "Red Color".to_string()
    }
}

pub struct BlueColor;

impl Color for BlueColor {
    fn fill_color(&self) -> String {
        "Blue Color".to_string()
    }
}

/// Abstraction.
pub trait Shape {
    fn draw(&self) -> String;
}

pub struct Circle {
    color: Box<dyn Color>,
}

impl Circle {
    pub fn new(color: Box<dyn Color>) -> Self {
        Self { color }
    }
}

impl Shape for Circle {
    fn draw(&self) -> String {
        format!("Drawing Circle with {}", self.color.fill_color())
    }
}

pub struct Square {
    color: Box<dyn Color>,
}

impl Square {
    pub fn new(color: Box<dyn Color>) -> Self {
        Self { color }
    }
}

impl Shape for Square {
    fn draw(&self) -> String {
        format!("Drawing Square with {}", self.color.fill_color())
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let red_circle: Box<dyn Shape> = Box::new(Circle::new(Box::new(RedColor)));
    let blue_square: Box<dyn Shape> = Box::new(Square::new(Box::new(BlueColor)));

    writeln!(out, "{}", red_circle.draw())?;
    writeln!(out, "{}", blue_square.draw())?;
    Ok(())
}
