// Flyweight: images are shared by name through a lookup-or-create cache.

use std::io::{self, Write};
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::error::Result;

pub trait Image {
    fn display(&self, x: i32, y: i32, out: &mut dyn Write) -> io::Result<()>;
}

/// Intrinsic state only; the position is supplied per call.
#[derive(Debug)]
pub struct SharedImage {
    name: String,
}

impl SharedImage {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Image for SharedImage {
    fn display(&self, x: i32, y: i32, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Displaying image '{}' at position ({x}, {y})", self.name)
    }
}

#[derive(Debug, Default)]
pub struct ImageFactory {
    shared_images: FxHashMap<String, Rc<SharedImage>>,
    constructed: usize,
}

impl ImageFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same name, same instance. A new name constructs exactly one image.
    pub fn get_image(&mut self, name: &str) -> Rc<SharedImage> {
        if let Some(image) = self.shared_images.get(name) {
            return Rc::clone(image);
        }

        tracing::debug!(name, "flyweight cache miss");
        self.constructed += 1;
        let image = Rc::new(SharedImage { name: name.to_string() });
        self.shared_images.insert(name.to_string(), Rc::clone(&image));
        image
    }

    /// Images constructed so far; equals the number of distinct names requested.
    pub fn constructed(&self) -> usize {
        self.constructed
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut image_factory = ImageFactory::new();

    let image1 = image_factory.get_image("icon.png");
    image1.display(10, 20, out)?;

    let image2 = image_factory.get_image("icon.png");
    image2.display(30, 40, out)?;

    let image3 = image_factory.get_image("background.png");
    image3.display(50, 60, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_same_key_shares_instance() {
        let mut factory = ImageFactory::new();
        let a = factory.get_image("icon.png");
        let b = factory.get_image("icon.png");
        let c = factory.get_image("background.png");

        assert!(Rc::ptr_eq(&a, &b));
        assert!(!Rc::ptr_eq(&a, &c));
        assert_eq!(c.name(), "background.png");
        assert_eq!(factory.constructed(), 2);
    }

    #[test]
    fn test_run_transcript() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Displaying image 'icon.png' at position (10, 20)\n\
             Displaying image 'icon.png' at position (30, 40)\n\
             Displaying image 'background.png' at position (50, 60)\n"
        );
    }

    proptest! {
        #[test]
        fn test_constructions_match_distinct_keys(names in prop::collection::vec("[a-c]{1,2}", 0..30)) {
            let mut factory = ImageFactory::new();
            let mut first_seen: Vec<(String, Rc<SharedImage>)> = Vec::new();

            for name in &names {
                let image = factory.get_image(name);
                match first_seen.iter().find(|(seen, _)| seen == name) {
                    Some((_, original)) => prop_assert!(Rc::ptr_eq(original, &image)),
                    None => first_seen.push((name.clone(), image)),
                }
            }

            let distinct: HashSet<&String> = names.iter().collect();
            prop_assert_eq!(factory.constructed(), distinct.len());
        }
    }
}
