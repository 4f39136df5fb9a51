//! Registry of every example, used by the `patterns` binary and by the
//! single-pattern entry points.

use std::fmt;
use std::io::{self, Write};
use std::process::ExitCode;
use std::str::FromStr;

use colored::Colorize;
use itertools::Itertools;
use serde::Deserialize;

use crate::error::{PatternError, Result};
use crate::{behavioral, creational, structural};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Behavioral,
    Creational,
    Structural,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Behavioral => "Behavioral",
            Category::Creational => "Creational",
            Category::Structural => "Structural",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    ChainOfResponsibility,
    Command,
    Iterator,
    Mediator,
    Memento,
    Observer,
    State,
    Strategy,
    TemplateMethod,
    Visitor,
    Builder,
    AbstractFactory,
    FactoryMethod,
    Prototype,
    Singleton,
    Adapter,
    Bridge,
    Composite,
    Decorator,
    Facade,
    Flyweight,
    Proxy,
}

impl Pattern {
    /// Catalogue order: grouped by category.
    pub const ALL: [Pattern; 22] = [
        Pattern::ChainOfResponsibility,
        Pattern::Command,
        Pattern::Iterator,
        Pattern::Mediator,
        Pattern::Memento,
        Pattern::Observer,
        Pattern::State,
        Pattern::Strategy,
        Pattern::TemplateMethod,
        Pattern::Visitor,
        Pattern::Builder,
        Pattern::AbstractFactory,
        Pattern::FactoryMethod,
        Pattern::Prototype,
        Pattern::Singleton,
        Pattern::Adapter,
        Pattern::Bridge,
        Pattern::Composite,
        Pattern::Decorator,
        Pattern::Facade,
        Pattern::Flyweight,
        Pattern::Proxy,
    ];

    /// Kebab-case name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Pattern::ChainOfResponsibility => "chain-of-responsibility",
            Pattern::Command => "command",
            Pattern::Iterator => "iterator",
            Pattern::Mediator => "mediator",
            Pattern::Memento => "memento",
            Pattern::Observer => "observer",
            Pattern::State => "state",
            Pattern::Strategy => "strategy",
            Pattern::TemplateMethod => "template-method",
            Pattern::Visitor => "visitor",
            Pattern::Builder => "builder",
            Pattern::AbstractFactory => "abstract-factory",
            Pattern::FactoryMethod => "factory-method",
            Pattern::Prototype => "prototype",
            Pattern::Singleton => "singleton",
            Pattern::Adapter => "adapter",
            Pattern::Bridge => "bridge",
            Pattern::Composite => "composite",
            Pattern::Decorator => "decorator",
            Pattern::Facade => "facade",
            Pattern::Flyweight => "flyweight",
            Pattern::Proxy => "proxy",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Pattern::ChainOfResponsibility => "Chain of Responsibility",
            Pattern::Command => "Command",
            Pattern::Iterator => "Iterator",
            Pattern::Mediator => "Mediator",
            Pattern::Memento => "Memento",
            Pattern::Observer => "Observer",
            Pattern::State => "State",
            Pattern::Strategy => "Strategy",
            Pattern::TemplateMethod => "Template Method",
            Pattern::Visitor => "Visitor",
            Pattern::Builder => "Builder",
            Pattern::AbstractFactory => "Abstract Factory",
            Pattern::FactoryMethod => "Factory Method",
            Pattern::Prototype => "Prototype",
            Pattern::Singleton => "Singleton",
            Pattern::Adapter => "Adapter",
            Pattern::Bridge => "Bridge",
            Pattern::Composite => "Composite",
            Pattern::Decorator => "Decorator",
            Pattern::Facade => "Facade",
            Pattern::Flyweight => "Flyweight",
            Pattern::Proxy => "Proxy",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Pattern::ChainOfResponsibility
            | Pattern::Command
            | Pattern::Iterator
            | Pattern::Mediator
            | Pattern::Memento
            | Pattern::Observer
            | Pattern::State
            | Pattern::Strategy
            | Pattern::TemplateMethod
            | Pattern::Visitor => Category::Behavioral,
            Pattern::Builder
            | Pattern::AbstractFactory
            | Pattern::FactoryMethod
            | Pattern::Prototype
            | Pattern::Singleton => Category::Creational,
            Pattern::Adapter
            | Pattern::Bridge
            | Pattern::Composite
            | Pattern::Decorator
            | Pattern::Facade
            | Pattern::Flyweight
            | Pattern::Proxy => Category::Structural,
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Pattern::ChainOfResponsibility => "click handlers that defer to a successor",
            Pattern::Command => "a remote control invoking light commands",
            Pattern::Iterator => "an explicit cursor over a library of books",
            Pattern::Mediator => "a button updates a text view through a mediator",
            Pattern::Memento => "text editor snapshots kept by a history",
            Pattern::Observer => "a subject pushes values to registered observers",
            Pattern::State => "a traffic light whose states pick their successor",
            Pattern::Strategy => "swappable payment methods",
            Pattern::TemplateMethod => "a fixed activity lifecycle with overridable steps",
            Pattern::Visitor => "highlighting view elements by double dispatch",
            Pattern::Builder => "a director drives form builders; a fluent person builder",
            Pattern::AbstractFactory => "factories for transport and color families",
            Pattern::FactoryMethod => "factories that each create one kind of biller",
            Pattern::Prototype => "cloning a record with a deep-copied list",
            Pattern::Singleton => "a construct-once holder and a lazy static",
            Pattern::Adapter => "wrapping an incompatible adaptee",
            Pattern::Bridge => "shapes drawn through interchangeable colors",
            Pattern::Composite => "files and directories as one component",
            Pattern::Decorator => "bold and color layers over a text view",
            Pattern::Facade => "one call drives camera, GPS and sensor",
            Pattern::Flyweight => "images shared by name through a cache",
            Pattern::Proxy => "access-control and lazy-loading proxies",
        }
    }

    /// Write this example's transcript to `out`.
    pub fn run(self, out: &mut dyn Write) -> Result<()> {
        tracing::debug!(pattern = self.name(), "running example");
        match self {
            Pattern::ChainOfResponsibility => behavioral::chain_of_responsibility::run(out),
            Pattern::Command => behavioral::command::run(out),
            Pattern::Iterator => behavioral::iterator::run(out),
            Pattern::Mediator => behavioral::mediator::run(out),
            Pattern::Memento => behavioral::memento::run(out),
            Pattern::Observer => behavioral::observer::run(out),
            Pattern::State => behavioral::state::run(out),
            Pattern::Strategy => behavioral::strategy::run(out),
            Pattern::TemplateMethod => behavioral::template_method::run(out),
            Pattern::Visitor => behavioral::visitor::run(out),
            Pattern::Builder => creational::builder::run(out),
            Pattern::AbstractFactory => creational::abstract_factory::run(out),
            Pattern::FactoryMethod => creational::factory_method::run(out),
            Pattern::Prototype => creational::prototype::run(out),
            Pattern::Singleton => creational::singleton::run(out),
            Pattern::Adapter => structural::adapter::run(out),
            Pattern::Bridge => structural::bridge::run(out),
            Pattern::Composite => structural::composite::run(out),
            Pattern::Decorator => structural::decorator::run(out),
            Pattern::Facade => structural::facade::run(out),
            Pattern::Flyweight => structural::flyweight::run(out),
            Pattern::Proxy => structural::proxy::run(out),
        }
    }

    /// The known name closest to `input`, if any is reasonably close.
    fn closest_name(input: &str) -> Option<&'static str> {
        Pattern::ALL
            .iter()
            .map(|pattern| (pattern.name(), edit_distance(input, pattern.name())))
            .filter(|(_, distance)| *distance <= 3)
            .min_by_key(|(_, distance)| *distance)
            .map(|(name, _)| name)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    /// Case-insensitive; spaces and underscores count as dashes.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Pattern::ALL
            .iter()
            .copied()
            .find(|pattern| pattern.name() == normalized)
            .ok_or_else(|| PatternError::unknown_pattern(s, Pattern::closest_name(&normalized)))
    }
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut current = vec![i + 1; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != *cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        previous = current;
    }
    previous[b.len()]
}

/// Heading printed before an example when running several of them.
pub fn heading(pattern: Pattern) -> String {
    format!("=== {} ({}) ===", pattern.title(), pattern.category())
        .bold()
        .cyan()
        .to_string()
}

/// Run `patterns` in order, each optionally preceded by its heading and
/// followed by a blank line.
pub fn run_selection(patterns: &[Pattern], headings: bool, out: &mut dyn Write) -> Result<()> {
    for pattern in patterns {
        if headings {
            writeln!(out, "{}", heading(*pattern))?;
        }
        pattern.run(out)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Write the catalogue grouped by category, optionally restricted to one.
pub fn write_listing(category: Option<Category>, out: &mut dyn Write) -> io::Result<()> {
    let groups = Pattern::ALL
        .iter()
        .filter(|pattern| category.map_or(true, |c| pattern.category() == c))
        .chunk_by(|pattern| pattern.category());

    for (group, patterns) in &groups {
        writeln!(out, "{}", group.to_string().bold())?;
        for pattern in patterns {
            writeln!(out, "  {:<24} {}", pattern.name(), pattern.summary())?;
        }
    }
    Ok(())
}

/// Entry point shared by the single-pattern binaries.
pub fn run_standalone(pattern: Pattern) -> ExitCode {
    crate::logging::init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match pattern.run(&mut out).and_then(|()| out.flush().map_err(PatternError::from)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique_and_parse_back() {
        let names: HashSet<&str> = Pattern::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names.len(), Pattern::ALL.len());

        for pattern in Pattern::ALL {
            assert_eq!(pattern.name().parse::<Pattern>().unwrap(), pattern);
        }
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_separators() {
        assert_eq!("Template_Method".parse::<Pattern>().unwrap(), Pattern::TemplateMethod);
        assert_eq!("chain of responsibility".parse::<Pattern>().unwrap(), Pattern::ChainOfResponsibility);
        assert_eq!(" PROXY ".parse::<Pattern>().unwrap(), Pattern::Proxy);
    }

    #[test]
    fn test_typo_gets_suggestion() {
        match "obsrver".parse::<Pattern>() {
            Err(PatternError::UnknownPattern { suggestion, .. }) => {
                assert_eq!(suggestion.as_deref(), Some("observer"));
            }
            other => panic!("expected UnknownPattern, got {other:?}"),
        }
    }

    #[test]
    fn test_nonsense_gets_no_suggestion() {
        match "quantum-entanglement".parse::<Pattern>() {
            Err(PatternError::UnknownPattern { suggestion, .. }) => assert_eq!(suggestion, None),
            other => panic!("expected UnknownPattern, got {other:?}"),
        }
    }

    #[test]
    fn test_category_counts() {
        let count = |c| Pattern::ALL.iter().filter(|p| p.category() == c).count();
        assert_eq!(count(Category::Behavioral), 10);
        assert_eq!(count(Category::Creational), 5);
        assert_eq!(count(Category::Structural), 7);
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("state", "state"), 0);
        assert_eq!(edit_distance("stat", "state"), 1);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_listing_filters_by_category() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_listing(Some(Category::Creational), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Creational\n"));
        assert!(text.contains("singleton"));
        assert!(!text.contains("observer"));
        assert_eq!(text.lines().count(), 1 + 5);
    }

    #[test]
    fn test_run_selection_without_headings() {
        let mut out = Vec::new();
        run_selection(&[Pattern::State, Pattern::Adapter], false, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Red Light\nGreen Light\nYellow Light\nRed Light\n\n\
             Using Adapter: Adapter: Specific request from Adaptee\n\n"
        );
    }

    #[test]
    fn test_every_example_runs() {
        for pattern in Pattern::ALL {
            let mut out = Vec::new();
            pattern.run(&mut out).unwrap();
            assert!(!out.is_empty(), "{pattern} produced no output");
        }
    }
}
