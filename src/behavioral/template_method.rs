// Template Method: a fixed activity lifecycle with overridable steps.

use std::fmt;
use std::io::{self, Write};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStep {
    Create,
    Start,
    Resume,
    Pause,
    Stop,
    Destroy,
}

impl LifecycleStep {
    /// Invocation order used by [`BaseActivity::perform_activity`].
    pub const ORDER: [LifecycleStep; 6] = [
        LifecycleStep::Create,
        LifecycleStep::Start,
        LifecycleStep::Resume,
        LifecycleStep::Pause,
        LifecycleStep::Stop,
        LifecycleStep::Destroy,
    ];
}

impl fmt::Display for LifecycleStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecycleStep::Create => "onCreate",
            LifecycleStep::Start => "onStart",
            LifecycleStep::Resume => "onResume",
            LifecycleStep::Pause => "onPause",
            LifecycleStep::Stop => "onStop",
            LifecycleStep::Destroy => "onDestroy",
        };
        f.write_str(name)
    }
}

/// The base behavior of every step. Overrides call this to keep it.
pub fn base_step(step: LifecycleStep, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "BaseActivity: {step}")
}

pub trait BaseActivity {
    /// The template method. Not meant to be overridden.
    fn perform_activity(&self, out: &mut dyn Write) -> io::Result<()> {
        self.on_create(out)?;
        self.on_start(out)?;
        self.on_resume(out)?;
        self.on_pause(out)?;
        self.on_stop(out)?;
        self.on_destroy(out)
    }

    fn on_create(&self, out: &mut dyn Write) -> io::Result<()> {
        base_step(LifecycleStep::Create, out)
    }

    fn on_start(&self, out: &mut dyn Write) -> io::Result<()> {
        base_step(LifecycleStep::Start, out)
    }

    fn on_resume(&self, out: &mut dyn Write) -> io::Result<()> {
        base_step(LifecycleStep::Resume, out)
    }

    fn on_pause(&self, out: &mut dyn Write) -> io::Result<()> {
        base_step(LifecycleStep::Pause, out)
    }

    fn on_stop(&self, out: &mut dyn Write) -> io::Result<()> {
        base_step(LifecycleStep::Stop, out)
    }

    fn on_destroy(&self, out: &mut dyn Write) -> io::Result<()> {
        base_step(LifecycleStep::Destroy, out)
    }
}

pub struct MainActivity;

impl BaseActivity for MainActivity {
    fn on_create(&self, out: &mut dyn Write) -> io::Result<()> {
        base_step(LifecycleStep::Create, out)?;
        writeln!(out, "MainActivity: Custom onCreate")
    }
}

pub struct SecondActivity;

impl BaseActivity for SecondActivity {
    fn on_resume(&self, out: &mut dyn Write) -> io::Result<()> {
        base_step(LifecycleStep::Resume, out)?;
        writeln!(out, "SecondActivity: Custom onResume")
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    MainActivity.perform_activity(out)?;

    writeln!(out, "\n")?;

    SecondActivity.perform_activity(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PlainActivity;
    impl BaseActivity for PlainActivity {}

    fn lines_of(activity: &dyn BaseActivity) -> Vec<String> {
        let mut out = Vec::new();
        activity.perform_activity(&mut out).unwrap();
        String::from_utf8(out).unwrap().lines().map(str::to_string).collect()
    }

    #[test]
    fn test_default_steps_run_in_order() {
        let expected: Vec<String> = LifecycleStep::ORDER
            .iter()
            .map(|step| format!("BaseActivity: {step}"))
            .collect();
        assert_eq!(lines_of(&PlainActivity), expected);
    }

    #[test]
    fn test_override_extends_base_step() {
        let lines = lines_of(&MainActivity);
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "BaseActivity: onCreate");
        assert_eq!(lines[1], "MainActivity: Custom onCreate");
        assert_eq!(lines[2], "BaseActivity: onStart");
    }

    #[test]
    fn test_second_activity_customises_resume() {
        let lines = lines_of(&SecondActivity);
        let resume = lines.iter().position(|l| l == "BaseActivity: onResume").unwrap();
        assert_eq!(lines[resume + 1], "SecondActivity: Custom onResume");
        assert_eq!(lines.last().map(String::as_str), Some("BaseActivity: onDestroy"));
    }

    #[test]
    fn test_run_separates_activities_with_blank_lines() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("BaseActivity: onDestroy\n\n\nBaseActivity: onCreate\n"));
        assert_eq!(text.lines().count(), 7 + 2 + 7);
    }
}
