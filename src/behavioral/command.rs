// Command: a remote control invoking light commands.

use std::cell::Cell;
use std::io::{self, Write};
use std::rc::Rc;

use crate::error::Result;

pub trait Command {
    fn execute(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Receiver.
#[derive(Default)]
pub struct Light {
    on: Cell<bool>,
}

impl Light {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turn_on(&self, out: &mut dyn Write) -> io::Result<()> {
        self.on.set(true);
        writeln!(out, "Light is ON")
    }

    pub fn turn_off(&self, out: &mut dyn Write) -> io::Result<()> {
        self.on.set(false);
        writeln!(out, "Light is OFF")
    }

    pub fn is_on(&self) -> bool {
        self.on.get()
    }
}

pub struct LightOnCommand {
    light: Rc<Light>,
}

impl LightOnCommand {
    pub fn new(light: Rc<Light>) -> Self {
        Self { light }
    }
}

impl Command for LightOnCommand {
    fn execute(&self, out: &mut dyn Write) -> io::Result<()> {
        self.light.turn_on(out)
    }
}

pub struct LightOffCommand {
    light: Rc<Light>,
}

impl LightOffCommand {
    pub fn new(light: Rc<Light>) -> Self {
        Self { light }
    }
}

impl Command for LightOffCommand {
    fn execute(&self, out: &mut dyn Write) -> io::Result<()> {
        self.light.turn_off(out)
    }
}

/// Invoker. Holds at most one command at a time.
#[derive(Default)]
pub struct RemoteControl {
    command: Option<Rc<dyn Command>>,
}

impl RemoteControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_command(&mut self, command: Rc<dyn Command>) {
        self.command = Some(command);
    }

    /// Does nothing until a command has been set.
    pub fn press_button(&self, out: &mut dyn Write) -> io::Result<()> {
        match &self.command {
            Some(command) => command.execute(out),
            None => {
                tracing::debug!("button pressed with no command set");
                Ok(())
            }
        }
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let light = Rc::new(Light::new());

    let light_on_command: Rc<dyn Command> = Rc::new(LightOnCommand::new(Rc::clone(&light)));
    let light_off_command: Rc<dyn Command> = Rc::new(LightOffCommand::new(Rc::clone(&light)));

    let mut remote_control = RemoteControl::new();

    remote_control.set_command(light_on_command);
    remote_control.press_button(out)?;

    remote_control.set_command(light_off_command);
    remote_control.press_button(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_drive_the_receiver() {
        let light = Rc::new(Light::new());
        let mut remote = RemoteControl::new();
        let mut out = Vec::new();

        remote.set_command(Rc::new(LightOnCommand::new(light.clone())));
        remote.press_button(&mut out).unwrap();
        assert!(light.is_on());

        remote.set_command(Rc::new(LightOffCommand::new(light.clone())));
        remote.press_button(&mut out).unwrap();
        assert!(!light.is_on());

        assert_eq!(String::from_utf8(out).unwrap(), "Light is ON\nLight is OFF\n");
    }

    #[test]
    fn test_empty_remote_does_nothing() {
        let remote = RemoteControl::new();
        let mut out = Vec::new();
        remote.press_button(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_same_command_can_be_pressed_twice() {
        let light = Rc::new(Light::new());
        let mut remote = RemoteControl::new();
        remote.set_command(Rc::new(LightOnCommand::new(light.clone())));

        let mut out = Vec::new();
        remote.press_button(&mut out).unwrap();
        remote.press_button(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Light is ON\nLight is ON\n");
    }

    #[test]
    fn test_run_transcript() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Light is ON\nLight is OFF\n");
    }
}
