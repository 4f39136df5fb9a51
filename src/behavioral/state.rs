// State: a traffic light whose states pick their successor.

use std::io::{self, Write};

use crate::error::Result;

pub trait TrafficLightState {
    /// Announce this state and return the state that follows it.
    fn handle_request(&self, out: &mut dyn Write) -> io::Result<Box<dyn TrafficLightState>>;

    fn name(&self) -> &'static str;
}

pub struct RedState;

impl TrafficLightState for RedState {
    fn handle_request(&self, out: &mut dyn Write) -> io::Result<Box<dyn TrafficLightState>> {
        writeln!(out, "Red Light")?;
        Ok(Box::new(GreenState))
    }

    fn name(&self) -> &'static str {
        "red"
    }
}

pub struct GreenState;

impl TrafficLightState for GreenState {
    fn handle_request(&self, out: &mut dyn Write) -> io::Result<Box<dyn TrafficLightState>> {
        writeln!(out, "Green Light")?;
        Ok(Box::new(YellowState))
    }

    fn name(&self) -> &'static str {
        "green"
    }
}

pub struct YellowState;

impl TrafficLightState for YellowState {
    fn handle_request(&self, out: &mut dyn Write) -> io::Result<Box<dyn TrafficLightState>> {
        writeln!(out, "Yellow Light")?;
        Ok(Box::new(RedState))
    }

    fn name(&self) -> &'static str {
        "yellow"
    }
}

/// Context. Starts red.
pub struct TrafficLight {
    current_state: Box<dyn TrafficLightState>,
}

impl TrafficLight {
    pub fn new() -> Self {
        Self::with_state(Box::new(RedState))
    }

    pub fn with_state(state: Box<dyn TrafficLightState>) -> Self {
        Self { current_state: state }
    }

    pub fn change_state(&mut self, out: &mut dyn Write) -> io::Result<()> {
        let next = self.current_state.handle_request(out)?;
        tracing::trace!(from = self.current_state.name(), to = next.name(), "traffic light transition");
        self.current_state = next;
        Ok(())
    }

    pub fn current_state(&self) -> &'static str {
        self.current_state.name()
    }
}

impl Default for TrafficLight {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut traffic_light = TrafficLight::new();

    traffic_light.change_state(out)?; // Red
    traffic_light.change_state(out)?; // Green
    traffic_light.change_state(out)?; // Yellow
    traffic_light.change_state(out)?; // Red
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_red() {
        assert_eq!(TrafficLight::new().current_state(), "red");
    }

    #[test]
    fn test_cycle_returns_to_red() {
        let mut light = TrafficLight::new();
        let mut out = Vec::new();
        let mut visited = Vec::new();

        for _ in 0..3 {
            light.change_state(&mut out).unwrap();
            visited.push(light.current_state());
        }

        assert_eq!(visited, vec!["green", "yellow", "red"]);
    }

    #[test]
    fn test_custom_starting_state() {
        let mut light = TrafficLight::with_state(Box::new(YellowState));
        let mut out = Vec::new();
        light.change_state(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Yellow Light\n");
        assert_eq!(light.current_state(), "red");
    }

    #[test]
    fn test_run_transcript() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Red Light\nGreen Light\nYellow Light\nRed Light\n"
        );
    }
}
