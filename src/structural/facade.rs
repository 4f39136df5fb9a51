// Facade: one call drives the camera, GPS and sensor subsystems.

use std::io::{self, Write};

use crate::error::Result;

mod subsystems {
    use std::io::{self, Write};

    pub struct Camera;

    impl Camera {
        pub fn turn_on(&self, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "Camera: Turning on")
        }

        pub fn take_picture(&self, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "Camera: Taking a picture")
        }

        pub fn turn_off(&self, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "Camera: Turning off")
        }
    }

    pub struct Gps;

    impl Gps {
        pub fn enable(&self, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "GPS: Enabling")
        }

        pub fn current_location(&self) -> String {
            "GPS: Current location is (latitude, longitude)".to_string()
        }

        pub fn disable(&self, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "GPS: Disabling")
        }
    }

    pub struct Sensor;

    impl Sensor {
        pub fn start(&self, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "Sensor: Starting")
        }

        pub fn measure(&self, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "Sensor: Measuring")
        }

        pub fn stop(&self, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "Sensor: Stopping")
        }
    }
}

pub use subsystems::{Camera, Gps, Sensor};

pub struct MobilePhoneFacade {
    camera: Camera,
    gps: Gps,
    sensor: Sensor,
}

impl MobilePhoneFacade {
    pub fn new(camera: Camera, gps: Gps, sensor: Sensor) -> Self {
        Self { camera, gps, sensor }
    }

    /// Subsystems are released in the reverse of the order they were started.
    pub fn take_picture_with_location(&self, out: &mut dyn Write) -> io::Result<()> {
        self.camera.turn_on(out)?;
        self.gps.enable(out)?;
        self.sensor.start(out)?;

        let location = self.gps.current_location();
        writeln!(out, "Capturing picture with location: {location}")?;

        self.sensor.stop(out)?;
        self.gps.disable(out)?;
        self.camera.turn_off(out)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mobile_phone = MobilePhoneFacade::new(Camera, Gps, Sensor);

    mobile_phone.take_picture_with_location(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subsystems_usable_directly() {
        let mut out = Vec::new();
        Camera.take_picture(&mut out).unwrap();
        Sensor.measure(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Camera: Taking a picture\nSensor: Measuring\n"
        );
    }

    #[test]
    fn test_location_call_leaves_out_snapshot_and_measurement() {
        let phone = MobilePhoneFacade::new(Camera, Gps, Sensor);
        let mut out = Vec::new();
        phone.take_picture_with_location(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("Taking a picture"));
        assert!(!text.contains("Measuring"));
    }

    #[test]
    fn test_run_transcript() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Camera: Turning on\n\
             GPS: Enabling\n\
             Sensor: Starting\n\
             Capturing picture with location: GPS: Current location is (latitude, longitude)\n\
             Sensor: Stopping\n\
             GPS: Disabling\n\
             Camera: Turning off\n"
        );
    }
}
