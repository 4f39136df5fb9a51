// Abstract Factory: each factory produces a related transport and color.

use std::io::{self, Write};

use crate::error::Result;

pub trait Transport {
    fn choose(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub struct Land;

impl Transport for Land {
    fn choose(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Choose the car please")
    }
}

pub struct Water;

impl Transport for Water {
    fn choose(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Choose the ship please")
    }
}

pub struct Air;

impl Transport for Air {
    fn choose(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Choose the plan please")
    }
}

pub trait Color {
    fn select(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub struct BlackColor;

impl Color for BlackColor {
    fn select(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Your transportation is black")
    }
}

pub struct WhiteColor;

impl Color for WhiteColor {
    fn select(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Your transportation is white")
    }
}

pub trait AbstractFactory {
    fn choose_transportation(&self) -> Box<dyn Transport>;
    fn select_transportation_color(&self) -> Box<dyn Color>;
}

pub struct LandTransportFactory;

impl AbstractFactory for LandTransportFactory {
    fn choose_transportation(&self) -> Box<dyn Transport> {
        Box::new(Land)
    }

    fn select_transportation_color(&self) -> Box<dyn Color> {
        Box::new(BlackColor)
    }
}

pub struct WaterTransportFactory;

impl AbstractFactory for WaterTransportFactory {
    fn choose_transportation(&self) -> Box<dyn Transport> {
        Box::new(Water)
    }

    fn select_transportation_color(&self) -> Box<dyn Color> {
        Box::new(WhiteColor)
    }
}

pub struct AirTransportFactory;

impl AbstractFactory for AirTransportFactory {
    fn choose_transportation(&self) -> Box<dyn Transport> {
        Box::new(Air)
    }

    fn select_transportation_color(&self) -> Box<dyn Color> {
        Box::new(WhiteColor)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let land_factory: Box<dyn AbstractFactory> = Box::new(LandTransportFactory);
    let water_factory: Box<dyn AbstractFactory> = Box::new(WaterTransportFactory);
    let air_factory: Box<dyn AbstractFactory> = Box::new(AirTransportFactory);

    let land_trans = land_factory.choose_transportation();
    let water_trans = water_factory.choose_transportation();
    let air_trans = air_factory.choose_transportation();

    // Both colors come from the land factory.
    let black_trans = land_factory.select_transportation_color();
    let white_trans = land_factory.select_transportation_color();

    land_trans.choose(out)?;
    water_trans.choose(out)?;
    air_trans.choose(out)?;

    black_trans.select(out)?;
    white_trans.select(out)?;
    Ok(())
}
