//! A vehicle started through a trait object

use super::errors::ExerciseError;
use super::Exercise;
use crate::output::Transcript;

pub trait Vehicle {
    /// Start the vehicle, returning the announcement
    fn start(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    engine_id: String,
}

impl Car {
    pub fn new(engine_id: impl Into<String>) -> Self {
        Car {
            engine_id: engine_id.into(),
        }
    }
}

impl Vehicle for Car {
    fn start(&self) -> String {
        format!("Car {} starts!", self.engine_id)
    }
}

pub struct VehicleDemo;

impl Exercise for VehicleDemo {
    fn name(&self) -> &'static str {
        "vehicle"
    }

    fn summary(&self) -> &'static str {
        "Start a Car held as Box<dyn Vehicle>"
    }

    fn run(&self, _input: &str, out: &mut Transcript) -> Result<(), ExerciseError> {
        let v: Box<dyn Vehicle> = Box::new(Car::new("ENG-001"));
        out.println(v.start());
        Ok(())
    }
}
