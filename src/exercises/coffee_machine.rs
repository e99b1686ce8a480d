//! A machine whose `start` mutates its state

use super::errors::ExerciseError;
use super::Exercise;
use crate::output::Transcript;

pub trait Machine {
    /// Start the machine, returning the announcement
    fn start(&mut self) -> String;

    fn is_running(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoffeeMachine {
    target_temp_c: u32,
    water_ml: u32,
    running: bool,
}

impl CoffeeMachine {
    pub fn new(target_temp_c: u32, water_ml: u32) -> Self {
        CoffeeMachine {
            target_temp_c,
            water_ml,
            running: false,
        }
    }
}

impl Machine for CoffeeMachine {
    fn start(&mut self) -> String {
        self.running = true;
        format!(
            "Starting coffee machine to heat {}ml of water to {}°C",
            self.water_ml, self.target_temp_c
        )
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

pub struct CoffeeMachineDemo;

impl Exercise for CoffeeMachineDemo {
    fn name(&self) -> &'static str {
        "coffee-machine"
    }

    fn summary(&self) -> &'static str {
        "Start a CoffeeMachine through the Machine trait"
    }

    fn run(&self, _input: &str, out: &mut Transcript) -> Result<(), ExerciseError> {
        let mut m = CoffeeMachine::new(90, 250);
        out.println(m.start());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_sets_running() {
        let mut m = CoffeeMachine::new(92, 300);
        assert!(!m.is_running());
        assert_eq!(
            m.start(),
            "Starting coffee machine to heat 300ml of water to 92°C"
        );
        assert!(m.is_running());
    }
}
