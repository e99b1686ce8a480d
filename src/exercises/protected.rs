//! A base capability that only the derived type may use
//!
//! `Smartphone` wraps a `Phone` in a private field instead of exposing it,
//! so `turn_on` is callable from `Smartphone::boot` but not from outside.

use super::errors::ExerciseError;
use super::Exercise;
use crate::output::Transcript;

#[derive(Debug, Default)]
pub struct Phone {
    powered: bool,
}

impl Phone {
    pub fn turn_on(&mut self) -> &'static str {
        self.powered = true;
        "Turning on the phone..."
    }

    pub fn is_powered(&self) -> bool {
        self.powered
    }
}

#[derive(Debug, Default)]
pub struct Smartphone {
    phone: Phone,
}

impl Smartphone {
    pub fn new() -> Self {
        Smartphone {
            phone: Phone::default(),
        }
    }

    /// Power the underlying phone, then boot. Returns the lines printed.
    pub fn boot(&mut self) -> [&'static str; 2] {
        let power = self.phone.turn_on();
        [power, "Smartphone is booting up!"]
    }

    pub fn is_booted(&self) -> bool {
        self.phone.is_powered()
    }
}

pub struct ProtectedInheritance;

impl Exercise for ProtectedInheritance {
    fn name(&self) -> &'static str {
        "protected-inheritance"
    }

    fn summary(&self) -> &'static str {
        "Boot a Smartphone whose Phone capability is hidden from callers"
    }

    fn run(&self, _input: &str, out: &mut Transcript) -> Result<(), ExerciseError> {
        let mut my_phone = Smartphone::new();
        for line in my_phone.boot() {
            out.println(line);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_powers_inner_phone() {
        let mut phone = Smartphone::new();
        assert!(!phone.is_booted());
        assert_eq!(
            phone.boot(),
            ["Turning on the phone...", "Smartphone is booting up!"]
        );
        assert!(phone.is_booted());
    }
}
