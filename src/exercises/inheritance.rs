//! Inherited behavior plus a derived-only method
//!
//! The base capability is a trait with a provided method. `Dog` picks it up
//! unchanged and adds `bark_loud`, which only dogs have.

use super::errors::ExerciseError;
use super::Exercise;
use crate::output::Transcript;

pub trait Animal {
    fn make_sound(&self) -> &'static str {
        "Animal sound"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Dog;

impl Animal for Dog {}

impl Dog {
    pub fn bark_loud(&self) -> &'static str {
        "Woof! Woof!"
    }
}

pub struct Inheritance;

impl Exercise for Inheritance {
    fn name(&self) -> &'static str {
        "inheritance"
    }

    fn summary(&self) -> &'static str {
        "Call an inherited method and a derived-only method on a Dog"
    }

    fn run(&self, _input: &str, out: &mut Transcript) -> Result<(), ExerciseError> {
        let my_dog = Dog;
        out.println(my_dog.make_sound());
        out.println(my_dog.bark_loud());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dog_uses_base_sound() {
        let dog = Dog;
        assert_eq!(dog.make_sound(), "Animal sound");
        assert_eq!(dog.bark_loud(), "Woof! Woof!");
    }
}
