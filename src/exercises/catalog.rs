//! Name-indexed registry of exercises

use super::errors::ExerciseError;
use super::Exercise;
use crate::output::Transcript;
use rustc_hash::FxHashMap;

/// Ordered collection of exercises with lookup by name
pub struct Catalog {
    exercises: Vec<Box<dyn Exercise>>,
    index: FxHashMap<&'static str, usize>, // Name -> position in `exercises`
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Catalog {
            exercises: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Catalog with every exercise in this crate, in course order
    pub fn standard() -> Self {
        let mut catalog = Catalog::new();
        catalog.register(Box::new(super::pointer_walk::PointerWalk));
        catalog.register(Box::new(super::string_edit::StringEdit));
        catalog.register(Box::new(super::inheritance::Inheritance));
        catalog.register(Box::new(super::line_analyzer::LineAnalyzer));
        catalog.register(Box::new(super::polymorphism::Polymorphism));
        catalog.register(Box::new(super::protected::ProtectedInheritance));
        catalog.register(Box::new(super::scores::ScoreCompare));
        catalog.register(Box::new(super::matrix::MatrixOps));
        catalog.register(Box::new(super::student::StudentReport));
        catalog.register(Box::new(super::row_stats::RowStats));
        catalog.register(Box::new(super::long_words::LongWords));
        catalog.register(Box::new(super::vehicle::VehicleDemo));
        catalog.register(Box::new(super::coffee_machine::CoffeeMachineDemo));
        catalog
    }

    /// Add an exercise. A later registration under the same name replaces
    /// the earlier one in place.
    pub fn register(&mut self, exercise: Box<dyn Exercise>) {
        let name = exercise.name();
        match self.index.get(name) {
            Some(&pos) => self.exercises[pos] = exercise,
            None => {
                self.index.insert(name, self.exercises.len());
                self.exercises.push(exercise);
            }
        }
    }

    /// Look up an exercise by name
    pub fn get(&self, name: &str) -> Option<&dyn Exercise> {
        self.index.get(name).map(|&pos| self.exercises[pos].as_ref())
    }

    /// Exercise at a list position
    pub fn at(&self, position: usize) -> Option<&dyn Exercise> {
        self.exercises.get(position).map(|e| e.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Exercise> {
        self.exercises.iter().map(|e| e.as_ref())
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Run the named exercise and return its output
    pub fn run(&self, name: &str, input: &str) -> Result<Transcript, ExerciseError> {
        let exercise = self
            .get(name)
            .ok_or_else(|| ExerciseError::UnknownExercise {
                name: name.to_string(),
            })?;
        let mut out = Transcript::new();
        exercise.run(input, &mut out)?;
        Ok(out)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo(&'static str);

    impl Exercise for Echo {
        fn name(&self) -> &'static str {
            "echo"
        }

        fn summary(&self) -> &'static str {
            "Print a fixed line"
        }

        fn run(&self, _input: &str, out: &mut Transcript) -> Result<(), ExerciseError> {
            out.println(self.0);
            Ok(())
        }
    }

    #[test]
    fn test_standard_catalog_names_are_unique() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 13);
        for exercise in catalog.iter() {
            let found = catalog.get(exercise.name()).expect("registered");
            assert_eq!(found.summary(), exercise.summary());
        }
    }

    #[test]
    fn test_register_replaces_in_place() {
        let mut catalog = Catalog::new();
        catalog.register(Box::new(Echo("first")));
        catalog.register(Box::new(Echo("second")));

        assert_eq!(catalog.len(), 1);
        let out = catalog.run("echo", "").unwrap();
        assert_eq!(out.get_output(), vec!["second"]);
    }

    #[test]
    fn test_unknown_exercise() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert!(matches!(
            catalog.run("nope", ""),
            Err(ExerciseError::UnknownExercise { ref name }) if name == "nope"
        ));
    }
}
