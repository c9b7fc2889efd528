// src/generators/password.rs
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use super::charset;
use crate::models::GenerationOptions;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 128;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Select at least one character type")]
    InvalidConfig,
}

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    /// Generate a random password satisfying the selected character classes.
    ///
    /// Length is clamped to [MIN_LENGTH, MAX_LENGTH]. The result contains at
    /// least one character from every selected class, provided the clamped
    /// length leaves room for them. All draws and the final shuffle come from
    /// the OS CSPRNG.
    pub fn generate(&self, options: &GenerationOptions) -> Result<String, GeneratorError> {
        let selected = selected_classes(options);
        if selected.is_empty() {
            return Err(GeneratorError::InvalidConfig);
        }

        let length = options.length.clamp(MIN_LENGTH, MAX_LENGTH);

        let mut pool: Vec<u8> = Vec::new();
        let mut chars: Vec<u8> = Vec::with_capacity(length);
        for class in &selected {
            pool.extend_from_slice(class);
            // One mandatory character per selected class.
            chars.push(draw(class));
        }

        if chars.len() >= length {
            // More selected classes than room: keep the first picks and drop
            // the rest, losing coverage of the dropped classes.
            chars.truncate(length);
        } else {
            let remaining = length - chars.len();
            chars.extend((0..remaining).map(|_| draw(&pool)));
        }

        chars.shuffle(&mut OsRng);

        Ok(chars.into_iter().map(char::from).collect())
    }
}

fn draw(set: &[u8]) -> u8 {
    set[OsRng.gen_range(0..set.len())]
}

fn selected_classes(options: &GenerationOptions) -> Vec<&'static [u8]> {
    let mut classes: Vec<&'static [u8]> = Vec::with_capacity(4);
    if options.include_lowercase {
        classes.push(charset::LOWERCASE);
    }
    if options.include_uppercase {
        classes.push(charset::UPPERCASE);
    }
    if options.include_numbers {
        classes.push(charset::DIGITS);
    }
    if options.include_symbols {
        classes.push(charset::SYMBOLS);
    }
    classes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(
        length: usize,
        upper: bool,
        lower: bool,
        numbers: bool,
        symbols: bool,
    ) -> GenerationOptions {
        GenerationOptions {
            length,
            include_uppercase: upper,
            include_lowercase: lower,
            include_numbers: numbers,
            include_symbols: symbols,
        }
    }

    #[test]
    fn test_generated_length_matches_request() {
        let generator = PasswordGenerator::new();
        for length in [8, 16, 64, 128] {
            let password = generator
                .generate(&options(length, true, true, true, true))
                .unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn test_length_is_clamped() {
        let generator = PasswordGenerator::new();
        let short = generator
            .generate(&options(4, true, true, true, true))
            .unwrap();
        assert_eq!(short.len(), MIN_LENGTH);
        let long = generator
            .generate(&options(500, true, true, true, true))
            .unwrap();
        assert_eq!(long.len(), MAX_LENGTH);
    }

    #[test]
    fn test_every_selected_class_is_covered() {
        let generator = PasswordGenerator::new();
        for _ in 0..50 {
            let password = generator
                .generate(&options(8, true, true, true, true))
                .unwrap();
            assert!(password.chars().any(charset::is_lowercase));
            assert!(password.chars().any(charset::is_uppercase));
            assert!(password.chars().any(charset::is_digit));
            assert!(password.chars().any(charset::is_symbol));
        }
    }

    #[test]
    fn test_unselected_classes_never_appear() {
        let generator = PasswordGenerator::new();
        for _ in 0..50 {
            let password = generator
                .generate(&options(12, true, true, true, false))
                .unwrap();
            assert_eq!(password.len(), 12);
            assert!(password.chars().all(|c| !charset::is_symbol(c)));
            assert!(password.chars().any(charset::is_uppercase));
            assert!(password.chars().any(charset::is_lowercase));
            assert!(password.chars().any(charset::is_digit));
        }
    }

    #[test]
    fn test_single_class_uses_only_that_class() {
        let generator = PasswordGenerator::new();
        let password = generator
            .generate(&options(20, false, false, true, false))
            .unwrap();
        assert!(password.chars().all(charset::is_digit));
    }

    #[test]
    fn test_no_class_selected_is_rejected() {
        let generator = PasswordGenerator::new();
        let result = generator.generate(&options(16, false, false, false, false));
        assert_eq!(result, Err(GeneratorError::InvalidConfig));
    }

    #[test]
    fn test_repeated_generation_is_non_deterministic() {
        let generator = PasswordGenerator::new();
        let opts = GenerationOptions::default();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(generator.generate(&opts).unwrap()));
        }
    }
}
