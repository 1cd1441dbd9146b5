//! Interactive prompts
//!
//! Commands ask questions through [`Prompter`] so the question sequence can
//! be driven by scripted answers in tests. [`InquirePrompter`] is the
//! terminal implementation.

use inquire::validator::Validation;
use inquire::{Confirm, CustomUserError, Select, Text};

use crate::error::Result;

/// Checks a text answer; `Err` carries the message shown to the user
pub type Validator = fn(&str) -> std::result::Result<(), String>;

pub trait Prompter {
    /// Free text. An empty answer becomes `default` when one is given.
    fn text(
        &mut self,
        message: &str,
        default: Option<&str>,
        validator: Option<Validator>,
    ) -> Result<String>;

    /// One of `options`; returns its index
    fn select(&mut self, message: &str, options: &[&str], default: usize) -> Result<usize>;

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;
}

/// Prompts on the terminal with `inquire`
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn text(
        &mut self,
        message: &str,
        default: Option<&str>,
        validator: Option<Validator>,
    ) -> Result<String> {
        let mut prompt = Text::new(message);
        if let Some(default) = default {
            prompt = prompt.with_default(default);
        }
        if let Some(validator) = validator {
            prompt = prompt.with_validator(move |input: &str| to_validation(validator, input));
        }
        Ok(prompt.prompt()?)
    }

    fn select(&mut self, message: &str, options: &[&str], default: usize) -> Result<usize> {
        let choice = Select::new(message, options.to_vec())
            .with_starting_cursor(default)
            .prompt()?;
        Ok(options.iter().position(|o| *o == choice).unwrap_or(default))
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(message).with_default(default).prompt()?)
    }
}

fn to_validation(
    validator: Validator,
    input: &str,
) -> std::result::Result<Validation, CustomUserError> {
    Ok(match validator(input) {
        Ok(()) => Validation::Valid,
        Err(message) => Validation::Invalid(message.into()),
    })
}
