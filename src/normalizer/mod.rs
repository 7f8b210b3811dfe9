//! Нормализация SQL текста для sqlnorm

pub mod normalizer;

#[cfg(test)]
mod tests;

pub use normalizer::{
    is_backtick_eligible, is_space_able, normalize, normalize_to_string, NormalizeOutput,
};
