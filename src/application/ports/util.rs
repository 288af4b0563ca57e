// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Lower-cases `input` and collapses every run of non-alphanumeric
    /// characters into a single hyphen, without leading or trailing hyphens.
    fn slugify(&self, input: &str) -> String;
}
