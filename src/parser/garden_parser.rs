// Comma-separated garden input parsing
use crate::model::InputError;

pub trait Parser {
    fn parse(&self, text: &str) -> Result<Vec<i32>, InputError>;
}

pub struct GardenParser {
    max_flowers: usize,
}

impl GardenParser {
    pub const DEFAULT_MAX_FLOWERS: usize = 10_000;

    pub fn new(max_flowers: usize) -> Self {
        Self { max_flowers }
    }
}

impl Default for GardenParser {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_FLOWERS)
    }
}

impl Parser for GardenParser {
    /// Whitespace is ignored and empty tokens are skipped, so `"1, 2,,3,"` is `[1, 2, 3]`.
    /// `position` in errors is 1-based over the non-empty tokens.
    fn parse(&self, text: &str) -> Result<Vec<i32>, InputError> {
        let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();

        let mut flowers = Vec::new();
        for (i, token) in cleaned.split(',').filter(|t| !t.is_empty()).enumerate() {
            let beauty = token.parse::<i32>().map_err(|_| InputError::InvalidToken {
                token: token.to_string(),
                position: i + 1,
            })?;
            flowers.push(beauty);
        }

        if flowers.is_empty() {
            return Err(InputError::Empty);
        }
        if flowers.len() > self.max_flowers {
            return Err(InputError::TooManyFlowers {
                count: flowers.len(),
                limit: self.max_flowers,
            });
        }
        Ok(flowers)
    }
}

/// Formats flowers back into the input form, `1, 2, 3`.
pub fn format_flowers(flowers: &[i32]) -> String {
    flowers
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
