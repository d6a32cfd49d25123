//! Text processing and answer scoring

pub mod text_processor;
pub mod lexicon;
pub mod content;
pub mod sentiment;
pub mod relevance;
pub mod clarity;
pub mod professionalism;
pub mod speech;
pub mod facial;
pub mod analyzer;
pub mod feedback;

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::round_to;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(12.345, 1), 12.3);
        assert_eq!(round_to(0.6667, 3), 0.667);
        assert_eq!(round_to(80.0, 1), 80.0);
    }
}
