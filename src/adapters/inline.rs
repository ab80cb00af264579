use crate::core::RecordSource;
use crate::utils::error::Result;

/// The five reference build records.
pub const SAMPLE_DATA: &str = "\
2343225,2345,us_east,RedTeam,ProjectApple,3445s
1223456,2345,us_west,BlueTeam,ProjectBanana,2211s
3244332,2346,eu_west,YellowTeam3,ProjectCarrot,4322s
1233456,2345,us_west,BlueTeam,ProjectDate,2221s
3244132,2346,eu_west,YellowTeam3,ProjectEgg,4122s";

/// Serves lines from a text block held in memory.
#[derive(Debug, Clone)]
pub struct InlineSource {
    text: String,
}

impl InlineSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn sample() -> Self {
        Self::new(SAMPLE_DATA)
    }
}

impl RecordSource for InlineSource {
    fn lines(&self) -> Result<Vec<String>> {
        Ok(self.text.lines().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_has_five_lines() {
        let lines = InlineSource::sample().lines().unwrap();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "2343225,2345,us_east,RedTeam,ProjectApple,3445s");
        assert_eq!(lines[4], "3244132,2346,eu_west,YellowTeam3,ProjectEgg,4122s");
    }

    #[test]
    fn test_line_breaks() {
        let lines = InlineSource::new("a\r\nb\n\nc\n").lines().unwrap();
        assert_eq!(lines, vec!["a", "b", "", "c"]);
        assert!(InlineSource::new("").lines().unwrap().is_empty());
    }
}
