//! Category histogram widget for the analysis result

use crate::analysis::CategoryStat;
use crate::output::text_bar;
use crate::tui::theme::Styles;
use crate::utils::pad_right_to_width;
use ratatui::text::{Line, Span};

/// Width reserved for the category name column
const NAME_WIDTH: usize = 18;

/// Build one histogram line per category: name, proportional bar at the
/// producer-supplied percentage, then the file count.
pub fn category_lines(categories: &[CategoryStat], total_width: usize) -> Vec<Line<'static>> {
    let bar_width = total_width
        .saturating_sub(NAME_WIDTH + 20)
        .clamp(10, 40);

    categories
        .iter()
        .map(|cat| {
            Line::from(vec![
                Span::styled(
                    format!("  {}", pad_right_to_width(&cat.name, NAME_WIDTH)),
                    Styles::primary(),
                ),
                Span::styled(text_bar(cat.percentage, bar_width), Styles::emphasis()),
                Span::styled(
                    format!("  {} files ({:.0}%)", cat.count, cat.percentage),
                    Styles::secondary(),
                ),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(name: &str, count: u64, percentage: f64) -> CategoryStat {
        CategoryStat {
            name: name.to_string(),
            count,
            percentage,
        }
    }

    #[test]
    fn test_one_line_per_category() {
        let lines = category_lines(&[stat("PDFs", 10, 50.0), stat("Images", 3, 15.0)], 80);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_line_contents() {
        let lines = category_lines(&[stat("PDFs", 10, 50.0)], 80);
        let text: String = lines[0]
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.contains("PDFs"));
        assert!(text.contains("10 files"));
        assert!(text.contains("(50%)"));
        // Half the bar filled at 50%
        let filled = text.matches('█').count();
        let empty = text.matches('░').count();
        assert_eq!(filled, empty);
    }
}
