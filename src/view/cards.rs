//! Stat cards and the terminal summary.

use crate::charts::format_value;
use crate::parser::schema::{CategoryCount, Summary};

const PLACEHOLDER: &str = "-";
const BAR_WIDTH: usize = 30;
const CYAN: &str = "\x1b[36m";
const BLUE: &str = "\x1b[34m";
const GRAY: &str = "\x1b[90m";
const RESET: &str = "\x1b[0m";

/// Display text for the headline cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCards {
    pub total: String,
    pub operations: String,
    pub average_per_operation: String,
    pub period: String,
    pub average_duration_days: String,
}

impl StatCards {
    /// Format a summary; undefined values show as `-`
    pub fn new(summary: &Summary, average_duration_days: Option<f64>) -> Self {
        Self {
            total: summary.total.to_string(),
            operations: summary.unique_categories.to_string(),
            average_per_operation: summary
                .average_per_category
                .map(|avg| format!("{:.2}", avg))
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            period: summary
                .date_range
                .map(|range| {
                    format!(
                        "{} - {}",
                        range.start.format("%d/%m/%Y"),
                        range.end.format("%d/%m/%Y")
                    )
                })
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            average_duration_days: average_duration_days
                .map(|days| format!("{:.1}", days))
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        }
    }

    pub fn rows(&self) -> [(&'static str, &str); 5] {
        [
            ("Total de vídeos", self.total.as_str()),
            ("Operações", self.operations.as_str()),
            ("Média por operação", self.average_per_operation.as_str()),
            ("Período", self.period.as_str()),
            ("Duração média (dias)", self.average_duration_days.as_str()),
        ]
    }
}

/// Boxed stat table plus a bar list of the top operations
pub fn generate_text_summary(
    title: &str,
    cards: &StatCards,
    top: &[CategoryCount],
    max_lines: usize,
) -> String {
    let mut lines = Vec::new();

    lines.push(format!("  📊 {}", title));
    lines.push("  ┏━━━━━━━━━━━━━━━━━━━━━━━━━━━┳━━━━━━━━━━━━━━━━━━━━━━━━━━━┓".to_string());
    for (label, value) in cards.rows() {
        lines.push(format!(
            "  ┃ {:<25} ┃ {}{:>25}{} ┃",
            label, CYAN, value, RESET
        ));
    }
    lines.push("  ┗━━━━━━━━━━━━━━━━━━━━━━━━━━━┻━━━━━━━━━━━━━━━━━━━━━━━━━━━┛".to_string());

    if top.is_empty() {
        return lines.join("\n");
    }

    lines.push(String::new());
    lines.push("  🗂  PRINCIPAIS OPERAÇÕES".to_string());

    let max_count = top.iter().map(|c| c.count).max().unwrap_or(1).max(1);
    for entry in top.iter().take(max_lines) {
        let bar_len = (entry.count * BAR_WIDTH).div_ceil(max_count);
        let name: String = if entry.category.chars().count() > 28 {
            let head: String = entry.category.chars().take(25).collect();
            format!("{}...", head)
        } else {
            entry.category.clone()
        };

        lines.push(format!(
            "  └─ {:<28} {}{:<30}{} {:>6}",
            name,
            BLUE,
            "█".repeat(bar_len),
            RESET,
            format_value(entry.count as f64)
        ));
    }

    if top.len() > max_lines {
        lines.push(String::new());
        lines.push(format!(
            "   {}(Exibindo {} de {} operações){}",
            GRAY,
            max_lines,
            top.len(),
            RESET
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_posting_date;
    use crate::parser::schema::DateRange;

    #[test]
    fn test_cards_with_placeholders() {
        let cards = StatCards::new(&Summary::default(), None);

        assert_eq!(cards.total, "0");
        assert_eq!(cards.operations, "0");
        assert_eq!(cards.average_per_operation, "-");
        assert_eq!(cards.period, "-");
        assert_eq!(cards.average_duration_days, "-");
    }

    #[test]
    fn test_cards_formatting() {
        let summary = Summary {
            total: 3,
            unique_categories: 2,
            average_per_category: Some(1.5),
            date_range: Some(DateRange {
                start: parse_posting_date("2023-12-01").unwrap(),
                end: parse_posting_date("2024-03-05").unwrap(),
            }),
        };

        let cards = StatCards::new(&summary, Some(27.5));

        assert_eq!(cards.average_per_operation, "1.50");
        assert_eq!(cards.period, "01/12/2023 - 05/03/2024");
        assert_eq!(cards.average_duration_days, "27.5");
    }

    #[test]
    fn test_text_summary_lists_operations() {
        let cards = StatCards::new(&Summary::default(), None);
        let top = vec![
            CategoryCount {
                category: "Lava Jato".to_string(),
                count: 4,
            },
            CategoryCount {
                category: "Zelotes".to_string(),
                count: 1,
            },
        ];

        let text = generate_text_summary("Todos eventos", &cards, &top, 1);

        assert!(text.contains("Todos eventos"));
        assert!(text.contains("Lava Jato"));
        assert!(!text.contains("Zelotes"));
        assert!(text.contains("Exibindo 1 de 2 operações"));
    }
}
