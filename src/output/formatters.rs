//! Formatting utilities for terminal output

/// Letters as spaced, uppercase tiles
///
/// # Examples
/// ```
/// use jumble::output::formatters::letter_tiles;
///
/// assert_eq!(letter_tiles("lowyel"), "L O W Y E L");
/// ```
#[must_use]
pub fn letter_tiles(word: &str) -> String {
    word.chars()
        .flat_map(char::to_uppercase)
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// An undiscovered word: first letter shown, the rest as blanks
#[must_use]
pub fn masked_word(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    std::iter::once(first.to_ascii_uppercase())
        .chain(chars.map(|_| '_'))
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Words laid out in rows of `columns`, each padded to the longest word
#[must_use]
pub fn format_columns(words: &[String], columns: usize) -> Vec<String> {
    let width = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
    words
        .chunks(columns.max(1))
        .map(|row| {
            row.iter()
                .map(|word| format!("{word:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_are_uppercase_and_spaced() {
        assert_eq!(letter_tiles("owl"), "O W L");
        assert_eq!(letter_tiles(""), "");
    }

    #[test]
    fn masked_word_keeps_first_letter() {
        assert_eq!(masked_word("yell"), "Y _ _ _");
        assert_eq!(masked_word("a"), "A");
        assert_eq!(masked_word(""), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn columns_pad_to_longest_word() {
        let words: Vec<String> = ["owl", "yell", "low"].map(String::from).to_vec();
        assert_eq!(format_columns(&words, 2), vec!["owl   yell", "low"]);
    }
}
