use crate::config::{ColorPair, ColorsConfig};
use crate::status::{Status, StatusCode};

/// Reduces the check results to the text and palette of the final line.
/// Severity wins across checks; within one severity the earliest check in
/// invocation order wins. With nothing to report the text is the literal
/// "OK", not any individual check text.
pub fn select_status(checks: &[Status], colors: &ColorsConfig) -> (String, ColorPair) {
    if let Some(critical) = checks.iter().find(|c| c.code == StatusCode::Critical) {
        return (critical.text.clone(), colors.critical);
    }
    if let Some(warning) = checks.iter().find(|c| c.code == StatusCode::Warning) {
        return (warning.text.clone(), colors.warning);
    }
    ("OK".to_string(), colors.ok)
}

/// Builds the tmux status-bar segment. The trailing 255/238 pair is a fixed
/// part of the surrounding bar, independent of the chosen palette.
pub fn format_status_line(colors: ColorPair, text: &str) -> String {
    format!(
        "#[fg=colour{fg},bg=colour238]#[fg=colour{fg},bg=colour{bg}]{text} #[fg=colour238,bg=colour{bg}]#[fg=colour255,bg=colour238]",
        fg = colors.fg,
        bg = colors.bg,
        text = text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Status;

    fn colors() -> ColorsConfig {
        ColorsConfig::default()
    }

    #[test]
    fn critical_overrides_earlier_warning() {
        let checks = [
            Status::new(StatusCode::Ok, "CPU: 10%"),
            Status::new(StatusCode::Warning, "Memory: 85%"),
            Status::new(StatusCode::Critical, "Disk /: 95%"),
            Status::new(StatusCode::Ok, "Swap: 0%"),
        ];
        let (text, pair) = select_status(&checks, &colors());
        assert_eq!(text, "Disk /: 95%");
        assert_eq!(pair.fg, 255);
        assert_eq!(pair.bg, 196);
    }

    #[test]
    fn later_critical_beats_earlier_warning() {
        let checks = [
            Status::new(StatusCode::Warning, "CPU: 85%"),
            Status::new(StatusCode::Critical, "Memory: 95%"),
        ];
        let (text, pair) = select_status(&checks, &colors());
        assert_eq!(text, "Memory: 95%");
        assert_eq!(pair.bg, 196);
    }

    #[test]
    fn first_of_equal_severity_wins() {
        let checks = [
            Status::new(StatusCode::Warning, "CPU: 85%"),
            Status::new(StatusCode::Warning, "Memory: 85%"),
        ];
        let (text, pair) = select_status(&checks, &colors());
        assert_eq!(text, "CPU: 85%");
        assert_eq!(pair.fg, 0);
        assert_eq!(pair.bg, 220);
    }

    #[test]
    fn all_ok_reports_the_literal_ok() {
        let checks = [
            Status::new(StatusCode::Ok, "CPU: 10%"),
            Status::new(StatusCode::Ok, "Memory: 20%"),
            Status::new(StatusCode::Ok, "Disks OK"),
            Status::new(StatusCode::Ok, "Swap: 0%"),
        ];
        let (text, pair) = select_status(&checks, &colors());
        assert_eq!(text, "OK");
        assert_eq!(pair.fg, 17);
        assert_eq!(pair.bg, 190);
    }

    #[test]
    fn status_line_matches_the_template_byte_for_byte() {
        let line = format_status_line(ColorPair { fg: 0, bg: 220 }, "Memory: 85%");
        assert_eq!(
            line,
            "#[fg=colour0,bg=colour238]#[fg=colour0,bg=colour220]Memory: 85% \
             #[fg=colour238,bg=colour220]#[fg=colour255,bg=colour238]"
        );
    }

    #[test]
    fn ok_line_uses_the_ok_palette() {
        let (text, pair) = select_status(&[], &colors());
        let line = format_status_line(pair, &text);
        assert_eq!(
            line,
            "#[fg=colour17,bg=colour238]#[fg=colour17,bg=colour190]OK \
             #[fg=colour238,bg=colour190]#[fg=colour255,bg=colour238]"
        );
    }
}
