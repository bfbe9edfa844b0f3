use std::fmt;

/// Severity of a single check, ascending. `Unknown` sits below `Ok` and is
/// only reachable as the defensive `Default`; no checker produces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum StatusCode {
    #[default]
    Unknown,
    Ok,
    Warning,
    Critical,
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusCode::Unknown => "UNKNOWN",
            StatusCode::Ok => "OK",
            StatusCode::Warning => "WARNING",
            StatusCode::Critical => "CRITICAL",
        };
        f.write_str(name)
    }
}

/// Result of one check: a severity plus a short human-readable text.
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub code: StatusCode,
    pub text: String,
}

impl Status {
    pub fn new(code: StatusCode, text: impl Into<String>) -> Self {
        Self {
            code,
            text: text.into(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_order_by_severity() {
        assert!(StatusCode::Unknown < StatusCode::Ok);
        assert!(StatusCode::Ok < StatusCode::Warning);
        assert!(StatusCode::Warning < StatusCode::Critical);
    }

    #[test]
    fn status_displays_code_and_text() {
        let status = Status::new(StatusCode::Warning, "CPU: 85%");
        assert_eq!(status.to_string(), "WARNING: CPU: 85%");
    }
}
