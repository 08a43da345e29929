use crate::token;

/// One source line with the comment and label split off. The raw text
/// is kept because several checks scan it, trailing comments included.
#[derive(Debug, Clone)]
pub struct Line {
    idx: usize,
    raw: String,
    code: String,
    label: Option<String>,
    body: String,
}

impl Line {
    pub fn classify(idx: usize, raw: &str) -> Self {
        let stripped = raw.trim_start_matches('\u{feff}');
        let code = strip_comment(stripped).trim().to_string();
        let (label, body) = match token::LABEL.captures(&code) {
            Some(cap) => {
                let rest = code[cap.get(0).unwrap().end()..].trim().to_string();
                (Some(cap[1].to_string()), rest)
            }
            None => (None, code.clone()),
        };
        Self {
            idx,
            raw: raw.to_string(),
            code,
            label,
            body,
        }
    }

    /// 1-indexed line number.
    pub fn no(&self) -> usize {
        self.idx + 1
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Comment-stripped, trimmed text with any label prefix still
    /// attached.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Instruction text with the label prefix removed. Empty for
    /// label-only lines.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Blank and comment-only lines carry nothing to check.
    pub fn is_code(&self) -> bool {
        !self.code.is_empty()
    }
}

// The first `#` or `//` starts a comment running to end of line.
fn strip_comment(s: &str) -> &str {
    match (s.find('#'), s.find("//")) {
        (Some(h), Some(sl)) => &s[..h.min(sl)],
        (Some(h), None) => &s[..h],
        (None, Some(sl)) => &s[..sl],
        (None, None) => s,
    }
}

pub fn classify_all(src: &str) -> Vec<Line> {
    src.split('\n')
        .enumerate()
        .map(|(idx, raw)| Line::classify(idx, raw))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments() {
        let line = Line::classify(0, "add r0 r0 1 # note");
        assert_eq!(line.code(), "add r0 r0 1");
        assert!(line.is_code());

        let line = Line::classify(0, "  // comment only");
        assert!(!line.is_code());

        let line = Line::classify(0, "move r0 1 // tail # later");
        assert_eq!(line.code(), "move r0 1");
    }

    #[test]
    fn labels() {
        let line = Line::classify(2, "loop: yield");
        assert_eq!(line.no(), 3);
        assert_eq!(line.label(), Some("loop"));
        assert_eq!(line.body(), "yield");

        let line = Line::classify(0, "start:");
        assert_eq!(line.label(), Some("start"));
        assert_eq!(line.body(), "");
        assert!(line.is_code());

        // A spaced colon is not a label.
        let line = Line::classify(0, "loop : j loop");
        assert_eq!(line.label(), None);
    }

    #[test]
    fn bom() {
        let line = Line::classify(0, "\u{feff}main:");
        assert_eq!(line.label(), Some("main"));
    }

    #[test]
    fn blank() {
        assert!(!Line::classify(0, "").is_code());
        assert!(!Line::classify(0, "   ").is_code());
    }
}
