//! Short name synthesis for waypoints without a usable short name.

use crate::Waypoint;
use std::collections::HashSet;

/// Derives a short name from a waypoint.
pub trait ShortNameSynthesizer {
    fn synthesize(&mut self, waypoint: &Waypoint) -> String;
}

const FALLBACK_NAME: &str = "WPT";

/// Builds short names from waypoint descriptions, unique within one session.
#[derive(Debug, Clone)]
pub struct MakeShort {
    max_length: usize,
    whitespace_ok: bool,
    must_upper: bool,
    used: HashSet<String>,
}

impl Default for MakeShort {
    fn default() -> Self {
        Self::new(8)
    }
}

impl MakeShort {
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length: max_length.max(1),
            whitespace_ok: false,
            must_upper: false,
            used: HashSet::new(),
        }
    }

    pub fn with_whitespace_ok(mut self, whitespace_ok: bool) -> Self {
        self.whitespace_ok = whitespace_ok;
        self
    }

    pub fn with_must_upper(mut self, must_upper: bool) -> Self {
        self.must_upper = must_upper;
        self
    }

    /// Shortens `name` and registers the result so it is never handed out
    /// twice by this instance.
    pub fn make_short(&mut self, name: &str) -> String {
        let mut base = self.clean(name);
        if base.is_empty() {
            base = FALLBACK_NAME.to_string();
        }
        truncate_chars(&mut base, self.max_length);

        let mut candidate = base.clone();
        let mut suffix = 1u32;
        while self.used.contains(&candidate) {
            let digits = suffix.to_string();
            let mut stem = base.clone();
            truncate_chars(&mut stem, self.max_length.saturating_sub(digits.len()));
            candidate = format!("{}{}", stem.trim_end(), digits);
            suffix += 1;
        }

        self.used.insert(candidate.clone());
        candidate
    }

    fn clean(&self, name: &str) -> String {
        let mut out = String::with_capacity(name.len());
        let mut pending_space = false;
        for c in name.chars() {
            if c.is_whitespace() {
                pending_space = self.whitespace_ok && !out.is_empty();
                continue;
            }
            if !c.is_ascii_alphanumeric() {
                continue;
            }
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(if self.must_upper {
                c.to_ascii_uppercase()
            } else {
                c
            });
        }
        out
    }
}

impl ShortNameSynthesizer for MakeShort {
    fn synthesize(&mut self, waypoint: &Waypoint) -> String {
        let source = if !waypoint.description.is_empty() {
            &waypoint.description
        } else {
            &waypoint.short_name
        };
        self.make_short(source)
    }
}

fn truncate_chars(s: &mut String, max_chars: usize) {
    if let Some((idx, _)) = s.char_indices().nth(max_chars) {
        s.truncate(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waypoint(short_name: &str, description: &str) -> Waypoint {
        Waypoint {
            short_name: short_name.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn strips_punctuation_and_truncates() {
        let mut mkshort = MakeShort::new(6);
        assert_eq!(mkshort.make_short("Mt. Rainier!"), "MtRain");
    }

    #[test]
    fn keeps_single_spaces_when_allowed() {
        let mut mkshort = MakeShort::new(32)
            .with_whitespace_ok(true)
            .with_must_upper(true);
        assert_eq!(mkshort.make_short("  Lake   Serene  trail "), "LAKE SERENE TRAIL");
    }

    #[test]
    fn generated_names_are_unique() {
        let mut mkshort = MakeShort::new(5).with_must_upper(true);
        assert_eq!(mkshort.make_short("Summit"), "SUMMI");
        assert_eq!(mkshort.make_short("Summit"), "SUMM1");
        assert_eq!(mkshort.make_short("summit"), "SUMM2");
    }

    #[test]
    fn falls_back_for_unusable_input() {
        let mut mkshort = MakeShort::new(8);
        assert_eq!(mkshort.make_short("!!!"), "WPT");
        assert_eq!(mkshort.make_short(""), "WPT1");
    }

    #[test]
    fn synthesizes_from_description_first() {
        let mut mkshort = MakeShort::new(32).with_must_upper(true);
        assert_eq!(mkshort.synthesize(&waypoint("abc", "Trailhead")), "TRAILHEAD");
        assert_eq!(mkshort.synthesize(&waypoint("abc", "")), "ABC");
    }
}
