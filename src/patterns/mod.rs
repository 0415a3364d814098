pub mod vocab;

use std::sync::LazyLock;

use regex::Regex;

use crate::patterns::vocab::CITIES;

/// Precompiled matchers shared by all field extractors.
///
/// Built once per process and reused across extraction calls; a malformed
/// pattern is a build defect, so compilation failures panic at first use
/// rather than surfacing as runtime errors.
pub struct PatternLibrary {
    /// Email address shape
    pub email: Regex,
    /// Phone number with optional country code and separators
    pub phone: Regex,
    /// Any plausible year (1900-2099)
    pub year: Regex,
    /// Recent year (2000-2039), used by the graduation-year fallback
    pub recent_year: Regex,
    /// Experience surface patterns, in priority order; first match wins
    pub experience: Vec<Regex>,
    /// City gazetteer alternation
    pub city: Regex,
    /// Explicit "degree in <specialization>" phrasing
    pub degree_in: Regex,
    /// Degree abbreviations paired with their canonical rendering,
    /// in priority order (specific forms before generic ones)
    pub degree_abbrev: Vec<(Regex, &'static str)>,
}

impl PatternLibrary {
    fn new() -> Self {
        let city_alternation = format!(r"(?i)\b({})\b", CITIES.join("|"));

        Self {
            email: compile(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"),
            // 3-3-4 grouping with optional country code, or the 5-5
            // grouping mobile numbers are usually read out in
            phone: compile(
                r"(\+?\d{1,3}[-.\s]?)?(?:\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}|\d{5}[-.\s]\d{5})",
            ),
            year: compile(r"\b(19\d{2}|20\d{2})\b"),
            recent_year: compile(r"\b(20[0-3]\d)\b"),
            experience: vec![
                compile(r"(?i)\b(\d{1,2})\s*\+?\s*(?:years?|yrs?)\s*(?:of\s*)?experience"),
                compile(r"(?i)\bexperience\s*(?:of\s*)?(\d{1,2})\s*(?:years?|yrs?)"),
                compile(r"(?i)\b(\d{1,2})\s*\+?\s*(?:years?|yrs?)\s+(?:in|working)\b"),
            ],
            city: compile(&city_alternation),
            degree_in: compile(
                r"(?i)\bdegree\s+in\s+([a-z ]+(?:engineering|science|technology|administration))",
            ),
            degree_abbrev: vec![
                (compile(r"(?i)\bb\.?\s?tech\b\.?"), "B.Tech"),
                (compile(r"(?i)\bm\.?\s?tech\b\.?"), "M.Tech"),
                (compile(r"(?i)\bb\.\s?e\b\.?"), "B.E."),
                (compile(r"(?i)\bm\.\s?e\b\.?"), "M.E."),
                (compile(r"(?i)\bb\.?\s?sc\b\.?"), "B.Sc"),
                (compile(r"(?i)\bm\.?\s?sc\b\.?"), "M.Sc"),
                (compile(r"(?i)\b(?:m\.b\.a|mba)\b\.?"), "MBA"),
                (compile(r"(?i)\bbachelor(?:'s|s)?\b"), "Bachelor's"),
                (compile(r"(?i)\bmaster(?:'s|s)?\b"), "Master's"),
            ],
        }
    }

    /// The process-wide library, compiled on first use
    pub fn global() -> &'static PatternLibrary {
        static LIBRARY: LazyLock<PatternLibrary> = LazyLock::new(PatternLibrary::new);
        &LIBRARY
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("pattern library regex must compile")
}
