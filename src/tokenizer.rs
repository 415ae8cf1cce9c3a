use jieba_rs::Jieba;
use regex::Regex;

/// Minimum length (in chars) for segmentation-derived tokens. Single-character
/// CJK tokens are almost always particles or punctuation noise.
pub const DEFAULT_MIN_SEGMENT_CHARS: usize = 2;

/// Splits diary text into semantic tokens: CJK words, Latin words, and URLs.
///
/// CJK text carries no whitespace boundaries, so it goes through jieba
/// segmentation. Latin words and URLs are extracted up front with regexes and
/// their spans blanked out of the text before segmentation, which keeps jieba
/// from fragmenting `hello` into letters or a URL into path pieces.
///
/// The tokenizer is pure: it applies no stopword filtering, leaving that to
/// the corpus scanner.
pub struct Tokenizer {
    jieba: Jieba,
    url_pattern: Regex,
    word_pattern: Regex,
    min_segment_chars: usize,
}

impl Tokenizer {
    /// Creates a tokenizer with the default segmentation dictionary.
    ///
    /// Loading the dictionary is not free, so callers should build one
    /// tokenizer and reuse it across scans.
    #[must_use]
    pub fn new() -> Self {
        Self {
            jieba: Jieba::new(),
            url_pattern: Regex::new(r"https?://\S+").expect("url pattern is valid"),
            word_pattern: Regex::new(r"[A-Za-z]+").expect("word pattern is valid"),
            min_segment_chars: DEFAULT_MIN_SEGMENT_CHARS,
        }
    }

    /// Overrides the minimum length filter for segmentation-derived tokens.
    /// A value of 0 or 1 keeps single-character CJK tokens.
    #[must_use]
    pub fn with_min_segment_chars(mut self, min_chars: usize) -> Self {
        self.min_segment_chars = min_chars;
        self
    }

    /// Tokenizes `text` into CJK words (in text order), followed by Latin
    /// words, followed by URLs (both in extraction order).
    #[must_use]
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut spans: Vec<(usize, usize)> = Vec::new();
        let mut urls: Vec<String> = Vec::new();
        let mut words: Vec<String> = Vec::new();

        for m in self.url_pattern.find_iter(text) {
            spans.push((m.start(), m.end()));
            urls.push(m.as_str().to_string());
        }

        // Letter runs touching an already-claimed URL span stay part of the
        // URL. Overlap is tested on the whole span, not just the start: a run
        // abutting the scheme with no separator matches across the boundary
        // (`checkhttps://...`), and keeping it would hand `blank_spans`
        // overlapping spans.
        for m in self.word_pattern.find_iter(text) {
            let overlaps_url = spans
                .iter()
                .any(|&(start, end)| m.start() < end && m.end() > start);
            if overlaps_url {
                continue;
            }
            spans.push((m.start(), m.end()));
            words.push(m.as_str().to_string());
        }

        let masked = blank_spans(text, &mut spans);

        let mut tokens: Vec<String> = self
            .jieba
            .cut(&masked, false)
            .into_iter()
            .map(str::trim)
            .filter(|w| !w.is_empty() && w.chars().count() >= self.min_segment_chars)
            .map(ToString::to_string)
            .collect();

        tokens.extend(words);
        tokens.extend(urls);
        tokens
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Replaces each span with a single space, preserving everything in between.
/// Spans must be non-overlapping; they are sorted here.
fn blank_spans(text: &str, spans: &mut [(usize, usize)]) -> String {
    spans.sort_unstable();

    let mut masked = String::with_capacity(text.len());
    let mut cursor = 0;
    for &(start, end) in spans.iter() {
        masked.push_str(&text[cursor..start]);
        masked.push(' ');
        cursor = end;
    }
    masked.push_str(&text[cursor..]);
    masked
}

#[cfg(test)]
#[path = "tokenizer_tests.rs"]
mod tests;
