#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Connector words and phrases counted as cohesion markers. The cohesion
/// index is the share of these found in the essay, so the list length is the
/// denominator.
pub const COHESION_MARKERS: [&str; 5] =
    ["portanto", "entretanto", "além disso", "por outro lado", "assim"];

/// Number of characters at which the content score saturates.
pub const CONTENT_TARGET_CHARS: f64 = 500.0;

/// Ceiling shared by every rubric dimension.
pub const MAX_DIMENSION_SCORE: f64 = 10.0;

/// Points deducted per estimated grammar error.
pub const GRAMMAR_PENALTY_PER_ERROR: f64 = 0.5;

/// Essays with more words than this get the full structure score.
pub const STRUCTURE_WORD_THRESHOLD: usize = 100;

/// Structure score for essays above [`STRUCTURE_WORD_THRESHOLD`].
pub const STRUCTURE_FULL: u8 = 10;

/// Structure score for everything else.
pub const STRUCTURE_SHORT: u8 = 7;

/// Default minimum number of non-blank lines.
pub const DEFAULT_MIN_LINES: i64 = 20;

/// Default maximum number of non-blank lines.
pub const DEFAULT_MAX_LINES: i64 = 30;

/// Rubric label for the content dimension.
pub const LABEL_CONTENT: &str = "Conteúdo";

/// Rubric label for the cohesion dimension.
pub const LABEL_COHESION: &str = "Coesão";

/// Rubric label for the grammar dimension.
pub const LABEL_GRAMMAR: &str = "Gramática";

/// Rubric label for the structure dimension.
pub const LABEL_STRUCTURE: &str = "Estrutura";

/// Label for the aggregate grade.
pub const LABEL_FINAL: &str = "Nota final estimada";

/// Warning shown instead of a report when the essay is blank.
pub const BLANK_ESSAY_WARNING: &str = "Digite sua redação para análise.";

/// Word frequency list used by the default spelling corrector.
/// * one `word count` pair per line, `#` starts a comment
pub const DEFAULT_DICTIONARY: &str = include_str!("dictionary/pt_br.txt");

/// Lowercase alphabet used to generate spelling edits, accented letters
/// included.
pub const EDIT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzáàâãéêíóôõúüç";

/// Farthest edit distance at which a known word is still suggested.
pub const MAX_EDIT_DISTANCE: usize = 2;

/// Longest token for which known words two edits away are searched.
pub const MAX_DISTANT_EDIT_LEN: usize = 12;

/// Shortest length the longer half must have for a word to be split in two.
pub const MIN_SPLIT_PART_LEN: usize = 4;
