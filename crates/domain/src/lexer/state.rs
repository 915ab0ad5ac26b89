// crates/domain/src/lexer/state.rs

/// Coarse classification of a scan position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Code,
    Comment,
    Literal,
}

/// Lexical context of the scanner at a single position.
///
/// Quote tracking inside comments only exists so that a stray `"` or `'`
/// in a comment cannot leak past the comment terminator. The terminator
/// (newline for line comments, `*/` for block comments) always wins over
/// an open quote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScanState {
    #[default]
    Code,
    /// A `/` in code; the next byte decides between comment and code.
    SlashSeen,
    LineComment,
    BlockComment,
    /// A `*` inside a block comment; a following `/` closes it.
    BlockCommentStar,
    DoubleQuoteCode,
    DoubleQuoteEscape,
    SingleQuoteCode,
    SingleQuoteEscape,
    DoubleQuoteInLineComment,
    DoubleQuoteInLineCommentEscape,
    SingleQuoteInLineComment,
    SingleQuoteInLineCommentEscape,
    DoubleQuoteInBlockComment,
    DoubleQuoteInBlockCommentEscape,
    SingleQuoteInBlockComment,
    SingleQuoteInBlockCommentEscape,
}

impl ScanState {
    /// State after consuming `byte`.
    #[must_use]
    pub const fn next(self, byte: u8) -> Self {
        match (self, byte) {
            (Self::Code, b'"') => Self::DoubleQuoteCode,
            (Self::Code, b'\'') => Self::SingleQuoteCode,
            (Self::Code, b'/') => Self::SlashSeen,
            (Self::Code, _) => Self::Code,

            (Self::SlashSeen, b'/') => Self::LineComment,
            (Self::SlashSeen, b'*') => Self::BlockComment,
            (Self::SlashSeen, _) => Self::Code,

            (Self::LineComment, b'\n') => Self::Code,
            (Self::LineComment, b'"') => Self::DoubleQuoteInLineComment,
            (Self::LineComment, b'\'') => Self::SingleQuoteInLineComment,
            (Self::LineComment, _) => Self::LineComment,

            (Self::BlockComment | Self::BlockCommentStar, b'*') => Self::BlockCommentStar,
            (Self::BlockComment | Self::BlockCommentStar, b'"') => Self::DoubleQuoteInBlockComment,
            (Self::BlockComment | Self::BlockCommentStar, b'\'') => Self::SingleQuoteInBlockComment,
            (Self::BlockCommentStar, b'/') => Self::Code,
            (Self::BlockComment | Self::BlockCommentStar, _) => Self::BlockComment,

            (Self::DoubleQuoteCode, b'"') => Self::Code,
            (Self::DoubleQuoteCode, b'\\') => Self::DoubleQuoteEscape,
            (Self::DoubleQuoteCode | Self::DoubleQuoteEscape, _) => Self::DoubleQuoteCode,

            (Self::SingleQuoteCode, b'\'') => Self::Code,
            (Self::SingleQuoteCode, b'\\') => Self::SingleQuoteEscape,
            (Self::SingleQuoteCode | Self::SingleQuoteEscape, _) => Self::SingleQuoteCode,

            (
                Self::DoubleQuoteInLineComment
                | Self::DoubleQuoteInLineCommentEscape
                | Self::SingleQuoteInLineComment
                | Self::SingleQuoteInLineCommentEscape,
                b'\n',
            ) => Self::Code,
            (Self::DoubleQuoteInLineComment, b'"') => Self::LineComment,
            (Self::DoubleQuoteInLineComment, b'\\') => Self::DoubleQuoteInLineCommentEscape,
            (Self::DoubleQuoteInLineComment | Self::DoubleQuoteInLineCommentEscape, _) => {
                Self::DoubleQuoteInLineComment
            }
            (Self::SingleQuoteInLineComment, b'\'') => Self::LineComment,
            (Self::SingleQuoteInLineComment, b'\\') => Self::SingleQuoteInLineCommentEscape,
            (Self::SingleQuoteInLineComment | Self::SingleQuoteInLineCommentEscape, _) => {
                Self::SingleQuoteInLineComment
            }

            (
                Self::DoubleQuoteInBlockComment
                | Self::DoubleQuoteInBlockCommentEscape
                | Self::SingleQuoteInBlockComment
                | Self::SingleQuoteInBlockCommentEscape,
                b'*',
            ) => Self::BlockCommentStar,
            (Self::DoubleQuoteInBlockComment, b'"') => Self::BlockComment,
            (Self::DoubleQuoteInBlockComment, b'\\') => Self::DoubleQuoteInBlockCommentEscape,
            (Self::DoubleQuoteInBlockComment | Self::DoubleQuoteInBlockCommentEscape, _) => {
                Self::DoubleQuoteInBlockComment
            }
            (Self::SingleQuoteInBlockComment, b'\'') => Self::BlockComment,
            (Self::SingleQuoteInBlockComment, b'\\') => Self::SingleQuoteInBlockCommentEscape,
            (Self::SingleQuoteInBlockComment | Self::SingleQuoteInBlockCommentEscape, _) => {
                Self::SingleQuoteInBlockComment
            }
        }
    }

    pub const fn region(self) -> Region {
        match self {
            Self::Code | Self::SlashSeen => Region::Code,
            Self::LineComment
            | Self::BlockComment
            | Self::BlockCommentStar
            | Self::DoubleQuoteInLineComment
            | Self::DoubleQuoteInLineCommentEscape
            | Self::SingleQuoteInLineComment
            | Self::SingleQuoteInLineCommentEscape
            | Self::DoubleQuoteInBlockComment
            | Self::DoubleQuoteInBlockCommentEscape
            | Self::SingleQuoteInBlockComment
            | Self::SingleQuoteInBlockCommentEscape => Region::Comment,
            Self::DoubleQuoteCode
            | Self::DoubleQuoteEscape
            | Self::SingleQuoteCode
            | Self::SingleQuoteEscape => Region::Literal,
        }
    }

    /// Whether text starting at a position in this state is checked for keywords.
    #[inline]
    pub const fn is_keyword_eligible(self) -> bool {
        matches!(self.region(), Region::Code)
    }
}
