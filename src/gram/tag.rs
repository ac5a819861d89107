//! Part-of-speech tags for scanned words
//!
//! Tagging is strictly downstream of the scanner: only word tokens are
//! taggable, and a tag pairs the word's lexeme with an explicit
//! part-of-speech discriminant. All classification goes through exhaustive
//! matches on [PosTag]; there is no structural probing of tag values.

use crate::gram::ident::{ElementId, IdGenerator};
use crate::gram::scan::{Token, TokenKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Part-of-speech discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosTag {
    Noun,
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Article,
    Interjection,
}

impl PosTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "noun",
            PosTag::Pronoun => "pronoun",
            PosTag::Verb => "verb",
            PosTag::Adjective => "adjective",
            PosTag::Adverb => "adverb",
            PosTag::Preposition => "preposition",
            PosTag::Conjunction => "conjunction",
            PosTag::Article => "article",
            PosTag::Interjection => "interjection",
        }
    }

    /// Tags that can head a noun phrase
    pub fn is_noun_like(&self) -> bool {
        match self {
            PosTag::Noun | PosTag::Pronoun => true,
            PosTag::Verb
            | PosTag::Adjective
            | PosTag::Adverb
            | PosTag::Preposition
            | PosTag::Conjunction
            | PosTag::Article
            | PosTag::Interjection => false,
        }
    }

    /// Tags that modify another word rather than stand alone
    pub fn is_modifier(&self) -> bool {
        match self {
            PosTag::Adjective | PosTag::Adverb | PosTag::Article => true,
            PosTag::Noun
            | PosTag::Pronoun
            | PosTag::Verb
            | PosTag::Preposition
            | PosTag::Conjunction
            | PosTag::Interjection => false,
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Failure to tag a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    /// Only word tokens are taggable
    NotAWord { kind: TokenKind },
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagError::NotAWord { kind } => {
                write!(f, "cannot tag a {} token; only words take a tag", kind)
            }
        }
    }
}

impl std::error::Error for TagError {}

/// A scanned word paired with its part of speech
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordTag {
    pub id: ElementId,
    pub lexeme: String,
    pub pos: PosTag,
}

impl WordTag {
    /// Tag a word token. Whitespace and sentinel tokens are rejected.
    pub fn from_token(token: &Token, pos: PosTag, ids: &IdGenerator) -> Result<Self, TagError> {
        match token.kind {
            TokenKind::Word => Ok(WordTag {
                id: ids.next_id(),
                lexeme: token.lexeme.clone(),
                pos,
            }),
            TokenKind::Whitespace | TokenKind::End => {
                Err(TagError::NotAWord { kind: token.kind })
            }
        }
    }
}

impl fmt::Display for WordTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.lexeme, self.pos)
    }
}
