//! # IOB Tags
//!
//! Tag set and span decoding for the IOB (Inside-Outside-Beginning) scheme
//! emitted by the encoder.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AspectError;
use crate::types::OUTSIDE_MARKER;

/// IOB tag attached to one merged token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum IobTag {
    Outside,
    Begin(String),
    Inside(String),
}

impl IobTag {
    /// Check if this is a "Begin" tag.
    pub fn is_begin(&self) -> bool {
        matches!(self, IobTag::Begin(_))
    }

    /// Check if this is an "Inside" tag.
    pub fn is_inside(&self) -> bool {
        matches!(self, IobTag::Inside(_))
    }

    /// Get the aspect type for this tag.
    pub fn aspect(&self) -> Option<&str> {
        match self {
            IobTag::Begin(aspect) | IobTag::Inside(aspect) => Some(aspect),
            IobTag::Outside => None,
        }
    }
}

impl fmt::Display for IobTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IobTag::Outside => f.write_str(OUTSIDE_MARKER),
            IobTag::Begin(aspect) => write!(f, "B-{aspect}"),
            IobTag::Inside(aspect) => write!(f, "I-{aspect}"),
        }
    }
}

impl FromStr for IobTag {
    type Err = AspectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == OUTSIDE_MARKER {
            return Ok(IobTag::Outside);
        }
        match s.split_once('-') {
            Some(("B", aspect)) if !aspect.is_empty() => Ok(IobTag::Begin(aspect.to_string())),
            Some(("I", aspect)) if !aspect.is_empty() => Ok(IobTag::Inside(aspect.to_string())),
            _ => Err(AspectError::InvalidLabel(s.to_string())),
        }
    }
}

impl TryFrom<String> for IobTag {
    type Error = AspectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<IobTag> for String {
    fn from(tag: IobTag) -> Self {
        tag.to_string()
    }
}

/// A decoded aspect span over tag positions `start..end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub aspect: String,
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Decode a tag sequence back into spans.
///
/// An `I-` tag whose aspect does not match the open span starts a new span.
pub fn extract_spans(tags: &[IobTag]) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    let mut open: Option<Span> = None;

    for (idx, tag) in tags.iter().enumerate() {
        match tag {
            IobTag::Outside => {
                spans.extend(open.take());
            }
            IobTag::Inside(aspect) if open.as_ref().is_some_and(|s| &s.aspect == aspect) => {
                if let Some(span) = open.as_mut() {
                    span.end = idx + 1;
                }
            }
            IobTag::Begin(aspect) | IobTag::Inside(aspect) => {
                spans.extend(open.take());
                open = Some(Span {
                    aspect: aspect.clone(),
                    start: idx,
                    end: idx + 1,
                });
            }
        }
    }
    spans.extend(open);

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(labels: &[&str]) -> Vec<IobTag> {
        labels.iter().map(|l| l.parse().unwrap()).collect()
    }

    #[test]
    fn test_display() {
        assert_eq!(IobTag::Outside.to_string(), "O");
        assert_eq!(IobTag::Begin("Brand".into()).to_string(), "B-Brand");
        assert_eq!(IobTag::Inside("Brand".into()).to_string(), "I-Brand");
    }

    #[test]
    fn test_parse_keeps_hyphenated_aspects() {
        let tag: IobTag = "B-Screen-Size".parse().unwrap();
        assert_eq!(tag, IobTag::Begin("Screen-Size".into()));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("Brand".parse::<IobTag>().is_err());
        assert!("B-".parse::<IobTag>().is_err());
        assert!("X-Brand".parse::<IobTag>().is_err());
    }

    #[test]
    fn test_is_begin_inside() {
        assert!(IobTag::Begin("Brand".into()).is_begin());
        assert!(!IobTag::Outside.is_begin());
        assert!(IobTag::Inside("Brand".into()).is_inside());
        assert_eq!(IobTag::Outside.aspect(), None);
    }

    #[test]
    fn test_extract_spans() {
        let spans = extract_spans(&tags(&["O", "B-Brand", "I-Brand", "O", "B-Color"]));
        assert_eq!(
            spans,
            vec![
                Span { aspect: "Brand".into(), start: 1, end: 3 },
                Span { aspect: "Color".into(), start: 4, end: 5 },
            ]
        );
        assert_eq!(spans[0].len(), 2);
    }

    #[test]
    fn test_extract_spans_adjacent_begin() {
        let spans = extract_spans(&tags(&["B-Brand", "B-Brand", "I-Brand"]));
        assert_eq!(spans.len(), 2);
        assert_eq!((spans[1].start, spans[1].end), (1, 3));
    }

    #[test]
    fn test_extract_spans_orphan_inside() {
        let spans = extract_spans(&tags(&["O", "I-Color", "I-Brand"]));
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].aspect, "Color");
        assert_eq!(spans[1].aspect, "Brand");
    }

    #[test]
    fn test_extract_spans_empty() {
        assert!(extract_spans(&[]).is_empty());
    }
}
