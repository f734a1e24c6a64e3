use serde::Serialize;
use std::fmt;

pub const REVERSED_PREFIX: &str = "Reverse ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Orientation {
    Upright,
    Reversed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    pub name: &'static str,
    pub orientation: Orientation,
}

impl Card {
    pub const fn upright(name: &'static str) -> Self {
        Self {
            name,
            orientation: Orientation::Upright,
        }
    }

    pub const fn reversed(name: &'static str) -> Self {
        Self {
            name,
            orientation: Orientation::Reversed,
        }
    }

    pub fn is_reversed(&self) -> bool {
        self.orientation == Orientation::Reversed
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.orientation {
            Orientation::Upright => f.write_str(self.name),
            Orientation::Reversed => write!(f, "{}{}", REVERSED_PREFIX, self.name),
        }
    }
}

/// 牌陣大小，只有 3 張或 5 張兩種
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Spread {
    Three,
    Five,
}

impl Spread {
    pub fn card_count(self) -> usize {
        match self {
            Spread::Three => 3,
            Spread::Five => 5,
        }
    }
}

impl fmt::Display for Spread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.card_count())
    }
}

/// Completed reading: the drawn cards and the final narrative text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub question: String,
    pub spread: Spread,
    pub cards: Vec<Card>,
    pub rationale: String,
    pub text: String,
}

/// Which request shape a model id maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Text,
    Video,
}

impl ModelKind {
    pub fn from_model_id(model_id: &str) -> Option<Self> {
        if model_id.contains("claude") {
            Some(ModelKind::Text)
        } else if model_id.contains("ray-v2") {
            Some(ModelKind::Video)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoArtifact {
    pub location: Option<String>,
    pub raw: serde_json::Value,
}

impl VideoArtifact {
    pub fn from_response(raw: serde_json::Value) -> Self {
        let location = ["url", "video_url", "invocationArn"]
            .iter()
            .find_map(|key| raw.get(*key).and_then(|v| v.as_str()))
            .or_else(|| {
                raw.pointer("/outputDataConfig/s3OutputDataConfig/s3Uri")
                    .and_then(|v| v.as_str())
            })
            .map(str::to_string);

        Self { location, raw }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Generation {
    Text(String),
    Video(VideoArtifact),
}

/// 非致命的生成失敗，會以提示文字的形式繼續流入後續步驟
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationFault {
    UnsupportedModel(String),
    UnexpectedFormat,
}

impl fmt::Display for GenerationFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationFault::UnsupportedModel(_) => f.write_str("⚠️ Error: Unsupported model."),
            GenerationFault::UnexpectedFormat => {
                f.write_str("⚠️ Error: Unexpected response format.")
            }
        }
    }
}

pub type Outcome = std::result::Result<Generation, GenerationFault>;

/// Collapses an outcome into text, rendering faults as their warning line.
pub fn outcome_text(outcome: &Outcome) -> String {
    match outcome {
        Ok(Generation::Text(text)) => text.clone(),
        Ok(Generation::Video(artifact)) => artifact
            .location
            .clone()
            .unwrap_or_else(|| artifact.raw.to_string()),
        Err(fault) => fault.to_string(),
    }
}
