//! Theory visualization entities

use crate::schema::{ResponseSchema, SchemaField};
use serde::{Deserialize, Serialize};

/// What a visualization depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TheoryKind {
    Scale,
    Chord,
    Interval,
}

impl TheoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TheoryKind::Scale => "scale",
            TheoryKind::Chord => "chord",
            TheoryKind::Interval => "interval",
        }
    }
}

impl std::fmt::Display for TheoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Instrument a visualization is best shown on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instrument {
    Piano,
    Guitar,
}

impl Instrument {
    pub fn as_str(&self) -> &'static str {
        match self {
            Instrument::Piano => "piano",
            Instrument::Guitar => "guitar",
        }
    }
}

impl std::fmt::Display for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Typed music-theory data for one user query (Entity)
///
/// Produced once per query, immutable after construction, and consumed by
/// the note-highlighting views. `notes` and `intervals` run in parallel:
/// `intervals[i]` labels the relationship of `notes[i]` to the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visualization {
    /// Short display title, e.g. "C Major Scale".
    pub title: String,
    /// One-sentence explanation.
    pub description: String,
    /// Whether this is a scale, a chord, or an interval.
    #[serde(rename = "type")]
    pub kind: TheoryKind,
    /// Root note name, e.g. "C" or "F#".
    pub root: String,
    /// Note names to highlight, in order.
    pub notes: Vec<String>,
    /// Interval label for each note, e.g. "R", "M3", "P5".
    pub intervals: Vec<String>,
    /// Instrument the user asked about, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument_preference: Option<Instrument>,
}

impl Visualization {
    /// Number of highlighted notes
    pub fn note_count(&self) -> usize {
        self.notes.len()
    }

    /// Notes paired with their interval labels
    pub fn labeled_notes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.notes
            .iter()
            .map(String::as_str)
            .zip(self.intervals.iter().map(String::as_str))
    }

    /// The schema the oracle is asked to satisfy for a theory query.
    ///
    /// Field names and guidance match the wire contract of the
    /// deserializer above; `type` and `instrumentPreference` are
    /// constrained to their enum values.
    pub fn response_schema() -> ResponseSchema {
        ResponseSchema::object()
            .field(
                SchemaField::text("title", true)
                    .with_description("A short title for the theory concept (e.g. C Major Scale)"),
            )
            .field(
                SchemaField::text("description", true)
                    .with_description("A one sentence explanation."),
            )
            .field(SchemaField::text_enum(
                "type",
                [
                    TheoryKind::Scale.as_str(),
                    TheoryKind::Chord.as_str(),
                    TheoryKind::Interval.as_str(),
                ],
                true,
            ))
            .field(
                SchemaField::text("root", true)
                    .with_description("The root note name (e.g. C, F#)"),
            )
            .field(SchemaField::text_array("notes", true).with_description(
                "All notes included in this scale or chord. Use sharps (#) instead of \
                 flats where possible for consistency.",
            ))
            .field(SchemaField::text_array("intervals", true).with_description(
                "The interval relationship for each note (e.g. R, M3, P5, b7)",
            ))
            .field(SchemaField::text_enum(
                "instrumentPreference",
                [Instrument::Piano.as_str(), Instrument::Guitar.as_str()],
                false,
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c_major() -> Visualization {
        Visualization {
            title: "C Major Scale".to_string(),
            description: "The major scale starting on C.".to_string(),
            kind: TheoryKind::Scale,
            root: "C".to_string(),
            notes: ["C", "D", "E", "F", "G", "A", "B"]
                .map(String::from)
                .to_vec(),
            intervals: ["R", "M2", "M3", "P4", "P5", "M6", "M7"]
                .map(String::from)
                .to_vec(),
            instrument_preference: None,
        }
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(c_major()).expect("serializable");
        assert_eq!(json["type"], "scale");
        assert_eq!(json["root"], "C");
        // Optional preference is omitted entirely when absent
        assert!(json.get("instrumentPreference").is_none());
    }

    #[test]
    fn test_instrument_preference_round_trip() {
        let mut viz = c_major();
        viz.instrument_preference = Some(Instrument::Guitar);
        let json = serde_json::to_string(&viz).expect("serializable");
        assert!(json.contains(r#""instrumentPreference":"guitar""#));

        let back: Visualization = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back.instrument_preference, Some(Instrument::Guitar));
    }

    #[test]
    fn test_labeled_notes_pairing() {
        let viz = c_major();
        let pairs: Vec<_> = viz.labeled_notes().collect();
        assert_eq!(pairs[0], ("C", "R"));
        assert_eq!(pairs[4], ("G", "P5"));
        assert_eq!(pairs.len(), 7);
    }

    #[test]
    fn test_response_schema_shape() {
        let schema = Visualization::response_schema();
        assert_eq!(
            schema.required_names(),
            vec!["title", "description", "type", "root", "notes", "intervals"]
        );
        // The optional preference field is declared but not required
        assert!(schema.fields().iter().any(|f| f.name == "instrumentPreference"));
    }
}
