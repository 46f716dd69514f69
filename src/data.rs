use crate::error::{DrillError, Result};
use crate::lexicon::IrregularVerb;
use crate::tense::Tense;

const TENSES_JSON: &str = include_str!("../data/tenses.json");
const IRREGULAR_VERBS_JSON: &str = include_str!("../data/irregular_verbs.json");

pub fn load_tenses() -> Result<Vec<Tense>> {
    parse_tenses(TENSES_JSON)
}

pub fn parse_tenses(json: &str) -> Result<Vec<Tense>> {
    serde_json::from_str(json).map_err(|source| DrillError::Data {
        what: "tense table",
        source,
    })
}

pub fn load_irregular_verbs() -> Result<Vec<IrregularVerb>> {
    parse_irregular_verbs(IRREGULAR_VERBS_JSON)
}

/// Entries are `[base, past simple, past participle]` triples.
pub fn parse_irregular_verbs(json: &str) -> Result<Vec<IrregularVerb>> {
    let triples: Vec<(String, String, String)> =
        serde_json::from_str(json).map_err(|source| DrillError::Data {
            what: "irregular verb table",
            source,
        })?;
    Ok(triples
        .into_iter()
        .map(|(base, past, participle)| IrregularVerb {
            base,
            past,
            participle,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tense::TenseKey;

    #[test]
    fn test_embedded_tables_parse() {
        let tenses = load_tenses().unwrap();
        assert_eq!(tenses.len(), 12);
        let keys: Vec<_> = tenses.iter().map(|t| t.key).collect();
        assert_eq!(keys, TenseKey::ALL.to_vec());

        let verbs = load_irregular_verbs().unwrap();
        assert!(verbs.iter().any(|v| v.base == "go" && v.participle == "gone"));
    }

    #[test]
    fn test_malformed_json_is_a_data_error() {
        let err = parse_tenses("[{\"key\": \"present_simple\"").unwrap_err();
        assert!(matches!(err, DrillError::Data { what: "tense table", .. }));

        let err = parse_irregular_verbs("[[\"go\", \"went\"]]").unwrap_err();
        assert!(matches!(err, DrillError::Data { what: "irregular verb table", .. }));
    }
}
