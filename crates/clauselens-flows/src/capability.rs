//! Capability contracts
//!
//! Each external reasoning capability is a name plus a declared
//! input/output shape. The five ClauseLens capabilities:
//! - clause detection (document text -> ordered assessments + identifiers)
//! - comparison (two texts -> comparison result)
//! - definition (legal term -> explanation fields)
//! - translation (three result fields -> three translated fields)
//! - question answering (document text + question -> answer)

use clauselens_domain::{ClauseAssessment, ComparisonResult, ExtractedIdentifiers};
use clauselens_schema::{ContractError, SchemaContract};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A named capability with contracts for both sides of the call
#[derive(Debug)]
pub struct Capability<I, O> {
    name: &'static str,
    /// Input-side contract, checked before any network activity
    pub input: SchemaContract<I>,
    /// Output-side contract, checked before the reply is surfaced
    pub output: SchemaContract<O>,
}

impl<I, O> Capability<I, O>
where
    I: Serialize + DeserializeOwned + JsonSchema,
    O: Serialize + DeserializeOwned + JsonSchema,
{
    /// Declare a capability, compiling both contracts
    pub fn declare(name: &'static str) -> Result<Self, ContractError> {
        Ok(Self {
            name,
            input: SchemaContract::new(format!("{name}.input"))?,
            output: SchemaContract::new(format!("{name}.output"))?,
        })
    }

    /// Capability name on the wire
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Input to clause detection
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClauseDetectionInput {
    /// Full document text
    pub document_text: String,
}

/// Output of clause detection
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClauseDetectionOutput {
    /// Assessments in detection order
    pub clauses: Vec<ClauseAssessment>,
    /// Parties and dates extracted from the document
    #[serde(default)]
    pub identifiers: ExtractedIdentifiers,
}

/// Input to document comparison
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonInput {
    /// First document text
    pub text_a: String,
    /// Second document text
    pub text_b: String,
}

/// Input to term definition
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DefinitionInput {
    /// Legal term to explain
    pub term: String,
}

/// Output of term definition
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionOutput {
    /// Plain-language definition
    pub definition: String,
    /// Usage example in a contract context
    pub example: String,
}

/// The three result fields subject to translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationFields {
    /// Clause summary
    pub summary: String,
    /// Risk reason
    pub risk_reason: String,
    /// Recommendation
    pub recommendation: String,
}

/// Input to translation
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationInput {
    /// Fields to translate
    #[serde(flatten)]
    pub fields: TranslationFields,
    /// Target language code (e.g. "es")
    pub target_language: String,
}

/// Input to question answering
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionInput {
    /// Full document text the question refers to
    pub document_text: String,
    /// Follow-up question
    pub question: String,
}

/// Output of question answering
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct QuestionOutput {
    /// Answer text
    pub answer: String,
}

/// All declared capabilities, compiled once at startup
#[derive(Debug)]
pub struct Capabilities {
    /// Clause detection
    pub clause_detection: Capability<ClauseDetectionInput, ClauseDetectionOutput>,
    /// Document comparison
    pub comparison: Capability<ComparisonInput, ComparisonResult>,
    /// Term definition
    pub definition: Capability<DefinitionInput, DefinitionOutput>,
    /// Field translation
    pub translation: Capability<TranslationInput, TranslationFields>,
    /// Question answering
    pub question_answering: Capability<QuestionInput, QuestionOutput>,
}

impl Capabilities {
    /// Compile every capability contract
    pub fn declare() -> Result<Self, ContractError> {
        Ok(Self {
            clause_detection: Capability::declare("clause-detection")?,
            comparison: Capability::declare("comparison")?,
            definition: Capability::declare("definition")?,
            translation: Capability::declare("translation")?,
            question_answering: Capability::declare("question-answering")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clauselens_schema::Boundary;
    use serde_json::json;

    #[test]
    fn all_capabilities_compile() {
        let caps = Capabilities::declare().unwrap();
        assert_eq!(caps.clause_detection.name(), "clause-detection");
        assert_eq!(caps.question_answering.name(), "question-answering");
    }

    #[test]
    fn detection_output_accepts_missing_identifiers() {
        let caps = Capabilities::declare().unwrap();
        let value = json!({"clauses": []});
        let decoded = caps
            .clause_detection
            .output
            .decode(&value, Boundary::Output)
            .unwrap();
        assert!(decoded.clauses.is_empty());
        assert!(decoded.identifiers.parties.is_empty());
    }

    #[test]
    fn detection_output_rejects_bad_risk_level() {
        let caps = Capabilities::declare().unwrap();
        let value = json!({
            "clauses": [{
                "clauseType": "Termination",
                "clauseText": "...",
                "summary": "...",
                "riskLevel": "Severe",
                "riskReason": "...",
                "recommendation": "..."
            }]
        });
        let err = caps
            .clause_detection
            .output
            .decode(&value, Boundary::Output)
            .unwrap_err();
        assert!(err.is_output());
    }

    #[test]
    fn translation_input_flattens_fields() {
        let input = TranslationInput {
            fields: TranslationFields {
                summary: "s".to_string(),
                risk_reason: "r".to_string(),
                recommendation: "a".to_string(),
            },
            target_language: "es".to_string(),
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["summary"], "s");
        assert_eq!(value["targetLanguage"], "es");
    }
}
