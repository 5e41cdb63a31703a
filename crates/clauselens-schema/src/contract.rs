//! Schema contracts
//!
//! A contract pairs a Rust type with its compiled JSON schema and checks
//! values against it at call boundaries. Contracts are used symmetrically:
//! once on the input to an external call (fail before any network
//! activity) and once on the returned value (fail even though the call
//! succeeded at the transport level).

use crate::error::{Boundary, ContractError, ContractViolation};
use jsonschema::JSONSchema;
use schemars::gen::SchemaGenerator;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;

/// A declared shape for one side of a capability call
///
/// Compiled once at construction; `check` and `decode` are cheap and
/// side-effect free.
pub struct SchemaContract<T> {
    name: String,
    compiled: JSONSchema,
    _marker: PhantomData<fn() -> T>,
}

impl<T> std::fmt::Debug for SchemaContract<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaContract")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<T> SchemaContract<T>
where
    T: Serialize + DeserializeOwned + JsonSchema,
{
    /// Build a contract from `T`'s derived JSON schema
    pub fn new(name: impl Into<String>) -> Result<Self, ContractError> {
        let name = name.into();
        let root = SchemaGenerator::default().into_root_schema_for::<T>();
        let schema = serde_json::to_value(root)
            .map_err(|e| ContractError::SchemaDerivation {
                contract: name.clone(),
                detail: e.to_string(),
            })?;
        let compiled = JSONSchema::compile(&schema).map_err(|e| ContractError::Compile {
            contract: name.clone(),
            detail: e.to_string(),
        })?;

        Ok(Self {
            name,
            compiled,
            _marker: PhantomData,
        })
    }

    /// Contract name (capability side it guards)
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validate a raw value against the declared shape
    pub fn check(&self, value: &Value, boundary: Boundary) -> Result<(), ContractViolation> {
        if let Err(errors) = self.compiled.validate(value) {
            let detail = errors
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ContractViolation {
                contract: self.name.clone(),
                boundary,
                detail,
            });
        }
        Ok(())
    }

    /// Validate and decode a raw value into `T`
    ///
    /// Decoding runs after schema validation, so a decode failure here
    /// means the schema and the Rust type disagree; it is still reported
    /// as a violation at the same boundary.
    pub fn decode(&self, value: &Value, boundary: Boundary) -> Result<T, ContractViolation> {
        self.check(value, boundary)?;
        serde_json::from_value(value.clone()).map_err(|e| ContractViolation {
            contract: self.name.clone(),
            boundary,
            detail: format!("decode: {e}"),
        })
    }

    /// Serialize a typed value for the wire
    pub fn encode(&self, value: &T) -> Result<Value, ContractViolation> {
        serde_json::to_value(value).map_err(|e| ContractViolation {
            contract: self.name.clone(),
            boundary: Boundary::Input,
            detail: format!("encode: {e}"),
        })
    }
}
