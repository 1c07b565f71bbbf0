//! Record family definitions.
//!
//! A family is one kind of master data (depots, doctors, ...). Its schema
//! names the fields a record carries, which of them free-text search looks
//! at, and the prefix of the codes its records are given.

use crate::{error::Result, Error, FamilyName};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Fields every stored record carries regardless of family.
pub const SYSTEM_FIELDS: [&str; 3] = ["id", "code", "createdAt"];

/// Field types supported in schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Int,
    Float,
    Bool,
    /// ISO-8601 date or date-time string
    Date,
    /// Arbitrary nested JSON
    Json,
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::String => write!(f, "String"),
            FieldType::Int => write!(f, "Int"),
            FieldType::Float => write!(f, "Float"),
            FieldType::Bool => write!(f, "Bool"),
            FieldType::Date => write!(f, "Date"),
            FieldType::Json => write!(f, "Json"),
        }
    }
}

/// Definition of a field in a family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    pub name: String,
    pub field_type: FieldType,
    pub required: bool,
    /// Whether free-text search looks at this field
    pub searchable: bool,
}

impl FieldDef {
    /// A required, searchable field.
    pub fn required(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: true,
            searchable: true,
        }
    }

    /// An optional, searchable field.
    pub fn optional(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
            searchable: true,
        }
    }

    /// Exclude this field from free-text search.
    pub fn hidden(mut self) -> Self {
        self.searchable = false;
        self
    }

    /// Validate a JSON value against this field definition.
    pub fn validate(&self, value: Option<&Value>) -> Result<()> {
        match value {
            None | Some(Value::Null) if self.required => {
                Err(Error::MissingRequiredField(self.name.clone()))
            }
            None | Some(Value::Null) => Ok(()),
            Some(v) => self.validate_type(v),
        }
    }

    fn validate_type(&self, value: &Value) -> Result<()> {
        let valid = match self.field_type {
            FieldType::String | FieldType::Date => value.is_string(),
            FieldType::Int => value.is_i64() || value.is_u64(),
            FieldType::Float => value.is_number(),
            FieldType::Bool => value.is_boolean(),
            FieldType::Json => true,
        };

        if valid {
            Ok(())
        } else {
            Err(Error::TypeMismatch {
                field: self.name.clone(),
                expected: self.field_type.to_string(),
                got: json_type_name(value).to_string(),
            })
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "Null",
        Value::Bool(_) => "Bool",
        Value::Number(n) if n.is_i64() || n.is_u64() => "Int",
        Value::Number(_) => "Float",
        Value::String(_) => "String",
        Value::Array(_) => "Array",
        Value::Object(_) => "Object",
    }
}

/// Schema for one record family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilySchema {
    pub name: FamilyName,
    /// Prefix of the family's record codes (`CHEM` in `CHEM-0042`)
    pub code_prefix: String,
    pub fields: Vec<FieldDef>,
}

impl FamilySchema {
    pub fn new(
        name: impl Into<FamilyName>,
        code_prefix: impl Into<String>,
        fields: Vec<FieldDef>,
    ) -> Self {
        Self {
            name: name.into(),
            code_prefix: code_prefix.into(),
            fields,
        }
    }

    /// Whether `name` is a field of this family, including system fields.
    pub fn has_field(&self, name: &str) -> bool {
        SYSTEM_FIELDS.contains(&name) || self.fields.iter().any(|f| f.name == name)
    }

    /// Field allowlist for free-text search: the code plus every searchable
    /// field.
    pub fn searchable_fields(&self) -> Vec<String> {
        std::iter::once("code".to_string())
            .chain(
                self.fields
                    .iter()
                    .filter(|f| f.searchable)
                    .map(|f| f.name.clone()),
            )
            .collect()
    }

    /// Validate a record body against this schema.
    pub fn validate_record(&self, record: &Value) -> Result<()> {
        let obj = record
            .as_object()
            .ok_or_else(|| Error::InvalidRecord("record must be an object".into()))?;

        for field in &self.fields {
            field.validate(obj.get(&field.name))?;
        }

        Ok(())
    }
}

/// All record families known to a deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub families: HashMap<FamilyName, FamilySchema>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a family to the schema.
    pub fn add_family(&mut self, family: FamilySchema) -> &mut Self {
        self.families.insert(family.name.clone(), family);
        self
    }

    /// Builder-style method to add a family.
    pub fn with_family(mut self, family: FamilySchema) -> Self {
        self.add_family(family);
        self
    }

    /// Get a family schema by name.
    pub fn family(&self, name: &str) -> Result<&FamilySchema> {
        self.families
            .get(name)
            .ok_or_else(|| Error::FamilyNotFound(name.to_string()))
    }

    /// Family names in alphabetical order.
    pub fn family_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.families.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Check that `key` names a sortable field of `family`.
    pub fn validate_sort_key(&self, family: &str, key: &str) -> Result<()> {
        let schema = self.family(family)?;
        if schema.has_field(key) {
            Ok(())
        } else {
            Err(Error::UnknownField {
                family: family.to_string(),
                field: key.to_string(),
            })
        }
    }
}
