//! Per-family record lists and code allocation.

use chrono::{DateTime, SecondsFormat, Utc};
use dashmap::DashMap;
use depot_engine::{
    error::Result, schema::SYSTEM_FIELDS, CodeSequence, Error, FamilyName, IdAllocator, Schema,
};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::sync::Arc;

/// Records of one family and the counter its codes come from.
#[derive(Debug)]
struct FamilyRecords {
    records: Vec<Value>,
    codes: CodeSequence,
    /// Every code held by `records`
    taken: HashSet<String>,
}

impl FamilyRecords {
    fn push(&mut self, code: String, record: Value) {
        self.taken.insert(code);
        self.records.push(record);
    }
}

/// Overview of one family for the dashboard's navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilySummary {
    pub name: FamilyName,
    pub code_prefix: String,
    pub count: usize,
    pub next_code: String,
    /// Field allowlist the dashboard should search with
    pub search_fields: Vec<String>,
}

/// All master data held by the server.
///
/// Each family sits behind its own map entry lock. Code allocation and the
/// insert that uses the code happen under that lock, so concurrent creates
/// in one family never see the same code.
pub struct Registry {
    schema: Schema,
    families: DashMap<FamilyName, FamilyRecords>,
    ids: Arc<dyn IdAllocator>,
}

impl Registry {
    /// Create an empty registry for every family in `schema`.
    pub fn new(schema: Schema, ids: Arc<dyn IdAllocator>) -> Self {
        let families = DashMap::new();
        for (name, family) in &schema.families {
            families.insert(
                name.clone(),
                FamilyRecords {
                    records: Vec::new(),
                    codes: CodeSequence::new(family.code_prefix.clone()),
                    taken: HashSet::new(),
                },
            );
        }

        Self {
            schema,
            families,
            ids,
        }
    }

    /// Create a new registry wrapped in Arc for sharing.
    pub fn new_shared(schema: Schema, ids: Arc<dyn IdAllocator>) -> Arc<Self> {
        Arc::new(Self::new(schema, ids))
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Summaries of every family, by name.
    pub fn summaries(&self) -> Vec<FamilySummary> {
        self.schema
            .family_names()
            .into_iter()
            .filter_map(|name| {
                let family = self.schema.family(name).ok()?;
                let entry = self.families.get(name)?;
                Some(FamilySummary {
                    name: name.to_string(),
                    code_prefix: family.code_prefix.clone(),
                    count: entry.records.len(),
                    next_code: entry.codes.peek(),
                    search_fields: family.searchable_fields(),
                })
            })
            .collect()
    }

    /// Every record of `family`, in insertion order.
    pub fn records(&self, family: &str) -> Result<Vec<Value>> {
        self.families
            .get(family)
            .map(|entry| entry.records.clone())
            .ok_or_else(|| Error::FamilyNotFound(family.to_string()))
    }

    /// The code the next create in `family` will receive.
    pub fn peek_code(&self, family: &str) -> Result<String> {
        self.families
            .get(family)
            .map(|entry| entry.codes.peek())
            .ok_or_else(|| Error::FamilyNotFound(family.to_string()))
    }

    /// Validate and store a new record, assigning its id, code and
    /// creation time. Client-supplied values for those are discarded.
    pub fn create(
        &self,
        family: &str,
        mut body: Map<String, Value>,
        now: DateTime<Utc>,
    ) -> Result<Value> {
        let schema = self.schema.family(family)?;
        for field in SYSTEM_FIELDS {
            body.remove(field);
        }

        let mut record = Value::Object(body);
        schema.validate_record(&record)?;

        let mut entry = self
            .families
            .get_mut(family)
            .ok_or_else(|| Error::FamilyNotFound(family.to_string()))?;
        let code = entry.codes.allocate();
        tracing::debug!(family, code = %code, "allocated record code");

        if let Some(obj) = record.as_object_mut() {
            obj.insert("id".into(), Value::String(self.ids.next_id()));
            obj.insert("code".into(), Value::String(code.clone()));
            obj.insert(
                "createdAt".into(),
                Value::String(now.to_rfc3339_opts(SecondsFormat::Millis, true)),
            );
        }

        entry.push(code, record.clone());
        Ok(record)
    }

    /// Advance `family`'s sequence past `codes` without storing anything.
    ///
    /// Bulk imports call this with every code they carry before importing,
    /// so records imported without a code are numbered after all of them.
    pub fn reserve_codes<'c>(
        &self,
        family: &str,
        codes: impl IntoIterator<Item = &'c str>,
    ) -> Result<()> {
        let mut entry = self
            .families
            .get_mut(family)
            .ok_or_else(|| Error::FamilyNotFound(family.to_string()))?;
        for code in codes {
            entry.codes.observe(code);
        }
        Ok(())
    }

    /// Store an existing record as-is, filling in an id or code only when
    /// it has none. Its code advances the family's sequence. A code the
    /// family already holds is rejected.
    pub fn import(&self, family: &str, mut record: Value) -> Result<Value> {
        let schema = self.schema.family(family)?;
        schema.validate_record(&record)?;

        let mut entry = self
            .families
            .get_mut(family)
            .ok_or_else(|| Error::FamilyNotFound(family.to_string()))?;

        let obj = record
            .as_object_mut()
            .ok_or_else(|| Error::InvalidRecord("record must be an object".into()))?;

        if !obj.get("id").is_some_and(Value::is_string) {
            obj.insert("id".into(), Value::String(self.ids.next_id()));
        }

        let code = match obj.get("code").and_then(Value::as_str) {
            Some(code) if entry.taken.contains(code) => {
                return Err(Error::InvalidRecord(format!(
                    "duplicate code '{}' in {}",
                    code, family
                )));
            }
            Some(code) => {
                entry.codes.observe(code);
                code.to_string()
            }
            None => {
                let code = entry.codes.allocate();
                obj.insert("code".into(), Value::String(code.clone()));
                code
            }
        };

        entry.push(code, record.clone());
        Ok(record)
    }
}
