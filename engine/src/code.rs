//! Sequential record codes of the form `PREFIX-NNNN`.

use serde::{Deserialize, Serialize};

/// Minimum number of digits in a generated code.
pub const CODE_WIDTH: usize = 4;

/// Numeric suffix of `code` if it is exactly `{prefix}-{digits}`.
fn code_number(prefix: &str, code: &str) -> Option<u64> {
    let digits = code.strip_prefix(prefix)?.strip_prefix('-')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Suffixes too large for u64 are treated like any other foreign code
    digits.parse().ok()
}

fn format_code(prefix: &str, number: u64) -> String {
    format!("{}-{:0width$}", prefix, number, width = CODE_WIDTH)
}

/// Next code after every `{prefix}-NNNN` in `existing`.
///
/// Codes that do not follow the pattern are ignored. With no matches the
/// sequence starts at 1.
///
/// This reads a snapshot: two callers with the same `existing` get the same
/// code. Use a [`CodeSequence`] behind a single writer to hand out codes
/// that must not collide.
pub fn next_code<I, S>(prefix: &str, existing: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    CodeSequence::seeded(prefix, existing).peek()
}

/// A monotonic code counter for one prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSequence {
    prefix: String,
    last: u64,
}

impl CodeSequence {
    /// Start an empty sequence.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            last: 0,
        }
    }

    /// Start a sequence after the highest matching code in `existing`.
    pub fn seeded<I, S>(prefix: impl Into<String>, existing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sequence = Self::new(prefix);
        for code in existing {
            sequence.observe(code.as_ref());
        }
        sequence
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Highest number seen or allocated so far.
    pub fn last(&self) -> u64 {
        self.last
    }

    /// Account for a code allocated elsewhere. Foreign codes are ignored.
    pub fn observe(&mut self, code: &str) {
        if let Some(n) = code_number(&self.prefix, code) {
            self.last = self.last.max(n);
        }
    }

    /// The code [`CodeSequence::allocate`] would return next.
    pub fn peek(&self) -> String {
        format_code(&self.prefix, self.last.saturating_add(1))
    }

    /// Take the next code.
    pub fn allocate(&mut self) -> String {
        self.last = self.last.saturating_add(1);
        format_code(&self.prefix, self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_code() {
        assert_eq!(next_code("CHEM", Vec::<String>::new()), "CHEM-0001");
    }

    #[test]
    fn follows_highest() {
        assert_eq!(next_code("CHEM", ["CHEM-0001", "CHEM-0002"]), "CHEM-0003");
    }

    #[test]
    fn ignores_order_and_garbage() {
        assert_eq!(
            next_code("DOC", ["DOC-0009", "DOC-0003", "garbage"]),
            "DOC-0010"
        );
    }

    #[test]
    fn ignores_other_prefixes_and_malformed_suffixes() {
        let codes = [
            "DOCX-0050",
            "DRV-0077",
            "DOC-",
            "DOC-12a",
            "DOC--5",
            "DOC-+7",
            "doc-0099",
            "DOC-0002 ",
            "DOC-99999999999999999999999",
        ];
        assert_eq!(next_code("DOC", codes), "DOC-0001");
    }

    #[test]
    fn wide_numbers_are_not_truncated() {
        assert_eq!(next_code("CHEM", ["CHEM-0041"]), "CHEM-0042");
        assert_eq!(next_code("CHEM", ["CHEM-10041"]), "CHEM-10042");
        assert_eq!(next_code("CHEM", ["CHEM-9999"]), "CHEM-10000");
    }

    #[test]
    fn unpadded_codes_count() {
        assert_eq!(next_code("RTE", ["RTE-7"]), "RTE-0008");
    }

    #[test]
    fn sequence_allocates_without_collisions() {
        let mut seq = CodeSequence::seeded("DEP", ["DEP-0004"]);
        assert_eq!(seq.peek(), "DEP-0005");
        assert_eq!(seq.allocate(), "DEP-0005");
        assert_eq!(seq.allocate(), "DEP-0006");
        assert_eq!(seq.last(), 6);
    }

    #[test]
    fn sequence_observes_external_codes() {
        let mut seq = CodeSequence::new("VEH");
        seq.observe("VEH-0010");
        seq.observe("VEH-0003");
        seq.observe("PRD-0100");
        assert_eq!(seq.allocate(), "VEH-0011");
        assert_eq!(seq.prefix(), "VEH");
    }
}
