/// Identifying envelope for a batch submission: the billing account and
/// schedule details of the reporting period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleHeader {
    /// Office account number, e.g. `0A123B`.
    pub account: String,
    /// Schedule submission period, e.g. `JAN-2015`.
    pub submission_period: String,
    /// Area of Law, e.g. `CRIME LOWER`.
    pub area_of_law: String,
    /// Schedule reference.
    pub schedule_number: String,
}

impl ScheduleHeader {
    pub fn new(
        account: impl Into<String>,
        submission_period: impl Into<String>,
        area_of_law: impl Into<String>,
        schedule_number: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            submission_period: submission_period.into(),
            area_of_law: area_of_law.into(),
            schedule_number: schedule_number.into(),
        }
    }
}

/// One billable-matter result entry, rendered as an `<outcome>` element with
/// nested `<outcomeItem>` children.
///
/// Items keep insertion order; that order is the output order. Values are
/// opaque text — field names and formats are checked by the external schema
/// validator, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    matter_type: String,
    items: Vec<(String, String)>,
}

impl Outcome {
    /// Create an outcome with no items for the given matter type, e.g. `INVC`.
    pub fn new(matter_type: impl Into<String>) -> Self {
        Self { matter_type: matter_type.into(), items: Vec::new() }
    }

    /// Return a copy with `name` set to `value`.
    ///
    /// An existing item is replaced in place, keeping its position; a new
    /// name is appended. Each derived record is an independent value — the
    /// source outcome is never mutated.
    pub fn with_item(&self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        let mut derived = self.clone();
        match derived.items.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => derived.items.push((name, value)),
        }
        derived
    }

    pub fn matter_type(&self) -> &str {
        &self.matter_type
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[(String, String)] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_keep_insertion_order() {
        let outcome = Outcome::new("INVC")
            .with_item("OUTCOME_CODE", "CN04")
            .with_item("PROFIT_COST", "12.34")
            .with_item("VAT_INDICATOR", "Y");

        let names: Vec<&str> = outcome.items().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["OUTCOME_CODE", "PROFIT_COST", "VAT_INDICATOR"]);
    }

    #[test]
    fn with_item_replaces_in_place() {
        let template = Outcome::new("INVC")
            .with_item("CLIENT_SURNAME", "NOTREAL")
            .with_item("UFN", "060218/001");

        let derived = template.with_item("CLIENT_SURNAME", "BFDDF");

        let names: Vec<&str> = derived.items().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["CLIENT_SURNAME", "UFN"]);
        assert_eq!(derived.items()[0].1, "BFDDF");
    }

    #[test]
    fn with_item_leaves_the_template_untouched() {
        let template = Outcome::new("INVC").with_item("CLIENT_SURNAME", "NOTREAL");
        let _derived = template.with_item("CLIENT_SURNAME", "CHANGED");

        assert_eq!(template.items()[0].1, "NOTREAL");
    }

    #[test]
    fn empty_values_are_preserved() {
        let outcome = Outcome::new("INVC").with_item("MAAT_ID", "");
        assert_eq!(outcome.items(), [("MAAT_ID".to_string(), String::new())]);
    }
}
