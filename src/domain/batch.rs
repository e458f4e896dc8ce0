//! Batch configuration domain models.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::AppError;
use crate::domain::outcome::{Outcome, ScheduleHeader};

/// Configuration for one bulk-submission batch, loaded from a TOML file.
///
/// Every section is optional; missing values fall back to the built-in
/// demonstration batch (a CRIME LOWER schedule of `INVC` outcomes), so the
/// tool produces a complete submission with no configuration at all.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchConfig {
    /// Output filename for the generated submission.
    #[serde(default = "default_output")]
    pub output: String,
    /// Number of outcome records to generate.
    #[serde(default = "default_outcomes")]
    pub outcomes: u32,
    /// Office and schedule identifiers.
    #[serde(default)]
    pub schedule: ScheduleConfig,
    /// UFN counter settings.
    #[serde(default)]
    pub ufn: UfnConfig,
    /// Outcome template applied to every record.
    #[serde(default)]
    pub template: TemplateConfig,
}

impl BatchConfig {
    /// Load a batch configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Err(AppError::ConfigNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            outcomes: default_outcomes(),
            schedule: ScheduleConfig::default(),
            ufn: UfnConfig::default(),
            template: TemplateConfig::default(),
        }
    }
}

fn default_output() -> String {
    "outcomes.xml".to_string()
}

fn default_outcomes() -> u32 {
    2001
}

/// Office account and schedule identifiers.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleConfig {
    /// Office account number in `0A123B` format.
    #[serde(default = "default_account")]
    pub account: String,
    /// Schedule submission period, e.g. `AUG-2018`.
    #[serde(default = "default_submission_period")]
    pub submission_period: String,
    /// Area of Law, e.g. `CRIME LOWER`.
    #[serde(default = "default_area_of_law")]
    pub area_of_law: String,
    /// Schedule reference.
    #[serde(default = "default_schedule_number")]
    pub schedule_number: String,
}

impl ScheduleConfig {
    pub fn header(&self) -> ScheduleHeader {
        ScheduleHeader::new(
            &self.account,
            &self.submission_period,
            &self.area_of_law,
            &self.schedule_number,
        )
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            account: default_account(),
            submission_period: default_submission_period(),
            area_of_law: default_area_of_law(),
            schedule_number: default_schedule_number(),
        }
    }
}

fn default_account() -> String {
    "0W160B".to_string()
}

fn default_submission_period() -> String {
    "AUG-2018".to_string()
}

fn default_area_of_law() -> String {
    "CRIME LOWER".to_string()
}

fn default_schedule_number() -> String {
    "CRM/0W160B/19".to_string()
}

/// UFN counter settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UfnConfig {
    /// Day the sequence starts on.
    #[serde(default = "default_start_day")]
    pub start_day: u32,
    /// Fixed `MMYY` fragment of every generated UFN.
    #[serde(default = "default_month_year")]
    pub month_year: String,
}

impl Default for UfnConfig {
    fn default() -> Self {
        Self { start_day: default_start_day(), month_year: default_month_year() }
    }
}

fn default_start_day() -> u32 {
    1
}

fn default_month_year() -> String {
    "0318".to_string()
}

/// Outcome template applied to every generated record.
///
/// Items are an array of tables (`[[template.item]]`) so the order of
/// `<outcomeItem>` elements in the output is explicit.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateConfig {
    /// Matter type, e.g. `INVC`.
    #[serde(default = "default_matter_type")]
    pub matter_type: String,
    /// Outcome items in output order.
    #[serde(default = "default_items", rename = "item")]
    pub items: Vec<ItemConfig>,
}

impl TemplateConfig {
    /// Build the template outcome the batch derives each record from.
    pub fn outcome(&self) -> Outcome {
        let mut outcome = Outcome::new(&self.matter_type);
        for item in &self.items {
            outcome = outcome.with_item(&item.name, &item.value);
        }
        outcome
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self { matter_type: default_matter_type(), items: default_items() }
    }
}

fn default_matter_type() -> String {
    "INVC".to_string()
}

/// One outcome item of the template.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemConfig {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

fn default_items() -> Vec<ItemConfig> {
    [
        ("CLIENT_FORENAME", "A"),
        ("CLIENT_SURNAME", "NOTREAL"),
        ("GENDER", "F"),
        ("ETHNICITY", "99"),
        ("DISABILITY", "UKN"),
        ("UFN", "060218/001"),
        ("OUTCOME_CODE", "CN04"),
        ("CRIME_MATTER_TYPE", "7"),
        ("PROFIT_COST", "12.34"),
        ("VAT_INDICATOR", "Y"),
        ("DISBURSEMENTS_AMOUNT", "0.00"),
        ("DISBURSEMENTS_VAT", "0.00"),
        ("TRAVEL_COSTS", "7.89"),
        ("TRAVEL_WAITING_COSTS", "0.00"),
        ("WORK_CONCLUDED_DATE", "20/01/2019"),
        ("NO_OF_SUSPECTS", "1"),
        ("NO_OF_POLICE_STATION", "1"),
        ("POLICE_STATION", "RD026"),
        ("DUTY_SOLICITOR", "Y"),
        ("YOUTH_COURT", "N"),
        ("SCHEME_ID", "1136"),
        ("MAAT_ID", ""),
        ("DSCC_NUMBER", "180207780A"),
        ("PA_NUMBER", ""),
    ]
    .into_iter()
    .map(|(name, value)| ItemConfig { name: name.to_string(), value: value.to_string() })
    .collect()
}
