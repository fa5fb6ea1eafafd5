use super::flag::{ActiveFlag, is_truthy};
use crate::sheet::CellValue;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

pub const GAMES_SHEET: &str = "Games";

pub const COL_WEEK_START: &str = "WeekStart";
pub const COL_TITLE: &str = "Title";
pub const COL_PROMPT: &str = "Prompt";
pub const COL_INSTRUCTIONS: &str = "Instructions";
pub const COL_INPUT_PLACEHOLDER: &str = "InputPlaceholder";
pub const COL_IS_ACTIVE: &str = "IsActive";

/// Header of the Games sheet, in bootstrap order.
pub const GAMES_COLUMNS: [&str; 6] = [
    COL_WEEK_START,
    COL_TITLE,
    COL_PROMPT,
    COL_INSTRUCTIONS,
    COL_INPUT_PLACEHOLDER,
    COL_IS_ACTIVE,
];

/// A currently playable game, as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveGame {
    pub week_start: String,
    pub title: String,
    pub prompt: String,
    pub instructions: String,
    pub input_placeholder: String,
}

/// A Games row as stored, with its flag normalized.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    /// 1-based sheet row, header being row 1.
    pub row: usize,
    pub week_start: String,
    pub title: String,
    pub prompt: String,
    pub instructions: String,
    pub input_placeholder: String,
    pub is_active: ActiveFlag,
}

/// Input for the out-of-band writer (`games add` / `games import`).
#[derive(Debug, Clone, Deserialize)]
pub struct NewGame {
    #[serde(rename = "WeekStart")]
    pub week_start: NaiveDate,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Prompt", default)]
    pub prompt: String,
    #[serde(rename = "Instructions", default)]
    pub instructions: String,
    #[serde(rename = "InputPlaceholder", default)]
    pub input_placeholder: String,
    #[serde(rename = "IsActive", default, deserialize_with = "flag_from_text")]
    pub is_active: bool,
}

fn flag_from_text<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    let raw = String::deserialize(d)?;
    Ok(is_truthy(&CellValue::Text(raw)))
}

impl NewGame {
    pub fn cell_for(&self, column: &str) -> CellValue {
        match column {
            COL_WEEK_START => CellValue::date(self.week_start),
            COL_TITLE => CellValue::text(self.title.as_str()),
            COL_PROMPT => CellValue::text(self.prompt.as_str()),
            COL_INSTRUCTIONS => CellValue::text(self.instructions.as_str()),
            COL_INPUT_PLACEHOLDER => CellValue::text(self.input_placeholder.as_str()),
            COL_IS_ACTIVE => CellValue::Bool(self.is_active),
            _ => CellValue::Empty,
        }
    }
}
