//! Localized labels for the grid, the lists and the clipboard text.
//!
//! English is the default. Burmese reproduces the labels of the paper
//! register the tool replaces, including Burmese digits in dates.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    My,
}

const MY_DIGITS: [char; 10] = ['၀', '၁', '၂', '၃', '၄', '၅', '၆', '၇', '၈', '၉'];

const MY_MONTHS: [&str; 12] = [
    "ဇန်", "ဖေ", "မတ်", "ဧပြီ", "မေ", "ဇွန်", "ဇူ", "ဩ", "စက်", "အောက်", "နို", "ဒီ",
];

impl Locale {
    /// Parse a config/CLI code; unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "my" | "mm" | "burmese" => Locale::My,
            _ => Locale::En,
        }
    }

    pub fn section_header(&self, section: u32) -> String {
        match self {
            Locale::En => format!("Section - {section}"),
            Locale::My => format!("အတန်း - {section}"),
        }
    }

    pub fn list_entry(&self, section: u32, seat: u32, name: &str) -> String {
        match self {
            Locale::En => format!("Section {section}, Seat {seat}: {name}"),
            Locale::My => format!("အတန်း {section}၊ ခုံ {seat}: {name}"),
        }
    }

    pub fn absent_title(&self) -> &'static str {
        match self {
            Locale::En => "Absent",
            Locale::My => "ပျက်ကွက်သူများ",
        }
    }

    pub fn on_leave_title(&self) -> &'static str {
        match self {
            Locale::En => "On leave",
            Locale::My => "ခွင့်ရှိသူများ",
        }
    }

    pub fn absent_empty(&self) -> &'static str {
        match self {
            Locale::En => "No absentees.",
            Locale::My => "ပျက်ကွက်သူ မရှိပါ။",
        }
    }

    pub fn on_leave_empty(&self) -> &'static str {
        match self {
            Locale::En => "Nobody is on leave.",
            Locale::My => "ခွင့်ရှိသူ မရှိပါ။",
        }
    }

    pub fn absent_clipboard_label(&self) -> &'static str {
        match self {
            Locale::En => "Absent list",
            Locale::My => "ပျက်ကွက်စာရင်း",
        }
    }

    pub fn on_leave_clipboard_label(&self) -> &'static str {
        match self {
            Locale::En => "Leave list",
            Locale::My => "ခွင့်စာရင်း",
        }
    }

    pub fn withdrawn_marker(&self) -> &'static str {
        match self {
            Locale::En => "left",
            Locale::My => "ထွက်သွား",
        }
    }

    pub fn load_error(&self) -> &'static str {
        match self {
            Locale::En => "Error while reading the roster CSV file",
            Locale::My => "CSV ဖိုင်ဖတ်ရာတွင် အမှားဖြစ်သည်",
        }
    }

    /// Date shown next to list headers and in the clipboard text.
    pub fn format_date(&self, date: NaiveDate) -> String {
        match self {
            Locale::En => date.format("%d %b %Y").to_string(),
            Locale::My => {
                let month = MY_MONTHS[date.month0() as usize];
                format!(
                    "{} {} ရက်၊ {}",
                    month,
                    burmese_digits(date.day()),
                    burmese_digits(date.year())
                )
            }
        }
    }
}

fn burmese_digits<N: ToString>(n: N) -> String {
    n.to_string()
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => MY_DIGITS[d as usize],
            None => c,
        })
        .collect()
}
