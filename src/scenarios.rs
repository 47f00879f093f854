//! Scenario registry
//!
//! The six ASCCP risk tables differ in shape, so each scenario keeps its own
//! ordered allow-list of column headers. Everything else in a sheet is ignored.

/// One risk-table shape and the headers kept from its spreadsheets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    /// 1-based scenario number, also the file-name prefix and output suffix
    pub index: u8,
    pub name: &'static str,
    pub kept_headers: &'static [&'static str],
}

pub static SCENARIOS: [Scenario; 6] = [
    Scenario {
        index: 1,
        name: "Pap management",
        kept_headers: &[
            "Age",
            "PAST HISTORY (most recent)",
            "Current HPV Result",
            "Current PAP Result",
            "CIN3+ Immediate risk (%)",
            "CIN3+ 5 year risk  (%)",
            "Management",
            "Management Confidence Probability",
            "Notes",
            "Figure",
        ],
    },
    Scenario {
        index: 2,
        name: "Pap management with prior abnormal Pap",
        kept_headers: &[
            "Age",
            "PAST HISTORY (previous 2)",
            "PAST HISTORY (most recent)",
            "Current HPV Result",
            "Current PAP Result",
            "CIN3+ Immediate risk (%)",
            "CIN3+ 5 year risk  (%)",
            "Management",
            "Management Confidence Probability",
            "Notes",
            "Figure",
        ],
    },
    Scenario {
        index: 3,
        name: "Post-colposcopy plan",
        kept_headers: &[
            "Age",
            "Referral Screen Result",
            "Biopsy Result",
            "CIN3+ Immediate risk (%)",
            "CIN3+ 5 year risk  (%)",
            "Management",
            "Notes",
        ],
    },
    Scenario {
        index: 4,
        name: "Pap after colposcopy",
        kept_headers: &[
            "Age",
            "Pre-Colpo Test Result",
            "Post-Colpo HPV Result - PAST HISTORY",
            "Post-Colpo Test Result - PAST HISTORY",
            "Post-Colpo Test Result - Prior PAST HISTORY",
            "Post-Colpo HPV Result - Prior PAST HISTORY",
            "Current HPV Result",
            "Current PAP Result",
            "CIN3+ Immediate risk (%)",
            "CIN3+ 5 year risk  (%)",
            "Management",
            "Management Confidence Probability",
            "Figure",
            "Notes",
        ],
    },
    // The published table lists the biopsy as CIN 3 but means CIN 2 or 3
    Scenario {
        index: 5,
        name: "Pap after treatment",
        kept_headers: &[
            "Age",
            "Test Result Before Biopsy",
            "Biopsy Result Before Treatment",
            "Current HPV Result",
            "Current PAP Result",
            "CIN3+ Immediate risk (%)",
            "CIN3+ 5 year risk  (%)",
            "Management",
            "Management Confidence Probability",
            "Notes",
        ],
    },
    Scenario {
        index: 6,
        name: "Post-treatment",
        kept_headers: &[
            "Age",
            "Biopsy Result Before Treatment",
            "Margins",
            "Treatment",
            "Management",
            "Notes",
        ],
    },
];

impl Scenario {
    /// Look up a scenario by its 1-based number
    pub fn by_index(index: u8) -> Option<&'static Scenario> {
        SCENARIOS.iter().find(|s| s.index == index)
    }

    pub fn all() -> &'static [Scenario] {
        &SCENARIOS
    }

    /// Highest scenario number; file prefixes above it match nothing
    pub fn count() -> u8 {
        SCENARIOS.len() as u8
    }

    /// The allow-listed spelling of a sheet header, or `None` when the
    /// scenario does not keep it.
    ///
    /// Whitespace runs are collapsed before comparing: the published sheets
    /// spell `CIN3+ 5 year risk  (%)` with two spaces, hand-made variant files
    /// usually with one. Both map to the registry's spelling, so every file of
    /// a scenario writes the same keys.
    pub fn kept_header(&self, header: &str) -> Option<&'static str> {
        let wanted = normalize_header(header);
        self.kept_headers
            .iter()
            .copied()
            .find(|kept| normalize_header(kept) == wanted)
    }

    /// Output file name, `scenario-{index}.json`
    pub fn output_file_name(&self) -> String {
        format!("scenario-{}.json", self.index)
    }
}

fn normalize_header(header: &str) -> String {
    header.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_one_based_and_contiguous() {
        for (i, scenario) in SCENARIOS.iter().enumerate() {
            assert_eq!(scenario.index as usize, i + 1);
            assert_eq!(Scenario::by_index(scenario.index), Some(scenario));
        }
        assert_eq!(Scenario::count(), 6);
        assert!(Scenario::by_index(0).is_none());
        assert!(Scenario::by_index(7).is_none());
    }

    #[test]
    fn test_scenario_specific_columns() {
        let screening = Scenario::by_index(1).unwrap();
        let colposcopy = Scenario::by_index(3).unwrap();

        assert!(screening.kept_header("Current PAP Result").is_some());
        assert!(screening.kept_header("Referral Screen Result").is_none());
        assert!(colposcopy.kept_header("Referral Screen Result").is_some());
        assert!(colposcopy.kept_header("Current PAP Result").is_none());
    }

    #[test]
    fn test_kept_header_ignores_whitespace_only() {
        let scenario = Scenario::by_index(1).unwrap();

        assert!(scenario.kept_header("CIN3+ 5 year risk  (%)").is_some());
        assert!(scenario.kept_header("CIN3+ 5 year risk (%)").is_some());
        assert!(scenario.kept_header(" Management ").is_some());
        assert!(scenario.kept_header("management").is_none());
        assert!(scenario.kept_header("CIN3+ 3 year risk (%)").is_none());
    }

    #[test]
    fn test_kept_header_returns_registry_spelling() {
        let scenario = Scenario::by_index(3).unwrap();

        assert_eq!(
            scenario.kept_header("CIN3+ 5 year risk (%)"),
            Some("CIN3+ 5 year risk  (%)")
        );
        assert_eq!(
            scenario.kept_header("CIN3+  5 year risk  (%) "),
            Some("CIN3+ 5 year risk  (%)")
        );
        assert_eq!(scenario.kept_header(" Management "), Some("Management"));
        assert_eq!(scenario.kept_header("Margins"), None);
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(
            Scenario::by_index(4).unwrap().output_file_name(),
            "scenario-4.json"
        );
    }
}
