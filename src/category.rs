//! Motor categories
//!
//! The closed set of motor shapes the dashboard supports. Each category owns
//! one feature table and one family of column sets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use store_object::{RecordTable, StoreError, TableInfo};

use crate::models::{UniformSpeedExternalFeature, UniformSpeedTensionFeature, VariableSpeedPhase3Feature};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotorCategory {
    /// Uniform speed, three phase, one external bearing (`u3e`)
    SingleBearingUniform,
    /// Uniform speed, three phase, external main and tension bearings (`u3t`)
    TensionBearingUniform,
    /// Variable speed, three phase (`v3`)
    VariableThreePhase,
}

impl MotorCategory {
    pub const ALL: [MotorCategory; 3] = [
        MotorCategory::SingleBearingUniform,
        MotorCategory::TensionBearingUniform,
        MotorCategory::VariableThreePhase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MotorCategory::SingleBearingUniform => "single-bearing-uniform",
            MotorCategory::TensionBearingUniform => "tension-bearing-uniform",
            MotorCategory::VariableThreePhase => "variable-three-phase",
        }
    }

    /// Short code stored in `motor.category`
    pub fn code(&self) -> &'static str {
        match self {
            MotorCategory::SingleBearingUniform => "u3e",
            MotorCategory::TensionBearingUniform => "u3t",
            MotorCategory::VariableThreePhase => "v3",
        }
    }

    pub fn is_uniform_speed(&self) -> bool {
        !matches!(self, MotorCategory::VariableThreePhase)
    }

    /// Table holding this category's features and diagnoses
    pub fn feature_table(&self) -> &'static TableInfo {
        match self {
            MotorCategory::SingleBearingUniform => UniformSpeedExternalFeature::table(),
            MotorCategory::TensionBearingUniform => UniformSpeedTensionFeature::table(),
            MotorCategory::VariableThreePhase => VariableSpeedPhase3Feature::table(),
        }
    }
}

impl FromStr for MotorCategory {
    type Err = StoreError;

    /// Accepts the long tag or the stored code; anything else is `UnknownCategory`
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        MotorCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == tag || category.code() == tag)
            .ok_or_else(|| StoreError::UnknownCategory(tag.to_string()))
    }
}

impl fmt::Display for MotorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags_and_codes() {
        for category in MotorCategory::ALL {
            assert_eq!(category.as_str().parse::<MotorCategory>().unwrap(), category);
            assert_eq!(category.code().parse::<MotorCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_tag_is_not_defaulted() {
        for tag in ["", "u3", "U3E", "v1", "single_bearing_uniform"] {
            let err = tag.parse::<MotorCategory>().unwrap_err();
            assert!(matches!(err, StoreError::UnknownCategory(ref t) if t == tag));
            assert!(err.is_client_error());
        }
    }

    #[test]
    fn test_feature_tables() {
        assert_eq!(
            MotorCategory::SingleBearingUniform.feature_table().name,
            "uniform_speed_external_feature"
        );
        assert_eq!(
            MotorCategory::TensionBearingUniform.feature_table().name,
            "uniform_speed_tension_feature"
        );
        assert_eq!(
            MotorCategory::VariableThreePhase.feature_table().name,
            "variable_speed_phase3_feature"
        );
        assert!(MotorCategory::ALL
            .iter()
            .all(|c| c.feature_table().timestamp_column == Some("acq_time")));
    }

    #[test]
    fn test_serde_uses_long_tags() {
        let json = serde_json::to_string(&MotorCategory::TensionBearingUniform).unwrap();
        assert_eq!(json, "\"tension-bearing-uniform\"");
    }
}
