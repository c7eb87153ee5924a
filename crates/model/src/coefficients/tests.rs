#[cfg(test)]
mod tests {
    use crate::attributes::{
        Accreditation, Attribute, ContinuousAttribute, DeliveryMethod, Location, TrainingLevel,
    };
    use crate::coefficients::file::parse_config;
    use crate::coefficients::{CoefficientFile, CoefficientTable};
    use crate::config::ModelConfig;
    use crate::error::ModelError;
    use crate::scenario::Scenario;
    use crate::uptake::ContinuousMode;

    const PUBLISHED_TABLE: &str = r#"{
        "coefficients": {
            "ASC": 1.0,
            "ASC_optout": 0.3,
            "TrainingLevel": { "Frontline": 0.6, "Intermediate": 0.3, "Advanced": 0.0 },
            "DeliveryMethod": { "In-Person": 0.5, "Online": 0.0, "Hybrid": 0.4 },
            "Accreditation": { "National": 0.4, "International": 0.8, "None": 0.0 },
            "Location": { "State-Level": 0.3, "Regional Centers": 0.2, "District-Level": 0.0 },
            "CohortSizeSlope": -0.0008,
            "CostSlope": -0.0001
        }
    }"#;

    #[test]
    fn test_default_table_values() {
        let table = CoefficientTable::default();
        assert_eq!(table.asc, 1.0);
        assert_eq!(table.asc_optout, 0.3);
        assert_eq!(table.weight(TrainingLevel::Frontline), 0.6);
        assert_eq!(table.weight(DeliveryMethod::Hybrid), 0.4);
        assert_eq!(table.weight(Accreditation::International), 0.8);
        assert_eq!(table.weight(Location::RegionalCenters), 0.2);
        assert_eq!(table.slope(ContinuousAttribute::CohortSize), -0.0008);
        assert_eq!(table.slope(ContinuousAttribute::Cost), -0.0001);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_reference_levels_carry_zero_weight() {
        let table = CoefficientTable::default();
        let reference = Scenario::reference(1000, 500.0);
        assert_eq!(table.discrete_utility(&reference), 0.0);
    }

    #[test]
    fn test_discrete_utility_sums_selected_levels() {
        let table = CoefficientTable::default();
        let scenario = Scenario {
            training_level: TrainingLevel::Frontline,
            delivery_method: DeliveryMethod::InPerson,
            accreditation: Accreditation::International,
            location: Location::StateLevel,
            cohort_size: 1000,
            cost_per_participant: 500.0,
        };
        assert!((table.discrete_utility(&scenario) - 2.2).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_non_negative_cost_slope() {
        let table = CoefficientTable {
            cost_slope: 0.0,
            ..CoefficientTable::default()
        };
        assert!(matches!(
            table.validate(),
            Err(ModelError::InvalidCoefficient { name: "CostSlope", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite_weight() {
        let mut table = CoefficientTable::default();
        table.location.set(Location::StateLevel, f64::INFINITY);
        assert!(matches!(
            table.validate(),
            Err(ModelError::InvalidCoefficient { name: "State-Level", .. })
        ));
    }

    #[test]
    fn test_published_table_parses_to_defaults() {
        let (table, config) = parse_config(PUBLISHED_TABLE).unwrap();
        assert_eq!(table, Some(CoefficientTable::default()));
        assert_eq!(config, ModelConfig::default());
    }

    #[test]
    fn test_file_round_trip_through_json() {
        let table = CoefficientTable {
            cost_slope: -0.0004,
            ..CoefficientTable::default()
        };
        let file = CoefficientFile::from(&table);
        let json = serde_json::to_string(&file).unwrap();
        assert!(json.contains("\"Regional Centers\""), "got: {json}");

        let parsed: CoefficientFile = serde_json::from_str(&json).unwrap();
        assert_eq!(CoefficientTable::try_from(parsed).unwrap(), table);
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let json = PUBLISHED_TABLE.replace("\"Hybrid\"", "\"Blended\"");
        match parse_config(&json) {
            Err(ModelError::UnknownLevel { attribute, level }) => {
                assert_eq!(attribute, Attribute::DeliveryMethod);
                assert_eq!(level, "Blended");
            }
            other => panic!("expected UnknownLevel, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_level_is_rejected() {
        let json = PUBLISHED_TABLE.replace(", \"District-Level\": 0.0", "");
        assert!(matches!(
            parse_config(&json),
            Err(ModelError::MissingLevel {
                attribute: Attribute::Location,
                level: "District-Level"
            })
        ));
    }

    #[test]
    fn test_positive_cost_slope_file_is_rejected() {
        let json = PUBLISHED_TABLE.replace("\"CostSlope\": -0.0001", "\"CostSlope\": 0.0001");
        assert!(matches!(
            parse_config(&json),
            Err(ModelError::InvalidCoefficient { name: "CostSlope", .. })
        ));
    }

    #[test]
    fn test_model_section_only() {
        let json = r#"{
            "model": {
                "continuous_mode": { "mode": "offset-from-baseline", "cohort_size": 1000.0, "cost": 500.0 },
                "wtp_scale": 100000.0
            }
        }"#;
        let (table, config) = parse_config(json).unwrap();
        assert!(table.is_none());
        assert_eq!(config.wtp_scale, 100_000.0);
        assert_eq!(
            config.continuous_mode,
            ContinuousMode::OffsetFromBaseline {
                cohort_size: 1000.0,
                cost: 500.0
            }
        );
    }

    #[test]
    fn test_non_positive_wtp_scale_is_rejected() {
        let json = r#"{ "model": { "wtp_scale": 0.0 } }"#;
        assert!(matches!(
            parse_config(json),
            Err(ModelError::InvalidCoefficient { name: "wtp_scale", .. })
        ));
    }

    #[test]
    fn test_non_positive_qaly_settings_are_rejected() {
        let json = r#"{ "model": { "reference_cohort": -250.0 } }"#;
        assert!(matches!(
            parse_config(json),
            Err(ModelError::InvalidCoefficient { name: "reference_cohort", .. })
        ));
        let json = r#"{ "model": { "value_per_qaly": 0.0 } }"#;
        assert!(matches!(
            parse_config(json),
            Err(ModelError::InvalidCoefficient { name: "value_per_qaly", .. })
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(parse_config("{ not json"), Err(ModelError::Parse(_))));
    }
}
