#[cfg(test)]
mod tests {
    use crate::model::analysis::CompatibilityRating;
    use crate::model::user::{Gender, UserInput};
    use crate::usecase::report::{generate_report, KEEP_MOBILE, KEEP_NAME};

    fn ravi() -> UserInput {
        UserInput::new("Ravi Kumar", "15-08-1990", "9876543210", Gender::Male)
    }

    #[test]
    fn test_core_numbers_and_traces() {
        let report = generate_report(&ravi());
        let numbers = report.core_numbers;

        assert_eq!(numbers.mulank, 6);
        assert_eq!(numbers.bhagyank, 6);
        assert_eq!(numbers.name_number.compound, 25);
        assert_eq!(numbers.name_number.reduced, 7);
        assert_eq!(numbers.mobile_ank, 9);

        assert_eq!(report.calculations.mulank_calc, "Birth day 15 → 1+5 = 6");
        assert_eq!(report.calculations.bhagyank_calc, "15-08-1990 → 1+5+0+8+1+9+9+0 = 33 → 6");
        assert_eq!(report.calculations.mobile_calc, "9+8+7+6+5+4+3+2+1+0 = 45 → 9");
    }

    #[test]
    fn test_compatibility_summary() {
        let report = generate_report(&ravi());
        let summary = &report.compatibility;

        // 7 against root 6
        assert_eq!(summary.name_compatibility.rating, CompatibilityRating::Compatible);
        assert_eq!(summary.name_suggestions, vec!["Raavi", "Ravil", "Ravih"]);

        // 9 against root 6
        assert_eq!(summary.mobile_compatibility.rating, CompatibilityRating::HighlyCompatible);
        assert_eq!(summary.mobile_suggestions, vec![KEEP_MOBILE]);
    }

    #[test]
    fn test_analyses() {
        let report = generate_report(&ravi());

        assert_eq!(report.yog_analysis.len(), 1);
        assert_eq!(report.yog_analysis[0].combination, "(2,1)");

        assert_eq!(report.position_analysis.len(), 9);
        assert!(report.position_analysis.iter().all(|p| p.digit != 0));

        assert_eq!(report.harmony_score.score, 2);
        assert_eq!(report.harmony_score.stars, 3);

        let grids = &report.grid_analysis;
        assert_eq!(grids.dob_lo_shu.missing_numbers, vec![2, 3, 4, 6, 7]);
        assert_eq!(grids.dob_lo_shu.yog_presence, 44);
        assert_eq!(grids.dob_vedic.missing_numbers, grids.dob_lo_shu.missing_numbers);
        assert_eq!(grids.mobile_lo_shu.yog_presence, 100);
        assert!(grids.mobile_vedic.missing_numbers.is_empty());

        assert_eq!(report.dasha_yog.len(), 48);
        let lucky: Vec<u32> = report.lucky_numbers.iter().map(|l| l.number).collect();
        assert_eq!(lucky, vec![6, 7, 8, 9]);

        assert_eq!(report.talisman.recommendation, "6 Mukhi Rudraksha (based on your Mulank 6)");
        assert_eq!(report.universal_energies.married_life.compatible_numbers, vec![2, 3, 6, 9]);
    }

    #[test]
    fn test_fully_harmonious_input() {
        let input = UserInput::new("AB", "15-08-1990", "9876543210", Gender::Female);
        let report = generate_report(&input);

        assert_eq!(report.core_numbers.name_number.reduced, 3);
        assert_eq!(report.compatibility.name_suggestions, vec![KEEP_NAME]);
        assert_eq!(report.harmony_score.score, 4);
        assert_eq!(report.harmony_score.stars, 5);
    }

    #[test]
    fn test_report_is_deterministic() {
        assert_eq!(generate_report(&ravi()), generate_report(&ravi()));
    }

    #[test]
    fn test_unvalidated_input_still_produces_report() {
        let input = UserInput::new("Ravi", "xx-08-1990", "12345", Gender::Other);
        let report = generate_report(&input);

        assert_eq!(report.core_numbers.mulank, 0);
        assert_eq!(report.core_numbers.mobile_ank, 6);
        assert_eq!(
            report.compatibility.mobile_compatibility.rating,
            CompatibilityRating::Incompatible
        );
        assert_eq!(report.compatibility.mobile_suggestions, vec!["12301", "12310", "12319"]);
        assert_eq!(report.talisman.recommendation, "5 Mukhi Rudraksha (based on your Mulank 0)");
        assert_eq!(report.universal_energies.married_life.compatible_numbers, vec![1, 5, 7]);
    }

    #[test]
    fn test_json_contract_field_names() {
        let json = serde_json::to_value(generate_report(&ravi())).unwrap();

        assert_eq!(json["userInput"]["fullName"], "Ravi Kumar");
        assert_eq!(json["coreNumbers"]["nameNumber"]["compound"], 25);
        assert_eq!(json["compatibility"]["mobileCompatibility"]["rating"], "Highly Compatible");
        assert_eq!(json["gridAnalysis"]["dobLoShu"]["yogPresence"], 44);
        assert!(json["rudraksha"]["recommendation"].is_string());
        assert_eq!(json["dashaYog"].as_array().map(|a| a.len()), Some(48));
        assert_eq!(json["dashaYog"][0]["month"], "January");
        assert_eq!(json["dashaYog"][0]["monthNumber"], 1);
        assert!(json["dashaYog"][0].get("monthName").is_none());
    }
}
