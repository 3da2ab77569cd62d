#[cfg(test)]
mod model_tests {
    use crate::models::{DecomposedStep, Progress, Step, StepId, TextDirection, ValidationResult};

    fn create_test_step(completed: bool) -> Step {
        Step {
            id: StepId(7),
            description: "Sweep the floor".to_string(),
            completed,
        }
    }

    #[test]
    fn test_step_new_defaults_to_incomplete() {
        let step = Step::new(StepId(1), "Open the door");
        assert_eq!(step.id, StepId(1));
        assert_eq!(step.description, "Open the door");
        assert!(!step.completed);
    }

    #[test]
    fn test_step_toggle_is_an_involution() {
        let original = create_test_step(false);
        let mut step = original.clone();

        step.toggle();
        assert!(step.completed);
        assert_eq!(step.description, original.description);
        assert_eq!(step.id, original.id);

        step.toggle();
        assert_eq!(step, original);
    }

    #[test]
    fn test_step_display_checklist_line() {
        assert_eq!(format!("{}", create_test_step(false)), "- [ ] Sweep the floor");
        assert_eq!(format!("{}", create_test_step(true)), "- [x] Sweep the floor");
    }

    #[test]
    fn test_step_id_from_str() {
        assert_eq!("12".parse::<StepId>().unwrap(), StepId(12));
        assert_eq!(" #3 ".parse::<StepId>().unwrap(), StepId(3));
        assert!("abc".parse::<StepId>().is_err());
        assert!("-1".parse::<StepId>().is_err());
    }

    #[test]
    fn test_step_serializes_with_plain_id() {
        let json = serde_json::to_value(create_test_step(true)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "description": "Sweep the floor", "completed": true})
        );
    }

    #[test]
    fn test_validation_result_deserializes_camel_case() {
        let verdict: ValidationResult =
            serde_json::from_str(r#"{"isPlannable": false, "reason": "a question"}"#).unwrap();
        assert_eq!(verdict, ValidationResult::rejected("a question"));

        let verdict: ValidationResult =
            serde_json::from_str(r#"{"isPlannable": true, "reason": ""}"#).unwrap();
        assert_eq!(verdict, ValidationResult::plannable());
    }

    #[test]
    fn test_validation_result_requires_both_fields() {
        assert!(serde_json::from_str::<ValidationResult>(r#"{"isPlannable": true}"#).is_err());
        assert!(serde_json::from_str::<ValidationResult>(r#"{"reason": "x"}"#).is_err());
    }

    #[test]
    fn test_decomposed_step_requires_task() {
        let items: Vec<DecomposedStep> =
            serde_json::from_str(r#"[{"task": "One"}, {"task": "Two"}]"#).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].task, "Two");
        assert!(serde_json::from_str::<Vec<DecomposedStep>>(r#"[{"step": "One"}]"#).is_err());
    }

    #[test]
    fn test_progress_percentage_bounds() {
        assert_eq!(Progress::default().percentage(), 0.0);
        assert!(!Progress::default().is_complete());

        let all_done = Progress::new(4, 4);
        assert_eq!(all_done.percentage(), 100.0);
        assert!(all_done.is_complete());

        let partial = Progress::new(1, 4);
        assert_eq!(partial.percentage(), 25.0);
        assert_eq!(partial.remaining(), 3);

        for total in 0..6 {
            for completed in 0..=total {
                let p = Progress::new(completed, total).percentage();
                assert!((0.0..=100.0).contains(&p));
            }
        }
    }

    #[test]
    fn test_progress_display() {
        assert_eq!(format!("{}", Progress::new(2, 5)), "2 / 5 completed (40%)");
        assert_eq!(format!("{}", Progress::default()), "0 / 0 completed (0%)");
    }

    #[test]
    fn test_direction_detection() {
        assert_eq!(TextDirection::detect("clean the garage"), TextDirection::LeftToRight);
        assert_eq!(TextDirection::detect(""), TextDirection::LeftToRight);
        assert_eq!(TextDirection::detect("לנקות את המוסך"), TextDirection::RightToLeft);
        assert_eq!(TextDirection::detect("plan טיול"), TextDirection::RightToLeft);
        assert_eq!(TextDirection::detect("تنظيف المرآب"), TextDirection::RightToLeft);
        assert!(TextDirection::RightToLeft.is_rtl());
        assert_eq!(TextDirection::LeftToRight.as_str(), "ltr");
        assert_eq!(format!("{}", TextDirection::RightToLeft), "rtl");
    }
}
