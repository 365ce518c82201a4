//! Unit tests for CheckError and ErrorKind

use core_types::{CheckError, CheckResult, ErrorKind, InstanceOfError, ParseTagError, TypeTag};

#[cfg(test)]
mod error_kind_tests {
    use super::*;

    #[test]
    fn test_error_kind_names() {
        assert_eq!(ErrorKind::MissingParameter.name(), "MissingParameterError");
        assert_eq!(ErrorKind::TypeMismatch.name(), "TypeMismatchError");
        assert_eq!(ErrorKind::NotAllowed.name(), "NotAllowedError");
        assert_eq!(ErrorKind::InvalidSpec.name(), "InvalidSpecError");
    }

    #[test]
    fn test_error_kind_display_matches_name() {
        assert_eq!(ErrorKind::NotAllowed.to_string(), ErrorKind::NotAllowed.name());
    }

    #[test]
    fn test_error_kind_copy_and_eq() {
        let kind = ErrorKind::TypeMismatch;
        let copy = kind;
        assert_eq!(kind, copy);
        assert_ne!(kind, ErrorKind::InvalidSpec);
    }
}

#[cfg(test)]
mod check_error_tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(CheckError::missing("m").kind, ErrorKind::MissingParameter);
        assert_eq!(CheckError::type_mismatch("t").kind, ErrorKind::TypeMismatch);
        assert_eq!(CheckError::not_allowed("n").kind, ErrorKind::NotAllowed);
        assert_eq!(CheckError::invalid_spec("i").kind, ErrorKind::InvalidSpec);
    }

    #[test]
    fn test_display_is_message_only() {
        let err = CheckError::type_mismatch("Expected parameter \"x\" to be String, got Number.");
        assert_eq!(err.to_string(), "Expected parameter \"x\" to be String, got Number.");
    }

    #[test]
    fn test_propagates_with_question_mark() {
        fn inner() -> CheckResult<()> {
            Err(CheckError::missing("gone"))
        }
        fn outer() -> CheckResult<u8> {
            inner()?;
            Ok(1)
        }
        assert_eq!(outer().unwrap_err().message, "gone");
    }

    #[test]
    fn test_boxes_as_std_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(CheckError::not_allowed("nope"));
        assert_eq!(boxed.to_string(), "nope");
    }
}

#[cfg(test)]
mod auxiliary_error_tests {
    use super::*;

    #[test]
    fn test_parse_tag_error() {
        let err = "Widget".parse::<TypeTag>().unwrap_err();
        assert_eq!(err, ParseTagError("Widget".to_string()));
    }

    #[test]
    fn test_instance_of_error_names_target() {
        let err = InstanceOfError {
            target: "cb".to_string(),
        };
        assert!(err.to_string().contains("cb"));
    }
}
