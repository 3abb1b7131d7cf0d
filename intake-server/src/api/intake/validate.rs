//! Intake form validation
//!
//! Collects every failing rule into an ordered list of user-facing messages
//! (empty list = valid). Pure function of the raw form fields; nothing is
//! short-circuited except the serial-number length check, which only runs
//! when the field is non-empty.

use serde::Deserialize;
use shared::models::SubmissionCreate;

// ── Field limits ────────────────────────────────────────────────────

/// Problem description free text
pub const MAX_DESCRIPTION_LEN: usize = 300;

/// Device serial number
pub const MAX_SERIAL_LEN: usize = 64;

/// user_id schema bound (column width; the validator itself only checks
/// that the value is all digits)
pub const MAX_USER_ID_LEN: usize = 10;

/// Raw submitted form fields
///
/// Everything is optional at the wire level: a browser may omit any field,
/// and absent fields must surface as validation messages, not 422s.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntakeForm {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub problem_description: Option<String>,
    #[serde(default)]
    pub device_serial_number: Option<String>,
    #[serde(default)]
    pub light1: Option<String>,
    #[serde(default)]
    pub light2: Option<String>,
    #[serde(default)]
    pub light3: Option<String>,
}

impl IntakeForm {
    /// Convert a validated form into the create payload.
    ///
    /// Missing problem_description becomes the empty string (absence of the
    /// description is not an error; the record stores "").
    pub fn into_submission(self) -> SubmissionCreate {
        SubmissionCreate {
            user_id: self.user_id.unwrap_or_default(),
            problem_description: self.problem_description.unwrap_or_default(),
            device_serial_number: self.device_serial_number.unwrap_or_default(),
            light1: self.light1.unwrap_or_default(),
            light2: self.light2.unwrap_or_default(),
            light3: self.light3.unwrap_or_default(),
        }
    }
}

/// Validate the raw form fields, returning all failing messages in rule order.
pub fn validate(form: &IntakeForm) -> Vec<String> {
    let mut errors = Vec::new();

    // user_id: 必填且只能是数字
    let user_id_ok = form
        .user_id
        .as_deref()
        .is_some_and(|v| !v.is_empty() && v.chars().all(|c| c.is_ascii_digit()));
    if !user_id_ok {
        errors.push("Invalid user ID.".to_string());
    }

    // problem_description: 只限制长度，允许缺失 (按空串处理)
    if let Some(desc) = form.problem_description.as_deref()
        && desc.chars().count() > MAX_DESCRIPTION_LEN
    {
        errors.push("Problem description cannot exceed 300 characters.".to_string());
    }

    // device_serial_number: 必填；长度检查只在非空时进行，两条消息互斥
    match form.device_serial_number.as_deref() {
        None | Some("") => {
            errors.push("Device serial number is required.".to_string());
        }
        Some(serial) if serial.chars().count() > MAX_SERIAL_LEN => {
            errors.push("Device serial number cannot exceed 64 characters.".to_string());
        }
        Some(_) => {}
    }

    // 指示灯: 三个都必须选择；不区分缺的是哪一个
    let lights = [&form.light1, &form.light2, &form.light3];
    if lights
        .iter()
        .any(|l| l.as_deref().is_none_or(str::is_empty))
    {
        errors.push("Please select a status for all indicator lights.".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> IntakeForm {
        IntakeForm {
            user_id: Some("123".into()),
            problem_description: Some("My device is making weird noises".into()),
            device_serial_number: Some("24-X-125447-DC".into()),
            light1: Some("on".into()),
            light2: Some("on".into()),
            light3: Some("off".into()),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate(&valid_form()).is_empty());
    }

    #[test]
    fn test_non_digit_user_id() {
        let mut form = valid_form();
        form.user_id = Some("abc".into());
        assert_eq!(validate(&form), vec!["Invalid user ID."]);
    }

    #[test]
    fn test_missing_user_id() {
        let mut form = valid_form();
        form.user_id = None;
        assert_eq!(validate(&form), vec!["Invalid user ID."]);
    }

    #[test]
    fn test_empty_user_id() {
        let mut form = valid_form();
        form.user_id = Some(String::new());
        assert_eq!(validate(&form), vec!["Invalid user ID."]);
    }

    #[test]
    fn test_description_length_boundary() {
        let mut form = valid_form();
        form.problem_description = Some("a".repeat(300));
        assert!(validate(&form).is_empty());

        form.problem_description = Some("a".repeat(301));
        assert_eq!(
            validate(&form),
            vec!["Problem description cannot exceed 300 characters."]
        );
    }

    #[test]
    fn test_missing_description_is_allowed() {
        let mut form = valid_form();
        form.problem_description = None;
        assert!(validate(&form).is_empty());
        assert_eq!(form.into_submission().problem_description, "");
    }

    #[test]
    fn test_empty_serial_reports_only_required() {
        let mut form = valid_form();
        form.device_serial_number = Some(String::new());
        // 必填错误与长度错误互斥
        assert_eq!(validate(&form), vec!["Device serial number is required."]);
    }

    #[test]
    fn test_long_serial() {
        let mut form = valid_form();
        form.device_serial_number = Some("X".repeat(65));
        assert_eq!(
            validate(&form),
            vec!["Device serial number cannot exceed 64 characters."]
        );

        form.device_serial_number = Some("X".repeat(64));
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn test_one_missing_light() {
        let mut form = valid_form();
        form.light2 = None;
        assert_eq!(
            validate(&form),
            vec!["Please select a status for all indicator lights."]
        );
    }

    #[test]
    fn test_empty_light_counts_as_missing() {
        let mut form = valid_form();
        form.light3 = Some(String::new());
        assert_eq!(
            validate(&form),
            vec!["Please select a status for all indicator lights."]
        );
    }

    #[test]
    fn test_multiple_errors_collected_in_rule_order() {
        let form = IntakeForm {
            user_id: Some("abc".into()),
            problem_description: Some("a".repeat(301)),
            device_serial_number: Some("X".repeat(65)),
            light1: Some("on".into()),
            light2: None,
            light3: Some("off".into()),
        };
        assert_eq!(
            validate(&form),
            vec![
                "Invalid user ID.",
                "Problem description cannot exceed 300 characters.",
                "Device serial number cannot exceed 64 characters.",
                "Please select a status for all indicator lights.",
            ]
        );
    }
}
