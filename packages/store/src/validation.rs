//! Client-side form checks shared by booking, workshop and contact forms.

use chrono::NaiveDate;
use thiserror::Error;

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub fn validate_required(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::new(field, "This field is required"));
    }
    Ok(())
}

/// Exactly ten ASCII digits after trimming.
pub fn validate_phone(value: &str) -> Result<(), FieldError> {
    let phone = value.trim();
    if phone.len() != 10 || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::new(
            "phone",
            "Phone number must be exactly 10 digits",
        ));
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<(), FieldError> {
    let email = value.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    };
    if !valid {
        return Err(FieldError::new("email", "Please enter a valid email"));
    }
    Ok(())
}

/// Parse an `<input type="date">` value.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, FieldError> {
    validate_required(field, value)?;
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| FieldError::new(field, "Please pick a valid date"))
}

/// Today is allowed; anything earlier is rejected.
pub fn validate_future_date(
    field: &'static str,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<(), FieldError> {
    if date < today {
        return Err(FieldError::new(field, "Date cannot be in the past"));
    }
    Ok(())
}

/// Run a batch of checks and collect every failure.
pub fn collect(checks: impl IntoIterator<Item = Result<(), FieldError>>) -> Vec<FieldError> {
    checks.into_iter().filter_map(Result::err).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_must_be_ten_digits() {
        assert!(validate_phone("9876543210").is_ok());
        assert!(validate_phone(" 9876543210 ").is_ok());
        assert!(validate_phone("987654321").is_err());
        assert!(validate_phone("98765432101").is_err());
        assert!(validate_phone("98765-4321").is_err());
        assert!(validate_phone("+919876543").is_err());
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn email_shape() {
        assert!(validate_email("bride@example.com").is_ok());
        assert!(validate_email("bride@example").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("a@b@c.com").is_err());
        assert!(validate_email("bride.example.com").is_err());
    }

    #[test]
    fn past_dates_rejected_today_allowed() {
        let today = NaiveDate::from_ymd_opt(2030, 5, 1).unwrap();
        assert!(validate_future_date("date", today, today).is_ok());
        assert!(validate_future_date("date", today.succ_opt().unwrap(), today).is_ok());
        let err = validate_future_date("date", today.pred_opt().unwrap(), today).unwrap_err();
        assert_eq!(err.field, "date");
    }

    #[test]
    fn date_parsing() {
        assert_eq!(
            parse_date("d", "2030-02-14").unwrap(),
            NaiveDate::from_ymd_opt(2030, 2, 14).unwrap()
        );
        assert!(parse_date("d", "").is_err());
        assert!(parse_date("d", "14/02/2030").is_err());
    }

    #[test]
    fn required_rejects_blank() {
        assert!(validate_required("name", "  ").is_err());
        assert!(validate_required("name", "Anita").is_ok());
    }
}
