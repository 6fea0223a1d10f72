//! Workshop registration form.

use crate::models::{Workshop, WorkshopRegistrationRequest};
use crate::validation::{collect, validate_email, validate_phone, validate_required, FieldError};

/// Experience levels offered in the registration form.
pub const EXPERIENCE_LEVELS: &[&str] = &["beginner", "intermediate", "professional"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkshopForm {
    pub workshop_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: String,
}

impl WorkshopForm {
    pub fn for_workshop(workshop_id: &str) -> Self {
        Self {
            workshop_id: workshop_id.to_string(),
            experience: EXPERIENCE_LEVELS[0].to_string(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<WorkshopRegistrationRequest, Vec<FieldError>> {
        let errors = collect([
            validate_required("workshop_id", &self.workshop_id),
            validate_required("name", &self.name),
            validate_email(&self.email),
            validate_phone(&self.phone),
        ]);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(WorkshopRegistrationRequest {
            workshop_id: self.workshop_id.trim().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            experience: self.experience.clone(),
        })
    }
}

pub fn has_seats(workshop: &Workshop) -> bool {
    workshop.seats_left > 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn valid_registration() {
        let mut form = WorkshopForm::for_workshop("w1");
        form.name = " Riya ".into();
        form.email = "riya@example.com".into();
        form.phone = "9123456780".into();
        let request = form.validate().unwrap();
        assert_eq!(request.name, "Riya");
        assert_eq!(request.experience, "beginner");
    }

    #[test]
    fn rejects_missing_fields() {
        let errors = WorkshopForm::for_workshop("w1").validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, ["name", "email", "phone"]);
    }

    #[test]
    fn sold_out_workshop_has_no_seats() {
        let mut workshop = Workshop {
            id: "w1".into(),
            title: "Saree draping".into(),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2030, 3, 1).unwrap(),
            seats_left: 0,
            fee: 1500,
            instructor: "Lata".into(),
        };
        assert!(!has_seats(&workshop));
        workshop.seats_left = 3;
        assert!(has_seats(&workshop));
    }
}
