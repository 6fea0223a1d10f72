//! # Booking wizard and the booking → payment handoff
//!
//! [`BookingWizard`] is the multi-step booking form. Each step owns a subset of
//! the [`BookingForm`] fields and [`BookingWizard::next`] validates only those
//! before moving on, so the user sees errors for the page they are on. Leaving
//! the last step produces a [`BookingRequest`] ready to POST.
//!
//! | Step | Fields checked |
//! |------|----------------|
//! | [`BookingStep::Details`] | name, email, phone |
//! | [`BookingStep::Package`] | event date (not in the past), venue, package, guests |
//! | [`BookingStep::Review`] | everything again, then submit |
//!
//! Once the backend accepts the booking, a [`PaymentHandoff`] carries the
//! booking id and amount to the payment page in memory. Nothing about the
//! handoff is persisted: reloading the payment page means starting over.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Booking, BookingRequest, Workshop, WorkshopRegistration};
use crate::validation::{
    collect, parse_date, validate_email, validate_future_date, validate_phone, validate_required,
    FieldError,
};

/// Packages offered in the booking form: (key, label).
pub const PACKAGES: &[(&str, &str)] = &[
    ("silver", "Silver: bridal makeup"),
    ("gold", "Gold: makeup, hair and draping"),
    ("platinum", "Platinum: full wedding-day team"),
];

/// Raw form inputs, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingForm {
    pub service_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_date: String,
    pub venue: String,
    pub package: String,
    pub guests: String,
    pub notes: String,
}

impl BookingForm {
    pub fn for_service(service_id: &str) -> Self {
        Self {
            service_id: service_id.to_string(),
            ..Default::default()
        }
    }

    fn check_details(&self) -> Vec<FieldError> {
        collect([
            validate_required("name", &self.name),
            validate_email(&self.email),
            validate_phone(&self.phone),
        ])
    }

    fn check_package(&self, today: NaiveDate) -> Vec<FieldError> {
        let date = parse_date("event_date", &self.event_date)
            .and_then(|d| validate_future_date("event_date", d, today));
        let package = validate_required("package", &self.package).and_then(|_| {
            if PACKAGES.iter().any(|(key, _)| *key == self.package) {
                Ok(())
            } else {
                Err(FieldError::new("package", "Please choose a package"))
            }
        });
        collect([
            date,
            validate_required("venue", &self.venue),
            package,
            self.parse_guests().map(|_| ()),
        ])
    }

    fn parse_guests(&self) -> Result<Option<u32>, FieldError> {
        let raw = self.guests.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.parse::<u32>() {
            Ok(n) if n > 0 => Ok(Some(n)),
            _ => Err(FieldError::new("guests", "Guests must be a positive number")),
        }
    }

    /// Validate every field and build the request body.
    pub fn validate(&self, today: NaiveDate) -> Result<BookingRequest, Vec<FieldError>> {
        let mut errors = collect([validate_required("service_id", &self.service_id)]);
        errors.extend(self.check_details());
        errors.extend(self.check_package(today));
        if !errors.is_empty() {
            return Err(errors);
        }
        let event_date = parse_date("event_date", &self.event_date).map_err(|e| vec![e])?;
        let guests = self.parse_guests().map_err(|e| vec![e])?;
        Ok(BookingRequest {
            service_id: self.service_id.trim().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            event_date,
            venue: self.venue.trim().to_string(),
            package: self.package.clone(),
            guests,
            notes: self.notes.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookingStep {
    #[default]
    Details,
    Package,
    Review,
}

impl BookingStep {
    pub fn number(self) -> u8 {
        match self {
            BookingStep::Details => 1,
            BookingStep::Package => 2,
            BookingStep::Review => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            BookingStep::Details => "Your details",
            BookingStep::Package => "Event & package",
            BookingStep::Review => "Review",
        }
    }
}

/// Result of pressing "Next".
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    Moved(BookingStep),
    Submit(BookingRequest),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingWizard {
    pub step: BookingStep,
    pub form: BookingForm,
}

impl BookingWizard {
    pub fn new(service_id: &str) -> Self {
        Self {
            step: BookingStep::Details,
            form: BookingForm::for_service(service_id),
        }
    }

    /// Validate the current step and move forward, or submit from the last step.
    pub fn next(&mut self, today: NaiveDate) -> Result<Advance, Vec<FieldError>> {
        match self.step {
            BookingStep::Details => {
                let errors = self.form.check_details();
                if !errors.is_empty() {
                    return Err(errors);
                }
                self.step = BookingStep::Package;
                Ok(Advance::Moved(self.step))
            }
            BookingStep::Package => {
                let errors = self.form.check_package(today);
                if !errors.is_empty() {
                    return Err(errors);
                }
                self.step = BookingStep::Review;
                Ok(Advance::Moved(self.step))
            }
            BookingStep::Review => self.form.validate(today).map(Advance::Submit),
        }
    }

    pub fn back(&mut self) {
        self.step = match self.step {
            BookingStep::Details | BookingStep::Package => BookingStep::Details,
            BookingStep::Review => BookingStep::Package,
        };
    }

    /// Back to step one with an empty form for the same service.
    pub fn reset(&mut self) {
        *self = Self::new(&self.form.service_id.clone());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandoffKind {
    Booking,
    Workshop,
}

/// Checkout prefill: shown in the Razorpay form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

/// What the payment page needs from the step before it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentHandoff {
    pub kind: HandoffKind,
    /// Booking id or workshop registration id.
    pub reference_id: String,
    pub amount_paise: u64,
    pub description: String,
    pub prefill: Prefill,
}

impl PaymentHandoff {
    pub fn from_booking(booking: &Booking, service_name: &str) -> Self {
        Self {
            kind: HandoffKind::Booking,
            reference_id: booking.id.clone(),
            amount_paise: u64::from(booking.amount) * 100,
            description: format!("{service_name} ({})", booking.request.package),
            prefill: Prefill {
                name: booking.request.name.clone(),
                email: booking.request.email.clone(),
                contact: booking.request.phone.clone(),
            },
        }
    }

    pub fn from_workshop(registration: &WorkshopRegistration, workshop: &Workshop) -> Self {
        let amount = if registration.amount > 0 {
            registration.amount
        } else {
            workshop.fee
        };
        Self {
            kind: HandoffKind::Workshop,
            reference_id: registration.id.clone(),
            amount_paise: u64::from(amount) * 100,
            description: format!("Workshop: {}", workshop.title),
            prefill: Prefill {
                name: registration.request.name.clone(),
                email: registration.request.email.clone(),
                contact: registration.request.phone.clone(),
            },
        }
    }

    /// Amount formatted in rupees for display.
    pub fn display_amount(&self) -> String {
        format_rupees(self.amount_paise)
    }
}

pub fn format_rupees(paise: u64) -> String {
    let rupees = paise / 100;
    let rem = paise % 100;
    if rem == 0 {
        format!("₹{rupees}")
    } else {
        format!("₹{rupees}.{rem:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 1, 15).unwrap()
    }

    fn filled() -> BookingWizard {
        let mut wizard = BookingWizard::new("svc-1");
        wizard.form.name = "Kavya".into();
        wizard.form.email = "kavya@example.com".into();
        wizard.form.phone = "9876543210".into();
        wizard.form.event_date = "2030-02-14".into();
        wizard.form.venue = "Jaipur".into();
        wizard.form.package = "gold".into();
        wizard
    }

    #[test]
    fn walks_all_steps_then_submits() {
        let mut wizard = filled();
        assert_eq!(wizard.next(today()), Ok(Advance::Moved(BookingStep::Package)));
        assert_eq!(wizard.next(today()), Ok(Advance::Moved(BookingStep::Review)));
        match wizard.next(today()) {
            Ok(Advance::Submit(request)) => {
                assert_eq!(request.service_id, "svc-1");
                assert_eq!(request.phone, "9876543210");
                assert_eq!(request.guests, None);
            }
            other => panic!("expected submit, got {other:?}"),
        }
    }

    #[test]
    fn details_step_blocks_on_bad_phone() {
        let mut wizard = filled();
        wizard.form.phone = "12345".into();
        let errors = wizard.next(today()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "phone");
        assert_eq!(wizard.step, BookingStep::Details);
    }

    #[test]
    fn package_step_rejects_past_date_and_empty_venue() {
        let mut wizard = filled();
        wizard.form.event_date = "2030-01-14".into();
        wizard.form.venue = " ".into();
        wizard.next(today()).unwrap();
        let errors = wizard.next(today()).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, ["event_date", "venue"]);
        assert_eq!(wizard.step, BookingStep::Package);
    }

    #[test]
    fn full_validation_reports_every_empty_field() {
        let errors = BookingForm::default().validate(today()).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            ["service_id", "name", "email", "phone", "event_date", "venue", "package"]
        );
    }

    #[test]
    fn guests_must_be_positive() {
        let mut form = filled().form;
        form.guests = "0".into();
        assert!(form.validate(today()).is_err());
        form.guests = "250".into();
        assert_eq!(form.validate(today()).unwrap().guests, Some(250));
    }

    #[test]
    fn back_and_reset() {
        let mut wizard = filled();
        wizard.next(today()).unwrap();
        wizard.next(today()).unwrap();
        wizard.back();
        assert_eq!(wizard.step, BookingStep::Package);
        wizard.back();
        wizard.back();
        assert_eq!(wizard.step, BookingStep::Details);
        wizard.reset();
        assert_eq!(wizard, BookingWizard::new("svc-1"));
    }

    #[test]
    fn handoff_converts_rupees_to_paise() {
        let request = filled().form.validate(today()).unwrap();
        let booking = Booking {
            id: "b-9".into(),
            request,
            status: "pending".into(),
            amount: 25000,
        };
        let handoff = PaymentHandoff::from_booking(&booking, "Bridal makeup");
        assert_eq!(handoff.kind, HandoffKind::Booking);
        assert_eq!(handoff.reference_id, "b-9");
        assert_eq!(handoff.amount_paise, 2_500_000);
        assert_eq!(handoff.description, "Bridal makeup (gold)");
        assert_eq!(handoff.prefill.contact, "9876543210");
        assert_eq!(handoff.display_amount(), "₹25000");
        assert_eq!(format_rupees(1050), "₹10.50");
    }
}
