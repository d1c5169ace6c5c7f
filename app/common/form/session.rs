use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormState {
	Editing,
	Submitting,
	/// The submission succeeded and the page navigates away.
	Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
	#[error("the form has errors that block submission")]
	Blocked,
	#[error("the form is already being submitted")]
	AlreadySubmitting,
	#[error("the form was already submitted")]
	Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldErrorCode {
	Required,
	Invalid,
	Unique,
	NotFound,
	GraphqlError,
}

/// An error about one field, or about the whole form when `field` is `None`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
	pub field: Option<String>,
	pub code: FieldErrorCode,
	pub message: String,
}

impl FieldError {
	pub fn new(field: &str, code: FieldErrorCode, message: impl Into<String>) -> FieldError {
		FieldError {
			field: Some(field.to_owned()),
			code,
			message: message.into(),
		}
	}
}

/// The edit state of one entity: the values it was opened with, the values being edited, and the errors attached to them.
#[derive(Clone, Debug)]
pub struct FormSession<D> {
	initial: D,
	data: D,
	state: FormState,
	errors: BTreeMap<String, FieldError>,
	form_errors: Vec<FieldError>,
}

impl<D: Clone + PartialEq> FormSession<D> {
	pub fn new(initial: D) -> FormSession<D> {
		FormSession {
			data: initial.clone(),
			initial,
			state: FormState::Editing,
			errors: BTreeMap::new(),
			form_errors: Vec::new(),
		}
	}

	pub fn data(&self) -> &D {
		&self.data
	}

	pub fn initial(&self) -> &D {
		&self.initial
	}

	pub fn state(&self) -> FormState {
		self.state
	}

	/// Edits one field. Editing a field clears its error.
	pub fn change(&mut self, field: &str, update: impl FnOnce(&mut D)) {
		update(&mut self.data);
		self.clear_error(field);
	}

	/// Edits several fields at once without touching their errors.
	pub fn set(&mut self, update: impl FnOnce(&mut D)) {
		update(&mut self.data);
	}

	pub fn has_changed(&self) -> bool {
		self.data != self.initial
	}

	pub fn is_save_disabled(&self, disabled: bool) -> bool {
		disabled || self.state != FormState::Editing
	}

	pub fn set_error(&mut self, error: FieldError) {
		match &error.field {
			Some(field) => {
				self.errors.insert(field.clone(), error);
			}
			None => self.form_errors.push(error),
		}
	}

	pub fn clear_error(&mut self, field: &str) {
		self.errors.remove(field);
	}

	pub fn clear_errors(&mut self) {
		self.errors.clear();
		self.form_errors.clear();
	}

	pub fn error(&self, field: &str) -> Option<&FieldError> {
		self.errors.get(field)
	}

	pub fn errors(&self) -> &BTreeMap<String, FieldError> {
		&self.errors
	}

	pub fn form_errors(&self) -> &[FieldError] {
		&self.form_errors
	}

	/// Starts a submission and builds its payload with `handle`. Any field error blocks the submission and leaves the form editing.
	pub fn submit<P>(&mut self, handle: impl FnOnce(&D) -> P) -> Result<P, FormError> {
		match self.state {
			FormState::Submitting => return Err(FormError::AlreadySubmitting),
			FormState::Finished => return Err(FormError::Finished),
			FormState::Editing => {}
		}
		if !self.errors.is_empty() {
			return Err(FormError::Blocked);
		}
		self.form_errors.clear();
		self.state = FormState::Submitting;
		Ok(handle(&self.data))
	}

	/// Records a failed submission and returns to editing. Errors about a field in `known_fields` attach to it, the rest become form errors.
	pub fn fail(&mut self, errors: Vec<FieldError>, known_fields: &[&str]) {
		self.state = FormState::Editing;
		for mut error in errors {
			let known = error
				.field
				.as_deref()
				.map(|field| known_fields.contains(&field))
				.unwrap_or(false);
			if !known {
				error.field = None;
			}
			self.set_error(error);
		}
	}

	pub fn succeed(&mut self) {
		self.state = FormState::Finished;
	}

	pub fn into_data(self) -> D {
		self.data
	}
}

#[cfg(test)]
#[derive(Clone, Debug, Default, PartialEq)]
struct Draft {
	name: String,
	slug: String,
}

#[test]
fn test_change_tracking() {
	let mut session = FormSession::new(Draft::default());
	assert!(!session.has_changed());
	session.set_error(FieldError::new("name", FieldErrorCode::Required, "required"));
	session.change("name", |data| data.name = "Size".to_owned());
	assert!(session.has_changed());
	assert!(session.error("name").is_none());
	session.change("name", |data| data.name = String::new());
	assert!(!session.has_changed());
}

#[test]
fn test_submit_is_blocked_by_errors() {
	let mut session = FormSession::new(Draft::default());
	session.set_error(FieldError::new("name", FieldErrorCode::Required, "required"));
	assert_eq!(session.submit(|data| data.clone()), Err(FormError::Blocked));
	assert_eq!(session.state(), FormState::Editing);
	session.clear_errors();
	let payload = session.submit(|data| data.name.clone()).unwrap();
	assert_eq!(payload, "");
	assert!(session.is_save_disabled(false));
	assert_eq!(
		session.submit(|_| ()),
		Err(FormError::AlreadySubmitting)
	);
}

#[test]
fn test_fail_and_succeed() {
	let mut session = FormSession::new(Draft::default());
	session.submit(|_| ()).unwrap();
	session.fail(
		vec![
			FieldError::new("slug", FieldErrorCode::Unique, "taken"),
			FieldError::new("weight", FieldErrorCode::Invalid, "nope"),
		],
		&["name", "slug"],
	);
	assert_eq!(session.state(), FormState::Editing);
	assert_eq!(session.error("slug").unwrap().code, FieldErrorCode::Unique);
	assert_eq!(session.form_errors().len(), 1);
	assert_eq!(session.form_errors()[0].field, None);
	assert!(!session.is_save_disabled(false));
	session.clear_error("slug");
	session.submit(|_| ()).unwrap();
	session.succeed();
	assert_eq!(session.submit(|_| ()), Err(FormError::Finished));
}
