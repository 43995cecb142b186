use folio_core::contact::{ContactField, ContactMessage};

/// Where the contact form is in its submit lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    Sending,
    Sent,
    Failed(String),
}

/// Contact form state: field buffers, focus, validation errors, send status
#[derive(Debug, Clone)]
pub struct ContactForm {
    name: String,
    email: String,
    phone: String,
    message: String,
    pub focused: ContactField,
    pub errors: Vec<(ContactField, String)>,
    pub status: FormStatus,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            message: String::new(),
            focused: ContactField::Name,
            errors: Vec::new(),
            status: FormStatus::Editing,
        }
    }
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Message => &mut self.message,
        }
    }

    /// First validation error for a field, if any
    pub fn error_for(&self, field: ContactField) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, e)| e.as_str())
    }

    pub fn is_sending(&self) -> bool {
        self.status == FormStatus::Sending
    }

    pub fn input_char(&mut self, c: char) {
        if self.is_sending() {
            return;
        }
        if matches!(self.status, FormStatus::Sent | FormStatus::Failed(_)) {
            self.status = FormStatus::Editing;
        }
        let field = self.focused;
        self.value_mut(field).push(c);
        self.errors.retain(|(f, _)| *f != field);
    }

    pub fn backspace(&mut self) {
        if self.is_sending() {
            return;
        }
        let field = self.focused;
        self.value_mut(field).pop();
    }

    pub fn next_field(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn prev_field(&mut self) {
        self.focused = self.focused.previous();
    }

    /// Validate and, if clean, move to `Sending` and hand back the message
    pub fn submit(&mut self) -> Option<ContactMessage> {
        if self.is_sending() {
            return None;
        }
        let phone = Some(self.phone.as_str());
        let message = ContactMessage::new(&self.name, &self.email, phone, &self.message);
        self.errors = message.field_errors();
        if let Some((field, _)) = self.errors.first() {
            self.focused = *field;
            self.status = FormStatus::Editing;
            return None;
        }
        self.status = FormStatus::Sending;
        Some(message)
    }

    /// Record the relay outcome; a successful send clears the fields
    pub fn finish(&mut self, result: Result<(), String>) {
        match result {
            Ok(()) => {
                *self = Self {
                    status: FormStatus::Sent,
                    ..Self::default()
                };
            }
            Err(error) => self.status = FormStatus::Failed(error),
        }
    }
}
