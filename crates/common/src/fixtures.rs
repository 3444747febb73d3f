//! Literal test inputs used by the DemoQA suite

use serde::Serialize;

/// Login credentials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: &'static str,
    pub password: &'static str,
}

pub const VALID_USER: Credentials = Credentials {
    username: "testuser",
    password: "Test@123",
};

/// Credentials expected to be rejected
pub const INVALID_USER: Credentials = Credentials {
    username: "invaliduser",
    password: "wrongpass",
};

/// Input for the Elements > Text Box form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextBoxRecord {
    pub full_name: &'static str,
    pub email: &'static str,
    pub current_address: &'static str,
    pub permanent_address: &'static str,
}

pub const TEXT_BOX: TextBoxRecord = TextBoxRecord {
    full_name: "John Doe",
    email: "john.doe@example.com",
    current_address: "123 Main Street, New York, NY 10001",
    permanent_address: "456 Oak Avenue, Los Angeles, CA 90001",
};

/// A row for the Elements > Web Tables registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WebTableRecord {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: &'static str,
    pub age: &'static str,
    pub salary: &'static str,
    pub department: &'static str,
}

pub const WEB_TABLE_RECORD: WebTableRecord = WebTableRecord {
    first_name: "Jane",
    last_name: "Smith",
    email: "jane.smith@example.com",
    age: "30",
    salary: "75000",
    department: "QA",
};

/// Gender radio options on the practice form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Map a label to an option; anything that is not male/female is `Other`
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => Gender::Other,
        }
    }
}

/// Hobby checkboxes on the practice form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Hobby {
    Sports,
    Reading,
    Music,
}

impl Hobby {
    /// Map a label to a checkbox; anything that is not sports/reading is `Music`
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "sports" => Hobby::Sports,
            "reading" => Hobby::Reading,
            _ => Hobby::Music,
        }
    }
}

/// Input for the Forms > Practice Form student registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PracticeFormRecord {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: &'static str,
    pub gender: Gender,
    /// Ten digits
    pub mobile: &'static str,
    /// `DD Mon YYYY`, e.g. `15 Jan 1995`
    pub date_of_birth: &'static str,
    pub subjects: &'static str,
    pub hobby: Hobby,
    pub current_address: &'static str,
}

pub const PRACTICE_FORM: PracticeFormRecord = PracticeFormRecord {
    first_name: "Alice",
    last_name: "Johnson",
    email: "alice.johnson@example.com",
    gender: Gender::Female,
    mobile: "1234567890",
    date_of_birth: "15 Jan 1995",
    subjects: "Maths",
    hobby: Hobby::Reading,
    current_address: "789 Pine Road, Chicago, IL 60601",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_from_label() {
        assert_eq!(Gender::from_label("Male"), Gender::Male);
        assert_eq!(Gender::from_label(" FEMALE "), Gender::Female);
        assert_eq!(Gender::from_label("nonbinary"), Gender::Other);
    }

    #[test]
    fn test_hobby_from_label() {
        assert_eq!(Hobby::from_label("sports"), Hobby::Sports);
        assert_eq!(Hobby::from_label("Reading"), Hobby::Reading);
        assert_eq!(Hobby::from_label("chess"), Hobby::Music);
    }

    #[test]
    fn test_practice_form_mobile_is_ten_digits() {
        assert_eq!(PRACTICE_FORM.mobile.len(), 10);
        assert!(PRACTICE_FORM.mobile.chars().all(|c| c.is_ascii_digit()));
    }
}
