//! Book Store Application > Login

use crate::locator::Locator;

pub const USERNAME_INPUT: Locator = Locator::id("userName");
pub const PASSWORD_INPUT: Locator = Locator::id("password");
pub const LOGIN_BUTTON: Locator = Locator::id("login");
pub const ERROR_MESSAGE: Locator = Locator::id("name");
/// Only rendered for a logged-in user
pub const LOGOUT_BUTTON: Locator = Locator::id("submit");
