//! Elements > Buttons

use crate::locator::Locator;

pub const DOUBLE_CLICK_BUTTON: Locator = Locator::id("doubleClickBtn");
pub const RIGHT_CLICK_BUTTON: Locator = Locator::id("rightClickBtn");
// The dynamic button gets a generated id on every load
pub const DYNAMIC_CLICK_BUTTON: Locator = Locator::xpath("//button[text()='Click Me']");

pub const DOUBLE_CLICK_MESSAGE: Locator = Locator::id("doubleClickMessage");
pub const RIGHT_CLICK_MESSAGE: Locator = Locator::id("rightClickMessage");
pub const DYNAMIC_CLICK_MESSAGE: Locator = Locator::id("dynamicClickMessage");
