//! Elements > Text Box

use crate::locator::Locator;

pub const FULL_NAME_INPUT: Locator = Locator::id("userName");
pub const EMAIL_INPUT: Locator = Locator::id("userEmail");
pub const CURRENT_ADDRESS_INPUT: Locator = Locator::id("currentAddress");
pub const PERMANENT_ADDRESS_INPUT: Locator = Locator::id("permanentAddress");
pub const SUBMIT_BUTTON: Locator = Locator::id("submit");

// Output region rendered after submit. The address paragraphs reuse the
// input ids, hence the tag-qualified selectors.
pub const OUTPUT_NAME: Locator = Locator::id("name");
pub const OUTPUT_EMAIL: Locator = Locator::id("email");
pub const OUTPUT_CURRENT_ADDRESS: Locator = Locator::css("p#currentAddress");
pub const OUTPUT_PERMANENT_ADDRESS: Locator = Locator::css("p#permanentAddress");
pub const OUTPUT_BOX: Locator = Locator::id("output");
