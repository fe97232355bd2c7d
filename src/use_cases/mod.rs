// Use cases layer: login, current-guest and logout workflows.

pub mod current_guest;
pub mod guest_login;
pub mod logout;
#[cfg(test)]
pub(crate) mod test_support;
