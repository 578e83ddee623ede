/// Router Module Index
///
/// Routes are split by access level. Admin API handlers extract
/// `AdminSession`, admin screens extract `AdminPage`.

/// Anonymous JSON API: reads, public forms, sign-in.
pub mod public;

/// Privileged JSON API (create / update / delete / upload). Each handler checks
/// the session first; a request without a valid session gets a 401.
pub mod admin;

/// Public page renderers under `/pages`.
pub mod pages;

/// Admin screens under `/admin`. Each renderer redirects to the login page
/// when there is no session.
pub mod admin_pages;
