//! Leptos context wiring for [`DriveServices`].

use leptos::{provide_context, use_context};

use crate::adapters::DriveServices;

/// Makes `services` available to every page component below the current owner.
pub fn provide_drive_services(services: DriveServices) {
    provide_context(services);
}

/// Returns the [`DriveServices`] provided by the site root.
///
/// # Panics
///
/// Panics if called outside a tree where [`provide_drive_services`] ran.
pub fn use_drive_services() -> DriveServices {
    use_context::<DriveServices>().expect("DriveServices not provided")
}
