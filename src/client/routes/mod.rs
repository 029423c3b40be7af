pub mod calendar;
pub mod events;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;

pub use calendar::Calendar;
pub use events::Events;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use profile::Profile;
