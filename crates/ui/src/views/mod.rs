mod home;
mod practice;
mod state;
mod visuals;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use practice::TopicView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use visuals::VisualView;
