/// The Elm Architecture (TEA) pattern implementation for the order form
///
/// State lives in a single `Model`, user input arrives as `Message`s and
/// `update` is the only place where the model changes. The view in
/// `crate::ui` reads the model and never mutates it.

pub mod message;
pub mod model;
pub mod update;

pub use message::Message;
pub use model::{Alert, Model, Overlay};
pub use update::update;
