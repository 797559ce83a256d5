pub mod notifications;

pub use notifications::{notify, NativeNotifier};
