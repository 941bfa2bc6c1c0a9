pub mod listener;
pub mod pointer;
pub mod scroll;

pub use listener::EventListener;
pub use pointer::PointerSource;
pub use scroll::ScrollSource;
