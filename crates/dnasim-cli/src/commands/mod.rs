pub mod codec;
pub mod presets;
pub mod serve;

pub use codec::{handle_binary, handle_decode, handle_encode};
pub use presets::handle_presets;
pub use serve::handle_serve;
